//! Static sample catalog.
//!
//! DESIGN
//! ======
//! Everything a real deployment would fetch from a backend is fixed data
//! here. Builders return fresh owned values so pages can hold them in
//! signals and mutate their local copies (the admin tables do).

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use crate::session::user::Role;

use super::types::{
    AccountStatus, Category, Comment, PendingRow, Prompt, PromptRow, PromptStatus, SimilarPrompt,
    TagCount, UserRow,
};

#[allow(clippy::too_many_arguments)]
fn prompt(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    template: &str,
    author: &str,
    favorites: u32,
    uses: u32,
) -> Prompt {
    Prompt {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        template: template.to_owned(),
        author: author.to_owned(),
        favorites,
        uses,
        example: None,
    }
}

/// Prompts shown on the Popular tab, most-favorited first.
pub fn popular_prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            example: Some(
                "Example: Using the prompt with theme='redemption', setting='post-apocalyptic \
                 world', character trait='seeking forgiveness', you'll get a story about a \
                 character seeking redemption in a post-apocalyptic setting."
                    .to_owned(),
            ),
            ..prompt(
                "1",
                "Creative Story Generator",
                "Generate a creative short story based on a few keywords",
                "Creative Writing",
                &["story", "creative", "fiction"],
                "Write a short story about {theme} set in {setting} with a character who is {character trait}.",
                "Sarah Johnson",
                245,
                1024,
            )
        },
        Prompt {
            example: Some(
                "Example: When you input a complex algorithm, the AI will break it down into \
                 simple concepts, explaining each part's purpose and how they work together."
                    .to_owned(),
            ),
            ..prompt(
                "2",
                "Code Explainer",
                "Explain complex code in simple terms",
                "Programming",
                &["code", "explanation", "programming"],
                "Explain this code as if you're teaching a beginner: {code}",
                "Michael Chen",
                189,
                876,
            )
        },
        prompt(
            "3",
            "Email Composer",
            "Create professional emails quickly",
            "Business",
            &["email", "professional", "business"],
            "Write a professional email to {recipient} about {topic} with a {tone} tone.",
            "Emma Williams",
            156,
            723,
        ),
        prompt(
            "4",
            "Product Description",
            "Generate compelling product descriptions",
            "Marketing",
            &["product", "marketing", "description"],
            "Write a compelling product description for {product} highlighting its {feature} and appealing to {target audience}.",
            "David Miller",
            132,
            651,
        ),
        prompt(
            "5",
            "Learning Concept Simplifier",
            "Explain complex concepts in simple terms",
            "Education",
            &["learning", "explanation", "education"],
            "Explain {complex concept} in simple terms as if you're teaching a {age} year old.",
            "Lisa Taylor",
            124,
            592,
        ),
        prompt(
            "6",
            "Recipe Creator",
            "Generate recipes based on ingredients",
            "Food",
            &["recipe", "cooking", "food"],
            "Create a recipe using these ingredients: {ingredients}. The dish should be {cuisine} style and {dietary restriction} friendly.",
            "James Wilson",
            118,
            547,
        ),
    ]
}

/// Prompts shown on the Recent tab, newest first.
pub fn recent_prompts() -> Vec<Prompt> {
    vec![
        prompt(
            "7",
            "Social Media Post Generator",
            "Create engaging social media content",
            "Marketing",
            &["social media", "content", "marketing"],
            "Generate a {platform} post about {topic} that will engage {target audience}. Include relevant hashtags.",
            "Olivia Brown",
            87,
            412,
        ),
        prompt(
            "8",
            "Interview Question Preparer",
            "Prepare answers for common interview questions",
            "Career",
            &["interview", "career", "preparation"],
            "Help me prepare an answer for the interview question: {question}. I'm applying for a {job title} position.",
            "Daniel Lee",
            76,
            389,
        ),
        prompt(
            "9",
            "Study Notes Generator",
            "Create concise study notes on any topic",
            "Education",
            &["study", "notes", "education"],
            "Generate concise study notes on {topic} covering the key concepts, definitions, and examples.",
            "Sophia Martinez",
            65,
            342,
        ),
        prompt(
            "10",
            "Workout Plan Creator",
            "Generate personalized workout plans",
            "Fitness",
            &["workout", "fitness", "health"],
            "Create a {duration} workout plan for {fitness level} focusing on {goal}. Include exercises, sets, and reps.",
            "Ryan Thompson",
            58,
            321,
        ),
        prompt(
            "11",
            "Travel Itinerary Planner",
            "Plan detailed travel itineraries",
            "Travel",
            &["travel", "itinerary", "planning"],
            "Create a {duration} day itinerary for {destination} for a traveler interested in {interests}. Include recommendations for accommodations, activities, and dining.",
            "Jessica Clark",
            52,
            298,
        ),
        prompt(
            "12",
            "Debate Argument Generator",
            "Generate strong arguments for debates",
            "Education",
            &["debate", "argument", "persuasion"],
            "Generate strong arguments for and against the statement: {statement}. Include supporting evidence and potential counterarguments.",
            "Andrew Wilson",
            47,
            276,
        ),
    ]
}

/// Prompts shown on the Favorites tab: the popular entries the sample
/// account has bookmarked.
pub fn favorite_prompts() -> Vec<Prompt> {
    popular_prompts()
        .into_iter()
        .filter(|p| matches!(p.id.as_str(), "1" | "3" | "5"))
        .collect()
}

/// Prompts submitted by the sample signed-in account.
pub fn user_submissions() -> Vec<Prompt> {
    vec![
        prompt(
            "101",
            "Personal Bio Generator",
            "Create professional personal bios for various platforms",
            "Business",
            &["bio", "professional", "personal"],
            "Write a professional bio for {name} who is a {profession} with {years} years of experience. The bio should highlight their expertise in {skills} and be suitable for {platform}.",
            "Current User",
            24,
            156,
        ),
        prompt(
            "102",
            "Book Summary Creator",
            "Generate concise book summaries",
            "Education",
            &["books", "summary", "learning"],
            "Create a concise summary of the book '{title}' by {author}. Include the main themes, key takeaways, and why someone might want to read it.",
            "Current User",
            18,
            132,
        ),
    ]
}

/// Every prompt the detail page can resolve.
pub fn all_prompts() -> Vec<Prompt> {
    let mut all = popular_prompts();
    all.extend(recent_prompts());
    all.extend(user_submissions());
    all
}

/// Look up a prompt by id.
pub fn find_prompt(id: &str) -> Option<Prompt> {
    all_prompts().into_iter().find(|p| p.id == id)
}

/// Prompt for the detail page; unknown ids fall back to the first sample
/// entry rather than erroring.
pub fn resolve_detail(id: &str) -> Prompt {
    find_prompt(id).unwrap_or_else(|| {
        popular_prompts()
            .into_iter()
            .next()
            .unwrap_or_else(|| prompt("0", "", "", "", &[], "", "", 0, 0))
    })
}

/// Categories with usage counts for the sidebar and the admin table.
pub fn categories() -> Vec<Category> {
    let rows: [(&str, &str, &str, u32, &str); 8] = [
        ("c1", "Creative Writing", "creative-writing", 42, "2023-01-10"),
        ("c2", "Programming", "programming", 38, "2023-01-10"),
        ("c3", "Business", "business", 35, "2023-01-15"),
        ("c4", "Marketing", "marketing", 31, "2023-01-20"),
        ("c5", "Education", "education", 28, "2023-02-05"),
        ("c6", "Food", "food", 24, "2023-02-12"),
        ("c7", "Travel", "travel", 21, "2023-02-20"),
        ("c8", "Fitness", "fitness", 18, "2023-03-01"),
    ];
    rows.into_iter()
        .map(|(id, name, slug, count, created)| Category {
            id: id.to_owned(),
            name: name.to_owned(),
            slug: slug.to_owned(),
            count,
            created: created.to_owned(),
        })
        .collect()
}

/// Most-used tags for the sidebar.
pub fn popular_tags() -> Vec<TagCount> {
    let rows: [(&str, u32); 8] = [
        ("story", 35),
        ("code", 32),
        ("email", 29),
        ("marketing", 27),
        ("explanation", 25),
        ("business", 23),
        ("education", 21),
        ("creative", 19),
    ];
    rows.into_iter()
        .map(|(name, count)| TagCount {
            name: name.to_owned(),
            count,
        })
        .collect()
}

/// Published/draft prompts for the admin moderation table.
pub fn prompt_rows() -> Vec<PromptRow> {
    let rows: [(&str, &str, &str, &str, PromptStatus, &str); 5] = [
        ("1", "Creative Story Generator", "Creative Writing", "Sarah Johnson", PromptStatus::Published, "2023-03-15"),
        ("2", "Code Explainer", "Programming", "Michael Chen", PromptStatus::Published, "2023-04-22"),
        ("3", "Email Composer", "Business", "Emma Williams", PromptStatus::Published, "2023-05-10"),
        ("4", "Product Description", "Marketing", "David Miller", PromptStatus::Published, "2023-06-05"),
        ("5", "Learning Concept Simplifier", "Education", "Lisa Taylor", PromptStatus::Draft, "2023-07-18"),
    ];
    rows.into_iter()
        .map(|(id, title, category, author, status, date)| PromptRow {
            id: id.to_owned(),
            title: title.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            status,
            date: date.to_owned(),
        })
        .collect()
}

/// Submissions awaiting moderation.
pub fn pending_rows() -> Vec<PendingRow> {
    let rows: [(&str, &str, &str, &str, &str); 3] = [
        ("p1", "Interview Question Generator", "Career", "Robert Johnson", "2023-08-12"),
        ("p2", "Technical Documentation Writer", "Programming", "Jennifer Lee", "2023-08-14"),
        ("p3", "Marketing Campaign Ideas", "Marketing", "Thomas Wilson", "2023-08-15"),
    ];
    rows.into_iter()
        .map(|(id, title, category, author, submitted)| PendingRow {
            id: id.to_owned(),
            title: title.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            submitted: submitted.to_owned(),
        })
        .collect()
}

/// Accounts for the admin users table.
pub fn user_rows() -> Vec<UserRow> {
    let rows: [(&str, &str, &str, Role, AccountStatus, &str); 4] = [
        ("u1", "John Doe", "john.doe@example.com", Role::User, AccountStatus::Active, "2023-01-15"),
        ("u2", "Jane Smith", "jane.smith@example.com", Role::User, AccountStatus::Active, "2023-02-22"),
        ("u3", "Robert Johnson", "robert.johnson@example.com", Role::User, AccountStatus::Inactive, "2023-03-10"),
        ("u4", "Admin User", "cpnow2@yahoo.com", Role::Admin, AccountStatus::Active, "2023-01-05"),
    ];
    rows.into_iter()
        .map(|(id, name, email, role, status, joined)| UserRow {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            status,
            joined: joined.to_owned(),
        })
        .collect()
}

/// Reader comments shown on the detail page.
pub fn comments() -> Vec<Comment> {
    let rows: [(&str, &str, &str, &str); 3] = [
        (
            "1",
            "Alex Thompson",
            "2 days ago",
            "This prompt is amazing! I used it to generate a story for my creative writing class and got an A+. Thank you for sharing!",
        ),
        (
            "2",
            "Jamie Lee",
            "1 week ago",
            "I've been using this prompt for a month now and it consistently produces great results. Highly recommended for anyone looking to improve their storytelling.",
        ),
        (
            "3",
            "Taylor Wilson",
            "2 weeks ago",
            "Would be better if it had more options for character development. Still pretty good though.",
        ),
    ];
    rows.into_iter()
        .map(|(id, author, date, content)| Comment {
            id: id.to_owned(),
            author: author.to_owned(),
            avatar: "/placeholder.svg?height=40&width=40".to_owned(),
            date: date.to_owned(),
            content: content.to_owned(),
        })
        .collect()
}

/// Related-prompt links for the detail sidebar.
pub fn similar_prompts() -> Vec<SimilarPrompt> {
    let rows: [(&str, &str, &str); 4] = [
        ("3", "Character Development Prompt", "Create detailed character profiles for your stories"),
        ("4", "Plot Twist Generator", "Generate unexpected plot twists for your narratives"),
        ("5", "Dialogue Creator", "Create realistic dialogue between characters"),
        ("6", "Setting Description", "Generate vivid descriptions of story settings"),
    ];
    rows.into_iter()
        .map(|(id, title, description)| SimilarPrompt {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
        })
        .collect()
}
