//! Admin moderation dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-gated route. Tables start from the sample data and are mutated
//! locally: approving moves a pending submission into the published list,
//! rejecting and deleting drop rows. Every action reports through the toast
//! stack. Non-admins are turned away with an access-denied toast.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::catalog::sample;
use crate::catalog::types::{PendingRow, PromptRow, PromptStatus};
use crate::components::site_header::SiteHeader;
use crate::session::user::Role;
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState, ToastVariant};

/// Dashboard tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Prompts,
    Pending,
    Users,
    Categories,
}

impl AdminTab {
    fn label(self) -> &'static str {
        match self {
            Self::Prompts => "prompts",
            Self::Pending => "pending",
            Self::Users => "users",
            Self::Categories => "categories",
        }
    }
}

/// Move a pending submission into the published list. Returns false when the
/// id is unknown (already moderated).
fn approve_pending(pending: &mut Vec<PendingRow>, prompts: &mut Vec<PromptRow>, id: &str) -> bool {
    let Some(pos) = pending.iter().position(|row| row.id == id) else {
        return false;
    };
    let row = pending.remove(pos);
    prompts.push(PromptRow {
        id: row.id,
        title: row.title,
        category: row.category,
        author: row.author,
        status: PromptStatus::Published,
        date: row.submitted,
    });
    true
}

/// Drop a pending submission without publishing it.
fn reject_pending(pending: &mut Vec<PendingRow>, id: &str) -> bool {
    let before = pending.len();
    pending.retain(|row| row.id != id);
    pending.len() != before
}

/// Remove a published prompt outright.
fn delete_prompt(prompts: &mut Vec<PromptRow>, id: &str) -> bool {
    let before = prompts.len();
    prompts.retain(|row| row.id != id);
    prompts.len() != before
}

/// Case-insensitive search across a row's visible fields. An empty query
/// matches everything.
fn row_matches(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(&query))
}

/// Admin dashboard page. Redirects non-admins away.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Unauthenticated visitors go to sign-in; signed-in non-admins go home
    // with an access-denied toast.
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        match state.user {
            None => navigate_away("/signin", NavigateOptions::default()),
            Some(user) if user.role != Role::Admin => {
                toasts::notify(
                    toasts,
                    "Access Denied",
                    "You don't have permission to access the admin dashboard.",
                    ToastVariant::Destructive,
                );
                navigate_away("/", NavigateOptions::default());
            }
            Some(_) => {}
        }
    });

    let tab = RwSignal::new(AdminTab::Prompts);
    let query = RwSignal::new(String::new());
    let prompts = RwSignal::new(sample::prompt_rows());
    let pending = RwSignal::new(sample::pending_rows());
    let users = RwSignal::new(sample::user_rows());
    let categories = RwSignal::new(sample::categories());

    let on_approve = move |id: String| {
        let mut moved = false;
        pending.update(|pending_rows| {
            prompts.update(|prompt_rows| {
                moved = approve_pending(pending_rows, prompt_rows, &id);
            });
        });
        if moved {
            toasts::notify(
                toasts,
                "Prompt approved",
                &format!("Prompt ID: {id} has been approved and published."),
                ToastVariant::Info,
            );
        }
    };

    let on_reject = move |id: String| {
        let mut dropped = false;
        pending.update(|pending_rows| dropped = reject_pending(pending_rows, &id));
        if dropped {
            toasts::notify(
                toasts,
                "Prompt rejected",
                &format!("Prompt ID: {id} has been rejected."),
                ToastVariant::Info,
            );
        }
    };

    let on_delete = move |id: String| {
        let mut dropped = false;
        prompts.update(|prompt_rows| dropped = delete_prompt(prompt_rows, &id));
        if dropped {
            toasts::notify(
                toasts,
                "Prompt deleted",
                &format!("Prompt ID: {id} has been deleted."),
                ToastVariant::Info,
            );
        }
    };

    let tab_button = move |target: AdminTab, label: &'static str| {
        view! {
            <button
                class="admin-tab"
                class:admin-tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="admin-page">
            <SiteHeader/>
            <Show
                when=move || auth.get().is_admin()
                fallback=move || {
                    view! {
                        <p class="page-loading">
                            {move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}
                        </p>
                    }
                }
            >
                <div class="page-container">
                    <h1>"Admin Dashboard"</h1>
                    <p class="admin-page__subtitle">"Manage prompts, users, and site content"</p>

                    <div class="admin-toolbar">
                        <div class="admin-tabs">
                            {tab_button(AdminTab::Prompts, "Prompts")}
                            {tab_button(AdminTab::Pending, "Pending Approval")}
                            {tab_button(AdminTab::Users, "Users")}
                            {tab_button(AdminTab::Categories, "Categories")}
                        </div>
                        <input
                            class="search-input"
                            type="search"
                            placeholder=move || format!("Search {}...", tab.get().label())
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || tab.get() == AdminTab::Prompts>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Author"</th>
                                    <th>"Status"</th>
                                    <th>"Date"</th>
                                    <th class="admin-table__actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let q = query.get();
                                    prompts
                                        .get()
                                        .into_iter()
                                        .filter(|row| {
                                            row_matches(&q, &[&row.title, &row.category, &row.author])
                                        })
                                        .map(|row| {
                                            let id = row.id.clone();
                                            view! {
                                                <tr>
                                                    <td class="admin-table__strong">{row.title}</td>
                                                    <td>{row.category}</td>
                                                    <td>{row.author}</td>
                                                    <td>
                                                        <span
                                                            class="admin-badge"
                                                            class:admin-badge--published=(row.status
                                                                == PromptStatus::Published)
                                                        >
                                                            {row.status.label()}
                                                        </span>
                                                    </td>
                                                    <td>{row.date}</td>
                                                    <td class="admin-table__actions">
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete(id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>

                    <Show when=move || tab.get() == AdminTab::Pending>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Author"</th>
                                    <th>"Submitted"</th>
                                    <th class="admin-table__actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let q = query.get();
                                    pending
                                        .get()
                                        .into_iter()
                                        .filter(|row| {
                                            row_matches(&q, &[&row.title, &row.category, &row.author])
                                        })
                                        .map(|row| {
                                            let approve_id = row.id.clone();
                                            let reject_id = row.id.clone();
                                            view! {
                                                <tr>
                                                    <td class="admin-table__strong">{row.title}</td>
                                                    <td>{row.category}</td>
                                                    <td>{row.author}</td>
                                                    <td>{row.submitted}</td>
                                                    <td class="admin-table__actions">
                                                        <button
                                                            class="btn"
                                                            title="Approve"
                                                            on:click=move |_| on_approve(approve_id.clone())
                                                        >
                                                            "✓"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            title="Reject"
                                                            on:click=move |_| on_reject(reject_id.clone())
                                                        >
                                                            "✕"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>

                    <Show when=move || tab.get() == AdminTab::Users>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Joined"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let q = query.get();
                                    users
                                        .get()
                                        .into_iter()
                                        .filter(|row| row_matches(&q, &[&row.name, &row.email]))
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td class="admin-table__strong">{row.name}</td>
                                                    <td>{row.email}</td>
                                                    <td>{row.role.label()}</td>
                                                    <td>
                                                        <span
                                                            class="admin-badge"
                                                            class:admin-badge--published=(row.status
                                                                == crate::catalog::types::AccountStatus::Active)
                                                        >
                                                            {row.status.label()}
                                                        </span>
                                                    </td>
                                                    <td>{row.joined}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>

                    <Show when=move || tab.get() == AdminTab::Categories>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Slug"</th>
                                    <th>"Prompts"</th>
                                    <th>"Created"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let q = query.get();
                                    categories
                                        .get()
                                        .into_iter()
                                        .filter(|row| row_matches(&q, &[&row.name, &row.slug]))
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td class="admin-table__strong">{row.name}</td>
                                                    <td>{row.slug}</td>
                                                    <td>{row.count}</td>
                                                    <td>{row.created}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
