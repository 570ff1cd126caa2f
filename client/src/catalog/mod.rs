//! The prompt catalog: types, static sample data, and pure filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no persistence layer; the catalog is fixed sample data and pages
//! compose views over it. Anything that looks like a query lives here as a
//! pure function so it can be tested without a browser.

pub mod filter;
pub mod sample;
pub mod types;
