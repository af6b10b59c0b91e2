//! Analyzes the favorites, loves, views and comments of Scratchers.
//!
//! One pass per user: discover the user's project ids from their
//! project-listing page, fetch per-project metrics from the Scratch 2.0
//! API plus the visible comment count from the project page, and append
//! one row per project to a flat outfile.

mod comments;
mod discover;
mod error;
mod metrics;
pub mod process;
mod writer;

pub use error::{Error, Result};

const BASE_URL: &str = "http://scratch.mit.edu";
pub const FILE_PATH: &str = "workfile2.txt";
