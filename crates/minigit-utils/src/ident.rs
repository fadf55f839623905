//! Commit identity: who authored a commit and when.

use chrono::Local;

/// The author and timestamp recorded on a commit.
///
/// Both fields are free-form strings; the date uses git's default
/// presentation, e.g. `Thu Feb 13 23:31:30 2009 +0000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author: String,
    pub date: String,
}

impl Identity {
    /// Build an identity from the environment and the current wall clock.
    ///
    /// The author comes from `MINIGIT_AUTHOR`, falling back to `USER`,
    /// falling back to `"unknown"`.
    pub fn from_env() -> Self {
        let author = std::env::var("MINIGIT_AUTHOR")
            .or_else(|_| std::env::var("USER"))
            .unwrap_or_else(|_| "unknown".to_string());
        let date = Local::now().format("%a %b %e %H:%M:%S %Y %z").to_string();
        Self { author, date }
    }

    /// Build an identity with explicit values (used by tests).
    pub fn new(author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
        }
    }
}
