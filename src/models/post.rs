use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const TITLE_LENGTH: RangeInclusive<usize> = 20..=70;
pub const CONTENT_LENGTH: RangeInclusive<usize> = 20..=100_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Title must be between 20 and 70 characters")]
    TitleLength,
    #[error("Content must be between 20 and 100000 characters")]
    ContentLength,
    #[error("{0}")]
    Storage(String),
}

/// A post as submitted, before it has an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostDraft {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), PostError> {
        if !TITLE_LENGTH.contains(&self.title.chars().count()) {
            return Err(PostError::TitleLength);
        }
        if !CONTENT_LENGTH.contains(&self.content.chars().count()) {
            return Err(PostError::ContentLength);
        }
        Ok(())
    }
}

/// Listing row; the body is left out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct PostEntry {
    pub id: String,
    pub author: String,
    pub title: String,
    pub created_at: String,
}
