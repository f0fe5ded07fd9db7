use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::db::{self, Db};
use crate::models::{PostDraft, PostEntry, PostError};

pub async fn create(db: &Db, draft: &PostDraft) -> Result<String, PostError> {
    draft.validate()?;
    let id = Uuid::new_v4().to_string();
    // Fixed-width timestamps keep the text ordering chronological
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    db::insert_post(db, &id, draft.author.trim(), &draft.title, &draft.content, &created_at)
        .await
        .map_err(|e| PostError::Storage(e.to_string()))?;
    tracing::info!(post_id = %id, "post created");
    Ok(id)
}

pub async fn entries(db: &Db) -> Result<Vec<PostEntry>, PostError> {
    db::list_post_entries(db)
        .await
        .map_err(|e| PostError::Storage(e.to_string()))
}
