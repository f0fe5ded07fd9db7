use leptos::prelude::*;

use crate::models::PostEntry;

#[server]
pub async fn list_posts() -> Result<Vec<PostEntry>, ServerFnError> {
    use axum::Extension;
    use crate::{services::posts, state::AppState};
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    posts::entries(&state.db)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn create_post(
    author: String,
    title: String,
    content: String,
) -> Result<String, ServerFnError> {
    use axum::Extension;
    use crate::{models::PostDraft, services::posts, state::AppState};
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let draft = PostDraft {
        author,
        title,
        content,
    };
    posts::create(&state.db, &draft)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
