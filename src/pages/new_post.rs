use leptos::prelude::*;
use leptos_router::components::A;

use crate::server_fns::CreatePost;

#[component]
pub fn NewPostPage() -> impl IntoView {
    let create_action = ServerAction::<CreatePost>::new();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"New Post"</h1>

                <ActionForm action=create_action>
                    <div class="form-group">
                        <label for="author">"Author"</label>
                        <input type="text" id="author" name="author" required/>
                    </div>

                    <div class="form-group">
                        <label for="title">"Title"</label>
                        <input type="text" id="title" name="title" required minlength="20" maxlength="70"/>
                    </div>

                    <div class="form-group">
                        <label for="content">"Content"</label>
                        <textarea id="content" name="content" rows="12" required minlength="20"></textarea>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || create_action.pending().get()>
                        {move || if create_action.pending().get() { "Publishing..." } else { "Publish" }}
                    </button>

                    {move || create_action.value().get().map(|result| {
                        match result {
                            Ok(_) => view! { <p class="success">"Post published."</p> }.into_any(),
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        }
                    })}
                </ActionForm>

                <div class="auth-links">
                    <A href="/">"Back to posts"</A>
                </div>
            </div>
        </div>
    }
}
