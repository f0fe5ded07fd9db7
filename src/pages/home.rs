use leptos::prelude::*;
use leptos_router::components::A;

use crate::server_fns::list_posts;

#[component]
pub fn HomePage() -> impl IntoView {
    let posts = Resource::new(|| (), |_| list_posts());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Blog"</h1>
                <div class="cta-buttons">
                    <A href="/posts/new" attr:class="btn btn-primary">"Write a post"</A>
                </div>
            </section>

            <section class="post-list">
                <Suspense fallback=|| view! { <div class="loading">"Loading..."</div> }>
                    {move || {
                        posts.get().map(|result| {
                            match result {
                                Ok(entries) if entries.is_empty() => {
                                    view! { <p class="empty">"No posts yet."</p> }.into_any()
                                }
                                Ok(entries) => view! {
                                    <ul>
                                        {entries.into_iter().map(|entry| view! {
                                            <li class="post-entry">
                                                <h3>{entry.title}</h3>
                                                <span class="post-meta">{entry.author}" · "{entry.created_at}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }.into_any(),
                                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
