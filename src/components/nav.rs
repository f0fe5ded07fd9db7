use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <A href="/">"Blog"</A>
            </div>

            <div class="nav-links">
                <A href="/posts/new">"Write"</A>
                <A href="/login">"Login"</A>
            </div>
        </nav>
    }
}
