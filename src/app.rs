use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Nav;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Blog"/>
        <Meta name="description" content="A small blog"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/posts/new") view=NewPostPage/>
                </Routes>
            </main>
        </Router>
    }
}
