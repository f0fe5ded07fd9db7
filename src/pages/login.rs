use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};

use crate::models::{LoginFields, LoginPayload};
use crate::services::LoginClient;

/// The part of a form submission event the login handler relies on.
pub trait FormSubmission {
    fn suppress_default(&self);
}

impl FormSubmission for SubmitEvent {
    fn suppress_default(&self) {
        self.prevent_default();
    }
}

/// Cancels the browser's own form submission, then hands the payload to
/// `dispatch`. Overlapping submissions are not guarded against.
pub fn handle_submit<E, F>(event: &E, fields: &LoginFields, dispatch: F)
where
    E: FormSubmission,
    F: FnOnce(LoginPayload),
{
    event.suppress_default();
    dispatch(fields.payload());
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login"/>
        <Meta name="description" content="Login to your account"/>
        <LoginForm/>
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let fields = LoginFields::unbound();

    let on_submit = move |ev: SubmitEvent| {
        handle_submit(&ev, &fields, |payload| {
            spawn_local(async move {
                LoginClient::new().submit(&payload).await;
            });
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>

                <form class="auth-form" on:submit=on_submit>
                    <input placeholder="Email or Username"/>
                    <input type="password" placeholder="Password"/>
                    <button>"Login"</button>
                </form>
            </div>
        </div>
    }
}
