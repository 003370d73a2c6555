//! Login page view with a username/password form.

use api::{Credentials, SessionTokens};
use dioxus::prelude::*;

use super::make_client;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the notes
    if api::session::load().is_some() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let credentials = Credentials {
                username: username().trim().to_string(),
                password: password(),
            };
            if credentials.username.is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }
            if credentials.password.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match make_client().login(&credentials).await {
                Ok(pair) => {
                    api::session::store(&SessionTokens {
                        access: pair.access,
                        refresh: pair.refresh,
                    });
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some("Invalid username or password".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            h1 { class: "login-title", "My Notes" }
            p { class: "login-subtitle", "Sign in to your account" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "login-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "login-btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
