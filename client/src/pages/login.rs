//! Login page: username + password against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session cookies are written and the public-only route
//! guard sends the operator to `/`. Validation failures stay on this page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::config::ApiConfig;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::state::login::{LOGIN_FAILED_MESSAGE, LoginFailure, LoginPhase};
use crate::state::session::SessionState;
use crate::util::auth::{RouteAccess, install_session_guard};

/// Build the request body, requiring both fields.
pub(crate) fn credentials_request(username: &str, password: &str) -> Result<LoginRequest, LoginFailure> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(LoginFailure::missing_credentials());
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Token and marker to persist; a response without a token is a failure.
pub(crate) fn session_cookies(resp: &LoginResponse) -> Result<(String, String), LoginFailure> {
    let token = resp.token.trim();
    if token.is_empty() {
        return Err(LoginFailure { field_lines: Vec::new(), message: Some(LOGIN_FAILED_MESSAGE.to_owned()) });
    }
    Ok((token.to_owned(), resp.logged_in_marker()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = StoredValue::new(expect_context::<ApiConfig>());
    install_session_guard(session, RouteAccess::PublicOnly, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phase = RwSignal::new(LoginPhase::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }
        let request = match credentials_request(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(failure) => {
                phase.set(LoginPhase::Failed(failure));
                return;
            }
        };
        if !phase.try_update(LoginPhase::begin_submit).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let cfg = api.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&cfg, &request)
                    .await
                    .map_err(|err| {
                        leptos::logging::warn!("login rejected: {err}");
                        LoginFailure::from_error(&err)
                    })
                    .and_then(|resp| session_cookies(&resp));
                match outcome {
                    Ok((token, marker)) => {
                        crate::util::auth::establish_session(session, &token, &marker);
                        phase.update(LoginPhase::succeed);
                    }
                    Err(failure) => phase.update(|p| p.fail(failure)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Toll Gate"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                {move || {
                    phase
                        .get()
                        .failure()
                        .cloned()
                        .map(|failure| {
                            view! {
                                <div class="alert alert--danger">
                                    {failure.field_lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                                    {failure.message.map(|message| view! { <p>{message}</p> })}
                                </div>
                            }
                        })
                }}
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || phase.get().is_submitting()>
                        {move || if phase.get().is_submitting() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
