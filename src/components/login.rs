use leptos::{
    component, ev, event_target_value, logging, spawn_local, view, IntoView, RwSignal, SignalUpdate,
    SignalWith,
};

use crate::api::ApiClient;
use crate::session::Session;

/// Kicks off the login + profile sequence. The two calls are strictly
/// ordered: the profile request is only issued once login has produced a
/// token, and a failed login never touches the profile endpoint.
pub fn submit_login(session: RwSignal<Session>, client: ApiClient) {
    let Some(attempt) = session.try_update(|s| s.begin_login()).flatten() else {
        return;
    };
    spawn_local(async move {
        match client.login(&attempt.email, &attempt.password).await {
            Ok(response) => match client.fetch_profile(&response.token).await {
                Ok(profile) => session.update(|s| {
                    s.login_succeeded(attempt.epoch, response.token.clone(), profile)
                }),
                Err(err) => {
                    logging::error!("profile fetch failed: {err}");
                    session.update(|s| s.login_failed(attempt.epoch, err.server_message()));
                }
            },
            Err(err) => {
                logging::error!("login failed: {err}");
                session.update(|s| s.login_failed(attempt.epoch, err.server_message()));
            }
        }
    });
}

#[component]
pub fn LoginScreen(session: RwSignal<Session>, client: ApiClient) -> impl IntoView {
    let submit_client = client.clone();
    let on_submit = move |_| submit_login(session, submit_client.clone());

    let key_client = client;
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !session.with(|s| s.logging_in()) {
            submit_login(session, key_client.clone());
        }
    };
    let on_keydown_email = on_keydown.clone();

    let disabled = move || session.with(|s| s.logging_in());

    view! {
        <div class="login-card">
            <h2 class="title">"Hospital Login"</h2>
            <p class="subtitle">"Welcome back! Please login to continue"</p>

            <div class="form-container">
                <div class="input-group">
                    <label class="input-label">"Email Address"</label>
                    <input
                        type="email"
                        class="input-field"
                        placeholder="john@hospital.com"
                        prop:value=move || session.with(|s| s.email().to_owned())
                        on:input=move |ev| session.update(|s| s.set_email(event_target_value(&ev)))
                        on:keydown=on_keydown_email
                        disabled=disabled
                    />
                </div>

                <div class="input-group">
                    <label class="input-label">"Password"</label>
                    <input
                        type="password"
                        class="input-field"
                        placeholder="••••••••"
                        prop:value=move || session.with(|s| s.password().to_owned())
                        on:input=move |ev| session.update(|s| s.set_password(event_target_value(&ev)))
                        on:keydown=on_keydown
                        disabled=disabled
                    />
                </div>

                {move || {
                    session.with(|s| s.error().map(str::to_owned)).map(|error| {
                        view! { <div class="error-message">{error}</div> }
                    })
                }}

                <button class="login-button" on:click=on_submit disabled=disabled>
                    {move || {
                        if session.with(|s| s.logging_in()) {
                            view! {
                                <div class="spinner"></div>
                                <span>"Logging in..."</span>
                            }
                            .into_view()
                        } else {
                            view! { <span>"Login"</span> }.into_view()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
