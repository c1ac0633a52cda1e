use leptos::{
    component, logging, spawn_local, view, IntoView, RwSignal, SignalUpdate, SignalWith,
};

use crate::api::ApiClient;
use crate::session::Session;

/// Fetches the admin listing. `begin_all_users` hands out a ticket only to
/// an admin session, so the role gate in the view below is cosmetic.
pub fn request_all_users(session: RwSignal<Session>, client: ApiClient) {
    let Some(attempt) = session.try_update(|s| s.begin_all_users()).flatten() else {
        return;
    };
    spawn_local(async move {
        match client.fetch_all_users(&attempt.token).await {
            Ok(users) => session.update(|s| s.all_users_loaded(attempt.epoch, users)),
            Err(err) => {
                logging::error!("user listing failed: {err}");
                session.update(|s| s.all_users_failed(attempt.epoch));
            }
        }
    });
}

#[component]
pub fn ProfileScreen(session: RwSignal<Session>, client: ApiClient) -> impl IntoView {
    let field = move |extract: fn(&Session) -> String| session.with(|s| extract(s));

    let name = move || field(|s| s.profile().map(|p| p.name.clone()).unwrap_or_default());
    let email = move || field(|s| s.profile().map(|p| p.email.clone()).unwrap_or_default());
    let phone = move || field(|s| s.profile().map(|p| p.phone.clone()).unwrap_or_default());
    let role = move || field(|s| s.profile().map(|p| p.role.clone()).unwrap_or_default());

    let on_show_all = move |_| request_all_users(session, client.clone());

    view! {
        <div class="profile-card">
            <h2 class="title">"Welcome Back!"</h2>
            <p class="subtitle">"Profile Details"</p>

            <div class="profile-details">
                <div class="profile-item">
                    <p class="profile-label">"Name"</p>
                    <p class="profile-value">{name}</p>
                </div>
                <div class="profile-item">
                    <p class="profile-label">"Email"</p>
                    <p class="profile-value">{email}</p>
                </div>
                <div class="profile-item">
                    <p class="profile-label">"Phone"</p>
                    <p class="profile-value">{phone}</p>
                </div>
                <div class="profile-item">
                    <p class="profile-label">"Role"</p>
                    <p class="profile-value">{role}</p>
                </div>
            </div>

            {move || {
                session.with(|s| s.error().map(str::to_owned)).map(|error| {
                    view! { <div class="error-message">{error}</div> }
                })
            }}

            // Display guard only. The API enforces the real authorization
            // on the listing endpoint.
            {move || {
                session.with(Session::is_admin).then(|| {
                    view! {
                        <button
                            class="admin-button"
                            on:click=on_show_all.clone()
                            disabled=move || session.with(|s| s.loading_users())
                        >
                            {move || {
                                if session.with(|s| s.loading_users()) {
                                    view! {
                                        <div class="spinner"></div>
                                        <span>"Loading..."</span>
                                    }
                                    .into_view()
                                } else {
                                    view! { <span>"Show All Profiles"</span> }.into_view()
                                }
                            }}
                        </button>
                    }
                })
            }}

            <button class="logout-button" on:click=move |_| session.update(Session::logout)>
                "Logout"
            </button>
        </div>
    }
}
