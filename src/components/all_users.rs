use leptos::{component, view, CollectView, IntoView, RwSignal, SignalUpdate, SignalWith};

use crate::model::UserRecord;
use crate::session::Session;

#[component]
pub fn AllUsersScreen(session: RwSignal<Session>) -> impl IntoView {
    let count = move || session.with(|s| s.users().len());

    view! {
        <div class="all-users-card">
            <div class="all-users-header">
                <button
                    class="back-button"
                    on:click=move |_| session.update(Session::back_to_profile)
                >
                    "Back to Profile"
                </button>
                <h2 class="all-users-title">{move || format!("All Profiles ({})", count())}</h2>
            </div>

            <div class="users-grid">
                {move || {
                    session.with(|s| {
                        s.users()
                            .iter()
                            .enumerate()
                            .map(|(index, user)| user_card(index, user))
                            .collect_view()
                    })
                }}
            </div>

            <button class="logout-button" on:click=move |_| session.update(Session::logout)>
                "Logout"
            </button>
        </div>
    }
}

fn user_card(index: usize, user: &UserRecord) -> impl IntoView {
    let admin = user.profile.is_admin();
    let avatar_class = if admin {
        "user-avatar avatar-admin"
    } else {
        "user-avatar avatar-staff"
    };
    let badge_class = if admin {
        "role-badge badge-admin"
    } else {
        "role-badge badge-staff"
    };

    view! {
        <div class="user-card" id=user.display_key(index)>
            <div class="user-card-header">
                <div class=avatar_class>{user.avatar_initial()}</div>
                <span class=badge_class>{user.profile.role.clone()}</span>
            </div>
            <div class="user-card-body">
                <h3 class="user-name">{user.profile.name.clone()}</h3>
                <div class="user-info">{user.profile.email.clone()}</div>
                <div class="user-info">{user.profile.phone.clone()}</div>
            </div>
        </div>
    }
}
