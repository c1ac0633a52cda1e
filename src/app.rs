use leptos::{component, create_rw_signal, view, IntoView, SignalWith};

use crate::api::ApiClient;
use crate::components::{AllUsersScreen, LoginScreen, ProfileScreen};
use crate::model::ViewMode;
use crate::session::Session;

/// Root component. Owns the session signal and dispatches on the derived
/// view mode; exactly one screen exists at a time.
#[component]
pub fn App(client: ApiClient) -> impl IntoView {
    let session = create_rw_signal(Session::default());

    view! {
        <div class="app-container">
            {move || match session.with(Session::mode) {
                ViewMode::Login => {
                    view! { <LoginScreen session=session client=client.clone()/> }.into_view()
                }
                ViewMode::Profile => {
                    view! { <ProfileScreen session=session client=client.clone()/> }.into_view()
                }
                ViewMode::AllUsers => view! { <AllUsersScreen session=session/> }.into_view(),
            }}
        </div>
    }
}
