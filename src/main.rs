use leptos::{logging, mount_to_body, view};

mod api;
mod app;
mod components;
mod config;
mod model;
mod session;

use api::ApiClient;
use app::App;
use config::Config;

pub fn main() {
    console_error_panic_hook::set_once();

    match Config::from_build_env() {
        Ok(config) => {
            let client = ApiClient::new(config.api_url);
            mount_to_body(move || view! { <App client=client.clone()/> });
        }
        Err(err) => {
            logging::error!("startup failed: {err}");
            let message = format!("Configuration error: {err}");
            mount_to_body(move || {
                let message = message.clone();
                view! {
                    <div class="app-container">
                        <div class="error-message">{message}</div>
                    </div>
                }
            });
        }
    }
}
