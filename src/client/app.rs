use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::HttpApi,
    config::ClientConfig,
    router::Route,
    service::ConsoleService,
    store::{ActivityTracker, ApiStatus, FleetStore, NoticeBoard, SignalCells},
    workflow::TransferWorkflow,
};

/// The console service as provided to every component.
pub type AppConsole = ConsoleService<HttpApi, SignalCells>;

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

fn load_config() -> ClientConfig {
    match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}, falling back to default configuration", e);
            ClientConfig::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    let fleet = use_signal(FleetStore::default);
    let notices = use_signal(NoticeBoard::default);
    let activity = use_signal(ActivityTracker::default);
    let transfer = use_signal(TransferWorkflow::default);
    let status = use_signal(ApiStatus::default);

    let console = use_context_provider(|| {
        let config = load_config();
        tracing::info!("Using API at \"{}\"", config.api_base_url);

        AppConsole::new(
            HttpApi::new(&config),
            config,
            fleet,
            notices,
            activity,
            transfer,
            status,
        )
    });

    // Load data and check API health once on startup
    use_hook(|| {
        let loader = console.clone();
        spawn(async move {
            loader.initial_load().await;
        });

        let checker = console.clone();
        spawn(async move {
            checker.check_status().await;
        });
    });

    rsx! {
        document::Stylesheet { href: DAISYUI_CDN }
        document::Script { src: TAILWIND_CDN }
        document::Title { "Flight Desk" }

        Router::<Route> {}
    }
}
