use yew::prelude::*;

mod components;
mod controllers;
mod hooks;
mod pages;
mod projectors;
mod services;
mod state;

use pages::{DashboardPage, Page, ProfilePage};
use services::browser;
use services::config::AppConfig;
use services::logging::ConsoleLogger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
    page: Page,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = props.config.api_client();

    match props.page {
        Page::Profile => html! {
            <ProfilePage {api_client} landing_page={props.config.landing_page.clone()} />
        },
        Page::Dashboard => html! {
            <DashboardPage {api_client} />
        },
    }
}

fn main() {
    let config = AppConfig::default();
    if let Err(e) = ConsoleLogger::init(config.log_level) {
        gloo::console::warn!(format!("Logger already installed: {}", e));
    }

    let page = Page::from_path(&browser::current_path());
    log::info!("Starting {:?} page", page);

    yew::Renderer::<App>::with_props(AppProps { config, page }).render();
}
