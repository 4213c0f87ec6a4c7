mod analysis;
mod api;
mod config;
mod dashboard;
mod env_variable_utils;
mod layout;
mod logger;
mod models;
mod request;
mod resolver;
mod router;
mod search;
mod utils;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::layout::Footer;
use crate::logger::init_logger;
use crate::router::{switch, Route};
use crate::search::components::SearchBar;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let api = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::new(base_url.clone())
    });

    html! {
        <ContextProvider<AppConfig> context={config.clone()}>
            <ContextProvider<ApiClient> context={(*api).clone()}>
                <BrowserRouter>
                    <div class="min-h-screen flex flex-col bg-gray-700">
                        <header class="flex justify-center p-4 bg-gray-800">
                            <SearchBar />
                        </header>
                        <main class="flex-grow flex justify-center p-4">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer app_name={config.app_name.clone()} />
                    </div>
                </BrowserRouter>
            </ContextProvider<ApiClient>>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let config = AppConfig::load();
    init_logger(config.debug_mode);

    info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        config.app_name, config.api_base_url, config.debug_mode
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
