use crate::api::use_api_client;
use crate::models::BackendStatus;
use chrono::Datelike;
use log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub app_name: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="flex justify-center items-center gap-4 p-4 text-sm text-gray-300 bg-gray-800">
            <p>{ format!("{} © {year}", props.app_name) }</p>
            <StatusBadge />
        </footer>
    }
}

/// Small indicator of whether the backend is up and has a model loaded.
/// Renders nothing when the status call fails.
#[function_component(StatusBadge)]
pub fn status_badge() -> Html {
    let api = use_api_client();
    let status = use_state(|| None::<BackendStatus>);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.get_backend_status().await {
                    Ok(backend) => status.set(Some(backend)),
                    Err(e) => warn!("Backend status unavailable: {e}"),
                }
            });
            || ()
        });
    }

    match &*status {
        Some(backend) => {
            let (dot, label) = badge_text(backend);
            html! {
                <span class="flex items-center gap-1" title={backend.status.clone()}>
                    <span class={classes!("inline-block", "w-2", "h-2", "rounded-full", dot)}></span>
                    { label }
                </span>
            }
        }
        None => html! {},
    }
}

fn badge_text(status: &BackendStatus) -> (&'static str, String) {
    if status.status != "online" {
        return ("bg-red-500", format!("Backend {}", status.status));
    }
    if status.model_loaded {
        let model = status.model_type.as_deref().unwrap_or("model loaded");
        ("bg-green-500", format!("Online · {model}"))
    } else {
        ("bg-yellow-500", "Online · no model loaded".to_string())
    }
}
