pub mod components;

use crate::analysis::components::StatusMessage;
use crate::api::use_api_client;
use crate::config::use_app_config;
use crate::dashboard::components::{ScraperPanel, VideoCard};
use crate::models::{ScraperStatus, TrendingVideo};
use crate::request::use_request_tracker;
use log::{debug, error};
use yew::prelude::*;

const TRENDING_ERROR: &str = "Failed to load trending videos. Please try again later.";

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api_client();
    let config = use_app_config();
    let tracker = use_request_tracker();
    let trending = use_state(Vec::<TrendingVideo>::default);
    let note = use_state(|| None::<String>);
    let shown_region = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    // Region of the last scraper run; None means the backend's default feed
    let region = use_state(|| None::<String>);
    // Bumped after every scraper run so the same region reloads too
    let refresh = use_state(|| 0u32);

    {
        let trending = trending.clone();
        let note = note.clone();
        let shown_region = shown_region.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with(((*region).clone(), *refresh), move |(region, _)| {
            let region = region.clone();
            let ticket = tracker.begin();
            loading.set(true);
            error_message.set(None);

            {
                let tracker = tracker.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match &region {
                        Some(code) => api.get_trending_videos_in(code).await,
                        None => api.get_trending_videos().await,
                    };
                    if !tracker.is_current(ticket) {
                        debug!("Discarding stale trending response");
                        return;
                    }

                    match result {
                        Ok(response) => {
                            trending.set(response.trending_videos);
                            note.set(response.note);
                            shown_region.set(response.region_code);
                        }
                        Err(e) => {
                            error!("Trending videos unavailable: {e}");
                            error_message.set(Some(TRENDING_ERROR.to_string()));
                        }
                    }
                    loading.set(false);
                });
            }

            move || tracker.invalidate()
        });
    }

    let on_scraper_finished = {
        let region = region.clone();
        let refresh = refresh.clone();
        Callback::from(move |country_code: String| {
            region.set(Some(country_code));
            refresh.set(refresh.wrapping_add(1));
        })
    };

    let trending_section = if *loading {
        html! { <StatusMessage text="Loading trending videos..." /> }
    } else if let Some(msg) = &*error_message {
        html! { <StatusMessage text={msg.clone()} is_error={true} /> }
    } else if trending.is_empty() {
        html! { <StatusMessage text="No trending videos available" /> }
    } else {
        html! {
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                { for trending.iter().map(|video| html! {
                    <VideoCard key={video.video_id.clone()} video={video.clone()} />
                })}
            </div>
        }
    };

    html! {
        <div class="w-full max-w-5xl">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold text-gray-100">{"YouTube Sentiment Analysis Dashboard"}</h1>
                <p class="text-gray-300 mt-2">{"Analyze viewer sentiment from YouTube comments"}</p>
            </div>

            <div class="bg-white p-6 rounded-lg shadow-lg mb-6">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">
                    { match &*shown_region {
                        Some(code) => format!("Trending Videos ({code})"),
                        None => "Trending Videos".to_string(),
                    }}
                </h2>
                { if let Some(note) = &*note {
                    html! { <p class="text-sm text-gray-500 mb-4">{ note }</p> }
                } else {
                    html! {}
                }}
                { trending_section }
            </div>

            <ScraperPanel
                default_country_code={config.default_country_code.clone()}
                on_finished={on_scraper_finished}
            />

            <p class="text-center text-gray-300 mt-6">
                {"Enter a YouTube video ID in the search bar above to analyze its comments"}
            </p>
        </div>
    }
}

/// What to tell the user after a scraper run. Uses the backend's `message`
/// when it sent one.
pub fn scraper_message(status: &ScraperStatus) -> String {
    status
        .get("message")
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Scraper run finished.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scraper_message_from_backend() {
        let status = json!({
            "success": true,
            "message": "Scraper completed successfully for country code: US",
            "files": []
        });
        assert_eq!(
            scraper_message(&status),
            "Scraper completed successfully for country code: US"
        );
    }

    #[test]
    fn test_scraper_message_fallback() {
        assert_eq!(scraper_message(&json!({"success": true})), "Scraper run finished.");
        assert_eq!(scraper_message(&json!("ok")), "Scraper run finished.");
    }
}
