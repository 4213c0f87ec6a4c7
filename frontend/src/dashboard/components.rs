use crate::analysis::error_text;
use crate::api::use_api_client;
use crate::dashboard::scraper_message;
use crate::models::TrendingVideo;
use crate::router::Route;
use crate::utils::{format_number, video_thumbnail_url};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: TrendingVideo,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    html! {
        <div class="bg-gray-100 rounded-lg overflow-hidden hover:shadow-md">
            <Link<Route> to={Route::VideoAnalysis { video_id: video.video_id.clone() }}>
                <img src={video_thumbnail_url(&video.video_id)} alt={video.title.clone()} class="w-full" />
                <div class="p-3">
                    <h3 class="font-semibold text-gray-800 line-clamp-2">{ &video.title }</h3>
                    <p class="text-sm text-gray-600">{ &video.channel_title }</p>
                    <p class="text-sm text-gray-500">{ card_stats(video) }</p>
                </div>
            </Link<Route>>
        </div>
    }
}

/// "1,234 views · 56 likes · 7 comments", skipping counts the backend left out.
pub fn card_stats(video: &TrendingVideo) -> String {
    let mut parts = vec![format!("{} views", format_number(video.view_count))];
    if let Some(likes) = video.like_count {
        parts.push(format!("{} likes", format_number(likes)));
    }
    if let Some(comments) = video.comment_count {
        parts.push(format!("{} comments", format_number(comments)));
    }
    parts.join(" · ")
}

#[derive(Properties, PartialEq)]
pub struct ScraperPanelProps {
    pub default_country_code: String,
    pub on_finished: Callback<String>,
}

#[function_component(ScraperPanel)]
pub fn scraper_panel(props: &ScraperPanelProps) -> Html {
    let api = use_api_client();
    let country_code = use_state(|| props.default_country_code.clone());
    let running = use_state(|| false);
    let message = use_state(|| None::<(bool, String)>); // (is_error, text)

    let on_input = {
        let country_code = country_code.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            country_code.set(input_value.trim().to_uppercase());
        })
    };

    let on_submit = {
        let country_code = country_code.clone();
        let running = running.clone();
        let message = message.clone();
        let on_finished = props.on_finished.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let code = (*country_code).clone();
            if code.is_empty() {
                message.set(Some((true, "Please enter a country code".to_string())));
                return;
            }

            let api = api.clone();
            let running = running.clone();
            let message = message.clone();
            let on_finished = on_finished.clone();

            running.set(true);
            message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match api.trigger_scraper_run(&code).await {
                    Ok(status) => {
                        message.set(Some((false, scraper_message(&status))));
                        on_finished.emit(code);
                    }
                    Err(e) => {
                        message.set(Some((true, error_text(&e, "Failed to run scraper"))));
                    }
                }
                running.set(false);
            });
        })
    };

    html! {
        <div class="bg-white p-6 rounded-lg shadow-lg">
            <h2 class="text-xl font-semibold text-gray-800 mb-4">{"Refresh Trending Data"}</h2>
            <form onsubmit={on_submit} class="flex">
                <input
                    type="text"
                    maxlength="2"
                    class="w-24 p-3 border border-gray-300 rounded-l-lg uppercase focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="US"
                    value={(*country_code).clone()}
                    oninput={on_input}
                    disabled={*running}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    disabled={*running}
                >
                    { if *running { "Running..." } else { "Run Scraper" } }
                </button>
            </form>
            { match &*message {
                Some((true, text)) => html! { <p class="text-red-600 mt-3">{ text }</p> },
                Some((false, text)) => html! { <p class="text-green-700 mt-3">{ text }</p> },
                None => html! {},
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending(likes: Option<u64>, comments: Option<u64>) -> TrendingVideo {
        TrendingVideo {
            video_id: "x".to_string(),
            title: "T".to_string(),
            channel_title: "C".to_string(),
            view_count: 1_234_567,
            like_count: likes,
            comment_count: comments,
        }
    }

    #[test]
    fn test_card_stats() {
        assert_eq!(card_stats(&trending(None, None)), "1,234,567 views");
        assert_eq!(
            card_stats(&trending(Some(5_000), Some(42))),
            "1,234,567 views · 5,000 likes · 42 comments"
        );
    }
}
