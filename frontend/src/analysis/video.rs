use crate::analysis::chart::legend_from_counts;
use crate::analysis::components::{
    CommentList, PageHeader, SentimentLegend, SentimentStack, StatusMessage,
};
use crate::analysis::error_text;
use crate::api::use_api_client;
use crate::models::AnalysisResult;
use crate::request::use_request_tracker;
use crate::utils::{format_number, video_embed_url};
use log::debug;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoAnalysisPageProps {
    pub video_id: String,
}

#[function_component(VideoAnalysisPage)]
pub fn video_analysis_page(props: &VideoAnalysisPageProps) -> Html {
    let api = use_api_client();
    let tracker = use_request_tracker();
    let analysis = use_state(|| None::<AnalysisResult>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let analysis = analysis.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with(props.video_id.clone(), move |video_id| {
            let video_id = video_id.clone();
            let ticket = tracker.begin();

            loading.set(true);
            error_message.set(None);
            analysis.set(None);

            {
                let tracker = tracker.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api.get_video_analysis(&video_id).await;
                    if !tracker.is_current(ticket) {
                        debug!("Discarding stale analysis for video {video_id}");
                        return;
                    }

                    match result {
                        Ok(data) => analysis.set(Some(data)),
                        Err(e) => error_message.set(Some(error_text(
                            &e,
                            "Failed to analyze video. Please try again.",
                        ))),
                    }
                    loading.set(false);
                });
            }

            move || tracker.invalidate()
        });
    }

    let content = if *loading {
        html! { <StatusMessage text="Analyzing video comments..." /> }
    } else if let Some(msg) = &*error_message {
        html! { <StatusMessage text={msg.clone()} is_error={true} /> }
    } else if let Some(data) = &*analysis {
        html! { <AnalysisContent video_id={props.video_id.clone()} analysis={data.clone()} /> }
    } else {
        html! { <StatusMessage text="No analysis data available" /> }
    };

    html! {
        <div class="w-full max-w-4xl">
            <PageHeader title="Video Sentiment Analysis" />
            { content }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AnalysisContentProps {
    video_id: String,
    analysis: AnalysisResult,
}

#[function_component(AnalysisContent)]
fn analysis_content(props: &AnalysisContentProps) -> Html {
    let analysis = &props.analysis;

    html! {
        <div class="space-y-8">
            <div class="aspect-video w-full">
                <iframe
                    title="YouTube Video"
                    class="w-full h-full rounded-lg"
                    src={video_embed_url(&props.video_id)}
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen={true}
                ></iframe>
            </div>

            <div class="bg-white p-6 rounded-lg shadow">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">{"Sentiment Analysis"}</h2>
                <p class="mb-4 text-gray-700">
                    {"Total Comments: "}
                    <span class="font-semibold">{ format_number(analysis.comment_count) }</span>
                </p>
                { match &analysis.sentiment_counts {
                    Some(counts) => {
                        let entries = legend_from_counts(counts, analysis.comment_count);
                        html! {
                            <>
                                <div class="mb-4"><SentimentStack entries={entries.clone()} /></div>
                                <SentimentLegend entries={entries} />
                            </>
                        }
                    }
                    None => html! { <SentimentStack entries={Vec::new()} /> },
                }}
            </div>

            <div class="bg-white p-6 rounded-lg shadow">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">{"Comment Analysis"}</h2>
                <CommentList comments={analysis.per_comment_results.clone()} />
            </div>
        </div>
    }
}
