use crate::analysis::chart::{
    chart_label, legend_from_counts, legend_from_percentages, top_videos_by_comments,
    TOP_VIDEO_COUNT,
};
use crate::analysis::components::{PageHeader, SentimentLegend, SentimentStack, StatusMessage};
use crate::analysis::error_text;
use crate::analysis::insights::ChannelInsights;
use crate::api::use_api_client;
use crate::config::use_app_config;
use crate::models::{ChannelAnalysisResult, ChannelInfo, VideoSentimentSummary};
use crate::request::use_request_tracker;
use crate::router::Route;
use crate::utils::format_number;
use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

/// How the channel was addressed in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelLookup {
    Id(String),
    Username(String),
}

impl ChannelLookup {
    pub fn channel_id(&self) -> Option<&str> {
        match self {
            ChannelLookup::Id(id) => Some(id),
            ChannelLookup::Username(_) => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            ChannelLookup::Id(_) => None,
            ChannelLookup::Username(name) => Some(name),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelAnalysisPageProps {
    pub lookup: ChannelLookup,
}

#[function_component(ChannelAnalysisPage)]
pub fn channel_analysis_page(props: &ChannelAnalysisPageProps) -> Html {
    let api = use_api_client();
    let config = use_app_config();
    let tracker = use_request_tracker();
    let channel = use_state(|| None::<ChannelAnalysisResult>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let channel = channel.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let max_results = config.channel_max_results;

        use_effect_with(props.lookup.clone(), move |lookup| {
            let lookup = lookup.clone();
            let ticket = tracker.begin();

            loading.set(true);
            error_message.set(None);
            channel.set(None);

            {
                let tracker = tracker.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api
                        .get_channel_analysis(lookup.channel_id(), lookup.username(), max_results)
                        .await;
                    if !tracker.is_current(ticket) {
                        debug!("Discarding stale analysis for channel {lookup:?}");
                        return;
                    }

                    match result {
                        Ok(data) => channel.set(Some(data)),
                        Err(e) => error_message.set(Some(error_text(
                            &e,
                            "Failed to analyze channel. Please try again.",
                        ))),
                    }
                    loading.set(false);
                });
            }

            move || tracker.invalidate()
        });
    }

    let content = if *loading {
        html! { <StatusMessage text="Analyzing channel data..." /> }
    } else if let Some(msg) = &*error_message {
        html! { <StatusMessage text={msg.clone()} is_error={true} /> }
    } else if let Some(data) = &*channel {
        html! { <ChannelContent analysis={data.clone()} /> }
    } else {
        html! { <StatusMessage text="No channel data available" /> }
    };

    html! {
        <div class="w-full max-w-5xl">
            <PageHeader title="Channel Sentiment Analysis" />
            { content }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChannelContentProps {
    analysis: ChannelAnalysisResult,
}

#[function_component(ChannelContent)]
fn channel_content(props: &ChannelContentProps) -> Html {
    let analysis = &props.analysis;
    let insights = ChannelInsights::from_analysis(analysis);
    let overall = legend_from_percentages(
        &analysis.overall_sentiment_percentages,
        Some(&analysis.overall_sentiment_counts),
    );
    let top_videos = top_videos_by_comments(&analysis.per_video_analysis, TOP_VIDEO_COUNT);

    html! {
        <div class="space-y-8">
            <ChannelOverview info={analysis.channel_info.clone()} />

            <div class="grid md:grid-cols-2 gap-6">
                <div class="bg-white p-6 rounded-lg shadow">
                    <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Overall Sentiment"}</h3>
                    <div class="mb-4"><SentimentStack entries={overall.clone()} /></div>
                    <SentimentLegend entries={overall} />
                </div>

                <div class="bg-white p-6 rounded-lg shadow">
                    <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Sentiment by Video"}</h3>
                    { if top_videos.is_empty() {
                        html! { <p class="text-gray-500">{"No Data"}</p> }
                    } else {
                        html! {
                            <div class="space-y-4">
                                { for top_videos.iter().map(|video| html! {
                                    <div>
                                        <p class="text-sm text-gray-700 mb-1" title={video.title.clone()}>
                                            { chart_label(&video.title) }
                                        </p>
                                        <SentimentStack entries={legend_from_counts(&video.sentiment_counts, video.comment_count)} />
                                    </div>
                                })}
                            </div>
                        }
                    }}
                </div>
            </div>

            <div>
                <h2 class="text-xl font-semibold text-gray-800 mb-1">{"Video Analysis"}</h2>
                <p class="text-sm text-gray-300 mb-4">
                    { coverage_text(analysis.analyzed_videos, analysis.video_count, analysis.total_comments) }
                </p>
                <div class="grid md:grid-cols-2 gap-4">
                    { for analysis.per_video_analysis.iter().map(|video| html! {
                        <VideoSummaryCard video={video.clone()} />
                    })}
                </div>
            </div>

            <div>
                <h2 class="text-xl font-semibold text-gray-800 mb-4">{"Content Insights"}</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    <InsightCard title="Audience Mood" text={insights.mood} />
                    <InsightCard title="Content Strategy" text={insights.strategy} />
                    <InsightCard title="Engagement Tips" text={insights.engagement} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChannelOverviewProps {
    info: ChannelInfo,
}

#[function_component(ChannelOverview)]
fn channel_overview(props: &ChannelOverviewProps) -> Html {
    let info = &props.info;
    let stats = [
        (info.subscriber_count, "Subscribers"),
        (info.video_count, "Videos"),
        (info.view_count, "Views"),
    ];

    html! {
        <div class="bg-white p-6 rounded-lg shadow flex gap-6 items-start">
            { if let Some(thumbnail) = &info.thumbnail_url {
                html! { <img src={thumbnail.clone()} alt={info.title.clone()} class="w-24 h-24 rounded-full" /> }
            } else {
                html! {}
            }}
            <div class="flex-grow">
                <h2 class="text-2xl font-bold text-gray-800">{ &info.title }</h2>
                <p class="text-gray-600 mt-2 line-clamp-3">{ &info.description }</p>
                <div class="flex gap-8 mt-4">
                    { for stats.iter().map(|(value, label)| html! {
                        <div class="text-center">
                            <div class="text-xl font-semibold text-gray-800">{ format_number(*value) }</div>
                            <div class="text-sm text-gray-500">{ *label }</div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoSummaryCardProps {
    video: VideoSentimentSummary,
}

#[function_component(VideoSummaryCard)]
fn video_summary_card(props: &VideoSummaryCardProps) -> Html {
    let video = &props.video;

    html! {
        <div class="bg-white p-4 rounded-lg shadow">
            <div class="flex justify-between items-start mb-2 gap-2">
                <h3 class="font-semibold text-gray-800">{ &video.title }</h3>
                <Link<Route>
                    to={Route::VideoAnalysis { video_id: video.video_id.clone() }}
                    classes="text-blue-600 hover:underline text-sm whitespace-nowrap"
                >
                    {"View Details"}
                </Link<Route>>
            </div>
            <p class="text-sm text-gray-600 mb-3">
                <span class="font-semibold">{ format_number(video.comment_count) }</span>
                {" comments analyzed"}
            </p>
            <SentimentLegend entries={legend_from_percentages(&video.sentiment_percentages, None)} compact={true} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct InsightCardProps {
    title: AttrValue,
    text: AttrValue,
}

#[function_component(InsightCard)]
fn insight_card(props: &InsightCardProps) -> Html {
    html! {
        <div class="bg-white p-4 rounded-lg shadow">
            <h3 class="font-semibold text-gray-800 mb-2">{ props.title.clone() }</h3>
            <p class="text-sm text-gray-700">{ props.text.clone() }</p>
        </div>
    }
}

/// e.g. "8 of 10 videos analyzed, 412 comments in total".
fn coverage_text(analyzed: Option<u64>, fetched: Option<u64>, total_comments: u64) -> String {
    let videos = match (analyzed, fetched) {
        (Some(analyzed), Some(fetched)) => format!("{analyzed} of {fetched} videos analyzed"),
        (Some(analyzed), None) => format!("{analyzed} videos analyzed"),
        _ => "Videos analyzed".to_string(),
    };
    format!("{videos}, {} comments in total", format_number(total_comments))
}
