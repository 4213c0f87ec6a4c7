use crate::analysis::chart::LegendEntry;
use crate::models::CommentResult;
use crate::router::Route;
use crate::utils::{bar_width, capitalize, format_number, format_percentage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SentimentLegendProps {
    pub entries: Vec<LegendEntry>,
    #[prop_or_default]
    pub compact: bool,
}

/// Horizontal bars, one per sentiment bucket.
#[function_component(SentimentLegend)]
pub fn sentiment_legend(props: &SentimentLegendProps) -> Html {
    let bar_height = if props.compact { "h-2" } else { "h-4" };

    html! {
        <div class="space-y-2">
            { for props.entries.iter().map(|entry| {
                let label = match entry.count {
                    Some(count) => format!("{} ({})", format_number(count), format_percentage(entry.percent)),
                    None => format_percentage(entry.percent),
                };
                html! {
                    <div class={classes!("flex", "items-center", "gap-2", entry.sentiment.css_class())}>
                        <span class="w-20 text-sm text-gray-700">{ entry.sentiment.label() }</span>
                        <div class={classes!("flex-grow", "bg-gray-200", "rounded", bar_height)}>
                            <div
                                class={classes!("rounded", bar_height)}
                                style={format!("{}; background-color: {}", bar_width(entry.percent), entry.sentiment.color())}
                            ></div>
                        </div>
                        <span class="w-28 text-right text-sm text-gray-600">{ label }</span>
                    </div>
                }
            })}
        </div>
    }
}

/// Single stacked bar, used where a pie chart would otherwise go.
#[function_component(SentimentStack)]
pub fn sentiment_stack(props: &SentimentLegendProps) -> Html {
    let total: f64 = props.entries.iter().map(|entry| entry.percent).sum();

    if total <= 0.0 {
        return html! {
            <div class="h-6 w-full rounded bg-gray-300" title="No Data"></div>
        };
    }

    html! {
        <div class="flex h-6 w-full overflow-hidden rounded">
            { for props.entries.iter().map(|entry| html! {
                <div
                    title={format!("{}: {}", entry.sentiment.label(), format_percentage(entry.percent))}
                    style={format!("{}; background-color: {}", bar_width(entry.percent / total * 100.0), entry.sentiment.color())}
                ></div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub comments: Vec<CommentResult>,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    if props.comments.is_empty() {
        return html! { <p class="text-gray-500">{"No comments to show."}</p> };
    }

    html! {
        <div class="divide-y divide-gray-200">
            { for props.comments.iter().map(|comment| {
                let sentiment_class = comment.sentiment.map(|s| s.css_class());
                html! {
                    <div class={classes!("comment-item", "p-3", sentiment_class)}>
                        <div class="text-gray-800">{ &comment.text }</div>
                        { if let Some(sentiment) = comment.sentiment {
                            html! {
                                <div class="text-sm text-gray-500 mt-1">
                                    {"Sentiment: "}
                                    <span class={classes!("sentiment-tag", "font-semibold", sentiment.css_class())}
                                          style={format!("color: {}", sentiment.color())}>
                                        { capitalize(sentiment.css_class()) }
                                    </span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="mb-6">
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline text-sm">
                {"← Back to Dashboard"}
            </Link<Route>>
            <h1 class="text-3xl font-bold text-gray-800 mt-2">{ props.title.clone() }</h1>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub is_error: bool,
}

#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    let class = if props.is_error {
        "text-red-600 text-center my-8"
    } else {
        "text-gray-500 text-center my-8"
    };
    html! { <p class={class}>{ props.text.clone() }</p> }
}
