use crate::analysis::channel::{ChannelAnalysisPage, ChannelLookup};
use crate::analysis::video::VideoAnalysisPage;
use crate::dashboard::DashboardPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/analyze/:video_id")]
    VideoAnalysis { video_id: String },
    #[at("/channel/id/:channel_id")]
    ChannelById { channel_id: String },
    #[at("/channel/username/:username")]
    ChannelByUsername { username: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <DashboardPage /> },
        Route::VideoAnalysis { video_id } => html! { <VideoAnalysisPage {video_id} /> },
        Route::ChannelById { channel_id } => html! {
            <ChannelAnalysisPage lookup={ChannelLookup::Id(channel_id)} />
        },
        Route::ChannelByUsername { username } => html! {
            <ChannelAnalysisPage lookup={ChannelLookup::Username(username)} />
        },
        Route::NotFound => html! {
            <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                    {"Go back to the dashboard"}
                </Link<Route>>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(
            Route::recognize("/analyze/dQw4w9WgXcQ"),
            Some(Route::VideoAnalysis {
                video_id: "dQw4w9WgXcQ".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/channel/id/UC123"),
            Some(Route::ChannelById {
                channel_id: "UC123".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/channel/username/mkbhd"),
            Some(Route::ChannelByUsername {
                username: "mkbhd".to_string()
            })
        );
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
