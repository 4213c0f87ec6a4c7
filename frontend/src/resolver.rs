use crate::router::Route;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Ordered by precedence: watch > short link > embed > /v/
    static ref VIDEO_PATTERNS: [Regex; 4] = [
        Regex::new(r"youtube\.com/watch\?v=([^&?\s]+)").unwrap(),
        Regex::new(r"youtu\.be/([^&?\s]+)").unwrap(),
        Regex::new(r"youtube\.com/embed/([^&?\s]+)").unwrap(),
        Regex::new(r"youtube\.com/v/([^&?\s]+)").unwrap(),
    ];
    static ref CHANNEL_ID_PATH: Regex = Regex::new(r"youtube\.com/channel/([^/\s?]+)").unwrap();
    static ref CHANNEL_NAME_PATHS: [Regex; 3] = [
        Regex::new(r"youtube\.com/c/([^/\s?]+)").unwrap(),
        Regex::new(r"youtube\.com/user/([^/\s?]+)").unwrap(),
        Regex::new(r"youtube\.com/@([^/\s?]+)").unwrap(),
    ];
    static ref BARE_CHANNEL_ID: Regex = Regex::new(r"^UC[A-Za-z0-9_-]{22}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Video,
    Channel,
}

impl SearchMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchMode::Video => "Video",
            SearchMode::Channel => "Channel",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchMode::Video => "Enter YouTube video ID or URL",
            SearchMode::Channel => "Enter YouTube channel ID, username, or URL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub mode: SearchMode,
    pub raw_text: String,
}

impl SearchQuery {
    pub fn new(mode: SearchMode, raw_text: impl Into<String>) -> Self {
        Self {
            mode,
            raw_text: raw_text.into(),
        }
    }
}

/// Canonical form of whatever the user pasted into the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Video { id: String },
    ChannelId { id: String },
    ChannelUsername { name: String },
}

fn first_capture<'a>(patterns: &[Regex], input: &'a str) -> Option<&'a str> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Extracts a video id from any of the known URL shapes. Anything else is
/// assumed to already be a bare id and is returned untouched.
pub fn resolve_video(input: &str) -> String {
    first_capture(VIDEO_PATTERNS.as_slice(), input)
        .unwrap_or(input)
        .to_string()
}

pub fn resolve_channel(input: &str) -> ResolvedTarget {
    if let Some(id) = first_capture(std::slice::from_ref(&*CHANNEL_ID_PATH), input) {
        return ResolvedTarget::ChannelId { id: id.to_string() };
    }

    if let Some(name) = first_capture(CHANNEL_NAME_PATHS.as_slice(), input) {
        return ResolvedTarget::ChannelUsername {
            name: name.to_string(),
        };
    }

    if BARE_CHANNEL_ID.is_match(input) {
        return ResolvedTarget::ChannelId {
            id: input.to_string(),
        };
    }

    // Handles and legacy usernames
    ResolvedTarget::ChannelUsername {
        name: input.to_string(),
    }
}

/// Returns `None` for blank input, which the search bar treats as "do nothing".
pub fn resolve_query(query: &SearchQuery) -> Option<ResolvedTarget> {
    let text = query.raw_text.trim();
    if text.is_empty() {
        return None;
    }

    let target = match query.mode {
        SearchMode::Video => ResolvedTarget::Video {
            id: resolve_video(text),
        },
        SearchMode::Channel => resolve_channel(text),
    };
    Some(target)
}

pub fn compute_route(target: &ResolvedTarget) -> Route {
    match target {
        ResolvedTarget::Video { id } => Route::VideoAnalysis {
            video_id: id.clone(),
        },
        ResolvedTarget::ChannelId { id } => Route::ChannelById {
            channel_id: id.clone(),
        },
        ResolvedTarget::ChannelUsername { name } => Route::ChannelByUsername {
            username: name.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    const CHANNEL_ID: &str = "UCuAXFkgsw1L7xaCfnd5JJOw";

    #[test]
    fn test_video_url_shapes() {
        let inputs = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/v/dQw4w9WgXcQ",
            "dQw4w9WgXcQ",
        ];
        for input in inputs {
            assert_eq!(resolve_video(input), "dQw4w9WgXcQ", "input: {input}");
        }
    }

    #[test]
    fn test_short_link_stops_at_query() {
        assert_eq!(
            resolve_video("https://youtu.be/dQw4w9WgXcQ?extra=1"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_video_id_stops_at_whitespace() {
        assert_eq!(
            resolve_video("look at https://youtu.be/abc123 it's great"),
            "abc123"
        );
    }

    #[test]
    fn test_watch_beats_embed() {
        let input = "https://www.youtube.com/watch?v=first https://www.youtube.com/embed/second";
        assert_eq!(resolve_video(input), "first");
    }

    #[test]
    fn test_unrecognized_video_input_is_forwarded() {
        assert_eq!(resolve_video("not a url at all"), "not a url at all");
        assert_eq!(
            resolve_video("https://vimeo.com/12345"),
            "https://vimeo.com/12345"
        );
    }

    #[test]
    fn test_video_matching_is_case_sensitive() {
        let input = "https://www.YouTube.com/watch?v=abc";
        assert_eq!(resolve_video(input), input);
    }

    #[test]
    fn test_channel_path_id() {
        assert_eq!(
            resolve_channel("https://www.youtube.com/channel/UC123abc/videos"),
            ResolvedTarget::ChannelId {
                id: "UC123abc".to_string()
            }
        );
    }

    #[test]
    fn test_channel_path_beats_bare_id() {
        let input = format!("https://www.youtube.com/channel/{CHANNEL_ID}?view=0");
        assert_eq!(
            resolve_channel(&input),
            ResolvedTarget::ChannelId {
                id: CHANNEL_ID.to_string()
            }
        );
    }

    #[test]
    fn test_channel_name_shapes() {
        let cases = [
            ("https://www.youtube.com/c/LinusTechTips", "LinusTechTips"),
            ("https://www.youtube.com/user/pewdiepie/videos", "pewdiepie"),
            ("https://www.youtube.com/@mkbhd?si=xyz", "mkbhd"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                resolve_channel(input),
                ResolvedTarget::ChannelUsername {
                    name: expected.to_string()
                },
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_bare_channel_id_length() {
        assert_eq!(CHANNEL_ID.len(), 24);
        assert_eq!(
            resolve_channel(CHANNEL_ID),
            ResolvedTarget::ChannelId {
                id: CHANNEL_ID.to_string()
            }
        );

        let short = &CHANNEL_ID[..23];
        assert_eq!(
            resolve_channel(short),
            ResolvedTarget::ChannelUsername {
                name: short.to_string()
            }
        );

        let long = format!("{CHANNEL_ID}x");
        assert_eq!(
            resolve_channel(&long),
            ResolvedTarget::ChannelUsername { name: long.clone() }
        );
    }

    #[test]
    fn test_bare_channel_id_allows_hyphen_and_underscore() {
        let id = "UC_x5XG1OV2P6uZZ5FSM9-tw";
        assert_eq!(
            resolve_channel(id),
            ResolvedTarget::ChannelId { id: id.to_string() }
        );
    }

    #[test]
    fn test_plain_handle_is_username() {
        assert_eq!(
            resolve_channel("veritasium"),
            ResolvedTarget::ChannelUsername {
                name: "veritasium".to_string()
            }
        );
    }

    #[test]
    fn test_empty_query_is_ignored() {
        assert_eq!(resolve_query(&SearchQuery::new(SearchMode::Video, "")), None);
        assert_eq!(
            resolve_query(&SearchQuery::new(SearchMode::Channel, "   ")),
            None
        );
    }

    #[test]
    fn test_query_dispatches_on_mode() {
        let video = SearchQuery::new(SearchMode::Video, " https://youtu.be/abc123 ");
        assert_eq!(
            resolve_query(&video),
            Some(ResolvedTarget::Video {
                id: "abc123".to_string()
            })
        );

        let channel = SearchQuery::new(SearchMode::Channel, "https://youtube.com/@someone");
        assert_eq!(
            resolve_query(&channel),
            Some(ResolvedTarget::ChannelUsername {
                name: "someone".to_string()
            })
        );
    }

    #[test]
    fn test_padded_bare_input_is_forwarded_trimmed() {
        let video = SearchQuery::new(SearchMode::Video, "  dQw4w9WgXcQ\n");
        let target = resolve_query(&video).unwrap();
        assert_eq!(
            target,
            ResolvedTarget::Video {
                id: "dQw4w9WgXcQ".to_string()
            }
        );
        assert_eq!(compute_route(&target).to_path(), "/analyze/dQw4w9WgXcQ");

        let channel = SearchQuery::new(SearchMode::Channel, format!("\t{CHANNEL_ID}  "));
        assert_eq!(
            resolve_query(&channel),
            Some(ResolvedTarget::ChannelId {
                id: CHANNEL_ID.to_string()
            })
        );

        let handle = SearchQuery::new(SearchMode::Channel, " mkbhd ");
        assert_eq!(
            resolve_query(&handle),
            Some(ResolvedTarget::ChannelUsername {
                name: "mkbhd".to_string()
            })
        );
    }

    #[test]
    fn test_compute_route_paths() {
        let video = ResolvedTarget::Video {
            id: "abc123".to_string(),
        };
        assert_eq!(compute_route(&video).to_path(), "/analyze/abc123");

        let by_id = ResolvedTarget::ChannelId {
            id: CHANNEL_ID.to_string(),
        };
        assert_eq!(
            compute_route(&by_id).to_path(),
            format!("/channel/id/{CHANNEL_ID}")
        );

        let by_name = ResolvedTarget::ChannelUsername {
            name: "mkbhd".to_string(),
        };
        assert_eq!(
            compute_route(&by_name).to_path(),
            "/channel/username/mkbhd"
        );
    }
}
