use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#4CAF50",
            Sentiment::Negative => "#F44336",
            Sentiment::Neutral => "#2196F3",
        }
    }
}

/// Comment counts per sentiment bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub neutral: u64,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Percentages as computed by the backend. Each bucket is rounded on its own,
/// so the three values do not necessarily add up to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentPercentages {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub negative: f64,
    #[serde(default)]
    pub neutral: f64,
}

impl SentimentPercentages {
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResult {
    #[serde(rename = "comment")]
    pub text: String,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub comment_count: u64,
    #[serde(rename = "sentiment_distribution", default)]
    pub sentiment_counts: Option<SentimentCounts>,
    #[serde(rename = "results", default)]
    pub per_comment_results: Vec<CommentResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "thumbnail", default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "count_from_number_or_string")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "count_from_number_or_string")]
    pub video_count: u64,
    #[serde(default, deserialize_with = "count_from_number_or_string")]
    pub view_count: u64,
}

/// YouTube statistics come through either as JSON numbers or as the raw
/// decimal strings the Data API returns.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(u64),
    Text(String),
}

fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawCount>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawCount::Number(count)) => Ok(count),
        Some(RawCount::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid count: {text:?}"))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSentimentSummary {
    pub video_id: String,
    pub title: String,
    pub comment_count: u64,
    #[serde(rename = "sentiment", default)]
    pub sentiment_counts: SentimentCounts,
    #[serde(default)]
    pub sentiment_percentages: SentimentPercentages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAnalysisResult {
    pub channel_info: ChannelInfo,
    #[serde(rename = "overallSentiment", default)]
    pub overall_sentiment_counts: SentimentCounts,
    #[serde(default)]
    pub overall_sentiment_percentages: SentimentPercentages,
    #[serde(rename = "videoAnalysis", default)]
    pub per_video_analysis: Vec<VideoSentimentSummary>,
    #[serde(default)]
    pub total_comments: u64,
    #[serde(default)]
    pub video_count: Option<u64>,
    #[serde(default)]
    pub analyzed_videos: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub trending_videos: Vec<TrendingVideo>,
    #[serde(rename = "regionCode", default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub model_type: Option<String>,
}

/// Whatever `/run-scraper` answers with; the backend does not pin a shape.
pub type ScraperStatus = serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysisRequest<'a> {
    pub video_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAnalysisRequest<'a> {
    pub channel_id: Option<&'a str>,
    pub username: Option<&'a str>,
    pub max_results: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperRequest<'a> {
    pub country_code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
