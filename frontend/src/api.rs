pub mod error;
pub mod transport;

use crate::config::AppConfig;
use crate::models::{
    AnalysisResult, BackendStatus, ChannelAnalysisRequest, ChannelAnalysisResult, ErrorResponse,
    ScraperRequest, ScraperStatus, TrendingResponse, VideoAnalysisRequest,
};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use yew::prelude::*;

pub use error::ApiError;
use error::Result;
use transport::{ApiRequest, GlooTransport, HttpTransport, Method, RawResponse};

pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_COUNTRY_CODE: &str = "US";

const VIDEO_FALLBACK: &str = "Failed to analyze video";
const CHANNEL_FALLBACK: &str = "Failed to analyze channel";
const TRENDING_FALLBACK: &str = "Failed to fetch trending videos";
const SCRAPER_FALLBACK: &str = "Failed to run scraper";
const STATUS_FALLBACK: &str = "Failed to fetch backend status";

/// Client for the sentiment backend. The base URL already carries the `/api`
/// prefix, e.g. `http://localhost:5000/api`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T = GlooTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<GlooTransport> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, GlooTransport)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub async fn get_video_analysis(&self, video_id: &str) -> Result<AnalysisResult> {
        let body = VideoAnalysisRequest { video_id };
        self.post("/analyze/video", &body, VIDEO_FALLBACK).await
    }

    /// Exactly one of `channel_id` / `username` is expected to be set; the
    /// other goes out as `null`.
    pub async fn get_channel_analysis(
        &self,
        channel_id: Option<&str>,
        username: Option<&str>,
        max_results: u32,
    ) -> Result<ChannelAnalysisResult> {
        let body = ChannelAnalysisRequest {
            channel_id,
            username,
            max_results,
        };
        self.post("/analyze/channel", &body, CHANNEL_FALLBACK).await
    }

    pub async fn get_trending_videos(&self) -> Result<TrendingResponse> {
        self.get("/trending", TRENDING_FALLBACK).await
    }

    pub async fn get_trending_videos_in(&self, region_code: &str) -> Result<TrendingResponse> {
        let path = format!("/trending?regionCode={}", urlencoding::encode(region_code));
        self.get(&path, TRENDING_FALLBACK).await
    }

    pub async fn trigger_scraper_run(&self, country_code: &str) -> Result<ScraperStatus> {
        let body = ScraperRequest { country_code };
        self.post("/run-scraper", &body, SCRAPER_FALLBACK).await
    }

    pub async fn get_backend_status(&self) -> Result<BackendStatus> {
        self.get("/status", STATUS_FALLBACK).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<R> {
        let request = ApiRequest {
            method: Method::Get,
            url: self.endpoint(path),
            body: None,
        };
        self.execute(request, fallback).await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<R> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Request(format!("Request error: {e}")))?;
        let request = ApiRequest {
            method: Method::Post,
            url: self.endpoint(path),
            body: Some(body),
        };
        self.execute(request, fallback).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<R> {
        let url = request.url.clone();
        debug!("{:?} {url}", request.method);

        let result = match self.transport.send(request).await {
            Ok(response) => decode_response(response, fallback),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            match e.status() {
                Some(status) => error!("{fallback} ({url}, HTTP {status}): {e}"),
                None => error!("{fallback} ({url}): {e:?}"),
            }
        }
        result
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn decode_response<R: DeserializeOwned>(response: RawResponse, fallback: &str) -> Result<R> {
    if !response.ok() {
        return Err(ApiError::Backend {
            status: response.status,
            message: error_message(&response.body, fallback),
        });
    }

    serde_json::from_str::<R>(&response.body)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
}

/// Pulls `error` out of a JSON error envelope, falling back when the body is
/// empty, not JSON, or carries no usable message.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl Default for ApiClient<GlooTransport> {
    /// Client on the default base URL, used when no client is provided in context.
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
