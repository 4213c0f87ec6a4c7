use crate::models::{Sentiment, SentimentCounts, SentimentPercentages, VideoSentimentSummary};
use crate::utils::{percent_of, truncate_title};

pub const TOP_VIDEO_COUNT: usize = 5;
pub const TITLE_LABEL_CHARS: usize = 20;

/// One row of a sentiment legend: the bucket, its count (when known) and the
/// share used for the bar width.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub sentiment: Sentiment,
    pub count: Option<u64>,
    pub percent: f64,
}

pub fn legend_from_counts(counts: &SentimentCounts, total: u64) -> Vec<LegendEntry> {
    Sentiment::ALL
        .iter()
        .map(|&sentiment| {
            let count = counts.get(sentiment);
            LegendEntry {
                sentiment,
                count: Some(count),
                percent: percent_of(count, total) as f64,
            }
        })
        .collect()
}

/// Uses the backend's percentages as-is; they are rounded per bucket and may
/// not add up to exactly 100.
pub fn legend_from_percentages(
    percentages: &SentimentPercentages,
    counts: Option<&SentimentCounts>,
) -> Vec<LegendEntry> {
    Sentiment::ALL
        .iter()
        .map(|&sentiment| LegendEntry {
            sentiment,
            count: counts.map(|c| c.get(sentiment)),
            percent: percentages.get(sentiment),
        })
        .collect()
}

/// Videos with the most analyzed comments first; ties keep backend order.
pub fn top_videos_by_comments(
    videos: &[VideoSentimentSummary],
    limit: usize,
) -> Vec<&VideoSentimentSummary> {
    let mut sorted: Vec<&VideoSentimentSummary> = videos.iter().collect();
    sorted.sort_by(|a, b| b.comment_count.cmp(&a.comment_count));
    sorted.truncate(limit);
    sorted
}

pub fn chart_label(title: &str) -> String {
    truncate_title(title, TITLE_LABEL_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, comments: u64) -> VideoSentimentSummary {
        VideoSentimentSummary {
            video_id: id.to_string(),
            title: format!("Video {id}"),
            comment_count: comments,
            sentiment_counts: SentimentCounts::default(),
            sentiment_percentages: SentimentPercentages::default(),
        }
    }

    #[test]
    fn test_legend_from_counts() {
        let counts = SentimentCounts {
            positive: 2,
            negative: 1,
            neutral: 1,
        };
        let legend = legend_from_counts(&counts, 4);
        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0].sentiment, Sentiment::Positive);
        assert_eq!(legend[0].count, Some(2));
        assert_eq!(legend[0].percent, 50.0);
        assert_eq!(legend[2].percent, 25.0);
    }

    #[test]
    fn test_legend_with_no_comments() {
        let legend = legend_from_counts(&SentimentCounts::default(), 0);
        assert!(legend.iter().all(|entry| entry.percent == 0.0));
    }

    #[test]
    fn test_legend_keeps_backend_percentages() {
        let percentages = SentimentPercentages {
            positive: 33.3,
            negative: 33.3,
            neutral: 33.3,
        };
        let legend = legend_from_percentages(&percentages, None);
        let sum: f64 = legend.iter().map(|entry| entry.percent).sum();
        assert!((sum - 99.9).abs() < 1e-9);
        assert!(legend.iter().all(|entry| entry.count.is_none()));

        let counts = SentimentCounts {
            positive: 4,
            negative: 4,
            neutral: 4,
        };
        let legend = legend_from_percentages(&percentages, Some(&counts));
        assert_eq!(legend[1].count, Some(4));
        assert_eq!(legend[1].percent, 33.3);
    }

    #[test]
    fn test_top_videos_by_comments() {
        let videos = vec![
            video("a", 5),
            video("b", 50),
            video("c", 20),
            video("d", 20),
            video("e", 1),
            video("f", 30),
        ];
        let top: Vec<&str> = top_videos_by_comments(&videos, TOP_VIDEO_COUNT)
            .iter()
            .map(|v| v.video_id.as_str())
            .collect();
        assert_eq!(top, vec!["b", "f", "c", "d", "a"]);
    }

    #[test]
    fn test_chart_label() {
        assert_eq!(chart_label("Tiny"), "Tiny");
        assert_eq!(
            chart_label("Twenty one characters"),
            "Twenty one character..."
        );
    }
}
