use crate::models::{ChannelAnalysisResult, SentimentPercentages, VideoSentimentSummary};
use crate::utils::format_number;

pub const MOSTLY_POSITIVE: &str = "Your audience is predominantly positive. They appreciate your content and engage with it constructively.";
pub const NOTABLY_NEGATIVE: &str = "There's significant negativity in your comments. Consider addressing audience concerns in upcoming videos.";
pub const MIXED: &str = "Your audience sentiment is mixed. Focus on topics from your most positively-received videos to boost engagement.";

pub fn audience_mood(percentages: &SentimentPercentages) -> &'static str {
    if percentages.positive > 50.0 {
        MOSTLY_POSITIVE
    } else if percentages.negative > 30.0 {
        NOTABLY_NEGATIVE
    } else {
        MIXED
    }
}

/// Highest positive share wins; the earliest video wins a tie.
pub fn best_received_video(videos: &[VideoSentimentSummary]) -> Option<&VideoSentimentSummary> {
    videos.iter().fold(None, |best, video| match best {
        Some(current)
            if current.sentiment_percentages.positive >= video.sentiment_percentages.positive =>
        {
            Some(current)
        }
        _ => Some(video),
    })
}

pub fn content_strategy(videos: &[VideoSentimentSummary]) -> String {
    let focus = match best_received_video(videos) {
        Some(video) => format!(" videos like \"{}\".", video.title),
        None => " your most popular content themes.".to_string(),
    };
    format!(
        "Based on your comment sentiment analysis, consider creating more content similar to your most positively-received videos. Your audience particularly engages with{focus}"
    )
}

pub fn engagement_tip(total_comments: u64, percentages: &SentimentPercentages) -> String {
    let momentum = if percentages.positive > percentages.negative {
        "positive momentum"
    } else {
        "areas for improvement"
    };
    let tip = if percentages.neutral > 40.0 {
        "Try to create more emotionally resonant content to reduce neutral sentiment."
    } else {
        "Keep fostering the conversation with your audience through comments."
    };
    format!(
        "With {} comments analyzed, your channel shows {momentum} in audience engagement. {tip}",
        format_number(total_comments)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInsights {
    pub mood: &'static str,
    pub strategy: String,
    pub engagement: String,
}

impl ChannelInsights {
    pub fn from_analysis(analysis: &ChannelAnalysisResult) -> Self {
        let percentages = &analysis.overall_sentiment_percentages;
        Self {
            mood: audience_mood(percentages),
            strategy: content_strategy(&analysis.per_video_analysis),
            engagement: engagement_tip(analysis.total_comments, percentages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentCounts;

    fn percentages(positive: f64, negative: f64, neutral: f64) -> SentimentPercentages {
        SentimentPercentages {
            positive,
            negative,
            neutral,
        }
    }

    fn video(title: &str, positive: f64) -> VideoSentimentSummary {
        VideoSentimentSummary {
            video_id: title.to_lowercase(),
            title: title.to_string(),
            comment_count: 10,
            sentiment_counts: SentimentCounts::default(),
            sentiment_percentages: percentages(positive, 0.0, 100.0 - positive),
        }
    }

    #[test]
    fn test_audience_mood_thresholds() {
        assert_eq!(audience_mood(&percentages(50.1, 40.0, 9.9)), MOSTLY_POSITIVE);
        assert_eq!(audience_mood(&percentages(50.0, 30.1, 19.9)), NOTABLY_NEGATIVE);
        assert_eq!(audience_mood(&percentages(40.0, 30.0, 30.0)), MIXED);
    }

    #[test]
    fn test_best_received_video() {
        let videos = vec![video("Intro", 40.0), video("Deep dive", 72.5), video("Q&A", 72.5)];
        assert_eq!(best_received_video(&videos).unwrap().title, "Deep dive");
        assert!(best_received_video(&[]).is_none());
    }

    #[test]
    fn test_content_strategy_names_best_video() {
        let videos = vec![video("Intro", 40.0), video("Deep dive", 72.5)];
        assert!(content_strategy(&videos).ends_with("videos like \"Deep dive\"."));
        assert!(content_strategy(&[]).ends_with("your most popular content themes."));
    }

    #[test]
    fn test_engagement_tip() {
        let tip = engagement_tip(12_345, &percentages(60.0, 10.0, 30.0));
        assert!(tip.starts_with("With 12,345 comments analyzed"));
        assert!(tip.contains("positive momentum"));
        assert!(tip.ends_with("through comments."));

        let tip = engagement_tip(3, &percentages(10.0, 10.0, 80.0));
        assert!(tip.contains("areas for improvement"));
        assert!(tip.ends_with("reduce neutral sentiment."));
    }
}
