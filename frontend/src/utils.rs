// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Whole-number share of `count` in `total`, rounded half up. Zero when there
/// is nothing to divide by.
pub fn percent_of(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u64
}

/// Percentages arrive from the backend with one decimal; print them without a
/// trailing `.0`.
pub fn format_percentage(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded}%")
}

/// Width for a CSS bar, clamped so bad data never overflows the container.
pub fn bar_width(percent: f64) -> String {
    format!("width: {}%", percent.clamp(0.0, 100.0))
}

pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let head: String = title.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}

pub fn video_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_trending_view_count_renders_with_commas() {
        let body = r#"{"trending_videos":[{"videoId":"x","title":"T","channelTitle":"C","viewCount":1234567}]}"#;
        let trending: crate::models::TrendingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            format_number(trending.trending_videos[0].view_count),
            "1,234,567"
        );
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(4, 4), 100);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(33.3), "33.3%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn test_bar_width_is_clamped() {
        assert_eq!(bar_width(42.5), "width: 42.5%");
        assert_eq!(bar_width(140.0), "width: 100%");
        assert_eq!(bar_width(-3.0), "width: 0%");
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("Short", 20), "Short");
        assert_eq!(
            truncate_title("A very long video title indeed", 20),
            "A very long video ti..."
        );
        assert_eq!(truncate_title("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("positive"), "Positive");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_video_urls() {
        assert_eq!(
            video_thumbnail_url("abc"),
            "https://img.youtube.com/vi/abc/mqdefault.jpg"
        );
        assert_eq!(video_embed_url("abc"), "https://www.youtube.com/embed/abc");
    }
}
