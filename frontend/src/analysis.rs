pub mod channel;
pub mod chart;
pub mod components;
pub mod insights;
pub mod video;

use crate::api::ApiError;

/// Text for a page's error slot. The backend message wins; a blank one gets
/// the page's own wording.
pub fn error_text(error: &ApiError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text_prefers_backend_message() {
        let error = ApiError::Backend {
            status: 404,
            message: "No comments found or comments are disabled for this video".to_string(),
        };
        assert_eq!(
            error_text(&error, "Failed to analyze video. Please try again."),
            "No comments found or comments are disabled for this video"
        );
    }

    #[test]
    fn test_error_text_blank_message() {
        let error = ApiError::Transport(String::new());
        assert_eq!(error_text(&error, "Try again."), "Try again.");
    }
}
