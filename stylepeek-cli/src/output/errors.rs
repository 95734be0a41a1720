//! User-facing error messages.

/// Maps an error message to the text shown to the user.
///
/// Matching is by substring, first match wins.
pub fn friendly_message(message: &str) -> String {
    if message.contains("Invalid URL format") {
        "Please enter a valid domain (like apple.com) or full URL (like https://example.com)"
            .to_string()
    } else if message.contains("CORS") {
        "CORS error: The website does not allow cross-origin requests. Try a different website."
            .to_string()
    } else if message.contains("Failed to fetch") {
        "Could not fetch the website. Please check if the URL is correct and accessible."
            .to_string()
    } else if message.contains("Network") {
        "Network error. Please check your internet connection and try again.".to_string()
    } else {
        format!("Error: {message}")
    }
}
