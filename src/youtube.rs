/// Client-side sanity check for the YouTube input mode.
///
/// Server-side extraction is not available, but rejecting obviously wrong
/// input here saves the user a round trip to an error toast later.
pub fn is_youtube_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let rest = rest
        .strip_prefix("www.")
        .or_else(|| rest.strip_prefix("m."))
        .unwrap_or(rest);

    if let Some(path) = rest.strip_prefix("youtu.be/") {
        return !video_id(path).is_empty();
    }
    if let Some(path) = rest.strip_prefix("youtube.com/") {
        if let Some(query) = path.strip_prefix("watch?") {
            return query
                .split('&')
                .filter_map(|pair| pair.strip_prefix("v="))
                .any(|id| !id.is_empty());
        }
        if let Some(id) = path.strip_prefix("shorts/") {
            return !video_id(id).is_empty();
        }
        if let Some(id) = path.strip_prefix("live/") {
            return !video_id(id).is_empty();
        }
    }
    false
}

fn video_id(path: &str) -> &str {
    path.split(['?', '&', '/']).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_common_watch_forms() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("http://youtube.com/watch?v=abc123"));
        assert!(is_youtube_url("m.youtube.com/watch?v=abc123"));
        assert!(is_youtube_url("https://www.youtube.com/watch?t=10&v=abc123"));
    }

    #[test]
    fn accepts_short_links_and_shorts() {
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_youtube_url("youtu.be/dQw4w9WgXcQ?t=30"));
        assert!(is_youtube_url("https://www.youtube.com/shorts/abc123"));
        assert!(is_youtube_url("https://www.youtube.com/live/abc123"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_youtube_url(""));
        assert!(!is_youtube_url("   "));
        assert!(!is_youtube_url("https://vimeo.com/12345"));
        assert!(!is_youtube_url("not a url"));
        assert!(!is_youtube_url("https://www.youtube.com/watch?v="));
        assert!(!is_youtube_url("https://youtu.be/"));
        assert!(!is_youtube_url("https://youtube.com/feed/subscriptions"));
    }
}
