//! Normalisation of the YouTube link shapes a card may receive.
//!
//! Matchers are tried in order: watch URL with a `v` query parameter, short share
//! link, then the canonical embed link. Anything else passes through unchanged.

use super::model::embed_url_for;

const WATCH_PATTERN: &str = r"[?&]v=([\w-]+)";
const SHORT_PATTERN: &str = r"youtu\.be/([\w-]+)";
const EMBED_PATTERN: &str = r"youtube\.com/embed/[\w-]+";

/// Returns the canonical `https://www.youtube.com/embed/{id}` form of `link`.
///
/// Idempotent: an already canonical link comes back unchanged.
pub fn normalize_embed_url(link: &str) -> String {
    for pattern in [WATCH_PATTERN, SHORT_PATTERN] {
        if let Some(video_id) = capture_video_id(pattern, link) {
            return embed_url_for(&video_id);
        }
    }

    link.to_string()
}

/// True when `link` points at a YouTube embed player, with or without `www.` or
/// player parameters.
pub fn is_embed_url(link: &str) -> bool {
    regex::Regex::new(EMBED_PATTERN)
        .map(|re| re.is_match(link))
        .unwrap_or(false)
}

fn capture_video_id(pattern: &str, link: &str) -> Option<String> {
    regex::Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(link))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANONICAL: &str = "https://www.youtube.com/embed/abc123";

    #[test]
    fn should_normalize_watch_url() {
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/watch?v=abc123"),
            CANONICAL
        );
    }

    #[test]
    fn should_normalize_watch_url_with_extra_parameters() {
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/watch?list=PL1&v=abc123&t=42s"),
            CANONICAL
        );
    }

    #[test]
    fn should_normalize_short_url() {
        assert_eq!(normalize_embed_url("https://youtu.be/abc123"), CANONICAL);
        assert_eq!(normalize_embed_url("https://youtu.be/abc123?t=7"), CANONICAL);
    }

    #[test]
    fn should_keep_canonical_url() {
        assert_eq!(normalize_embed_url(CANONICAL), CANONICAL);
        assert!(is_embed_url(CANONICAL));
    }

    #[test]
    fn should_pass_unknown_links_through() {
        let link = "https://vimeo.com/12345";
        assert_eq!(normalize_embed_url(link), link);
        assert!(!is_embed_url(link));
    }

    #[test]
    fn should_pass_unknown_links_through_untrimmed() {
        let link = "  https://vimeo.com/12345 \n";
        assert_eq!(normalize_embed_url(link), link);
    }

    #[test]
    fn should_normalize_padded_watch_url() {
        assert_eq!(
            normalize_embed_url(" https://www.youtube.com/watch?v=abc123 "),
            CANONICAL
        );
    }

    #[test]
    fn should_accept_embed_links_with_player_parameters() {
        assert!(is_embed_url("https://www.youtube.com/embed/abc123?autoplay=1"));
        assert!(is_embed_url("https://youtube.com/embed/abc123"));
        assert!(!is_embed_url("https://www.youtube.com/embed/"));
    }

    proptest! {
        #[test]
        fn all_shapes_agree_and_normalization_is_idempotent(id in "[A-Za-z0-9_-]{1,16}") {
            let canonical = embed_url_for(&id);
            let shapes = [
                format!("https://www.youtube.com/watch?v={}", id),
                format!("https://youtu.be/{}", id),
                canonical.clone(),
            ];
            for shape in shapes {
                let once = normalize_embed_url(&shape);
                prop_assert_eq!(&once, &canonical);
                prop_assert_eq!(normalize_embed_url(&once), once.clone());
            }
        }

        #[test]
        fn normalization_is_idempotent_for_any_input(link in "\\PC{0,60}") {
            let once = normalize_embed_url(&link);
            prop_assert_eq!(normalize_embed_url(&once), once);
        }
    }
}
