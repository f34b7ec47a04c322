use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::UpstreamError;
use business::domain::video::errors::VideoError;
use business::domain::video::model::VideoSuggestion;
use business::domain::video::services::VideoRecommenderService;

use crate::client::YouTubeClient;

const QUERY_PREFIX: &str = "upcycling";
const MAX_RESULTS: u8 = 5;

#[derive(Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: Option<SearchItemId>,
    snippet: Option<Snippet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    description: Option<String>,
}

pub struct VideoRecommenderYouTube {
    client: YouTubeClient,
}

impl VideoRecommenderYouTube {
    pub fn new(client: YouTubeClient) -> Self {
        Self { client }
    }

    fn search_query(item_name: &str) -> String {
        format!("{} {}", QUERY_PREFIX, item_name.trim())
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("maxResults", MAX_RESULTS.to_string()),
            ("q", query.to_string()),
            ("order", "date".to_string()),
            ("videoEmbeddable", "true".to_string()),
            ("key", self.client.api_key.clone()),
        ]
    }

    /// Non-success statuses become [`UpstreamError::Status`] with the raw body as detail.
    fn map_response(status: u16, body: &str) -> Result<Vec<VideoSuggestion>, VideoError> {
        if !(200..300).contains(&status) {
            return Err(UpstreamError::status(status, body).into());
        }

        Self::parse_response(body)
    }

    /// Maps raw hits in response order. Hits without a video id cannot be embedded
    /// and are skipped.
    fn parse_response(body: &str) -> Result<Vec<VideoSuggestion>, VideoError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|e| UpstreamError::decode(e.to_string()))?;

        let suggestions: Vec<VideoSuggestion> = response
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id?.video_id.filter(|id| !id.is_empty())?;
                let snippet = item.snippet?;
                Some(VideoSuggestion::from_search_hit(
                    &video_id,
                    snippet.title,
                    snippet.channel_title,
                    snippet.description.as_deref(),
                ))
            })
            .collect();

        if suggestions.is_empty() {
            return Err(VideoError::NoResults);
        }

        Ok(suggestions)
    }
}

#[async_trait]
impl VideoRecommenderService for VideoRecommenderYouTube {
    async fn recommend(&self, item_name: &str) -> Result<Vec<VideoSuggestion>, VideoError> {
        let query = Self::search_query(item_name);

        let response = self
            .client
            .client
            .get(self.client.search_url())
            .query(&self.query_params(&query))
            .send()
            .await
            .map_err(|e| UpstreamError::transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::decode(e.without_url().to_string()))?;

        Self::map_response(status.as_u16(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::video::model::{DESCRIPTION_LIMIT, DESCRIPTION_PLACEHOLDER};
    use serde_json::json;

    fn hit(id: &str, title: &str, description: Option<&str>) -> serde_json::Value {
        json!({
            "kind": "youtube#searchResult",
            "id": {"kind": "youtube#video", "videoId": id},
            "snippet": {
                "title": title,
                "channelTitle": "Upcycle Studio",
                "description": description,
            }
        })
    }

    #[test]
    fn should_compose_query_with_upcycling_prefix() {
        assert_eq!(
            VideoRecommenderYouTube::search_query(" plastic bottle "),
            "upcycling plastic bottle"
        );
    }

    #[test]
    fn should_request_recent_embeddable_videos() {
        let recommender = VideoRecommenderYouTube::new(YouTubeClient::new("secret".to_string()));

        let params = recommender.query_params("upcycling jar");

        let get = |name: &str| {
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        };
        assert_eq!(get("type"), Some("video"));
        assert_eq!(get("maxResults"), Some("5"));
        assert_eq!(get("order"), Some("date"));
        assert_eq!(get("videoEmbeddable"), Some("true"));
        assert_eq!(get("q"), Some("upcycling jar"));
        assert_eq!(get("key"), Some("secret"));
    }

    #[test]
    fn should_carry_quota_error_body_on_failed_status() {
        let body = json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"reason": "quotaExceeded", "domain": "youtube.quota"}]
            }
        })
        .to_string();

        let result = VideoRecommenderYouTube::map_response(403, &body);

        assert_eq!(
            result,
            Err(VideoError::Upstream(UpstreamError::status(403, body.clone())))
        );
        let detail = match result {
            Err(VideoError::Upstream(error)) => error.detail(),
            other => panic!("unexpected result {:?}", other),
        };
        assert!(detail.starts_with("HTTP 403: "));
        assert!(detail.contains("quotaExceeded"));
    }

    #[test]
    fn should_parse_hits_on_successful_status() {
        let body = json!({"items": [hit("vid1", "Jar lantern", Some("Light"))]}).to_string();

        let videos = VideoRecommenderYouTube::map_response(200, &body).unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].embed_url, "https://www.youtube.com/embed/vid1");
    }

    #[test]
    fn should_map_items_in_response_order() {
        let body = json!({
            "items": [
                hit("vid1", "Bottle planter", Some("Grow herbs")),
                hit("vid2", "Bottle lamp", None),
                hit("vid3", "Bottle bird feeder", Some("")),
            ]
        })
        .to_string();

        let videos = VideoRecommenderYouTube::parse_response(&body).unwrap();

        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0].title, "Bottle planter");
        assert_eq!(videos[0].channel, "Upcycle Studio");
        assert_eq!(videos[0].embed_url, "https://www.youtube.com/embed/vid1");
        assert_eq!(videos[1].description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(videos[2].description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(videos[2].embed_url, "https://www.youtube.com/embed/vid3");
    }

    #[test]
    fn should_truncate_long_descriptions() {
        let long = "x".repeat(DESCRIPTION_LIMIT + 57);
        let body = json!({"items": [hit("vid1", "Jar", Some(long.as_str()))]}).to_string();

        let videos = VideoRecommenderYouTube::parse_response(&body).unwrap();

        assert_eq!(videos[0].description.len(), DESCRIPTION_LIMIT);
        assert!(long.starts_with(&videos[0].description));
    }

    #[test]
    fn should_fail_with_no_results_for_empty_items() {
        let result = VideoRecommenderYouTube::parse_response(r#"{"items": []}"#);
        assert_eq!(result, Err(VideoError::NoResults));
    }

    #[test]
    fn should_fail_with_no_results_when_items_missing() {
        let result = VideoRecommenderYouTube::parse_response("{}");
        assert_eq!(result, Err(VideoError::NoResults));
    }

    #[test]
    fn should_skip_hits_without_video_id() {
        let body = json!({
            "items": [
                {"id": {"kind": "youtube#channel", "channelId": "c1"}, "snippet": {"title": "Channel"}},
                hit("vid9", "Can robot", None),
            ]
        })
        .to_string();

        let videos = VideoRecommenderYouTube::parse_response(&body).unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].embed_url, "https://www.youtube.com/embed/vid9");
    }

    #[test]
    fn should_report_undecodable_body() {
        let result = VideoRecommenderYouTube::parse_response("not json");
        assert!(matches!(
            result,
            Err(VideoError::Upstream(UpstreamError::Decode(_)))
        ));
    }
}
