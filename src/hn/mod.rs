//! Hacker News search module.
//!
//! Asynchronous interaction with the Algolia-backed Hacker News search API,
//! including transformation of response data into `Story` values.

mod client;
mod error;
mod models;
mod resource;

pub use error::HnError;
pub use resource::*;

use client::Client;
use log::*;

/// Default base URL of the search API.
///
pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com";

const SEARCH_PATH: &str = "api/v1/search";

/// Responsible for searching stories and validating response bodies.
///
#[derive(Clone)]
pub struct HackerNews {
    client: Client,
}

impl HackerNews {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<HackerNews, HnError> {
        debug!("Initializing search client for {}...", base_url);
        Ok(HackerNews {
            client: Client::new(base_url)?,
        })
    }

    /// Returns the stories matching the query, in server order. A body
    /// without a hits collection is a failure, not an empty result.
    ///
    pub async fn search(&self, query: &str) -> Result<Vec<Story>, HnError> {
        debug!("Searching stories for '{}'...", query);
        let body = self.client.get(SEARCH_PATH, &[("query", query)]).await?;
        let stories = models::stories_from_body(body)?;
        debug!("Retrieved {} stories for '{}'", stories.len(), query);
        Ok(stories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    fn hit(story: &Story) -> serde_json::Value {
        json!({
            "title": story.title,
            "url": story.url,
            "author": story.author,
            "num_comments": story.num_comments,
            "points": story.points,
            "objectID": story.id.to_string(),
        })
    }

    #[tokio::test]
    async fn search_success() {
        let stories: [Story; 2] = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/v1/search")
                    .query_param("query", "React");
                then.status(200)
                    .json_body(json!({ "hits": [hit(&stories[0]), hit(&stories[1])] }));
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        let result = hn.search("React").await.unwrap();
        assert_eq!(result, stories.to_vec());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_encodes_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/v1/search")
                    .query_param("query", "rust & go");
                then.status(200).json_body(json!({ "hits": [] }));
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        assert!(hn.search("rust & go").await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_missing_hits() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/search");
                then.status(200).json_body(json!({ "nbHits": 0 }));
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        let result = hn.search("React").await;
        assert!(matches!(result, Err(HnError::MissingField { .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_server_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/search");
                then.status(503);
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        assert!(hn.search("React").await.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_unreachable_host() {
        // Port 9 (discard) is not expected to run an HTTP server.
        let hn = HackerNews::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            hn.search("React").await,
            Err(HnError::HttpRequest(_))
        ));
    }
}
