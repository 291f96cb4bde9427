use crate::hn::HackerNews;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Search { token: u64, query: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    hn: &'a HackerNews,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, hn: &'a HackerNews) -> Self {
        Handler { state, hn }
    }

    /// Handle network events by type. Requests run on their own tasks so a
    /// slow search never holds up a newer one.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Search { token, query } => {
                self.search(token, query);
            }
        }
        Ok(())
    }

    /// Spawn the search and hand its outcome back to the state when it
    /// settles. The request itself is never aborted; a superseded outcome
    /// is dropped by the state.
    ///
    fn search(&self, token: u64, query: String) -> JoinHandle<()> {
        let state = Arc::clone(self.state);
        let hn = self.hn.clone();
        tokio::spawn(async move {
            let outcome = hn.search(&query).await;
            if let Err(e) = &outcome {
                warn!("Search for '{}' failed: {}", query, e);
            }
            let mut state = state.lock().await;
            if !state.settle_search(token, outcome) {
                debug!("Search for '{}' was superseded.", query);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::Status;
    use httpmock::MockServer;
    use serde_json::json;
    use std::time::Duration;

    fn hits(title: &str, author: &str, id: u64) -> serde_json::Value {
        json!({
            "hits": [{
                "title": title,
                "url": format!("https://example.com/{}", id),
                "author": author,
                "num_comments": 3,
                "points": 4,
                "objectID": id.to_string(),
            }]
        })
    }

    async fn searching_state(query: &str) -> Arc<Mutex<State>> {
        let state = Arc::new(Mutex::new(State::default()));
        state.lock().await.set_search_term(query);
        state
    }

    #[tokio::test]
    async fn search_success_loads_stories() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/v1/search")
                    .query_param("query", "React");
                then.status(200).json_body(hits("React", "Jordan Walke", 0));
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        let state = searching_state("React").await;
        let handler = Handler::new(&state, &hn);
        handler.search(1, "React".to_string()).await.unwrap();

        let state = state.lock().await;
        assert_eq!(state.get_stories().status, Status::Loaded);
        assert_eq!(state.get_stories().stories[0].author, "Jordan Walke");
        assert_eq!(state.get_total_comments(), 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_failure_sets_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/search");
                then.status(500);
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        let state = searching_state("React").await;
        let handler = Handler::new(&state, &hn);
        handler.search(1, "React".to_string()).await.unwrap();

        let state = state.lock().await;
        assert!(state.get_stories().is_error());
        assert!(!state.get_stories().is_loading());
        assert!(state.get_stories().stories.is_empty());
    }

    #[tokio::test]
    async fn slow_superseded_search_is_discarded() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/v1/search")
                    .query_param("query", "React");
                then.status(200)
                    .delay(Duration::from_millis(300))
                    .json_body(hits("React", "Jordan Walke", 0));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/v1/search")
                    .query_param("query", "Redux");
                then.status(200)
                    .json_body(hits("Redux", "Dan Abramov, Andrew Clark", 1));
            })
            .await;

        let hn = HackerNews::new(&server.base_url()).unwrap();
        let state = searching_state("React").await;
        let handler = Handler::new(&state, &hn);
        let react = handler.search(1, "React".to_string());
        state.lock().await.set_search_term("Redux");
        let redux = handler.search(2, "Redux".to_string());

        redux.await.unwrap();
        react.await.unwrap();

        let state = state.lock().await;
        assert_eq!(state.get_stories().status, Status::Loaded);
        assert_eq!(state.get_stories().stories.len(), 1);
        assert_eq!(state.get_stories().stories[0].title, "Redux");
    }
}
