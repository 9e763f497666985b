// file: src/transport/fake.rs
// description: scripted in-memory transport used by unit tests

use super::{HttpResponse, HttpTransport};
use crate::error::{RagError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

struct Route {
    url_suffix: String,
    reply: Reply,
    /// `None` answers forever.
    uses_left: Option<usize>,
}

/// Replies are matched by URL suffix in registration order, skipping routes
/// whose uses ran out; unmatched requests get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(self, url_suffix: &str, reply: Reply, uses_left: Option<usize>) -> Self {
        self.routes.lock().unwrap().push(Route {
            url_suffix: url_suffix.to_string(),
            reply,
            uses_left,
        });
        self
    }

    pub fn respond(self, url_suffix: &str, status: u16, body: impl Into<String>) -> Self {
        let reply = Reply::Respond(HttpResponse::new(status, body));
        self.route(url_suffix, reply, None)
    }

    /// Like `respond`, but only for the next `times` matching requests.
    pub fn respond_times(
        self,
        url_suffix: &str,
        times: usize,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        let reply = Reply::Respond(HttpResponse::new(status, body));
        self.route(url_suffix, reply, Some(times))
    }

    pub fn fail(self, url_suffix: &str, message: &str) -> Self {
        self.route(url_suffix, Reply::Fail(message.to_string()), None)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, url_suffix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url.ends_with(url_suffix))
            .collect()
    }

    fn reply(&self, method: &'static str, url: &str, body: Option<&Value>) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });

        let mut routes = self.routes.lock().unwrap();
        let route = routes
            .iter_mut()
            .find(|r| url.ends_with(&r.url_suffix) && r.uses_left != Some(0));

        let Some(route) = route else {
            return Ok(HttpResponse::new(404, "no route"));
        };
        if let Some(uses_left) = route.uses_left.as_mut() {
            *uses_left -= 1;
        }

        match &route.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(RagError::Transport {
                url: url.to_string(),
                message: message.clone(),
            }),
        }
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse> {
        self.reply("POST", url, Some(body))
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.reply("GET", url, None)
    }
}
