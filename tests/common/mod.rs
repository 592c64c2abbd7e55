//! Shared test utilities for integration tests

use std::sync::Mutex;
use async_trait::async_trait;
use dashquery::request::Endpoint;
use dashquery::{parser, ClientError, EventsClient, Settings, WidgetQuery};
use serde_json::Value;

/// Load a settings fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Settings {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

pub fn query(columns: &[&str], aggregates: &[&str], orderby: &str) -> WidgetQuery {
    WidgetQuery {
        columns: strings(columns),
        aggregates: strings(aggregates),
        orderby: orderby.to_string(),
        ..Default::default()
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// All values of a query parameter, in order
pub fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// A recorded call: endpoint path and query parameters
pub type Call = (String, Vec<(String, String)>);

/// Replies with a canned body (or error) and records every call
pub struct MockClient {
    reply: Result<Value, u16>,
    pub calls: Mutex<Vec<Call>>,
}

impl MockClient {
    pub fn replying(body: Value) -> Self {
        Self { reply: Ok(body), calls: Mutex::new(vec![]) }
    }

    pub fn failing(status: u16) -> Self {
        Self { reply: Err(status), calls: Mutex::new(vec![]) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventsClient for MockClient {
    async fn execute(&self, endpoint: &Endpoint, params: &[(String, String)]) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push((endpoint.path(), params.to_vec()));
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(code) => Err(ClientError::Status { code: *code, detail: "mock failure".to_string() }),
        }
    }
}
