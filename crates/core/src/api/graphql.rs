use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::QueryExecutor;
use crate::errors::CoreError;

/// HTTP GraphQL client: one fixed endpoint, one POST per query, bearer
/// token header.
///
/// A non-success HTTP status yields `CoreError::Api` carrying the raw
/// response body text, so callers branch on a typed result instead of
/// sniffing the payload shape. Network failures are logged and surfaced
/// as `CoreError::Network`; nothing is retried.
pub struct GraphqlClient {
    client: Client,
    url: String,
}

impl GraphqlClient {
    pub fn new(url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QueryExecutor for GraphqlClient {
    async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
        token: &str,
    ) -> Result<Value, CoreError> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("GraphQL request failed: {e}");
                CoreError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("GraphQL endpoint answered HTTP {status}: {body}");
            return Err(CoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await.map_err(|e| {
            CoreError::MalformedResponse(format!("GraphQL response was not JSON: {e}"))
        })?;

        Ok(value)
    }
}
