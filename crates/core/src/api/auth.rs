use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::Authenticator;
use crate::errors::CoreError;

/// HTTP sign-in collaborator.
///
/// POSTs to the fixed sign-in endpoint with HTTP Basic credentials; a
/// successful response body is the bearer token as a JSON-encoded string.
/// Bad credentials surface as `CoreError::AuthFailed` with an inline,
/// user-displayable message — no retry.
pub struct AuthClient {
    client: Client,
    url: String,
}

impl AuthClient {
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
impl Authenticator for AuthClient {
    async fn sign_in(&self, username: &str, password: &str) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.url)
            .basic_auth(username, Some(password))
            .send()
            .await
            .map_err(|e| {
                log::error!("sign-in request failed: {e}");
                CoreError::from(e)
            })?;

        if !response.status().is_success() {
            log::warn!("sign-in rejected with HTTP {}", response.status());
            return Err(CoreError::AuthFailed);
        }

        let token: String = response.json().await.map_err(|e| {
            CoreError::MalformedResponse(format!("sign-in response was not a token string: {e}"))
        })?;

        Ok(token)
    }
}
