use async_trait::async_trait;
use serde_json::Value;

use crate::errors::CoreError;

/// Trait abstraction for the sign-in collaborator.
///
/// The HTTP implementation lives in [`super::auth`]; tests substitute a
/// mock so the whole login flow runs without a network.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for an opaque bearer-token string.
    async fn sign_in(&self, username: &str, password: &str) -> Result<String, CoreError>;
}

/// Trait abstraction for the GraphQL query collaborator.
///
/// One fixed endpoint, one POST per call. The token must be a non-empty
/// string obtained from a prior successful sign-in.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run one query and return the parsed JSON envelope.
    async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
        token: &str,
    ) -> Result<Value, CoreError>;
}

/// Persistence for the single session token, keyed implicitly by the
/// hosting environment (browser tab session, process memory, …).
pub trait SessionStore: Send + Sync {
    /// The stored token, if a session is active.
    fn token(&self) -> Option<String>;

    /// Persist a freshly issued token.
    fn store(&mut self, token: String);

    /// Forget the token, ending the session.
    fn clear(&mut self);
}
