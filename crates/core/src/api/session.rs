use super::traits::SessionStore;

/// In-memory session store — the default collaborator when the host
/// doesn't bring its own (browser sessionStorage, keyring, …).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Option<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already holding a token (e.g. restored by the host).
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: String) {
        self.token = Some(token);
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
