use serde::{Deserialize, Serialize};

/// Endpoint and namespace configuration.
///
/// The path-prefix regex sent to the GraphQL engine is a configuration
/// constant derived here, never computed from fetched data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// GraphQL endpoint (single fixed POST target)
    pub graphql_url: String,

    /// Basic-auth sign-in endpoint
    pub signin_url: String,

    /// Module namespace all XP queries are filtered under,
    /// e.g. "/johvi/div-01/"
    pub module_prefix: String,

    /// Campus namespace stripped from hover labels, e.g. "/johvi/"
    pub campus_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphql_url: "https://01.kood.tech/api/graphql-engine/v1/graphql".to_string(),
            signin_url: "https://01.kood.tech/api/auth/signin".to_string(),
            module_prefix: "/johvi/div-01/".to_string(),
            campus_prefix: "/johvi/".to_string(),
        }
    }
}

impl Settings {
    /// The `_regex` filter matching exactly one project segment under the
    /// module prefix (slashes in the prefix are escaped for the engine).
    #[must_use]
    pub fn path_regex(&self) -> String {
        let escaped = self.module_prefix.replace('/', "\\/");
        format!("^{escaped}[-\\w]+$")
    }
}
