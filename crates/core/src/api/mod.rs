pub mod queries;
pub mod session;
pub mod traits;

// HTTP collaborator implementations
pub mod auth;
pub mod graphql;
