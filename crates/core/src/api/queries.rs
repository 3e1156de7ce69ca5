//! The four fixed GraphQL queries plus their typed response decoding.
//!
//! Query text never changes at runtime; the path-prefix regex travels as a
//! variable built from [`Settings`]. Decoding converts the engine's JSON
//! envelope into models, turning any unexpected shape into
//! `CoreError::MalformedResponse` instead of undefined behavior.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::CoreError;
use crate::models::settings::Settings;
use crate::models::transaction::Transaction;
use crate::models::user::{UserAttrs, UserProfile};

/// Profile details plus the aggregate XP sum under the path prefix.
pub const USER_PROFILE: &str = "\
query UserProfile($regex: String!, $type: String!) {
    user {
        login
        firstName
        lastName
        email
        campus
        attrs
        totalUp
        totalDown
        auditRatio
        transactions_aggregate(
            where: { path: { _regex: $regex }, type: { _eq: $type } }
        ) {
            aggregate { sum { amount } }
        }
    }
}";

/// XP transactions under the prefix, ordered by amount ascending.
pub const XP_BY_PROJECT: &str = "\
query XpByProject($regex: String!, $type: String!) {
    transaction(
        where: { path: { _regex: $regex }, type: { _eq: $type } }
        order_by: { amount: asc }
    ) {
        amount
        createdAt
        path
        type
    }
}";

/// The same transactions ordered by creation time — the cumulative series.
pub const XP_OVER_TIME: &str = "\
query XpOverTime($regex: String!, $type: String!) {
    transaction(
        where: { path: { _regex: $regex }, type: { _eq: $type } }
        order_by: { createdAt: asc }
    ) {
        amount
        createdAt
        path
        type
    }
}";

/// Every up/down audit transaction, unfiltered by path.
pub const AUDITS: &str = "\
query Audits {
    transaction(
        where: { _or: [{ type: { _eq: \"up\" } }, { type: { _eq: \"down\" } }] }
    ) {
        amount
        createdAt
        path
        type
    }
}";

/// Variables for the three prefix-filtered XP queries.
#[must_use]
pub fn xp_variables(settings: &Settings) -> Value {
    json!({ "regex": settings.path_regex(), "type": "xp" })
}

// ── Response envelope ───────────────────────────────────────────────

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// Unwrap the `{data, errors}` envelope into the typed payload.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CoreError> {
    let envelope: Envelope<T> = serde_json::from_value(value)?;

    if let Some(first) = envelope.errors.first() {
        return Err(CoreError::Query(first.message.clone()));
    }

    envelope
        .data
        .ok_or_else(|| CoreError::MalformedResponse("response carried no data".to_string()))
}

// ── User profile decoding ───────────────────────────────────────────

#[derive(Deserialize)]
struct UserData {
    user: Vec<RawUser>,
}

#[derive(Deserialize)]
struct RawUser {
    login: String,
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "lastName")]
    last_name: String,
    email: String,
    campus: String,
    #[serde(default)]
    attrs: UserAttrs,
    #[serde(rename = "totalUp")]
    total_up: i64,
    #[serde(rename = "totalDown")]
    total_down: i64,
    #[serde(rename = "auditRatio")]
    audit_ratio: f64,
    transactions_aggregate: Aggregate,
}

#[derive(Deserialize)]
struct Aggregate {
    aggregate: AggregateSum,
}

#[derive(Deserialize)]
struct AggregateSum {
    sum: SumAmount,
}

#[derive(Deserialize)]
struct SumAmount {
    // null when no transactions matched the filter
    amount: Option<i64>,
}

/// Decode the `USER_PROFILE` response. The engine returns a one-element
/// `user` list scoped to the token's owner.
pub fn decode_user_profile(value: Value) -> Result<UserProfile, CoreError> {
    let data: UserData = decode(value)?;
    let raw = data
        .user
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::MalformedResponse("user list was empty".to_string()))?;

    Ok(UserProfile {
        login: raw.login,
        first_name: raw.first_name,
        last_name: raw.last_name,
        email: raw.email,
        campus: raw.campus,
        attrs: raw.attrs,
        audit_ratio: raw.audit_ratio,
        total_up: raw.total_up,
        total_down: raw.total_down,
        total_xp: raw.transactions_aggregate.aggregate.sum.amount.unwrap_or(0),
    })
}

// ── Transaction list decoding ───────────────────────────────────────

#[derive(Deserialize)]
struct TransactionData {
    transaction: Vec<Transaction>,
}

/// Decode any of the three transaction-list responses.
pub fn decode_transactions(value: Value) -> Result<Vec<Transaction>, CoreError> {
    let data: TransactionData = decode(value)?;
    Ok(data.transaction)
}
