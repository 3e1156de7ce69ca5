use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a progress transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Experience points earned by finishing a project
    Xp,
    /// Audit points earned by reviewing someone else's work
    Up,
    /// Audit points spent on having own work reviewed
    Down,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Xp => write!(f, "xp"),
            TransactionKind::Up => write!(f, "up"),
            TransactionKind::Down => write!(f, "down"),
        }
    }
}

/// A single XP or audit transaction as returned by the GraphQL engine.
///
/// Immutable once fetched — every derived view-model is recomputed from
/// scratch on each load, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed amount in XP units (or audit-point units for up/down)
    pub amount: i64,

    /// Server-side creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Hierarchical project identifier, e.g. "/johvi/div-01/graphql"
    pub path: String,

    /// xp, up or down
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        amount: i64,
        created_at: DateTime<Utc>,
        path: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            amount,
            created_at,
            path: path.into(),
            kind,
        }
    }
}

/// One entry of the cumulative XP series: a timestamp, the running total
/// up to and including it, and the project path for the hover label.
///
/// The first entry is always a synthetic zero at the earliest timestamp
/// (it carries no path) so the rendered line starts on the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub at: DateTime<Utc>,
    pub cumulative: i64,
    pub path: Option<String>,
}

/// Aggregate XP total for one project — one per distinct top-level path
/// segment after the configured module prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTotal {
    /// Project name with the module prefix stripped (e.g. "graphql")
    pub label: String,

    /// Summed XP amount for the project
    pub amount: i64,
}

/// Summed audit points for one session, split by direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTotals {
    /// Points from audits the user performed (type `up`)
    pub earned: i64,

    /// Points from audits performed on the user's work (type `down`)
    pub received: i64,

    /// earned / received; 0.0 when nothing was received
    pub ratio: f64,
}

impl AuditTotals {
    /// The two-bar form consumed by the ranked bar chart.
    #[must_use]
    pub fn as_ranked(&self) -> Vec<ProjectTotal> {
        vec![
            ProjectTotal {
                label: "Audits Earned".to_string(),
                amount: self.earned,
            },
            ProjectTotal {
                label: "Audits Received".to_string(),
                amount: self.received,
            },
        ]
    }
}
