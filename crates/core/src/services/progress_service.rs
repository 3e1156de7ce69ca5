use std::collections::HashMap;

use crate::models::transaction::{
    AuditTotals, CumulativePoint, ProjectTotal, Transaction, TransactionKind,
};

/// Shapes raw transaction rows into the three chart view-models.
///
/// Every transform is a pure function over freshly fetched data; nothing is
/// cached or mutated in place between loads.
pub struct ProgressService;

impl ProgressService {
    pub fn new() -> Self {
        Self
    }

    /// Build the cumulative XP series backing the line chart.
    ///
    /// Filters to XP transactions under `module_prefix`, orders them by
    /// creation time (server order is trusted but re-sorted defensively),
    /// prepends a synthetic zero point at the earliest timestamp and runs
    /// a running sum. Empty input yields an empty series — the chart layer
    /// then renders nothing rather than invent a timestamp.
    #[must_use]
    pub fn cumulative_series(
        &self,
        transactions: &[Transaction],
        module_prefix: &str,
    ) -> Vec<CumulativePoint> {
        let mut xp: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Xp && t.path.starts_with(module_prefix))
            .collect();
        xp.sort_by_key(|t| t.created_at);

        let Some(first) = xp.first() else {
            return Vec::new();
        };

        let mut series = Vec::with_capacity(xp.len() + 1);
        series.push(CumulativePoint {
            at: first.created_at,
            cumulative: 0,
            path: None,
        });

        let mut running = 0;
        for t in &xp {
            running += t.amount;
            series.push(CumulativePoint {
                at: t.created_at,
                cumulative: running,
                path: Some(t.path.clone()),
            });
        }

        series
    }

    /// Per-project XP totals, ranked ascending by total.
    ///
    /// Kept as two separated pure steps: an insertion-ordered fold, then a
    /// stable sort — so equal totals keep their first-seen order.
    #[must_use]
    pub fn project_totals(
        &self,
        transactions: &[Transaction],
        module_prefix: &str,
    ) -> Vec<ProjectTotal> {
        rank_ascending(accumulate_by_project(transactions, module_prefix))
    }

    /// Partition up/down audit transactions and sum each side.
    #[must_use]
    pub fn audit_totals(&self, transactions: &[Transaction]) -> AuditTotals {
        let mut earned = 0;
        let mut received = 0;

        for t in transactions {
            match t.kind {
                TransactionKind::Up => earned += t.amount,
                TransactionKind::Down => received += t.amount,
                TransactionKind::Xp => {}
            }
        }

        let ratio = if received > 0 {
            earned as f64 / received as f64
        } else {
            0.0
        };

        AuditTotals {
            earned,
            received,
            ratio,
        }
    }
}

impl Default for ProgressService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold XP amounts into one total per project, keyed by the first path
/// segment after the module prefix, preserving first-seen order.
fn accumulate_by_project(transactions: &[Transaction], module_prefix: &str) -> Vec<ProjectTotal> {
    let mut totals: Vec<ProjectTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for t in transactions {
        if t.kind != TransactionKind::Xp {
            continue;
        }
        let Some(rest) = t.path.strip_prefix(module_prefix) else {
            continue;
        };
        let label = rest.split('/').next().unwrap_or(rest);

        match index.get(label) {
            Some(&i) => totals[i].amount += t.amount,
            None => {
                index.insert(label.to_string(), totals.len());
                totals.push(ProjectTotal {
                    label: label.to_string(),
                    amount: t.amount,
                });
            }
        }
    }

    totals
}

/// Ascending stable sort by total — ties keep insertion order.
fn rank_ascending(mut totals: Vec<ProjectTotal>) -> Vec<ProjectTotal> {
    totals.sort_by_key(|t| t.amount);
    totals
}
