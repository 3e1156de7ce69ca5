use serde::{Deserialize, Serialize};

use super::chart::Chart;
use super::transaction::AuditTotals;
use super::user::UserProfile;

/// Everything one render pass needs: profile details, audit totals and the
/// three fully laid-out charts.
///
/// The core generates this — the frontend just renders. Nothing here
/// survives past the render pass; the next load rebuilds it from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub profile: UserProfile,
    pub audits: AuditTotals,

    /// Cumulative XP over time (800×400 line chart)
    pub progress_chart: Chart,

    /// "(Jan 01 2024 - Mar 15 2024)"-style span label shown next to the
    /// progress chart; `None` when there were no XP transactions
    pub date_range: Option<String>,

    /// XP per project, ranked ascending (bar chart)
    pub xp_by_project_chart: Chart,

    /// Audits earned vs received (bar chart)
    pub audit_chart: Chart,
}
