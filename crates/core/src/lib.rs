pub mod api;
pub mod errors;
pub mod format;
pub mod models;
pub mod services;
pub mod svg;

use api::auth::AuthClient;
use api::graphql::GraphqlClient;
use api::queries;
use api::session::MemorySessionStore;
use api::traits::{Authenticator, QueryExecutor, SessionStore};
use errors::CoreError;
use models::settings::Settings;
use models::transaction::Transaction;
use models::view::DashboardView;
use services::chart_service::ChartService;
use services::progress_service::ProgressService;

/// The two states a page session can be in. Transitions are
/// one-directional per load: `login` moves forward, `logout` resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Main entry point for the progress-profile core library.
///
/// Orchestrates auth state, runs the fixed GraphQL queries through the
/// query collaborator, feeds the rows through the data shaper into the
/// chart layout, and hands the frontend one ready-to-render
/// [`DashboardView`] per load.
#[must_use]
pub struct ProfileDashboard {
    settings: Settings,
    authenticator: Box<dyn Authenticator>,
    executor: Box<dyn QueryExecutor>,
    session: Box<dyn SessionStore>,
    progress_service: ProgressService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ProfileDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileDashboard")
            .field("settings", &self.settings)
            .field("state", &self.state())
            .finish()
    }
}

impl ProfileDashboard {
    /// Build a dashboard wired to the real HTTP collaborators.
    pub fn connect(settings: Settings) -> Self {
        let authenticator = Box::new(AuthClient::new(settings.signin_url.clone()));
        let executor = Box::new(GraphqlClient::new(settings.graphql_url.clone()));
        Self::with_collaborators(
            settings,
            authenticator,
            executor,
            Box::new(MemorySessionStore::new()),
        )
    }

    /// Build a dashboard with explicit collaborators — the seam tests and
    /// embedding hosts (custom session persistence) use.
    pub fn with_collaborators(
        settings: Settings,
        authenticator: Box<dyn Authenticator>,
        executor: Box<dyn QueryExecutor>,
        session: Box<dyn SessionStore>,
    ) -> Self {
        Self {
            settings,
            authenticator,
            executor,
            session,
            progress_service: ProgressService::new(),
            chart_service: ChartService::new(),
        }
    }

    /// Current session state, derived from whether a token is stored.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.session.token().is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// Validate the form fields, sign in, and store the issued token.
    ///
    /// Empty fields fail client-side with `CoreError::Validation`; bad
    /// credentials surface the inline `CoreError::AuthFailed` message.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), CoreError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "This field is required".to_string(),
            ));
        }

        let token = self.authenticator.sign_in(username, password).await?;
        self.session.store(token);
        Ok(())
    }

    /// Clear the session token and return to `LoggedOut`.
    pub fn logout(&mut self) {
        self.session.clear();
    }

    // ── Dashboard pipeline ──────────────────────────────────────────

    /// Run one full render pass: fetch the four datasets sequentially,
    /// shape them, and lay out the three charts.
    ///
    /// Idempotent — each call rebuilds everything from freshly fetched
    /// data; no caching, no cancellation, no token refresh.
    pub async fn load_dashboard(&self) -> Result<DashboardView, CoreError> {
        let token = self.session.token().ok_or(CoreError::NotAuthenticated)?;
        let vars = queries::xp_variables(&self.settings);

        let profile = queries::decode_user_profile(
            self.executor
                .execute(queries::USER_PROFILE, Some(vars.clone()), &token)
                .await?,
        )?;
        let by_time = self.fetch_transactions(queries::XP_OVER_TIME, Some(vars.clone()), &token).await?;
        let by_amount = self.fetch_transactions(queries::XP_BY_PROJECT, Some(vars), &token).await?;
        let audit_rows = self.fetch_transactions(queries::AUDITS, None, &token).await?;

        let series = self
            .progress_service
            .cumulative_series(&by_time, &self.settings.module_prefix);
        let totals = self
            .progress_service
            .project_totals(&by_amount, &self.settings.module_prefix);
        let audits = self.progress_service.audit_totals(&audit_rows);

        let date_range = self.chart_service.date_range_label(&series);
        let progress_chart =
            self.chart_service
                .line_chart(&series, profile.total_xp, &self.settings.campus_prefix);
        let xp_by_project_chart = self.chart_service.bar_chart(&totals);
        let audit_chart = self.chart_service.bar_chart(&audits.as_ranked());

        Ok(DashboardView {
            profile,
            audits,
            progress_chart,
            date_range,
            xp_by_project_chart,
            audit_chart,
        })
    }

    // ── Internal ────────────────────────────────────────────────────

    async fn fetch_transactions(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        token: &str,
    ) -> Result<Vec<Transaction>, CoreError> {
        let value = self.executor.execute(query, variables, token).await?;
        queries::decode_transactions(value)
    }
}
