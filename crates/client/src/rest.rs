//! REST access to the hosted ledger tables.
//!
//! The backend exposes each table through a PostgREST-style query API
//! (`eq.`/`gte.`/`lte.` filters, `order=` sorting, representation
//! returns on writes). [`RemoteLedger`] implements the core
//! [`LedgerStore`] trait over that API.

use chrono::NaiveDate;
use mammon_core::period::{NewPayPeriod, PayPeriod, PayPeriodPatch};
use mammon_core::profile::{NewUserProfile, UserProfile, UserProfilePatch};
use mammon_core::purchase::{NewPurchase, Purchase};
use mammon_core::store::LedgerStore;
use mammon_shared::config::RemoteConfig;
use mammon_shared::types::{PeriodId, UserId};
use mammon_shared::{AppError, AppResult};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::retry::retry_read;
use crate::rows::{
    BudgetPatchRow, BudgetRow, NewBudgetRow, NewPurchaseRow, NewUserRow, PurchaseRow, UserPatchRow,
    UserRow,
};

/// Client for the remote ledger service's table API.
///
/// One shared HTTP client carries the configured timeout; requests are
/// authorized with the session's access token when present, falling
/// back to the public API key.
#[derive(Debug, Clone)]
pub struct RemoteLedger {
    http: reqwest::Client,
    config: RemoteConfig,
    access_token: Option<String>,
}

impl RemoteLedger {
    /// Creates a client from the remote configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be built.
    pub fn new(config: RemoteConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| AppError::Internal(format!("http client: {err}")))?;
        Ok(Self {
            http,
            config,
            access_token: None,
        })
    }

    /// Returns the client authorized with a session access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Replaces or clears the session access token.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{table}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    pub(crate) fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.config.api_key)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(self.bearer())
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> AppResult<Vec<T>> {
        retry_read(self.config.retry_reads, || self.select_once(table, query)).await
    }

    async fn select_once<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> AppResult<Vec<T>> {
        let response = self
            .authorize(self.http.get(self.table_url(table)))
            .query(query)
            .send()
            .await
            .map_err(map_transport)?;
        let response = check_status(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| AppError::Upstream(format!("decoding {table} rows: {err}")))
    }

    /// Inserts one row and returns the server's representation of it.
    /// Never retried: a timed-out insert may already have landed.
    async fn insert_row<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .authorize(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(map_transport)?;
        let response = check_status(response).await?;
        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("decoding {table} insert: {err}")))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream(format!("{table} insert returned no rows")))
    }

    async fn update_rows<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        filter: (&str, String),
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .authorize(self.http.patch(self.table_url(table)))
            .header("Prefer", "return=representation")
            .query(&[filter.clone()])
            .json(body)
            .send()
            .await
            .map_err(map_transport)?;
        let response = check_status(response).await?;
        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("decoding {table} update: {err}")))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("{table} row matching {}", filter.1)))
    }

    /// Inserts the `user_details` row created at sign-up.
    pub async fn insert_user_profile(
        &self,
        user_id: UserId,
        details: NewUserProfile,
    ) -> AppResult<UserProfile> {
        let row: UserRow = self
            .insert_row("user_details", &NewUserRow::from_details(user_id, details))
            .await?;
        Ok(row.into())
    }

    /// Applies a partial profile update.
    pub async fn update_user_profile(
        &self,
        user_id: UserId,
        patch: UserProfilePatch,
    ) -> AppResult<UserProfile> {
        let row: UserRow = self
            .update_rows(
                "user_details",
                ("user_id", format!("eq.{user_id}")),
                &UserPatchRow::from(patch),
            )
            .await?;
        Ok(row.into())
    }

    /// Deletes a user's profile row.
    pub async fn delete_user_profile(&self, user_id: UserId) -> AppResult<()> {
        let response = self
            .authorize(self.http.delete(self.table_url("user_details")))
            .query(&[("user_id", format!("eq.{user_id}"))])
            .send()
            .await
            .map_err(map_transport)?;
        check_status(response).await?;
        Ok(())
    }
}

impl LedgerStore for RemoteLedger {
    #[instrument(skip(self))]
    async fn list_pay_periods(&self, user_id: UserId) -> AppResult<Vec<PayPeriod>> {
        let rows: Vec<BudgetRow> = self
            .select(
                "budget",
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("order", "payperiod_start.desc".to_string()),
                ],
            )
            .await?;
        debug!(count = rows.len(), "pay periods fetched");
        Ok(rows.into_iter().map(PayPeriod::from).collect())
    }

    async fn insert_pay_period(&self, period: NewPayPeriod) -> AppResult<PayPeriod> {
        let row: BudgetRow = self
            .insert_row("budget", &NewBudgetRow::from(period))
            .await?;
        Ok(row.into())
    }

    async fn update_pay_period(
        &self,
        period_id: PeriodId,
        patch: PayPeriodPatch,
    ) -> AppResult<PayPeriod> {
        let row: BudgetRow = self
            .update_rows(
                "budget",
                ("payperiod_id", format!("eq.{period_id}")),
                &BudgetPatchRow::from(patch),
            )
            .await?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn list_purchases(&self, user_id: UserId) -> AppResult<Vec<Purchase>> {
        let rows: Vec<PurchaseRow> = self
            .select("purchases", &[("user_id", format!("eq.{user_id}"))])
            .await?;
        Ok(rows.into_iter().map(Purchase::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_purchases_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Purchase>> {
        let rows: Vec<PurchaseRow> = self
            .select(
                "purchases",
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("purchasedate", format!("gte.{start}")),
                    ("purchasedate", format!("lte.{end}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Purchase::from).collect())
    }

    async fn insert_purchase(&self, purchase: NewPurchase) -> AppResult<Purchase> {
        let row: PurchaseRow = self
            .insert_row("purchases", &NewPurchaseRow::from(purchase))
            .await?;
        Ok(row.into())
    }

    async fn get_user_profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>> {
        let rows: Vec<UserRow> = self
            .select(
                "user_details",
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(UserProfile::from))
    }
}

/// Maps a transport-level failure onto the error taxonomy.
pub(crate) fn map_transport(err: reqwest::Error) -> AppError {
    if err.is_timeout() || err.is_connect() {
        AppError::Unavailable(err.to_string())
    } else {
        AppError::Upstream(err.to_string())
    }
}

/// Converts non-success statuses into typed errors.
pub(crate) async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED => AppError::SessionExpired,
        StatusCode::NOT_FOUND => AppError::NotFound(detail),
        _ => AppError::Upstream(format!("{status}: {detail}")),
    })
}
