//! Authentication against the hosted identity endpoints.
//!
//! The backend issues bearer sessions through a token endpoint
//! (`grant_type=password` / `grant_type=refresh_token`) alongside
//! sign-up, sign-out, recovery, and password-update routes. Sign-up
//! also creates the user's profile row so the ledger tables always
//! have a matching `user_details` record.

use mammon_core::profile::{NewUserProfile, UserProfile};
use mammon_shared::config::RemoteConfig;
use mammon_shared::types::UserId;
use mammon_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rest::{RemoteLedger, check_status, map_transport};

/// Authenticated user identity returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User identifier, shared with every ledger table.
    pub id: UserId,
    /// Email address the account was registered with.
    pub email: String,
}

/// Bearer session issued at sign-in or sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Token sent as `Authorization: Bearer` on ledger requests.
    pub access_token: String,
    /// Token exchanged for a fresh session when the access token expires.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    /// The signed-in user.
    pub user: AuthUser,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

/// Client for the hosted auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: RemoteConfig,
}

impl AuthClient {
    /// Creates an auth client from the remote configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be built.
    pub fn new(config: RemoteConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| AppError::Internal(format!("http client: {err}")))?;
        Ok(Self { http, config })
    }

    pub(crate) fn auth_url(&self, route: &str) -> String {
        format!(
            "{}/auth/v1/{route}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn anonymous(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
        access_token: &str,
    ) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
    }

    /// Registers a new account and creates its profile row.
    ///
    /// The profile insert uses the fresh session's access token, so the
    /// row is owned by the new user from the start.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for empty credentials, or the
    /// mapped upstream error if either request fails. A failed profile
    /// insert still leaves the account created upstream.
    #[instrument(skip(self, password, details), fields(email = %email))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        details: NewUserProfile,
    ) -> AppResult<(AuthSession, UserProfile)> {
        validate_credentials(email, password)?;
        let session = self
            .post_session("signup", &CredentialsBody { email, password })
            .await?;
        debug!(user_id = %session.user.id, "account created");

        let ledger = RemoteLedger::new(self.config.clone())?
            .with_access_token(session.access_token.clone());
        let profile = ledger
            .insert_user_profile(session.user.id, details)
            .await?;
        Ok((session, profile))
    }

    /// Exchanges email and password for a session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for empty credentials,
    /// `AppError::Unauthorized` for rejected ones, or the mapped
    /// transport error.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        validate_credentials(email, password)?;
        self.post_session(
            "token?grant_type=password",
            &CredentialsBody { email, password },
        )
        .await
        .map_err(reject_credentials)
    }

    /// Exchanges a refresh token for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SessionExpired` if the refresh token is no
    /// longer accepted, or the mapped transport error.
    pub async fn refresh_session(&self, refresh_token: &str) -> AppResult<AuthSession> {
        self.post_session(
            "token?grant_type=refresh_token",
            &RefreshBody { refresh_token },
        )
        .await
        .map_err(|err| match err {
            AppError::Unauthorized(_) | AppError::Upstream(_) => AppError::SessionExpired,
            other => other,
        })
    }

    /// Revokes the session's access token.
    ///
    /// # Errors
    ///
    /// Returns the mapped transport or status error.
    pub async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let response = self
            .authorized(self.http.post(self.auth_url("logout")), access_token)
            .send()
            .await
            .map_err(map_transport)?;
        check_status(response).await?;
        Ok(())
    }

    /// Fetches the user behind an access token.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SessionExpired` for a rejected token, or the
    /// mapped transport error.
    pub async fn current_user(&self, access_token: &str) -> AppResult<AuthUser> {
        let response = self
            .authorized(self.http.get(self.auth_url("user")), access_token)
            .send()
            .await
            .map_err(map_transport)?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("decoding user: {err}")))
    }

    /// Sends a password recovery email.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an empty email, or the mapped
    /// upstream error.
    pub async fn request_password_reset(&self, email: &str) -> AppResult<()> {
        if email.trim().is_empty() {
            return Err(AppError::Validation("email must not be empty".into()));
        }
        let response = self
            .anonymous(self.http.post(self.auth_url("recover")))
            .json(&EmailBody { email })
            .send()
            .await
            .map_err(map_transport)?;
        check_status(response).await?;
        Ok(())
    }

    /// Sets a new password on the session's account.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an empty password,
    /// `AppError::SessionExpired` for a rejected token, or the mapped
    /// transport error.
    pub async fn update_password(&self, access_token: &str, new_password: &str) -> AppResult<()> {
        if new_password.trim().is_empty() {
            return Err(AppError::Validation("password must not be empty".into()));
        }
        let response = self
            .authorized(self.http.put(self.auth_url("user")), access_token)
            .json(&PasswordBody {
                password: new_password,
            })
            .send()
            .await
            .map_err(map_transport)?;
        check_status(response).await?;
        Ok(())
    }

    async fn post_session<B: Serialize>(&self, route: &str, body: &B) -> AppResult<AuthSession> {
        let response = self
            .anonymous(self.http.post(self.auth_url(route)))
            .json(body)
            .send()
            .await
            .map_err(map_transport)?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("decoding session: {err}")))
    }
}

fn validate_credentials(email: &str, password: &str) -> AppResult<()> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("email must not be empty".into()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }
    Ok(())
}

/// A rejected sign-in comes back as a 400 with an error body, not a
/// 401, so the generic status mapping calls it upstream. Callers want
/// "wrong credentials" instead.
fn reject_credentials(err: AppError) -> AppError {
    match err {
        AppError::Upstream(detail) if detail.starts_with("400") => {
            AppError::Unauthorized(detail)
        }
        AppError::SessionExpired => AppError::Unauthorized("invalid credentials".into()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RemoteConfig {
        serde_json::from_str(r#"{"base_url": "https://ledger.test", "api_key": "anon-key"}"#)
            .unwrap()
    }

    #[test]
    fn auth_urls_nest_under_the_auth_prefix() {
        let client = AuthClient::new(config()).unwrap();
        assert_eq!(
            client.auth_url("token?grant_type=password"),
            "https://ledger.test/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn session_payload_parses_with_extra_fields() {
        let session: AuthSession = serde_json::from_str(
            r#"{
                "access_token": "at-123",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "rt-456",
                "user": {
                    "id": "0190a8f0-63ab-7c2d-9a41-59d3f4b821aa",
                    "aud": "authenticated",
                    "email": "dev@example.com"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(session.access_token, "at-123");
        assert_eq!(session.refresh_token, "rt-456");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.user.email, "dev@example.com");
    }

    #[tokio::test]
    async fn empty_email_is_rejected_before_any_request() {
        let client = AuthClient::new(config()).unwrap();
        let err = client.sign_in("  ", "hunter2").await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn empty_password_is_rejected_before_any_request() {
        let client = AuthClient::new(config()).unwrap();
        let err = client.sign_in("dev@example.com", "").await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn rejected_credentials_map_to_unauthorized() {
        let err = reject_credentials(AppError::Upstream(
            "400 Bad Request: invalid login credentials".into(),
        ));
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
