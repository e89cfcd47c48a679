//! HTTP client for the MindEase backend.
//!
//! This module provides `ApiClient`, which holds the logged-in session and
//! performs all backend calls: authentication, diary CRUD with the trash
//! lifecycle, and mood statistics.
//!
//! # Module Structure
//!
//! - `transport`: single-attempt HTTP plumbing over reqwest
//! - `types`: wire types mirroring the backend's JSON schemas
//! - `diary`: diary creation, listings, and the trash lifecycle
//! - `stats`: aggregated mood statistics
//!
//! # Error surfaces
//!
//! Every operation comes in two flavors. The `try_*` methods return
//! `Result<_, ApiError>` and distinguish "not logged in" from transport,
//! protocol, and decode failures. The plain methods reproduce the contract
//! the UI screens were written against: they log the underlying error and
//! collapse every failure to `false`, `None`, or an empty `Vec`. No failure
//! in this layer panics or propagates past the public boundary.
//!
//! # Example
//!
//! ```no_run
//! use mindease_client::{ApiClient, Config};
//!
//! # async fn run() -> mindease_client::AppResult<()> {
//! let client = ApiClient::new(&Config::load()?)?;
//! if client.login("alice", "secret").await {
//!     for diary in client.get_diaries().await {
//!         println!("{}: {}", diary.created_at, diary.content);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod diary;
pub mod stats;
pub mod transport;
pub mod types;

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::ApiError;
use crate::session::Session;
use transport::{RawResponse, TimeoutProfile, Transport};
use types::{LoginRequest, LoginResponse, RegisterRequest};

/// Client for the MindEase backend API.
///
/// Owns the session state for one logged-in user. Operations are independent
/// async units of work; the only shared mutable state is the session lock,
/// which is written by `login`/`logout` and read everywhere else, and never
/// held across an await. Concurrent calls are allowed but not coordinated —
/// the backend is the arbiter of racing lifecycle transitions.
pub struct ApiClient {
    base_url: String,
    transport: Transport,
    session: RwLock<Session>,
}

impl ApiClient {
    /// Creates a client for the backend named in `config`, starting logged
    /// out.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transport: Transport::new()?,
            session: RwLock::new(Session::anonymous()),
        })
    }

    /// Returns a snapshot of the current session.
    pub fn session(&self) -> Session {
        self.lock_read().clone()
    }

    /// Returns whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.lock_read().is_authenticated()
    }

    /// Resets the session to the anonymous sentinel. Safe to call when
    /// already logged out.
    pub fn logout(&self) {
        *self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Session::anonymous();
    }

    /// Logs in and installs the session on success.
    ///
    /// The session is replaced as a whole under the write lock, so a
    /// concurrent reader sees either the old session or the new one — never
    /// a user id without its nickname. On any failure the previous session
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport`, `ApiError::Protocol`, or
    /// `ApiError::Decode` depending on where the call failed.
    pub async fn try_login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let raw = self
            .transport
            .post_json(
                &format!("{}/login", self.base_url),
                &request,
                TimeoutProfile::Default,
            )
            .await?;
        let response: LoginResponse = decode(ensure_ok(raw)?)?;

        let session = Session::new(response.user_id, response.nickname);
        *self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session.clone();

        info!("logged in as user {}", session.user_id);
        Ok(session)
    }

    /// Sentinel-value variant of [`try_login`](Self::try_login): `true` on
    /// success, `false` on any failure.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        match self.try_login(username, password).await {
            Ok(_) => true,
            Err(err) => {
                warn!("login failed: {}", err);
                false
            }
        }
    }

    /// Registers a new account. This is a pure probe of the backend — it
    /// never touches the session, and registering does not log in.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` or `ApiError::Protocol` on failure
    /// (the backend answers 400 when the username is taken).
    pub async fn try_register(
        &self,
        username: &str,
        password: &str,
        nickname: &str,
    ) -> Result<(), ApiError> {
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
        };

        let raw = self
            .transport
            .post_json(
                &format!("{}/register", self.base_url),
                &request,
                TimeoutProfile::Default,
            )
            .await?;
        ensure_ok(raw)?;
        Ok(())
    }

    /// Sentinel-value variant of [`try_register`](Self::try_register).
    pub async fn register(&self, username: &str, password: &str, nickname: &str) -> bool {
        match self.try_register(username, password, nickname).await {
            Ok(()) => true,
            Err(err) => {
                warn!("register failed: {}", err);
                false
            }
        }
    }

    /// Returns the session if a user is logged in, `ApiError::AuthRequired`
    /// otherwise. Gated operations call this before building any request, so
    /// an unauthenticated call costs zero network round-trips.
    pub(crate) fn require_session(&self) -> Result<Session, ApiError> {
        let session = self.lock_read();
        if session.is_authenticated() {
            Ok(session.clone())
        } else {
            Err(ApiError::AuthRequired)
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Accepts only status 200; every other status becomes `ApiError::Protocol`.
/// The backend signals all outcomes through 200-vs-anything-else.
pub(crate) fn ensure_ok(raw: RawResponse) -> Result<RawResponse, ApiError> {
    if raw.status == 200 {
        Ok(raw)
    } else {
        Err(ApiError::Protocol {
            status: raw.status,
            body: raw.body,
        })
    }
}

/// Decodes a response body into `T`, mapping parse failures to
/// `ApiError::Decode`.
pub(crate) fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))
}
