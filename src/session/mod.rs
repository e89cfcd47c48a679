//! Session state for the MindEase client.
//!
//! A session is the in-process record of which user is currently logged in.
//! It is an explicitly owned value held by `ApiClient` behind a lock, not a
//! process-wide global, so tests and multi-account tooling can run several
//! clients side by side.
//!
//! A `user_id` of zero is the "not logged in" sentinel inherited from the
//! backend, which never assigns id 0 to a real user.

use crate::constants::UNAUTHENTICATED_USER_ID;

/// The currently logged-in user, or the anonymous sentinel.
///
/// Only `ApiClient::login` replaces this value, and it always replaces both
/// fields together — `user_id` and `nickname` are never updated
/// independently.
///
/// # Examples
///
/// ```
/// use mindease_client::Session;
///
/// let session = Session::anonymous();
/// assert!(!session.is_authenticated());
///
/// let session = Session::new(7, "Alice");
/// assert!(session.is_authenticated());
/// assert_eq!(session.nickname, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Backend-assigned user id; zero means not logged in.
    pub user_id: i64,
    /// Display name returned by the backend at login.
    pub nickname: String,
}

impl Session {
    /// Creates a session for a logged-in user.
    pub fn new(user_id: i64, nickname: impl Into<String>) -> Self {
        Self {
            user_id,
            nickname: nickname.into(),
        }
    }

    /// Creates the anonymous (not logged in) session.
    pub fn anonymous() -> Self {
        Self {
            user_id: UNAUTHENTICATED_USER_ID,
            nickname: String::new(),
        }
    }

    /// Returns whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user_id != UNAUTHENTICATED_USER_ID
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
