//! Diary operations: creation, listings, and the trash lifecycle.
//!
//! Each entry moves through three logical states, authoritative on the
//! backend:
//!
//! ```text
//! Active --delete--> Trashed --restore--> Active
//! Trashed --hard delete--> Purged (terminal)
//! ```
//!
//! The client only issues transition requests and trusts the response code;
//! it holds no local copy of entry state. There is no direct Active → Purged
//! transition: callers are expected to soft-delete first.
//!
//! All operations here require a logged-in session, including the
//! id-addressed lifecycle calls. The original app let soft/restore/hard
//! delete through without a session check and relied on the backend; gating
//! them client-side is an intentional tightening (see DESIGN.md).

use tracing::{info, warn};

use crate::api::transport::TimeoutProfile;
use crate::api::types::{Diary, DiaryDraft};
use crate::api::{decode, ensure_ok, ApiClient};
use crate::constants::DEFAULT_WEATHER;
use crate::errors::ApiError;

impl ApiClient {
    /// Creates a diary entry for the logged-in user.
    ///
    /// The draft is assembled from the session plus the arguments; weather is
    /// a fixed placeholder the backend still expects. Uses the extended read
    /// timeout because the backend generates the AI comment inline.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthRequired` (without a network call) when logged
    /// out, otherwise transport/protocol/decode errors as they occur.
    pub async fn try_create_diary(
        &self,
        content: &str,
        mood_score: i32,
        category: &str,
    ) -> Result<Diary, ApiError> {
        let session = self.require_session()?;

        let draft = DiaryDraft {
            user_id: session.user_id,
            content: content.to_string(),
            weather: DEFAULT_WEATHER.to_string(),
            mood_score,
            category: category.to_string(),
        };

        let raw = self
            .transport()
            .post_json(&self.url("/diaries/"), &draft, TimeoutProfile::Slow)
            .await?;
        let diary: Diary = decode(ensure_ok(raw)?)?;

        info!("created diary {}", diary.id);
        Ok(diary)
    }

    /// Sentinel-value variant of [`try_create_diary`](Self::try_create_diary):
    /// the created entry, or `None` on any failure.
    pub async fn create_diary(
        &self,
        content: &str,
        mood_score: i32,
        category: &str,
    ) -> Option<Diary> {
        match self.try_create_diary(content, mood_score, category).await {
            Ok(diary) => Some(diary),
            Err(err) => {
                warn!("create_diary failed: {}", err);
                None
            }
        }
    }

    /// Fetches the logged-in user's active entries. Trashed and purged
    /// entries are filtered out backend-side.
    pub async fn try_get_diaries(&self) -> Result<Vec<Diary>, ApiError> {
        let session = self.require_session()?;
        let raw = self
            .transport()
            .get(
                &self.url(&format!("/diaries/{}", session.user_id)),
                TimeoutProfile::Default,
            )
            .await?;
        decode(ensure_ok(raw)?)
    }

    /// Sentinel-value variant of [`try_get_diaries`](Self::try_get_diaries).
    ///
    /// An empty `Vec` can mean "no entries" or "the call failed"; callers
    /// that need to tell the difference should use the `try_` variant.
    pub async fn get_diaries(&self) -> Vec<Diary> {
        match self.try_get_diaries().await {
            Ok(diaries) => diaries,
            Err(err) => {
                warn!("get_diaries failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Fetches the logged-in user's trashed entries — exactly those in the
    /// recoverable soft-deleted state.
    pub async fn try_get_trash_diaries(&self) -> Result<Vec<Diary>, ApiError> {
        let session = self.require_session()?;
        let raw = self
            .transport()
            .get(
                &self.url(&format!("/diaries/trash/{}", session.user_id)),
                TimeoutProfile::Default,
            )
            .await?;
        decode(ensure_ok(raw)?)
    }

    /// Sentinel-value variant of
    /// [`try_get_trash_diaries`](Self::try_get_trash_diaries).
    pub async fn get_trash_diaries(&self) -> Vec<Diary> {
        match self.try_get_trash_diaries().await {
            Ok(diaries) => diaries,
            Err(err) => {
                warn!("get_trash_diaries failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Moves an entry to the trash (Active → Trashed).
    pub async fn try_delete_diary(&self, diary_id: i64) -> Result<(), ApiError> {
        self.require_session()?;
        let raw = self
            .transport()
            .delete(
                &self.url(&format!("/diaries/soft/{diary_id}")),
                TimeoutProfile::Default,
            )
            .await?;
        ensure_ok(raw)?;
        info!("moved diary {} to trash", diary_id);
        Ok(())
    }

    /// Sentinel-value variant of [`try_delete_diary`](Self::try_delete_diary).
    pub async fn delete_diary(&self, diary_id: i64) -> bool {
        match self.try_delete_diary(diary_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("delete_diary({}) failed: {}", diary_id, err);
                false
            }
        }
    }

    /// Recovers an entry from the trash (Trashed → Active).
    pub async fn try_restore_diary(&self, diary_id: i64) -> Result<(), ApiError> {
        self.require_session()?;
        let raw = self
            .transport()
            .post_empty(
                &self.url(&format!("/diaries/restore/{diary_id}")),
                TimeoutProfile::Default,
            )
            .await?;
        ensure_ok(raw)?;
        info!("restored diary {}", diary_id);
        Ok(())
    }

    /// Sentinel-value variant of
    /// [`try_restore_diary`](Self::try_restore_diary).
    pub async fn restore_diary(&self, diary_id: i64) -> bool {
        match self.try_restore_diary(diary_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("restore_diary({}) failed: {}", diary_id, err);
                false
            }
        }
    }

    /// Permanently removes a trashed entry (Trashed → Purged). There is no
    /// undo: a purged entry is gone from both listings for good.
    pub async fn try_hard_delete_diary(&self, diary_id: i64) -> Result<(), ApiError> {
        self.require_session()?;
        let raw = self
            .transport()
            .delete(
                &self.url(&format!("/diaries/hard/{diary_id}")),
                TimeoutProfile::Default,
            )
            .await?;
        ensure_ok(raw)?;
        info!("hard-deleted diary {}", diary_id);
        Ok(())
    }

    /// Sentinel-value variant of
    /// [`try_hard_delete_diary`](Self::try_hard_delete_diary).
    pub async fn hard_delete_diary(&self, diary_id: i64) -> bool {
        match self.try_hard_delete_diary(diary_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("hard_delete_diary({}) failed: {}", diary_id, err);
                false
            }
        }
    }
}
