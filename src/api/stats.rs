//! Aggregated mood statistics for the logged-in user.

use tracing::warn;

use crate::api::transport::TimeoutProfile;
use crate::api::types::StatsData;
use crate::api::{decode, ensure_ok, ApiClient};
use crate::errors::ApiError;

impl ApiClient {
    /// Fetches mood statistics: parallel date/score arrays plus the
    /// backend-generated weekly summary text.
    ///
    /// Uses the extended read timeout — the backend may generate the weekly
    /// summary on demand.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthRequired` (without a network call) when logged
    /// out, otherwise transport/protocol/decode errors as they occur.
    pub async fn try_get_stats(&self) -> Result<StatsData, ApiError> {
        let session = self.require_session()?;
        let raw = self
            .transport()
            .get(
                &self.url(&format!("/stats/{}", session.user_id)),
                TimeoutProfile::Slow,
            )
            .await?;
        decode(ensure_ok(raw)?)
    }

    /// Sentinel-value variant of [`try_get_stats`](Self::try_get_stats):
    /// the stats, or `None` on any failure.
    pub async fn get_stats(&self) -> Option<StatsData> {
        match self.try_get_stats().await {
            Ok(stats) => Some(stats),
            Err(err) => {
                warn!("get_stats failed: {}", err);
                None
            }
        }
    }
}
