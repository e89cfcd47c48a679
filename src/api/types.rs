//! Wire types for the MindEase backend API.
//!
//! These mirror the backend's JSON schemas. Inbound types are tolerant of
//! absent optional fields (`title`, `ai_comment`, `is_deleted`, `deleted_at`)
//! because older backend revisions do not send them. Decoded values are plain
//! snapshots — they hold no reference back to the client.

use serde::{Deserialize, Serialize};

/// A single diary entry as returned by the backend.
///
/// `id` is assigned by the backend and immutable; uniqueness is a backend
/// guarantee the client does not re-check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diary {
    pub id: i64,
    pub content: String,
    pub category: String,
    /// Optional entry title; absent on entries created before titles existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub mood_score: i32,
    /// AI-generated commentary; absent when generation failed or is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_comment: Option<String>,
    pub created_at: String,
    /// Soft-delete marker; only populated on trash listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

/// Payload for creating a new diary entry.
///
/// Built fresh for each create call from the session plus caller arguments;
/// never stored client-side.
#[derive(Debug, Clone, Serialize)]
pub struct DiaryDraft {
    pub user_id: i64,
    pub content: String,
    pub weather: String,
    pub mood_score: i32,
    pub category: String,
}

/// Aggregated mood statistics for one user.
///
/// `dates` and `scores` are parallel arrays: `scores[i]` is the mood score
/// recorded on `dates[i]`. `weekly_summary` is natural-language text
/// generated by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsData {
    pub dates: Vec<String>,
    pub scores: Vec<f64>,
    pub weekly_summary: String,
}

/// Credentials payload for POST /login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for POST /register.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub nickname: String,
}

/// Successful login response body. Extra fields (e.g. a status message) are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub nickname: String,
}
