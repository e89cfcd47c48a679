//! Constants used throughout the application.
//!
//! This module contains all constants used in the MindEase client, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mindease";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A mood journaling client for the MindEase backend";

// Configuration Keys & Environment Variables
/// Environment variable for overriding the backend base URL.
pub const ENV_VAR_API_URL: &str = "MINDEASE_API_URL";
/// Default backend base URL when MINDEASE_API_URL is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// Request Parameters
/// Placeholder weather value submitted with every new diary entry.
/// The app does not collect real weather data; the backend expects the field.
pub const DEFAULT_WEATHER: &str = "Sunny";
/// Connect timeout applied to every request, in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Read timeout for ordinary requests, in seconds.
pub const READ_TIMEOUT_SECS: u64 = 10;
/// Read timeout for diary creation and stats requests, in seconds.
/// These endpoints may block on backend-side AI generation.
pub const SLOW_READ_TIMEOUT_SECS: u64 = 30;

// Session
/// Sentinel user id meaning "not logged in".
pub const UNAUTHENTICATED_USER_ID: i64 = 0;
