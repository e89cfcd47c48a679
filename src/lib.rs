/*!
# MindEase Client

Client-side session and data-access layer for the MindEase journaling app.
It logs a user in, submits and retrieves diary entries, fetches aggregated
mood statistics, and drives the soft-delete/trash lifecycle for entries.

## Core Features

- Login/registration against the MindEase backend
- Diary creation with backend-generated AI commentary
- Active and trash listings, soft delete, restore, and permanent delete
- Mood statistics with a natural-language weekly summary

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `session`: The logged-in user record
- `api`: The HTTP client (transport, wire types, diary and stats operations)

The UI layer — here, the demo CLI binary — only ever calls the public
`ApiClient` surface. All session state lives inside the client; decoded
diaries and stats are plain snapshots owned by the caller.

## Usage Example

```rust,no_run
use mindease_client::{ApiClient, Config};

# async fn run() -> mindease_client::AppResult<()> {
let config = Config::load()?;
let client = ApiClient::new(&config)?;

if client.login("alice", "secret").await {
    if let Some(diary) = client.create_diary("felt ok", 5, "work").await {
        println!("saved entry {}", diary.id);
    }
}
# Ok(())
# }
```
*/

/// HTTP client for the MindEase backend
pub mod api;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Session state for the logged-in user
pub mod session;

// Re-export important types for convenience
pub use api::types::{Diary, DiaryDraft, StatsData};
pub use api::ApiClient;
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{ApiError, AppError, AppResult};
pub use session::Session;
