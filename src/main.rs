/*!
# MindEase CLI

Thin command-line front end for the MindEase client library. It stands in
for the app's UI screens: collect input, call the client, print the result.

## Usage

```text
mindease --username alice [--password pw] <COMMAND>

Commands:
  register  Create a new account (does not log in)
  write     Write a new diary entry
  list      List your active diary entries
  trash     List entries currently in the trash
  stats     Show mood statistics and the weekly summary
  delete    Move an entry to the trash
  restore   Restore an entry from the trash
  purge     Permanently delete a trashed entry (cannot be undone)
```

## Configuration

- `MINDEASE_API_URL`: Base URL of the backend (defaults to http://127.0.0.1:8000)
- `RUST_LOG`: Log filter (defaults to "info")
*/

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mindease_client::cli::{CliArgs, Command};
use mindease_client::{ApiClient, AppError, AppResult, Config, Diary};

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse_args();
    debug!("CLI arguments: {:?}", args.command);

    if args.verbose {
        debug!("Verbose mode enabled");
    }

    let config = Config::load()?;
    debug!("backend base URL: {}", config.base_url);

    let client = ApiClient::new(&config)?;

    let username = args
        .username
        .clone()
        .ok_or_else(|| AppError::Config("--username is required".to_string()))?;
    let password = match args.password.clone() {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    if let Command::Register { nickname } = &args.command {
        if client.register(&username, &password, nickname).await {
            println!("Account '{}' registered. You can now log in.", username);
        } else {
            println!("Registration failed (is the username already taken?).");
        }
        return Ok(());
    }

    // Every other command is user-scoped; surface login failures loudly
    // instead of letting them collapse into empty listings.
    let session = client.try_login(&username, &password).await?;
    info!("logged in as {} (user {})", session.nickname, session.user_id);

    match args.command {
        Command::Register { .. } => unreachable!("handled above"),
        Command::Write {
            content,
            mood,
            category,
        } => match client.create_diary(&content, mood, &category).await {
            Some(diary) => {
                println!("Saved entry {}.", diary.id);
                if let Some(comment) = diary.ai_comment {
                    println!("MindEase says: {}", comment);
                }
            }
            None => println!("Could not save the entry."),
        },
        Command::List => print_listing(&client.get_diaries().await, "No diary entries yet."),
        Command::Trash => print_listing(&client.get_trash_diaries().await, "Trash is empty."),
        Command::Stats => match client.get_stats().await {
            Some(stats) => {
                for (date, score) in stats.dates.iter().zip(stats.scores.iter()) {
                    println!("{}  mood {}", date, score);
                }
                println!("\n{}", stats.weekly_summary);
            }
            None => println!("Stats are unavailable right now."),
        },
        Command::Delete { id } => {
            if client.delete_diary(id).await {
                println!("Entry {} moved to trash.", id);
            } else {
                println!("Could not trash entry {}.", id);
            }
        }
        Command::Restore { id } => {
            if client.restore_diary(id).await {
                println!("Entry {} restored.", id);
            } else {
                println!("Could not restore entry {}.", id);
            }
        }
        Command::Purge { id } => {
            if client.hard_delete_diary(id).await {
                println!("Entry {} permanently deleted.", id);
            } else {
                println!("Could not delete entry {}.", id);
            }
        }
    }

    Ok(())
}

fn print_listing(diaries: &[Diary], empty_message: &str) {
    if diaries.is_empty() {
        println!("{}", empty_message);
        return;
    }
    for diary in diaries {
        let title = diary.title.as_deref().unwrap_or("(untitled)");
        println!(
            "#{} [{}] {} — mood {} ({})",
            diary.id, diary.category, title, diary.mood_score, diary.created_at
        );
        println!("    {}", diary.content);
        if let Some(comment) = &diary.ai_comment {
            println!("    MindEase: {}", comment);
        }
    }
}
