use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;
use tracing::info;

use crate::{comments, discover, metrics, writer, Result};

/// Pause after every row write so the Scratch servers don't block us.
const COURTESY_DELAY: Duration = Duration::from_secs(2);

/// Runs one full pass over `users` in order: initializes the outfile, then
/// for each user discovers project ids and appends one row per project.
/// Duplicate usernames are tolerated and produce duplicate rows.
pub async fn process_users(client: &Client, users: &[&str], path: &str) -> Result<()> {
    writer::init_outfile(path).await?;

    for user in users {
        process_user(client, user, path).await?;
    }

    Ok(())
}

/// Analyzes a single user. A network failure here is fatal for the whole
/// run; per-project metrics failures only degrade the written row.
async fn process_user(client: &Client, user: &str, path: &str) -> Result<()> {
    info!("user started: {user}");

    let ids = discover::project_ids(client, user).await?;
    for id in &ids {
        let project_data = metrics::project_metrics(client, id).await?;
        let comments = comments::comment_count(client, id).await?;
        writer::write_row(path, user, id, &project_data, &comments).await?;
        sleep(COURTESY_DELAY).await;
    }

    info!("user completed: {user}");
    Ok(())
}
