use chrono::Utc;
use serde_json::Value;
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};
use tracing::{debug, info};

use crate::metrics::ProjectMetrics;
use crate::Result;

const HEADER: &str = "user, project, favorites, loves, views, comments, title, \
                      description, datetime_shared, timestamp_analyzed\n";

/// Truncates the outfile and writes the header line. Runs exactly once per
/// program execution, before any user is processed.
pub(crate) async fn init_outfile(path: &str) -> Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(HEADER.as_bytes()).await?;
    Ok(())
}

/// Appends one line for a project. Projects whose metrics were unavailable,
/// or whose metrics are missing an expected field, get the abbreviated
/// `user,id` row instead of failing the run.
pub(crate) async fn write_row(
    path: &str,
    user: &str,
    id: &str,
    metrics: &ProjectMetrics,
    comments: &str,
) -> Result<()> {
    let line = match metrics {
        ProjectMetrics::Unavailable => {
            debug!("found unavailable project data");
            abbreviated_row(user, id)
        }
        ProjectMetrics::Available(data) => {
            let analyzed_at = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
            render_row(user, id, data, comments, analyzed_at).unwrap_or_else(|| {
                debug!("metrics for project {id} missing expected fields");
                abbreviated_row(user, id)
            })
        }
    };

    let mut file = OpenOptions::new().append(true).create(true).open(path).await?;
    file.write_all(line.as_bytes()).await?;
    info!("project written: {id}");

    Ok(())
}

fn abbreviated_row(user: &str, id: &str) -> String {
    format!("{user},{id}\n")
}

/// Builds the full 10-field row, or `None` if any metrics field is absent
/// or not a string.
fn render_row(
    user: &str,
    id: &str,
    data: &Value,
    comments: &str,
    analyzed_at: f64,
) -> Option<String> {
    let favorites = str_field(data, "favorite_count")?;
    let loves = str_field(data, "love_count")?;
    let views = str_field(data, "view_count")?;
    let title = str_field(data, "title")?;
    let description = sanitize_description(str_field(data, "description")?);
    let shared = str_field(data, "datetime_shared")?;

    Some(format!(
        "{user},{id},{favorites},{loves},{views},{comments},{title},{description},{shared},{analyzed_at}\n"
    ))
}

#[inline]
fn str_field<'a>(data: &'a Value, name: &str) -> Option<&'a str> {
    data.get(name).and_then(Value::as_str)
}

/// Joins the description onto one line and replaces the characters that
/// break naive comma-delimited parsing downstream.
#[inline]
fn sanitize_description(description: &str) -> String {
    description
        .lines()
        .collect::<Vec<_>>()
        .join(" ")
        .replace([',', '(', ')', '"'], ";")
}
