use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{Result, BASE_URL};

/// Metrics for one project as returned by the Scratch 2.0 API, or a marker
/// that the response body couldn't be decoded. The decoded mapping is kept
/// as-is; missing fields only surface when the row is rendered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ProjectMetrics {
    Available(Value),
    Unavailable,
}

/// Fetches the JSON representation of a project from the Scratch 2.0 API.
/// An undecodable body is reported as `Unavailable` rather than an error;
/// transport failures still propagate.
pub(crate) async fn project_metrics(client: &Client, id: &str) -> Result<ProjectMetrics> {
    let url = format!("{BASE_URL}/api/v1/project/{id}/?format=json");
    let body = client.get(&url).send().await?.text().await?;
    Ok(decode_metrics(&body))
}

fn decode_metrics(body: &str) -> ProjectMetrics {
    match serde_json::from_str(body) {
        Ok(data) => ProjectMetrics::Available(data),
        Err(e) => {
            debug!("undecodable metrics body: {e}");
            ProjectMetrics::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_valid_json() {
        let body = r#"{"favorite_count": "3", "love_count": "1"}"#;
        assert_eq!(
            decode_metrics(body),
            ProjectMetrics::Available(json!({"favorite_count": "3", "love_count": "1"}))
        );
    }

    #[test]
    fn undecodable_body_becomes_unavailable() {
        let body = "<html>503 Service Unavailable</html>";
        assert_eq!(decode_metrics(body), ProjectMetrics::Unavailable);
    }

    #[test]
    fn empty_body_becomes_unavailable() {
        assert_eq!(decode_metrics(""), ProjectMetrics::Unavailable);
    }
}
