use std::collections::HashSet;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

use crate::{Error, Result, BASE_URL};

/// Fetches a user's project-listing page and returns the distinct project
/// ids referenced by its project links.
pub(crate) async fn project_ids(client: &Client, user: &str) -> Result<HashSet<String>> {
    let url = format!("{BASE_URL}/users/{user}/projects/");
    let html = client.get(&url).send().await?.text().await?;
    ids_from_html(&html)
}

/// Walks every `<a href>` on the page. A link counts if its target
/// mentions "projects" but not "editor"; the id is the third path segment.
/// The set deduplicates ids referenced by more than one link.
fn ids_from_html(html: &str) -> Result<HashSet<String>> {
    let doc = Html::parse_document(html);
    let link_selector = create_selector("a")?;

    let mut ids = HashSet::new();
    for link in doc.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if href.contains("projects") && !href.contains("editor") {
            if let Some(id) = href.split('/').nth(2) {
                ids.insert(id.to_owned());
            }
        }
    }

    debug!("found {} distinct project ids", ids.len());
    Ok(ids)
}

#[inline]
pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ids_from_project_links() {
        let html = r#"
            <html><body>
                <a href="/projects/10128407/">Cat Game</a>
                <a href="/projects/10128555/">Dog Game</a>
                <a href="/users/alice/">alice</a>
            </body></html>"#;
        let ids = ids_from_html(html).unwrap();
        assert_eq!(
            ids,
            HashSet::from(["10128407".to_owned(), "10128555".to_owned()])
        );
    }

    #[test]
    fn skips_editor_links() {
        let html = r#"<a href="/projects/editor/">New project</a>"#;
        let ids = ids_from_html(html).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn deduplicates_repeated_links() {
        let html = r#"
            <a href="/projects/10128407/">thumbnail</a>
            <a href="/projects/10128407/">title</a>"#;
        let ids = ids_from_html(html).unwrap();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn page_without_links_yields_empty_set() {
        let ids = ids_from_html("<html><body><p>nothing here</p></body></html>").unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn ignores_links_without_href() {
        let html = r#"<a name="projects-anchor">projects</a>"#;
        let ids = ids_from_html(html).unwrap();
        assert!(ids.is_empty());
    }
}
