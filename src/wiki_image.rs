use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

use crate::http_client::http_client;

const SEARCH_URL: &str =
    "https://en.wikipedia.org/w/api.php?action=query&list=search&format=json&srlimit=1&srsearch=";
const PAGE_IMAGE_URL: &str =
    "https://en.wikipedia.org/w/api.php?action=query&prop=pageimages&format=json&piprop=original&titles=";

static MEMO: Mutex<Option<HashMap<String, PlayerImage>>> = Mutex::new(None);

/// What the presentation layer gets: a URL or a single "unavailable"
/// signal it can swap for a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerImage {
    Url(String),
    Unavailable,
}

impl PlayerImage {
    pub fn is_available(&self) -> bool {
        matches!(self, PlayerImage::Url(_))
    }
}

/// Internal failure kinds, kept distinct for diagnostics even though they
/// all collapse to [`PlayerImage::Unavailable`] at the boundary.
#[derive(Debug, Error)]
pub enum ImageLookupError {
    #[error("no search result for {0:?}")]
    NoResult(String),

    #[error("image request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed image response: {0}")]
    Malformed(String),
}

/// Resolve a player photo, memoized per name for the life of the process.
/// Never fails: every failure kind is logged and mapped to `Unavailable`.
pub fn player_image(name: &str) -> PlayerImage {
    if let Some(hit) = memo_get(name) {
        return hit;
    }

    let resolved = match http_client() {
        Ok(client) => match lookup_image_url(client, name) {
            Ok(url) => PlayerImage::Url(url),
            Err(err) => {
                tracing::warn!(player = name, error = %err, "player image lookup failed");
                PlayerImage::Unavailable
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "http client unavailable");
            PlayerImage::Unavailable
        }
    };

    memo_put(name, resolved.clone());
    resolved
}

/// Two sequential MediaWiki calls: full-text search for the canonical page
/// title, then the page's original image URL.
pub fn lookup_image_url(client: &Client, name: &str) -> Result<String, ImageLookupError> {
    let search_body = get_text(client, &format!("{SEARCH_URL}{}", encode_term(name)))?;
    let title = top_search_title(&search_body, name)?;
    let image_body = get_text(client, &format!("{PAGE_IMAGE_URL}{}", encode_term(&title)))?;
    original_image_url(&image_body)
}

fn get_text(client: &Client, url: &str) -> Result<String, ImageLookupError> {
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}

fn encode_term(term: &str) -> String {
    term.replace(' ', "%20")
}

fn top_search_title(body: &str, term: &str) -> Result<String, ImageLookupError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|_| ImageLookupError::Malformed("search response is not json".to_string()))?;
    let hits = value
        .get("query")
        .and_then(|q| q.get("search"))
        .and_then(|s| s.as_array())
        .ok_or_else(|| ImageLookupError::Malformed("missing query.search".to_string()))?;
    let first = hits
        .first()
        .ok_or_else(|| ImageLookupError::NoResult(term.to_string()))?;
    first
        .get("title")
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
        .ok_or_else(|| ImageLookupError::Malformed("search hit without title".to_string()))
}

fn original_image_url(body: &str) -> Result<String, ImageLookupError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|_| ImageLookupError::Malformed("image response is not json".to_string()))?;
    let pages = value
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(|p| p.as_object())
        .ok_or_else(|| ImageLookupError::Malformed("missing query.pages".to_string()))?;
    let page = pages
        .values()
        .next()
        .ok_or_else(|| ImageLookupError::Malformed("empty query.pages".to_string()))?;
    page.get("original")
        .and_then(|o| o.get("source"))
        .and_then(|s| s.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ImageLookupError::Malformed("page without original image".to_string()))
}

fn memo_get(name: &str) -> Option<PlayerImage> {
    let mut guard = MEMO.lock().expect("image memo lock poisoned");
    let memo = guard.get_or_insert_with(HashMap::new);
    memo.get(name).cloned()
}

fn memo_put(name: &str, image: PlayerImage) {
    let mut guard = MEMO.lock().expect("image memo lock poisoned");
    let memo = guard.get_or_insert_with(HashMap::new);
    memo.insert(name.to_string(), image);
}

#[cfg(test)]
mod tests {
    use super::{ImageLookupError, original_image_url, top_search_title};

    #[test]
    fn search_title_takes_the_top_hit() {
        let body = r#"{"query":{"search":[{"title":"Harry Kane"},{"title":"Harry Kane (disambiguation)"}]}}"#;
        assert_eq!(top_search_title(body, "Harry Kane").unwrap(), "Harry Kane");
    }

    #[test]
    fn empty_search_is_no_result() {
        let body = r#"{"query":{"search":[]}}"#;
        let err = top_search_title(body, "Nobody").unwrap_err();
        assert!(matches!(err, ImageLookupError::NoResult(_)));
    }

    #[test]
    fn missing_search_key_is_malformed() {
        let err = top_search_title(r#"{"batchcomplete":""}"#, "x").unwrap_err();
        assert!(matches!(err, ImageLookupError::Malformed(_)));
    }

    #[test]
    fn image_url_comes_from_the_first_page() {
        let body = r#"{"query":{"pages":{"12345":{"title":"Harry Kane","original":{"source":"https://upload.example/kane.jpg"}}}}}"#;
        assert_eq!(
            original_image_url(body).unwrap(),
            "https://upload.example/kane.jpg"
        );
    }

    #[test]
    fn page_without_image_is_malformed() {
        let body = r#"{"query":{"pages":{"12345":{"title":"Harry Kane"}}}}"#;
        assert!(matches!(
            original_image_url(body).unwrap_err(),
            ImageLookupError::Malformed(_)
        ));
    }
}
