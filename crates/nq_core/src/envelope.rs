use serde_json::Value;

use crate::types::Article;
use crate::{Error, Result};

const STATUS_OK: &str = "ok";

/// Check the upstream success/failure wrapper without touching the payload.
///
/// A missing `status` field counts as failure, carrying whatever `message`
/// the payload has.
pub fn ensure_ok(payload: &Value) -> Result<()> {
    match payload.get("status").and_then(Value::as_str) {
        Some(STATUS_OK) => Ok(()),
        _ => Err(Error::Api {
            message: payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }),
    }
}

/// Validate the envelope and extract the article list unchanged. A payload
/// without an `articles` field yields an empty list.
pub fn normalize(payload: &Value) -> Result<Vec<Article>> {
    ensure_ok(payload)?;
    match payload.get("articles") {
        Some(articles) => Ok(serde_json::from_value(articles.clone())?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_extracts_articles_in_order() {
        let payload = json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                { "title": "First", "url": "https://example.com/1" },
                { "title": "Second", "url": "https://example.com/2" }
            ]
        });

        let articles = normalize(&payload).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("First"));
        assert_eq!(articles[1].title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_normalize_missing_articles_is_empty() {
        let payload = json!({ "status": "ok" });
        assert!(normalize(&payload).unwrap().is_empty());
    }

    #[test]
    fn test_error_status_carries_message() {
        let payload = json!({ "status": "error", "message": "rate limited" });
        match normalize(&payload) {
            Err(Error::Api { message }) => {
                assert_eq!(message.as_deref(), Some("rate limited"))
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_status_without_message() {
        let payload = json!({ "status": "error" });
        match normalize(&payload) {
            Err(Error::Api { message }) => assert!(message.is_none()),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_status_is_api_error() {
        let payload = json!({ "articles": [] });
        assert!(matches!(
            normalize(&payload),
            Err(Error::Api { message: None })
        ));
    }

    #[test]
    fn test_non_array_articles_is_json_error() {
        let payload = json!({ "status": "ok", "articles": "nope" });
        assert!(matches!(normalize(&payload), Err(Error::Json(_))));
    }
}
