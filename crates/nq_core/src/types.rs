use serde::{Deserialize, Serialize};

/// Raw filter inputs collected by a front end.
///
/// Date bounds are carried as `YYYY-MM-DD` strings: the CLI validates them
/// before building the filter, the web path forwards whatever the browser
/// sent. Blank values count as unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryFilter {
    pub keyword: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// A single upstream article, passed through unmodified. Fields the
/// formatter cares about are typed; everything else the API sends rides
/// along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_passthrough() {
        let raw = serde_json::json!({
            "title": "Election news",
            "description": "A description",
            "url": "https://example.com/a",
            "publishedAt": "2024-01-01T12:00:00Z",
            "source": { "id": "bbc-news", "name": "BBC News" },
            "urlToImage": "https://example.com/a.jpg"
        });

        let article: Article = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(article.title.as_deref(), Some("Election news"));
        assert_eq!(
            article.published_at.as_deref(),
            Some("2024-01-01T12:00:00Z")
        );
        assert!(article.extra.contains_key("urlToImage"));

        // Round-trips without losing the untyped fields.
        let back = serde_json::to_value(&article).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_article_missing_fields() {
        let article: Article = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(article.title.is_none());
        assert!(article.url.is_none());
    }
}
