use crate::types::QueryFilter;

/// Fallback query term: the everything endpoint rejects requests without
/// `q`, so a date-only filter still needs one.
pub const DEFAULT_QUERY: &str = "general";

/// Default source for the top-headlines endpoint.
pub const DEFAULT_SOURCE: &str = "bbc-news";

const LANGUAGE: &str = "en";
const SORT_BY: &str = "publishedAt";

/// The two upstream endpoints this client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Everything,
    TopHeadlines,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Everything => "everything",
            Endpoint::TopHeadlines => "top-headlines",
        }
    }
}

/// The planner's output: which endpoint to call and the query parameters
/// to send, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSelection {
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl EndpointSelection {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn push(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }
}

/// Decide which endpoint to call and assemble its query parameters.
///
/// Any keyword or date bound routes to the everything endpoint; a filter
/// with neither falls back to top headlines from the default source. Both
/// branches always carry `apiKey`, `language` and `sortBy` (the latter is
/// ignored by top-headlines upstream but kept for wire compatibility).
///
/// Pure and deterministic; callers must resolve the API key before
/// fetching, the planner never checks it.
pub fn plan(filter: &QueryFilter, api_key: &str) -> EndpointSelection {
    let keyword = non_empty(filter.keyword.as_deref());
    let from = non_empty(filter.from_date.as_deref());
    let to = non_empty(filter.to_date.as_deref());

    let endpoint = if keyword.is_some() || from.is_some() || to.is_some() {
        Endpoint::Everything
    } else {
        Endpoint::TopHeadlines
    };

    let mut selection = EndpointSelection {
        endpoint,
        params: Vec::new(),
    };
    selection.push("apiKey", api_key);
    selection.push("language", LANGUAGE);
    selection.push("sortBy", SORT_BY);

    match endpoint {
        Endpoint::Everything => {
            selection.push("q", keyword.unwrap_or(DEFAULT_QUERY));
            if let Some(from) = from {
                selection.push("from", from);
            }
            if let Some(to) = to {
                selection.push("to", to);
            }
        }
        Endpoint::TopHeadlines => {
            selection.push("source", DEFAULT_SOURCE);
        }
    }

    selection
}

/// Blank strings behave like missing values, matching how the web front
/// end receives empty query parameters.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
