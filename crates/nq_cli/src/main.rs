use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;

use nq_client::NewsClient;
use nq_core::planner::EndpointSelection;
use nq_core::{envelope, plan, Article, Config, Error, NewsBackend, QueryFilter, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser, Debug)]
#[command(name = "nq", version, about = "Fetch and print news articles with keyword and date filtering", long_about = None)]
struct Cli {
    /// Filter news by keyword
    #[arg(short, long)]
    keyword: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("Invalid date format: {}. Please use YYYY-MM-DD.", s))
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let (Some(from), Some(to)) = (cli.from, cli.to) {
        if from > to {
            println!("Error: Start date cannot be after end date.");
            return;
        }
    }

    println!("Fetching news...");
    let articles = get_articles(&cli).await;
    summarize(&articles);
}

/// Fetch matching articles, reporting every failure as a printed message
/// and an empty result.
async fn get_articles(cli: &Cli) -> Vec<Article> {
    let config = Config::from_env();
    let api_key = match config.require_api_key() {
        Ok(key) => key.to_string(),
        Err(_) => {
            println!("Error: NEWS_API_KEY not found in environment variables.");
            println!("Please create a .env file with your API key.");
            return Vec::new();
        }
    };

    let filter = QueryFilter {
        keyword: cli.keyword.clone(),
        from_date: cli.from.map(|d| d.format(DATE_FORMAT).to_string()),
        to_date: cli.to.map(|d| d.format(DATE_FORMAT).to_string()),
    };
    let selection = plan(&filter, &api_key);
    debug!("querying {:?}", selection.endpoint);

    match fetch_articles(&selection).await {
        Ok(articles) => articles,
        Err(Error::Api { message }) => {
            println!(
                "API returned error: {}",
                message.as_deref().unwrap_or("unknown")
            );
            Vec::new()
        }
        Err(Error::Json(_)) => {
            println!("Error parsing JSON response.");
            Vec::new()
        }
        Err(e) => {
            println!("Network error: {}", e);
            Vec::new()
        }
    }
}

async fn fetch_articles(selection: &EndpointSelection) -> Result<Vec<Article>> {
    let client = NewsClient::new()?;
    let payload = client.fetch(selection).await?;
    envelope::normalize(&payload)
}

fn summarize(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles found to summarize.");
        return;
    }

    println!("Found {} articles:\n", articles.len());
    for article in articles {
        println!("Title: {}", article.title.as_deref().unwrap_or("N/A"));
        println!(
            "Description: {}",
            article.description.as_deref().unwrap_or("N/A")
        );
        println!("URL: {}", article.url.as_deref().unwrap_or("N/A"));
        println!("----");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("01-06-2024").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_malformed_date_is_a_usage_error() {
        let result = Cli::try_parse_from(["nq", "--from", "2024-02-30"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_parse() {
        let cli =
            Cli::try_parse_from(["nq", "-k", "election", "--from", "2024-01-01"]).unwrap();
        assert_eq!(cli.keyword.as_deref(), Some("election"));
        assert_eq!(
            cli.from,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert!(cli.to.is_none());
    }

    #[test]
    fn test_date_range_ordering() {
        let from = parse_date("2024-06-01").unwrap();
        let to = parse_date("2024-01-01").unwrap();
        assert!(from > to);
    }
}
