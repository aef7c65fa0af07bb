pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod planner;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use fetch::NewsBackend;
pub use planner::{plan, Endpoint, EndpointSelection};
pub use types::{Article, QueryFilter};

pub type Result<T> = std::result::Result<T, Error>;
