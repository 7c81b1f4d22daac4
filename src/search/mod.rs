pub mod config;
mod core;
mod errors;

pub use self::core::{CandidateSearch, SearchReport};
pub use config::SearchConfig;
pub use errors::SearchError;
