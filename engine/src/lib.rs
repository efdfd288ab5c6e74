//! Groupboard Engine
//!
//! Loads a list of social-network groups and derives the subset a user
//! wants to see.
//!
//! # Architecture
//!
//! - **Fetch**: loads the full group list from a remote JSON document or a
//!   local file, after a fixed delay
//! - **Filter**: pure, order-preserving filtering over three independent
//!   criteria (color, privacy, friend membership)
//! - **Session**: holds the full list and current criteria, and recomputes
//!   the visible list on every change

pub mod error;
pub mod fetch;
pub mod filter;
pub mod session;

pub use error::{Error, Result};
pub use fetch::{decode_groups, fetcher_for, FileFetcher, Fetcher, HttpFetcher};
pub use filter::{
    filter_groups, filter_indices, ColorFilter, EntryFilter, FilterCriteria, GroupPredicate,
    PrivacyFilter,
};
pub use session::Session;

use groupboard_config::Config;
use tracing::info;

/// Main groupboard instance
pub struct GroupBoard {
    /// Configuration
    config: Config,
    /// Group list source
    fetcher: Box<dyn Fetcher>,
    /// Loaded groups and criteria
    session: Session,
}

impl GroupBoard {
    /// Create a new instance from configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fetcher = fetcher_for(&config.source)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create an instance with an explicit fetcher
    pub fn with_fetcher(config: Config, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            config,
            fetcher,
            session: Session::new(),
        }
    }

    /// Load the full group list into the session
    pub async fn load(&mut self) -> Result<usize> {
        info!("Loading groups from {}", self.fetcher.location());
        self.session.fetch(self.fetcher.as_ref()).await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
