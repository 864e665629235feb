//! Session setup and initialization

use crate::config::{Config, get_app_dir, get_config_path};
use crate::controller::DashboardController;
use crate::provider::HttpQuoteProvider;
use crate::store::{FileStore, KeyValueStore, MemoryStore};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Controller hydrated from the store, with no fetch issued yet.
    pub controller: DashboardController,
    /// Quote endpoint in use
    pub endpoint: String,
    /// Directory backing the store, `None` for an in-memory session
    pub store_dir: Option<PathBuf>,
}

/// Reads the config and wires the HTTP provider and store into a controller.
///
/// With `ephemeral` set, likes live in memory and vanish on exit.
pub fn setup_session(ephemeral: bool) -> Result<SessionData, Box<dyn Error>> {
    let config = Config::load_or_default(&get_config_path()?)
        .map_err(|e| format!("Failed to load config: {}", e))?;

    let provider = HttpQuoteProvider::new(config.quote_url.clone())?;
    let endpoint = provider.endpoint().to_string();

    let (store, store_dir): (Box<dyn KeyValueStore>, Option<PathBuf>) = if ephemeral {
        (Box::new(MemoryStore::new()), None)
    } else {
        let dir = config.resolve_store_dir(&get_app_dir()?);
        (Box::new(FileStore::new(dir.clone())), Some(dir))
    };

    let controller = DashboardController::new(Arc::new(provider), store);
    Ok(SessionData {
        controller,
        endpoint,
        store_dir,
    })
}
