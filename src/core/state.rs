// Shared catalog state

use crate::core::config::Config;
use crate::stores::{repository::PlaceholderRepository, user_store::UserStore};
use std::sync::Arc;

/// Components shared by the catalog sections.
/// Fields are wrapped in Arc so the state can be cloned cheaply.
#[derive(Clone)]
pub struct CatalogState {
    /// Users registered while the catalog runs
    pub user_store: Arc<UserStore>,

    /// Repository used to demonstrate typed lookups
    pub repository: Arc<PlaceholderRepository>,

    pub config: Arc<Config>,
}

impl CatalogState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            user_store: Arc::new(UserStore::with_capacity(config.catalog.user_capacity)),
            repository: Arc::new(PlaceholderRepository::new(
                config.catalog.placeholder_name.as_str(),
            )),
            config,
        }
    }
}
