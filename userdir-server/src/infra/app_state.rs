use std::{fmt, sync::Arc};

use userdir_core::{InMemoryUsersRepository, UsersRepository};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersRepository>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(users: Arc<dyn UsersRepository>, config: Arc<Config>) -> Self {
        Self { users, config }
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory(config: Arc<Config>) -> Self {
        Self::new(Arc::new(InMemoryUsersRepository::new()), config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
