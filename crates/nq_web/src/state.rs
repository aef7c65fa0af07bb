use std::sync::Arc;

use nq_core::{Config, NewsBackend};

pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn NewsBackend>,
}
