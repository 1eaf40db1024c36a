use std::{sync::Arc, time::Instant};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
