use std::sync::Arc;

use configs::PaginationConfig;
use service::{Pagination, Services};

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(services: Services, pagination: PaginationConfig) -> Self {
        Self { services: Arc::new(services), pagination }
    }

    /// Apply the configured page defaults before the service's own clamp.
    pub fn page(&self, offset: Option<u64>, limit: Option<u64>) -> Pagination {
        Pagination { offset, limit }
            .normalize_with(self.pagination.default_limit, self.pagination.max_limit)
            .into()
    }
}
