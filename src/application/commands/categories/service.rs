// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::category::CategoryRepository};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
