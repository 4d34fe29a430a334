// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Shared handler state, injected as an axum `Extension`.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}
