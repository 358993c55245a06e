use std::sync::Arc;

use crate::analysis::engine::ResumeScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings; read at startup, carried for handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable scorer. Default: the deterministic `HeuristicScorer`.
    pub scorer: Arc<dyn ResumeScorer>,
}
