use crate::config::Config;
use crate::render::page::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Immutable after startup; rendering keeps no state between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry for previews and for print exports without an explicit size.
    pub page_config: PageConfig,
}
