//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, LinkSettings, StatsService};
use crate::domain::clock::Clock;
use crate::infrastructure::logging::LogSink;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::utils::code_generator::CodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryUrlRepository>>,
    pub stats_service: Arc<StatsService<InMemoryUrlRepository>>,
    pub log_sink: Arc<dyn LogSink>,
}

impl AppState {
    /// Wires the services around a single shared store.
    pub fn new(
        repository: Arc<InMemoryUrlRepository>,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn CodeGenerator>,
        settings: LinkSettings,
        log_sink: Arc<dyn LogSink>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            repository.clone(),
            clock,
            generator,
            settings,
        ));
        let stats_service = Arc::new(StatsService::new(repository));

        Self {
            link_service,
            stats_service,
            log_sink,
        }
    }
}
