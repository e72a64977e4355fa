// Re-export modules
pub mod config;
pub mod controller;
pub mod export;
pub mod form;
pub mod render;
pub mod results;
pub mod service;
pub mod state;
pub mod tabs;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use controller::RequestController;
pub use form::{FormInput, ScrapeRequest};
pub use results::ScrapeResult;
pub use state::{Alert, Phase, ViewState};
pub use tabs::TabId;

use render::Renderer;
use service::ServiceError;
use service::http::HttpScrapeService;

/// Build a controller wired to the HTTP scraping service described by `config`
pub fn connect(config: &ServiceConfig) -> Result<RequestController<HttpScrapeService>, ServiceError> {
    let service = HttpScrapeService::new(config)?;
    ::log::debug!("Scraping service endpoint: {}", service.endpoint());
    Ok(RequestController::new(service).with_renderer(Renderer::from_config(config)))
}
