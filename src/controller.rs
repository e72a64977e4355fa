use crate::export::{self, ExportFormat, Notice};
use crate::form::{FormInput, ScrapeRequest};
use crate::render::Renderer;
use crate::results::ScrapeResult;
use crate::service::{ScrapeService, ServiceError};
use crate::state::{Alert, Phase, ViewState};
use crate::tabs::TabId;

/// What a submission resolved to
pub type SubmitOutcome = Result<Vec<ScrapeResult>, ServiceError>;

/// Handed out by [`RequestController::begin_submit`]; identifies one submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    generation: u64,
    request: ScrapeRequest,
}

impl SubmissionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &ScrapeRequest {
        &self.request
    }
}

/// Owns the form, the visible page state and the submit/clear lifecycle
pub struct RequestController<S> {
    service: S,
    renderer: Renderer,
    view: ViewState,
    generation: u64,
}

impl<S: ScrapeService> RequestController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            renderer: Renderer::default(),
            view: ViewState::default(),
            generation: 0,
        }
    }

    /// Use a specific renderer (placeholder image, time zone)
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        self.view.phase
    }

    pub fn form_mut(&mut self) -> &mut FormInput {
        &mut self.view.form
    }

    pub fn set_form(&mut self, form: FormInput) {
        self.view.form = form;
    }

    /// Normalize the form, submit it and apply the response
    pub async fn submit(&mut self) -> Phase {
        let ticket = self.begin_submit();
        let outcome = self.service.scrape(&ticket.request).await;
        self.settle(&ticket, outcome);
        self.view.phase
    }

    /// First half of a submission: build the request and enter the loading phase.
    ///
    /// Submitting while another request is in flight is allowed; only the
    /// newest ticket will be able to settle.
    pub fn begin_submit(&mut self) -> SubmissionTicket {
        self.generation += 1;
        let request = self.view.form.to_request();
        ::log::info!(
            "Submission {}: {} URL(s)",
            self.generation,
            request.urls.len()
        );
        ::log::debug!("Scrape request: {:?}", request);

        self.view.phase = Phase::Loading;
        self.view.loading_visible = true;
        self.view.results_visible = false;
        self.view.success_visible = false;
        self.view.error_visible = false;

        SubmissionTicket {
            generation: self.generation,
            request,
        }
    }

    /// Second half of a submission: apply its outcome.
    ///
    /// Returns false, leaving the page untouched, when a newer submission has
    /// started since `ticket` was issued.
    pub fn settle(&mut self, ticket: &SubmissionTicket, outcome: SubmitOutcome) -> bool {
        if ticket.generation != self.generation {
            ::log::warn!(
                "Discarding response for submission {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.view.loading_visible = false;

        match outcome {
            Ok(results) => {
                ::log::info!("Submission {} returned {} page(s)", ticket.generation, results.len());
                self.view.views = Some(self.renderer.render(&results));
                self.view.error_message = None;
                self.view.error_visible = false;
                self.view.success_visible = true;
                self.view.results_visible = true;
                self.view.phase = Phase::Success;
            }
            Err(e) => {
                ::log::error!("Scraping error: {}", e);
                self.view.views = None;
                self.view.error_message = Some(e.user_message().to_string());
                self.view.error_visible = true;
                self.view.success_visible = false;
                self.view.results_visible = false;
                self.view.phase = Phase::Error;
            }
        }
        true
    }

    /// Reset the form and hide results and banners.
    ///
    /// The loading indicator is left alone, so a request still in flight will
    /// settle normally.
    pub fn clear(&mut self) {
        ::log::debug!("Clearing form");
        self.view.form = FormInput::default();
        self.view.views = None;
        self.view.error_message = None;
        self.view.results_visible = false;
        self.view.success_visible = false;
        self.view.error_visible = false;
        self.view.phase = Phase::Idle;
    }

    /// Hide a banner without changing the phase
    pub fn close_alert(&mut self, alert: Alert) {
        match alert {
            Alert::Success => self.view.success_visible = false,
            Alert::Error => self.view.error_visible = false,
        }
    }

    pub fn select_tab(&mut self, tab: TabId) {
        self.view.tabs.select(tab);
    }

    pub fn export(&self, format: ExportFormat) -> Notice {
        export::trigger(format)
    }
}
