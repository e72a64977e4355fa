use crate::form::FormInput;
use crate::render::ResultViews;
use crate::tabs::TabSwitcher;

/// Mutually exclusive phase of the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The two dismissible banners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Success,
    Error,
}

/// Everything the page shows, owned by the request controller.
///
/// The renderer and the page backend only read from it.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub form: FormInput,
    pub phase: Phase,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub success_visible: bool,
    pub error_visible: bool,
    pub error_message: Option<String>,
    /// Views from the last successful submission
    pub views: Option<ResultViews>,
    pub tabs: TabSwitcher,
}
