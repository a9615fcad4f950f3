// Core exports
pub mod consultation;
pub mod html;
pub mod notifications;
pub mod page_state;

pub use consultation::ConsultationService;
pub use html::html_escape;
pub use notifications::EmailComposer;
pub use page_state::FormStatus;
