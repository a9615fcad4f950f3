//! Client-side UI state of the landing page.
//!
//! The browser script embedded in the page owns this state; the constants
//! and status names here are interpolated into it and into the status panels
//! when the page is rendered.

/// Scroll offset (px) above which the navigation switches to its solid style
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of a section that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; reveals trigger slightly before the bottom edge
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Consultation form lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// Statuses that have a rendered status panel
    pub const PANELS: [FormStatus; 3] = [FormStatus::Idle, FormStatus::Success, FormStatus::Error];

    /// Name used for `data-status` and `data-form-status` in the page
    pub fn as_str(self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Submitting => "submitting",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(FormStatus::default(), FormStatus::Idle);
        assert_eq!(FormStatus::Submitting.as_str(), "submitting");
        assert!(!FormStatus::PANELS.contains(&FormStatus::Submitting));
    }
}
