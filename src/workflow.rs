//! Upload workflow state machine.
//!
//! One explicit state value with a pure transition function, instead of the
//! independently-mutable flags (selected file, processing, status) that drift
//! out of sync. The machine works on file *metadata* only, so it is fully
//! testable off the browser; the component keeps the `web_sys::File` handle
//! beside it and consults [`UploadState::can_submit`] /
//! [`UploadState::is_submitting`] to drive the controls.
//!
//! Drag-and-drop and click-to-browse both funnel into the same
//! [`UploadEvent::FilePicked`] guard, so type checking is identical for the
//! two input paths.

use crate::config::PDF_MIME;
use crate::types::AppError;

/// Metadata of the currently selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size_bytes: f64,
}

impl SelectedFile {
    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes / 1024.0 / 1024.0
    }
}

/// Where the upload workflow currently stands.
///
/// Every non-idle state carries the selected file, so a finished submission
/// (succeeded or failed) can be re-submitted without re-selecting.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    Idle,
    FileSelected(SelectedFile),
    Submitting(SelectedFile),
    Succeeded(SelectedFile),
    Failed(SelectedFile),
}

/// Inputs to the state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadEvent {
    /// A file arrived via the picker or a drop.
    FilePicked(SelectedFile),
    /// The user pressed the submit control.
    Submit,
    /// The parsing service accepted the upload and returned a record.
    ParseSucceeded,
    /// The submission failed (transport, malformed body, or `success: false`).
    ParseFailed,
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Transition taken.
    Next(UploadState),
    /// Event refused; state unchanged, message shown to the user.
    Rejected(AppError),
    /// Event not applicable in this state (stale response, disabled control).
    Ignored,
}

impl UploadState {
    /// Apply one event. Pure; the caller owns the side effects (network call
    /// on entering `Submitting`, record storage on `ParseSucceeded`).
    pub fn on(&self, event: UploadEvent) -> Outcome {
        match event {
            UploadEvent::FilePicked(file) => {
                if !file.is_pdf() {
                    return Outcome::Rejected(AppError::InvalidFileType(file.mime));
                }
                // Accepted from any state. Picking during `Submitting` does
                // not abort the in-flight request; its terminal event is
                // dropped as stale below.
                Outcome::Next(UploadState::FileSelected(file))
            }
            UploadEvent::Submit => match self {
                UploadState::FileSelected(file)
                | UploadState::Succeeded(file)
                | UploadState::Failed(file) => {
                    Outcome::Next(UploadState::Submitting(file.clone()))
                }
                // No file selected, or one already in flight.
                UploadState::Idle | UploadState::Submitting(_) => Outcome::Ignored,
            },
            UploadEvent::ParseSucceeded => match self {
                UploadState::Submitting(file) => {
                    Outcome::Next(UploadState::Succeeded(file.clone()))
                }
                _ => Outcome::Ignored,
            },
            UploadEvent::ParseFailed => match self {
                UploadState::Submitting(file) => Outcome::Next(UploadState::Failed(file.clone())),
                _ => Outcome::Ignored,
            },
        }
    }

    /// The submit control is enabled only with a selected file and no
    /// submission in flight.
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            UploadState::FileSelected(_) | UploadState::Succeeded(_) | UploadState::Failed(_)
        )
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, UploadState::Submitting(_))
    }

    /// Metadata of the currently selected file, if any.
    pub fn selected(&self) -> Option<&SelectedFile> {
        match self {
            UploadState::Idle => None,
            UploadState::FileSelected(file)
            | UploadState::Submitting(file)
            | UploadState::Succeeded(file)
            | UploadState::Failed(file) => Some(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime: "application/pdf".to_string(),
            size_bytes: 2.5 * 1024.0 * 1024.0,
        }
    }

    fn png() -> SelectedFile {
        SelectedFile {
            name: "scan.png".to_string(),
            mime: "image/png".to_string(),
            size_bytes: 1024.0,
        }
    }

    #[test]
    fn test_non_pdf_is_rejected_without_state_change() {
        let state = UploadState::Idle;
        match state.on(UploadEvent::FilePicked(png())) {
            Outcome::Rejected(AppError::InvalidFileType(mime)) => {
                assert_eq!(mime, "image/png");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        // Dropping a non-PDF over a selected file keeps the selection too.
        let state = UploadState::FileSelected(pdf("app.pdf"));
        assert!(matches!(
            state.on(UploadEvent::FilePicked(png())),
            Outcome::Rejected(_)
        ));
    }

    #[test]
    fn test_valid_selection_and_submit() {
        let state = UploadState::Idle;
        let state = match state.on(UploadEvent::FilePicked(pdf("app.pdf"))) {
            Outcome::Next(next) => next,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state, UploadState::FileSelected(pdf("app.pdf")));
        assert!(state.can_submit());

        let state = match state.on(UploadEvent::Submit) {
            Outcome::Next(next) => next,
            other => panic!("unexpected {:?}", other),
        };
        assert!(state.is_submitting());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_submit_without_file_is_ignored() {
        assert_eq!(UploadState::Idle.on(UploadEvent::Submit), Outcome::Ignored);
    }

    #[test]
    fn test_at_most_one_submission_in_flight() {
        let state = UploadState::Submitting(pdf("app.pdf"));
        assert_eq!(state.on(UploadEvent::Submit), Outcome::Ignored);
    }

    #[test]
    fn test_failure_then_new_selection_reenables_submit() {
        let state = UploadState::Submitting(pdf("app.pdf"));
        let state = match state.on(UploadEvent::ParseFailed) {
            Outcome::Next(next) => next,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state, UploadState::Failed(pdf("app.pdf")));
        // A failed submission can be retried with the retained file...
        assert!(state.can_submit());
        // ...or replaced by a fresh selection.
        let state = match state.on(UploadEvent::FilePicked(pdf("second.pdf"))) {
            Outcome::Next(next) => next,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state, UploadState::FileSelected(pdf("second.pdf")));
        assert!(state.can_submit());
    }

    #[test]
    fn test_success_keeps_file_for_resubmission() {
        let state = UploadState::Submitting(pdf("app.pdf"));
        let state = match state.on(UploadEvent::ParseSucceeded) {
            Outcome::Next(next) => next,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state.selected().map(|f| f.name.as_str()), Some("app.pdf"));
        assert!(state.can_submit());
    }

    #[test]
    fn test_stale_response_after_repick_is_ignored() {
        // Picking a new file mid-submission does not abort the request; the
        // late response must not flip the fresh selection.
        let state = UploadState::Submitting(pdf("app.pdf"));
        let state = match state.on(UploadEvent::FilePicked(pdf("second.pdf"))) {
            Outcome::Next(next) => next,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state, UploadState::FileSelected(pdf("second.pdf")));
        assert_eq!(state.on(UploadEvent::ParseSucceeded), Outcome::Ignored);
        assert_eq!(state.on(UploadEvent::ParseFailed), Outcome::Ignored);
    }

    #[test]
    fn test_size_mb() {
        assert!((pdf("a.pdf").size_mb() - 2.5).abs() < f64::EPSILON);
    }
}
