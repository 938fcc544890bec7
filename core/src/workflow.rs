//! Submission workflow: select, validate, preview, submit, report.
//!
//! [`SubmissionWorkflow`] owns the ephemeral form state for one form
//! instance and drives a [`SubmissionTransport`] for the network call.
//! Execution is single-threaded and cooperative: methods take `&self`,
//! state lives in a `RefCell`, and no borrow is held across `.await`.
//!
//! ```rust,ignore
//! let workflow = SubmissionWorkflow::new(transport);
//! workflow.subscribe(Box::new(|snapshot| render(snapshot)));
//!
//! workflow.select_file(file)?;
//! match workflow.submit("skeeter").await {
//!     Ok(success) => println!("+{} coins", success.coins_earned),
//!     Err(failure) => eprintln!("{}", failure),
//! }
//! ```

use std::cell::RefCell;

use crate::error::{ErrorKind, SubmissionFailure, TransportError};
use crate::models::{FileCandidate, RawResponse, SubmissionRequest, SubmissionResult};
use crate::response;
use crate::validation::validate_candidate;

// =============================================================================
// Transport seam
// =============================================================================

/// Network side of a submission: one multipart POST.
///
/// Returns `Ok` for any HTTP response (including error statuses) and
/// `Err` only when no response was received.
#[allow(async_fn_in_trait)]
pub trait SubmissionTransport {
    /// File type this transport knows how to upload.
    type File: FileCandidate + Clone;

    async fn send(
        &self,
        request: SubmissionRequest<'_, Self::File>,
    ) -> Result<RawResponse, TransportError>;
}

// =============================================================================
// State
// =============================================================================

/// Identifies one accepted selection. Previews for older ids are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionId(u64);

/// Observable form state, handed to observers after every change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    pub has_file: bool,
    pub file_name: Option<String>,
    pub is_submitting: bool,
    pub last_error: Option<ErrorKind>,
    pub error_message: Option<String>,
    pub preview_uri: Option<String>,
    pub status_message: Option<String>,
}

struct Selection<F> {
    id: SelectionId,
    file: F,
}

struct FormState<F> {
    selection: Option<Selection<F>>,
    next_id: u64,
    preview_uri: Option<String>,
    is_submitting: bool,
    last_error: Option<ErrorKind>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self {
            selection: None,
            next_id: 0,
            preview_uri: None,
            is_submitting: false,
            last_error: None,
            error_message: None,
            status_message: None,
        }
    }
}

impl<F: FileCandidate> FormState<F> {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            has_file: self.selection.is_some(),
            file_name: self.selection.as_ref().map(|s| s.file.file_name().to_string()),
            is_submitting: self.is_submitting,
            last_error: self.last_error,
            error_message: self.error_message.clone(),
            preview_uri: self.preview_uri.clone(),
            status_message: self.status_message.clone(),
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.preview_uri = None;
    }

    fn record_error(&mut self, failure: &SubmissionFailure) {
        self.last_error = Some(failure.kind);
        self.error_message = Some(failure.message.clone());
        self.status_message = None;
    }
}

/// Callback invoked with the new state after every change.
pub type Observer = Box<dyn Fn(&FormSnapshot)>;

// =============================================================================
// Workflow
// =============================================================================

/// Client-side controller for one submission form.
pub struct SubmissionWorkflow<T: SubmissionTransport> {
    transport: T,
    state: RefCell<FormState<T::File>>,
    observers: RefCell<Vec<Observer>>,
}

impl<T: SubmissionTransport> SubmissionWorkflow<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: RefCell::new(FormState::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Register a callback invoked with a fresh snapshot after every change.
    pub fn subscribe(&self, observer: Observer) {
        self.observers.borrow_mut().push(observer);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for observer in self.observers.borrow().iter() {
            observer(&snapshot);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Validate and store a picked file.
    ///
    /// On failure nothing is stored and any previous selection is cleared;
    /// the caller should reset its file input.
    pub fn select_file(&self, candidate: T::File) -> Result<(), ErrorKind> {
        let result = validate_candidate(&candidate);
        {
            let mut state = self.state.borrow_mut();
            state.clear_selection();
            state.status_message = None;

            match result {
                Ok(()) => {
                    state.next_id += 1;
                    let id = SelectionId(state.next_id);
                    log::info!(
                        "Selected {} ({} bytes, {})",
                        candidate.file_name(),
                        candidate.size_bytes(),
                        candidate.mime_type()
                    );
                    state.selection = Some(Selection { id, file: candidate });
                    state.last_error = None;
                    state.error_message = None;
                }
                Err(kind) => {
                    log::warn!("Rejected {}: {}", candidate.file_name(), kind);
                    state.record_error(&SubmissionFailure::from_kind(kind));
                }
            }
        }
        self.notify();
        result
    }

    /// Id of the current selection, if any.
    pub fn selection_id(&self) -> Option<SelectionId> {
        self.state.borrow().selection.as_ref().map(|s| s.id)
    }

    /// Clone of the current selection, for preview generation.
    pub fn selected_file(&self) -> Option<T::File> {
        self.state.borrow().selection.as_ref().map(|s| s.file.clone())
    }

    pub fn has_file(&self) -> bool {
        self.state.borrow().selection.is_some()
    }

    /// Attach a preview produced for `id`.
    ///
    /// Returns `false` (and changes nothing) when `id` is no longer current.
    pub fn attach_preview(&self, id: SelectionId, uri: String) -> bool {
        {
            let mut state = self.state.borrow_mut();
            let current = state.selection.as_ref().map(|s| s.id);
            if current != Some(id) {
                log::debug!("Dropping stale preview for {:?}", id);
                return false;
            }
            state.preview_uri = Some(uri);
        }
        self.notify();
        true
    }

    /// Clear the displayed error (e.g. when the user edits the form).
    pub fn clear_error(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.last_error.is_none() && state.error_message.is_none() {
                return;
            }
            state.last_error = None;
            state.error_message = None;
        }
        self.notify();
    }

    /// Drop the selection, preview and messages.
    pub fn reset(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.is_submitting {
                return;
            }
            state.clear_selection();
            state.last_error = None;
            state.error_message = None;
            state.status_message = None;
        }
        self.notify();
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submit the selected file on behalf of `username`.
    ///
    /// Preconditions are checked before any network call. While a submission
    /// is outstanding, further calls fail with [`ErrorKind::InProgress`]
    /// without touching the form state.
    pub async fn submit(&self, username: &str) -> SubmissionResult {
        let username = username.trim();

        let (id, file) = match self.begin(username) {
            Ok(selection) => selection,
            Err(ErrorKind::InProgress) => {
                log::warn!("Submission already in progress, ignoring");
                return Err(SubmissionFailure::from_kind(ErrorKind::InProgress));
            }
            Err(kind) => {
                let failure = SubmissionFailure::from_kind(kind);
                self.state.borrow_mut().record_error(&failure);
                self.notify();
                return Err(failure);
            }
        };
        self.notify();

        log::info!("Submitting {} for {}", file.file_name(), username);
        let request = SubmissionRequest { file: &file, username };
        let outcome = match self.transport.send(request).await {
            Ok(raw) => response::interpret(&raw),
            Err(err) => Err(response::interpret_transport_error(&err)),
        };

        self.finish(id, &outcome);
        outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.state.borrow().last_error
    }

    pub fn preview_uri(&self) -> Option<String> {
        self.state.borrow().preview_uri.clone()
    }

    pub fn status_message(&self) -> Option<String> {
        self.state.borrow().status_message.clone()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().snapshot()
    }

    fn begin(&self, username: &str) -> Result<(SelectionId, T::File), ErrorKind> {
        let mut state = self.state.borrow_mut();
        if state.is_submitting {
            return Err(ErrorKind::InProgress);
        }
        let selection = state.selection.as_ref().ok_or(ErrorKind::MissingFile)?;
        if username.is_empty() {
            return Err(ErrorKind::MissingUsername);
        }

        let picked = (selection.id, selection.file.clone());
        state.is_submitting = true;
        state.last_error = None;
        state.error_message = None;
        state.status_message = None;
        Ok(picked)
    }

    fn finish(&self, id: SelectionId, outcome: &SubmissionResult) {
        {
            let mut state = self.state.borrow_mut();
            state.is_submitting = false;

            match outcome {
                Ok(success) => {
                    log::info!("Submission accepted: +{} coins", success.coins_earned);
                    // A file picked mid-flight stays selected
                    if state.selection.as_ref().map(|s| s.id) == Some(id) {
                        state.clear_selection();
                    }
                    state.last_error = None;
                    state.error_message = None;
                    state.status_message = Some(success.display_message());
                }
                Err(failure) => {
                    log::warn!("Submission failed: {} ({})", failure.kind, failure.message);
                    state.record_error(failure);
                }
            }
        }
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageFile;
    use crate::MAX_FILE_SIZE;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Transport replaying canned outcomes, counting calls.
    struct ScriptedTransport {
        calls: Cell<usize>,
        outcome: Result<RawResponse, TransportError>,
        last_username: RefCell<Option<String>>,
    }

    impl ScriptedTransport {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Ok(RawResponse::new(status, body)),
                last_username: RefCell::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Err(TransportError::new("connection refused")),
                last_username: RefCell::new(None),
            }
        }
    }

    impl SubmissionTransport for ScriptedTransport {
        type File = ImageFile;

        async fn send(
            &self,
            request: SubmissionRequest<'_, ImageFile>,
        ) -> Result<RawResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_username.borrow_mut() = Some(request.username.to_string());
            self.outcome.clone()
        }
    }

    /// Transport that stays pending until the test releases it.
    struct GatedTransport {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<RawResponse>>>,
    }

    impl SubmissionTransport for GatedTransport {
        type File = ImageFile;

        async fn send(
            &self,
            _request: SubmissionRequest<'_, ImageFile>,
        ) -> Result<RawResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.map_err(|_| TransportError::new("gate dropped")),
                None => Err(TransportError::new("gate already used")),
            }
        }
    }

    fn png(size: usize) -> ImageFile {
        ImageFile::new("kill.png", "image/png", vec![0u8; size])
    }

    #[test]
    fn test_select_rejects_oversized() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        let err = workflow.select_file(png(MAX_FILE_SIZE as usize + 1)).unwrap_err();

        assert_eq!(err, ErrorKind::FileTooLarge);
        assert!(!workflow.has_file());
        assert_eq!(workflow.last_error(), Some(ErrorKind::FileTooLarge));
    }

    #[test]
    fn test_select_rejects_non_image() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        let pdf = ImageFile::new("notes.pdf", "application/pdf", vec![1, 2, 3]);

        assert_eq!(workflow.select_file(pdf), Err(ErrorKind::InvalidFileType));
        assert!(!workflow.has_file());
    }

    #[test]
    fn test_invalid_pick_clears_previous_selection() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        workflow.select_file(png(10)).unwrap();
        let id = workflow.selection_id().unwrap();
        assert!(workflow.attach_preview(id, "data:image/png;base64,AA==".into()));

        let _ = workflow.select_file(ImageFile::new("a.txt", "text/plain", vec![1]));
        assert!(!workflow.has_file());
        assert_eq!(workflow.preview_uri(), None);
    }

    #[test]
    fn test_valid_pick_produces_preview() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        let file = ImageFile::new("kill.jpg", "image/jpeg", b"hello".to_vec());

        workflow.select_file(file).unwrap();
        assert_eq!(workflow.last_error(), None);
        assert_eq!(workflow.preview_uri(), None);

        let id = workflow.selection_id().unwrap();
        let uri = workflow.selected_file().unwrap().preview_uri();
        assert!(workflow.attach_preview(id, uri));
        assert_eq!(
            workflow.preview_uri().as_deref(),
            Some("data:image/jpeg;base64,aGVsbG8=")
        );
    }

    #[test]
    fn test_stale_preview_is_dropped() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        workflow.select_file(png(1)).unwrap();
        let first = workflow.selection_id().unwrap();
        workflow.select_file(png(2)).unwrap();
        let second = workflow.selection_id().unwrap();

        assert!(second > first);
        assert!(!workflow.attach_preview(first, "old".into()));
        assert_eq!(workflow.preview_uri(), None);
        assert!(workflow.attach_preview(second, "new".into()));
    }

    #[test]
    fn test_submit_without_file() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        let err = block_on(workflow.submit("skeeter")).unwrap_err();

        assert_eq!(err.kind, ErrorKind::MissingFile);
        assert_eq!(workflow.transport().calls.get(), 0);
        assert_eq!(workflow.last_error(), Some(ErrorKind::MissingFile));
    }

    #[test]
    fn test_submit_without_username() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        workflow.select_file(png(10)).unwrap();

        let err = block_on(workflow.submit("   ")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingUsername);
        assert_eq!(workflow.transport().calls.get(), 0);
        assert!(workflow.has_file());
    }

    #[test]
    fn test_submit_success_clears_selection() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(
            200,
            r#"{"success": true, "coins": 10}"#,
        ));
        workflow.select_file(png(10)).unwrap();
        let id = workflow.selection_id().unwrap();
        workflow.attach_preview(id, "data:image/png;base64,AA==".into());

        let success = block_on(workflow.submit(" skeeter ")).unwrap();
        assert_eq!(success.coins_earned, 10);
        assert_eq!(workflow.transport().calls.get(), 1);
        assert_eq!(
            workflow.transport().last_username.borrow().as_deref(),
            Some("skeeter")
        );
        assert!(!workflow.has_file());
        assert_eq!(workflow.preview_uri(), None);
        assert!(!workflow.is_submitting());
        assert!(workflow.status_message().is_some());
    }

    #[test]
    fn test_submit_duplicate_keeps_file() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(
            200,
            r#"{"success": false, "error": "DUPLICATE_IMAGE"}"#,
        ));
        workflow.select_file(png(10)).unwrap();

        let err = block_on(workflow.submit("skeeter")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateImage);
        assert!(workflow.has_file());
        assert_eq!(workflow.last_error(), Some(ErrorKind::DuplicateImage));
        assert!(!workflow.is_submitting());
    }

    #[test]
    fn test_submit_unreachable() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::failing());
        workflow.select_file(png(10)).unwrap();

        let err = block_on(workflow.submit("skeeter")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unreachable);
        assert_eq!(workflow.transport().calls.get(), 1);
        assert!(workflow.has_file());
    }

    #[test]
    fn test_concurrent_submit_is_rejected() {
        let (tx, rx) = oneshot::channel();
        let workflow = SubmissionWorkflow::new(GatedTransport {
            calls: Cell::new(0),
            gate: RefCell::new(Some(rx)),
        });
        workflow.select_file(png(10)).unwrap();

        block_on(async {
            let mut first = Box::pin(workflow.submit("skeeter"));
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(workflow.is_submitting());

            let second = workflow.submit("skeeter").await.unwrap_err();
            assert_eq!(second.kind, ErrorKind::InProgress);
            assert_eq!(workflow.transport().calls.get(), 1);
            assert_eq!(workflow.last_error(), None);

            tx.send(RawResponse::new(200, r#"{"success": true, "coins": 3}"#))
                .unwrap();
            let result = first.await.unwrap();
            assert_eq!(result.coins_earned, 3);
        });

        assert!(!workflow.is_submitting());
        assert_eq!(workflow.transport().calls.get(), 1);
    }

    #[test]
    fn test_observers_see_submitting_flag() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(
            200,
            r#"{"success": true, "coins": 1}"#,
        ));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        workflow.subscribe(Box::new(move |snapshot: &FormSnapshot| {
            sink.borrow_mut().push(snapshot.is_submitting);
        }));

        workflow.select_file(png(10)).unwrap();
        block_on(workflow.submit("skeeter")).unwrap();

        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_clear_error_and_reset() {
        let workflow = SubmissionWorkflow::new(ScriptedTransport::responding(200, "{}"));
        let _ = block_on(workflow.submit("skeeter"));
        assert!(workflow.snapshot().error_message.is_some());

        workflow.clear_error();
        assert_eq!(workflow.snapshot().error_message, None);

        workflow.select_file(png(10)).unwrap();
        workflow.reset();
        assert_eq!(workflow.snapshot(), FormSnapshot::default());
    }
}
