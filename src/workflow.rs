//! Upload workflow state and transitions.
//!
//! One explicit state record owns everything the view renders: the selected
//! file, the loading flag and the terminal result-or-error. Transitions are
//! plain methods with no I/O, so they run identically under native tests
//! and in the browser; the async submit task in the upload component is the
//! only caller that touches the network.
//!
//! Overlapping submits are legal. Every submit issues a monotonically
//! increasing [`RequestToken`], and a settlement is applied only while its
//! token is still the latest one issued, so of several in-flight requests
//! only the newest can write `result` or `error`.

use crate::types::ExtractionResult;

/// Error shown when submit is triggered with no file selected.
pub const NO_FILE_MESSAGE: &str = "Please select a file first";

/// Identity of one issued request; later submits get larger tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// UI state for one upload/extract cycle.
///
/// Generic over the file handle type: the browser stores a
/// `web_sys::File`, tests store any cheap stand-in. The workflow never
/// looks inside the handle, it only carries it to the request builder.
///
/// Invariants: `result` and `error` are never both present, and `loading`
/// is true only strictly between a submit and that request's settlement.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowState<F> {
    /// Currently selected file, if any.
    pub file: Option<F>,
    /// True while the latest submitted request is unsettled.
    pub loading: bool,
    /// Last stored extraction result.
    pub result: Option<ExtractionResult>,
    /// Last stored failure message.
    pub error: Option<String>,
    /// Latest issued token; settlements carrying an older one are stale.
    issued: RequestToken,
}

impl<F> Default for WorkflowState<F> {
    fn default() -> Self {
        Self {
            file: None,
            loading: false,
            result: None,
            error: None,
            issued: RequestToken::default(),
        }
    }
}

impl<F> WorkflowState<F> {
    /// Fresh state, as created on view mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selection event from the file picker.
    ///
    /// `None` means the picker was cancelled or the selection was reset;
    /// either way the previous result or error is cleared. The token
    /// counter is left untouched: selection does not cancel a request
    /// already in flight, which may therefore still settle afterwards.
    pub fn select_file(&mut self, file: Option<F>) {
        self.file = file;
        self.result = None;
        self.error = None;
    }

    /// Start a submit.
    ///
    /// With no file selected this stores [`NO_FILE_MESSAGE`] and issues
    /// nothing; `loading` is not touched and no request may be sent.
    /// Otherwise the state moves to loading and the caller receives the
    /// file handle to upload together with the token to settle with.
    pub fn begin_submit(&mut self) -> Option<(F, RequestToken)>
    where
        F: Clone,
    {
        let Some(file) = self.file.clone() else {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return None;
        };

        self.loading = true;
        self.result = None;
        self.error = None;
        self.issued = RequestToken(self.issued.0 + 1);
        Some((file, self.issued))
    }

    /// Apply the settlement of the request identified by `token`.
    ///
    /// Returns `false` and changes nothing when a newer submit has been
    /// issued since: the stale outcome is discarded rather than allowed to
    /// overwrite newer state. The latest settlement clears `loading` and
    /// stores exactly one of result or error.
    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<ExtractionResult, String>,
    ) -> bool {
        if token != self.issued {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
                self.result = None;
            }
        }
        true
    }
}
