//! Session state container.
//!
//! All mutable client state lives in one `Session` value owned by the UI.
//! Operations are methods on it, so behavior is testable without any
//! widget toolkit: the analyze gate, reset semantics, and the derived
//! character/word counts are all exercised here.

use crate::document;
use crate::models::{BackendStatus, HealthReport, Language};

/// Decision returned by [`Session::begin_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisGate {
    /// Document text is valid and the loading flag is now set.
    Ready,
    /// Document text trims to empty; no request must be issued.
    EmptyDocument,
    /// A request is already in flight; this submission is a no-op.
    Busy,
}

/// In-memory state for one client session. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current document text (from a file load or direct edit).
    pub document_text: String,
    /// Name of the loaded file, if the text came from one.
    pub file_name: Option<String>,
    /// Target language for the analysis.
    pub language: Language,
    /// Liveness indicator set once by the startup probe.
    pub backend_status: BackendStatus,
    /// Whether the service reported an upstream AI credential.
    pub ai_available: Option<bool>,
    /// Last analysis output (or composed failure notice). Empty = hidden.
    pub analysis_result: String,
    /// Loading flag: true only while an analyze request is in flight.
    pub analyzing: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document text from a direct edit. Typing after a file
    /// load keeps the file name until the next reset or load.
    pub fn set_document_text(&mut self, text: String) {
        self.document_text = text;
    }

    /// Replace the document text from a file read. The file contents
    /// overwrite any pasted text.
    pub fn load_document(&mut self, file_name: String, text: String) {
        self.document_text = text;
        self.file_name = Some(file_name);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Character count of the document text, whitespace included.
    pub fn char_count(&self) -> usize {
        document::char_count(&self.document_text)
    }

    /// Number of non-empty whitespace-delimited tokens.
    pub fn word_count(&self) -> usize {
        document::word_count(&self.document_text)
    }

    /// Validation and concurrency gate for the analyze operation.
    ///
    /// On [`AnalysisGate::Ready`] the loading flag is set and the caller
    /// must issue exactly one request, resolving it through
    /// [`Session::finish_analysis`]. Any other value means no request.
    pub fn begin_analysis(&mut self) -> AnalysisGate {
        if self.analyzing {
            return AnalysisGate::Busy;
        }
        if self.document_text.trim().is_empty() {
            return AnalysisGate::EmptyDocument;
        }
        self.analyzing = true;
        AnalysisGate::Ready
    }

    /// Store the outcome of an analyze request and clear the loading flag.
    ///
    /// Success text and composed failure notices share this path; the
    /// result panel shows whatever string arrives, verbatim.
    pub fn finish_analysis(&mut self, result: String) {
        self.analyzing = false;
        self.analysis_result = result;
    }

    /// Apply the startup probe outcome. The status never reverts to
    /// `Unknown` once a probe has completed.
    pub fn record_health(&mut self, report: HealthReport) {
        if report.status != BackendStatus::Unknown {
            self.backend_status = report.status;
            self.ai_available = report.ai_available;
        }
    }

    /// Clear document text, analysis result, and the remembered file name.
    /// Language and backend status are left untouched. Idempotent.
    pub fn reset(&mut self) {
        self.document_text.clear();
        self.analysis_result.clear();
        self.file_name = None;
    }
}
