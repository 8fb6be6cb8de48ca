//! Health probe and analyze request handlers.

use iced::Task;

use greenlog_core::client::failure_notice;
use greenlog_core::models::HealthReport;
use greenlog_core::session::AnalysisGate;

use crate::app::{App, Message};

impl App {
    /// Apply the startup probe outcome to the session.
    pub fn handle_health_checked(&mut self, report: HealthReport) {
        tracing::info!("health probe completed: {}", report.status);
        self.session.record_health(report);
    }

    /// Gate and dispatch the analyze request.
    ///
    /// One attempt, no timeout, no retry. The session gate guarantees no
    /// second request is issued while one is in flight.
    pub fn start_analysis(&mut self) -> Task<Message> {
        match self.session.begin_analysis() {
            AnalysisGate::Busy => {
                tracing::debug!("analyze request already in flight; ignoring");
                Task::none()
            }
            AnalysisGate::EmptyDocument => {
                self.status_line =
                    "Nothing to analyze: load or paste a document first.".to_string();
                Task::none()
            }
            AnalysisGate::Ready => {
                self.status_line = "Analyzing document...".to_string();

                let client = self.client.clone();
                let text = self.session.document_text.clone();
                let language = self.session.language;

                Task::perform(
                    async move {
                        match client.analyze(&text, language).await {
                            Ok(analysis) => Ok(analysis),
                            Err(e) => {
                                tracing::warn!("analyze request failed: {}", e);
                                Err(failure_notice(client.base_url(), &e))
                            }
                        }
                    },
                    Message::AnalysisFinished,
                )
            }
        }
    }

    /// Store the outcome. Success text and the composed failure notice
    /// both land in the result panel, verbatim.
    pub fn handle_analysis_finished(&mut self, result: Result<String, String>) {
        match result {
            Ok(analysis) => {
                self.status_line = "Analysis complete.".to_string();
                self.session.finish_analysis(analysis);
            }
            Err(notice) => {
                self.status_line = "Analysis failed.".to_string();
                self.session.finish_analysis(notice);
            }
        }
    }
}
