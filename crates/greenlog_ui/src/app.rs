//! Main application state and view.
//!
//! `App::new` is the explicit one-shot initialization point: it builds the
//! session and API client and fires the startup health probe exactly once.
//! All other work is driven by user interaction through `Message`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use iced::widget::{
    button, column, container, pick_list, row, scrollable, space::horizontal as horizontal_space,
    text, text_editor,
};
use iced::{Alignment, Element, Length, Subscription, Task};

use greenlog_core::client::ApiClient;
use greenlog_core::config::ConfigManager;
use greenlog_core::models::{BackendStatus, HealthReport, Language};
use greenlog_core::session::Session;

use crate::theme;

/// Application state.
pub struct App {
    /// Shared configuration (persists the language selection).
    pub config: Arc<Mutex<ConfigManager>>,
    /// Client for the remote analysis service.
    pub client: ApiClient,
    /// All session state (document, language, status, result, flags).
    pub session: Session,
    /// Editor buffer backing the document text area.
    pub editor: text_editor::Content,
    /// Transient one-line status message under the controls.
    pub status_line: String,
    /// Clipboard handle, created on first use and kept for the app
    /// lifetime: on X11 without a clipboard manager, dropping the handle
    /// can clear the copied text.
    pub clipboard: Option<arboard::Clipboard>,
}

/// All messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup health probe resolved.
    HealthChecked(HealthReport),
    /// Edit in the document text area.
    EditorAction(text_editor::Action),
    /// Target language picked.
    LanguagePicked(Language),
    /// "Load File" pressed.
    BrowseDocument,
    /// File picked (or dropped) and read; None on cancel or read failure.
    DocumentLoaded(Option<(String, String)>),
    /// File dropped onto the window.
    FileDropped(PathBuf),
    /// "Analyze" pressed.
    Analyze,
    /// Analyze request resolved; Err carries the composed failure notice.
    AnalysisFinished(Result<String, String>),
    /// Copy document text to the clipboard.
    CopyDocument,
    /// Copy analysis result to the clipboard.
    CopyResult,
    /// Clear document, result, and file name.
    Reset,
}

impl App {
    /// Build the initial state and fire the one-shot health probe.
    pub fn new(config: Arc<Mutex<ConfigManager>>) -> (Self, Task<Message>) {
        let (base_url, language) = {
            let cfg = config.lock().unwrap();
            let settings = cfg.settings();
            (settings.effective_base_url(), settings.ui.last_language)
        };

        let client = ApiClient::new(base_url);
        let mut session = Session::new();
        session.set_language(language);

        let probe = client.clone();
        let startup =
            Task::perform(async move { probe.check_health().await }, Message::HealthChecked);

        let app = Self {
            config,
            client,
            session,
            editor: text_editor::Content::new(),
            status_line: String::new(),
            clipboard: None,
        };

        (app, startup)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HealthChecked(report) => {
                self.handle_health_checked(report);
                Task::none()
            }
            Message::EditorAction(action) => {
                self.editor.perform(action);
                self.session.set_document_text(self.editor.text());
                Task::none()
            }
            Message::LanguagePicked(language) => {
                self.set_language(language);
                Task::none()
            }
            Message::BrowseDocument => self.browse_document(),
            Message::DocumentLoaded(loaded) => {
                self.handle_document_loaded(loaded);
                Task::none()
            }
            Message::FileDropped(path) => self.load_dropped_file(path),
            Message::Analyze => self.start_analysis(),
            Message::AnalysisFinished(result) => {
                self.handle_analysis_finished(result);
                Task::none()
            }
            Message::CopyDocument => {
                self.copy_to_clipboard("Document text", self.session.document_text.clone());
                Task::none()
            }
            Message::CopyResult => {
                self.copy_to_clipboard("Analysis", self.session.analysis_result.clone());
                Task::none()
            }
            Message::Reset => {
                self.handle_reset();
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("GreenLog").size(26),
            horizontal_space(),
            text("●")
                .size(16)
                .color(theme::status_color(self.session.backend_status)),
            text(self.status_caption()).size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let file_label = match &self.session.file_name {
            Some(name) => format!("Loaded file: {}", name),
            None => "No file loaded".to_string(),
        };

        let editor = text_editor(&self.editor)
            .placeholder("Paste logistics document text here, or load a file...")
            .on_action(Message::EditorAction)
            .height(Length::Fill);

        let counts = text(format!(
            "{} characters, {} words",
            self.session.char_count(),
            self.session.word_count()
        ))
        .size(13);

        let analyze_label = if self.session.analyzing {
            "Analyzing..."
        } else {
            "Analyze"
        };

        // The empty-document case stays pressable so the local rejection
        // prompt can surface; only an in-flight request disables the button.
        let controls = row![
            button("Load File...").on_press(Message::BrowseDocument),
            button("Copy Text").on_press_maybe(
                (!self.session.document_text.is_empty()).then_some(Message::CopyDocument)
            ),
            button("Reset").on_press(Message::Reset),
            horizontal_space(),
            pick_list(
                Language::ALL,
                Some(self.session.language),
                Message::LanguagePicked
            ),
            button(analyze_label)
                .on_press_maybe((!self.session.analyzing).then_some(Message::Analyze))
                .style(button::primary),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let status_line =
            (!self.status_line.is_empty()).then(|| text(self.status_line.as_str()).size(14));

        // Result panel is hidden while the result string is empty.
        let result_panel = (!self.session.analysis_result.is_empty()).then(|| {
            container(
                column![
                    row![
                        text("Analysis").size(18),
                        horizontal_space(),
                        button("Copy Analysis").on_press(Message::CopyResult),
                    ]
                    .align_y(Alignment::Center),
                    scrollable(text(self.session.analysis_result.as_str()))
                        .height(Length::FillPortion(2)),
                ]
                .spacing(8),
            )
            .padding(12)
            .style(container::bordered_box)
        });

        let content = column![header, text(file_label).size(14), editor, counts, controls]
            .push(status_line)
            .push(result_panel)
            .spacing(10);

        container(content).padding(16).into()
    }

    fn status_caption(&self) -> String {
        match self.session.backend_status {
            BackendStatus::Unknown => "checking backend...".to_string(),
            BackendStatus::Healthy => {
                if self.session.ai_available == Some(false) {
                    "backend online (demo mode)".to_string()
                } else {
                    "backend online".to_string()
                }
            }
            BackendStatus::Unhealthy => "backend offline".to_string(),
        }
    }

    /// Copy text to the system clipboard and surface a confirmation.
    /// Clipboard failures are logged, nothing more.
    pub fn copy_to_clipboard(&mut self, what: &str, contents: String) {
        let clipboard = match &mut self.clipboard {
            Some(clipboard) => clipboard,
            None => match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard.insert(clipboard),
                Err(e) => {
                    tracing::warn!("clipboard unavailable: {}", e);
                    return;
                }
            },
        };

        match clipboard.set_text(contents) {
            Ok(()) => self.status_line = format!("{what} copied to clipboard."),
            Err(e) => tracing::warn!("clipboard copy failed: {}", e),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.session.set_language(language);

        let mut cfg = self.config.lock().unwrap();
        cfg.settings_mut().ui.last_language = language;
        if let Err(e) = cfg.save() {
            tracing::warn!("failed to persist language selection: {}", e);
        }
    }

    pub fn handle_reset(&mut self) {
        self.session.reset();
        self.editor = text_editor::Content::new();
        self.status_line = "Cleared.".to_string();
    }
}
