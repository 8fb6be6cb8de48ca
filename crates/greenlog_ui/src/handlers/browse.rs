//! File loading handlers: picker dialog and window drag-drop.

use std::path::{Path, PathBuf};

use iced::widget::text_editor;
use iced::Task;

use greenlog_core::document;

use crate::app::{App, Message};

impl App {
    /// Open the async file picker and read the chosen file as text.
    pub fn browse_document(&self) -> Task<Message> {
        Task::perform(
            async {
                let file = rfd::AsyncFileDialog::new()
                    .set_title("Select Document")
                    .add_filter("Documents", document::PICKER_EXTENSIONS)
                    .add_filter("All Files", &["*"])
                    .pick_file()
                    .await?;
                read_document(file.path()).await
            },
            Message::DocumentLoaded,
        )
    }

    /// Read a file dropped onto the window.
    pub fn load_dropped_file(&mut self, path: PathBuf) -> Task<Message> {
        tracing::info!("file dropped: {}", path.display());
        Task::perform(
            async move { read_document(&path).await },
            Message::DocumentLoaded,
        )
    }

    /// Apply a loaded file to the session and editor. `None` means the
    /// picker was cancelled or the read failed (already logged); nothing
    /// changes in that case.
    pub fn handle_document_loaded(&mut self, loaded: Option<(String, String)>) {
        let Some((name, text)) = loaded else {
            return;
        };

        // Known limitation carried from the original client: binary
        // formats are not decoded, their raw bytes go over the wire.
        if document::looks_binary(&name) {
            tracing::warn!("{} looks binary; contents are sent as raw text", name);
            self.status_line =
                format!("Loaded {name} (binary format: contents are sent as raw text)");
        } else {
            self.status_line = format!("Loaded {name}");
        }

        self.editor = text_editor::Content::with_text(&text);
        self.session.load_document(name, text);
    }
}

/// Read a local file as text, lossily decoding UTF-8.
async fn read_document(path: &Path) -> Option<(String, String)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    match tokio::fs::read(path).await {
        Ok(bytes) => Some((name, document::decode_text(&bytes))),
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path.display(), e);
            None
        }
    }
}
