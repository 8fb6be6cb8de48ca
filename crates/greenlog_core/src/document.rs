//! Document ingestion helpers.
//!
//! Uploads are always interpreted as plain text: bytes are decoded as
//! UTF-8 with replacement, matching the service's own fallback path.
//! Binary formats (PDF/DOC) are never decoded client-side; callers use
//! [`looks_binary`] to warn the user that raw bytes go over the wire.

use std::io;
use std::path::Path;

/// Extensions offered by the file picker.
pub const PICKER_EXTENSIONS: &[&str] = &["txt", "md", "csv", "pdf", "doc", "docx"];

/// Decode raw file bytes as text. Invalid UTF-8 sequences are replaced,
/// never rejected.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Read a local file and interpret its contents as text.
pub fn read_as_text(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes))
}

/// Whether a file name suggests a binary document format that this client
/// will NOT decode before transmission.
pub fn looks_binary(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            matches!(ext.as_str(), "pdf" | "doc" | "docx")
        })
        .unwrap_or(false)
}

/// Character count, whitespace included.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-empty whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn word_count_ignores_surrounding_whitespace() {
        assert_eq!(word_count("  hello   world  "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t"), 0);
        assert_eq!(word_count("one"), 1);
    }

    #[test]
    fn char_count_includes_whitespace() {
        assert_eq!(char_count("  hello   world  "), 17);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn decode_text_replaces_invalid_utf8() {
        let decoded = decode_text(b"manifest \xff\xfe entry");
        assert!(decoded.starts_with("manifest "));
        assert!(decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn looks_binary_matches_known_extensions() {
        assert!(looks_binary("invoice.PDF"));
        assert!(looks_binary("contract.doc"));
        assert!(looks_binary("contract.docx"));
        assert!(!looks_binary("manifest.txt"));
        assert!(!looks_binary("no_extension"));
    }

    #[test]
    fn read_as_text_round_trips_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all("container MSKU-123".as_bytes()).unwrap();

        let text = read_as_text(&path).unwrap();
        assert_eq!(text, "container MSKU-123");
    }
}
