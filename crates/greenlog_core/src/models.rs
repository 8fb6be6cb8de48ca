//! Core types shared between the client, session, and UI.

use serde::{Deserialize, Serialize};

/// Target language for the analysis response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Spanish.
    #[default]
    #[serde(rename = "ES")]
    Es,
    /// English.
    #[serde(rename = "EN")]
    En,
    /// French.
    #[serde(rename = "FR")]
    Fr,
    /// German.
    #[serde(rename = "DE")]
    De,
}

impl Language {
    /// All selectable languages, in picker order.
    pub const ALL: [Language; 4] = [Language::Es, Language::En, Language::Fr, Language::De];

    /// Wire code sent as the `language` form field.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
            Language::Fr => "FR",
            Language::De => "DE",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Es => write!(f, "Español (ES)"),
            Language::En => write!(f, "English (EN)"),
            Language::Fr => write!(f, "Français (FR)"),
            Language::De => write!(f, "Deutsch (DE)"),
        }
    }
}

/// Liveness of the remote analysis service, as seen by the startup probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// Probe has not completed yet.
    #[default]
    Unknown,
    /// Probe got a 2xx response.
    Healthy,
    /// Probe failed or got a non-2xx response.
    Unhealthy,
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendStatus::Unknown => write!(f, "checking"),
            BackendStatus::Healthy => write!(f, "online"),
            BackendStatus::Unhealthy => write!(f, "offline"),
        }
    }
}

/// Outcome of the one-shot health probe.
///
/// `ai_available` comes from the service's health payload when present;
/// the service runs in a demo mode without an upstream AI credential, and
/// the indicator can say so. No other body contract is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub status: BackendStatus,
    pub ai_available: Option<bool>,
}

impl HealthReport {
    /// Report for a failed or non-2xx probe.
    pub fn unhealthy() -> Self {
        Self {
            status: BackendStatus::Unhealthy,
            ai_available: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn language_codes_match_wire_format() {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["ES", "EN", "FR", "DE"]);
    }

    #[test]
    fn language_serde_uses_wire_code() {
        let json = serde_json::to_string(&Language::De).unwrap();
        assert_eq!(json, "\"DE\"");
        let parsed: Language = serde_json::from_str("\"FR\"").unwrap();
        assert_eq!(parsed, Language::Fr);
    }

    #[test]
    fn backend_status_starts_unknown() {
        assert_eq!(BackendStatus::default(), BackendStatus::Unknown);
    }
}
