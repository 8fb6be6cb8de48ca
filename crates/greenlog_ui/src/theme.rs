//! Shared styling helpers.

use iced::Color;

use greenlog_core::models::BackendStatus;

/// Color for the backend status dot.
pub fn status_color(status: BackendStatus) -> Color {
    match status {
        BackendStatus::Unknown => Color::from_rgb(0.60, 0.60, 0.60),
        BackendStatus::Healthy => Color::from_rgb(0.18, 0.65, 0.32),
        BackendStatus::Unhealthy => Color::from_rgb(0.80, 0.22, 0.20),
    }
}
