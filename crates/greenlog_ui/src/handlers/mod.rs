//! Handler modules for app business logic.
//!
//! Each module extends `App` with the handlers for one concern, keeping
//! `app.rs` to state, dispatch, and the view.

mod analysis;
mod browse;
