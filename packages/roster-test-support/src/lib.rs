//! Test support utilities for the roster app.
//!
//! Shared between the app's integration test binaries: one-time logging
//! setup and helpers for inspecting rendered HTML pages.

pub mod logging;
pub mod page;
