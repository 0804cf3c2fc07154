//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (camera, storage, dialogs) from
//! page and component logic so the logic stays testable off the browser.

pub mod auth;
pub mod browser;
pub mod camera;
pub mod capture;
pub mod storage;
