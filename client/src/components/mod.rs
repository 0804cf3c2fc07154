//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render typed view-models from `state`; pages own the signals
//! and pass callbacks down for actions.

pub mod admin_nav;
pub mod camera_preview;
pub mod candidate_card;
pub mod status_line;
pub mod voter_row;
