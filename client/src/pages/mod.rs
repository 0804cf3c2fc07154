//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_setup;
pub mod candidates;
pub mod landing;
pub mod vote;
pub mod voter_login;
pub mod voters;
