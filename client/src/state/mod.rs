//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! Each module holds the plain data and pure transitions for one screen.
//! Pages wrap these in `RwSignal`s; nothing here touches the browser.

pub mod ballot;
pub mod candidates;
pub mod election;
pub mod session;
pub mod status;
pub mod voters;
