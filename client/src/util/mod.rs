//! Utility helpers shared across studio UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (document styles, speech
//! recognition, file pickers) from component logic so SSR builds compile the
//! same call sites as no-ops.

pub mod drag;
pub mod files;
pub mod speech;
