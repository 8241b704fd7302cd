//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`layout`, `deck`, `composer`) so each studio
//! pane depends on a small focused model. Each model is a plain struct with
//! intent methods; the studio page wraps them in `RwSignal`s and provides
//! them via context.

pub mod composer;
pub mod deck;
pub mod layout;
