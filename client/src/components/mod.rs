//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the studio panes and chrome while reading/writing
//! shared state from Leptos context providers set up by the studio page.

pub mod assistant_panel;
pub mod language_selector;
pub mod navbar;
pub mod notice_dialog;
pub mod preview_canvas;
pub mod resize_handle;
pub mod slide_navigator;
