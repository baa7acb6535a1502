//! tagtree - ctags symbol outline core for editor side panels
//!
//! This crate provides the host-independent core of a "source code
//! browser" panel: ctags extraction, symbol tree construction, per-document
//! expansion state, navigation wiring, and symbol-name completion. The
//! host editor supplies the widgets and calls in through
//! [`plugin::SymbolBrowserPlugin`].

pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod config_paths;
pub mod ctags;
pub mod icons;
pub mod messages;
pub mod outline;
pub mod panel;
pub mod plugin;
pub mod tracing;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::Config;
pub use messages::PanelMsg;
pub use panel::{ExpandPlan, SourceTreePanel};
pub use plugin::{HostWindow, SymbolBrowserPlugin};
