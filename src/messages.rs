//! Message types for the panel's Elm-style update loop
//!
//! The host's tree widget translates its row signals into these messages;
//! all panel state changes flow through them.

use crate::outline::RowPath;

/// Row events forwarded from the host's tree widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// A row was double-clicked / activated
    RowActivated(RowPath),
    /// A row was expanded (user or programmatic, both count)
    RowExpanded(RowPath),
    /// A row was collapsed
    RowCollapsed(RowPath),
}
