//! Command types for the panel's Elm-style update loop
//!
//! Commands represent side effects the host should perform after an
//! update. The panel itself never touches the editor; it hands back a
//! command and the host glue acts on it.

/// Side effect requested by a panel update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Jump the editor to a symbol's location. `line` is 1-based as ctags
    /// reported it; the consumer converts to its own addressing.
    JumpTo { uri: String, line: u32 },
}
