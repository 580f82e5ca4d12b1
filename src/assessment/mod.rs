/// Assessment domain - pure data contract and display policies
///
/// Nothing in this module performs I/O; it describes what the backend returns
/// and how those values map onto user-facing risk signals.
pub mod domain;
pub mod policies;
