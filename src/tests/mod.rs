//! Crate-level tests that exercise [`crate::expand`] as a whole, the way a
//! caller would, rather than any single internal component in isolation.
//! Per-component behavior lives alongside each module instead
//! (`parser::tests`, `completer::tests`).
