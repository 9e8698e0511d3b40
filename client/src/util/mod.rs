//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs from component logic so the
//! components stay testable natively.

pub mod clipboard;
