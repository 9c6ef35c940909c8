//! TUI screen implementations.

pub mod intake;

pub use intake::{IntakeState, SUBMIT_FAILED_NOTICE, draw_intake};
