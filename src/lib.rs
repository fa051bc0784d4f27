//! Core logic for the Guidepost experiences marketplace.
//!
//! Guidepost connects explorers with guides for live guided experiences.
//! This crate holds the pure, UI-independent pieces: join-window evaluation
//! for scheduled livestream sessions, plus the schedule parsing and display
//! formatting helpers shared by booking views and chat.
//!
//! Everything here is synchronous and free of I/O. Views call into it on
//! every render; the join-action handler re-evaluates immediately before
//! navigating rather than trusting a stale render.

pub mod session;
pub mod utils;

pub use session::schedule::{ScheduleError, SessionSchedule};
pub use session::window::{
    BadgeSeverity, SessionStatus, SessionWindowEvaluator, StatusBadge, WindowConfig,
    WindowEvaluation,
};
