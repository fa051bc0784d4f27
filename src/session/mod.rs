// Session scheduling and join-window logic

pub mod schedule;
pub mod window;

pub use schedule::{ScheduleError, SessionSchedule};
pub use window::{
    BadgeSeverity, SessionStatus, SessionWindowEvaluator, StatusBadge, WindowConfig,
    WindowEvaluation,
};
