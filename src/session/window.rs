//! Join-window evaluation for scheduled livestream sessions.
//!
//! Explorers may enter a session a little before its nominal start and for a
//! while after it; outside that window the join button stays disabled. The
//! evaluator classifies the current moment against the window and produces
//! the join decision plus the text the booking views render.

use chrono::{Duration, Local, NaiveDateTime};
use serde::Serialize;

use crate::session::schedule::{ScheduleError, SessionSchedule};
use crate::utils::time::format_countdown;

/// Sessions within this many minutes of starting show as "available soon"
/// rather than "too early", even while the join window is still closed.
const APPROACH_HORIZON_MINUTES: i64 = 60;

/// Where the current moment falls relative to a session's join window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    TooEarly,
    AvailableSoon,
    LiveNow,
    Ended,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::TooEarly => "too-early",
            SessionStatus::AvailableSoon => "available-soon",
            SessionStatus::LiveNow => "live-now",
            SessionStatus::Ended => "ended",
        }
    }
}

/// Join-window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Minutes before the scheduled start during which joining is permitted
    pub before_minutes: i64,
    /// Hours after the scheduled start during which joining remains permitted
    pub after_hours: i64,
    /// Testing override: skip window enforcement entirely.
    ///
    /// Injected here, at construction, so the bypass is visible in every
    /// result (`testing_mode`) and tests can toggle it per instance.
    pub bypass_window: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            before_minutes: 15,
            after_hours: 2,
            bypass_window: false,
        }
    }
}

impl WindowConfig {
    fn validate(&self) -> Result<(), ScheduleError> {
        if self.before_minutes < 0 {
            return Err(ScheduleError::NegativeWindow(format!(
                "before_minutes must be non-negative, got {}",
                self.before_minutes
            )));
        }
        if self.after_hours < 0 {
            return Err(ScheduleError::NegativeWindow(format!(
                "after_hours must be non-negative, got {}",
                self.after_hours
            )));
        }
        Ok(())
    }
}

/// Outcome of evaluating a schedule against the join window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEvaluation {
    pub can_join: bool,
    pub status: SessionStatus,
    pub message: String,
    pub time_until_start: Option<String>,
    pub testing_mode: bool,
}

/// Badge severity for list/card status chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSeverity {
    Urgent,
    Normal,
    Neutral,
    Muted,
}

/// Short status summary for booking cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub severity: BadgeSeverity,
    pub label: String,
}

impl StatusBadge {
    /// Derive a badge from an existing evaluation.
    ///
    /// This is the only place badge text comes from. It never redoes the
    /// window arithmetic, so status chips cannot disagree with the join
    /// button rendered from the same evaluation.
    pub fn from_evaluation(eval: &WindowEvaluation) -> Self {
        match eval.status {
            SessionStatus::LiveNow => Self {
                severity: BadgeSeverity::Urgent,
                label: "Live Now".to_string(),
            },
            SessionStatus::Ended => Self {
                severity: BadgeSeverity::Muted,
                label: "Completed".to_string(),
            },
            SessionStatus::AvailableSoon | SessionStatus::TooEarly => {
                let severity = if eval.status == SessionStatus::AvailableSoon {
                    BadgeSeverity::Normal
                } else {
                    BadgeSeverity::Neutral
                };
                let label = match &eval.time_until_start {
                    Some(countdown) => format!("Starts {}", countdown),
                    None => "Upcoming".to_string(),
                };
                Self { severity, label }
            }
        }
    }
}

/// Decides whether a session can be joined right now.
///
/// Stateless apart from its configuration; safe to construct once and call
/// on every render.
#[derive(Debug, Clone, Copy)]
pub struct SessionWindowEvaluator {
    config: WindowConfig,
}

impl SessionWindowEvaluator {
    /// Build an evaluator, rejecting negative window parameters
    pub fn new(config: WindowConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Evaluate against the wall clock.
    ///
    /// The join-action handler calls this immediately before navigating to
    /// the livestream view rather than trusting an earlier render.
    pub fn evaluate(&self, schedule: &SessionSchedule) -> WindowEvaluation {
        self.evaluate_at(schedule, Local::now().naive_local())
    }

    /// Evaluate against an explicit `now`. Pure; identical inputs always
    /// produce identical results.
    pub fn evaluate_at(&self, schedule: &SessionSchedule, now: NaiveDateTime) -> WindowEvaluation {
        if self.config.bypass_window {
            return WindowEvaluation {
                can_join: true,
                status: SessionStatus::LiveNow,
                message: "Testing mode: join window checks are disabled".to_string(),
                time_until_start: None,
                testing_mode: true,
            };
        }

        let session_start = schedule.session_start();
        let earliest_join = session_start - Duration::minutes(self.config.before_minutes);
        let latest_join = session_start + Duration::hours(self.config.after_hours);

        if now > latest_join {
            return WindowEvaluation {
                can_join: false,
                status: SessionStatus::Ended,
                message: "This session has ended".to_string(),
                time_until_start: None,
                testing_mode: false,
            };
        }

        // Both bounds are inclusive: joining opens exactly at earliest_join
        // and stays open through latest_join.
        if now >= earliest_join {
            let message = if now >= session_start {
                "Session is live".to_string()
            } else {
                "Session starts soon. You can join now".to_string()
            };
            return WindowEvaluation {
                can_join: true,
                status: SessionStatus::LiveNow,
                message,
                time_until_start: None,
                testing_mode: false,
            };
        }

        let minutes_until_start = (session_start - now).num_minutes();
        let countdown = format_countdown(minutes_until_start);
        let (status, message) = if minutes_until_start <= APPROACH_HORIZON_MINUTES {
            (
                SessionStatus::AvailableSoon,
                format!("Starting soon: session begins in {}", countdown),
            )
        } else {
            (
                SessionStatus::TooEarly,
                format!("Session starts in {}", countdown),
            )
        };

        WindowEvaluation {
            can_join: false,
            status,
            message,
            time_until_start: Some(countdown),
            testing_mode: false,
        }
    }

    /// Badge for list/card UIs, evaluated against the wall clock
    pub fn status_badge(&self, schedule: &SessionSchedule) -> StatusBadge {
        StatusBadge::from_evaluation(&self.evaluate(schedule))
    }

    /// Badge for list/card UIs, evaluated against an explicit `now`
    pub fn status_badge_at(&self, schedule: &SessionSchedule, now: NaiveDateTime) -> StatusBadge {
        StatusBadge::from_evaluation(&self.evaluate_at(schedule, now))
    }
}
