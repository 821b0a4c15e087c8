//! Rule System
//!
//! Boundary classification, restart placement and restart resumption.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               RuleDispatcher                │
//! │  Evaluation order (fixed):                  │
//! │  1. Left goal line   (goal / kick / corner) │
//! │  2. Right goal line  (goal / kick / corner) │
//! │  3. Top sideline     (throw-in)             │
//! │  4. Bottom sideline  (throw-in)             │
//! │                                             │
//! │                RuleDecision                 │
//! │                     │                       │
//! │        restart::place_for_restart           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! An edge counts as crossed as soon as the ball's body reaches it.

pub mod dispatcher;
pub mod restart;
pub mod types;

pub use dispatcher::{classify_exit, RuleDispatcher};
pub use restart::{awarded_touch, place_for_restart, restart_kick};
pub use types::{
    BoundaryExit, RestartCounts, RestartInfo, RestartKind, RuleDecision, RuleEvaluationStats,
};
