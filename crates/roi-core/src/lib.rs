//! # roi-core
//!
//! Meeting cost model for the ROI calculator: given how many admins and
//! directors sit in board meetings, what does a year of meetings cost, and
//! what would moving to board-management software save?
//!
//! ## Cost model
//!
//! The formula is a fixed business parameterisation, not configurable:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  cost_per_meeting = (avg_annual_salary / 100) * 0.15         │
//! │                                                              │
//! │  admins    × meetings/yr × cost_per_meeting × 4h  = admin    │
//! │  directors × meetings/yr × cost_per_meeting × 2h  = director │
//! │                                        ──────────────────    │
//! │                                        annual cost = sum     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The savings comparison (`saas_monthly × 12` against the annual cost) is
//! only produced when the caller has unlocked the premium view.
//!
//! All money is `rust_decimal::Decimal`; the calculator is a pure function
//! with no failure modes. Malformed form text never reaches it: the parse
//! helpers on [`Inputs`] substitute safe minimums first.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::{calculate, Inputs};
//! use rust_decimal_macros::dec;
//!
//! let result = calculate(&Inputs::default(), false);
//! assert_eq!(result.total_annual_cost, dec!(151200));
//! assert!(result.savings.is_none()); // locked
//! ```

pub mod calculator;
pub mod format;
pub mod model;

pub use calculator::{calculate, ADMIN_HOURS_PER_MEETING, COST_FRACTION, DIRECTOR_HOURS_PER_MEETING};
pub use format::format_usd;
pub use model::{CalculationResult, Inputs};
