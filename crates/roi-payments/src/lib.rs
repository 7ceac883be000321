//! # roi-payments
//!
//! Access gating and checkout initiation for the ROI calculator.
//!
//! ## Unlock flow
//!
//! The savings comparison sits behind a one-time payment on a hosted
//! checkout page. This crate never flips the access flag during checkout;
//! unlocking happens only when the provider redirects back with a
//! completion marker in the query string:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────────┐
//! │  Calculator │────▶│  Hosted Payment │────▶│  Calculator          │
//! │  (locked)   │     │  Page           │     │  ?session_id=...     │
//! └─────────────┘     └─────────────────┘     └──────────┬───────────┘
//!        ▲                                               │
//!        │              persist flag, strip marker       │
//!        └───────────────── (unlocked) ◀─────────────────┘
//! ```
//!
//! Once unlocked, the state is absorbing for the session and the persisted
//! flag unlocks every later session at startup. There is no path back to
//! locked.
//!
//! ## Pieces
//!
//! - [`AccessState`] / [`bootstrap`] - the two-state gate and its startup
//!   driver, modelled as explicit events producing a next state plus side
//!   effects so the logic tests without a browser.
//! - [`AccessStore`] - the injected durable-flag seam; the frontend supplies
//!   a localStorage-backed implementation, tests use [`MemoryAccessStore`].
//! - [`CheckoutClient`] - asks the session endpoint for a redirect URL and
//!   hands it back; navigation belongs to the caller.

mod checkout;
mod error;
mod gate;
mod store;

pub use checkout::{CheckoutClient, CheckoutConfig, CheckoutRequest};
pub use error::{PaymentError, Result};
pub use gate::{bootstrap, completion_marker, AccessEvent, AccessState, Effect, Startup};
pub use store::{AccessStore, MemoryAccessStore, ACCESS_KEY, ACCESS_VALUE};
