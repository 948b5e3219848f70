//! Amortization schedules and TILA disclosure figures for seller-financed
//! real-estate notes, computed with decimal precision.
//!
//! The engine is a stateless pure-function module: every schedule and
//! summary is a deterministic function of immutable [`terms::LoanTerms`],
//! safe to call concurrently with no locking.

pub mod error;
pub mod schedule;
pub mod terms;
pub mod tila;
pub mod time_value;
pub mod types;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "disclosure")]
pub mod disclosure;

#[cfg(feature = "note_sale")]
pub mod note_sale;

pub use error::SellerNoteError;
pub use types::*;

/// Standard result type for all seller-note operations
pub type SellerNoteResult<T> = Result<T, SellerNoteError>;
