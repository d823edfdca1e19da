//! Observable view-state holders for the UI layer.
//!
//! # Responsibility
//! - Own the observable cells the UI renders from.
//! - Expose intent methods that run repository calls and publish outcomes.
//!
//! # Invariants
//! - Cells are mutated only by their owning holder.
//! - Persistence failures end up in a cell, never as a propagated error.
//! - Holders are independent; no ordering exists between concurrent intents.

pub mod cell;
pub mod session;
pub mod trip_state;
pub mod user_state;
