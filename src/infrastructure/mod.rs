//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `clock` - Wall-clock `Clock` backed by chrono

pub mod clock;

pub use clock::SystemClock;
