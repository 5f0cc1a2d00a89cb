//! Adapter utilities for the `sticky-headers` crate.
//!
//! The `sticky-headers` crate recomputes everything from the inputs of each pass. This crate
//! provides small, framework-neutral helpers around it:
//!
//! - [`OverlayController`]: memoizes draw passes and reserved header heights, invalidated when
//!   the materialized window, the envelope or the header content changes
//! - [`LinearListHost`]: an in-memory virtualized list implementing `ListHost`, useful for
//!   simulations, demos and tests
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod linear;

#[cfg(test)]
mod tests;

pub use controller::{CacheStats, OverlayController};
pub use linear::LinearListHost;
