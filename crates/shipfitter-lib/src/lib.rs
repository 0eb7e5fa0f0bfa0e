//! Shipfitter library entry points.
//!
//! This crate exposes helpers to load a spaceship parts list from disk,
//! assemble the parts into a [`Ship`] by keyword classification, and render
//! the result as a human-readable report. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod parts;
pub mod report;
pub mod ship;

pub use error::{Error, Result};
pub use parts::load_parts;
pub use report::render_report;
pub use ship::{PartCategory, Ship, WEAPON_CAPACITY};
