//! Shared test fixtures for RailForge crates.
//!
//! - [`diamond`] - the four-station diamond network used by the scenario tests
//! - [`graphs`] - chain, ring and grid networks plus networks from edge lists
//! - [`assertions`] - invariant checks for lines and solutions
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! railforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use railforge_test::{diamond, assert_line_invariants};
//! ```

pub mod assertions;
pub mod diamond;
pub mod graphs;

pub use assertions::{assert_line_invariants, assert_solution_invariants};
pub use diamond::{diamond, Diamond};
pub use graphs::{chain, grid, network_from_edges, ring};
