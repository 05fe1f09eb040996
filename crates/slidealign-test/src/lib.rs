//! slidealign-test - Regression test helpers for slidealign
//!
//! This crate provides a small regression test framework and synthetic
//! captcha layers:
//!
//! - **Compare** mode (default): values and buffers are checked, failures
//!   are collected and reported by [`RegParams::cleanup`]
//! - **Display** mode: additionally writes composites as PNG to
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use slidealign_test::{LayerBuilder, RegParams, DARK, LIGHT};
//!
//! let mut rp = RegParams::new("disorder");
//! let buf = LayerBuilder::filled(10, 10, LIGHT).rect(3, 0, 3, 10, DARK).build_buffer();
//! rp.compare_values(0.0, score as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod builders;
mod error;
mod params;

pub use builders::{DARK, LIGHT, LayerBuilder, TRANSPARENT};
pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // slidealign-test is at crates/slidealign-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
