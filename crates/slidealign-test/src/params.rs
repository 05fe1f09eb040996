//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use slidealign_core::PixelBuffer;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and buffers (default)
    #[default]
    Compare,
    /// Compare, and also write intermediate composites for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the running check
/// index, the mode, and every failure seen so far. Checks never panic;
/// call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "disorder")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, configured from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "value comparison for index {}: difference = {} but allowed delta = {}, \
                 expected = {}, actual = {}",
                self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Check a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!("check for index {} failed: {}", self.index, what));
        }
        condition
    }

    /// Compare two buffers for exact equality
    ///
    /// Reports the first differing pixel on failure.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            self.fail(format!(
                "buffer comparison for index {} - dimension mismatch: {}x{} vs {}x{}",
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        let first_diff = expected
            .pixels()
            .iter()
            .zip(actual.pixels())
            .position(|(a, b)| a != b);

        if let Some(i) = first_diff {
            let w = expected.width() as usize;
            self.fail(format!(
                "buffer comparison for index {} - pixel mismatch at ({}, {}): {:08X} vs {:08X}",
                self.index,
                i % w,
                i / w,
                expected.pixels()[i],
                actual.pixels()[i]
            ));
            return false;
        }

        true
    }

    /// Write a buffer as PNG to the regout directory in display mode.
    ///
    /// Does nothing in compare mode.
    pub fn write_buffer(&mut self, buffer: &PixelBuffer, label: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        fs::create_dir_all(regout_dir())?;
        let path = format!("{}/{}.{}.png", regout_dir(), self.test_name, label);
        slidealign_io::write_png_file(buffer, &path).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_buffers_reports_position() {
        let a = PixelBuffer::filled(3, 2, 0).unwrap();
        let mut b = a.clone();
        b.set(1, 1, 9).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_buffers(&a, &a));
        assert!(!rp.compare_buffers(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
        assert_eq!(rp.index(), 2);
    }
}
