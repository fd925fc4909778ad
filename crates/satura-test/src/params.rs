//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use satura_core::{DecoderOrder, LaneOrder, Pix, codec};
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run the checks only (default)
    #[default]
    Compare,
    /// Run the checks and write images for visual inspection
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
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode, and every failure recorded so far. Checks do
/// not panic; call [`RegParams::cleanup`] at the end and assert on it.
pub struct RegParams {
    /// Name of the test (e.g., "flip")
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
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "flip")
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
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

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
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
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two buffers for exact equality
    ///
    /// # Returns
    ///
    /// `true` if dimensions and every pixel match, `false` otherwise.
    pub fn compare_pix<O: LaneOrder>(&mut self, pix1: &Pix<O>, pix2: &Pix<O>) -> bool {
        self.compare_pix_within(pix1, pix2, 0)
    }

    /// Compare two buffers channel by channel
    ///
    /// Each color channel may differ by at most `tolerance`; the tag byte
    /// must match exactly.
    ///
    /// # Returns
    ///
    /// `true` if the buffers agree, `false` otherwise.
    pub fn compare_pix_within<O: LaneOrder>(
        &mut self,
        pix1: &Pix<O>,
        pix2: &Pix<O>,
        tolerance: u8,
    ) -> bool {
        self.index += 1;

        if pix1.width() != pix2.width() || pix1.height() != pix2.height() {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            return self.fail(msg);
        }

        let width = pix1.width().max(1) as usize;
        for (i, (&p1, &p2)) in pix1.data().iter().zip(pix2.data()).enumerate() {
            let (r1, g1, b1) = codec::extract_rgb::<O>(p1);
            let (r2, g2, b2) = codec::extract_rgb::<O>(p2);
            let same = r1.abs_diff(r2) <= tolerance
                && g1.abs_diff(g2) <= tolerance
                && b1.abs_diff(b2) <= tolerance
                && codec::tag(p1) == codec::tag(p2);
            if !same {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - pixel mismatch at \
                     ({}, {}): {:#010x} vs {:#010x}",
                    self.test_name,
                    self.index,
                    i % width,
                    i / width,
                    p1,
                    p2
                );
                return self.fail(msg);
            }
        }

        true
    }

    /// Write a decoder-order image to the regout directory when running in
    /// display mode. Does nothing in compare mode.
    pub fn write_pix_for_display(
        &mut self,
        pix: &Pix<DecoderOrder>,
        label: &str,
    ) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;

        let path = format!("{}/{}.{:02}.{}.png", dir, self.test_name, self.index, label);
        satura_io::write_image(pix, &path).map_err(|e| TestError::ImageWrite {
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
}
