//! Brick contract: every widget declares checkable assertions and a
//! deterministic HTML/CSS rendition.

use std::time::{Duration, Instant};

/// An assertion a brick makes about its own state.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// Foreground/background contrast must meet this ratio (4.5 for WCAG AA text)
    ContrastRatio(f32),
    /// The brick must expose an accessible name
    AccessibleName,
    /// The brick must be reachable by keyboard
    Focusable,
}

/// Outcome of checking a brick's assertions.
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// Assertions that held
    pub passed: Vec<BrickAssertion>,
    /// Assertions that failed, with the reason
    pub failed: Vec<(BrickAssertion, String)>,
    /// Time spent verifying
    pub verification_time: Duration,
}

impl BrickVerification {
    /// Run `check` over each assertion, timing the whole pass.
    pub fn run<F>(assertions: &[BrickAssertion], mut check: F) -> Self
    where
        F: FnMut(&BrickAssertion) -> Result<(), String>,
    {
        let start = Instant::now();
        let mut verification = Self::default();
        for assertion in assertions {
            match check(assertion) {
                Ok(()) => verification.passed.push(assertion.clone()),
                Err(reason) => verification.failed.push((assertion.clone(), reason)),
            }
        }
        verification.verification_time = start.elapsed();
        verification
    }

    /// True when no assertion failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The brick contract all widgets implement.
pub trait Brick: Send + Sync {
    /// Stable type name.
    fn brick_name(&self) -> &'static str;

    /// Assertions this brick makes.
    fn assertions(&self) -> &[BrickAssertion];

    /// Check the assertions against current state.
    fn verify(&self) -> BrickVerification;

    /// Deterministic HTML for the current state.
    fn to_html(&self) -> String;

    /// Scoped CSS for the HTML rendition.
    fn to_css(&self) -> String;

    /// Test ID for DOM queries.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Whether every assertion currently holds.
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}
