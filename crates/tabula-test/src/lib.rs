//! Test tooling for Tabula widgets.
//!
//! - [`Harness`] drives a widget with synthetic input and collects the
//!   messages it emits.
//! - [`A11yChecker`] walks a widget tree looking for WCAG 2.1 AA problems.

mod a11y;
mod harness;

pub use a11y::{
    A11yChecker, A11yReport, A11yViolation, ContrastResult, Impact, MIN_CONTRAST_LARGE,
    MIN_CONTRAST_NORMAL,
};
pub use harness::Harness;
