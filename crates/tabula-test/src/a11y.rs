//! Accessibility checking against WCAG 2.1 AA.
//!
//! Checks:
//! - Name/role/value (4.1.2): interactive widgets need an accessible name
//! - Keyboard (2.1.1): interactive widgets must be focusable
//! - Contrast (1.4.3): body text against its background

use tabula_core::{Color, Widget};

/// Minimum contrast for normal text (WCAG 1.4.3).
pub const MIN_CONTRAST_NORMAL: f32 = 4.5;

/// Minimum contrast for large text (WCAG 1.4.3).
pub const MIN_CONTRAST_LARGE: f32 = 3.0;

/// Accessibility checker.
pub struct A11yChecker;

impl A11yChecker {
    /// Check a widget tree for accessibility violations.
    #[must_use]
    pub fn check(widget: &dyn Widget) -> A11yReport {
        let mut violations = Vec::new();
        Self::check_widget(widget, &mut violations);
        A11yReport { violations }
    }

    fn check_widget(widget: &dyn Widget, violations: &mut Vec<A11yViolation>) {
        if widget.is_interactive() && widget.accessible_name().map_or(true, str::is_empty) {
            violations.push(A11yViolation {
                rule: "aria-label".to_string(),
                message: "Interactive element missing accessible name".to_string(),
                wcag: "4.1.2".to_string(),
                impact: Impact::Critical,
            });
        }

        if widget.is_interactive() && !widget.is_focusable() {
            violations.push(A11yViolation {
                rule: "keyboard".to_string(),
                message: "Interactive element is not keyboard focusable".to_string(),
                wcag: "2.1.1".to_string(),
                impact: Impact::Critical,
            });
        }

        if let Some((foreground, background)) = widget.text_colors() {
            let result = Self::check_contrast(&foreground, &background, false);
            if !result.passes_aa {
                violations.push(A11yViolation {
                    rule: "color-contrast".to_string(),
                    message: format!(
                        "Text contrast {:.2}:1 is below {MIN_CONTRAST_NORMAL}:1",
                        result.ratio
                    ),
                    wcag: "1.4.3".to_string(),
                    impact: Impact::Serious,
                });
            }
        }

        for child in widget.children() {
            Self::check_widget(child.as_ref(), violations);
        }
    }

    /// Check contrast ratio between foreground and background colors.
    #[must_use]
    pub fn check_contrast(
        foreground: &Color,
        background: &Color,
        large_text: bool,
    ) -> ContrastResult {
        let ratio = foreground.contrast_ratio(background);

        let (aa_threshold, aaa_threshold) = if large_text {
            (MIN_CONTRAST_LARGE, 4.5)
        } else {
            (MIN_CONTRAST_NORMAL, 7.0)
        };

        ContrastResult {
            ratio,
            passes_aa: ratio >= aa_threshold,
            passes_aaa: ratio >= aaa_threshold,
        }
    }
}

/// Accessibility report.
#[derive(Debug)]
pub struct A11yReport {
    /// Violations found
    pub violations: Vec<A11yViolation>,
}

impl A11yReport {
    /// Whether no violation was found.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.violations.is_empty()
    }

    /// Critical violations only.
    #[must_use]
    pub fn critical(&self) -> Vec<&A11yViolation> {
        self.violations
            .iter()
            .filter(|v| v.impact == Impact::Critical)
            .collect()
    }

    /// Whether a violation of `rule` was found.
    #[must_use]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// Assert that no violation was found.
    ///
    /// # Panics
    ///
    /// Panics listing every violation.
    pub fn assert_pass(&self) {
        if !self.is_passing() {
            let messages: Vec<String> = self
                .violations
                .iter()
                .map(|v| format!("  [{:?}] {}: {} (WCAG {})", v.impact, v.rule, v.message, v.wcag))
                .collect();

            panic!(
                "Accessibility check failed with {} violation(s):\n{}",
                self.violations.len(),
                messages.join("\n")
            );
        }
    }
}

/// A single accessibility violation.
#[derive(Debug, Clone)]
pub struct A11yViolation {
    /// Rule that was violated
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// WCAG success criterion
    pub wcag: String,
    /// Impact level
    pub impact: Impact,
}

/// Impact level of an accessibility violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Minor,
    Moderate,
    Serious,
    /// Must fix
    Critical,
}

/// Result of a contrast check.
#[derive(Debug, Clone)]
pub struct ContrastResult {
    /// Calculated contrast ratio
    pub ratio: f32,
    /// Passes WCAG AA
    pub passes_aa: bool,
    /// Passes WCAG AAA
    pub passes_aaa: bool,
}
