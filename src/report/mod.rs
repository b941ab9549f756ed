//! Operator-facing presentation of a verdict.

use chrono::{DateTime, Local};

use crate::estimator::{RiskLabel, RiskVerdict};

const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// A rendered risk assessment for one patient
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    verdict: RiskVerdict,
    generated_at: DateTime<Local>,
}

impl AssessmentReport {
    /// Stamp a verdict with the assessment time
    #[must_use]
    pub fn new(verdict: RiskVerdict) -> Self {
        Self {
            verdict,
            generated_at: Local::now(),
        }
    }

    /// The underlying verdict
    #[must_use]
    pub fn verdict(&self) -> &RiskVerdict {
        &self.verdict
    }

    /// When the assessment was made
    #[must_use]
    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// One-line summary with the probability as a percentage
    #[must_use]
    pub fn summary_line(&self) -> String {
        let pct = self.verdict.probability() * 100.0;
        match self.verdict.label() {
            RiskLabel::RiskDetected => format!("RISK DETECTED: {pct:.1}%"),
            RiskLabel::Normal => format!("CONDITION NORMAL: {pct:.1}%"),
        }
    }

    /// Summary line wrapped in ANSI color for terminal rendering
    ///
    /// Red for detected risk, green for normal.
    #[must_use]
    pub fn colored_summary_line(&self) -> String {
        let color = match self.verdict.label() {
            RiskLabel::RiskDetected => RED,
            RiskLabel::Normal => GREEN,
        };
        format!("{color}{}{RESET}", self.summary_line())
    }
}
