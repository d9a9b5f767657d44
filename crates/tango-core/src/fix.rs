use std::fmt;

use tango_types::VocabEntry;

/// Samples kept per report for the console summary
pub const MAX_SAMPLES: usize = 5;

/// A transformation over the rows of one vocabulary file
pub trait Fix {
    /// Short name shown in summaries
    fn name(&self) -> &str;

    /// Rewrite rows in place and describe what changed
    fn apply(&self, entries: &mut Vec<VocabEntry>) -> FixReport;
}

/// Outcome of applying one fix to one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    pub fix: String,
    /// Rows rewritten, filled or removed
    pub changed: usize,
    /// Rows the fix looked at but could not handle
    pub skipped: usize,
    pub samples: Vec<String>,
}

impl FixReport {
    pub fn new(fix: &str) -> Self {
        Self {
            fix: fix.to_string(),
            ..Default::default()
        }
    }

    /// Record an example change; only the first few are kept
    pub fn sample(&mut self, text: String) {
        if self.samples.len() < MAX_SAMPLES {
            self.samples.push(text);
        }
    }

    pub fn is_noop(&self) -> bool {
        self.changed == 0
    }
}

impl fmt::Display for FixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} changed", self.fix, self.changed)?;
        if self.skipped > 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        for sample in &self.samples {
            write!(f, "\n    {sample}")?;
        }
        Ok(())
    }
}

/// Apply fixes in order, one report each
pub fn run_fixes(entries: &mut Vec<VocabEntry>, fixes: &[&dyn Fix]) -> Vec<FixReport> {
    fixes
        .iter()
        .map(|fix| {
            let report = fix.apply(entries);
            tracing::debug!("{report}");
            report
        })
        .collect()
}
