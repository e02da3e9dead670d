//! Issues found while evaluating geometry.
//!
//! Geometry queries do not fail. Problems they run into are described by a
//! [`Diagnostic`], collected in an [`IssueSet`] returned alongside the result,
//! and logged through `tracing`.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// An issue to report to users.
pub trait Diagnostic: Debug + Display {
    /// A hint on how to resolve the issue.
    fn help(&self) -> Option<Box<dyn Display>> {
        None
    }

    /// How serious the issue is. Defaults to [`Severity::Warning`].
    fn severity(&self) -> Severity {
        Severity::default()
    }
}

/// How serious an issue is.
#[derive(
    Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational only.
    Info,
    /// The result was produced, but may not be what the user wanted.
    #[default]
    Warning,
    /// The result is unusable.
    Error,
}

impl Severity {
    const COUNT: usize = 3;

    /// The `tracing` level issues of this severity are logged at.
    #[inline]
    pub const fn as_tracing_level(&self) -> tracing::Level {
        match *self {
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }

    /// Whether this is [`Severity::Error`].
    #[inline]
    pub fn is_error(&self) -> bool {
        *self == Self::Error
    }

    const fn name(&self) -> &'static str {
        match *self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Issues collected during one query, in the order they were found.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueSet<T> {
    issues: Vec<T>,
    counts: [usize; Severity::COUNT],
}

impl<T> IssueSet<T> {
    /// Creates an empty issue set.
    #[inline]
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            counts: [0; Severity::COUNT],
        }
    }

    /// Iterates over the issues in the order they were found.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.issues.iter()
    }

    /// The number of issues.
    #[inline]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether no issues were found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The number of issues of the given severity.
    #[inline]
    pub fn count(&self, severity: Severity) -> usize {
        self.counts[severity as usize]
    }

    /// Whether any issue is an error.
    pub fn has_error(&self) -> bool {
        self.num_errors() > 0
    }

    /// The number of errors.
    pub fn num_errors(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Whether any issue is a warning.
    pub fn has_warning(&self) -> bool {
        self.num_warnings() > 0
    }

    /// The number of warnings.
    pub fn num_warnings(&self) -> usize {
        self.count(Severity::Warning)
    }
}

impl<T: Diagnostic> IssueSet<T> {
    /// Records an issue without logging it.
    pub fn add(&mut self, issue: T) {
        self.counts[issue.severity() as usize] += 1;
        self.issues.push(issue);
    }

    /// Logs an issue at its severity and records it.
    pub fn emit(&mut self, issue: T) {
        emit(&issue);
        self.add(issue);
    }
}

/// Logs an issue, and its help message if any, through `tracing`.
pub fn emit<T: Diagnostic + ?Sized>(issue: &T) {
    let help = issue.help().map(|h| h.to_string());
    let help = help.as_deref();
    match issue.severity() {
        Severity::Info => tracing::info!(help, "{issue}"),
        Severity::Warning => tracing::warn!(help, "{issue}"),
        Severity::Error => tracing::error!(help, "{issue}"),
    }
}

impl<T> IntoIterator for IssueSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<T> Default for IssueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for IssueSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for issue in self.issues.iter() {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}
