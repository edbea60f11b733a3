//! Draining probe results into the final report.

use crate::LanguageReport;
use serde::Serialize;
use tokio::sync::mpsc;

/// Progress notification emitted after each received report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProgress<'a> {
    /// Reports received so far, including this one.
    pub completed: usize,

    /// Number of registered probes.
    pub total: usize,

    /// Name of the language that just finished.
    pub language: &'a str,
}

/// The full collection of reports from one detection pass.
///
/// Holds exactly one report per registered probe. Order is arrival order and
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregatedReport {
    reports: Vec<LanguageReport>,
}

impl AggregatedReport {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageReport> {
        self.reports.iter()
    }

    /// Report for a language, by exact name.
    pub fn get(&self, name: &str) -> Option<&LanguageReport> {
        self.reports.iter().find(|r| r.name == name)
    }

    /// Reports for toolchains that were found.
    pub fn installed(&self) -> impl Iterator<Item = &LanguageReport> {
        self.reports.iter().filter(|r| r.installed)
    }

    /// Sort by language name, for display.
    pub fn sort_by_name(&mut self) {
        self.reports.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }

    pub fn into_vec(self) -> Vec<LanguageReport> {
        self.reports
    }
}

impl IntoIterator for AggregatedReport {
    type Item = LanguageReport;
    type IntoIter = std::vec::IntoIter<LanguageReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregatedReport {
    type Item = &'a LanguageReport;
    type IntoIter = std::slice::Iter<'a, LanguageReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

/// Turns the result channel into an [`AggregatedReport`].
///
/// The aggregator is the single consumer; it finishes when every sender has
/// been dropped, i.e. when every probe task has delivered its report.
pub struct ResultAggregator<'cb> {
    total: usize,
    on_progress: Option<Box<dyn FnMut(ScanProgress<'_>) + Send + 'cb>>,
}

impl<'cb> ResultAggregator<'cb> {
    /// An aggregator expecting `total` reports.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            on_progress: None,
        }
    }

    /// Invoke `callback` after each received report.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ScanProgress<'_>) + Send + 'cb,
    {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Drain `rx` until it closes.
    pub async fn collect(mut self, mut rx: mpsc::Receiver<LanguageReport>) -> AggregatedReport {
        let mut reports = Vec::with_capacity(self.total);

        while let Some(report) = rx.recv().await {
            let completed = reports.len() + 1;
            tracing::trace!(language = %report.name, completed, total = self.total, "report received");

            if let Some(callback) = self.on_progress.as_mut() {
                callback(ScanProgress {
                    completed,
                    total: self.total,
                    language: &report.name,
                });
            }
            reports.push(report);
        }

        if reports.len() != self.total {
            tracing::warn!(
                received = reports.len(),
                expected = self.total,
                "result channel closed early"
            );
        }

        AggregatedReport { reports }
    }
}
