//! Bounded-concurrency detection fan-out.

use crate::aggregate::{AggregatedReport, ResultAggregator, ScanProgress};
use crate::probe::{default_registry, Registry};
use crate::{LanguageReport, ScanOptions};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

/// Runs every registered probe and aggregates their reports.
///
/// # Concurrency
///
/// Each probe is spawned as its own tokio task, but must first acquire a
/// permit from a semaphore of capacity `max_concurrency`; at most that many
/// probes are doing work at any instant. Reports travel back over a channel
/// sized to the registry, so producers never block on a slow consumer.
///
/// # Failure handling
///
/// Probes absorb their own errors. A probe that panics is replaced by its
/// [`fallback`](crate::Probe::fallback) report, so the aggregate always has
/// exactly one entry per probe.
///
/// # Example
///
/// ```rust,no_run
/// use toolchain_scout::{default_registry, Dispatcher, ScanOptions};
///
/// #[tokio::main]
/// async fn main() {
///     let dispatcher = Dispatcher::new(default_registry(), ScanOptions::default());
///     let reports = dispatcher
///         .detect_all_with_progress(|p| eprintln!("[{}/{}] {}", p.completed, p.total, p.language))
///         .await;
///
///     for report in reports.installed() {
///         println!("{}: {}", report.name, report.version);
///     }
/// }
/// ```
pub struct Dispatcher {
    registry: Registry,
    options: ScanOptions,
}

impl Dispatcher {
    pub fn new(registry: Registry, options: ScanOptions) -> Self {
        Self { registry, options }
    }

    /// Number of registered probes.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Run all probes and wait for every report.
    pub async fn detect_all(&self) -> AggregatedReport {
        self.collect(ResultAggregator::new(self.registry.len())).await
    }

    /// Like [`detect_all`](Self::detect_all), invoking `callback` as each
    /// report arrives.
    pub async fn detect_all_with_progress<F>(&self, callback: F) -> AggregatedReport
    where
        F: FnMut(ScanProgress<'_>) + Send,
    {
        let aggregator = ResultAggregator::new(self.registry.len()).with_progress(callback);
        self.collect(aggregator).await
    }

    async fn collect(&self, aggregator: ResultAggregator<'_>) -> AggregatedReport {
        let total = self.registry.len();
        let runner = self.options.runner();
        let permits = Arc::new(Semaphore::new(self.options.concurrency()));
        let (tx, rx) = mpsc::channel::<LanguageReport>(total.max(1));

        tracing::info!(
            probes = total,
            max_concurrency = self.options.concurrency(),
            timeout = ?self.options.command_timeout,
            "starting scan"
        );

        for probe in &self.registry {
            let probe = Arc::clone(probe);
            let permits = Arc::clone(&permits);
            let tx = tx.clone();

            tokio::spawn(async move {
                // The semaphore is never closed
                let Ok(_permit) = permits.acquire_owned().await else {
                    return;
                };
                tracing::debug!(probe = probe.name(), "probe started");

                // `detect` itself is called inside the guard so a panic before
                // the future exists is caught too
                let detection = AssertUnwindSafe(async { probe.detect(&runner).await });
                let report = match detection.catch_unwind().await {
                    Ok(report) => report,
                    Err(_) => {
                        tracing::warn!(probe = probe.name(), "probe panicked, using fallback report");
                        std::panic::catch_unwind(AssertUnwindSafe(|| probe.fallback()))
                            .unwrap_or_else(|_| LanguageReport::not_installed(probe.name()))
                    }
                };

                tracing::debug!(probe = probe.name(), installed = report.installed, "probe finished");
                // Receiver only goes away if the scan itself was dropped
                let _ = tx.send(report).await;
            });
        }

        // The channel closes once every task has dropped its sender
        drop(tx);

        let aggregate = aggregator.collect(rx).await;
        tracing::info!(
            reports = aggregate.len(),
            installed = aggregate.installed().count(),
            "scan complete"
        );
        aggregate
    }
}

/// Detect every catalog toolchain with default options.
///
/// # Example
///
/// ```rust,no_run
/// use toolchain_scout::detect_all;
///
/// #[tokio::main]
/// async fn main() {
///     let reports = detect_all().await;
///     for report in &reports {
///         println!("{}: installed={}", report.name, report.installed);
///     }
/// }
/// ```
pub async fn detect_all() -> AggregatedReport {
    detect_all_with_options(ScanOptions::default()).await
}

/// Detect every catalog toolchain with custom options.
pub async fn detect_all_with_options(options: ScanOptions) -> AggregatedReport {
    Dispatcher::new(default_registry(), options).detect_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandRunner, Probe};
    use futures::future::BoxFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// Immediately returns an installed report.
    struct Quick;

    impl Probe for Quick {
        fn name(&self) -> &str {
            "Quick"
        }

        fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
            async move {
                LanguageReport {
                    installed: true,
                    version: "1.0.0".to_string(),
                    ..LanguageReport::not_installed("Quick")
                }
            }
            .boxed()
        }
    }

    struct Panicking;

    impl Probe for Panicking {
        fn name(&self) -> &str {
            "Panicking"
        }

        fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
            async move {
                let parsed: Option<LanguageReport> = None;
                parsed.expect("probe bug")
            }
            .boxed()
        }
    }

    /// Panics while building its future, before any await point.
    struct PanicsOnCall;

    impl Probe for PanicsOnCall {
        fn name(&self) -> &str {
            "PanicsOnCall"
        }

        fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
            let bad: Option<BoxFuture<'a, LanguageReport>> = None;
            bad.expect("detect called on a broken probe")
        }

        fn fallback(&self) -> LanguageReport {
            LanguageReport {
                download_url: "https://example.invalid".to_string(),
                ..LanguageReport::not_installed("PanicsOnCall")
            }
        }
    }

    /// Runs a command that outlives the runner's deadline.
    struct Hanging;

    impl Probe for Hanging {
        fn name(&self) -> &str {
            "Hanging"
        }

        fn detect<'a>(&'a self, runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
            async move {
                match runner.run("sleep", &["5"]).await {
                    Ok(version) => LanguageReport {
                        installed: true,
                        version,
                        ..LanguageReport::not_installed("Hanging")
                    },
                    Err(_) => LanguageReport::not_installed("Hanging"),
                }
            }
            .boxed()
        }
    }

    /// Records how many instances run at once.
    struct Counting {
        name: String,
        active: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
    }

    impl Probe for Counting {
        fn name(&self) -> &str {
            &self.name
        }

        fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
            async move {
                let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                self.active.fetch_sub(1, Ordering::SeqCst);
                LanguageReport::not_installed(self.name.clone())
            }
            .boxed()
        }
    }

    /// Blocks until the shared gate hands out a permit.
    struct Gated {
        name: String,
        gate: Arc<Semaphore>,
        entered: Arc<AtomicUsize>,
    }

    impl Probe for Gated {
        fn name(&self) -> &str {
            &self.name
        }

        fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
            async move {
                self.entered.fetch_add(1, Ordering::SeqCst);
                if let Ok(permit) = self.gate.acquire().await {
                    permit.forget();
                }
                LanguageReport::not_installed(self.name.clone())
            }
            .boxed()
        }
    }

    fn options(max_concurrency: usize) -> ScanOptions {
        ScanOptions {
            max_concurrency,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_one_report_per_probe_despite_failures() {
        let registry: Registry = vec![
            Arc::new(Quick),
            Arc::new(Panicking),
            Arc::new(Quick),
            Arc::new(Panicking),
        ];
        let aggregate = Dispatcher::new(registry, options(2)).detect_all().await;

        assert_eq!(aggregate.len(), 4);
        assert_eq!(aggregate.installed().count(), 2);
        let fallbacks: Vec<_> = aggregate.iter().filter(|r| r.name == "Panicking").collect();
        assert_eq!(fallbacks.len(), 2);
        assert!(fallbacks.iter().all(|r| !r.installed));
    }

    #[tokio::test]
    async fn test_panic_before_future_is_built_yields_fallback() {
        let registry: Registry = vec![Arc::new(PanicsOnCall), Arc::new(PanicsOnCall), Arc::new(Quick)];
        let aggregate = Dispatcher::new(registry, options(2)).detect_all().await;

        assert_eq!(aggregate.len(), 3);
        let fallbacks: Vec<_> = aggregate.iter().filter(|r| r.name == "PanicsOnCall").collect();
        assert_eq!(fallbacks.len(), 2);
        assert!(fallbacks.iter().all(|r| !r.installed));
        assert!(fallbacks.iter().all(|r| r.download_url == "https://example.invalid"));
        assert!(aggregate.get("Quick").unwrap().installed);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrency_is_bounded() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let registry: Registry = (0..20)
            .map(|i| {
                Arc::new(Counting {
                    name: format!("probe-{i}"),
                    active: Arc::clone(&active),
                    peak: Arc::clone(&peak),
                }) as Arc<dyn Probe>
            })
            .collect();

        let aggregate = Dispatcher::new(registry, options(3)).detect_all().await;

        assert_eq!(aggregate.len(), 20);
        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert!(peak.load(Ordering::SeqCst) >= 1);
        assert_eq!(active.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_gated_probes_never_exceed_cap() {
        let gate = Arc::new(Semaphore::new(0));
        let entered = Arc::new(AtomicUsize::new(0));
        let registry: Registry = (0..5)
            .map(|i| {
                Arc::new(Gated {
                    name: format!("gated-{i}"),
                    gate: Arc::clone(&gate),
                    entered: Arc::clone(&entered),
                }) as Arc<dyn Probe>
            })
            .collect();

        let dispatcher = Dispatcher::new(registry, options(2));
        let scan = tokio::spawn(async move { dispatcher.detect_all().await });

        // Let the first wave reach the gate
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(entered.load(Ordering::SeqCst), 2);

        // Release one probe at a time; admission never goes past two
        for released in 1..=5 {
            gate.add_permits(1);
            tokio::time::sleep(Duration::from_millis(50)).await;
            let inside = entered.load(Ordering::SeqCst);
            assert!(inside <= (released + 2).min(5), "{inside} probes admitted after {released} releases");
        }

        let aggregate = scan.await.unwrap();
        assert_eq!(aggregate.len(), 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_trivial_probes_do_not_deadlock() {
        let registry: Registry = (0..1000).map(|_| Arc::new(Quick) as Arc<dyn Probe>).collect();
        let aggregate = tokio::time::timeout(
            Duration::from_secs(30),
            Dispatcher::new(registry, ScanOptions::default()).detect_all(),
        )
        .await
        .expect("dispatcher deadlocked");
        assert_eq!(aggregate.len(), 1000);
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_completes() {
        let registry: Registry = vec![Arc::new(Quick), Arc::new(Quick)];
        let aggregate = Dispatcher::new(registry, options(0)).detect_all().await;
        assert_eq!(aggregate.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let aggregate = Dispatcher::new(Vec::new(), ScanOptions::default()).detect_all().await;
        assert!(aggregate.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_mixed_probes_finish_within_timeout() {
        let registry: Registry = vec![Arc::new(Quick), Arc::new(Hanging), Arc::new(Panicking)];
        let options = ScanOptions {
            command_timeout: Duration::from_millis(300),
            max_concurrency: 10,
        };

        let start = Instant::now();
        let mut arrivals = Vec::new();
        let aggregate = Dispatcher::new(registry, options)
            .detect_all_with_progress(|p| arrivals.push((p.language.to_string(), start.elapsed())))
            .await;

        assert!(start.elapsed() < Duration::from_secs(3));
        assert_eq!(aggregate.len(), 3);

        // The hung command holds up nobody but its own probe
        let position = |name: &str| arrivals.iter().position(|(n, _)| n == name).unwrap();
        assert_eq!(arrivals.last().unwrap().0, "Hanging");
        assert!(position("Quick") < position("Hanging"));
        assert!(position("Panicking") < position("Hanging"));
        let quick_at = arrivals[position("Quick")].1;
        assert!(quick_at < Duration::from_millis(300), "Quick arrived after {quick_at:?}");
        let hanging_at = arrivals[position("Hanging")].1;
        assert!(hanging_at >= Duration::from_millis(300), "Hanging arrived after {hanging_at:?}");
        assert!(aggregate.get("Quick").unwrap().installed);
        assert!(!aggregate.get("Hanging").unwrap().installed);
        assert!(!aggregate.get("Panicking").unwrap().installed);
    }

    #[tokio::test]
    async fn test_progress_reaches_total() {
        let registry: Registry = vec![Arc::new(Quick), Arc::new(Panicking), Arc::new(Quick)];
        let dispatcher = Dispatcher::new(registry, ScanOptions::default());

        let mut last = (0, 0);
        let aggregate = dispatcher
            .detect_all_with_progress(|p| last = (p.completed, p.total))
            .await;

        assert_eq!(aggregate.len(), 3);
        assert_eq!(last, (3, 3));
    }
}
