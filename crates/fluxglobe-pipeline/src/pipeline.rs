//! Debounced filtering pipeline.
//!
//! Owns the full dataset and the current [`FilterConfig`], and publishes a
//! filtered view. Filter and instant changes within one debounce window
//! coalesce into a single recomputation using only the latest value; the
//! initial `load` recomputes immediately.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use fluxglobe_core::{AssetFlow, AssetSignal, FilterConfig, InstantRange, UtcDateTime};

pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(120);

/// Published filtered view. Dataset order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    pub signals: Vec<AssetSignal>,
    pub flows: Vec<AssetFlow>,
}

type ViewCallback = Box<dyn Fn(&FilteredView) + Send + Sync>;

struct PipelineInner {
    all_signals: Vec<AssetSignal>,
    all_flows: Vec<AssetFlow>,
    current_filter: FilterConfig,
    view: FilteredView,
    callbacks: Vec<ViewCallback>,
    recompute_count: u64,
}

impl PipelineInner {
    fn recompute(&mut self) {
        self.view.signals = self
            .all_signals
            .iter()
            .filter(|signal| self.current_filter.matches_signal(signal))
            .cloned()
            .collect();
        self.view.flows = self
            .all_flows
            .iter()
            .filter(|flow| self.current_filter.matches_flow(flow))
            .cloned()
            .collect();
        self.recompute_count += 1;

        for callback in &self.callbacks {
            callback(&self.view);
        }
    }
}

/// Cheap cloneable handle over the shared pipeline state. All mutating
/// calls are expected to come from one logical task; clones exist so
/// observers and drivers can hold the same pipeline.
#[derive(Clone)]
pub struct SignalPipeline {
    inner: Arc<RwLock<PipelineInner>>,
    generation: Arc<AtomicU64>,
    debounce: Duration,
}

impl Default for SignalPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPipeline {
    pub fn new() -> Self {
        Self::with_debounce(DEBOUNCE_WINDOW)
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PipelineInner {
                all_signals: Vec::new(),
                all_flows: Vec::new(),
                current_filter: FilterConfig::default(),
                view: FilteredView::default(),
                callbacks: Vec::new(),
                recompute_count: 0,
            })),
            generation: Arc::new(AtomicU64::new(0)),
            debounce,
        }
    }

    /// Replaces the dataset wholesale and recomputes the view immediately,
    /// bypassing the debounce. A failed upstream load never reaches this
    /// point, so the previous dataset and view stay intact on failure.
    pub async fn load(&self, signals: Vec<AssetSignal>, flows: Vec<AssetFlow>) {
        let mut inner = self.inner.write().await;
        inner.all_signals = signals;
        inner.all_flows = flows;
        inner.recompute();
    }

    /// Replaces the current filter and schedules a debounced recompute.
    /// Returns as soon as the new filter is stored; the recompute runs
    /// after the debounce window unless a later change supersedes it.
    pub async fn apply_filter(&self, filter: FilterConfig) {
        {
            let mut inner = self.inner.write().await;
            inner.current_filter = filter;
        }
        self.schedule_recompute();
    }

    /// Narrows the date window to the single given instant, the timeline's
    /// way of showing "the world as of now". Debounced like `apply_filter`.
    pub async fn set_instant(&self, instant: UtcDateTime) {
        {
            let mut inner = self.inner.write().await;
            inner.current_filter.date_window = InstantRange::point(instant);
        }
        self.schedule_recompute();
    }

    /// Sets the point window and recomputes in one step, no debounce.
    /// For driver-style callers (playback loops) that pace their own
    /// updates and would otherwise schedule a debounce they immediately
    /// supersede.
    pub async fn set_instant_now(&self, instant: UtcDateTime) {
        let mut inner = self.inner.write().await;
        inner.current_filter.date_window = InstantRange::point(instant);
        inner.recompute();
    }

    /// Runs the recompute synchronously, outside any debounce window.
    pub async fn recompute_now(&self) {
        self.inner.write().await.recompute();
    }

    pub async fn current_view(&self) -> FilteredView {
        self.inner.read().await.view.clone()
    }

    pub async fn current_filter(&self) -> FilterConfig {
        self.inner.read().await.current_filter.clone()
    }

    /// Number of recomputations performed so far; observable so tests can
    /// assert debounce coalescing.
    pub async fn recompute_count(&self) -> u64 {
        self.inner.read().await.recompute_count
    }

    /// Registers an observer invoked with the fresh view after every
    /// recomputation.
    pub async fn on_view_changed(
        &self,
        callback: impl Fn(&FilteredView) + Send + Sync + 'static,
    ) {
        self.inner.write().await.callbacks.push(Box::new(callback));
    }

    fn schedule_recompute(&self) {
        // Latest-wins: each schedule bumps the generation, and the sleeper
        // only recomputes if no later change arrived while it slept.
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let inner = Arc::clone(&self.inner);
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if generation.load(Ordering::SeqCst) == scheduled {
                inner.write().await.recompute();
            }
        });
    }
}
