use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TableError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Warning-level event (non-fatal or caller-side problem).
    Warning,
    /// The file was read but its structure or header is wrong.
    Error,
    /// The file could not be read at all.
    Critical,
}

impl IngestionSeverity {
    /// Severity assigned to a load failure.
    pub fn for_error(error: &TableError) -> Self {
        match error {
            TableError::Io(_) => Self::Critical,
            TableError::Format { .. }
            | TableError::HeaderMismatch { .. }
            | TableError::TooFewRows { .. } => Self::Error,
            TableError::Csv(_)
            | TableError::Json(_)
            | TableError::InvalidArgument { .. }
            | TableError::NoMatch { .. } => Self::Warning,
        }
    }
}

/// What was being loaded.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Source path, or a label such as `<memory>` for in-memory text.
    pub source: PathBuf,
}

/// Row counts reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// All rows, headers included.
    pub rows: usize,
    /// Rows after the two headers.
    pub data_rows: usize,
}

impl fmt::Display for IngestionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={} data_rows={}", self.rows, self.data_rows)
    }
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called when a table loads and validates.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &TableError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans callbacks out to several observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }

    /// Number of wrapped observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// One load event, rendered the same way by every logging observer.
enum LoadEvent<'a> {
    Loaded(IngestionStats),
    Failed(IngestionSeverity, &'a TableError),
    Alert(IngestionSeverity, &'a TableError),
}

impl LoadEvent<'_> {
    fn line(&self, ctx: &IngestionContext) -> String {
        let source = ctx.source.display();
        match self {
            Self::Loaded(stats) => format!("ok source={source} {stats}"),
            Self::Failed(severity, error) => {
                format!("fail severity={severity:?} source={source} err={error}")
            }
            Self::Alert(severity, error) => {
                format!("ALERT severity={severity:?} source={source} err={error}")
            }
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    fn emit(&self, ctx: &IngestionContext, event: LoadEvent<'_>) {
        eprintln!("[load] {}", event.line(ctx));
    }
}

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.emit(ctx, LoadEvent::Loaded(stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        self.emit(ctx, LoadEvent::Failed(severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        self.emit(ctx, LoadEvent::Alert(severity, error));
    }
}

/// Appends timestamped load events to a log file.
///
/// Writes are best-effort; a log file that cannot be opened or written is skipped silently.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn emit(&self, ctx: &IngestionContext, event: LoadEvent<'_>) {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{secs} {}", event.line(ctx));
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.emit(ctx, LoadEvent::Loaded(stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        self.emit(ctx, LoadEvent::Failed(severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TableError) {
        self.emit(ctx, LoadEvent::Alert(severity, error));
    }
}
