use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::WizardConfig;

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_DIRECTIVE: &str = "info,incorp_app=debug";

const BARE_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// One line per event: local timestamp, level, `file:line`, fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            let color = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{color}m{:>5}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        let file = meta
            .file()
            .map(|f| f.trim_start_matches("src/").trim_start_matches("src\\"));
        if let (Some(file), Some(line)) = (file, meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// A writer that can be pointed at a file after the subscriber is built.
/// Records are dropped while no file is set.
#[derive(Clone, Default)]
struct FileSlot(Arc<Mutex<Option<File>>>);

impl FileSlot {
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        // A panic mid-write leaves the file usable.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.lock())
    }
}

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

/// Runtime control over the installed subscriber.
pub struct LogHandle {
    reload: ReloadFn,
    file: FileSlot,
}

impl LogHandle {
    /// Replaces the active filter. Accepts a bare level or a full
    /// `EnvFilter` directive.
    pub fn set_level(
        &self,
        level: &str,
    ) -> Result<()> {
        let directive = filter_directive(level);
        let filter = EnvFilter::try_new(&directive)
            .with_context(|| format!("invalid log level '{level}'"))?;
        (self.reload)(filter)
    }

    /// Appends log output to `path`, replacing any open log file.
    pub fn log_to_file(
        &self,
        path: &Path,
    ) -> Result<()> {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file '{}'", path.display()))?;
        *self.file.lock() = Some(file);
        Ok(())
    }

    pub fn close_file(&self) {
        *self.file.lock() = None;
    }
}

/// Normalizes a configured level into an `EnvFilter` directive.
///
/// Bare levels are lowercased; empty input falls back to
/// [`DEFAULT_DIRECTIVE`]; anything else passes through untouched.
pub fn filter_directive(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        return DEFAULT_DIRECTIVE.to_string();
    }
    let lower = level.to_ascii_lowercase();
    if BARE_LEVELS.contains(&lower.as_str()) {
        lower
    } else {
        level.to_string()
    }
}

/// Builds the layered subscriber without installing it.
///
/// The file layer stays silent until [`LogHandle::log_to_file`] is called.
fn build_subscriber(
    filter: EnvFilter,
    log_stdout: bool,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle) {
    let (level_filter, level_handle) = reload::Layer::new(filter);

    let file = FileSlot::default();

    let stdout_layer = log_stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stdout().is_terminal())
            .with_writer(io::stdout)
            .boxed()
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(file.clone());

    let subscriber = tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer);

    let handle = LogHandle {
        reload: Box::new(move |filter| {
            level_handle
                .reload(filter)
                .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
        }),
        file,
    };

    (subscriber, handle)
}

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Stdout output is
/// colored only on a terminal.
pub fn init_logging(config: &WizardConfig) -> Result<LogHandle> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(&config.log_level))
            .with_context(|| format!("invalid log level '{}'", config.log_level))?,
    };

    let (subscriber, handle) = build_subscriber(filter, config.log_stdout);
    subscriber
        .try_init()
        .context("logging already initialized")?;

    if let Some(path) = &config.log_file {
        handle.log_to_file(path)?;
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_levels_are_lowercased() {
        assert_eq!(filter_directive("DEBUG"), "debug");
        assert_eq!(filter_directive(" Warn "), "warn");
    }

    #[test]
    fn empty_level_uses_default_directive() {
        assert_eq!(filter_directive(""), DEFAULT_DIRECTIVE);
        assert_eq!(filter_directive("   "), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(
            filter_directive("warn,incorp_core=trace"),
            "warn,incorp_core=trace"
        );
    }

    #[test]
    fn default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
    }

    #[test]
    fn set_level_rejects_bad_directive_and_accepts_bare_level() {
        let (_subscriber, handle) = build_subscriber(EnvFilter::new("info"), false);

        assert!(handle.set_level("incorp_app=loud").is_err());
        assert!(handle.set_level("TRACE").is_ok());
        assert!(handle.set_level("warn,incorp_core=debug").is_ok());
    }

    #[test]
    fn file_receives_events_only_while_open() {
        let path = std::env::temp_dir().join(format!(
            "incorp-app-logging-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let (subscriber, handle) = build_subscriber(EnvFilter::new("info"), false);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("before open");
            handle.log_to_file(&path).unwrap();
            tracing::info!("while open");
            handle.close_file();
            tracing::info!("after close");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(contents.contains("while open"));
        assert!(!contents.contains("before open"));
        assert!(!contents.contains("after close"));
    }

    #[test]
    fn raised_level_lets_debug_events_through() {
        let path = std::env::temp_dir().join(format!(
            "incorp-app-logging-level-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let (subscriber, handle) = build_subscriber(EnvFilter::new("info"), false);
        handle.log_to_file(&path).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden at info");
            handle.set_level("debug").unwrap();
            tracing::debug!("shown at debug");
        });
        handle.close_file();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(contents.contains("shown at debug"));
        assert!(!contents.contains("hidden at info"));
    }
}
