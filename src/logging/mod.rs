#[cfg(test)]
mod tests;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::fmt;

use chrono::Local;
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn is_problem(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}

trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, line: &str);
}

/// Info goes to stdout, warnings and errors to stderr.
struct ConsoleSink;
impl LogSink for ConsoleSink {
    fn log(&self, level: LogLevel, line: &str) {
        if level.is_problem() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    const PREFIX: &'static str = "lumina";

    fn open_in(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("{}-{stamp}.log", Self::PREFIX));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn log(&self, level: LogLevel, line: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{timestamp}] {:<5} {line}", level.to_string());
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }
    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// Session logger. Clones share the same sinks, so the session file is
/// created at most once no matter which handle writes first.
#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn LogSink>,
    session: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

struct SessionFile {
    sink: Option<Arc<dyn LogSink>>,
    path: Option<PathBuf>,
    attempted: bool,
    dir: PathBuf,
}

impl SessionFile {
    fn in_dir(dir: PathBuf) -> Self {
        Self {
            sink: None,
            path: None,
            attempted: false,
            dir,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub const DEFAULT_DIR: &'static str = "logs";

    pub fn new() -> Self {
        Self::with_log_dir(Self::DEFAULT_DIR)
    }

    pub fn with_log_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            console: Arc::new(ConsoleSink),
            session: Arc::new(Mutex::new(SessionFile::in_dir(dir.as_ref().to_path_buf()))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    // The file is opened on first use; a failure is reported once and
    // file logging then stays off for the session.
    fn session_sink(&self) -> Option<Arc<dyn LogSink>> {
        let mut session = self.session.lock().ok()?;
        if session.attempted {
            return session.sink.clone();
        }
        session.attempted = true;

        match FileSink::open_in(&session.dir) {
            Ok((sink, path)) => {
                let sink: Arc<dyn LogSink> = Arc::new(sink);
                session.path = Some(path);
                session.sink = Some(sink.clone());
                Some(sink)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            self.console.log(level, message);
        }
        if target.file() && self.file_logging_enabled() {
            if let Some(sink) = self.session_sink() {
                sink.log(level, message);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only takes effect before the session file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut session) = self.session.lock() {
            if !session.attempted {
                session.dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.session.lock().ok().map(|s| s.dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session.lock().ok().and_then(|s| s.path.clone())
    }

    /// Everything written to the session file so far, if one exists.
    pub fn session_contents(&self) -> Option<std::io::Result<String>> {
        self.log_path().map(fs::read_to_string)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
