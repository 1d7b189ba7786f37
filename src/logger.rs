use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
}

impl From<io::Error> for LoggerError {
    fn from(err: io::Error) -> LoggerError {
        LoggerError::Io(err)
    }
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

struct FileLogger {
    handle: Mutex<File>,
}

impl FileLogger {
    pub fn new(path: &str) -> Result<FileLogger, io::Error> {
        let file = File::create(path)?;

        Ok(FileLogger {
            handle: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut handle) = self.handle.lock() {
                let _ = writeln!(handle, "{} - {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut handle) = self.handle.lock() {
            let _ = handle.flush();
        }
    }
}

/// Installs the console or file logger. A process already carrying a logger
/// keeps it; repeat calls (config reloads, tests) are not an error.
pub fn init_logger(level: LevelFilter, log_path: Option<String>) -> Result<(), LoggerError> {
    let logger: Box<dyn Log> = match log_path {
        Some(ref path) => Box::new(FileLogger::new(path)?),
        None => Box::new(ConsoleLogger),
    };

    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}
