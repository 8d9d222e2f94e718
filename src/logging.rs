//! Log output setup.
//!
//! Console lines go to stderr at Info (Debug with `--debug`). An optional log
//! file always receives Debug and above, with timestamps.

use std::io;
use std::path::Path;

use log::{warn, LevelFilter};

/// Options for [`init`].
#[derive(Debug, Clone)]
pub struct LogOptions<'a> {
    pub console_level: LevelFilter,
    pub file_level: LevelFilter,
    pub logfile: Option<&'a Path>,
}

impl<'a> LogOptions<'a> {
    pub fn new(debug: bool, logfile: Option<&'a Path>) -> Self {
        Self {
            console_level: if debug { LevelFilter::Debug } else { LevelFilter::Info },
            file_level: LevelFilter::Debug,
            logfile,
        }
    }
}

fn console_dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{}: {}", record.level(), message)))
        .level(level)
        .chain(io::stderr())
}

fn file_dispatch(level: LevelFilter, path: &Path) -> io::Result<fern::Dispatch> {
    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                env!("CARGO_PKG_NAME"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?))
}

/// Install the global logger.
///
/// A log file that cannot be opened is reported as a warning; console
/// logging is set up regardless.
pub fn init(options: &LogOptions<'_>) -> Result<(), log::SetLoggerError> {
    let mut root = fern::Dispatch::new()
        .level(options.console_level.max(options.file_level))
        .chain(console_dispatch(options.console_level));

    let mut file_error = None;
    if let Some(path) = options.logfile {
        match file_dispatch(options.file_level, path) {
            Ok(dispatch) => root = root.chain(dispatch),
            Err(e) => file_error = Some((path, e)),
        }
    }

    root.apply()?;

    if let Some((path, e)) = file_error {
        warn!("Failed to open logfile {}: {}", path.display(), e);
    }

    Ok(())
}
