use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::{fs::File, io::Write, path::Path};

/// `LEVEL - message` lines at `level`, written to `sink` or stderr.
fn builder(level: LevelFilter, sink: Option<Box<dyn Write + Send>>) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()));

    if let Some(sink) = sink {
        builder.target(Target::Pipe(sink));
    }
    builder
}

/// Installs the global logger. A log file keeps the interactive view clean.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let sink = match log_file {
        Some(path) => Some(Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?,
        ) as Box<dyn Write + Send>),
        None => None,
    };

    builder(level, sink)
        .try_init()
        .context("Failed to install the logger")
}
