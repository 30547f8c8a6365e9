//! Logger initialisation

use anyhow::Context;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Start `env_logger`; `RUST_LOG` overrides the default level.
///
/// With `log_file`, every line also goes to that file (appended).
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let log_level = if verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    );
    builder.format(|buf, record| {
        writeln!(buf, "{} - {} - {}", buf.timestamp(), record.level(), record.args())
    });

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter::new(io::stderr(), file))));
    }

    builder.try_init().context("Logger was already initialised")?;
    Ok(())
}

/// Writes every buffer to both sinks.
pub struct TeeWriter<A, B> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}
