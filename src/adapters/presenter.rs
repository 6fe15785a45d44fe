use crate::core::{DataPresenter, Record};
use std::io::Write;
use std::sync::Mutex;

/// The two lines every presenter writes, name first.
pub fn display_lines(record: &Record) -> [String; 2] {
    [
        format!("Name ===> {}", record.name),
        format!("Contact ===> {}", record.contact),
    ]
}

/// Writes records through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl DataPresenter for LogPresenter {
    fn display(&self, record: &Record) {
        for line in display_lines(record) {
            tracing::info!("{}", line);
        }
    }
}

/// Writes records to any `Write` sink, one line per field.
pub struct WriterPresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn try_display(&self, record: &Record) -> std::io::Result<()> {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in display_lines(record) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> DataPresenter for WriterPresenter<W> {
    fn display(&self, record: &Record) {
        if let Err(e) = self.try_display(record) {
            tracing::warn!("Failed to write record for {}: {}", record.name, e);
        }
    }
}
