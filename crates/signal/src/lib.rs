//! The shared "latest value" cell between a signal source and the chart.
//!
//! The cell is single-writer (the source task) and single-reader (the chart
//! driver, which only ever reads the current value on a tick).  It is built
//! on a `tokio::sync::watch` channel: the writer half stays with whoever
//! owns the signal, the reader half is handed to the widget.

pub mod demo;

pub use demo::spawn_generator;

use tokio::sync::watch;

/// Create a latest-value cell.  `initial` is `None` until a first real
/// reading arrives.
pub fn latest_value(initial: Option<f64>) -> (SignalWriter, SignalReader) {
    let (tx, rx) = watch::channel(initial);
    (SignalWriter { tx }, SignalReader { rx })
}

/// Writing half of the cell, owned by the signal source.
#[derive(Debug)]
pub struct SignalWriter {
    tx: watch::Sender<Option<f64>>,
}

impl SignalWriter {
    /// Publish a new reading.  Returns `false` once every reader has been
    /// dropped, which is the source's cue to stop.
    pub fn set(&self, value: f64) -> bool {
        self.tx.send(Some(value)).is_ok()
    }
}

/// Reading half of the cell, handed to the chart driver.
#[derive(Debug, Clone)]
pub struct SignalReader {
    rx: watch::Receiver<Option<f64>>,
}

impl SignalReader {
    /// The most recent reading, or `None` before the first one.
    pub fn latest(&self) -> Option<f64> {
        *self.rx.borrow()
    }
}
