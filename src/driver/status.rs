use std::sync::mpsc::Sender;

use tracing::info;

/// One-way channel for human-readable state strings ("ready",
/// "surface 1080x1920", ...), purely observational
pub trait StatusSink: Send {
    fn push(&self, message: &str);
}

/// Status sink that logs through `tracing`
pub struct LogSink;

impl StatusSink for LogSink {
    fn push(&self, message: &str) {
        info!(target: "status", "{message}");
    }
}

/// Status sink that forwards messages over an mpsc channel
///
/// Send failures (receiver gone) are ignored; status updates are
/// fire-and-forget.
pub struct ChannelSink {
    tx: Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelSink {
    fn push(&self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}

/// Status sink that drops everything
pub struct NullSink;

impl StatusSink for NullSink {
    fn push(&self, _message: &str) {}
}

/// Upstream permission check consulted before the render loop may start
///
/// The surrounding application must have obtained camera-use permission
/// before rendering; the platform flow itself stays outside this crate, this
/// trait is its seam.
pub trait PermissionGate: Send {
    fn granted(&self) -> bool;
}

/// Gate for environments without a permission system
pub struct AlwaysGranted;

impl PermissionGate for AlwaysGranted {
    fn granted(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_channel_sink_forwards_messages() {
        let (tx, rx) = mpsc::channel();
        let sink = ChannelSink::new(tx);

        sink.push("ready");
        assert_eq!(rx.recv().unwrap(), "ready");
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let sink = ChannelSink::new(tx);
        sink.push("nobody is listening");
    }
}
