//! Logging listener for event observation.

use std::fmt::Debug;
use tandem_core::{BoxError, Callback};

/// A listener that logs every payload it receives.
///
/// It uses `tracing` when the `tracing` feature is enabled and does
/// nothing otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use tandem::listeners::LoggingListener;
///
/// ee.before().on("request", LoggingListener::named("http"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingListener {
    name: &'static str,
}

impl LoggingListener {
    /// Create a new `LoggingListener` with a default name.
    pub fn new() -> Self {
        Self { name: "event" }
    }

    /// Create a new `LoggingListener` with a custom name.
    ///
    /// The name is used in log messages to identify the subscriber.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Debug> Callback<A> for LoggingListener {
    fn call(&self, payload: &A) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(name = %self.name, ?payload, "event received");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, payload);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestEvent {
        _data: String,
    }

    #[test]
    fn test_logging_listener_succeeds() {
        let listener = LoggingListener::new();
        let event = TestEvent {
            _data: "test".into(),
        };
        assert!(listener.call(&event).is_ok());
    }

    #[test]
    fn test_logging_listener_named() {
        let listener = LoggingListener::named("audit");
        assert_eq!(listener.name(), "audit");
        assert!(Callback::<u32>::call(&listener, &7).is_ok());
    }
}
