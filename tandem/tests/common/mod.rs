#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Test Payload Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Msg {
    pub msg: String,
}

pub fn msg(text: &str) -> Msg {
    Msg {
        msg: text.to_string(),
    }
}

// ============================================================================
// Logging
// ============================================================================

static TRACING: Once = Once::new();

/// Route registry logs to the test harness output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("trace"))
            .with_test_writer()
            .try_init();
    });
}
