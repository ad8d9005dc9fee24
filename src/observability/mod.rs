//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! logging.rs → tracing subscriber (fmt layer, env filter)
//! metrics.rs → Prometheus recorder (installed once at startup)
//!     → rendered by the /metrics route
//! ```
//!
//! # Design Decisions
//! - Counters are described at initialization and only incremented on the
//!   request path
//! - Telemetry failure is logged and swallowed; it never fails a request

pub mod logging;
pub mod metrics;
