//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve bind address → Bind listener → Serve
//!     Bind failure is fatal: surfaced to the process exit path, nothing to drain
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     First SIGINT → request graceful shutdown (single shot)
//! ```
//!
//! # Design Decisions
//! - Shutdown is requested at most once; a repeat interrupt during the drain
//!   is not special-cased
//! - Drain is bounded: requests still in flight at the deadline are abandoned

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::StartupError;
