//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout layers, graceful shutdown)
//!     → middleware/content_type.rs (Accept check, response Content-Type)
//!     → users::handlers (resource operations)
//!     → error.rs (failure → status code + message)
//! ```

pub mod error;
pub mod middleware;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
