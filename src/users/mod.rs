//! User resource subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (parse path/body, translate to repository calls)
//!     → repository.rs (RwLock-guarded map, id issuance)
//!     → handlers.rs (serialize result, pick status code)
//! ```
//!
//! # Design Decisions
//! - The repository handle is injected through axum state, never global
//! - Ids are issued by the repository; caller-supplied ids are ignored
//! - Absence is a signal (`Option`), not an error

pub mod handlers;
pub mod repository;
pub mod types;

pub use repository::UserRepository;
pub use types::User;
