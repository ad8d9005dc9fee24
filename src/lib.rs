//! In-Memory User Service
//!
//! A small CRUD service over HTTP built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 USER SERVICE                  │
//!                      │                                               │
//!   Client Request     │  ┌──────────┐   ┌────────────┐   ┌────────┐  │
//!   ──────────────────▶│  │  http    │──▶│  users     │──▶│ users  │  │
//!                      │  │  server  │   │  handlers  │   │  repo  │  │
//!   Client Response    │  └──────────┘   └────────────┘   └────────┘  │
//!   ◀──────────────────│                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │           Cross-Cutting Concerns         │ │
//!                      │  │  ┌────────┐ ┌────────────┐ ┌──────────┐ │ │
//!                      │  │  │ config │ │ lifecycle  │ │observa-  │ │ │
//!                      │  │  │        │ │ (shutdown) │ │ bility   │ │ │
//!                      │  │  └────────┘ └────────────┘ └──────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod users;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use users::UserRepository;
