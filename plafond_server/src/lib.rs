//! HTTP frontend for the suspended-ceiling material calculator.
//!
//! The service is stateless: every request is validated, handed to the pure
//! calculation functions in [`plafond_core`], and serialized back out. The
//! grid-system catalog is process-wide immutable configuration, so handlers
//! run concurrently without locks.
//!
//! # Embedding
//!
//! The router can be served standalone or mounted in a larger app:
//!
//! ```no_run
//! use plafond_server::api::create_router;
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router();
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
