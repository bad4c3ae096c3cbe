//! # Database module — PostgreSQL connection pool
//!
//! Shared connection pool for every server function in this crate, gated
//! behind `feature = "server"` so client (WASM) builds never pull in SQLx or
//! Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton behind a
//! [`tokio::sync::OnceCell`]: the first call to [`pool`] reads `DATABASE_URL`
//! from the environment (via `dotenvy`) and opens the pool; every later call
//! gets the cached `&'static PgPool`.

#[cfg(feature = "server")]
mod postgres;

#[cfg(feature = "server")]
pub use postgres::pool;
