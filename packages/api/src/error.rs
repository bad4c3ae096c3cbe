//! Server-side error type for the data-access layer.
//!
//! Server functions convert this into a [`dioxus::prelude::ServerFnError`] at
//! the boundary; nothing here ever crosses to the client as a panic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden")]
    Forbidden,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(String),
}
