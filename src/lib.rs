//! Client-side plumbing for a newsletter subscription form.
//!
//! The [`form`] module holds the bound form surface and the controller that
//! mediates one submission at a time; [`subscribe_client`] issues the actual
//! HTTP POST; [`app`] wires everything together from [`config`].

pub mod app;
pub mod config;
pub mod form;
pub mod subscribe_client;

mod error;

// re-export
pub use app::App;
pub use error::{Error, Result};
pub use subscribe_client::SubscribeClient;

use tracing_subscriber::EnvFilter;

/// Tracing setup for development builds: env-filtered, defaults to `debug`.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();
}

/// Tracing setup for production builds: env-filtered, no ANSI colors.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();
}
