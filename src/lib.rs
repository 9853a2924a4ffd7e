//! Support library for the LTSS forecasting dashboard web UI.
//!
//! Provides the label formatter used to render backend values, the hash-router
//! route table, the UI kit component registry and the dev-server proxy config.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod routes;
pub mod text;

pub use app::WebApp;
pub use error::{Error, Result};
pub use text::{to_title_case, try_to_title_case, EmptyTokens, TitleCase};
