pub mod archive_fetch;
pub mod config;
pub mod error;
pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod reference;
pub mod schema;
pub mod stat_bar;
pub mod state;
