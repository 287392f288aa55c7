pub mod config;
pub mod error;
mod http_layers;
pub mod params;
pub mod server;
mod songs;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub use server::{make_app, run_server};
pub(self) use songs::make_songs_routes;
