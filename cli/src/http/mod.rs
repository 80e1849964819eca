//! HTTP server: one POST route per task profile, plus health and listing.

pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use models::*;
pub use server::*;
pub use state::*;
