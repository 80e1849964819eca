//! taskgate CLI library: commands and the HTTP server, exposed for tests.

pub mod commands;
pub mod http;
