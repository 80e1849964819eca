pub mod api;
pub mod budget;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod prompt;
pub mod task;
