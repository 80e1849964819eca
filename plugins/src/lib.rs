pub mod completion;
pub mod factory;
pub mod services;
