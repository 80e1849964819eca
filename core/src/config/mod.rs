mod load;
mod types;

pub use load::{
    apply_env_overrides, get_taskgate_data_dir, load_default, load_from_path, API_KEY_ENV,
    HTTP_HOST_ENV, HTTP_PORT_ENV, UPSTREAM_URL_ENV,
};
pub use types::{AppConfig, BudgetConfig, HttpServerConfig, LoggingConfig, UpstreamConfig};
