pub mod config;
pub mod models;
pub mod observability;
pub mod services;

pub use self::config::{Config, ConfigError, OutputFormat};
pub use self::observability::{init_observability, ObservabilityError};
pub use self::services::DeliveryService;
