pub mod app_config;
pub mod config;
pub mod error;
pub mod field_update;
pub mod locations;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ValidationError};
pub use field_update::{FieldUpdate, FieldUpdateRequest};
pub use locations::{LocationQueryResult, LocationRecord};
