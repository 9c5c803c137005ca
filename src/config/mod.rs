mod account;
mod mailforest;

pub use account::AccountConfig;
pub use mailforest::Config;
pub use mailforest::ConfigError;
