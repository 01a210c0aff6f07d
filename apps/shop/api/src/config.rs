use core_config::{
    AppInfo, ConfigError, Environment, FromEnv, app_info, env_parse_or, server::ServerConfig,
};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Load the demo catalog at startup
    pub seed_database: bool,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            seed_database: env_parse_or("SEED_DATABASE", true)?,
        })
    }
}
