use config::{Config, ConfigError};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub storage: StorageSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub origin: String,
}

impl ApplicationSettings {
    pub fn get_addr(&self) -> SocketAddr {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .unwrap_or_else(|_| panic!("Failed to parse address: {addr}"))
    }

    fn from_env() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: get_env("PORT").parse::<u16>().expect("Invalid port number"),
            origin: get_env("WEBSITE_URL"),
        }
    }
}

/// Where the two collections are dumped to and read back from.
#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    pub directory: PathBuf,
    pub users_file: String,
    pub messages_file: String,
}

impl StorageSettings {
    pub fn users_path(&self) -> PathBuf {
        self.directory.join(&self.users_file)
    }

    pub fn messages_path(&self) -> PathBuf {
        self.directory.join(&self.messages_file)
    }

    fn from_env() -> Self {
        Self {
            directory: try_get_env("STORAGE_DIR")
                .unwrap_or_else(|| "Saved".into())
                .into(),
            ..Self::default()
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("Saved"),
            users_file: "Users.json".into(),
            messages_file: "Messages.json".into(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct GeneratorSettings {
    /// Fixed seed for reproducible random data, entropy otherwise.
    pub seed: Option<u64>,
}

impl GeneratorSettings {
    fn from_env() -> Self {
        let seed = try_get_env("GENERATOR_SEED")
            .map(|seed| seed.parse::<u64>().expect("Invalid generator seed"));
        if seed.is_some() {
            info!("Using fixed generator seed");
        }
        Self { seed }
    }
}

enum Environment {
    Local,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not supported environment. Use either `local` or `production`"
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_dir = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .map_or(Environment::Local, |env| {
            env.try_into().expect("Failed to parse APP_ENVIRONMENT.")
        });

    match environment {
        Environment::Local => {
            let settings = Config::builder()
                .add_source(config::File::from(config_dir.join("settings.toml")))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__"),
                );
            settings.build()?.try_deserialize()
        }

        Environment::Production => Ok(Settings {
            app: ApplicationSettings::from_env(),
            storage: StorageSettings::from_env(),
            generator: GeneratorSettings::from_env(),
        }),
    }
}

fn try_get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn get_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("Missing {name}"))
}
