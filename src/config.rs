use std::fs::File;
use std::io::prelude::*;

use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use crate::commands::DEFAULT_PREFIX;

#[derive(Debug)]
pub struct Config {
    pub app_config: AppConfig,
    pub config_path: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub commands: CommandsConfig,
    pub twitch: TwitchConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommandsConfig {
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TwitchConfig {
    pub api_base: Option<String>,
    pub app_access_token: Option<String>,
    pub bot_name: String,
    pub channels: Vec<String>,
    pub client_id: String,
    pub user_access_token: Option<String>,
}

impl Config {
    pub fn from_args(args: &ArgMatches<'static>) -> anyhow::Result<Config> {
        let config_path = args.value_of("app-config").unwrap_or("./configs/config.toml").to_string();
        let mut config_file = File::open(config_path.as_str())?;
        let mut config_contents = String::new();

        config_file.read_to_string(&mut config_contents)?;

        Config::from_toml(config_contents.as_str(), config_path)
    }

    pub fn from_toml(contents: &str, config_path: String) -> anyhow::Result<Config> {
        let app_config: AppConfig = toml::from_str(contents)?;

        if app_config.twitch.channels.is_empty() {
            return Err(anyhow::anyhow!("No channels configured in {}", config_path));
        }

        Ok(Config {
            app_config,
            config_path
        })
    }
}
