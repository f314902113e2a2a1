use clap::ValueEnum;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";
pub const MAX_NAME_LENGTH: usize = 32;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_name: Option<String>,
    pub first_player: FirstPlayerMode,
    pub show_cell_numbers: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.player_name {
            validate_player_name(name)?;
        }
        Ok(())
    }
}

pub fn validate_player_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("player_name must not be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "player_name must not exceed {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if name.eq_ignore_ascii_case("computer") {
        return Err("player_name 'Computer' is reserved".to_string());
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: None,
            first_player: FirstPlayerMode::Human,
            show_cell_numbers: true,
        }
    }
}
