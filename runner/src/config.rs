use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::{Board, SnakeRules};

pub const DEFAULT_CONFIG_FILE: &str = "snake_runner_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board: BoardConfig,
    #[serde(default)]
    pub rules: SnakeRules,
    pub session: SessionConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

/// Display size in points and the size of one grid cell.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl BoardConfig {
    pub fn to_board(&self) -> Result<Board, String> {
        Board::from_display(self.width, self.height, self.cell_size)
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_board().map(|_| ())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    pub tick_interval_ms: u64,
    pub games: u32,
    #[serde(default)]
    pub auto_restart: bool,
    #[serde(default)]
    pub max_ticks_per_game: Option<u64>,
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 10 {
            return Err("tick_interval_ms must be at least 10".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        if self.games == 0 {
            return Err("games must be at least 1".to_string());
        }
        if self.max_ticks_per_game == Some(0) {
            return Err("max_ticks_per_game must be at least 1 when set".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                width: 390,
                height: 844,
                cell_size: 10,
            },
            rules: SnakeRules::default(),
            session: SessionConfig {
                tick_interval_ms: 100,
                games: 1,
                auto_restart: false,
                max_ticks_per_game: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};
    use snake_common::{FoodSpawnMode, HorizontalConvention, SelfCollisionMode};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_runner_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let mut config = Config::default();
        config.rules.self_collision = SelfCollisionMode::Death;
        config.session.max_ticks_per_game = Some(500);

        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        assert_eq!(manager.get_config().unwrap(), config);

        manager.invalidate().unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_rules_are_optional_in_yaml() {
        let content = r#"
            board:
              width: 200
              height: 300
              cell_size: 20
            session:
              tick_interval_ms: 150
              games: 3
        "#;
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.rules, SnakeRules::default());
        assert!(!config.session.auto_restart);
        assert_eq!(config.session.max_ticks_per_game, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rules_parse_from_yaml() {
        let content = r#"
            board: { width: 200, height: 300, cell_size: 20 }
            rules:
              horizontal_convention: Screen
              self_collision: Death
              food_spawn: AvoidSnake
            session: { tick_interval_ms: 150, games: 1 }
        "#;
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.rules.horizontal_convention, HorizontalConvention::Screen);
        assert_eq!(config.rules.self_collision, SelfCollisionMode::Death);
        assert_eq!(config.rules.food_spawn, FoodSpawnMode::AvoidSnake);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            board:
              width: 15
              height: 300
              cell_size: 10
            session:
              tick_interval_ms: 100
              games: 1
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_session_validation() {
        let mut config = Config::default();
        config.session.games = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.session.tick_interval_ms = 5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.session.max_ticks_per_game = Some(0);
        assert!(config.validate().is_err());
    }
}
