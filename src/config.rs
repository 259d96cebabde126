use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignConfig {
    pub add_reviewers: bool,
    pub add_assignees: bool,
    pub reviewers: Vec<String>,
    pub assignees: Vec<String>,
    pub number_of_reviewers: i64,
    pub number_of_assignees: i64,
    pub skip_keywords: Vec<String>,
    pub use_review_groups: bool,
    pub use_assignee_groups: bool,
    pub use_freedom_teams: bool,
    pub skip_users: Vec<String>,
    pub review_groups: BTreeMap<String, Vec<String>>,
    pub assignee_groups: BTreeMap<String, Vec<String>>,
    pub freedom_teams: BTreeMap<String, Vec<String>>,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            add_reviewers: true,
            add_assignees: false,
            reviewers: Vec::new(),
            assignees: Vec::new(),
            number_of_reviewers: 0,
            number_of_assignees: 0,
            skip_keywords: Vec::new(),
            use_review_groups: false,
            use_assignee_groups: false,
            use_freedom_teams: false,
            skip_users: Vec::new(),
            review_groups: BTreeMap::new(),
            assignee_groups: BTreeMap::new(),
            freedom_teams: BTreeMap::new(),
        }
    }
}

impl AssignConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AssignConfig::default()
            }
        } else {
            AssignConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(count) = env::var("NUMBER_OF_REVIEWERS") {
            if let Ok(value) = count.parse::<i64>() {
                self.number_of_reviewers = value;
            }
        }
        if let Ok(count) = env::var("NUMBER_OF_ASSIGNEES") {
            if let Ok(value) = count.parse::<i64>() {
                self.number_of_assignees = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ASSIGN_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/assign.toml")))
}
