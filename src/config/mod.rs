use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which side of a pair is shown as the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptSide {
    /// Show English, answer in Zulu.
    Front,
    /// Show Zulu, answer in English.
    Back,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub seed_file: Option<String>,
    #[serde(default = "default_prompt_side")]
    pub prompt_side: PromptSide,
    #[serde(default = "default_export_format")]
    pub export_format: ExportFormat,
}

/// Keys written by `init`; `config --check` reports the ones missing.
pub const CONFIG_KEYS: [&str; 4] = ["database", "seed_file", "prompt_side", "export_format"];

fn default_prompt_side() -> PromptSide {
    PromptSide::Back
}
fn default_export_format() -> ExportFormat {
    ExportFormat::Json
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            seed_file: None,
            prompt_side: default_prompt_side(),
            export_format: default_export_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.zulu-bloom`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".zulu-bloom")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("zulu-bloom.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("zulu-bloom.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        let parsed: AppResult<Config> = fs::read_to_string(path)
            .map_err(AppError::from)
            .and_then(|content| serde_yaml::from_str(&content).map_err(AppError::from));

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Keys of `CONFIG_KEYS` absent from the YAML document in `content`.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
        let missing = CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| yaml.get(*k).is_none())
            .collect();
        Ok(missing)
    }

    /// Expand `~`; relative names are placed inside the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = crate::utils::path::expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_optional_fields() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.seed_file, None);
        assert_eq!(cfg.prompt_side, PromptSide::Back);
        assert_eq!(cfg.export_format, ExportFormat::Json);
    }

    #[test]
    fn parses_all_fields() {
        let yaml = "database: db.sqlite\nseed_file: seed.json\nprompt_side: front\nexport_format: csv\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.seed_file.as_deref(), Some("seed.json"));
        assert_eq!(cfg.prompt_side, PromptSide::Front);
        assert_eq!(cfg.export_format, ExportFormat::Csv);
    }

    #[test]
    fn reports_missing_fields() {
        let missing = Config::missing_fields("database: a\nprompt_side: back\n").unwrap();
        assert_eq!(missing, vec!["seed_file", "export_format"]);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("zulu_bloom_broken.conf");
        fs::write(&path, "database: [unterminated").unwrap();
        let cfg = Config::load_from(&path);
        assert_eq!(cfg.prompt_side, PromptSide::Back);
        fs::remove_file(&path).ok();
    }
}
