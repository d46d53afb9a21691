use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `init` to create one.",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path)?;
                let missing = Config::missing_fields(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Defaults are used for missing fields.");
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {}; run `init` first",
                    path.display()
                )));
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        )),
                        Ok(_) | Err(_) => error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
