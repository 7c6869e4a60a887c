use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::{get_config_path, save_config, Config};

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, hint);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Write the built-in configuration so it can be edited.
///
/// If `path` is None the default config path is used. An existing file is
/// only replaced after confirmation, or unconditionally with `force`.
pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            anyhow::bail!("Aborted: {} left unchanged", config_path.display());
        }
    }

    save_config(&config_path, &Config::default())?;
    Ok(config_path)
}
