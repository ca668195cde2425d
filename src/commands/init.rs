use crate::config::{TidyConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(root: &Path, force: bool) -> Result<PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let contents = format!("# tidyclass configuration\n\n{}", TidyConfig::default_toml());
    io::write_file(&config_path, &contents)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(config_path)
}
