use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(
        std::str::from_utf8(&output)
            .context("cargo locate-project printed non utf-8 output")?
            .trim(),
    );

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("workspace manifest has no parent directory"))
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    read_toml(&workspace_dir()?.join(config_name))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    read_toml(&workspace_dir()?.join("Secrets.toml"))
}

pub fn read_toml(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}
