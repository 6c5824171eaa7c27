use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Directory holding the five JSON mapping tables.
    pub mapping_dir: String,
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, Error> {
    let contents = fs::read_to_string(file_path).map_err(|source| Error::ConfigRead {
        path: PathBuf::from(file_path),
        source,
    })?;
    let config: Config = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
        path: PathBuf::from(file_path),
        source,
    })?;

    let dir = PathBuf::from(&config.mapping_dir);
    if !dir.is_dir() {
        return Err(Error::MissingMappingDir(dir));
    }
    Ok(config)
}
