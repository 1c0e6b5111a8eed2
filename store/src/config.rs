//! Data directory configuration.
//!
//! Precedence:
//! 1. DESPENSA_DATA_DIR environment variable
//! 2. ~/.config/despensa/data (production default)
//! 3. ./data (fallback for development)

use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/despensa/data";
const DEV_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "inventario.db";

/// Get the data directory for persistence.
///
/// Priority:
/// 1. DESPENSA_DATA_DIR env variable if set
/// 2. $HOME/.config/despensa/data if HOME is set
/// 3. ./data as fallback
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DESPENSA_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Default location of the database file inside [`data_dir`].
pub fn database_path() -> PathBuf {
    data_dir().join(DATABASE_FILE)
}
