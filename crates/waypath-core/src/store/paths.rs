//! Store directory layout and discovery

use std::path::{Path, PathBuf};

use crate::error::{Result, WaypathError};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".waypath";

/// Configuration file inside the store
pub const CONFIG_FILE: &str = "config.toml";

/// SQLite database file inside the store
pub const DATABASE_FILE: &str = "waypath.db";

/// Discover a store by walking up from `root` until a `.waypath/` directory is found
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(WaypathError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
