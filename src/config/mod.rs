//! Configuration file handling for verforte
//!
//! Settings come from, highest precedence first: CLI flags (and their
//! `VERFORTE_*` environment variables), a `verforte.yaml` file, then the
//! built-in defaults. The file is the first one found of:
//!
//! 1. the explicit `--config` path (must exist)
//! 2. `<root>/verforte.yaml`
//! 3. `<user config dir>/verforte/verforte.yaml`
//!
//! When the root is not given on the command line and the file found in
//! step 1 or 3 sets `root`, that root's own `verforte.yaml` replaces it. The
//! `root` value is kept unless the root file sets one itself.

pub mod matrix;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use matrix::MatrixConfig;

use crate::error::{self, MatrixError, Result};

/// Config file name looked up in the matrix root and user config dir
pub const CONFIG_FILE_NAME: &str = "verforte.yaml";

/// Load configuration following the documented lookup order.
///
/// `cli_root` is only used to locate `<root>/verforte.yaml`; the caller still
/// resolves the final root with [`MatrixConfig::resolve_root`].
pub fn load(explicit: Option<&Path>, cli_root: Option<&Path>) -> Result<MatrixConfig> {
    let user_dir = dirs::config_dir().map(|dir| dir.join("verforte"));
    load_from(explicit, cli_root, user_dir.as_deref())
}

fn load_from(
    explicit: Option<&Path>,
    cli_root: Option<&Path>,
    user_dir: Option<&Path>,
) -> Result<MatrixConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(error::config::not_found(path.display().to_string()));
        }
        return follow_root(load_file(path)?, cli_root);
    }

    let root = cli_root.map_or_else(|| PathBuf::from(matrix::DEFAULT_ROOT), Path::to_path_buf);
    let root_file = root.join(CONFIG_FILE_NAME);
    if root_file.is_file() {
        return load_file(&root_file);
    }

    if let Some(user_file) = user_dir.map(|dir| dir.join(CONFIG_FILE_NAME)) {
        if user_file.is_file() {
            return follow_root(load_file(&user_file)?, cli_root);
        }
    }

    debug!("no {CONFIG_FILE_NAME} found, using defaults");
    Ok(MatrixConfig::default())
}

/// Switch to `<root>/verforte.yaml` when `config` names a root that has one.
fn follow_root(config: MatrixConfig, cli_root: Option<&Path>) -> Result<MatrixConfig> {
    if cli_root.is_some() {
        return Ok(config);
    }
    let Some(root) = config.root.clone() else {
        return Ok(config);
    };
    let root_file = root.join(CONFIG_FILE_NAME);
    if !root_file.is_file() {
        return Ok(config);
    }

    debug!(path = %root_file.display(), "configured root has its own configuration");
    let mut root_config = load_file(&root_file)?;
    if root_config.root.is_none() {
        root_config.root = Some(root);
    }
    Ok(root_config)
}

/// Read and parse one configuration file
pub fn load_file(path: &Path) -> Result<MatrixConfig> {
    debug!(path = %path.display(), "loading configuration");
    let content = std::fs::read_to_string(path)
        .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

    MatrixConfig::from_yaml(&content).map_err(|e| match e {
        MatrixError::ConfigParseFailed { reason, .. } => {
            error::config::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}
