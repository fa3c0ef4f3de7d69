use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base cmdsmith config directory (~/.config/cmdsmith/ on Unix-like systems)
pub fn cmdsmith() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::environment_resolution(
                "config directory",
                "APPDATA environment variable not set on Windows",
                None,
            )
        })?;
        Ok(PathBuf::from(appdata).join("cmdsmith"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::environment_resolution(
                "config directory",
                "HOME environment variable not set on Unix-like system",
                None,
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("cmdsmith"))
    }
}

/// Global cmdsmith.json config file path
pub fn cmdsmith_json() -> Result<PathBuf> {
    Ok(cmdsmith()?.join("cmdsmith.json"))
}
