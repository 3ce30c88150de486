use std::path::PathBuf;

use crate::core::persist::JsonFileStore;

/// File locations chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub data_path: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl Default for CliPaths {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            data_path: PathBuf::from(JsonFileStore::DEFAULT_FILE),
            exports_dir: PathBuf::from("exports"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut paths = Self::default();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--config" => &mut paths.config_path,
                "--data" => &mut paths.data_path,
                "--exports" => &mut paths.exports_dir,
                "--logs" => &mut paths.logs_dir,
                _ => return Err(format!("Unknown argument: {arg}")),
            };
            *slot = args
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("Missing value for {arg}"))?;
        }
        Ok(paths)
    }
}
