use crate::prelude::*;
use anyhow::anyhow;
use std::{env::var, path::PathBuf};

/// Per-pipeline configuration: output directory and CSV delimiter, defaulted
/// but overridable through the environment.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub result_dir: PathBuf,
    pub delimiter: u8,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            result_dir: PathBuf::from("result"),
            delimiter: b';',
        }
    }
}

impl ScrapeConfig {
    pub async fn from_env() -> Result<Self> {
        Ok(Self {
            result_dir: get_result_dir().await?,
            delimiter: get_csv_delimiter().await?,
        })
    }
}

pub async fn get_result_dir() -> Result<PathBuf> {
    match var("RESULT_DIR") {
        Ok(dir) => match dir.is_empty() {
            true => Ok(PathBuf::from("result")),
            false => Ok(PathBuf::from(dir)),
        },
        Err(_) => Ok(PathBuf::from("result")),
    }
}

pub async fn get_csv_delimiter() -> Result<u8> {
    match var("CSV_DELIMITER") {
        Ok(delimiter) => match delimiter.as_bytes() {
            [] => Ok(b';'),
            [delimiter] => Ok(*delimiter),
            _ => {
                let err = format!(
                    "CSV_DELIMITER must be a single ASCII character: {:?}",
                    delimiter
                );
                tracing::error!(err);
                Err(anyhow!(err))
            }
        },
        Err(_) => Ok(b';'),
    }
}
