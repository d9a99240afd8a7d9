use std::env;
use std::fmt::Display;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::str::FromStr;

use processor::GeneratorConfig;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("RR_QUANTUMS must list at least one quantum")]
    NoQuantums,
}

/// Simulation settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub process_count: usize,
    pub arr_quantum: NonZeroU64,
    pub rr_quantums: Vec<NonZeroU64>,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub trace_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let process_count = parse(
            "PROCESS_COUNT",
            lookup("PROCESS_COUNT").unwrap_or("5".to_string()),
        )?;
        let arr_quantum = parse(
            "ARR_QUANTUM",
            lookup("ARR_QUANTUM").unwrap_or("4".to_string()),
        )?;

        let rr_quantums = lookup("RR_QUANTUMS")
            .unwrap_or("2,3,4,5".to_string())
            .split(',')
            .map(str::trim)
            .filter(|quantum| !quantum.is_empty())
            .map(|quantum| parse("RR_QUANTUMS", quantum.to_string()))
            .collect::<Result<Vec<NonZeroU64>, _>>()?;
        if rr_quantums.is_empty() {
            return Err(ConfigError::NoQuantums);
        }

        let seed = lookup("SEED").map(|seed| parse("SEED", seed)).transpose()?;
        let output_dir = PathBuf::from(lookup("OUTPUT_DIR").unwrap_or("gantt_charts".to_string()));
        let trace_json = lookup("SCHEDSIM_TRACE_JSON")
            .map(|value| value == "1" || value == "true")
            .unwrap_or(false);

        Ok(Config {
            process_count,
            arr_quantum,
            rr_quantums,
            seed,
            output_dir,
            trace_json,
        })
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.process_count,
            ..GeneratorConfig::default()
        }
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse::<T>().map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
        value,
    })
}
