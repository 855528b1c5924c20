//! YAML configuration files read by the command line front end.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stab_circuit::{CodeFamily, NoiseConfig, SyndromeCircuitBuilder};
use stab_core::{ErrorInfo, StabError};

/// One circuit build request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Code family and its parameters.
    pub code: CodeFamily,
    /// Noise sites; omitted sites emit no channels.
    #[serde(default)]
    pub noise: NoiseConfig,
    /// Number of syndrome rounds.
    pub rounds: usize,
}

impl BuildConfig {
    /// Validated builder for this request.
    pub fn builder(&self) -> Result<SyndromeCircuitBuilder, StabError> {
        SyndromeCircuitBuilder::new(self.code.clone(), &self.noise, self.rounds)
    }
}

/// Batch of independent build requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Jobs in report order.
    pub jobs: Vec<BuildConfig>,
    /// Worker threads; defaults to one.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
}

fn default_parallelism() -> usize {
    1
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, StabError> {
    let text = fs::read_to_string(path).map_err(|err| {
        StabError::Io(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    serde_yaml::from_str(&text).map_err(|err| {
        StabError::Serde(
            ErrorInfo::new("config-parse", err.to_string())
                .with_context("path", path.display()),
        )
    })
}

/// Reads a [`BuildConfig`] from a YAML file.
pub fn load_build_config(path: &Path) -> Result<BuildConfig, StabError> {
    load_yaml(path)
}

/// Reads a [`SweepConfig`] from a YAML file.
pub fn load_sweep_config(path: &Path) -> Result<SweepConfig, StabError> {
    load_yaml(path)
}
