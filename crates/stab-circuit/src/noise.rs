use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};

use crate::circuit::NoiseChannel;

/// Noise for one site: a total probability split evenly, or explicit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoiseSpec {
    /// Total error probability spread uniformly over the channel's outcomes.
    Uniform(f64),
    /// Explicit per-outcome probabilities; the length must match the channel.
    Explicit(Vec<f64>),
}

/// Channel family a noise site feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Two-qubit Pauli channel after entangling gates (15 parameters).
    TwoQubit,
    /// Single-qubit Pauli channel for idling (3 parameters).
    OneQubit,
}

impl ChannelKind {
    /// Number of channel parameters.
    pub fn arity(&self) -> usize {
        match self {
            ChannelKind::TwoQubit => 15,
            ChannelKind::OneQubit => 3,
        }
    }
}

/// Expands `spec` into exactly `kind.arity()` probabilities.
///
/// Explicit vectors are returned unchanged, so normalizing an already
/// normalized vector is the identity.
pub fn normalize(spec: &NoiseSpec, kind: ChannelKind, site: &str) -> Result<Vec<f64>, StabError> {
    let arity = kind.arity();
    let params = match spec {
        NoiseSpec::Uniform(p) => {
            check_probability(*p, site)?;
            vec![p / arity as f64; arity]
        }
        NoiseSpec::Explicit(values) => {
            if values.len() != arity {
                let info = ErrorInfo::new(
                    "noise-length-mismatch",
                    format!("{site} noise takes {arity} parameters, given {}", values.len()),
                )
                .with_context("site", site)
                .with_context("expected", arity)
                .with_context("given", values.len());
                return Err(StabError::Config(info));
            }
            for &p in values {
                check_probability(p, site)?;
            }
            values.clone()
        }
    };
    let total: f64 = params.iter().sum();
    if total > 1.0 + 1e-12 {
        let info = ErrorInfo::new(
            "noise-probability-out-of-range",
            "channel probabilities sum above one",
        )
        .with_context("site", site)
        .with_context("total", total);
        return Err(StabError::Config(info));
    }
    Ok(params)
}

fn check_probability(p: f64, site: &str) -> Result<(), StabError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        return Ok(());
    }
    let info = ErrorInfo::new(
        "noise-probability-out-of-range",
        "noise probabilities must be finite and within [0, 1]",
    )
    .with_context("site", site)
    .with_context("value", p);
    Err(StabError::Config(info))
}

/// User-facing noise configuration. An absent site emits no noise at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Two-qubit noise after every entangling gate.
    #[serde(default)]
    pub gate: Option<NoiseSpec>,
    /// Idle noise on data qubits once per round.
    #[serde(default)]
    pub data: Option<NoiseSpec>,
    /// Idle noise on Z-check qubits once per round.
    #[serde(default)]
    pub z_check: Option<NoiseSpec>,
    /// Idle noise on X-check qubits once per round.
    #[serde(default)]
    pub x_check: Option<NoiseSpec>,
}

impl NoiseConfig {
    /// The same total probability at every site.
    pub fn uniform(p: f64) -> Self {
        Self {
            gate: Some(NoiseSpec::Uniform(p)),
            data: Some(NoiseSpec::Uniform(p)),
            z_check: Some(NoiseSpec::Uniform(p)),
            x_check: Some(NoiseSpec::Uniform(p)),
        }
    }

    /// Validates and expands every configured site.
    pub fn resolve(&self) -> Result<ResolvedNoise, StabError> {
        let one = |spec: &Option<NoiseSpec>, site: &str| -> Result<Option<[f64; 3]>, StabError> {
            spec.as_ref()
                .map(|spec| {
                    let params = normalize(spec, ChannelKind::OneQubit, site)?;
                    Ok::<_, StabError>([params[0], params[1], params[2]])
                })
                .transpose()
        };
        let gate = self
            .gate
            .as_ref()
            .map(|spec| {
                let params = normalize(spec, ChannelKind::TwoQubit, "two-qubit gate")?;
                let mut out = [0.0; 15];
                out.copy_from_slice(&params);
                Ok::<_, StabError>(out)
            })
            .transpose()?;
        Ok(ResolvedNoise {
            gate,
            data: one(&self.data, "data qubit")?,
            z_check: one(&self.z_check, "Z check qubit")?,
            x_check: one(&self.x_check, "X check qubit")?,
        })
    }
}

/// Validated, fixed-length channel parameters per noise site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedNoise {
    /// Two-qubit gate noise.
    pub gate: Option<[f64; 15]>,
    /// Data qubit idle noise.
    pub data: Option<[f64; 3]>,
    /// Z-check idle noise.
    pub z_check: Option<[f64; 3]>,
    /// X-check idle noise.
    pub x_check: Option<[f64; 3]>,
}

impl ResolvedNoise {
    /// Channel to apply after each entangling gate.
    pub fn gate_channel(&self) -> Option<NoiseChannel> {
        self.gate.map(NoiseChannel::Pauli2)
    }

    /// Idle channel for data qubits.
    pub fn data_channel(&self) -> Option<NoiseChannel> {
        self.data.map(NoiseChannel::Pauli1)
    }

    /// Idle channel for Z-check qubits.
    pub fn z_check_channel(&self) -> Option<NoiseChannel> {
        self.z_check.map(NoiseChannel::Pauli1)
    }

    /// Idle channel for X-check qubits.
    pub fn x_check_channel(&self) -> Option<NoiseChannel> {
        self.x_check.map(NoiseChannel::Pauli1)
    }
}
