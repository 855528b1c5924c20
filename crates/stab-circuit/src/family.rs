use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};
use stab_pcm::ClassicalCode;

/// Which logical basis a surface-code memory experiment protects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryBasis {
    /// Detectors on X checks; data prepared and read out in the X basis.
    XMemory,
    /// Detectors on Z checks; data prepared and read out in the Z basis.
    #[default]
    ZMemory,
}

impl MemoryBasis {
    /// Selector suffix, `x_memory` or `z_memory`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryBasis::XMemory => "x_memory",
            MemoryBasis::ZMemory => "z_memory",
        }
    }
}

/// Code family together with exactly the parameters it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum CodeFamily {
    /// Bit-flip repetition code on a line.
    RepetitionCode {
        /// Number of Z checks; the line holds `2 * distance + 1` qubits.
        distance: usize,
    },
    /// Planar surface code on an odd `rows x cols` checkerboard.
    SurfaceCode {
        /// `(rows, cols)`.
        scale: (usize, usize),
        /// Protected basis.
        #[serde(default)]
        memory: MemoryBasis,
    },
    /// Hypergraph product of two classical codes.
    HypergraphProductCode {
        /// Row-axis classical code.
        clist1: ClassicalCode,
        /// Column-axis classical code.
        clist2: ClassicalCode,
        /// Optional drawing positions overriding the grid, keyed by qubit.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pos: Option<BTreeMap<usize, (f64, f64)>>,
    },
}

/// Loosely typed keyword parameters accompanying a selector string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeParams {
    /// Repetition code distance.
    #[serde(default)]
    pub distance: Option<usize>,
    /// Surface code scale.
    #[serde(default)]
    pub scale: Option<(usize, usize)>,
    /// First classical code of a hypergraph product.
    #[serde(default)]
    pub clist1: Option<ClassicalCode>,
    /// Second classical code of a hypergraph product.
    #[serde(default)]
    pub clist2: Option<ClassicalCode>,
    /// Drawing positions for hypergraph-product qubits.
    #[serde(default)]
    pub pos: Option<BTreeMap<usize, (f64, f64)>>,
}

fn missing(selector: &str, name: &str) -> StabError {
    StabError::Config(
        ErrorInfo::new("missing-parameter", format!("{selector} requires `{name}`"))
            .with_context("selector", selector)
            .with_context("parameter", name),
    )
}

fn reject_extra(selector: &str, extras: &[(&str, bool)]) -> Result<(), StabError> {
    match extras.iter().find(|(_, present)| *present) {
        Some((name, _)) => Err(StabError::Config(
            ErrorInfo::new("unexpected-parameter", format!("{selector} does not take `{name}`"))
                .with_context("selector", selector)
                .with_context("parameter", *name),
        )),
        None => Ok(()),
    }
}

fn unknown_subfamily(family: &str, subfamily: &str) -> StabError {
    StabError::Config(
        ErrorInfo::new("unknown-subfamily", "code subfamily not recognized")
            .with_context("family", family)
            .with_context("subfamily", subfamily),
    )
}

impl CodeFamily {
    /// Resolves a `"<family>[:<subfamily>]"` selector plus keyword parameters.
    pub fn from_selector(selector: &str, params: CodeParams) -> Result<Self, StabError> {
        let (family, subfamily) = match selector.split_once(':') {
            Some((family, sub)) => (family.trim(), Some(sub.trim())),
            None => (selector.trim(), None),
        };
        match family {
            "repetition_code" => {
                if let Some(sub) = subfamily {
                    return Err(unknown_subfamily(family, sub));
                }
                reject_extra(
                    selector,
                    &[
                        ("scale", params.scale.is_some()),
                        ("clist1", params.clist1.is_some()),
                        ("clist2", params.clist2.is_some()),
                        ("pos", params.pos.is_some()),
                    ],
                )?;
                let distance = params.distance.ok_or_else(|| missing(selector, "distance"))?;
                Ok(CodeFamily::RepetitionCode { distance })
            }
            "surface_code" => {
                let memory = match subfamily {
                    None | Some("z_memory") => MemoryBasis::ZMemory,
                    Some("x_memory") => MemoryBasis::XMemory,
                    Some(other) => return Err(unknown_subfamily(family, other)),
                };
                reject_extra(
                    selector,
                    &[
                        ("distance", params.distance.is_some()),
                        ("clist1", params.clist1.is_some()),
                        ("clist2", params.clist2.is_some()),
                        ("pos", params.pos.is_some()),
                    ],
                )?;
                let scale = params.scale.ok_or_else(|| missing(selector, "scale"))?;
                Ok(CodeFamily::SurfaceCode { scale, memory })
            }
            "hypergraph_product_code" => {
                if let Some(sub) = subfamily {
                    return Err(unknown_subfamily(family, sub));
                }
                reject_extra(
                    selector,
                    &[
                        ("distance", params.distance.is_some()),
                        ("scale", params.scale.is_some()),
                    ],
                )?;
                let clist1 = params.clist1.ok_or_else(|| missing(selector, "clist1"))?;
                let clist2 = params.clist2.ok_or_else(|| missing(selector, "clist2"))?;
                Ok(CodeFamily::HypergraphProductCode {
                    clist1,
                    clist2,
                    pos: params.pos,
                })
            }
            other => Err(StabError::Config(
                ErrorInfo::new("unknown-code-family", "code family not recognized")
                    .with_context("family", other)
                    .with_hint("expected repetition_code, surface_code or hypergraph_product_code"),
            )),
        }
    }

    /// Canonical selector string for this family.
    pub fn selector(&self) -> String {
        match self {
            CodeFamily::RepetitionCode { .. } => "repetition_code".to_string(),
            CodeFamily::SurfaceCode { memory, .. } => format!("surface_code:{}", memory.as_str()),
            CodeFamily::HypergraphProductCode { .. } => "hypergraph_product_code".to_string(),
        }
    }
}

impl fmt::Display for CodeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeFamily::RepetitionCode { distance } => {
                write!(f, "{} (distance {distance})", self.selector())
            }
            CodeFamily::SurfaceCode { scale, .. } => {
                write!(f, "{} ({}x{})", self.selector(), scale.0, scale.1)
            }
            CodeFamily::HypergraphProductCode { clist1, clist2, .. } => {
                write!(f, "{} ([{clist1}] x [{clist2}])", self.selector())
            }
        }
    }
}
