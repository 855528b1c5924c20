use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};

use crate::matrix::BinaryMatrix;

/// Layout marker in a classical code description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// A parity check; the integer tokens that follow name the bits it touches.
    #[serde(rename = "C")]
    Check,
    /// A code bit.
    #[serde(rename = "B")]
    Bit,
}

/// One entry of a classical code description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeToken {
    /// `C` or `B`.
    Marker(Marker),
    /// Bit index belonging to the closest preceding `C`.
    Index(usize),
}

/// Ordered description of a classical linear code.
///
/// The order of `C` and `B` markers is also the physical layout order used
/// when the code becomes one axis of a hypergraph product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassicalCode {
    tokens: Vec<CodeToken>,
}

impl ClassicalCode {
    /// Wraps a token list without validating it; see [`classical_pcm`].
    pub fn new(tokens: Vec<CodeToken>) -> Self {
        Self { tokens }
    }

    /// Repetition code on `num_bits` bits laid out as `B C 0 1 B C 1 2 B ...`.
    pub fn repetition(num_bits: usize) -> Result<Self, StabError> {
        if num_bits < 2 {
            let info = ErrorInfo::new("repetition-too-short", "repetition code needs two bits")
                .with_context("num_bits", num_bits);
            return Err(StabError::Config(info));
        }
        let mut tokens = vec![CodeToken::Marker(Marker::Bit)];
        for bit in 1..num_bits {
            tokens.push(CodeToken::Marker(Marker::Check));
            tokens.push(CodeToken::Index(bit - 1));
            tokens.push(CodeToken::Index(bit));
            tokens.push(CodeToken::Marker(Marker::Bit));
        }
        Ok(Self { tokens })
    }

    /// Raw token list.
    pub fn tokens(&self) -> &[CodeToken] {
        &self.tokens
    }

    /// Layout markers in order, with connection indices skipped.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            CodeToken::Marker(marker) => Some(*marker),
            CodeToken::Index(_) => None,
        })
    }

    /// Number of `B` markers.
    pub fn num_bits(&self) -> usize {
        self.markers().filter(|m| *m == Marker::Bit).count()
    }

    /// Number of `C` markers.
    pub fn num_checks(&self) -> usize {
        self.markers().filter(|m| *m == Marker::Check).count()
    }

    /// Parity-check matrix of the code; see [`classical_pcm`].
    pub fn parity_check_matrix(&self) -> Result<BinaryMatrix, StabError> {
        classical_pcm(self)
    }
}

/// Builds the `num_checks x num_bits` parity-check matrix of `code`.
///
/// Each `C` marker contributes one row whose ones sit at the integer indices
/// running up to the next marker. Indices outside `[0, num_bits)`, indices
/// not preceded by a `C`, and checks touching no bit are rejected.
pub fn classical_pcm(code: &ClassicalCode) -> Result<BinaryMatrix, StabError> {
    let num_bits = code.num_bits();
    let mut supports: Vec<Vec<usize>> = Vec::with_capacity(code.num_checks());
    let mut in_check = false;

    for (position, token) in code.tokens.iter().enumerate() {
        match token {
            CodeToken::Marker(Marker::Check) => {
                close_check(&supports, in_check)?;
                supports.push(Vec::new());
                in_check = true;
            }
            CodeToken::Marker(Marker::Bit) => {
                close_check(&supports, in_check)?;
                in_check = false;
            }
            CodeToken::Index(index) => {
                if !in_check {
                    let info = ErrorInfo::new(
                        "index-without-check",
                        "bit index does not follow a check marker",
                    )
                    .with_context("position", position)
                    .with_context("index", index);
                    return Err(StabError::Config(info));
                }
                if *index >= num_bits {
                    let info = ErrorInfo::new(
                        "bit-index-out-of-range",
                        "check references a bit outside [0, num_bits)",
                    )
                    .with_context("check", supports.len() - 1)
                    .with_context("index", index)
                    .with_context("num_bits", num_bits);
                    return Err(StabError::Config(info));
                }
                if let Some(current) = supports.last_mut() {
                    current.push(*index);
                }
            }
        }
    }
    close_check(&supports, in_check)?;

    BinaryMatrix::from_supports(num_bits, &supports)
}

fn close_check(supports: &[Vec<usize>], in_check: bool) -> Result<(), StabError> {
    match supports.last() {
        Some(support) if in_check && support.is_empty() => {
            let info = ErrorInfo::new("empty-check", "check marker touches no bits")
                .with_context("check", supports.len() - 1);
            Err(StabError::Config(info))
        }
        _ => Ok(()),
    }
}

impl FromStr for ClassicalCode {
    type Err = StabError;

    /// Parses whitespace or comma separated tokens, e.g. `"B C 0 1 B"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| match part {
                "C" | "c" => Ok(CodeToken::Marker(Marker::Check)),
                "B" | "b" => Ok(CodeToken::Marker(Marker::Bit)),
                other => other.parse::<usize>().map(CodeToken::Index).map_err(|_| {
                    StabError::Config(
                        ErrorInfo::new("unknown-code-token", "expected C, B or a bit index")
                            .with_context("token", other),
                    )
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }
}

impl fmt::Display for ClassicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            match token {
                CodeToken::Marker(Marker::Check) => write!(f, "C")?,
                CodeToken::Marker(Marker::Bit) => write!(f, "B")?,
                CodeToken::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}
