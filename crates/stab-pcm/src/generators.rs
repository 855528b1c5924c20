use rand::seq::index::sample;
use stab_core::{ErrorInfo, RngHandle, StabError};

use crate::classical::{ClassicalCode, CodeToken, Marker};

/// Generates a random classical LDPC code with fixed row weight.
///
/// Bits and checks are interleaved in the layout (`B C .. B C ..`) with any
/// surplus markers appended at the end, so the result is directly usable as
/// one axis of a hypergraph-product layout.
pub fn gen_random_code(
    num_bits: usize,
    num_checks: usize,
    row_weight: usize,
    rng: &mut RngHandle,
) -> Result<ClassicalCode, StabError> {
    if num_bits == 0 || row_weight == 0 || row_weight > num_bits {
        let info = ErrorInfo::new("invalid-row-weight", "row weight must lie in [1, num_bits]")
            .with_context("num_bits", num_bits)
            .with_context("row_weight", row_weight);
        return Err(StabError::Config(info));
    }

    let mut tokens = Vec::with_capacity(num_bits + num_checks * (row_weight + 1));
    for slot in 0..num_bits.max(num_checks) {
        if slot < num_bits {
            tokens.push(CodeToken::Marker(Marker::Bit));
        }
        if slot < num_checks {
            tokens.push(CodeToken::Marker(Marker::Check));
            let mut support = sample(rng, num_bits, row_weight).into_vec();
            support.sort_unstable();
            tokens.extend(support.into_iter().map(CodeToken::Index));
        }
    }
    Ok(ClassicalCode::new(tokens))
}
