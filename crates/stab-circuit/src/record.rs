use std::collections::BTreeMap;
use std::ops::Range;

use stab_core::{ErrorInfo, QubitId, StabError};

use crate::circuit::RecTarget;

/// Absolute bookkeeping for the measurement record of a circuit under construction.
///
/// Builders address measurements by absolute position (0 = first measurement
/// ever taken) and convert to lookbacks only when a detector is emitted, so
/// every offset is computed against the record length at that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementRecord {
    len: usize,
    last: BTreeMap<QubitId, usize>,
}

impl MeasurementRecord {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of measurements taken so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first measurement.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records one measurement per qubit, in order, and returns their positions.
    pub fn measure(&mut self, qubits: &[QubitId]) -> Range<usize> {
        let start = self.len;
        for &qubit in qubits {
            self.last.insert(qubit, self.len);
            self.len += 1;
        }
        start..self.len
    }

    /// Position of the most recent measurement of `qubit`.
    pub fn last_of(&self, qubit: QubitId) -> Result<usize, StabError> {
        self.last.get(&qubit).copied().ok_or_else(|| {
            StabError::Invariant(
                ErrorInfo::new("qubit-never-measured", "detector references an unmeasured qubit")
                    .with_context("qubit", qubit),
            )
        })
    }

    /// Lookback from the current end of the record to `position`.
    pub fn lookback(&self, position: usize) -> Result<RecTarget, StabError> {
        if position >= self.len {
            let info = ErrorInfo::new(
                "lookback-into-future",
                "lookback references a measurement not yet taken",
            )
            .with_context("position", position)
            .with_context("record_len", self.len);
            return Err(StabError::Invariant(info));
        }
        RecTarget::new(position as i64 - self.len as i64)
    }

    /// Lookback to the most recent measurement of `qubit`.
    pub fn lookback_last(&self, qubit: QubitId) -> Result<RecTarget, StabError> {
        self.lookback(self.last_of(qubit)?)
    }

    /// Advances the record as if the measurements taken since `block_start`
    /// were replayed `extra` more times.
    pub fn repeat_block(&mut self, block_start: usize, extra: usize) -> Result<(), StabError> {
        let block_len = self.len.saturating_sub(block_start);
        let overflow = || {
            StabError::Invariant(
                ErrorInfo::new("record-overflow", "measurement record length overflows usize")
                    .with_context("block_len", block_len)
                    .with_context("extra", extra),
            )
        };
        let shift = block_len.checked_mul(extra).ok_or_else(overflow)?;
        if shift == 0 {
            return Ok(());
        }
        let len = self.len.checked_add(shift).ok_or_else(overflow)?;
        for position in self.last.values_mut() {
            if *position >= block_start {
                *position += shift;
            }
        }
        self.len = len;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qubits(ids: &[usize]) -> Vec<QubitId> {
        ids.iter().copied().map(QubitId::new).collect()
    }

    #[test]
    fn lookbacks_track_current_length() {
        let mut record = MeasurementRecord::new();
        record.measure(&qubits(&[1, 3]));
        assert_eq!(record.lookback_last(QubitId::new(3)).unwrap().offset(), -1);
        record.measure(&qubits(&[1, 3]));
        assert_eq!(record.lookback(0).unwrap().offset(), -4);
        assert_eq!(record.lookback_last(QubitId::new(1)).unwrap().offset(), -2);
        assert!(record.lookback(4).is_err());
    }

    #[test]
    fn repeat_block_shifts_only_block_measurements() {
        let mut record = MeasurementRecord::new();
        record.measure(&qubits(&[0]));
        let start = record.len();
        record.measure(&qubits(&[1, 2]));
        record.repeat_block(start, 2).unwrap();
        assert_eq!(record.len(), 7);
        assert_eq!(record.last_of(QubitId::new(0)).unwrap(), 0);
        assert_eq!(record.last_of(QubitId::new(1)).unwrap(), 5);
        assert_eq!(record.last_of(QubitId::new(2)).unwrap(), 6);
    }

    #[test]
    fn repeat_block_reports_overflow() {
        let mut record = MeasurementRecord::new();
        record.measure(&qubits(&[0, 1, 2]));
        let err = record.repeat_block(0, usize::MAX / 2).unwrap_err();
        assert_eq!(err.code(), "record-overflow");
        assert_eq!(record.len(), 3);
        assert_eq!(record.last_of(QubitId::new(2)).unwrap(), 2);
    }

    #[test]
    fn unmeasured_qubit_is_an_invariant_error() {
        let record = MeasurementRecord::new();
        let err = record.last_of(QubitId::new(0)).unwrap_err();
        assert!(matches!(err, StabError::Invariant(_)));
    }
}
