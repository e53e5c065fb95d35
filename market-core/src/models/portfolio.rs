use super::ids::{InstrumentId, ParticipantId};
use super::instrument::Instrument;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A participant's accumulated holdings: one unit per accepted vote they
/// cast, keyed by the instrument the vote named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    owner: ParticipantId,
    holdings: HashMap<InstrumentId, u32>,
}

impl Portfolio {
    pub fn new(owner: ParticipantId) -> Self {
        Self {
            owner,
            holdings: HashMap::new(),
        }
    }

    pub fn owner(&self) -> &ParticipantId {
        &self.owner
    }

    /// Grants one unit of `instrument`: insert-if-absent, then increment.
    pub fn add_unit(&mut self, instrument: &InstrumentId) {
        let units = self.holdings.entry(instrument.clone()).or_insert(0);
        *units += 1;
    }

    /// Units held of a single instrument. Zero for instruments this owner
    /// has never voted for.
    pub fn units(&self, instrument: &InstrumentId) -> u32 {
        self.holdings.get(instrument).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, InstrumentId, u32> {
        self.holdings.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Values the holdings against the current instrument table:
    /// sum of units times current price. Holdings always refer to listed
    /// instruments, so every lookup resolves.
    pub fn value(&self, instruments: &HashMap<InstrumentId, Instrument>) -> i64 {
        let mut total = 0;
        for (id, units) in &self.holdings {
            if let Some(instrument) = instruments.get(id) {
                total += instrument.price() * *units as i64;
            }
        }
        total
    }
}
