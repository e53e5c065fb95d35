use super::ids::InstrumentId;
use super::instrument::Instrument;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Per-session price snapshots, instrument by instrument.
///
/// Append-only: the engine records each session exactly once, at the boundary
/// where the next session begins (or at finalization for the last open
/// session). Once written, a session's entry is never touched again. Ordered
/// maps so serialized history comes out in a stable order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PriceHistory {
    prices: BTreeMap<InstrumentId, BTreeMap<u32, i64>>,
}

impl PriceHistory {
    /// Records the end-of-session price of every instrument known so far,
    /// not just the ones that moved this session.
    pub(crate) fn record(
        &mut self,
        session: u32,
        instruments: &HashMap<InstrumentId, Instrument>,
    ) {
        for (id, instrument) in instruments {
            self.prices
                .entry(id.clone())
                .or_default()
                .insert(session, instrument.price());
        }
    }

    /// Price of `instrument` at the end of `session`, if that session was
    /// snapshotted while the instrument was listed.
    pub fn price_at(&self, instrument: &InstrumentId, session: u32) -> Option<i64> {
        self.prices
            .get(instrument)
            .and_then(|by_session| by_session.get(&session).copied())
    }

    /// All recorded sessions for one instrument, in session order.
    pub fn sessions(&self, instrument: &InstrumentId) -> Option<&BTreeMap<u32, i64>> {
        self.prices.get(instrument)
    }

    pub fn iter(
        &self,
    ) -> std::collections::btree_map::Iter<'_, InstrumentId, BTreeMap<u32, i64>> {
        self.prices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
