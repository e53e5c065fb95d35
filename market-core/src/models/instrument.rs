use super::ids::InstrumentId;
use serde::{Deserialize, Serialize};

/// One voteable item's market state: the accumulated share price and the
/// number of shares issued for it so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    id: InstrumentId,
    price: i64,
    issuance: u32,
}

impl Instrument {
    /// Lists an instrument from its first accepted vote. Issuance starts at
    /// one share; the price starts at the vote's weight.
    pub fn new(id: InstrumentId, initial_price: i64) -> Self {
        Self {
            id,
            price: initial_price,
            issuance: 1,
        }
    }

    pub fn id(&self) -> &InstrumentId {
        &self.id
    }

    /// Current share price. May be negative if negative vote weights have
    /// accumulated.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Number of shares issued: one per accepted, non-skipped vote.
    pub fn issuance(&self) -> u32 {
        self.issuance
    }

    /// Applies one accepted vote: the weight moves the price and one more
    /// share is issued.
    pub fn apply_vote(&mut self, weight: i64) {
        self.price += weight;
        self.issuance += 1;
    }

    /// Zeroes the accumulated price. Issuance is untouched.
    pub fn clear_price(&mut self) {
        self.price = 0;
    }

    /// Price times issued shares.
    pub fn market_cap(&self) -> i64 {
        self.price * self.issuance as i64
    }
}
