use super::*;
use std::collections::HashMap;

fn table(entries: &[(&str, i64)]) -> HashMap<InstrumentId, Instrument> {
    let mut instruments = HashMap::new();
    for (name, price) in entries {
        let id = InstrumentId::new(*name);
        instruments.insert(id.clone(), Instrument::new(id, *price));
    }
    instruments
}

#[test]
fn test_instrument_accumulates_votes() {
    let mut instrument = Instrument::new(InstrumentId::new("Outer Wilds"), 10);
    instrument.apply_vote(3);
    instrument.apply_vote(-2);

    assert_eq!(instrument.price(), 11);
    assert_eq!(instrument.issuance(), 3);
    assert_eq!(instrument.market_cap(), 33);
}

#[test]
fn test_clear_price_keeps_issuance() {
    let mut instrument = Instrument::new(InstrumentId::new("Celeste"), 7);
    instrument.apply_vote(5);
    instrument.clear_price();

    assert_eq!(instrument.price(), 0);
    assert_eq!(instrument.issuance(), 2, "clearing the price must not touch issuance");
    assert_eq!(instrument.market_cap(), 0);
}

#[test]
fn test_negative_weights_drive_price_negative() {
    let mut instrument = Instrument::new(InstrumentId::new("Anthem"), -4);
    instrument.apply_vote(-6);

    assert_eq!(instrument.price(), -10);
    assert_eq!(instrument.market_cap(), -20);
}

#[test]
fn test_portfolio_counts_units_per_instrument() {
    let mut portfolio = Portfolio::new(ParticipantId::new("ada"));
    let a = InstrumentId::new("A");
    let b = InstrumentId::new("B");

    portfolio.add_unit(&a);
    portfolio.add_unit(&a);
    portfolio.add_unit(&b);

    assert_eq!(portfolio.units(&a), 2);
    assert_eq!(portfolio.units(&b), 1);
    assert_eq!(portfolio.units(&InstrumentId::new("C")), 0);
}

#[test]
fn test_portfolio_value_is_units_times_price() {
    let instruments = table(&[("A", 100), ("B", 50)]);
    let mut portfolio = Portfolio::new(ParticipantId::new("ada"));
    let a = InstrumentId::new("A");
    let b = InstrumentId::new("B");

    portfolio.add_unit(&a);
    portfolio.add_unit(&a);
    portfolio.add_unit(&b);

    // 2 * 100 + 1 * 50 = 250
    assert_eq!(portfolio.value(&instruments), 250);
}

#[test]
fn test_empty_portfolio_values_to_zero() {
    let portfolio = Portfolio::new(ParticipantId::new("ada"));
    assert!(portfolio.is_empty());
    assert_eq!(portfolio.value(&table(&[("A", 100)])), 0);
}

#[test]
fn test_history_records_every_known_instrument() {
    let mut history = PriceHistory::default();
    let instruments = table(&[("A", 13), ("B", 5)]);

    history.record(1, &instruments);

    assert_eq!(history.price_at(&InstrumentId::new("A"), 1), Some(13));
    assert_eq!(history.price_at(&InstrumentId::new("B"), 1), Some(5));
    assert_eq!(history.price_at(&InstrumentId::new("A"), 2), None);
    assert_eq!(history.price_at(&InstrumentId::new("C"), 1), None);
}

#[test]
fn test_history_serializes_as_instrument_then_session_map() {
    let mut history = PriceHistory::default();
    history.record(1, &table(&[("A", 13)]));

    let json = serde_json::to_value(&history).unwrap();
    assert_eq!(json, serde_json::json!({ "A": { "1": 13 } }));
}

#[test]
fn test_event_round_trips_through_serde() {
    let event = VoteEvent::new(
        InstrumentId::new("A"),
        ParticipantId::new("ada"),
        10,
        false,
        1,
        false,
    );

    let json = serde_json::to_string(&event).unwrap();
    let back: VoteEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
