//! End-to-end scenarios through the public engine API: the full
//! tick -> quote -> fill -> hedge -> terminal lifecycle as the gateway
//! would drive it.

use pairs_core::*;

fn new_engine() -> Engine {
    Engine::new(TraderConfig::default(), EngineConfig::default()).unwrap()
}

fn tick(engine: &mut Engine, instrument: Instrument, bid: i64, ask: i64) {
    engine.on_trade_ticks(instrument, &[ask], &[10], &[bid], &[10]);
}

fn inserts(commands: &[Command]) -> Vec<(OrderId, Side, i64, i64)> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Insert {
                id,
                side,
                price,
                volume,
                ..
            } => Some((*id, *side, *price, *volume)),
            _ => None,
        })
        .collect()
}

#[test]
fn mid_price_computation_cases() {
    let mut engine = new_engine();

    tick(&mut engine, Instrument::Etf, 100, 300);
    assert_eq!(engine.mids().etf_mid, 200);

    tick(&mut engine, Instrument::Etf, 0, 300);
    assert_eq!(engine.mids().etf_mid, 300);

    // both sides empty: the previous estimate survives
    tick(&mut engine, Instrument::Etf, 0, 0);
    assert_eq!(engine.mids().etf_mid, 300);
}

#[test]
fn mispricing_gap_fires_sell_ladder_at_tier_offsets() {
    let mut engine = new_engine();

    tick(&mut engine, Instrument::Future, 1300, 1500); // fut mid 1400
    tick(&mut engine, Instrument::Etf, 900, 1100); // etf mid 1000, gap 400

    let orders = inserts(&engine.drain_commands());
    assert_eq!(orders.len(), 3);
    for (_, side, _, _) in &orders {
        assert_eq!(*side, Side::Sell);
    }
    let prices: Vec<i64> = orders.iter().map(|o| o.2).collect();
    assert_eq!(prices, vec![1100, 1200, 1300]);

    // 1000 + 300 > 1400 is false: no buy ladder
    assert_eq!(engine.ledger().active_bid, 0);
}

#[test]
fn ladder_capacity_clamps_against_position() {
    // fill a full buy ladder so the position eats into the limit, then check
    // the next buy ladder sizes to the reduced headroom
    let mut engine = new_engine();

    // ETF rich vs Future: buy ladder only
    tick(&mut engine, Instrument::Future, 900, 1100); // fut mid 1000
    tick(&mut engine, Instrument::Etf, 1250, 1350); // etf mid 1300

    let bids = inserts(&engine.drain_commands());
    assert!(bids.iter().all(|(_, side, _, _)| *side == Side::Buy));
    let total_bid: i64 = bids.iter().map(|b| b.3).sum();
    assert_eq!(total_bid, 60); // 20 + 30 + 10

    // fill the whole ladder, then terminate each order
    for (id, _, price, volume) in &bids {
        engine.on_order_filled(*id, *price, *volume);
        engine.on_order_status(*id, *volume, 0, 0);
    }
    engine.drain_commands(); // hedge orders, not under test here

    tick(&mut engine, Instrument::Future, 900, 1100);
    tick(&mut engine, Instrument::Etf, 1250, 1350);
    let second = inserts(&engine.drain_commands());
    let total_second: i64 = second
        .iter()
        .filter(|(_, side, _, _)| *side == Side::Buy)
        .map(|b| b.3)
        .sum();
    assert_eq!(engine.ledger().etf_position, 60);
    // remaining buy headroom 40: tiers 13 + 20 + 6
    assert_eq!(total_second, 39);
}

#[test]
fn long_position_still_gets_full_sell_capacity() {
    // a long position widens sell headroom, so the cap that binds is
    // max_tick_volume, not the position limit
    let mut engine = new_engine();

    tick(&mut engine, Instrument::Future, 900, 1100);
    tick(&mut engine, Instrument::Etf, 1250, 1350);
    let bids = inserts(&engine.drain_commands());
    for (id, _, price, volume) in &bids {
        engine.on_order_filled(*id, *price, *volume);
        engine.on_order_status(*id, *volume, 0, 0);
    }
    engine.drain_commands();
    tick(&mut engine, Instrument::Future, 900, 1100);
    tick(&mut engine, Instrument::Etf, 1250, 1350);
    let more = inserts(&engine.drain_commands());
    for (id, _, price, volume) in &more {
        engine.on_order_filled(*id, *price, *volume);
        engine.on_order_status(*id, *volume, 0, 0);
    }
    engine.drain_commands();
    // 60 from the first cycle, 39 from the second
    assert_eq!(engine.ledger().etf_position, 99);

    // now a cheap ETF: sell capacity = min(60, 99 + 100, 200) = 60
    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);
    let sells = inserts(&engine.drain_commands());
    let volumes: Vec<i64> = sells
        .iter()
        .filter(|(_, side, _, _)| *side == Side::Sell)
        .map(|s| s.3)
        .collect();
    assert_eq!(volumes, vec![20, 30, 10]);
}

#[test]
fn ask_fill_produces_exactly_one_crossing_hedge() {
    let mut engine = new_engine();
    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);

    let asks = inserts(&engine.drain_commands());
    let (ask_id, _, _, _) = asks[0];

    engine.on_order_filled(ask_id, 500, 20);

    assert_eq!(engine.ledger().etf_position, -20);
    assert_eq!(engine.ledger().etf_profit, 10_000);

    let hedges = engine.drain_commands();
    assert_eq!(hedges.len(), 1);
    match hedges[0] {
        Command::Hedge {
            side,
            price,
            volume,
            ..
        } => {
            assert_eq!(side, Side::Buy);
            assert_eq!(price, engine.trader_config().max_ask_nearest_tick);
            assert_eq!(volume, 20);
        }
        ref other => panic!("expected hedge, got {other:?}"),
    }
}

#[test]
fn terminal_idempotence_through_the_full_lifecycle() {
    let mut engine = new_engine();
    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);

    let asks = inserts(&engine.drain_commands());
    let (ask_id, _, _, volume) = asks[0];

    engine.on_order_filled(ask_id, 1100, volume);
    engine.drain_commands();

    engine.on_order_status(ask_id, volume, 0, 0);
    let orders_after_first = engine.ledger().active_orders;
    let ask_volume_after_first = engine.ledger().active_ask;

    engine.on_order_status(ask_id, volume, 0, 0);
    assert_eq!(engine.ledger().active_orders, orders_after_first);
    assert_eq!(engine.ledger().active_ask, ask_volume_after_first);
}

#[test]
fn error_and_status_paths_clean_up_identically() {
    let mut engine = new_engine();

    // two identical quoting cycles on two engines; terminate one ladder by
    // status events, the other by gateway errors
    let mut engine_b = new_engine();
    for e in [&mut engine, &mut engine_b] {
        tick(e, Instrument::Future, 1300, 1500);
        tick(e, Instrument::Etf, 900, 1100);
    }

    let orders_a = inserts(&engine.drain_commands());
    let orders_b = inserts(&engine_b.drain_commands());

    for (id, _, _, _) in &orders_a {
        engine.on_order_status(*id, 0, 0, 0);
    }
    for (id, _, _, _) in &orders_b {
        engine_b.on_error(*id, "rejected");
    }

    assert_eq!(engine.ledger().active_orders, 0);
    assert_eq!(engine_b.ledger().active_orders, 0);
    assert_eq!(engine.registry().len(), engine_b.registry().len());
    assert_eq!(engine.ledger().active_ask, engine_b.ledger().active_ask);
}

#[test]
fn profit_snapshot_marks_both_legs_to_mid() {
    let mut engine = new_engine();
    tick(&mut engine, Instrument::Future, 1300, 1500); // fut mid 1400
    tick(&mut engine, Instrument::Etf, 900, 1100); // etf mid 1000

    let asks = inserts(&engine.drain_commands());
    let (ask_id, _, price, volume) = asks[0]; // 20 @ 1100

    engine.on_order_filled(ask_id, price, volume);
    let hedge_id = engine.drain_commands()[0].order_id();
    engine.on_hedge_filled(hedge_id, 1400, volume);

    engine.on_order_status(ask_id, volume, 0, 0);

    let snapshot = engine
        .events()
        .iter()
        .rev()
        .find_map(|e| match &e.payload {
            EventPayload::ProfitSnapshot(s) => Some(s.clone()),
            _ => None,
        })
        .expect("terminal status emits a snapshot");

    // short 20 ETF at 1100 marked at 1000: +22000 - 20000
    assert_eq!(snapshot.etf_profit, 2_000);
    // long 20 FUT at 1400 marked at 1400: flat
    assert_eq!(snapshot.fut_profit, 0);
}

#[test]
fn order_ids_are_unique_and_increasing_across_roles() {
    let mut engine = new_engine();
    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);

    let quotes = inserts(&engine.drain_commands());
    engine.on_order_filled(quotes[0].0, 1100, 5);
    let hedge_id = engine.drain_commands()[0].order_id();

    let mut ids: Vec<OrderId> = quotes.iter().map(|q| q.0).collect();
    ids.push(hedge_id);

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len(), "ids must never repeat");
    assert_eq!(sorted, ids, "ids must be monotonically increasing");
}
