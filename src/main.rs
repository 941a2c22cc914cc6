//! Pair Trading Autotrader Simulation.
//!
//! Drives the reactive engine through scripted market-data and execution
//! events, printing the commands and risk state a live session would produce.

use pairs_core::*;

fn main() {
    println!("Pair Trading Autotrader Core Simulation");
    println!("ETF vs Future, Hard Risk Caps, Immediate Hedging\n");

    scenario_1_mispricing_ladder();
    scenario_2_fill_and_hedge_round_trip();
    scenario_3_capacity_saturation();
    scenario_4_error_driven_cancellation();
    scenario_5_degenerate_markets();

    println!("\nAll simulations completed successfully.");
}

fn new_engine() -> Engine {
    Engine::new(TraderConfig::default(), EngineConfig::default()).expect("default config is valid")
}

fn tick(engine: &mut Engine, instrument: Instrument, bid: i64, ask: i64) {
    engine.on_trade_ticks(instrument, &[ask], &[50], &[bid], &[50]);
}

fn print_commands(commands: &[Command]) {
    for command in commands {
        match command {
            Command::Insert {
                id,
                side,
                price,
                volume,
                ..
            } => println!("    insert #{id}: {side} {volume} @ {price}"),
            Command::Cancel { id } => println!("    cancel #{id}"),
            Command::Hedge {
                id,
                side,
                price,
                volume,
            } => println!("    hedge  #{id}: {side} {volume} @ {price}"),
        }
    }
}

/// A wide ETF/Future gap fires the sell ladder.
fn scenario_1_mispricing_ladder() {
    println!("Scenario 1: Mispricing Ladder\n");

    let mut engine = new_engine();

    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);

    println!(
        "  ETF mid {} vs Future mid {} (gap {})",
        engine.mids().etf_mid,
        engine.mids().fut_mid,
        engine.mids().fut_mid - engine.mids().etf_mid
    );

    let commands = engine.drain_commands();
    print_commands(&commands);

    let ledger = engine.ledger();
    println!(
        "  Active: {} orders, {} ask volume, {} bid volume\n",
        ledger.active_orders, ledger.active_ask, ledger.active_bid
    );
}

/// A quote fill triggers the hedge; both legs reconcile into flat exposure.
fn scenario_2_fill_and_hedge_round_trip() {
    println!("Scenario 2: Fill and Hedge Round Trip\n");

    let engine_config = EngineConfig {
        print_snapshots: true,
        ..EngineConfig::default()
    };
    let mut engine =
        Engine::new(TraderConfig::default(), engine_config).expect("default config is valid");
    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);

    let commands = engine.drain_commands();
    let first_ask = commands[0].order_id();

    println!("  Filling quote #{first_ask} for 20 @ 1100...");
    engine.on_order_filled(first_ask, 1100, 20);

    let hedges = engine.drain_commands();
    print_commands(&hedges);

    println!("  Confirming hedge fill for 20 @ 1450...");
    engine.on_hedge_filled(hedges[0].order_id(), 1450, 20);

    let ledger = engine.ledger();
    println!(
        "  ETF position {}, Future position {}, net {}",
        ledger.etf_position,
        ledger.fut_position,
        ledger.etf_position + ledger.fut_position
    );

    println!("  Terminating quote #{first_ask}, snapshot follows:");
    engine.on_order_status(first_ask, 20, 0, 0);
    println!();
}

/// Repeated quoting cycles run the ledger into its hard caps.
fn scenario_3_capacity_saturation() {
    println!("Scenario 3: Capacity Saturation\n");

    let mut engine = new_engine();

    for cycle in 1..=5 {
        tick(&mut engine, Instrument::Future, 1300, 1500);
        tick(&mut engine, Instrument::Etf, 900, 1100);
        let issued = engine.drain_commands().len();
        let ledger = engine.ledger();
        println!(
            "  Cycle {cycle}: {issued} new orders, {} active, ask volume {}",
            ledger.active_orders, ledger.active_ask
        );
    }

    let cfg = engine.trader_config().clone();
    let ledger = engine.ledger();
    println!(
        "  Caps held: orders {}/{}, ask volume {}/{}\n",
        ledger.active_orders, cfg.active_orders_limit, ledger.active_ask, cfg.active_volume_limit
    );
}

/// A gateway rejection cleans up exactly like a real terminal status.
fn scenario_4_error_driven_cancellation() {
    println!("Scenario 4: Error-Driven Cancellation\n");

    let mut engine = new_engine();
    tick(&mut engine, Instrument::Future, 1300, 1500);
    tick(&mut engine, Instrument::Etf, 900, 1100);

    let commands = engine.drain_commands();
    println!("  {} orders outstanding", commands.len());

    for command in &commands {
        engine.on_error(command.order_id(), "order rejected by exchange");
    }

    let ledger = engine.ledger();
    println!(
        "  After rejections: {} active orders, registry size {}",
        ledger.active_orders,
        engine.registry().len()
    );

    // a second error for the same id finds nothing to cancel
    engine.on_error(commands[0].order_id(), "duplicate rejection");
    println!(
        "  Duplicate error ignored, still {} active orders\n",
        engine.ledger().active_orders
    );
}

/// One-sided and empty books exercise the degenerate mid cases.
fn scenario_5_degenerate_markets() {
    println!("Scenario 5: Degenerate Markets\n");

    let mut engine = new_engine();

    tick(&mut engine, Instrument::Future, 0, 1400);
    println!("  Future with ask only: mid {}", engine.mids().fut_mid);

    tick(&mut engine, Instrument::Etf, 950, 0);
    println!("  ETF with bid only: mid {}", engine.mids().etf_mid);
    println!("  Quotes issued: {}", engine.drain_commands().len());

    tick(&mut engine, Instrument::Future, 0, 0);
    println!(
        "  Empty Future tick: mid unchanged at {}",
        engine.mids().fut_mid
    );

    engine.on_disconnect();
    println!("  Disconnect recorded, session over.");
}
