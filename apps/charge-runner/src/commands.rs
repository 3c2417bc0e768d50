//! The `run` and `inspect` commands.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use ch_engine::Strategy;
use ch_gateway::HttpGateway;
use ch_output::{CsvReportWriter, ReportObserver};
use ch_snapshot::Snapshot;
use ch_tick::{
    ContinuationPolicy, Gateway, NoopObserver, RunTotals, TickController, TickControllerBuilder,
    TickObserver, TickResult,
};

use crate::config::RunnerConfig;

// ── run ───────────────────────────────────────────────────────────────────────

pub fn run(config: &RunnerConfig) -> Result<()> {
    let gateway = HttpGateway::new(&config.gateway_config())?;
    let map = gateway
        .get_map(&config.map_name)
        .with_context(|| format!("fetching map {}", config.map_name))?;

    let snapshot = Snapshot::from_map(&map);
    info!(map = %config.map_name, "{}", snapshot.summary());

    let run_config = config.run_config(map.horizon());
    info!(
        ticks = run_config.total_ticks,
        advertised = ?map.horizon(),
        seed = run_config.seed,
        strategy = ?config.strategy,
        "run configuration"
    );

    let strategy = config.strategy.build(config.engine.clone(), config.persona_table()?)?;
    let mut controller = TickControllerBuilder::new(run_config, strategy, gateway, snapshot).build()?;

    let started = Instant::now();
    let outcome = match &config.report_dir {
        Some(dir) => {
            let mut observer = ReportObserver::new(CsvReportWriter::new(dir)?);
            let outcome = drive(&mut controller, &mut observer);
            if let Some(e) = observer.take_error() {
                warn!(dir = %dir.display(), error = %e, "run report incomplete");
            } else {
                info!(dir = %dir.display(), rows = observer.rows_written(), "run report written");
            }
            outcome
        }
        None => drive(&mut controller, &mut NoopObserver),
    };

    match outcome {
        Ok(totals) => {
            info!(
                ticks = totals.ticks_played,
                score = totals.score,
                kwh_revenue = totals.kwh_revenue,
                completion = totals.completion_score,
                elapsed_s = started.elapsed().as_secs_f64(),
                "final result"
            );
            Ok(())
        }
        Err(err) => {
            if let Some(last) = err.last_totals() {
                error!(ticks = last.ticks_played, score = last.score, "run aborted; last reported score");
            }
            Err(err.into())
        }
    }
}

/// Run to completion.  On failure the observer still gets `on_run_end`
/// so partial reports are flushed.
fn drive<S, G, P, O>(controller: &mut TickController<S, G, P>, observer: &mut O) -> TickResult<RunTotals>
where
    S: Strategy,
    G: Gateway,
    P: ContinuationPolicy,
    O: TickObserver,
{
    let outcome = controller.run(observer);
    if outcome.is_err() {
        observer.on_run_end(controller.tick(), controller.totals());
    }
    outcome
}

// ── inspect ───────────────────────────────────────────────────────────────────

pub fn inspect(config: &RunnerConfig) -> Result<()> {
    let gateway = HttpGateway::new(&config.gateway_config())?;

    let map_config = gateway
        .get_map_config(&config.map_name)
        .with_context(|| format!("fetching map config for {}", config.map_name))?;
    println!("map:          {}", config.map_name);
    println!("total ticks:  {}", optional(map_config.ticks));
    println!("max cars:     {}", optional(map_config.max_cars));
    let keys: Vec<&str> = map_config.other.keys().map(String::as_str).collect();
    if !keys.is_empty() {
        println!("other keys:   {}", keys.join(", "));
    }

    let map = gateway
        .get_map(&config.map_name)
        .with_context(|| format!("fetching map {}", config.map_name))?;
    let summary = Snapshot::from_map(&map).summary();
    println!();
    println!("nodes:        {}", summary.nodes);
    println!("stations:     {}", summary.stations);
    println!("customers:    {}", summary.customers);
    println!("horizon:      {}", optional(map.horizon()));

    println!();
    println!("{:<20} {:>9}", "persona", "customers");
    for (persona, count) in &summary.personas {
        println!("{persona:<20} {count:>9}");
    }

    println!();
    println!("{:<20} {:>8} {:>6}", "zone", "standard", "green");
    for (zone, stations) in &summary.zones {
        println!("{:<20} {:>8} {:>6}", zone.as_str(), stations.standard, stations.green);
    }
    Ok(())
}

fn optional(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}
