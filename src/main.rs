use anyhow::Result;
use tracing::info;
use v2h_sim::{
    config::Config, report::FlexibilityReport, simulation::PeriodSimulator, telemetry,
};

fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = Config::load()?;
    let policy = cfg.simulation.policy.build();

    let mut reports = serde_json::Map::new();
    for vehicle in &cfg.vehicles {
        info!(
            vehicle = %vehicle.name,
            days = cfg.simulation.days,
            policy = ?cfg.simulation.policy,
            "starting period simulation"
        );

        let simulator = PeriodSimulator::new(
            &vehicle.battery,
            &cfg.environment,
            policy.as_ref(),
            &vehicle.schedule,
        );
        let summaries = simulator.run(cfg.simulation.days, &cfg.events);

        for (index, day) in summaries.iter().enumerate() {
            info!(
                day = index + 1,
                weekday = %day.weekday,
                discharge_kwh = day.discharge_kwh,
                charge_kwh = day.charge_kwh,
                pv_charge_kwh = day.pv_charge_kwh,
                end_soc_percent = day.end_soc_percent,
                "day complete"
            );
        }

        let report = FlexibilityReport::from_summaries(&summaries, &cfg.prices);
        info!(vehicle = %vehicle.name, total_savings = report.total_savings, "period complete");
        reports.insert(vehicle.name.clone(), serde_json::to_value(&report)?);
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(reports))?
    );
    Ok(())
}
