use sales_math::{ComponentKind, SmoothingState};
use tractor_forecast::{
    forecast_path, resolve, FittedHoltWinters, ForecastError, Observation, Period, SeriesStore,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ten years of seasonal sales with steady growth
    let seasonals = vec![0.8, 0.8, 0.9, 1.0, 1.2, 1.2, 1.1, 1.0, 0.9, 0.9, 0.8, 0.9];
    let start = Period::new(2014, 1)?;
    let observations = (0..120)
        .map(|i| {
            let level = 150.0 + 2.0 * i as f64;
            let value = (level * seasonals[i as usize % 12]).round();
            Ok(Observation::new(start.add_months(i)?, value))
        })
        .collect::<Result<Vec<_>, ForecastError>>()?;
    let store = SeriesStore::new(observations)?;
    let last = store.last_period()?;
    println!("Loaded {} months through {}", store.len(), last);

    let state = SmoothingState::new(150.0 + 2.0 * 119.0)?
        .with_trend(ComponentKind::Additive, 2.0)?
        .with_seasonal(ComponentKind::Multiplicative, seasonals)?;
    let model = FittedHoltWinters::new(last, state)?.with_residual_std(12.0)?;

    for (month, year) in [("June", 2019), ("March", 2024), ("December", 2025)] {
        let target = Period::from_month_name(month, year)?;
        match resolve(target, &store, &model) {
            Ok(r) => println!("{:<16} {}: {} Units", r.source, target.long_name(), r.units()),
            Err(ForecastError::DataUnavailable { .. }) => {
                println!("{}: data not available", target.long_name())
            }
            Err(e) => return Err(e.into()),
        }
    }

    let target = Period::new(2024, 6)?;
    println!("Forecast path through {}:", target.long_name());
    for (period, value) in forecast_path(target, &store, &model)? {
        println!("  {}  {:.1}", period, value);
    }

    Ok(())
}
