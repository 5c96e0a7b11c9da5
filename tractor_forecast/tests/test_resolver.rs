use pretty_assertions::assert_eq;
use sales_math::{SmoothingState, MAX_HORIZON};
use std::cell::RefCell;
use tractor_forecast::{
    forecast_path, resolve, FittedHoltWinters, ForecastError, ForecastModel, ForecastResult,
    Observation, Period, Result, SeriesStore, ValueSource,
};

/// Model that returns `start + 1, start + 2, ...` and records every request
#[derive(Debug)]
struct RecordingModel {
    start: f64,
    step: f64,
    calls: RefCell<Vec<usize>>,
}

impl RecordingModel {
    fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }
}

impl ForecastModel for RecordingModel {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        self.calls.borrow_mut().push(steps);
        let values = (1..=steps).map(|h| self.start + h as f64 * self.step).collect();
        ForecastResult::new(values, steps)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Model that always returns fewer values than asked for
#[derive(Debug)]
struct ShortModel;

impl ForecastModel for ShortModel {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        let values = vec![1.0; steps.saturating_sub(1)];
        let len = values.len();
        ForecastResult::new(values, len)
    }

    fn name(&self) -> &str {
        "short"
    }
}

/// Model that always fails
#[derive(Debug)]
struct FailingModel;

impl ForecastModel for FailingModel {
    fn forecast(&self, _steps: usize) -> Result<ForecastResult> {
        Err(ForecastError::DataError("model exploded".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Model that returns five more values than asked for
#[derive(Debug)]
struct GenerousModel;

impl ForecastModel for GenerousModel {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        let values: Vec<f64> = (1..=steps + 5).map(|h| h as f64 * 100.0).collect();
        ForecastResult::new(values, steps + 5)
    }

    fn name(&self) -> &str {
        "generous"
    }
}

fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).unwrap()
}

/// Monthly series from January 2014 through December 2023, value = index + 100
fn full_series(skip: Option<Period>) -> SeriesStore {
    let start = period(2014, 1);
    let observations = (0..120)
        .map(|i| Observation::new(start.add_months(i).unwrap(), 100.0 + i as f64))
        .filter(|obs| Some(obs.period) != skip);
    SeriesStore::new(observations).unwrap()
}

#[test]
fn test_historical_values_are_exact_and_skip_the_model() {
    let store = full_series(None);
    let model = RecordingModel::new(0.0, 1.0);

    for obs in store.iter() {
        let resolution = resolve(obs.period, &store, &model).unwrap();
        assert_eq!(resolution.value, obs.value);
        assert_eq!(resolution.source, ValueSource::Historical);
        assert_eq!(resolution.offset, 0);
    }

    assert!(model.calls().is_empty());
}

#[test]
fn test_future_targets_request_offset_steps_and_take_the_last() {
    let store = full_series(None);
    let last = store.last_period().unwrap();

    for offset in 1..=24 {
        let model = RecordingModel::new(500.0, 2.0);
        let target = last.add_months(offset).unwrap();
        let resolution = resolve(target, &store, &model).unwrap();

        assert_eq!(model.calls(), vec![offset as usize]);
        assert_eq!(resolution.source, ValueSource::Forecast);
        assert_eq!(resolution.offset, offset as usize);
        assert_eq!(resolution.value, 500.0 + offset as f64 * 2.0);
    }
}

#[test]
fn test_january_after_december_is_one_step() {
    let store = full_series(None);
    assert_eq!(store.last_period().unwrap(), period(2023, 12));

    let model = RecordingModel::new(40.0, 1.5);
    let resolution = resolve(period(2024, 1), &store, &model).unwrap();

    assert_eq!(model.calls(), vec![1]);
    assert_eq!(resolution.offset, 1);
    assert_eq!(resolution.value, 41.5);
}

#[test]
fn test_end_to_end_fourteen_steps() {
    let store = SeriesStore::new(vec![Observation::new(period(2023, 12), 350.0)]).unwrap();
    // 351, 352, ..., 363 then 372: fourteen steps
    #[derive(Debug)]
    struct Fixed;
    impl ForecastModel for Fixed {
        fn forecast(&self, steps: usize) -> Result<ForecastResult> {
            let mut values: Vec<f64> = (0..13).map(|i| 351.0 + i as f64).collect();
            values.push(372.0);
            values.truncate(steps);
            let len = values.len();
            ForecastResult::new(values, len)
        }
        fn name(&self) -> &str {
            "fixed"
        }
    }

    let resolution = resolve(period(2025, 2), &store, &Fixed).unwrap();
    assert_eq!(resolution.offset, 14);
    assert_eq!(resolution.value, 372.0);
    assert_eq!(resolution.units(), 372);
}

#[test]
fn test_gap_is_data_unavailable() {
    let gap = period(2019, 6);
    let store = full_series(Some(gap));
    let model = RecordingModel::new(0.0, 1.0);

    let err = resolve(gap, &store, &model).unwrap_err();
    match err {
        ForecastError::DataUnavailable { target, last } => {
            assert_eq!(target, gap);
            assert_eq!(last, period(2023, 12));
        }
        other => panic!("expected DataUnavailable, got {:?}", other),
    }
    assert!(model.calls().is_empty());
}

#[test]
fn test_before_series_start_is_data_unavailable() {
    let store = full_series(None);
    let model = RecordingModel::new(0.0, 1.0);

    let result = resolve(period(2010, 3), &store, &model);
    assert!(matches!(result, Err(ForecastError::DataUnavailable { .. })));
}

#[test]
fn test_empty_store_fails_for_every_target() {
    let store = SeriesStore::default();
    let model = RecordingModel::new(0.0, 1.0);

    for target in [period(2014, 1), period(2023, 12), period(2025, 6)] {
        assert!(matches!(
            resolve(target, &store, &model),
            Err(ForecastError::EmptySeries)
        ));
    }
    assert!(model.calls().is_empty());
}

#[test]
fn test_resolve_is_idempotent() {
    let store = full_series(None);
    let model = RecordingModel::new(10.0, 3.0);
    let target = period(2025, 7);

    let first = resolve(target, &store, &model).unwrap();
    let second = resolve(target, &store, &model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_model_failures_become_forecast_failed() {
    let store = full_series(None);

    let short = resolve(period(2024, 5), &store, &ShortModel);
    assert!(matches!(short, Err(ForecastError::ForecastFailed(_))));

    let failing = resolve(period(2024, 5), &store, &FailingModel);
    match failing {
        Err(ForecastError::ForecastFailed(msg)) => assert!(msg.contains("model exploded")),
        other => panic!("expected ForecastFailed, got {:?}", other),
    }

    // History never consults the model
    assert!(resolve(period(2020, 1), &store, &FailingModel).is_ok());
}

#[test]
fn test_forecast_path_labels_each_step() {
    let store = full_series(None);
    let model = RecordingModel::new(0.0, 10.0);

    let path = forecast_path(period(2024, 3), &store, &model).unwrap();
    assert_eq!(
        path,
        vec![
            (period(2024, 1), 10.0),
            (period(2024, 2), 20.0),
            (period(2024, 3), 30.0),
        ]
    );

    assert!(matches!(
        forecast_path(period(2023, 12), &store, &model),
        Err(ForecastError::DataUnavailable { .. })
    ));
}

#[test]
fn test_units_round_to_nearest() {
    let store = SeriesStore::new(vec![Observation::new(period(2020, 1), 12.6)]).unwrap();
    let model = RecordingModel::new(0.0, 1.0);
    let resolution = resolve(period(2020, 1), &store, &model).unwrap();
    assert_eq!(resolution.value, 12.6);
    assert_eq!(resolution.units(), 13);
}

#[test]
fn test_resolution_serializes_with_source_tag() {
    let store = full_series(None);
    let model = RecordingModel::new(0.0, 1.0);
    let resolution = resolve(period(2024, 2), &store, &model).unwrap();

    let json = serde_json::to_value(resolution).unwrap();
    assert_eq!(json["period"], "2024-02");
    assert_eq!(json["source"], "forecast");
    assert_eq!(json["offset"], 2);
}

#[test]
fn test_extra_forecast_values_are_ignored() {
    let store = full_series(None);

    let resolution = resolve(period(2024, 3), &store, &GenerousModel).unwrap();
    assert_eq!(resolution.offset, 3);
    assert_eq!(resolution.value, 300.0);

    let path = forecast_path(period(2024, 2), &store, &GenerousModel).unwrap();
    assert_eq!(path, vec![(period(2024, 1), 100.0), (period(2024, 2), 200.0)]);
}

#[test]
fn test_distant_targets_fail_instead_of_forecasting() {
    let store = full_series(None);
    let last = store.last_period().unwrap();
    let model = FittedHoltWinters::new(last, SmoothingState::new(350.0).unwrap()).unwrap();

    let edge = last.add_months(MAX_HORIZON as i64).unwrap();
    let resolution = resolve(edge, &store, &model).unwrap();
    assert_eq!(resolution.offset, MAX_HORIZON);
    assert_eq!(resolution.value, 350.0);

    let beyond = last.add_months(MAX_HORIZON as i64 + 1).unwrap();
    assert!(matches!(
        resolve(beyond, &store, &model),
        Err(ForecastError::ForecastFailed(_))
    ));

    for target in [period(i32::MAX, 12), period(100_000, 1)] {
        let recording = RecordingModel::new(0.0, 1.0);
        assert!(matches!(
            resolve(target, &store, &model),
            Err(ForecastError::ForecastFailed(_))
        ));
        assert!(matches!(
            forecast_path(target, &store, &recording),
            Err(ForecastError::ForecastFailed(_))
        ));
        assert!(recording.calls().is_empty());
    }
}
