use sales_math::MathError;
use std::io;
use tractor_forecast::{ForecastError, Period};

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    assert!(matches!(ForecastError::from(io_error), ForecastError::Io(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(ForecastError::from(json_error), ForecastError::Json(_)));

    let math_error = MathError::InvalidInput("horizon".to_string());
    assert!(matches!(ForecastError::from(math_error), ForecastError::Math(_)));
}

#[test]
fn test_error_display() {
    let target = Period::new(2019, 6).unwrap();
    let last = Period::new(2023, 12).unwrap();

    let error = ForecastError::DataUnavailable { target, last };
    assert_eq!(
        error.to_string(),
        "Data not available for 2019-06 (last observation 2023-12)"
    );

    assert_eq!(ForecastError::EmptySeries.to_string(), "Series is empty");
    assert_eq!(
        ForecastError::NotFound(target).to_string(),
        "No observation for 2019-06"
    );

    let error = ForecastError::ModelMismatch {
        model: last,
        series: target,
    };
    assert!(error.to_string().contains("2023-12"));

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}
