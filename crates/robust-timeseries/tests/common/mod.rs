//! Shared fixtures for time series tests

use robust_timeseries::Column;
use std::collections::HashMap;

pub const EPSILON: f64 = 1e-10;

/// Named columns in survey-style naming
pub fn survey_columns() -> HashMap<String, Column> {
    let mut bands = Vec::new();
    let mut flux = Vec::new();
    let mut err = Vec::new();
    let mut time = Vec::new();

    // r band is constant, g band alternates far beyond its errors
    for i in 0..8 {
        let t = i as f64;
        bands.push("r");
        flux.push(50.0);
        err.push(1.0);
        time.push(t);

        bands.push("g");
        flux.push(if i % 2 == 0 { 30.0 } else { 70.0 });
        err.push(1.0);
        time.push(t + 0.5);
    }

    let mut columns = HashMap::new();
    columns.insert("mjd".to_string(), Column::from(time));
    columns.insert("psf_flux".to_string(), Column::from(flux));
    columns.insert("psf_flux_err".to_string(), Column::from(err));
    columns.insert("filter".to_string(), Column::from(bands));
    columns
}

#[allow(dead_code)]
pub fn survey_colmap() -> robust_timeseries::ColumnMap {
    robust_timeseries::ColumnMap::new()
        .with_time("mjd")
        .with_flux("psf_flux")
        .with_flux_err("psf_flux_err")
        .with_band("filter")
}
