//! Multi-band light curve assembled from named columns

use crate::config::ColumnMap;
use crate::error::{Error, Result};
use robust_core::{ExecutionEngine, VariabilityEstimator};
use robust_variability::{BandAggregator, Observation};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A named source column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float(Vec<f64>),
    Label(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Label(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Float(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(labels: Vec<String>) -> Self {
        Self::Label(labels)
    }
}

impl From<Vec<&str>> for Column {
    fn from(labels: Vec<&str>) -> Self {
        Self::Label(labels.into_iter().map(str::to_string).collect())
    }
}

/// Light curve with per-row band labels
///
/// Rows are ordered by band label; rows sharing a band keep the order in
/// which they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    id: Option<String>,
    band: Vec<String>,
    time: Vec<f64>,
    flux: Vec<f64>,
    flux_err: Option<Vec<f64>>,
    colmap: ColumnMap,
}

impl TimeSeries {
    /// Build a series from named columns
    ///
    /// Columns not referenced by `colmap` are ignored. The band column is
    /// checked first, then time, flux and (if mapped) flux error.
    pub fn from_columns(columns: &HashMap<String, Column>, colmap: ColumnMap) -> Result<Self> {
        let band = labels(columns, &colmap.band)?;
        let n_rows = band.len();
        let time = floats(columns, &colmap.time, n_rows)?;
        let flux = floats(columns, &colmap.flux, n_rows)?;
        let flux_err = colmap
            .flux_err
            .as_deref()
            .map(|label| floats(columns, label, n_rows))
            .transpose()?;

        let mut order: Vec<usize> = (0..n_rows).collect();
        order.sort_by(|&a, &b| band[a].cmp(&band[b]));
        let reorder = |values: &[f64]| order.iter().map(|&i| values[i]).collect::<Vec<_>>();

        let series = Self {
            id: None,
            band: order.iter().map(|&i| band[i].clone()).collect(),
            time: reorder(time),
            flux: reorder(flux),
            flux_err: flux_err.map(reorder),
            colmap,
        };
        debug!(
            n_rows,
            n_bands = series.bands().len(),
            has_errors = series.flux_err.is_some(),
            "time series built"
        );
        Ok(series)
    }

    /// Attach an object identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn colmap(&self) -> &ColumnMap {
        &self.colmap
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Flux uncertainties, if the source had them
    pub fn flux_err(&self) -> Option<&[f64]> {
        self.flux_err.as_deref()
    }

    /// Band label of every row
    pub fn band(&self) -> &[String] {
        &self.band
    }

    /// Distinct band labels in ascending order
    pub fn bands(&self) -> Vec<&str> {
        let mut bands: Vec<&str> = self.band.iter().map(String::as_str).collect();
        bands.dedup();
        bands
    }

    pub fn len(&self) -> usize {
        self.flux.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flux.is_empty()
    }

    /// Rows as band-tagged observations
    pub fn observations(&self) -> Result<Vec<Observation<String>>> {
        let errors = self.flux_err.as_ref().ok_or(Error::MissingUncertainty)?;
        Ok(self
            .band
            .iter()
            .zip(&self.flux)
            .zip(errors)
            .map(|((band, &flux), &err)| Observation::new(band.clone(), flux, err))
            .collect())
    }

    /// Stetson J for every band
    pub fn stetson_j_multi(&self) -> Result<BTreeMap<String, f64>> {
        self.stetson_j_multi_with(&BandAggregator::new())
    }

    /// Per-band index using a configured aggregator
    pub fn stetson_j_multi_with<V, E>(
        &self,
        aggregator: &BandAggregator<V, E>,
    ) -> Result<BTreeMap<String, f64>>
    where
        V: VariabilityEstimator<f64>,
        E: ExecutionEngine,
    {
        let errors = self.flux_err.as_deref().ok_or(Error::MissingUncertainty)?;
        Ok(aggregator.aggregate_columns(&self.band, &self.flux, errors)?)
    }
}

fn labels<'a>(columns: &'a HashMap<String, Column>, label: &str) -> Result<&'a [String]> {
    match columns.get(label) {
        Some(Column::Label(values)) => Ok(values),
        Some(Column::Float(_)) => Err(Error::ColumnType {
            column: label.to_string(),
            expected: "labels",
        }),
        None => Err(Error::MissingColumn(label.to_string())),
    }
}

fn floats<'a>(
    columns: &'a HashMap<String, Column>,
    label: &str,
    n_rows: usize,
) -> Result<&'a [f64]> {
    let values = match columns.get(label) {
        Some(Column::Float(values)) => values,
        Some(Column::Label(_)) => {
            return Err(Error::ColumnType {
                column: label.to_string(),
                expected: "floats",
            })
        }
        None => return Err(Error::MissingColumn(label.to_string())),
    };
    if values.len() != n_rows {
        return Err(Error::ColumnLength {
            column: label.to_string(),
            expected: n_rows,
            actual: values.len(),
        });
    }
    Ok(values)
}
