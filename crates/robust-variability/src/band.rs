//! Per-band aggregation of a variability index over a multi-band series
//!
//! Observations are grouped by band label into a `BTreeMap`, so bands are
//! always evaluated and reported in ascending label order. Each band is an
//! independent computation; the execution engine decides whether they run
//! sequentially or on a Rayon pool.

use crate::config::{AggregatorConfig, SparseBandPolicy};
use crate::stetson_j::StetsonJ;
use crate::types::{BandReport, Observation};
use robust_core::{
    Error, ExecutionEngine, Numeric, Result, SequentialEngine, VariabilityEstimator,
};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{debug, instrument, warn};

/// Fluxes and errors of a single band, in observation order
#[derive(Debug, Clone, PartialEq)]
pub struct BandSeries<T = f64> {
    pub fluxes: Vec<T>,
    pub errors: Vec<T>,
}

impl<T> Default for BandSeries<T> {
    fn default() -> Self {
        Self {
            fluxes: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> BandSeries<T> {
    pub fn len(&self) -> usize {
        self.fluxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fluxes.is_empty()
    }

    fn push(&mut self, flux: T, err: T) {
        self.fluxes.push(flux);
        self.errors.push(err);
    }
}

/// Partition observations by band, sorted ascending by label
pub fn group_by_band<B, T>(observations: &[Observation<B, T>]) -> BTreeMap<B, BandSeries<T>>
where
    B: Ord + Clone,
    T: Copy,
{
    let mut groups: BTreeMap<B, BandSeries<T>> = BTreeMap::new();
    for obs in observations {
        groups
            .entry(obs.band.clone())
            .or_default()
            .push(obs.flux, obs.flux_err);
    }
    groups
}

/// Partition parallel band/flux/error columns by band
pub fn group_columns_by_band<B, T>(
    bands: &[B],
    fluxes: &[T],
    errors: &[T],
) -> Result<BTreeMap<B, BandSeries<T>>>
where
    B: Ord + Clone,
    T: Copy,
{
    if fluxes.len() != bands.len() {
        return Err(Error::size_mismatch(bands.len(), fluxes.len(), "flux column"));
    }
    if errors.len() != bands.len() {
        return Err(Error::size_mismatch(bands.len(), errors.len(), "flux error column"));
    }

    let mut groups: BTreeMap<B, BandSeries<T>> = BTreeMap::new();
    for ((band, &flux), &err) in bands.iter().zip(fluxes).zip(errors) {
        groups.entry(band.clone()).or_default().push(flux, err);
    }
    Ok(groups)
}

/// Evaluates a variability index once per band
///
/// # Example
///
/// ```rust
/// use robust_variability::{BandAggregator, Observation};
///
/// let observations = vec![
///     Observation::new("g", 5.0, 1.0),
///     Observation::new("g", 5.0, 1.0),
///     Observation::new("r", 1.0, 1.0),
///     Observation::new("r", 10.0, 1.0),
///     Observation::new("r", 1.0, 1.0),
/// ];
///
/// let stats = BandAggregator::new().aggregate(&observations).unwrap();
/// assert_eq!(stats.len(), 2);
/// assert!(stats["r"] > stats["g"]);
/// ```
#[derive(Debug, Clone)]
pub struct BandAggregator<V = StetsonJ, E = SequentialEngine> {
    estimator: V,
    engine: E,
    config: AggregatorConfig,
}

impl BandAggregator {
    /// Stetson J per band, evaluated sequentially, failing on sparse bands
    pub fn new() -> Self {
        Self::with_estimator(StetsonJ::new())
    }
}

impl Default for BandAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BandAggregator<V, SequentialEngine> {
    /// Aggregate an arbitrary variability index
    pub fn with_estimator(estimator: V) -> Self {
        Self {
            estimator,
            engine: SequentialEngine::new(),
            config: AggregatorConfig::default(),
        }
    }
}

impl<V, E> BandAggregator<V, E> {
    /// Swap the execution engine
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> BandAggregator<V, E2> {
        BandAggregator {
            estimator: self.estimator,
            engine,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_sparse_band_policy(mut self, policy: SparseBandPolicy) -> Self {
        self.config.sparse_band_policy = policy;
        self
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn estimator(&self) -> &V {
        &self.estimator
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Index value per band
    pub fn aggregate<B, T>(&self, observations: &[Observation<B, T>]) -> Result<BTreeMap<B, T>>
    where
        B: Ord + Clone + Display + Send + Sync,
        T: Numeric,
        V: VariabilityEstimator<T>,
        E: ExecutionEngine,
    {
        self.aggregate_report(observations)
            .map(BandReport::into_statistics)
    }

    /// Index value per band, plus the bands that were skipped
    pub fn aggregate_report<B, T>(
        &self,
        observations: &[Observation<B, T>],
    ) -> Result<BandReport<B, T>>
    where
        B: Ord + Clone + Display + Send + Sync,
        T: Numeric,
        V: VariabilityEstimator<T>,
        E: ExecutionEngine,
    {
        self.evaluate(group_by_band(observations))
    }

    /// Index value per band from parallel columns
    pub fn aggregate_columns<B, T>(
        &self,
        bands: &[B],
        fluxes: &[T],
        errors: &[T],
    ) -> Result<BTreeMap<B, T>>
    where
        B: Ord + Clone + Display + Send + Sync,
        T: Numeric,
        V: VariabilityEstimator<T>,
        E: ExecutionEngine,
    {
        self.aggregate_columns_report(bands, fluxes, errors)
            .map(BandReport::into_statistics)
    }

    /// Column variant of [`aggregate_report`](Self::aggregate_report)
    pub fn aggregate_columns_report<B, T>(
        &self,
        bands: &[B],
        fluxes: &[T],
        errors: &[T],
    ) -> Result<BandReport<B, T>>
    where
        B: Ord + Clone + Display + Send + Sync,
        T: Numeric,
        V: VariabilityEstimator<T>,
        E: ExecutionEngine,
    {
        self.evaluate(group_columns_by_band(bands, fluxes, errors)?)
    }

    #[instrument(level = "debug", skip_all, fields(n_bands = groups.len(), index = self.estimator.name()))]
    fn evaluate<B, T>(&self, groups: BTreeMap<B, BandSeries<T>>) -> Result<BandReport<B, T>>
    where
        B: Ord + Clone + Display + Send + Sync,
        T: Numeric,
        V: VariabilityEstimator<T>,
        E: ExecutionEngine,
    {
        let min_points = self.estimator.min_points();
        let mut eligible = Vec::with_capacity(groups.len());
        let mut skipped = Vec::new();

        for (band, series) in groups {
            if series.len() >= min_points {
                eligible.push((band, series));
                continue;
            }
            match self.config.sparse_band_policy {
                SparseBandPolicy::Error => {
                    return Err(Error::for_band(
                        &band,
                        Error::insufficient_points(min_points, series.len()),
                    ));
                }
                SparseBandPolicy::Skip => {
                    warn!(
                        band = %band,
                        n_points = series.len(),
                        min_points,
                        "skipping band with too few observations"
                    );
                    skipped.push((band, series.len()));
                }
            }
        }

        let results = self.engine.execute_batch(eligible.len(), |i| {
            let (band, series) = &eligible[i];
            self.estimator
                .compute(&series.fluxes, &series.errors)
                .map_err(|e| Error::for_band(band, e))
        });

        let mut statistics = BTreeMap::new();
        for ((band, _), result) in eligible.into_iter().zip(results) {
            let value = result?;
            debug!(band = %band, %value, "band evaluated");
            statistics.insert(band, value);
        }

        Ok(BandReport {
            statistics,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_band_observations() -> Vec<Observation<&'static str>> {
        let mut obs = Vec::new();
        for flux in [5.0, 5.0, 5.0] {
            obs.push(Observation::new("A", flux, 1.0));
        }
        for flux in [1.0, 10.0, 1.0] {
            obs.push(Observation::new("B", flux, 1.0));
        }
        obs
    }

    #[test]
    fn test_two_bands() {
        let stats = BandAggregator::new()
            .aggregate(&two_band_observations())
            .unwrap();

        assert_eq!(stats.keys().copied().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_abs_diff_eq!(stats["A"], -1.0, epsilon = 1e-12);
        assert!(stats["B"] > stats["A"] + 1.0);
    }

    #[test]
    fn test_group_by_band_sorts_and_keeps_order_within_band() {
        let obs = vec![
            Observation::new("r", 1.0, 0.1),
            Observation::new("g", 2.0, 0.2),
            Observation::new("r", 3.0, 0.3),
        ];
        let groups = group_by_band(&obs);
        let bands: Vec<_> = groups.keys().copied().collect();
        assert_eq!(bands, vec!["g", "r"]);
        assert_eq!(groups["r"].fluxes, vec![1.0, 3.0]);
        assert_eq!(groups["r"].errors, vec![0.1, 0.3]);
    }

    #[test]
    fn test_sparse_band_fails_by_default() {
        let mut obs = two_band_observations();
        obs.push(Observation::new("C", 3.0, 1.0));

        let err = BandAggregator::new().aggregate(&obs).unwrap_err();
        match &err {
            Error::Band { band, source } => {
                assert_eq!(band, "C");
                assert!(matches!(
                    **source,
                    Error::InvalidInputSize { expected: 2, actual: 1 }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sparse_band_skipped_when_lenient() {
        let mut obs = two_band_observations();
        obs.push(Observation::new("C", 3.0, 1.0));

        let report = BandAggregator::new()
            .with_sparse_band_policy(SparseBandPolicy::Skip)
            .aggregate_report(&obs)
            .unwrap();

        assert_eq!(report.statistics.len(), 2);
        assert_eq!(report.skipped, vec![("C", 1)]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_invalid_uncertainty_names_band() {
        let mut obs = two_band_observations();
        obs.push(Observation::new("B", 2.0, 0.0));

        let err = BandAggregator::new().aggregate(&obs).unwrap_err();
        assert!(err.to_string().starts_with("Band 'B'"));
        assert!(matches!(err.root(), Error::InvalidUncertainty { .. }));
    }

    #[test]
    fn test_columns_match_records() {
        let obs = two_band_observations();
        let bands: Vec<_> = obs.iter().map(|o| o.band).collect();
        let fluxes: Vec<_> = obs.iter().map(|o| o.flux).collect();
        let errors: Vec<_> = obs.iter().map(|o| o.flux_err).collect();

        let aggregator = BandAggregator::new();
        let from_columns = aggregator
            .aggregate_columns(&bands, &fluxes, &errors)
            .unwrap();
        let from_records = aggregator.aggregate(&obs).unwrap();
        assert_eq!(from_columns, from_records);
    }

    #[test]
    fn test_column_length_mismatch() {
        let err = BandAggregator::new()
            .aggregate_columns(&["g", "g"], &[1.0, 2.0], &[1.0])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        let obs: Vec<Observation<String>> = Vec::new();
        let stats = BandAggregator::new().aggregate(&obs).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_integer_band_labels() {
        let obs = vec![
            Observation::new(2u8, 1.0, 1.0),
            Observation::new(1u8, 1.0, 1.0),
            Observation::new(2u8, 1.0, 1.0),
            Observation::new(1u8, 1.0, 1.0),
        ];
        let stats = BandAggregator::new().aggregate(&obs).unwrap();
        assert_eq!(stats.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Flux(f64);

    #[test]
    fn test_grouping_needs_no_default_values() {
        let obs = vec![
            Observation::new("B", Flux(1.0), Flux(1.0)),
            Observation::new("A", Flux(5.0), Flux(1.0)),
            Observation::new("B", Flux(2.0), Flux(1.0)),
        ];
        let groups = group_by_band(&obs);
        assert_eq!(groups["A"].fluxes, vec![Flux(5.0)]);
        assert_eq!(groups["B"].fluxes, vec![Flux(1.0), Flux(2.0)]);

        let groups = group_columns_by_band(
            &["x", "x"],
            &[Flux(3.0), Flux(4.0)],
            &[Flux(0.1), Flux(0.2)],
        )
        .unwrap();
        assert_eq!(groups["x"].errors, vec![Flux(0.1), Flux(0.2)]);
        assert_eq!(BandSeries::<Flux>::default().len(), 0);
    }

    #[test]
    fn test_constant_and_variable_bands() {
        let stats = BandAggregator::new()
            .aggregate(&two_band_observations())
            .unwrap();
        assert_abs_diff_eq!(stats["A"], -1.0, epsilon = 1e-12);
        assert!(stats["B"] > 0.0);
    }
}
