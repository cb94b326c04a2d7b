//! Column mapping configuration

use serde::{Deserialize, Serialize};

/// Names of the source columns holding each logical quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub time: String,
    pub flux: String,
    /// `None` when the source carries no uncertainties
    pub flux_err: Option<String>,
    pub band: String,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time(mut self, label: impl Into<String>) -> Self {
        self.time = label.into();
        self
    }

    pub fn with_flux(mut self, label: impl Into<String>) -> Self {
        self.flux = label.into();
        self
    }

    pub fn with_flux_err(mut self, label: impl Into<String>) -> Self {
        self.flux_err = Some(label.into());
        self
    }

    /// Declare that the source has no uncertainty column
    pub fn without_flux_err(mut self) -> Self {
        self.flux_err = None;
        self
    }

    pub fn with_band(mut self, label: impl Into<String>) -> Self {
        self.band = label.into();
        self
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            time: "time".to_string(),
            flux: "flux".to_string(),
            flux_err: Some("flux_err".to_string()),
            band: "band".to_string(),
        }
    }
}
