use std::fmt;
use std::ops::Add;

use serde::Serialize;

use crate::error::{Error, Result};

/// An airport: a display name plus the region (country) it belongs to.
///
/// Locations compare by value. Two locations with the same name and region
/// denote the same graph node, regardless of where the values came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    name: String,
    region: String,
}

impl Location {
    /// Build a location, trimming surrounding whitespace from both fields.
    ///
    /// Blank names or regions are rejected.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        let region = region.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidLocation {
                message: "name must not be empty".to_string(),
            });
        }
        if region.is_empty() {
            return Err(Error::InvalidLocation {
                message: format!("region for {name} must not be empty"),
            });
        }
        Ok(Self { name, region })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region)
    }
}

/// Non-negative cost of traversing one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    /// Zero cost, the cost of a route that never leaves its start.
    pub const ZERO: Cost = Cost(0.0);

    /// Validate and wrap a raw cost.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidCost { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
