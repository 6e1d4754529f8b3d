//! Location and route records
//!
//! These are the persisted entities. The graph never holds on to them; it copies
//! the scalar fields it needs when it is built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypathError};

/// A named place with layout coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A stored, directed route row between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub from_location_id: String,
    pub to_location_id: String,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a location
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub description: Option<String>,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}

/// Partial update of a location; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationUpdate {
    pub name: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub x_coordinate: Option<f64>,
    pub y_coordinate: Option<f64>,
}

impl LocationUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.x_coordinate.is_none()
            && self.y_coordinate.is_none()
    }

    /// Apply the update to an existing record
    pub fn apply(&self, location: &mut Location) {
        if let Some(name) = &self.name {
            location.name = name.clone();
        }
        if let Some(description) = &self.description {
            location.description = description.clone();
        }
        if let Some(x) = self.x_coordinate {
            location.x_coordinate = x;
        }
        if let Some(y) = self.y_coordinate {
            location.y_coordinate = y;
        }
    }
}

/// Input for creating a route
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub from_location_id: String,
    pub to_location_id: String,
    pub distance: f64,
    /// Also store the mirrored `to -> from` row
    pub bidirectional: bool,
}

/// A complete set of locations and routes, as exported or imported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Validate a location name
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(WaypathError::invalid_value("location name", "(empty)"));
    }
    Ok(())
}

/// Validate a layout coordinate
pub fn validate_coordinate(axis: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(WaypathError::invalid_value(
            &format!("{} coordinate", axis),
            value,
        ));
    }
    Ok(())
}

/// Validate a route distance. Distances must be finite and strictly positive.
pub fn validate_distance(distance: f64) -> Result<()> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(WaypathError::invalid_value("distance", distance));
    }
    Ok(())
}

impl NewLocation {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_coordinate("x", self.x_coordinate)?;
        validate_coordinate("y", self.y_coordinate)
    }
}

impl LocationUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(x) = self.x_coordinate {
            validate_coordinate("x", x)?;
        }
        if let Some(y) = self.y_coordinate {
            validate_coordinate("y", y)?;
        }
        Ok(())
    }
}

/// Validate route endpoints. A route may not connect a location to itself.
pub fn validate_endpoints(from: &str, to: &str) -> Result<()> {
    if from == to {
        return Err(WaypathError::invalid_value(
            "route",
            format!("{} connects to itself", from),
        ));
    }
    Ok(())
}

impl NewRoute {
    pub fn validate(&self) -> Result<()> {
        validate_endpoints(&self.from_location_id, &self.to_location_id)?;
        validate_distance(self.distance)
    }
}
