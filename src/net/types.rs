//! Records exchanged with the backend API.
//!
//! Field names follow the backend's camelCase JSON. The two selector option
//! shapes are deliberately distinct types (`VesselOption` with
//! `value`/`label`, `UnitType` with `id`/`name`) so a field-name mismatch is
//! a compile error rather than a silent `undefined`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A scheduled transit between two ports, as returned by
/// `GET /api/voyage/getAll`. Timestamps are RFC 3339 strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id: String,
    pub scheduled_departure: String,
    pub scheduled_arrival: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: VesselSummary,
    pub unit_types: Vec<UnitType>,
}

/// The vessel embedded in a voyage row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselSummary {
    pub id: String,
    pub name: String,
}

/// A vessel selector option from `GET /api/vessel/getAll`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselOption {
    pub value: String,
    pub label: String,
}

/// A cargo unit category from `GET /api/unitType/getAll`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    pub id: String,
    pub name: String,
    pub default_length: f64,
}

/// Body for `POST /api/voyage/create`: a validated draft with
/// departure/arrival already normalized to RFC 3339.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoyagePayload {
    pub departure: String,
    pub arrival: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: String,
    pub unit_types: Vec<String>,
}
