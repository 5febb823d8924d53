//! The create-voyage form draft and its validation contract.
//!
//! VALIDATION
//! ==========
//! `VoyageDraft::validate` is a synchronous pure function over the full
//! draft plus the fetched option lists. It either yields a wire-ready
//! `CreateVoyagePayload` (timestamps normalized to RFC 3339) or the full set
//! of field errors; submission is blocked entirely while any field fails.
//! The cross-field departure/arrival ordering failure attaches to the
//! `arrival` field.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{CreateVoyagePayload, UnitType, VesselOption};
use crate::util::dates;

/// Transient state of the not-yet-persisted voyage being edited.
///
/// Departure/arrival hold raw `datetime-local` input values; `vessel` holds
/// the selected vessel id (empty string while unselected); `unit_types`
/// holds the selected unit-type ids and is replaced wholesale on each
/// multi-select change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoyageDraft {
    pub departure: String,
    pub arrival: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: String,
    pub unit_types: Vec<String>,
}

/// One optional human-readable message per form field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub port_of_loading: Option<String>,
    pub port_of_discharge: Option<String>,
    pub vessel: Option<String>,
    pub unit_types: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.departure.is_none()
            && self.arrival.is_none()
            && self.port_of_loading.is_none()
            && self.port_of_discharge.is_none()
            && self.vessel.is_none()
            && self.unit_types.is_none()
    }
}

impl VoyageDraft {
    /// Discard the draft, returning every field to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the whole draft against the fetched option lists.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with a message on every failing field.
    pub fn validate(
        &self,
        vessels: &[VesselOption],
        unit_types: &[UnitType],
    ) -> Result<CreateVoyagePayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let departure = if self.departure.is_empty() {
            errors.departure = Some("Departure is required".to_owned());
            None
        } else {
            let parsed = dates::parse_datetime_local(&self.departure);
            if parsed.is_none() {
                errors.departure = Some("Departure is not a valid date and time".to_owned());
            }
            parsed
        };

        let arrival = if self.arrival.is_empty() {
            errors.arrival = Some("Arrival is required".to_owned());
            None
        } else {
            let parsed = dates::parse_datetime_local(&self.arrival);
            if parsed.is_none() {
                errors.arrival = Some("Arrival is not a valid date and time".to_owned());
            }
            parsed
        };

        if let (Some(dep), Some(arr)) = (departure, arrival) {
            if dep >= arr {
                errors.arrival = Some(
                    "Departure date and time should be before arrival date and time".to_owned(),
                );
            }
        }

        if self.port_of_loading.is_empty() {
            errors.port_of_loading = Some("Port of loading is required".to_owned());
        }
        if self.port_of_discharge.is_empty() {
            errors.port_of_discharge = Some("Port of discharge is required".to_owned());
        }

        if self.vessel.is_empty() {
            errors.vessel = Some("Vessel is required".to_owned());
        } else if !vessels.iter().any(|v| v.value == self.vessel) {
            errors.vessel = Some("Vessel must be chosen from the vessel list".to_owned());
        }

        if self.unit_types.is_empty() {
            errors.unit_types = Some("Unit types are required".to_owned());
        } else if !self
            .unit_types
            .iter()
            .all(|id| unit_types.iter().any(|ut| &ut.id == id))
        {
            errors.unit_types =
                Some("Unit types must be chosen from the unit type list".to_owned());
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(dep), Some(arr)) = (departure, arrival) else {
            return Err(errors);
        };
        let Some(departure_wire) = dates::to_rfc3339(dep) else {
            errors.departure = Some("Departure is not a valid date and time".to_owned());
            return Err(errors);
        };
        let Some(arrival_wire) = dates::to_rfc3339(arr) else {
            errors.arrival = Some("Arrival is not a valid date and time".to_owned());
            return Err(errors);
        };

        Ok(CreateVoyagePayload {
            departure: departure_wire,
            arrival: arrival_wire,
            port_of_loading: self.port_of_loading.clone(),
            port_of_discharge: self.port_of_discharge.clone(),
            vessel: self.vessel.clone(),
            unit_types: self.unit_types.clone(),
        })
    }
}
