use super::*;

fn vessels() -> Vec<VesselOption> {
    vec![
        VesselOption {
            value: "ves-1".to_owned(),
            label: "Crown Seaways".to_owned(),
        },
        VesselOption {
            value: "ves-2".to_owned(),
            label: "Pearl Seaways".to_owned(),
        },
    ]
}

fn unit_types() -> Vec<UnitType> {
    vec![
        UnitType {
            id: "ut-1".to_owned(),
            name: "Container 20ft".to_owned(),
            default_length: 6.0,
        },
        UnitType {
            id: "ut-2".to_owned(),
            name: "Trailer".to_owned(),
            default_length: 13.6,
        },
    ]
}

fn valid_draft() -> VoyageDraft {
    VoyageDraft {
        departure: "2024-01-01T10:00".to_owned(),
        arrival: "2024-01-02T08:00".to_owned(),
        port_of_loading: "Copenhagen".to_owned(),
        port_of_discharge: "Oslo".to_owned(),
        vessel: "ves-1".to_owned(),
        unit_types: vec!["ut-1".to_owned(), "ut-2".to_owned()],
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn empty_draft_fails_every_field() {
    let errors = VoyageDraft::default()
        .validate(&vessels(), &unit_types())
        .unwrap_err();
    assert_eq!(errors.departure.as_deref(), Some("Departure is required"));
    assert_eq!(errors.arrival.as_deref(), Some("Arrival is required"));
    assert_eq!(
        errors.port_of_loading.as_deref(),
        Some("Port of loading is required")
    );
    assert_eq!(
        errors.port_of_discharge.as_deref(),
        Some("Port of discharge is required")
    );
    assert_eq!(errors.vessel.as_deref(), Some("Vessel is required"));
    assert_eq!(errors.unit_types.as_deref(), Some("Unit types are required"));
}

#[test]
fn missing_port_of_loading_blocks_submission() {
    let draft = VoyageDraft {
        port_of_loading: String::new(),
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert_eq!(
        errors.port_of_loading.as_deref(),
        Some("Port of loading is required")
    );
    assert!(errors.departure.is_none());
}

#[test]
fn empty_unit_types_yields_required_message() {
    let draft = VoyageDraft {
        unit_types: vec![],
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert_eq!(errors.unit_types.as_deref(), Some("Unit types are required"));
}

// =============================================================
// Date parsing and ordering
// =============================================================

#[test]
fn unparseable_departure_is_rejected() {
    let draft = VoyageDraft {
        departure: "tomorrow-ish".to_owned(),
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert_eq!(
        errors.departure.as_deref(),
        Some("Departure is not a valid date and time")
    );
}

#[test]
fn arrival_before_departure_errors_on_arrival_only() {
    let draft = VoyageDraft {
        departure: "2024-01-01T10:00".to_owned(),
        arrival: "2024-01-01T08:00".to_owned(),
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert_eq!(
        errors.arrival.as_deref(),
        Some("Departure date and time should be before arrival date and time")
    );
    assert!(errors.departure.is_none());
    assert!(errors.port_of_loading.is_none());
    assert!(errors.port_of_discharge.is_none());
    assert!(errors.vessel.is_none());
    assert!(errors.unit_types.is_none());
}

#[test]
fn arrival_equal_to_departure_is_rejected() {
    let draft = VoyageDraft {
        departure: "2024-01-01T10:00".to_owned(),
        arrival: "2024-01-01T10:00".to_owned(),
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert!(errors.arrival.is_some());
}

// =============================================================
// Option-list membership
// =============================================================

#[test]
fn unknown_vessel_is_rejected() {
    let draft = VoyageDraft {
        vessel: "ves-99".to_owned(),
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert_eq!(
        errors.vessel.as_deref(),
        Some("Vessel must be chosen from the vessel list")
    );
}

#[test]
fn unknown_unit_type_is_rejected() {
    let draft = VoyageDraft {
        unit_types: vec!["ut-1".to_owned(), "ut-99".to_owned()],
        ..valid_draft()
    };
    let errors = draft.validate(&vessels(), &unit_types()).unwrap_err();
    assert_eq!(
        errors.unit_types.as_deref(),
        Some("Unit types must be chosen from the unit type list")
    );
}

// =============================================================
// Successful validation
// =============================================================

#[test]
fn valid_draft_yields_normalized_payload() {
    let payload = valid_draft().validate(&vessels(), &unit_types()).unwrap();
    assert_eq!(payload.departure, "2024-01-01T10:00:00Z");
    assert_eq!(payload.arrival, "2024-01-02T08:00:00Z");
    assert_eq!(payload.port_of_loading, "Copenhagen");
    assert_eq!(payload.port_of_discharge, "Oslo");
    assert_eq!(payload.vessel, "ves-1");
    assert_eq!(payload.unit_types, vec!["ut-1", "ut-2"]);
}

#[test]
fn reset_returns_draft_to_empty() {
    let mut draft = valid_draft();
    draft.reset();
    assert_eq!(draft, VoyageDraft::default());
}
