use super::*;

use crate::net::types::GymType;

fn dummy_gym(id: i64, name: &str) -> Gym {
    Gym {
        id,
        name: name.to_owned(),
        description: None,
        gym_type: GymType::Full,
        address: None,
        city: "Boulder".to_owned(),
        state: None,
        province: None,
        country: "US".to_owned(),
        postal_code: None,
        latitude: None,
        longitude: None,
        phone: None,
        email: None,
        website: None,
        hours: None,
        has_bouldering: None,
        has_top_rope: None,
        has_lead_climbing: None,
        has_auto_belay: None,
        has_kids_area: None,
        has_training_area: None,
        has_yoga_classes: None,
        has_shower: None,
        has_parking: None,
        has_gear_rental: None,
        has_pro_shop: None,
        has_cafe: None,
        wall_height: None,
        square_feet: None,
        day_pass_price: None,
        monthly_price: None,
        yearly_price: None,
        gear_rental_price: None,
        notes: None,
        active: true,
        created_at: "2023-06-01T00:00:00Z".to_owned(),
        updated_at: "2023-06-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn fresh_store_is_loading_and_empty() {
    let state = GymsState::default();
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fetch_cycle_populates_directory() {
    let mut state = GymsState::default();
    let token = state.begin_fetch();
    state.fetch_succeeded(token, vec![dummy_gym(1, "Crux Central"), dummy_gym(2, "The Spot")]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
}

#[test]
fn fetch_failure_records_message() {
    let mut state = GymsState::default();
    let token = state.begin_fetch();
    state.fetch_failed(token, "boom".to_owned());
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn stale_success_is_discarded() {
    let mut state = GymsState::default();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();
    state.fetch_succeeded(fresh, vec![dummy_gym(2, "The Spot")]);
    state.fetch_succeeded(stale, vec![dummy_gym(1, "Crux Central")]);
    assert_eq!(state.items[0].id, 2);
}
