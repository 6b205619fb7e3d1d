//! End-to-end dispatch on the reference fleet and the documented edge cases.

mod common;

use common::{assert_mw, fuels, reference_request, units};
use powerplan::dispatch::{DispatchError, DispatchSummary, compute_allocation};
use powerplan::fleet::Plant;

#[test]
fn reference_fleet_at_sixty_percent_wind() {
    let req = reference_request(480.0, 60.0);
    let alloc = req.allocate(true).expect("feasible");

    assert_mw(alloc.get("windpark1"), 90.0);
    assert_mw(alloc.get("windpark2"), 21.6);
    assert_mw(alloc.get("gasfiredbig1"), 368.4);
    assert_mw(alloc.get("gasfiredbig2"), 0.0);
    assert_mw(alloc.get("gasfiredsomewhatsmaller"), 0.0);
    assert_mw(alloc.get("tj1"), 0.0);
    assert_eq!(units(alloc.total_mw()), units(480.0));
}

#[test]
fn reference_fleet_without_wind_uses_small_gas_for_the_tail() {
    let alloc = reference_request(500.0, 0.0).allocate(true).expect("feasible");

    assert_mw(alloc.get("gasfiredbig1"), 460.0);
    assert_mw(alloc.get("gasfiredbig2"), 0.0);
    assert_mw(alloc.get("gasfiredsomewhatsmaller"), 40.0);
    assert_mw(alloc.get("tj1"), 0.0);
}

#[test]
fn reference_fleet_near_capacity_runs_turbojet() {
    let alloc = reference_request(1250.0, 60.0).allocate(true).expect("feasible");

    assert_mw(alloc.get("gasfiredbig1"), 460.0);
    assert_mw(alloc.get("gasfiredbig2"), 460.0);
    assert_mw(alloc.get("gasfiredsomewhatsmaller"), 210.0);
    assert_mw(alloc.get("tj1"), 8.4);
    assert_eq!(units(alloc.total_mw()), units(1250.0));
}

#[test]
fn greedy_heuristic_misses_split_hidden_behind_minimums() {
    // 440 + 40 would work, but the first big unit takes 460 and the 20 MW
    // tail is below every idle plant's minimum once the turbojet is full.
    let err = reference_request(480.0, 0.0).allocate(true).unwrap_err();
    assert!(matches!(err, DispatchError::InfeasibleLoad { .. }));
}

#[test]
fn load_above_fleet_capacity_is_infeasible() {
    let err = reference_request(1300.0, 60.0).allocate(true).unwrap_err();
    match err {
        DispatchError::InfeasibleLoad { reason } => assert!(reason.contains("capacity")),
        other => panic!("expected InfeasibleLoad, got {other:?}"),
    }
}

#[test]
fn wind_and_gas_minimum_cannot_meet_sixty_mw() {
    let plants = [Plant::wind("wind", 100.0), Plant::gas("gas", 0.5, 20.0, 100.0)];
    let err = compute_allocation(60.0, &fuels(50.0), &plants, true).unwrap_err();
    assert!(matches!(err, DispatchError::InfeasibleLoad { .. }));
}

#[test]
fn load_equal_to_cheapest_max_leaves_others_idle() {
    let plants = [
        Plant::gas("gas", 0.5, 10.0, 100.0),
        Plant::turbojet("tj", 0.3, 0.0, 50.0),
        Plant::wind("wind", 80.0),
    ];
    let alloc = compute_allocation(40.0, &fuels(50.0), &plants, true).expect("feasible");

    assert_mw(alloc.get("wind"), 40.0);
    assert_mw(alloc.get("gas"), 0.0);
    assert_mw(alloc.get("tj"), 0.0);
}

#[test]
fn smallest_load_goes_to_cheaper_plant() {
    let plants = [
        Plant::turbojet("tj", 0.3, 0.0, 10.0),
        Plant::gas("gas", 0.5, 0.0, 10.0),
    ];
    let alloc = compute_allocation(0.1, &fuels(0.0), &plants, true).expect("feasible");

    assert_mw(alloc.get("gas"), 0.1);
    assert_mw(alloc.get("tj"), 0.0);
}

#[test]
fn unknown_kind_is_rejected_by_name() {
    let plants = [Plant::wind("wind", 10.0), Plant::new("hydro1", "hydro", 0.9, 0.0, 5.0)];
    let err = compute_allocation(5.0, &fuels(100.0), &plants, true).unwrap_err();
    match err {
        DispatchError::InvalidInput { plant, .. } => assert_eq!(plant, "hydro1"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn equal_cost_plants_fill_in_input_order() {
    let plants = [
        Plant::gas("second", 0.5, 0.0, 100.0),
        Plant::gas("first", 0.5, 0.0, 100.0),
    ];
    let alloc = compute_allocation(150.0, &fuels(0.0), &plants, true).expect("feasible");

    assert_mw(alloc.get("second"), 100.0);
    assert_mw(alloc.get("first"), 50.0);
}

#[test]
fn residual_below_every_idle_minimum_is_infeasible() {
    // greedy: wind 5, a 50, residual 5 MW; b and tj both need 30 MW to start
    let plants = [
        Plant::wind("wind", 5.0),
        Plant::gas("a", 0.5, 0.0, 50.0),
        Plant::gas("b", 0.5, 30.0, 50.0),
        Plant::turbojet("tj", 0.3, 30.0, 100.0),
    ];
    let err = compute_allocation(60.0, &fuels(100.0), &plants, true).unwrap_err();
    assert!(matches!(err, DispatchError::InfeasibleLoad { .. }));

    // a zero-minimum plant anywhere in the order absorbs the residual
    let mut plants = plants.to_vec();
    plants.push(Plant::turbojet("peaker", 0.1, 0.0, 20.0));
    let alloc = compute_allocation(60.0, &fuels(100.0), &plants, true).expect("feasible");
    assert_mw(alloc.get("a"), 50.0);
    assert_mw(alloc.get("b"), 0.0);
    assert_mw(alloc.get("peaker"), 5.0);
}

#[test]
fn carbon_toggle_changes_summary_cost() {
    let req = reference_request(480.0, 60.0);
    let with = req.allocate(true).expect("feasible");
    let without = req.allocate(false).expect("feasible");

    let cost_with = DispatchSummary::from_allocation(&with, &req.fuels, &req.plants, true)
        .expect("known kinds")
        .total_cost_per_hour;
    let cost_without = DispatchSummary::from_allocation(&without, &req.fuels, &req.plants, false)
        .expect("known kinds")
        .total_cost_per_hour;

    // 368.4 MW of gas at 0.3 t/MWh × 20 EUR/t
    assert!((cost_with - cost_without - 368.4 * 6.0).abs() < 1e-6);
}

#[test]
fn dispatch_is_deterministic() {
    let req = reference_request(777.7, 37.0);
    let a = req.allocate(true).expect("feasible");
    let b = req.allocate(true).expect("feasible");
    assert_eq!(a, b);
}

#[test]
fn huge_plant_bounds_still_dispatch() {
    let req = powerplan::fleet::DispatchRequest::new(
        10.0,
        fuels(0.0),
        vec![
            Plant::gas("a", 0.5, 0.0, 1e300),
            Plant::gas("b", 0.5, 0.0, 1e300),
        ],
    );
    assert!(req.validate().is_empty());

    let alloc = req.allocate(true).expect("feasible");
    assert_mw(alloc.get("a"), 10.0);
    assert_mw(alloc.get("b"), 0.0);
}
