use rstest::rstest;
use vehicle_tco::{
    engine::{compare, loan::monthly_payment, ComparisonOutput},
    input::ComparisonRequest,
    validation::{validate_comparison, ViolationKind},
};

fn run(json: &str) -> ComparisonOutput {
    let request = ComparisonRequest::from_json(json).expect("request json");
    let input = validate_comparison(&request).expect("valid request");
    compare(&input)
}

const SCENARIO_AB: &str = r#"{
    "vehicles": [
        {"id": "ice", "name": "Honda Freed", "type": "ICE", "purchasePrice": 600000,
         "fuelPricePerLiter": 30, "fuelEfficiencyKmPerLiter": 12, "monthlyKm": 1000},
        {"id": "ev", "name": "MG4", "type": "EV", "purchasePrice": 709900,
         "electricityPricePerKwh": 5.5, "energyConsumptionKwhPer100km": 13.5, "monthlyKm": 1000}
    ],
    "horizonYears": 5,
    "annualKm": 20000
}"#;

const FINANCED: &str = r#"{
    "vehicles": [
        {"id": "a", "name": "City", "type": "ICE", "purchasePrice": 609000, "downPayment": 120000,
         "resaleValue": 280000, "loanTermYears": 4, "interestRateAnnualPct": 2.49,
         "annualMaintenanceTHB": 7000, "fuelPricePerLiter": 35.5, "fuelEfficiencyKmPerLiter": 17.5},
        {"id": "b", "name": "Dolphin", "type": "EV", "purchasePrice": 699999, "downPayment": 100000,
         "resaleValue": 300000, "loanTermYears": 7, "interestRateAnnualPct": 1.99,
         "annualMaintenanceTHB": 3500, "electricityPricePerKwh": 4.5,
         "rangeKmPerCharge": 410, "batteryCapacityKwh": 44.9, "annualKm": 25000},
        {"id": "c", "name": "Cash car", "type": "ICE", "purchasePrice": 500000,
         "fuelPricePerLiter": 33, "fuelEfficiencyKmPerLiter": 14, "interestRateAnnualPct": 5}
    ],
    "horizonYears": 6,
    "annualKm": 15000,
    "discountRatePct": 3
}"#;

#[test]
fn scenario_a_ice_totals() {
    let out = run(SCENARIO_AB);
    let ice = &out.results[0];
    assert_eq!(ice.effective_annual_km, 12000.0);
    assert!((ice.yearly[0].fuel_or_electricity - 30000.0).abs() < 1e-9);
    assert!((ice.total_fuel_or_electricity - 150000.0).abs() < 1e-6);
    assert!((ice.total_cost - 750000.0).abs() < 1e-6);
    assert!((ice.cost_per_km.unwrap() - 12.5).abs() < 1e-9);
}

#[test]
fn scenario_b_ev_totals() {
    let out = run(SCENARIO_AB);
    let ev = &out.results[1];
    assert!((ev.yearly[0].fuel_or_electricity - 8910.0).abs() < 1e-9);
    assert!((ev.total_fuel_or_electricity - 44550.0).abs() < 1e-6);
    assert!((ev.total_cost - 754450.0).abs() < 1e-6);
    assert_eq!(out.cheapest().map(|r| r.vehicle_id.as_str()), Some("ice"));
}

#[test]
fn scenario_c_single_vehicle_is_rejected() {
    let request = ComparisonRequest::from_json(
        r#"{"vehicles": [{"id": "x", "name": "X", "type": "ICE", "purchasePrice": 1,
            "fuelPricePerLiter": 30, "fuelEfficiencyKmPerLiter": 12}], "annualKm": 1000}"#,
    )
    .unwrap();
    let errors = validate_comparison(&request).unwrap_err();
    assert!(errors.has("vehicles", ViolationKind::TooFewVehicles));
}

#[test]
fn scenario_d_ev_without_energy_basis_is_rejected() {
    let request = ComparisonRequest::from_json(
        r#"{"vehicles": [
            {"id": "x", "name": "X", "type": "ICE", "purchasePrice": 1,
             "fuelPricePerLiter": 30, "fuelEfficiencyKmPerLiter": 12},
            {"id": "y", "name": "Y", "type": "EV", "purchasePrice": 1, "electricityPricePerKwh": 5}
        ], "annualKm": 1000}"#,
    )
    .unwrap();
    let errors = validate_comparison(&request).unwrap_err();
    assert!(errors.has(
        "vehicles[1].energyConsumptionKwhPer100km",
        ViolationKind::MissingEnergyBasis
    ));
}

#[test]
fn results_follow_input_order_and_ids() {
    let out = run(FINANCED);
    let ids: Vec<&str> = out.results.iter().map(|r| r.vehicle_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn every_vehicle_has_one_entry_per_year() {
    let out = run(FINANCED);
    for r in &out.results {
        let years: Vec<u32> = r.yearly.iter().map(|y| y.year).collect();
        assert_eq!(years, (1..=6).collect::<Vec<_>>());
    }
}

#[test]
fn compare_is_idempotent() {
    let request = ComparisonRequest::from_json(FINANCED).unwrap();
    let input = validate_comparison(&request).unwrap();
    assert_eq!(compare(&input), compare(&input));
}

#[test]
fn depreciation_sums_to_net_capital_cost() {
    let out = run(FINANCED);
    let expected = [609000.0 - 280000.0, 699999.0 - 300000.0, 500000.0];
    for (r, want) in out.results.iter().zip(expected) {
        let sum: f64 = r.yearly.iter().map(|y| y.depreciation).sum();
        assert!((sum - want).abs() <= 0.01 * 6.0, "{}: {sum} vs {want}", r.vehicle_id);
    }
}

#[test]
fn cumulative_total_never_decreases() {
    let out = run(FINANCED);
    for r in &out.results {
        for pair in r.yearly.windows(2) {
            assert!(pair[1].cumulative_total >= pair[0].cumulative_total);
        }
    }
}

#[rstest]
#[case::global_zero(0.0, None, None)]
#[case::own_annual_zero(15000.0, Some(0.0), None)]
#[case::own_monthly(0.0, None, Some(500.0))]
#[case::global_positive(15000.0, None, None)]
fn cost_per_km_is_null_only_without_distance(
    #[case] global_km: f64,
    #[case] annual_km: Option<f64>,
    #[case] monthly_km: Option<f64>,
) {
    let mut request = ComparisonRequest::from_json(SCENARIO_AB).unwrap();
    request.annual_km = Some(global_km);
    for v in &mut request.vehicles {
        let base = v.base_mut();
        base.annual_km = annual_km;
        base.monthly_km = monthly_km;
    }
    let out = compare(&validate_comparison(&request).unwrap());
    for r in &out.results {
        let distance = r.effective_annual_km * 5.0;
        assert_eq!(r.cost_per_km.is_none(), distance == 0.0);
    }
}

#[test]
fn no_loan_term_means_no_payments() {
    let out = run(FINANCED);
    let cash = &out.results[2];
    assert_eq!(cash.total_loan_payments, 0.0);
    assert_eq!(cash.monthly_loan_payment, 0.0);
    assert!(cash.yearly.iter().all(|y| y.loan == 0.0));
}

#[test]
fn zero_interest_splits_principal_evenly() {
    assert_eq!(monthly_payment(480000.0, 0.0, 4), 480000.0 / 48.0);
}

#[test]
fn loan_payments_stop_after_term_and_are_clipped_to_horizon() {
    let out = run(FINANCED);
    let a = &out.results[0];
    let monthly = monthly_payment(489000.0, 2.49, 4);
    assert!((a.monthly_loan_payment - monthly).abs() < 1e-9);
    assert!(a.yearly[..4].iter().all(|y| (y.loan - monthly * 12.0).abs() < 1e-9));
    assert!(a.yearly[4..].iter().all(|y| y.loan == 0.0));

    // 7년 할부, 6년 분석: 마지막 1년치는 포함되지 않는다
    let b = &out.results[1];
    let monthly_b = monthly_payment(599999.0, 1.99, 7);
    assert!((b.total_loan_payments - monthly_b * 72.0).abs() < 1e-6);
}

#[test]
fn total_cost_adds_net_capital_once() {
    let out = run(FINANCED);
    for r in &out.results {
        let parts = r.total_fuel_or_electricity + r.total_maintenance + r.total_loan_payments;
        let yearly_dep: f64 = r.yearly.iter().map(|y| y.depreciation).sum();
        assert!((r.total_cost - (parts + yearly_dep)).abs() < 1e-6);
        assert!((r.net_capital_cost() - yearly_dep).abs() < 1e-6);
    }
}

#[test]
fn derived_ev_consumption_uses_range_and_battery() {
    let out = run(FINANCED);
    let b = &out.results[1];
    assert_eq!(b.effective_annual_km, 25000.0);
    let kwh_per_100 = 44.9 / 410.0 * 100.0;
    let expected = 25000.0 / 100.0 * kwh_per_100 * 4.5;
    assert!((b.yearly[0].fuel_or_electricity - expected).abs() < 1e-6);
}

#[test]
fn output_json_uses_camel_case_and_null_cost_per_km() {
    let mut request = ComparisonRequest::from_json(SCENARIO_AB).unwrap();
    request.annual_km = Some(0.0);
    for v in &mut request.vehicles {
        v.base_mut().monthly_km = None;
    }
    let out = compare(&validate_comparison(&request).unwrap());
    let json: serde_json::Value = serde_json::from_str(&out.to_json_pretty().unwrap()).unwrap();
    let first = &json["results"][0];
    assert_eq!(first["vehicleId"], "ice");
    assert_eq!(first["type"], "ICE");
    assert!(first["costPerKm"].is_null());
    assert_eq!(first["yearly"][0]["year"], 1);
    assert!(first["yearly"][0].get("cumulativeTotal").is_some());
}
