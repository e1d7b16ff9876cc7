//! 비교 엔진. 검증된 요청을 받아 차량별 연도별 비용과 합계를 만든다.
//!
//! 순수 함수이며 입력을 변경하지 않는다. 0 주행거리, 할부 없음 같은 경우는
//! 오류가 아니라 0 또는 None으로 정의된 값으로 처리된다.

use super::energy::annual_energy_cost;
use super::loan::LoanSchedule;
use super::result::{ComparisonOutput, VehicleResultSummary, YearlyBreakdown};
use crate::currency::round2;
use crate::vehicle::{ComparisonInput, Vehicle, VehicleBase};

/// 차량의 실효 연간 주행거리 (연간 → 월간x12 → 전역 순).
pub fn effective_annual_km(vehicle: &Vehicle, global_annual_km: f64) -> f64 {
    vehicle.ownership().distance.resolve(global_annual_km)
}

/// 연도별 감가 배분액 = (구매가 - 잔존가치) / 기간.
pub fn depreciation_share(base: &VehicleBase, horizon_years: u32) -> f64 {
    if horizon_years == 0 {
        return 0.0;
    }
    base.net_capital_cost() / horizon_years as f64
}

/// 입력 순서대로 차량마다 결과 하나씩을 만든다.
pub fn compare(input: &ComparisonInput) -> ComparisonOutput {
    let results = input
        .vehicles
        .iter()
        .map(|v| summarize(v, input.annual_km, input.horizon_years))
        .collect();
    ComparisonOutput { results }
}

fn summarize(vehicle: &Vehicle, global_annual_km: f64, horizon_years: u32) -> VehicleResultSummary {
    let annual_km = effective_annual_km(vehicle, global_annual_km);
    let annual_energy = annual_energy_cost(vehicle, annual_km);
    let summary = project(vehicle, annual_energy, annual_km, horizon_years);
    tracing::debug!(
        id = %summary.vehicle_id,
        kind = %summary.kind,
        annual_km,
        annual_energy,
        total_cost = summary.total_cost,
        "vehicle projected"
    );
    summary
}

/// 차종별 연간 에너지 비용이 정해진 뒤의 공통 계산 (할부, 정비, 감가, 합계).
fn project(
    vehicle: &Vehicle,
    annual_energy: f64,
    annual_km: f64,
    horizon_years: u32,
) -> VehicleResultSummary {
    let base = vehicle.base();
    let ownership = vehicle.ownership();
    let maintenance = ownership.annual_maintenance;
    let loan = LoanSchedule::build(base.loan_principal(), ownership.loan.as_ref(), horizon_years);
    let depreciation = depreciation_share(base, horizon_years);

    // 누적은 반올림 전 값으로 하고, 내보낼 때만 반올림한다
    let mut cumulative = 0.0;
    let yearly: Vec<YearlyBreakdown> = (1..=horizon_years)
        .map(|year| {
            let loan_y = loan.payment_in_year(year);
            cumulative += annual_energy + maintenance + loan_y + depreciation;
            YearlyBreakdown {
                year,
                fuel_or_electricity: annual_energy,
                maintenance,
                loan: loan_y,
                depreciation,
                cumulative_total: round2(cumulative),
            }
        })
        .collect();

    let years = horizon_years as f64;
    let total_energy = annual_energy * years;
    let total_maintenance = maintenance * years;
    let total_loan = loan.total_within_horizon;
    // 감가 배분액은 구매가-잔존가치를 나눈 것이므로 다시 더하지 않는다
    let total_cost = total_energy + total_maintenance + total_loan + base.net_capital_cost();
    let total_km = annual_km * years;
    let cost_per_km = if total_km > 0.0 {
        Some(total_cost / total_km)
    } else {
        None
    };

    VehicleResultSummary {
        vehicle_id: base.id.clone(),
        name: base.name.clone(),
        kind: vehicle.kind(),
        total_cost,
        cost_per_km,
        total_fuel_or_electricity: total_energy,
        total_maintenance,
        total_loan_payments: total_loan,
        resale_offset: base.resale_offset(),
        effective_annual_km: annual_km,
        monthly_loan_payment: loan.monthly_payment,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{
        DistanceBasis, EnergyConsumption, EvVehicle, IceVehicle, Loan, Ownership,
    };

    fn ice(distance: DistanceBasis) -> Vehicle {
        Vehicle::Ice(IceVehicle {
            base: VehicleBase {
                id: "ice1".into(),
                name: "Honda Freed".into(),
                purchase_price: 600000.0,
                down_payment: 0.0,
                resale_value: None,
                notes: None,
            },
            ownership: Ownership {
                loan: None,
                distance,
                annual_maintenance: 0.0,
            },
            fuel_type: None,
            fuel_price_per_liter: 30.0,
            fuel_efficiency_km_per_liter: 12.0,
        })
    }

    fn ev() -> Vehicle {
        Vehicle::Ev(EvVehicle {
            base: VehicleBase {
                id: "ev1".into(),
                name: "MG4".into(),
                purchase_price: 709900.0,
                down_payment: 100000.0,
                resale_value: Some(300000.0),
                notes: None,
            },
            ownership: Ownership {
                loan: Some(Loan {
                    term_years: 4,
                    interest_rate_annual_pct: 2.79,
                }),
                distance: DistanceBasis::Monthly(1000.0),
                annual_maintenance: 5000.0,
            },
            consumption: EnergyConsumption::Direct {
                kwh_per_100km: 13.5,
            },
            electricity_price_per_kwh: 5.5,
            battery_warranty_years: Some(8.0),
        })
    }

    #[test]
    fn distance_priority() {
        assert_eq!(effective_annual_km(&ice(DistanceBasis::Annual(5000.0)), 9.0), 5000.0);
        assert_eq!(effective_annual_km(&ice(DistanceBasis::Monthly(1000.0)), 9.0), 12000.0);
        assert_eq!(effective_annual_km(&ice(DistanceBasis::Global), 9.0), 9.0);
    }

    #[test]
    fn zero_distance_gives_no_cost_per_km() {
        let input = ComparisonInput {
            vehicles: vec![ice(DistanceBasis::Global), ice(DistanceBasis::Annual(0.0))],
            horizon_years: 3,
            annual_km: 0.0,
            discount_rate_pct: None,
        };
        let out = compare(&input);
        for r in &out.results {
            assert_eq!(r.cost_per_km, None);
            assert_eq!(r.total_fuel_or_electricity, 0.0);
            assert_eq!(r.total_cost, 600000.0);
        }
    }

    #[test]
    fn financed_vehicle_totals() {
        let input = ComparisonInput {
            vehicles: vec![ice(DistanceBasis::Global), ev()],
            horizon_years: 5,
            annual_km: 12000.0,
            discount_rate_pct: Some(4.0),
        };
        let out = compare(&input);
        let r = &out.results[1];
        let expected_monthly = crate::engine::loan::monthly_payment(609900.0, 2.79, 4);
        assert!((r.monthly_loan_payment - expected_monthly).abs() < 1e-9);
        assert!((r.total_loan_payments - expected_monthly * 48.0).abs() < 1e-6);
        assert_eq!(r.yearly[4].loan, 0.0);
        assert_eq!(r.total_maintenance, 25000.0);
        assert_eq!(r.resale_offset, 300000.0);
        let expected_total = 44550.0 + 25000.0 + r.total_loan_payments + 409900.0;
        assert!((r.total_cost - expected_total).abs() < 1e-6);
        assert!((r.net_capital_cost() - 409900.0).abs() < 1e-6);
        // 누적 합계 마지막 값은 연도별 항목 전체 합과 같다 (반올림 오차 이내)
        let sum: f64 = r
            .yearly
            .iter()
            .map(|y| y.fuel_or_electricity + y.maintenance + y.loan + y.depreciation)
            .sum();
        assert!((r.yearly[4].cumulative_total - sum).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn cheapest_picks_lowest_total() {
        let input = ComparisonInput {
            vehicles: vec![ice(DistanceBasis::Monthly(1000.0)), ev()],
            horizon_years: 5,
            annual_km: 12000.0,
            discount_rate_pct: None,
        };
        let out = compare(&input);
        let cheapest = out.cheapest().unwrap();
        let min = out
            .results
            .iter()
            .map(|r| r.total_cost)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(cheapest.total_cost, min);
    }
}
