//! 차종별 연간 에너지(연료/전기) 비용. 기간 동안 단가는 일정하다고 본다.

use crate::vehicle::{EvVehicle, IceVehicle, Vehicle};

/// 연간 연료 사용량 [L]. 주행거리나 연비가 0이면 0.
pub fn annual_fuel_liters(v: &IceVehicle, annual_km: f64) -> f64 {
    if annual_km > 0.0 && v.fuel_efficiency_km_per_liter > 0.0 {
        annual_km / v.fuel_efficiency_km_per_liter
    } else {
        0.0
    }
}

/// 연간 소비 전력량 [kWh].
pub fn annual_kwh(v: &EvVehicle, annual_km: f64) -> f64 {
    annual_km / 100.0 * v.consumption.kwh_per_100km()
}

/// 차종에 맞춰 연간 에너지 비용을 구한다.
pub fn annual_energy_cost(vehicle: &Vehicle, annual_km: f64) -> f64 {
    match vehicle {
        Vehicle::Ice(v) => annual_fuel_liters(v, annual_km) * v.fuel_price_per_liter,
        Vehicle::Ev(v) => annual_kwh(v, annual_km) * v.electricity_price_per_kwh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{DistanceBasis, EnergyConsumption, Ownership, VehicleBase};

    fn base() -> (VehicleBase, Ownership) {
        (
            VehicleBase {
                id: "v".into(),
                name: "v".into(),
                purchase_price: 1.0,
                down_payment: 0.0,
                resale_value: None,
                notes: None,
            },
            Ownership {
                loan: None,
                distance: DistanceBasis::Global,
                annual_maintenance: 0.0,
            },
        )
    }

    #[test]
    fn ice_fuel_cost() {
        let (base, ownership) = base();
        let v = Vehicle::Ice(IceVehicle {
            base,
            ownership,
            fuel_type: None,
            fuel_price_per_liter: 30.0,
            fuel_efficiency_km_per_liter: 12.0,
        });
        assert_eq!(annual_energy_cost(&v, 12000.0), 30000.0);
        assert_eq!(annual_energy_cost(&v, 0.0), 0.0);
    }

    #[test]
    fn ev_cost_from_derived_consumption() {
        let (base, ownership) = base();
        let v = Vehicle::Ev(EvVehicle {
            base,
            ownership,
            consumption: EnergyConsumption::Derived {
                range_km_per_charge: 400.0,
                battery_capacity_kwh: 60.0,
            },
            electricity_price_per_kwh: 4.0,
            battery_warranty_years: None,
        });
        // 15 kWh/100km x 10,000 km = 1,500 kWh
        assert!((annual_energy_cost(&v, 10000.0) - 6000.0).abs() < 1e-9);
    }
}
