//! 입력 검증기. 검증 전 레코드를 받아서 강타입 모델을 돌려주거나,
//! 위반한 모든 제약을 필드 단위로 모아서 돌려준다. 입력은 변경하지 않는다.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::input::{BaseInput, ComparisonRequest, EvInput, IceInput, VehicleInput};
use crate::vehicle::{
    ComparisonInput, DistanceBasis, EnergyConsumption, EvVehicle, IceVehicle, Loan, Ownership,
    Vehicle, VehicleBase,
};

pub const DEFAULT_HORIZON_YEARS: u32 = 5;
pub const MIN_VEHICLES: usize = 2;
pub const MAX_NAME_CHARS: usize = 80;

/// 위반된 제약의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    Required,
    NotFinite,
    OutOfRange,
    NotInteger,
    TooShort,
    TooLong,
    MissingEnergyBasis,
    TooFewVehicles,
}

/// 필드 하나에 대한 검증 실패.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// JSON 경로 형태 (예: `vehicles[1].fuelEfficiencyKmPerLiter`)
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 하나 이상의 필드 오류 목록.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", render(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 특정 필드 경로에 대한 오류가 있는지 확인한다.
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.0.iter().any(|e| e.field == field && e.kind == kind)
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Positive,
    NonNegative,
    Between(f64, f64),
}

impl Bound {
    fn admits(self, v: f64) -> bool {
        match self {
            Bound::Positive => v > 0.0,
            Bound::NonNegative => v >= 0.0,
            Bound::Between(lo, hi) => v >= lo && v <= hi,
        }
    }

    fn describe(self) -> String {
        match self {
            Bound::Positive => "must be greater than 0".into(),
            Bound::NonNegative => "must be 0 or greater".into(),
            Bound::Between(lo, hi) => format!("must be between {lo} and {hi}"),
        }
    }
}

/// 경로 접두어를 붙여 오류를 누적하는 도우미.
struct Checker<'a> {
    prefix: String,
    errors: &'a mut Vec<FieldError>,
    start: usize,
}

impl<'a> Checker<'a> {
    fn new(prefix: impl Into<String>, errors: &'a mut Vec<FieldError>) -> Self {
        let start = errors.len();
        Self {
            prefix: prefix.into(),
            errors,
            start,
        }
    }

    fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.prefix)
        }
    }

    fn push(&mut self, field: &str, kind: ViolationKind, message: impl Into<String>) {
        let field = self.path(field);
        self.errors.push(FieldError {
            field,
            kind,
            message: message.into(),
        });
    }

    /// 이 스코프에서 새 오류가 없었는지.
    fn clean(&self) -> bool {
        self.errors.len() == self.start
    }

    fn number(&mut self, field: &str, value: f64, bound: Bound) -> Option<f64> {
        if !value.is_finite() {
            self.push(field, ViolationKind::NotFinite, "must be a finite number");
            return None;
        }
        if !bound.admits(value) {
            self.push(field, ViolationKind::OutOfRange, bound.describe());
            return None;
        }
        Some(value)
    }

    fn require(&mut self, field: &str, value: Option<f64>, bound: Bound) -> Option<f64> {
        match value {
            Some(v) => self.number(field, v, bound),
            None => {
                self.push(field, ViolationKind::Required, "is required");
                None
            }
        }
    }

    /// 값이 있을 때만 검사한다. 없거나 잘못되면 None.
    fn optional(&mut self, field: &str, value: Option<f64>, bound: Bound) -> Option<f64> {
        value.and_then(|v| self.number(field, v, bound))
    }

    fn whole(&mut self, field: &str, value: f64, lo: u32, hi: u32) -> Option<u32> {
        let v = self.number(field, value, Bound::Between(lo as f64, hi as f64))?;
        if v.fract() != 0.0 {
            self.push(field, ViolationKind::NotInteger, "must be a whole number");
            return None;
        }
        Some(v as u32)
    }

    fn text(&mut self, field: &str, value: &str, max_chars: Option<usize>) -> Option<String> {
        let count = value.chars().count();
        if count == 0 {
            self.push(field, ViolationKind::TooShort, "must not be empty");
            return None;
        }
        if let Some(max) = max_chars {
            if count > max {
                self.push(
                    field,
                    ViolationKind::TooLong,
                    format!("must be at most {max} characters"),
                );
                return None;
            }
        }
        Some(value.to_string())
    }
}

/// 차량 하나를 검증한다.
pub fn validate_vehicle(input: &VehicleInput) -> Result<Vehicle, ValidationErrors> {
    let mut errors = Vec::new();
    match check_vehicle(input, "", &mut errors) {
        Some(vehicle) if errors.is_empty() => Ok(vehicle),
        _ => {
            tracing::debug!(id = input.id(), errors = errors.len(), "vehicle rejected");
            Err(ValidationErrors(errors))
        }
    }
}

/// 비교 요청 전체를 검증한다. 차량별 오류는 `vehicles[i].` 경로로 보고한다.
pub fn validate_comparison(request: &ComparisonRequest) -> Result<ComparisonInput, ValidationErrors> {
    let mut errors = Vec::new();

    let vehicles: Vec<Option<Vehicle>> = request
        .vehicles
        .iter()
        .enumerate()
        .map(|(i, v)| check_vehicle(v, &format!("vehicles[{i}]"), &mut errors))
        .collect();

    let mut c = Checker::new("", &mut errors);
    if request.vehicles.len() < MIN_VEHICLES {
        c.push(
            "vehicles",
            ViolationKind::TooFewVehicles,
            format!("comparison requires at least {MIN_VEHICLES} vehicles"),
        );
    }
    let horizon_years = match request.horizon_years {
        Some(h) => c.whole("horizonYears", h, 1, 30),
        None => Some(DEFAULT_HORIZON_YEARS),
    };
    let annual_km = c.require("annualKm", request.annual_km, Bound::NonNegative);
    let discount_rate_pct =
        c.optional("discountRatePct", request.discount_rate_pct, Bound::Between(0.0, 100.0));

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "comparison request rejected");
        return Err(ValidationErrors(errors));
    }

    match (horizon_years, annual_km, vehicles.into_iter().collect::<Option<Vec<_>>>()) {
        (Some(horizon_years), Some(annual_km), Some(vehicles)) => Ok(ComparisonInput {
            vehicles,
            horizon_years,
            annual_km,
            discount_rate_pct,
        }),
        // 위에서 오류가 없으면 모든 값이 채워져 있다.
        _ => Err(ValidationErrors(errors)),
    }
}

fn check_vehicle(input: &VehicleInput, prefix: &str, errors: &mut Vec<FieldError>) -> Option<Vehicle> {
    let mut c = Checker::new(prefix, errors);
    let vehicle = match input {
        VehicleInput::Ice(v) => check_ice(v, &mut c).map(Vehicle::Ice),
        VehicleInput::Ev(v) => check_ev(v, &mut c).map(Vehicle::Ev),
    };
    if c.clean() {
        vehicle
    } else {
        None
    }
}

fn check_base(b: &BaseInput, c: &mut Checker<'_>) -> Option<(VehicleBase, Ownership)> {
    let id = c.text("id", &b.id, None);
    let name = c.text("name", &b.name, Some(MAX_NAME_CHARS));
    let purchase_price = c.require("purchasePrice", b.purchase_price, Bound::Positive);
    let down_payment = c.optional("downPayment", b.down_payment, Bound::NonNegative);
    let resale_value = c.optional("resaleValue", b.resale_value, Bound::NonNegative);

    let monthly_km = c.optional("monthlyKm", b.monthly_km, Bound::NonNegative);
    let annual_km = c.optional("annualKm", b.annual_km, Bound::NonNegative);
    let annual_maintenance =
        c.optional("annualMaintenanceTHB", b.annual_maintenance, Bound::NonNegative);
    let term_years = b
        .loan_term_years
        .and_then(|t| c.whole("loanTermYears", t, 1, 10));
    let rate = c.optional(
        "interestRateAnnualPct",
        b.interest_rate_annual_pct,
        Bound::Between(0.0, 30.0),
    );

    let distance = match (annual_km, monthly_km) {
        (Some(km), _) => DistanceBasis::Annual(km),
        (None, Some(km)) => DistanceBasis::Monthly(km),
        (None, None) => DistanceBasis::Global,
    };
    let loan = term_years.map(|term_years| Loan {
        term_years,
        interest_rate_annual_pct: rate.unwrap_or(0.0),
    });

    let base = VehicleBase {
        id: id?,
        name: name?,
        purchase_price: purchase_price?,
        down_payment: down_payment.unwrap_or(0.0),
        resale_value,
        notes: b.notes.clone(),
    };
    let ownership = Ownership {
        loan,
        distance,
        annual_maintenance: annual_maintenance.unwrap_or(0.0),
    };
    Some((base, ownership))
}

fn check_ice(v: &IceInput, c: &mut Checker<'_>) -> Option<IceVehicle> {
    let common = check_base(&v.base, c);
    let fuel_price = c.require("fuelPricePerLiter", v.fuel_price_per_liter, Bound::NonNegative);
    let efficiency = c.require(
        "fuelEfficiencyKmPerLiter",
        v.fuel_efficiency_km_per_liter,
        Bound::Positive,
    );
    let (base, ownership) = common?;
    Some(IceVehicle {
        base,
        ownership,
        fuel_type: v.fuel_type.clone(),
        fuel_price_per_liter: fuel_price?,
        fuel_efficiency_km_per_liter: efficiency?,
    })
}

fn check_ev(v: &EvInput, c: &mut Checker<'_>) -> Option<EvVehicle> {
    let common = check_base(&v.base, c);
    let price = c.require(
        "electricityPricePerKwh",
        v.electricity_price_per_kwh,
        Bound::NonNegative,
    );
    let direct = c.optional(
        "energyConsumptionKwhPer100km",
        v.energy_consumption_kwh_per100km,
        Bound::Positive,
    );
    let range = c.optional("rangeKmPerCharge", v.range_km_per_charge, Bound::Positive);
    let capacity = c.optional("batteryCapacityKwh", v.battery_capacity_kwh, Bound::Positive);
    let warranty = c.optional(
        "batteryWarrantyYears",
        v.battery_warranty_years,
        Bound::NonNegative,
    );

    let consumption = match (direct, range, capacity) {
        (Some(kwh_per_100km), _, _) => Some(EnergyConsumption::Direct { kwh_per_100km }),
        (None, Some(range_km_per_charge), Some(battery_capacity_kwh)) => {
            Some(EnergyConsumption::Derived {
                range_km_per_charge,
                battery_capacity_kwh,
            })
        }
        _ => None,
    };
    // 값이 주어졌지만 범위를 벗어난 경우는 이미 해당 필드 오류로 보고됨
    let basis_supplied = v.energy_consumption_kwh_per100km.is_some()
        || (v.range_km_per_charge.is_some() && v.battery_capacity_kwh.is_some());
    if consumption.is_none() && !basis_supplied {
        c.push(
            "energyConsumptionKwhPer100km",
            ViolationKind::MissingEnergyBasis,
            "provide energy consumption or range+battery capacity",
        );
    }

    let (base, ownership) = common?;
    Some(EvVehicle {
        base,
        ownership,
        consumption: consumption?,
        electricity_price_per_kwh: price?,
        battery_warranty_years: warranty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BaseInput, EvInput, IceInput};
    use rstest::rstest;

    fn ice() -> IceInput {
        IceInput {
            base: BaseInput {
                id: "ice1".into(),
                name: "Honda Freed".into(),
                purchase_price: Some(600000.0),
                monthly_km: Some(1000.0),
                ..BaseInput::default()
            },
            fuel_price_per_liter: Some(30.0),
            fuel_efficiency_km_per_liter: Some(12.0),
            ..IceInput::default()
        }
    }

    fn ev() -> EvInput {
        EvInput {
            base: BaseInput {
                id: "ev1".into(),
                name: "MG4".into(),
                purchase_price: Some(709900.0),
                monthly_km: Some(1000.0),
                ..BaseInput::default()
            },
            electricity_price_per_kwh: Some(5.5),
            energy_consumption_kwh_per100km: Some(13.5),
            ..EvInput::default()
        }
    }

    fn request(vehicles: Vec<VehicleInput>) -> ComparisonRequest {
        ComparisonRequest {
            vehicles,
            horizon_years: None,
            annual_km: Some(12000.0),
            discount_rate_pct: None,
        }
    }

    #[test]
    fn accepts_basic_ice_and_applies_defaults() {
        let v = validate_vehicle(&VehicleInput::Ice(ice())).unwrap();
        let Vehicle::Ice(v) = v else {
            panic!("expected ICE");
        };
        assert_eq!(v.base.down_payment, 0.0);
        assert_eq!(v.base.resale_value, None);
        assert_eq!(v.ownership.loan, None);
        assert_eq!(v.ownership.distance, DistanceBasis::Monthly(1000.0));
        assert_eq!(v.ownership.annual_maintenance, 0.0);
    }

    #[test]
    fn annual_distance_takes_priority_over_monthly() {
        let mut input = ice();
        input.base.annual_km = Some(20000.0);
        let v = validate_vehicle(&VehicleInput::Ice(input)).unwrap();
        assert_eq!(v.ownership().distance, DistanceBasis::Annual(20000.0));
    }

    #[rstest]
    #[case(Some(0.0), ViolationKind::OutOfRange)]
    #[case(Some(-2.0), ViolationKind::OutOfRange)]
    #[case(None, ViolationKind::Required)]
    #[case(Some(f64::NAN), ViolationKind::NotFinite)]
    fn rejects_bad_fuel_efficiency(#[case] value: Option<f64>, #[case] kind: ViolationKind) {
        let mut input = ice();
        input.fuel_efficiency_km_per_liter = value;
        let err = validate_vehicle(&VehicleInput::Ice(input)).unwrap_err();
        assert!(err.has("fuelEfficiencyKmPerLiter", kind), "{err}");
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(1.0, true)]
    #[case(10.0, true)]
    #[case(11.0, false)]
    #[case(2.5, false)]
    fn loan_term_must_be_whole_years_in_range(#[case] term: f64, #[case] ok: bool) {
        let mut input = ice();
        input.base.loan_term_years = Some(term);
        input.base.interest_rate_annual_pct = Some(3.0);
        assert_eq!(validate_vehicle(&VehicleInput::Ice(input)).is_ok(), ok);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(30.0, true)]
    #[case(30.5, false)]
    #[case(-0.1, false)]
    fn interest_rate_bounds(#[case] rate: f64, #[case] ok: bool) {
        let mut input = ev();
        input.base.loan_term_years = Some(5.0);
        input.base.interest_rate_annual_pct = Some(rate);
        assert_eq!(validate_vehicle(&VehicleInput::Ev(input)).is_ok(), ok);
    }

    #[test]
    fn name_length_limits() {
        let mut input = ice();
        input.base.name = String::new();
        let err = validate_vehicle(&VehicleInput::Ice(input.clone())).unwrap_err();
        assert!(err.has("name", ViolationKind::TooShort));

        input.base.name = "a".repeat(81);
        let err = validate_vehicle(&VehicleInput::Ice(input.clone())).unwrap_err();
        assert!(err.has("name", ViolationKind::TooLong));

        // 글자 수 기준 (바이트 아님)
        input.base.name = "ก".repeat(80);
        assert!(validate_vehicle(&VehicleInput::Ice(input)).is_ok());
    }

    #[test]
    fn ev_without_energy_basis_is_rejected() {
        let mut input = ev();
        input.energy_consumption_kwh_per100km = None;
        input.range_km_per_charge = Some(400.0);
        let err = validate_vehicle(&VehicleInput::Ev(input)).unwrap_err();
        assert!(err.has(
            "energyConsumptionKwhPer100km",
            ViolationKind::MissingEnergyBasis
        ));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn ev_basis_derived_from_range_and_capacity() {
        let mut input = ev();
        input.energy_consumption_kwh_per100km = None;
        input.range_km_per_charge = Some(400.0);
        input.battery_capacity_kwh = Some(60.0);
        let Vehicle::Ev(v) = validate_vehicle(&VehicleInput::Ev(input)).unwrap() else {
            panic!("expected EV");
        };
        assert!((v.consumption.kwh_per_100km() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn ev_zero_consumption_reports_range_error_only() {
        let mut input = ev();
        input.energy_consumption_kwh_per100km = Some(0.0);
        let err = validate_vehicle(&VehicleInput::Ev(input)).unwrap_err();
        assert!(err.has("energyConsumptionKwhPer100km", ViolationKind::OutOfRange));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn comparison_requires_two_vehicles() {
        let err = validate_comparison(&request(vec![VehicleInput::Ice(ice())])).unwrap_err();
        assert!(err.has("vehicles", ViolationKind::TooFewVehicles));
    }

    #[test]
    fn comparison_defaults_horizon_to_five_years() {
        let input = validate_comparison(&request(vec![
            VehicleInput::Ice(ice()),
            VehicleInput::Ev(ev()),
        ]))
        .unwrap();
        assert_eq!(input.horizon_years, 5);
        assert_eq!(input.annual_km, 12000.0);
        assert_eq!(input.discount_rate_pct, None);
    }

    #[rstest]
    #[case(Some(0.0), None, Some(("horizonYears", ViolationKind::OutOfRange)))]
    #[case(Some(31.0), None, Some(("horizonYears", ViolationKind::OutOfRange)))]
    #[case(Some(4.5), None, Some(("horizonYears", ViolationKind::NotInteger)))]
    #[case(Some(1.0), None, None)]
    #[case(Some(30.0), None, None)]
    #[case(None, Some(-0.5), Some(("discountRatePct", ViolationKind::OutOfRange)))]
    #[case(None, Some(100.5), Some(("discountRatePct", ViolationKind::OutOfRange)))]
    #[case(None, Some(0.0), None)]
    #[case(None, Some(100.0), None)]
    fn comparison_global_rules(
        #[case] horizon: Option<f64>,
        #[case] discount: Option<f64>,
        #[case] expected: Option<(&str, ViolationKind)>,
    ) {
        let mut req = request(vec![VehicleInput::Ice(ice()), VehicleInput::Ev(ev())]);
        req.horizon_years = horizon;
        req.discount_rate_pct = discount;
        match (validate_comparison(&req), expected) {
            (Ok(input), None) => {
                if let Some(h) = horizon {
                    assert_eq!(input.horizon_years, h as u32);
                }
            }
            (Err(err), Some((field, kind))) => {
                assert!(err.has(field, kind), "{err}");
                assert_eq!(err.len(), 1, "{err}");
            }
            (got, want) => panic!("unexpected result {got:?}, expected {want:?}"),
        }
    }

    #[rstest]
    #[case::empty_id("id", |b: &mut BaseInput| b.id.clear(), ViolationKind::TooShort)]
    #[case::negative_down_payment("downPayment", |b: &mut BaseInput| b.down_payment = Some(-1.0), ViolationKind::OutOfRange)]
    #[case::negative_resale("resaleValue", |b: &mut BaseInput| b.resale_value = Some(-1.0), ViolationKind::OutOfRange)]
    #[case::negative_monthly_km("monthlyKm", |b: &mut BaseInput| b.monthly_km = Some(-10.0), ViolationKind::OutOfRange)]
    #[case::negative_annual_km("annualKm", |b: &mut BaseInput| b.annual_km = Some(-10.0), ViolationKind::OutOfRange)]
    #[case::negative_maintenance("annualMaintenanceTHB", |b: &mut BaseInput| b.annual_maintenance = Some(-1.0), ViolationKind::OutOfRange)]
    #[case::zero_price("purchasePrice", |b: &mut BaseInput| b.purchase_price = Some(0.0), ViolationKind::OutOfRange)]
    fn shared_vehicle_field_rules(
        #[case] field: &str,
        #[case] break_field: fn(&mut BaseInput),
        #[case] kind: ViolationKind,
    ) {
        let mut bad_ev = ev();
        break_field(&mut bad_ev.base);
        let req = request(vec![VehicleInput::Ice(ice()), VehicleInput::Ev(bad_ev)]);
        let err = validate_comparison(&req).unwrap_err();
        let path = format!("vehicles[1].{field}");
        assert!(err.has(&path, kind), "{err}");
        assert_eq!(err.len(), 1, "{err}");

        // 같은 규칙이 내연기관 쪽에도 적용된다
        let mut bad_ice = ice();
        break_field(&mut bad_ice.base);
        let err = validate_vehicle(&VehicleInput::Ice(bad_ice)).unwrap_err();
        assert!(err.has(field, kind), "{err}");
    }

    #[test]
    fn comparison_reports_nested_vehicle_paths_and_global_fields_together() {
        let mut bad_ev = ev();
        bad_ev.electricity_price_per_kwh = Some(-1.0);
        let mut req = request(vec![VehicleInput::Ice(ice()), VehicleInput::Ev(bad_ev)]);
        req.annual_km = None;
        req.discount_rate_pct = Some(120.0);
        let err = validate_comparison(&req).unwrap_err();
        assert!(err.has("vehicles[1].electricityPricePerKwh", ViolationKind::OutOfRange));
        assert!(err.has("annualKm", ViolationKind::Required));
        assert!(err.has("discountRatePct", ViolationKind::OutOfRange));
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn validation_does_not_mutate_input() {
        let req = request(vec![VehicleInput::Ice(ice()), VehicleInput::Ev(ev())]);
        let before = req.clone();
        let _ = validate_comparison(&req);
        assert_eq!(req, before);
    }
}
