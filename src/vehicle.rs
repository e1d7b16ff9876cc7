//! 검증을 통과한 차량/비교 요청 도메인 모델.
//!
//! 이 모듈의 값은 `validation`을 거쳐서만 만들어지며, 엔진은 여기 담긴
//! 필드만으로 연간 에너지 비용을 결정적으로 계산할 수 있다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 차량 구동 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    /// 내연기관
    #[serde(rename = "ICE")]
    Ice,
    /// 전기차
    #[serde(rename = "EV")]
    Ev,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Ice => "ICE",
            VehicleKind::Ev => "EV",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 두 차종이 공유하는 기본 정보.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleBase {
    pub id: String,
    pub name: String,
    /// 구매가 (> 0)
    pub purchase_price: f64,
    /// 계약금 (>= 0, 없으면 0)
    pub down_payment: f64,
    /// 예상 잔존가치. 없으면 0으로 취급한다.
    pub resale_value: Option<f64>,
    pub notes: Option<String>,
}

impl VehicleBase {
    /// 잔존가치(없으면 0).
    pub fn resale_offset(&self) -> f64 {
        self.resale_value.unwrap_or(0.0)
    }

    /// 할부 원금 = 구매가 - 계약금.
    pub fn loan_principal(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    /// 순 자본비용 = 구매가 - 잔존가치.
    pub fn net_capital_cost(&self) -> f64 {
        self.purchase_price - self.resale_offset()
    }
}

/// 고정금리 할부 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loan {
    /// 상환 기간 [년] (1~10)
    pub term_years: u32,
    /// 연 이자율 [%] (0~30)
    pub interest_rate_annual_pct: f64,
}

/// 연간 주행거리를 어디서 가져올지 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceBasis {
    /// 차량에 직접 입력된 연간 주행거리 [km]
    Annual(f64),
    /// 월간 주행거리 [km] (x12)
    Monthly(f64),
    /// 비교 요청의 전역 연간 주행거리 사용
    Global,
}

impl DistanceBasis {
    /// 우선순위(연간 → 월간 → 전역)에 따라 실효 연간 주행거리를 구한다.
    pub fn resolve(&self, global_annual_km: f64) -> f64 {
        match *self {
            DistanceBasis::Annual(km) => km,
            DistanceBasis::Monthly(km) => km * 12.0,
            DistanceBasis::Global => global_annual_km,
        }
    }
}

/// 할부/주행/정비처럼 차종과 무관한 보유 조건.
#[derive(Debug, Clone, PartialEq)]
pub struct Ownership {
    /// 없으면 현금 구매
    pub loan: Option<Loan>,
    pub distance: DistanceBasis,
    /// 연간 정비비 (없으면 0)
    pub annual_maintenance: f64,
}

/// 검증된 내연기관 차량.
#[derive(Debug, Clone, PartialEq)]
pub struct IceVehicle {
    pub base: VehicleBase,
    pub ownership: Ownership,
    pub fuel_type: Option<String>,
    /// 연료 단가 [통화/L] (>= 0)
    pub fuel_price_per_liter: f64,
    /// 연비 [km/L] (> 0)
    pub fuel_efficiency_km_per_liter: f64,
}

/// 전기차 전비 산출 근거.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnergyConsumption {
    /// 100km당 소비 전력량을 직접 입력
    Direct { kwh_per_100km: f64 },
    /// 1회 충전 주행거리와 배터리 용량으로 유도
    Derived {
        range_km_per_charge: f64,
        battery_capacity_kwh: f64,
    },
}

impl EnergyConsumption {
    /// 전비 [kWh/100km].
    pub fn kwh_per_100km(&self) -> f64 {
        match *self {
            EnergyConsumption::Direct { kwh_per_100km } => kwh_per_100km,
            EnergyConsumption::Derived {
                range_km_per_charge,
                battery_capacity_kwh,
            } => battery_capacity_kwh / range_km_per_charge * 100.0,
        }
    }
}

/// 검증된 전기차.
#[derive(Debug, Clone, PartialEq)]
pub struct EvVehicle {
    pub base: VehicleBase,
    pub ownership: Ownership,
    pub consumption: EnergyConsumption,
    /// 전기 단가 [통화/kWh] (>= 0)
    pub electricity_price_per_kwh: f64,
    pub battery_warranty_years: Option<f64>,
}

/// 검증된 차량. 계산 지점에서는 항상 전수 매칭한다.
#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
    Ice(IceVehicle),
    Ev(EvVehicle),
}

impl Vehicle {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Ice(_) => VehicleKind::Ice,
            Vehicle::Ev(_) => VehicleKind::Ev,
        }
    }

    pub fn base(&self) -> &VehicleBase {
        match self {
            Vehicle::Ice(v) => &v.base,
            Vehicle::Ev(v) => &v.base,
        }
    }

    pub fn ownership(&self) -> &Ownership {
        match self {
            Vehicle::Ice(v) => &v.ownership,
            Vehicle::Ev(v) => &v.ownership,
        }
    }
}

/// 검증된 비교 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonInput {
    /// 2대 이상, 입력 순서 유지
    pub vehicles: Vec<Vehicle>,
    /// 분석 기간 [년] (1~30)
    pub horizon_years: u32,
    /// 차량에 주행거리가 없을 때 쓰는 전역 연간 주행거리 [km]
    pub annual_km: f64,
    /// 예약 필드. 검증만 하고 총액 계산에는 적용하지 않는다.
    pub discount_rate_pct: Option<f64>,
}
