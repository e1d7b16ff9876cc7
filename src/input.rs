//! 폼/JSON/프리셋에서 들어오는 검증 전 입력 레코드.
//!
//! 숫자 필드는 모두 `Option<f64>`로 받아서 누락/범위 오류를 필드 단위로
//! 보고할 수 있게 한다. JSON 필드명은 camelCase를 유지한다.

use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleKind;

/// 두 차종 공통 입력 필드.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<f64>,
    /// null과 누락 모두 None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resale_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_km: Option<f64>,
    #[serde(
        rename = "annualMaintenanceTHB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_maintenance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_term_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate_annual_pct: Option<f64>,
}

/// 내연기관 차량 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceInput {
    #[serde(flatten)]
    pub base: BaseInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_price_per_liter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency_km_per_liter: Option<f64>,
}

/// 전기차 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvInput {
    #[serde(flatten)]
    pub base: BaseInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_km_per_charge: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_consumption_kwh_per100km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_capacity_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_price_per_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_warranty_years: Option<f64>,
}

/// `type` 필드로 구분되는 차량 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VehicleInput {
    #[serde(rename = "ICE")]
    Ice(IceInput),
    #[serde(rename = "EV")]
    Ev(EvInput),
}

impl VehicleInput {
    /// 폼에서 새 내연기관 차량을 추가할 때의 빈 레코드.
    pub fn blank_ice(id: impl Into<String>) -> Self {
        VehicleInput::Ice(IceInput {
            base: BaseInput {
                id: id.into(),
                name: "ICE Vehicle".into(),
                purchase_price: Some(0.0),
                ..BaseInput::default()
            },
            fuel_price_per_liter: Some(0.0),
            fuel_efficiency_km_per_liter: Some(1.0),
            ..IceInput::default()
        })
    }

    /// 폼에서 새 전기차를 추가할 때의 빈 레코드.
    pub fn blank_ev(id: impl Into<String>) -> Self {
        VehicleInput::Ev(EvInput {
            base: BaseInput {
                id: id.into(),
                name: "EV Vehicle".into(),
                purchase_price: Some(0.0),
                ..BaseInput::default()
            },
            electricity_price_per_kwh: Some(0.0),
            ..EvInput::default()
        })
    }

    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleInput::Ice(_) => VehicleKind::Ice,
            VehicleInput::Ev(_) => VehicleKind::Ev,
        }
    }

    pub fn base(&self) -> &BaseInput {
        match self {
            VehicleInput::Ice(v) => &v.base,
            VehicleInput::Ev(v) => &v.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseInput {
        match self {
            VehicleInput::Ice(v) => &mut v.base,
            VehicleInput::Ev(v) => &mut v.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// 같은 프리셋을 여러 번 추가할 수 있도록 id만 바꾼 복사본을 만든다.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.base_mut().id = id.into();
        copy
    }
}

/// 검증 전 비교 요청.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    #[serde(default)]
    pub vehicles: Vec<VehicleInput>,
    /// 없으면 5년
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate_pct: Option<f64>,
}

impl ComparisonRequest {
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
