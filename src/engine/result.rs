//! 비교 결과 구조. 표/차트 렌더링에 그대로 쓰이며 JSON 필드명은 camelCase.

use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleKind;

/// 차량 한 대의 연도별 비용 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdown {
    /// 1부터 시작
    pub year: u32,
    pub fuel_or_electricity: f64,
    pub maintenance: f64,
    pub loan: f64,
    /// 순 자본비용의 정액 배분분 (현금 흐름 아님)
    pub depreciation: f64,
    /// 해당 연도까지의 누적 합계, 소수 둘째 자리 반올림
    pub cumulative_total: f64,
}

/// 차량 한 대의 분석 기간 합계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResultSummary {
    pub vehicle_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub total_cost: f64,
    /// 총 주행거리가 0이면 계산 불가(None)
    pub cost_per_km: Option<f64>,
    pub total_fuel_or_electricity: f64,
    pub total_maintenance: f64,
    pub total_loan_payments: f64,
    /// 총비용에서 차감되는 잔존가치 (양수)
    pub resale_offset: f64,
    pub effective_annual_km: f64,
    pub monthly_loan_payment: f64,
    pub yearly: Vec<YearlyBreakdown>,
}

impl VehicleResultSummary {
    /// 구매가 - 잔존가치. 합계에서 에너지/정비/할부를 뺀 나머지.
    pub fn net_capital_cost(&self) -> f64 {
        self.total_cost
            - (self.total_fuel_or_electricity + self.total_maintenance + self.total_loan_payments)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub results: Vec<VehicleResultSummary>,
}

impl ComparisonOutput {
    /// 총비용이 가장 낮은 차량. 결과가 없으면 None.
    pub fn cheapest(&self) -> Option<&VehicleResultSummary> {
        self.results
            .iter()
            .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
