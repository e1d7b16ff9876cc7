//! 결과를 차트용 시계열/막대/비율 데이터로 바꾼다. 그리기 자체는 GUI 몫.

use serde::{Deserialize, Serialize};

use crate::engine::VehicleResultSummary;
use crate::i18n::keys;

/// 차트 표시 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartMode {
    /// 연도별 누적 총비용 선 그래프
    #[default]
    Line,
    /// 차량별 비용 항목 누적 막대
    Stacked,
    /// 한 차량의 비용 구성 비율
    Pie,
}

/// 합계를 구성하는 비용 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostComponent {
    Energy,
    Maintenance,
    Loan,
    /// 구매가 - 잔존가치
    Capital,
}

impl CostComponent {
    pub const ALL: [CostComponent; 4] = [
        CostComponent::Energy,
        CostComponent::Maintenance,
        CostComponent::Loan,
        CostComponent::Capital,
    ];

    /// i18n 키
    pub fn label_key(&self) -> &'static str {
        match self {
            CostComponent::Energy => keys::CHART_ENERGY,
            CostComponent::Maintenance => keys::CHART_MAINTENANCE,
            CostComponent::Loan => keys::CHART_LOAN,
            CostComponent::Capital => keys::CHART_CAPITAL,
        }
    }

    pub fn value_of(&self, r: &VehicleResultSummary) -> f64 {
        match self {
            CostComponent::Energy => r.total_fuel_or_electricity,
            CostComponent::Maintenance => r.total_maintenance,
            CostComponent::Loan => r.total_loan_payments,
            CostComponent::Capital => r.net_capital_cost(),
        }
    }
}

/// 차량 하나의 (연도, 누적 총비용) 점 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

pub fn cumulative_lines(results: &[VehicleResultSummary]) -> Vec<LineSeries> {
    results
        .iter()
        .map(|r| LineSeries {
            label: r.name.clone(),
            points: r
                .yearly
                .iter()
                .map(|y| [y.year as f64, y.cumulative_total])
                .collect(),
        })
        .collect()
}

/// 차량 하나의 비용 항목별 막대 조각.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub label: String,
    pub segments: Vec<(CostComponent, f64)>,
}

impl StackedBar {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|(_, v)| v.max(0.0)).sum()
    }
}

pub fn stacked_totals(results: &[VehicleResultSummary]) -> Vec<StackedBar> {
    results
        .iter()
        .map(|r| StackedBar {
            label: r.name.clone(),
            segments: CostComponent::ALL
                .iter()
                .map(|c| (*c, c.value_of(r)))
                .collect(),
        })
        .collect()
}

/// 원 그래프 조각.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub component: CostComponent,
    pub value: f64,
    /// 0~1
    pub fraction: f64,
}

/// 한 차량의 비용 구성 비율. 0 이하 항목은 제외한다.
pub fn cost_shares(result: &VehicleResultSummary) -> Vec<Slice> {
    let parts: Vec<(CostComponent, f64)> = CostComponent::ALL
        .iter()
        .map(|c| (*c, c.value_of(result)))
        .filter(|(_, v)| *v > 0.0)
        .collect();
    let total: f64 = parts.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    parts
        .into_iter()
        .map(|(component, value)| Slice {
            component,
            value,
            fraction: value / total,
        })
        .collect()
}

/// 축 최대값. 값이 모두 0이면 1을 돌려 0으로 나누는 일을 피한다.
pub fn axis_ceiling(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    // 1, 2, 5 x 10^k 단위로 올림
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= max)
        .unwrap_or(10.0 * magnitude)
}
