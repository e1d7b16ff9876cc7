//! 고정금리 할부 상환 계산.
use crate::vehicle::Loan;

/// 원리금 균등 월 상환액.
///
/// - 연이율 <= 0: 원금 / (기간 x 12)
/// - 그 외: P·r·(1+r)^n / ((1+r)^n − 1), r = 연이율/100/12, n = 기간 x 12
///
/// 원금이 0 이하이면 상환할 금액이 없으므로 0을 돌려준다.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let n = term_years * 12;
    if principal <= 0.0 || n == 0 {
        return 0.0;
    }
    if annual_rate_pct <= 0.0 {
        return principal / n as f64;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + r).powi(n as i32);
    principal * r * growth / (growth - 1.0)
}

/// 분석 기간 안의 연도별 할부 상환 내역.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanSchedule {
    pub monthly_payment: f64,
    /// 1년차부터 기간 끝까지, 상환 기간 이후는 0
    pub yearly_payments: Vec<f64>,
    /// 분석 기간 안에서 낸 상환액 합계 (기간 밖 상환액은 제외)
    pub total_within_horizon: f64,
}

impl LoanSchedule {
    /// 할부가 없는 경우(현금 구매).
    pub fn cash(horizon_years: u32) -> Self {
        Self {
            monthly_payment: 0.0,
            yearly_payments: vec![0.0; horizon_years as usize],
            total_within_horizon: 0.0,
        }
    }

    /// 원금과 할부 조건으로 연도별 상환 내역을 만든다.
    pub fn build(principal: f64, loan: Option<&Loan>, horizon_years: u32) -> Self {
        let Some(loan) = loan else {
            return Self::cash(horizon_years);
        };
        let monthly = monthly_payment(principal, loan.interest_rate_annual_pct, loan.term_years);
        let yearly_payments: Vec<f64> = (1..=horizon_years)
            .map(|year| if year <= loan.term_years { monthly * 12.0 } else { 0.0 })
            .collect();
        let total_within_horizon = yearly_payments.iter().sum();
        Self {
            monthly_payment: monthly,
            yearly_payments,
            total_within_horizon,
        }
    }

    /// 해당 연도(1부터)의 상환액.
    pub fn payment_in_year(&self, year: u32) -> f64 {
        year.checked_sub(1)
            .and_then(|i| self.yearly_payments.get(i as usize))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_straight_line() {
        let m = monthly_payment(120000.0, 0.0, 5);
        assert_eq!(m, 120000.0 / 60.0);
    }

    #[test]
    fn amortized_payment_matches_reference_value() {
        // 500,000 @ 3% / 5년 → 약 8,984.35 / 월
        let m = monthly_payment(500000.0, 3.0, 5);
        assert!((m - 8984.35).abs() < 0.01, "monthly={m}");
    }

    #[test]
    fn non_positive_principal_has_no_payment() {
        assert_eq!(monthly_payment(0.0, 5.0, 3), 0.0);
        assert_eq!(monthly_payment(-100.0, 5.0, 3), 0.0);
    }

    #[test]
    fn schedule_stops_after_term() {
        let loan = Loan {
            term_years: 3,
            interest_rate_annual_pct: 0.0,
        };
        let s = LoanSchedule::build(360000.0, Some(&loan), 5);
        assert_eq!(s.yearly_payments, vec![120000.0, 120000.0, 120000.0, 0.0, 0.0]);
        assert_eq!(s.total_within_horizon, 360000.0);
        assert_eq!(s.payment_in_year(4), 0.0);
        assert_eq!(s.payment_in_year(0), 0.0);
    }

    #[test]
    fn schedule_clips_to_horizon() {
        let loan = Loan {
            term_years: 7,
            interest_rate_annual_pct: 0.0,
        };
        let s = LoanSchedule::build(840000.0, Some(&loan), 5);
        assert_eq!(s.yearly_payments.len(), 5);
        assert!((s.total_within_horizon - 600000.0).abs() < 1e-6);
    }

    #[test]
    fn cash_purchase_is_all_zero() {
        let s = LoanSchedule::build(600000.0, None, 4);
        assert_eq!(s, LoanSchedule::cash(4));
        assert!(s.yearly_payments.iter().all(|p| *p == 0.0));
    }
}
