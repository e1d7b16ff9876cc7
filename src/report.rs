//! 비교 결과를 터미널용 텍스트 표로 만든다.

use crate::currency::{format_thb, PLACEHOLDER};
use crate::engine::{ComparisonOutput, VehicleResultSummary};
use crate::i18n::{keys, Translator};

/// 잔존가치 표기. 총비용에서 빠지는 값이므로 음수로 보인다.
pub fn resale_cell(r: &VehicleResultSummary) -> String {
    if r.resale_offset > 0.0 {
        format_thb(-r.resale_offset)
    } else {
        PLACEHOLDER.to_string()
    }
}

fn cost_per_km_cell(r: &VehicleResultSummary) -> String {
    match r.cost_per_km {
        Some(v) => format!("{}/km", format_thb(v)),
        None => PLACEHOLDER.to_string(),
    }
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, w))| {
            let pad = " ".repeat(w.saturating_sub(cell.chars().count()));
            if i == 0 {
                format!("{cell}{pad}")
            } else {
                format!("{pad}{cell}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// 간단한 고정폭 표. 첫 열은 왼쪽, 나머지는 오른쪽 정렬.
fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = render_line(headers.iter().copied(), &widths);
    out.push('\n');
    let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule));
    out.push('\n');
    for row in rows {
        out.push_str(&render_line(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out
}

/// 차량별 합계 표.
pub fn comparison_table(output: &ComparisonOutput, tr: &Translator) -> String {
    if output.results.is_empty() {
        return format!("{}\n", tr.t(keys::TABLE_NO_RESULTS));
    }
    let headers = [
        tr.t(keys::TABLE_VEHICLE),
        tr.t(keys::TABLE_TYPE),
        tr.t(keys::TABLE_TOTAL),
        tr.t(keys::TABLE_COST_PER_KM),
        tr.t(keys::TABLE_ENERGY),
        tr.t(keys::TABLE_MAINTENANCE),
        tr.t(keys::TABLE_LOAN),
        tr.t(keys::TABLE_RESALE),
    ];
    let rows: Vec<Vec<String>> = output
        .results
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.kind.to_string(),
                format_thb(r.total_cost),
                cost_per_km_cell(r),
                format_thb(r.total_fuel_or_electricity),
                format_thb(r.total_maintenance),
                format_thb(r.total_loan_payments),
                resale_cell(r),
            ]
        })
        .collect();
    let mut out = render(&headers, &rows);
    if let Some(best) = output.cheapest() {
        out.push_str(&tr.fill(
            keys::RESULT_CHEAPEST,
            &[
                ("name", best.name.clone()),
                ("total", format_thb(best.total_cost)),
            ],
        ));
        out.push('\n');
    }
    out
}

/// 한 차량의 연도별 표.
pub fn yearly_table(result: &VehicleResultSummary, tr: &Translator) -> String {
    let headers = [
        tr.t(keys::YEARLY_YEAR),
        tr.t(keys::TABLE_ENERGY),
        tr.t(keys::TABLE_MAINTENANCE),
        tr.t(keys::TABLE_LOAN),
        tr.t(keys::YEARLY_DEPRECIATION),
        tr.t(keys::YEARLY_CUMULATIVE),
    ];
    let rows: Vec<Vec<String>> = result
        .yearly
        .iter()
        .map(|y| {
            vec![
                y.year.to_string(),
                format_thb(y.fuel_or_electricity),
                format_thb(y.maintenance),
                format_thb(y.loan),
                format_thb(y.depreciation),
                format_thb(y.cumulative_total),
            ]
        })
        .collect();
    let heading = tr.fill(keys::YEARLY_HEADING, &[("name", result.name.clone())]);
    format!("{heading}\n{}", render(&headers, &rows))
}

/// 합계 표 + (선택) 차량별 연도 표.
pub fn full_report(output: &ComparisonOutput, tr: &Translator, with_yearly: bool) -> String {
    let mut out = comparison_table(output, tr);
    if with_yearly {
        for r in &output.results {
            out.push('\n');
            out.push_str(&yearly_table(r, tr));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::YearlyBreakdown;
    use crate::vehicle::VehicleKind;

    fn summary(name: &str, total: f64, resale: f64, per_km: Option<f64>) -> VehicleResultSummary {
        VehicleResultSummary {
            vehicle_id: name.to_lowercase(),
            name: name.into(),
            kind: VehicleKind::Ev,
            total_cost: total,
            cost_per_km: per_km,
            total_fuel_or_electricity: 1000.0,
            total_maintenance: 0.0,
            total_loan_payments: 0.0,
            resale_offset: resale,
            effective_annual_km: 0.0,
            monthly_loan_payment: 0.0,
            yearly: vec![YearlyBreakdown {
                year: 1,
                fuel_or_electricity: 1000.0,
                maintenance: 0.0,
                loan: 0.0,
                depreciation: 1234.5,
                cumulative_total: 2234.5,
            }],
        }
    }

    #[test]
    fn table_shows_placeholders_and_cheapest() {
        let tr = Translator::new("en-us");
        let output = ComparisonOutput {
            results: vec![
                summary("MG4", 500000.0, 300000.0, Some(8.33)),
                summary("Dolphin", 400000.0, 0.0, None),
            ],
        };
        let text = comparison_table(&output, &tr);
        assert!(text.starts_with("Vehicle"));
        assert!(text.contains("-฿300,000.00"));
        assert!(text.contains("฿8.33/km"));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Lowest total cost: Dolphin (฿400,000.00)"));
    }

    #[test]
    fn empty_output_has_message() {
        let tr = Translator::new("en-us");
        let text = comparison_table(&ComparisonOutput { results: vec![] }, &tr);
        assert_eq!(text, "No results yet.\n");
    }

    #[test]
    fn yearly_rows_are_aligned() {
        let tr = Translator::new("en-us");
        let text = yearly_table(&summary("MG4", 1.0, 0.0, None), &tr);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Yearly breakdown: MG4");
        assert!(lines[3].ends_with("฿2,234.50"));
        assert_eq!(lines[1].chars().count(), lines[3].chars().count());
    }
}
