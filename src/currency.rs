//! 반올림과 THB 표시 형식.

/// 표시할 수 없는 값(없음, 무한대, NaN)의 자리표시 문자.
pub const PLACEHOLDER: &str = "—";

/// 소수 둘째 자리 반올림. 0.5는 항상 위쪽으로 올리고, 이진 표현 오차를
/// 보정하기 위해 epsilon을 더한 뒤 반올림한다.
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0 + 0.5).floor() / 100.0
}

/// 천 단위 구분자를 넣은 고정 소수점 문자열.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }

    // -0.00 같은 표기는 피한다
    let nonzero = out.chars().any(|c| c.is_ascii_digit() && c != '0');
    if value < 0.0 && nonzero {
        out.insert(0, '-');
    }
    out
}

/// THB 통화 표기 (예: `฿1,234.56`, `-฿50.00`).
pub fn format_thb(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let body = group_thousands(value, 2);
    match body.strip_prefix('-') {
        Some(abs) => format!("-฿{abs}"),
        None => format!("฿{body}"),
    }
}

/// 값이 없으면 자리표시 문자를 쓴다.
pub fn format_thb_opt(value: Option<f64>) -> String {
    value.map(format_thb).unwrap_or_else(|| PLACEHOLDER.to_string())
}
