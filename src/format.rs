//! Display strings for metrics and axis labels.

/// Whole dollars with thousands separators: `$1,234`, `$-56`.
pub fn currency(value: f64) -> String {
    format!("${}", group_thousands(&format!("{value:.0}")))
}

/// One decimal place and a percent sign: `12.3%`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Compact currency for chart axes: `$950`, `$12.5k`, `$1.3M`.
pub fn compact_currency(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.1}k", abs / 1_000.0)
    } else {
        format!("{sign}${abs:.0}")
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}
