//! Cell-level value parsers.
//!
//! Every parser is total: sentinels and malformed input come back as `None`,
//! never as zero.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::model::CellValue;

/// Year `Company Age` is measured against unless configured otherwise.
pub const DEFAULT_REFERENCE_YEAR: i64 = 2025;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("Invalid digit-run pattern"));

/// Salary bounds in dollars from a range such as `"$53K-$91K (Glassdoor est.)"`.
///
/// The first two digit runs, in source order, are the bounds in thousands.
/// Fewer than two runs gives `(None, None)`.
pub fn parse_salary(cell: &CellValue) -> (Option<i64>, Option<i64>) {
    let Some(text) = cell.label() else {
        return (None, None);
    };
    let mut runs = DIGIT_RUN
        .find_iter(&text)
        .map(|m| thousands(m.as_str()));
    match (runs.next(), runs.next()) {
        (Some(Some(low)), Some(Some(high))) => (Some(low), Some(high)),
        _ => (None, None),
    }
}

fn thousands(digits: &str) -> Option<i64> {
    digits.parse::<i64>().ok()?.checked_mul(1000)
}

/// Years between `reference_year` and the founding year.
pub fn company_age(cell: &CellValue, reference_year: i64) -> Option<i64> {
    if cell.is_sentinel() {
        return None;
    }
    let year = match cell {
        CellValue::Integer(year) => *year,
        CellValue::Float(year) if year.is_finite() && year.fract() == 0.0 => *year as i64,
        CellValue::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    if year == -1 {
        return None;
    }
    reference_year.checked_sub(year)
}

/// Representative head count of an employee bucket.
///
/// `"10000+ employees"` gives its floor, `"201 to 500 employees"` the
/// truncated midpoint. Anything else is `None`.
pub fn size_mean(cell: &CellValue) -> Option<i64> {
    if cell.is_sentinel() {
        return None;
    }
    let size = cell.as_str()?;
    if size.contains('+') {
        return parse_number(&size.replace("+ employees", "")).map(|floor| floor as i64);
    }
    if size.contains("to") {
        let stripped = size.replace("employees", "");
        let (low, high) = split_range(&stripped)?;
        let mean = (parse_number(low)? + parse_number(high)?) / 2.0;
        return Some(mean.trunc() as i64);
    }
    None
}

/// Midpoint in dollars of a revenue bucket such as `"$100 to $500 million (USD)"`.
///
/// Only the upper bound states its unit in the source buckets, so the
/// upper bound's unit scales both bounds.
pub fn revenue_mean(cell: &CellValue) -> Option<f64> {
    if cell.is_sentinel() {
        return None;
    }
    let revenue = cell.as_str()?.replace("(USD)", "").replace('$', "");
    let (low, high) = split_range(revenue.trim())?;
    let multiplier = unit_multiplier(high)?;
    let low = parse_number(&strip_units(low))? * multiplier;
    let high = parse_number(&strip_units(high))? * multiplier;
    Some((low + high) / 2.0)
}

fn unit_multiplier(text: &str) -> Option<f64> {
    if text.contains("million") {
        Some(1_000_000.0)
    } else if text.contains("billion") {
        Some(1_000_000_000.0)
    } else {
        None
    }
}

fn strip_units(text: &str) -> String {
    text.replace("million", "").replace("billion", "")
}

/// Split `"A to B"` into its two sides. More than one separator is malformed.
fn split_range(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.split("to");
    let low = parts.next()?;
    let high = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((low, high))
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::UNKNOWN_LABEL;

    fn s(text: &str) -> CellValue {
        CellValue::from(text)
    }

    #[test]
    fn salary_range_in_thousands() {
        assert_eq!(
            parse_salary(&s("$53K-$91K (Glassdoor est.)")),
            (Some(53_000), Some(91_000))
        );
        assert_eq!(
            parse_salary(&s("$110K-$190K (Employer est.)")),
            (Some(110_000), Some(190_000))
        );
    }

    #[test]
    fn salary_needs_two_digit_runs() {
        assert_eq!(parse_salary(&s("-1")), (None, None));
        assert_eq!(parse_salary(&s("$50K (est.)")), (None, None));
        assert_eq!(parse_salary(&CellValue::Integer(-1)), (None, None));
        assert_eq!(parse_salary(&CellValue::Null), (None, None));
    }

    #[test]
    fn salary_uses_first_two_runs_only() {
        assert_eq!(
            parse_salary(&s("$10K-$20K per 30 days")),
            (Some(10_000), Some(20_000))
        );
    }

    #[test]
    fn salary_overflow_is_absent() {
        assert_eq!(
            parse_salary(&s("$99999999999999999999K-$1K")),
            (None, None)
        );
    }

    #[test]
    fn company_age_from_year() {
        assert_eq!(company_age(&CellValue::Integer(1999), 2025), Some(26));
        assert_eq!(company_age(&CellValue::Float(2000.0), 2025), Some(25));
        assert_eq!(company_age(&s("1990"), 2025), Some(35));
        assert_eq!(company_age(&CellValue::Integer(1999), 2030), Some(31));
    }

    #[test]
    fn company_age_sentinels_are_absent() {
        assert_eq!(company_age(&CellValue::Integer(-1), 2025), None);
        assert_eq!(company_age(&s("-1"), 2025), None);
        assert_eq!(company_age(&CellValue::Null, 2025), None);
        assert_eq!(company_age(&s(UNKNOWN_LABEL), 2025), None);
        assert_eq!(company_age(&CellValue::Float(1999.5), 2025), None);
    }

    #[test]
    fn size_open_bucket_uses_floor() {
        assert_eq!(size_mean(&s("10000+ employees")), Some(10_000));
    }

    #[test]
    fn size_closed_bucket_truncates_mean() {
        assert_eq!(size_mean(&s("201 to 500 employees")), Some(350));
        assert_eq!(size_mean(&s("1 to 50 employees")), Some(25));
        assert_eq!(size_mean(&s("5001 to 10000 employees")), Some(7500));
    }

    #[test]
    fn size_sentinels_and_junk_are_absent() {
        assert_eq!(size_mean(&s(UNKNOWN_LABEL)), None);
        assert_eq!(size_mean(&s("-1")), None);
        assert_eq!(size_mean(&CellValue::Integer(-1)), None);
        assert_eq!(size_mean(&s("lots of employees")), None);
        assert_eq!(size_mean(&s("few to many employees")), None);
    }

    #[test]
    fn revenue_million_bucket() {
        assert_eq!(revenue_mean(&s("$100 to $500 million (USD)")), Some(300_000_000.0));
        assert_eq!(revenue_mean(&s("$1 to $5 million (USD)")), Some(3_000_000.0));
    }

    #[test]
    fn revenue_billion_bucket() {
        assert_eq!(revenue_mean(&s("$2 to $5 billion (USD)")), Some(3_500_000_000.0));
    }

    #[test]
    fn revenue_upper_unit_scales_both_bounds() {
        // "500 million" is read as 500 billion.
        assert_eq!(
            revenue_mean(&s("$500 million to $1 billion (USD)")),
            Some(250_500_000_000.0)
        );
    }

    #[test]
    fn revenue_without_range_or_unit_is_absent() {
        assert_eq!(revenue_mean(&s("Less than $1 million (USD)")), None);
        assert_eq!(revenue_mean(&s("$10+ billion (USD)")), None);
        assert_eq!(revenue_mean(&s("$1 to $5 thousand (USD)")), None);
        assert_eq!(revenue_mean(&s(UNKNOWN_LABEL)), None);
        assert_eq!(revenue_mean(&CellValue::Integer(-1)), None);
    }
}
