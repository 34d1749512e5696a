//! Birth-date parsing and the two date-derived numbers.
//!
//! Both calculators share one parsing contract: strip every non-digit
//! character, require at least eight digits (YYYYMMDD), and check that
//! those digits name a real calendar date. Anything less is a
//! `MalformedDate` error rather than a silent absence.

use chrono::NaiveDate;
use thiserror::Error;

use crate::reduce::{reduce, Reduction};
use crate::reference::{ArchetypeProfile, ARCHETYPES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDate {
    #[error("birth date {input:?} yields {found} digits, need at least 8 (YYYYMMDD)")]
    TooFewDigits { input: String, found: usize },
    #[error("birth date {input:?} is not a valid calendar date")]
    NotACalendarDate { input: String },
}

/// A validated birth date plus the digit strings the calculators work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    year_digits: String,
    month_digits: String,
    day_digits: String,
}

impl BirthDate {
    pub fn parse(input: &str) -> Result<Self, MalformedDate> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 8 {
            return Err(MalformedDate::TooFewDigits {
                input: input.to_string(),
                found: digits.len(),
            });
        }

        let year_digits = digits[0..4].to_string();
        let month_digits = digits[4..6].to_string();
        let day_digits = digits[6..8].to_string();

        let year: u32 = year_digits.parse().unwrap_or(0);
        let month: u32 = month_digits.parse().unwrap_or(0);
        let day: u32 = day_digits.parse().unwrap_or(0);

        if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
            return Err(MalformedDate::NotACalendarDate {
                input: input.to_string(),
            });
        }

        Ok(Self {
            year,
            month,
            day,
            year_digits,
            month_digits,
            day_digits,
        })
    }

    fn digit_sum(digits: &str) -> u32 {
        digits.chars().filter_map(|c| c.to_digit(10)).sum()
    }
}

/// Life Path Number: full reduction of every birth-date digit, with its
/// calculation trace and the matching archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifePath {
    pub value: u32,
    pub steps: Vec<String>,
    pub archetype: &'static ArchetypeProfile,
}

pub fn life_path_number(dob: &str) -> Result<LifePath, MalformedDate> {
    let date = BirthDate::parse(dob)?;

    let year_sum = BirthDate::digit_sum(&date.year_digits);
    let month_sum = BirthDate::digit_sum(&date.month_digits);
    let day_sum = BirthDate::digit_sum(&date.day_digits);
    let total = year_sum + month_sum + day_sum;

    let joined = |digits: &str| {
        digits
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("+")
    };

    let mut steps = vec![
        format!(
            "{} (Year) + {} (Month) + {} (Day)",
            joined(&date.year_digits),
            joined(&date.month_digits),
            joined(&date.day_digits)
        ),
        format!("{} + {} + {} = {}", year_sum, month_sum, day_sum, total),
    ];

    let Reduction { value, steps: tail } = reduce(total);
    steps.extend(tail);

    // A valid calendar date has a nonzero month, so total >= 1 and the
    // reduced value sits in 1..=9.
    let archetype = &ARCHETYPES[value as usize - 1];

    Ok(LifePath { value, steps, archetype })
}

/// Fixed Number: calendar month plus calendar day, reduced. Describes
/// external behavior patterns rather than the full life path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNumber {
    pub value: u32,
    pub steps: Vec<String>,
    pub description: &'static str,
}

pub fn fixed_number(dob: &str) -> Result<FixedNumber, MalformedDate> {
    let date = BirthDate::parse(dob)?;

    let sum = date.month + date.day;
    let mut steps = vec![format!(
        "{} (Month) + {} (Day) = {}",
        date.month, date.day, sum
    )];

    let Reduction { value, steps: tail } = reduce(sum);
    steps.extend(tail);

    let description = ARCHETYPES[value as usize - 1].traits;

    Ok(FixedNumber { value, steps, description })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let d = BirthDate::parse("1990-05-15").unwrap();
        assert_eq!((d.year, d.month, d.day), (1990, 5, 15));
    }

    #[test]
    fn test_parse_accepts_other_separators() {
        // The contract is digits-only: separators are irrelevant.
        assert!(BirthDate::parse("1990/05/15").is_ok());
        assert!(BirthDate::parse("19900515").is_ok());
    }

    #[test]
    fn test_too_few_digits_is_an_error() {
        let err = life_path_number("1990-1").unwrap_err();
        assert!(matches!(err, MalformedDate::TooFewDigits { found: 5, .. }));
    }

    #[test]
    fn test_impossible_date_is_an_error() {
        let err = BirthDate::parse("1990-13-45").unwrap_err();
        assert!(matches!(err, MalformedDate::NotACalendarDate { .. }));
    }

    #[test]
    fn test_life_path_1990_05_15() {
        // 1+9+9+0=19, 0+5=5, 1+5=6, total 30, reduce -> 3
        let lp = life_path_number("1990-05-15").unwrap();
        assert_eq!(lp.value, 3);
        assert_eq!(lp.steps[0], "1+9+9+0 (Year) + 0+5 (Month) + 1+5 (Day)");
        assert_eq!(lp.steps[1], "19 + 5 + 6 = 30");
        assert_eq!(lp.steps[2], "3 + 0 = 3");
        assert_eq!(lp.archetype.archetype, "The Communicator");
    }

    #[test]
    fn test_fixed_number_1990_05_15() {
        // month 5 + day 15 = 20, reduce -> 2
        let fixed = fixed_number("1990-05-15").unwrap();
        assert_eq!(fixed.value, 2);
        assert_eq!(fixed.steps[0], "5 (Month) + 15 (Day) = 20");
        assert_eq!(fixed.steps[1], "2 + 0 = 2");
        assert!(fixed.description.starts_with("Cooperative"));
    }

    #[test]
    fn test_both_calculators_share_one_contract() {
        // The same malformed input fails the same way for both.
        assert!(life_path_number("not a date").is_err());
        assert!(fixed_number("not a date").is_err());
    }
}
