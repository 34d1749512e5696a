//! Digit-sum reduction with step tracing.
//!
//! Reduces any non-negative integer to a single decimal digit by repeatedly
//! summing its digits, recording each pass as a human-readable line.

/// Outcome of one reduction. `value` is a single digit; for any positive
/// input it lands in 1..=9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub value: u32,
    pub steps: Vec<String>,
}

fn digits_of(n: u32) -> Vec<u32> {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// Reduce `n` to a single digit. The digit sum of any multi-digit number is
/// strictly smaller than the number, so the loop always terminates.
pub fn reduce(n: u32) -> Reduction {
    let mut steps = Vec::new();
    let mut current = n;

    while current > 9 {
        let digits = digits_of(current);
        let sum: u32 = digits.iter().sum();
        let expr = digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        steps.push(format!("{} = {}", expr, sum));
        current = sum;
    }

    Reduction { value: current, steps }
}
