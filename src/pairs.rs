//! Sliding-window pair scan of a numeric string against the reference table.
//!
//! Two rewrite rules apply before matching:
//! - Concealment: '0' hides the energy of the digit before it.
//! - Bridge: '5' joins the digits on either side of it into one three-digit
//!   pairing unit, amplifying their connection.

use crate::reference::{lookup_pair, NumberCombination};

/// One matched pairing. `pair` is the literal digits (three characters when
/// a bridge digit is included); `note` is present only for bridge matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatch {
    pub pair: String,
    pub combination: &'static NumberCombination,
    pub note: Option<String>,
}

/// Scan `raw` for adjacent-digit pairings, left to right. Non-digit
/// characters are stripped first; an input with fewer than two digits
/// yields no matches.
pub fn scan(raw: &str) -> Vec<PairMatch> {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut matches = Vec::new();

    if digits.len() < 2 {
        return matches;
    }

    for i in 0..digits.len() - 1 {
        let first = digits[i];
        let second = digits[i + 1];

        if second == '5' {
            // Bridge Rule: the 5 links the digits around it ("752" -> "72").
            // The plain (first, '5') pair is never emitted.
            if let Some(&third) = digits.get(i + 2) {
                let bridged: String = [first, third].iter().collect();
                if let Some(found) = lookup_pair(&bridged) {
                    matches.push(PairMatch {
                        pair: [first, '5', third].iter().collect(),
                        combination: found,
                        note: Some(format!(
                            "The 5 bridges the {} and {}, strengthening the {} energy.",
                            first, third, found.name
                        )),
                    });
                }
            }
            continue;
        }

        // A pair cannot start on a concealed or bridging digit.
        if first == '0' || first == '5' {
            continue;
        }

        // Concealment Rule: a following 0 hides this digit's energy.
        if second == '0' {
            continue;
        }

        let pair: String = [first, second].iter().collect();
        if let Some(found) = lookup_pair(&pair) {
            matches.push(PairMatch {
                pair,
                combination: found,
                note: None,
            });
        }
    }

    matches
}
