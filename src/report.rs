//! Report types: the structured JSON document the oracle providers return,
//! and the locally-computed analysis that backs it.
//!
//! The provider payload comes from a generative model with no format
//! guarantee, so it is deserialized into explicit types and value-checked
//! at the boundary. Shape or range violations surface as errors.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::birthdate::{fixed_number, life_path_number, MalformedDate};
use crate::pairs::{scan, PairMatch};
use crate::reference::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Advance,
    Retreat,
    Balance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub subject: String,
    pub generation_date: String,
    pub version: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifePathDetail {
    pub value: u32,
    pub calculation_steps: String,
    pub archetype: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub hidden_desire: String,
    #[serde(default)]
    pub detailed_analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedNumberDetail {
    pub value: u32,
    pub calculation_steps: String,
    #[serde(default)]
    pub social_image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifePathAnalysis {
    pub life_path_number: LifePathDetail,
    pub fixed_number: FixedNumberDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPair {
    pub pair: String,
    #[serde(default)]
    pub name_cn: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub attribute: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default)]
    pub meaning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringAnalysis {
    pub input: String,
    pub label: String,
    #[serde(default)]
    pub detailed_summary: String,
    #[serde(default)]
    pub pairs: Vec<ReportPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IchingDnaAnalysis {
    pub string_1_analysis: StringAnalysis,
    pub string_2_analysis: StringAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuSummary {
    #[serde(default)]
    pub interaction: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub guidance: String,
}

/// The full multi-section report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleReport {
    pub report_meta: ReportMeta,
    pub life_path_analysis: LifePathAnalysis,
    pub iching_dna_analysis: IchingDnaAnalysis,
    pub shu_summary: ShuSummary,
}

impl OracleReport {
    /// Value checks beyond what deserialization enforces.
    pub fn validate(&self) -> Result<()> {
        if self.report_meta.subject.trim().is_empty() {
            bail!("report_meta.subject is empty");
        }
        let life = self.life_path_analysis.life_path_number.value;
        if !(1..=9).contains(&life) {
            bail!("life_path_number.value {} outside 1..=9", life);
        }
        let fixed = self.life_path_analysis.fixed_number.value;
        if !(1..=9).contains(&fixed) {
            bail!("fixed_number.value {} outside 1..=9", fixed);
        }
        Ok(())
    }

    /// Parse and validate an untrusted provider payload.
    pub fn from_untrusted_json(text: &str) -> Result<Self> {
        let report: OracleReport = serde_json::from_str(text)?;
        report.validate()?;
        Ok(report)
    }
}

// ---------------------------------------------------------------------------
// Local analysis (no provider involved)
// ---------------------------------------------------------------------------

/// One labeled numeric string to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledString {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalPair {
    pub pair: String,
    pub name: &'static str,
    pub attribute: &'static str,
    pub category: Category,
    pub meaning: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<PairMatch> for LocalPair {
    fn from(m: PairMatch) -> Self {
        Self {
            pair: m.pair,
            name: m.combination.name,
            attribute: m.combination.attribute,
            category: m.combination.category,
            meaning: m.combination.meaning,
            note: m.note,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalStringScan {
    pub label: String,
    pub input: String,
    pub pairs: Vec<LocalPair>,
}

/// The crate's own computation: life path, fixed number, and the pair
/// scans of both labeled strings.
#[derive(Debug, Clone, Serialize)]
pub struct LocalAnalysis {
    pub subject: String,
    pub dob: String,
    pub life_path_value: u32,
    pub life_path_steps: Vec<String>,
    pub life_path_archetype: &'static str,
    pub fixed_value: u32,
    pub fixed_steps: Vec<String>,
    pub fixed_description: &'static str,
    pub scans: Vec<LocalStringScan>,
}

impl LocalAnalysis {
    pub fn compute(
        subject: &str,
        dob: &str,
        strings: &[LabeledString],
    ) -> Result<Self, MalformedDate> {
        let life = life_path_number(dob)?;
        let fixed = fixed_number(dob)?;

        let scans = strings
            .iter()
            .map(|s| LocalStringScan {
                label: s.label.clone(),
                input: s.value.clone(),
                pairs: scan(&s.value).into_iter().map(LocalPair::from).collect(),
            })
            .collect();

        Ok(Self {
            subject: subject.to_string(),
            dob: dob.to_string(),
            life_path_value: life.value,
            life_path_steps: life.steps,
            life_path_archetype: life.archetype.archetype,
            fixed_value: fixed.value,
            fixed_steps: fixed.steps,
            fixed_description: fixed.description,
            scans,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_format() {
        assert_eq!(serde_json::to_string(&Verdict::Advance).unwrap(), "\"ADVANCE\"");
        let v: Verdict = serde_json::from_str("\"RETREAT\"").unwrap();
        assert_eq!(v, Verdict::Retreat);
        assert!(serde_json::from_str::<Verdict>("\"SIDEWAYS\"").is_err());
    }

    #[test]
    fn test_category_wire_format() {
        let c: Category = serde_json::from_str("\"Inauspicious\"").unwrap();
        assert_eq!(c, Category::Inauspicious);
    }

    #[test]
    fn test_local_analysis() {
        let strings = vec![
            LabeledString { label: "Phone Number".into(), value: "0912-752-99".into() },
            LabeledString { label: "License Plate".into(), value: "XYZ".into() },
        ];
        let local = LocalAnalysis::compute("Mei", "1990-05-15", &strings).unwrap();
        assert_eq!(local.life_path_value, 3);
        assert_eq!(local.fixed_value, 2);
        assert_eq!(local.scans.len(), 2);
        assert!(!local.scans[0].pairs.is_empty());
        assert!(local.scans[1].pairs.is_empty());
    }

    #[test]
    fn test_local_analysis_rejects_bad_dob() {
        assert!(LocalAnalysis::compute("Mei", "1990-1", &[]).is_err());
    }
}
