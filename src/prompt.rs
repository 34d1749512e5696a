//! The master prompt sent to the oracle providers.
//!
//! The template carries the full reference table and the exact JSON output
//! contract, so the provider's answer can be deserialized into
//! [`crate::report::OracleReport`] without guesswork.

use crate::report::LabeledString;

pub const PROMPT_TEMPLATE: &str = r#"Act as an expert in Life Path Numerology and I Ching Numerology. Please perform a multi-layered analysis for me using the following inputs:
- Subject Name: {{user_name}}
- Input 1 (Static Fate / Birth Date): [{{dob}}]
- Input 2 ({{label_1}}): [{{number_1}}]
- Input 3 ({{label_2}}): [{{number_2}}]
- Output Language: {{language}}

# ReferenceTable1
## Four Auspicious Numbers (四吉數)
- 生氣 (Sheng Qi) | 貴人 (Nobleman/Mentors): 14, 67, 93, 82, 41, 76, 39, 28
- 天醫 (Tian Yi) | 財富 (Wealth): 13, 68, 49, 72, 31, 86, 94, 27
- 延年 (Yan Nian) | 責任 (Responsibility): 19, 87, 34, 26, 91, 78, 43, 62
- 伏位 (Fu Wei) | 固執 (Perseverance/Stability): 11, 88, 77, 33, 22, 99, 66, 44

## Four Inauspicious Numbers (四凶數)
- 絕命 (Jue Ming) | 波動 (Fluctuation/Risk): 12, 69, 84, 37, 21, 96, 48, 73
- 五鬼 (Wu Gui) | 詭異 (Bizarre/Unpredictable): 18, 79, 42, 36, 81, 97, 24, 63
- 六煞 (Liu Sha) | 矛盾 (Conflict/Relationship): 16, 47, 38, 92, 61, 74, 83, 29
- 禍害 (Huo Hai) | 衝擊 (Impact/Mishap): 17, 89, 46, 23, 71, 98, 64, 32

# Special Rules
- Concealment Rule: The digit '0' acts as a mantle of invisibility, concealing the energy of adjacent digits.
- Bridge Rule: The digit '5' acts as a bridge, strengthening and amplifying the connection between the digits on either side.

# Instructions
1. Life Path & Social Image Analysis
- Step-by-Step Calculation: Calculate the Life Path Number by summing every digit of the birth date until a single digit (1–9) is reached. Show the math clearly.
- Number Type Analysis: Identify the 'Number Person' type (1-9), detailing innate traits, hidden desires, strengths, and weaknesses.
- Fixed Number: Calculate the Fixed Number (Month + Day reduced to a single digit) to describe external behavior patterns and social image.

2. I Ching 'DNA' Analysis of Digital Strings
- Analyze Input 2 and Input 3 for pairing sequences based on #ReferenceTable1.
- Provide a detailed summary of the energy flow for each string, respecting their specific context ({{label_1}} and {{label_2}}).

3. Summary of 'Shu' (Number)
- Explain how the Life Path (Static) and Dynamic Strings (Active Field) interact based on the I Ching principle of 'Shu'.
- Provide a final strategic verdict (ADVANCE, RETREAT, or BALANCE) based on whether the 'Time' and 'Position' are currently auspicious.

# OUTPUT FORMAT
Provide the report EXACTLY in the following JSON structure.
IMPORTANT: All string values in the JSON (descriptions, analysis, meanings) MUST be written in {{language}}. Keep JSON keys in English.
{
  "report_meta": {
    "subject": "string",
    "generation_date": "YYYY-MM-DD",
    "version": "1.1",
    "note": "string"
  },
  "life_path_analysis": {
    "life_path_number": {
      "value": number,
      "calculation_steps": "string",
      "archetype": "string",
      "traits": ["string"],
      "strengths": ["string"],
      "weaknesses": ["string"],
      "hidden_desire": "string",
      "detailed_analysis": "string"
    },
    "fixed_number": {
      "value": number,
      "calculation_steps": "string",
      "social_image": "string",
      "description": "string",
      "detailed_analysis": "string"
    }
  },
  "iching_dna_analysis": {
    "string_1_analysis": {
      "input": "string",
      "label": "string",
      "detailed_summary": "string",
      "pairs": [
        {
          "pair": "string",
          "name_cn": "string",
          "name_en": "string",
          "attribute": "string",
          "type": "Auspicious | Inauspicious",
          "meaning": "string"
        }
      ]
    },
    "string_2_analysis": {
      "input": "string",
      "label": "string",
      "detailed_summary": "string",
      "pairs": [...]
    }
  },
  "shu_summary": {
    "interaction": "string",
    "verdict": "ADVANCE | RETREAT | BALANCE",
    "guidance": "string"
  }
}"#;

/// Everything the template needs.
#[derive(Debug, Clone)]
pub struct PromptInput {
    pub user_name: String,
    pub dob: String,
    pub string_1: LabeledString,
    pub string_2: LabeledString,
    pub language: String,
}

/// Hydrate the template with user data.
pub fn render_prompt(input: &PromptInput) -> String {
    PROMPT_TEMPLATE
        .replace("{{user_name}}", &input.user_name)
        .replace("{{dob}}", &input.dob)
        .replace("{{label_1}}", &input.string_1.label)
        .replace("{{number_1}}", &input.string_1.value)
        .replace("{{label_2}}", &input.string_2.label)
        .replace("{{number_2}}", &input.string_2.value)
        .replace("{{language}}", &input.language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> PromptInput {
        PromptInput {
            user_name: "Mei".into(),
            dob: "1990-05-15".into(),
            string_1: LabeledString { label: "Phone Number".into(), value: "0912345678".into() },
            string_2: LabeledString { label: "License Plate".into(), value: "8817".into() },
            language: "English".into(),
        }
    }

    #[test]
    fn test_every_placeholder_substituted() {
        let prompt = render_prompt(&sample_input());
        assert!(!prompt.contains("{{"), "unsubstituted placeholder left in prompt");
        assert!(prompt.contains("Subject Name: Mei"));
        assert!(prompt.contains("[1990-05-15]"));
        assert!(prompt.contains("Input 2 (Phone Number): [0912345678]"));
        assert!(prompt.contains("Input 3 (License Plate): [8817]"));
    }

    #[test]
    fn test_language_appears_in_both_slots() {
        let prompt = render_prompt(&sample_input());
        assert_eq!(prompt.matches("English").count(), 2);
    }

    #[test]
    fn test_template_carries_full_reference_table() {
        for group in ["Sheng Qi", "Tian Yi", "Yan Nian", "Fu Wei", "Jue Ming", "Wu Gui", "Liu Sha", "Huo Hai"] {
            assert!(PROMPT_TEMPLATE.contains(group), "missing {}", group);
        }
    }
}
