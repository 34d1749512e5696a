//! Boundary validation of provider payloads: well-formed reports parse,
//! malformed or out-of-range ones are rejected.

use shushu::report::{OracleReport, Verdict};

fn sample_report_json() -> String {
    serde_json::json!({
        "report_meta": {
            "subject": "Chen Wei",
            "generation_date": "2026-08-30",
            "version": "1.1",
            "note": "For reference only."
        },
        "life_path_analysis": {
            "life_path_number": {
                "value": 5,
                "calculation_steps": "1+9+8+8 (Year) + 1+2 (Month) + 0+3 (Day); 26 + 3 + 3 = 32; 3 + 2 = 5",
                "archetype": "The Versatile Adventurer",
                "traits": ["Versatile", "Adventurous"],
                "strengths": ["Adaptability"],
                "weaknesses": ["Impulsiveness"],
                "hidden_desire": "Freedom to explore.",
                "detailed_analysis": "A restless, progressive energy."
            },
            "fixed_number": {
                "value": 6,
                "calculation_steps": "12 (Month) + 3 (Day) = 15; 1 + 5 = 6",
                "social_image": "The Guardian",
                "description": "Responsible and protective.",
                "detailed_analysis": "Others see a caretaker."
            }
        },
        "iching_dna_analysis": {
            "string_1_analysis": {
                "input": "0952148367",
                "label": "Phone",
                "detailed_summary": "Strong mentor energy with a bridge.",
                "pairs": [
                    {
                        "pair": "14",
                        "name_cn": "生氣",
                        "name_en": "Sheng Qi",
                        "attribute": "Nobleman/Mentors",
                        "type": "Auspicious",
                        "meaning": "The star of mentors."
                    }
                ]
            },
            "string_2_analysis": {
                "input": "2099",
                "label": "Plate",
                "detailed_summary": "Stability at the tail.",
                "pairs": []
            }
        },
        "shu_summary": {
            "interaction": "Static and active fields align.",
            "verdict": "ADVANCE",
            "guidance": "The time is auspicious; act."
        }
    })
    .to_string()
}

#[test]
fn well_formed_report_parses_and_validates() {
    let report = OracleReport::from_untrusted_json(&sample_report_json()).unwrap();
    assert_eq!(report.report_meta.subject, "Chen Wei");
    assert_eq!(report.life_path_analysis.life_path_number.value, 5);
    assert_eq!(report.shu_summary.verdict, Verdict::Advance);
    assert_eq!(
        report.iching_dna_analysis.string_1_analysis.pairs[0].pair,
        "14"
    );
}

#[test]
fn report_round_trips_through_serde() {
    let report = OracleReport::from_untrusted_json(&sample_report_json()).unwrap();
    let reserialized = serde_json::to_string(&report).unwrap();
    let again = OracleReport::from_untrusted_json(&reserialized).unwrap();
    assert_eq!(again.report_meta.subject, report.report_meta.subject);
}

#[test]
fn missing_section_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&sample_report_json()).unwrap();
    value.as_object_mut().unwrap().remove("shu_summary");
    assert!(OracleReport::from_untrusted_json(&value.to_string()).is_err());
}

#[test]
fn unknown_verdict_is_rejected() {
    let patched = sample_report_json().replace("\"ADVANCE\"", "\"PANIC\"");
    assert!(OracleReport::from_untrusted_json(&patched).is_err());
}

#[test]
fn out_of_range_life_path_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&sample_report_json()).unwrap();
    value["life_path_analysis"]["life_path_number"]["value"] = serde_json::json!(11);
    assert!(OracleReport::from_untrusted_json(&value.to_string()).is_err());
}

#[test]
fn empty_subject_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&sample_report_json()).unwrap();
    value["report_meta"]["subject"] = serde_json::json!("  ");
    assert!(OracleReport::from_untrusted_json(&value.to_string()).is_err());
}

#[test]
fn non_json_payload_is_rejected() {
    assert!(OracleReport::from_untrusted_json("I am not JSON").is_err());
    assert!(OracleReport::from_untrusted_json("").is_err());
}
