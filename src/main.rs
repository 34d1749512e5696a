use anyhow::{bail, Result};

use shushu::config::Config;
use shushu::logging::{json_log, obj, v_num, v_str, Domain};
use shushu::oracle::ProviderKind;
use shushu::prompt::{render_prompt, PromptInput};
use shushu::report::{LabeledString, LocalAnalysis};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        eprintln!("usage: shushu <name> <dob> <string1> <string2>");
        eprintln!("  dob accepts any format with at least YYYYMMDD digits, e.g. 1990-05-15");
        eprintln!("  labels via STRING_1_LABEL / STRING_2_LABEL, model via ORACLE_MODEL");
        bail!("expected 4 arguments, got {}", args.len());
    }
    let (name, dob) = (&args[0], &args[1]);

    let cfg = Config::from_env();
    let string_1 = LabeledString {
        label: cfg.string_1_label.clone(),
        value: args[2].clone(),
    };
    let string_2 = LabeledString {
        label: cfg.string_2_label.clone(),
        value: args[3].clone(),
    };

    json_log(
        Domain::System,
        "start",
        obj(&[
            ("subject", v_str(name)),
            ("model", v_str(&cfg.model)),
            ("language", v_str(&cfg.language)),
        ]),
    );

    // Local computation first: it validates the birth date before any
    // provider is contacted.
    let local = LocalAnalysis::compute(name, dob, &[string_1.clone(), string_2.clone()])?;
    json_log(
        Domain::Calc,
        "life_path",
        obj(&[
            ("value", v_num(local.life_path_value as f64)),
            ("archetype", v_str(local.life_path_archetype)),
        ]),
    );
    json_log(
        Domain::Calc,
        "fixed_number",
        obj(&[("value", v_num(local.fixed_value as f64))]),
    );
    for scan in &local.scans {
        json_log(
            Domain::Scan,
            "pairs",
            obj(&[
                ("label", v_str(&scan.label)),
                ("matches", v_num(scan.pairs.len() as f64)),
            ]),
        );
    }

    // Without credentials for the configured model, stop at the local
    // analysis (same live/stub switch as a missing exchange key).
    if !cfg.has_credentials(&cfg.model) {
        json_log(
            Domain::System,
            "offline",
            obj(&[("reason", v_str("no API key for configured model"))]),
        );
        println!("{}", serde_json::to_string_pretty(&local)?);
        return Ok(());
    }

    let prompt = render_prompt(&PromptInput {
        user_name: name.clone(),
        dob: dob.clone(),
        string_1,
        string_2,
        language: cfg.language.clone(),
    });

    let provider = ProviderKind::for_model(&cfg.model).build(cfg.clone())?;
    let report = provider.generate_report(&prompt).await?;

    json_log(
        Domain::Report,
        "verdict",
        obj(&[("verdict", v_str(&format!("{:?}", report.shu_summary.verdict)))]),
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "local_analysis": local,
            "oracle_report": report,
        }))?
    );
    Ok(())
}
