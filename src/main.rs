// Contrast Check Tool
// Command-line front end over the accessibility engine: computes the
// contrast ratio and badge for a background/text pair and suggests
// AAA-compliant fixes when the pair falls short.

use anyhow::{anyhow, Context, Result};
use contrast_kit::models::compliance::Standard;
use contrast_kit::services::accessibility;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let colors: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if colors.len() != 2 {
        return Err(anyhow!(
            "usage: contrast-check [--json] <background> <text>\n\
             colors: #rrggbb, rgb(r, g, b), hsl(h, s%, l%), or \"H S% L%\""
        ));
    }

    let background = colors[0];
    let text = colors[1];

    log::info!("Checking contrast of {} on {}", text, background);

    let report = accessibility::audit_pair(background, text)
        .with_context(|| format!("could not parse \"{}\" / \"{}\" as colors", background, text))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Contrast ratio: {:.2}:1", report.ratio);
    println!("Badge: {} ({})", report.badge.label, report.badge.style_hint);
    println!(
        "AA: {}   AAA: {}   large text: {}",
        pass(report.meets_aa),
        pass(report.meets_aaa),
        pass(report.meets_large_text)
    );

    if !accessibility::meets_contrast_standard(report.ratio, Standard::Aaa) {
        // Offer both repair directions so the caller can pick which
        // side of the pair to change
        if let Some(fixed) = accessibility::fix_text_for_aaa(text, background) {
            let hex = accessibility::hsl_to_hex(&fixed).unwrap_or_default();
            println!("Suggested text fix: {} ({})", fixed, hex);
        }
        if let Some(fixed) = accessibility::fix_background_for_aaa(background, text) {
            let hex = accessibility::hsl_to_hex(&fixed).unwrap_or_default();
            println!("Suggested background fix: {} ({})", fixed, hex);
        }
    }

    Ok(())
}

fn pass(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}
