//! Terminal report for one contract analysis.
//!
//! Renders the gauge, summary counts, ordered clause cards with confidence
//! badges, and the negotiation draft. Per-level and per-band visual
//! variants live in lookup tables here, decoupled from the core pipeline.

use clauseguard_core::{
    AnalysisResult, RiskBand, RiskLevel, Tone, classify, generate, map_score, order, summarize,
};

const MAX_CLAUSE_CHARS: usize = 160;

// ── Presentation lookup tables ──

/// Marker glyph shown next to each risk level.
fn risk_glyph(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "[!!]",
        RiskLevel::Medium => "[ !]",
        RiskLevel::Low => "[ok]",
    }
}

/// Band legend rows: (band, score range).
const BAND_LEGEND: &[(RiskBand, &str)] = &[
    (RiskBand::Safe, "0-30"),
    (RiskBand::Caution, "31-60"),
    (RiskBand::High, "61-80"),
    (RiskBand::Critical, "81-100"),
];

// ── Public API ──

/// Print the full findings report for one analysis result.
pub fn print_report(result: &AnalysisResult, tone: Tone) -> anyhow::Result<()> {
    print_gauge(result.risk_score)?;
    print_summary(result);
    print_issues(result)?;
    print_draft(result, tone);
    Ok(())
}

// ── Sections ──

fn print_gauge(risk_score: u8) -> anyhow::Result<()> {
    let reading = map_score(risk_score)?;

    println!("=== Risk Assessment ===");
    println!(
        "  {:<18} {}/100 ({})",
        "risk score",
        risk_score,
        reading.band.label()
    );
    println!("  {:<18} {:.1}°", "needle angle", reading.angle_degrees);
    for (band, range) in BAND_LEGEND {
        let marker = if *band == reading.band { ">" } else { " " };
        println!("  {} {:<16} {}", marker, band.label(), range);
    }
    println!();
    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    let summary = summarize(&result.issues);
    println!("=== Findings ===");
    println!(
        "  {} high, {} medium, {} low ({} total)",
        summary.high, summary.medium, summary.low, summary.total
    );
    println!();
}

fn print_issues(result: &AnalysisResult) -> anyhow::Result<()> {
    for issue in order(&result.issues) {
        let assessment = classify(issue.confidence)?;

        println!(
            "{} {} — {} ({}%)",
            risk_glyph(issue.risk_level),
            issue.risk_level.as_str(),
            assessment.tier.label(),
            assessment.percent
        );
        println!("  {:<14} {}", "clause", truncate(&issue.clause));
        println!("  {:<14} {}", "law cited", issue.law_cited);
        println!("  {:<14} {}", "explanation", issue.explanation);
        println!("  {:<14} {}", "confidence", assessment.tier.description());
        println!();
    }
    Ok(())
}

fn print_draft(result: &AnalysisResult, tone: Tone) {
    let draft = generate(&result.issues, tone);
    println!("=== Negotiation Draft ({}) ===", tone.as_str());
    println!();
    println!("{}", draft.body);
    println!();
    println!(
        "Addressing {} critical and {} moderate issues",
        draft.high_count, draft.medium_count
    );
}

// ── Helpers ──

/// Shorten long clause excerpts for the card view, on a char boundary.
fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CLAUSE_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_CLAUSE_CHARS - 3).collect();
    format!("{}...", cut.trim_end())
}
