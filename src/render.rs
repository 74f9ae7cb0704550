//! Terminal rendering of analytics output.
//!
//! All the aggregation happens in insight-analytics; this module only turns
//! the resulting structures into text.

use anyhow::{bail, Result};
use insight_analytics::aggregations::agent_performance;
use insight_analytics::quality::{
    classify, filter_conversations, quality_score, ConversationQuery, QualityTier,
};
use insight_analytics::reports::{format_secs, ReportGenerator};
use insight_core::types::{Interaction, Sender};

const HEADER: &str = "\x1b[1;36m";
const GOOD: &str = "\x1b[1;32m";
const WARN: &str = "\x1b[1;33m";
const BAD: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Print the compact dashboard overview.
pub fn overview(records: &[Interaction]) {
    println!("{HEADER}Dashboard{RESET}");
    print!("{}", ReportGenerator::text_summary(records));
}

/// Print the per-agent performance table.
pub fn agents(records: &[Interaction]) {
    let performance = agent_performance(records);
    if performance.is_empty() {
        println!("No interactions have an assigned agent.");
        return;
    }

    println!("{HEADER}Agent Performance{RESET}");
    println!(
        "  {:<20} {:>8} {:>12} {:>14} {:>13}",
        "Agent", "Handled", "Resolution", "Avg Time", "Satisfaction"
    );
    for agent in &performance {
        println!(
            "  {:<20} {:>8} {:>11.1}% {:>14} {:>13.1}",
            agent.agent_name,
            agent.interactions_handled,
            agent.resolution_rate,
            format_secs(agent.avg_resolution_time_seconds),
            agent.avg_customer_satisfaction,
        );
        if !agent.top_handoff_reasons.is_empty() {
            let reasons: Vec<String> = agent
                .top_handoff_reasons
                .iter()
                .map(|r| format!("{}({})", r.reason, r.count))
                .collect();
            println!("    handoffs: {}", reasons.join(" "));
        }
    }
}

/// Print the filtered conversation listing with scores and labels.
pub fn conversations(records: &[Interaction], query: &ConversationQuery) {
    let hits = filter_conversations(records, query);
    println!(
        "{HEADER}Conversations{RESET} ({} of {})",
        hits.len(),
        records.len()
    );

    for record in hits {
        let score = quality_score(record);
        let tier = classify(record);
        let color = tier_color(tier);
        let agent = record.assigned_agent.as_deref().unwrap_or("bot only");
        println!(
            "  {:<12} {}{:>5.0} {}{} [{}] {}",
            record.id,
            color,
            score,
            tier.label(),
            RESET,
            agent,
            truncate(&record.customer_message, 60),
        );
    }
}

/// Print one conversation transcript with its outcome summary.
pub fn transcript(records: &[Interaction], id: &str) -> Result<()> {
    let Some(record) = records.iter().find(|r| r.id == id) else {
        bail!("no interaction with id: {id}");
    };

    println!(
        "{HEADER}Conversation {}{RESET} ({} / {})",
        record.id,
        record.channel.as_str(),
        record.intent,
    );

    if record.conversation_history.is_empty() {
        println!("  (no transcript recorded)");
    }
    for msg in &record.conversation_history {
        let tag = match msg.sender {
            Sender::Customer => format!("{GOOD}customer{RESET}"),
            Sender::Bot => format!("{HEADER}bot{RESET}"),
            Sender::Agent => format!("{WARN}agent{RESET}"),
        };
        let emotion = msg
            .emotion
            .as_deref()
            .map(|e| format!(" [{e}]"))
            .unwrap_or_default();
        println!(
            "  {} {}{}: {}",
            msg.timestamp.format("%H:%M:%S"),
            tag,
            emotion,
            msg.message
        );
    }

    let score = quality_score(record);
    let tier = classify(record);
    println!();
    println!(
        "  Quality: {}{:.0} {}{}",
        tier_color(tier),
        score,
        tier.label(),
        RESET
    );
    println!(
        "  Outcome: {}  Response: {:.2}s  Urgency: {}  Status: {}",
        if record.success { "resolved" } else { "unresolved" },
        record.execution_time_ms as f64 / 1000.0,
        record.urgency.as_str(),
        record.ticket_status.as_str(),
    );
    if let Some(agent) = &record.assigned_agent {
        println!("  Agent: {agent}");
    }
    if let Some(comment) = &record.feedback_comment {
        println!(
            "  Feedback ({}/5): {}",
            record.customer_satisfaction, comment
        );
    }

    Ok(())
}

fn tier_color(tier: QualityTier) -> &'static str {
    match tier {
        QualityTier::Excellent => GOOD,
        QualityTier::Good => WARN,
        QualityTier::NeedsImprovement => BAD,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
