//! Markdown report generation from aggregated interaction data.

use crate::aggregations::{agent_performance, dashboard_metrics};
use crate::breakdowns::{
    average_confidence, channel_breakdown, emotion_distribution, feedback_highlights,
    handoff_reason_counts, intent_breakdown, resolution_by_urgency, response_time_distribution,
};
use crate::quality::quality_overview;
use insight_core::types::{Interaction, Urgency};

/// Display truncation limits for generated reports.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Feedback quotes shown per highlight section.
    pub feedback_highlights: usize,
    /// Handoff reasons shown in the operations section.
    pub handoff_reasons: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            feedback_highlights: 3,
            handoff_reasons: 5,
        }
    }
}

/// Report generator for creating markdown and plain-text summaries.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generate the full markdown dashboard report.
    pub fn dashboard_report(records: &[Interaction], options: &ReportOptions) -> String {
        tracing::debug!("generating report for {} interactions", records.len());

        let metrics = dashboard_metrics(records);
        let mut report = String::new();

        report.push_str("# Support Operations Report\n\n");

        // Overview.
        report.push_str("## Overview\n\n");
        report.push_str(&format!(
            "- **Interactions:** {}\n",
            metrics.total_interactions
        ));
        report.push_str(&format!("- **Success Rate:** {:.1}%\n", metrics.success_rate));
        report.push_str(&format!("- **Handoff Rate:** {:.1}%\n", metrics.handoff_rate));
        report.push_str(&format!(
            "- **Avg Response Time:** {:.2}s\n",
            metrics.avg_response_time_ms / 1000.0
        ));
        report.push_str(&format!(
            "- **Avg Satisfaction:** {:.1} / 5\n\n",
            metrics.avg_satisfaction
        ));

        report.push_str("### Active Issues\n\n");
        report.push_str("| Urgency | Open Tickets |\n");
        report.push_str("|---------|--------------|\n");
        for urgency in Urgency::ALL {
            report.push_str(&format!(
                "| {} | {} |\n",
                urgency.as_str(),
                metrics.active_issues.get(urgency)
            ));
        }
        report.push('\n');

        // Agent performance.
        let agents = agent_performance(records);
        if !agents.is_empty() {
            report.push_str("## Agent Performance\n\n");
            report.push_str(
                "| Agent | Handled | Resolution Rate | Avg Resolution Time | Satisfaction |\n",
            );
            report.push_str(
                "|-------|---------|-----------------|---------------------|--------------|\n",
            );
            for agent in &agents {
                report.push_str(&format!(
                    "| {} | {} | {:.1}% | {} | {:.1} |\n",
                    agent.agent_name,
                    agent.interactions_handled,
                    agent.resolution_rate,
                    format_secs(agent.avg_resolution_time_seconds),
                    agent.avg_customer_satisfaction,
                ));
            }
            report.push('\n');

            for agent in &agents {
                if agent.top_handoff_reasons.is_empty() {
                    continue;
                }
                let reasons: Vec<String> = agent
                    .top_handoff_reasons
                    .iter()
                    .map(|r| format!("{} ({})", r.reason, r.count))
                    .collect();
                report.push_str(&format!(
                    "- **{}** top handoff reasons: {}\n",
                    agent.agent_name,
                    reasons.join(", ")
                ));
            }
            report.push('\n');
        }

        // Conversation quality.
        let overview = quality_overview(records);
        report.push_str("## Conversation Quality\n\n");
        report.push_str(&format!("- **Total Conversations:** {}\n", overview.total));
        report.push_str(&format!(
            "- **High Quality:** {} ({:.1}%)\n",
            overview.excellent,
            overview.excellent_pct()
        ));
        report.push_str(&format!("- **Good:** {}\n", overview.good));
        report.push_str(&format!(
            "- **Needs Improvement:** {} ({:.1}%)\n\n",
            overview.needs_improvement,
            overview.needs_improvement_pct()
        ));

        // Customer experience.
        report.push_str("## Customer Experience\n\n");

        let emotions = emotion_distribution(records);
        report.push_str("### Emotion Distribution\n\n");
        report.push_str(&format!(
            "- positive: {}\n- neutral: {}\n- negative: {}\n- frustrated: {}\n- satisfied: {}\n\n",
            emotions.positive,
            emotions.neutral,
            emotions.negative,
            emotions.frustrated,
            emotions.satisfied,
        ));

        report.push_str("### Channel Performance\n\n");
        report.push_str("| Channel | Interactions | Avg Satisfaction |\n");
        report.push_str("|---------|--------------|------------------|\n");
        for stats in channel_breakdown(records) {
            report.push_str(&format!(
                "| {} | {} | {:.1} |\n",
                stats.channel.as_str(),
                stats.count,
                stats.avg_satisfaction
            ));
        }
        report.push('\n');

        let intents = intent_breakdown(records);
        if !intents.is_empty() {
            report.push_str("### Intent Satisfaction\n\n");
            report.push_str("| Intent | Interactions | Avg Satisfaction |\n");
            report.push_str("|--------|--------------|------------------|\n");
            for stats in &intents {
                report.push_str(&format!(
                    "| {} | {} | {:.1} |\n",
                    stats.intent, stats.count, stats.avg_satisfaction
                ));
            }
            report.push('\n');
        }

        let highlights = feedback_highlights(records);
        if !highlights.positive.is_empty() {
            report.push_str("### Positive Feedback\n\n");
            for record in highlights.positive.iter().take(options.feedback_highlights) {
                if let Some(comment) = &record.feedback_comment {
                    report.push_str(&format!(
                        "> \"{}\" ({}/5)\n\n",
                        comment, record.customer_satisfaction
                    ));
                }
            }
        }
        if !highlights.negative.is_empty() {
            report.push_str("### Areas for Improvement\n\n");
            for record in highlights.negative.iter().take(options.feedback_highlights) {
                if let Some(comment) = &record.feedback_comment {
                    report.push_str(&format!(
                        "> \"{}\" ({}/5)\n\n",
                        comment, record.customer_satisfaction
                    ));
                }
            }
        }

        // Operations.
        report.push_str("## Operations\n\n");

        let buckets = response_time_distribution(records);
        report.push_str("### Response Time Distribution\n\n");
        report.push_str("| Range | Interactions |\n");
        report.push_str("|-------|--------------|\n");
        report.push_str(&format!("| Fast (<1s) | {} |\n", buckets.fast));
        report.push_str(&format!("| Good (1-2s) | {} |\n", buckets.good));
        report.push_str(&format!("| Slow (2-5s) | {} |\n", buckets.slow));
        report.push_str(&format!("| Very Slow (>5s) | {} |\n\n", buckets.very_slow));

        let reasons = handoff_reason_counts(records);
        if !reasons.is_empty() {
            report.push_str("### Handoff Reasons\n\n");
            let total: u32 = reasons.iter().map(|r| r.count).sum();
            for (i, reason) in reasons.iter().take(options.handoff_reasons).enumerate() {
                report.push_str(&format!(
                    "{}. {} - {} ({:.1}%)\n",
                    i + 1,
                    reason.reason,
                    reason.count,
                    reason.count as f64 / total as f64 * 100.0
                ));
            }
            report.push('\n');
        }

        report.push_str("### Resolution Time by Urgency\n\n");
        report.push_str("| Urgency | Tickets | Avg Resolution Time |\n");
        report.push_str("|---------|---------|---------------------|\n");
        for stats in resolution_by_urgency(records) {
            report.push_str(&format!(
                "| {} | {} | {} |\n",
                stats.urgency.as_str(),
                stats.count,
                format_secs(stats.avg_resolution_time_seconds)
            ));
        }
        report.push('\n');

        report.push_str(&format!(
            "**Avg System Confidence:** {:.0}%\n",
            average_confidence(records) * 100.0
        ));

        report
    }

    /// Generate a compact plain-text summary suitable for terminal display.
    pub fn text_summary(records: &[Interaction]) -> String {
        let metrics = dashboard_metrics(records);
        let overview = quality_overview(records);
        let mut output = String::new();

        output.push_str(&format!(
            "  Interactions: {}  Success: {:.1}%  Handoffs: {:.1}%\n",
            metrics.total_interactions, metrics.success_rate, metrics.handoff_rate
        ));
        output.push_str(&format!(
            "  Avg response: {:.2}s  Avg satisfaction: {:.1}/5\n",
            metrics.avg_response_time_ms / 1000.0,
            metrics.avg_satisfaction
        ));
        output.push_str(&format!(
            "  Active issues: {} (low {}, medium {}, high {}, critical {})\n",
            metrics.active_issues.total(),
            metrics.active_issues.low,
            metrics.active_issues.medium,
            metrics.active_issues.high,
            metrics.active_issues.critical
        ));
        output.push_str(&format!(
            "  Quality: {} excellent ({:.1}%), {} good, {} needing improvement\n",
            overview.excellent,
            overview.excellent_pct(),
            overview.good,
            overview.needs_improvement
        ));

        let agents = agent_performance(records);
        if !agents.is_empty() {
            output.push_str("  Agents:");
            for agent in &agents {
                output.push_str(&format!(
                    " {}({})",
                    agent.agent_name, agent.interactions_handled
                ));
            }
            output.push('\n');
        }

        output
    }
}

/// Format seconds as a human-readable duration string.
pub fn format_secs(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{}s", seconds.round() as u64)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0) as u64;
        format!("{}m {}s", minutes, (seconds % 60.0).round() as u64)
    } else {
        let hours = (seconds / 3600.0) as u64;
        let minutes = ((seconds % 3600.0) / 60.0) as u64;
        format!("{}h {}m", hours, minutes)
    }
}
