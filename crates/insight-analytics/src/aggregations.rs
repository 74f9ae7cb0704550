//! Dashboard-wide KPIs and per-agent performance summaries.
//!
//! Pure reducers over a flat interaction collection. Rates are percentages
//! in 0-100; empty input yields zeroed metrics rather than NaN.

use insight_core::types::{Interaction, Urgency};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dashboard-wide key metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_interactions: usize,
    /// Percentage of interactions resolved successfully.
    pub success_rate: f64,
    /// Percentage of interactions escalated to a human agent.
    pub handoff_rate: f64,
    /// Mean system processing latency in milliseconds.
    pub avg_response_time_ms: f64,
    /// Mean customer satisfaction on the 1-5 scale.
    pub avg_satisfaction: f64,
    /// Unresolved tickets grouped by urgency.
    pub active_issues: UrgencyCounts,
}

/// Counts per urgency level. All four buckets are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl UrgencyCounts {
    pub fn get(&self, urgency: Urgency) -> u32 {
        match urgency {
            Urgency::Low => self.low,
            Urgency::Medium => self.medium,
            Urgency::High => self.high,
            Urgency::Critical => self.critical,
        }
    }

    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high + self.critical
    }

    fn bump(&mut self, urgency: Urgency) {
        match urgency {
            Urgency::Low => self.low += 1,
            Urgency::Medium => self.medium += 1,
            Urgency::High => self.high += 1,
            Urgency::Critical => self.critical += 1,
        }
    }
}

/// Compute dashboard-wide metrics from the full interaction collection.
///
/// Order-independent: any permutation of the input yields the same output.
pub fn dashboard_metrics(records: &[Interaction]) -> DashboardMetrics {
    let total = records.len();
    if total == 0 {
        return DashboardMetrics {
            total_interactions: 0,
            success_rate: 0.0,
            handoff_rate: 0.0,
            avg_response_time_ms: 0.0,
            avg_satisfaction: 0.0,
            active_issues: UrgencyCounts::default(),
        };
    }

    let successful = records.iter().filter(|r| r.success).count();
    let handoffs = records.iter().filter(|r| r.is_handoff).count();
    let total_time_ms: u64 = records.iter().map(|r| r.execution_time_ms).sum();
    let total_satisfaction: f64 = records.iter().map(|r| r.customer_satisfaction).sum();

    let mut active_issues = UrgencyCounts::default();
    for record in records.iter().filter(|r| r.ticket_status.is_open()) {
        active_issues.bump(record.urgency);
    }

    DashboardMetrics {
        total_interactions: total,
        success_rate: successful as f64 / total as f64 * 100.0,
        handoff_rate: handoffs as f64 / total as f64 * 100.0,
        avg_response_time_ms: total_time_ms as f64 / total as f64,
        avg_satisfaction: total_satisfaction / total as f64,
        active_issues,
    }
}

/// Performance summary for one human agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub agent_name: String,
    pub interactions_handled: usize,
    /// Percentage of the agent's interactions resolved successfully.
    pub resolution_rate: f64,
    /// Sum of the recorded resolution times divided by the agent's full
    /// interaction count, including interactions with no recorded time.
    pub avg_resolution_time_seconds: f64,
    /// Mean customer satisfaction over the agent's full group.
    pub avg_customer_satisfaction: f64,
    /// Up to three most frequent handoff reasons within the group.
    pub top_handoff_reasons: Vec<ReasonCount>,
}

/// A handoff reason and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: u32,
}

/// Group interactions by assigned agent and summarize each group.
///
/// One entry per distinct non-empty `assigned_agent`, in order of first
/// appearance. Records without an assigned agent are skipped.
pub fn agent_performance(records: &[Interaction]) -> Vec<AgentPerformance> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Interaction>> = HashMap::new();

    for record in records {
        let Some(agent) = record.assigned_agent.as_deref() else {
            continue;
        };
        if agent.is_empty() {
            continue;
        }
        if !groups.contains_key(agent) {
            order.push(agent);
        }
        groups.entry(agent).or_default().push(record);
    }

    order
        .into_iter()
        .map(|agent| {
            let group = &groups[agent];
            let total = group.len();
            let resolved = group.iter().filter(|r| r.success).count();
            let resolution_time: f64 = group
                .iter()
                .filter_map(|r| r.resolution_time_seconds)
                .sum();
            let satisfaction: f64 = group.iter().map(|r| r.customer_satisfaction).sum();

            let mut top_handoff_reasons = count_reasons(group.iter().copied());
            top_handoff_reasons.truncate(3);

            AgentPerformance {
                agent_name: agent.to_string(),
                interactions_handled: total,
                resolution_rate: resolved as f64 / total as f64 * 100.0,
                avg_resolution_time_seconds: resolution_time / total as f64,
                avg_customer_satisfaction: satisfaction / total as f64,
                top_handoff_reasons,
            }
        })
        .collect()
}

/// Count handoff reasons over the given records, most frequent first.
///
/// Only handoffs with a non-empty reason contribute. Ties are broken by
/// reason string ascending so repeated runs produce identical output.
pub(crate) fn count_reasons<'a, I>(records: I) -> Vec<ReasonCount>
where
    I: IntoIterator<Item = &'a Interaction>,
{
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for record in records {
        if !record.is_handoff {
            continue;
        }
        match record.handoff_reason.as_deref() {
            Some(reason) if !reason.is_empty() => *counts.entry(reason).or_insert(0) += 1,
            _ => {}
        }
    }

    let mut reasons: Vec<ReasonCount> = counts
        .into_iter()
        .map(|(reason, count)| ReasonCount {
            reason: reason.to_string(),
            count,
        })
        .collect();
    reasons.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.reason.cmp(&b.reason)));
    reasons
}
