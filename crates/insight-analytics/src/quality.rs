//! Per-conversation quality scoring, classification, and list filtering.
//!
//! The score is a heuristic 0-100 rating of a single interaction's
//! conversational outcome. Classification, subset counts, and list filtering
//! all go through [`QualityTier::from_score`] so the thresholds cannot drift
//! apart.

use insight_core::types::Interaction;
use serde::{Deserialize, Serialize};

/// Score one interaction on a 0-100 scale.
///
/// Satisfaction carries the base (1-5 maps to 20-100); a successful outcome
/// and a sub-2s response each add 10, a handoff subtracts 10, and a
/// de-escalated conversation adds 15. The result is clamped to 0-100.
pub fn quality_score(record: &Interaction) -> f64 {
    let mut score = record.customer_satisfaction * 20.0;
    if record.success {
        score += 10.0;
    }
    if record.execution_time_ms < 2000 {
        score += 10.0;
    }
    if record.is_handoff {
        score -= 10.0;
    }
    if has_deescalation(record) {
        score += 15.0;
    }
    score.clamp(0.0, 100.0)
}

/// A conversation counts as de-escalated when it runs longer than two
/// messages, opens frustrated, and closes satisfied or positive.
fn has_deescalation(record: &Interaction) -> bool {
    let history = &record.conversation_history;
    if history.len() <= 2 {
        return false;
    }
    let first = history.first().and_then(|m| m.emotion.as_deref());
    let last = history.last().and_then(|m| m.emotion.as_deref());
    first == Some("frustrated") && matches!(last, Some("satisfied") | Some("positive"))
}

/// Quality classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl QualityTier {
    /// The single source of truth for the quality thresholds. Lower bounds
    /// are inclusive: 75 is Excellent, 50 is Good.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            QualityTier::Excellent
        } else if score >= 50.0 {
            QualityTier::Good
        } else {
            QualityTier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Excellent => "Excellent",
            QualityTier::Good => "Good",
            QualityTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Score and classify in one step.
pub fn classify(record: &Interaction) -> QualityTier {
    QualityTier::from_score(quality_score(record))
}

/// Tier counts across a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityOverview {
    pub total: usize,
    pub excellent: usize,
    pub good: usize,
    pub needs_improvement: usize,
}

impl QualityOverview {
    /// Share of high-quality conversations as a percentage (0 when empty).
    pub fn excellent_pct(&self) -> f64 {
        pct(self.excellent, self.total)
    }

    /// Share of conversations needing improvement as a percentage.
    pub fn needs_improvement_pct(&self) -> f64 {
        pct(self.needs_improvement, self.total)
    }
}

fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Count conversations per quality tier.
pub fn quality_overview(records: &[Interaction]) -> QualityOverview {
    let mut overview = QualityOverview {
        total: records.len(),
        ..Default::default()
    };
    for record in records {
        match classify(record) {
            QualityTier::Excellent => overview.excellent += 1,
            QualityTier::Good => overview.good += 1,
            QualityTier::NeedsImprovement => overview.needs_improvement += 1,
        }
    }
    overview
}

/// Quality subset selector for conversation listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityFilter {
    #[default]
    All,
    /// Excellent-tier conversations only.
    Good,
    /// Needs-improvement-tier conversations only.
    Poor,
}

/// Explicit view state for a conversation listing: a quality subset plus an
/// optional case-insensitive search over customer message and agent name.
#[derive(Debug, Clone, Default)]
pub struct ConversationQuery {
    pub quality: QualityFilter,
    pub search: Option<String>,
}

/// Filter a record collection according to the query, preserving input order.
pub fn filter_conversations<'a>(
    records: &'a [Interaction],
    query: &ConversationQuery,
) -> Vec<&'a Interaction> {
    records
        .iter()
        .filter(|r| matches_quality(r, query.quality) && matches_search(r, query.search.as_deref()))
        .collect()
}

fn matches_quality(record: &Interaction, filter: QualityFilter) -> bool {
    match filter {
        QualityFilter::All => true,
        QualityFilter::Good => classify(record) == QualityTier::Excellent,
        QualityFilter::Poor => classify(record) == QualityTier::NeedsImprovement,
    }
}

fn matches_search(record: &Interaction, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record.customer_message.to_lowercase().contains(&term)
        || record
            .assigned_agent
            .as_deref()
            .is_some_and(|agent| agent.to_lowercase().contains(&term))
}
