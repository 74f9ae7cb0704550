//! Aggregation, quality scoring, and reporting for support interactions.
//!
//! Everything here is a pure, synchronous reducer over a caller-supplied
//! slice of interaction records: dashboard KPIs, per-agent performance,
//! per-conversation quality scores, channel/intent/emotion/latency
//! breakdowns, and markdown report generation. Re-invoking any operation on
//! the same input yields identical output.

pub mod aggregations;
pub mod breakdowns;
pub mod quality;
pub mod reports;

pub use aggregations::{
    agent_performance, dashboard_metrics, AgentPerformance, DashboardMetrics, ReasonCount,
    UrgencyCounts,
};
pub use breakdowns::{
    average_confidence, channel_breakdown, emotion_distribution, feedback_highlights,
    handoff_reason_counts, intent_breakdown, resolution_by_urgency, response_time_distribution,
    ChannelStats, EmotionCounts, FeedbackHighlights, IntentStats, ResponseTimeBuckets,
    UrgencyResolution,
};
pub use quality::{
    classify, filter_conversations, quality_overview, quality_score, ConversationQuery,
    QualityFilter, QualityOverview, QualityTier,
};
pub use reports::{ReportGenerator, ReportOptions};
