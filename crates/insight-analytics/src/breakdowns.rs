//! Channel, intent, emotion, latency, and urgency breakdowns.
//!
//! Supplemental distributions over the same record collection the dashboard
//! metrics come from. Closed-enum groupings (emotion, channel, urgency) emit
//! every bucket in enum order, zero-filled, so output shape never depends on
//! which values happen to be present.

use crate::aggregations::{count_reasons, ReasonCount};
use insight_core::types::{Channel, Emotion, Interaction, Urgency};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Interaction counts per record-level emotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub frustrated: u32,
    pub satisfied: u32,
}

impl EmotionCounts {
    pub fn get(&self, emotion: Emotion) -> u32 {
        match emotion {
            Emotion::Positive => self.positive,
            Emotion::Neutral => self.neutral,
            Emotion::Negative => self.negative,
            Emotion::Frustrated => self.frustrated,
            Emotion::Satisfied => self.satisfied,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative + self.frustrated + self.satisfied
    }
}

/// Count records per expressed customer emotion.
pub fn emotion_distribution(records: &[Interaction]) -> EmotionCounts {
    let mut counts = EmotionCounts::default();
    for record in records {
        match record.emotion {
            Emotion::Positive => counts.positive += 1,
            Emotion::Neutral => counts.neutral += 1,
            Emotion::Negative => counts.negative += 1,
            Emotion::Frustrated => counts.frustrated += 1,
            Emotion::Satisfied => counts.satisfied += 1,
        }
    }
    counts
}

/// Volume and average satisfaction for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub channel: Channel,
    pub count: usize,
    pub avg_satisfaction: f64,
}

/// Per-channel stats in enum order, zero-filled for unused channels.
pub fn channel_breakdown(records: &[Interaction]) -> Vec<ChannelStats> {
    Channel::ALL
        .iter()
        .map(|&channel| {
            let mut count = 0;
            let mut satisfaction = 0.0;
            for record in records.iter().filter(|r| r.channel == channel) {
                count += 1;
                satisfaction += record.customer_satisfaction;
            }
            ChannelStats {
                channel,
                count,
                avg_satisfaction: if count == 0 {
                    0.0
                } else {
                    satisfaction / count as f64
                },
            }
        })
        .collect()
}

/// Volume and average satisfaction for one intent category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentStats {
    pub intent: String,
    pub count: usize,
    pub avg_satisfaction: f64,
}

/// Per-intent stats, best average satisfaction first; ties alphabetical.
pub fn intent_breakdown(records: &[Interaction]) -> Vec<IntentStats> {
    let mut sums: HashMap<&str, (usize, f64)> = HashMap::new();
    for record in records {
        let entry = sums.entry(record.intent.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.customer_satisfaction;
    }

    let mut stats: Vec<IntentStats> = sums
        .into_iter()
        .map(|(intent, (count, sum))| IntentStats {
            intent: intent.to_string(),
            count,
            avg_satisfaction: sum / count as f64,
        })
        .collect();
    stats.sort_by(|a, b| {
        b.avg_satisfaction
            .partial_cmp(&a.avg_satisfaction)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.intent.cmp(&b.intent))
    });
    stats
}

/// Latency distribution over execution time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTimeBuckets {
    /// Under 1 second.
    pub fast: u32,
    /// 1 to 2 seconds.
    pub good: u32,
    /// 2 to 5 seconds.
    pub slow: u32,
    /// 5 seconds and above.
    pub very_slow: u32,
}

impl ResponseTimeBuckets {
    pub fn total(&self) -> u32 {
        self.fast + self.good + self.slow + self.very_slow
    }
}

/// Bucket records by processing latency.
pub fn response_time_distribution(records: &[Interaction]) -> ResponseTimeBuckets {
    let mut buckets = ResponseTimeBuckets::default();
    for record in records {
        match record.execution_time_ms {
            0..=999 => buckets.fast += 1,
            1000..=1999 => buckets.good += 1,
            2000..=4999 => buckets.slow += 1,
            _ => buckets.very_slow += 1,
        }
    }
    buckets
}

/// Collection-wide handoff reason counts, most frequent first.
pub fn handoff_reason_counts(records: &[Interaction]) -> Vec<ReasonCount> {
    count_reasons(records)
}

/// Ticket volume and average resolution time for one urgency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyResolution {
    pub urgency: Urgency,
    pub count: usize,
    /// Sum of recorded resolution times divided by the full bucket count,
    /// including interactions with no recorded time.
    pub avg_resolution_time_seconds: f64,
}

/// Per-urgency resolution stats in ascending urgency order, zero-filled.
pub fn resolution_by_urgency(records: &[Interaction]) -> Vec<UrgencyResolution> {
    Urgency::ALL
        .iter()
        .map(|&urgency| {
            let mut count = 0;
            let mut total_time = 0.0;
            for record in records.iter().filter(|r| r.urgency == urgency) {
                count += 1;
                if let Some(secs) = record.resolution_time_seconds {
                    total_time += secs;
                }
            }
            UrgencyResolution {
                urgency,
                count,
                avg_resolution_time_seconds: if count == 0 {
                    0.0
                } else {
                    total_time / count as f64
                },
            }
        })
        .collect()
}

/// Mean system confidence across all records (0 when empty).
pub fn average_confidence(records: &[Interaction]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.confidence).sum::<f64>() / records.len() as f64
}

/// Feedback comments worth surfacing: delighted and dissatisfied customers.
#[derive(Debug, Clone)]
pub struct FeedbackHighlights<'a> {
    /// Satisfaction >= 4 with a non-empty comment.
    pub positive: Vec<&'a Interaction>,
    /// Satisfaction <= 2 with a non-empty comment.
    pub negative: Vec<&'a Interaction>,
}

/// Collect commented feedback at both ends of the satisfaction scale,
/// untruncated; display layers decide how many to show.
pub fn feedback_highlights(records: &[Interaction]) -> FeedbackHighlights<'_> {
    let has_comment =
        |r: &Interaction| r.feedback_comment.as_deref().is_some_and(|c| !c.is_empty());
    FeedbackHighlights {
        positive: records
            .iter()
            .filter(|r| r.customer_satisfaction >= 4.0 && has_comment(r))
            .collect(),
        negative: records
            .iter()
            .filter(|r| r.customer_satisfaction <= 2.0 && has_comment(r))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Interaction {
        Interaction::new(id)
    }

    #[test]
    fn test_emotion_distribution() {
        let mut a = record("a");
        a.emotion = Emotion::Frustrated;
        let mut b = record("b");
        b.emotion = Emotion::Frustrated;
        let mut c = record("c");
        c.emotion = Emotion::Satisfied;

        let counts = emotion_distribution(&[a, b, c]);
        assert_eq!(counts.frustrated, 2);
        assert_eq!(counts.satisfied, 1);
        assert_eq!(counts.positive, 0);
        assert_eq!(counts.get(Emotion::Frustrated), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_channel_breakdown_zero_filled() {
        let mut a = record("a");
        a.channel = Channel::Phone;
        a.customer_satisfaction = 4.0;
        let mut b = record("b");
        b.channel = Channel::Phone;
        b.customer_satisfaction = 2.0;

        let stats = channel_breakdown(&[a, b]);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].channel, Channel::Chat);
        assert_eq!(stats[0].count, 0);
        assert_eq!(stats[0].avg_satisfaction, 0.0);

        let phone = &stats[1];
        assert_eq!(phone.channel, Channel::Phone);
        assert_eq!(phone.count, 2);
        assert_eq!(phone.avg_satisfaction, 3.0);
    }

    #[test]
    fn test_intent_breakdown_sorted_by_satisfaction() {
        let mut low = record("a");
        low.intent = "billing".into();
        low.customer_satisfaction = 2.0;
        let mut high = record("b");
        high.intent = "order_inquiry".into();
        high.customer_satisfaction = 5.0;
        let mut mid = record("c");
        mid.intent = "returns".into();
        mid.customer_satisfaction = 3.5;

        let stats = intent_breakdown(&[low, high, mid]);
        let intents: Vec<&str> = stats.iter().map(|s| s.intent.as_str()).collect();
        assert_eq!(intents, vec!["order_inquiry", "returns", "billing"]);
    }

    #[test]
    fn test_intent_breakdown_tie_is_alphabetical() {
        let mut a = record("a");
        a.intent = "returns".into();
        a.customer_satisfaction = 4.0;
        let mut b = record("b");
        b.intent = "billing".into();
        b.customer_satisfaction = 4.0;

        let stats = intent_breakdown(&[a, b]);
        assert_eq!(stats[0].intent, "billing");
        assert_eq!(stats[1].intent, "returns");
    }

    #[test]
    fn test_response_time_boundaries() {
        let times = [999u64, 1000, 1999, 2000, 4999, 5000];
        let records: Vec<Interaction> = times
            .iter()
            .enumerate()
            .map(|(i, &ms)| {
                let mut r = record(&format!("r{i}"));
                r.execution_time_ms = ms;
                r
            })
            .collect();

        let buckets = response_time_distribution(&records);
        assert_eq!(buckets.fast, 1);
        assert_eq!(buckets.good, 2);
        assert_eq!(buckets.slow, 2);
        assert_eq!(buckets.very_slow, 1);
        assert_eq!(buckets.total(), 6);
    }

    #[test]
    fn test_handoff_reason_counts_sorted() {
        let mut records = Vec::new();
        for (i, reason) in ["slow_response", "billing_dispute", "billing_dispute"]
            .iter()
            .enumerate()
        {
            let mut r = record(&format!("r{i}"));
            r.is_handoff = true;
            r.handoff_reason = Some((*reason).into());
            records.push(r);
        }
        // A handoff without a reason contributes nothing.
        let mut bare = record("bare");
        bare.is_handoff = true;
        records.push(bare);

        let counts = handoff_reason_counts(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].reason, "billing_dispute");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].reason, "slow_response");
    }

    #[test]
    fn test_resolution_by_urgency_full_denominator() {
        let mut timed = record("a");
        timed.urgency = Urgency::High;
        timed.resolution_time_seconds = Some(600.0);
        let mut untimed = record("b");
        untimed.urgency = Urgency::High;

        let stats = resolution_by_urgency(&[timed, untimed]);
        assert_eq!(stats.len(), 4);
        let high = stats
            .iter()
            .find(|s| s.urgency == Urgency::High)
            .unwrap();
        assert_eq!(high.count, 2);
        assert_eq!(high.avg_resolution_time_seconds, 300.0);

        let critical = stats
            .iter()
            .find(|s| s.urgency == Urgency::Critical)
            .unwrap();
        assert_eq!(critical.count, 0);
        assert_eq!(critical.avg_resolution_time_seconds, 0.0);
    }

    #[test]
    fn test_average_confidence() {
        let mut a = record("a");
        a.confidence = 0.8;
        let mut b = record("b");
        b.confidence = 0.6;

        assert!((average_confidence(&[a, b]) - 0.7).abs() < 1e-9);
        assert_eq!(average_confidence(&[]), 0.0);
    }

    #[test]
    fn test_feedback_highlights() {
        let mut delighted = record("a");
        delighted.customer_satisfaction = 5.0;
        delighted.feedback_comment = Some("Great service!".into());

        let mut unhappy = record("b");
        unhappy.customer_satisfaction = 1.0;
        unhappy.feedback_comment = Some("Terrible.".into());

        let mut middling = record("c");
        middling.customer_satisfaction = 3.0;
        middling.feedback_comment = Some("It was fine".into());

        let mut silent = record("d");
        silent.customer_satisfaction = 5.0;

        let mut empty_comment = record("e");
        empty_comment.customer_satisfaction = 5.0;
        empty_comment.feedback_comment = Some(String::new());

        let records = vec![delighted, unhappy, middling, silent, empty_comment];
        let highlights = feedback_highlights(&records);
        assert_eq!(highlights.positive.len(), 1);
        assert_eq!(highlights.positive[0].id, "a");
        assert_eq!(highlights.negative.len(), 1);
        assert_eq!(highlights.negative[0].id, "b");
    }
}
