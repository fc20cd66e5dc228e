//! Domain-specific score adjustments
//!
//! Two hand-tuned rules for the scooter FAQ set. They match on fixed words in
//! the raw lowercased utterance and the normalized candidate text.

/// Boost for a maintenance-schedule FAQ when the user asks about service intervals
pub const MAINTENANCE_SCHEDULE_BOOST: i64 = 20;

/// Penalty for delayed-service FAQs when the user asks about service intervals
pub const DELAYED_ANSWER_PENALTY: i64 = 15;

/// Boost for delayed-service FAQs when the user reports a delay
pub const DELAY_REPORT_BOOST: i64 = 20;

fn asks_about_service_interval(utterance: &str) -> bool {
    (utterance.contains("service")
        && (utterance.contains("interval") || utterance.contains("schedule")))
        || (utterance.contains("maintenance") && utterance.contains("schedule"))
}

fn reports_delay(utterance: &str) -> bool {
    utterance.contains("delayed") || utterance.contains("late") || utterance.contains("postponed")
}

/// Score adjustment for one candidate.
///
/// `utterance` is the lowercased, unfiltered user text; `question` and
/// `response` are the candidate's normalized text.
pub fn domain_adjustment(utterance: &str, question: &str, response: &str) -> i64 {
    let mut adjustment = 0;
    let mentions_delay = question.contains("delayed") || response.contains("delayed");

    if asks_about_service_interval(utterance) {
        if question.contains("maintenance") && question.contains("schedule") {
            adjustment += MAINTENANCE_SCHEDULE_BOOST;
        }
        if mentions_delay {
            adjustment -= DELAYED_ANSWER_PENALTY;
        }
    }

    if reports_delay(utterance) && mentions_delay {
        adjustment += DELAY_REPORT_BOOST;
    }

    adjustment
}
