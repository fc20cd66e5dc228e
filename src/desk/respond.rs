//! Full reply pipeline: route, then order lookup or FAQ match

use crate::error::SupportResult;
use crate::router::{answer_order_query, classify};

use super::SupportDesk;

/// Reply when the FAQ store cannot be read
pub const PROCESSING_FAILURE_REPLY: &str = "I'm sorry, I'm having trouble processing your request right now. Please try again or contact our support team directly.";

/// Classify `utterance` and produce the reply text.
///
/// Order-status questions go to the order store when a phone number is
/// known; everything else is matched against the FAQ set. Backend failures
/// become apology replies; only malformed FAQ data is returned as an error.
pub fn classify_and_respond(
    desk: &SupportDesk,
    utterance: &str,
    phone: &str,
) -> SupportResult<String> {
    let classification = classify(utterance);
    tracing::debug!(intent = ?classification.intent, order_id = ?classification.order_id, "utterance classified");

    if classification.intent.needs_order_lookup() && !phone.trim().is_empty() {
        return Ok(answer_order_query(
            desk.orders.as_ref(),
            phone,
            classification.order_id.as_deref(),
        ));
    }

    let entries = match desk.faqs.load_all_faqs() {
        Ok(entries) => entries,
        Err(e) if e.is_precondition() => return Err(e),
        Err(e) => {
            tracing::error!(error = %e, "error loading FAQs");
            return Ok(PROCESSING_FAILURE_REPLY.to_string());
        }
    };

    Ok(desk.matcher.match_faq(utterance, &entries).into_response())
}
