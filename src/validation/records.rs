//! Validation of collaborator data and chat input

use crate::error::{SupportError, SupportResult};
use crate::types::{FaqEntry, FaqRecord, ResponseDraft};

/// Placeholder question stored when a message carries only an attachment
pub const FILE_UPLOADED_PLACEHOLDER: &str = "File uploaded";

/// Turn a raw FAQ record into a matchable entry.
///
/// A record without question or response text breaks the FAQ contract and is
/// rejected instead of being scored against empty text.
pub fn validate_faq_record(record: FaqRecord) -> SupportResult<FaqEntry> {
    let question = record.question.ok_or_else(|| SupportError::InvalidFaq {
        id: record.id.clone(),
        field: "question",
    })?;
    let response = record.response.ok_or_else(|| SupportError::InvalidFaq {
        id: record.id.clone(),
        field: "response",
    })?;

    Ok(FaqEntry {
        id: record.id,
        question,
        response,
    })
}

/// Validate every record, failing on the first broken one
pub fn validate_faq_records(records: Vec<FaqRecord>) -> SupportResult<Vec<FaqEntry>> {
    records.into_iter().map(validate_faq_record).collect()
}

/// Check a chat submission and return the question text to answer.
///
/// An empty message is allowed when a file is attached; it is answered as
/// [`FILE_UPLOADED_PLACEHOLDER`].
pub fn validate_chat_input(
    phone: &str,
    message: &str,
    has_attachment: bool,
) -> SupportResult<String> {
    let message = message.trim();
    if phone.trim().is_empty() || (message.is_empty() && !has_attachment) {
        return Err(SupportError::InvalidInput(
            "user phone or message content is missing".to_string(),
        ));
    }

    if message.is_empty() {
        Ok(FILE_UPLOADED_PLACEHOLDER.to_string())
    } else {
        Ok(message.to_string())
    }
}

/// Check an admin reply: it needs a responder and either text or a file
pub fn validate_ticket_response(draft: ResponseDraft) -> SupportResult<ResponseDraft> {
    let text = draft
        .response_text
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    let file_url = draft
        .response_file_url
        .filter(|url| !url.trim().is_empty());

    if draft.admin_phone.trim().is_empty() {
        return Err(SupportError::InvalidInput(
            "responder phone is missing".to_string(),
        ));
    }
    if text.is_none() && file_url.is_none() {
        return Err(SupportError::InvalidInput(
            "a ticket response needs text or a file".to_string(),
        ));
    }

    Ok(ResponseDraft {
        admin_phone: draft.admin_phone,
        response_text: text,
        response_file_url: file_url,
    })
}
