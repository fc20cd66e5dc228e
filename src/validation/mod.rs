//! Input validation
//!
//! This module checks FAQ records and chat submissions before they reach
//! the matcher.

mod records;

pub use records::{
    validate_chat_input, validate_faq_record, validate_faq_records, validate_ticket_response,
    FILE_UPLOADED_PLACEHOLDER,
};
