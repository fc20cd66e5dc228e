//! JSON-lines backed store for FAQs, orders, chats and tickets
//!
//! One record per line, tagged by `type`:
//!
//! ```text
//! {"type":"faq","id":"1","question":"...","response":"..."}
//! {"type":"order","orderId":"ORD1","product":"...","status":"...","createdAt":"...","phoneNumber":"..."}
//! {"type":"chat","id":"...","userPhone":"...","question":"...","botResponse":"...","isUnsatisfied":false,...}
//! {"type":"ticket","id":"...","chatId":"...","userPhone":"...","title":"...","status":"open",...}
//! {"type":"ticket_response","id":"...","ticketId":"...","adminPhone":"...","responseText":"...",...}
//! ```
//!
//! Everything is loaded into memory at startup. Writes rewrite the whole file
//! and only reach memory once the file is written.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{ChatStore, FaqStore, OrderStore, TicketStore};
use crate::error::{SupportError, SupportResult};
use crate::types::{
    ChatExchange, FaqEntry, FaqRecord, Order, ResponseDraft, Ticket, TicketDraft, TicketResponse,
    TicketStatus,
};
use crate::utils::{atomic_write, next_id, now_rfc3339, parse_timestamp};
use crate::validation::{validate_faq_records, validate_ticket_response};

/// One line of the data file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoredRecord {
    Faq(FaqRecord),
    Order(Order),
    Chat(ChatExchange),
    Ticket(Ticket),
    TicketResponse(TicketResponse),
}

#[derive(Debug, Default, Clone)]
struct StoreData {
    faqs: Vec<FaqRecord>,
    orders: Vec<Order>,
    chats: Vec<ChatExchange>,
    tickets: Vec<Ticket>,
    responses: Vec<TicketResponse>,
}

impl StoreData {
    fn ticket_mut(&mut self, id: &str) -> SupportResult<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| SupportError::TicketNotFound(id.to_string()))
    }

    fn chat_mut(&mut self, id: &str) -> SupportResult<&mut ChatExchange> {
        self.chats
            .iter_mut()
            .find(|chat| chat.id == id)
            .ok_or_else(|| SupportError::ChatNotFound(id.to_string()))
    }

    fn to_lines(&self) -> SupportResult<String> {
        let records = self
            .faqs
            .iter()
            .cloned()
            .map(StoredRecord::Faq)
            .chain(self.orders.iter().cloned().map(StoredRecord::Order))
            .chain(self.chats.iter().cloned().map(StoredRecord::Chat))
            .chain(self.tickets.iter().cloned().map(StoredRecord::Ticket))
            .chain(self.responses.iter().cloned().map(StoredRecord::TicketResponse));

        let mut content = String::new();
        for record in records {
            content.push_str(&serde_json::to_string(&record)?);
            content.push('\n');
        }
        Ok(content)
    }
}

/// In-memory store, optionally persisted to a JSONL file
pub struct JsonlStore {
    file_path: Option<PathBuf>,
    data: RwLock<StoreData>,
}

impl JsonlStore {
    /// Open the store at `path`, loading it if the file exists
    pub fn open(path: impl Into<PathBuf>) -> SupportResult<Self> {
        let path = path.into();
        let data = Self::load_from_file(&path)?;

        tracing::info!(
            path = %path.display(),
            faqs = data.faqs.len(),
            orders = data.orders.len(),
            chats = data.chats.len(),
            tickets = data.tickets.len(),
            "support store loaded"
        );

        Ok(Self {
            file_path: Some(path),
            data: RwLock::new(data),
        })
    }

    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            file_path: None,
            data: RwLock::new(StoreData::default()),
        }
    }

    /// In-memory store seeded with FAQs and orders
    pub fn with_data(faqs: Vec<FaqEntry>, orders: Vec<Order>) -> Self {
        Self {
            file_path: None,
            data: RwLock::new(StoreData {
                faqs: faqs.into_iter().map(FaqRecord::from).collect(),
                orders,
                ..StoreData::default()
            }),
        }
    }

    fn load_from_file(path: &Path) -> SupportResult<StoreData> {
        let mut data = StoreData::default();
        if !path.exists() {
            return Ok(data);
        }

        let content = fs::read_to_string(path)?;
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<StoredRecord>(line) {
                Ok(StoredRecord::Faq(faq)) => data.faqs.push(faq),
                Ok(StoredRecord::Order(order)) => data.orders.push(order),
                Ok(StoredRecord::Chat(chat)) => data.chats.push(chat),
                Ok(StoredRecord::Ticket(ticket)) => data.tickets.push(ticket),
                Ok(StoredRecord::TicketResponse(response)) => data.responses.push(response),
                Err(e) => {
                    tracing::warn!(line = line_no + 1, error = %e, "skipping unreadable record");
                }
            }
        }

        Ok(data)
    }

    /// Apply `change` to a copy of the data, write it out, then swap it in.
    ///
    /// A failed change or a failed write leaves memory untouched.
    fn commit<R>(&self, change: impl FnOnce(&mut StoreData) -> SupportResult<R>) -> SupportResult<R> {
        let mut data = self.data.write();
        let mut next = data.clone();
        let result = change(&mut next)?;

        if let Some(path) = &self.file_path {
            atomic_write(path, &next.to_lines()?)?;
        }

        *data = next;
        Ok(result)
    }

    /// Path of the backing file, if any
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Add or replace an FAQ entry by id
    pub fn upsert_faq(&self, entry: FaqEntry) -> SupportResult<FaqEntry> {
        self.commit(|data| {
            let record = FaqRecord::from(entry.clone());
            match data.faqs.iter().position(|faq| faq.id == entry.id) {
                Some(pos) => data.faqs[pos] = record,
                None => data.faqs.push(record),
            }
            Ok(entry)
        })
    }

    /// Remove an FAQ entry; returns whether it existed
    pub fn delete_faq(&self, id: &str) -> SupportResult<bool> {
        if !self.data.read().faqs.iter().any(|faq| faq.id == id) {
            return Ok(false);
        }
        self.commit(|data| {
            let before = data.faqs.len();
            data.faqs.retain(|faq| faq.id != id);
            Ok(data.faqs.len() != before)
        })
    }

    /// Record a new order
    pub fn add_order(&self, order: Order) -> SupportResult<Order> {
        self.commit(|data| {
            data.orders.push(order.clone());
            Ok(order)
        })
    }
}

/// Sort newest first by a timestamp string; unparseable timestamps go last
fn newest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> &str) {
    items.sort_by_key(|item| Reverse(parse_timestamp(created_at(item))));
}

/// Sort oldest first; equal timestamps keep insertion order
fn oldest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> &str) {
    items.sort_by_key(|item| parse_timestamp(created_at(item)));
}

impl OrderStore for JsonlStore {
    fn lookup_orders(&self, phone: &str) -> SupportResult<Vec<Order>> {
        let data = self.data.read();
        let mut orders: Vec<Order> = data
            .orders
            .iter()
            .filter(|order| order.phone_number == phone)
            .cloned()
            .collect();
        newest_first(&mut orders, |order| order.created_at.as_str());
        Ok(orders)
    }
}

impl FaqStore for JsonlStore {
    fn load_all_faqs(&self) -> SupportResult<Vec<FaqEntry>> {
        let records = self.data.read().faqs.clone();
        validate_faq_records(records)
    }
}

impl ChatStore for JsonlStore {
    fn save_chat(&self, exchange: ChatExchange) -> SupportResult<ChatExchange> {
        self.commit(|data| {
            match data.chats.iter().position(|chat| chat.id == exchange.id) {
                Some(pos) => data.chats[pos] = exchange.clone(),
                None => data.chats.push(exchange.clone()),
            }
            Ok(exchange)
        })
    }

    fn find_chat(&self, id: &str) -> SupportResult<Option<ChatExchange>> {
        Ok(self.data.read().chats.iter().find(|chat| chat.id == id).cloned())
    }

    fn chat_history(&self, phone: &str) -> SupportResult<Vec<ChatExchange>> {
        let data = self.data.read();
        let mut chats: Vec<ChatExchange> = data
            .chats
            .iter()
            .filter(|chat| chat.user_phone == phone)
            .cloned()
            .collect();
        oldest_first(&mut chats, |chat| chat.created_at.as_str());
        Ok(chats)
    }

    fn mark_unsatisfied(&self, id: &str) -> SupportResult<ChatExchange> {
        self.commit(|data| {
            let chat = data.chat_mut(id)?;
            if chat.is_unsatisfied {
                return Err(SupportError::AlreadyEscalated(id.to_string()));
            }
            chat.is_unsatisfied = true;
            Ok(chat.clone())
        })
    }

    fn clear_unsatisfied(&self, id: &str) -> SupportResult<()> {
        self.commit(|data| {
            data.chat_mut(id)?.is_unsatisfied = false;
            Ok(())
        })
    }
}

impl TicketStore for JsonlStore {
    fn create_ticket(&self, draft: TicketDraft) -> SupportResult<Ticket> {
        let now = now_rfc3339();
        let ticket = Ticket {
            id: next_id("ticket"),
            chat_id: draft.chat_id,
            user_phone: draft.user_phone,
            title: draft.title,
            status: TicketStatus::Open,
            created_at: now.clone(),
            updated_at: now,
        };

        self.commit(|data| {
            data.tickets.push(ticket.clone());
            Ok(())
        })?;

        tracing::info!(ticket_id = %ticket.id, chat_id = %ticket.chat_id, "ticket created");
        Ok(ticket)
    }

    fn list_tickets(&self, phone: Option<&str>) -> SupportResult<Vec<Ticket>> {
        let data = self.data.read();
        let mut tickets: Vec<Ticket> = data
            .tickets
            .iter()
            .filter(|ticket| phone.map_or(true, |p| ticket.user_phone == p))
            .cloned()
            .collect();
        // insertion order is creation order; reverse first so equal timestamps stay newest first
        tickets.reverse();
        newest_first(&mut tickets, |ticket| ticket.created_at.as_str());
        Ok(tickets)
    }

    fn update_ticket_status(&self, id: &str, status: TicketStatus) -> SupportResult<Ticket> {
        self.commit(|data| {
            let ticket = data.ticket_mut(id)?;
            ticket.status = status;
            ticket.updated_at = now_rfc3339();
            Ok(ticket.clone())
        })
    }

    fn respond_to_ticket(
        &self,
        ticket_id: &str,
        draft: ResponseDraft,
    ) -> SupportResult<TicketResponse> {
        let draft = validate_ticket_response(draft)?;
        let now = now_rfc3339();
        let response = TicketResponse {
            id: next_id("response"),
            ticket_id: ticket_id.to_string(),
            admin_phone: draft.admin_phone,
            response_text: draft.response_text,
            response_file_url: draft.response_file_url,
            created_at: now.clone(),
        };

        let status = self.commit(|data| {
            let ticket = data.ticket_mut(ticket_id)?;
            let next = ticket.status.after_response();
            if next != ticket.status {
                ticket.status = next;
                ticket.updated_at = now;
            }
            data.responses.push(response.clone());
            Ok(next)
        })?;

        tracing::info!(ticket_id, response_id = %response.id, %status, "ticket response stored");
        Ok(response)
    }

    fn list_responses(&self, ticket_id: &str) -> SupportResult<Vec<TicketResponse>> {
        let data = self.data.read();
        if !data.tickets.iter().any(|ticket| ticket.id == ticket_id) {
            return Err(SupportError::TicketNotFound(ticket_id.to_string()));
        }
        let mut responses: Vec<TicketResponse> = data
            .responses
            .iter()
            .filter(|response| response.ticket_id == ticket_id)
            .cloned()
            .collect();
        oldest_first(&mut responses, |response| response.created_at.as_str());
        Ok(responses)
    }
}
