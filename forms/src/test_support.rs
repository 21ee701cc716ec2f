//! Test doubles shared with downstream crates through the `test-support`
//! feature.

use std::sync::Mutex;

use crate::draft::{ApplicationDraft, IntakeField};
use crate::relay::{Ack, Relay, RelayError, RelayPayload};

/// Relay that records every payload and answers from a scripted queue.
/// An empty queue acknowledges.
pub struct MockRelay {
    sent: Mutex<Vec<RelayPayload>>,
    replies: Mutex<Vec<Result<Ack, RelayError>>>,
}

impl MockRelay {
    pub fn ok() -> Self {
        Self { sent: Mutex::new(Vec::new()), replies: Mutex::new(Vec::new()) }
    }

    pub fn with_replies(replies: Vec<Result<Ack, RelayError>>) -> Self {
        Self { sent: Mutex::new(Vec::new()), replies: Mutex::new(replies) }
    }

    pub fn sent(&self) -> Vec<RelayPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Relay for MockRelay {
    async fn submit(&self, payload: &RelayPayload) -> Result<Ack, RelayError> {
        self.sent.lock().unwrap().push(payload.clone());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() { Ok(Ack::new("OK")) } else { replies.remove(0) }
    }
}

/// A draft with every field filled with plausible values.
pub fn filled_draft() -> ApplicationDraft {
    let mut draft = ApplicationDraft::default();
    for field in IntakeField::ALL {
        let value = match field {
            IntakeField::FullName => "Ivan Petrov",
            IntakeField::Email => "ivan@example.com",
            IntakeField::Phone => "+79001234567",
            IntakeField::Address => "Khabarovsk, Kim Yu Chen 65",
            IntakeField::University => "FESTU",
            IntakeField::Faculty => "Geophysics",
            IntakeField::Course => "4",
            IntakeField::GradYear => "2027",
            IntakeField::Objective => "Field practice",
            IntakeField::Experience => "Summer expedition 2025",
            IntakeField::Skills => "Oasis Montaj, Python",
            IntakeField::Languages => "Russian, English",
            IntakeField::Additional => "",
        };
        draft.set(field, value);
    }
    draft
}
