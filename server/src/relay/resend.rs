//! Resend delivery: renders submissions into an HTML table and mails them
//! to a single configured inbox.

use std::time::Duration;

use async_trait::async_trait;
use forms::{Ack, Relay, RelayError, RelayPayload, RelayTemplate};
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::config::{RelayTimeouts, ResendSettings};

const RELAY_MESSAGE_TEMPLATE: &str = include_str!("../../templates/relay_message.html");

pub struct ResendClient {
    resend: Resend,
    settings: ResendSettings,
    timeout: Duration,
}

impl ResendClient {
    #[must_use]
    pub fn new(settings: ResendSettings, timeouts: RelayTimeouts) -> Self {
        let resend = Resend::new(&settings.api_key);
        Self { resend, settings, timeout: Duration::from_secs(timeouts.request_secs) }
    }
}

#[async_trait]
impl Relay for ResendClient {
    async fn submit(&self, payload: &RelayPayload) -> Result<Ack, RelayError> {
        let subject = subject_for(payload);
        let html = render_relay_message(payload);
        let to = [self.settings.recipient.as_str()];
        let email = CreateEmailBaseOptions::new(&self.settings.from, to, &subject).with_html(&html);

        tokio::time::timeout(self.timeout, self.resend.emails.send(email))
            .await
            .map_err(|_| RelayError::Request(format!("timed out after {}s", self.timeout.as_secs())))?
            .map_err(|e| RelayError::Request(e.to_string()))?;
        Ok(Ack::new("OK"))
    }
}

/// Subject line: template kind plus the sender's name when present.
#[must_use]
pub fn subject_for(payload: &RelayPayload) -> String {
    let base = match payload.template {
        RelayTemplate::Contact => "Сообщение с сайта",
        RelayTemplate::Internship => "Заявка на стажировку",
    };
    match payload.param("fullName").or_else(|| payload.param("name")) {
        Some(name) if !name.is_empty() => format!("{base}: {name}"),
        _ => base.to_owned(),
    }
}

#[must_use]
pub fn render_relay_message(payload: &RelayPayload) -> String {
    let rows = payload
        .params
        .iter()
        .map(|(key, value)| {
            format!(
                "            <tr><th align=\"left\" style=\"border-bottom:1px solid #e3e7eb;\">{}</th>\
                 <td style=\"border-bottom:1px solid #e3e7eb;white-space:pre-wrap;\">{}</td></tr>",
                escape_html(key),
                escape_html(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    RELAY_MESSAGE_TEMPLATE
        .replace("{{TITLE}}", &escape_html(&subject_for(payload)))
        .replace("{{ROWS}}", &rows)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "resend_test.rs"]
mod tests;
