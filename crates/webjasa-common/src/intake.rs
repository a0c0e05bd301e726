//! Where submitted inquiries go.

use async_trait::async_trait;
use tracing::info;

use crate::contact::{ContactField, Inquiry};
use crate::error::Result;

/// Receives every submitted contact-form inquiry.
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<()>;
}

/// Writes inquiries to the log and nothing else.
#[derive(Debug, Default, Clone)]
pub struct LogInquirySink;

#[async_trait]
impl InquirySink for LogInquirySink {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<()> {
        info!(
            inquiry_id = %inquiry.id,
            received_at = %inquiry.received_at,
            name = inquiry.field(ContactField::Name),
            email = inquiry.field(ContactField::Email),
            phone = inquiry.field(ContactField::Phone),
            company = inquiry.field(ContactField::Company),
            service = inquiry.field(ContactField::Service),
            budget = inquiry.field(ContactField::Budget),
            message_len = inquiry.field(ContactField::Message).len(),
            "Contact form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;

    #[test]
    fn test_log_sink_accepts_any_inquiry() {
        let ack = ContactForm::new()
            .with_edit(ContactField::Message, "Butuh toko online")
            .submit();
        let sink = LogInquirySink;
        assert!(tokio_test::block_on(sink.deliver(&ack.inquiry)).is_ok());
    }
}
