use crate::domain::validation::ValidationError;
use crate::domain::value::{EmailReplyMode, MessageStatus, MessageType, UnixTimestamp};

#[derive(Debug, Clone, Default)]
/// Request payload for sending a message into a contact's conversation.
///
/// Only the required field group is checked locally (see
/// [`SendMessage::validate`]). Which optional fields matter depends on the
/// channel; the API enforces channel-specific requirements server-side, so an
/// incomplete request is sent as-is and rejected upstream if invalid.
pub struct SendMessage {
    /// Channel the message is sent through.
    pub message_type: Option<MessageType>,
    /// ID of the contact receiving the message.
    pub contact_id: String,
    /// Message status. HighLevel documents this as required but does not
    /// reject requests without it, and neither does this client.
    pub status: Option<MessageStatus>,
    /// ID of an associated appointment.
    pub appointment_id: Option<String>,
    /// Attachment URLs. Empty means the field is left off the wire.
    pub attachments: Vec<String>,
    /// Email address to send from.
    pub email_from: Option<String>,
    /// Email address to send to, when different from the contact's primary
    /// email. Must be an address associated with the contact.
    pub email_to: Option<String>,
    pub email_cc: Vec<String>,
    pub email_bcc: Vec<String>,
    /// Subject line for email messages.
    pub subject: Option<String>,
    /// HTML content of the message.
    pub html: Option<String>,
    pub email_reply_mode: Option<EmailReplyMode>,
    /// ID of the message thread. For email this is the message id that groups
    /// the thread; pair it with `reply_message_id` to continue a thread.
    pub thread_id: Option<String>,
    /// Sender phone number for outbound messages.
    pub from_number: Option<String>,
    /// Recipient phone number for outbound messages.
    pub to_number: Option<String>,
    /// Text content of the message. For [`MessageType::InternalComment`],
    /// mention team members as `@username<userId>id</userId>`; each mentioned
    /// id should also be listed in `mentions`.
    pub message: Option<String>,
    /// ID of the message being replied to.
    pub reply_message_id: Option<String>,
    /// ID of a message template.
    pub template_id: Option<String>,
    /// When set, the message is scheduled instead of sent immediately.
    pub scheduled_timestamp: Option<UnixTimestamp>,
    /// ID of the conversation provider handling delivery.
    pub conversation_provider_id: Option<String>,
    /// User ids mentioned in an internal comment, matching the
    /// `@username<userId>id</userId>` tags in `message`.
    pub mentions: Vec<String>,
    /// User making an internal comment. Without it the comment is attributed
    /// to the system or default user.
    pub user_id: Option<String>,
}

impl SendMessage {
    /// Create a request with the required field group set; every other field
    /// starts unset.
    pub fn new(
        message_type: MessageType,
        contact_id: impl Into<String>,
        status: MessageStatus,
    ) -> Self {
        Self {
            message_type: Some(message_type),
            contact_id: contact_id.into(),
            status: Some(status),
            ..Self::default()
        }
    }

    /// Check the locally required fields, in the order the API documents them.
    ///
    /// Channel-specific requirements (`to_number` for SMS, `html`/`subject`
    /// for email, `mentions` for internal comments) are deliberately not
    /// checked here; the API rejects those itself.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.contact_id.is_empty() {
            return Err(ValidationError::MissingField { field: "contactId" });
        }
        if self.message_type.is_none() {
            return Err(ValidationError::MissingField {
                field: MessageType::FIELD,
            });
        }
        Ok(())
    }
}
