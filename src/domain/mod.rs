//! Domain layer: typed request/response values and local validation (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendMessage;
pub use response::SendMessageResponse;
pub use validation::ValidationError;
pub use value::{AccessToken, EmailReplyMode, MessageStatus, MessageType, UnixTimestamp};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new("   "),
            Err(ValidationError::MissingField {
                field: "access token"
            })
        ));
    }

    #[test]
    fn access_token_trims_surrounding_whitespace() {
        let token = AccessToken::new(" pit-abc123 ").unwrap();
        assert_eq!(token.as_str(), "pit-abc123");
    }

    #[test]
    fn message_type_wire_values() {
        assert_eq!(MessageType::Sms.as_str(), "SMS");
        assert_eq!(MessageType::Email.as_str(), "Email");
        assert_eq!(MessageType::WhatsApp.as_str(), "WhatsApp");
        assert_eq!(MessageType::Ig.as_str(), "IG");
        assert_eq!(MessageType::Fb.as_str(), "FB");
        assert_eq!(MessageType::Custom.as_str(), "Custom");
        assert_eq!(MessageType::LiveChat.as_str(), "Live_Chat");
        assert_eq!(MessageType::InternalComment.as_str(), "InternalComment");
    }

    #[test]
    fn email_reply_mode_wire_values() {
        assert_eq!(EmailReplyMode::Reply.as_str(), "reply");
        assert_eq!(EmailReplyMode::ReplyAll.as_str(), "reply_all");
    }

    #[test]
    fn message_status_wire_values() {
        assert_eq!(MessageStatus::Delivered.as_str(), "delivered");
        assert_eq!(MessageStatus::Failed.as_str(), "failed");
        assert_eq!(MessageStatus::Pending.as_str(), "pending");
        assert_eq!(MessageStatus::Read.as_str(), "read");
    }

    #[test]
    fn validate_requires_contact_id() {
        let mut request = SendMessage::new(MessageType::Sms, "c1", MessageStatus::Pending);
        request.contact_id.clear();
        assert!(matches!(
            request.validate(),
            Err(ValidationError::MissingField { field: "contactId" })
        ));
    }

    #[test]
    fn validate_requires_message_type() {
        let mut request = SendMessage::new(MessageType::Sms, "c1", MessageStatus::Pending);
        request.message_type = None;
        assert!(matches!(
            request.validate(),
            Err(ValidationError::MissingField { field: "type" })
        ));
    }

    #[test]
    fn validate_reports_contact_id_before_type() {
        let request = SendMessage::default();
        assert!(matches!(
            request.validate(),
            Err(ValidationError::MissingField { field: "contactId" })
        ));
    }

    #[test]
    fn validate_does_not_check_status() {
        let mut request = SendMessage::new(MessageType::Sms, "c1", MessageStatus::Pending);
        request.status = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_accepts_a_minimal_request() {
        let request = SendMessage::new(MessageType::Email, "c1", MessageStatus::Delivered);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn unix_timestamp_keeps_its_value() {
        assert_eq!(UnixTimestamp::new(1_700_000_000).value(), 1_700_000_000);
    }
}
