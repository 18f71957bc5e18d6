use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Channel a conversation message goes through (`type`).
///
/// The channel decides which optional request fields the API will look at:
/// phone numbers for [`MessageType::Sms`] and [`MessageType::WhatsApp`],
/// subject/html for [`MessageType::Email`], mentions for
/// [`MessageType::InternalComment`], and so on.
pub enum MessageType {
    Sms,
    Email,
    WhatsApp,
    Ig,
    Fb,
    Custom,
    LiveChat,
    InternalComment,
}

impl MessageType {
    /// JSON field name used by HighLevel (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire value expected by HighLevel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Email => "Email",
            Self::WhatsApp => "WhatsApp",
            Self::Ig => "IG",
            Self::Fb => "FB",
            Self::Custom => "Custom",
            Self::LiveChat => "Live_Chat",
            Self::InternalComment => "InternalComment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Reply mode for outbound email messages (`emailReplyMode`).
pub enum EmailReplyMode {
    Reply,
    ReplyAll,
}

impl EmailReplyMode {
    /// JSON field name used by HighLevel (`emailReplyMode`).
    pub const FIELD: &'static str = "emailReplyMode";

    /// Wire value expected by HighLevel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::ReplyAll => "reply_all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status recorded on the message (`status`).
pub enum MessageStatus {
    Delivered,
    Failed,
    Pending,
    Read,
}

impl MessageStatus {
    /// JSON field name used by HighLevel (`status`).
    pub const FIELD: &'static str = "status";

    /// Wire value expected by HighLevel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Read => "read",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// HighLevel API access token, sent as a bearer `Authorization` header.
///
/// Works with both private-integration tokens and OAuth access tokens.
/// Invariant: non-empty after trimming.
pub struct AccessToken(String);

impl AccessToken {
    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField {
                field: "access token",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`scheduledTimestamp`).
///
/// Used to schedule a message for later delivery.
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// JSON field name used by HighLevel (`scheduledTimestamp`).
    pub const FIELD: &'static str = "scheduledTimestamp";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> i64 {
        self.0
    }
}
