use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    EmailReplyMode, MessageStatus, MessageType, SendMessage, SendMessageResponse, UnixTimestamp,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageJsonResponse {
    #[serde(default)]
    conversation_id: String,
    #[serde(default)]
    email_message_id: Option<String>,
    #[serde(default)]
    message_id: String,
    #[serde(default)]
    message_ids: Vec<String>,
    #[serde(default)]
    msg: Option<String>,
}

/// Encode the JSON body for `POST /conversations/messages`.
///
/// `type`, `contactId`, and `status` are always present (an unset `type` or
/// `status` encodes as `""`, which is how the API serializes its zero value).
/// Every other field is inserted only when set, so unset fields are absent
/// from the body rather than null. Array order is preserved.
pub fn encode_send_message_body(request: &SendMessage) -> Value {
    let mut body = Map::new();

    let message_type = request.message_type.map(MessageType::as_str).unwrap_or("");
    body.insert(MessageType::FIELD.to_owned(), Value::from(message_type));
    body.insert(
        "contactId".to_owned(),
        Value::from(request.contact_id.as_str()),
    );
    let status = request.status.map(MessageStatus::as_str).unwrap_or("");
    body.insert(MessageStatus::FIELD.to_owned(), Value::from(status));

    push_string(&mut body, "appointmentId", request.appointment_id.as_deref());
    push_string_list(&mut body, "attachments", &request.attachments);
    push_string(&mut body, "emailFrom", request.email_from.as_deref());
    push_string(&mut body, "emailTo", request.email_to.as_deref());
    push_string_list(&mut body, "emailCc", &request.email_cc);
    push_string_list(&mut body, "emailBcc", &request.email_bcc);
    push_string(&mut body, "subject", request.subject.as_deref());
    push_string(&mut body, "html", request.html.as_deref());
    if let Some(mode) = request.email_reply_mode {
        body.insert(EmailReplyMode::FIELD.to_owned(), Value::from(mode.as_str()));
    }
    push_string(&mut body, "threadId", request.thread_id.as_deref());
    push_string(&mut body, "fromNumber", request.from_number.as_deref());
    push_string(&mut body, "toNumber", request.to_number.as_deref());
    push_string(&mut body, "message", request.message.as_deref());
    push_string(
        &mut body,
        "replyMessageId",
        request.reply_message_id.as_deref(),
    );
    push_string(&mut body, "templateId", request.template_id.as_deref());
    if let Some(time) = request.scheduled_timestamp {
        body.insert(UnixTimestamp::FIELD.to_owned(), Value::from(time.value()));
    }
    push_string(
        &mut body,
        "conversationProviderId",
        request.conversation_provider_id.as_deref(),
    );
    push_string_list(&mut body, "mentions", &request.mentions);
    push_string(&mut body, "userId", request.user_id.as_deref());

    Value::Object(body)
}

fn push_string(body: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        body.insert(key.to_owned(), Value::from(value));
    }
}

fn push_string_list(body: &mut Map<String, Value>, key: &str, values: &[String]) {
    if !values.is_empty() {
        let values = values.iter().map(|value| Value::from(value.as_str()));
        body.insert(key.to_owned(), Value::Array(values.collect()));
    }
}

pub fn decode_send_message_json_response(
    json: &str,
) -> Result<SendMessageResponse, TransportError> {
    let parsed: SendMessageJsonResponse = serde_json::from_str(json)?;
    Ok(SendMessageResponse {
        conversation_id: parsed.conversation_id,
        email_message_id: parsed.email_message_id,
        message_id: parsed.message_id,
        message_ids: parsed.message_ids,
        msg: parsed.msg,
    })
}
