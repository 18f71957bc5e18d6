#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendMessageResponse {
    pub conversation_id: String,
    /// Email threading key, returned only for email sends. Feed it back as
    /// the thread id to keep replies in the same thread.
    pub email_message_id: Option<String>,
    pub message_id: String,
    /// Some channels (GMB) fan a send out into several messages and return
    /// this list instead of a single `message_id`.
    pub message_ids: Vec<String>,
    /// Informational text, e.g. when a workflow message was queued.
    pub msg: Option<String>,
}
