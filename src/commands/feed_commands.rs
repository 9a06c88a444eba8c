/// Commands sent from UI to the feed coroutine
#[derive(Debug, Clone, PartialEq)]
pub enum FeedCommand {
    /// Ask the author of an event to connect
    Connect {
        event_id: String,
    },

    /// Open a conversation about an event
    Message {
        event_id: String,
    },

    /// Dismiss the open conversation
    CloseConversation,
}
