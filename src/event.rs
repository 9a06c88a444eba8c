use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the author wants to learn or teach the skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Learn,
    Teach,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Learn => "Want to Learn",
            EventType::Teach => "Want to Teach",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub location: String,
    pub id: String,
}

impl EventUser {
    /// Glyph shown when there is no avatar image.
    pub fn avatar_fallback(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn avatar_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.trim().is_empty())
    }
}

/// A learn/teach request shown by one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub skill: Skill,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub level: String,
    #[serde(default)]
    pub is_relevant: bool,
    pub user: EventUser,
}

impl Event {
    pub fn schedule_label(&self) -> String {
        format!("{} ({})", self.time, self.duration)
    }
}

/// Outcome of a connect request, owned by whoever renders the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUST_EVENT: &str = r#"{
        "id": "evt-1",
        "type": "learn",
        "skill": { "name": "Rust" },
        "description": "Looking for someone to pair on async code",
        "date": "2026-10-20",
        "time": "6:00 PM",
        "duration": "1 hour",
        "level": "Beginner",
        "isRelevant": true,
        "user": { "name": "Maya", "location": "Lisbon", "id": "u-7" }
    }"#;

    #[test]
    fn deserializes_camel_case_event() {
        let event: Event = serde_json::from_str(RUST_EVENT).unwrap();
        assert_eq!(event.kind, EventType::Learn);
        assert!(event.is_relevant);
        assert_eq!(event.user.image, None);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn relevance_defaults_to_false() {
        let json = RUST_EVENT.replace("\"isRelevant\": true,", "");
        let event: Event = serde_json::from_str(&json).unwrap();
        assert!(!event.is_relevant);
    }

    #[test]
    fn type_labels() {
        assert_eq!(EventType::Learn.label(), "Want to Learn");
        assert_eq!(EventType::Teach.label(), "Want to Teach");
    }

    #[test]
    fn schedule_combines_time_and_duration() {
        let event: Event = serde_json::from_str(RUST_EVENT).unwrap();
        assert_eq!(event.schedule_label(), "6:00 PM (1 hour)");
    }

    #[test]
    fn avatar_fallback_uses_first_character() {
        let mut user = EventUser {
            name: "Émile".to_string(),
            image: Some("  ".to_string()),
            location: "Lyon".to_string(),
            id: "u-1".to_string(),
        };
        assert_eq!(user.avatar_fallback(), "É");
        assert_eq!(user.avatar_image(), None);

        user.name.clear();
        assert_eq!(user.avatar_fallback(), "");
    }

    #[test]
    fn status_defaults_to_idle() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Idle);
        let status: ConnectionStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, ConnectionStatus::Pending);
    }
}
