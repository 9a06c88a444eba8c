use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

use crate::event::{ConnectionStatus, Event, EventType, EventUser, Skill};

const DEFAULT_CONNECT_LATENCY_MS: u64 = 800;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("connection for event {event_id} is already {status:?}")]
    AlreadyRequested {
        event_id: String,
        status: ConnectionStatus,
    },

    #[error("connection for event {event_id} is not pending (currently {status:?})")]
    NotPending {
        event_id: String,
        status: ConnectionStatus,
    },

    #[error("failed to read events from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse events: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value {value:?} for {name}")]
    InvalidSetting { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub viewer_id: String,
    pub viewer_name: String,
    pub events_path: Option<PathBuf>,
    pub connect_latency: Duration,
    /// Event ids whose connect requests come back as errors.
    pub unreachable_events: HashSet<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            viewer_id: Uuid::new_v4().to_string(),
            viewer_name: "You".to_string(),
            events_path: None,
            connect_latency: Duration::from_millis(DEFAULT_CONNECT_LATENCY_MS),
            unreachable_events: HashSet::new(),
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Result<Self, FeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(id) = lookup("SKILL_FEED_VIEWER_ID").filter(|v| !v.is_empty()) {
            config.viewer_id = id;
        }
        if let Some(name) = lookup("SKILL_FEED_VIEWER_NAME").filter(|v| !v.is_empty()) {
            config.viewer_name = name;
        }
        config.events_path = lookup("SKILL_FEED_EVENTS")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup("SKILL_FEED_CONNECT_LATENCY_MS") {
            let millis = raw.trim().parse::<u64>().map_err(|_| FeedError::InvalidSetting {
                name: "SKILL_FEED_CONNECT_LATENCY_MS",
                value: raw.clone(),
            })?;
            config.connect_latency = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("SKILL_FEED_UNREACHABLE") {
            config.unreachable_events = raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }

    pub fn is_viewer(&self, event: &Event) -> bool {
        event.user.id == self.viewer_id
    }

    pub fn accepts_connection(&self, event_id: &str) -> bool {
        !self.unreachable_events.contains(event_id)
    }
}

/// Connection status per event id. Ids never requested read as idle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionRegistry {
    statuses: HashMap<String, ConnectionStatus>,
}

impl ConnectionRegistry {
    pub fn status(&self, event_id: &str) -> ConnectionStatus {
        self.statuses.get(event_id).copied().unwrap_or_default()
    }

    /// Marks a request as in flight. Failed requests may be retried.
    pub fn request(&mut self, event_id: &str) -> Result<(), FeedError> {
        match self.status(event_id) {
            status @ (ConnectionStatus::Pending | ConnectionStatus::Success) => {
                Err(FeedError::AlreadyRequested {
                    event_id: event_id.to_string(),
                    status,
                })
            }
            ConnectionStatus::Idle | ConnectionStatus::Error => {
                self.statuses.insert(event_id.to_string(), ConnectionStatus::Pending);
                Ok(())
            }
        }
    }

    pub fn resolve(
        &mut self,
        event_id: &str,
        accepted: bool,
    ) -> Result<ConnectionStatus, FeedError> {
        let status = self.status(event_id);
        if status != ConnectionStatus::Pending {
            return Err(FeedError::NotPending {
                event_id: event_id.to_string(),
                status,
            });
        }

        let resolved = if accepted {
            ConnectionStatus::Success
        } else {
            ConnectionStatus::Error
        };
        self.statuses.insert(event_id.to_string(), resolved);
        Ok(resolved)
    }
}

/// Stands in for the round-trip of a connect request.
pub async fn simulate_connect(latency: Duration, accepted: bool) -> ConnectionStatus {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    if accepted {
        ConnectionStatus::Success
    } else {
        ConnectionStatus::Error
    }
}

pub fn parse_events(json: &str) -> Result<Vec<Event>, FeedError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_events(&json)?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn demo_event(
    id: &str,
    kind: EventType,
    skill: &str,
    description: &str,
    when: (NaiveDate, &str, &str),
    level: &str,
    is_relevant: bool,
    user: EventUser,
) -> Event {
    let (date, time, duration) = when;
    Event {
        id: id.to_string(),
        kind,
        skill: Skill { name: skill.to_string() },
        description: description.to_string(),
        date,
        time: time.to_string(),
        duration: duration.to_string(),
        level: level.to_string(),
        is_relevant,
        user,
    }
}

fn demo_user(name: &str, location: &str, id: &str) -> EventUser {
    EventUser {
        name: name.to_string(),
        image: None,
        location: location.to_string(),
        id: id.to_string(),
    }
}

/// Built-in feed used when no event file is configured.
pub fn demo_events(config: &FeedConfig) -> Vec<Event> {
    debug!("Building demo feed for viewer {}", config.viewer_id);
    vec![
        demo_event(
            "evt-guitar",
            EventType::Teach,
            "Fingerstyle Guitar",
            "Happy to walk through Travis picking and simple arrangements.",
            (date(2026, 10, 18), "7:00 PM", "1 hour"),
            "Beginner",
            true,
            demo_user("Sofia Reyes", "Austin, TX", "user-sofia"),
        ),
        demo_event(
            "evt-spanish",
            EventType::Learn,
            "Conversational Spanish",
            "Looking for a patient partner to practice everyday conversation.",
            (date(2026, 10, 20), "12:30 PM", "45 minutes"),
            "Intermediate",
            false,
            demo_user("Kenji Watanabe", "Osaka, Japan", "user-kenji"),
        ),
        demo_event(
            "evt-rust",
            EventType::Teach,
            "Rust Ownership",
            "Pairing session on borrowing, lifetimes, and fighting the borrow checker less.",
            (date(2026, 10, 22), "6:00 PM", "90 minutes"),
            "Advanced",
            true,
            demo_user(&config.viewer_name, "Remote", &config.viewer_id),
        ),
        demo_event(
            "evt-watercolor",
            EventType::Learn,
            "Watercolor Basics",
            "Want to learn washes and color mixing for landscape sketches.",
            (date(2026, 10, 25), "10:00 AM", "2 hours"),
            "Beginner",
            false,
            demo_user("Amara Okafor", "Lagos, Nigeria", "user-amara"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn unknown_event_reads_idle() {
        let registry = ConnectionRegistry::default();
        assert_eq!(registry.status("evt-x"), ConnectionStatus::Idle);
    }

    #[test]
    fn request_then_resolve() {
        let mut registry = ConnectionRegistry::default();
        registry.request("evt-1").unwrap();
        assert_eq!(registry.status("evt-1"), ConnectionStatus::Pending);

        let resolved = registry.resolve("evt-1", true).unwrap();
        assert_eq!(resolved, ConnectionStatus::Success);
        assert_eq!(registry.status("evt-1"), ConnectionStatus::Success);
        assert_eq!(registry.status("evt-2"), ConnectionStatus::Idle);
    }

    #[test]
    fn duplicate_request_is_rejected() {
        let mut registry = ConnectionRegistry::default();
        registry.request("evt-1").unwrap();
        let err = registry.request("evt-1").unwrap_err();
        assert!(matches!(
            err,
            FeedError::AlreadyRequested { status: ConnectionStatus::Pending, .. }
        ));

        registry.resolve("evt-1", true).unwrap();
        assert!(registry.request("evt-1").is_err());
    }

    #[test]
    fn failed_request_can_be_retried() {
        let mut registry = ConnectionRegistry::default();
        registry.request("evt-1").unwrap();
        assert_eq!(registry.resolve("evt-1", false).unwrap(), ConnectionStatus::Error);

        registry.request("evt-1").unwrap();
        assert_eq!(registry.status("evt-1"), ConnectionStatus::Pending);
    }

    #[test]
    fn resolve_requires_pending() {
        let mut registry = ConnectionRegistry::default();
        let err = registry.resolve("evt-1", true).unwrap_err();
        assert!(matches!(err, FeedError::NotPending { status: ConnectionStatus::Idle, .. }));
    }

    #[test]
    fn simulated_connect_reports_outcome() {
        let accepted = tokio_test::block_on(simulate_connect(Duration::ZERO, true));
        let rejected = tokio_test::block_on(simulate_connect(Duration::ZERO, false));
        assert_eq!(accepted, ConnectionStatus::Success);
        assert_eq!(rejected, ConnectionStatus::Error);
    }

    #[test]
    fn config_defaults() {
        let config = FeedConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.viewer_name, "You");
        assert_eq!(config.connect_latency, Duration::from_millis(800));
        assert!(config.events_path.is_none());
        assert!(Uuid::parse_str(&config.viewer_id).is_ok());
    }

    #[test]
    fn config_reads_overrides() {
        let config = FeedConfig::from_lookup(lookup_from(&[
            ("SKILL_FEED_VIEWER_ID", "user-me"),
            ("SKILL_FEED_VIEWER_NAME", "Robin"),
            ("SKILL_FEED_EVENTS", "/tmp/events.json"),
            ("SKILL_FEED_CONNECT_LATENCY_MS", "25"),
            ("SKILL_FEED_UNREACHABLE", "evt-a, evt-b,,"),
        ]))
        .unwrap();

        assert_eq!(config.viewer_id, "user-me");
        assert_eq!(config.viewer_name, "Robin");
        assert_eq!(config.events_path, Some(PathBuf::from("/tmp/events.json")));
        assert_eq!(config.connect_latency, Duration::from_millis(25));
        assert!(!config.accepts_connection("evt-a"));
        assert!(!config.accepts_connection("evt-b"));
        assert!(config.accepts_connection("evt-c"));
        assert_eq!(config.unreachable_events.len(), 2);
    }

    #[test]
    fn config_rejects_bad_latency() {
        let lookup = lookup_from(&[("SKILL_FEED_CONNECT_LATENCY_MS", "soon")]);
        let err = FeedConfig::from_lookup(lookup).unwrap_err();
        assert!(matches!(
            err,
            FeedError::InvalidSetting { name: "SKILL_FEED_CONNECT_LATENCY_MS", .. }
        ));
    }

    #[test]
    fn demo_feed_contains_viewer_event() {
        let lookup = lookup_from(&[("SKILL_FEED_VIEWER_ID", "user-me")]);
        let config = FeedConfig::from_lookup(lookup).unwrap();
        let events = demo_events(&config);
        assert_eq!(events.iter().filter(|e| config.is_viewer(e)).count(), 1);
        assert!(events.iter().any(|e| e.kind == EventType::Learn));
        assert!(events.iter().any(|e| e.kind == EventType::Teach));
    }

    #[test]
    fn parses_event_array() {
        let json = r#"[{
            "id": "evt-1",
            "type": "teach",
            "skill": { "name": "Chess" },
            "description": "Openings for club players",
            "date": "2026-12-01",
            "time": "8:00 PM",
            "duration": "1 hour",
            "level": "Intermediate",
            "isRelevant": false,
            "user": { "name": "Lev", "image": "https://img.example/lev.png", "location": "Riga", "id": "u-lev" }
        }]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventType::Teach);
        assert_eq!(events[0].user.avatar_image(), Some("https://img.example/lev.png"));
    }

    #[test]
    fn bundled_event_file_parses() {
        let events = parse_events(include_str!("../data/events.json")).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].user.avatar_image().is_some());
        assert!(events[1].user.avatar_image().is_none());
    }

    #[test]
    fn parse_errors_are_typed() {
        assert!(matches!(parse_events("{not json"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("skill-feed-missing-{}.json", Uuid::new_v4()));
        assert!(matches!(load_events(&path), Err(FeedError::Io { .. })));
    }
}
