//! Event model

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A scheduled event
///
/// Kept as an ordered JSON object: `uid`, `platform`, `schedules` and any
/// other fields pass through untouched, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

impl Event {
    /// The event title, if present and a string
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// The raw `path` value; `None` when the field is absent
    pub fn path(&self) -> Option<&Value> {
        self.fields.get("path")
    }

    /// Set `path`, writing `null` for `None`
    ///
    /// An existing key keeps its position; a new one is appended.
    /// Returns whether the stored value changed.
    pub fn set_path(&mut self, path: Option<&str>) -> bool {
        let value = path.map_or(Value::Null, |p| Value::String(p.to_string()));
        let changed = self.path() != Some(&value);
        self.fields.insert("path".to_string(), value);
        changed
    }
}

/// The events document: `{"events": [...]}` plus any other top-level keys
///
/// Top-level keys keep their original order; `events` is written back in
/// the slot it was read from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct EventsDocument {
    pub events: Vec<Event>,
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for EventsDocument {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let slot = fields
            .get_mut("events")
            .ok_or_else(|| "missing field `events`".to_string())?;
        let events = serde_json::from_value(slot.take()).map_err(|e| e.to_string())?;

        Ok(Self { events, fields })
    }
}

impl Serialize for EventsDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let mut wrote_events = false;

        for (key, value) in &self.fields {
            if key == "events" {
                map.serialize_entry(key, &self.events)?;
                wrote_events = true;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        if !wrote_events {
            map.serialize_entry("events", &self.events)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    fn keys(event: &Event) -> Vec<String> {
        match serde_json::to_value(event).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_title_accessor() {
        assert_eq!(event(json!({"title": "Aphex Twin"})).title(), Some("Aphex Twin"));
        assert_eq!(event(json!({"image": "x.webp"})).title(), None);
        assert_eq!(event(json!({"title": 42})).title(), None);
    }

    #[test]
    fn test_set_path_keeps_key_position() {
        let mut ev = event(json!({"uid": "1", "path": null, "title": "A"}));
        assert!(ev.set_path(Some("/artists/a")));

        assert_eq!(keys(&ev), ["uid", "path", "title"]);
        assert_eq!(ev.path(), Some(&json!("/artists/a")));
    }

    #[test]
    fn test_set_path_appends_missing_key() {
        let mut ev = event(json!({"title": "A", "image": "a.webp"}));
        ev.set_path(Some("/artists/a"));

        assert_eq!(keys(&ev), ["title", "image", "path"]);
    }

    #[test]
    fn test_set_path_reports_no_change() {
        let mut ev = event(json!({"title": "A", "path": "/artists/a"}));
        assert!(!ev.set_path(Some("/artists/a")));
        assert!(ev.set_path(None));
        assert_eq!(ev.path(), Some(&Value::Null));
    }

    #[test]
    fn test_document_requires_events() {
        let result = serde_json::from_value::<EventsDocument>(json!({"items": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_document_keeps_top_level_order() {
        let input = r#"{"version": 2, "events": [{"title": "A"}], "updatedAt": "2024-07-01"}"#;
        let mut doc: EventsDocument = serde_json::from_str(input).unwrap();
        assert_eq!(doc.events.len(), 1);

        doc.events[0].set_path(Some("/artists/a"));

        let output = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            output,
            r#"{"version":2,"events":[{"title":"A","path":"/artists/a"}],"updatedAt":"2024-07-01"}"#
        );
    }

    #[test]
    fn test_document_rejects_non_object_events() {
        let result = serde_json::from_str::<EventsDocument>(r#"{"events": [1, 2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_large_numbers_round_trip() {
        let input = r#"{"events":[{"title":"A","big":123456789012345678901234,"ratio":0.1}]}"#;
        let doc: EventsDocument = serde_json::from_str(input).unwrap();
        assert_eq!(serde_json::to_string(&doc).unwrap(), input);
    }
}
