use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::session_id::derive_session_id;

/// Session id format: `<year>-<month>-<day>_<video-id>`
pub type SessionId = String;

/// Intervention id, unique across the archive.
pub type InterventionId = String;

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A topic tag as carried on each intervention (`{code, name}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopicTag {
    pub code: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One spoken turn by one council member within one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Intervention {
    pub id: InterventionId,
    pub session_id: SessionId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaker_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaker_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaker_party: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaker_role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Same text with inline rhetoric markup. Filled in by reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default)]
    pub start_seconds: f64,
    #[serde(default)]
    pub end_seconds: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda_item_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda_item_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<TopicTag>,
    /// Ordinal 1-4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarization: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hate_speech: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_agenda: bool,
}

impl Intervention {
    /// Agenda item title, if present and non-empty.
    pub fn agenda_title(&self) -> Option<&str> {
        self.agenda_item_title.as_deref().filter(|t| !t.is_empty())
    }

    /// Annotated text, if present and non-empty.
    pub fn annotated(&self) -> Option<&str> {
        self.annotated_text.as_deref().filter(|t| !t.is_empty())
    }

    pub fn has_topic(&self, code: u32) -> bool {
        self.tags.iter().any(|t| t.code == code)
    }

    /// Polarization level usable for averaging (zero counts as unset).
    pub fn polarization_level(&self) -> Option<u8> {
        self.polarization.filter(|p| *p > 0)
    }

    pub fn is_hate_speech(&self) -> bool {
        self.hate_speech.unwrap_or(false)
    }
}

/// A document attached to a session (agenda, minutes, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// One recorded plenary meeting. Its id is derived, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// `DD/MM/YYYY`
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<Document>,
}

impl Session {
    pub fn session_id(&self) -> SessionId {
        derive_session_id(&self.date, &self.video_url)
    }
}

/// Per-agenda-item summary produced by the annotation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgendaItemAnnotation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agenda_summary: String,
    /// party -> stated position
    #[serde(default, deserialize_with = "null_as_default")]
    pub party_positions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedIntervention {
    pub id: InterventionId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotated_text: String,
}

/// Annotation overlay for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedSession {
    /// Filled from the map key when the source omits it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_id: SessionId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agenda_items: Vec<AgendaItemAnnotation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interventions: Vec<AnnotatedIntervention>,
}

impl AnnotatedSession {
    pub fn has_agenda_summaries(&self) -> bool {
        self.agenda_items
            .iter()
            .any(|a| !a.agenda_summary.is_empty())
    }

    pub fn agenda_item(&self, title: &str) -> Option<&AgendaItemAnnotation> {
        self.agenda_items.iter().find(|a| a.title == title)
    }
}

/// Council member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Regidor {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub party: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub party_logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dedication: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_media: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_update: String,
}

/// Topic tag definition from `tags.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub code: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}
