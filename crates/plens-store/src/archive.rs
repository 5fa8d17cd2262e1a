use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use plens_core::{
    AgendaItemAnnotation, AnnotatedSession, Intervention, Regidor, Session, SessionId, Tag,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::paths::DataPaths;

// ── Raw sources ──

/// The five collections as parsed, before reconciliation.
#[derive(Debug, Clone, Default)]
pub struct RawSources {
    pub interventions: Vec<Intervention>,
    pub annotated: BTreeMap<SessionId, AnnotatedSession>,
    pub sessions: Vec<Session>,
    pub regidors: Vec<Regidor>,
    pub tags: Vec<Tag>,
}

/// `intervencions_annotated.json`: `{"sessions": {<id>: {...}}}`
#[derive(Deserialize)]
struct AnnotatedFile {
    #[serde(default)]
    sessions: BTreeMap<SessionId, AnnotatedSession>,
}

/// `regidors.json`: `{"regidors": [...]}`
#[derive(Deserialize)]
struct RegidorsFile {
    #[serde(default)]
    regidors: Vec<Regidor>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl RawSources {
    /// Read and parse all five source files.
    pub fn read(paths: &DataPaths) -> Result<Self, LoadError> {
        let interventions: Vec<Intervention> = read_json(&paths.interventions_json)?;
        let annotated: AnnotatedFile = read_json(&paths.annotated_json)?;
        let sessions: Vec<Session> = read_json(&paths.sessions_json)?;
        let regidors: RegidorsFile = read_json(&paths.regidors_json)?;
        let tags: Vec<Tag> = read_json(&paths.tags_json)?;
        Ok(Self {
            interventions,
            annotated: annotated.sessions,
            sessions,
            regidors: regidors.regidors,
            tags,
        })
    }
}

// ── Reconciliation ──

/// Intervention id -> annotated text, across every annotated session.
///
/// Sessions are visited in key order; a later duplicate id wins.
pub fn annotated_text_map(
    annotated: &BTreeMap<SessionId, AnnotatedSession>,
) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for session in annotated.values() {
        for int in &session.interventions {
            map.insert(int.id.clone(), int.annotated_text.clone());
        }
    }
    map
}

/// Read-only archive context. Built once, then passed by reference to every
/// query.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    interventions: Vec<Intervention>,
    sessions: Vec<Session>,
    annotated: BTreeMap<SessionId, AnnotatedSession>,
    regidors: Vec<Regidor>,
    tags: Vec<Tag>,
}

impl Archive {
    /// Read the source files under `paths` and reconcile them.
    pub fn load(paths: &DataPaths) -> Result<Self, LoadError> {
        let raw = RawSources::read(paths)?;
        let archive = Self::from_sources(raw);
        info!(
            root = %paths.root.display(),
            interventions = archive.interventions.len(),
            sessions = archive.sessions.len(),
            regidors = archive.regidors.len(),
            tags = archive.tags.len(),
            "archive loaded"
        );
        Ok(archive)
    }

    /// Merge annotations into interventions and keep only annotated sessions.
    pub fn from_sources(raw: RawSources) -> Self {
        let RawSources {
            interventions,
            mut annotated,
            sessions,
            regidors,
            tags,
        } = raw;

        for (key, session) in annotated.iter_mut() {
            if session.session_id.is_empty() {
                session.session_id = key.clone();
            }
        }

        let texts = annotated_text_map(&annotated);
        let interventions: Vec<Intervention> = interventions
            .into_iter()
            .map(|mut i| {
                i.annotated_text = texts.get(&i.id).filter(|t| !t.is_empty()).cloned();
                i
            })
            .collect();
        let merged = interventions
            .iter()
            .filter(|i| i.annotated_text.is_some())
            .count();

        let total_sessions = sessions.len();
        let sessions: Vec<Session> = sessions
            .into_iter()
            .filter(|s| annotated.contains_key(&s.session_id()))
            .collect();

        debug!(
            annotated_texts = texts.len(),
            merged,
            interventions = interventions.len(),
            "merged annotations"
        );
        debug!(
            kept = sessions.len(),
            dropped = total_sessions - sessions.len(),
            "filtered sessions without annotations"
        );

        Self {
            interventions,
            sessions,
            annotated,
            regidors,
            tags,
        }
    }

    // ── Accessors ──

    pub fn interventions(&self) -> &[Intervention] {
        &self.interventions
    }

    /// Sessions that have an annotation overlay, in source order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn annotated_sessions(&self) -> &BTreeMap<SessionId, AnnotatedSession> {
        &self.annotated
    }

    pub fn regidors(&self) -> &[Regidor] {
        &self.regidors
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    // ── Lookups ──

    pub fn is_annotated(&self, session_id: &str) -> bool {
        self.annotated.contains_key(session_id)
    }

    /// Retained session whose derived id equals `session_id`.
    pub fn find_session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.session_id() == session_id)
    }

    pub fn find_regidor(&self, name: &str) -> Option<&Regidor> {
        self.regidors.iter().find(|r| r.name == name)
    }

    pub fn find_tag(&self, code: u32) -> Option<&Tag> {
        self.tags.iter().find(|t| t.code == code)
    }

    pub fn find_intervention(&self, id: &str) -> Option<&Intervention> {
        self.interventions.iter().find(|i| i.id == id)
    }

    pub fn annotated_session(&self, session_id: &str) -> Option<&AnnotatedSession> {
        self.annotated.get(session_id)
    }

    pub fn agenda_annotation(
        &self,
        session_id: &str,
        agenda_title: &str,
    ) -> Option<&AgendaItemAnnotation> {
        self.annotated_session(session_id)?.agenda_item(agenda_title)
    }
}
