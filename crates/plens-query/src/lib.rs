mod anchor;
mod filter;
mod group;

pub use anchor::{intervention_anchor, intervention_link};
pub use filter::{interventions_by_session, interventions_by_speaker, interventions_by_tag};
pub use group::{group_by_agenda_item, AgendaGroups, NO_AGENDA_ITEM};
pub use plens_store::Archive;

#[cfg(test)]
pub(crate) mod test_support {
    use plens_core::{AnnotatedSession, Intervention, Session, TopicTag};
    use plens_store::{Archive, RawSources};

    pub const SESSION: &str = "2023-02-01_AAA";

    pub fn int(id: &str, speaker: &str, start: f64, agenda: Option<&str>) -> Intervention {
        Intervention {
            id: id.into(),
            session_id: SESSION.into(),
            speaker_name: speaker.into(),
            start_seconds: start,
            agenda_item_title: agenda.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn with_tags(mut i: Intervention, codes: &[u32]) -> Intervention {
        i.tags = codes
            .iter()
            .map(|c| TopicTag {
                code: *c,
                name: format!("tag {c}"),
            })
            .collect();
        i
    }

    pub fn archive(interventions: Vec<Intervention>) -> Archive {
        let mut raw = RawSources {
            interventions,
            sessions: vec![Session {
                title: "Plenari".into(),
                date: "01/02/2023".into(),
                video_url: "https://www.youtube.com/embed/AAA".into(),
                documents: vec![],
            }],
            ..Default::default()
        };
        raw.annotated
            .insert(SESSION.to_string(), AnnotatedSession::default());
        Archive::from_sources(raw)
    }
}
