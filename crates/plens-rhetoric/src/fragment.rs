use plens_core::{Intervention, TopicTag};
use plens_query::{intervention_anchor, intervention_link};
use plens_store::Archive;
use serde::Serialize;

use crate::scan::tagged_spans;
use crate::tag::RhetoricTag;

/// A tagged stretch of speech, with enough context to link back to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhetoricFragment {
    pub tag: RhetoricTag,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub text: String,
    pub speaker_name: String,
    pub speaker_party: String,
    pub session_id: String,
    pub session_date: String,
    pub session_title: String,
    /// `/sessions/<session_id>/#int-<n>`
    pub intervention_anchor: String,
    pub topics: Vec<TopicTag>,
}

/// Fragments of one intervention, tag by tag in vocabulary order.
pub fn fragments_for(archive: &Archive, intervention: &Intervention) -> Vec<RhetoricFragment> {
    let Some(text) = intervention.annotated() else {
        return Vec::new();
    };
    let anchor = intervention_anchor(archive, intervention);
    let link = intervention_link(&intervention.session_id, &anchor);

    let mut out = Vec::new();
    for tag in RhetoricTag::ALL {
        for span in tagged_spans(text, tag) {
            out.push(RhetoricFragment {
                tag,
                label: tag.label(),
                emoji: tag.emoji(),
                color: tag.color(),
                text: span.trim().to_string(),
                speaker_name: intervention.speaker_name.clone(),
                speaker_party: intervention.speaker_party.clone(),
                session_id: intervention.session_id.clone(),
                session_date: intervention.session_date.clone(),
                session_title: intervention.session_title.clone(),
                intervention_anchor: link.clone(),
                topics: intervention.tags.clone(),
            });
        }
    }
    out
}

/// Every fragment in the archive: intervention order, then tag, then
/// occurrence.
pub fn extract_fragments(archive: &Archive) -> Vec<RhetoricFragment> {
    archive
        .interventions()
        .iter()
        .flat_map(|i| fragments_for(archive, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plens_core::{AnnotatedIntervention, AnnotatedSession, Session};
    use plens_store::RawSources;

    const SID: &str = "2023-02-01_AAA";

    fn archive(items: &[(&str, &str, f64, &str)]) -> Archive {
        let interventions = items
            .iter()
            .map(|(id, speaker, start, _)| Intervention {
                id: id.to_string(),
                session_id: SID.into(),
                session_date: "01/02/2023".into(),
                session_title: "Plenari".into(),
                speaker_name: speaker.to_string(),
                speaker_party: "ERC".into(),
                start_seconds: *start,
                tags: vec![TopicTag {
                    code: 4,
                    name: "Mobilitat".into(),
                }],
                ..Default::default()
            })
            .collect();
        let overlay = AnnotatedSession {
            interventions: items
                .iter()
                .map(|(id, _, _, text)| AnnotatedIntervention {
                    id: id.to_string(),
                    annotated_text: text.to_string(),
                })
                .collect(),
            ..Default::default()
        };
        let mut raw = RawSources {
            interventions,
            sessions: vec![Session {
                date: "01/02/2023".into(),
                video_url: "https://www.youtube.com/embed/AAA".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        raw.annotated.insert(SID.to_string(), overlay);
        Archive::from_sources(raw)
    }

    #[test]
    fn single_fragment_roundtrip() {
        let a = archive(&[("i1", "Ada", 0.0, "Diu <fr-dada>  X  </fr-dada>.")]);
        let frags = extract_fragments(&a);
        assert_eq!(frags.len(), 1);
        let f = &frags[0];
        assert_eq!(f.tag, RhetoricTag::DataClaim);
        assert_eq!(f.text, "X");
        assert_eq!(f.label, "Dada");
        assert_eq!(f.emoji, "🔵");
        assert_eq!(f.color, "#1565C0");
        assert_eq!(f.speaker_name, "Ada");
        assert_eq!(f.speaker_party, "ERC");
        assert_eq!(f.session_title, "Plenari");
        assert_eq!(f.intervention_anchor, "/sessions/2023-02-01_AAA/#int-0");
        assert_eq!(f.topics.len(), 1);
    }

    #[test]
    fn order_is_intervention_then_tag_then_occurrence() {
        let a = archive(&[
            (
                "i1",
                "Ada",
                0.0,
                "<fr-atac>a1</fr-atac><fr-proposta>p1</fr-proposta><fr-atac>a2</fr-atac>",
            ),
            ("i2", "Bo", 5.0, "<fr-dada>d1</fr-dada>"),
        ]);
        let frags = extract_fragments(&a);
        let got: Vec<(&str, &str)> = frags
            .iter()
            .map(|f| (f.tag.name(), f.text.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("fr-proposta", "p1"),
                ("fr-atac", "a1"),
                ("fr-atac", "a2"),
                ("fr-dada", "d1"),
            ]
        );
        assert_eq!(frags[3].intervention_anchor, "/sessions/2023-02-01_AAA/#int-1");
    }

    #[test]
    fn unannotated_interventions_skipped() {
        let a = archive(&[("i1", "Ada", 0.0, ""), ("i2", "Bo", 1.0, "sense marques")]);
        assert!(extract_fragments(&a).is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let a = archive(&[("i1", "Ada", 0.0, "<fr-ideologia>llibertat</fr-ideologia>")]);
        assert_eq!(extract_fragments(&a), extract_fragments(&a));
    }

    #[test]
    fn serializes_tag_name() {
        let a = archive(&[("i1", "Ada", 0.0, "<fr-atac>x</fr-atac>")]);
        let v = serde_json::to_value(&extract_fragments(&a)[0]).unwrap();
        assert_eq!(v["tag"], "fr-atac");
        assert_eq!(v["label"], "Atac");
    }
}
