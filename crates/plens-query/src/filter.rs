use plens_core::Intervention;
use plens_store::Archive;

/// Interventions of one session, in archive order.
pub fn interventions_by_session<'a>(archive: &'a Archive, session_id: &str) -> Vec<&'a Intervention> {
    archive
        .interventions()
        .iter()
        .filter(|i| i.session_id == session_id)
        .collect()
}

/// Interventions whose speaker name matches exactly.
pub fn interventions_by_speaker<'a>(archive: &'a Archive, name: &str) -> Vec<&'a Intervention> {
    archive
        .interventions()
        .iter()
        .filter(|i| i.speaker_name == name)
        .collect()
}

/// Interventions carrying the topic tag `code`.
pub fn interventions_by_tag(archive: &Archive, code: u32) -> Vec<&Intervention> {
    archive
        .interventions()
        .iter()
        .filter(|i| i.has_topic(code))
        .collect()
}
