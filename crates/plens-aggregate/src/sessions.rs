use std::collections::HashSet;

use plens_core::Session;
use plens_query::interventions_by_session;
use plens_rhetoric::count_markup_tags;
use plens_store::Archive;
use serde::Serialize;

use crate::polarization::rounded_average;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    #[serde(flatten)]
    pub session: Session,
    pub session_id: String,
    pub intervention_count: usize,
    /// Distinct non-empty agenda item titles.
    pub agenda_item_count: usize,
    pub avg_polarization: u32,
    pub has_hate_speech: bool,
    /// `<fr-...>` opening markers across the session's annotated text.
    pub rhetoric_tag_count: usize,
    pub has_agenda_summaries: bool,
}

/// Stats for every retained session, in session order.
pub fn session_stats(archive: &Archive) -> Vec<SessionStats> {
    archive
        .sessions()
        .iter()
        .map(|s| {
            let session_id = s.session_id();
            let items = interventions_by_session(archive, &session_id);
            let agenda_items: HashSet<&str> = items.iter().filter_map(|i| i.agenda_title()).collect();
            let rhetoric_tag_count = items
                .iter()
                .filter_map(|i| i.annotated_text.as_deref())
                .map(count_markup_tags)
                .sum();
            let has_agenda_summaries = archive
                .annotated_session(&session_id)
                .is_some_and(|a| a.has_agenda_summaries());

            SessionStats {
                session: s.clone(),
                intervention_count: items.len(),
                agenda_item_count: agenda_items.len(),
                avg_polarization: rounded_average(&items),
                has_hate_speech: items.iter().any(|i| i.is_hate_speech()),
                rhetoric_tag_count,
                has_agenda_summaries,
                session_id,
            }
        })
        .collect()
}
