use plens_core::Intervention;
use plens_store::Archive;

use crate::filter::interventions_by_session;
use crate::group::group_by_agenda_item;

fn same_turn(a: &Intervention, b: &Intervention) -> bool {
    std::ptr::eq(a, b)
        || (a.start_seconds == b.start_seconds
            && a.speaker_name == b.speaker_name
            && a.session_id == b.session_id)
}

/// Zero-based position anchor (`int-<n>`) of an intervention within its
/// session page, counting in agenda-group order. Falls back to `int-0`.
pub fn intervention_anchor(archive: &Archive, intervention: &Intervention) -> String {
    let session_items = interventions_by_session(archive, &intervention.session_id);
    let grouped = group_by_agenda_item(&session_items);
    let position = grouped
        .flatten()
        .position(|item| same_turn(item, intervention));
    position
        .map(|idx| format!("int-{idx}"))
        .unwrap_or_else(|| "int-0".to_string())
}

/// Site path of the session page scrolled to `anchor`.
pub fn intervention_link(session_id: &str, anchor: &str) -> String {
    format!("/sessions/{session_id}/#{anchor}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_follow_group_order() {
        let a = archive(vec![
            int("a", "Ada", 0.0, Some("X")),
            int("b", "Bo", 10.0, Some("Y")),
            int("c", "Cy", 20.0, Some("X")),
        ]);
        let anchors: Vec<String> = a
            .interventions()
            .iter()
            .map(|i| intervention_anchor(&a, i))
            .collect();
        // X group: a, c ; Y group: b
        assert_eq!(anchors, vec!["int-0", "int-2", "int-1"]);
    }

    #[test]
    fn anchors_are_distinct_within_session() {
        let a = archive(vec![
            int("a", "Ada", 0.0, None),
            int("b", "Ada", 5.0, None),
            int("c", "Bo", 5.0, Some("Punt")),
            int("d", "Cy", 9.0, None),
        ]);
        let anchors: HashSet<String> = a
            .interventions()
            .iter()
            .map(|i| intervention_anchor(&a, i))
            .collect();
        assert_eq!(anchors.len(), 4);
    }

    #[test]
    fn matches_detached_copy_by_heuristic() {
        let a = archive(vec![int("a", "Ada", 0.0, None), int("b", "Bo", 3.0, None)]);
        let copy = a.interventions()[1].clone();
        assert_eq!(intervention_anchor(&a, &copy), "int-1");
    }

    #[test]
    fn unknown_intervention_falls_back() {
        let a = archive(vec![int("a", "Ada", 0.0, None)]);
        let stranger = int("z", "Zoe", 99.0, None);
        assert_eq!(intervention_anchor(&a, &stranger), "int-0");
    }

    #[test]
    fn link_format() {
        assert_eq!(
            intervention_link("2023-02-01_AAA", "int-4"),
            "/sessions/2023-02-01_AAA/#int-4"
        );
    }
}
