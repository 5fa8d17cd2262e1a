use std::collections::HashSet;

use plens_core::format::slugify;
use plens_core::Regidor;
use plens_query::interventions_by_speaker;
use plens_store::Archive;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegidorStats {
    #[serde(flatten)]
    pub regidor: Regidor,
    pub slug: String,
    pub intervention_count: usize,
    pub session_count: usize,
}

/// Council members ranked by number of interventions, most active first.
/// Ties keep source order.
pub fn regidor_stats(archive: &Archive) -> Vec<RegidorStats> {
    let mut stats: Vec<RegidorStats> = archive
        .regidors()
        .iter()
        .map(|r| {
            let items = interventions_by_speaker(archive, &r.name);
            let sessions: HashSet<&str> = items.iter().map(|i| i.session_id.as_str()).collect();
            RegidorStats {
                regidor: r.clone(),
                slug: slugify(Some(&r.name)),
                intervention_count: items.len(),
                session_count: sessions.len(),
            }
        })
        .collect();
    stats.sort_by(|a, b| b.intervention_count.cmp(&a.intervention_count));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    const S1: &str = "2023-02-01_AAA";
    const S2: &str = "2023-03-01_BBB";

    #[test]
    fn ranked_by_interventions() {
        let a = archive(
            &[
                turn("a", S1, "Bo Ràfols"),
                turn("b", S1, "Ada"),
                turn("c", S2, "Ada"),
                turn("d", S2, "Ada"),
            ],
            &[],
            &["Bo Ràfols", "Ada", "Cy"],
            &[],
            &[],
        );
        let stats = regidor_stats(&a);
        let order: Vec<(&str, usize, usize)> = stats
            .iter()
            .map(|s| (s.regidor.name.as_str(), s.intervention_count, s.session_count))
            .collect();
        assert_eq!(order, vec![("Ada", 3, 2), ("Bo Ràfols", 1, 1), ("Cy", 0, 0)]);
        assert_eq!(stats[1].slug, "bo-rafols");
    }

    #[test]
    fn ties_keep_source_order() {
        let a = archive(
            &[turn("a", S1, "Zed"), turn("b", S1, "Ann")],
            &[],
            &["Zed", "Ann"],
            &[],
            &[],
        );
        let names: Vec<String> = regidor_stats(&a).into_iter().map(|s| s.regidor.name).collect();
        assert_eq!(names, vec!["Zed", "Ann"]);
    }
}
