use plens_core::Tag;
use plens_query::interventions_by_tag;
use plens_store::Archive;
use serde::Serialize;

use crate::polarization::rounded_average_1dp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagStats {
    #[serde(flatten)]
    pub tag: Tag,
    pub intervention_count: usize,
    /// One decimal place; 0 when no intervention carries a level.
    pub avg_polarization: f64,
}

/// Topic tags ranked by number of interventions. Ties keep source order.
pub fn tag_stats(archive: &Archive) -> Vec<TagStats> {
    let mut stats: Vec<TagStats> = archive
        .tags()
        .iter()
        .map(|t| {
            let items = interventions_by_tag(archive, t.code);
            TagStats {
                tag: t.clone(),
                intervention_count: items.len(),
                avg_polarization: rounded_average_1dp(&items),
            }
        })
        .collect();
    stats.sort_by(|a, b| b.intervention_count.cmp(&a.intervention_count));
    stats
}
