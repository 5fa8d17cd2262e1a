use std::collections::HashMap;

use plens_core::Intervention;

/// Group key for interventions outside any agenda item.
pub const NO_AGENDA_ITEM: &str = "Sense punt";

/// Interventions partitioned by agenda item title.
///
/// Keys keep first-seen order; each group keeps input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgendaGroups<'a> {
    groups: Vec<(String, Vec<&'a Intervention>)>,
    positions: HashMap<String, usize>,
}

impl<'a> AgendaGroups<'a> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[&'a Intervention]> {
        self.positions
            .get(key)
            .map(|&pos| self.groups[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Intervention])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// All interventions in group order, then member order.
    pub fn flatten(&self) -> impl Iterator<Item = &'a Intervention> + '_ {
        self.groups.iter().flat_map(|(_, v)| v.iter().copied())
    }
}

/// Partition `items` by `agenda_item_title`, falling back to [`NO_AGENDA_ITEM`].
pub fn group_by_agenda_item<'a>(items: &[&'a Intervention]) -> AgendaGroups<'a> {
    let mut out = AgendaGroups::default();
    for &item in items {
        let key = item.agenda_title().unwrap_or(NO_AGENDA_ITEM);
        match out.positions.get(key) {
            Some(&pos) => out.groups[pos].1.push(item),
            None => {
                out.positions.insert(key.to_string(), out.groups.len());
                out.groups.push((key.to_string(), vec![item]));
            }
        }
    }
    out
}
