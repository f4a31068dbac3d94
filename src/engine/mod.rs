use std::collections::HashMap;

pub(crate) mod clean_sheets;
pub(crate) mod form;
pub(crate) mod leaderboard;
pub(crate) mod rounds;
pub(crate) mod rows;
pub(crate) mod standings;
pub(crate) mod timeline;

/// Display name used when the data layer could not join a player.
pub(crate) const UNKNOWN_NAME: &str = "Unknown";

pub(crate) struct TallyEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) count: u32,
}

/// Per-player counter that remembers first-appearance order.
///
/// The first non-empty name seen for an id is kept.
#[derive(Default)]
pub(crate) struct Tally {
    entries: Vec<(String, Option<String>, u32)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn add(&mut self, id: &str, name: Option<&str>) {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        match self.index.get(id) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.2 += 1;
                if entry.1.is_none() {
                    entry.1 = name.map(str::to_string);
                }
            }
            None => {
                self.index.insert(id.to_string(), self.entries.len());
                self.entries
                    .push((id.to_string(), name.map(str::to_string), 1));
            }
        }
    }

    /// Highest count first. `sort_by` is stable, so equal counts stay in
    /// first-appearance order.
    pub(crate) fn ranked(self, limit: Option<usize>) -> Vec<TallyEntry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.2.cmp(&a.2));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
            .into_iter()
            .map(|(id, name, count)| TallyEntry {
                id,
                name: name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                count,
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_keeps_first_appearance_order_on_ties() {
        let mut tally = Tally::default();
        tally.add("p2", Some("Two"));
        tally.add("p1", Some("One"));
        tally.add("p3", Some("Three"));
        tally.add("p3", Some("Three"));

        let ranked = tally.ranked(None);
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p2", "p1"]);
    }

    #[test]
    fn test_tally_fills_missing_name_once() {
        let mut tally = Tally::default();
        tally.add("p1", None);
        tally.add("p1", Some("First"));
        tally.add("p1", Some("Second"));
        tally.add("p2", Some("  "));

        let ranked = tally.ranked(Some(5));
        assert_eq!(ranked[0].name, "First");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].name, UNKNOWN_NAME);
    }

    #[test]
    fn test_tally_limit() {
        let mut tally = Tally::default();
        for id in ["a", "b", "c"] {
            tally.add(id, None);
        }
        assert_eq!(tally.ranked(Some(2)).len(), 2);
    }
}
