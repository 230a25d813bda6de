use std::collections::BTreeSet;

use crate::shortcuts::ShortcutId;

/// Set of selected desktop shortcuts. Iteration order is stable (sorted by id).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: BTreeSet<ShortcutId>,
}

impl SelectionSet {
    pub fn single(id: ShortcutId) -> Self {
        Self {
            ids: BTreeSet::from([id]),
        }
    }

    pub fn contains(&self, id: &ShortcutId) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShortcutId> {
        self.ids.iter()
    }

    pub fn to_vec(&self) -> Vec<ShortcutId> {
        self.ids.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = ShortcutId>) {
        self.ids = ids.into_iter().collect();
    }

    /// Adds `id`; returns `false` if it was already selected.
    pub fn insert(&mut self, id: ShortcutId) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: &ShortcutId) -> bool {
        self.ids.remove(id)
    }

    pub fn retain(&mut self, keep: impl FnMut(&ShortcutId) -> bool) {
        self.ids.retain(keep);
    }
}

impl FromIterator<ShortcutId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ShortcutId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(raw: &[&str]) -> Vec<ShortcutId> {
        raw.iter().map(|id| ShortcutId::new(*id)).collect()
    }

    #[test]
    fn insert_keeps_existing_members_in_id_order() {
        let mut selection: SelectionSet = ids(&["files", "about"]).into_iter().collect();
        assert!(selection.insert(ShortcutId::new("paint")));
        assert!(!selection.insert(ShortcutId::new("files")));
        assert_eq!(selection.to_vec(), ids(&["about", "files", "paint"]));
    }

    #[test]
    fn replace_discards_previous_members() {
        let mut selection = SelectionSet::single(ShortcutId::new("files"));
        selection.replace_with(ids(&["paint"]));
        assert!(!selection.contains(&ShortcutId::new("files")));
        assert_eq!(selection.len(), 1);
    }
}
