//! Capped "top items" view of a group.
//!
//! Summary views only show the first few entries of a group, which keeps grid
//! columns filled whether 1, 2, 3, 4 or 6 rows are displayed. `TopItems`
//! mirrors the head of a backing sequence and is updated incrementally after
//! each structural change, so the work per change is bounded by the cap
//! instead of by the backing sequence length.
//!
//! Every `on_*` method expects `backing` to be the sequence *after* the
//! change has been applied.

/// Maximum number of entries kept in the projection.
pub const TOP_ITEMS_LIMIT: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopItems<T> {
    entries: Vec<T>,
}

impl<T> Default for TopItems<T> {
    fn default() -> Self {
        TopItems {
            entries: Vec::with_capacity(TOP_ITEMS_LIMIT),
        }
    }
}

impl<T: Clone> TopItems<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a projection of `backing` from scratch.
    pub fn from_backing(backing: &[T]) -> Self {
        let mut top = Self::new();
        top.on_reset(backing);
        top
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// `backing[position]` was inserted.
    pub fn on_insert(&mut self, position: usize, backing: &[T]) {
        if position >= TOP_ITEMS_LIMIT {
            return;
        }
        self.entries.insert(position, backing[position].clone());
        self.entries.truncate(TOP_ITEMS_LIMIT);
    }

    /// The entry at `old_position` was moved to `new_position`.
    pub fn on_move(&mut self, old_position: usize, new_position: usize, backing: &[T]) {
        match (
            old_position < TOP_ITEMS_LIMIT,
            new_position < TOP_ITEMS_LIMIT,
        ) {
            (true, true) => {
                let moved = self.entries.remove(old_position);
                self.entries.insert(new_position, moved);
            }
            (true, false) => {
                // Moved out of the head: the entry now at the last visible
                // slot takes its place at the end.
                self.entries.remove(old_position);
                self.entries.push(backing[TOP_ITEMS_LIMIT - 1].clone());
            }
            (false, true) => {
                self.entries
                    .insert(new_position, backing[new_position].clone());
                self.entries.truncate(TOP_ITEMS_LIMIT);
            }
            (false, false) => {}
        }
    }

    /// The entry at `position` was removed.
    pub fn on_remove(&mut self, position: usize, backing: &[T]) {
        if position >= TOP_ITEMS_LIMIT {
            return;
        }
        self.entries.remove(position);
        if backing.len() >= TOP_ITEMS_LIMIT {
            self.entries.push(backing[TOP_ITEMS_LIMIT - 1].clone());
        }
    }

    /// The entry at `position` was replaced.
    pub fn on_replace(&mut self, position: usize, backing: &[T]) {
        if position < TOP_ITEMS_LIMIT {
            self.entries[position] = backing[position].clone();
        }
    }

    /// The backing sequence was replaced wholesale.
    pub fn on_reset(&mut self, backing: &[T]) {
        self.entries.clear();
        self.entries
            .extend(backing.iter().take(TOP_ITEMS_LIMIT).cloned());
    }
}

impl<'a, T> IntoIterator for &'a TopItems<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
