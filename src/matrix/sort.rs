//! Sort state shared by the matrix and the status table.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey<C> {
    pub column: C,
    pub direction: Direction,
}

/// Ordered sort keys; the first key is the primary one.
///
/// Toggling a column cycles ascending, descending, unsorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState<C> {
    keys: Vec<SortKey<C>>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<C: Clone + PartialEq> SortState<C> {
    pub fn single(column: C, direction: Direction) -> Self {
        Self {
            keys: vec![SortKey { column, direction }],
        }
    }

    pub fn keys(&self) -> &[SortKey<C>] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn direction_of(&self, column: &C) -> Option<Direction> {
        self.keys
            .iter()
            .find(|key| key.column == *column)
            .map(|key| key.direction)
    }

    /// Toggle `column` as the only sort key.
    pub fn toggle(&mut self, column: C) {
        let next = self.next_direction(&column);
        self.keys.clear();
        if let Some(direction) = next {
            self.keys.push(SortKey { column, direction });
        }
    }

    /// Toggle `column` while keeping the other keys.
    pub fn toggle_multi(&mut self, column: C) {
        match self.next_direction(&column) {
            Some(direction) => {
                if let Some(key) = self.keys.iter_mut().find(|key| key.column == column) {
                    key.direction = direction;
                } else {
                    self.keys.push(SortKey { column, direction });
                }
            }
            None => self.keys.retain(|key| key.column != column),
        }
    }

    fn next_direction(&self, column: &C) -> Option<Direction> {
        match self.direction_of(column) {
            None => Some(Direction::Ascending),
            Some(Direction::Ascending) => Some(Direction::Descending),
            Some(Direction::Descending) => None,
        }
    }

    /// Same keys and directions with every column converted by `f`.
    pub fn map<D>(&self, f: impl Fn(&C) -> D) -> SortState<D> {
        SortState {
            keys: self
                .keys
                .iter()
                .map(|key| SortKey {
                    column: f(&key.column),
                    direction: key.direction,
                })
                .collect(),
        }
    }

    /// Compare two items key by key with `compare_column`.
    pub fn compare<T>(
        &self,
        a: &T,
        b: &T,
        compare_column: impl Fn(&C, &T, &T) -> Ordering,
    ) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.direction.apply(compare_column(&key.column, a, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_asc_desc_unsorted() {
        let mut state = SortState::default();
        state.toggle("status");
        assert_eq!(state.direction_of(&"status"), Some(Direction::Ascending));
        state.toggle("status");
        assert_eq!(state.direction_of(&"status"), Some(Direction::Descending));
        state.toggle("status");
        assert!(state.is_empty());
    }

    #[test]
    fn toggle_other_column_replaces_key() {
        let mut state = SortState::single("board", Direction::Descending);
        state.toggle("status");
        assert_eq!(state.keys().len(), 1);
        assert_eq!(state.keys()[0].column, "status");
        assert_eq!(state.keys()[0].direction, Direction::Ascending);
    }

    #[test]
    fn toggle_multi_keeps_other_keys() {
        let mut state = SortState::default();
        state.toggle_multi("board");
        state.toggle_multi("status");
        state.toggle_multi("status");
        assert_eq!(state.keys().len(), 2);
        assert_eq!(state.direction_of(&"board"), Some(Direction::Ascending));
        assert_eq!(state.direction_of(&"status"), Some(Direction::Descending));
        state.toggle_multi("status");
        assert_eq!(state.keys().len(), 1);
        assert_eq!(state.direction_of(&"status"), None);
    }

    #[test]
    fn map_keeps_directions_and_order() {
        let mut state = SortState::default();
        state.toggle_multi("board");
        state.toggle_multi("status");
        state.toggle_multi("status");
        let mapped = state.map(|column| column.len());
        assert_eq!(mapped.keys()[0].column, 5);
        assert_eq!(mapped.keys()[0].direction, Direction::Ascending);
        assert_eq!(mapped.keys()[1].column, 6);
        assert_eq!(mapped.keys()[1].direction, Direction::Descending);
    }

    #[test]
    fn compare_falls_through_keys() {
        let mut state = SortState::default();
        state.toggle_multi(0usize);
        state.toggle_multi(1usize);
        state.toggle_multi(1usize);
        let by_field = |column: &usize, a: &(i32, i32), b: &(i32, i32)| match column {
            0 => a.0.cmp(&b.0),
            _ => a.1.cmp(&b.1),
        };
        assert_eq!(state.compare(&(1, 1), &(2, 0), by_field), Ordering::Less);
        assert_eq!(state.compare(&(1, 1), &(1, 2), by_field), Ordering::Greater);
        assert_eq!(state.compare(&(1, 1), &(1, 1), by_field), Ordering::Equal);
    }
}
