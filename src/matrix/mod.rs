//! Board × system matrix
//!
//! A [`Matrix`] is derived from loaded records and never mutated: filtering
//! and sorting return new matrices, and [`view`] rebuilds one from scratch
//! for the current filter state.

pub mod collate;
pub mod sort;
pub mod table;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

pub use collate::locale_compare;
pub use sort::{Direction, SortState};

use crate::domain::{BoardRecord, StatusCode, SystemRecord};
use crate::filter::{BoardSearch, StatusFilter};

/// Dense grid of statuses: one row per board, one column per system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    pub rows: Vec<BoardRecord>,
    /// Distinct `system` ids in first-seen order
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<Option<StatusCode>>>,
}

/// Sort column of the matrix view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixColumn {
    Product,
    System(String),
}

/// Sort column resolved against one matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKey {
    Product,
    Cell(usize),
    /// System not among the columns
    Missing,
}

/// Pivot records into a grid.
///
/// When a board lists the same system more than once, the first record in
/// `systems` order provides the cell.
pub fn build_matrix(boards: &[BoardRecord], systems: &[SystemRecord]) -> Matrix {
    let mut columns: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut lookup: HashMap<(&str, &str), &StatusCode> = HashMap::new();
    for record in systems {
        if seen.insert(record.system.as_str()) {
            columns.push(record.system.clone());
        }
        lookup
            .entry((record.board_dir.as_str(), record.system.as_str()))
            .or_insert(&record.status);
    }

    let cells = boards
        .iter()
        .map(|board| {
            columns
                .iter()
                .map(|system| {
                    lookup
                        .get(&(board.dir.as_str(), system.as_str()))
                        .map(|status| (*status).clone())
                })
                .collect()
        })
        .collect();

    Matrix {
        rows: boards.to_vec(),
        columns,
        cells,
    }
}

impl Matrix {
    pub fn cell(&self, row: usize, column: usize) -> Option<&StatusCode> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    pub fn column_index(&self, system: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == system)
    }

    /// Resolve a sort column name: a system id, else `product` (or `board`).
    ///
    /// System ids match exactly and win, so a system named `Board` stays
    /// sortable.
    pub fn sort_column(&self, name: &str) -> Option<MatrixColumn> {
        if self.column_index(name).is_some() {
            return Some(MatrixColumn::System(name.to_string()));
        }
        (name.eq_ignore_ascii_case("product") || name.eq_ignore_ascii_case("board"))
            .then_some(MatrixColumn::Product)
    }

    /// Copy without rows whose every cell is empty.
    pub fn filtered(&self) -> Matrix {
        let keep: Vec<usize> = (0..self.rows.len())
            .filter(|&row| self.cells[row].iter().any(Option::is_some))
            .collect();
        self.select_rows(&keep)
    }

    /// Copy with rows reordered by `state`, or by product when it is empty.
    ///
    /// Empty cells compare as the empty string. The sort is stable.
    pub fn sorted(&self, state: &SortState<MatrixColumn>) -> Matrix {
        let default_state = SortState::single(MatrixColumn::Product, Direction::Ascending);
        let state = if state.is_empty() {
            &default_state
        } else {
            state
        };

        let resolved = state.map(|column| match column {
            MatrixColumn::Product => RowKey::Product,
            MatrixColumn::System(system) => self
                .column_index(system)
                .map_or(RowKey::Missing, RowKey::Cell),
        });

        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|a, b| resolved.compare(a, b, |key, &x, &y| self.compare_rows(*key, x, y)));
        self.select_rows(&order)
    }

    fn compare_rows(&self, key: RowKey, a: usize, b: usize) -> Ordering {
        match key {
            RowKey::Product => locale_compare(&self.rows[a].product, &self.rows[b].product),
            RowKey::Cell(col) => locale_compare(self.cell_text(a, col), self.cell_text(b, col)),
            RowKey::Missing => Ordering::Equal,
        }
    }

    fn cell_text(&self, row: usize, column: usize) -> &str {
        self.cell(row, column).map_or("", StatusCode::as_str)
    }

    fn select_rows(&self, rows: &[usize]) -> Matrix {
        Matrix {
            rows: rows.iter().map(|&r| self.rows[r].clone()).collect(),
            columns: self.columns.clone(),
            cells: rows.iter().map(|&r| self.cells[r].clone()).collect(),
        }
    }
}

/// Everything that shapes a matrix view
#[derive(Debug, Clone, Default)]
pub struct MatrixQuery {
    pub filter: StatusFilter,
    pub search: BoardSearch,
    /// Keep boards that have no status in any shown column
    pub include_empty: bool,
    pub sort: SortState<MatrixColumn>,
}

/// Recompute the matrix for the current query from loaded records.
pub fn view(boards: &[BoardRecord], systems: &[SystemRecord], query: &MatrixQuery) -> Matrix {
    let boards = query.search.apply(boards);
    let systems = query.filter.apply(systems);
    let matrix = build_matrix(&boards, &systems);
    let matrix = if query.include_empty {
        matrix
    } else {
        matrix.filtered()
    };
    matrix.sorted(&query.sort)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(dir: &str, product: &str) -> BoardRecord {
        BoardRecord {
            product: product.to_string(),
            cpu: "Not specified".to_string(),
            cpu_core: "Not specified".to_string(),
            dir: dir.to_string(),
        }
    }

    fn system(board_dir: &str, system: &str, status: StatusCode) -> SystemRecord {
        SystemRecord {
            system: system.to_string(),
            system_version: None,
            system_variant: None,
            status,
            last_update: None,
            system_dir: system.to_lowercase(),
            board_dir: board_dir.to_string(),
            file_name: "README".to_string(),
        }
    }

    fn sample() -> (Vec<BoardRecord>, Vec<SystemRecord>) {
        let boards = vec![board("vf2", "VisionFive 2"), board("duo", "Milk-V Duo")];
        let systems = vec![
            system("vf2", "Debian", StatusCode::Good),
            system("vf2", "Fedora", StatusCode::Basic),
            system("duo", "Buildroot", StatusCode::Good),
            system("vf2", "Buildroot", StatusCode::Cfh),
        ];
        (boards, systems)
    }

    #[test]
    fn columns_follow_first_seen_order() {
        let (boards, systems) = sample();
        let matrix = build_matrix(&boards, &systems);
        assert_eq!(matrix.columns, vec!["Debian", "Fedora", "Buildroot"]);
    }

    #[test]
    fn repeated_systems_across_boards_give_one_column_each() {
        let boards: Vec<BoardRecord> = (0..50)
            .map(|i| board(&format!("b{i:02}"), &format!("Board {i:02}")))
            .collect();
        let systems: Vec<SystemRecord> = boards
            .iter()
            .flat_map(|b| {
                ["openEuler", "Debian", "openEuler", "Arch"]
                    .into_iter()
                    .map(|s| system(&b.dir, s, StatusCode::Wip))
            })
            .collect();
        let matrix = build_matrix(&boards, &systems);
        assert_eq!(matrix.columns, vec!["openEuler", "Debian", "Arch"]);
        assert!(matrix.cells.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn grid_is_dense_with_nulls_where_missing() {
        let (boards, systems) = sample();
        let matrix = build_matrix(&boards, &systems);
        assert_eq!(matrix.rows.len(), 2);
        assert!(matrix.cells.iter().all(|row| row.len() == 3));
        let nulls: Vec<(usize, usize)> = (0..2)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| matrix.cell(r, c).is_none())
            .collect();
        assert_eq!(nulls, vec![(1, 0), (1, 1)]);
        assert_eq!(matrix.cell(0, 2), Some(&StatusCode::Cfh));
        assert_eq!(matrix.cell(1, 2), Some(&StatusCode::Good));
    }

    #[test]
    fn duplicate_system_on_board_keeps_first() {
        let boards = vec![board("vf2", "VisionFive 2")];
        let systems = vec![
            system("vf2", "Debian", StatusCode::Wip),
            system("vf2", "Debian", StatusCode::Good),
        ];
        let matrix = build_matrix(&boards, &systems);
        assert_eq!(matrix.columns.len(), 1);
        assert_eq!(matrix.cell(0, 0), Some(&StatusCode::Wip));
    }

    #[test]
    fn dangling_board_reference_is_tolerated() {
        let boards = vec![board("vf2", "VisionFive 2")];
        let systems = vec![system("ghost", "Debian", StatusCode::Good)];
        let matrix = build_matrix(&boards, &systems);
        assert_eq!(matrix.columns, vec!["Debian"]);
        assert_eq!(matrix.cell(0, 0), None);
    }

    #[test]
    fn filtered_drops_empty_rows_only() {
        let mut boards = sample().0;
        boards.push(board("lpi4a", "Lichee Pi 4A"));
        let matrix = build_matrix(&boards, &sample().1);
        assert_eq!(matrix.rows.len(), 3);
        let filtered = matrix.filtered();
        let dirs: Vec<&str> = filtered.rows.iter().map(|b| b.dir.as_str()).collect();
        assert_eq!(dirs, vec!["vf2", "duo"]);
        assert_eq!(filtered.columns, matrix.columns);
        assert_eq!(filtered.cells.len(), 2);
    }

    #[test]
    fn default_sort_is_by_product() {
        let (boards, systems) = sample();
        let matrix = build_matrix(&boards, &systems).sorted(&SortState::default());
        let products: Vec<&str> = matrix.rows.iter().map(|b| b.product.as_str()).collect();
        assert_eq!(products, vec!["Milk-V Duo", "VisionFive 2"]);
        // Cells move with their rows.
        assert_eq!(matrix.cell(0, 0), None);
        assert_eq!(matrix.cell(1, 0), Some(&StatusCode::Good));
    }

    #[test]
    fn column_sort_puts_empty_cells_first() {
        let (boards, systems) = sample();
        let matrix = build_matrix(&boards, &systems);
        let column = matrix.sort_column("Debian").expect("column exists");
        let asc = matrix.sorted(&SortState::single(column.clone(), Direction::Ascending));
        assert_eq!(asc.rows[0].dir, "duo");
        let desc = matrix.sorted(&SortState::single(column, Direction::Descending));
        assert_eq!(desc.rows[0].dir, "vf2");
    }

    #[test]
    fn sort_column_names() {
        let (boards, systems) = sample();
        let matrix = build_matrix(&boards, &systems);
        assert_eq!(matrix.sort_column("product"), Some(MatrixColumn::Product));
        assert_eq!(matrix.sort_column("Board"), Some(MatrixColumn::Product));
        assert_eq!(
            matrix.sort_column("Fedora"),
            Some(MatrixColumn::System("Fedora".to_string()))
        );
        assert_eq!(matrix.sort_column("Gentoo"), None);
    }

    #[test]
    fn system_named_like_product_column_is_sortable() {
        let boards = vec![board("vf2", "VisionFive 2"), board("duo", "Milk-V Duo")];
        let systems = vec![
            system("vf2", "Board", StatusCode::Good),
            system("duo", "Board", StatusCode::Basic),
        ];
        let matrix = build_matrix(&boards, &systems);
        let column = matrix.sort_column("Board").expect("column exists");
        assert_eq!(column, MatrixColumn::System("Board".to_string()));
        assert_eq!(matrix.sort_column("board"), Some(MatrixColumn::Product));

        let desc = matrix.sorted(&SortState::single(column, Direction::Descending));
        let dirs: Vec<&str> = desc.rows.iter().map(|b| b.dir.as_str()).collect();
        assert_eq!(dirs, vec!["vf2", "duo"]);
    }

    #[test]
    fn sorting_on_an_absent_system_keeps_order() {
        let (boards, systems) = sample();
        let matrix = build_matrix(&boards, &systems);
        let state = SortState::single(MatrixColumn::System("Gentoo".to_string()), Direction::Ascending);
        let sorted = matrix.sorted(&state);
        assert_eq!(sorted.rows, matrix.rows);
    }

    #[test]
    fn multi_key_sort_breaks_ties_with_second_key() {
        let boards = vec![
            board("b", "Beta"),
            board("a", "Alpha"),
            board("c", "Gamma"),
        ];
        let systems = vec![
            system("b", "Debian", StatusCode::Good),
            system("a", "Debian", StatusCode::Good),
            system("c", "Debian", StatusCode::Basic),
        ];
        let matrix = build_matrix(&boards, &systems);
        let mut state = SortState::default();
        state.toggle_multi(MatrixColumn::System("Debian".to_string()));
        state.toggle_multi(MatrixColumn::System("Debian".to_string()));
        state.toggle_multi(MatrixColumn::Product);
        let sorted = matrix.sorted(&state);
        let dirs: Vec<&str> = sorted.rows.iter().map(|b| b.dir.as_str()).collect();
        assert_eq!(dirs, vec!["a", "b", "c"]);
    }

    #[test]
    fn view_recomputes_for_filter_changes() {
        let (boards, systems) = sample();
        let mut query = MatrixQuery::default();
        let all = view(&boards, &systems, &query);
        assert_eq!(all.rows.len(), 2);

        query.filter.system = Some("Fedora".to_string());
        let fedora = view(&boards, &systems, &query);
        assert_eq!(fedora.columns, vec!["Fedora"]);
        let dirs: Vec<&str> = fedora.rows.iter().map(|b| b.dir.as_str()).collect();
        assert_eq!(dirs, vec!["vf2"]);

        query.include_empty = true;
        let with_empty = view(&boards, &systems, &query);
        assert_eq!(with_empty.rows.len(), 2);
    }

    #[test]
    fn view_applies_board_search() {
        let (boards, systems) = sample();
        let query = MatrixQuery {
            search: BoardSearch::new("duo"),
            ..MatrixQuery::default()
        };
        let matrix = view(&boards, &systems, &query);
        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0].dir, "duo");
    }

    #[test]
    fn empty_inputs_give_empty_matrix() {
        let matrix = build_matrix(&[], &[]);
        assert!(matrix.rows.is_empty());
        assert!(matrix.columns.is_empty());
        assert!(matrix.filtered().rows.is_empty());
    }
}
