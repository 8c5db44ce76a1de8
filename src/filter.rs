//! Record filters and the option lists that drive them
//!
//! [`StatusFilter`] narrows status records by board, system and status, all
//! conditions combined. [`BoardSearch`] is the free-text board search.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{BoardRecord, SystemRecord};

/// Exact-match filter over status records; unset fields pass everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    /// Board directory
    pub board: Option<String>,
    /// System id (`sys`)
    pub system: Option<String>,
    /// Status text, compared case-insensitively
    pub status: Option<String>,
}

impl StatusFilter {
    pub fn matches(&self, record: &SystemRecord) -> bool {
        if let Some(board) = non_empty(self.board.as_deref()) {
            if record.board_dir != board {
                return false;
            }
        }
        if let Some(system) = non_empty(self.system.as_deref()) {
            if record.system != system {
                return false;
            }
        }
        if let Some(status) = non_empty(self.status.as_deref()) {
            if !record.status.as_str().eq_ignore_ascii_case(status) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, systems: &[SystemRecord]) -> Vec<SystemRecord> {
        systems
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive substring search over product, CPU and CPU core
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSearch {
    query: String,
}

impl BoardSearch {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }

    pub fn matches(&self, board: &BoardRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        [&board.product, &board.cpu, &board.cpu_core]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.query))
    }

    pub fn apply(&self, boards: &[BoardRecord]) -> Vec<BoardRecord> {
        boards
            .iter()
            .filter(|board| self.matches(board))
            .cloned()
            .collect()
    }
}

/// One selectable filter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// Every value each filter can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub boards: Vec<FilterOption>,
    pub systems: Vec<FilterOption>,
    pub statuses: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn collect(boards: &[BoardRecord], systems: &[SystemRecord]) -> Self {
        Self {
            boards: board_options(boards),
            systems: system_options(systems),
            statuses: status_options(systems),
        }
    }
}

/// Boards labelled by product, valued by directory, in board order
pub fn board_options(boards: &[BoardRecord]) -> Vec<FilterOption> {
    boards
        .iter()
        .map(|board| FilterOption {
            label: board.product.clone(),
            value: board.dir.clone(),
        })
        .collect()
}

/// Distinct system ids in first-seen order
pub fn system_options(systems: &[SystemRecord]) -> Vec<FilterOption> {
    let mut seen = BTreeSet::new();
    systems
        .iter()
        .filter(|record| seen.insert(record.system.as_str()))
        .map(|record| FilterOption {
            label: record.system.clone(),
            value: record.system.clone(),
        })
        .collect()
}

/// Distinct status texts, sorted
pub fn status_options(systems: &[SystemRecord]) -> Vec<FilterOption> {
    systems
        .iter()
        .map(|record| record.status.as_str())
        .filter(|status| !status.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|status| FilterOption {
            label: status.to_string(),
            value: status.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusCode;

    fn board(dir: &str, product: &str, cpu: &str, cpu_core: &str) -> BoardRecord {
        BoardRecord {
            product: product.to_string(),
            cpu: cpu.to_string(),
            cpu_core: cpu_core.to_string(),
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

    fn systems() -> Vec<SystemRecord> {
        vec![
            system("vf2", "Debian", StatusCode::Good),
            system("vf2", "Fedora", StatusCode::Wip),
            system("duo", "Debian", StatusCode::Basic),
            system("duo", "Buildroot", StatusCode::Good),
        ]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let filter = StatusFilter::default();
        assert_eq!(filter.apply(&systems()).len(), 4);
    }

    #[test]
    fn empty_string_filter_passes_everything() {
        let filter = StatusFilter {
            board: Some(String::new()),
            ..StatusFilter::default()
        };
        assert_eq!(filter.apply(&systems()).len(), 4);
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = StatusFilter {
            system: Some("Debian".to_string()),
            status: Some("good".to_string()),
            ..StatusFilter::default()
        };
        let matched = filter.apply(&systems());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].board_dir, "vf2");
    }

    #[test]
    fn board_filter_is_exact() {
        let filter = StatusFilter {
            board: Some("du".to_string()),
            ..StatusFilter::default()
        };
        assert!(filter.apply(&systems()).is_empty());
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let boards = vec![
            board("vf2", "VisionFive 2", "JH7110", "SiFive U74"),
            board("duo", "Milk-V Duo", "CV1800B", "T-Head C906"),
            board("lpi4a", "Lichee Pi 4A", "TH1520", "T-Head C910"),
        ];
        let dirs = |q: &str| -> Vec<String> {
            BoardSearch::new(q)
                .apply(&boards)
                .into_iter()
                .map(|b| b.dir)
                .collect()
        };
        assert_eq!(dirs("milk"), vec!["duo"]);
        assert_eq!(dirs("jh7110"), vec!["vf2"]);
        assert_eq!(dirs("t-head"), vec!["duo", "lpi4a"]);
        assert_eq!(dirs("  "), vec!["vf2", "duo", "lpi4a"]);
        assert!(dirs("x86").is_empty());
    }

    #[test]
    fn system_options_are_distinct_in_first_seen_order() {
        let values: Vec<String> = system_options(&systems()).into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["Debian", "Fedora", "Buildroot"]);
    }

    #[test]
    fn status_options_are_distinct_and_sorted() {
        let values: Vec<String> = status_options(&systems()).into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["BASIC", "GOOD", "WIP"]);
    }

    #[test]
    fn board_options_label_by_product() {
        let boards = vec![board("vf2", "VisionFive 2", "JH7110", "SiFive U74")];
        let options = board_options(&boards);
        assert_eq!(options[0].label, "VisionFive 2");
        assert_eq!(options[0].value, "vf2");
    }
}
