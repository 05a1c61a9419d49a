//! Owned view state for one table instance.
//!
//! Derived views are pure functions of (records, search term, sort state,
//! page, page size): every call recomputes filter → sort → paginate from the
//! immutable source records, in that order.

use std::cmp::Ordering;

use super::{CellValue, Column, PageControl, Record, SortDirection, SortState};

/// A paginated, searchable, sortable view over a fixed set of records.
///
/// Records and columns are supplied at construction and never change for the
/// lifetime of the instance. The page resets to 1 on any search or sort
/// change; nothing else resets it besides explicit navigation.
#[derive(Debug)]
pub struct DataTable {
    records: Vec<Record>,
    columns: Vec<Column>,
    page_size: usize,
    search: String,
    sort: SortState,
    page: usize,
    cursor_col: usize,
    cursor_row: usize,
}

impl DataTable {
    pub fn new(records: Vec<Record>, columns: Vec<Column>, page_size: usize) -> Self {
        Self {
            records,
            columns,
            page_size: page_size.max(1),
            search: String::new(),
            sort: SortState::default(),
            page: 1,
            cursor_col: 0,
            cursor_row: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Header cursor used by keyboard sorting.
    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// Row cursor within the current page window.
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    // --- search ---

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search {
            return;
        }
        self.search = term;
        self.page = 1;
        self.cursor_row = 0;
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = self.search.clone();
        term.push(ch);
        self.set_search(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.search.clone();
        term.pop();
        self.set_search(term);
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    // --- sort ---

    /// Request a sort on `accessor`. A repeated key flips direction, a new
    /// key starts ascending; the page resets to 1 either way. Unknown or
    /// non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, accessor: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|col| col.accessor == accessor && col.sortable);
        if !sortable {
            return;
        }
        if self.sort.key.as_deref() == Some(accessor) {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort.key = Some(accessor.to_string());
            self.sort.direction = SortDirection::Ascending;
        }
        self.page = 1;
        self.cursor_row = 0;
    }

    /// Sort on the column under the header cursor.
    pub fn sort_cursor_column(&mut self) {
        if let Some(accessor) = self.columns.get(self.cursor_col).map(|c| c.accessor.clone()) {
            self.toggle_sort(&accessor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_col + 1 < self.columns.len() {
            self.cursor_col += 1;
        }
    }

    pub fn move_row_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    pub fn move_row_down(&mut self) {
        let len = self.page_records().len();
        if self.cursor_row + 1 < len {
            self.cursor_row += 1;
        }
    }

    /// Record under the row cursor, if the current page has one.
    pub fn cursor_record(&self) -> Option<&Record> {
        self.page_records().get(self.cursor_row).copied()
    }

    // --- pagination ---

    pub fn total_rows(&self) -> usize {
        self.filtered_indices().len()
    }

    pub fn total_pages(&self) -> usize {
        self.total_rows().div_ceil(self.page_size)
    }

    pub fn can_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn can_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
        self.cursor_row = 0;
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.go_to_page(self.page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.can_prev_page() {
            self.go_to_page(self.page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages().max(1));
    }

    /// 1-based (first, last) row numbers shown on the current page, None when
    /// the filtered set is empty.
    pub fn page_range(&self) -> Option<(usize, usize)> {
        let total = self.total_rows();
        if total == 0 {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(total);
        Some((start, end))
    }

    /// Page-navigation strip: always page 1 and the last page, every page
    /// within distance 1 of the current page, gaps collapsed to an ellipsis.
    pub fn page_controls(&self) -> Vec<PageControl> {
        let total = self.total_pages();
        let mut controls = Vec::new();
        let mut last_shown = None;
        for page in 1..=total {
            let visible = page == 1 || page == total || page.abs_diff(self.page) <= 1;
            if !visible {
                continue;
            }
            if let Some(prev) = last_shown {
                if page - prev > 1 {
                    controls.push(PageControl::Ellipsis);
                }
            }
            controls.push(PageControl::Page(page));
            last_shown = Some(page);
        }
        controls
    }

    // --- derived views ---

    /// Indices of records that survive the search filter, in source order.
    /// A record matches when any declared column's value text contains the
    /// term case-insensitively, regardless of sortable/visibility flags.
    pub fn filtered_indices(&self) -> Vec<usize> {
        if self.search.is_empty() {
            return (0..self.records.len()).collect();
        }
        let term = self.search.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                self.columns.iter().any(|col| {
                    record
                        .get(&col.accessor)
                        .display()
                        .to_lowercase()
                        .contains(&term)
                })
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Filtered indices reordered by the active sort. Source order when no
    /// sort key is active; the filter output is never mutated in place.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if let Some(key) = self.sort.key.as_deref() {
            let direction = self.sort.direction;
            indices.sort_by(|&a, &b| {
                compare_cells(
                    self.records[a].get(key),
                    self.records[b].get(key),
                    direction,
                )
            });
        }
        indices
    }

    /// The page window: the slice of the sorted sequence for the current page.
    pub fn page_records(&self) -> Vec<&Record> {
        let sorted = self.sorted_indices();
        let start = (self.page - 1) * self.page_size;
        sorted
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .map(|idx| &self.records[idx])
            .collect()
    }
}

/// Comparator for one sort key: missing values order last regardless of
/// direction; two numbers compare numerically; everything else compares as
/// case-insensitive text. Only the value comparison is negated when
/// descending.
fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let ordering = match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.display().to_lowercase().cmp(&b.display().to_lowercase()),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize, page_size: usize) -> DataTable {
        let records = (1..=rows as u64)
            .map(|n| {
                Record::new()
                    .with("id", n)
                    .with("name", format!("row-{n:02}"))
            })
            .collect();
        let columns = vec![Column::new("ID", "id"), Column::new("Name", "name")];
        DataTable::new(records, columns, page_size)
    }

    #[test]
    fn page_controls_collapse_gaps() {
        let mut t = table(90, 10);
        t.go_to_page(5);
        assert_eq!(
            t.page_controls(),
            vec![
                PageControl::Page(1),
                PageControl::Ellipsis,
                PageControl::Page(4),
                PageControl::Page(5),
                PageControl::Page(6),
                PageControl::Ellipsis,
                PageControl::Page(9),
            ]
        );
    }

    #[test]
    fn page_controls_without_gaps_have_no_ellipsis() {
        let t = table(30, 10);
        assert_eq!(
            t.page_controls(),
            vec![
                PageControl::Page(1),
                PageControl::Page(2),
                PageControl::Page(3),
            ]
        );
    }

    #[test]
    fn go_to_page_clamps_to_bounds() {
        let mut t = table(25, 10);
        t.go_to_page(99);
        assert_eq!(t.page(), 3);
        t.go_to_page(0);
        assert_eq!(t.page(), 1);
    }

    #[test]
    fn header_cursor_stays_in_range() {
        let mut t = table(5, 10);
        t.move_cursor_left();
        assert_eq!(t.cursor_col(), 0);
        t.move_cursor_right();
        t.move_cursor_right();
        t.move_cursor_right();
        assert_eq!(t.cursor_col(), 1);
    }

    #[test]
    fn row_cursor_clamped_to_page_window() {
        let mut t = table(25, 10);
        t.last_page();
        for _ in 0..10 {
            t.move_row_down();
        }
        assert_eq!(t.cursor_row(), 4);
        assert!(t.cursor_record().is_some());
    }

    #[test]
    fn setting_same_search_keeps_page() {
        let mut t = table(25, 10);
        t.set_search("row");
        t.go_to_page(2);
        t.set_search("row");
        assert_eq!(t.page(), 2);
    }
}
