//! Dashboard module - summary cards plus the users data table

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::data::{self, SummaryMetric};
use crate::domain::table::DataTable;

pub struct Dashboard {
    pub table: DataTable,
    metrics: Vec<SummaryMetric>,
}

impl Dashboard {
    pub fn new(page_size: usize) -> Self {
        let records = data::sample_users();
        let metrics = data::summary_metrics(&records);
        let table = DataTable::new(records, data::user_columns(), page_size);
        Self { table, metrics }
    }

    pub fn metrics(&self) -> &[SummaryMetric] {
        &self.metrics
    }

    fn copy_cursor_cell(&self) -> Action {
        let Some(record) = self.table.cursor_record() else {
            return Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn);
        };
        let Some(column) = self.table.columns().first() else {
            return Action::None;
        };
        Action::Copy(record.get(&column.accessor).display())
    }
}

impl Module for Dashboard {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.table.move_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => self.table.move_cursor_right(),
            KeyCode::Char('s') | KeyCode::Enter => self.table.sort_cursor_column(),
            KeyCode::Char('n') | KeyCode::PageDown => self.table.next_page(),
            KeyCode::Char('p') | KeyCode::PageUp => self.table.prev_page(),
            KeyCode::Char('g') => self.table.first_page(),
            KeyCode::Char('G') => self.table.last_page(),
            KeyCode::Up | KeyCode::Char('k') => self.table.move_row_up(),
            KeyCode::Down | KeyCode::Char('j') => self.table.move_row_down(),
            KeyCode::Char('y') => return self.copy_cursor_cell(),
            _ => {}
        }
        Action::None
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("rows", &self.table.records().len())
            .finish()
    }
}
