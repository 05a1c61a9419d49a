//! Shell state: active section, sidebar, startup loading, status line.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::Context;
use crate::modules::dashboard::Dashboard;

/// Navigation sections shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Analytics,
    Users,
    Products,
    Orders,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Analytics,
        Section::Users,
        Section::Products,
        Section::Orders,
        Section::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Analytics => "Analytics",
            Section::Users => "Users",
            Section::Products => "Products",
            Section::Orders => "Orders",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "▦",
            Section::Analytics => "↗",
            Section::Users => "◉",
            Section::Products => "▣",
            Section::Orders => "◈",
            Section::Settings => "✦",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Section::Dashboard => '1',
            Section::Analytics => '2',
            Section::Users => '3',
            Section::Products => '4',
            Section::Orders => '5',
            Section::Settings => '6',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub active_section: Section,
    pub sidebar_open: bool,
    pub sidebar_cursor: usize,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub dashboard: Dashboard,
    pub loading: bool,
    pub help_open: bool,
    pub should_quit: bool,
    pub status: Option<StatusMessage>,
    /// Tick counter, drives the spinner animation
    pub frame: usize,
    narrow_override: bool,
    viewport_width: u16,
    narrow_width: u16,
    started_at: Instant,
    startup_delay: Duration,
}

impl App {
    pub fn new(config: &Config, narrow_override: bool, viewport_width: u16) -> Self {
        let mut app = Self {
            ctx: Context::new(),
            active_section: Section::Dashboard,
            sidebar_open: true,
            sidebar_cursor: 0,
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            dashboard: Dashboard::new(config.page_size),
            loading: true,
            help_open: false,
            should_quit: false,
            status: None,
            frame: 0,
            narrow_override,
            viewport_width,
            narrow_width: config.narrow_width,
            started_at: Instant::now(),
            startup_delay: Duration::from_millis(config.startup_delay_ms),
        };
        // Narrow viewports start with the sidebar closed.
        app.sidebar_open = !app.is_narrow();
        app.sync_context();
        app
    }

    /// The injected narrow-viewport signal: the CLI override, or the
    /// terminal width measured at mount and on every resize.
    pub fn is_narrow(&self) -> bool {
        self.narrow_override || self.viewport_width < self.narrow_width
    }

    pub fn handle_resize(&mut self, width: u16) {
        self.viewport_width = width;
        self.sync_context();
    }

    pub fn sync_context(&mut self) {
        self.ctx.narrow = self.is_narrow();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// The dimming layer under the sidebar, narrow viewports only.
    pub fn overlay_visible(&self) -> bool {
        self.is_narrow() && self.sidebar_open && !self.loading
    }

    pub fn set_section(&mut self, section: Section) {
        self.active_section = section;
        self.sidebar_cursor = Section::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or(0);
        if self.is_narrow() {
            self.sidebar_open = false;
        }
    }

    pub fn cycle_section(&mut self, forward: bool) {
        let index = Section::ALL
            .iter()
            .position(|section| *section == self.active_section)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % Section::ALL.len()
        } else {
            (index + Section::ALL.len() - 1) % Section::ALL.len()
        };
        self.set_section(Section::ALL[next]);
    }

    pub fn move_sidebar_cursor(&mut self, down: bool) {
        let len = Section::ALL.len();
        if down {
            self.sidebar_cursor = (self.sidebar_cursor + 1) % len;
        } else {
            self.sidebar_cursor = (self.sidebar_cursor + len - 1) % len;
        }
    }

    pub fn activate_sidebar_cursor(&mut self) {
        if let Some(section) = Section::ALL.get(self.sidebar_cursor).copied() {
            self.set_section(section);
        }
    }

    pub fn header_title(&self) -> &'static str {
        self.active_section.title()
    }

    pub fn focus_label(&self) -> &'static str {
        if self.input_mode == InputMode::Search {
            return "Search";
        }
        match self.focus {
            Focus::Sidebar => "Sidebar",
            Focus::Table => "Table",
        }
    }

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.focus = Focus::Table;
    }

    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if self.loading && self.started_at.elapsed() >= self.startup_delay {
            self.loading = false;
        }
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }
}
