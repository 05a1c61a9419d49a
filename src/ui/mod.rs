use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap,
};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, Focus, InputMode, Section, StatusLevel};
use crate::domain::table::{Column, DataTable, PageControl, SortDirection};
use widgets::{LoadingIndicator, SpinnerSize, SummaryCard};

const SIDEBAR_WIDTH: u16 = 24;
const SIDEBAR_RAIL_WIDTH: u16 = 6;

const CARD_ACCENTS: [Color; 4] = [Color::Blue, Color::Green, Color::Magenta, Color::Yellow];

/// Sidebar column width for the current shell state. Zero means hidden
/// (narrow viewport, sidebar closed); the rail is the collapsed wide form.
pub fn sidebar_width(app: &App) -> u16 {
    if app.is_narrow() {
        if app.sidebar_open {
            SIDEBAR_WIDTH
        } else {
            0
        }
    } else if app.sidebar_open {
        SIDEBAR_WIDTH
    } else {
        SIDEBAR_RAIL_WIDTH
    }
}

/// Columns actually rendered for the current narrow signal.
pub fn visible_columns<'a>(table: &'a DataTable, narrow: bool) -> Vec<&'a Column> {
    table
        .columns()
        .iter()
        .filter(|col| !(narrow && col.hide_when_narrow))
        .collect()
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();

    if app.loading {
        let spinner = LoadingIndicator::new(app.frame)
            .size(SpinnerSize::Large)
            .message("Preparing dashboard...");
        f.render_widget(spinner, size);
        return;
    }

    let overlay = app.overlay_visible();
    // While the sidebar overlays the content, the content gets the full row
    // and the sidebar is painted on top afterwards.
    let layout_sidebar = if overlay { 0 } else { sidebar_width(app) };
    let show_cards = app.active_section == Section::Dashboard;
    let areas = layout::areas(size, layout_sidebar, show_cards);

    draw_header(f, areas.header, app);
    if show_cards {
        draw_cards(f, areas.cards, app);
        draw_search(f, areas.search, app);
        draw_table(f, areas.table, app);
        draw_table_footer(f, areas.table_footer, app);
    } else {
        draw_placeholder(f, areas.content, app);
    }
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if !overlay && areas.sidebar.width > 0 {
        draw_sidebar(f, areas.sidebar, app);
    }
    if overlay {
        draw_dim_overlay(f, areas.main);
        let sidebar = overlay_sidebar_rect(areas.main);
        f.render_widget(Clear, sidebar);
        draw_sidebar(f, sidebar, app);
    }

    if app.help_open {
        draw_help_popup(f, size);
    }
}

/// Sidebar rect while overlaying the content on a narrow viewport.
pub fn overlay_sidebar_rect(main: Rect) -> Rect {
    Rect {
        x: main.x,
        y: main.y,
        width: SIDEBAR_WIDTH.min(main.width),
        height: main.height,
    }
}

fn draw_dim_overlay(f: &mut Frame, area: Rect) {
    let dim = Block::default().style(Style::default().fg(Color::DarkGray).bg(Color::Black));
    f.render_widget(dim, area);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Quarterdeck",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Section", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {} ", app.header_title())),
        Span::styled("Focus", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.focus_label())),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_line = Line::from(vec![
        Span::styled("Admin User ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("admin@example.com", Style::default().fg(Color::DarkGray)),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let rail = area.width < 10;
    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let is_active = *section == app.active_section;
            let label = if rail {
                section.icon().to_string()
            } else {
                format!("{} {}", section.icon(), section.title())
            };
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(label)).style(style)
        })
        .collect();

    let title = if rail { "" } else { "Admin Panel" };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    let selected = if app.focus == Focus::Sidebar {
        app.sidebar_cursor
    } else {
        Section::ALL
            .iter()
            .position(|section| *section == app.active_section)
            .unwrap_or(0)
    };
    state.select(Some(selected));
    f.render_stateful_widget(list, chunks[0], &mut state);

    if !rail {
        let profile = Paragraph::new(Text::from(vec![
            Line::from("Admin User"),
            Line::from(Span::styled(
                "admin@example.com",
                Style::default().fg(Color::DarkGray),
            )),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        f.render_widget(profile, chunks[1]);
    }
}

fn draw_cards(f: &mut Frame, area: Rect, app: &App) {
    let metrics = app.dashboard.metrics();
    if metrics.is_empty() || area.height == 0 {
        return;
    }
    let constraints: Vec<Constraint> = metrics
        .iter()
        .map(|_| Constraint::Ratio(1, metrics.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, metric) in metrics.iter().enumerate() {
        let card = SummaryCard::new(metric.title, &metric.value)
            .growth(metric.growth)
            .icon(metric.icon)
            .accent(CARD_ACCENTS[idx % CARD_ACCENTS.len()]);
        f.render_widget(card, chunks[idx]);
    }
}

fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    let searching = app.input_mode == InputMode::Search;
    let border_style = if searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let term = app.dashboard.table.search();
    let mut spans = vec![Span::raw(term.to_string())];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    } else if term.is_empty() {
        spans.push(Span::styled(
            "Press / to search...",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

fn sort_indicator(table: &DataTable, column: &Column) -> &'static str {
    let sort = table.sort();
    if sort.key.as_deref() == Some(column.accessor.as_str()) {
        match sort.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else if column.sortable {
        " ⇅"
    } else {
        ""
    }
}

fn draw_table(f: &mut Frame, area: Rect, app: &App) {
    let narrow = app.is_narrow();
    let table_state = &app.dashboard.table;
    let border_style = if app.focus == Focus::Table && app.input_mode == InputMode::Normal {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Users")
        .border_style(border_style);

    let columns = visible_columns(table_state, narrow);
    if columns.is_empty() {
        f.render_widget(block, area);
        return;
    }
    let cursor_accessor = table_state
        .columns()
        .get(table_state.cursor_col())
        .map(|col| col.accessor.as_str());

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            let is_cursor = cursor_accessor == Some(col.accessor.as_str());
            let style = if is_cursor && app.focus == Focus::Table {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(format!("{}{}", col.header, sort_indicator(table_state, col))).style(style)
        })
        .collect();
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = table_state
        .page_records()
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let cells: Vec<Cell> = columns
                .iter()
                .map(|col| Cell::from(col.display(record)))
                .collect();
            let style = if idx == table_state.cursor_row() && app.focus == Focus::Table {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();
    let empty = rows.is_empty();
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);

    if empty {
        // Placeholder spans all columns in place of the table body.
        let body = Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(3),
        };
        if body.width > 0 && body.height > 0 {
            let placeholder = Paragraph::new(Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No data found",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Try a different search term",
                    Style::default().fg(Color::DarkGray),
                )),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(placeholder, body);
        }
    }
}

/// Hit targets of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Prev,
    Next,
    Page(usize),
}

/// The pagination strip as (text, click target) cells, in render order.
/// Disabled Prev/Next and the ellipsis carry no target.
pub fn pagination_cells(table: &DataTable) -> Vec<(String, Option<PageTarget>)> {
    let mut cells = Vec::new();
    cells.push((
        "[Prev]".to_string(),
        table.can_prev_page().then_some(PageTarget::Prev),
    ));
    for control in table.page_controls() {
        match control {
            PageControl::Page(page) => {
                cells.push((format!(" {page} "), Some(PageTarget::Page(page))));
            }
            PageControl::Ellipsis => cells.push((" … ".to_string(), None)),
        }
    }
    cells.push((
        "[Next]".to_string(),
        table.can_next_page().then_some(PageTarget::Next),
    ));
    cells
}

/// Map an x offset from the start of the rendered strip to its target.
pub fn pagination_target_at(table: &DataTable, x_offset: u16) -> Option<PageTarget> {
    let mut cursor = 0u16;
    for (text, target) in pagination_cells(table) {
        let width = text.chars().count() as u16;
        if x_offset >= cursor && x_offset < cursor + width {
            return target;
        }
        cursor += width;
    }
    None
}

fn draw_table_footer(f: &mut Frame, area: Rect, app: &App) {
    let table = &app.dashboard.table;
    // Pagination chrome disappears entirely for zero or one page, which
    // covers the empty-result case.
    if table.total_pages() <= 1 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some((start, end)) = table.page_range() {
        let showing = Line::from(vec![
            Span::styled("Showing ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{start}")),
            Span::styled(" to ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{end}")),
            Span::styled(" of ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}", table.total_rows())),
            Span::styled(" results", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(showing), chunks[0]);
    }

    let mut spans = Vec::new();
    for (text, target) in pagination_cells(table) {
        let style = match target {
            Some(PageTarget::Page(page)) if page == table.page() => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default(),
            None => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(text, style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn draw_placeholder(f: &mut Frame, area: Rect, app: &App) {
    let title = app.header_title();
    let sidebar_state = if app.sidebar_open {
        "Expanded"
    } else {
        "Collapsed"
    };
    let body = Text::from(vec![
        Line::from(Span::styled(
            format!("Welcome to {title}"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "This is the content area for the {title} section."
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Active section: ", Style::default().fg(Color::DarkGray)),
            Span::raw(title),
        ]),
        Line::from(vec![
            Span::styled("Sidebar: ", Style::default().fg(Color::DarkGray)),
            Span::raw(sidebar_state),
        ]),
    ]);
    let panel = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let style = match level {
                StatusLevel::Info => Style::default().fg(Color::Green),
                StatusLevel::Warn => Style::default().fg(Color::Yellow),
                StatusLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(text.to_string(), style))
        }
        None => Line::from(Span::styled(
            "Press ? for help",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Cyan)),
            Span::raw(app.dashboard.table.search().to_string()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
            Span::styled("  Esc to close", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            "q quit  / search  h/l column  s sort  n/p page  b sidebar  e/E export  y copy",
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, size: Rect) {
    let area = centered_rect(60, 70, size);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  1-6        jump to section"),
        Line::from("  [ / ]      previous / next section"),
        Line::from("  Tab        cycle focus (sidebar / table)"),
        Line::from("  j / k      move cursor"),
        Line::from("  Enter      activate sidebar selection"),
        Line::from("  b          toggle sidebar"),
        Line::from(""),
        Line::from(Span::styled(
            "Data table",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  /          search (Esc to close)"),
        Line::from("  h / l      move header cursor"),
        Line::from("  s / Enter  sort by cursor column"),
        Line::from("  n / p      next / previous page"),
        Line::from("  g / G      first / last page"),
        Line::from("  y          copy leading cell"),
        Line::from("  e / E      export view as CSV / JSON"),
        Line::from(""),
        Line::from(Span::styled(
            "General",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  ?          toggle this help"),
        Line::from("  q          quit"),
    ];
    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
