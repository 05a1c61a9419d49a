use std::fs::{self, File};
use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::LevelFilter;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use simplelog::WriteLogger;

use quarterdeck::app::{App, Focus, InputMode, Section, StatusLevel};
use quarterdeck::config;
use quarterdeck::core::{Action, Module, NotifyLevel};
use quarterdeck::modules::export::{self, ExportFormat};
use quarterdeck::ui;

#[derive(Debug, Parser)]
#[command(
    name = "quarterdeck",
    version,
    about = "Quarterdeck: a terminal admin dashboard"
)]
struct Args {
    /// Force the narrow-viewport behavior regardless of terminal width
    #[arg(long)]
    narrow: bool,

    /// Rows per table page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = config::load();
    if let Some(page_size) = args.page_size {
        config.page_size = page_size.max(1);
    }

    init_logging();
    log::info!("starting with page_size={}", config.page_size);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let width = terminal.size().map(|rect| rect.width).unwrap_or(0);
    let app = App::new(&config, args.narrow, width);

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn init_logging() {
    let level = std::env::var("QUARTERDECK_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let Some(path) = config::log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    // Stdout belongs to the terminal UI; logs go to a file or nowhere.
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, simplelog::Config::default(), file);
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = std::time::Duration::from_millis(100);
    let mut last_tick = std::time::Instant::now();

    loop {
        app.sync_context();
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| std::time::Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(width, _) => app.handle_resize(width),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = std::time::Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The startup screen only honors quit.
    if app.loading {
        if matches!(key.code, KeyCode::Char('q')) {
            app.should_quit = true;
        }
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char('b') => app.toggle_sidebar(),
        KeyCode::Char('/') if app.active_section == Section::Dashboard => app.enter_search(),
        KeyCode::Char('[') => app.cycle_section(false),
        KeyCode::Char(']') => app.cycle_section(true),
        KeyCode::Tab => cycle_focus(app),
        KeyCode::Esc => {
            if app.is_narrow() && app.sidebar_open {
                app.sidebar_open = false;
            }
        }
        KeyCode::Char('e') if app.active_section == Section::Dashboard => {
            let action = export::export_current_view(&app.dashboard.table, ExportFormat::Csv);
            apply_action(app, action);
        }
        KeyCode::Char('E') if app.active_section == Section::Dashboard => {
            let action = export::export_current_view(&app.dashboard.table, ExportFormat::Json);
            apply_action(app, action);
        }
        code => {
            if let Some(section) = section_for_shortcut(code) {
                app.set_section(section);
                return;
            }
            match app.focus {
                Focus::Sidebar => handle_sidebar_key(app, key),
                Focus::Table => {
                    if app.active_section == Section::Dashboard {
                        let action = app.dashboard.handle_key(key, &mut app.ctx);
                        apply_action(app, action);
                    }
                }
            }
        }
    }
}

fn section_for_shortcut(code: KeyCode) -> Option<Section> {
    let KeyCode::Char(ch) = code else {
        return None;
    };
    Section::ALL
        .iter()
        .copied()
        .find(|section| section.shortcut() == ch)
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_sidebar_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_sidebar_cursor(true),
        KeyCode::Enter => app.activate_sidebar_cursor(),
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.exit_search(),
        KeyCode::Backspace => app.dashboard.table.pop_search_char(),
        KeyCode::Char(ch) => app.dashboard.table.push_search_char(ch),
        _ => {}
    }
}

fn cycle_focus(app: &mut App) {
    app.focus = match app.focus {
        Focus::Sidebar => Focus::Table,
        Focus::Table => Focus::Sidebar,
    };
}

fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::None => {}
        Action::Copy(text) => copy_to_clipboard(app, text),
        Action::Notify(text, level) => {
            let level = match level {
                NotifyLevel::Info => StatusLevel::Info,
                NotifyLevel::Warn => StatusLevel::Warn,
                NotifyLevel::Error => StatusLevel::Error,
            };
            app.set_status(text, level);
        }
        Action::CloseOverlay => {
            app.help_open = false;
            if app.is_narrow() {
                app.sidebar_open = false;
            }
        }
        Action::Quit => app.should_quit = true,
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(&text).is_ok() {
                app.ctx.set_clipboard(text.clone());
                app.set_status(format!("Copied: {text}"), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.loading || app.help_open || app.input_mode == InputMode::Search {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let overlay = app.overlay_visible();
    let layout_sidebar = if overlay { 0 } else { ui::sidebar_width(app) };
    let show_cards = app.active_section == Section::Dashboard;
    let areas = ui::layout::areas(size, layout_sidebar, show_cards);
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, overlay, col, row),
        MouseEventKind::ScrollUp if rect_contains(areas.table, col, row) => {
            app.dashboard.table.prev_page();
        }
        MouseEventKind::ScrollDown if rect_contains(areas.table, col, row) => {
            app.dashboard.table.next_page();
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: ui::layout::UiAreas, overlay: bool, col: u16, row: u16) {
    if overlay {
        let sidebar = ui::overlay_sidebar_rect(areas.main);
        if rect_contains(sidebar, col, row) {
            click_sidebar_item(app, sidebar, row);
        } else if rect_contains(areas.main, col, row) {
            // Clicking the dimmed backdrop closes the sidebar.
            app.sidebar_open = false;
        }
        return;
    }

    if rect_contains(areas.sidebar, col, row) {
        click_sidebar_item(app, areas.sidebar, row);
        return;
    }

    if app.active_section == Section::Dashboard {
        if rect_contains(areas.search, col, row) {
            app.enter_search();
            return;
        }
        if rect_contains(areas.table, col, row) {
            app.focus = Focus::Table;
            let inner = rect_inner(areas.table);
            // The header row is the first line inside the borders.
            if row == inner.y {
                let narrow = app.is_narrow();
                let accessor = {
                    let table = &app.dashboard.table;
                    let visible = ui::visible_columns(table, narrow);
                    ui::layout::header_column_at(
                        Rect {
                            height: 1,
                            ..inner
                        },
                        visible.len(),
                        col,
                    )
                    .map(|idx| visible[idx].accessor.clone())
                };
                if let Some(accessor) = accessor {
                    app.dashboard.table.toggle_sort(&accessor);
                }
            }
            return;
        }
        if rect_contains(areas.table_footer, col, row) && row == areas.table_footer.y + 1 {
            let target = ui::pagination_target_at(
                &app.dashboard.table,
                col.saturating_sub(areas.table_footer.x),
            );
            match target {
                Some(ui::PageTarget::Prev) => app.dashboard.table.prev_page(),
                Some(ui::PageTarget::Next) => app.dashboard.table.next_page(),
                Some(ui::PageTarget::Page(page)) => app.dashboard.table.go_to_page(page),
                None => {}
            }
        }
    }
}

fn click_sidebar_item(app: &mut App, sidebar: Rect, row: u16) {
    let inner = rect_inner(sidebar);
    if row < inner.y {
        return;
    }
    let idx = (row - inner.y) as usize;
    if let Some(section) = Section::ALL.get(idx).copied() {
        app.set_section(section);
        app.focus = Focus::Sidebar;
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}
