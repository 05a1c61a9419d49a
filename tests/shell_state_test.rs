//! Shell state transitions: sections, sidebar, narrow signal, startup delay.

use quarterdeck::app::{App, Focus, InputMode, Section, StatusLevel};
use quarterdeck::config::Config;

fn config_with_delay(startup_delay_ms: u64) -> Config {
    Config {
        startup_delay_ms,
        ..Config::default()
    }
}

fn ready_app(narrow: bool, width: u16) -> App {
    let mut app = App::new(&config_with_delay(0), narrow, width);
    app.on_tick();
    assert!(!app.loading);
    app
}

#[test]
fn startup_flag_clears_once_the_delay_elapses() {
    let mut app = App::new(&config_with_delay(0), false, 120);
    assert!(app.loading);
    app.on_tick();
    assert!(!app.loading);
}

#[test]
fn startup_flag_stays_while_the_delay_is_pending() {
    let mut app = App::new(&config_with_delay(60_000), false, 120);
    app.on_tick();
    assert!(app.loading);
}

#[test]
fn wide_viewport_starts_with_the_sidebar_open() {
    let app = ready_app(false, 120);
    assert!(!app.is_narrow());
    assert!(app.sidebar_open);
}

#[test]
fn narrow_viewport_starts_with_the_sidebar_closed() {
    let app = ready_app(true, 120);
    assert!(app.is_narrow());
    assert!(!app.sidebar_open);
}

#[test]
fn terminal_width_feeds_the_narrow_signal() {
    let mut app = ready_app(false, 120);
    assert!(!app.is_narrow());
    app.handle_resize(60);
    assert!(app.is_narrow());
    app.handle_resize(120);
    assert!(!app.is_narrow());
}

#[test]
fn header_label_follows_the_active_section() {
    let mut app = ready_app(false, 120);
    assert_eq!(app.header_title(), "Dashboard");
    app.set_section(Section::Orders);
    assert_eq!(app.header_title(), "Orders");
}

#[test]
fn menu_selection_auto_closes_the_sidebar_only_when_narrow() {
    let mut app = ready_app(true, 120);
    app.toggle_sidebar();
    assert!(app.sidebar_open);
    app.set_section(Section::Users);
    assert!(!app.sidebar_open, "narrow selection must close the sidebar");

    let mut app = ready_app(false, 120);
    app.set_section(Section::Users);
    assert!(app.sidebar_open, "wide selection keeps the sidebar open");
}

#[test]
fn overlay_shows_iff_narrow_and_open() {
    let mut app = ready_app(true, 120);
    assert!(!app.overlay_visible());
    app.toggle_sidebar();
    assert!(app.overlay_visible());

    let app = ready_app(false, 120);
    assert!(!app.overlay_visible());
}

#[test]
fn overlay_hidden_while_loading() {
    let mut app = App::new(&config_with_delay(60_000), true, 120);
    app.sidebar_open = true;
    assert!(app.loading);
    assert!(!app.overlay_visible());
}

#[test]
fn cycling_sections_wraps_around() {
    let mut app = ready_app(false, 120);
    app.cycle_section(false);
    assert_eq!(app.active_section, Section::Settings);
    app.cycle_section(true);
    assert_eq!(app.active_section, Section::Dashboard);
}

#[test]
fn sidebar_cursor_moves_and_activates() {
    let mut app = ready_app(false, 120);
    app.move_sidebar_cursor(true);
    app.move_sidebar_cursor(true);
    app.activate_sidebar_cursor();
    assert_eq!(app.active_section, Section::Users);

    app.move_sidebar_cursor(false);
    app.activate_sidebar_cursor();
    assert_eq!(app.active_section, Section::Analytics);
}

#[test]
fn search_mode_toggles_and_focuses_the_table() {
    let mut app = ready_app(false, 120);
    assert_eq!(app.input_mode, InputMode::Normal);
    app.enter_search();
    assert_eq!(app.input_mode, InputMode::Search);
    assert_eq!(app.focus, Focus::Table);
    assert_eq!(app.focus_label(), "Search");
    app.exit_search();
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn status_messages_carry_their_level() {
    let mut app = ready_app(false, 120);
    assert!(app.status_text().is_none());
    app.set_status("exported", StatusLevel::Info);
    let (text, level) = app.status_text().expect("status set");
    assert_eq!(text, "exported");
    assert_eq!(level, StatusLevel::Info);
}

#[test]
fn dashboard_table_uses_the_configured_page_size() {
    let config = Config {
        page_size: 5,
        ..Config::default()
    };
    let app = App::new(&config, false, 120);
    assert_eq!(app.dashboard.table.page_size(), 5);
    assert_eq!(app.dashboard.table.total_pages(), 5);
}
