use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub cards: Rect,
    pub search: Rect,
    pub table: Rect,
    pub table_footer: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Pure layout split, reused by the renderer and by mouse hit-testing.
/// `sidebar_width` of zero collapses the sidebar column entirely;
/// `show_cards` reserves the card row and table chrome (dashboard only).
pub fn areas(size: Rect, sidebar_width: u16, show_cards: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(vertical[1]);

    let content = main_chunks[1];
    let (cards, search, table, table_footer) = if show_cards {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(2),
            ])
            .split(content);
        (chunks[0], chunks[1], chunks[2], chunks[3])
    } else {
        (Rect::default(), Rect::default(), content, Rect::default())
    };

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        main: vertical[1],
        sidebar: main_chunks[0],
        content,
        cards,
        search,
        table,
        table_footer,
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

/// Map an x position inside the table's inner header row to a visible
/// column index, assuming evenly divided column widths.
pub fn header_column_at(inner: Rect, columns: usize, x: u16) -> Option<usize> {
    if columns == 0 || inner.width == 0 {
        return None;
    }
    if x < inner.x || x >= inner.x.saturating_add(inner.width) {
        return None;
    }
    let offset = (x - inner.x) as usize;
    let idx = offset * columns / inner.width as usize;
    Some(idx.min(columns - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_column_mapping_covers_the_row() {
        let inner = Rect::new(10, 5, 40, 1);
        assert_eq!(header_column_at(inner, 4, 10), Some(0));
        assert_eq!(header_column_at(inner, 4, 29), Some(1));
        assert_eq!(header_column_at(inner, 4, 49), Some(3));
        assert_eq!(header_column_at(inner, 4, 50), None);
        assert_eq!(header_column_at(inner, 0, 12), None);
    }

    #[test]
    fn zero_sidebar_width_gives_content_full_row() {
        let areas = areas(Rect::new(0, 0, 80, 24), 0, true);
        assert_eq!(areas.sidebar.width, 0);
        assert_eq!(areas.content.width, 80);
    }
}
