//! Single labeled metric card: icon, optional growth badge, title, value.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

pub struct SummaryCard<'a> {
    title: &'a str,
    value: &'a str,
    growth: Option<&'a str>,
    icon: &'a str,
    accent: Color,
}

impl<'a> SummaryCard<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            growth: None,
            icon: "",
            accent: Color::Cyan,
        }
    }

    pub fn growth(mut self, growth: Option<&'a str>) -> Self {
        self.growth = growth;
        self
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = icon;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl<'a> Widget for SummaryCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height < 3 {
            return;
        }

        let accent_style = Style::default().fg(self.accent);
        buf.set_stringn(
            inner.x,
            inner.y,
            self.icon,
            inner.width as usize,
            accent_style.add_modifier(Modifier::BOLD),
        );
        if let Some(growth) = self.growth {
            let len = growth.chars().count() as u16;
            if len < inner.width {
                buf.set_stringn(
                    inner.x + inner.width - len,
                    inner.y,
                    growth,
                    len as usize,
                    accent_style,
                );
            }
        }

        buf.set_stringn(
            inner.x,
            inner.y + 1,
            self.title,
            inner.width as usize,
            Style::default().fg(Color::DarkGray),
        );
        buf.set_stringn(
            inner.x,
            inner.y + 2,
            self.value,
            inner.width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(card: SummaryCard, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf.get(x, y).symbol());
            }
        }
        out
    }

    #[test]
    fn renders_title_value_and_badge() {
        let card = SummaryCard::new("Total Users", "12,345")
            .growth(Some("+12%"))
            .icon("◎");
        let text = rendered_text(card, 24, 5);
        assert!(text.contains("Total Users"));
        assert!(text.contains("12,345"));
        assert!(text.contains("+12%"));
    }

    #[test]
    fn omits_badge_when_absent() {
        let card = SummaryCard::new("Orders", "1,234").icon("◈");
        let text = rendered_text(card, 24, 5);
        assert!(text.contains("Orders"));
        assert!(text.contains("1,234"));
        assert!(!text.contains('%'));
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let card = SummaryCard::new("Total Users", "12,345");
        let text = rendered_text(card, 3, 2);
        assert!(text.trim().is_empty());
    }
}
