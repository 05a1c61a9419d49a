//! Loading indicator shown while the shell's startup delay is pending.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn frame_glyph(frame: usize) -> &'static str {
    FRAMES[frame % FRAMES.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    /// Vertical band the spinner glyph is centered in.
    fn band(&self) -> u16 {
        match self {
            SpinnerSize::Small => 1,
            SpinnerSize::Medium => 3,
            SpinnerSize::Large => 5,
        }
    }
}

/// Stateless spinner; the caller supplies the animation frame.
pub struct LoadingIndicator<'a> {
    size: SpinnerSize,
    message: &'a str,
    frame: usize,
}

impl<'a> LoadingIndicator<'a> {
    pub fn new(frame: usize) -> Self {
        Self {
            size: SpinnerSize::default(),
            message: "Loading...",
            frame,
        }
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    /// An empty message renders nothing below the spinner.
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = message;
        self
    }
}

impl<'a> Widget for LoadingIndicator<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let band = self.size.band().min(area.height);
        let message_lines = u16::from(!self.message.is_empty());
        let used = band + message_lines;
        let top = area.y + (area.height.saturating_sub(used)) / 2;

        let glyph = frame_glyph(self.frame);
        let glyph_y = top + band / 2;
        let glyph_x = area.x + area.width.saturating_sub(1) / 2;
        buf.set_stringn(
            glyph_x,
            glyph_y,
            glyph,
            1,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        if !self.message.is_empty() {
            let msg_y = top + band;
            if msg_y < area.y + area.height {
                let len = self.message.chars().count() as u16;
                let msg_x = area.x + area.width.saturating_sub(len) / 2;
                buf.set_stringn(
                    msg_x,
                    msg_y,
                    self.message,
                    area.width as usize,
                    Style::default().fg(Color::DarkGray),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cycle() {
        assert_eq!(frame_glyph(0), frame_glyph(FRAMES.len()));
        assert_ne!(frame_glyph(0), frame_glyph(1));
    }

    fn rendered_text(widget: LoadingIndicator, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn message_is_centered_below_spinner() {
        let text = rendered_text(LoadingIndicator::new(0).message("Starting up"), 30, 7);
        assert!(text.contains("Starting up"));
        assert!(text.contains(frame_glyph(0)));
    }

    #[test]
    fn empty_message_renders_spinner_only() {
        let text = rendered_text(LoadingIndicator::new(3).message(""), 20, 5);
        assert!(text.contains(frame_glyph(3)));
        assert!(!text.contains("Loading"));
    }
}
