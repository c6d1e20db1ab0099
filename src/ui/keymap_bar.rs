//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str =
    "q:quit | Tab:widget | h/l ←→:adjust | Home/End:first/last year | j/k:hover | Esc:clear | y:copy | T:theme";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
