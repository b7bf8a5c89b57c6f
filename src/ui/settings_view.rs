//! Settings view: the text box, rate and size fields, and the command deck.

use crate::app::{App, Focus};
use crate::ui::theme::colors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthChar;

pub fn render_settings(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    frame.render_widget(render_header(), chunks[0]);
    frame.render_widget(render_text_box(app, chunks[1]), chunks[1]);
    frame.render_widget(render_fields(app), chunks[2]);
    if let Some(status) = app.status(now) {
        frame.render_widget(
            Paragraph::new(status.to_string()).style(Style::default().fg(colors::dimmed())),
            chunks[3],
        );
    }
    render_command_deck(frame, chunks[4], app);
}

fn render_header() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            " rsvp ",
            Style::default()
                .fg(colors::pivot())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}  space start | tab fields | :h help", crate::VERSION),
            Style::default().fg(colors::dimmed()),
        ),
    ]))
}

fn render_text_box(app: &App, area: Rect) -> Paragraph<'_> {
    let settings = app.settings();
    let editing = settings.focus() == Focus::Text;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(editing))
        .title(format!(" text ({} words) ", settings.word_count()));

    // While editing, show the end of the buffer where typing happens
    let paragraph = if editing {
        let inner = block.inner(area);
        let rows = tail_rows(settings.text(), inner.width, inner.height);
        Paragraph::new(rows.into_iter().map(Line::from).collect::<Vec<_>>())
    } else {
        Paragraph::new(settings.text()).wrap(Wrap { trim: false })
    };

    paragraph
        .style(Style::default().fg(colors::text()))
        .block(block)
}

/// The last `height` rows of `text` hard-wrapped at `width` columns.
///
/// Only the trailing lines needed to fill the box are wrapped.
fn tail_rows(text: &str, width: u16, height: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let height = usize::from(height);
    // Collected bottom-up
    let mut rows: Vec<String> = Vec::new();

    for line in text.rsplit('\n') {
        if rows.len() >= height {
            break;
        }
        let mut wrapped = Vec::new();
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let char_width = c.width().unwrap_or(0);
            if row_width + char_width > width && !row.is_empty() {
                wrapped.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += char_width;
        }
        wrapped.push(row);
        rows.extend(wrapped.into_iter().rev());
    }

    rows.truncate(height);
    rows.reverse();
    rows
}

fn render_fields(app: &App) -> Paragraph<'static> {
    let settings = app.settings();
    let field = |label: &str, value: &str, focused: bool| {
        vec![
            Span::styled(format!(" {} ", label), Style::default().fg(colors::dimmed())),
            Span::styled(format!("[{}]", value), focus_style(focused)),
        ]
    };

    let mut spans = field("wpm", &settings.wpm_input, settings.focus() == Focus::Wpm);
    spans.extend(field(
        "size",
        &format!("{}px", settings.font_size_input),
        settings.focus() == Focus::FontSize,
    ));
    Paragraph::new(Line::from(spans))
}

fn render_command_deck(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(colors::pivot()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let settings = app.settings();
    let input_text = if settings.focus() == Focus::Command {
        settings.command_input.clone()
    } else {
        " @file  @@ clipboard  :wpm N  :size N  :q".to_string()
    };

    let input_widget = Paragraph::new(input_text)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()));

    frame.render_widget(input_widget, layout[1]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(colors::pivot())
    } else {
        Style::default().fg(colors::dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_rows_short_text_fits() {
        assert_eq!(tail_rows("hello world", 20, 3), vec!["hello world"]);
    }

    #[test]
    fn test_tail_rows_keeps_last_rows() {
        let text = "line one\nline two\nline three\nend";
        assert_eq!(tail_rows(text, 20, 2), vec!["line three", "end"]);
    }

    #[test]
    fn test_tail_rows_wraps_long_line() {
        assert_eq!(tail_rows("abcdefghij", 4, 2), vec!["efgh", "ij"]);
        assert_eq!(tail_rows("abcdefghij", 4, 5), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_tail_rows_shows_trailing_newline() {
        assert_eq!(tail_rows("first\n", 10, 1), vec![""]);
    }

    #[test]
    fn test_tail_rows_zero_height() {
        assert!(tail_rows("anything", 10, 0).is_empty());
    }

    #[test]
    fn test_tail_rows_wide_characters() {
        assert_eq!(tail_rows("日本語", 4, 2), vec!["日本", "語"]);
    }
}
