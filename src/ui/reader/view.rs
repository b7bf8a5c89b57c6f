use crate::config::guide_gap_rows;
use crate::reading::{PlaybackState, Progress, WordSplit};
use crate::rendering::cell::WordColumns;
use crate::rendering::CellRenderer;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PROGRESS_BAR_WIDTH: usize = 40;

/// Draw the reader: guides, the pivot-aligned word, progress and status.
pub fn render_reader(frame: &mut Frame, area: Rect, renderer: &CellRenderer, font_size: u16) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );
    if area.height < 3 || area.width < 3 {
        return;
    }

    let center_row = area.y + renderer.center_row().min(area.height - 1);
    let gap = guide_gap_rows(font_size);

    if let Some(split) = renderer.current_word() {
        let columns = renderer.columns_for(split);
        render_word(frame, area, center_row, split, columns);
    }

    let pivot_col = area.x + area.width / 2;
    if let Some(top) = center_row.checked_sub(gap).filter(|row| *row >= area.y) {
        set_line(frame, area, top, &render_guide(area.width, pivot_col - area.x, '┬'));
    }
    let bottom = center_row + gap;
    if bottom < area.y + area.height - 2 {
        set_line(frame, area, bottom, &render_guide(area.width, pivot_col - area.x, '┴'));
    }

    let progress_row = area.y + area.height - 2;
    let status_row = area.y + area.height - 1;
    frame.render_widget(
        Paragraph::new(render_progress_bar(renderer.progress(), PROGRESS_BAR_WIDTH)),
        Rect::new(area.x, progress_row, area.width, 1),
    );
    frame.render_widget(
        render_status_line(renderer),
        Rect::new(area.x, status_row, area.width, 1),
    );
}

fn render_word(
    frame: &mut Frame,
    area: Rect,
    row: u16,
    split: &WordSplit,
    columns: WordColumns,
) {
    let text_style = Style::default()
        .fg(colors::text())
        .add_modifier(Modifier::BOLD);
    let pivot_style = Style::default()
        .fg(colors::pivot())
        .add_modifier(Modifier::BOLD);

    let prefix = clip_left(&split.prefix, columns.pivot_col as usize);
    let prefix_start = columns.pivot_col - prefix.width() as u16;

    let buffer = frame.buffer_mut();
    let right_edge = area.x + area.width;
    let draws = [
        (prefix_start, prefix.as_str(), text_style),
        (columns.pivot_col, split.pivot.as_str(), pivot_style),
        (columns.suffix_start, split.suffix.as_str(), text_style),
    ];
    for (col, text, style) in draws {
        let x = area.x + col;
        if text.is_empty() || x >= right_edge {
            continue;
        }
        let line = Line::from(Span::styled(text.to_string(), style));
        buffer.set_line(x, row, &line, right_edge - x);
    }
}

/// Keep the rightmost graphemes of `text` that fit in `max_width` cells.
pub fn clip_left(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut kept: Vec<&str> = Vec::new();
    for grapheme in text.graphemes(true).rev() {
        width += grapheme.width();
        if width > max_width {
            break;
        }
        kept.push(grapheme);
    }
    kept.into_iter().rev().collect()
}

/// A horizontal rule with a notch pointing at the pivot column.
pub fn render_guide(width: u16, pivot_col: u16, notch: char) -> Line<'static> {
    let rule: String = (0..width)
        .map(|col| if col == pivot_col { notch } else { '─' })
        .collect();
    Line::from(Span::styled(rule, Style::default().fg(colors::dimmed())))
}

pub fn render_progress_bar(progress: Progress, width: usize) -> Line<'static> {
    let filled_len = ((progress.fraction() * width as f64) as usize).min(width);
    let empty_len = width - filled_len;

    Line::from(vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(colors::pivot())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}

/// Counter, playback hint and rate on one line.
pub fn render_status_line(renderer: &CellRenderer) -> Paragraph<'static> {
    let progress = renderer.progress();
    let hint = match renderer.state() {
        PlaybackState::Paused => "paused | space resume | ←/→ step | esc exit",
        PlaybackState::Finished => "finished | ←/→ step | esc exit",
        PlaybackState::Idle | PlaybackState::Playing => "",
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} / {} ", progress.position, progress.total),
            Style::default().fg(colors::text()),
        ),
        Span::styled(format!(" {} ", hint), Style::default().fg(colors::dimmed())),
        Span::styled(
            format!(" {} wpm ", renderer.wpm()),
            Style::default().fg(colors::text()),
        ),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

fn set_line(frame: &mut Frame, area: Rect, row: u16, line: &Line<'_>) {
    frame.buffer_mut().set_line(area.x, row, line, area.width);
}
