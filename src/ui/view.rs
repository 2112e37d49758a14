use crate::app::mode::AppMode;
use crate::app::RenderState;
use crate::catalog::{classify, LearningItem, Picture};
use crate::ui::layout::{strip_window, ScreenLayout};
use crate::ui::theme::{colors, letter_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Columns taken by one picker cell, including the gap after it
const STRIP_CELL: u16 = 4;

const PREVIOUS_LABEL: &str = "◀ Prev";
const PLAY_LABEL: &str = "▶ Play";
const NEXT_LABEL: &str = "Next ▶";

/// Draw the whole screen and report where the clickable parts ended up
pub fn draw_screen(frame: &mut Frame, state: &RenderState, flash: bool) -> ScreenLayout {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(render_title(), rows[0]);
    let strip = draw_letter_strip(frame, rows[1], state);
    let card = draw_card(frame, rows[2], state.current.as_ref(), flash);
    frame.render_widget(render_position(state.progress), rows[3]);
    frame.render_widget(render_progress_bar(state.progress), rows[4]);
    let (previous, play, next) = draw_buttons(frame, rows[5], state);

    if state.mode == AppMode::Help {
        draw_help(frame, area);
    }

    ScreenLayout {
        strip,
        card,
        previous,
        play,
        next,
    }
}

pub fn render_title() -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            "ABC Alphabet Fun",
            Style::default()
                .fg(colors::anchor())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ? help · Esc quit", Style::default().fg(colors::dimmed())),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

fn draw_letter_strip(frame: &mut Frame, area: Rect, state: &RenderState) -> Vec<(Rect, usize)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::dimmed()))
        .style(Style::default().bg(colors::background()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut cells = Vec::new();
    if inner.height == 0 || state.symbols.is_empty() {
        return cells;
    }

    let fits = (inner.width / STRIP_CELL) as usize;
    let window = strip_window(state.cursor, state.symbols.len(), fits);
    let used = window.len() as u16 * STRIP_CELL;
    let left = inner.x + inner.width.saturating_sub(used) / 2;

    for (slot, index) in window.enumerate() {
        let rect = Rect::new(left + slot as u16 * STRIP_CELL, inner.y, STRIP_CELL - 1, 1);
        let selected = index == state.cursor;
        frame.render_widget(render_strip_letter(state.symbols[index], selected), rect);
        cells.push((rect, index));
    }
    cells
}

pub fn render_strip_letter(symbol: &str, selected: bool) -> Paragraph<'static> {
    let style = if selected {
        Style::default()
            .fg(colors::text())
            .bg(colors::anchor())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(letter_color(classify(symbol)))
            .bg(colors::background())
    };
    Paragraph::new(symbol.to_string())
        .alignment(Alignment::Center)
        .style(style)
}

fn draw_card(frame: &mut Frame, area: Rect, item: Option<&LearningItem>, flash: bool) -> Rect {
    let border = if flash {
        colors::anchor()
    } else {
        colors::dimmed()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::surface()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(item) = item else {
        frame.render_widget(render_placeholder(), inner);
        return area;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(render_big_letter(item), rows[1]);
    frame.render_widget(render_picture(item), rows[3]);
    frame.render_widget(render_word(item), rows[5]);
    area
}

pub fn render_big_letter(item: &LearningItem) -> Paragraph<'static> {
    let text = format!("{}  {}", item.symbol, item.symbol.to_lowercase());
    Paragraph::new(text).alignment(Alignment::Center).style(
        Style::default()
            .fg(letter_color(classify(item.symbol)))
            .bg(colors::surface())
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render_picture(item: &LearningItem) -> Paragraph<'static> {
    let text = match item.picture() {
        Picture::Glyph(glyph) => glyph.to_string(),
        Picture::Media(media) => format!("[{}]", media),
    };
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
}

pub fn render_word(item: &LearningItem) -> Paragraph<'static> {
    Paragraph::new(item.label.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors::text())
                .bg(colors::surface())
                .add_modifier(Modifier::BOLD),
        )
}

pub fn render_placeholder() -> Paragraph<'static> {
    Paragraph::new("No letter to show")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::surface()))
}

pub fn render_position(progress: (usize, usize)) -> Paragraph<'static> {
    let (number, total) = progress;
    Paragraph::new(format!("{} of {}", number, total))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    const WIDTH: usize = 26;
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current * WIDTH / total).min(WIDTH)
    };

    let spans = vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(colors::anchor())),
        Span::styled(
            "─".repeat(WIDTH - filled_len),
            Style::default().fg(colors::dimmed()),
        ),
    ];

    Line::from(spans).alignment(Alignment::Center)
}

fn draw_buttons(frame: &mut Frame, area: Rect, state: &RenderState) -> (Rect, Rect, Rect) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let buttons = [
        (PREVIOUS_LABEL, !state.is_first()),
        (PLAY_LABEL, state.current.is_some()),
        (NEXT_LABEL, !state.is_last()),
    ];

    let mut rects = [Rect::default(); 3];
    for (i, (label, enabled)) in buttons.into_iter().enumerate() {
        let rect = button_rect(slots[i], label);
        frame.render_widget(render_button(label, enabled), rect);
        rects[i] = rect;
    }
    (rects[0], rects[1], rects[2])
}

/// Shrink a slot to the button's own footprint: label plus border and padding
pub fn button_rect(slot: Rect, label: &str) -> Rect {
    let width = (label.width() as u16 + 4).min(slot.width);
    let x = slot.x + (slot.width - width) / 2;
    Rect::new(x, slot.y, width, slot.height)
}

pub fn render_button(label: &'static str, enabled: bool) -> Paragraph<'static> {
    let color = if enabled {
        colors::text()
    } else {
        colors::dimmed()
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bg(colors::background()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("a-z        jump to a letter"),
        Line::from("← / →      previous / next"),
        Line::from("Home / End first / last"),
        Line::from("Space      hear it again"),
        Line::from("drag card  swipe"),
        Line::from("Esc        quit"),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(colors::dimmed()),
        )),
    ];
    let popup = centered_rect(area, 36, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(colors::text()).bg(colors::background()))
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(colors::anchor())),
            ),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
