//! TUI rendering with ratatui
//!
//! Pattern boxes, the letter keyboard and the live result grid.

use super::app::{App, InputMode, MessageStyle, QWERTY_ROWS};
use crate::core::{LetterState, WORD_LENGTH};
use crate::output::formatters::{letters_or_dash, results_heading, word_grid};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Width of one word cell in the result grid, including the gap
const CELL_WIDTH: u16 = 7;

/// How-to text for the help panel, ending in a worked example
pub const HELP_LINES: [&str; 14] = [
    "1. Type known letters into their boxes. Use ? or Space for unknown ones.",
    "   Second letter O and last letter Y is ?o??y.",
    "2. TAB to the keyboard. Tap a gray letter once to exclude it.",
    "3. Tap a yellow letter twice to include it anywhere in the word.",
    "4. Matching words update as you type. Refine until the list is short.",
    "",
    "Tip: start with vowel-heavy words like ADIEU or AROSE.",
    "",
    "Example:",
    "  ADIEU  A yellow, E green in box 4, D I U gray",
    "  STONE  S T O N gray",
    "  Pattern ???e?   Excluded DIUSTON   Included A",
    "",
    "F1 or Esc closes this panel.",
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let keyboard_height = if app.keyboard_expanded { 7 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(5),               // Pattern boxes
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Min(6),                  // Results + messages
            Constraint::Length(3),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_pattern(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[3]);

    if app.show_help {
        render_help(f, main_chunks[0]);
    } else {
        render_results(f, app, main_chunks[0]);
    }
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE HELPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_pattern(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Pattern;
    let outer = Block::default()
        .title(" Pattern ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_style(focused));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let boxes = Layout::horizontal([Constraint::Length(5); WORD_LENGTH])
        .flex(Flex::Center)
        .spacing(1)
        .split(inner);

    for (position, cell) in boxes.iter().enumerate() {
        let letter = app.board.pattern().slot(position);
        let text = letter.map_or_else(String::new, |byte| {
            char::from(byte.to_ascii_uppercase()).to_string()
        });
        let selected = focused && position == app.selected_slot;

        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else if letter.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let slot = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if selected {
                        BorderType::Thick
                    } else {
                        BorderType::Plain
                    })
                    .border_style(border_style),
            );
        f.render_widget(slot, *cell);
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Keyboard;
    let constraints = app.board.constraints();
    let title = format!(
        " Letters | Excluded ({}) Included ({}) ",
        constraints.excluded.len(),
        constraints.included.len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_style(focused));

    if !app.keyboard_expanded {
        let summary = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Excluded: {}  ", letters_or_dash(constraints.excluded)),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("Included: {}", letters_or_dash(constraints.included)),
                Style::default().fg(Color::Green),
            ),
        ]))
        .block(block);
        f.render_widget(summary, area);
        return;
    }

    let mut lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|letter| key_span(app, letter))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled(" ■ ", Style::default().fg(Color::Red)),
        Span::raw("excluded  "),
        Span::styled(" ■ ", Style::default().fg(Color::Green)),
        Span::raw("included  "),
        Span::styled(
            " ■ ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::raw("pinned"),
    ]));

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(keyboard, area);
}

fn key_span(app: &App, letter: u8) -> Span<'static> {
    let label = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    let mut style = match app.board.state(letter) {
        LetterState::Neutral => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Excluded => Style::default().fg(Color::Gray).bg(Color::Red),
        LetterState::Included => Style::default().fg(Color::Black).bg(Color::Green),
    };
    if app.board.is_pinned(letter) {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    Span::styled(label, style)
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", results_heading(&app.results)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Green));

    let content = if app.nothing_entered() {
        vec![Line::styled(
            "Enter a word pattern to see possible matches",
            Style::default().fg(Color::DarkGray),
        )]
    } else if app.results.total == 0 {
        vec![Line::styled(
            "No words found matching your criteria",
            Style::default().fg(Color::Yellow),
        )]
    } else {
        let columns = usize::from((area.width.saturating_sub(2) / CELL_WIDTH).max(1));
        let mut lines: Vec<Line> = word_grid(app.results.texts(), columns)
            .into_iter()
            .map(Line::from)
            .collect();
        if app.results.is_truncated() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!(
                    "Showing first {} results. Refine your search for fewer matches.",
                    app.results.words.len()
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        lines
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP_LINES.iter().map(|&line| Line::from(line)).collect();
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" How to use ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Pattern => "Mode: Pattern",
        InputMode::Keyboard => "Mode: Keyboard",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let dictionary_text = format!("Dictionary: {}", app.engine.dictionary().len());
    let dictionary = Paragraph::new(dictionary_text).alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Pattern => {
            "a-z: Fill | ?/Space: Blank | ←→: Move | TAB: Keyboard | ^R: Clear | F1: Help | Esc: Quit"
        }
        InputMode::Keyboard => "a-z: Cycle letter | TAB: Pattern | ^K: Hide | ^R: Clear | F1: Help | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
