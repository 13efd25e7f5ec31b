use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use wordbook_config::ui::UiConfig;
use wordbook_types::EntryView;

use crate::state::{Focus, ResultView, UiState};

pub fn render(frame: &mut Frame, state: &UiState, config: &UiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_input(frame, chunks[0], state);
    render_results(frame, chunks[1], state, config);
    render_hints(frame, chunks[2], state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &UiState) {
    let style = if state.searching() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let title = if state.searching() {
        "Search (looking up…)"
    } else {
        "Search"
    };

    let input = Paragraph::new(state.input.as_str())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if state.focus == Focus::Input && !state.searching() {
        frame.set_cursor_position((area.x + 1 + state.input.len() as u16, area.y + 1));
    }
}

fn render_results(frame: &mut Frame, area: Rect, state: &UiState, config: &UiConfig) {
    let lines = match &state.view {
        ResultView::Empty => vec![Line::from(Span::styled(
            "Type a word and press Enter",
            Style::default().fg(Color::DarkGray),
        ))],
        ResultView::Loading { term } => vec![Line::from(format!("Looking up \"{term}\"…"))],
        ResultView::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        ResultView::Entry(entry) => entry_lines(entry, state, config),
    };

    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(results, area);
}

fn entry_lines<'a>(entry: &'a EntryView, state: &UiState, config: &UiConfig) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(
        entry.word.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(phonetic) = &entry.phonetic {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            phonetic.as_str(),
            Style::default().fg(Color::Cyan),
        ));
    }
    if entry.audio_url.is_some() {
        header.push(Span::raw("  "));
        header.push(Span::styled("♪", Style::default().fg(Color::Green)));
    }
    lines.push(Line::from(header));
    lines.push(Line::default());

    // Chip indices run across all meanings in display order, matching
    // EntryView::synonym_chips.
    let selected_chip = state.chips().get(state.chip_index).copied();

    for meaning in &entry.meanings {
        lines.push(Line::from(Span::styled(
            meaning.part_of_speech.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));

        for (i, definition) in meaning
            .definitions
            .iter()
            .take(config.max_definitions)
            .enumerate()
        {
            lines.push(Line::from(format!("  {}. {}", i + 1, definition.definition)));
            if let Some(example) = &definition.example {
                lines.push(Line::from(Span::styled(
                    format!("     e.g. {example}"),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }

        if !meaning.synonyms.is_empty() {
            let mut spans = vec![Span::styled(
                "  synonyms: ",
                Style::default().fg(Color::DarkGray),
            )];
            for synonym in meaning.synonyms.iter().take(config.max_synonyms) {
                let selected = state.focus == Focus::Chips
                    && selected_chip.is_some_and(|c| c.eq_ignore_ascii_case(synonym));
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                spans.push(Span::styled(format!(" {synonym} "), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
    }

    if let Some(source) = &entry.source_url {
        lines.push(Line::from(vec![
            Span::styled("source: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                source.as_str(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    lines
}

fn render_hints(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut hints = vec!["Enter search", "Tab synonyms"];
    if state.audio_url().is_some() {
        hints.push("Ctrl-P play");
    }
    if state.source_url().is_some() {
        hints.push("Ctrl-O source");
    }
    hints.push("↑/↓ scroll");
    hints.push("Esc quit");

    let hints = Paragraph::new(Line::from(Span::styled(
        hints.join("  ·  "),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, area);
}
