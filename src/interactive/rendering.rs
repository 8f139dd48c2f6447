//! TUI rendering with ratatui
//!
//! Layout for the live transcoder.

use super::app::{App, MessageStyle};
use crate::commands::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),     // Scheme list
            Constraint::Percentage(60), // Input and output
            Constraint::Min(20),        // History and messages
        ])
        .split(chunks[1]);

    render_schemes(f, app, main_chunks[0]);
    render_transcoder(f, app, main_chunks[1]);
    render_side_panel(f, app, main_chunks[2]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PUZZLE CODES - Live Transcoder")
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

fn render_schemes(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .schemes
        .iter()
        .map(|scheme| ListItem::new(scheme.to_string()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Schemes ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_transcoder(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let (input_title, output_title) = match app.mode {
        Mode::Encode => (" Plain text ", " Encoded "),
        Mode::Decode => (" Tokens ", " Decoded "),
    };

    let input = Paragraph::new(app.input.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(input_title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, chunks[0]);

    let output = match &app.error {
        Some(error) => Paragraph::new(Line::from(vec![
            Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ])),
        None => Paragraph::new(app.output.as_str()).style(Style::default().fg(Color::Green)),
    };
    let output = output.wrap(Wrap { trim: false }).block(
        Block::default()
            .title(output_title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(output, chunks[1]);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_history(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", entry.mode, entry.scheme),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(format!("  {}", entry.input)),
                Line::from(Span::styled(
                    format!("  {}", entry.output),
                    Style::default().fg(Color::Green),
                )),
            ])
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
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
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let options = Paragraph::new(format!(
        "sep {:?} | wsep {:?} | punct {}",
        app.options.sep,
        app.options.wsep,
        if app.options.keep_punctuation { "on" } else { "off" }
    ))
    .alignment(Alignment::Center);
    f.render_widget(options, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Flip | Up/Down: Scheme | Enter: Keep | ^U: Clear | ^P: Punct")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
