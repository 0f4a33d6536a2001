//! The UI renders the application state into something visible and scrollable.
//!
//! The draw function dispatches based on the current view. The list view shows one line per
//! section with its category glyph; the detail view lays out the section's blocks with bold spans
//! and lists its media underneath.

use crate::app_state::{AppState, FileMode, View};
use crate::blocks::{self, split_blocks, Inline};
use crate::render::plain_text;
use crate::section::Section;
use crate::video::embed_url;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match app.current_view {
        View::FileList => draw_file_list(f, app, chunks[0]),
        View::List => draw_list(f, app, chunks[0]),
        View::Detail => draw_detail(f, app, chunks[0]),
    }

    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        help_text(app).to_string()
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

fn help_text(app: &AppState) -> &'static str {
    match (&app.current_view, &app.file_mode) {
        (View::FileList, _) => "↑/↓: Navigate | Enter: Open | q: Quit",
        (View::List, FileMode::Multi) => {
            "↑/↓: Navigate | Home/End: First/Last | Enter: Read | q/Esc: Files"
        }
        (View::List, FileMode::Single) => {
            "↑/↓: Navigate | Home/End: First/Last | Enter: Read | q: Quit"
        }
        (View::Detail, _) => "↑/↓/PgUp/PgDn: Scroll | ←/→: Prev/Next section | Esc: Back",
    }
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn draw_file_list(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .files
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let name = path.display().to_string();
            let line = Line::from(Span::styled(
                format!("📄 {name}"),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ));
            ListItem::new(line).style(selected_style(i == app.current_file_index))
        })
        .collect();

    let title = format!("Files ({})", app.files.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_list(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let mut spans = vec![
                Span::raw(format!("{} ", section.icon.glyph())),
                Span::raw(section.title.clone()),
            ];
            if section.has_media() {
                spans.push(Span::styled(
                    format!(
                        "  ({} videos, {} images)",
                        section.videos.len(),
                        section.images.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans)).style(selected_style(i == app.current_section_index))
        })
        .collect();

    let title = match app.files.get(app.current_file_index) {
        Some(path) => format!("Sections: {}", path.display()),
        None => "Sections".to_string(),
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_detail(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(section) = app.current_section() else {
        return;
    };

    // Keep prose readable on wide terminals.
    let width = u16::try_from(app.wrap_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(width), Constraint::Min(0)])
        .split(area);

    let title = format!(
        "{} {} ({}/{})",
        section.icon.glyph(),
        section.title,
        app.current_section_index + 1,
        app.sections.len()
    );
    let paragraph = Paragraph::new(detail_lines(section))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, columns[0]);
}

#[must_use]
/// Lays out a section's blocks and media as styled terminal lines.
pub fn detail_lines(section: &Section) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in split_blocks(&section.body) {
        match block {
            blocks::Block::Paragraph { inlines } => lines.extend(inline_lines(&inlines, "")),
            blocks::Block::BoldList { lead, items } | blocks::Block::DotList { lead, items } => {
                if let Some(lead) = lead {
                    lines.extend(inline_lines(&lead, ""));
                }
                for item in items {
                    lines.extend(inline_lines(&item, "  • "));
                }
            }
        }
        lines.push(Line::default());
    }

    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    if !section.videos.is_empty() {
        lines.push(Line::from(Span::styled("Videos", heading)));
        for video in &section.videos {
            lines.push(Line::from(format!("  ▶ {}", embed_url(video))));
        }
        lines.push(Line::default());
    }

    if !section.images.is_empty() {
        lines.push(Line::from(Span::styled("Gallery", heading)));
        for image in &section.images {
            lines.push(Line::from(format!("  ▣ {image}")));
        }
        lines.push(Line::default());
    }

    while lines.last().is_some_and(|line| line.spans.is_empty()) {
        lines.pop();
    }
    lines
}

/// Turns inline spans into lines, breaking on embedded newlines.
fn inline_lines(inlines: &[Inline], bullet: &str) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    let mut spans = vec![Span::raw(bullet.to_string())];

    for inline in inlines {
        let (text, style) = match inline {
            Inline::Text(text) => (plain_text(text), Style::default()),
            Inline::Strong(text) => (plain_text(text), bold),
        };
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            spans.push(Span::styled(first.to_string(), style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::styled(part.to_string(), style));
        }
    }

    spans.retain(|span| !span.content.is_empty());
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
