//! The UI renders the application state into the three-column browser.
//!
//! The left sidebar shows the grouped menu, the centre pane the scrolling
//! document, and (when the terminal is wide enough) the right rail an
//! "on this page" list. All three highlight from the same active-section
//! state; the sidebar maps operation sections to their group's overview
//! entry, the right rail highlights the exact id. The search overlay draws
//! on top of whatever the browser shows.

use crate::app_state::{AppState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Minimum terminal width at which the right rail is shown.
const WIDE_LAYOUT: u16 = 100;

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    draw_browse(f, app);
    if app.view == View::Search {
        draw_search(f, app);
    }
}

fn draw_browse(f: &mut Frame, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let wide = f.area().width >= WIDE_LAYOUT;
    let columns = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26),
                Constraint::Min(0),
                Constraint::Length(30),
            ])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(rows[0])
    };

    draw_menu(f, app, columns[0]);
    draw_document(f, app, columns[1]);
    if wide {
        draw_on_this_page(f, app, columns[2]);
    }
    draw_footer(f, app, rows[1]);
}

fn draw_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let highlighted = app.registry.menu_target(app.nav.active_id());

    let mut items: Vec<ListItem> = Vec::new();
    for group in app.registry.groups() {
        items.push(ListItem::new(Line::from(Span::styled(
            group.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))));
        for id in &group.section_ids {
            let Some(section) = app.registry.section(id) else {
                continue;
            };
            if !section.is_menu {
                continue;
            }
            let style = if section.id == highlighted {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            items.push(ListItem::new(format!("  {}", section.label)).style(style));
        }
        items.push(ListItem::new(""));
    }

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(list, area);
}

fn draw_document(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Reference");
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.ensure_layout(usize::from(inner.width));
    app.set_pane_height(usize::from(inner.height));

    let offset = u16::try_from(app.scroll.offset()).unwrap_or(u16::MAX);
    let text = Text::from(app.layout.lines().to_vec());
    f.render_widget(Paragraph::new(text).scroll((offset, 0)), inner);
}

fn draw_on_this_page(f: &mut Frame, app: &AppState, area: Rect) {
    let active = app.nav.active_id();

    let items: Vec<ListItem> = app
        .registry
        .sections()
        .iter()
        .map(|section| {
            let text = if section.is_menu {
                section.label.clone()
            } else {
                format!("  {}", section.label)
            };
            let mut style = if section.is_menu {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if section.id == active {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("On this page"));
    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(app.nav.fragment(), Style::default().fg(Color::Cyan)),
        Span::raw("  |  ↑/↓ Scroll | ←/→ Section | Ctrl+K Search | q Quit"),
    ]);
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn draw_search(f: &mut Frame, app: &AppState) {
    let area = overlay_rect(f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Search (Esc to close)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let prompt = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(app.query.clone()),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(prompt), parts[0]);

    let results = app.search_results();
    if results.is_empty() {
        let empty = Paragraph::new(format!("No results for \"{}\"", app.query))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, parts[1]);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let line = Line::from(vec![
                Span::raw(entry.label.clone()),
                Span::styled(
                    format!("  {}", entry.group_tag),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let style = if i == app.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();
    f.render_widget(List::new(items), parts[1]);
}

/// A centred modal rectangle sized for the search overlay.
fn overlay_rect(frame: Rect) -> Rect {
    let width = frame.width.saturating_sub(8).clamp(24, 64).min(frame.width);
    let height = frame.height.saturating_sub(4).clamp(6, 18).min(frame.height);
    let x = frame.x + (frame.width.saturating_sub(width)) / 2;
    let y = frame.y + frame.height.saturating_sub(height) / 4;
    Rect::new(x, y, width, height)
}
