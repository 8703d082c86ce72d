//! Document layout: the reference rendered as terminal lines.
//!
//! The layout is built once per pane width from the content tables and is the
//! geometry every other component works against: each section's heading row
//! becomes its anchor, scroll requests target anchor rows, and the visibility
//! tracker reads section extents from here. Nothing in this module mutates
//! after construction.

use crate::content::{Method, NavGroup, Operation};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashMap;

/// Row at which a section's heading is rendered.
pub struct Anchor {
    /// Section id this anchor belongs to.
    pub id: String,
    /// Absolute row in the laid-out document.
    pub row: usize,
}

/// A section's vertical extent in absolute document rows.
///
/// A section runs from its own anchor to the next section's anchor (or the
/// end of the document). This is the observation input for the visibility
/// tracker.
pub struct SectionSpan<'a> {
    /// Section id.
    pub id: &'a str,
    /// First row of the section (its heading).
    pub start: usize,
    /// Row after the last row of the section.
    pub end: usize,
}

/// The rendered document at a fixed wrap width.
pub struct Layout {
    lines: Vec<Line<'static>>,
    anchors: Vec<Anchor>,
    rows: HashMap<String, usize>,
    width: usize,
}

impl Layout {
    /// Renders the content tables into lines, recording an anchor per section.
    ///
    /// Reading order is group by group: the group's menu entries, then its
    /// operations.
    #[must_use]
    pub fn build(groups: &[NavGroup], operations: &[Operation], width: usize) -> Self {
        let mut doc = Builder {
            lines: Vec::new(),
            anchors: Vec::new(),
            width: width.max(24),
        };

        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                doc.rule();
            }
            for e in &group.entries {
                doc.anchor(&e.id);
                doc.heading(&e.label);
                for para in &e.body {
                    doc.paragraph(para);
                }
            }
            for op in operations.iter().filter(|op| op.group_id == group.id) {
                doc.anchor(&op.id);
                doc.heading(&op.title);
                doc.endpoint(op.method, &op.path);
                doc.paragraph(&op.description);
                if let Some(req) = &op.request {
                    doc.code_block("Request", req);
                }
                if let Some(resp) = &op.response {
                    doc.code_block("Response", resp);
                }
            }
        }

        let rows = doc
            .anchors
            .iter()
            .map(|a| (a.id.clone(), a.row))
            .collect();
        Self {
            lines: doc.lines,
            anchors: doc.anchors,
            rows,
            width: doc.width,
        }
    }

    /// Total document height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Wrap width this layout was built for.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// All rendered lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Anchor row of a section, if the id is rendered at all.
    #[must_use]
    pub fn anchor_row(&self, id: &str) -> Option<usize> {
        self.rows.get(id).copied()
    }

    /// Whether a section id has a rendered anchor.
    #[must_use]
    pub fn has_anchor(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    /// Section extents in document order, each running to the next anchor.
    #[must_use]
    pub fn spans(&self) -> Vec<SectionSpan<'_>> {
        let mut spans = Vec::with_capacity(self.anchors.len());
        for (i, a) in self.anchors.iter().enumerate() {
            let end = self
                .anchors
                .get(i + 1)
                .map_or_else(|| self.height(), |next| next.row);
            spans.push(SectionSpan {
                id: &a.id,
                start: a.row,
                end,
            });
        }
        spans
    }
}

struct Builder {
    lines: Vec<Line<'static>>,
    anchors: Vec<Anchor>,
    width: usize,
}

impl Builder {
    fn anchor(&mut self, id: &str) {
        self.anchors.push(Anchor {
            id: id.to_string(),
            row: self.lines.len(),
        });
    }

    fn heading(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        self.lines.push(Line::default());
    }

    fn paragraph(&mut self, text: &str) {
        for wrapped in wrap(text, self.width) {
            self.lines.push(Line::from(wrapped));
        }
        self.lines.push(Line::default());
    }

    fn endpoint(&mut self, method: Method, path: &str) {
        let color = match method {
            Method::Get => Color::Cyan,
            Method::Post => Color::Green,
            Method::Delete => Color::Red,
            Method::Wss => Color::Blue,
        };
        self.lines.push(Line::from(vec![
            Span::styled(
                method.label().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(path.to_string()),
        ]));
        self.lines.push(Line::default());
    }

    fn code_block(&mut self, title: &str, code: &str) {
        self.lines.push(Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        for code_line in code.lines() {
            self.lines.push(Line::from(Span::styled(
                format!("  {code_line}"),
                Style::default().fg(Color::Gray),
            )));
        }
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        self.lines.push(Line::from(Span::styled(
            "─".repeat(self.width),
            Style::default().fg(Color::DarkGray),
        )));
        self.lines.push(Line::default());
    }
}

/// Greedy word wrap, collapsing runs of whitespace.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
