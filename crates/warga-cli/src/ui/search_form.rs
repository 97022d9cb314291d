//! Search form — the entry screen.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, SEARCH_FIELDS};

/// Render the centred search form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let form = centred(area, 46, (SEARCH_FIELDS.len() + 6) as u16);

  let block = Block::default()
    .title(" Pencarian Data Warga ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(form);
  f.render_widget(block, form);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(SEARCH_FIELDS.len() as u16), // field picker
      Constraint::Length(1),                          // spacer
      Constraint::Length(1),                          // term input
      Constraint::Min(0),
    ])
    .split(inner);

  // Field picker: one row per mode, cursor on the selected one.
  let field_lines: Vec<Line> = SEARCH_FIELDS
    .iter()
    .enumerate()
    .map(|(i, (_, label))| {
      if i == app.field_idx {
        Line::from(vec![
          Span::styled("▸ ", Style::default().fg(Color::Cyan)),
          Span::styled(
            label.to_string(),
            Style::default()
              .fg(Color::Cyan)
              .add_modifier(Modifier::BOLD),
          ),
        ])
      } else {
        Line::from(vec![Span::raw("  "), Span::raw(label.to_string())])
      }
    })
    .collect();
  f.render_widget(Paragraph::new(field_lines), rows[0]);

  // Term input with a block cursor.
  let input = Line::from(vec![
    Span::styled(
      "Kata kunci: ",
      Style::default().fg(Color::DarkGray),
    ),
    Span::raw(app.term.clone()),
    Span::styled("█", Style::default().fg(Color::Cyan)),
  ]);
  f.render_widget(Paragraph::new(input), rows[2]);
}

/// A `width`×`height` rect centred inside `area`, clamped to it.
fn centred(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
