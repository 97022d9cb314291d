//! Search result list with the pager line.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use warga_core::{date, query::SearchField, record::Record};

use crate::app::App;

/// Render the result list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = format!(" Hasil Pencarian ({}) ", app.total);

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(0),    // list
      Constraint::Length(1), // pager
    ])
    .split(inner);

  let field = app.active_query.as_ref().map(|(f, _)| *f);

  let items: Vec<ListItem> = app
    .results
    .iter()
    .enumerate()
    .map(|(i, record)| {
      let style = if i == app.list_cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      let context = context_line(record, field);
      ListItem::new(Line::from(vec![
        Span::styled(format!("{:<28}", record.full_name), style),
        Span::styled(context, style.fg(Color::DarkGray)),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(if app.results.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    rows[0],
    &mut state,
  );

  // Pager line.
  let pager = if app.total_pages > 1 {
    format!("Halaman {} / {}", app.page, app.total_pages)
  } else {
    String::new()
  };
  f.render_widget(
    Paragraph::new(pager).style(Style::default().fg(Color::DarkGray)),
    rows[1],
  );
}

/// The secondary column next to each name. What it shows depends on the field
/// searched: a NIK search shows the household id, a household search shows
/// the role within that household, and so on.
fn context_line(record: &Record, field: Option<SearchField>) -> String {
  let birth = || {
    record
      .birth_date
      .map(date::short)
      .unwrap_or_default()
  };

  match field {
    Some(SearchField::Id) => record.household_id.to_string(),
    Some(SearchField::HouseholdId) => {
      record.family_role.clone().unwrap_or_default()
    }
    Some(SearchField::District) => {
      record.sub_district.clone().unwrap_or_default()
    }
    Some(SearchField::BirthMonth) | Some(SearchField::BirthYear) => {
      format!("{}  {}", birth(), record.birth_place)
    }
    // Name search, or no active query at all.
    _ => format!("{}  {}", record.birth_place, birth()),
  }
}
