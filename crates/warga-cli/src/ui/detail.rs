//! Record detail pane with the family section.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use warga_core::{
  date,
  photo::{PhotoSize, photo_url},
  record::Record,
};

use crate::app::App;

/// What a masked parent name renders as until its toggle reveals it.
const MASK: &str = "••••••••";

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the detail pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(record) = &app.detail else { return };

  let block = Block::default()
    .title(format!(" {} ", record.full_name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();

  lines.push(field("NIK", record.id.to_string()));
  lines.push(field("No. KK", record.household_id.to_string()));
  lines.push(field("Nama Lengkap", record.full_name.clone()));
  lines.push(field("Jenis Kelamin", record.sex.as_str().to_string()));
  lines.push(field("Tempat/Tgl Lahir", birth_line(record)));

  lines.push(masked_field("Nama Ibu", record.mother_name.as_deref(), app.show_mother, 'm'));
  lines.push(masked_field("Nama Ayah", record.father_name.as_deref(), app.show_father, 'f'));

  lines.push(field(
    "Status Keluarga",
    record.family_role.clone().unwrap_or_default(),
  ));
  lines.push(field(
    "Pekerjaan",
    record.occupation.clone().unwrap_or_default(),
  ));
  lines.push(field(
    "Alamat",
    record.address.clone().unwrap_or_default(),
  ));
  lines.push(field(
    "Kecamatan",
    record.district.clone().unwrap_or_default(),
  ));
  lines.push(field(
    "Kelurahan",
    record.sub_district.clone().unwrap_or_default(),
  ));
  lines.push(field(
    "Foto",
    photo_url(
      &app.image_base,
      record.photo_reference.as_deref(),
      record.sex,
      PhotoSize::Full,
    ),
  ));

  // Family section.
  if !app.family.is_empty() {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
      "Anggota Keluarga",
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )]));
    for member in &app.family {
      let role = member.family_role.clone().unwrap_or_default();
      let birth = member.birth_date.map(date::short).unwrap_or_default();
      lines.push(Line::from(vec![
        Span::raw(format!("  {:<28}", member.full_name)),
        Span::styled(
          format!("{role:<18}{birth}"),
          Style::default().fg(Color::DarkGray),
        ),
      ]));
    }
  }

  let scroll_offset = app.detail_scroll as u16;
  let para = Paragraph::new(lines).scroll((scroll_offset, 0));
  f.render_widget(para, inner);
}

// ─── Line helpers ─────────────────────────────────────────────────────────────

fn field(label: &str, value: String) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label:<18}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(value),
  ])
}

/// A parent-name row. Renders the mask and a reveal hint until toggled.
fn masked_field(
  label: &str,
  value: Option<&str>,
  revealed: bool,
  toggle_key: char,
) -> Line<'static> {
  let value = value.unwrap_or_default();
  if revealed {
    return field(label, value.to_string());
  }
  Line::from(vec![
    Span::styled(
      format!("{label:<18}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(MASK),
    Span::styled(
      format!("  [{toggle_key}] tampilkan"),
      Style::default().fg(Color::DarkGray),
    ),
  ])
}

/// `BOGOR, Kamis, 15 Maret 1990` — place, then the long-form date.
fn birth_line(record: &Record) -> String {
  match record.birth_date {
    Some(d) => format!("{}, {}", record.birth_place, date::long(d)),
    None => record.birth_place.clone(),
  }
}
