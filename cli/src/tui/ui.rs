use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table},
    Frame,
};
use tallyboard_core::{Color as SlotColor, SortOrder};

use crate::tui::app::{App, InputMode, GRID_COLS, GRID_ROWS};

fn slot_color(color: SlotColor) -> Color {
    match color {
        SlotColor::Red => Color::Red,
        SlotColor::Green => Color::Green,
        SlotColor::Blue => Color::Blue,
    }
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    // Left: the 50-slot grid. Right: today's records.
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_chunks[1]);

    draw_grid(f, app, content_chunks[0]);
    draw_records(f, app, content_chunks[1]);

    let help = match app.input_mode {
        InputMode::Normal => "hjkl: Move | Enter: Add | d: Delete entry | c: Clear | Tab: Sort | q: Quit",
        InputMode::EnteringAmount => "Enter: Confirm | Esc: Cancel",
        InputMode::ConfirmDelete => "j/k: Select entry | Enter: Delete | Esc: Cancel",
        InputMode::ConfirmClear => "y/Enter: Clear everything | n/Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);

    match app.input_mode {
        InputMode::EnteringAmount => draw_amount_modal(f, app, size),
        InputMode::ConfirmDelete => draw_delete_modal(f, app, size),
        InputMode::ConfirmClear => draw_clear_modal(f, size),
        InputMode::Normal => {}
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let projection = app.projection();
    let title = Line::from(vec![
        Span::styled(
            app.service.day_label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("¥{:.2}", projection.grand_total),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid_block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = grid_block.inner(area);
    f.render_widget(grid_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS as usize])
        .split(inner);

    for row in 0..GRID_ROWS {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS as usize])
            .split(rows[row as usize]);

        for col in 0..GRID_COLS {
            let slot = row * GRID_COLS + col + 1;
            draw_cell(f, app, slot, cells[col as usize]);
        }
    }
}

fn draw_cell(f: &mut Frame, app: &App, slot: u8, area: Rect) {
    let color = slot_color(SlotColor::classify(slot));
    let total = app.service.ledger().slot_total(slot);
    let selected = slot == app.selected;

    let mut lines = vec![Line::from(Span::styled(
        slot.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if total > 0.0 {
        lines.push(Line::from(Span::styled(
            format!("¥{:.2}", total),
            Style::default().fg(color),
        )));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if selected { Color::White } else { Color::DarkGray }));
    if selected {
        block = block.border_type(BorderType::Thick);
    }

    let mut cell = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    if selected {
        cell = cell.style(Style::default().bg(Color::DarkGray));
    }
    f.render_widget(cell, area);
}

fn draw_records(f: &mut Frame, app: &App, area: Rect) {
    let projection = app.projection();
    let title = match app.sort_order {
        SortOrder::SlotAscending => " Records (by slot) ",
        SortOrder::TotalDescending => " Records (by total) ",
    };

    if projection.records.is_empty() {
        let empty = Paragraph::new("No amounts recorded today.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = projection
        .records
        .iter()
        .map(|record| {
            let color = slot_color(record.color);
            let entries = record
                .amounts
                .iter()
                .map(|a| format!("{:.2}", a))
                .collect::<Vec<_>>()
                .join(" + ");
            Row::new(vec![
                Span::styled(record.slot.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(record.color.name(), Style::default().fg(color)),
                Span::raw(entries),
                Span::styled(format!("¥{:.2}", record.total), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),  // Slot
            Constraint::Length(6),  // Color
            Constraint::Min(12),    // Entries
            Constraint::Length(10), // Total
        ],
    )
    .header(Row::new(vec!["No", "Color", "Entries", "Total"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(title)
            .title_bottom(Line::from(format!(
                " {} slot(s) · ¥{:.2} ",
                projection.active_slots, projection.grand_total
            )))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(table, area);
}

fn draw_amount_modal(f: &mut Frame, app: &App, size: Rect) {
    let area = centered_rect(44, 7, size);
    f.render_widget(Clear, area);

    let valid = app.input_is_valid();
    let hint = if valid {
        Span::styled("Enter to confirm", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "enter a positive amount",
            Style::default().fg(Color::DarkGray),
        )
    };

    let body = vec![
        Line::from(vec![
            Span::styled("¥ ", Style::default().fg(Color::Yellow)),
            Span::raw(app.input.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        Line::from(hint),
    ];

    let modal = Paragraph::new(body).block(
        Block::default()
            .title(format!(" Amount — Slot {} ", app.selected))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(modal, area);
}

fn draw_delete_modal(f: &mut Frame, app: &App, size: Rect) {
    let entries = app.selected_entries();
    let height = (entries.len() as u16 + 4).min(size.height);
    let area = centered_rect(40, height, size);
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (index, amount) in entries.iter().enumerate() {
        let marker = if index == app.entry_index { "> " } else { "  " };
        let style = if index == app.entry_index {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}. ¥{:.2}", marker, index + 1, amount),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter deletes the selected entry",
        Style::default().fg(Color::DarkGray),
    )));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Delete entry — Slot {} ", app.selected))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(modal, area);
}

fn draw_clear_modal(f: &mut Frame, size: Rect) {
    let area = centered_rect(46, 6, size);
    f.render_widget(Clear, area);

    let body = vec![
        Line::from("Clear every amount recorded today?"),
        Line::from(""),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(Color::Red),
        )),
    ];

    let modal = Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .title(" Confirm clear ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(modal, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
