use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, List, ListItem, Paragraph, Row, Table};
use crate::tui::app::{App, InputMode};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let body = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let qualifier_rows = qualifier_panel_height(app.standings.qualifiers.len());
    let side = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(qualifier_rows),
    ])
    .split(body[1]);

    render_title(frame, chunks[0], app);
    render_finish_order(frame, body[0], app);
    render_team_scores(frame, side[0], app);
    render_qualifiers(frame, side[1], app);
    render_status_bar(frame, chunks[2], app);

    match app.input_mode {
        InputMode::MoveInput => render_move_popup(frame, app),
        InputMode::Help => render_help_popup(frame),
        InputMode::Normal => {}
    }
}

/// Rows for the qualifiers panel: one per qualifier (at least one) plus borders.
fn qualifier_panel_height(count: usize) -> u16 {
    u16::try_from(count.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Cross Country Scoring",
        Style::default().fg(theme::TITLE_COLOR).bold(),
    )];

    if app.meet.is_modified() {
        spans.push(Span::styled("  (reordered)", Style::default().fg(theme::MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_finish_order(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered().title(" Finish Order ");

    if app.meet.is_empty() {
        let empty_msg = Paragraph::new("No finishers loaded")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty_msg, area);
        return;
    }

    let grabbed = if app.grabbed { app.selected() } else { None };

    let rows: Vec<Row> = app
        .standings
        .finishers
        .iter()
        .enumerate()
        .map(|(idx, finisher)| {
            let team = match app.standings.team_position(idx) {
                Some(pos) => format!("{} #{}", finisher.team, pos),
                None => finisher.team.clone(),
            };

            let row_style = match theme::team_style(&app.config, &finisher.team) {
                Some(style) => style,
                None if idx % 2 == 1 => Style::default().bg(theme::ROW_ALT_BG),
                None => Style::default(),
            };
            let row_style = if grabbed == Some(idx) {
                row_style.fg(theme::GRABBED_COLOR).bold()
            } else {
                row_style
            };

            Row::new(vec![
                Cell::from(format!("{}.", idx + 1)),
                Cell::from(finisher.name.clone()),
                Cell::from(team),
                Cell::from(finisher.time.clone()),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),  // Place: "999."
        Constraint::Fill(2),    // Name
        Constraint::Fill(2),    // Team + team position
        Constraint::Length(9),  // Time
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Name", "Team", "Time"])
                .style(theme::HEADER_STYLE)
                .bottom_margin(1),
        )
        .block(block)
        .row_highlight_style(theme::ROW_SELECTED);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn join_places(places: &[usize]) -> String {
    places
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_team_scores(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Team Scores ");
    let qualifying = app.meet.scoring_config().qualifying_teams();

    let rows: Vec<Row> = app
        .standings
        .team_scores
        .iter()
        .enumerate()
        .map(|(rank, score)| {
            let style = theme::team_style(&app.config, &score.team).unwrap_or_default();
            let mark = if rank < qualifying { "*" } else { " " };
            Row::new(vec![
                Cell::from(mark).style(Style::default().fg(theme::QUALIFY_MARK)),
                Cell::from(score.team.clone()),
                Cell::from(format!("{:>4}", score.total)),
                Cell::from(join_places(&score.scoring)),
                Cell::from(join_places(&score.displacers)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Fill(2),
        Constraint::Length(5),
        Constraint::Fill(3),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "Team", "Total", "Places", "Displacers"])
                .style(theme::HEADER_STYLE),
        )
        .block(block);

    frame.render_widget(table, area);
}

fn render_qualifiers(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Individual Qualifiers ");

    let items: Vec<ListItem> = if app.standings.qualifiers.is_empty() {
        vec![ListItem::new(Span::styled("None", Style::default().fg(theme::MUTED)))]
    } else {
        app.standings
            .qualifiers
            .iter()
            .enumerate()
            .map(|(i, q)| {
                ListItem::new(format!(
                    "{}. {} ({}) - Place {}",
                    i + 1,
                    q.finisher.name,
                    q.finisher.team,
                    q.place
                ))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Invalid") {
            theme::FLASH_ERROR
        } else if msg.starts_with("Placed:") || msg.starts_with("Reset") || msg.starts_with("Loaded") {
            theme::FLASH_SUCCESS
        } else {
            Color::White
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let count = format!("{} runners", app.meet.len());

        let hints: Vec<(&str, &str)> = if app.grabbed {
            vec![("j/k", ":move "), ("Space", ":drop "), ("?", ":help")]
        } else {
            vec![
                ("j/k", ":nav "),
                ("Space", ":grab "),
                ("m", ":move to "),
                ("R", ":reset "),
                ("L", ":reload "),
                ("?", ":help "),
                ("q", ":quit"),
            ]
        };

        let mut spans = vec![
            Span::styled(count, Style::default().fg(theme::MUTED)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme::STATUS_KEY_COLOR)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area
    );
}

/// Render the move-to-place input popup
fn render_move_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(40, 4, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Move To Place ");
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Input line
        Constraint::Length(1),  // Help text
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(format!("{}|", app.move_input)), chunks[0]);

    let help = Paragraph::new(format!("Enter: confirm | Esc: cancel | 1-{}", app.meet.len()))
        .style(Style::default().fg(theme::MUTED));
    frame.render_widget(help, chunks[1]);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(50, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let entry = |keys: &'static str, action: &'static str| {
        Line::from(vec![Span::styled(keys, key_style), Span::raw(action)])
    };

    let help_lines = vec![
        entry("j / Down      ", "Next runner (moves runner if grabbed)"),
        entry("k / Up        ", "Previous runner (moves runner if grabbed)"),
        entry("Space / Enter ", "Grab / drop runner"),
        entry("J / K         ", "Move runner down / up one place"),
        entry("m             ", "Move runner to a place"),
        entry("R             ", "Reset to loaded order"),
        entry("L             ", "Reload results file"),
        entry("?             ", "Show/hide this help"),
        entry("q / Ctrl-c    ", "Quit"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(theme::MUTED))),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamped() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_qualifier_panel_height() {
        assert_eq!(qualifier_panel_height(0), 3);
        assert_eq!(qualifier_panel_height(5), 7);
        assert_eq!(qualifier_panel_height(70_000), u16::MAX);
        assert_eq!(qualifier_panel_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_join_places() {
        assert_eq!(join_places(&[1, 3, 7]), "1, 3, 7");
        assert_eq!(join_places(&[]), "");
    }
}
