use super::steps::{step_view, FieldView};
use crate::application::{App, AppMode, Screen};
use crate::domain::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.screen {
        Screen::Signup => render_signup(f, app, chunks[1]),
        Screen::Passengers => render_passengers(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.screen {
        Screen::Signup => 0,
        Screen::Passengers => 1,
    };
    let tabs = Tabs::new(vec!["Signup", "Passengers"])
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .divider("|");
    f.render_widget(tabs, area);
}

fn render_signup(f: &mut Frame, app: &App, area: Rect) {
    let wizard = &app.wizard;
    let notice_height = if wizard.submit_error().is_some() || wizard.is_submitted() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(notice_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_stepper(f, app, chunks[0]);

    if wizard.is_submitted() {
        let done = Paragraph::new("Thank you! Your signup has been submitted.")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Green));
        f.render_widget(done, chunks[1]);
    } else if let Some(message) = wizard.submit_error() {
        let notice = Paragraph::new(message.to_string())
            .block(Block::default().borders(Borders::ALL).title("Submission failed"))
            .style(Style::default().fg(Color::Red));
        f.render_widget(notice, chunks[1]);
    }

    let views = step_view(wizard, app.focused_field());
    match wizard.step() {
        Step::Review => render_review(f, &views, chunks[2]),
        _ => render_inputs(f, &views, chunks[2]),
    }

    render_buttons(f, app, chunks[3]);
}

fn render_stepper(f: &mut Frame, app: &App, area: Rect) {
    let active = app.wizard.step();
    let mut spans = Vec::new();
    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  ──  "));
        }
        let (marker, style) = if step.index() < active.index() || app.wizard.is_submitted() {
            ("✓", Style::default().fg(Color::Green))
        } else if *step == active {
            ("●", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{} {}", marker, step.label()), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_inputs(f: &mut Frame, views: &[FieldView], area: Rect) {
    let constraints: Vec<Constraint> = views.iter().map(|_| Constraint::Length(4)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (view, row) in views.iter().zip(rows.iter()) {
        let border_style = match (&view.error, view.focused) {
            (Some(_), _) => Style::default().fg(Color::Red),
            (None, true) => Style::default().fg(Color::Yellow),
            (None, false) => Style::default(),
        };
        let mut value = view.display.clone();
        if view.focused {
            value.push('▏');
        }
        let mut lines = vec![Line::from(value)];
        if let Some(error) = &view.error {
            lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
        }
        let input = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(view.label),
        );
        f.render_widget(input, *row);
    }
}

fn render_review(f: &mut Frame, views: &[FieldView], area: Rect) {
    let rows: Vec<Row> = views
        .iter()
        .map(|view| {
            let value_style = if view.error.is_some() {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            let value = match &view.error {
                Some(error) => format!("{}  ({})", view.display, error),
                None => view.display.clone(),
            };
            Row::new(vec![
                Cell::from(view.label).style(Style::default().fg(Color::Yellow)),
                Cell::from(value).style(value_style),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(0)])
        .block(Block::default().borders(Borders::ALL).title("Review"))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let back_style = if app.wizard.can_go_back() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let advance_style = if app.wizard.is_submitted() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    };
    let buttons = Line::from(vec![
        Span::styled("[ Back ]", back_style),
        Span::raw("  "),
        Span::styled(format!("[ {} ]", app.wizard.advance_label()), advance_style),
    ]);
    f.render_widget(Paragraph::new(buttons), area);
}

fn render_passengers(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let table_state = &app.passengers;
    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().fg(Color::Yellow)),
        Cell::from("Trips").style(Style::default().fg(Color::Yellow)),
    ])
    .height(1);

    let rows: Vec<Row> = table_state
        .items()
        .iter()
        .skip(app.table_scroll)
        .map(|p| Row::new(vec![Cell::from(p.name.clone()), Cell::from(p.trips.to_string())]))
        .collect();

    let title = if table_state.is_loading() { "Passengers (loading…)" } else { "Passengers" };
    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(10)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);
    f.render_widget(table, chunks[0]);

    let mut footer = vec![
        Span::raw(format!("Rows per page: {}   ", table_state.rows_per_page())),
        Span::raw(table_state.label()),
    ];
    if let Some(error) = table_state.last_error() {
        footer.push(Span::raw("   "));
        footer.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    }
    f.render_widget(Paragraph::new(Line::from(footer)), chunks[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                match app.screen {
                    Screen::Signup => "Type to edit | ↑↓/Tab: field | Enter: next/submit | Esc: back | F2: passengers | F1: help | Ctrl+C: quit".to_string(),
                    Screen::Passengers => "←→/hl: page | +/-: rows per page | r: refresh | F2: signup | F1: help | q: quit".to_string(),
                }
            }
        }
    };

    let status = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tsform Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

pub const HELP_TEXT: &str = r#"TSFORM HELP

=== SIGNUP ===
The signup wizard has three steps: Account Details, Personal Info,
and Review and Submit.

Typing          Edits the highlighted field
Backspace       Deletes the last character
↑↓ / Tab        Move between fields of the current step
Enter           Next step (Submit on the last step)
Esc             Previous step

Moving forward checks the fields of the current and earlier steps.
Errors appear under a field once you have edited it or tried to move on.

=== RULES ===
Email           Required, must look like name@host.tld
Password        At least 8 characters
Confirm         At least 8 characters, must equal Password
First/Last name Required
Phone/Residence Optional

=== PASSENGERS ===
← → / h l       Previous / next page
+ -             Cycle rows per page
j k             Scroll rows
r               Reload the current page

Pages load in the background. Only the most recent request is shown;
a failed load keeps the previous rows and shows the error below the table.

=== GENERAL ===
F2              Switch between Signup and Passengers
F1              Show this help
Ctrl+C          Quit (q also quits on the Passengers screen)

Logs are written to tsform.log (see TSFORM_LOG_FILE)."#;
