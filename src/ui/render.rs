//! All drawing. One `draw` entry point, one function per screen.

use chrono::Local;
use ratatui::{prelude::*, widgets::*};

use crate::emar::{parse_dose_times, DoseKey, DoseStatus, RefusalReason};
use crate::models::{
    Client, ClientStatus, IncidentStatus, Severity, Staff, StaffStatus, VisitStatus, DISTRICTS,
};
use crate::store::View;
use crate::views::{ClientDetailTab, EmarMode, IncidentTab, RotaMode, StaffDetailTab};
use crate::wizard::client::care_needs_for;

use super::{App, InputMode};

pub mod colors {
    use ratatui::style::Color;

    pub const TEAL: Color = Color::Rgb(38, 166, 154);
    pub const DARK_TEAL: Color = Color::Rgb(0, 77, 64);
    pub const WHITE: Color = Color::Rgb(236, 239, 241);
    pub const SILVER: Color = Color::Rgb(144, 164, 174);
    pub const AMBER: Color = Color::Rgb(255, 179, 0);
    pub const RED: Color = Color::Rgb(229, 57, 53);
    pub const GREEN: Color = Color::Rgb(124, 179, 66);
    pub const BG_DARK: Color = Color::Rgb(13, 27, 30);
    pub const BG_PANEL: Color = Color::Rgb(23, 43, 48);
}

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    match app.state.current_view {
        View::Dashboard => draw_dashboard(frame, chunks[1], app),
        View::Rota => draw_rota(frame, chunks[1], app),
        View::Clients => draw_clients(frame, chunks[1], app),
        View::AddClient => draw_client_form(frame, chunks[1], app),
        View::Staff => draw_staff(frame, chunks[1], app),
        View::AddStaff => draw_staff_form(frame, chunks[1], app),
        View::Emar => draw_emar(frame, chunks[1], app),
        View::Timesheets => draw_timesheets(frame, chunks[1], app),
        View::Patches => draw_patches(frame, chunks[1], app),
        View::Reports => draw_reports(frame, chunks[1], app),
        View::Incidents => draw_incidents(frame, chunks[1], app),
        View::AddIncident => draw_incident_form(frame, chunks[1], app),
        View::Settings => draw_settings(frame, chunks[1]),
    }
    draw_footer(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::NAV
        .iter()
        .map(|view| Line::from(view.title()))
        .collect();
    let selected = View::NAV
        .iter()
        .position(|v| *v == app.state.current_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors::SILVER))
        .highlight_style(Style::default().fg(colors::AMBER).bold())
        .block(
            Block::default()
                .title(Span::styled(
                    " CAREBOARD ",
                    Style::default().fg(colors::WHITE).bg(colors::DARK_TEAL).bold(),
                ))
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::DARK_TEAL)),
        );
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match (app.input_mode, app.state.current_view) {
        (InputMode::Search, _) => "typing filters the list   [ENTER/ESC] done".to_string(),
        (InputMode::Notes, _) => "typing edits the dose note   [ENTER/ESC] done".to_string(),
        (InputMode::Districts, _) => {
            let numbered: Vec<String> = DISTRICTS
                .iter()
                .enumerate()
                .map(|(index, district)| format!("[{}] {district}", index + 1))
                .collect();
            format!("{}  [ENTER] done", numbered.join(" "))
        }
        (_, View::Clients) => {
            "[/] search  [d] districts  [a] add  [ENTER] open  [</>] detail tab  [ESC] clear"
                .to_string()
        }
        (_, View::Staff) => {
            "[/] search  [d] districts  [a] add  [ENTER] open  [</>] detail tab  [ESC] clear"
                .to_string()
        }
        (_, View::Rota) => "[m] board  [[/]] date  [UP/DOWN] move".to_string(),
        (_, View::Emar) => {
            "[ENTER] pick  [</>] dose  [a]dminister [s]kip [r]efuse  [n] note  [[/]] date  [d] districts  [h] history"
                .to_string()
        }
        (_, View::Incidents) => {
            "[t] tab  [n] new  [/] search  [v] severity  [s] status  [l] location  [b] reporter  [f/u] dates"
                .to_string()
        }
        (_, View::Patches) => "[d] districts  [UP/DOWN] move".to_string(),
        (_, View::Reports) => "[</>] report".to_string(),
        (_, View::AddClient) => {
            "[UP/DOWN] field  [^L] level  [^P] days  [^T] am/pm  [ENTER] save  [ESC] cancel"
                .to_string()
        }
        (_, View::AddStaff) => {
            "[UP/DOWN] field  [^T] transport  [^R] role  [^A/^E] shifts  [ENTER] save".to_string()
        }
        (_, View::AddIncident) => {
            "[UP/DOWN] field  [^T] type  [^V] severity  [^N] pick person  [ENTER] save".to_string()
        }
        _ => "[TAB] next screen  [1-9,0] jump  [q] quit".to_string(),
    };

    let line = match &app.status_line {
        Some(status) => Line::from(vec![Span::styled(
            status.clone(),
            Style::default().fg(colors::AMBER).bold(),
        )]),
        None => Line::from(Span::styled(hints, Style::default().fg(colors::SILVER))),
    };
    let footer = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors::DARK_TEAL)),
    );
    frame.render_widget(footer, area);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::SILVER))
        .style(Style::default().bg(colors::BG_PANEL))
}

fn draw_stat_box(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::SILVER))
        .style(Style::default().bg(colors::BG_PANEL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(value, Style::default().fg(color).bold())),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(6),
        ])
        .split(area);

    let metrics = &app.state.dashboard_metrics;
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[0]);
    draw_stat_box(frame, top[0], "ACTIVE CLIENTS", metrics.active_clients.to_string(), colors::TEAL);
    draw_stat_box(frame, top[1], "STAFF ON DUTY", metrics.staff_on_duty.to_string(), colors::GREEN);
    draw_stat_box(frame, top[2], "PENDING CLIENTS", metrics.pending_clients.to_string(), colors::AMBER);
    draw_stat_box(
        frame,
        top[3],
        "ACTIVE ALERTS",
        metrics.active_alerts.to_string(),
        if metrics.active_alerts > 0 { colors::RED } else { colors::SILVER },
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[1]);
    draw_stat_box(frame, bottom[0], "INCIDENTS", metrics.incident_reports.to_string(), colors::RED);
    draw_stat_box(frame, bottom[1], "ASSESSMENTS DUE", metrics.pending_assessments.to_string(), colors::AMBER);
    draw_stat_box(frame, bottom[2], "ENDING SOON", metrics.clients_ending_soon.to_string(), colors::AMBER);
    draw_stat_box(frame, bottom[3], "STAFF ON LEAVE", metrics.staff_on_leave.to_string(), colors::SILVER);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    let feed: Vec<Line> = app
        .dashboard
        .activity_feed(&app.state)
        .iter()
        .map(|entry| {
            let color = match entry.priority {
                crate::models::Priority::Critical => colors::RED,
                crate::models::Priority::High => colors::AMBER,
                _ => colors::SILVER,
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", entry.priority), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(feed)
            .block(panel("ACTIVITY"))
            .wrap(Wrap { trim: true }),
        lower[0],
    );

    let low_stock: Vec<Line> = app
        .dashboard
        .low_stock_clients(&app.state)
        .iter()
        .map(|client| {
            Line::from(Span::styled(
                client.name.clone(),
                Style::default().fg(colors::AMBER),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(low_stock).block(panel("LOW MEDICATION STOCK")),
        lower[1],
    );
}

fn status_color(status: ClientStatus) -> Color {
    match status {
        ClientStatus::Active => colors::GREEN,
        ClientStatus::Pending => colors::AMBER,
        ClientStatus::EndingSoon => colors::RED,
        ClientStatus::Completed => colors::SILVER,
    }
}

fn draw_clients(frame: &mut Frame, area: Rect, app: &App) {
    let rows_data = app.clients.filtered(&app.state.clients);
    let counts = app.clients.counts(&app.state.clients);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let summary = Line::from(vec![
        Span::styled(format!(" Active {} ", counts.active), Style::default().fg(colors::GREEN)),
        Span::styled(format!(" Pending {} ", counts.pending), Style::default().fg(colors::AMBER)),
        Span::styled(
            format!(" Ending soon {} ", counts.ending_soon),
            Style::default().fg(colors::RED),
        ),
        Span::styled(
            format!("  search: {}", app.clients.search),
            Style::default().fg(colors::SILVER),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary).block(panel("CLIENTS")), chunks[0]);

    let selected = app
        .state
        .selected_client
        .as_deref()
        .and_then(|id| app.state.client(id));
    let body = match selected {
        Some(_) => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]),
        None => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(chunks[1]),
    };

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|client| {
            Row::new(vec![
                Cell::from(client.name.clone()),
                Cell::from(client.patch.clone()),
                Cell::from(client.service_level.label()),
                Cell::from(Span::styled(
                    client.status.to_string(),
                    Style::default().fg(status_color(client.status)),
                )),
                Cell::from(client.schedule.kind.to_string()),
            ])
        })
        .collect();

    let mut table_state = TableState::default();
    table_state.select(Some(app.clients.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(9),
        ],
    )
    .header(header_row(&["NAME", "PATCH", "LEVEL", "STATUS", "SCHEDULE"]))
    .block(panel("DIRECTORY"))
    .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, body[0], &mut table_state);

    if let Some(client) = selected {
        let title = format!("{} - {}", client.name, app.clients.detail_tab.title());
        frame.render_widget(
            Paragraph::new(client_detail_lines(client, app.clients.detail_tab))
                .block(panel(&title))
                .wrap(Wrap { trim: true }),
            body[1],
        );
    }
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(colors::SILVER)),
        Span::styled(value, Style::default().fg(colors::WHITE)),
    ])
}

fn client_detail_lines(client: &Client, tab: ClientDetailTab) -> Vec<Line<'static>> {
    match tab {
        ClientDetailTab::Overview => vec![
            detail_line("Age", format!("{} ({})", client.age, client.gender)),
            detail_line("Status", client.status.to_string()),
            detail_line("Level", client.service_level.label().to_string()),
            detail_line("Patch", client.patch.clone()),
            detail_line("Address", client.address.clone()),
            detail_line("Keybox", client.keybox_code.clone()),
            detail_line(
                "Schedule",
                format!(
                    "{}, {} day(s)",
                    client.schedule.kind,
                    client.schedule.days.len()
                ),
            ),
            detail_line("Admitted", client.admission_date.clone()),
        ],
        ClientDetailTab::CarePlan => {
            let mut lines: Vec<Line> = client
                .care_needs
                .iter()
                .map(|need| {
                    Line::from(Span::styled(
                        format!("- {need}"),
                        Style::default().fg(colors::WHITE),
                    ))
                })
                .collect();
            if !client.additional_tasks.is_empty() {
                lines.push(Line::from(""));
                lines.push(detail_line("Tasks", client.additional_tasks.join(", ")));
            }
            if !client.allergies.is_empty() {
                lines.push(detail_line("Allergies", client.allergies.join(", ")));
            }
            if let Some(language) = &client.preferred_language {
                lines.push(detail_line("Language", language.clone()));
            }
            if let Some(carer) = &client.preferred_carer {
                lines.push(detail_line("Pref carer", carer.clone()));
            }
            lines
        }
        ClientDetailTab::Medications => {
            let mut lines = Vec::new();
            for medication in &client.medications {
                let mut spans = vec![Span::styled(
                    format!("{} {} at {}", medication.name, medication.dosage, medication.time),
                    Style::default().fg(colors::WHITE),
                )];
                if medication.low_stock {
                    spans.push(Span::styled(
                        "  LOW STOCK",
                        Style::default().fg(colors::AMBER).bold(),
                    ));
                }
                lines.push(Line::from(spans));
                lines.push(Line::from(Span::styled(
                    format!("  {}", medication.instructions),
                    Style::default().fg(colors::SILVER),
                )));
            }
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No medications on record",
                    Style::default().fg(colors::SILVER),
                )));
            }
            lines
        }
        ClientDetailTab::Contacts => vec![
            detail_line("Phone", client.contact_info.phone.clone()),
            detail_line("Email", client.contact_info.email.clone()),
            detail_line("Emergency", client.contact_info.emergency_contact.clone()),
            Line::from(""),
            detail_line(
                "Next of kin",
                format!(
                    "{} ({}) {}",
                    client.next_of_kin.name,
                    client.next_of_kin.relationship,
                    client.next_of_kin.phone
                ),
            ),
            detail_line(
                "GP",
                format!(
                    "{}, {} {}",
                    client.gp_details.name, client.gp_details.practice, client.gp_details.phone
                ),
            ),
        ],
    }
}

fn draw_staff(frame: &mut Frame, area: Rect, app: &App) {
    let rows_data = app.staff.filtered(&app.state.staff);

    let selected = app
        .state
        .selected_staff
        .as_deref()
        .and_then(|id| app.state.staff_member(id));
    let body = match selected {
        Some(_) => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area),
        None => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(area),
    };

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|member| {
            let status_style = match member.status {
                StaffStatus::Active => Style::default().fg(colors::GREEN),
                StaffStatus::Leave | StaffStatus::Training => Style::default().fg(colors::AMBER),
                _ => Style::default().fg(colors::RED),
            };
            Row::new(vec![
                Cell::from(member.name.clone()),
                Cell::from(member.staff_ref_number.clone()),
                Cell::from(member.role.to_string()),
                Cell::from(Span::styled(member.status.to_string(), status_style)),
                Cell::from(member.patches.join(", ")),
                Cell::from(member.transport.to_string()),
            ])
        })
        .collect();

    let mut table_state = TableState::default();
    table_state.select(Some(app.staff.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Min(14),
            Constraint::Length(9),
        ],
    )
    .header(header_row(&["NAME", "REF", "ROLE", "STATUS", "PATCHES", "TRANSPORT"]))
    .block(panel("STAFF"))
    .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, body[0], &mut table_state);

    if let Some(member) = selected {
        let title = format!("{} - {}", member.name, app.staff.detail_tab.title());
        frame.render_widget(
            Paragraph::new(staff_detail_lines(member, app.staff.detail_tab))
                .block(panel(&title))
                .wrap(Wrap { trim: true }),
            body[1],
        );
    }
}

const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn staff_detail_lines(member: &Staff, tab: StaffDetailTab) -> Vec<Line<'static>> {
    match tab {
        StaffDetailTab::Overview => {
            let mut lines = vec![
                detail_line("Reference", member.staff_ref_number.clone()),
                detail_line("Role", member.role.to_string()),
                detail_line("Status", member.status.to_string()),
                detail_line("Transport", member.transport.to_string()),
                detail_line("Patches", member.patches.join(", ")),
                detail_line("Phone", member.contact_info.phone.clone()),
            ];
            if let Some(postcode) = &member.postcode {
                lines.push(detail_line("Postcode", postcode.clone()));
            }
            if let Some(joined) = &member.join_date {
                lines.push(detail_line("Joined", joined.clone()));
            }
            lines
        }
        StaffDetailTab::Schedule => member
            .work_schedule
            .days()
            .iter()
            .zip(WEEKDAY_LABELS)
            .map(|(day, label)| {
                let am = if day.am {
                    format!("am {}-{}", day.am_start, day.am_end)
                } else {
                    "am -".to_string()
                };
                let pm = if day.pm {
                    format!("pm {}-{}", day.pm_start, day.pm_end)
                } else {
                    "pm -".to_string()
                };
                detail_line(label, format!("{am}  {pm}"))
            })
            .collect(),
        StaffDetailTab::Skills => {
            let mut lines: Vec<Line> = member
                .skills
                .iter()
                .map(|skill| {
                    Line::from(Span::styled(
                        format!("- {skill}"),
                        Style::default().fg(colors::WHITE),
                    ))
                })
                .collect();
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No recorded skills",
                    Style::default().fg(colors::SILVER),
                )));
            }
            lines.push(Line::from(""));
            lines.push(detail_line("Languages", member.languages.join(", ")));
            lines
        }
        StaffDetailTab::Metrics => vec![
            detail_line("Hours", format!("{:.1}", member.metrics.total_hours)),
            detail_line("Mileage", format!("{:.1}", member.metrics.mileage)),
            detail_line("Shifts", member.metrics.shifts_completed.to_string()),
            detail_line(
                "Shifts/wk",
                format!(
                    "am={} pm={} full={}",
                    member.availability.am, member.availability.pm, member.availability.full_day
                ),
            ),
        ],
    }
}

fn draw_rota(frame: &mut Frame, area: Rect, app: &App) {
    if app.rota.mode.is_week() {
        draw_rota_week(frame, area, app);
        return;
    }
    let title = format!("ROTA {} - {}", app.rota.date, app.rota.mode.title());

    let rows: Vec<Row> = app
        .rota
        .rows(&app.state)
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name.to_string()),
                Cell::from(visit_cell(&row.am, app)),
                Cell::from(visit_cell(&row.pm, app)),
            ])
        })
        .collect();

    let mut table_state = TableState::default();
    table_state.select(Some(app.rota.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ],
    )
    .header(header_row(&["NAME", "AM", "PM"]))
    .block(panel(&title))
    .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_rota_week(frame: &mut Frame, area: Rect, app: &App) {
    let dates = app.rota.week_dates();
    let title = match dates.first() {
        Some(monday) => format!("ROTA week of {monday} - {}", app.rota.mode.title()),
        None => format!("ROTA - {}", app.rota.mode.title()),
    };

    let rows: Vec<Row> = app
        .rota
        .week_rows(&app.state)
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::from(row.name.to_string())];
            for day in row.days {
                let cell = if day.am == 0 && day.pm == 0 {
                    Span::styled("-", Style::default().fg(colors::SILVER))
                } else {
                    Span::styled(
                        format!("{}/{}", day.am, day.pm),
                        Style::default().fg(colors::WHITE),
                    )
                };
                cells.push(Cell::from(cell));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Min(20)];
    widths.extend([Constraint::Length(6); 7]);
    let mut table_state = TableState::default();
    table_state.select(Some(app.rota.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(rows, widths)
        .header(header_row(&["NAME", "MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"]))
        .block(panel(&title))
        .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn visit_cell(visits: &[&crate::models::Visit], app: &App) -> Line<'static> {
    if visits.is_empty() {
        return Line::from(Span::styled("-", Style::default().fg(colors::SILVER)));
    }
    let spans: Vec<Span> = visits
        .iter()
        .map(|visit| {
            let color = match visit.status {
                VisitStatus::Completed => colors::GREEN,
                VisitStatus::InProgress => colors::AMBER,
                VisitStatus::Missed => colors::RED,
                VisitStatus::Scheduled => colors::WHITE,
            };
            let other = match app.rota.mode {
                RotaMode::DayStaff | RotaMode::WeekStaff => app
                    .state
                    .client(&visit.client_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| visit.client_id.clone()),
                RotaMode::DayClients | RotaMode::WeekClients => app
                    .state
                    .staff_member(&visit.staff_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| visit.staff_id.clone()),
            };
            Span::styled(format!("{other} ({}m)  ", visit.duration), Style::default().fg(color))
        })
        .collect();
    Line::from(spans)
}

fn dose_style(status: DoseStatus) -> Style {
    match status {
        DoseStatus::Administered => Style::default().fg(colors::GREEN),
        DoseStatus::Skipped => Style::default().fg(colors::AMBER),
        DoseStatus::Refused => Style::default().fg(colors::RED),
        DoseStatus::Pending => Style::default().fg(colors::SILVER),
    }
}

fn draw_emar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    // Client picker on the left.
    let picker = app.emar.clients(&app.state);
    let items: Vec<ListItem> = picker
        .iter()
        .map(|client| {
            let selected = app.emar.selected_client.as_deref() == Some(client.id.as_str());
            let style = if selected {
                Style::default().fg(colors::AMBER).bold()
            } else {
                Style::default().fg(colors::WHITE)
            };
            ListItem::new(Span::styled(client.name.clone(), style))
        })
        .collect();
    let mut list_state = ListState::default();
    if app.emar.selected_client.is_none() {
        list_state.select(Some(app.emar.medication_cursor.min(items.len().saturating_sub(1))));
    }
    let list = List::new(items)
        .block(panel("CLIENTS"))
        .highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let Some(client) = app
        .emar
        .selected_client
        .as_deref()
        .and_then(|id| app.state.client(id))
    else {
        frame.render_widget(
            Paragraph::new("Select a client to open their chart")
                .style(Style::default().fg(colors::SILVER))
                .block(panel("MEDICATION CHART")),
            chunks[1],
        );
        return;
    };

    match app.emar.mode {
        EmarMode::Daily => draw_emar_chart(frame, chunks[1], app, client),
        EmarMode::History => draw_emar_history(frame, chunks[1], app),
    }
}

fn draw_emar_chart(frame: &mut Frame, area: Rect, app: &App, client: &Client) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    if let Some(selected) = app.emar.reason_picker {
        let items: Vec<ListItem> = RefusalReason::ALL
            .iter()
            .map(|reason| {
                ListItem::new(Span::styled(
                    reason.to_string(),
                    Style::default().fg(colors::WHITE),
                ))
            })
            .collect();
        let mut list_state = ListState::default();
        list_state.select(Some(selected.min(RefusalReason::ALL.len() - 1)));
        let list = List::new(items)
            .block(panel("REFUSAL REASON"))
            .highlight_style(Style::default().bg(colors::DARK_TEAL).bold());
        frame.render_stateful_widget(list, chunks[0], &mut list_state);
    } else {
        let rows: Vec<Row> = client
            .medications
            .iter()
            .enumerate()
            .map(|(med_index, medication)| {
                let doses: Vec<Span> = parse_dose_times(medication)
                    .iter()
                    .enumerate()
                    .map(|(dose_index, time)| {
                        let key = DoseKey::new(medication.id.clone(), dose_index);
                        let status = app.emar.chart.status(&key);
                        let mut style = dose_style(status);
                        if med_index == app.emar.medication_cursor
                            && dose_index == app.emar.dose_cursor
                        {
                            style = style.bg(colors::DARK_TEAL).bold();
                        }
                        Span::styled(format!(" {time} [{status}] "), style)
                    })
                    .collect();
                Row::new(vec![
                    Cell::from(format!("{} {}", medication.name, medication.dosage)),
                    Cell::from(Line::from(doses)),
                ])
            })
            .collect();

        let mut table_state = TableState::default();
        table_state.select(Some(
            app.emar
                .medication_cursor
                .min(client.medications.len().saturating_sub(1)),
        ));
        let title = format!("MEDICATION CHART - {} - {}", client.name, app.emar.date);
        let table = Table::new(rows, [Constraint::Min(24), Constraint::Percentage(70)])
            .header(header_row(&["MEDICATION", "DOSES"]))
            .block(panel(&title))
            .row_highlight_style(Style::default().fg(colors::WHITE));
        frame.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let summary = app.emar.summary(client, Local::now().time());
    let mut spans = vec![
        Span::styled(
            format!(" administered {} ", summary.administered),
            Style::default().fg(colors::GREEN),
        ),
        Span::styled(
            format!(" pending {} ", summary.pending),
            Style::default().fg(colors::SILVER),
        ),
        Span::styled(
            format!(" missed {} ", summary.missed),
            Style::default().fg(colors::RED),
        ),
    ];
    if !app.emar.notes.is_empty() {
        spans.push(Span::styled(
            format!(" note: {} ", app.emar.notes),
            Style::default().fg(colors::AMBER),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel("TODAY")), chunks[1]);
}

fn draw_emar_history(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .emar
        .history(&app.state)
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.timestamp.clone()),
                Cell::from(format!("{} {}", entry.medication_name, entry.dosage)),
                Cell::from(entry.scheduled_time.clone()),
                Cell::from(Span::styled(entry.status.to_string(), dose_style(entry.status))),
                Cell::from(entry.reason.clone().unwrap_or_default()),
                Cell::from(entry.carer_name.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Min(18),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Min(16),
            Constraint::Min(14),
        ],
    )
    .header(header_row(&["WHEN", "MEDICATION", "DUE", "STATUS", "REASON", "CARER"]))
    .block(panel("ADMINISTRATION HISTORY"));
    frame.render_widget(table, area);
}

fn draw_incidents(frame: &mut Frame, area: Rect, app: &App) {
    let tab = match app.incidents.tab {
        IncidentTab::Current => "CURRENT",
        IncidentTab::History => "HISTORY",
    };
    let rows_data = app.incidents.filtered(&app.state.incidents);
    let rows: Vec<Row> = rows_data
        .iter()
        .map(|incident| {
            let severity_style = match incident.severity {
                Severity::Critical | Severity::High => Style::default().fg(colors::RED),
                Severity::Medium => Style::default().fg(colors::AMBER),
                Severity::Low => Style::default().fg(colors::SILVER),
            };
            let status_style = match incident.status {
                IncidentStatus::Open => Style::default().fg(colors::RED),
                IncidentStatus::Investigating => Style::default().fg(colors::AMBER),
                _ => Style::default().fg(colors::GREEN),
            };
            Row::new(vec![
                Cell::from(incident.date_reported.clone()),
                Cell::from(incident.title.clone()),
                Cell::from(incident.client_name.clone()),
                Cell::from(Span::styled(incident.severity.to_string(), severity_style)),
                Cell::from(Span::styled(incident.status.to_string(), status_style)),
                Cell::from(incident.reported_by.clone()),
            ])
        })
        .collect();

    let mut filters = Vec::new();
    if let Some(severity) = app.incidents.severity {
        filters.push(format!("severity={severity}"));
    }
    if let Some(status) = app.incidents.status {
        filters.push(format!("status={status}"));
    }
    if !app.incidents.location.is_empty() {
        filters.push(format!("location={}", app.incidents.location));
    }
    if !app.incidents.reported_by.is_empty() {
        filters.push(format!("reporter={}", app.incidents.reported_by));
    }
    if !app.incidents.date_from.is_empty() || !app.incidents.date_to.is_empty() {
        filters.push(format!(
            "dates={}..{}",
            app.incidents.date_from, app.incidents.date_to
        ));
    }
    let title = if filters.is_empty() {
        format!("INCIDENTS - {tab}")
    } else {
        format!("INCIDENTS - {tab} [{}]", filters.join(" "))
    };

    let mut table_state = TableState::default();
    table_state.select(Some(app.incidents.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Min(18),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Min(14),
        ],
    )
    .header(header_row(&["REPORTED", "TYPE", "PERSON", "SEVERITY", "STATUS", "BY"]))
    .block(panel(&title))
    .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_patches(frame: &mut Frame, area: Rect, app: &App) {
    let rows_data = app.patches.filtered(&app.state.patches);
    let totals = app.patches.totals(&app.state.patches);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|patch| {
            let ratio = patch.client_staff_ratio();
            let ratio_style = if ratio > 3.0 {
                Style::default().fg(colors::RED)
            } else {
                Style::default().fg(colors::WHITE)
            };
            Row::new(vec![
                Cell::from(patch.name.clone()),
                Cell::from(patch.district.clone()),
                Cell::from(patch.client_count.to_string()),
                Cell::from(patch.staff_count.to_string()),
                Cell::from(Span::styled(format!("{ratio:.1}"), ratio_style)),
                Cell::from(format!("{:.0}%", patch.availability_percent())),
                Cell::from(patch.pending_clients.to_string()),
            ])
        })
        .collect();

    let mut table_state = TableState::default();
    table_state.select(Some(app.patches.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(header_row(&["PATCH", "DISTRICT", "CLIENTS", "STAFF", "RATIO", "AVAIL", "PENDING"]))
    .block(panel("PATCHES"))
    .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    let line = Line::from(Span::styled(
        format!(
            "{} clients, {} staff, {} available, {} pending",
            totals.clients, totals.staff, totals.available_staff, totals.pending_clients
        ),
        Style::default().fg(colors::SILVER),
    ));
    frame.render_widget(Paragraph::new(line).block(panel("TOTALS")), chunks[1]);
}

fn draw_reports(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .reports
        .rows(&app.state)
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![Cell::from(label), Cell::from(value.to_string())])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Min(30), Constraint::Length(10)])
        .header(header_row(&["METRIC", "COUNT"]))
        .block(panel(app.reports.kind.title()));
    frame.render_widget(table, area);
}

fn draw_timesheets(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let rows_data = app.timesheets.rows(&app.state);
    let rows: Vec<Row> = rows_data
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.staff_name.to_string()),
                Cell::from(row.entry.week_ending.clone()),
                Cell::from(format!("{:.1}", row.entry.total_hours)),
                Cell::from(format!("{:.1}", row.entry.overtime_hours)),
                Cell::from(format!("{:.1}", row.entry.total_mileage)),
                Cell::from(format!(
                    "{:.2}",
                    crate::views::timesheets::total_pay(row.entry)
                )),
            ])
        })
        .collect();

    let mut table_state = TableState::default();
    table_state.select(Some(app.timesheets.cursor.min(rows.len().saturating_sub(1))));
    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(header_row(&["STAFF", "WEEK END", "HOURS", "OVERTIME", "MILES", "PAY"]))
    .block(panel("TIMESHEETS"))
    .row_highlight_style(Style::default().bg(colors::DARK_TEAL));
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    let totals = app.timesheets.totals(&app.state);
    let line = Line::from(Span::styled(
        format!(
            "{:.1} hours, {:.1} miles, {:.2} pay",
            totals.hours, totals.mileage, totals.pay
        ),
        Style::default().fg(colors::SILVER),
    ));
    frame.render_widget(Paragraph::new(line).block(panel("WEEK TOTALS")), chunks[1]);
}

fn form_lines<'a>(fields: &[(&'a str, String)], focused: usize) -> Vec<Line<'a>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let marker = if index == focused { "> " } else { "  " };
            let style = if index == focused {
                Style::default().fg(colors::AMBER).bold()
            } else {
                Style::default().fg(colors::WHITE)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{label:<14}"), Style::default().fg(colors::SILVER)),
                Span::styled(value.clone(), style),
            ])
        })
        .collect()
}

fn draw_client_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.client_form;
    let mut lines = form_lines(
        &[
            ("Name", form.name.clone()),
            ("Age", form.age.clone()),
            ("Address", form.address.clone()),
            ("Patch", form.patch.clone()),
            ("Start date", form.start_date.clone()),
            ("End date", form.end_date.clone()),
        ],
        app.form_field,
    );
    lines.push(Line::from(""));
    let level = form
        .service_level
        .map(|l| l.label().to_string())
        .unwrap_or_else(|| "unset (^L)".to_string());
    lines.push(Line::from(Span::styled(
        format!("  Service level: {level}"),
        Style::default().fg(colors::TEAL),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "  Schedule: {} on {} day(s)",
            form.schedule_type.map(|t| t.to_string()).unwrap_or_else(|| "unset".into()),
            form.schedule_days.len()
        ),
        Style::default().fg(colors::TEAL),
    )));
    if let Some(level) = form.service_level {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Care needs: {}", care_needs_for(level).join(", ")),
            Style::default().fg(colors::SILVER),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("ADD CLIENT")), area);
}

fn draw_staff_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.staff_form;
    let mut lines = form_lines(
        &[
            ("Name", form.name.clone()),
            ("Phone", form.phone.clone()),
            ("Email", form.email.clone()),
            ("Address", form.address.clone()),
            ("Postcode", form.postcode.clone()),
            ("Join date", form.join_date.clone()),
        ],
        app.form_field,
    );
    lines.push(Line::from(""));
    let availability = form.work_schedule.availability();
    lines.push(Line::from(Span::styled(
        format!(
            "  Transport: {}   Role: {}   Shifts: am={} pm={}",
            form.transport.map(|t| t.to_string()).unwrap_or_else(|| "unset".into()),
            form.role.map(|r| r.to_string()).unwrap_or_else(|| "carer".into()),
            availability.am,
            availability.pm,
        ),
        Style::default().fg(colors::TEAL),
    )));
    frame.render_widget(Paragraph::new(lines).block(panel("ADD STAFF")), area);
}

fn draw_incident_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.incident_form;
    let mut lines = form_lines(
        &[
            ("Description", form.description.clone()),
            ("Person", form.person_search.clone()),
            ("Location", form.location.clone()),
            ("Actions", form.immediate_actions.clone()),
            ("Witnesses", form.witnesses.clone()),
        ],
        app.form_field,
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  Type: {}   Severity: {}   Against: {}",
            if form.title.is_empty() { "unset (^T)" } else { &form.title },
            form.severity.map(|s| s.to_string()).unwrap_or_else(|| "low".into()),
            form.person.as_deref().unwrap_or("-"),
        ),
        Style::default().fg(colors::TEAL),
    )));
    let matches = form.person_matches(&app.state.clients, &app.state.staff);
    if !matches.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  Matches: {}", matches.join(", ")),
            Style::default().fg(colors::SILVER),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("REPORT INCIDENT")), area);
}

fn draw_settings(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Careboard runs entirely in memory.",
            Style::default().fg(colors::WHITE),
        )),
        Line::from(Span::styled(
            "Seed data is regenerated on every start; nothing is persisted.",
            Style::default().fg(colors::SILVER),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("SETTINGS")), area);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| Cell::from(Span::styled(*t, Style::default().fg(colors::AMBER).bold())))
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::store::Action;
    use crate::views::RotaMode;
    use ratatui::backend::TestBackend;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn client_detail_tabs_show_different_panels() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Clients));
        app.state
            .dispatch(Action::SelectClient(Some("client-1".to_string())));

        app.clients.detail_tab = ClientDetailTab::Contacts;
        let contacts = rendered(&app);
        assert!(contacts.contains("Susan Thompson"));
        assert!(contacts.contains("Dr Helen Shaw"));

        app.clients.detail_tab = ClientDetailTab::Medications;
        let medications = rendered(&app);
        assert!(medications.contains("Ramipril"));
        assert!(!medications.contains("Susan Thompson"));
    }

    #[test]
    fn staff_metrics_tab_shows_the_recorded_totals() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Staff));
        app.state
            .dispatch(Action::SelectStaff(Some("staff-1".to_string())));
        app.staff.detail_tab = StaffDetailTab::Metrics;

        let screen = rendered(&app);
        assert!(screen.contains("Jennifer Mills - Metrics"));
        assert!(screen.contains("128.5"));
    }

    #[test]
    fn week_board_draws_a_seven_day_grid() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Rota));
        app.rota.mode = RotaMode::WeekStaff;
        app.rota.date = "2025-08-27".to_string();

        let screen = rendered(&app);
        assert!(screen.contains("WEEK BY STAFF"));
        assert!(screen.contains("week of 2025-08-25"));
        assert!(screen.contains("MON"));
        assert!(screen.contains("SUN"));
    }

    #[test]
    fn refusal_picker_lists_every_reason() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Emar));
        app.emar.select_client(Some("client-1".to_string()));
        app.emar.reason_picker = Some(1);

        let screen = rendered(&app);
        assert!(screen.contains("REFUSAL REASON"));
        assert!(screen.contains("Client was asleep"));
        assert!(screen.contains("Doctor advised to stop"));
    }
}
