use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use betvalue_terminal::fake_feed;
use betvalue_terminal::select::{classify_value, ValueTier};
use betvalue_terminal::state::{
    apply_delta, AppState, Delta, FormOutcome, Match, Outcome, ProviderCommand, Screen,
};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    auto_refresh: Duration,
    last_auto_refresh: Instant,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        let auto_refresh = std::env::var("BETVALUE_POLL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(60)
            .max(10);
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
            auto_refresh: Duration::from_secs(auto_refresh),
            last_auto_refresh: Instant::now(),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            self.on_search_key(key);
            return;
        }
        if self.state.detail_open {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('b') | KeyCode::Esc | KeyCode::Enter | KeyCode::Char('d') => {
                    self.state.detail_open = false;
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Dashboard,
            KeyCode::Char('2') => self.state.screen = Screen::Results,
            KeyCode::Char('3') => self.state.screen = Screen::Admin,
            KeyCode::Char('/') => {
                if self.state.screen == Screen::Dashboard {
                    self.state.search_active = true;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.state.screen == Screen::Dashboard {
                    self.state.select_next();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.state.screen == Screen::Dashboard {
                    self.state.select_prev();
                }
            }
            KeyCode::Char('s') => {
                if self.state.screen == Screen::Dashboard {
                    self.state.cycle_sort();
                }
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                if self.state.screen == Screen::Dashboard {
                    self.state.cycle_league_filter();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => match self.state.screen {
                Screen::Results => self.request_results(true),
                _ => self.request_matches(true),
            },
            KeyCode::Char('d') | KeyCode::Enter => {
                if self.state.screen == Screen::Dashboard && self.state.selected_match().is_some() {
                    self.state.detail_open = true;
                }
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                if self.state.screen == Screen::Admin {
                    self.request_matches(true);
                }
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                if self.state.screen == Screen::Admin {
                    self.request_retrain();
                }
            }
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.search_active = false,
            KeyCode::Esc => self.state.clear_search(),
            KeyCode::Backspace => self.state.search_backspace(),
            KeyCode::Char(c) => self.state.search_input(c),
            _ => {}
        }
    }

    fn request_matches(&mut self, announce: bool) {
        let Some(tx) = &self.cmd_tx else {
            if announce {
                self.state.push_log("[INFO] Match refresh unavailable");
            }
            return;
        };
        if tx.send(ProviderCommand::FetchMatches).is_err() {
            if announce {
                self.state.push_log("[WARN] Match refresh request failed");
            }
        } else {
            if announce {
                self.state.push_log("[INFO] Match refresh requested");
            }
            self.state.refreshing = true;
            self.last_auto_refresh = Instant::now();
        }
    }

    fn request_results(&mut self, announce: bool) {
        let Some(tx) = &self.cmd_tx else {
            if announce {
                self.state.push_log("[INFO] Results refresh unavailable");
            }
            return;
        };
        if tx.send(ProviderCommand::FetchResults).is_err() {
            if announce {
                self.state.push_log("[WARN] Results refresh request failed");
            }
        } else if announce {
            self.state.push_log("[INFO] Results refresh requested");
        }
    }

    fn request_retrain(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Model retrain unavailable");
            return;
        };
        if tx.send(ProviderCommand::RetrainModel).is_err() {
            self.state.push_log("[WARN] Model retrain request failed");
        } else {
            self.state.push_log("[INFO] Model retrain requested");
            self.state.refreshing = true;
        }
    }

    fn maybe_refresh_matches(&mut self) {
        if self.state.screen != Screen::Dashboard {
            return;
        }
        if self.last_auto_refresh.elapsed() >= self.auto_refresh {
            self.request_matches(false);
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    fake_feed::spawn_mock_provider(tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        app.maybe_refresh_matches();
        app.state.clamp_selection();

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Dashboard => render_dashboard(frame, chunks[1], &app.state),
        Screen::Results => render_results(frame, chunks[1], &app.state),
        Screen::Admin => render_admin(frame, chunks[1], app),
    }

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.detail_open {
        if let Some(m) = app.state.selected_match() {
            render_detail_overlay(frame, frame.size(), m);
        }
    }
    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = match state.screen {
        Screen::Dashboard => format!(
            "BETVALUE TERMINAL | DASHBOARD | League: {} | Sort: {}{}",
            state.league_filter.label(),
            state.sort.label(),
            if state.refreshing { " | refreshing..." } else { "" }
        ),
        Screen::Results => "BETVALUE TERMINAL | RESULTS".to_string(),
        Screen::Admin => "BETVALUE TERMINAL | ADMIN".to_string(),
    };
    let line1 = format!("  (o)  {title}");
    let line2 = " ((O))".to_string();
    let line3 = "  (o)".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    if state.search_active {
        return "Type to search teams | Enter Keep | Esc Clear | Backspace Delete".to_string();
    }
    if state.detail_open {
        return "b/Esc Close | q Quit".to_string();
    }
    match state.screen {
        Screen::Dashboard => {
            "1 Dashboard | 2 Results | 3 Admin | j/k/↑/↓ Move | s Sort | l League | / Search | r Refresh | Enter/d Detail | ? Help | q Quit"
                .to_string()
        }
        Screen::Results => {
            "1 Dashboard | 2 Results | 3 Admin | r Refresh | ? Help | q Quit".to_string()
        }
        Screen::Admin => {
            "1 Dashboard | 2 Results | 3 Admin | u Update data | m Retrain | ? Help | q Quit"
                .to_string()
        }
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    render_summary_tiles(frame, sections[0], state);
    render_search_line(frame, sections[1], state);

    let widths = dashboard_columns();
    render_dashboard_header(frame, sections[2], &widths);

    let list_area = sections[3];
    let filtered = state.filtered_matches();
    if filtered.is_empty() {
        let empty = Paragraph::new("No value opportunities for these filters")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.selected, filtered.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };

        let selected = idx == state.selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };

        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let m = filtered[idx];
        let kickoff = format!("{} {}", m.date.format("%m-%d"), m.kickoff.format("%H:%M"));
        let fixture = m.fixture_label();
        let odds = format!("{:.2}/{:.2}/{:.2}", m.odds.home, m.odds.draw, m.odds.away);
        let pick = outcome_tag(m.prediction.outcome).to_string();
        let conf = format!("{}%", m.prediction.confidence);
        let ev = format_ev(m.prediction.expected_value);

        let tier = classify_value(m.prediction.expected_value);
        let mut ev_style = Style::default().fg(tier_color(tier));
        if selected {
            ev_style = ev_style.bg(Color::DarkGray);
        }

        render_cell_text(frame, cols[0], &kickoff, row_style);
        render_cell_text(frame, cols[1], &fixture, row_style);
        render_cell_text(frame, cols[2], &m.league, row_style);
        render_cell_text(frame, cols[3], &odds, row_style);
        render_cell_text(frame, cols[4], &pick, row_style);
        render_cell_text(frame, cols[5], &conf, row_style);
        render_cell_text(frame, cols[6], &ev, ev_style);
        render_cell_text(frame, cols[7], &m.bookmaker, row_style);
    }
}

fn render_summary_tiles(frame: &mut Frame, area: Rect, state: &AppState) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = state.summary();
    let hit_rate = summary
        .hit_rate
        .map(|rate| format!("{rate:.1}%"))
        .unwrap_or_else(|| "--".to_string());
    let avg_ev = summary
        .avg_expected_value
        .map(format_ev)
        .unwrap_or_else(|| "--".to_string());

    let cells = [
        ("Tracked Bets", summary.tracked.to_string()),
        ("Hit Rate", hit_rate),
        ("Avg EV", avg_ev),
        ("Realized P/L", format_profit(summary.profit)),
    ];
    for (i, (title, value)) in cells.iter().enumerate() {
        let tile = Paragraph::new(value.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().title(*title).borders(Borders::ALL));
        frame.render_widget(tile, tiles[i]);
    }
}

fn render_search_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = if state.search_active {
        format!("Search: {}_", state.search)
    } else if state.search.is_empty() {
        "Search: (press / to search teams)".to_string()
    } else {
        format!("Search: {}  (/ to edit)", state.search)
    };
    let style = if state.search_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn dashboard_columns() -> [Constraint; 8] {
    [
        Constraint::Length(12),
        Constraint::Min(26),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Length(13),
    ]
}

fn render_dashboard_header(frame: &mut Frame, area: Rect, widths: &[Constraint]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], "Kickoff", style);
    render_cell_text(frame, cols[1], "Match", style);
    render_cell_text(frame, cols[2], "League", style);
    render_cell_text(frame, cols[3], "H/D/A", style);
    render_cell_text(frame, cols[4], "Pick", style);
    render_cell_text(frame, cols[5], "Conf", style);
    render_cell_text(frame, cols[6], "EV", style);
    render_cell_text(frame, cols[7], "Bookmaker", style);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let widths = results_columns();
    render_results_header(frame, sections[0], &widths);

    let list_area = sections[1];
    if state.results.is_empty() {
        let empty =
            Paragraph::new("No settled results yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    for (i, result) in state
        .results
        .iter()
        .take(list_area.height as usize)
        .enumerate()
    {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let verdict = if result.correct() { "CORRECT" } else { "WRONG" };
        let verdict_style = if result.correct() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let profit_style = if result.profit >= 0.0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };

        render_cell_text(frame, cols[0], &result.label, Style::default());
        render_cell_text(frame, cols[1], result.predicted.label(), Style::default());
        render_cell_text(frame, cols[2], result.actual.label(), Style::default());
        render_cell_text(
            frame,
            cols[3],
            &format!("{}%", result.confidence),
            Style::default(),
        );
        render_cell_text(frame, cols[4], verdict, verdict_style);
        render_cell_text(frame, cols[5], &format_profit(result.profit), profit_style);
    }
}

fn results_columns() -> [Constraint; 6] {
    [
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(10),
    ]
}

fn render_results_header(frame: &mut Frame, area: Rect, widths: &[Constraint]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], "Match", style);
    render_cell_text(frame, cols[1], "Predicted", style);
    render_cell_text(frame, cols[2], "Actual", style);
    render_cell_text(frame, cols[3], "Conf", style);
    render_cell_text(frame, cols[4], "Verdict", style);
    render_cell_text(frame, cols[5], "P/L", style);
}

fn render_admin(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let actions = [
        "u  Update match data",
        "m  Retrain model (simulated pass)",
        "",
        "Both actions go through the data provider;",
        "figures stay whatever the provider supplies.",
    ]
    .join("\n");
    let left = Paragraph::new(actions)
        .block(Block::default().title("Data Management").borders(Borders::ALL));
    frame.render_widget(left, columns[0]);

    let state = &app.state;
    let provider = if app.cmd_tx.is_some() { "online" } else { "offline" };
    let hit_rate = state
        .summary()
        .hit_rate
        .map(|rate| format!("{rate:.1}%"))
        .unwrap_or_else(|| "--".to_string());
    let last_update = state
        .last_refresh_age()
        .map(format_age)
        .unwrap_or_else(|| "never".to_string());
    let status = [
        format!("Provider: {provider}"),
        format!("Model hit rate: {hit_rate}"),
        format!("Settled results: {}", state.results.len()),
        format!("Open fixtures: {}", state.matches.len()),
        format!("Last update: {last_update}"),
    ]
    .join("\n");
    let right = Paragraph::new(status)
        .block(Block::default().title("System Status").borders(Borders::ALL));
    frame.render_widget(right, columns[1]);

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, rows[1]);
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(6)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_detail_overlay(frame: &mut Frame, area: Rect, m: &Match) {
    let popup_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup_area);

    let tier = classify_value(m.prediction.expected_value);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(format!(
        "{} | {} at {} | {}",
        m.league,
        m.date.format("%Y-%m-%d"),
        m.kickoff.format("%H:%M"),
        m.bookmaker
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Market   H {:.2}   D {:.2}   A {:.2}",
        m.odds.home, m.odds.draw, m.odds.away
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Head to Head (Last {})", m.h2h.window())));
    lines.push(Line::from(format!(
        "  Home wins: {}   Draws: {}   Away wins: {}",
        m.h2h.home, m.h2h.draw, m.h2h.away
    )));
    lines.push(Line::from(""));
    lines.push(Line::from("Form"));
    lines.push(form_line(&m.home, &m.home_form));
    lines.push(form_line(&m.away, &m.away_form));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Injuries   H: {}   A: {}",
        m.injuries.home, m.injuries.away
    )));
    lines.push(Line::from(""));
    lines.push(Line::from("Model"));
    lines.push(Line::from(vec![
        Span::raw(format!(
            "  Pick: {}   Confidence: {}%   EV: ",
            outcome_tag(m.prediction.outcome),
            m.prediction.confidence
        )),
        Span::styled(
            format_ev(m.prediction.expected_value),
            Style::default().fg(tier_color(tier)),
        ),
        Span::raw(format!("   Tier: {}", tier_label(tier))),
    ]));
    lines.push(Line::from(format!(
        "  Suggested stake: ${:.2}",
        m.suggested_stake()
    )));

    let detail = Paragraph::new(lines)
        .block(Block::default().title(m.fixture_label()).borders(Borders::ALL));
    frame.render_widget(detail, popup_area);
}

fn form_line(team: &str, form: &[FormOutcome]) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("  {team}: "))];
    for outcome in form {
        let color = match outcome {
            FormOutcome::Win => Color::Green,
            FormOutcome::Draw => Color::Yellow,
            FormOutcome::Loss => Color::Red,
        };
        spans.push(Span::styled(
            format!("{} ", outcome.letter()),
            Style::default().fg(color),
        ));
    }
    Line::from(spans)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "BetValue Terminal - Help",
        "",
        "Global:",
        "  1            Dashboard",
        "  2            Results",
        "  3            Admin",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Dashboard:",
        "  j/k or ↑/↓   Move",
        "  s            Cycle sort (EV / CONF / DATE)",
        "  l            Cycle league filter",
        "  /            Search teams",
        "  r            Refresh match data",
        "  Enter / d    Match detail",
        "",
        "Admin:",
        "  u            Update match data",
        "  m            Retrain model",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let paragraph = Paragraph::new(text.to_string()).style(style);
    frame.render_widget(paragraph, area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 || visible == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn outcome_tag(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Home => "HOME",
        Outcome::Draw => "DRAW",
        Outcome::Away => "AWAY",
    }
}

fn tier_label(tier: ValueTier) -> &'static str {
    match tier {
        ValueTier::High => "HIGH",
        ValueTier::Medium => "MED",
        ValueTier::Low => "LOW",
    }
}

fn tier_color(tier: ValueTier) -> Color {
    match tier {
        ValueTier::High => Color::Green,
        ValueTier::Medium => Color::Yellow,
        ValueTier::Low => Color::Red,
    }
}

fn format_ev(value: f32) -> String {
    format!("{value:+.1}%")
}

fn format_profit(value: f32) -> String {
    if value >= 0.0 {
        format!("+${value:.2}")
    } else {
        format!("-${:.2}", -value)
    }
}

fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        format!("{secs}s ago")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}
