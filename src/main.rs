use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use cricket_history::archive_fetch::GeminiArchive;
use cricket_history::config::Config;
use cricket_history::gemini::GeminiClient;
use cricket_history::provider::spawn_archive_provider;
use cricket_history::reference::Era;
use cricket_history::stat_bar::{StatKind, render_bar, stat_bars};
use cricket_history::state::{
    AppState, Delta, GRID_COLUMNS, PLAYER_LIST_LEN, PlayerProfile, ProviderCommand, Screen,
    apply_delta,
};

const ACCENT: Color = Color::Green;
const GOLD: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    // Measured on the last draw of the profile screen.
    profile_max_scroll: u16,
}

impl App {
    fn new(state: AppState, cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        Self {
            state,
            should_quit: false,
            cmd_tx,
            profile_max_scroll: 0,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            self.on_search_key(key);
            return;
        }
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => match self.state.screen {
                Screen::Archive => self.on_archive_key(key),
                Screen::Profile => self.on_profile_key(key),
            },
        }
    }

    fn on_archive_key(&mut self, key: KeyEvent) {
        let cmd = match key.code {
            KeyCode::Char('[') => self.state.prev_era(),
            KeyCode::Char(']') | KeyCode::Char('n') => self.state.next_era(),
            KeyCode::Char(ch @ '1'..='5') => {
                let idx = ch as usize - '1' as usize;
                Era::ALL.get(idx).and_then(|era| self.state.set_era(*era))
            }
            KeyCode::Char('c') => Some(self.state.cycle_country()),
            KeyCode::Char('r') => Some(self.state.cycle_role()),
            KeyCode::Char('x') => Some(self.state.clear_filters()),
            KeyCode::Char('a') => Some(self.state.reload()),
            KeyCode::Char('/') => {
                self.state.start_search();
                None
            }
            KeyCode::Enter | KeyCode::Char('d') => self.state.select_player(),
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.select_next();
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select_down();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_up();
                None
            }
            _ => None,
        };
        if let Some(cmd) = cmd {
            self.send(cmd);
        }
    }

    fn on_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => {
                self.state.back_to_archive()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.scroll_profile_down(self.profile_max_scroll)
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_profile_up(),
            KeyCode::PageDown => {
                for _ in 0..10 {
                    self.state.scroll_profile_down(self.profile_max_scroll);
                }
            }
            KeyCode::PageUp => {
                for _ in 0..10 {
                    self.state.scroll_profile_up();
                }
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let cmd = self.state.submit_search();
                self.send(cmd);
            }
            KeyCode::Esc => self.state.cancel_search(),
            KeyCode::Backspace => self.state.pop_search_char(),
            KeyCode::Char(ch) => self.state.push_search_char(ch),
            _ => {}
        }
    }

    fn send(&mut self, cmd: ProviderCommand) {
        let label = match &cmd {
            ProviderCommand::LoadEra { era, .. } => format!("Loading {}", era.tab_label()),
            ProviderCommand::LoadProfile { name, .. } => format!("Opening profile: {name}"),
        };
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Archive provider unavailable");
            return;
        };
        if tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Archive request failed");
            self.state.pending_era = None;
            self.state.pending_profile = None;
        } else {
            self.state.push_log(format!("[INFO] {label}"));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = Config::from_env();
    let mut state = AppState::with_era(config.start_era);
    for warning in &config.warnings {
        state.push_log(format!("[WARN] {warning}"));
    }
    if config.api_key.is_none() {
        state.push_log("[WARN] GEMINI_API_KEY not set; archive requests will fail");
    }

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let archive = Arc::new(GeminiArchive::new(GeminiClient::new(&config)));
    spawn_archive_provider(archive, tx, cmd_rx);

    let mut app = App::new(state, Some(cmd_tx));
    let initial = app.state.begin_era_load();
    app.send(initial);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

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

        let mut max_scroll = 0;
        terminal.draw(|f| max_scroll = ui(f, app))?;
        app.profile_max_scroll = max_scroll;

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

/// Draws one frame; returns how far the profile screen can scroll.
fn ui(frame: &mut Frame, app: &App) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_lines(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let max_scroll = match (app.state.screen, &app.state.profile) {
        (Screen::Profile, Some(profile)) => render_profile(frame, chunks[1], &app.state, profile),
        _ => {
            render_archive(frame, chunks[1], &app.state);
            0
        }
    };

    let console = Paragraph::new(console_text(&app.state))
        .style(Style::default().fg(MUTED))
        .block(Block::default().title("Console").borders(Borders::TOP));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
    max_scroll
}

fn header_lines(state: &AppState) -> Vec<Line<'static>> {
    let status = if state.is_loading() { "  ◌ consulting the archives" } else { "" };
    vec![
        Line::from(vec![
            Span::styled(
                " Cricket History ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Intelligence Engine",
                Style::default().fg(GOLD).add_modifier(Modifier::ITALIC),
            ),
            Span::styled(status, Style::default().fg(MUTED)),
        ]),
        Line::from(Span::styled(
            " Exploring the evolution of the Gentleman's Game from 16th Century pastures to the modern global stage.",
            Style::default().fg(MUTED),
        )),
    ]
}

fn footer_text(state: &AppState) -> String {
    let keys = if state.search_active {
        "Type to search | Enter Search | Esc Stop editing"
    } else {
        match state.screen {
            Screen::Archive => {
                "[/] Era | 1-5 Jump | n Next era | arrows/hjkl Move | Enter Profile | / Search | c Country | r Role | a Apply | x Clear | ? Help | q Quit"
            }
            Screen::Profile => "b/Esc Back | j/k/↑/↓ Scroll | PgUp/PgDn Page | ? Help | q Quit",
        }
    };
    format!(
        "{keys}\n© {} Cricket History Intelligence Engine. Empowered by Gemini AI.",
        Local::now().year()
    )
}

fn render_archive(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_hero(frame, rows[0], state);
    render_insight(frame, rows[1], state);
    render_filter_bar(frame, rows[2], state);
    render_player_grid(frame, rows[3], state);
    render_next_era_hint(frame, rows[4], state);
}

fn render_hero(frame: &mut Frame, area: Rect, state: &AppState) {
    let info = state.era.info();
    let mut tabs = vec![Span::styled("Select Era: ", Style::default().fg(MUTED))];
    for (idx, era) in Era::ALL.iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, era.tab_label());
        let style = if *era == state.era {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(Span::styled(
            "CURRENTLY EXPLORING",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.era.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(info.description),
        Line::from(tabs),
    ];
    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hero, area);
}

fn render_insight(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let narrative = if state.era_loading() {
        Paragraph::new(skeleton_lines(&[100, 85, 70]))
    } else if state.insight.is_empty() {
        Paragraph::new("No narrative available for this era.").style(Style::default().fg(MUTED))
    } else {
        Paragraph::new(state.insight.as_str()).style(Style::default().add_modifier(Modifier::ITALIC))
    };
    let narrative = narrative.wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Historical Narrative")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(narrative, cols[0]);

    let info = state.era.info();
    let facts = vec![
        Line::from(Span::styled(
            "EVOLUTION BENCHMARK",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(info.key_evolution),
        Line::from(""),
        Line::from(Span::styled(
            "DID YOU KNOW?",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(info.did_you_know),
    ];
    let facts = Paragraph::new(facts)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(facts, cols[1]);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(24),
            Constraint::Length(20),
        ])
        .split(area);

    let search = if state.filters.search.is_empty() && !state.search_active {
        Span::styled("Search specific legends or events...", Style::default().fg(MUTED))
    } else if state.search_active {
        Span::raw(format!("{}▏", state.filters.search))
    } else {
        Span::raw(state.filters.search.clone())
    };
    let search_border = if state.search_active { ACCENT } else { MUTED };
    let search = Paragraph::new(Line::from(vec![Span::raw("⌕ "), search])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(search_border)),
    );
    frame.render_widget(search, cols[0]);

    let country = Paragraph::new(state.filters.country.unwrap_or("All Countries"))
        .block(Block::default().title("c Country").borders(Borders::ALL));
    frame.render_widget(country, cols[1]);

    let role = Paragraph::new(state.filters.role.map(|r| r.label()).unwrap_or("All Roles"))
        .block(Block::default().title("r Role").borders(Borders::ALL));
    frame.render_widget(role, cols[2]);
}

fn render_player_grid(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!("Era Icons ({} Found)", state.players.len());
    let block = Block::default()
        .title(title)
        .title_bottom("Select a player to delve into history")
        .borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if state.era_loading() {
        render_card_rows(frame, inner, PLAYER_LIST_LEN, |f, _, card| {
            let skeleton = Paragraph::new(skeleton_lines(&[60, 40])).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(MUTED)),
            );
            f.render_widget(skeleton, card);
        });
        return;
    }

    if state.players.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No archives found matching these criteria in the {}.", state.era.label()),
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                "x Clear Filters",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
        ];
        let empty = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let opening = state.pending_profile.is_some();
    render_card_rows(frame, inner, state.players.len(), |f, idx, card| {
        let selected = idx == state.selected;
        let border = if selected { ACCENT } else { MUTED };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", idx + 1),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    state.players[idx].clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled("HISTORICAL PROFILE", Style::default().fg(MUTED))),
        ];
        if selected {
            let hint = if opening { "Opening..." } else { "Read More →" };
            lines.push(Line::from(Span::styled(hint, Style::default().fg(ACCENT))));
        }
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(paragraph, card);
    });
}

/// Lays `count` cards out in rows of `GRID_COLUMNS`, calling `draw` per card.
fn render_card_rows(
    frame: &mut Frame,
    area: Rect,
    count: usize,
    mut draw: impl FnMut(&mut Frame, usize, Rect),
) {
    const CARD_HEIGHT: u16 = 5;
    let rows = count.div_ceil(GRID_COLUMNS);
    for row in 0..rows {
        let y = area.y + row as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: CARD_HEIGHT,
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);
        for col in 0..GRID_COLUMNS {
            let idx = row * GRID_COLUMNS + col;
            if idx >= count {
                break;
            }
            draw(frame, idx, cols[col]);
        }
    }
}

fn render_next_era_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match state.era.next() {
        Some(next) => format!("Explore the next chapter of the Gentleman's Game: n Next Era ({})", next.tab_label()),
        None => "You have reached the modern game.".to_string(),
    };
    let hint = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(MUTED).add_modifier(Modifier::ITALIC));
    frame.render_widget(hint, area);
}

fn skeleton_lines(widths_pct: &[u16]) -> Vec<Line<'static>> {
    widths_pct
        .iter()
        .map(|pct| {
            let cells = (*pct as usize * 40) / 100;
            Line::from(Span::styled("░".repeat(cells), Style::default().fg(MUTED)))
        })
        .collect()
}

fn render_profile(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    profile: &PlayerProfile,
) -> u16 {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    render_profile_header(frame, rows[0], profile);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(36), Constraint::Percentage(64)])
        .split(rows[1]);

    let sidebar = Paragraph::new(profile_sidebar_lines(profile, cols[0].width))
        .wrap(Wrap { trim: true })
        .scroll((state.profile_scroll, 0));
    let body = Paragraph::new(profile_body_lines(profile))
        .wrap(Wrap { trim: true })
        .scroll((state.profile_scroll, 0));

    // Sidebar loses one column to its right border.
    let content_rows = sidebar
        .line_count(cols[0].width.saturating_sub(1))
        .max(body.line_count(cols[1].width));
    let max_scroll = content_rows.saturating_sub(usize::from(rows[1].height));

    frame.render_widget(sidebar.block(Block::default().borders(Borders::RIGHT)), cols[0]);
    frame.render_widget(body, cols[1]);
    u16::try_from(max_scroll).unwrap_or(u16::MAX)
}

fn render_profile_header(frame: &mut Frame, area: Rect, profile: &PlayerProfile) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(area);

    let nickname = profile.nickname.as_deref().unwrap_or("The Legend");
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} | {} ", profile.country, profile.role.label()),
            Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.full_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("\"{nickname}\""),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
    ];
    let title = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, cols[0]);

    let rating = Paragraph::new(vec![
        Line::from(Span::styled("ERA RATING", Style::default().fg(MUTED))),
        Line::from(Span::styled(
            profile.era_rating.clone(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(rating, cols[1]);
}

fn profile_sidebar_lines(profile: &PlayerProfile, width: u16) -> Vec<Line<'static>> {
    let heading = Style::default().fg(MUTED).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("PERSONAL DETAILS", heading)),
        Line::from(Span::styled("Born", Style::default().fg(MUTED))),
        Line::from(born_text(profile)),
        Line::from(Span::styled("Style", Style::default().fg(MUTED))),
        Line::from(or_dash(&profile.batting_style)),
        Line::from(or_dash(&profile.bowling_style)),
        Line::from(Span::styled("Active Years", Style::default().fg(MUTED))),
        Line::from(profile.playing_era.clone()),
    ];
    if !profile.formats_played.is_empty() {
        lines.push(Line::from(Span::styled("Formats", Style::default().fg(MUTED))));
        lines.push(Line::from(profile.formats_played.join(", ")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("CAREER METRICS", heading)));
    let bar_width = (width as usize).saturating_sub(24).clamp(4, 24);
    for stat in &profile.career_statistics {
        lines.push(Line::from(vec![
            Span::styled(
                stat.format.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} Matches", stat.matches), Style::default().fg(MUTED)),
        ]));
        for bar in stat_bars(stat) {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<12}", bar.kind.label())),
                Span::styled(
                    render_bar(bar.percent, bar_width),
                    Style::default().fg(stat_color(bar.kind)),
                ),
                Span::raw(format!(" {}", bar.value)),
            ]));
        }
    }

    if !profile.interesting_facts.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "DID YOU KNOW?",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        for fact in &profile.interesting_facts {
            lines.push(Line::from(format!("• {fact}")));
        }
    }
    lines
}

fn profile_body_lines(profile: &PlayerProfile) -> Vec<Line<'static>> {
    let section = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let mut lines = vec![
        Line::from(Span::styled("Technical Mastery & Style", section)),
        Line::from(or_dash(&profile.strengths)),
        Line::from(""),
        Line::from(Span::styled("Historical Impact", section)),
        Line::from(Span::styled(
            format!("│ {}", or_dash(&profile.impact)),
            Style::default().fg(GOLD).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled("🏆 Major Achievements", section)),
    ];
    lines.extend(profile.major_achievements.iter().map(|a| Line::from(format!("• {a}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("🎬 Iconic Moments", section)));
    lines.extend(
        profile
            .iconic_moments
            .iter()
            .map(|m| Line::from(Span::styled(format!("• {m}"), Style::default().fg(Color::Cyan)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Legacy Summary", section)));
    lines.push(Line::from(Span::styled(
        format!("\"{}\"", profile.legacy_summary),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines
}

fn born_text(profile: &PlayerProfile) -> String {
    match (profile.date_of_birth.trim(), profile.place_of_birth.trim()) {
        ("", "") => "-".to_string(),
        (date, "") => date.to_string(),
        ("", place) => place.to_string(),
        (date, place) => format!("{date} in {place}"),
    }
}

fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

fn stat_color(kind: StatKind) -> Color {
    match kind {
        StatKind::Runs => Color::Green,
        StatKind::Wickets => Color::Yellow,
        StatKind::Average => Color::Blue,
        StatKind::StrikeRate => Color::Magenta,
        StatKind::Economy => Color::Cyan,
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Cricket History - Help",
        "",
        "Archive:",
        "  [ / ]        Previous / next era",
        "  1-5          Jump to era",
        "  n            Next era",
        "  arrows/hjkl  Move between cards",
        "  Enter / d    Open player profile",
        "  /            Edit search (Enter to search)",
        "  c            Cycle country filter",
        "  r            Cycle role filter",
        "  a            Apply (reload)",
        "  x            Clear filters",
        "",
        "Profile:",
        "  b / Esc      Back to archives",
        "  j/k or ↑/↓   Scroll",
        "",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
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
