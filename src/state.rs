use std::collections::VecDeque;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::reference::{COUNTRIES, Era, Role, cycle_option};

pub const PLAYER_LIST_LEN: usize = 8;
pub const GRID_COLUMNS: usize = 4;
const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Archive,
    Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub country: Option<&'static str>,
    pub role: Option<Role>,
    pub search: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.role.is_none() && self.search.trim().is_empty()
    }

    pub fn search_term(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLine {
    #[serde(default)]
    pub format: String,
    #[serde(deserialize_with = "de_count")]
    pub matches: u32,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub runs: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub wickets: Option<u32>,
    #[serde(deserialize_with = "de_figure")]
    pub average: f64,
    #[serde(default, deserialize_with = "de_opt_figure")]
    pub strike_rate: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_figure")]
    pub economy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub full_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub place_of_birth: String,
    pub country: String,
    pub playing_era: String,
    pub role: Role,
    #[serde(default)]
    pub batting_style: String,
    #[serde(default)]
    pub bowling_style: String,
    #[serde(default)]
    pub formats_played: Vec<String>,
    pub career_statistics: Vec<PlayerStatLine>,
    #[serde(default)]
    pub era_rating: String,
    pub major_achievements: Vec<String>,
    #[serde(default)]
    pub iconic_moments: Vec<String>,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub interesting_facts: Vec<String>,
    pub legacy_summary: String,
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    LoadEra {
        request: u64,
        era: Era,
        filters: FilterState,
    },
    LoadProfile {
        request: u64,
        name: String,
    },
}

#[derive(Debug, Clone)]
pub enum Delta {
    /// Player list and insight of one era load, applied together.
    EraLoaded {
        request: u64,
        players: Vec<String>,
        insight: String,
    },
    ProfileLoaded {
        request: u64,
        name: String,
        profile: Option<PlayerProfile>,
    },
    Log(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub era: Era,
    pub filters: FilterState,
    pub search_active: bool,
    pub players: Vec<String>,
    pub insight: String,
    pub selected: usize,
    pub profile: Option<PlayerProfile>,
    pub profile_scroll: u16,
    pub era_request: u64,
    pub profile_request: u64,
    pub pending_era: Option<u64>,
    pub pending_profile: Option<u64>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_era(Era::default())
    }

    pub fn with_era(era: Era) -> Self {
        Self {
            screen: Screen::Archive,
            era,
            filters: FilterState::default(),
            search_active: false,
            players: Vec::with_capacity(PLAYER_LIST_LEN),
            insight: String::new(),
            selected: 0,
            profile: None,
            profile_scroll: 0,
            era_request: 0,
            profile_request: 0,
            pending_era: None,
            pending_profile: None,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_era.is_some() || self.pending_profile.is_some()
    }

    pub fn era_loading(&self) -> bool {
        self.pending_era.is_some()
    }

    /// Starts a list + insight load for the current era and filters.
    pub fn begin_era_load(&mut self) -> ProviderCommand {
        self.era_request += 1;
        self.pending_era = Some(self.era_request);
        ProviderCommand::LoadEra {
            request: self.era_request,
            era: self.era,
            filters: self.filters.clone(),
        }
    }

    /// The explicit "apply" action: reload with whatever filters are set.
    pub fn reload(&mut self) -> ProviderCommand {
        self.begin_era_load()
    }

    pub fn set_era(&mut self, era: Era) -> Option<ProviderCommand> {
        if era == self.era {
            return None;
        }
        self.era = era;
        Some(self.begin_era_load())
    }

    pub fn next_era(&mut self) -> Option<ProviderCommand> {
        let next = self.era.next()?;
        self.set_era(next)
    }

    pub fn prev_era(&mut self) -> Option<ProviderCommand> {
        let prev = self.era.prev()?;
        self.set_era(prev)
    }

    pub fn cycle_country(&mut self) -> ProviderCommand {
        self.filters.country = cycle_option(self.filters.country, &COUNTRIES);
        self.begin_era_load()
    }

    pub fn cycle_role(&mut self) -> ProviderCommand {
        self.filters.role = cycle_option(self.filters.role, &Role::ALL);
        self.begin_era_load()
    }

    pub fn clear_filters(&mut self) -> ProviderCommand {
        self.filters = FilterState::default();
        self.search_active = false;
        self.begin_era_load()
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.filters.search.push(ch);
    }

    pub fn pop_search_char(&mut self) {
        self.filters.search.pop();
    }

    /// Leaves the input without loading; the typed term is kept for the next load.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
    }

    pub fn submit_search(&mut self) -> ProviderCommand {
        self.search_active = false;
        self.begin_era_load()
    }

    pub fn selected_player(&self) -> Option<&str> {
        self.players.get(self.selected).map(String::as_str)
    }

    pub fn select_player(&mut self) -> Option<ProviderCommand> {
        let name = self.selected_player()?.to_string();
        self.profile_request += 1;
        self.pending_profile = Some(self.profile_request);
        Some(ProviderCommand::LoadProfile {
            request: self.profile_request,
            name,
        })
    }

    pub fn back_to_archive(&mut self) {
        self.screen = Screen::Archive;
        self.profile = None;
        self.profile_scroll = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.players.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + GRID_COLUMNS < self.players.len() {
            self.selected += GRID_COLUMNS;
        }
    }

    pub fn select_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn scroll_profile_down(&mut self, max_scroll: u16) {
        self.profile_scroll = self.profile_scroll.saturating_add(1).min(max_scroll);
    }

    pub fn scroll_profile_up(&mut self) {
        self.profile_scroll = self.profile_scroll.saturating_sub(1);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::EraLoaded {
            request,
            players,
            insight,
        } => {
            if state.pending_era != Some(request) {
                state.push_log(format!("[INFO] Dropped superseded era results (#{request})"));
                return;
            }
            state.pending_era = None;
            state.players = players;
            state.insight = insight;
            state.selected = 0;
        }
        Delta::ProfileLoaded {
            request,
            name,
            profile,
        } => {
            if state.pending_profile != Some(request) {
                state.push_log(format!("[INFO] Dropped superseded profile for {name}"));
                return;
            }
            state.pending_profile = None;
            match profile {
                Some(profile) => {
                    state.profile = Some(profile);
                    state.profile_scroll = 0;
                    state.screen = Screen::Profile;
                }
                None => {
                    state.push_log(format!("[WARN] No profile available for {name}"));
                }
            }
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

// Generated statistics arrive as numbers, numeric strings ("6,996") or null.
// Placeholders such as "N/A" mean absent; anything else that is not a
// non-negative finite number is a decode error.
fn figure_from_value<E: serde::de::Error>(value: Value) -> Result<Option<f64>, E> {
    let figure = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| *c != ',' && *c != '*').collect();
            let cleaned = cleaned.trim();
            if is_placeholder(cleaned) {
                return Ok(None);
            }
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    };
    match figure {
        Some(figure) if figure.is_finite() && figure >= 0.0 => Ok(Some(figure)),
        _ => Err(E::custom(format!("invalid statistic {value}"))),
    }
}

fn is_placeholder(cleaned: &str) -> bool {
    cleaned.is_empty()
        || cleaned == "-"
        || cleaned.eq_ignore_ascii_case("n/a")
        || cleaned.eq_ignore_ascii_case("na")
}

fn de_opt_figure<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    figure_from_value(Value::deserialize(deserializer)?)
}

fn de_figure<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    de_opt_figure(deserializer)?.ok_or_else(|| D::Error::custom("missing required statistic"))
}

fn de_opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_figure(deserializer)?.map(|figure| figure.round().min(u32::MAX as f64) as u32))
}

fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    de_opt_count(deserializer)?.ok_or_else(|| D::Error::custom("missing required count"))
}
