use std::collections::HashSet;

use crate::error::{GatewayError, GatewayResult};
use crate::gemini::{GenerateRequest, TextGenerator};
use crate::reference::Era;
use crate::schema::{player_profile_schema, string_list_schema};
use crate::state::{FilterState, PLAYER_LIST_LEN, PlayerProfile};

/// The three questions the app asks the generation service.
pub trait Archive: Send + Sync {
    fn list_players(&self, era: Era, filters: &FilterState) -> GatewayResult<Vec<String>>;
    fn player_profile(&self, name: &str) -> GatewayResult<PlayerProfile>;
    fn era_insight(&self, era: Era) -> GatewayResult<String>;
}

pub struct GeminiArchive<G> {
    generator: G,
}

impl<G: TextGenerator> GeminiArchive<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

impl<G: TextGenerator> Archive for GeminiArchive<G> {
    fn list_players(&self, era: Era, filters: &FilterState) -> GatewayResult<Vec<String>> {
        let request = GenerateRequest::json(players_prompt(era, filters), string_list_schema());
        let text = self
            .generator
            .generate(&request)?
            .ok_or(GatewayError::EmptyResponse)?;
        parse_player_names_json(&text)
    }

    fn player_profile(&self, name: &str) -> GatewayResult<PlayerProfile> {
        let request = GenerateRequest::json(profile_prompt(name), player_profile_schema());
        let text = self
            .generator
            .generate(&request)?
            .ok_or(GatewayError::EmptyResponse)?;
        parse_player_profile_json(&text)
    }

    fn era_insight(&self, era: Era) -> GatewayResult<String> {
        let request = GenerateRequest::text(insight_prompt(era));
        let text = self.generator.generate(&request)?;
        Ok(text.map(|t| t.trim().to_string()).unwrap_or_default())
    }
}

pub fn players_prompt(era: Era, filters: &FilterState) -> String {
    let mut lines = vec![format!(
        "List {PLAYER_LIST_LEN} legendary and impactful cricket players from the era: \"{}\".",
        era.label()
    )];
    if let Some(country) = filters.country {
        lines.push(format!("Filter by country: {country}."));
    }
    if let Some(role) = filters.role {
        lines.push(format!("Include players who are: {}.", role.label()));
    }
    if let Some(term) = filters.search_term() {
        lines.push(format!("Focus on results similar to: {term}."));
    }
    lines.push("Return ONLY a JSON array of their full names.".to_string());
    lines.join("\n")
}

pub fn profile_prompt(name: &str) -> String {
    [
        format!("Provide a detailed history and career profile for the cricketer \"{name}\"."),
        "Include all requested sections: Stats (Test, ODI, T20 where applicable), Iconic Moments, Strengths, Impact, and Legacy.".to_string(),
        "Ensure statistics are historically accurate. If it's a very early player (e.g. 1700s), provide estimated first-class or relevant era stats.".to_string(),
        "Use one of Batter, Bowler, All-rounder or Wicketkeeper for the role.".to_string(),
    ]
    .join("\n")
}

pub fn insight_prompt(era: Era) -> String {
    format!(
        "Provide a compelling 2-paragraph summary of how the game of cricket evolved during the era: \"{}\".\nHighlight tactical changes, social impact, and key technological or rule advancements.",
        era.label()
    )
}

/// Decodes a generated name list: trimmed, blanks and repeats dropped, at most
/// `PLAYER_LIST_LEN` entries.
pub fn parse_player_names_json(raw: &str) -> GatewayResult<Vec<String>> {
    let body = strip_code_fence(raw);
    if body.is_empty() || body == "null" {
        return Err(GatewayError::EmptyResponse);
    }
    let names: Vec<String> = serde_json::from_str(body)?;
    let mut seen = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(PLAYER_LIST_LEN);
    for name in names {
        let name = name.trim();
        if name.is_empty() || !seen.insert(name.to_lowercase()) {
            continue;
        }
        out.push(name.to_string());
        if out.len() == PLAYER_LIST_LEN {
            break;
        }
    }
    Ok(out)
}

pub fn parse_player_profile_json(raw: &str) -> GatewayResult<PlayerProfile> {
    let body = strip_code_fence(raw);
    if body.is_empty() || body == "null" || body == "{}" {
        return Err(GatewayError::EmptyResponse);
    }
    let profile: PlayerProfile = serde_json::from_str(body)?;
    validate_profile(profile)
}

fn validate_profile(mut profile: PlayerProfile) -> GatewayResult<PlayerProfile> {
    profile.full_name = profile.full_name.trim().to_string();
    if profile.full_name.is_empty() {
        return Err(GatewayError::invalid("profile has no name"));
    }
    profile.nickname = profile
        .nickname
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    profile.career_statistics.retain(|line| !line.format.trim().is_empty());

    for list in [
        &mut profile.formats_played,
        &mut profile.major_achievements,
        &mut profile.iconic_moments,
        &mut profile.interesting_facts,
    ] {
        list.retain(|item| !item.trim().is_empty());
    }
    Ok(profile)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
