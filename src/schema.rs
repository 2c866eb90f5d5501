//! Output shapes requested from the generation service, in Gemini's
//! OpenAPI-subset schema dialect.

use serde_json::{Value, json};

/// Wire fields the service must always populate in a profile.
pub const PROFILE_REQUIRED: [&str; 7] = [
    "fullName",
    "country",
    "playingEra",
    "role",
    "careerStatistics",
    "majorAchievements",
    "legacySummary",
];

pub fn string_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

pub fn stat_line_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "format": { "type": "STRING" },
            "matches": { "type": "NUMBER" },
            "runs": { "type": "NUMBER" },
            "wickets": { "type": "NUMBER" },
            "average": { "type": "NUMBER" },
            "strikeRate": { "type": "NUMBER" },
            "economy": { "type": "NUMBER" }
        },
        "required": ["format", "matches", "average"]
    })
}

pub fn player_profile_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "fullName": { "type": "STRING" },
            "nickname": { "type": "STRING" },
            "dateOfBirth": { "type": "STRING" },
            "placeOfBirth": { "type": "STRING" },
            "country": { "type": "STRING" },
            "playingEra": { "type": "STRING" },
            "role": {
                "type": "STRING",
                "enum": ["Batter", "Bowler", "All-rounder", "Wicketkeeper"]
            },
            "battingStyle": { "type": "STRING" },
            "bowlingStyle": { "type": "STRING" },
            "formatsPlayed": string_list_schema(),
            "careerStatistics": { "type": "ARRAY", "items": stat_line_schema() },
            "eraRating": { "type": "STRING" },
            "majorAchievements": string_list_schema(),
            "iconicMoments": string_list_schema(),
            "strengths": { "type": "STRING" },
            "impact": { "type": "STRING" },
            "interestingFacts": string_list_schema(),
            "legacySummary": { "type": "STRING" }
        },
        "required": PROFILE_REQUIRED
    })
}
