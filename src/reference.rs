use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Era {
    EarlyPioneers,
    #[default]
    GoldenAge,
    PostWar,
    OdiRevolution,
    ModernT20,
}

impl Era {
    pub const ALL: [Era; 5] = [
        Era::EarlyPioneers,
        Era::GoldenAge,
        Era::PostWar,
        Era::OdiRevolution,
        Era::ModernT20,
    ];

    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Display name, also the era label sent to the generation service.
    pub fn label(self) -> &'static str {
        match self {
            Era::EarlyPioneers => "Early Pioneers (16th C - 1876)",
            Era::GoldenAge => "The Golden Age & Bodyline (1877 - 1945)",
            Era::PostWar => "Post-War & Professionalism (1946 - 1970)",
            Era::OdiRevolution => "The World Cup Era (1971 - 1999)",
            Era::ModernT20 => "Modern T20 & Franchise Era (2000 - Present)",
        }
    }

    pub fn info(self) -> &'static EraInfo {
        &ERAS[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            Era::EarlyPioneers => 0,
            Era::GoldenAge => 1,
            Era::PostWar => 2,
            Era::OdiRevolution => 3,
            Era::ModernT20 => 4,
        }
    }

    /// The following era, or `None` on the last one. Does not wrap.
    pub fn next(self) -> Option<Era> {
        Era::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Era> {
        self.index().checked_sub(1).and_then(|idx| Era::ALL.get(idx).copied())
    }

    /// Short tab label: the id with a capitalised first letter.
    pub fn tab_label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Era {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        Era::ALL
            .into_iter()
            .find(|era| era.id().eq_ignore_ascii_case(key) || era.label().eq_ignore_ascii_case(key))
            .ok_or_else(|| format!("unknown era: {key}"))
    }
}

#[derive(Debug)]
pub struct EraInfo {
    pub id: &'static str,
    pub era: Era,
    pub description: &'static str,
    pub key_evolution: &'static str,
    pub did_you_know: &'static str,
}

pub const ERAS: [EraInfo; 5] = [
    EraInfo {
        id: "early",
        era: Era::EarlyPioneers,
        description: "The foundation of the game. Cricket moves from a rural pastime to a structured sport with the MCC and early legends of the 18th century.",
        key_evolution: "The transition from underarm to roundarm bowling and the development of the straight bat.",
        did_you_know: "The earliest known reference to cricket dates back to 1597, in a court case over a piece of land in Guildford, Surrey.",
    },
    EraInfo {
        id: "golden",
        era: Era::GoldenAge,
        description: "The era of Grace, Bradman, and the birth of international tests. Defining the techniques and rivalries that still exist today.",
        key_evolution: "Establishment of Test Cricket and the introduction of the Ashes. Professionalism begins to take root.",
        did_you_know: "Don Bradman needed only 4 runs in his final innings to retire with a Test average of 100. He was out for a duck.",
    },
    EraInfo {
        id: "postwar",
        era: Era::PostWar,
        description: "Cricket spreads globally. Modern legends from the Caribbean, Pakistan, and India emerge during a time of intense social change.",
        key_evolution: "The rise of fast bowling and more aggressive captaincy styles.",
        did_you_know: "The 1960-61 Test between Australia and West Indies in Brisbane was the first-ever tied Test in history.",
    },
    EraInfo {
        id: "odi",
        era: Era::OdiRevolution,
        description: "The birth of the World Cup and color clothing. Cricket becomes a televised spectacle with high-octane drama.",
        key_evolution: "Limited overs cricket transforms batting intent and athletic fielding standards.",
        did_you_know: "The first World Cup in 1975 was played with 60-over matches and white clothing.",
    },
    EraInfo {
        id: "modern",
        era: Era::ModernT20,
        description: "The franchise explosion. T20 cricket dominates the landscape, introducing innovative shots and global superstars.",
        key_evolution: "Power-hitting, ramp shots, and mystery spin revolutionize the tactical battle.",
        did_you_know: "The first T20 International was played between Australia and New Zealand in 2005 as a light-hearted exhibition match.",
    },
];

pub const COUNTRIES: [&str; 12] = [
    "England",
    "Australia",
    "South Africa",
    "West Indies",
    "India",
    "Pakistan",
    "New Zealand",
    "Sri Lanka",
    "Zimbabwe",
    "Bangladesh",
    "Afghanistan",
    "Ireland",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    Batter,
    Bowler,
    AllRounder,
    Wicketkeeper,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Batter, Role::Bowler, Role::AllRounder, Role::Wicketkeeper];

    pub fn label(self) -> &'static str {
        match self {
            Role::Batter => "Batter",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::Wicketkeeper => "Wicketkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    // Generated labels drift ("Batsman", "Wicket-keeper batter", "Allrounder");
    // the keeper check runs first so compound keeper labels stay keepers.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if key.contains("keeper") {
            Ok(Role::Wicketkeeper)
        } else if key.contains("allround") {
            Ok(Role::AllRounder)
        } else if key.contains("bowl") {
            Ok(Role::Bowler)
        } else if key.contains("bat") {
            Ok(Role::Batter)
        } else {
            Err(format!("unknown role: {}", raw.trim()))
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Steps an optional selection through `items`: unset, first, .., last, unset.
pub fn cycle_option<T: Copy + PartialEq>(current: Option<T>, items: &[T]) -> Option<T> {
    match current {
        None => items.first().copied(),
        Some(value) => {
            let idx = items.iter().position(|item| *item == value)?;
            items.get(idx + 1).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{COUNTRIES, Era, Role, cycle_option};

    #[test]
    fn era_table_matches_enum_order() {
        for era in Era::ALL {
            assert_eq!(era.info().era, era);
        }
        assert_eq!(Era::default(), Era::GoldenAge);
    }

    #[test]
    fn next_era_stops_at_last() {
        assert_eq!(Era::GoldenAge.next(), Some(Era::PostWar));
        assert_eq!(Era::ModernT20.next(), None);
        assert_eq!(Era::EarlyPioneers.prev(), None);
    }

    #[test]
    fn era_parses_from_id_or_label() {
        assert_eq!("odi".parse::<Era>(), Ok(Era::OdiRevolution));
        assert_eq!(
            "The Golden Age & Bodyline (1877 - 1945)".parse::<Era>(),
            Ok(Era::GoldenAge)
        );
        assert!("victorian".parse::<Era>().is_err());
        assert_eq!(Era::PostWar.tab_label(), "Postwar");
    }

    #[test]
    fn role_normalises_generated_labels() {
        assert_eq!("Batsman".parse::<Role>(), Ok(Role::Batter));
        assert_eq!("Wicket-keeper batter".parse::<Role>(), Ok(Role::Wicketkeeper));
        assert_eq!("All-rounder".parse::<Role>(), Ok(Role::AllRounder));
        assert_eq!("Right-arm fast bowler".parse::<Role>(), Ok(Role::Bowler));
        assert!("Umpire".parse::<Role>().is_err());
    }

    #[test]
    fn cycle_option_returns_to_unset() {
        let mut current = None;
        for expected in COUNTRIES {
            current = cycle_option(current, &COUNTRIES);
            assert_eq!(current, Some(expected));
        }
        assert_eq!(cycle_option(current, &COUNTRIES), None);
    }
}
