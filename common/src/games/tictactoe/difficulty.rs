use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Insane,
}

/// Display-only data shown next to the difficulty picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyStats {
    pub name: &'static str,
    pub description: &'static str,
    pub win_rate: &'static str,
    pub icon: &'static str,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn stats(&self) -> DifficultyStats {
        match self {
            Difficulty::Easy => DifficultyStats {
                name: "Easy",
                description: "Suitable for beginners",
                win_rate: "~80%",
                icon: "😊",
            },
            Difficulty::Medium => DifficultyStats {
                name: "Medium",
                description: "A moderate challenge",
                win_rate: "~50%",
                icon: "🤔",
            },
            Difficulty::Hard => DifficultyStats {
                name: "Hard",
                description: "A smart opponent",
                win_rate: "~20%",
                icon: "😤",
            },
            Difficulty::Insane => DifficultyStats {
                name: "Insane",
                description: "Nearly impossible to win!",
                win_rate: "~0%",
                icon: "🤖",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?}, expected one of: easy, medium, hard, insane")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == wanted)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
