use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{errors::InvalidInput, pose::CameraPose};

/// Interaction mode of a subject. Playback switches the subject into a session's target mode
/// and restores the previous mode afterwards.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Survival,
        GameMode::Creative,
        GameMode::Adventure,
        GameMode::Spectator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Survival => "survival",
            GameMode::Creative => "creative",
            GameMode::Adventure => "adventure",
            GameMode::Spectator => "spectator",
        }
    }
}

impl FromStr for GameMode {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == lowered)
            .ok_or_else(|| InvalidInput::UnknownGameMode(s.to_string()))
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Access to the subjects being moved around, provided by the host.
///
/// `K` identifies a subject (a player, an entity). Every method reports whether the subject
/// still exists: `None` or `false` means the host no longer knows about it.
pub trait SubjectHost<K> {
    fn current_pose(&self, subject: &K) -> Option<CameraPose>;

    fn current_mode(&self, subject: &K) -> Option<GameMode>;

    fn set_mode(&mut self, subject: &K, mode: GameMode) -> bool;

    /// Moves the subject to `pose`. Called once per tick during playback.
    fn deliver_pose(&mut self, subject: &K, pose: &CameraPose) -> bool;
}
