//! Player profile - progression, inventory, appearance, taunts, and
//! the spell log. This is the flattened record the save system
//! persists.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::progression::Progression;
use crate::tokens::{HoundTier, Token, TokenKind};

/// Words masked out of player-provided taunt text.
const BANNED_WORDS: &[&str] = &["scrub", "trash", "loser"];

/// Preferred language for UI text. The text tables themselves live
/// outside this crate; the preference just rides along in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

/// Visual appearance information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub skin_color: (f32, f32, f32),
    pub hair_color: (f32, f32, f32),
    pub eye_color: (f32, f32, f32),
    pub height: f32,
    pub body_type: String,
    pub hair_style: String,
    pub robe_color: (f32, f32, f32),
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            skin_color: (1.0, 1.0, 1.0),
            hair_color: (0.0, 0.0, 0.0),
            eye_color: (0.1, 0.1, 0.1),
            height: 1.0,
            body_type: "Average".to_string(),
            hair_style: "Short".to_string(),
            robe_color: (1.0, 1.0, 1.0),
        }
    }
}

/// A record of a custom spell assembled from tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellLogEntry {
    /// Player-provided name for the spell
    pub name: String,
    /// Tokens that make up the spell chain
    pub tokens: Vec<Token>,
}

/// Everything a player owns and has earned.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub progression: Progression,
    /// Tokens owned by the player
    pub token_inventory: Vec<Token>,
    /// Tokens currently wagered in a bet match or arena battle
    pub wager: Vec<Token>,
    pub appearance: Appearance,
    /// Robes the player has purchased, by name
    pub owned_robes: Vec<String>,
    pub equipped_robe: String,
    /// Attack bonus provided by the equipped robe
    pub robe_attack_bonus: f32,
    /// Shield bonus provided by the equipped robe
    pub robe_shield_bonus: f32,
    /// Purchased hound companions
    pub owned_hounds: Vec<HoundTier>,
    /// Hound to spawn each match
    pub selected_hound: Option<HoundTier>,
    /// Purchased shout tokens
    pub owned_shouts: Vec<Token>,
    pub equipped_shout: Option<Token>,
    /// Custom taunt message provided by the player
    pub custom_taunt: String,
    /// Spells the player has assembled
    pub spell_log: Vec<SpellLogEntry>,
    pub achievements: Vec<String>,
    pub language: Language,
}

impl PlayerProfile {
    /// True if the special tie-dye robe is equipped (case-folded).
    pub fn is_tie_dye_robe(&self) -> bool {
        self.equipped_robe.eq_ignore_ascii_case("tiedye")
    }

    pub fn set_custom_taunt(&mut self, message: impl Into<String>) {
        self.custom_taunt = message.into();
    }

    /// The taunt to perform: the custom message when set, otherwise the
    /// equipped shout's default. Banned words are masked either way.
    pub fn censored_taunt(&self) -> Option<String> {
        let raw = if !self.custom_taunt.is_empty() {
            Some(self.custom_taunt.clone())
        } else if let Some(Token {
            kind: TokenKind::Shout { message, .. },
            ..
        }) = &self.equipped_shout
        {
            Some(message.clone())
        } else {
            None
        };
        raw.map(|text| censor(&text))
    }

    /// Add a new spell to the log. Returns true if it was new and
    /// grants an achievement.
    pub fn add_spell_entry(&mut self, name: impl Into<String>, tokens: Vec<Token>) -> bool {
        let name = name.into();
        if self.spell_log.iter().any(|entry| entry.name == name) {
            return false;
        }
        self.achievements.push(format!("Assembled spell: {name}"));
        self.spell_log.push(SpellLogEntry { name, tokens });
        true
    }

    /// Spend tokens (any kind) from the inventory. Silent no-op with a
    /// false return when there are not enough.
    pub fn spend_tokens(&mut self, count: usize) -> bool {
        if self.token_inventory.len() < count {
            return false;
        }
        self.token_inventory.truncate(self.token_inventory.len() - count);
        true
    }
}

/// Mask banned words, keeping their length visible.
fn censor(text: &str) -> String {
    let mut result = text.to_string();
    for word in BANNED_WORDS {
        // ASCII fold keeps byte offsets aligned with the original text
        let lower = result.to_ascii_lowercase();
        let mut masked = result.into_bytes();
        let mut from = 0;
        while let Some(at) = lower[from..].find(word) {
            let start = from + at;
            for byte in &mut masked[start..start + word.len()] {
                *byte = b'*';
            }
            from = start + word.len();
        }
        result = String::from_utf8(masked).unwrap_or_default();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Element;

    #[test]
    fn censored_taunt_prefers_custom_message() {
        let mut profile = PlayerProfile {
            equipped_shout: Some(Token::shout("Roar!", 1)),
            ..Default::default()
        };
        assert_eq!(profile.censored_taunt().as_deref(), Some("Roar!"));
        profile.set_custom_taunt("You absolute scrub");
        assert_eq!(
            profile.censored_taunt().as_deref(),
            Some("You absolute *****")
        );
    }

    #[test]
    fn censor_masks_every_occurrence_case_insensitively() {
        assert_eq!(censor("Trash talk, TRASH walk"), "***** talk, ***** walk");
    }

    #[test]
    fn no_taunt_without_shout_or_custom_message() {
        let profile = PlayerProfile::default();
        assert_eq!(profile.censored_taunt(), None);
    }

    #[test]
    fn spell_log_rewards_new_entries_only() {
        let mut profile = PlayerProfile::default();
        let tokens = vec![Token::power(2.0), Token::effect(Element::Fire, 2.0, 1.0)];
        assert!(profile.add_spell_entry("Twin Flame", tokens.clone()));
        assert_eq!(profile.achievements.len(), 1);
        assert!(!profile.add_spell_entry("Twin Flame", tokens));
        assert_eq!(profile.spell_log.len(), 1);
        assert_eq!(profile.achievements.len(), 1);
    }

    #[test]
    fn spending_tokens_requires_funds() {
        let mut profile = PlayerProfile::default();
        profile.token_inventory = vec![Token::power(1.0); 3];
        assert!(!profile.spend_tokens(4));
        assert_eq!(profile.token_inventory.len(), 3);
        assert!(profile.spend_tokens(2));
        assert_eq!(profile.token_inventory.len(), 1);
    }

    #[test]
    fn tie_dye_check_is_case_folded() {
        let mut profile = PlayerProfile::default();
        profile.equipped_robe = "TieDye".to_string();
        assert!(profile.is_tie_dye_robe());
        profile.equipped_robe = "TIEDYE".to_string();
        assert!(profile.is_tie_dye_robe());
        profile.equipped_robe = "Speedy".to_string();
        assert!(!profile.is_tie_dye_robe());
    }
}
