//! Save slots - the flattened player record written as RON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::SaveError;
use crate::player::{Appearance, Language, PlayerProfile, SpellLogEntry};
use crate::progression::Progression;
use crate::tokens::{HoundTier, Token};

/// Flattened player record persisted to a save slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub experience: i64,
    pub token_inventory: Vec<Token>,
    pub appearance: Appearance,
    pub owned_robes: Vec<String>,
    pub equipped_robe: String,
    pub robe_attack_bonus: f32,
    pub robe_shield_bonus: f32,
    pub owned_hounds: Vec<HoundTier>,
    pub selected_hound: Option<HoundTier>,
    pub owned_shouts: Vec<Token>,
    pub equipped_shout: Option<Token>,
    pub custom_taunt: String,
    pub spell_log: Vec<SpellLogEntry>,
    pub achievements: Vec<String>,
    pub language: Language,
}

impl SaveData {
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            experience: profile.progression.experience(),
            token_inventory: profile.token_inventory.clone(),
            appearance: profile.appearance.clone(),
            owned_robes: profile.owned_robes.clone(),
            equipped_robe: profile.equipped_robe.clone(),
            robe_attack_bonus: profile.robe_attack_bonus,
            robe_shield_bonus: profile.robe_shield_bonus,
            owned_hounds: profile.owned_hounds.clone(),
            selected_hound: profile.selected_hound,
            owned_shouts: profile.owned_shouts.clone(),
            equipped_shout: profile.equipped_shout.clone(),
            custom_taunt: profile.custom_taunt.clone(),
            spell_log: profile.spell_log.clone(),
            achievements: profile.achievements.clone(),
            language: profile.language,
        }
    }

    /// Overwrite a profile with this record. Wagers are transient and
    /// never persisted, so the wager list is left untouched.
    pub fn apply_to(&self, profile: &mut PlayerProfile) {
        profile.progression = Progression::new(self.experience);
        profile.token_inventory = self.token_inventory.clone();
        profile.appearance = self.appearance.clone();
        profile.owned_robes = self.owned_robes.clone();
        profile.equipped_robe = self.equipped_robe.clone();
        profile.robe_attack_bonus = self.robe_attack_bonus;
        profile.robe_shield_bonus = self.robe_shield_bonus;
        profile.owned_hounds = self.owned_hounds.clone();
        profile.selected_hound = self.selected_hound;
        profile.owned_shouts = self.owned_shouts.clone();
        profile.equipped_shout = self.equipped_shout.clone();
        profile.custom_taunt = self.custom_taunt.clone();
        profile.spell_log = self.spell_log.clone();
        profile.achievements = self.achievements.clone();
        profile.language = self.language;
    }
}

fn slot_path(directory: &Path, slot_name: &str) -> PathBuf {
    directory.join(format!("{slot_name}.ron"))
}

/// Write the player's record to the named slot.
pub fn save_player(
    profile: &PlayerProfile,
    slot_name: &str,
    directory: &Path,
) -> Result<(), SaveError> {
    let data = SaveData::from_profile(profile);
    let contents = ron::ser::to_string_pretty(&data, Default::default())?;
    fs::create_dir_all(directory)?;
    fs::write(slot_path(directory, slot_name), contents)?;
    Ok(())
}

/// Read the record stored in the named slot.
pub fn load_player(slot_name: &str, directory: &Path) -> Result<SaveData, SaveError> {
    let contents = fs::read_to_string(slot_path(directory, slot_name))?;
    Ok(ron::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Element;
    use std::env;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("wizard-war-saves-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn sample_profile() -> PlayerProfile {
        let mut profile = PlayerProfile::default();
        profile.progression = Progression::new(750);
        profile.token_inventory = vec![
            Token::effect(Element::Fire, 3.0, 1.5),
            Token::shield(2.0, 1.5),
        ];
        profile.owned_robes = vec!["TieDye".to_string()];
        profile.equipped_robe = "TieDye".to_string();
        profile.robe_attack_bonus = 5.0;
        profile.selected_hound = Some(HoundTier::Greater);
        profile.set_custom_taunt("Tremble!");
        profile.add_spell_entry("Ember", vec![Token::effect(Element::Fire, 1.0, 1.0)]);
        profile
    }

    #[test]
    fn save_then_load_restores_the_record() {
        let dir = scratch_dir("roundtrip");
        let profile = sample_profile();

        save_player(&profile, "slot1", &dir).expect("save");
        let loaded = load_player("slot1", &dir).expect("load");

        let mut restored = PlayerProfile::default();
        loaded.apply_to(&mut restored);
        assert_eq!(restored, profile);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn wagers_are_never_persisted() {
        let dir = scratch_dir("wager");
        let mut profile = sample_profile();
        profile.wager = vec![Token::power(1.0); 3];

        save_player(&profile, "slot1", &dir).expect("save");
        let loaded = load_player("slot1", &dir).expect("load");

        let mut restored = PlayerProfile::default();
        restored.wager = vec![Token::power(9.0)];
        loaded.apply_to(&mut restored);
        assert_eq!(restored.wager.len(), 1); // untouched by the load

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_slot_is_an_error() {
        let dir = scratch_dir("missing");
        assert!(load_player("nope", &dir).is_err());
    }
}
