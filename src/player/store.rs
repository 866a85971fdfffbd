//! The castle store - robes, hounds, and shout attacks bought with
//! tokens. Robe definitions load from a RON data file.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::profile::PlayerProfile;
use crate::tokens::{HoundTier, Token, TokenKind};

/// Robe definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct RobeData {
    pub name: String,
    #[serde(default)]
    pub attack_bonus: f32,
    #[serde(default)]
    pub shield_bonus: f32,
    #[serde(default)]
    pub cost: u32,
    /// Grants the Speedy burst special instead of a stat bonus
    #[serde(default)]
    pub speedy: bool,
}

/// Resource holding all loaded robe definitions.
#[derive(Resource, Default)]
pub struct RobeRegistry {
    pub robes: Vec<RobeData>,
}

impl RobeRegistry {
    /// Look up robe data by name (case-folded).
    pub fn get(&self, name: &str) -> Option<&RobeData> {
        self.robes
            .iter()
            .find(|robe| robe.name.eq_ignore_ascii_case(name))
    }
}

/// Load robe definitions from assets/data/robes.ron.
pub fn load_robe_definitions(mut registry: ResMut<RobeRegistry>) {
    let path = Path::new("assets/data/robes.ron");

    if !path.exists() {
        warn!("Robe definitions file not found: {:?}", path);
        return;
    }

    match fs::read_to_string(path) {
        Ok(contents) => match ron::from_str::<Vec<RobeData>>(&contents) {
            Ok(robes) => {
                info!("Loaded {} robe definitions", robes.len());
                registry.robes = robes;
            }
            Err(e) => {
                error!("Failed to parse robe definitions {:?}: {}", path, e);
            }
        },
        Err(e) => {
            error!("Failed to read robe definitions {:?}: {}", path, e);
        }
    }
}

/// Purchase a robe. Fails on duplicates or insufficient tokens.
pub fn buy_robe(profile: &mut PlayerProfile, robe: &RobeData) -> bool {
    if profile
        .owned_robes
        .iter()
        .any(|owned| owned.eq_ignore_ascii_case(&robe.name))
    {
        return false;
    }
    if !profile.spend_tokens(robe.cost as usize) {
        return false;
    }
    profile.owned_robes.push(robe.name.clone());
    true
}

/// Equip an owned robe, copying its bonuses onto the profile.
pub fn equip_robe(profile: &mut PlayerProfile, registry: &RobeRegistry, name: &str) -> bool {
    if !profile
        .owned_robes
        .iter()
        .any(|owned| owned.eq_ignore_ascii_case(name))
    {
        return false;
    }
    let Some(robe) = registry.get(name) else {
        return false;
    };
    profile.equipped_robe = robe.name.clone();
    profile.robe_attack_bonus = robe.attack_bonus;
    profile.robe_shield_bonus = robe.shield_bonus;
    true
}

/// Spend tokens to buy a hell hound companion. The first purchase is
/// auto-selected for summoning.
pub fn buy_hound(profile: &mut PlayerProfile, tier: HoundTier, cost: u32) -> bool {
    if profile.owned_hounds.contains(&tier) {
        return false;
    }
    if !profile.spend_tokens(cost as usize) {
        return false;
    }
    profile.owned_hounds.push(tier);
    if profile.selected_hound.is_none() {
        profile.selected_hound = Some(tier);
    }
    true
}

/// Purchase a shout attack token.
pub fn buy_shout(profile: &mut PlayerProfile, shout: &Token) -> bool {
    let TokenKind::Shout { cost, .. } = &shout.kind else {
        return false;
    };
    if profile.owned_shouts.contains(shout) {
        return false;
    }
    if !profile.spend_tokens(*cost as usize) {
        return false;
    }
    profile.owned_shouts.push(shout.clone());
    true
}

/// Equip a purchased shout attack.
pub fn equip_shout(profile: &mut PlayerProfile, shout: &Token) -> bool {
    if !profile.owned_shouts.contains(shout) {
        return false;
    }
    profile.equipped_shout = Some(shout.clone());
    true
}
