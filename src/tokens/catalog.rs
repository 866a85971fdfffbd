//! Token definitions - the collectible pieces spells are assembled from.
//!
//! Tokens are immutable value definitions. A player's inventory holds
//! owned copies; wagers and the arena pool move those copies around.
//! The kind is a closed sum type so every cast branch is matched
//! exhaustively at compile time.

use serde::{Deserialize, Serialize};

/// Spell element carried by Effect tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Earth,
    Air,
    Fire,
    Water,
    Electricity,
    Weapon,
    /// Explosive spells cause large knockback
    Explosion,
    /// Freezing spells temporarily immobilise the opponent
    Freeze,
}

impl Element {
    /// Single-letter glyph shown on the token face.
    pub fn symbol(self) -> char {
        match self {
            Element::Earth => 'E',
            Element::Air => 'A',
            Element::Fire => 'F',
            Element::Water => 'W',
            Element::Electricity => 'L',
            Element::Weapon => 'S',
            Element::Explosion => 'X',
            Element::Freeze => 'I',
        }
    }

    /// Glow color as linear RGB components.
    pub fn glow(self) -> (f32, f32, f32) {
        match self {
            Element::Earth => (0.4, 0.2, 0.0),
            Element::Air => (0.8, 0.8, 1.0),
            Element::Fire => (1.0, 0.3, 0.0),
            Element::Water => (0.0, 0.4, 0.8),
            Element::Electricity => (1.0, 1.0, 0.0),
            Element::Weapon => (0.7, 0.7, 0.7),
            Element::Explosion => (1.0, 0.5, 0.2),
            Element::Freeze => (0.5, 0.8, 1.0),
        }
    }
}

/// How an Area token shapes the spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaTarget {
    Direct,
    Wide,
    Radiating,
    SelfCast,
}

/// Strength tier for hound companions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoundTier {
    Minor,
    Greater,
    Dire,
}

/// Token variant with its kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    Power,
    Area {
        target: AreaTarget,
    },
    Effect {
        element: Element,
    },
    Levitation {
        /// Additional speed multiplier applied while levitation is active
        speed_multiplier: f32,
    },
    Shield {
        /// Defense multiplier applied when shielding
        defense_multiplier: f32,
    },
    Companion {
        tier: HoundTier,
        /// Token cost required to purchase this hound
        cost: u32,
    },
    Shout {
        message: String,
        cost: u32,
    },
}

/// Kind discriminant used for wager matching - wagers pair up by kind,
/// not by exact token identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenTag {
    Power,
    Area,
    Effect,
    Levitation,
    Shield,
    Companion,
    Shout,
}

impl TokenKind {
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Power => TokenTag::Power,
            TokenKind::Area { .. } => TokenTag::Area,
            TokenKind::Effect { .. } => TokenTag::Effect,
            TokenKind::Levitation { .. } => TokenTag::Levitation,
            TokenKind::Shield { .. } => TokenTag::Shield,
            TokenKind::Companion { .. } => TokenTag::Companion,
            TokenKind::Shout { .. } => TokenTag::Shout,
        }
    }
}

/// A castable/equippable token definition.
///
/// `power` is non-negative by construction convention; `area` is only
/// clamped to the legal projectile range at spell-cast time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub power: f32,
    pub area: f32,
    /// Glyph shown on the token face
    pub symbol: char,
    /// Glow color as linear RGB components
    pub glow: (f32, f32, f32),
}

impl Token {
    pub fn power(power: f32) -> Self {
        Self {
            kind: TokenKind::Power,
            power,
            area: 1.0,
            symbol: '?',
            glow: (1.0, 1.0, 1.0),
        }
    }

    pub fn area(target: AreaTarget, area: f32) -> Self {
        Self {
            kind: TokenKind::Area { target },
            power: 1.0,
            area,
            symbol: 'A',
            glow: (0.0, 1.0, 0.0),
        }
    }

    pub fn effect(element: Element, power: f32, area: f32) -> Self {
        Self {
            kind: TokenKind::Effect { element },
            power,
            area,
            symbol: element.symbol(),
            glow: element.glow(),
        }
    }

    pub fn levitation(power: f32, speed_multiplier: f32) -> Self {
        Self {
            kind: TokenKind::Levitation { speed_multiplier },
            power,
            area: 1.0,
            symbol: '^',
            glow: (0.6, 0.4, 1.0),
        }
    }

    pub fn shield(power: f32, defense_multiplier: f32) -> Self {
        Self {
            kind: TokenKind::Shield { defense_multiplier },
            power,
            area: 1.0,
            symbol: 'O',
            glow: (0.2, 0.6, 1.0),
        }
    }

    pub fn companion(tier: HoundTier, cost: u32) -> Self {
        Self {
            kind: TokenKind::Companion { tier, cost },
            power: 0.0,
            area: 0.0,
            symbol: 'H',
            glow: (1.0, 0.0, 0.0),
        }
    }

    pub fn shout(message: impl Into<String>, cost: u32) -> Self {
        Self {
            kind: TokenKind::Shout {
                message: message.into(),
                cost,
            },
            power: 0.0,
            area: 0.0,
            symbol: '!',
            glow: (1.0, 1.0, 0.0),
        }
    }

    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_ignore_kind_payloads() {
        let fire = Token::effect(Element::Fire, 5.0, 1.0);
        let freeze = Token::effect(Element::Freeze, 1.0, 2.0);
        assert_eq!(fire.tag(), freeze.tag());
        assert_ne!(fire.tag(), Token::power(1.0).tag());
        assert_ne!(
            Token::levitation(1.0, 2.0).tag(),
            Token::shield(1.0, 2.0).tag()
        );
    }

    #[test]
    fn element_glyphs_are_distinct() {
        use Element::*;
        let all = [Earth, Air, Fire, Water, Electricity, Weapon, Explosion, Freeze];
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(a.symbol(), b.symbol(), "{a:?} vs {b:?}");
                }
            }
        }
    }

    #[test]
    fn shout_and_companion_carry_no_spell_stats() {
        let shout = Token::shout("Roar!", 1);
        assert_eq!(shout.power, 0.0);
        assert_eq!(shout.area, 0.0);
        let hound = Token::companion(HoundTier::Minor, 1);
        assert_eq!(hound.power, 0.0);
    }
}
