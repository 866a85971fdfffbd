//! Quick-slot loadouts - the per-arm token lists a caster cycles through.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::progression::{max_arm_slots, SLOT_UNLOCK_LEVEL};
use crate::tokens::Token;

/// One of the two independent casting channels a player controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arm {
    Left,
    Right,
}

impl Arm {
    pub fn other(self) -> Arm {
        match self {
            Arm::Left => Arm::Right,
            Arm::Right => Arm::Left,
        }
    }
}

/// Ordered token slots for one arm, with a wrapping selection cursor.
///
/// Slots may be empty (assigning to slot 4 first leaves 0..3 empty), so
/// the backing store holds options. The cursor stays within the equipped
/// array; capacity from the player's level only gates `assign`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmSlots {
    slots: Vec<Option<Token>>,
    cursor: usize,
}

impl ArmSlots {
    /// Assign a token to a quick slot. Silent no-op below the unlock
    /// level or past the level-derived capacity; grows the slot array
    /// as needed and overwrites whatever was there.
    pub fn assign(&mut self, token: Token, slot: usize, level: u32) -> bool {
        if level < SLOT_UNLOCK_LEVEL || slot >= max_arm_slots(level) {
            return false;
        }
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = Some(token);
        true
    }

    /// Advance the selection cursor. Silent no-op below the unlock
    /// level, while the arm is occupied by a persistent ability, or
    /// when nothing is equipped. Wraps modulo the equipped array
    /// length, not the level capacity.
    pub fn switch_slot(&mut self, level: u32, occupied: bool) -> bool {
        if level < SLOT_UNLOCK_LEVEL || occupied || self.slots.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.slots.len();
        true
    }

    /// The token under the cursor, if the cursor points at a filled slot.
    pub fn current(&self) -> Option<&Token> {
        self.slots.get(self.cursor).and_then(|slot| slot.as_ref())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Both arms' quick slots.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub left: ArmSlots,
    pub right: ArmSlots,
}

impl Loadout {
    pub fn arm(&self, arm: Arm) -> &ArmSlots {
        match arm {
            Arm::Left => &self.left,
            Arm::Right => &self.right,
        }
    }

    pub fn arm_mut(&mut self, arm: Arm) -> &mut ArmSlots {
        match arm {
            Arm::Left => &mut self.left,
            Arm::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Element;

    fn fire() -> Token {
        Token::effect(Element::Fire, 2.0, 1.0)
    }

    #[test]
    fn assign_requires_unlock_level() {
        let mut slots = ArmSlots::default();
        assert!(!slots.assign(fire(), 0, 4));
        assert!(slots.is_empty());
        assert!(slots.assign(fire(), 0, 5));
        assert_eq!(slots.current(), Some(&fire()));
    }

    #[test]
    fn assign_respects_level_capacity() {
        let mut slots = ArmSlots::default();
        // Level 5 grants 3 slots
        assert!(!slots.assign(fire(), 3, 5));
        assert!(slots.assign(fire(), 2, 5));
        // Level 10 grants 6
        assert!(slots.assign(fire(), 5, 10));
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn assign_grows_array_leaving_gaps_empty() {
        let mut slots = ArmSlots::default();
        assert!(slots.assign(fire(), 2, 5));
        assert_eq!(slots.len(), 3);
        assert_eq!(slots.current(), None); // cursor at 0, slot empty
    }

    #[test]
    fn cursor_wraps_over_equipped_length() {
        let mut slots = ArmSlots::default();
        slots.assign(fire(), 0, 5);
        slots.assign(Token::power(1.0), 1, 5);
        assert_eq!(slots.cursor(), 0);
        assert!(slots.switch_slot(5, false));
        assert_eq!(slots.cursor(), 1);
        assert!(slots.switch_slot(5, false));
        assert_eq!(slots.cursor(), 0);
    }

    #[test]
    fn switch_is_noop_while_occupied() {
        let mut slots = ArmSlots::default();
        slots.assign(fire(), 0, 5);
        slots.assign(Token::power(1.0), 1, 5);
        assert!(!slots.switch_slot(5, true));
        assert_eq!(slots.cursor(), 0);
    }

    #[test]
    fn switch_is_noop_below_unlock_or_empty() {
        let mut slots = ArmSlots::default();
        assert!(!slots.switch_slot(5, false));
        slots.assign(fire(), 0, 5);
        assert!(!slots.switch_slot(4, false));
        assert_eq!(slots.cursor(), 0);
    }
}
