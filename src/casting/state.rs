//! Per-arm cast state machine.
//!
//! Trigger press starts a fixed wind-up; knockdown preempts both arms
//! and blocks input until recovery. Levitation and Shield casts park
//! the arm in an Occupied state that only an explicit release clears.

use bevy::prelude::*;

use super::loadout::Arm;

/// Fixed delay between trigger press and spell resolution.
pub const WIND_UP_SECONDS: f32 = 0.3;

/// How long a knocked-down character stays on the ground.
pub const KNOCKDOWN_SECONDS: f32 = 1.0;

/// Persistent abilities that occupy an arm until released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistentAbility {
    Levitation,
    Shield,
}

/// State of one casting arm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ArmState {
    #[default]
    Idle,
    WindingUp {
        remaining: f32,
        power_cast: bool,
    },
    Occupied(PersistentAbility),
}

impl ArmState {
    pub fn is_occupied(&self) -> bool {
        matches!(self, ArmState::Occupied(_))
    }

    pub fn is_winding_up(&self) -> bool {
        matches!(self, ArmState::WindingUp { .. })
    }
}

/// What a trigger press turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Arm occupied, already winding up, or character knocked down
    Ignored,
    /// Wind-up timer started for this arm
    WindUpStarted,
    /// Both triggers held - dispatch the equipped robe's special ability
    /// instead of any per-arm cast
    RobeSpecial,
}

/// Per-character casting state: both arms, trigger tracking, knockdown
/// recovery, and the cumulative bonuses from persistent abilities.
#[derive(Component, Debug, Clone, Default)]
pub struct CastController {
    left: ArmState,
    right: ArmState,
    left_trigger_held: bool,
    right_trigger_held: bool,
    /// Remaining ground time while knocked down
    knockdown_remaining: Option<f32>,
    /// Speedy robe burst currently active
    pub speedy_active: bool,
    /// Movement speed bonus accumulated from levitation casts
    pub levitation_speed_bonus: f32,
    /// Damage reduction bonus accumulated from shield casts.
    /// Tracked here; the damage pipeline that would consume it is
    /// out of scope.
    pub shield_defense_bonus: f32,
}

impl CastController {
    pub fn arm(&self, arm: Arm) -> &ArmState {
        match arm {
            Arm::Left => &self.left,
            Arm::Right => &self.right,
        }
    }

    fn arm_mut(&mut self, arm: Arm) -> &mut ArmState {
        match arm {
            Arm::Left => &mut self.left,
            Arm::Right => &mut self.right,
        }
    }

    pub fn trigger_held(&self, arm: Arm) -> bool {
        match arm {
            Arm::Left => self.left_trigger_held,
            Arm::Right => self.right_trigger_held,
        }
    }

    pub fn is_knocked_down(&self) -> bool {
        self.knockdown_remaining.is_some()
    }

    /// Handle a trigger press edge for the given arm.
    ///
    /// The both-triggers case is intercepted before any per-arm state
    /// change: if the opposite trigger is already held, the press
    /// dispatches the robe special and no wind-up starts.
    pub fn press(&mut self, arm: Arm) -> PressOutcome {
        let other_held = self.trigger_held(arm.other());
        match arm {
            Arm::Left => self.left_trigger_held = true,
            Arm::Right => self.right_trigger_held = true,
        }

        if self.is_knocked_down() {
            return PressOutcome::Ignored;
        }
        if other_held {
            return PressOutcome::RobeSpecial;
        }
        self.start_wind_up(arm, false)
    }

    /// Handle a power-cast press (double effect). Only available from
    /// level 10; follows the same occupancy and knockdown rules as a
    /// normal press but never dispatches the robe special.
    pub fn press_power(&mut self, arm: Arm, level: u32) -> PressOutcome {
        if level < crate::progression::POWER_CAST_LEVEL || self.is_knocked_down() {
            return PressOutcome::Ignored;
        }
        self.start_wind_up(arm, true)
    }

    fn start_wind_up(&mut self, arm: Arm, power_cast: bool) -> PressOutcome {
        let state = self.arm_mut(arm);
        match state {
            ArmState::Idle => {
                *state = ArmState::WindingUp {
                    remaining: WIND_UP_SECONDS,
                    power_cast,
                };
                PressOutcome::WindUpStarted
            }
            ArmState::WindingUp { .. } | ArmState::Occupied(_) => PressOutcome::Ignored,
        }
    }

    /// Handle a trigger release edge. Returns true when an active
    /// Speedy burst must be deactivated (the opposite trigger is not
    /// also held).
    pub fn release_trigger(&mut self, arm: Arm) -> bool {
        match arm {
            Arm::Left => self.left_trigger_held = false,
            Arm::Right => self.right_trigger_held = false,
        }
        if self.speedy_active && !self.trigger_held(arm.other()) {
            self.speedy_active = false;
            return true;
        }
        false
    }

    /// Advance wind-up and knockdown timers by one frame. Returns the
    /// arms whose wind-up completed this frame (with their power-cast
    /// flag) and whether the character just recovered from knockdown.
    pub fn tick(&mut self, delta: f32) -> TickResult {
        let mut result = TickResult::default();

        if let Some(remaining) = &mut self.knockdown_remaining {
            *remaining -= delta;
            if *remaining <= 0.0 {
                self.knockdown_remaining = None;
                result.recovered = true;
            }
            // Wind-ups were already cleared on knockdown entry
            return result;
        }

        for arm in [Arm::Left, Arm::Right] {
            let state = self.arm_mut(arm);
            if let ArmState::WindingUp {
                remaining,
                power_cast,
            } = state
            {
                *remaining -= delta;
                if *remaining <= 0.0 {
                    let power_cast = *power_cast;
                    // Resolution returns the arm to Idle; the Occupied
                    // state is only entered by the Levitation/Shield
                    // branches after resolution.
                    *state = ArmState::Idle;
                    result.resolved.push((arm, power_cast));
                }
            }
        }

        result
    }

    /// Enter the knocked-down state: clears both arms' in-progress
    /// wind-ups and blocks presses until the recovery delay elapses.
    pub fn knock_down(&mut self) {
        self.knockdown_remaining = Some(KNOCKDOWN_SECONDS);
        for arm in [Arm::Left, Arm::Right] {
            let state = self.arm_mut(arm);
            if state.is_winding_up() {
                *state = ArmState::Idle;
            }
        }
    }

    /// Park the arm under a persistent ability. Fails if the arm is
    /// already occupied.
    pub fn occupy(&mut self, arm: Arm, ability: PersistentAbility) -> bool {
        let state = self.arm_mut(arm);
        if state.is_occupied() {
            return false;
        }
        *state = ArmState::Occupied(ability);
        true
    }

    /// Explicitly free an Occupied arm. Returns the ability that was
    /// active, if any.
    ///
    /// No input is wired to this: the original game never released an
    /// occupied arm, so the trigger for release is left to callers.
    pub fn release(&mut self, arm: Arm) -> Option<PersistentAbility> {
        let state = self.arm_mut(arm);
        if let ArmState::Occupied(ability) = *state {
            *state = ArmState::Idle;
            Some(ability)
        } else {
            None
        }
    }
}

/// Outcome of one frame of casting-timer updates.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Arms whose wind-up completed, with their power-cast flag
    pub resolved: Vec<(Arm, bool)>,
    /// Character stood back up this frame
    pub recovered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_starts_wind_up_once() {
        let mut controller = CastController::default();
        assert_eq!(controller.press(Arm::Left), PressOutcome::WindUpStarted);
        assert!(controller.arm(Arm::Left).is_winding_up());
        controller.release_trigger(Arm::Left);
        assert_eq!(controller.press(Arm::Left), PressOutcome::Ignored);
    }

    #[test]
    fn occupied_arm_never_starts_wind_up() {
        let mut controller = CastController::default();
        assert!(controller.occupy(Arm::Left, PersistentAbility::Shield));
        assert_eq!(controller.press(Arm::Left), PressOutcome::Ignored);
        assert!(!controller.arm(Arm::Left).is_winding_up());
        // Nothing resolves from the occupied arm
        assert!(controller.tick(WIND_UP_SECONDS).resolved.is_empty());
    }

    #[test]
    fn both_triggers_dispatch_robe_special() {
        let mut controller = CastController::default();
        assert_eq!(controller.press(Arm::Left), PressOutcome::WindUpStarted);
        // Second press while the first trigger is still held
        assert_eq!(controller.press(Arm::Right), PressOutcome::RobeSpecial);
        assert!(!controller.arm(Arm::Right).is_winding_up());
    }

    #[test]
    fn wind_up_resolves_after_fixed_delay() {
        let mut controller = CastController::default();
        controller.press(Arm::Right);
        assert!(controller.tick(0.1).resolved.is_empty());
        assert!(controller.tick(0.1).resolved.is_empty());
        let result = controller.tick(0.15);
        assert_eq!(result.resolved, vec![(Arm::Right, false)]);
        assert_eq!(controller.arm(Arm::Right), &ArmState::Idle);
    }

    #[test]
    fn knockdown_clears_wind_ups_and_blocks_presses() {
        let mut controller = CastController::default();
        controller.press(Arm::Left);
        controller.release_trigger(Arm::Left);
        controller.knock_down();
        assert_eq!(controller.arm(Arm::Left), &ArmState::Idle);

        // Blocked for the full recovery window
        assert_eq!(controller.press(Arm::Right), PressOutcome::Ignored);
        assert!(!controller.tick(0.5).recovered);
        assert_eq!(controller.press(Arm::Right), PressOutcome::Ignored);
        controller.release_trigger(Arm::Right);

        // Exactly 1.0s after the knockdown the character stands up
        assert!(controller.tick(0.5).recovered);
        assert_eq!(controller.press(Arm::Right), PressOutcome::WindUpStarted);
    }

    #[test]
    fn knockdown_preserves_occupied_arms() {
        let mut controller = CastController::default();
        controller.occupy(Arm::Left, PersistentAbility::Levitation);
        controller.knock_down();
        assert_eq!(
            controller.arm(Arm::Left),
            &ArmState::Occupied(PersistentAbility::Levitation)
        );
    }

    #[test]
    fn power_press_gated_by_level() {
        let mut controller = CastController::default();
        assert_eq!(controller.press_power(Arm::Left, 9), PressOutcome::Ignored);
        assert_eq!(
            controller.press_power(Arm::Left, 10),
            PressOutcome::WindUpStarted
        );
        let result = controller.tick(WIND_UP_SECONDS);
        assert_eq!(result.resolved, vec![(Arm::Left, true)]);
    }

    #[test]
    fn speedy_burst_ends_when_last_trigger_releases() {
        let mut controller = CastController::default();
        controller.press(Arm::Left);
        controller.press(Arm::Right);
        controller.speedy_active = true;

        // Opposite trigger still held - burst stays on
        assert!(!controller.release_trigger(Arm::Left));
        assert!(controller.speedy_active);
        assert!(controller.release_trigger(Arm::Right));
        assert!(!controller.speedy_active);
    }

    #[test]
    fn release_frees_an_occupied_arm() {
        let mut controller = CastController::default();
        controller.occupy(Arm::Right, PersistentAbility::Shield);
        assert_eq!(
            controller.release(Arm::Right),
            Some(PersistentAbility::Shield)
        );
        assert_eq!(controller.release(Arm::Right), None);
        assert_eq!(controller.press(Arm::Right), PressOutcome::WindUpStarted);
    }
}
