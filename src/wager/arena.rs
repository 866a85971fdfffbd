//! Arena battles - up to twenty players wager into a shared pool.
//!
//! Survivors who also lasted the minimum match duration get double
//! their own wager back. Everyone else's stake stays in the pool,
//! which the daily deathmatch winner eventually drains.

use bevy::prelude::*;

use crate::player::PlayerProfile;
use crate::tokens::Token;

/// Maximum arena entrants.
pub const ARENA_CAPACITY: usize = 20;

/// Minimum match time a survivor must reach to collect the payout.
pub const MIN_SURVIVAL_SECONDS: f32 = 60.0;

/// Per-match arena state. A resource at the ECS seam, passed
/// explicitly to every operation.
#[derive(Resource, Debug, Default)]
pub struct ArenaSession {
    active: bool,
    start_time: f32,
    entrants: Vec<(Entity, Vec<Token>)>,
    pool: Vec<Token>,
}

/// Payouts owed when an arena battle ends.
#[derive(Debug, Default, PartialEq)]
pub struct ArenaOutcome {
    /// Tokens each surviving player collects (already doubled)
    pub payouts: Vec<(Entity, Vec<Token>)>,
    /// Everyone who entered - all their wagers clear regardless
    pub participants: Vec<Entity>,
}

impl ArenaSession {
    /// Begin a battle. Fails if one is already running.
    pub fn start(&mut self, now: f32) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.start_time = now;
        self.entrants.clear();
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn entrant_count(&self) -> usize {
        self.entrants.len()
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Join the active battle with a wager. The wager is held by the
    /// player and mirrored into the shared pool - an accumulation, not
    /// a move.
    pub fn join(&mut self, player: Entity, profile: &mut PlayerProfile, tokens: Vec<Token>) -> bool {
        if !self.active || self.entrants.len() >= ARENA_CAPACITY {
            return false;
        }
        profile.wager = tokens.clone();
        self.pool.extend(tokens.clone());
        self.entrants.push((player, tokens));
        true
    }

    /// End the battle. Survivors past the minimum duration are owed
    /// double their own wager; forfeited stakes stay represented by
    /// the pool copies made at join time.
    pub fn end(&mut self, survivors: &[Entity], now: f32) -> ArenaOutcome {
        if !self.active {
            return ArenaOutcome::default();
        }
        self.active = false;

        let elapsed = now - self.start_time;
        let mut outcome = ArenaOutcome::default();

        for (player, wager) in self.entrants.drain(..) {
            if survivors.contains(&player) && elapsed >= MIN_SURVIVAL_SECONDS {
                let mut doubled = wager.clone();
                doubled.extend(wager);
                outcome.payouts.push((player, doubled));
            }
            outcome.participants.push(player);
        }

        outcome
    }

    /// Award the accumulated pool to the daily deathmatch winner.
    pub fn resolve_daily_deathmatch(&mut self, winner: &mut PlayerProfile) {
        winner.token_inventory.extend(self.pool.drain(..));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32) -> Entity {
        Entity::from_raw(id)
    }

    fn wager(count: usize) -> Vec<Token> {
        vec![Token::power(1.0); count]
    }

    #[test]
    fn start_is_exclusive() {
        let mut session = ArenaSession::default();
        assert!(session.start(0.0));
        assert!(!session.start(5.0));
    }

    #[test]
    fn join_requires_active_session_and_capacity() {
        let mut session = ArenaSession::default();
        let mut profile = PlayerProfile::default();
        assert!(!session.join(player(0), &mut profile, wager(1)));

        session.start(0.0);
        for id in 0..ARENA_CAPACITY as u32 {
            let mut entrant = PlayerProfile::default();
            assert!(session.join(player(id), &mut entrant, wager(1)));
        }
        assert!(!session.join(player(99), &mut profile, wager(1)));
        assert_eq!(session.entrant_count(), ARENA_CAPACITY);
    }

    #[test]
    fn pool_mirrors_wagers_without_taking_them() {
        let mut session = ArenaSession::default();
        session.start(0.0);
        let mut profile = PlayerProfile::default();
        session.join(player(1), &mut profile, wager(3));
        assert_eq!(session.pool_size(), 3);
        assert_eq!(profile.wager.len(), 3);
    }

    #[test]
    fn survivors_past_the_minimum_double_their_wager() {
        let mut session = ArenaSession::default();
        session.start(0.0);
        let mut survivor = PlayerProfile::default();
        let mut casualty = PlayerProfile::default();
        session.join(player(1), &mut survivor, wager(2));
        session.join(player(2), &mut casualty, wager(3));

        let outcome = session.end(&[player(1)], 61.0);
        assert_eq!(outcome.payouts.len(), 1);
        assert_eq!(outcome.payouts[0].0, player(1));
        assert_eq!(outcome.payouts[0].1.len(), 4); // exactly 2x their wager
        assert_eq!(outcome.participants.len(), 2);
        assert!(!session.is_active());
    }

    #[test]
    fn short_matches_pay_nobody_even_survivors() {
        let mut session = ArenaSession::default();
        session.start(0.0);
        let mut survivor = PlayerProfile::default();
        session.join(player(1), &mut survivor, wager(2));

        let outcome = session.end(&[player(1)], 59.0);
        assert!(outcome.payouts.is_empty());
        assert_eq!(outcome.participants, vec![player(1)]);
        // Their stake remains in the pool
        assert_eq!(session.pool_size(), 2);
    }

    #[test]
    fn daily_deathmatch_drains_the_pool() {
        let mut session = ArenaSession::default();
        session.start(0.0);
        let mut entrant = PlayerProfile::default();
        session.join(player(1), &mut entrant, wager(4));
        session.end(&[], 100.0);

        let mut winner = PlayerProfile::default();
        session.resolve_daily_deathmatch(&mut winner);
        assert_eq!(winner.token_inventory.len(), 4);
        assert_eq!(session.pool_size(), 0);

        // Pool survives across battles until drained
        session.resolve_daily_deathmatch(&mut winner);
        assert_eq!(winner.token_inventory.len(), 4);
    }
}
