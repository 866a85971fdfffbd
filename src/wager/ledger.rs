//! 1v1 bet-match escrow.
//!
//! One host at a time stakes a token list; a joiner must match it
//! pairwise by kind (same length, same kind at each index - not the
//! same instances). Resolution hands both wagers to the winner.

use bevy::prelude::*;

use crate::player::PlayerProfile;
use crate::tokens::Token;

#[derive(Debug)]
struct PendingBet {
    host: Entity,
    escrow: Vec<Token>,
}

/// Escrow context for 1v1 bet matches. Lives as a resource at the ECS
/// seam but is an explicit context object, not ambient state.
#[derive(Resource, Debug, Default)]
pub struct BetLedger {
    pending: Option<PendingBet>,
}

impl BetLedger {
    /// Host a bet match, staking `tokens`. Fails while another host is
    /// pending or when nothing is staked.
    pub fn host(&mut self, host: Entity, profile: &mut PlayerProfile, tokens: Vec<Token>) -> bool {
        if self.pending.is_some() || tokens.is_empty() {
            return false;
        }
        profile.wager = tokens.clone();
        self.pending = Some(PendingBet { host, escrow: tokens });
        true
    }

    /// Join the pending bet match. The offered tokens must match the
    /// escrow kind-for-kind.
    pub fn join(&self, profile: &mut PlayerProfile, tokens: Vec<Token>) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        if tokens.len() != pending.escrow.len() {
            return false;
        }
        if !tokens
            .iter()
            .zip(&pending.escrow)
            .all(|(offered, staked)| offered.tag() == staked.tag())
        {
            return false;
        }
        profile.wager = tokens;
        // Multiplayer session setup would be handled here
        true
    }

    /// Resolve the bet: both wagers move into the winner's inventory
    /// and the escrow clears.
    pub fn resolve(&mut self, winner: &mut PlayerProfile, loser: &mut PlayerProfile) {
        let winner_wager: Vec<Token> = winner.wager.drain(..).collect();
        winner.token_inventory.extend(winner_wager);
        winner.token_inventory.extend(loser.wager.drain(..));
        self.pending = None;
    }

    pub fn pending_host(&self) -> Option<Entity> {
        self.pending.as_ref().map(|pending| pending.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{AreaTarget, Element};

    fn player(id: u32) -> Entity {
        Entity::from_raw(id)
    }

    #[test]
    fn only_one_pending_host() {
        let mut ledger = BetLedger::default();
        let mut host = PlayerProfile::default();
        assert!(!ledger.host(player(1), &mut host, vec![]));
        assert!(ledger.host(player(1), &mut host, vec![Token::power(1.0)]));
        let mut second = PlayerProfile::default();
        assert!(!ledger.host(player(2), &mut second, vec![Token::power(1.0)]));
        assert_eq!(ledger.pending_host(), Some(player(1)));
    }

    #[test]
    fn join_matches_kinds_not_instances() {
        let mut ledger = BetLedger::default();
        let mut host = PlayerProfile::default();
        ledger.host(
            player(1),
            &mut host,
            vec![Token::power(1.0), Token::effect(Element::Fire, 3.0, 1.0)],
        );

        let mut joiner = PlayerProfile::default();
        // Kind mismatch at index 1
        assert!(!ledger.join(
            &mut joiner,
            vec![Token::power(9.0), Token::area(AreaTarget::Wide, 2.0)],
        ));
        assert!(joiner.wager.is_empty());

        // Same kinds, different instances
        assert!(ledger.join(
            &mut joiner,
            vec![Token::power(9.0), Token::effect(Element::Freeze, 1.0, 2.0)],
        ));
        assert_eq!(joiner.wager.len(), 2);
    }

    #[test]
    fn join_requires_equal_length() {
        let mut ledger = BetLedger::default();
        let mut host = PlayerProfile::default();
        ledger.host(player(1), &mut host, vec![Token::power(1.0)]);
        let mut joiner = PlayerProfile::default();
        assert!(!ledger.join(&mut joiner, vec![]));
        assert!(!ledger.join(&mut joiner, vec![Token::power(1.0); 2]));
    }

    #[test]
    fn resolve_pays_the_winner_and_clears_escrow() {
        let mut ledger = BetLedger::default();
        let mut host = PlayerProfile::default();
        let mut joiner = PlayerProfile::default();
        ledger.host(player(1), &mut host, vec![Token::power(1.0); 2]);
        ledger.join(&mut joiner, vec![Token::power(2.0); 2]);

        ledger.resolve(&mut joiner, &mut host);
        assert_eq!(joiner.token_inventory.len(), 4);
        assert!(joiner.wager.is_empty());
        assert!(host.wager.is_empty());
        assert!(host.token_inventory.is_empty());
        assert_eq!(ledger.pending_host(), None);

        // Escrow is free for the next match
        let mut next = PlayerProfile::default();
        assert!(ledger.host(player(3), &mut next, vec![Token::power(1.0)]));
    }
}
