//! Wager plugin - the ECS seam for bet and arena resolution.
//!
//! Match lifecycle events arrive from the (external) session layer;
//! these systems apply them to the ledger resources and player
//! profiles.

use bevy::prelude::*;

use super::arena::ArenaSession;
use super::ledger::BetLedger;
use crate::player::PlayerProfile;
use crate::progression::MatchXpEvent;

/// A 1v1 bet match finished.
#[derive(Event)]
pub struct BetResolvedEvent {
    pub winner: Entity,
    pub loser: Entity,
    pub match_length_seconds: f32,
}

/// The arena battle finished with these players still standing.
#[derive(Event)]
pub struct ArenaEndedEvent {
    pub survivors: Vec<Entity>,
}

/// The daily deathmatch finished.
#[derive(Event)]
pub struct DailyDeathmatchEvent {
    pub winner: Entity,
}

/// Wager plugin - escrow and arena pool resources.
pub struct WagerPlugin;

impl Plugin for WagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BetLedger>()
            .init_resource::<ArenaSession>()
            .add_event::<BetResolvedEvent>()
            .add_event::<ArenaEndedEvent>()
            .add_event::<DailyDeathmatchEvent>()
            .add_systems(
                Update,
                (resolve_bets, end_arena_battles, resolve_daily_deathmatches),
            );
    }
}

/// Resolve finished bet matches and award match XP to both sides.
fn resolve_bets(
    mut events: EventReader<BetResolvedEvent>,
    mut ledger: ResMut<BetLedger>,
    mut profiles: Query<&mut PlayerProfile>,
    mut xp_events: EventWriter<MatchXpEvent>,
) {
    for event in events.read() {
        let Ok([mut winner, mut loser]) = profiles.get_many_mut([event.winner, event.loser]) else {
            continue;
        };
        ledger.resolve(&mut winner, &mut loser);
        info!(
            "Bet resolved: {:?} takes {} tokens",
            event.winner,
            winner.token_inventory.len()
        );
        for player in [event.winner, event.loser] {
            xp_events.send(MatchXpEvent {
                player,
                match_length_seconds: event.match_length_seconds,
            });
        }
    }
}

/// Apply arena payouts and clear every participant's wager.
fn end_arena_battles(
    mut events: EventReader<ArenaEndedEvent>,
    mut session: ResMut<ArenaSession>,
    mut profiles: Query<&mut PlayerProfile>,
    time: Res<Time>,
) {
    for event in events.read() {
        let outcome = session.end(&event.survivors, time.elapsed_secs());
        for (player, tokens) in outcome.payouts {
            if let Ok(mut profile) = profiles.get_mut(player) {
                profile.token_inventory.extend(tokens);
            }
        }
        for player in outcome.participants {
            if let Ok(mut profile) = profiles.get_mut(player) {
                profile.wager.clear();
            }
        }
    }
}

/// Drain the arena pool into the daily deathmatch winner's inventory.
fn resolve_daily_deathmatches(
    mut events: EventReader<DailyDeathmatchEvent>,
    mut session: ResMut<ArenaSession>,
    mut profiles: Query<&mut PlayerProfile>,
) {
    for event in events.read() {
        if let Ok(mut winner) = profiles.get_mut(event.winner) {
            session.resolve_daily_deathmatch(&mut winner);
            info!("Daily deathmatch won by {:?}", event.winner);
        }
    }
}
