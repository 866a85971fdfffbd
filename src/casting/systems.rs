//! Casting systems - trigger input, wind-up timers, cast resolution,
//! and the reactions casts apply to casters and opponents.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::loadout::{Arm, Loadout};
use super::resolver::{resolve_effect, OpponentReaction, ProjectileSpec, SelfMotion};
use super::state::{CastController, PersistentAbility, PressOutcome};
use crate::companion::SummonCompanionEvent;
use crate::core::{
    CastResolvedEvent, FacialCueEvent, FlavorMessageEvent, GameState, KnockdownEvent, TauntEvent,
};
use crate::player::{Player, PlayerProfile};
use crate::tokens::{Element, TokenKind};

/// System set ordering for casting.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CastSet {
    Input,
    Timers,
    Resolve,
    Reactions,
}

/// Both triggers were held together - run the equipped robe's special.
#[derive(Event)]
pub struct RobeSpecialEvent {
    pub caster: Entity,
}

/// The last held trigger was released while a Speedy burst was active.
#[derive(Event)]
pub struct SpeedyEndedEvent {
    pub caster: Entity,
}

/// A resolved cast wants a reaction applied to this opponent.
#[derive(Event)]
pub struct OpponentReactionEvent {
    pub caster_pos: Vec3,
    pub target: Entity,
    pub reaction: OpponentReaction,
}

/// Configure casting systems.
pub fn setup_casting_systems(app: &mut App) {
    app.add_event::<RobeSpecialEvent>()
        .add_event::<SpeedyEndedEvent>()
        .add_event::<OpponentReactionEvent>()
        .configure_sets(
            Update,
            (
                CastSet::Input,
                CastSet::Timers,
                CastSet::Resolve,
                CastSet::Reactions,
            )
                .chain()
                .run_if(in_state(GameState::InMatch)),
        )
        .add_systems(Update, casting_input.in_set(CastSet::Input))
        .add_systems(
            Update,
            (tick_cast_timers, tick_immobilized, tick_lifetimes).in_set(CastSet::Timers),
        )
        .add_systems(
            Update,
            (apply_cast_resolutions, handle_robe_specials).in_set(CastSet::Resolve),
        )
        .add_systems(
            Update,
            (
                apply_opponent_reactions,
                apply_knockdown_events,
                end_speedy_burst,
                face_locked_opponent,
            )
                .in_set(CastSet::Reactions),
        );
}

/// Translate input edges into cast state transitions.
///
/// Mouse buttons are the two arm triggers; Q/E are the level-10 power
/// casts; Z/X cycle quick slots; T performs the equipped taunt.
fn casting_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(Entity, &mut CastController, &mut Loadout, &PlayerProfile), With<Player>>,
    mut robe_events: EventWriter<RobeSpecialEvent>,
    mut speedy_events: EventWriter<SpeedyEndedEvent>,
    mut taunt_events: EventWriter<TauntEvent>,
) {
    let Ok((entity, mut controller, mut loadout, profile)) = query.get_single_mut() else {
        return;
    };
    let level = profile.progression.level();

    for (arm, button) in [(Arm::Left, MouseButton::Left), (Arm::Right, MouseButton::Right)] {
        if mouse.just_pressed(button) {
            if controller.press(arm) == PressOutcome::RobeSpecial {
                robe_events.send(RobeSpecialEvent { caster: entity });
            }
        }
        if mouse.just_released(button) && controller.release_trigger(arm) {
            speedy_events.send(SpeedyEndedEvent { caster: entity });
        }
    }

    if keyboard.just_pressed(KeyCode::KeyQ) {
        controller.press_power(Arm::Left, level);
    }
    if keyboard.just_pressed(KeyCode::KeyE) {
        controller.press_power(Arm::Right, level);
    }

    for (arm, key) in [(Arm::Left, KeyCode::KeyZ), (Arm::Right, KeyCode::KeyX)] {
        if keyboard.just_pressed(key) {
            let occupied = controller.arm(arm).is_occupied();
            loadout.arm_mut(arm).switch_slot(level, occupied);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyT) {
        if let Some(message) = profile.censored_taunt() {
            taunt_events.send(TauntEvent {
                source: entity,
                message,
            });
        }
    }
}

/// Advance wind-up and knockdown timers; emit resolution events for
/// arms that finished their wind-up this frame.
fn tick_cast_timers(
    time: Res<Time>,
    mut query: Query<(Entity, &mut CastController, &Loadout)>,
    mut cast_events: EventWriter<CastResolvedEvent>,
) {
    for (entity, mut controller, loadout) in query.iter_mut() {
        let result = controller.tick(time.delta_secs());
        if result.recovered {
            info!("{entity:?} recovered from knockdown");
        }
        for (arm, power_cast) in result.resolved {
            // An empty or invalid slot resolves to nothing
            let Some(token) = loadout.arm(arm).current() else {
                continue;
            };
            cast_events.send(CastResolvedEvent {
                caster: entity,
                arm,
                token: token.clone(),
                power_cast,
            });
        }
    }
}

/// Thaw immobilized characters.
fn tick_immobilized(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Immobilized)>,
) {
    for (entity, mut immobilized) in query.iter_mut() {
        immobilized.remaining -= time.delta_secs();
        if immobilized.remaining <= 0.0 {
            commands.entity(entity).remove::<Immobilized>();
        }
    }
}

/// Expire projectiles and other short-lived entities.
fn tick_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        lifetime.remaining -= time.delta_secs();
        if lifetime.remaining <= 0.0 {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Apply a resolved cast: dispatch on the token kind.
fn apply_cast_resolutions(
    mut commands: Commands,
    mut cast_events: EventReader<CastResolvedEvent>,
    mut casters: Query<(
        &mut CastController,
        &mut WalkSpeed,
        &mut Transform,
        &PlayerProfile,
        &LockedOpponent,
        &mut ShieldBarrier,
    )>,
    mut reaction_events: EventWriter<OpponentReactionEvent>,
    mut facial_events: EventWriter<FacialCueEvent>,
    mut flavor_events: EventWriter<FlavorMessageEvent>,
    mut taunt_events: EventWriter<TauntEvent>,
    mut summon_events: EventWriter<SummonCompanionEvent>,
) {
    for event in cast_events.read() {
        let Ok((mut controller, mut walk_speed, mut transform, profile, opponent, mut barrier)) =
            casters.get_mut(event.caster)
        else {
            continue;
        };
        let token = &event.token;

        match &token.kind {
            TokenKind::Effect { element } => {
                let resolution = resolve_effect(
                    *element,
                    token.power,
                    token.area,
                    profile.robe_attack_bonus,
                    event.power_cast,
                    controller.speedy_active,
                );

                spawn_projectile(&mut commands, &transform, resolution.projectile);

                match resolution.self_motion {
                    SelfMotion::None => {}
                    SelfMotion::Impulse(local) | SelfMotion::Launch(local) => {
                        let impulse = transform.rotation * local;
                        commands.entity(event.caster).insert(ExternalImpulse {
                            impulse,
                            ..default()
                        });
                    }
                    SelfMotion::WalkSpeedFactor(factor) => {
                        walk_speed.permanent_factor *= factor;
                    }
                }

                if let Some(target) = opponent.target {
                    reaction_events.send(OpponentReactionEvent {
                        caster_pos: transform.translation,
                        target,
                        reaction: resolution.opponent,
                    });
                }

                facial_events.send(FacialCueEvent {
                    caster: event.caster,
                    element: *element,
                });

                // Unclamped area - the flavor check predates the
                // projectile clamp
                if profile.is_tie_dye_robe() && *element == Element::Fire && token.area >= 50.0 {
                    flavor_events.send(FlavorMessageEvent {
                        source: event.caster,
                        message: "The tie-dye robe shimmers as the inferno roars!".to_string(),
                    });
                }
            }
            TokenKind::Levitation { speed_multiplier } => {
                if controller.occupy(event.arm, PersistentAbility::Levitation) {
                    let bonus = token.power * speed_multiplier;
                    controller.levitation_speed_bonus += bonus;
                    walk_speed.levitation_bonus += bonus;
                    transform.translation.y += token.power * 20.0;
                }
            }
            TokenKind::Shield { defense_multiplier } => {
                if controller.occupy(event.arm, PersistentAbility::Shield) {
                    controller.shield_defense_bonus +=
                        token.power * defense_multiplier + profile.robe_shield_bonus;
                    barrier.visible = true;
                }
            }
            TokenKind::Companion { tier, .. } => {
                summon_events.send(SummonCompanionEvent {
                    owner: event.caster,
                    tier: Some(*tier),
                });
            }
            TokenKind::Shout { message, .. } => {
                taunt_events.send(TauntEvent {
                    source: event.caster,
                    message: message.clone(),
                });
            }
            // Power and Area tokens only shape assembled spells; cast
            // alone they are cosmetic
            TokenKind::Power | TokenKind::Area { .. } => {
                debug!("cosmetic cast of {:?}", token.tag());
            }
        }
    }
}

/// Spawn a projectile entity from its resolved spec.
fn spawn_projectile(commands: &mut Commands, caster: &Transform, spec: ProjectileSpec) {
    let forward = caster.forward().as_vec3();
    commands.spawn((
        SpellProjectile {
            element: spec.element,
            power: spec.power,
        },
        Transform::from_translation(caster.translation + forward * 1.0)
            .with_rotation(caster.rotation)
            .with_scale(Vec3::splat(spec.visual_scale())),
        GlobalTransform::default(),
        Visibility::default(),
        RigidBody::Dynamic,
        Collider::ball(0.25),
        Velocity::linear(forward * spec.launch_speed()),
        Lifetime { remaining: 5.0 },
    ));
}

/// Dispatch the equipped robe's special ability (both-triggers press).
fn handle_robe_specials(
    mut commands: Commands,
    mut events: EventReader<RobeSpecialEvent>,
    mut casters: Query<(
        &mut CastController,
        &mut WalkSpeed,
        &mut Transform,
        &PlayerProfile,
    )>,
    mut flavor_events: EventWriter<FlavorMessageEvent>,
) {
    for event in events.read() {
        let Ok((mut controller, mut walk_speed, mut transform, profile)) =
            casters.get_mut(event.caster)
        else {
            continue;
        };

        match profile.equipped_robe.to_lowercase().as_str() {
            "tiedye" => {
                let spec = ProjectileSpec {
                    power: 50.0 + profile.robe_attack_bonus,
                    area: 100.0_f32
                        .clamp(super::resolver::MIN_SPELL_AREA, super::resolver::MAX_SPELL_AREA),
                    element: Element::Fire,
                };
                spawn_projectile(&mut commands, &transform, spec);
                flavor_events.send(FlavorMessageEvent {
                    source: event.caster,
                    message: "Groovy flames engulf the arena!".to_string(),
                });
            }
            "speedy" => {
                if !controller.speedy_active {
                    controller.speedy_active = true;
                    walk_speed.burst_factor = 3.0;
                    commands.entity(event.caster).insert(SpeedyBurst {
                        original_scale: transform.scale,
                    });
                    transform.scale *= 0.1;
                }
            }
            other => {
                debug!("robe '{other}' has no special ability");
            }
        }
    }
}

/// Revert the Speedy burst's speed and scale changes.
fn end_speedy_burst(
    mut commands: Commands,
    mut events: EventReader<SpeedyEndedEvent>,
    mut casters: Query<(&mut WalkSpeed, &mut Transform, &SpeedyBurst)>,
) {
    for event in events.read() {
        let Ok((mut walk_speed, mut transform, burst)) = casters.get_mut(event.caster) else {
            continue;
        };
        walk_speed.burst_factor = 1.0;
        transform.scale = burst.original_scale;
        commands.entity(event.caster).remove::<SpeedyBurst>();
    }
}

/// Apply opponent reactions from resolved casts. The opponent lock is
/// a weak reference; a despawned target is silently skipped.
fn apply_opponent_reactions(
    mut commands: Commands,
    mut events: EventReader<OpponentReactionEvent>,
    targets: Query<(Entity, &Transform, Option<&CastController>)>,
    mut knockdown_events: EventWriter<KnockdownEvent>,
) {
    for event in events.read() {
        let Ok((entity, transform, controller)) = targets.get(event.target) else {
            continue;
        };

        match event.reaction {
            OpponentReaction::None => {}
            OpponentReaction::Immobilize => {
                commands.entity(entity).insert(Immobilized::default());
            }
            OpponentReaction::Knockdown => {
                commands.entity(entity).insert(ExternalImpulse {
                    impulse: Vec3::Y * 400.0,
                    ..default()
                });
                if controller.is_some() {
                    knockdown_events.send(KnockdownEvent { target: entity });
                }
            }
            OpponentReaction::RadialLaunch => {
                let away = (transform.translation - event.caster_pos).normalize_or_zero();
                commands.entity(entity).insert(ExternalImpulse {
                    impulse: away * 600.0 + Vec3::Y * 300.0,
                    ..default()
                });
                if controller.is_some() {
                    knockdown_events.send(KnockdownEvent { target: entity });
                }
            }
        }
    }
}

/// Enter the knocked-down state on targets of knockdown events.
fn apply_knockdown_events(
    mut events: EventReader<KnockdownEvent>,
    mut query: Query<&mut CastController>,
) {
    for event in events.read() {
        if let Ok(mut controller) = query.get_mut(event.target) {
            controller.knock_down();
        }
    }
}

/// Keep the caster's eyes locked on the current opponent.
fn face_locked_opponent(
    mut casters: Query<(&mut Transform, &LockedOpponent)>,
    targets: Query<&GlobalTransform>,
) {
    for (mut transform, opponent) in casters.iter_mut() {
        let Some(target) = opponent.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        let mut focus = target_transform.translation();
        // Yaw only - keep the caster upright
        focus.y = transform.translation.y;
        if focus != transform.translation {
            transform.look_at(focus, Vec3::Y);
        }
    }
}
