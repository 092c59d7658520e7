mod common;

use std::time::Duration;

use common::{DANGER_TALK, DEATH_TALK, Harness, LEVEL_UP_TALK, pet_talks, status};
use statsync_core::{
    AccountId, Effect, GaugeKind, InboundEvent, InfoKey, StatKey, StatusBlock, StatusChangeAck,
    StatusEvent, StatusProperty as P,
};

fn hp_gauges(effects: &[Effect]) -> Vec<(i64, i64)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Gauge {
                kind: GaugeKind::Hp,
                current,
                max,
            } => Some((*current, *max)),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Vital pairs
// ============================================================================

#[test]
fn vital_pair_displays_once_in_either_order() {
    let mut harness = Harness::new();
    let mut gauges = hp_gauges(&harness.apply(status(P::MaxHp, 100)));
    gauges.extend(hp_gauges(&harness.apply(status(P::Hp, 50))));
    assert_eq!(gauges, [(50, 100)]);

    let mut harness = Harness::new();
    let mut gauges = hp_gauges(&harness.apply(status(P::Hp, 50)));
    gauges.extend(hp_gauges(&harness.apply(status(P::MaxHp, 100))));
    assert_eq!(gauges, [(50, 100)]);

    let life = harness.session.player.life.snapshot();
    assert_eq!((life.hp, life.hp_max), (50, 100));
}

#[test]
fn every_status_shape_sets_the_same_attribute() {
    let shapes = [
        StatusEvent::ParChange {
            var_id: P::Sp as i32,
            count: 33,
        },
        StatusEvent::LongParChange {
            var_id: P::Sp as i32,
            amount: 33,
        },
        StatusEvent::LongParChange2 {
            var_id: P::Sp as i32,
            amount: 33,
        },
        StatusEvent::StatusChange {
            status_id: P::Sp as i32,
            value: 33,
        },
    ];
    for shape in shapes {
        let mut harness = Harness::new();
        harness.apply(status(P::MaxSp, 90));
        let effects = harness.apply(shape.clone());
        assert_eq!(harness.session.player.life.sp.current, 33, "{shape:?}");
        assert_eq!(
            effects,
            [Effect::Gauge {
                kind: GaugeKind::Sp,
                current: 33,
                max: 90
            }],
            "{shape:?}"
        );
    }
}

#[test]
fn party_members_see_hp_but_not_sp() {
    let mut harness = Harness::new();
    harness.session.in_party = true;
    harness.apply(status(P::MaxHp, 400));
    harness.apply(status(P::MaxSp, 80));

    let effects = harness.apply(status(P::Hp, 300));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::PartyMemberLife {
            account_id: AccountId(2_000_001),
            hp: 300,
            hp_max: 400,
            ..
        }
    )));

    let effects = harness.apply(status(P::Sp, 10));
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, Effect::PartyMemberLife { .. }))
    );
}

#[test]
fn exp_and_weight_use_the_same_pairing() {
    let mut harness = Harness::new();
    assert!(harness.apply(status(P::BaseExp, 120)).is_empty());
    assert_eq!(
        harness.apply(status(P::NextBaseExp, 1000)),
        [Effect::Gauge {
            kind: GaugeKind::BaseExp,
            current: 120,
            max: 1000
        }]
    );

    assert!(harness.apply(status(P::MaxWeight, 8000)).is_empty());
    assert_eq!(
        harness.apply(status(P::Weight, 1450)),
        [Effect::Gauge {
            kind: GaugeKind::Weight,
            current: 1450,
            max: 8000
        }]
    );
}

// ============================================================================
// Companion reactions
// ============================================================================

#[test]
fn hp_drop_into_danger_zone_makes_companion_talk() {
    let mut harness = Harness::new();
    harness.apply(status(P::MaxHp, 200));
    harness.apply(status(P::Hp, 45));

    // The server reports the post-damage value (45 - 40).
    harness.clock.advance(Duration::from_secs(11));
    let effects = harness.apply(status(P::Hp, 5));

    assert_eq!(harness.session.player.life.hp.current, 5);
    assert_eq!(pet_talks(&effects), [DANGER_TALK]);
    assert!(harness.session.companion.last_talk.is_some());
}

#[test]
fn danger_reaction_respects_cooldown() {
    let mut harness = Harness::new();
    harness.apply(status(P::MaxHp, 200));

    assert_eq!(pet_talks(&harness.apply(status(P::Hp, 40))), [DANGER_TALK]);

    harness.clock.advance(Duration::from_secs(4));
    assert!(pet_talks(&harness.apply(status(P::Hp, 30))).is_empty());

    harness.clock.advance(Duration::from_secs(6));
    assert!(
        pet_talks(&harness.apply(status(P::Hp, 20))).is_empty(),
        "exactly ten seconds is still inside the window"
    );

    harness.clock.advance(Duration::from_millis(1));
    assert_eq!(pet_talks(&harness.apply(status(P::Hp, 10))), [DANGER_TALK]);
}

#[test]
fn death_reaction_ignores_danger_cooldown() {
    let mut harness = Harness::new();
    harness.apply(status(P::MaxHp, 200));
    assert_eq!(pet_talks(&harness.apply(status(P::Hp, 40))), [DANGER_TALK]);

    harness.clock.advance(Duration::from_secs(1));
    assert_eq!(pet_talks(&harness.apply(status(P::Hp, 1))), [DEATH_TALK]);
}

#[test]
fn fresh_death_fires_both_reactions() {
    let mut harness = Harness::new();
    harness.apply(status(P::MaxHp, 200));
    assert_eq!(
        pet_talks(&harness.apply(status(P::Hp, 0))),
        [DANGER_TALK, DEATH_TALK]
    );
}

#[test]
fn unfriendly_companion_stays_silent() {
    let mut harness = Harness::new();
    harness.session.companion.friendliness = 900;
    harness.apply(status(P::MaxHp, 200));
    assert!(pet_talks(&harness.apply(status(P::Hp, 0))).is_empty());
    assert!(pet_talks(&harness.apply(status(P::BaseLevel, 50))).is_empty());
    assert_eq!(harness.session.companion.last_talk, None);
}

#[test]
fn max_hp_update_never_triggers_reactions() {
    let mut harness = Harness::new();
    harness.apply(status(P::Hp, 10));
    assert!(pet_talks(&harness.apply(status(P::MaxHp, 1000))).is_empty());
}

#[test]
fn base_level_up_notifies_every_subsystem_in_order() {
    let mut harness = Harness::new();
    let effects = harness.apply(status(P::BaseLevel, 42));

    assert_eq!(
        effects,
        [
            Effect::AuraReload,
            Effect::Info {
                key: InfoKey::BaseLevel,
                value: 42
            },
            Effect::EquipmentLevelUp,
            Effect::CartLevelUp { level: 42 },
            Effect::Outbound(statsync_core::OutboundPacket::PetAct {
                data: LEVEL_UP_TALK
            }),
        ]
    );
    assert_eq!(harness.session.player.progression.base_level, 42);
}

#[test]
fn missing_dialogue_line_sends_talk_id_zero() {
    let mut harness = Harness::new();
    harness.session.companion.hunger = 100;
    assert_eq!(pet_talks(&harness.apply(status(P::BaseLevel, 2))), [0]);
}

// ============================================================================
// Stats window
// ============================================================================

#[test]
fn couple_status_sets_base_and_bonus() {
    let mut harness = Harness::new();
    let effects = harness.apply(StatusEvent::CoupleStatus {
        status_type: P::Agi as i32,
        default_status: 70,
        plus_status: 15,
    });

    assert_eq!(
        effects,
        [
            Effect::Stat {
                key: StatKey::Agi,
                value: 70
            },
            Effect::Stat {
                key: StatKey::AgiBonus,
                value: 15
            },
        ]
    );
    let agi = harness.session.player.stat(statsync_core::PrimaryStat::Agi);
    assert_eq!((agi.base, agi.bonus), (70, 15));
}

#[test]
fn combat_and_info_codes_update_their_widgets() {
    let mut harness = Harness::new();
    let cases = [
        (P::AttPower, Effect::Stat { key: StatKey::Atk, value: 7 }),
        (P::MaxMattPower, Effect::Stat { key: StatKey::Matk, value: 7 }),
        (P::PlusAvoidSuccessValue, Effect::Stat { key: StatKey::FleeBonus, value: 7 }),
        (P::StandardLuk, Effect::Stat { key: StatKey::LukCost, value: 7 }),
        (P::StatusPoint, Effect::Stat { key: StatKey::StatusPoint, value: 7 }),
        (P::Money, Effect::Info { key: InfoKey::Zeny, value: 7 }),
        (P::Patk, Effect::Info { key: InfoKey::Patk, value: 7 }),
        (P::Ucrt, Effect::Info { key: InfoKey::Ucrt, value: 7 }),
        (P::SkillPoint, Effect::SkillPoints(7)),
    ];
    for (property, expected) in cases {
        assert_eq!(harness.apply(status(property, 7)), [expected], "{property}");
    }

    let player = &harness.session.player;
    assert_eq!(player.combat.attack, 7);
    assert_eq!(player.combat.matk_max, 7);
    assert_eq!(player.money, 7);
    assert_eq!(player.traits.patk, 7);
    assert_eq!(player.progression.skill_points, 7);
}

#[test]
fn job_level_refreshes_skill_list() {
    let mut harness = Harness::new();
    assert_eq!(
        harness.apply(status(P::JobLevel, 10)),
        [
            Effect::Info {
                key: InfoKey::JobLevel,
                value: 10
            },
            Effect::SkillListLevelUp,
        ]
    );
}

#[test]
fn walk_speed_is_silent() {
    let mut harness = Harness::new();
    assert!(harness.apply(status(P::Speed, 150)).is_empty());
    assert_eq!(harness.session.player.walk_speed, 150);
}

#[test]
fn unrecognized_codes_leave_state_untouched() {
    let mut harness = Harness::new();
    let before = harness.session.clone();

    let unknown = StatusEvent::ParChange {
        var_id: 9999,
        count: 5,
    };
    assert!(harness.apply(unknown).is_empty());
    assert!(harness.apply(status(P::HairColor, 3)).is_empty());
    assert!(
        harness
            .apply(StatusEvent::CartItemCountInfo {
                cur_count: 1,
                max_count: 100,
                cur_weight: 10,
                max_weight: 8000,
            })
            .is_empty()
    );

    assert_eq!(harness.session.player, before.player);
    assert_eq!(harness.session.companion, before.companion);
}

#[test]
fn status_block_applies_every_field() {
    let mut harness = Harness::new();
    let block = StatusBlock {
        point: 12,
        str: 90,
        standard_str: 10,
        luk: 5,
        standard_luk: 2,
        min_matt_power: 40,
        max_matt_power: 60,
        aspd: 150,
        plus_aspd: 11,
        ..Default::default()
    };
    let effects = harness.apply(InboundEvent::StatusBlock(block));

    assert_eq!(effects.len(), 26);
    assert!(effects.contains(&Effect::Stat {
        key: StatKey::Aspd,
        value: 40
    }));
    assert!(effects.contains(&Effect::Stat {
        key: StatKey::Matk,
        value: 40
    }));
    assert!(effects.contains(&Effect::Stat {
        key: StatKey::Matk2,
        value: 60
    }));
    assert_eq!(
        effects.last(),
        Some(&Effect::Stat {
            key: StatKey::StatusPoint,
            value: 12
        })
    );

    let player = &harness.session.player;
    assert_eq!(player.stat(statsync_core::PrimaryStat::Str).base, 90);
    assert_eq!(player.stat(statsync_core::PrimaryStat::Str).raise_cost, 10);
    assert_eq!(player.combat.aspd, 40);
    assert_eq!(player.combat.matk_min, 40);
    assert_eq!(player.combat.matk_max, 60);
    assert_eq!(player.progression.status_points, 12);
}

#[test]
fn refused_stat_raise_is_discarded() {
    let mut harness = Harness::new();
    let before = harness.session.player.clone();

    let refused = StatusChangeAck {
        status_id: P::Str as i32,
        result: false,
        value: 99,
    };
    assert!(
        harness
            .apply(InboundEvent::StatusChangeAck(refused))
            .is_empty()
    );
    assert_eq!(harness.session.player, before);

    let accepted = StatusChangeAck {
        status_id: P::Str as i32,
        result: true,
        value: 99,
    };
    assert_eq!(
        harness.apply(InboundEvent::StatusChangeAck(accepted)),
        [Effect::Stat {
            key: StatKey::Str,
            value: 99
        }]
    );
}

#[test]
fn stat_raise_ack_ignores_non_primary_codes() {
    let mut harness = Harness::new();
    let ack = StatusChangeAck {
        status_id: P::Hp as i32,
        result: true,
        value: 99,
    };
    assert!(harness.apply(InboundEvent::StatusChangeAck(ack)).is_empty());
    assert_eq!(harness.session.player.life.hp.current, -1);
}
