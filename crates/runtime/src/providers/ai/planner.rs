//! Priority-ordered decision rules.
//!
//! Each tick the [`Planner`] walks its rules from top to bottom and stops at
//! the first one that applies:
//!
//! 1. **AllocateStats**: spend unspent skill points
//! 2. **EquipGear**: buy starting gear while nothing is equipped
//! 3. **EnterPortal**: step toward the deepest portal
//! 4. **RegenerateStamina** / **RegenerateLife**: only when not hit recently
//! 5. **Target**: keep the tracked monster or acquire the nearest one; with no
//!    monsters left, head for the stairs (or wait there for stragglers)
//! 6. **Engage** / **Recover**: on the target's tile, attack with the main-hand
//!    weapon or fall back to a self-cast body skill
//! 7. **Charge** / **Approach**: otherwise close the distance
//!
//! Rules that cannot act (no qualifying skill, no stairs) fall through to the
//! next one. The planner never performs I/O; it returns a [`Decision`] that
//! the runtime executes.

use game_core::{AttributeKind, GameState, Monster, Position, Slot, compute_damage};
use strum::Display;

use super::context::PlanningContext;
use super::gear::select_gear;
use super::memory::AgentMemory;
use super::navigation::{self, StairsRules, StairsVerdict};
use super::skills::{DamageQuery, SkillSelector};
use super::stats::{StatSplit, allocate};
use crate::api::{Command, SkillUse};

/// The rule that produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Rule {
    AllocateStats,
    EquipGear,
    EnterPortal,
    RegenerateStamina,
    RegenerateLife,
    AdvanceToStairs,
    WaitAtStairs,
    Engage,
    Recover,
    Charge,
    Approach,
    /// The tracked monster vanished; memory was cleared.
    TargetLost,
    /// Nothing to do this tick.
    Idle,
}

/// Outcome of one planning pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub rule: Rule,
    /// At most one mutating request per tick.
    pub command: Option<Command>,
    /// Optional courtesy message, sent without waiting.
    pub broadcast: Option<String>,
}

impl Decision {
    fn act(rule: Rule, command: Command) -> Self {
        Self {
            rule,
            command: Some(command),
            broadcast: None,
        }
    }

    fn skip(rule: Rule) -> Self {
        Self {
            rule,
            command: None,
            broadcast: None,
        }
    }

    fn with_broadcast(mut self, text: String) -> Self {
        self.broadcast = Some(text);
        self
    }
}

/// Tunables of the decision rules.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Regeneration waits until more than this many ticks passed since the
    /// last hit.
    pub regen_cooldown: i64,
    pub stairs: StairsRules,
    pub stat_split: StatSplit,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            regen_cooldown: 2,
            stairs: StairsRules::default(),
            stat_split: StatSplit::default(),
        }
    }
}

/// Stateless rule evaluator; the only state it touches is [`AgentMemory`].
#[derive(Clone, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Chooses the action for this tick.
    pub fn decide(&self, memory: &mut AgentMemory, state: &GameState) -> Decision {
        let ctx = PlanningContext::new(state);

        if let Some(decision) = self.allocate_stats(&ctx) {
            return decision;
        }
        if let Some(decision) = self.equip_gear(&ctx) {
            return decision;
        }
        let Some(level) = ctx.level else {
            tracing::debug!("No level in snapshot");
            return Decision::skip(Rule::Idle);
        };
        if let Some(portal) = navigation::best_portal(level) {
            tracing::info!("Entering portal at {}", portal);
            return Decision::act(Rule::EnterPortal, Command::Move(portal));
        }
        if let Some(decision) = self.regenerate(&ctx) {
            return decision;
        }

        let (monster, monster_pos) = match memory.target() {
            None => match navigation::nearest_monster(level, &ctx.field) {
                Some(found) => {
                    memory.track(found.0.id.as_str());
                    found
                }
                None => return self.head_for_stairs(&ctx),
            },
            Some(id) => match navigation::find_monster(level, id) {
                Some(found) => found,
                None => {
                    tracing::info!("Target {} is gone", id);
                    memory.clear_target();
                    return Decision::skip(Rule::TargetLost);
                }
            },
        };

        if navigation::same_tile(ctx.position(), monster_pos) {
            self.engage(&ctx, monster, monster_pos)
        } else {
            self.approach(&ctx, monster, monster_pos)
        }
    }

    fn allocate_stats(&self, ctx: &PlanningContext<'_>) -> Option<Decision> {
        let points = ctx.character().skill_points;
        let request = allocate(points, &self.config.stat_split)?;
        tracing::info!("Assigning {} skill points", points);
        Some(Decision::act(
            Rule::AllocateStats,
            Command::AssignStatPoints(request),
        ))
    }

    fn equip_gear(&self, ctx: &PlanningContext<'_>) -> Option<Decision> {
        let purchase = select_gear(&ctx.state.shop_items, ctx.character());
        if purchase.is_empty() {
            return None;
        }
        tracing::info!(
            "Buying {} items for {}",
            purchase.item_ids.len(),
            purchase.spent
        );
        Some(Decision::act(Rule::EquipGear, Command::Buy(purchase.item_ids)))
    }

    fn regenerate(&self, ctx: &PlanningContext<'_>) -> Option<Decision> {
        if ctx.recently_hit(self.config.regen_cooldown) {
            return None;
        }
        let character = ctx.character();

        if ctx.is_depleted(AttributeKind::Stamina) {
            if let Some(skill) = SkillSelector::stamina_regen(ctx.equipped(), ctx.attrs()) {
                tracing::info!("Regenerating stamina with {}", skill.name);
                let usage = SkillUse::at(skill, &character.id, ctx.position());
                return Some(Decision::act(Rule::RegenerateStamina, Command::UseSkill(usage)));
            }
        }
        if ctx.is_depleted(AttributeKind::Life) {
            if let Some(skill) = SkillSelector::healing(ctx.equipped(), ctx.attrs()) {
                tracing::info!("Regenerating life with {}", skill.name);
                let usage = SkillUse::at(skill, &character.id, ctx.position());
                return Some(Decision::act(Rule::RegenerateLife, Command::UseSkill(usage)));
            }
        }
        None
    }

    fn head_for_stairs(&self, ctx: &PlanningContext<'_>) -> Decision {
        let Some(level) = ctx.level else {
            return Decision::skip(Rule::Idle);
        };
        let Some(stairs) = navigation::stairs(level) else {
            tracing::debug!("No monsters and no stairs on level {}", level.level);
            return Decision::skip(Rule::Idle);
        };

        let verdict = navigation::stairs_verdict(
            level,
            &ctx.character().id,
            ctx.position(),
            stairs,
            self.config.stairs,
        );
        match verdict {
            StairsVerdict::Advance => {
                tracing::info!("Level cleared, moving to stairs at {}", stairs);
                Decision::act(Rule::AdvanceToStairs, Command::Move(stairs))
            }
            StairsVerdict::Wait {
                straggler,
                distance,
            } => {
                tracing::info!("Waiting for {} ({} tiles from stairs)", straggler, distance);
                Decision::act(Rule::WaitAtStairs, Command::Move(ctx.position()))
                    .with_broadcast(format!("Waiting for {straggler} at the stairs"))
            }
        }
    }

    fn engage(&self, ctx: &PlanningContext<'_>, monster: &Monster, position: Position) -> Decision {
        let attrs = ctx.attrs();
        // Charge skills on other slots are kept for closing distance.
        if let Some(skill) =
            SkillSelector::damage(ctx.items_in(Slot::MainHand), attrs, DamageQuery::ANY)
        {
            tracing::info!(
                "Attacking {} with {} (estimated damage {:.1}, monster life {:.0}%, own life {})",
                monster.name,
                skill.name,
                compute_damage(&skill.damage_amount, attrs),
                monster.life_percentage,
                ctx.character().current(AttributeKind::Life)
            );
            let usage = SkillUse::at(skill, &monster.id, position);
            return Decision::act(Rule::Engage, Command::UseSkill(usage));
        }

        if let Some(skill) = SkillSelector::recovery(ctx.items_in(Slot::Body), attrs) {
            tracing::info!("No attack available, using {}", skill.name);
            let usage = SkillUse::at(skill, &ctx.character().id, ctx.position());
            return Decision::act(Rule::Recover, Command::UseSkill(usage));
        }

        tracing::debug!("No usable skill against {}", monster.name);
        Decision::skip(Rule::Idle)
    }

    fn approach(&self, ctx: &PlanningContext<'_>, monster: &Monster, position: Position) -> Decision {
        let distance = ctx.distance_to(position);
        if distance > 1 && ctx.can_see(position) {
            if let Some(skill) = SkillSelector::charge(ctx.equipped(), ctx.attrs()) {
                let range = compute_damage(&skill.range, ctx.attrs());
                if range > 1.0 && f64::from(distance) <= range {
                    tracing::info!(
                        "Charging {} with {} (distance {}, range {:.1})",
                        monster.name,
                        skill.name,
                        distance,
                        range
                    );
                    let usage = SkillUse::at(skill, &monster.id, position);
                    return Decision::act(Rule::Charge, Command::UseSkill(usage));
                }
            }
        }

        tracing::debug!("Moving toward {} at {}", monster.name, position);
        Decision::act(Rule::Approach, Command::Move(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SkillTarget;
    use game_core::{
        Attributes, Character, DamageType, DistanceEntry, DungeonMap, EffectFlags, Item, Level,
        MapObject, Portal, Skill, SkillEffect, TargetKind,
    };

    fn slash(id: &str, cost: f64) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            target: TargetKind::Character,
            damage_type: DamageType::Slash,
            damage_amount: Attributes::new().with(AttributeKind::Strength, 1.0),
            cost: Attributes::new().with(AttributeKind::Stamina, cost),
            ..Skill::default()
        }
    }

    fn equipped(slot: Slot, skills: Vec<Skill>) -> Item {
        Item {
            id: format!("{slot}"),
            name: format!("{slot}"),
            slot,
            skills,
            ..Item::default()
        }
    }

    fn monster_tile(x: i32, y: i32, id: &str) -> MapObject {
        MapObject {
            position: Position::new(x, y),
            monsters: vec![Monster {
                id: id.to_string(),
                name: id.to_string(),
                life_percentage: 80.0,
            }],
            ..MapObject::default()
        }
    }

    fn reach(x: i32, y: i32, distance: i32) -> DistanceEntry {
        DistanceEntry {
            position: Position::new(x, y),
            distance,
            line_of_sight: true,
        }
    }

    /// Equipped fighter at (0, 0) with full resources, long out of combat.
    fn fighter(objects: Vec<MapObject>, player_map: Vec<DistanceEntry>) -> GameState {
        let full = Attributes::new()
            .with(AttributeKind::Strength, 10.0)
            .with(AttributeKind::Stamina, 50.0)
            .with(AttributeKind::Life, 100.0);
        GameState {
            character: Character {
                id: "hero".to_string(),
                name: "Hero".to_string(),
                attributes: full.clone(),
                max_attributes: full,
                equip: vec![equipped(Slot::MainHand, vec![slash("cut", 5.0)])],
                last_damage_taken: 10,
                ..Character::default()
            },
            current_position: Position::ORIGIN,
            map: DungeonMap {
                levels: vec![Level {
                    level: 1,
                    objects,
                    player_map,
                }],
            },
            ..GameState::default()
        }
    }

    #[test]
    fn unspent_points_come_first() {
        let mut state = fighter(vec![], vec![]);
        state.character.skill_points = 30.0;
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::AllocateStats);
    }

    #[test]
    fn portal_beats_combat() {
        let portal = MapObject {
            position: Position::new(4, 4),
            portal: Some(Portal {
                destination_floor: 5,
            }),
            ..MapObject::default()
        };
        let state = fighter(vec![monster_tile(0, 0, "m1"), portal], vec![]);
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.command, Some(Command::Move(Position::new(4, 4))));
    }

    #[test]
    fn acquires_nearest_and_approaches() {
        let state = fighter(
            vec![monster_tile(5, 0, "far"), monster_tile(2, 0, "near")],
            vec![reach(5, 0, 5), reach(2, 0, 2)],
        );
        let mut memory = AgentMemory::new();
        let decision = Planner::default().decide(&mut memory, &state);
        assert_eq!(decision.rule, Rule::Approach);
        assert_eq!(decision.command, Some(Command::Move(Position::new(2, 0))));
        assert_eq!(memory.target(), Some("near"));
    }

    #[test]
    fn keeps_tracked_target_over_nearer_one() {
        let state = fighter(
            vec![monster_tile(5, 0, "tracked"), monster_tile(1, 0, "near")],
            vec![reach(5, 0, 5), reach(1, 0, 1)],
        );
        let mut memory = AgentMemory::new();
        memory.track("tracked");
        let decision = Planner::default().decide(&mut memory, &state);
        assert_eq!(decision.command, Some(Command::Move(Position::new(5, 0))));
    }

    #[test]
    fn attacks_on_same_tile() {
        let state = fighter(vec![monster_tile(0, 0, "m1")], vec![]);
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::Engage);
        match decision.command {
            Some(Command::UseSkill(usage)) => {
                assert_eq!(usage.skill_id, "cut");
                assert_eq!(usage.target, SkillTarget::Character("m1".to_string()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_body_skill_when_attack_unaffordable() {
        let mut state = fighter(vec![monster_tile(0, 0, "m1")], vec![]);
        state.character.equip = vec![
            equipped(Slot::MainHand, vec![slash("cut", 500.0)]),
            equipped(
                Slot::Body,
                vec![Skill {
                    id: "breathe".to_string(),
                    name: "breathe".to_string(),
                    ..Skill::default()
                }],
            ),
        ];
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::Recover);
    }

    /// Movement skill reaching half the caster's dexterity.
    fn leap() -> Skill {
        Skill {
            id: "leap".to_string(),
            name: "leap".to_string(),
            target: TargetKind::Character,
            range: Attributes::new().with(AttributeKind::Dexterity, 0.5),
            caster_effects: SkillEffect {
                attributes: Attributes::new(),
                flags: EffectFlags {
                    movement: true,
                    ..EffectFlags::default()
                },
            },
            ..Skill::default()
        }
    }

    /// Fighter with boots granting [`leap`], facing one monster.
    fn leaper(dexterity: f64, target: DistanceEntry) -> GameState {
        let at = target.position;
        let mut state = fighter(vec![monster_tile(at.x, at.y, "m1")], vec![target]);
        state
            .character
            .attributes
            .set(AttributeKind::Dexterity, Some(dexterity));
        state
            .character
            .equip
            .push(equipped(Slot::Legs, vec![leap()]));
        state
    }

    #[test]
    fn charges_when_in_sight_and_range() {
        let state = leaper(10.0, reach(3, 0, 3));
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::Charge);
    }

    #[test]
    fn walks_when_charge_does_not_apply() {
        let cases = [
            ("adjacent", leaper(10.0, reach(1, 0, 1))),
            ("beyond range", leaper(10.0, reach(6, 0, 6))),
            (
                "out of sight",
                leaper(
                    10.0,
                    DistanceEntry {
                        line_of_sight: false,
                        ..reach(3, 0, 3)
                    },
                ),
            ),
            ("short reach", leaper(2.0, reach(1, 1, 2))),
        ];
        for (case, state) in cases {
            let target = state.map.levels[0].player_map[0].position;
            let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
            assert_eq!(decision.rule, Rule::Approach, "{case}");
            assert_eq!(decision.command, Some(Command::Move(target)), "{case}");
        }
    }

    #[test]
    fn attacks_with_weapon_even_when_charge_hits_harder() {
        let mut state = leaper(10.0, reach(0, 0, 0));
        let mut strong_leap = leap();
        strong_leap.damage_type = DamageType::Slash;
        strong_leap.damage_amount = Attributes::new().with(AttributeKind::Strength, 2.0);
        state.character.equip[1].skills = vec![strong_leap];

        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::Engage);
        match decision.command {
            Some(Command::UseSkill(usage)) => assert_eq!(usage.skill_id, "cut"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn regenerates_stamina_only_out_of_combat() {
        let mut state = fighter(vec![monster_tile(2, 0, "m1")], vec![reach(2, 0, 2)]);
        state.character.equip.push(equipped(Slot::Body, vec![rest()]));
        state.character.attributes.set(AttributeKind::Stamina, Some(10.0));

        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::RegenerateStamina);

        state.character.last_damage_taken = 1;
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::Approach);
    }

    fn rest() -> Skill {
        Skill {
            id: "rest".to_string(),
            name: "rest".to_string(),
            caster_effects: SkillEffect {
                attributes: Attributes::new().with(AttributeKind::Stamina, 10.0),
                flags: EffectFlags::default(),
            },
            ..Skill::default()
        }
    }

    fn mend() -> Skill {
        Skill {
            id: "mend".to_string(),
            name: "mend".to_string(),
            cost: Attributes::new().with(AttributeKind::Stamina, 5.0),
            target_effects: SkillEffect {
                attributes: Attributes::new().with(AttributeKind::Life, 10.0),
                flags: EffectFlags::default(),
            },
            ..Skill::default()
        }
    }

    #[test]
    fn regenerates_life_when_wounded_out_of_combat() {
        let mut state = fighter(vec![monster_tile(2, 0, "m1")], vec![reach(2, 0, 2)]);
        state.character.equip.push(equipped(Slot::Body, vec![mend()]));
        state.character.attributes.set(AttributeKind::Life, Some(40.0));

        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::RegenerateLife);
        match decision.command {
            Some(Command::UseSkill(usage)) => assert_eq!(usage.skill_id, "mend"),
            other => panic!("unexpected command {other:?}"),
        }

        state.character.last_damage_taken = 2;
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::Approach);
    }

    #[test]
    fn stamina_regeneration_precedes_healing() {
        let mut state = fighter(vec![monster_tile(2, 0, "m1")], vec![reach(2, 0, 2)]);
        state
            .character
            .equip
            .push(equipped(Slot::Body, vec![mend(), rest()]));
        state.character.attributes.set(AttributeKind::Stamina, Some(10.0));
        state.character.attributes.set(AttributeKind::Life, Some(40.0));

        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::RegenerateStamina);
    }

    #[test]
    fn lost_target_is_cleared_without_acting() {
        let state = fighter(vec![monster_tile(1, 0, "m2")], vec![reach(1, 0, 1)]);
        let mut memory = AgentMemory::new();
        memory.track("m1");
        let decision = Planner::default().decide(&mut memory, &state);
        assert_eq!(decision.rule, Rule::TargetLost);
        assert_eq!(decision.command, None);
        assert_eq!(memory.target(), None);
    }

    #[test]
    fn waits_at_stairs_and_broadcasts() {
        let stairs = MapObject {
            position: Position::new(1, 0),
            is_stairs: true,
            ..MapObject::default()
        };
        let friend = MapObject {
            position: Position::new(4, 0),
            players: vec![Character {
                id: "p2".to_string(),
                name: "Friend".to_string(),
                ..Character::default()
            }],
            ..MapObject::default()
        };
        let state = fighter(vec![stairs, friend], vec![]);
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision.rule, Rule::WaitAtStairs);
        assert_eq!(decision.command, Some(Command::Move(Position::ORIGIN)));
        assert_eq!(
            decision.broadcast.as_deref(),
            Some("Waiting for Friend at the stairs")
        );
    }

    #[test]
    fn empty_level_without_stairs_idles() {
        let state = fighter(vec![], vec![]);
        let decision = Planner::default().decide(&mut AgentMemory::new(), &state);
        assert_eq!(decision, Decision::skip(Rule::Idle));
    }
}
