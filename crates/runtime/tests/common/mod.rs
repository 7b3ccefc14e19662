//! In-memory game service shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use game_core::{
    AttributeKind, Attributes, Character, DamageType, DistanceEntry, DungeonMap, GameState, Item,
    Level, MapObject, Monster, Position, Skill, Slot, TargetKind,
};
use runtime::{GameService, Result, ServiceError, SkillUse};

/// A request the runtime sent to the service.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Fetch,
    Move(Position),
    UseSkill(SkillUse),
    Buy(Vec<String>),
    AssignStatPoints(Attributes),
    Broadcast(String),
}

/// Mock game service for testing without network.
///
/// Serves a scripted snapshot, records every call, and applies the effects
/// the real server would have on the fields the agent reads back.
#[derive(Clone, Default)]
pub struct MockGameService {
    state: Arc<Mutex<GameState>>,
    calls: Arc<Mutex<Vec<Call>>>,
    reject_skills: Arc<Mutex<bool>>,
    fail_fetch: Arc<Mutex<bool>>,
}

impl MockGameService {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than snapshot fetches.
    pub fn requests(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| *call != Call::Fetch)
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn state(&self) -> GameState {
        self.state.lock().unwrap().clone()
    }

    pub fn update(&self, change: impl FnOnce(&mut GameState)) {
        change(&mut self.state.lock().unwrap());
    }

    pub fn reject_skills(&self, reject: bool) {
        *self.reject_skills.lock().unwrap() = reject;
    }

    pub fn fail_fetch(&self, fail: bool) {
        *self.fail_fetch.lock().unwrap() = fail;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GameService for MockGameService {
    async fn fetch_state(&self) -> Result<GameState> {
        self.record(Call::Fetch);
        if *self.fail_fetch.lock().unwrap() {
            return Err(ServiceError::Transport("connection refused".to_string()));
        }
        Ok(self.state())
    }

    async fn move_to(&self, position: Position) -> Result<()> {
        self.record(Call::Move(position));
        Ok(())
    }

    async fn use_skill(&self, skill: &SkillUse) -> Result<()> {
        self.record(Call::UseSkill(skill.clone()));
        if *self.reject_skills.lock().unwrap() {
            return Err(ServiceError::Rejected {
                status: 400,
                message: "invalid target".to_string(),
            });
        }
        Ok(())
    }

    async fn buy(&self, item_ids: &[String]) -> Result<()> {
        self.record(Call::Buy(item_ids.to_vec()));
        let mut state = self.state.lock().unwrap();
        let bought: Vec<Item> = state
            .shop_items
            .iter()
            .filter(|item| item_ids.contains(&item.id))
            .cloned()
            .collect();
        let spent: u32 = bought.iter().map(|item| item.price).sum();
        state.character.money -= spent;
        state.character.equip.extend(bought);
        Ok(())
    }

    async fn assign_stat_points(&self, points: &Attributes) -> Result<()> {
        self.record(Call::AssignStatPoints(points.clone()));
        let mut state = self.state.lock().unwrap();
        for (kind, value) in points.present() {
            let current = state.character.attributes.value(kind);
            state.character.attributes.set(kind, Some(current + value));
        }
        state.character.skill_points = 0.0;
        Ok(())
    }

    fn broadcast(&self, text: String) {
        self.record(Call::Broadcast(text));
    }
}

// ============================================================================
// Snapshot builders
// ============================================================================

pub fn sword(price: u32) -> Item {
    Item {
        id: "sword".to_string(),
        name: "Sword".to_string(),
        slot: Slot::MainHand,
        price,
        skills: vec![Skill {
            id: "cut".to_string(),
            name: "Cut".to_string(),
            target: TargetKind::Character,
            damage_type: DamageType::Slash,
            damage_amount: Attributes::new().with(AttributeKind::Strength, 1.0),
            ..Skill::default()
        }],
        ..Item::default()
    }
}

pub fn monster_at(x: i32, y: i32, id: &str) -> MapObject {
    MapObject {
        position: Position::new(x, y),
        monsters: vec![Monster {
            id: id.to_string(),
            name: format!("Troll {id}"),
            life_percentage: 100.0,
        }],
        ..MapObject::default()
    }
}

pub fn reachable(x: i32, y: i32, distance: i32) -> DistanceEntry {
    DistanceEntry {
        position: Position::new(x, y),
        distance,
        line_of_sight: true,
    }
}

/// Armed character at the origin with full resources on a single level.
pub fn armed_state(objects: Vec<MapObject>, player_map: Vec<DistanceEntry>) -> GameState {
    let full = Attributes::new()
        .with(AttributeKind::Strength, 12.0)
        .with(AttributeKind::Stamina, 40.0)
        .with(AttributeKind::Life, 100.0);
    GameState {
        character: Character {
            id: "hero".to_string(),
            name: "Hero".to_string(),
            attributes: full.clone(),
            max_attributes: full,
            equip: vec![sword(10)],
            last_damage_taken: 100,
            ..Character::default()
        },
        current_position: Position::ORIGIN,
        current_level: 1,
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
