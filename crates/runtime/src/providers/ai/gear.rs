//! Budget-constrained starting gear selection.
//!
//! Equipment is chosen once, while the character has nothing equipped. The
//! selection is greedy per slot with no backtracking:
//!
//! 1. **Weapon**: most expensive affordable main-hand item granting a
//!    single-target slashing skill. Its best damage skill names the
//!    "damage multiplier" attribute.
//! 2. **Charge item**: an item granting a single-target movement skill.
//! 3. **Healing item**: a non-weapon, non-body item granting a stamina-paid
//!    life-restoring skill.
//! 4. **Remaining slots** in fixed order, ranked by how much they boost the
//!    damage multiplier (then by price).
//!
//! Every candidate must meet its requirements with the character's current
//! attributes and cost strictly less than the budget left at that point.

use std::cmp::Ordering;

use game_core::{
    AttributeKind, Attributes, Character, Item, Slot, TargetKind, requirements_satisfied,
};

use super::skills::{DamageQuery, SkillSelector};

/// Generic slots filled after the weapon, charge, and healing picks.
pub const GENERIC_SLOTS: [Slot; 5] = [Slot::Body, Slot::Head, Slot::Legs, Slot::Neck, Slot::OffHand];

/// Outcome of a gear selection pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Purchase {
    /// Catalog ids in the order they were chosen.
    pub item_ids: Vec<String>,
    /// Sum of the chosen prices.
    pub spent: u32,
    /// Attribute driving the chosen weapon's damage, if a weapon was found.
    pub multiplier: Option<AttributeKind>,
}

impl Purchase {
    /// An empty purchase means "do not call buy".
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }
}

/// Selects starting gear for an unequipped character.
///
/// Returns an empty purchase when anything is already equipped.
pub fn select_gear(catalog: &[Item], character: &Character) -> Purchase {
    if !character.is_unequipped() {
        return Purchase::default();
    }

    tracing::debug!("Selecting gear with budget {}", character.money);
    let mut optimizer = GearOptimizer::new(catalog, &character.attributes, character.money);

    let weapon = optimizer.pick("weapon", is_weapon, by_price);
    let multiplier = weapon
        .and_then(|weapon| {
            SkillSelector::damage([weapon], &character.attributes, DamageQuery::MELEE)
        })
        .and_then(|skill| skill.damage_amount.dominant());
    tracing::debug!("Damage multiplier attribute: {:?}", multiplier);

    optimizer.pick("charge", grants_charge, by_price);
    optimizer.pick("healing", grants_healing, by_price);
    for slot in GENERIC_SLOTS {
        optimizer.pick(
            "armour",
            |item| item.slot == slot,
            |a, b| by_boost(a, b, multiplier),
        );
    }

    optimizer.finish(multiplier)
}

/// Greedy per-slot picker with a shrinking budget.
struct GearOptimizer<'a> {
    catalog: &'a [Item],
    attrs: &'a Attributes,
    budget: u32,
    taken: Vec<Slot>,
    chosen: Vec<String>,
    spent: u32,
}

impl<'a> GearOptimizer<'a> {
    fn new(catalog: &'a [Item], attrs: &'a Attributes, budget: u32) -> Self {
        Self {
            catalog,
            attrs,
            budget,
            taken: Vec::new(),
            chosen: Vec::new(),
            spent: 0,
        }
    }

    /// Buys the best-ranked admissible item matching `predicate`, if any.
    fn pick(
        &mut self,
        role: &str,
        predicate: impl Fn(&Item) -> bool,
        rank: impl Fn(&Item, &Item) -> Ordering,
    ) -> Option<&'a Item> {
        let catalog = self.catalog;
        let mut candidates: Vec<&'a Item> = catalog
            .iter()
            .filter(|&item| self.admissible(item) && predicate(item))
            .collect();
        candidates.sort_by(|a, b| rank(*a, *b));

        let item = candidates.first().copied()?;
        self.budget -= item.price;
        self.spent += item.price;
        self.taken.push(item.slot);
        self.chosen.push(item.id.clone());
        tracing::info!(
            "Buying {} {} ({}) for {}, budget left {}",
            role,
            item.name,
            item.slot,
            item.price,
            self.budget
        );
        Some(item)
    }

    fn admissible(&self, item: &Item) -> bool {
        !self.taken.contains(&item.slot)
            && item.price < self.budget
            && requirements_satisfied(&item.requirements, self.attrs)
    }

    fn finish(self, multiplier: Option<AttributeKind>) -> Purchase {
        Purchase {
            item_ids: self.chosen,
            spent: self.spent,
            multiplier,
        }
    }
}

fn is_weapon(item: &Item) -> bool {
    item.slot == Slot::MainHand && item.grants(|skill| DamageQuery::MELEE.accepts(skill))
}

fn grants_charge(item: &Item) -> bool {
    item.grants(|skill| skill.moves_caster() && skill.target == TargetKind::Character)
}

fn grants_healing(item: &Item) -> bool {
    !matches!(item.slot, Slot::MainHand | Slot::Body)
        && item.grants(|skill| skill.restores_life() && skill.costs_stamina())
}

/// Most expensive first.
fn by_price(a: &Item, b: &Item) -> Ordering {
    b.price.cmp(&a.price)
}

/// Largest multiplier bonus first, then most expensive.
fn by_boost(a: &Item, b: &Item, multiplier: Option<AttributeKind>) -> Ordering {
    match multiplier {
        Some(kind) => b
            .attributes
            .value(kind)
            .total_cmp(&a.attributes.value(kind))
            .then_with(|| by_price(a, b)),
        None => by_price(a, b),
    }
}
