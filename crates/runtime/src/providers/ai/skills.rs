//! Skill selection for each intent the agent acts on.
//!
//! Every selector walks skills in declared order (item order, then skill order
//! within the item) and only considers skills whose cost the character can pay
//! this tick. Damage and charge selection maximize a dot-product score; the
//! regeneration selectors take the first match.

use game_core::{Attributes, DamageType, Item, Skill, TargetKind, can_afford, compute_damage};

/// Which damage types a damage query accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageFilter {
    Only(DamageType),
    /// Any type other than [`DamageType::None`].
    AnyDamaging,
}

/// Filter for [`SkillSelector::damage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageQuery {
    pub damage: DamageFilter,
    /// `None` accepts every target kind.
    pub target: Option<TargetKind>,
}

impl DamageQuery {
    /// Single-target slashing attack, the profile of a starting weapon.
    pub const MELEE: Self = Self {
        damage: DamageFilter::Only(DamageType::Slash),
        target: Some(TargetKind::Character),
    };

    /// Anything that deals damage, however it is aimed.
    pub const ANY: Self = Self {
        damage: DamageFilter::AnyDamaging,
        target: None,
    };

    pub fn accepts(&self, skill: &Skill) -> bool {
        let damage_ok = match self.damage {
            DamageFilter::Only(kind) => skill.damage_type == kind,
            DamageFilter::AnyDamaging => skill.damage_type != DamageType::None,
        };
        damage_ok && self.target.is_none_or(|target| skill.target == target)
    }
}

/// Stateless skill picker.
pub struct SkillSelector;

impl SkillSelector {
    /// Highest-damage admissible skill matching the query.
    pub fn damage<'a, I>(items: I, attrs: &Attributes, query: DamageQuery) -> Option<&'a Skill>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let candidates = affordable(items, attrs).filter(|skill| query.accepts(skill));
        best_by(candidates, |skill| compute_damage(&skill.damage_amount, attrs))
    }

    /// First admissible skill that restores the caster's stamina.
    pub fn stamina_regen<'a, I>(items: I, attrs: &Attributes) -> Option<&'a Skill>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        affordable(items, attrs).find(|skill| skill.restores_stamina())
    }

    /// First admissible skill that restores life and is paid with stamina.
    pub fn healing<'a, I>(items: I, attrs: &Attributes) -> Option<&'a Skill>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        affordable(items, attrs).find(|skill| skill.restores_life() && skill.costs_stamina())
    }

    /// Longest-reaching admissible single-target skill that moves the caster.
    pub fn charge<'a, I>(items: I, attrs: &Attributes) -> Option<&'a Skill>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let candidates = affordable(items, attrs)
            .filter(|skill| skill.moves_caster() && skill.target == TargetKind::Character);
        best_by(candidates, |skill| compute_damage(&skill.range, attrs))
    }

    /// First admissible self-cast skill, used when nothing can deal damage.
    pub fn recovery<'a, I>(items: I, attrs: &Attributes) -> Option<&'a Skill>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        affordable(items, attrs).find(|skill| skill.target == TargetKind::None)
    }
}

fn affordable<'a, I>(items: I, attrs: &Attributes) -> impl Iterator<Item = &'a Skill>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .flat_map(|item| item.skills.iter())
        .filter(move |skill| {
            let ok = can_afford(&skill.cost, attrs);
            if !ok {
                tracing::debug!("skill {} is not affordable: cost {:?}", skill.name, skill.cost);
            }
            ok
        })
}

/// Maximum by score; the earliest skill wins ties.
fn best_by<'a>(
    skills: impl Iterator<Item = &'a Skill>,
    score: impl Fn(&Skill) -> f64,
) -> Option<&'a Skill> {
    skills
        .fold(None::<(&'a Skill, f64)>, |best, skill| {
            let value = score(skill);
            match best {
                Some((_, top)) if top >= value => best,
                _ => Some((skill, value)),
            }
        })
        .map(|(skill, _)| skill)
}
