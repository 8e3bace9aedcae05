//! Copy-on-write merge of user overrides onto a base ruleset.
//!
//! The base config is never mutated: the merge clones it and patches the
//! clone. Orb overrides use replace semantics per (body, aspect type)
//! pair; aspect types a patch does not mention keep their base values.

use super::{AspectRuleConfig, UserOverrides};

/// Apply user overrides to a private copy of the base config.
///
/// Merge order matches the stored-config contract:
/// 1. `logic_settings` patches individual `rules.*` fields;
/// 2. `orbs` patches matching (body, aspect type) entries, inserting
///    bodies that were not present;
/// 3. `active_bodies`, when present, filters the final orb table to
///    exactly that list.
pub fn apply_overrides(base: &AspectRuleConfig, overrides: &UserOverrides) -> AspectRuleConfig {
    let mut config = base.clone();

    if let Some(logic) = &overrides.logic_settings {
        if let Some(enabled) = logic.house_correction_enabled {
            config.rules.house_correction.enabled = enabled;
        }
        if let Some(angular) = logic.angular_orb {
            config.rules.house_correction.angular_orb = angular;
        }
        if let Some(other) = logic.other_orb {
            config.rules.house_correction.other_orb = other;
        }
        if let Some(strategy) = logic.strategy {
            config.rules.strategy = strategy;
        }
    }

    if let Some(orb_patches) = &overrides.orbs {
        for (body, patch) in orb_patches {
            let entry = config.orbs.entry(*body).or_default();
            for (aspect, orb) in patch {
                entry.insert(*aspect, *orb);
            }
        }
    }

    if let Some(active) = &overrides.active_bodies {
        config.orbs.retain(|body, _| active.contains(body));
        config.active_bodies = active.clone();
    }

    config
}
