//! Attack-type effectiveness against a Pokémon, derived from the relation
//! table of each of its (one or two) types.

use std::cmp::Ordering;

use crate::catalog::RelationSource;
use crate::types::TypeTag;

/// One attacking type with its compound multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matchup {
    pub tag: TypeTag,
    pub multiplier: f32,
}

/// The display-ready outcome: neutral (1x) matchups appear in neither list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMatchups {
    /// Multiplier > 1, worst first; ties broken by tag name.
    pub weaknesses: Vec<Matchup>,
    /// Multiplier < 1 (including immunities at 0), strongest resistance
    /// first; ties broken by tag name.
    pub resistances: Vec<Matchup>,
}

/// Compute the compound matchups for a type combination.
///
/// Double/half relations multiply across the two types; "no damage from" is
/// categorical and is applied as a final clamp to 0, so a double from the
/// other type can never re-inflate an immunity. A missing relation entry for
/// a type contributes nothing (all neutral).
pub fn compute(types: &[TypeTag], relations: &impl RelationSource) -> TypeMatchups {
    let mut multipliers = [1.0f32; TypeTag::ALL.len()];
    let mut immune = [false; TypeTag::ALL.len()];

    for defending in types {
        let Some(relation) = relations.type_relations(*defending) else {
            continue;
        };
        for tag in relation.double_from {
            multipliers[tag as usize] *= 2.0;
        }
        for tag in relation.half_from {
            multipliers[tag as usize] *= 0.5;
        }
        for tag in relation.none_from {
            immune[tag as usize] = true;
        }
    }

    // Immunity clamp happens after every multiplicative step has run.
    for (slot, is_immune) in multipliers.iter_mut().zip(immune) {
        if is_immune {
            *slot = 0.0;
        }
    }

    let mut weaknesses = Vec::new();
    let mut resistances = Vec::new();
    for tag in TypeTag::ALL {
        let multiplier = multipliers[tag as usize];
        let matchup = Matchup { tag, multiplier };
        if multiplier > 1.0 {
            weaknesses.push(matchup);
        } else if multiplier < 1.0 {
            resistances.push(matchup);
        }
    }

    // Weaknesses: worst multiplier first, but ties still break by name
    // ascending, so only the multiplier comparison is reversed.
    weaknesses.sort_by(|a, b| {
        b.multiplier
            .total_cmp(&a.multiplier)
            .then_with(|| a.tag.name().cmp(b.tag.name()))
    });
    resistances.sort_by(|a, b| by_multiplier(a, b));

    TypeMatchups {
        weaknesses,
        resistances,
    }
}

fn by_multiplier(a: &Matchup, b: &Matchup) -> Ordering {
    a.multiplier
        .total_cmp(&b.multiplier)
        .then_with(|| a.tag.name().cmp(b.tag.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeRelations;

    /// Minimal relation table covering the types the tests use.
    struct FakeRelations;

    impl RelationSource for FakeRelations {
        fn type_relations(&self, tag: TypeTag) -> Option<TypeRelations> {
            match tag {
                TypeTag::Grass => Some(TypeRelations {
                    double_from: vec![
                        TypeTag::Fire,
                        TypeTag::Ice,
                        TypeTag::Poison,
                        TypeTag::Flying,
                        TypeTag::Bug,
                    ],
                    half_from: vec![
                        TypeTag::Water,
                        TypeTag::Grass,
                        TypeTag::Electric,
                        TypeTag::Ground,
                    ],
                    none_from: vec![],
                }),
                TypeTag::Poison => Some(TypeRelations {
                    double_from: vec![TypeTag::Ground, TypeTag::Psychic],
                    half_from: vec![
                        TypeTag::Grass,
                        TypeTag::Fighting,
                        TypeTag::Poison,
                        TypeTag::Bug,
                        TypeTag::Fairy,
                    ],
                    none_from: vec![],
                }),
                TypeTag::Normal => Some(TypeRelations {
                    double_from: vec![TypeTag::Fighting],
                    half_from: vec![],
                    none_from: vec![TypeTag::Ghost],
                }),
                TypeTag::Flying => Some(TypeRelations {
                    double_from: vec![TypeTag::Rock, TypeTag::Ice, TypeTag::Electric],
                    half_from: vec![TypeTag::Grass, TypeTag::Fighting, TypeTag::Bug],
                    none_from: vec![TypeTag::Ground],
                }),
                TypeTag::Psychic => Some(TypeRelations {
                    double_from: vec![TypeTag::Bug, TypeTag::Ghost, TypeTag::Dark],
                    half_from: vec![TypeTag::Fighting, TypeTag::Psychic],
                    none_from: vec![],
                }),
                _ => None,
            }
        }
    }

    fn multiplier_of(matchups: &[Matchup], tag: TypeTag) -> Option<f32> {
        matchups.iter().find(|m| m.tag == tag).map(|m| m.multiplier)
    }

    #[test]
    fn single_type_splits_into_weak_and_resist() {
        let result = compute(&[TypeTag::Grass], &FakeRelations);

        assert_eq!(multiplier_of(&result.weaknesses, TypeTag::Fire), Some(2.0));
        assert_eq!(multiplier_of(&result.resistances, TypeTag::Water), Some(0.5));
        // Neutral types appear nowhere.
        assert_eq!(multiplier_of(&result.weaknesses, TypeTag::Rock), None);
        assert_eq!(multiplier_of(&result.resistances, TypeTag::Rock), None);
    }

    #[test]
    fn dual_type_multipliers_compound() {
        // Grass/Poison, the Bulbasaur line.
        let result = compute(&[TypeTag::Grass, TypeTag::Poison], &FakeRelations);

        // Grass takes 2x from poison, poison takes 0.5x from poison: neutral.
        assert_eq!(multiplier_of(&result.weaknesses, TypeTag::Poison), None);
        assert_eq!(multiplier_of(&result.resistances, TypeTag::Poison), None);
        // Grass halves grass, poison halves grass: quarter damage.
        assert_eq!(multiplier_of(&result.resistances, TypeTag::Grass), Some(0.25));
        // Grass doubles from ice, poison is neutral to it.
        assert_eq!(multiplier_of(&result.weaknesses, TypeTag::Ice), Some(2.0));
    }

    #[test]
    fn immunity_survives_a_double_from_the_other_type() {
        // Normal is immune to ghost; psychic takes double from ghost.
        let result = compute(&[TypeTag::Normal, TypeTag::Psychic], &FakeRelations);

        assert_eq!(multiplier_of(&result.weaknesses, TypeTag::Ghost), None);
        assert_eq!(multiplier_of(&result.resistances, TypeTag::Ghost), Some(0.0));
        // Clamp order is independent of type order.
        let flipped = compute(&[TypeTag::Psychic, TypeTag::Normal], &FakeRelations);
        assert_eq!(multiplier_of(&flipped.resistances, TypeTag::Ghost), Some(0.0));
    }

    #[test]
    fn weaknesses_sort_worst_first_then_by_name() {
        let result = compute(&[TypeTag::Grass, TypeTag::Poison], &FakeRelations);

        let order: Vec<_> = result
            .weaknesses
            .iter()
            .map(|m| (m.tag.name(), m.multiplier))
            .collect();
        // All 2x, alphabetical by tag name.
        assert_eq!(
            order,
            vec![
                ("fire", 2.0),
                ("flying", 2.0),
                ("ice", 2.0),
                ("psychic", 2.0),
            ]
        );
    }

    #[test]
    fn quad_weakness_leads_and_ties_stay_alphabetical() {
        // Grass/Flying: ice compounds to 4x, the rest of the weaknesses tie
        // at 2x and must come back in name order.
        let result = compute(&[TypeTag::Grass, TypeTag::Flying], &FakeRelations);

        let order: Vec<_> = result
            .weaknesses
            .iter()
            .map(|m| (m.tag.name(), m.multiplier))
            .collect();
        assert_eq!(
            order,
            vec![
                ("ice", 4.0),
                ("fire", 2.0),
                ("flying", 2.0),
                ("poison", 2.0),
                ("rock", 2.0),
            ]
        );
    }

    #[test]
    fn resistances_sort_strongest_first() {
        let result = compute(&[TypeTag::Normal, TypeTag::Psychic], &FakeRelations);

        // Immunity (0) leads; fighting cancels out (2x from normal, 0.5x
        // from psychic) and appears in neither list.
        let order: Vec<_> = result.resistances.iter().map(|m| m.tag.name()).collect();
        assert_eq!(order, vec!["ghost", "psychic"]);
    }

    #[test]
    fn unknown_relation_entries_are_neutral() {
        // Dragon has no entry in the fake table: everything neutral.
        let result = compute(&[TypeTag::Dragon], &FakeRelations);
        assert!(result.weaknesses.is_empty());
        assert!(result.resistances.is_empty());
    }
}
