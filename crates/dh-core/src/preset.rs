//! Ready-made character sheets.
//!
//! These produce the same sheet the tracker seeds on first launch, without
//! requiring a saved settings file.

use std::collections::HashMap;

use crate::character::Character;
use crate::die::Die;
use crate::loadout::DamageProfile;
use crate::resource::Resource;
use crate::thresholds::Thresholds;

/// The six standard ability names, in the order the tracker lists them.
pub const STANDARD_ABILITIES: [&str; 6] = [
    "Fuerza",
    "Destreza",
    "Carisma",
    "Constitución",
    "Sabiduría",
    "Inteligencia",
];

/// The tracker's starting sheet: a level 1 Guerrero with the standard
/// ability spread, 30 hit points, and the starter loadout.
pub fn guerrero() -> Character {
    Character {
        name: "Mi Personaje".to_string(),
        class_name: "Guerrero".to_string(),
        level: 1,
        experience: 0,
        hp: Resource::new(30),
        armor: 2,
        hope: 0,
        fear: 0,
        abilities: HashMap::from([
            ("Fuerza".to_string(), 2),
            ("Destreza".to_string(), 1),
            ("Carisma".to_string(), 0),
            ("Constitución".to_string(), 1),
            ("Sabiduría".to_string(), 0),
            ("Inteligencia".to_string(), -1),
        ]),
        thresholds: Thresholds::default(),
        weapons: vec![
            DamageProfile::new("Espada", 1, Die::D8, 0),
            DamageProfile::new("Arco", 1, Die::D6, 0),
        ],
        spells: vec![DamageProfile::new("Fuego", 2, Die::D6, 0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guerrero_preset() {
        let c = guerrero();
        assert_eq!(c.name, "Mi Personaje");
        assert_eq!(c.class_name, "Guerrero");
        assert_eq!(c.level, 1);
        assert_eq!(c.hp.to_string(), "30/30");
        assert_eq!(c.armor, 2);
        assert_eq!(c.hope, 0);
        assert_eq!(c.thresholds, Thresholds::default());
    }

    #[test]
    fn guerrero_ability_spread() {
        let c = guerrero();
        assert_eq!(c.ability("Fuerza"), Some(2));
        assert_eq!(c.ability("Destreza"), Some(1));
        assert_eq!(c.ability("Inteligencia"), Some(-1));
        for name in STANDARD_ABILITIES {
            assert!(c.ability(name).is_some(), "{name} missing from preset");
        }
    }

    #[test]
    fn guerrero_loadout() {
        let c = guerrero();
        assert_eq!(c.weapon("Espada").map(DamageProfile::notation).as_deref(), Some("1d8"));
        assert_eq!(c.weapon("Arco").map(DamageProfile::notation).as_deref(), Some("1d6"));
        assert_eq!(c.spell("Fuego").map(DamageProfile::notation).as_deref(), Some("2d6"));
    }
}
