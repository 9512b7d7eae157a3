use torus_life::toruslife::{EngineError, Rule, RuleTable, ToroidalLife};

/// Documented (birth, survival) sets, pinned independently of the enum's
/// own tables.
fn documented_sets(rule: Rule) -> (&'static [u8], &'static [u8]) {
    match rule {
        Rule::Life => (&[3], &[2, 3]),
        Rule::HighLife => (&[3, 6], &[2, 3]),
        Rule::Seeds => (&[2], &[]),
        Rule::Replicator => (&[1, 3, 5, 7], &[1, 3, 5, 7]),
        Rule::B25S4 => (&[2, 5], &[4]),
        Rule::Life34 => (&[3, 4], &[3, 4]),
        Rule::Diamoeba => (&[3, 5, 6, 7, 8], &[5, 6, 7, 8]),
        Rule::TwoByTwo => (&[3, 6], &[1, 2, 5]),
        Rule::DayAndNight => (&[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
        Rule::Morley => (&[3, 6, 8], &[2, 4, 5]),
        Rule::Anneal => (&[4, 6, 7, 8], &[3, 5, 6, 7, 8]),
        Rule::Famine => (&[3, 6, 8], &[1, 2, 8]),
        Rule::Gems => (&[3, 4, 5, 7], &[4, 5, 6, 8]),
        Rule::Fredkin => (&[1, 3, 5, 7], &[0, 2, 4, 6, 8]),
        Rule::DotLife => (&[3], &[0, 2, 3]),
    }
}

#[test]
fn every_rule_matches_its_documented_sets() {
    for rule in Rule::ALL {
        let (birth, survival) = documented_sets(rule);
        assert_eq!(rule.birth(), birth, "{} birth set", rule.name());
        assert_eq!(rule.survival(), survival, "{} survival set", rule.name());

        let table = RuleTable::new(rule);
        for alive in [0u8, 1] {
            for count in 0..=8u8 {
                let expected = u8::from(
                    birth.contains(&count) || (alive == 1 && survival.contains(&count)),
                );
                assert_eq!(
                    table.lookup(alive, count),
                    expected,
                    "{} alive={alive} count={count}",
                    rule.name()
                );
            }
        }
    }
}

#[test]
fn replicator_birth_and_survival_sets_coincide() {
    assert_eq!(Rule::Replicator.birth(), Rule::Replicator.survival());
}

#[test]
fn birth_set_revives_live_cells_outside_survival() {
    // Diamoeba has 3 in birth but not in survival: a live cell with 3
    // neighbors stays alive through the birth clause.
    let table = RuleTable::new(Rule::Diamoeba);
    assert_eq!(table.lookup(1, 3), 1);
    assert_eq!(table.lookup(1, 4), 0);
}

#[test]
fn unknown_rule_identifiers_are_rejected() {
    for name in ["conway", "b3/s23", "", "life "] {
        let err = name.parse::<Rule>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownRule {
                name: name.to_string()
            }
        );
    }
}

#[test]
fn rule_parse_is_case_insensitive() {
    assert_eq!("LIFE".parse::<Rule>().unwrap(), Rule::Life);
    assert_eq!("Day&Night".parse::<Rule>().unwrap(), Rule::DayAndNight);
    assert_eq!("B25/S4".parse::<Rule>().unwrap(), Rule::B25S4);
}

#[test]
fn seeds_rule_has_no_survival() {
    let mut engine = ToroidalLife::new(7).unwrap();
    engine.kill();
    engine.set_rule(Rule::Seeds);
    engine.set(2, 2, 1).unwrap();
    engine.set(3, 2, 1).unwrap();

    engine.update();

    // Both parents die; the four cells seeing exactly two neighbors birth.
    assert_eq!(engine.get(2, 2), 0);
    assert_eq!(engine.get(3, 2), 0);
    assert_eq!(engine.get(2, 1), 1);
    assert_eq!(engine.get(3, 1), 1);
    assert_eq!(engine.get(2, 3), 1);
    assert_eq!(engine.get(3, 3), 1);
    assert_eq!(engine.population(), 4);
}
