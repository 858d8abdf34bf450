use dice_tray::{
    dice::sets, distribute, distribute_with, AdvantageMode, Combination, DieCountMap, DieType,
    RollNode,
};
use rand::{rngs::StdRng, SeedableRng};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(1)
}

fn counts(entries: &[(&str, u32)]) -> DieCountMap {
    entries
        .iter()
        .map(|(id, count)| (id.to_string(), *count))
        .collect()
}

#[test]
fn test_length_is_sum_of_counts() {
    let catalog = sets::default_set().catalog();
    let counts = counts(&[
        ("GALAXY_STANDARD_D4", 3),
        ("GALAXY_STANDARD_D6", 0),
        ("GALAXY_STANDARD_D100", 2),
        ("GALAXY_STANDARD_D20", 1),
    ]);

    for advantage in [
        AdvantageMode::None,
        AdvantageMode::Advantage,
        AdvantageMode::Disadvantage,
    ] {
        let dice = distribute_with(&counts, advantage, &catalog, &mut test_rng());
        assert_eq!(dice.len(), 6, "{advantage:?}");
    }
}

#[test]
fn test_inputs_are_untouched() {
    let catalog = sets::default_set().catalog();
    let counts = counts(&[("GALAXY_STANDARD_D8", 2)]);
    let (counts_before, catalog_before) = (counts.clone(), catalog.clone());

    distribute(&counts, AdvantageMode::Advantage, &catalog);

    assert_eq!(counts, counts_before);
    assert_eq!(catalog, catalog_before);
}

#[test]
fn test_nothing_to_roll() {
    let set = sets::default_set();
    let catalog = set.catalog();

    let zeros = set.default_counts();
    assert!(distribute(&zeros, AdvantageMode::None, &catalog).is_empty());

    let unknown = counts(&[("nonexistent-id", 2)]);
    assert!(distribute(&unknown, AdvantageMode::None, &catalog).is_empty());

    assert!(distribute(&DieCountMap::new(), AdvantageMode::Advantage, &catalog).is_empty());
}

#[test]
fn test_counts_for_another_set_are_skipped() {
    let catalog = sets::find("NEBULA").unwrap().catalog();
    let dice = distribute(
        &counts(&[("GALAXY_STANDARD_D6", 2), ("NEBULA_STANDARD_D6", 1)]),
        AdvantageMode::None,
        &catalog,
    );

    assert_eq!(dice.len(), 1);
    assert_eq!(dice[0].instances()[0].style().as_str(), "NEBULA");
}

#[test]
fn test_policy_table() {
    let catalog = sets::default_set().catalog();

    #[rustfmt::skip]
    let cases = [
        ("GALAXY_STANDARD_D6", AdvantageMode::None, None, vec![DieType::D6]),
        ("GALAXY_STANDARD_D100", AdvantageMode::None, None, vec![DieType::D100, DieType::D10]),
        ("GALAXY_STANDARD_D6", AdvantageMode::Advantage, Some(Combination::Highest), vec![DieType::D6, DieType::D6]),
        ("GALAXY_STANDARD_D6", AdvantageMode::Disadvantage, Some(Combination::Lowest), vec![DieType::D6, DieType::D6]),
        ("GALAXY_STANDARD_D100", AdvantageMode::Advantage, Some(Combination::Highest), vec![DieType::D100, DieType::D10, DieType::D100, DieType::D10]),
        ("GALAXY_STANDARD_D100", AdvantageMode::Disadvantage, Some(Combination::Lowest), vec![DieType::D100, DieType::D10, DieType::D100, DieType::D10]),
    ];

    for (id, advantage, combination, kinds) in cases {
        let dice = distribute_with(&counts(&[(id, 1)]), advantage, &catalog, &mut test_rng());
        assert_eq!(dice.len(), 1, "{id} {advantage:?}");
        assert_eq!(dice[0].combination(), combination, "{id} {advantage:?}");

        let rolled: Vec<_> = dice[0].instances().iter().map(|die| die.kind()).collect();
        assert_eq!(rolled, kinds, "{id} {advantage:?}");
    }
}

#[test]
fn test_fresh_ids_every_call() {
    let catalog = sets::default_set().catalog();
    let counts = counts(&[("GALAXY_STANDARD_D6", 1)]);

    let first = distribute(&counts, AdvantageMode::None, &catalog);
    let second = distribute(&counts, AdvantageMode::None, &catalog);

    let (RollNode::Single(a), RollNode::Single(b)) = (&first[0], &second[0]) else {
        panic!("{first:?} {second:?}")
    };
    assert_ne!(a.id(), b.id());
}
