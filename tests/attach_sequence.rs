//! Run with: `cargo test --test attach_sequence`

use bondcompass::{geometry::canonical_order, AtomNode, Direction, Next, Vector2};
use itertools::Itertools;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type Atom = AtomNode<Direction>;

fn attach_all(directions: impl IntoIterator<Item = Direction>) -> Atom {
    let mut atom = Atom::new(Vector2::default(), Vec::new());
    for direction in directions {
        atom.attach_bond("single", direction).unwrap();
    }
    atom
}

#[test]
fn test_following_recommendations_fills_trigonal_then_scans() {
    init_logging();
    let mut atom = Atom::new(Vector2::default(), Vec::new());
    assert_eq!(atom.next(), Next::Unset);

    let mut placed = vec![Direction::North];
    atom.attach_bond("single", Direction::North).unwrap();
    while let Some(direction) = atom.next().direction() {
        placed.push(direction);
        atom.attach_bond("single", direction).unwrap();
    }

    assert_eq!(atom.next(), Next::Max);
    assert_eq!(placed.len(), 12);
    assert_eq!(
        &placed[..3],
        &[Direction::North, Direction::SouthEast1, Direction::SouthWest2]
    );
    assert_eq!(placed.iter().unique().count(), 12);
}

#[test]
fn test_gap_is_found_regardless_of_attachment_order() {
    init_logging();
    let without_gap: Vec<_> = canonical_order()
        .iter()
        .copied()
        .filter(|&direction| direction != Direction::NorthEast2)
        .collect();

    let orders = vec![
        without_gap.clone(),
        without_gap.iter().rev().copied().collect(),
        without_gap.iter().step_by(2).chain(without_gap.iter().skip(1).step_by(2)).copied().collect(),
    ];
    for order in orders {
        let atom = attach_all(order);
        assert_eq!(atom.next(), Next::Direction(Direction::NorthEast2));
    }
}

#[test]
fn test_scan_is_order_independent_for_small_groups() {
    init_logging();
    let group = [Direction::East, Direction::North, Direction::South, Direction::NorthWest2];
    for order in group.iter().copied().permutations(group.len()) {
        let atom = attach_all(order);
        assert_eq!(atom.next(), Next::Direction(Direction::NorthEast1));
    }
}

#[test]
fn test_saturation_is_observable_before_overflow() {
    init_logging();
    let mut atom = attach_all(canonical_order().iter().copied().take(11));
    assert_eq!(atom.next(), Next::Direction(Direction::NorthWest2));
    assert_eq!(atom.try_attach_bond("single", Direction::NorthWest2), Ok(Next::Max));
    assert_eq!(atom.next().to_string(), "max");
    assert!(atom.try_attach_bond("single", Direction::North).is_err());
}
