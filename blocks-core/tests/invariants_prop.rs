//! Property tests for the pile engine.
//!
//! Invariants covered:
//! - Every block stays in exactly one pile across arbitrary operator sequences.
//! - Same-pile commands leave the world untouched.
//! - After an accepted operator, `a` shares a pile with `b`.
//! - move onto / move over leave `a` on top; pile over keeps the carried run
//!   in order and leaves the source holding only what was below `a`.
//! - Restoring above an absent block drains the pile into vacant homes.

use blocks_core::{Block, Operator, Outcome, World};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::MoveOnto),
        Just(Operator::MoveOver),
        Just(Operator::PileOnto),
        Just(Operator::PileOver),
    ]
}

/// Block count plus a script of operator calls with in-range operands.
fn script() -> impl Strategy<Value = (usize, Vec<(Operator, usize, usize)>)> {
    (1usize..10).prop_flat_map(|n| {
        let step = (operator(), 0..n, 0..n);
        (Just(n), prop::collection::vec(step, 0..60))
    })
}

/// A script followed by one more pair of in-range operands.
fn script_and_operands() -> impl Strategy<Value = (usize, Vec<(Operator, usize, usize)>, usize, usize)> {
    script().prop_flat_map(|(n, steps)| (Just(n), Just(steps), 0..n, 0..n))
}

fn world_from(n: usize, steps: &[(Operator, usize, usize)]) -> World {
    let mut world = World::new(n);
    for &(op, a, b) in steps {
        world.apply(op, Block(a), Block(b));
    }
    world
}

proptest! {
    #[test]
    fn partition_survives_any_script((n, steps) in script()) {
        let mut world = World::new(n);
        for (op, a, b) in steps {
            let (a, b) = (Block(a), Block(b));
            let before = world.clone();
            let same_pile = world.locate(a) == world.locate(b);

            let outcome = world.apply(op, a, b);
            prop_assert!(world.is_partition());
            prop_assert_eq!(world.len(), n);

            if same_pile {
                prop_assert_eq!(outcome, Outcome::Rejected);
                prop_assert_eq!(&world, &before);
            } else {
                prop_assert_eq!(outcome, Outcome::Accepted);
                prop_assert_eq!(world.locate(a), world.locate(b));
            }
        }
    }

    #[test]
    fn move_leaves_a_on_top((n, steps, a, b) in script_and_operands(), over in any::<bool>()) {
        let mut world = world_from(n, &steps);
        let (a, b) = (Block(a), Block(b));
        if world.locate(a) == world.locate(b) {
            return Ok(());
        }

        let pile_b = world.locate(b).unwrap();
        let below_b = world.pile(pile_b).unwrap().blocks().to_vec();
        let height_b = world.pile(pile_b).unwrap().position(b).unwrap();

        let outcome = if over { world.move_over(a, b) } else { world.move_onto(a, b) };
        prop_assert_eq!(outcome, Outcome::Accepted);

        let dest = world.pile(pile_b).unwrap();
        prop_assert_eq!(dest.top(), Some(a));
        let expected_len = if over { below_b.len() + 1 } else { height_b + 2 };
        prop_assert_eq!(dest.len(), expected_len);
    }

    #[test]
    fn pile_over_moves_contiguous_run((n, steps, a, b) in script_and_operands()) {
        let mut world = world_from(n, &steps);
        let (a, b) = (Block(a), Block(b));
        if world.locate(a) == world.locate(b) {
            return Ok(());
        }

        let pile_a = world.locate(a).unwrap();
        let pile_b = world.locate(b).unwrap();
        let source = world.pile(pile_a).unwrap().blocks().to_vec();
        let dest = world.pile(pile_b).unwrap().blocks().to_vec();
        let at = source.iter().position(|&x| x == a).unwrap();

        prop_assert_eq!(world.pile_over(a, b), Outcome::Accepted);

        let mut expected = dest.clone();
        expected.extend_from_slice(&source[at..]);
        prop_assert_eq!(world.pile(pile_b).unwrap().blocks(), &expected[..]);
        prop_assert_eq!(world.pile(pile_a).unwrap().blocks(), &source[..at]);
    }

    #[test]
    fn restore_absent_target_drains_home(n in 2usize..10) {
        // Stack every block onto pile 0 so all other homes are vacant.
        let mut world = World::new(n);
        for block in 1..n {
            world.pile_over(Block(block), Block(0));
        }
        prop_assert_eq!(world.pile(0).unwrap().len(), n);

        world.restore_above(0, Block(n + 1));
        prop_assert_eq!(world, World::new(n));
    }
}

#[test]
fn move_onto_divergence_from_move_over() {
    // Pile 1 = [1, 2]: over stacks on 2, onto sends 2 home first.
    let mut setup = World::new(5);
    setup.move_onto(Block(2), Block(1));

    let mut over = setup.clone();
    over.move_over(Block(0), Block(1));
    assert_eq!(over.snapshot().piles[1], vec![1, 2, 0]);

    let mut onto = setup;
    onto.move_onto(Block(0), Block(1));
    assert_eq!(onto.snapshot().piles[1], vec![1, 0]);
    assert_eq!(onto.snapshot().piles[2], vec![2]);
}
