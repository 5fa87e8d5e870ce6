//! Tests for the planner module.

use super::*;
use crate::{error::PlannerError, simulate::Towers};

const COLORS: [&str; 3] = ["red", "green", "blue"];

/// Every stack of `len` disks, sizes descending, over three colors.
fn all_stacks(len: usize) -> Vec<Vec<Disk<&'static str>>> {
    let mut stacks = vec![Vec::new()];
    for position in 0..len {
        let size = (len - position) as u64;
        stacks = stacks
            .into_iter()
            .flat_map(|stack| {
                COLORS.iter().map(move |&color| {
                    let mut next = stack.clone();
                    next.push(Disk::new(size, color));
                    next
                })
            })
            .collect();
    }
    stacks
}

fn has_adjacent_repeat(stack: &[Disk<&str>]) -> bool {
    stack.windows(2).any(|pair| pair[0].color == pair[1].color)
}

fn alternating(len: usize) -> Vec<Disk<&'static str>> {
    (0..len)
        .map(|position| {
            let color = if position % 2 == 0 { "red" } else { "blue" };
            Disk::new((len - position) as u64, color)
        })
        .collect()
}

#[test]
fn test_empty_stack_yields_no_moves() {
    let moves = plan::<&str, _>(&[], "A", "C", "B").expect("Empty stack is valid");
    assert!(moves.is_empty());
}

#[test]
fn test_single_disk_moves_straight_to_target() {
    let moves = plan(&[Disk::new(5, "green")], "A", "C", "B").expect("Failed to plan");
    assert_eq!(moves, vec![Move::new(5, "A", "C")]);
}

#[test]
fn test_two_disks() {
    let stack = [Disk::new(2, "blue"), Disk::new(1, "red")];
    let moves = plan(&stack, "A", "C", "B").expect("Failed to plan");
    assert_eq!(
        moves,
        vec![
            Move::new(1, "A", "B"),
            Move::new(2, "A", "C"),
            Move::new(1, "B", "C"),
        ]
    );
}

#[test]
fn test_three_disks_red_blue_red() {
    let stack = [
        Disk::new(3, "red"),
        Disk::new(2, "blue"),
        Disk::new(1, "red"),
    ];
    let moves = plan(&stack, "A", "C", "B").expect("Non-adjacent repeats are allowed");
    assert_eq!(
        moves,
        vec![
            Move::new(1, "A", "C"),
            Move::new(2, "A", "B"),
            Move::new(1, "C", "B"),
            Move::new(3, "A", "C"),
            Move::new(1, "B", "A"),
            Move::new(2, "B", "C"),
            Move::new(1, "A", "C"),
        ]
    );
}

#[test]
fn test_adjacent_equal_colors_rejected() {
    let stack = [Disk::new(2, "red"), Disk::new(2, "red")];
    let err = plan(&stack, "A", "C", "B").expect_err("Adjacent equal colors must fail");
    assert!(matches!(
        err,
        PlannerError::ConstraintViolation { lower: 0, upper: 1 }
    ));
}

#[test]
fn test_violation_reports_lowest_pair() {
    let stack = [
        Disk::new(5, "red"),
        Disk::new(4, "blue"),
        Disk::new(3, "blue"),
        Disk::new(2, "green"),
        Disk::new(1, "green"),
    ];
    let err = plan(&stack, "A", "C", "B").expect_err("Stack has two violations");
    assert!(matches!(
        err,
        PlannerError::ConstraintViolation { lower: 1, upper: 2 }
    ));
}

#[test]
fn test_violation_at_top_of_tall_stack() {
    let mut stack = alternating(12);
    let top_color = stack[11].color;
    stack.push(Disk::new(0, top_color));
    let err = plan(&stack, "A", "C", "B").expect_err("Top pair shares a color");
    assert!(matches!(
        err,
        PlannerError::ConstraintViolation {
            lower: 11,
            upper: 12
        }
    ));
}

#[test]
fn test_duplicate_pegs_rejected() {
    let err = plan(&[Disk::new(1, "red")], "A", "A", "B").expect_err("Duplicate pegs");
    assert!(matches!(err, PlannerError::DuplicatePeg { .. }));
}

#[test]
fn test_move_count_formula() {
    assert_eq!(move_count(0), Some(0));
    assert_eq!(move_count(1), Some(1));
    assert_eq!(move_count(10), Some(1023));
    assert_eq!(move_count(usize::BITS as usize), None);
    assert_eq!(move_count(usize::MAX), None);
}

#[test]
fn test_too_many_disks_rejected_without_recursing() {
    let stack = alternating(usize::BITS as usize);
    let err = plan(&stack, "A", "C", "B").expect_err("Plan cannot be allocated");
    assert!(matches!(err, PlannerError::TooManyDisks { count } if count == stack.len()));
}

#[test]
fn test_color_violation_wins_over_size_limit() {
    let mut stack = alternating(usize::BITS as usize);
    stack[1].color = stack[0].color;

    for mode in [ValidationMode::Upfront, ValidationMode::PerSubproblem] {
        let planner = PlannerBuilder::default()
            .with_validation(mode)
            .build()
            .expect("Failed to build planner");
        let err = planner.plan(&stack).expect_err("Stack violates colors");
        assert!(err.is_constraint_violation(), "mode {mode:?}: {err}");
    }
}

#[test]
fn test_valid_stacks_produce_minimal_legal_plans() {
    for len in 0..=6 {
        for stack in all_stacks(len)
            .into_iter()
            .filter(|stack| !has_adjacent_repeat(stack))
        {
            let moves = plan(&stack, "A", "C", "B").expect("Valid stack should plan");
            assert_eq!(moves.len(), (1usize << len) - 1);

            let mut towers = Towers::new(&stack, Pegs::lettered());
            towers
                .replay(&moves)
                .unwrap_or_else(|e| panic!("{stack:?}: {e}"));
            assert!(towers.is_complete(), "{stack:?} did not finish on target");
        }
    }
}

#[test]
fn test_invalid_stacks_always_rejected() {
    for len in 2..=5 {
        for stack in all_stacks(len)
            .into_iter()
            .filter(|stack| has_adjacent_repeat(stack))
        {
            let err = plan(&stack, "A", "C", "B").expect_err("Invalid stack should fail");
            assert!(err.is_constraint_violation());
        }
    }
}

#[test]
fn test_validation_modes_agree() {
    let upfront = PlannerBuilder::default().build().expect("Failed to build");
    let rescanning = PlannerBuilder::default()
        .with_validation(ValidationMode::PerSubproblem)
        .build()
        .expect("Failed to build");

    for len in 0..=5 {
        for stack in all_stacks(len) {
            match (upfront.plan(&stack), rescanning.plan(&stack)) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (
                    Err(PlannerError::ConstraintViolation { lower: la, upper: ua }),
                    Err(PlannerError::ConstraintViolation { lower: lb, upper: ub }),
                ) => assert_eq!((la, ua), (lb, ub)),
                (a, b) => panic!("modes disagree on {stack:?}: {a:?} vs {b:?}"),
            }
        }
    }
}

#[test]
fn test_planning_is_deterministic() {
    let stack = alternating(8);
    let first = plan(&stack, "A", "C", "B").expect("Failed to plan");
    let second = plan(&stack, "A", "C", "B").expect("Failed to plan");
    assert_eq!(first, second);
}

#[test]
fn test_custom_peg_identifiers() {
    let planner = PlannerBuilder::new(0u8, 2, 1).build().expect("Failed to build");
    assert_eq!(*planner.pegs().target(), 2);
    assert_eq!(planner.validation(), ValidationMode::Upfront);

    let moves = planner.plan(&alternating(3)).expect("Failed to plan");
    assert_eq!(moves.len(), 7);
    assert_eq!(moves[3], Move::new(3, 0, 2));

    let mut towers = Towers::new(&alternating(3), planner.pegs().clone());
    towers.replay(&moves).expect("Plan should replay");
    assert!(towers.is_complete());
}

#[test]
fn test_reversed_roles_swap_direction() {
    let stack = alternating(4);
    let forward = plan(&stack, "A", "C", "B").expect("Failed to plan");
    let backward = plan(&stack, "C", "A", "B").expect("Failed to plan");

    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(&backward) {
        assert_eq!(f.size, b.size);
    }
    assert_eq!(backward[7], Move::new(4, "C", "A"));
}
