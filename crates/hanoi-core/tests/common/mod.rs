use hanoi_core::{Disk, Move, Pegs, Towers};

/// Helper function to build a size-ordered stack from a list of colors
pub fn stack_of(colors: &[&'static str]) -> Vec<Disk<&'static str>> {
    let height = colors.len() as u64;
    colors
        .iter()
        .zip(0..)
        .map(|(&color, position)| Disk::new(height - position, color))
        .collect()
}

/// Helper function to replay a plan on lettered pegs and return the final board
pub fn replay_lettered(
    stack: &[Disk<&'static str>],
    moves: &[Move<&'static str>],
) -> Towers<&'static str> {
    let mut towers = Towers::new(stack, Pegs::lettered());
    towers.replay(moves).expect("Plan should replay cleanly");
    towers
}
