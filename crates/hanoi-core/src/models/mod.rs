//! Data models for disks, pegs and moves.
//!
//! These are the value types the planner consumes and produces. Display
//! implementations for whole plans live in [`crate::display`]; the models
//! themselves only carry a compact single-line format.
//!
//! # Examples
//!
//! ```rust
//! use hanoi_core::models::{Disk, Move, Pegs};
//!
//! let disk: Disk<String> = "3:red".parse().unwrap();
//! assert_eq!(disk.size, 3);
//! assert_eq!(disk.color, "red");
//!
//! let pegs = Pegs::new("A", "C", "B").unwrap();
//! assert_eq!(*pegs.target(), "C");
//!
//! let step = Move::new(1, "A", "B");
//! assert_eq!(step.to_string(), "disk 1: A -> B");
//! ```

pub mod disk;
pub mod movement;
pub mod peg;


pub use disk::{is_size_ordered, Disk};
pub use movement::Move;
pub use peg::Pegs;
