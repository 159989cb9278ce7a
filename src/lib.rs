//! Game core for a single-screen arcade shooter.
//!
//! Everything here is terminal-agnostic: the binary feeds `Controls` in,
//! calls `compute::tick`, and hands the result to a `render::Canvas`.

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod input;
pub mod movement;
pub mod render;
pub mod spawner;
