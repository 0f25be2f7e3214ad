// Reusable library API, visible to both the CLI and embedding front ends.
pub mod dictionary;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod log;
pub mod puzzle;
pub mod selection;
pub mod solver;
pub mod word;
pub mod word_list;
