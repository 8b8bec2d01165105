pub mod check;
pub mod generate;

pub use check::{handle_check, handle_compare, CheckArgs, CompareArgs};
pub use generate::{handle_generate, handle_system, GenerateArgs};
