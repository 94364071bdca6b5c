mod duel_runner;

pub use duel_runner::run_duel;
