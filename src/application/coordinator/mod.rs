// コーディネーター - 分割の起動・完了待ち・合計

pub mod engine;

pub use engine::{count_solutions, sum_slots, Coordinator};
