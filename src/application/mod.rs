// アプリケーション層 - 部分探索と分割の集約

pub mod coordinator;
pub mod event;
pub mod progress;
pub mod solver;

pub use coordinator::{count_solutions, Coordinator};
pub use event::SearchEvent;
pub use progress::{ProgressManager, ProgressStats};
pub use solver::{new_solver, BitmaskSolver, OccupancySolver, PartialSolver};
