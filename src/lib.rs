// N クイーン並列総当たり - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{count_solutions, Coordinator, SearchEvent};
pub use constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use domain::search::{BoardSize, ExecutionMode, SearchConfig, SearchSummary, SolverKind};
