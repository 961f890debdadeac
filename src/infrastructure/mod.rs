// インフラ層 - スレッドとチャネルによる並列実行

pub mod executor;

pub use executor::ParallelExecutor;
