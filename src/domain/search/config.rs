// 検索設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// 盤面サイズ N を表すValue Object（デシリアライズ時も `new` で検証する）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(anyhow!("盤面サイズは1以上である必要があります"));
        }
        if n > MAX_BOARD_SIZE {
            return Err(anyhow!(
                "盤面サイズが大きすぎます: {} (最大 {})",
                n,
                MAX_BOARD_SIZE
            ));
        }
        Ok(Self(n))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// 対角線キーの個数（2N - 1）
    pub fn diagonal_len(&self) -> usize {
        crate::constants::diagonal_len(self.0)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = anyhow::Error;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 部分探索の実装の種類
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// 真偽値配列の占有セット
    #[default]
    Occupancy,
    /// u64 ビットマスクの占有セット
    Bitmask,
}

impl FromStr for SolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "occupancy" | "flag" => Ok(Self::Occupancy),
            "bitmask" | "bit" => Ok(Self::Bitmask),
            other => Err(anyhow!("不明なソルバー: {}", other)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupancy => write!(f, "occupancy"),
            Self::Bitmask => write!(f, "bitmask"),
        }
    }
}

/// 分割探索の並列実行方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// rayon スレッドプールで各スロットへ直接書き込む
    #[default]
    Pool,
    /// 分割ごとに専用スレッドを立て、チャネルで結果を集める
    Threads,
}

impl FromStr for ExecutionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pool" => Ok(Self::Pool),
            "threads" => Ok(Self::Threads),
            other => Err(anyhow!("不明な実行方式: {}", other)),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool => write!(f, "pool"),
            Self::Threads => write!(f, "threads"),
        }
    }
}

/// 検索設定のValue Object
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    pub board_size: BoardSize,
    pub solver: SolverKind,
    pub mode: ExecutionMode,
    /// プール方式のワーカースレッド数
    pub num_workers: usize,
    pub verbose: bool,
    pub log_path: Option<PathBuf>,
}

impl SearchConfig {
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    pub fn validate(&self) -> Result<()> {
        BoardSize::new(self.board_size.get())?;
        if self.num_workers == 0 {
            return Err(anyhow!("ワーカー数は1以上である必要があります"));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            solver: SolverKind::default(),
            mode: ExecutionMode::default(),
            num_workers: num_cpus::get().max(1),
            verbose: false,
            log_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_rejects_zero() {
        assert!(BoardSize::new(0).is_err());
    }

    #[test]
    fn board_size_rejects_too_large() {
        assert!(BoardSize::new(MAX_BOARD_SIZE + 1).is_err());
    }

    #[test]
    fn board_size_accepts_valid() {
        assert_eq!(BoardSize::new(1).unwrap().get(), 1);
        assert_eq!(BoardSize::new(8).unwrap().get(), 8);
        assert_eq!(BoardSize::new(8).unwrap().diagonal_len(), 15);
        assert!(BoardSize::new(MAX_BOARD_SIZE).is_ok());
    }

    #[test]
    fn solver_kind_parses_names() {
        assert_eq!("occupancy".parse::<SolverKind>().unwrap(), SolverKind::Occupancy);
        assert_eq!("bit".parse::<SolverKind>().unwrap(), SolverKind::Bitmask);
        assert!("dlx".parse::<SolverKind>().is_err());
    }

    #[test]
    fn execution_mode_parses_names() {
        assert_eq!("pool".parse::<ExecutionMode>().unwrap(), ExecutionMode::Pool);
        assert_eq!("threads".parse::<ExecutionMode>().unwrap(), ExecutionMode::Threads);
        assert!("async".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size.get(), DEFAULT_BOARD_SIZE);
        assert!(config.num_workers > 0);
    }

    #[test]
    fn config_rejects_zero_workers() {
        let config = SearchConfig::default().with_workers(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_serializes_lowercase_enums() {
        let config = SearchConfig::new(BoardSize::new(6).unwrap())
            .with_solver(SolverKind::Bitmask)
            .with_mode(ExecutionMode::Threads)
            .with_workers(2);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"bitmask\""));
        assert!(json.contains("\"threads\""));
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.board_size.get(), 6);
        assert_eq!(back.num_workers, 2);
    }

    #[test]
    fn deserialize_rejects_out_of_range_board_size() {
        for n in [0, MAX_BOARD_SIZE + 1, 70] {
            let json = format!(
                r#"{{"board_size":{},"solver":"bitmask","mode":"pool","num_workers":1,"verbose":false,"log_path":null}}"#,
                n
            );
            assert!(serde_json::from_str::<SearchConfig>(&json).is_err(), "N={}", n);
        }
        assert!(serde_json::from_str::<BoardSize>("8").is_ok());
        assert!(serde_json::from_str::<BoardSize>("0").is_err());
    }
}
