// 占有セット方式の部分探索

use anyhow::Result;

use super::{check_partition, PartialSolver};
use crate::domain::board::OccupancySets;
use crate::domain::search::BoardSize;

/// 1行目の列を固定した深さ優先バックトラッキング
///
/// 占有セットは探索ごとに積んで戻すので、同じインスタンスを何度
/// 呼び出しても同じ結果になる。並列実行の単位ごとに1つ所有する。
pub struct OccupancySolver {
    n: usize,
    occupancy: OccupancySets,
    count: u64,
    nodes: u64,
}

impl OccupancySolver {
    pub fn new(size: BoardSize) -> Self {
        Self {
            n: size.get(),
            occupancy: OccupancySets::new(size),
            count: 0,
            nodes: 0,
        }
    }

    /// 現在の占有セット（探索の外では常に空）
    pub fn occupancy(&self) -> &OccupancySets {
        &self.occupancy
    }

    fn place(&mut self, row: usize) {
        self.nodes += 1;

        // 葉処理
        if row == self.n {
            self.count += 1;
            return;
        }

        for col in 0..self.n {
            if !self.occupancy.is_free(row, col) {
                continue;
            }
            self.occupancy.mark(row, col);
            self.place(row + 1);
            self.occupancy.unmark(row, col);
        }
    }
}

impl PartialSolver for OccupancySolver {
    fn solve(&mut self, start_row: usize, fixed_column: usize) -> Result<u64> {
        check_partition(self.n, start_row, fixed_column)?;
        self.count = 0;
        self.nodes = 0;

        self.occupancy.mark(start_row, fixed_column);
        self.place(start_row + 1);
        self.occupancy.unmark(start_row, fixed_column);

        Ok(self.count)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
