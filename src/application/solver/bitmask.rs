// ビットマスク方式の部分探索

use anyhow::Result;

use super::{check_partition, PartialSolver};
use crate::constants::full_mask;
use crate::domain::search::BoardSize;

/// 占有セットを u64 のビットマスクで持つ部分探索
///
/// `diag` は1行下るごとに左へ、`anti` は右へずらす。空いている列は
/// 最下位ビットから順に取り出すので、列の昇順で探索する。
pub struct BitmaskSolver {
    n: usize,
    mask: u64,
    nodes: u64,
}

impl BitmaskSolver {
    pub fn new(size: BoardSize) -> Self {
        Self {
            n: size.get(),
            mask: full_mask(size.get()),
            nodes: 0,
        }
    }

    fn place(&mut self, row: usize, cols: u64, diag: u64, anti: u64) -> u64 {
        self.nodes += 1;
        if row == self.n {
            return 1;
        }

        let mut count = 0;
        let mut available = self.mask & !(cols | diag | anti);
        while available != 0 {
            let p = available & available.wrapping_neg();
            available ^= p;
            count += self.place(
                row + 1,
                cols | p,
                ((diag | p) << 1) & self.mask,
                (anti | p) >> 1,
            );
        }
        count
    }
}

impl PartialSolver for BitmaskSolver {
    fn solve(&mut self, start_row: usize, fixed_column: usize) -> Result<u64> {
        check_partition(self.n, start_row, fixed_column)?;
        self.nodes = 0;

        let p = 1u64 << fixed_column;
        let count = self.place(start_row + 1, p, (p << 1) & self.mask, p >> 1);
        Ok(count)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(n: usize) -> BitmaskSolver {
        BitmaskSolver::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn four_queens_partition_counts() {
        let mut s = solver(4);
        let counts: Vec<u64> = (0..4).map(|c| s.solve(0, c).unwrap()).collect();
        assert_eq!(counts, vec![0, 1, 1, 0]);
    }

    #[test]
    fn eight_queens_total() {
        let mut s = solver(8);
        let total: u64 = (0..8).map(|c| s.solve(0, c).unwrap()).sum();
        assert_eq!(total, 92);
    }

    #[test]
    fn single_square_board_has_one_solution() {
        let mut s = solver(1);
        assert_eq!(s.solve(0, 0).unwrap(), 1);
        assert_eq!(s.nodes(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut s = solver(3);
        assert!(s.solve(0, 3).is_err());
        assert!(s.solve(3, 0).is_err());
    }
}
