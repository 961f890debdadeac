// 占有セット - 列・対角線・反対角線の利用状況

use crate::domain::search::BoardSize;

/// 現在の探索経路上に置かれたクイーンの占有状況
///
/// 列は `col`、対角線（"/"）は `row - col + n - 1`、反対角線（"\"）は
/// `row + col` をキーにする。根から現在の深さまでの経路だけを反映する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancySets {
    n: usize,
    columns: Vec<bool>,
    diagonals: Vec<bool>,
    anti_diagonals: Vec<bool>,
}

impl OccupancySets {
    /// 空の占有セットを作成
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        Self {
            n,
            columns: vec![false; n],
            diagonals: vec![false; size.diagonal_len()],
            anti_diagonals: vec![false; size.diagonal_len()],
        }
    }

    #[inline(always)]
    fn diagonal_key(&self, row: usize, col: usize) -> usize {
        row + self.n - 1 - col
    }

    #[inline(always)]
    fn anti_diagonal_key(row: usize, col: usize) -> usize {
        row + col
    }

    /// (row, col) に置けるか
    #[inline(always)]
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        !self.columns[col]
            && !self.diagonals[self.diagonal_key(row, col)]
            && !self.anti_diagonals[Self::anti_diagonal_key(row, col)]
    }

    /// (row, col) のクイーンを登録
    #[inline(always)]
    pub fn mark(&mut self, row: usize, col: usize) {
        let d = self.diagonal_key(row, col);
        self.columns[col] = true;
        self.diagonals[d] = true;
        self.anti_diagonals[Self::anti_diagonal_key(row, col)] = true;
    }

    /// (row, col) のクイーンを取り除く
    #[inline(always)]
    pub fn unmark(&mut self, row: usize, col: usize) {
        let d = self.diagonal_key(row, col);
        self.anti_diagonals[Self::anti_diagonal_key(row, col)] = false;
        self.diagonals[d] = false;
        self.columns[col] = false;
    }

    /// どこにもクイーンが無いか
    pub fn is_empty(&self) -> bool {
        self.marked_count() == 0
    }

    /// 登録済みのエントリ数（列・対角線・反対角線の合計）
    pub fn marked_count(&self) -> usize {
        self.columns
            .iter()
            .chain(self.diagonals.iter())
            .chain(self.anti_diagonals.iter())
            .filter(|&&b| b)
            .count()
    }
}
