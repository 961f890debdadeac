// 盤面定数

/// 起動時に引数が無い場合の盤面サイズ
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// 受け付ける最大の盤面サイズ（ビットマスクを u64 に収めるため）
pub const MAX_BOARD_SIZE: usize = 32;

/// ログファイルの既定パス
pub const DEFAULT_LOG_PATH: &str = "nqueens.log";

/// 盤面サイズ n に対する対角線の本数（2n - 1）
pub const fn diagonal_len(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        2 * n - 1
    }
}

/// 下位 n ビットがすべて立ったマスク
pub const fn full_mask(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
