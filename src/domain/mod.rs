// ドメイン層 - 盤面状態と検索設定

pub mod board;
pub mod search;
