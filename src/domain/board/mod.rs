// 盤面関連のドメイン層

pub mod occupancy;

pub use occupancy::OccupancySets;
