// 分割結果の集約（カウンティングバリア）

use anyhow::{anyhow, Result};

use crate::domain::search::PartitionResult;

/// 列番号ごとのスロットへ結果を集める
///
/// ちょうど `partitions` 個の完了を受け取るまで完了扱いにしない。
/// 同じスロットへの二重書き込みは契約違反としてエラーにする。
pub struct SlotAggregator {
    slots: Vec<Option<PartitionResult>>,
    received: usize,
}

impl SlotAggregator {
    pub fn new(partitions: usize) -> Self {
        Self {
            slots: vec![None; partitions],
            received: 0,
        }
    }

    /// 1つの完了を受け付ける
    pub fn accept(&mut self, result: PartitionResult) -> Result<()> {
        let partitions = self.slots.len();
        let slot = self
            .slots
            .get_mut(result.column)
            .ok_or_else(|| anyhow!("列 {} は範囲外です (分割数 {})", result.column, partitions))?;
        if slot.is_some() {
            return Err(anyhow!("列 {} の結果が二重に届きました", result.column));
        }
        *slot = Some(result);
        self.received += 1;
        Ok(())
    }

    /// 受け取った完了数
    pub fn received(&self) -> usize {
        self.received
    }

    /// すべての分割が完了したか
    pub fn is_complete(&self) -> bool {
        self.received == self.slots.len()
    }

    /// 列番号順のスロットを取り出す
    pub fn into_slots(self) -> Result<Vec<PartitionResult>> {
        if !self.is_complete() {
            return Err(anyhow!(
                "未完了の分割があります: {}/{}",
                self.received,
                self.slots.len()
            ));
        }
        self.slots
            .into_iter()
            .enumerate()
            .map(|(column, slot)| slot.ok_or_else(|| anyhow!("スロット {} が未完了です", column)))
            .collect()
    }
}
