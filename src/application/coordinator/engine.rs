// 探索エンジン - 1行目の列ごとに分割して並列探索し、合計する

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::Sender;
use std::sync::Arc;

use crate::application::event::SearchEvent;
use crate::application::progress::ProgressManager;
use crate::application::solver::new_solver;
use crate::domain::search::{BoardSize, PartitionResult, SearchConfig, SearchSummary};
use crate::infrastructure::executor::{ParallelConfig, ParallelExecutor};
use crate::vlog;

/// 分割探索のコーディネーター
pub struct Coordinator {
    config: SearchConfig,
    executor: ParallelExecutor,
}

impl Coordinator {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate().context("検索設定が不正です")?;
        let executor = ParallelExecutor::new(ParallelConfig::new(config.num_workers));
        Ok(Self { config, executor })
    }

    /// 全分割を探索して集約する
    pub fn run(&self) -> Result<SearchSummary> {
        self.execute(None)
    }

    /// 全分割を探索し、途中経過をイベントとして送る
    pub fn run_with_events(&self, tx: &Sender<SearchEvent>) -> Result<SearchSummary> {
        self.execute(Some(tx.clone()))
    }

    fn execute(&self, tx: Option<Sender<SearchEvent>>) -> Result<SearchSummary> {
        let size = self.config.board_size;
        let kind = self.config.solver;
        let partitions = size.get();
        let progress = Arc::new(ProgressManager::new());

        if let Some(tx) = &tx {
            let _ = tx.send(SearchEvent::Started { partitions });
        }
        emit_log(
            tx.as_ref(),
            format!(
                "[開始] N={} / ソルバー={} / 実行方式={} / ワーカー={}",
                size,
                kind,
                self.config.mode,
                self.executor.num_workers()
            ),
        );

        let task = {
            let progress = Arc::clone(&progress);
            let tx = tx.clone();
            move |column: usize| -> Result<PartitionResult> {
                // 占有セットは分割ごとに新しく作る
                let mut solver = new_solver(kind, size);
                let count = solver
                    .solve(0, column)
                    .with_context(|| format!("列 {} の探索に失敗しました", column))?;
                let result = PartitionResult {
                    column,
                    count,
                    nodes: solver.nodes(),
                };
                progress.record(&result);
                emit_log(
                    tx.as_ref(),
                    format!(
                        "[分割] 列={} / 解={} / ノード={}",
                        column, result.count, result.nodes
                    ),
                );
                if let Some(tx) = &tx {
                    let _ = tx.send(SearchEvent::PartitionFinished(result));
                }
                Ok(result)
            }
        };

        let results = self
            .executor
            .run_partitions(self.config.mode, partitions, task)?;

        let summary = self.reduce(size, &results, &progress)?;
        emit_log(
            tx.as_ref(),
            format!(
                "[集約] 合計={} / ノード={} / {:.3}秒",
                summary.total, summary.total_nodes, summary.elapsed_seconds
            ),
        );
        if let Some(tx) = &tx {
            let _ = tx.send(SearchEvent::Finished(summary.clone()));
        }
        Ok(summary)
    }

    fn reduce(
        &self,
        size: BoardSize,
        results: &[PartitionResult],
        progress: &ProgressManager,
    ) -> Result<SearchSummary> {
        let mut summary = SearchSummary::new(size, self.config.solver, self.config.mode);
        summary.slots = results.iter().map(|r| r.count).collect();
        summary.total = sum_slots(&summary.slots)?;

        // 各分割が1回ずつ記録したかを進捗カウンタと突き合わせる
        let stats = progress.get_stats();
        if stats.partitions_done != results.len() {
            return Err(anyhow!(
                "完了記録が一致しません: {} 件記録 / {} 件受信",
                stats.partitions_done,
                results.len()
            ));
        }
        if stats.solutions_found != summary.total {
            return Err(anyhow!(
                "解の数が一致しません: 進捗 {} / スロット合計 {}",
                stats.solutions_found,
                summary.total
            ));
        }
        summary.total_nodes = stats.nodes_searched;
        summary.elapsed_seconds = progress.elapsed().as_secs_f64();
        summary.nodes_per_second = progress.nodes_per_second();
        Ok(summary)
    }
}

/// ログファイルへ書き、イベント送信先があれば `Log` としても送る
fn emit_log(tx: Option<&Sender<SearchEvent>>, message: String) {
    vlog!("{}", message);
    if let Some(tx) = tx {
        let _ = tx.send(SearchEvent::Log(message));
    }
}

/// スロットの合計（桁あふれはエラー）
pub fn sum_slots(slots: &[u64]) -> Result<u64> {
    slots.iter().try_fold(0u64, |acc, &c| {
        acc.checked_add(c)
            .ok_or_else(|| anyhow!("解の総数が u64 の範囲を超えました"))
    })
}

/// 既定設定で盤面サイズ `size` の解の総数を求める
pub fn count_solutions(size: BoardSize) -> Result<u64> {
    let summary = Coordinator::new(SearchConfig::new(size))?.run()?;
    Ok(summary.total)
}
