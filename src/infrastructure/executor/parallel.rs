// 並列実行管理

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use rayon::prelude::*;
use std::thread;

use super::aggregator::SlotAggregator;
use crate::domain::search::{ExecutionMode, PartitionResult};

/// 並列タスクの実行結果
pub type TaskResult<T> = Result<T>;

/// 並列実行設定
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// プール方式のワーカースレッド数
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get().max(1),
        }
    }
}

impl ParallelConfig {
    pub fn new(num_workers: usize) -> Self {
        Self { num_workers }
    }
}

/// 並列実行エグゼキューター
///
/// 分割数ぶんのタスクを起動し、すべての完了を待ってから列番号順の
/// スロットとして返す。各タスクが書くスロットは1つだけ。
pub struct ParallelExecutor {
    config: ParallelConfig,
}

impl ParallelExecutor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// ワーカー数を取得
    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }

    /// 分割 `0..partitions` を並列に実行する
    pub fn run_partitions<F>(
        &self,
        mode: ExecutionMode,
        partitions: usize,
        task: F,
    ) -> Result<Vec<PartitionResult>>
    where
        F: Fn(usize) -> TaskResult<PartitionResult> + Send + Sync + Clone + 'static,
    {
        match mode {
            ExecutionMode::Pool => self.run_on_pool(partitions, task),
            ExecutionMode::Threads => run_on_threads(partitions, task),
        }
    }

    /// rayon プール上で各スロットへ直接書き込む
    fn run_on_pool<F>(&self, partitions: usize, task: F) -> Result<Vec<PartitionResult>>
    where
        F: Fn(usize) -> TaskResult<PartitionResult> + Send + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_workers.max(1))
            .thread_name(|i| format!("nqueens-pool-{}", i))
            .build()
            .context("スレッドプールを作成できません")?;

        let mut slots: Vec<Option<PartitionResult>> = vec![None; partitions];
        pool.install(|| {
            slots
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(column, slot)| -> Result<()> {
                    *slot = Some(task(column)?);
                    Ok(())
                })
        })?;

        slots
            .into_iter()
            .enumerate()
            .map(|(column, slot)| slot.ok_or_else(|| anyhow!("スロット {} が未完了です", column)))
            .collect()
    }
}

impl Default for ParallelExecutor {
    fn default() -> Self {
        Self::new(ParallelConfig::default())
    }
}

/// 分割ごとの専用スレッドで実行し、チャネルで集約する
fn run_on_threads<F>(partitions: usize, task: F) -> Result<Vec<PartitionResult>>
where
    F: Fn(usize) -> TaskResult<PartitionResult> + Send + Sync + Clone + 'static,
{
    let mut pool = WorkerPool::new(partitions, task)?;
    for column in 0..partitions {
        pool.send_task(column)?;
    }
    pool.close_tasks();

    let mut aggregator = SlotAggregator::new(partitions);
    while !aggregator.is_complete() {
        let result = pool.recv_result().with_context(|| {
            format!(
                "完了 {}/{} で結果チャネルが閉じました",
                aggregator.received(),
                partitions
            )
        })?;
        aggregator.accept(result?)?;
    }
    aggregator.into_slots()
}

/// ワーカープール
pub struct WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    task_tx: Option<Sender<T>>,
    result_rx: Receiver<R>,
}

impl<T, R> WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    /// 新しいワーカープールを作成
    pub fn new<F>(num_workers: usize, worker_fn: F) -> Result<Self>
    where
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        let (task_tx, task_rx) = unbounded::<T>();
        let (result_tx, result_rx) = unbounded::<R>();

        for i in 0..num_workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let worker_fn = worker_fn.clone();

            thread::Builder::new()
                .name(format!("nqueens-worker-{}", i))
                .spawn(move || {
                    while let Ok(task) = task_rx.recv() {
                        let result = worker_fn(task);
                        if result_tx.send(result).is_err() {
                            break;
                        }
                    }
                })
                .with_context(|| format!("ワーカー {} を起動できません", i))?;
        }

        Ok(Self {
            task_tx: Some(task_tx),
            result_rx,
        })
    }

    /// タスクを送信
    pub fn send_task(&self, task: T) -> Result<()> {
        let tx = self
            .task_tx
            .as_ref()
            .ok_or_else(|| anyhow!("タスクキューは既に閉じています"))?;
        tx.send(task)
            .map_err(|e| anyhow!("タスクの送信に失敗しました: {}", e))
    }

    /// タスクキューを閉じる（キューが空になったワーカーは終了する）
    pub fn close_tasks(&mut self) {
        self.task_tx = None;
    }

    /// 結果を受信（ブロッキング）
    pub fn recv_result(&self) -> Result<R> {
        self.result_rx
            .recv()
            .map_err(|e| anyhow!("結果の受信に失敗しました: {}", e))
    }
}
