//! # Report Batch Use Case
//!
//! 複数の記録を順にレポートにする（集計はしない）

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::application::use_cases::session_report::{RecordOutcome, SessionReport};
use crate::domain::repositories::record_repository::RecordRepository;

/// 記録ごとの結果のリスト
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// (元の記録, 結果)
    pub outcomes: Vec<(String, RecordOutcome)>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_report()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// 記録の一括レポートユースケース
pub struct ReportBatchUseCase<R: RecordRepository> {
    record_repository: Arc<R>,
    report: SessionReport,
}

impl<R: RecordRepository> ReportBatchUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `record_repository` - 記録リポジトリ
    /// * `report` - 1件ごとのレポート作成
    pub fn new(record_repository: Arc<R>, report: SessionReport) -> Self {
        Self {
            record_repository,
            report,
        }
    }

    /// 記録ファイルを読み込んでレポートにする
    ///
    /// # Errors
    ///
    /// 記録ファイルの読み込みに失敗した場合にエラーを返す。
    /// 個々の記録の失敗は `BatchOutcome` に含まれる。
    pub fn execute_source(&self, source: &Path) -> Result<BatchOutcome> {
        let records = self
            .record_repository
            .load_records(source)
            .with_context(|| format!("Failed to load records from {}", source.display()))?;
        Ok(self.execute_records(&records))
    }

    /// 与えられた記録をレポートにする
    pub fn execute_records(&self, records: &[String]) -> BatchOutcome {
        let outcomes: Vec<(String, RecordOutcome)> = records
            .iter()
            .map(|raw| (raw.clone(), self.report.render(raw)))
            .collect();

        let batch = BatchOutcome { outcomes };
        if batch.failed() > 0 {
            warn!(
                "{} of {} records could not be reported",
                batch.failed(),
                batch.outcomes.len()
            );
        }
        info!("Reported {} records", batch.succeeded());

        batch
    }
}
