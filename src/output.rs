use crate::importer::{ImportReport, RecordOutcome};
use owo_colors::OwoColorize;

/// 失敗時に表示するヒント
pub const FAILURE_HINT: &str = "These probably occurred because an identically-named record already \
existed, or because there were multiple entries with the same name in the CSV file.";

/// 1件分の進捗行
pub fn record_line(outcome: &RecordOutcome) -> String {
    let status = if outcome.is_success() {
        "done!".green().to_string()
    } else {
        "error!".red().to_string()
    };
    format!("Creating record “{}”... {}", outcome.name, status)
}

/// 最終レポート
pub struct ImportSummary {
    pub lines: Vec<String>,
}

impl ImportSummary {
    pub fn format(report: &ImportReport) -> Self {
        let mut lines = vec![format!("{} records successfully imported!", report.successful)
            .green()
            .to_string()];

        if !report.is_success() {
            lines.push(
                format!("There were {} errors:", report.failure_count())
                    .red()
                    .to_string(),
            );
            lines.push(format!("{}.", report.failed_names().join(", ")));
            lines.push(FAILURE_HINT.to_string());
        }

        Self { lines }
    }
}
