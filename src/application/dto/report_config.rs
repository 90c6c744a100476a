//! # Report Configuration DTO
//!
//! レポート作成設定のData Transfer Object

use crate::domain::entities::metrics::PhysicalProfile;

/// 記録の形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `"<歩数>,<活動種別>,<時間>"`
    #[default]
    Training,
    /// `"<歩数>,<時間>"`（常にウォーキング）
    DaySteps,
}

/// 出力スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Text,
    Json,
}

/// レポート作成設定
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 体重・身長
    pub profile: PhysicalProfile,
    pub format: ReportFormat,
    pub output: OutputStyle,
}

impl ReportConfig {
    /// 新しいレポート作成設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use steptrack::application::dto::report_config::{OutputStyle, ReportConfig, ReportFormat};
    /// use steptrack::domain::entities::metrics::PhysicalProfile;
    ///
    /// let config = ReportConfig::new(
    ///     PhysicalProfile::new(75.0, 1.75),
    ///     ReportFormat::DaySteps,
    ///     OutputStyle::Text,
    /// );
    ///
    /// assert_eq!(config.profile.weight_kg, 75.0);
    /// assert_eq!(config.format, ReportFormat::DaySteps);
    /// ```
    pub fn new(profile: PhysicalProfile, format: ReportFormat, output: OutputStyle) -> Self {
        Self {
            profile,
            format,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ReportFormat::default(), ReportFormat::Training);
        assert_eq!(OutputStyle::default(), OutputStyle::Text);
    }

    #[test]
    fn test_report_config_clone() {
        let config = ReportConfig::new(
            PhysicalProfile::new(60.0, 1.6),
            ReportFormat::Training,
            OutputStyle::Json,
        );
        let cloned = config.clone();

        assert_eq!(cloned.profile, config.profile);
        assert_eq!(cloned.format, config.format);
        assert_eq!(cloned.output, OutputStyle::Json);
    }
}
