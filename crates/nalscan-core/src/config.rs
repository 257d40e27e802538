//! 扫描配置.

use std::time::Duration;

/// 默认时间预算: 单次扫描最多 100 ms
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(100);

/// 扫描配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// 单次调用允许的墙钟时间, 超出后提前返回部分结果
    pub time_budget: Duration,
}

impl ScanConfig {
    /// 使用默认预算创建
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置时间预算
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_100ms() {
        assert_eq!(ScanConfig::default().time_budget, Duration::from_millis(100));
        assert_eq!(ScanConfig::new(), ScanConfig::default());
    }

    #[test]
    fn test_with_time_budget() {
        let config = ScanConfig::new().with_time_budget(Duration::from_millis(5));
        assert_eq!(config.time_budget, Duration::from_millis(5));
    }
}
