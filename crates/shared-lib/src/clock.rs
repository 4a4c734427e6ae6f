//! 时钟抽象
//!
//! 实习状态和反馈资格都依赖“今天”的日期，所以不能在业务代码里直接调用 `Local::now()`。
//! 生产环境使用 [`SystemClock`]，测试中使用 [`FixedClock`] 固定日期。

use chrono::{Local, NaiveDate};

/// 提供当前日期
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// 系统时钟，使用服务器本地时区的日期
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日期的时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
