//! 专业目录
//!
//! 学生的专业（branch）是自由文本，但筛选和统计只认识一组已知专业，
//! 其余全部归到 [`OTHER_BRANCH`] 这个桶中。

/// 不在已知专业列表中的统一归类名称
pub const OTHER_BRANCH: &str = "Other";

/// 默认的已知专业列表，顺序即图表展示顺序
pub const DEFAULT_BRANCHES: [&str; 11] = [
    "CSE", "IT", "ECE", "EEE", "MECH", "CIVIL", "AI&ML", "AI&DS", "CSBS", "IoT", "AIDS",
];

/// 已知专业目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCatalog {
    known: Vec<String>,
}

impl BranchCatalog {
    /// 使用给定的专业列表创建目录
    ///
    /// 会去掉空白项和重复项，同时保留第一次出现的顺序。
    /// `Other` 是保留名称，不会作为已知专业。
    pub fn new<I, S>(branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known: Vec<String> = Vec::new();
        for branch in branches {
            let branch = branch.as_ref().trim();
            if branch.is_empty() || branch == OTHER_BRANCH || known.iter().any(|k| k == branch) {
                continue;
            }
            known.push(branch.to_string());
        }
        Self { known }
    }

    /// 已知专业，按定义顺序
    pub fn known(&self) -> &[String] {
        &self.known
    }

    pub fn is_known(&self, branch: &str) -> bool {
        let branch = branch.trim();
        self.known.iter().any(|k| k == branch)
    }

    /// 返回统计时使用的分桶名称
    pub fn bucket_for<'a>(&'a self, branch: Option<&str>) -> &'a str {
        match branch.map(str::trim) {
            Some(b) => self
                .known
                .iter()
                .find(|k| k.as_str() == b)
                .map(String::as_str)
                .unwrap_or(OTHER_BRANCH),
            None => OTHER_BRANCH,
        }
    }

    /// 判断学生的专业是否满足筛选条件
    ///
    /// 筛选值为 `Other` 时，匹配所有不在已知列表中的专业（包括空值）。
    pub fn matches(&self, wanted: &str, actual: Option<&str>) -> bool {
        if wanted == OTHER_BRANCH {
            return !actual.is_some_and(|b| self.is_known(b));
        }
        actual.is_some_and(|b| b.trim() == wanted)
    }
}

impl Default for BranchCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCHES)
    }
}
