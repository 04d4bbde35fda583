//! 列表视图状态
//!
//! 任何搜索、筛选、区间或排序的变更都会把页码重置为 1

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// "全部" 哨兵值
const ALL_SENTINELS: &[&str] = &["all", "semua"];

/// 分类筛选
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// `all` / `semua`（不区分大小写）以及空值表示不筛选
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() || ALL_SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s)) {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// 空值视为不匹配
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => {
                value.is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
            }
        }
    }
}

/// 闭区间数值筛选
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// 单个列表的交互状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListViewState {
    query: String,
    filters: BTreeMap<String, CategoryFilter>,
    range: Option<RangeFilter>,
    sort: Option<SortSpec>,
    page: u32,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: BTreeMap::new(),
            range: None,
            sort: None,
            page: 1,
        }
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self, field: &str) -> &CategoryFilter {
        static ALL: CategoryFilter = CategoryFilter::All;
        self.filters.get(field).unwrap_or(&ALL)
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &CategoryFilter)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn range(&self) -> Option<RangeFilter> {
        self.range
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// 请求的页码（应用时再截断到有效范围）
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, field: impl Into<String>, raw: &str) {
        let field = field.into();
        match CategoryFilter::parse(raw) {
            CategoryFilter::All => {
                self.filters.remove(&field);
            }
            filter => {
                self.filters.insert(field, filter);
            }
        }
        self.page = 1;
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.range = Some(RangeFilter { min, max });
        self.page = 1;
    }

    pub fn clear_range(&mut self) {
        self.range = None;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
        self.page = 1;
    }

    /// 点击表头：同一列切换方向，新列从升序开始
    pub fn toggle_sort(&mut self, field: &str) {
        let direction = match &self.sort {
            Some(current) if current.field == field => current.direction.reversed(),
            _ => SortDirection::Asc,
        };
        self.set_sort(Some(SortSpec {
            field: field.to_string(),
            direction,
        }));
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
