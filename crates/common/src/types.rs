//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 记录 ID（由数据存储分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
#[display("{_0}")]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// 分页参数（页码从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

/// 列表页默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// 总页数（空列表视为 1 页）
    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(self.page_size.max(1) as u64);
        pages.max(1) as u32
    }

    /// 将页码收敛到 `1..=total_pages`
    pub fn clamp(self, total: u64) -> Self {
        let last = self.total_pages(total);
        Self {
            page: self.page.clamp(1, last),
            page_size: self.page_size,
        }
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    pub fn total_pages(&self) -> u32 {
        Pagination::new(self.page, self.page_size).total_pages(self.total)
    }

    /// 转换每一项，保留分页信息
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
        assert_eq!(Pagination::new(0, 10).page, 1);
    }

    #[test]
    fn test_pagination_clamp() {
        let p = Pagination::new(7, 10);
        assert_eq!(p.clamp(25).page, 3);
        assert_eq!(p.clamp(0).page, 1);
        assert_eq!(Pagination::new(2, 10).clamp(25).page, 2);
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::default();
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
    }

    #[test]
    fn test_paged_result_map_keeps_paging() {
        let paged = PagedResult::new(vec![1, 2], 12, &Pagination::new(2, 10));
        let mapped = paged.map(|v| v * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!((mapped.total, mapped.page, mapped.total_pages()), (12, 2, 2));
    }

    #[test]
    fn test_record_id_roundtrip() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
