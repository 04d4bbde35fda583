//! 列表视图：搜索、分类筛选、金额区间、单列排序、分页
//!
//! 所有看板列表共用同一个控制器，按 `ListViewConfig` 参数化

pub mod field;
pub mod state;
pub mod view;

pub use field::{FieldValue, Listable};
pub use state::{CategoryFilter, ListViewState, RangeFilter, SortDirection, SortSpec};
pub use view::{ListView, ListViewConfig};
