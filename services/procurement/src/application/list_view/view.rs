//! 列表视图控制器

use procura_common::{DEFAULT_PAGE_SIZE, PagedResult, Pagination};

use super::field::Listable;
use super::state::{ListViewState, RangeFilter, SortDirection};

/// 列表视图配置
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewConfig {
    /// 参与全文搜索的字段
    pub search_fields: Vec<&'static str>,
    /// 数值区间筛选的字段
    pub range_field: Option<&'static str>,
    /// 区间控件的下限，最小值不高于它时不设下界
    pub range_floor: f64,
    /// 区间控件的上限哨兵，最大值不低于它时不设上界
    pub range_ceiling: f64,
    pub page_size: u32,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            range_field: None,
            range_floor: 0.0,
            range_ceiling: f64::INFINITY,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListViewConfig {
    pub fn new(search_fields: Vec<&'static str>) -> Self {
        Self {
            search_fields,
            ..Default::default()
        }
    }

    pub fn with_range(mut self, field: &'static str, floor: f64, ceiling: f64) -> Self {
        self.range_field = Some(field);
        self.range_floor = floor;
        self.range_ceiling = ceiling;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// 列表视图：筛选 → 排序 → 分页
#[derive(Debug, Clone)]
pub struct ListView {
    config: ListViewConfig,
}

impl ListView {
    pub fn new(config: ListViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListViewConfig {
        &self.config
    }

    /// 对内存中的快照应用状态，页码截断到 `1..=total_pages`
    pub fn apply<'a, T: Listable>(&self, items: &'a [T], state: &ListViewState) -> PagedResult<&'a T> {
        let filtered = self.filter_and_sort(items, state);
        let total = filtered.len() as u64;
        let pagination = Pagination::new(state.page(), self.config.page_size).clamp(total);

        let page_items = filtered
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.page_size as usize)
            .collect();

        PagedResult::new(page_items, total, &pagination)
    }

    /// 筛选并排序，不分页
    pub fn filter_and_sort<'a, T: Listable>(&self, items: &'a [T], state: &ListViewState) -> Vec<&'a T> {
        let query = state.query().trim().to_lowercase();
        let range = state.range().filter(|r| self.range_is_active(r));

        let mut rows: Vec<&T> = items
            .iter()
            .filter(|item| self.matches_query(*item, &query))
            .filter(|item| {
                state
                    .filters()
                    .all(|(field, filter)| filter.matches(item.field(field).search_text().as_deref()))
            })
            .filter(|item| range.is_none_or(|r| self.matches_range(*item, &r)))
            .collect();

        if let Some(sort) = state.sort() {
            rows.sort_by(|a, b| {
                let ordering = a.field(&sort.field).compare(&b.field(&sort.field));
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        rows
    }

    /// 区间等于控件全范围时视为未筛选
    fn range_is_active(&self, range: &RangeFilter) -> bool {
        self.config.range_field.is_some()
            && (range.min > self.config.range_floor || range.max < self.config.range_ceiling)
    }

    fn matches_query<T: Listable>(&self, item: &T, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.config.search_fields.iter().any(|field| {
            item.field(field)
                .search_text()
                .is_some_and(|text| text.contains(query))
        })
    }

    fn matches_range<T: Listable>(&self, item: &T, range: &RangeFilter) -> bool {
        let Some(field) = self.config.range_field else {
            return true;
        };
        let Some(value) = item.field(field).as_number() else {
            return false;
        };
        let above_min = range.min <= self.config.range_floor || value >= range.min;
        let below_max = range.max >= self.config.range_ceiling || value <= range.max;
        above_min && below_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::list_view::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        title: Option<&'static str>,
        unit: Option<&'static str>,
        amount: Option<f64>,
    }

    impl Listable for Row {
        fn field(&self, name: &str) -> FieldValue {
            match name {
                "title" => FieldValue::text(self.title),
                "unit" => FieldValue::text(self.unit),
                "amount" => FieldValue::Number(self.amount),
                _ => FieldValue::Text(None),
            }
        }
    }

    fn row(title: &'static str, unit: &'static str, amount: f64) -> Row {
        Row {
            title: Some(title),
            unit: Some(unit),
            amount: Some(amount),
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row("Kertas HVS", "Umum", 2_500_000.0),
            row("Laptop", "TI", 45_000_000.0),
            row("Jasa Kebersihan", "Umum", 120_000_000.0),
            Row {
                title: None,
                unit: None,
                amount: None,
            },
            row("Server", "TI", 300_000_000.0),
        ]
    }

    fn view() -> ListView {
        ListView::new(
            ListViewConfig::new(vec!["title", "unit"]).with_range("amount", 0.0, 500_000_000.0),
        )
    }

    #[test]
    fn test_query_matches_any_search_field() {
        let items = rows();
        let mut state = ListViewState::new();
        state.set_query("umum");
        let result = view().apply(&items, &state);
        assert_eq!(result.total, 2);

        state.set_query("LAPTOP");
        let result = view().apply(&items, &state);
        assert_eq!(result.items, vec![&items[1]]);
    }

    #[test]
    fn test_category_filter_and_sentinel() {
        let items = rows();
        let mut state = ListViewState::new();
        state.set_filter("unit", "ti");
        assert_eq!(view().apply(&items, &state).total, 2);

        state.set_filter("unit", "Semua");
        assert_eq!(view().apply(&items, &state).total, items.len() as u64);
    }

    #[test]
    fn test_sentinel_range_equals_no_range() {
        let items = rows();
        let unfiltered = view().filter_and_sort(&items, &ListViewState::new());

        let mut state = ListViewState::new();
        state.set_range(0.0, 500_000_000.0);
        assert_eq!(view().filter_and_sort(&items, &state), unfiltered);

        // 超过上限的值在哨兵上界下仍然保留
        let mut with_big = items.clone();
        with_big.push(row("Gedung", "Umum", 9_000_000_000.0));
        let unfiltered = view().filter_and_sort(&with_big, &ListViewState::new());
        assert_eq!(view().filter_and_sort(&with_big, &state), unfiltered);
    }

    #[test]
    fn test_active_range_is_inclusive_and_drops_nulls() {
        let items = rows();
        let mut state = ListViewState::new();
        state.set_range(2_500_000.0, 45_000_000.0);
        let result = view().filter_and_sort(&items, &state);
        assert_eq!(result, vec![&items[0], &items[1]]);
    }

    #[test]
    fn test_sort_desc_reverses_asc() {
        let items: Vec<Row> = rows().into_iter().filter(|r| r.amount.is_some()).collect();
        let mut state = ListViewState::new();
        state.toggle_sort("amount");
        let asc = view().filter_and_sort(&items, &state);
        state.toggle_sort("amount");
        let mut desc = view().filter_and_sort(&items, &state);
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc[0].title, Some("Kertas HVS"));
    }

    #[test]
    fn test_nulls_last_when_ascending() {
        let items = rows();
        let mut state = ListViewState::new();
        state.toggle_sort("title");
        let sorted = view().filter_and_sort(&items, &state);
        assert_eq!(sorted.last().map(|r| r.title), Some(None));
        assert_eq!(sorted[0].title, Some("Jasa Kebersihan"));
    }

    #[test]
    fn test_page_is_clamped() {
        let items: Vec<Row> = (0..25)
            .map(|i| Row {
                title: Some("item"),
                unit: Some("Umum"),
                amount: Some(i as f64),
            })
            .collect();
        let mut state = ListViewState::new();
        state.set_page(9);
        let result = view().apply(&items, &state);
        assert_eq!(result.page, 3);
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.total_pages(), 3);

        state.set_query("tidak ada");
        let result = view().apply(&items, &state);
        assert_eq!(result.page, 1);
        assert!(result.items.is_empty());
    }
}
