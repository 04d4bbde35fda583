//! 列表字段取值

use std::cmp::Ordering;

/// 列表行的单个字段值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Number(Option<f64>),
}

impl FieldValue {
    pub fn text(value: Option<&str>) -> Self {
        Self::Text(value.map(str::to_string))
    }

    pub fn number(value: Option<impl Into<f64>>) -> Self {
        Self::Number(value.map(Into::into))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Text(None) | Self::Number(None))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => *v,
            Self::Text(_) => None,
        }
    }

    /// 用于搜索与筛选的小写文本
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Text(v) => v.as_deref().map(str::to_lowercase),
            Self::Number(v) => v.map(|n| n.to_string()),
        }
    }

    /// 升序比较：数字按数值，其他按小写文本，空值大于任何值
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        match (self, other) {
            (Self::Number(Some(a)), Self::Number(Some(b))) => a.total_cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            _ => self.search_text().cmp(&other.search_text()),
        }
    }
}

/// 可被列表视图处理的行
pub trait Listable {
    /// 按字段名取值；未知字段返回 `Text(None)`
    fn field(&self, name: &str) -> FieldValue;
}

impl<T: Listable + ?Sized> Listable for &T {
    fn field(&self, name: &str) -> FieldValue {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_sort_after_values() {
        let null = FieldValue::Number(None);
        let one = FieldValue::number(Some(1.0));
        assert_eq!(null.compare(&one), Ordering::Greater);
        assert_eq!(one.compare(&null), Ordering::Less);
        assert_eq!(FieldValue::Text(None).compare(&FieldValue::Number(None)), Ordering::Equal);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let nine = FieldValue::number(Some(9.0));
        let ten = FieldValue::number(Some(10.0));
        assert_eq!(nine.compare(&ten), Ordering::Less);
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        let a = FieldValue::text(Some("alpha"));
        let b = FieldValue::text(Some("Beta"));
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            FieldValue::text(Some("ABC")).compare(&FieldValue::text(Some("abc"))),
            Ordering::Equal
        );
    }
}
