//! 金额值对象
//!
//! 采购金额以整数卢比存储，序列化为裸数字以匹配数据表列

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// 卢比金额（非负）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawAmount", into = "i64")]
pub struct Rupiah(i64);

/// numeric 列可能以整数、小数或字符串形式返回
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<RawAmount> for Rupiah {
    type Error = String;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        let amount = match raw {
            RawAmount::Int(v) => v,
            RawAmount::Float(v) => v.round() as i64,
            RawAmount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid amount '{}': {}", s, e))?
                .round() as i64,
        };
        Rupiah::new(amount).map_err(|e| e.to_string())
    }
}

impl From<Rupiah> for i64 {
    fn from(value: Rupiah) -> Self {
        value.0
    }
}

/// 金额错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeAmount(pub i64);

impl fmt::Display for NegativeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amount cannot be negative: {}", self.0)
    }
}

impl std::error::Error for NegativeAmount {}

impl Rupiah {
    pub fn new(amount: i64) -> Result<Self, NegativeAmount> {
        if amount < 0 {
            return Err(NegativeAmount(amount));
        }
        Ok(Self(amount))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn amount(&self) -> i64 {
        self.0
    }

    /// 转换为浮点数（用于数值过滤与排序）
    pub fn to_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// 差额（可能为负，因此返回 i64）
    pub fn difference(&self, other: Rupiah) -> i64 {
        self.0 - other.0
    }
}

impl TryFrom<i64> for Rupiah {
    type Error = NegativeAmount;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", procura_common::format_rupiah(self.0))
    }
}

impl Add for Rupiah {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Rupiah {
    type Output = Self;

    /// 结果不低于零
    fn sub(self, other: Self) -> Self {
        Self((self.0 - other.0).max(0))
    }
}
