//! 评估表编号
//!
//! 格式 `NNNN/FORM-EV/PENG/<MON>/<YYYY>`，序号按 (月, 年) 递增

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// 编号固定段
pub const FORM_CODE_SEGMENT: &str = "FORM-EV/PENG";

/// 印尼语月份缩写
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MEI", "JUN", "JUL", "AGU", "SEP", "OKT", "NOV", "DES",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormCodeError {
    #[error("Malformed form code: {0}")]
    Malformed(String),

    #[error("Form code sequence exhausted for {month}/{year}")]
    SequenceExhausted { month: String, year: i32 },
}

/// 评估表编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormCode {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub sequence: u32,
}

impl FormCode {
    pub const MAX_SEQUENCE: u32 = 9999;

    /// 月份缩写
    pub fn month_abbrev(&self) -> &'static str {
        MONTHS[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// 根据已存在的编号计算 `date` 所在月份的下一个编号
    ///
    /// 无法解析的历史编号直接忽略
    pub fn next_for<'a, I>(existing: I, date: NaiveDate) -> Result<Self, FormCodeError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (year, month) = (date.year(), date.month());
        let max = existing
            .into_iter()
            .filter_map(|code| code.parse::<FormCode>().ok())
            .filter(|code| code.year == year && code.month == month)
            .map(|code| code.sequence)
            .max()
            .unwrap_or(0);

        if max >= Self::MAX_SEQUENCE {
            return Err(FormCodeError::SequenceExhausted {
                month: MONTHS[(month - 1) as usize].to_string(),
                year,
            });
        }

        Ok(Self {
            year,
            month,
            sequence: max + 1,
        })
    }
}

impl fmt::Display for FormCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{}/{}/{}",
            self.sequence,
            FORM_CODE_SEGMENT,
            self.month_abbrev(),
            self.year
        )
    }
}

impl FromStr for FormCode {
    type Err = FormCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FormCodeError::Malformed(s.to_string());
        let parts: Vec<&str> = s.trim().split('/').collect();
        let [seq, form, peng, month, year] = parts.as_slice() else {
            return Err(malformed());
        };
        if format!("{}/{}", form, peng) != FORM_CODE_SEGMENT {
            return Err(malformed());
        }
        if seq.len() != 4 || year.len() != 4 {
            return Err(malformed());
        }

        let sequence: u32 = seq.parse().map_err(|_| malformed())?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month = MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(month))
            .ok_or_else(malformed)? as u32
            + 1;
        if sequence == 0 {
            return Err(malformed());
        }

        Ok(Self {
            year,
            month,
            sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format() {
        let code = FormCode {
            year: 2025,
            month: 5,
            sequence: 7,
        };
        assert_eq!(code.to_string(), "0007/FORM-EV/PENG/MEI/2025");
    }

    #[test]
    fn test_parse() {
        let code: FormCode = "0012/FORM-EV/PENG/AGU/2024".parse().unwrap();
        assert_eq!(code.sequence, 12);
        assert_eq!(code.month, 8);
        assert_eq!(code.year, 2024);

        assert!("12/FORM-EV/PENG/AGU/2024".parse::<FormCode>().is_err());
        assert!("0012/FORM-XX/PENG/AGU/2024".parse::<FormCode>().is_err());
        assert!("0012/FORM-EV/PENG/AUG/2024".parse::<FormCode>().is_err());
        assert!("0000/FORM-EV/PENG/JAN/2024".parse::<FormCode>().is_err());
        assert!("".parse::<FormCode>().is_err());
    }

    #[test]
    fn test_first_code_of_month() {
        let next = FormCode::next_for(Vec::<&str>::new(), date(2025, 1, 15)).unwrap();
        assert_eq!(next.to_string(), "0001/FORM-EV/PENG/JAN/2025");
    }

    #[test]
    fn test_sequence_is_per_month_and_year() {
        let existing = [
            "0003/FORM-EV/PENG/JAN/2025",
            "0001/FORM-EV/PENG/JAN/2025",
            "0009/FORM-EV/PENG/FEB/2025",
            "0042/FORM-EV/PENG/JAN/2024",
            "legacy-code",
        ];
        let next = FormCode::next_for(existing, date(2025, 1, 31)).unwrap();
        assert_eq!(next.to_string(), "0004/FORM-EV/PENG/JAN/2025");

        let next = FormCode::next_for(existing, date(2025, 3, 1)).unwrap();
        assert_eq!(next.sequence, 1);
    }

    #[test]
    fn test_generated_codes_strictly_increase() {
        let mut codes: Vec<String> = Vec::new();
        for _ in 0..25 {
            let next = FormCode::next_for(codes.iter().map(String::as_str), date(2025, 6, 2))
                .unwrap();
            codes.push(next.to_string());
        }
        let sequences: Vec<u32> = codes
            .iter()
            .map(|c| c.parse::<FormCode>().unwrap().sequence)
            .collect();
        assert!(sequences.windows(2).all(|w| w[0] < w[1]));
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_sequence_exhausted() {
        let existing = ["9999/FORM-EV/PENG/DES/2025"];
        let result = FormCode::next_for(existing, date(2025, 12, 1));
        assert!(matches!(result, Err(FormCodeError::SequenceExhausted { .. })));
    }
}
