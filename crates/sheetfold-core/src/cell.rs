//! Cell value types

use std::fmt;

use calamine::Data;
use chrono::NaiveDateTime;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Numeric value (integers are widened to f64)
    Number(f64),

    /// Text value
    Text(String),

    /// Boolean value (TRUE/FALSE)
    Bool(bool),

    /// Date/time value
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get the numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean value, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(v) => CellValue::Number(*v),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(ndt) => CellValue::DateTime(ndt),
                // Out-of-range serials keep their raw numeric value
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(format!("{e:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn display_collapses_integral_numbers() {
        assert_eq!(CellValue::Number(2023.0).to_string(), "2023");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
        assert_eq!(CellValue::Number(-100.0).to_string(), "-100");
    }

    #[test]
    fn display_of_empty_is_blank() {
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn display_of_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2024-03-01 09:30:00");
    }

    #[test]
    fn from_data_widens_ints() {
        assert_eq!(CellValue::from(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(
            CellValue::from(&Data::String("x".into())),
            CellValue::Text("x".into())
        );
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
    }
}
