use core::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    UInt(u64),
    Float(f64),
    String(String),
}

impl MetricValue {
    /// Numeric view of the value; text never counts as a number.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "insight counts are far below 2^52")]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::UInt(u) => Some(*u as f64),
            Self::Float(f) => Some(*f),
            Self::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::UInt(_) | Self::Float(_) => None,
        }
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64() {
        assert_eq!(MetricValue::UInt(42).as_f64(), Some(42.0));
        assert_eq!(MetricValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(MetricValue::String("42".into()).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MetricValue::UInt(1234).to_string(), "1234");
        assert_eq!(MetricValue::Float(2.5).to_string(), "2.5");
        assert_eq!(MetricValue::String("4.32%".into()).to_string(), "4.32%");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(MetricValue::String("abc".into()).as_str(), Some("abc"));
        assert_eq!(MetricValue::UInt(1).as_str(), None);
    }
}
