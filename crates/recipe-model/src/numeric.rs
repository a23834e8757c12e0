//! Numeric values that must stay finite on the way out.
//!
//! `serde_json` silently writes non-finite floats as `null`. The output
//! document has to reject them instead, so every float in the record types
//! serializes through the guards in [`finite`].

use serde::{Deserialize, Serialize, Serializer};

/// A number taken from the source table, keeping integer cells integral.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    pub fn is_finite(self) -> bool {
        match self {
            Numeric::Integer(_) => true,
            Numeric::Float(value) => value.is_finite(),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(value) => value as f64,
            Numeric::Float(value) => value,
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Numeric::Integer(value) => serializer.serialize_i64(value),
            Numeric::Float(value) => finite::float(&value, serializer),
        }
    }
}

/// `serialize_with` guards that fail on NaN and infinities.
pub mod finite {
    use serde::Serializer;
    use serde::ser::Error;

    pub fn float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            Err(S::Error::custom(format!(
                "non-finite number {value} cannot be written"
            )))
        }
    }

    pub fn option<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(inner) => float(inner, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_integral() {
        assert_eq!(serde_json::to_string(&Numeric::Integer(40)).unwrap(), "40");
        assert_eq!(serde_json::to_string(&Numeric::Float(12.5)).unwrap(), "12.5");
        assert_eq!(serde_json::to_string(&Numeric::Float(40.0)).unwrap(), "40.0");
    }

    #[test]
    fn deserializes_by_shape() {
        let int: Numeric = serde_json::from_str("40").unwrap();
        let float: Numeric = serde_json::from_str("40.5").unwrap();
        assert_eq!(int, Numeric::Integer(40));
        assert_eq!(float, Numeric::Float(40.5));
    }

    #[test]
    fn finiteness() {
        assert!(Numeric::Integer(i64::MAX).is_finite());
        assert!(Numeric::Float(-0.5).is_finite());
        assert!(!Numeric::Float(f64::NEG_INFINITY).is_finite());
        assert_eq!(Numeric::Integer(3).as_f64(), 3.0);
    }
}
