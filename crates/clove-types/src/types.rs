//! Shared serde helpers

use serde::{Deserialize, Deserializer, Serializer};

/// Serde adapter for metrics that may be non-finite.
///
/// `serde_json` already writes NaN and infinities as `null`; this module makes
/// the round trip work by reading `null` back as NaN.
pub mod nullable_f64 {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer).map(|opt| opt.unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Metric {
        #[serde(with = "super::nullable_f64")]
        value: f64,
    }

    #[test]
    fn test_finite_value_is_a_number() {
        let json = serde_json::to_string(&Metric { value: 80.5 }).unwrap();
        assert_eq!(json, r#"{"value":80.5}"#);
    }

    #[test]
    fn test_infinity_becomes_null() {
        let json = serde_json::to_string(&Metric {
            value: f64::NEG_INFINITY,
        })
        .unwrap();
        assert_eq!(json, r#"{"value":null}"#);
    }

    #[test]
    fn test_null_reads_back_as_nan() {
        let metric: Metric = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(metric.value.is_nan());
    }
}
