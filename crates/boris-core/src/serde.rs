use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::{BorisError, ErrorInfo};

fn serde_error(code: &str, err: impl ToString) -> BorisError {
    BorisError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<_, _> = map
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Serializes a value as pretty JSON with keys sorted at every level.
///
/// Non-finite floats are emitted as `null` by `serde_json`.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, BorisError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    let mut bytes = serde_json::to_vec_pretty(&sort_keys(value))
        .map_err(|err| serde_error("json-write", err))?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, BorisError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-deserialize", err))
}

pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, BorisError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-serialize", err))
}

/// `f64` fields that hold `NaN` for unset steps.
///
/// JSON has no `NaN`, so the value is written as `null` and read back as `NaN`.
/// Use with `#[serde(with = "boris_core::serde::nan_f64")]`.
pub mod nan_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// [`Position`](crate::Position) fields whose components may be `NaN`.
///
/// Written as a three element array with `null` for each `NaN` component.
pub mod nan_position {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Position;

    fn component(value: f64) -> Option<f64> {
        (!value.is_nan()).then_some(value)
    }

    pub fn serialize<S: Serializer>(value: &Position, serializer: S) -> Result<S::Ok, S::Error> {
        [component(value.x), component(value.y), component(value.z)].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Position, D::Error> {
        let [x, y, z] = <[Option<f64>; 3]>::deserialize(deserializer)?;
        Ok(Position::new(
            x.unwrap_or(f64::NAN),
            y.unwrap_or(f64::NAN),
            z.unwrap_or(f64::NAN),
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::Position;

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "nan_f64")]
        energy: f64,
        #[serde(with = "nan_position")]
        center: Position,
    }

    #[test]
    fn unset_values_survive_json() {
        let sample = Sample {
            energy: f64::NAN,
            center: Position::new(1.5, f64::NAN, -2.0),
        };
        let bytes = to_canonical_json_bytes(&sample).expect("serialize");
        let text = String::from_utf8(bytes.clone()).expect("utf8");
        assert!(text.contains("\"energy\": null"));

        let parsed: Sample = from_json_slice(&bytes).expect("deserialize");
        assert!(parsed.energy.is_nan());
        assert_eq!(parsed.center.x, 1.5);
        assert!(parsed.center.y.is_nan());
        assert_eq!(parsed.center.z, -2.0);
    }

    #[test]
    fn finite_values_are_plain_numbers() {
        let sample = Sample {
            energy: 0.25,
            center: Position::new(1.0, 2.0, 3.0),
        };
        let value: serde_json::Value =
            serde_json::from_slice(&to_canonical_json_bytes(&sample).expect("serialize"))
                .expect("json");
        assert_eq!(value["energy"], 0.25);
        assert_eq!(value["center"], serde_json::json!([1.0, 2.0, 3.0]));
    }
}
