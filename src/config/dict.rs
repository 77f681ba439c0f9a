// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The schema-less dictionary form of a config tree, and a strict reader for it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::consts::{UNIT_NAME_KEY, UNKNOWN_UNIT_NAME};
use crate::errors::{KeyProblem, MalformedConfigError};

/// Serialized form of a processing unit: `{"unit_name": ..., <param>: <value>, ...}`.
pub type ConfigDict = Map<String, Value>;

/// Read the discriminator of `dict` without consuming it.
pub fn unit_name_of(dict: &ConfigDict) -> Result<&str, MalformedConfigError> {
    match dict.get(UNIT_NAME_KEY) {
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(MalformedConfigError::invalid(
            UNKNOWN_UNIT_NAME,
            UNIT_NAME_KEY,
            format!("expected a string, found {}", other),
        )),
        None => Err(MalformedConfigError::missing(UNKNOWN_UNIT_NAME, UNIT_NAME_KEY)),
    }
}

/// Build the dictionary of a unit: the discriminator followed by its parameters.
pub fn unit_dict(unit_name: &str) -> DictWriter {
    let mut dict = ConfigDict::new();
    dict.insert(UNIT_NAME_KEY.to_string(), Value::String(unit_name.to_string()));
    DictWriter {
        unit_name: unit_name.to_string(),
        dict,
        error: None,
    }
}

/// Writes the keys of a unit dictionary. The first value without a
/// dictionary form is reported by [`DictWriter::build`].
pub struct DictWriter {
    unit_name: String,
    dict: ConfigDict,
    error: Option<MalformedConfigError>,
}

impl DictWriter {
    pub fn field<T: Serialize>(mut self, key: &str, value: &T) -> Self {
        if self.error.is_some() {
            return self;
        }

        match serde_json::to_value(value) {
            // Non-finite floats serialize to null and would not read back
            Ok(value) if contains_null(&value) => {
                self.error = Some(MalformedConfigError::invalid(
                    &self.unit_name,
                    key,
                    "value has no dictionary form (non-finite number)",
                ));
            }
            Ok(value) => {
                self.dict.insert(key.to_string(), value);
            }
            Err(e) => {
                self.error = Some(MalformedConfigError::invalid(&self.unit_name, key, e.to_string()));
            }
        }
        self
    }

    /// Writes `value` only when it is set.
    pub fn optional<T: Serialize>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn dict(mut self, key: &str, value: ConfigDict) -> Self {
        self.dict.insert(key.to_string(), Value::Object(value));
        self
    }

    pub fn dicts(mut self, key: &str, values: Vec<ConfigDict>) -> Self {
        let values = values.into_iter().map(Value::Object).collect();
        self.dict.insert(key.to_string(), Value::Array(values));
        self
    }

    pub fn build(self) -> Result<ConfigDict, MalformedConfigError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.dict),
        }
    }
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(fields) => fields.values().any(contains_null),
        _ => false,
    }
}

/// Consumes the keys of a unit dictionary one by one.
///
/// The reader owns a copy of the input, so the caller's dictionary is never
/// touched. [`DictReader::finish`] rejects any key that was not consumed.
pub struct DictReader {
    unit_name: &'static str,
    fields: ConfigDict,
}

impl DictReader {
    /// Start reading `dict` as a `unit_name` unit. The discriminator must be
    /// present and must name that unit.
    pub fn new(unit_name: &'static str, dict: &ConfigDict) -> Result<Self, MalformedConfigError> {
        let found = unit_name_of(dict).map_err(|err| MalformedConfigError {
            unit_name: unit_name.to_string(),
            ..err
        })?;

        if found != unit_name {
            return Err(MalformedConfigError {
                unit_name: unit_name.to_string(),
                key: UNIT_NAME_KEY.to_string(),
                problem: KeyProblem::UnitNameMismatch {
                    expected: unit_name.to_string(),
                    found: found.to_string(),
                },
            });
        }

        let mut fields = dict.clone();
        fields.remove(UNIT_NAME_KEY);

        Ok(Self { unit_name, fields })
    }

    pub fn required<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, MalformedConfigError> {
        match self.fields.remove(key) {
            Some(value) => self.parse(key, value),
            None => Err(MalformedConfigError::missing(self.unit_name, key)),
        }
    }

    /// An absent key and an explicit `null` both read as `None`.
    pub fn optional<T: DeserializeOwned>(
        &mut self,
        key: &str,
    ) -> Result<Option<T>, MalformedConfigError> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.parse(key, value).map(Some),
        }
    }

    pub fn required_dict(&mut self, key: &str) -> Result<ConfigDict, MalformedConfigError> {
        match self.fields.remove(key) {
            Some(Value::Object(dict)) => Ok(dict),
            Some(other) => Err(MalformedConfigError::invalid(
                self.unit_name,
                key,
                format!("expected a mapping, found {}", other),
            )),
            None => Err(MalformedConfigError::missing(self.unit_name, key)),
        }
    }

    pub fn required_dicts(&mut self, key: &str) -> Result<Vec<ConfigDict>, MalformedConfigError> {
        let items = match self.fields.remove(key) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(MalformedConfigError::invalid(
                    self.unit_name,
                    key,
                    format!("expected a sequence, found {}", other),
                ))
            }
            None => return Err(MalformedConfigError::missing(self.unit_name, key)),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(dict) => Ok(dict),
                other => Err(MalformedConfigError::invalid(
                    self.unit_name,
                    key,
                    format!("item {} is not a mapping: {}", index, other),
                )),
            })
            .collect()
    }

    pub fn finish(self) -> Result<(), MalformedConfigError> {
        match self.fields.keys().next() {
            Some(key) => Err(MalformedConfigError::unexpected(self.unit_name, key)),
            None => Ok(()),
        }
    }

    fn parse<T: DeserializeOwned>(&self, key: &str, value: Value) -> Result<T, MalformedConfigError> {
        serde_json::from_value(value)
            .map_err(|e| MalformedConfigError::invalid(self.unit_name, key, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_dict(value: Value) -> ConfigDict {
        match value {
            Value::Object(dict) => dict,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_reader_consumes_every_key() {
        let dict = as_dict(json!({"unit_name": "demo", "a": 1, "b": "x", "c": null}));
        let mut reader = DictReader::new("demo", &dict).unwrap();

        let a: u32 = reader.required("a").unwrap();
        let b: String = reader.required("b").unwrap();
        let c: Option<u32> = reader.optional("c").unwrap();
        let d: Option<u32> = reader.optional("d").unwrap();
        reader.finish().unwrap();

        assert_eq!((a, b.as_str(), c, d), (1, "x", None, None));
    }

    #[test]
    fn test_reader_leaves_input_untouched() {
        let dict = as_dict(json!({"unit_name": "demo", "a": 1}));
        let before = dict.clone();

        let mut reader = DictReader::new("demo", &dict).unwrap();
        let _: u32 = reader.required("a").unwrap();
        reader.finish().unwrap();

        assert_eq!(dict, before);
    }

    #[test]
    fn test_missing_and_unexpected_keys_are_named() {
        let dict = as_dict(json!({"unit_name": "demo", "extra": true}));

        let mut reader = DictReader::new("demo", &dict).unwrap();
        let err = reader.required::<u32>("a").unwrap_err();
        assert_eq!(err.key, "a");
        assert_eq!(err.problem, KeyProblem::Missing);

        let err = reader.finish().unwrap_err();
        assert_eq!(err.key, "extra");
        assert_eq!(err.problem, KeyProblem::Unexpected);
    }

    #[test]
    fn test_discriminator_is_required_and_checked() {
        let err = DictReader::new("demo", &as_dict(json!({"a": 1}))).err().unwrap();
        assert_eq!(err.key, UNIT_NAME_KEY);
        assert_eq!(err.problem, KeyProblem::Missing);

        let err = DictReader::new("demo", &as_dict(json!({"unit_name": "other"}))).err().unwrap();
        assert_eq!(
            err.problem,
            KeyProblem::UnitNameMismatch {
                expected: "demo".to_string(),
                found: "other".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_value_type_is_invalid() {
        let dict = as_dict(json!({"unit_name": "demo", "a": "not a number", "b": 3}));
        let mut reader = DictReader::new("demo", &dict).unwrap();

        let err = reader.required::<u32>("a").unwrap_err();
        assert_eq!(err.key, "a");
        assert!(matches!(err.problem, KeyProblem::InvalidValue(_)));

        let err = reader.required_dicts("b").unwrap_err();
        assert_eq!(err.key, "b");
    }

    #[test]
    fn test_writer_skips_unset_optionals() {
        let dict = unit_dict("demo")
            .field("a", &1)
            .optional::<u64>("seed", &None)
            .optional("name", &Some("x"))
            .build()
            .unwrap();

        assert_eq!(
            Value::Object(dict),
            json!({"unit_name": "demo", "a": 1, "name": "x"})
        );
    }

    #[test]
    fn test_writer_rejects_values_without_dictionary_form() {
        let err = unit_dict("demo")
            .field("a", &1)
            .field("factor", &f64::NAN)
            .field("b", &2)
            .build()
            .unwrap_err();

        assert_eq!(err.unit_name, "demo");
        assert_eq!(err.key, "factor");
        assert!(matches!(err.problem, KeyProblem::InvalidValue(_)));

        #[derive(Serialize)]
        struct Nested {
            weights: Vec<f64>,
        }

        let err = unit_dict("demo")
            .field("nested", &Nested { weights: vec![0.5, f64::INFINITY] })
            .build()
            .unwrap_err();
        assert_eq!(err.key, "nested");
    }
}
