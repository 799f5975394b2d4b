//! Map helpers and recursive key normalization

use crate::error::{Result, UtilError};
use serde_json::{Map as JsonMap, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Copy `name` from `source` into `target` if present, returning the copied value
pub fn copy_attribute<S1, S2>(
    name: &str,
    source: &HashMap<String, String, S1>,
    target: &mut HashMap<String, String, S2>,
) -> Option<String>
where
    S1: BuildHasher,
    S2: BuildHasher,
{
    let value = source.get(name)?.clone();
    target.insert(name.to_string(), value.clone());
    Some(value)
}

/// New map holding the entries of `map` whose key satisfies `pred`
pub fn filtered_by_key<K, V, S, P>(map: &HashMap<K, V, S>, mut pred: P) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    P: FnMut(&K) -> bool,
{
    map.iter()
        .filter(|(k, _)| pred(*k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Values of `map`, in the map's iteration order
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Shallow-copy every entry of `src` into `dest`, overwriting existing keys
pub fn copy_map<V, S1, S2>(dest: &mut HashMap<String, V, S1>, src: &HashMap<String, V, S2>)
where
    V: Clone,
    S1: BuildHasher,
{
    dest.extend(src.iter().map(|(k, v)| (k.clone(), v.clone())));
}

/// Recursively convert a YAML tree into a JSON tree with string keys.
///
/// String keys are kept, number and bool keys are rendered as text. Null,
/// sequence and mapping keys have no string form and are rejected.
pub fn normalize_keys(value: YamlValue) -> Result<JsonValue> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(b) => Ok(JsonValue::Bool(b)),
        YamlValue::Number(n) => Ok(yaml_number_to_json(&n)),
        YamlValue::String(s) => Ok(JsonValue::String(s)),
        YamlValue::Sequence(items) => items
            .into_iter()
            .map(normalize_keys)
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        YamlValue::Mapping(mapping) => {
            let mut out = JsonMap::with_capacity(mapping.len());
            for (k, v) in mapping {
                out.insert(key_to_string(k)?, normalize_keys(v)?);
            }
            Ok(JsonValue::Object(out))
        }
        YamlValue::Tagged(tagged) => normalize_keys(tagged.value),
    }
}

fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        other => Err(UtilError::InvalidKey(format!("{:?}", other))),
    }
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        // NaN and infinities have no JSON form and become null
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}
