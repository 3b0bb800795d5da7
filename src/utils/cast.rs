use serde_json::Value;

// Casts JSON values into document paths the way the store casts them on save. Null or a
// missing key is absence, anything that cannot be cast fails with the path in the message.

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

fn cast_error(kind: &str, value: &Value, path: &str) -> String {
    let shown = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!("{}: Cast to {} failed for value {:?} (type {}) at path \"{}\"",
            path, kind, shown, type_name(value), path)
}

pub mod lenient_int {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;
    use serde_json::Value;
    use super::cast_error;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D, path: &str) -> Result<Option<i64>, D::Error> {
        let value: Option<Value> = Deserialize::deserialize(deserializer)?;
        cast(&value.unwrap_or(Value::Null), path).map_err(D::Error::custom)
    }

    // Booleans become 0 or 1 and the empty string is absence.
    pub fn cast(value: &Value, path: &str) -> Result<Option<i64>, String> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(i64::from(*b))),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Some(i)),
                None => n.as_f64().and_then(whole).map(Some).ok_or_else(|| cast_error("Number", value, path)),
            },
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>().ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole))
                    .map(Some)
                    .ok_or_else(|| cast_error("Number", value, path))
            }
            _ => Err(cast_error("Number", value, path)),
        }
    }

    fn whole(f: f64) -> Option<i64> {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            Some(f as i64)
        } else {
            None
        }
    }
}

pub mod lenient_string {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;
    use serde_json::Value;
    use super::cast_error;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D, path: &str) -> Result<Option<String>, D::Error> {
        let value: Option<Value> = Deserialize::deserialize(deserializer)?;
        cast(&value.unwrap_or(Value::Null), path).map_err(D::Error::custom)
    }

    // Numbers and booleans are stored as their text.
    pub fn cast(value: &Value, path: &str) -> Result<Option<String>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Err(cast_error("string", value, path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::utils::cast::{lenient_int, lenient_string};

    #[tokio::test]
    async fn test_should_cast_numbers() {
        assert_eq!(Ok(Some(412)), lenient_int::cast(&json!(412), "Pages"));
        assert_eq!(Ok(Some(412)), lenient_int::cast(&json!(412.0), "Pages"));
        assert_eq!(Ok(Some(320)), lenient_int::cast(&json!(" 320 "), "Pages"));
        assert_eq!(Ok(Some(1)), lenient_int::cast(&json!(true), "Pages"));
        assert_eq!(Ok(Some(0)), lenient_int::cast(&json!(false), "Pages"));
    }

    #[tokio::test]
    async fn test_should_treat_null_and_empty_as_absent() {
        assert_eq!(Ok(None), lenient_int::cast(&json!(null), "Pages"));
        assert_eq!(Ok(None), lenient_int::cast(&json!(""), "Pages"));
        assert_eq!(Ok(None), lenient_string::cast(&json!(null), "Title"));
    }

    #[tokio::test]
    async fn test_should_reject_non_numeric() {
        let err = lenient_int::cast(&json!("many"), "Pages").expect_err("should fail");
        assert_eq!("Pages: Cast to Number failed for value \"many\" (type string) at path \"Pages\"", err);
        assert!(lenient_int::cast(&json!(12.5), "Pages").is_err());
        assert!(lenient_int::cast(&json!([1]), "Pages").is_err());
    }

    #[tokio::test]
    async fn test_should_cast_scalars_to_strings() {
        assert_eq!(Ok(Some("Dune".to_string())), lenient_string::cast(&json!("Dune"), "Title"));
        assert_eq!(Ok(Some("".to_string())), lenient_string::cast(&json!(""), "Title"));
        assert_eq!(Ok(Some("42".to_string())), lenient_string::cast(&json!(42), "Author"));
        assert_eq!(Ok(Some("true".to_string())), lenient_string::cast(&json!(true), "Author"));
    }

    #[tokio::test]
    async fn test_should_reject_structured_strings() {
        let err = lenient_string::cast(&json!({"first": "Frank"}), "Author").expect_err("should fail");
        assert!(err.starts_with("Author: Cast to string failed"));
        assert!(err.contains("(type Object)"));
        assert!(lenient_string::cast(&json!(["Dune"]), "Title").is_err());
    }
}
