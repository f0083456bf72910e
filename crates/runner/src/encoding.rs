//! Encoding of the script result into the step's `result` output.

use std::str::FromStr;

use serde_json::Value;

use crate::{ActionError, ScriptResult};

/// How the script result is written to the `result` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultEncoding {
    /// Compact JSON.
    #[default]
    Json,
    /// Strings verbatim; any other value as compact JSON.
    String,
}

impl ResultEncoding {
    /// Renders `result`. An absent result is always the empty string.
    pub fn encode(self, result: &ScriptResult) -> String {
        match (self, result) {
            (_, None) => String::new(),
            (Self::String, Some(Value::String(text))) => text.clone(),
            (_, Some(value)) => value.to_string(),
        }
    }
}

impl FromStr for ResultEncoding {
    type Err = ActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "json" => Ok(Self::Json),
            "string" => Ok(Self::String),
            other => Err(ActionError::InvalidInput {
                name: "result-encoding",
                reason: format!("must be either \"string\" or \"json\", got \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_encoding_quotes_strings() {
        let encoding = ResultEncoding::Json;
        assert_eq!(encoding.encode(&Some(json!("done"))), "\"done\"");
        assert_eq!(encoding.encode(&Some(json!({ "a": [1, 2] }))), r#"{"a":[1,2]}"#);
        assert_eq!(encoding.encode(&None), "");
    }

    #[test]
    fn string_encoding_writes_strings_verbatim() {
        let encoding = ResultEncoding::String;
        assert_eq!(encoding.encode(&Some(json!("done"))), "done");
        assert_eq!(encoding.encode(&Some(json!(2))), "2");
        assert_eq!(encoding.encode(&None), "");
    }

    #[test]
    fn parses_known_names_and_defaults_to_json() {
        assert_eq!("".parse::<ResultEncoding>().unwrap(), ResultEncoding::Json);
        assert_eq!("json".parse::<ResultEncoding>().unwrap(), ResultEncoding::Json);
        assert_eq!("string".parse::<ResultEncoding>().unwrap(), ResultEncoding::String);
        assert!(matches!(
            "yaml".parse::<ResultEncoding>(),
            Err(ActionError::InvalidInput { name: "result-encoding", .. })
        ));
    }
}
