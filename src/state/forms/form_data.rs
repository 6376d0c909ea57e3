//! Submission payload

use serde::{Deserialize, Serialize};

/// Values handed to the submission sink after a successful validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub email: String,
    pub password: String,
    pub colour: String,
    pub animal: Vec<String>,
    pub tiger_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_payload_keys() {
        let data = FormData {
            email: "x@y.co".to_string(),
            password: "abcdefgh".to_string(),
            colour: "blue".to_string(),
            animal: vec!["dog".to_string()],
            tiger_type: String::new(),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "x@y.co",
                "password": "abcdefgh",
                "colour": "blue",
                "animal": ["dog"],
                "tigerType": ""
            })
        );
    }
}
