//! Neo4j graph models for the Fruit catalogue

use serde::{Deserialize, Serialize};

// ============================================================================
// Fruit Node
// ============================================================================

/// A `:Fruit` node as materialized from the store.
///
/// `id` is the store-assigned internal node identifier; it never comes from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitNode {
    pub id: i64,
    pub name: String,
}

impl FruitNode {
    /// Relative URI of this fruit, used for the `Location` header on create
    pub fn location(&self) -> String {
        format!("/fruits/{}", self.id)
    }
}

/// JSON shape of a fruit on the wire.
///
/// Both fields are optional so the same type serves create requests (no `id`) and
/// responses. A missing `name` is rejected by the handler, not by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<FruitNode> for Fruit {
    fn from(node: FruitNode) -> Self {
        Self {
            id: Some(node.id),
            name: Some(node.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruit_json_omits_missing_id() {
        let fruit = Fruit {
            id: None,
            name: Some("Mango".to_string()),
        };
        let json = serde_json::to_string(&fruit).unwrap();
        assert_eq!(json, r#"{"name":"Mango"}"#);
    }

    #[test]
    fn test_fruit_from_node() {
        let fruit: Fruit = FruitNode {
            id: 42,
            name: "Mango".to_string(),
        }
        .into();
        let json = serde_json::to_value(&fruit).unwrap();
        assert_eq!(json, serde_json::json!({"id": 42, "name": "Mango"}));
    }

    #[test]
    fn test_fruit_request_without_name() {
        let fruit: Fruit = serde_json::from_str("{}").unwrap();
        assert!(fruit.name.is_none());
        assert!(fruit.id.is_none());
    }

    #[test]
    fn test_location() {
        let node = FruitNode {
            id: 7,
            name: "Kiwi".to_string(),
        };
        assert_eq!(node.location(), "/fruits/7");
    }
}
