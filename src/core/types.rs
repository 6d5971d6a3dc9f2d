use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Card identifiers are the numeric passcodes used by the public catalog API.
pub type CardId = u32;

/// Registered identity. `username` is the natural key, matched
/// case-insensitively; `id` is assigned by the backend on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Named, ordered, owner-scoped collection of card ids.
///
/// Duplicates are allowed; a deck may hold several copies of the same card.
/// Ordering is preserved across mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub cards: Vec<CardId>,
}

/// Opaque game document: an id plus whatever board state the clients agreed
/// on. No schema validation or turn ordering is imposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDoc {
    pub id: String,
    #[serde(flatten)]
    pub fields: JsonMap<String, JsonValue>,
}

impl GameDoc {
    /// Numeric join code, when the document carries one.
    pub fn code(&self) -> Option<i64> {
        self.fields.get("code").and_then(JsonValue::as_i64)
    }
}

/// Catalog entry as served by the third-party card API. Read-only reference
/// data; never persisted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YugiohCard {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub card_images: Vec<CardImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_serializes_with_camel_case_owner() {
        let deck = Deck {
            id: "d1".into(),
            name: "Control".into(),
            user_id: "u1".into(),
            cards: vec![1, 2, 2],
        };
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["cards"], serde_json::json!([1, 2, 2]));
    }

    #[test]
    fn game_doc_flattens_fields() {
        let doc: GameDoc = serde_json::from_value(serde_json::json!({
            "id": "g1",
            "code": 4321,
            "turn": 7
        }))
        .unwrap();
        assert_eq!(doc.code(), Some(4321));
        assert_eq!(doc.fields["turn"], 7);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "g1");
        assert_eq!(json["code"], 4321);
    }
}
