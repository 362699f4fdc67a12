use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document as read from the `users` collection.
///
/// The id is generated by the storage layer on insert and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    /// Optional image URL; documents written before the field existed
    /// deserialize to an empty string
    #[serde(default)]
    pub image: String,
}

/// Insert model for new user documents.
///
/// The storage layer assigns `_id`; `image` defaults to the empty string
/// when the form omitted it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: String,
}

/// Full-replace update model: every call overwrites `name`, `email`, and
/// `image` on the matching document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_user_deserializes_underscore_id() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "name": "Ann",
            "email": "a@x.com",
            "image": "http://i/1.png",
        };
        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.image, "http://i/1.png");
    }

    #[test]
    fn test_missing_image_defaults_to_empty() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "name": "Ann",
            "email": "a@x.com",
        };
        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.image, "");
    }

    #[test]
    fn test_new_user_serializes_without_id() {
        let new_user = NewUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            image: String::new(),
        };
        let doc = bson::to_document(&new_user).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Ann");
    }
}
