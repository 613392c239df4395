use serde::Deserialize;

/// One comment record from `GET /comments`.
///
/// Immutable once fetched; the collection is fixed for the lifetime of a
/// load. Unknown fields in the response are ignored by serde.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// User record from `GET /users/{id}`, shown read-only on the profile
/// screen. Never merged with comment data.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Postal address fragment of a [`User`].
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
}

impl Address {
    /// Single-line rendering used by the profile card.
    pub fn single_line(&self) -> String {
        format!("{} {} {}", self.street, self.suite, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_deserializes_camel_case_post_id() {
        let json = r#"{"postId": 7, "id": 42, "name": "n", "email": "e@x.com", "body": "b"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 7);
        assert_eq!(comment.id, 42);
    }

    #[test]
    fn comment_ignores_unknown_fields() {
        let json = r#"{"postId": 1, "id": 1, "name": "n", "email": "e", "body": "b", "extra": true}"#;
        assert!(serde_json::from_str::<Comment>(json).is_ok());
    }

    #[test]
    fn user_deserializes_nested_address() {
        let json = r#"{
            "id": 2,
            "name": "Ervin Howell",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "address": {"street": "Victor Plains", "suite": "Suite 879", "city": "Wisokyburgh", "zipcode": "90566-7771"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(
            user.address.single_line(),
            "Victor Plains Suite 879 Wisokyburgh"
        );
    }
}
