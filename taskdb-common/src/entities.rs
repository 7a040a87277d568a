use {
    serde::{Serialize, Deserialize},
    serde_json::Value,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Users,
    Tasks,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Tasks => "tasks",
        }
    }

    pub fn collection_path(&self) -> &'static str {
        match self {
            Self::Users => "/api/users",
            Self::Tasks => "/api/tasks",
        }
    }

    /// The service caps task listings at 100 items unless told otherwise, users are unlimited.
    pub fn listing_path(&self) -> &'static str {
        match self {
            Self::Users => "/api/users",
            Self::Tasks => "/api/tasks?limit=1000",
        }
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection_path(), id)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserStub {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskStub {
    pub name: String,
    pub description: String,
    pub deadline: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_name: Option<String>,
}

/// Every response of the service is wrapped as `{ "message": ..., "data": ... }`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: T,
}

#[derive(Deserialize, Debug, Default)]
pub struct Created {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

impl Created {
    pub fn id(self) -> Option<String> {
        self.id.filter(|v| !v.is_empty())
    }
}

/// Only the identifier of a listed item matters. It is kept as raw JSON so an id stored as
/// a number still addresses the item.
#[derive(Deserialize, Debug)]
pub struct ListedItem {
    #[serde(rename = "_id", default)]
    pub id: Option<Value>,
}

impl ListedItem {
    pub fn id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(v) if !v.is_empty() => Some(v.clone()),
            Value::Number(v) => Some(v.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        serde_json::json,
        super::*,
    };

    #[test]
    fn unassigned_task_omits_assignment_fields() {
        let task = TaskStub {
            name: "Security audit".to_owned(),
            description: "Low priority".to_owned(),
            deadline: "2026-01-01T00:00:00.000000Z".to_owned(),
            completed: false,
            assigned_user: None,
            assigned_user_name: None,
        };

        assert_eq!(serde_json::to_value(&task).unwrap(), json!({
            "name": "Security audit",
            "description": "Low priority",
            "deadline": "2026-01-01T00:00:00.000000Z",
            "completed": false,
        }));
    }

    #[test]
    fn assigned_task_uses_camel_case_fields() {
        let task = TaskStub {
            name: "Backup database".to_owned(),
            description: "In progress".to_owned(),
            deadline: "2026-01-01T00:00:00.000000Z".to_owned(),
            completed: true,
            assigned_user: Some("u1".to_owned()),
            assigned_user_name: Some("Assigned User".to_owned()),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["assignedUser"], "u1");
        assert_eq!(value["assignedUserName"], "Assigned User");
    }

    #[test]
    fn created_envelope_without_id_is_not_an_error() {
        let envelope: Envelope<Created> = serde_json::from_str(r#"{"message": "OK", "data": {}}"#).unwrap();
        assert_eq!(envelope.message.as_deref(), Some("OK"));
        assert!(envelope.data.id().is_none());
    }

    #[test]
    fn created_with_blank_id_has_no_id() {
        let envelope: Envelope<Created> = serde_json::from_str(r#"{"data": {"_id": ""}}"#).unwrap();
        assert!(envelope.data.id().is_none());
    }

    #[test]
    fn listing_accepts_numeric_identifiers() {
        let listing: Envelope<Vec<ListedItem>> = serde_json::from_str(r#"{"data": [{"_id": 42}, {"_id": null}, {"_id": {"$oid": "x"}}]}"#).unwrap();
        let ids: Vec<_> = listing.data.iter().filter_map(ListedItem::id).collect();
        assert_eq!(ids, vec!["42"]);
    }

    #[test]
    fn listing_skips_blank_identifiers() {
        let listing: Envelope<Vec<ListedItem>> = serde_json::from_str(r#"{"data": [{"_id": "a"}, {"_id": ""}, {"name": "no id"}]}"#).unwrap();
        let ids: Vec<_> = listing.data.iter().filter_map(ListedItem::id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn listing_without_data_is_empty() {
        let listing: Envelope<Vec<ListedItem>> = serde_json::from_str(r#"{"message": "OK"}"#).unwrap();
        assert!(listing.data.is_empty());
    }

    #[test]
    fn task_listing_asks_for_a_larger_page() {
        assert_eq!(Resource::Tasks.listing_path(), "/api/tasks?limit=1000");
        assert_eq!(Resource::Users.listing_path(), "/api/users");
        assert_eq!(Resource::Users.item_path("abc"), "/api/users/abc");
    }
}
