use crate::models::user::UserRecord;

/// Lookup capability over some record type.
///
/// Each implementor names the exact entity it hands back, so callers never
/// receive an untyped value to downcast.
pub trait Repository {
    type Entity;

    fn get_by_id(&self, id: &str) -> Option<Self::Entity>;
}

/// Answers every lookup with a fresh record carrying the requested id and a
/// fixed placeholder name
#[derive(Debug, Clone)]
pub struct PlaceholderRepository {
    placeholder_name: String,
}

impl PlaceholderRepository {
    pub fn new(placeholder_name: impl Into<String>) -> Self {
        Self {
            placeholder_name: placeholder_name.into(),
        }
    }

    pub fn placeholder_name(&self) -> &str {
        &self.placeholder_name
    }
}

impl Default for PlaceholderRepository {
    fn default() -> Self {
        Self::new("Test")
    }
}

impl Repository for PlaceholderRepository {
    type Entity = UserRecord;

    fn get_by_id(&self, id: &str) -> Option<UserRecord> {
        Some(UserRecord::new(id, self.placeholder_name.as_str()))
    }
}
