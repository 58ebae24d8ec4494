use crate::core::error::RecordError;
use serde::{Deserialize, Serialize};

/// Immutable user identity.
///
/// Fields are only assigned at construction. Equality and hashing compare
/// every field by value, so two records built independently from the same
/// data are interchangeable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque identifier (empty is allowed)
    id: String,
    /// Display name (empty is allowed)
    name: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn builder() -> UserRecordBuilder {
        UserRecordBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of this record with a different display name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: name.into(),
        }
    }

    /// Copy of this record with a different identifier
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: self.name.clone(),
        }
    }
}

impl<I, N> From<(I, N)> for UserRecord
where
    I: Into<String>,
    N: Into<String>,
{
    fn from((id, name): (I, N)) -> Self {
        Self::new(id, name)
    }
}

/// Collects fields for a [`UserRecord`]. The builder is the only mutable
/// stage; `build` hands out a frozen record.
#[derive(Debug, Default, Clone)]
pub struct UserRecordBuilder {
    id: Option<String>,
    name: Option<String>,
}

impl UserRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<UserRecord, RecordError> {
        let id = self.id.ok_or(RecordError::MissingField("id"))?;
        let name = self.name.ok_or(RecordError::MissingField("name"))?;

        Ok(UserRecord { id, name })
    }
}
