use serde::Serialize;
use std::fmt;

/// Classification of a login-attempt count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LoginStatus {
    Inactive,
    NewUser,
    Active,
    Unknown,
}

impl LoginStatus {
    pub fn from_attempts(attempts: i64) -> Self {
        classify(attempts)
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginStatus::Inactive => "Inactive",
            LoginStatus::NewUser => "New User",
            LoginStatus::Active => "Active",
            LoginStatus::Unknown => "Unknown",
        }
    }
}

impl From<i64> for LoginStatus {
    fn from(attempts: i64) -> Self {
        classify(attempts)
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a login-attempt count to a status.
///
/// Arms are checked top to bottom. Counts of 10 and above fall through to
/// `Unknown`, not `Active`.
pub fn classify(attempts: i64) -> LoginStatus {
    match attempts {
        a if a <= 0 => LoginStatus::Inactive,
        a if a > 0 && a < 3 => LoginStatus::NewUser,
        a if (3..10).contains(&a) => LoginStatus::Active,
        _ => LoginStatus::Unknown,
    }
}
