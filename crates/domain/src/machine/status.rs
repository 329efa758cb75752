use serde::{Deserialize, Serialize};

/// Machine operational status
///
/// Known values map to dedicated variants; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MachineStatus {
    /// Machine is running and monitored
    Active,
    /// Machine is taken out of service
    Inactive,
    /// Free-text status entered by an administrator
    Other(String),
}

impl MachineStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for MachineStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl From<&str> for MachineStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for MachineStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<MachineStatus> for String {
    fn from(status: MachineStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
