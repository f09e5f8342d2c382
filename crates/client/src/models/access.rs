use serde::{Deserialize, Serialize};

/// One sharing grant on a resource: who, and whether they may write.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAccess {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Write")]
    pub write: bool,
}

/// Wire envelope for access listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccessList {
    #[serde(rename = "Users")]
    pub users: Vec<UserAccess>,
}
