use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a resource is a directory or a regular file.
///
/// The server tags resources with a free-form string. Only `"dir"` is
/// meaningful; every other value decodes as [`ResourceKind::File`] so that
/// newer server tags never break older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Dir,
    File,
}

impl ResourceKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, ResourceKind::Dir)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Dir => "dir",
            ResourceKind::File => "file",
        }
    }
}

impl Serialize for ResourceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        match tag.as_str() {
            "dir" => Ok(ResourceKind::Dir),
            _ => Ok(ResourceKind::File),
        }
    }
}

/// A file or directory record owned by a user.
///
/// `path` is the parent directory (`"."` for entries directly under the
/// root), `name` is the leaf segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "OwnerID")]
    pub owner_id: i64,
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "Type")]
    pub kind: ResourceKind,
}

impl Resource {
    /// Full location of the resource: `path + "/" + name`, except that a
    /// `"."` parent collapses to the bare name.
    pub fn full_path(&self) -> String {
        if self.path == "." {
            self.name.clone()
        } else {
            format!("{}/{}", self.path, self.name)
        }
    }
}

/// Wire envelope for directory listings and shared-resource listings.
/// Order is whatever the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(rename = "Resources")]
    pub resources: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(path: &str, name: &str, kind: ResourceKind) -> Resource {
        Resource {
            id: 1,
            path: path.to_string(),
            name: name.to_string(),
            owner_id: 7,
            created: "2024-01-01T00:00:00Z".to_string(),
            kind,
        }
    }

    #[test]
    fn test_kind_roundtrip_dir() {
        let json = serde_json::to_string(&ResourceKind::Dir).unwrap();
        assert_eq!(json, r#""dir""#);
        let back: ResourceKind = serde_json::from_str(&json).unwrap();
        assert!(back.is_dir());
    }

    #[test]
    fn test_kind_unknown_tag_falls_back_to_file() {
        let back: ResourceKind = serde_json::from_str(r#""symlink""#).unwrap();
        assert_eq!(back, ResourceKind::File);
        let back: ResourceKind = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(back, ResourceKind::File);
    }

    #[test]
    fn test_resource_decodes_wire_keys() {
        let json = r#"{"ID":1,"Path":".","Name":"docs","OwnerID":7,"Created":"2024-01-01T00:00:00Z","Type":"dir"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.id, 1);
        assert_eq!(resource.owner_id, 7);
        assert_eq!(resource.kind, ResourceKind::Dir);
    }

    #[test]
    fn test_resource_roundtrip_preserves_kind() {
        let original = sample("/photos", "cat.jpg", ResourceKind::File);
        let json = serde_json::to_string(&original).unwrap();
        let back: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn test_full_path_root_parent() {
        assert_eq!(sample(".", "docs", ResourceKind::Dir).full_path(), "docs");
    }

    #[test]
    fn test_full_path_nested_parent() {
        assert_eq!(
            sample("/docs", "report.pdf", ResourceKind::File).full_path(),
            "/docs/report.pdf"
        );
    }

    #[test]
    fn test_resource_list_envelope() {
        let json = r#"{"Resources":[{"ID":1,"Path":".","Name":"docs","OwnerID":7,"Created":"2024-01-01T00:00:00Z","Type":"dir"}]}"#;
        let list: ResourceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.resources.len(), 1);
        assert_eq!(list.resources[0].full_path(), "docs");
    }

    #[test]
    fn test_malformed_json_is_a_hard_error() {
        let result: Result<ResourceList, _> = serde_json::from_str(r#"{"Resources":[{"ID":"one"}]}"#);
        assert!(result.is_err());
    }
}
