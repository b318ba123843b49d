use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated principal for cross-crate passing.
///
/// Produced by `pulse-api` at the collaborator boundary, owned by the
/// session store in `pulse-auth`, and read (never mutated) by everything
/// else. Field names on the wire are camelCase, as the backend sends them.
///
/// `roles` preserves server insertion order and is never null — an absent
/// role array deserializes to an empty set, which classifies as the base
/// `user` capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub username: String,
    /// Absent in the minimal login payload shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Opaque organization identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl Identity {
    /// Exact-string membership test against the role set.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_full_wire_shape() {
        let identity: Identity = serde_json::from_str(
            r#"{
                "username": "alice",
                "email": "alice@example.com",
                "organizationId": "org-1",
                "roles": ["TEAM MANAGER"],
                "departmentId": "dep-2",
                "teamId": "team-9"
            }"#,
        )
        .expect("should deserialize");

        assert_eq!(identity.username, "alice");
        assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
        assert_eq!(identity.organization_id.as_deref(), Some("org-1"));
        assert_eq!(identity.roles, vec!["TEAM MANAGER"]);
        assert_eq!(identity.department_id.as_deref(), Some("dep-2"));
        assert_eq!(identity.team_id.as_deref(), Some("team-9"));
    }

    #[test]
    fn missing_roles_defaults_to_empty_set() {
        let identity: Identity =
            serde_json::from_str(r#"{"username": "bob"}"#).expect("should deserialize");
        assert!(identity.roles.is_empty());
        assert!(identity.email.is_none());
    }

    #[test]
    fn has_role_is_exact_match() {
        let identity: Identity =
            serde_json::from_str(r#"{"username": "bob", "roles": ["admin"]}"#)
                .expect("should deserialize");
        assert!(identity.has_role("admin"));
        assert!(!identity.has_role("ADMIN"));
        assert!(!identity.has_role("adm"));
    }

    #[test]
    fn roles_preserve_insertion_order() {
        let identity: Identity = serde_json::from_str(
            r#"{"username": "c", "roles": ["zeta", "alpha", "TEAM MANAGER"]}"#,
        )
        .expect("should deserialize");
        assert_eq!(identity.roles, vec!["zeta", "alpha", "TEAM MANAGER"]);
    }
}
