//! Organizations with their members, invites and roles.
//!
//! Organization-level firewall rules and railguns live in
//! [`firewall`](super::firewall) and [`railguns`](super::railguns).

use serde_json::{json, Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::body_fields;
use crate::rest::resources::org_path;
use crate::rest::Args;

fn roles(args: &Args) -> Result<&Vec<Value>, ApiError> {
    let roles = args.list("roles", "roles must be an array of roles")?;
    if roles.is_empty() {
        return Err(ApiError::invalid("roles", "roles cannot be empty"));
    }
    Ok(roles)
}

/// `organizations/{org_id}/{collection}/{id}`
fn member_path(args: &Args, collection: &str) -> Result<String, ApiError> {
    let org = org_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(format!("{org}/{collection}/{id}"))
}

fn org_get(args: &Args, collection: &str) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id"])?;
    let org = org_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{org}/{collection}")).build()?)
}

fn member_request(
    args: &Args,
    method: HttpMethod,
    collection: &str,
) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id"])?;
    Ok(HttpRequest::builder(method, member_path(args, collection)?).build()?)
}

// ============================================================================
// Organization
// ============================================================================

/// Fetches an organization.
///
/// # Errors
///
/// Returns an error when `org_id` is absent or blank.
pub fn organization(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id"])?;
    Ok(HttpRequest::builder(HttpMethod::Get, org_path(args)?).build()?)
}

/// Renames an organization.
///
/// # Errors
///
/// Returns an error when `org_id` is absent or blank.
pub fn update_organization(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id"])?;
    let org = org_path(args)?;
    Ok(HttpRequest::builder(HttpMethod::Patch, org)
        .body(Value::Object(body_fields(args, &["name"])))
        .build()?)
}

// ============================================================================
// Members
// ============================================================================

/// Lists organization members.
///
/// # Errors
///
/// Returns an error when `org_id` is absent or blank.
pub fn organization_members(args: &Args) -> Result<HttpRequest, ApiError> {
    org_get(args, "members")
}

/// Fetches one organization member.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn organization_member(args: &Args) -> Result<HttpRequest, ApiError> {
    member_request(args, HttpMethod::Get, "members")
}

/// Replaces the roles of a member.
///
/// # Errors
///
/// Returns an error unless `roles` is a non-empty array.
pub fn update_organization_member_roles(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id", "roles"])?;
    let path = member_path(args, "members")?;
    let roles = roles(args)?;
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(json!({ "roles": roles }))
        .build()?)
}

/// Removes a member from an organization.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn remove_org_member(args: &Args) -> Result<HttpRequest, ApiError> {
    member_request(args, HttpMethod::Delete, "members")
}

// ============================================================================
// Invites
// ============================================================================

/// Invites `email` to the organization with `roles`.
///
/// # Errors
///
/// Returns an error when `email` is blank, `roles` is not a non-empty
/// array or `auto_accept` is not a boolean.
pub fn create_organization_invite(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "email", "roles"])?;
    let org = org_path(args)?;
    let email = args.required("email", "email required")?;
    let roles = roles(args)?;
    let auto_accept = args.bool_opt("auto_accept", "auto_accept must be a boolean value")?;

    let mut body = Map::new();
    body.insert("invited_member_email".to_string(), email.clone());
    body.insert("roles".to_string(), Value::Array(roles.clone()));
    if let Some(auto_accept) = auto_accept {
        body.insert("auto_accept".to_string(), Value::Bool(auto_accept));
    }
    Ok(HttpRequest::builder(HttpMethod::Post, format!("{org}/invites"))
        .body(Value::Object(body))
        .build()?)
}

/// Lists pending invites.
///
/// # Errors
///
/// Returns an error when `org_id` is absent or blank.
pub fn organization_invites(args: &Args) -> Result<HttpRequest, ApiError> {
    org_get(args, "invites")
}

/// Fetches one invite.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn organization_invite(args: &Args) -> Result<HttpRequest, ApiError> {
    member_request(args, HttpMethod::Get, "invites")
}

/// Replaces the roles an invite grants.
///
/// # Errors
///
/// Returns an error unless `roles` is a non-empty array.
pub fn updates_organization_invite_roles(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["org_id", "id", "roles"])?;
    let path = member_path(args, "invites")?;
    let roles = roles(args)?;
    Ok(HttpRequest::builder(HttpMethod::Patch, path)
        .body(json!({ "roles": roles }))
        .build()?)
}

/// Cancels an invite.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn cancel_organization_invite(args: &Args) -> Result<HttpRequest, ApiError> {
    member_request(args, HttpMethod::Delete, "invites")
}

// ============================================================================
// Roles
// ============================================================================

/// Lists the roles defined in an organization.
///
/// # Errors
///
/// Returns an error when `org_id` is absent or blank.
pub fn organization_roles(args: &Args) -> Result<HttpRequest, ApiError> {
    org_get(args, "roles")
}

/// Fetches one role.
///
/// # Errors
///
/// Returns an error when `org_id` or `id` is blank.
pub fn organization_role(args: &Args) -> Result<HttpRequest, ApiError> {
    member_request(args, HttpMethod::Get, "roles")
}

impl CloudflareClient {
    /// Fetches an organization. See [`organization`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization).await
    }

    /// Updates an organization. See [`update_organization`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_organization(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_organization).await
    }

    /// Lists organization members. See [`organization_members`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization_members(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization_members).await
    }

    /// Fetches an organization member. See [`organization_member`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization_member(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization_member).await
    }

    /// Replaces a member's roles. See [`update_organization_member_roles`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_organization_member_roles(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_organization_member_roles)
            .await
    }

    /// Removes an organization member. See [`remove_org_member`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn remove_org_member(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), remove_org_member).await
    }

    /// Creates an invite. See [`create_organization_invite`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_organization_invite(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_organization_invite).await
    }

    /// Lists invites. See [`organization_invites`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization_invites(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization_invites).await
    }

    /// Fetches an invite. See [`organization_invite`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization_invite(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization_invite).await
    }

    /// Replaces an invite's roles. See [`updates_organization_invite_roles`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn updates_organization_invite_roles(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), updates_organization_invite_roles)
            .await
    }

    /// Cancels an invite. See [`cancel_organization_invite`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn cancel_organization_invite(
        &self,
        args: impl Into<Args>,
    ) -> Result<Value, ApiError> {
        self.dispatch(args.into(), cancel_organization_invite).await
    }

    /// Lists organization roles. See [`organization_roles`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization_roles(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization_roles).await
    }

    /// Fetches an organization role. See [`organization_role`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn organization_role(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), organization_role).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORG: &str = "def5678";
    const USER: &str = "7c5dae5552338874e5053f2534d2767a";

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    fn org() -> Args {
        Args::new().set("org_id", ORG)
    }

    #[test]
    fn test_organization_requires_org_id() {
        assert_eq!(message(organization(&Args::new())), "missing keyword: org_id");
        assert_eq!(
            message(update_organization(&Args::new().set("org_id", Value::Null))),
            "org_id required"
        );
        let request = update_organization(&org().set("name", "foobar.com")).unwrap();
        assert_eq!(request.http_method, HttpMethod::Patch);
        assert_eq!(request.path, "organizations/def5678");
        assert_eq!(request.body.unwrap(), json!({"name": "foobar.com"}));
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(organization_members(&org()).unwrap().path, "organizations/def5678/members");
        assert_eq!(organization_invites(&org()).unwrap().path, "organizations/def5678/invites");
        assert_eq!(organization_roles(&org()).unwrap().path, "organizations/def5678/roles");
        assert_eq!(
            organization_role(&org().set("id", 1234)).unwrap().path,
            "organizations/def5678/roles/1234"
        );
    }

    #[test]
    fn test_member_id_messages() {
        let args = org().set("id", Value::Null);
        for result in [
            organization_member(&args),
            remove_org_member(&args),
            organization_invite(&args),
            cancel_organization_invite(&args),
            organization_role(&args),
        ] {
            assert_eq!(message(result), "id required");
        }
        let request = remove_org_member(&org().set("id", USER)).unwrap();
        assert_eq!(request.http_method, HttpMethod::Delete);
    }

    #[test]
    fn test_update_member_roles() {
        assert_eq!(
            message(update_organization_member_roles(&Args::new())),
            "missing keywords: org_id, id, roles"
        );
        let args = org().set("id", USER);
        assert_eq!(
            message(update_organization_member_roles(&args.clone().set("roles", Value::Null))),
            "roles must be an array of roles"
        );
        assert_eq!(
            message(update_organization_member_roles(&args.clone().set("roles", json!([])))),
            "roles cannot be empty"
        );
        let request =
            update_organization_member_roles(&args.set("roles", json!(["foo", "bar"]))).unwrap();
        assert_eq!(request.body.unwrap(), json!({"roles": ["foo", "bar"]}));
    }

    #[test]
    fn test_create_organization_invite() {
        assert_eq!(
            message(create_organization_invite(&Args::new())),
            "missing keywords: org_id, email, roles"
        );
        let args = org()
            .set("email", "user@example.com")
            .set("roles", json!(["foo", "bar"]));
        assert_eq!(
            message(create_organization_invite(&args.clone().set("email", Value::Null))),
            "email required"
        );
        assert_eq!(
            message(create_organization_invite(&args.clone().set("roles", "foo"))),
            "roles must be an array of roles"
        );
        assert_eq!(
            message(create_organization_invite(&args.clone().set("auto_accept", "foo"))),
            "auto_accept must be a boolean value"
        );

        let request = create_organization_invite(&args.set("auto_accept", false)).unwrap();
        assert_eq!(request.path, "organizations/def5678/invites");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "invited_member_email": "user@example.com",
                "roles": ["foo", "bar"],
                "auto_accept": false,
            })
        );
    }

    #[test]
    fn test_update_invite_roles() {
        let args = org().set("id", 1234);
        assert_eq!(
            message(updates_organization_invite_roles(&args.clone().set("roles", json!([])))),
            "roles cannot be empty"
        );
        let request =
            updates_organization_invite_roles(&args.set("roles", json!(["foo"]))).unwrap();
        assert_eq!(request.path, "organizations/def5678/invites/1234");
        assert_eq!(request.http_method, HttpMethod::Patch);
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (organization, "missing keyword: org_id"),
            (update_organization, "missing keyword: org_id"),
            (organization_members, "missing keyword: org_id"),
            (organization_member, "missing keywords: org_id, id"),
            (update_organization_member_roles, "missing keywords: org_id, id, roles"),
            (remove_org_member, "missing keywords: org_id, id"),
            (create_organization_invite, "missing keywords: org_id, email, roles"),
            (organization_invites, "missing keyword: org_id"),
            (organization_invite, "missing keywords: org_id, id"),
            (updates_organization_invite_roles, "missing keywords: org_id, id, roles"),
            (cancel_organization_invite, "missing keywords: org_id, id"),
            (organization_roles, "missing keyword: org_id"),
            (organization_role, "missing keywords: org_id, id"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }
}
