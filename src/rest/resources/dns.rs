//! DNS records under `zones/{zone_id}/dns_records`.

use serde_json::{Map, Value};

use crate::client::CloudflareClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ApiError;
use crate::rest::params::{body_fields, ArgsQuery};
use crate::rest::resources::zone_path;
use crate::rest::Args;

/// Record types accepted by create, update and list filters.
pub const RECORD_TYPES: [&str; 10] = [
    "A",
    "AAAA",
    "CNAME",
    "TXT",
    "SRV",
    "LOC",
    "MX",
    "NS",
    "SPF",
    "read only",
];

const TYPE_MESSAGE: &str =
    r#"type must be one of ["A", "AAAA", "CNAME", "TXT", "SRV", "LOC", "MX", "NS", "SPF", "read only"]"#;

/// Typed arguments for [`create_dns_record`] and [`update_dns_record`].
///
/// Converts into [`Args`], so it can be passed wherever an operation takes
/// keyword arguments. Optional fields are left out when `None`.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::Args;
/// use cloudflare_api::rest::resources::dns::{self, DnsRecord};
///
/// let record = DnsRecord::new("abc1234", "A", "www.example.com", "198.51.100.4").proxied(true);
/// let request = dns::create_dns_record(&Args::from(record)).unwrap();
/// assert_eq!(request.path, "zones/abc1234/dns_records");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsRecord {
    pub zone_id: String,
    /// Record id; only used by updates.
    pub id: Option<String>,
    /// Sent as `type`.
    pub record_type: String,
    pub name: String,
    pub content: String,
    /// Time to live in seconds; `1` means automatic.
    pub ttl: Option<u32>,
    pub proxied: Option<bool>,
}

impl DnsRecord {
    /// A record in `zone_id`; `record_type` is checked against
    /// [`RECORD_TYPES`] when the request is built.
    #[must_use]
    pub fn new(
        zone_id: impl Into<String>,
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            id: None,
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl: None,
            proxied: None,
        }
    }

    /// Targets an existing record, for [`update_dns_record`].
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub const fn proxied(mut self, proxied: bool) -> Self {
        self.proxied = Some(proxied);
        self
    }
}

impl From<DnsRecord> for Args {
    fn from(record: DnsRecord) -> Self {
        let mut args = Self::new()
            .set("zone_id", record.zone_id)
            .set("name", record.name)
            .set("type", record.record_type)
            .set("content", record.content);
        if let Some(id) = record.id {
            args.insert("id", id);
        }
        if let Some(ttl) = record.ttl {
            args.insert("ttl", ttl);
        }
        if let Some(proxied) = record.proxied {
            args.insert("proxied", proxied);
        }
        args
    }
}

fn record_body(args: &Args, record_type: &str) -> Result<Map<String, Value>, ApiError> {
    let name = args.required("name", "name required")?;
    let content = args.required("content", "content required")?;
    args.bool_opt("proxied", "proxied must be true or false")?;

    let mut body = Map::new();
    body.insert("name".to_string(), name.clone());
    body.insert("type".to_string(), Value::String(record_type.to_string()));
    body.insert("content".to_string(), content.clone());
    body.extend(body_fields(args, &["ttl", "proxied"]));
    Ok(body)
}

/// Creates a DNS record.
///
/// # Errors
///
/// Returns an error when a required keyword is missing, `type` is not one
/// of [`RECORD_TYPES`], or `proxied` is not a boolean.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::Args;
/// use cloudflare_api::rest::resources::dns;
///
/// let request = dns::create_dns_record(
///     &Args::new()
///         .set("zone_id", "abc1234")
///         .set("name", "foobar.com")
///         .set("type", "CNAME")
///         .set("content", "192.168.1.1"),
/// )
/// .unwrap();
/// assert_eq!(request.path, "zones/abc1234/dns_records");
/// ```
pub fn create_dns_record(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "name", "type", "content"])?;
    let zone = zone_path(args)?;
    let record_type = args.required_one_of("type", &RECORD_TYPES, TYPE_MESSAGE)?;
    let body = record_body(args, record_type)?;

    Ok(HttpRequest::builder(HttpMethod::Post, format!("{zone}/dns_records"))
        .body(Value::Object(body))
        .build()?)
}

/// Lists DNS records, optionally filtered by `name`, `content` and `type`.
///
/// Ordered by `type` unless `order` is given.
///
/// # Errors
///
/// Returns an error when `zone_id` is blank or `type` is unknown.
pub fn dns_records(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id"])?;
    let zone = zone_path(args)?;
    args.one_of("type", &RECORD_TYPES, TYPE_MESSAGE)?;
    let order = args
        .value("order")
        .and_then(Value::as_str)
        .unwrap_or("type")
        .to_string();

    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/dns_records"))
        .query_opt(args, "name")
        .query_opt(args, "content")
        .query_opt(args, "type")
        .query_param("order", order)
        .paginate(args)
        .build()?)
}

/// Fetches one DNS record.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn dns_record(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "dns record id required")?;
    Ok(HttpRequest::builder(HttpMethod::Get, format!("{zone}/dns_records/{id}")).build()?)
}

/// Replaces a DNS record.
///
/// # Errors
///
/// Returns an error when a required keyword is missing or invalid.
pub fn update_dns_record(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id", "type", "name", "content"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "dns record id required")?;
    let record_type = args.required_one_of("type", &RECORD_TYPES, TYPE_MESSAGE)?;
    let body = record_body(args, record_type)?;

    Ok(HttpRequest::builder(HttpMethod::Put, format!("{zone}/dns_records/{id}"))
        .body(Value::Object(body))
        .build()?)
}

/// Deletes a DNS record.
///
/// # Errors
///
/// Returns an error when `zone_id` or `id` is blank.
pub fn delete_dns_record(args: &Args) -> Result<HttpRequest, ApiError> {
    args.require(&["zone_id", "id"])?;
    let zone = zone_path(args)?;
    let id = args.id("id", "id required")?;
    Ok(HttpRequest::builder(HttpMethod::Delete, format!("{zone}/dns_records/{id}")).build()?)
}

impl CloudflareClient {
    /// Creates a DNS record. See [`create_dns_record`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn create_dns_record(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), create_dns_record).await
    }

    /// Lists DNS records. See [`dns_records`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn dns_records(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), dns_records).await
    }

    /// Fetches a DNS record. See [`dns_record`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn dns_record(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), dns_record).await
    }

    /// Replaces a DNS record. See [`update_dns_record`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn update_dns_record(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), update_dns_record).await
    }

    /// Deletes a DNS record. See [`delete_dns_record`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on invalid arguments or a failed request.
    pub async fn delete_dns_record(&self, args: impl Into<Args>) -> Result<Value, ApiError> {
        self.dispatch(args.into(), delete_dns_record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<HttpRequest, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    fn record() -> Args {
        Args::new()
            .set("zone_id", "abc1234")
            .set("name", "foobar.com")
            .set("type", "CNAME")
            .set("content", "192.168.1.1")
    }

    #[test]
    fn test_type_message_lists_every_type() {
        assert_eq!(TYPE_MESSAGE, format!("type must be one of {RECORD_TYPES:?}"));
    }

    #[test]
    fn test_create_dns_record_missing_keywords() {
        let err = create_dns_record(&Args::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingRequiredField { .. }));
        assert_eq!(
            err.to_string(),
            "missing keywords: zone_id, name, type, content"
        );
    }

    #[test]
    fn test_create_dns_record_rejects_unknown_type() {
        assert_eq!(message(create_dns_record(&record().set("type", "foo"))), TYPE_MESSAGE);
    }

    #[test]
    fn test_create_dns_record_body() {
        let request = create_dns_record(&record()).unwrap();
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "zones/abc1234/dns_records");
        assert_eq!(
            request.body.unwrap(),
            json!({"name": "foobar.com", "type": "CNAME", "content": "192.168.1.1"})
        );
    }

    #[test]
    fn test_create_dns_record_optional_fields() {
        let request = create_dns_record(&record().set("ttl", 120).set("proxied", true)).unwrap();
        let body = request.body.unwrap();
        assert_eq!(body["ttl"], json!(120));
        assert_eq!(body["proxied"], json!(true));

        assert_eq!(
            message(create_dns_record(&record().set("proxied", "yes"))),
            "proxied must be true or false"
        );
        assert_eq!(
            message(create_dns_record(&record().set("content", Value::Null))),
            "content required"
        );
    }

    #[test]
    fn test_dns_records_query() {
        let args = Args::new()
            .set("zone_id", "abc1234")
            .set("name", "foobar.com")
            .set("content", "192.168.1.1");
        let request = dns_records(&args).unwrap();
        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["content", "name", "order", "page", "per_page"]);
        assert_eq!(request.query_value("order"), Some("type"));
    }

    #[test]
    fn test_dns_record_id_messages() {
        let args = Args::new().set("zone_id", "abc1234").set("id", Value::Null);
        assert_eq!(message(dns_record(&args)), "dns record id required");
        assert_eq!(message(delete_dns_record(&args)), "id required");
        assert_eq!(
            message(dns_record(&Args::new())),
            "missing keywords: zone_id, id"
        );
    }

    #[test]
    fn test_update_dns_record_check_order() {
        let args = Args::new()
            .set("zone_id", Value::Null)
            .set("id", "foo")
            .set("name", "foo")
            .set("type", "foo")
            .set("content", "foo");
        assert_eq!(message(update_dns_record(&args)), "zone_id required");

        let args = args.set("zone_id", "abc1234").set("id", Value::Null);
        assert_eq!(message(update_dns_record(&args)), "dns record id required");
        assert_eq!(
            message(update_dns_record(&Args::new())),
            "missing keywords: zone_id, id, type, name, content"
        );
    }

    #[test]
    fn test_update_dns_record_is_put() {
        let args = record().set("id", "somebigid");
        let request = update_dns_record(&args).unwrap();
        assert_eq!(request.http_method, HttpMethod::Put);
        assert_eq!(request.path, "zones/abc1234/dns_records/somebigid");
    }

    // ========================================================================
    // Missing keywords
    // ========================================================================

    #[test]
    fn test_every_operation_names_missing_keywords() {
        let cases: &[(fn(&Args) -> Result<HttpRequest, ApiError>, &str)] = &[
            (create_dns_record, "missing keywords: zone_id, name, type, content"),
            (dns_records, "missing keyword: zone_id"),
            (dns_record, "missing keywords: zone_id, id"),
            (update_dns_record, "missing keywords: zone_id, id, type, name, content"),
            (delete_dns_record, "missing keywords: zone_id, id"),
        ];
        for (build, expected) in cases {
            let err = build(&Args::new()).unwrap_err();
            assert!(matches!(err, ApiError::MissingRequiredField { .. }));
            assert_eq!(err.to_string(), *expected);
        }
    }

    // ========================================================================
    // Enumerated values
    // ========================================================================

    #[test]
    fn test_every_record_type_accepted() {
        for record_type in RECORD_TYPES {
            let request = create_dns_record(&record().set("type", record_type)).unwrap();
            assert_eq!(request.body.unwrap()["type"], json!(record_type));
            assert!(update_dns_record(&record().set("id", "foo").set("type", record_type)).is_ok());

            let request =
                dns_records(&Args::new().set("zone_id", "abc1234").set("type", record_type))
                    .unwrap();
            assert!(request.query.contains(&("type".to_string(), record_type.to_string())));
        }
    }

    // ========================================================================
    // Typed records
    // ========================================================================

    #[test]
    fn test_dns_record_converts_to_args() {
        let typed = DnsRecord::new("abc1234", "CNAME", "foobar.com", "192.168.1.1");
        assert_eq!(Args::from(typed.clone()), record());

        let request = create_dns_record(&Args::from(typed.clone().ttl(120).proxied(false))).unwrap();
        assert_eq!(
            request.body.unwrap(),
            json!({
                "name": "foobar.com",
                "type": "CNAME",
                "content": "192.168.1.1",
                "ttl": 120,
                "proxied": false,
            })
        );

        let request = update_dns_record(&Args::from(typed.clone().id("foo"))).unwrap();
        assert_eq!(request.path, "zones/abc1234/dns_records/foo");
        assert_eq!(
            message(update_dns_record(&Args::from(typed))),
            "missing keyword: id"
        );
    }

    #[test]
    fn test_dns_record_type_still_validated() {
        let typed = DnsRecord::new("abc1234", "foo", "foobar.com", "192.168.1.1");
        assert_eq!(message(create_dns_record(&Args::from(typed))), TYPE_MESSAGE);
    }
}
