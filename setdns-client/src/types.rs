//! Request types for the zones API.

/// One record to add via `POST /api/zones/records/add`.
///
/// The record type is kept as the raw string from the caller: the Technitium
/// API accepts many types, and anything other than `A`/`CNAME` is submitted
/// with the base parameters only, letting the server validate it.
#[derive(Debug, Clone)]
pub struct AddRecordRequest {
    /// Fully qualified record name, e.g. `host1.example.com`.
    pub domain: String,
    /// Zone the record belongs to.
    pub zone: String,
    /// Record type string as understood by the server (`A`, `CNAME`, ...).
    pub record_type: String,
    /// Cache time-to-live in seconds.
    pub ttl: u32,
    /// Address for `A` records. Omitted from the request when `None`.
    pub ip_address: Option<String>,
    /// Request a reverse-pointer record alongside an `A` record.
    pub ptr: bool,
    /// Target for `CNAME` records.
    pub cname: Option<String>,
}

impl AddRecordRequest {
    /// Builds the query parameter list for this record.
    ///
    /// Base parameters are always present; `ipAddress`/`ptr` are added only
    /// for `A` records and `cname` only for `CNAME` records. `ptr` is sent
    /// only when requested (the server defaults it to false).
    pub(crate) fn params(&self, token: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("token", token.to_string()),
            ("domain", self.domain.clone()),
            ("zone", self.zone.clone()),
            ("type", self.record_type.clone()),
            ("ttl", self.ttl.to_string()),
        ];

        match self.record_type.as_str() {
            "A" => {
                if let Some(ip) = &self.ip_address {
                    params.push(("ipAddress", ip.clone()));
                }
                if self.ptr {
                    params.push(("ptr", "true".to_string()));
                }
            }
            "CNAME" => {
                params.push(("cname", self.cname.clone().unwrap_or_default()));
            }
            _ => {}
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request(record_type: &str) -> AddRecordRequest {
        AddRecordRequest {
            domain: "host1.btest.io".to_string(),
            zone: "btest.io".to_string(),
            record_type: record_type.to_string(),
            ttl: 3600,
            ip_address: None,
            ptr: false,
            cname: None,
        }
    }

    fn find<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn a_record_with_ptr() {
        let req = AddRecordRequest {
            ip_address: Some("10.25.10.5".to_string()),
            ptr: true,
            ..base_request("A")
        };
        let params = req.params("secret");

        assert_eq!(find(&params, "token"), Some("secret"));
        assert_eq!(find(&params, "domain"), Some("host1.btest.io"));
        assert_eq!(find(&params, "zone"), Some("btest.io"));
        assert_eq!(find(&params, "type"), Some("A"));
        assert_eq!(find(&params, "ttl"), Some("3600"));
        assert_eq!(find(&params, "ipAddress"), Some("10.25.10.5"));
        assert_eq!(find(&params, "ptr"), Some("true"));
        assert_eq!(find(&params, "cname"), None);
    }

    #[test]
    fn a_record_without_ptr_omits_param() {
        let req = AddRecordRequest {
            ip_address: Some("10.25.10.5".to_string()),
            ..base_request("A")
        };
        let params = req.params("secret");

        assert_eq!(find(&params, "ptr"), None);
    }

    #[test]
    fn a_record_without_address_omits_param() {
        let params = base_request("A").params("secret");
        assert_eq!(find(&params, "ipAddress"), None);
    }

    #[test]
    fn cname_record_carries_target_only() {
        let req = AddRecordRequest {
            cname: Some("host1.btest.io".to_string()),
            ..base_request("CNAME")
        };
        let params = req.params("secret");

        assert_eq!(find(&params, "cname"), Some("host1.btest.io"));
        assert_eq!(find(&params, "ipAddress"), None);
        assert_eq!(find(&params, "ptr"), None);
    }

    #[test]
    fn cname_record_without_target_sends_empty_string() {
        let params = base_request("CNAME").params("secret");
        assert_eq!(find(&params, "cname"), Some(""));
    }

    #[test]
    fn other_types_send_base_params_only() {
        let req = AddRecordRequest {
            ip_address: Some("10.25.10.5".to_string()),
            ptr: true,
            cname: Some("ignored".to_string()),
            ..base_request("TXT")
        };
        let params = req.params("secret");

        assert_eq!(params.len(), 5);
        assert_eq!(find(&params, "type"), Some("TXT"));
        assert_eq!(find(&params, "ipAddress"), None);
        assert_eq!(find(&params, "ptr"), None);
        assert_eq!(find(&params, "cname"), None);
    }

    #[test]
    fn type_matching_is_exact() {
        // Lowercase "a" is passed through untyped rather than treated as an
        // address record.
        let req = AddRecordRequest {
            ip_address: Some("10.25.10.5".to_string()),
            ..base_request("a")
        };
        let params = req.params("secret");
        assert_eq!(find(&params, "ipAddress"), None);
    }
}
