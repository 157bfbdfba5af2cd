use tracing::debug;

use crate::file_parsers::piwik::types::SourceDocument;

const UNKNOWN_ID: &str = "0";

/// Account and container IDs stamped on every destination object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account_id: String,
    pub container_id: String,
}

impl Identity {
    pub fn container_path(&self) -> String {
        format!(
            "accounts/{}/containers/{}",
            self.account_id, self.container_id
        )
    }

    pub fn version_path(&self, version_id: &str) -> String {
        format!("{}/versions/{version_id}", self.container_path())
    }
}

/// Pull the IDs out of the source, replacing anything that isn't all digits
pub fn resolve_identity(source: &SourceDocument) -> Identity {
    let version = &source.container_version;

    Identity {
        account_id: digits_or_zero("accountId", version.account_id.as_deref()),
        container_id: digits_or_zero("containerId", version.container_id.as_deref()),
    }
}

fn digits_or_zero(field: &str, id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => id.to_string(),
        Some(id) => {
            debug!("Non-numeric {field} {id:?}, using {UNKNOWN_ID}");
            UNKNOWN_ID.to_string()
        }
        None => UNKNOWN_ID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_identity;
    use crate::file_parsers::{piwik::PiwikParser, FileParser};

    fn identity_of(json: &str) -> (String, String) {
        let source = PiwikParser.parse(json.as_bytes()).unwrap();
        let identity = resolve_identity(&source);
        (identity.account_id, identity.container_id)
    }

    #[test]
    fn missing_container_version() {
        assert_eq!(identity_of("{}"), ("0".into(), "0".into()));
        assert_eq!(
            identity_of(r#"{"containerVersion": {}}"#),
            ("0".into(), "0".into())
        );
    }

    #[test]
    fn numbers_and_digit_strings_agree() {
        assert_eq!(
            identity_of(r#"{"containerVersion": {"accountId": 123, "containerId": 456}}"#),
            ("123".into(), "456".into())
        );
        assert_eq!(
            identity_of(r#"{"containerVersion": {"accountId": "123", "containerId": "456"}}"#),
            ("123".into(), "456".into())
        );
        // Wider than u64, must not go through a float
        assert_eq!(
            identity_of(
                r#"{"containerVersion": {"accountId": 123456789012345678901234, "containerId": 18446744073709551615}}"#
            ),
            ("123456789012345678901234".into(), "18446744073709551615".into())
        );
    }

    #[test]
    fn non_numeric_ids_become_zero() {
        for bad in [r#""abc""#, r#""""#, "-5", "1.5", "true", "null", r#""12a""#, "[1]"] {
            let json = format!(r#"{{"containerVersion": {{"accountId": {bad}, "containerId": "7"}}}}"#);
            assert_eq!(identity_of(&json), ("0".into(), "7".into()), "accountId {bad}");
        }
    }

    #[test]
    fn paths() {
        let source = PiwikParser
            .parse(br#"{"containerVersion": {"accountId": 1, "containerId": 2}}"#)
            .unwrap();
        let identity = resolve_identity(&source);

        assert_eq!(identity.container_path(), "accounts/1/containers/2");
        assert_eq!(identity.version_path("0"), "accounts/1/containers/2/versions/0");
    }
}
