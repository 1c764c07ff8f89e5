use chrono::{DateTime, SecondsFormat, Utc};
use signoff_core::IssueInstantFormatter;

/// SAML `xs:dateTime` in UTC with millisecond precision, e.g. `2026-10-19T12:15:23.123Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcIssueInstantFormatter;

impl UtcIssueInstantFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(instant: DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl IssueInstantFormatter for UtcIssueInstantFormatter {
    fn issue_instant(&self) -> String {
        Self::format(Utc::now())
    }
}
