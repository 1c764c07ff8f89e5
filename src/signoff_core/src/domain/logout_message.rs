use std::fmt;

const SAML_PROTOCOL_NS: &str = "urn:oasis:names:tc:SAML:2.0:protocol";
const SAML_ASSERTION_NS: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// Receivers resolve the user from the session index, never from the NameID.
const NAME_ID_PLACEHOLDER: &str = "@NOT_USED@";

/// A SAML 2.0 `LogoutRequest` for one service ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutMessage {
    id: String,
    issue_instant: String,
    session_index: String,
    xml: String,
}

impl LogoutMessage {
    pub fn new(
        id: impl Into<String>,
        issue_instant: impl Into<String>,
        session_index: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let issue_instant = issue_instant.into();
        let session_index = session_index.into();
        let xml = render(&id, &issue_instant, &session_index);

        Self {
            id,
            issue_instant,
            session_index,
            xml,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn issue_instant(&self) -> &str {
        &self.issue_instant
    }

    pub fn session_index(&self) -> &str {
        &self.session_index
    }

    pub fn as_xml(&self) -> &str {
        &self.xml
    }

    pub fn into_xml(self) -> String {
        self.xml
    }
}

impl fmt::Display for LogoutMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml)
    }
}

fn render(id: &str, issue_instant: &str, session_index: &str) -> String {
    let mut xml = String::with_capacity(320 + id.len() + session_index.len());
    xml.push_str("<samlp:LogoutRequest xmlns:samlp=\"");
    xml.push_str(SAML_PROTOCOL_NS);
    xml.push_str("\" ID=\"");
    xml.push_str(&xml_escape(id));
    xml.push_str("\" Version=\"2.0\" IssueInstant=\"");
    xml.push_str(&xml_escape(issue_instant));
    xml.push_str("\"><saml:NameID xmlns:saml=\"");
    xml.push_str(SAML_ASSERTION_NS);
    xml.push_str("\">");
    xml.push_str(NAME_ID_PLACEHOLDER);
    xml.push_str("</saml:NameID><samlp:SessionIndex>");
    xml.push_str(&xml_escape(session_index));
    xml.push_str("</samlp:SessionIndex></samlp:LogoutRequest>");
    xml
}

fn xml_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

/// A logout request compressed and encoded for the HTTP-redirect binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontChannelPayload(String);

impl FrontChannelPayload {
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for FrontChannelPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrontChannelPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
