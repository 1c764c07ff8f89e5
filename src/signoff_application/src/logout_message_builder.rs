use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::{Compression, read::DeflateDecoder, write::DeflateEncoder};
use signoff_core::{FrontChannelPayload, IssueInstantFormatter, LogoutMessage, UniqueIdGenerator};

/// Prefix of every generated `LogoutRequest` ID.
pub const LOGOUT_REQUEST_ID_PREFIX: &str = "LR";

#[derive(Debug, thiserror::Error)]
pub enum LogoutMessageError {
    #[error("Failed to deflate logout request: {0}")]
    Deflate(#[source] std::io::Error),
    #[error("Front channel payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Failed to inflate front channel payload: {0}")]
    Inflate(#[source] std::io::Error),
}

/// Builds SAML `LogoutRequest` documents for single logout.
#[derive(Debug, Clone)]
pub struct LogoutMessageBuilder<G, C> {
    id_generator: G,
    issue_instant_formatter: C,
}

impl<G, C> LogoutMessageBuilder<G, C>
where
    G: UniqueIdGenerator,
    C: IssueInstantFormatter,
{
    pub fn new(id_generator: G, issue_instant_formatter: C) -> Self {
        Self {
            id_generator,
            issue_instant_formatter,
        }
    }

    /// Builds the plain XML request posted to back-channel services.
    pub fn build_back_channel(&self, session_ticket_id: &str) -> LogoutMessage {
        LogoutMessage::new(
            self.id_generator.new_id(LOGOUT_REQUEST_ID_PREFIX),
            self.issue_instant_formatter.issue_instant(),
            session_ticket_id,
        )
    }

    /// Builds the request for the HTTP-redirect binding: raw DEFLATE of the
    /// XML bytes, then standard base64 without line breaks.
    pub fn build_front_channel(
        &self,
        session_ticket_id: &str,
    ) -> Result<FrontChannelPayload, LogoutMessageError> {
        let message = self.build_back_channel(session_ticket_id);

        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(message.as_xml().as_bytes())
            .map_err(LogoutMessageError::Deflate)?;
        let compressed = encoder.finish().map_err(LogoutMessageError::Deflate)?;

        Ok(FrontChannelPayload::new(STANDARD.encode(compressed)))
    }
}

/// Recovers the XML carried by a front channel payload.
pub fn decode_front_channel(payload: &FrontChannelPayload) -> Result<String, LogoutMessageError> {
    let compressed = STANDARD.decode(payload.as_str())?;

    let mut xml = String::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_string(&mut xml)
        .map_err(LogoutMessageError::Inflate)?;

    Ok(xml)
}
