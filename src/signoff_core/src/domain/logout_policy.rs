use serde::{Deserialize, Serialize};

/// How a registered service wants to be told about a single logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogoutPolicy {
    /// No propagation at all.
    None,
    /// Server-to-server POST of the logout request.
    #[default]
    BackChannel,
    /// Logout request carried by a browser redirect.
    FrontChannel,
}
