//! Closed set of connection attributes a routing key can be derived from.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Attribute kind a [`KeyResolver`](crate::KeyResolver) is configured to extract.
///
/// The set is closed: a routing rule selects exactly one kind, and there is
/// no runtime extension.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Client identifier supplied by the connecting client.
    ClientId,
    /// TLS server name presented during the handshake.
    SniHost,
    /// Source IP of the connection, without the port.
    SourceIp,
    /// Authenticated user name.
    UserName,
    /// Authenticated role name.
    RoleName,
}

impl KeyKind {
    /// Stable configuration token for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::ClientId => "client_id",
            KeyKind::SniHost => "sni_host",
            KeyKind::SourceIp => "source_ip",
            KeyKind::UserName => "user_name",
            KeyKind::RoleName => "role_name",
        }
    }
}

impl Display for KeyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyKind {
    type Err = UnknownKeyKindError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "client_id" => Ok(KeyKind::ClientId),
            "sni_host" => Ok(KeyKind::SniHost),
            "source_ip" => Ok(KeyKind::SourceIp),
            "user_name" => Ok(KeyKind::UserName),
            "role_name" => Ok(KeyKind::RoleName),
            other => Err(UnknownKeyKindError {
                requested: other.to_string(),
            }),
        }
    }
}

/// Failure to parse a key kind from its configuration token.
#[derive(Debug)]
pub struct UnknownKeyKindError {
    requested: String,
}

impl Display for UnknownKeyKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown key kind '{}', expected one of client_id, sni_host, source_ip, user_name, role_name",
            self.requested
        )
    }
}

impl Error for UnknownKeyKindError {}
