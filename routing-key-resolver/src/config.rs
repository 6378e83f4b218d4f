//! Routing-rule configuration fragment for key derivation.

use serde::{Deserialize, Serialize};

use crate::key_kind::KeyKind;
use crate::key_resolver::{KeyResolver, KeyResolverBuildError};

/// One routing rule's key-derivation settings.
///
/// Embedded by routing-policy configuration. The filter is optional; it is
/// compiled when the rule is built into a [`KeyResolver`], so malformed
/// patterns surface at configuration time rather than per connection.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeyRouteConfig {
    pub key: KeyKind,
    #[serde(default)]
    pub filter: Option<String>,
}

impl KeyRouteConfig {
    /// Builds the immutable resolver for this rule.
    pub fn build_resolver(&self) -> Result<KeyResolver, KeyResolverBuildError> {
        KeyResolver::new(self.key, self.filter.as_deref())
    }
}
