/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Per-rule key resolution over the connection capability surface.

use crate::connection::RoutedConnection;
use crate::key_filter::{self, KeyFilter};
use crate::key_kind::KeyKind;
use crate::observability::events;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tracing::debug;

const COMPONENT: &str = "key_resolver";

/// Key returned whenever resolution cannot produce a meaningful value.
///
/// Callers treat this value as "the routing rule does not apply to this
/// connection", not as a failure. It is chosen not to collide with
/// legitimate resolved keys in normal deployments; the guarantee is
/// documented, not cryptographic.
pub const DEFAULT_KEY_VALUE: &str = "DEFAULT";

/// Failures raised while building a [`KeyResolver`] from routing-rule
/// configuration.
#[derive(Debug)]
pub enum KeyResolverBuildError {
    /// The configured filter expression is not a valid pattern.
    InvalidFilter {
        filter: String,
        source: regex::Error,
    },
}

impl Display for KeyResolverBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyResolverBuildError::InvalidFilter { filter, source } => {
                write!(f, "invalid key filter '{filter}': {source}")
            }
        }
    }
}

impl Error for KeyResolverBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KeyResolverBuildError::InvalidFilter { source, .. } => Some(source),
        }
    }
}

/// Derives the routing key for one configured attribute kind.
///
/// One resolver exists per routing rule. It is immutable after construction
/// and shared read-only across arbitrarily many concurrent
/// [`resolve`](Self::resolve) calls; the only per-call state is local to the
/// call.
#[derive(Clone, Debug)]
pub struct KeyResolver {
    kind: KeyKind,
    filter: Option<KeyFilter>,
}

impl KeyResolver {
    /// Builds a resolver for one routing rule, compiling the filter eagerly.
    ///
    /// A malformed `filter` is a configuration error surfaced here, at
    /// policy-setup time; [`resolve`](Self::resolve) is guaranteed not to
    /// fail on pattern issues afterwards.
    pub fn new(kind: KeyKind, filter: Option<&str>) -> Result<Self, KeyResolverBuildError> {
        let filter = filter.map(KeyFilter::compile).transpose()?;

        debug!(
            event = events::KEY_RESOLVER_CREATE,
            component = COMPONENT,
            kind = %kind,
            has_filter = filter.is_some(),
            "key resolver created"
        );

        Ok(Self { kind, filter })
    }

    /// Kind this resolver extracts.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Resolves the routing key for one connection.
    ///
    /// Total function: it never fails and always returns a usable key,
    /// falling back to [`DEFAULT_KEY_VALUE`] on any resolution gap: an
    /// absent attribute, a missing capability link, an empty role set, or a
    /// filter that matches nothing.
    pub fn resolve(
        &self,
        connection: Option<&dyn RoutedConnection>,
        client_id: Option<&str>,
        username: Option<&str>,
    ) -> String {
        let resolved = match self.kind {
            KeyKind::ClientId => key_filter::apply(self.filter.as_ref(), client_id),
            KeyKind::SniHost => self.resolve_sni_host(connection),
            KeyKind::SourceIp => self.resolve_source_ip(connection),
            KeyKind::UserName => key_filter::apply(self.filter.as_ref(), username),
            KeyKind::RoleName => self.resolve_role_name(connection),
        };

        match resolved {
            Some(key) if !key.is_empty() => key,
            _ => {
                debug!(
                    event = events::KEY_RESOLVE_GAP,
                    component = COMPONENT,
                    kind = %self.kind,
                    "no key derivable, using default key value"
                );

                DEFAULT_KEY_VALUE.to_string()
            }
        }
    }

    fn resolve_sni_host(&self, connection: Option<&dyn RoutedConnection>) -> Option<String> {
        let sni_host_name = connection?.sni_host_name();

        key_filter::apply(self.filter.as_ref(), sni_host_name.as_deref())
    }

    fn resolve_source_ip(&self, connection: Option<&dyn RoutedConnection>) -> Option<String> {
        let remote_address = connection?.remote_address();

        key_filter::apply(
            self.filter.as_ref(),
            remote_address.as_deref().map(address_host),
        )
    }

    /// Walks the optional capability chain down to the subject's role
    /// principals; any missing link resolves to no value.
    fn resolve_role_name(&self, connection: Option<&dyn RoutedConnection>) -> Option<String> {
        let protocol_connection = connection?.protocol_connection()?;
        let subject = protocol_connection.audit_subject()?;
        let principals = subject.role_principals();

        match &self.filter {
            None => principals
                .first()
                .map(|principal| principal.name().to_string()),
            Some(filter) => principals.iter().find_map(|principal| {
                filter
                    .matched_fragment(principal.name())
                    .map(str::to_string)
            }),
        }
    }
}

/// Strips the port from a `"<ip>:<port>"` remote address. The port is never
/// part of the resolvable key.
fn address_host(remote_address: &str) -> &str {
    match remote_address.split_once(':') {
        Some((host, _port)) => host,
        None => remote_address,
    }
}

#[cfg(test)]
mod tests {
    use super::{address_host, KeyResolver, DEFAULT_KEY_VALUE};
    use crate::key_kind::KeyKind;
    use std::error::Error;

    #[test]
    fn address_host_keeps_everything_before_the_first_colon() {
        assert_eq!(address_host("10.0.0.1:12345"), "10.0.0.1");
        assert_eq!(address_host("10.0.0.1"), "10.0.0.1");
    }

    #[test]
    fn empty_resolved_value_falls_back_to_default_key() {
        let resolver = KeyResolver::new(KeyKind::ClientId, None).unwrap();

        assert_eq!(resolver.resolve(None, Some(""), None), DEFAULT_KEY_VALUE);
    }

    #[test]
    fn filter_rejection_yields_default_key_not_empty() {
        let resolver = KeyResolver::new(KeyKind::UserName, Some("^admin-")).unwrap();

        assert_eq!(
            resolver.resolve(None, None, Some("guest")),
            DEFAULT_KEY_VALUE
        );
    }

    #[test]
    fn build_error_reports_filter_and_source() {
        let error = KeyResolver::new(KeyKind::ClientId, Some("[unclosed")).unwrap_err();

        assert!(error.to_string().contains("[unclosed"));
        assert!(error.source().is_some());
    }
}
