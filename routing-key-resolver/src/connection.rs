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

//! Read-only connection capability surface consumed during key resolution.

/// Narrow view of a routed client connection.
///
/// Implemented by the connection/transport layer, not by this crate. Every
/// attribute may be absent; absence is never an error, only "no value
/// available", which resolution maps to
/// [`DEFAULT_KEY_VALUE`](crate::DEFAULT_KEY_VALUE).
pub trait RoutedConnection {
    /// TLS server name presented by the client during the handshake.
    fn sni_host_name(&self) -> Option<String>;

    /// Remote socket address formatted `"<ip>:<port>"`.
    fn remote_address(&self) -> Option<String>;

    /// Protocol-level connection state, once a protocol handshake exists.
    fn protocol_connection(&self) -> Option<&dyn ProtocolConnection>;
}

/// Protocol-level connection state reached through [`RoutedConnection`].
pub trait ProtocolConnection {
    /// Security subject recorded for auditing, if authentication has run.
    fn audit_subject(&self) -> Option<&dyn AuditSubject>;
}

/// Authenticated security subject exposing its role principals.
pub trait AuditSubject {
    /// Role principals attached to this subject.
    ///
    /// The order of the returned collection is the supplier's contract.
    /// Role-name resolution picks the first (matching) entry, so a caller
    /// that needs deterministic selection must supply an order-preserving
    /// collection; the resolver applies no sorting of its own.
    fn role_principals(&self) -> Vec<RolePrincipal>;
}

/// Authenticated role name associated with a connection's security subject.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RolePrincipal {
    name: String,
}

impl RolePrincipal {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
