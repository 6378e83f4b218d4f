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

//! # routing-key-resolver
//!
//! `routing-key-resolver` derives the string key a connection-routing policy
//! uses to decide which backend broker should own an incoming client
//! connection.
//!
//! A [`KeyResolver`] is built once per configured routing rule, at
//! policy-setup time, and then invoked once per connection on the
//! network-handling path. Resolution is a total function: it never fails and
//! never returns an empty value, falling back to [`DEFAULT_KEY_VALUE`]
//! whenever no meaningful key can be derived. The resolver is immutable after
//! construction and safe to share read-only across concurrent resolutions.
//!
//! ## Resolving a client identifier
//!
//! An optional filter expression narrows the raw attribute to the substring
//! it matches; a rejected or absent value becomes the default key.
//!
//! ```
//! use routing_key_resolver::{KeyKind, KeyResolver, DEFAULT_KEY_VALUE};
//!
//! let resolver = KeyResolver::new(KeyKind::ClientId, Some("^.{4}")).unwrap();
//!
//! assert_eq!(resolver.resolve(None, Some("TEST1234"), None), "TEST");
//! assert_eq!(resolver.resolve(None, None, None), DEFAULT_KEY_VALUE);
//! ```
//!
//! ## Connection-derived kinds
//!
//! Connection-dependent kinds read a narrow, read-only capability surface
//! implemented by the connection/transport layer:
//!
//! ```
//! use routing_key_resolver::{
//!     KeyKind, KeyResolver, ProtocolConnection, RoutedConnection,
//! };
//!
//! struct HandshakeSnapshot;
//!
//! impl RoutedConnection for HandshakeSnapshot {
//!     fn sni_host_name(&self) -> Option<String> {
//!         Some("broker-a.cluster.internal".to_string())
//!     }
//!
//!     fn remote_address(&self) -> Option<String> {
//!         Some("10.0.0.1:12345".to_string())
//!     }
//!
//!     fn protocol_connection(&self) -> Option<&dyn ProtocolConnection> {
//!         None
//!     }
//! }
//!
//! let resolver = KeyResolver::new(KeyKind::SourceIp, None).unwrap();
//!
//! // The port is never part of the resolvable key.
//! assert_eq!(
//!     resolver.resolve(Some(&HandshakeSnapshot), None, None),
//!     "10.0.0.1"
//! );
//! ```
//!
//! ## Configuration contract
//!
//! The filter expression is compiled eagerly by [`KeyResolver::new`]; a
//! malformed pattern is a configuration error surfaced to the caller at
//! setup time, never from `resolve`. [`KeyRouteConfig`] is the
//! serde-deserializable rule fragment routing-policy configuration embeds.
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events and does not unconditionally initialize a global
//! subscriber. Binaries/plugins/tests are responsible for one-time
//! `tracing_subscriber` initialization at process boundaries.

mod connection;
pub use connection::{AuditSubject, ProtocolConnection, RolePrincipal, RoutedConnection};

mod config;
pub use config::KeyRouteConfig;

mod key_filter;

mod key_kind;
pub use key_kind::{KeyKind, UnknownKeyKindError};

#[doc(hidden)]
pub mod observability;

mod key_resolver;
pub use key_resolver::{KeyResolver, KeyResolverBuildError, DEFAULT_KEY_VALUE};
