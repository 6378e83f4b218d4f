//! Canonical structured event names used across `routing-key-resolver`.

// Resolver lifecycle events.
pub const KEY_RESOLVER_CREATE: &str = "key_resolver_create";

// Per-connection resolution events.
pub const KEY_RESOLVE_GAP: &str = "key_resolve_gap";
