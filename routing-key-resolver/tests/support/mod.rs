use routing_key_resolver::{
    AuditSubject, ProtocolConnection, RolePrincipal, RoutedConnection,
};

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Connection fixture exposing exactly the attributes a test configures.
#[derive(Default)]
pub(crate) struct TestConnection {
    sni_host_name: Option<String>,
    remote_address: Option<String>,
    protocol_connection: Option<TestProtocolConnection>,
}

impl TestConnection {
    pub(crate) fn with_sni_host_name(sni_host_name: &str) -> Self {
        Self {
            sni_host_name: Some(sni_host_name.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn with_remote_address(remote_address: &str) -> Self {
        Self {
            remote_address: Some(remote_address.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn with_protocol_connection(protocol_connection: TestProtocolConnection) -> Self {
        Self {
            protocol_connection: Some(protocol_connection),
            ..Default::default()
        }
    }
}

impl RoutedConnection for TestConnection {
    fn sni_host_name(&self) -> Option<String> {
        self.sni_host_name.clone()
    }

    fn remote_address(&self) -> Option<String> {
        self.remote_address.clone()
    }

    fn protocol_connection(&self) -> Option<&dyn ProtocolConnection> {
        self.protocol_connection
            .as_ref()
            .map(|protocol_connection| protocol_connection as &dyn ProtocolConnection)
    }
}

#[derive(Default)]
pub(crate) struct TestProtocolConnection {
    audit_subject: Option<TestSubject>,
}

impl TestProtocolConnection {
    pub(crate) fn with_audit_subject(audit_subject: TestSubject) -> Self {
        Self {
            audit_subject: Some(audit_subject),
        }
    }
}

impl ProtocolConnection for TestProtocolConnection {
    fn audit_subject(&self) -> Option<&dyn AuditSubject> {
        self.audit_subject
            .as_ref()
            .map(|subject| subject as &dyn AuditSubject)
    }
}

/// Order-preserving subject: role principals iterate in insertion order.
pub(crate) struct TestSubject {
    roles: Vec<RolePrincipal>,
}

impl TestSubject {
    pub(crate) fn with_roles(names: &[&str]) -> Self {
        Self {
            roles: names.iter().map(|name| RolePrincipal::new(name)).collect(),
        }
    }
}

impl AuditSubject for TestSubject {
    fn role_principals(&self) -> Vec<RolePrincipal> {
        self.roles.clone()
    }
}

pub(crate) fn connection_with_roles(names: &[&str]) -> TestConnection {
    TestConnection::with_protocol_connection(TestProtocolConnection::with_audit_subject(
        TestSubject::with_roles(names),
    ))
}
