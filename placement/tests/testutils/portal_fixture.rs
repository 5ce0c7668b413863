// Shared fixture: a portal context over an in-memory store, a recording
// history navigator and a scripted transport.

#![allow(dead_code)]

use placement::{
    CredentialStore, HistoryNavigator, PortalConfig, PortalContext, Role, ScriptedTransport,
    SessionProvider, UserRecord,
};
use serde_json::Value;
use std::sync::Arc;

pub struct PortalFixture {
    pub context: PortalContext,
    pub store: Arc<CredentialStore>,
    pub navigator: Arc<HistoryNavigator>,
    pub transport: Arc<ScriptedTransport>,
}

impl PortalFixture {
    /// Fixture whose browser starts on `route`
    pub fn starting_at(route: &str) -> Self {
        // RUST_LOG=placement=debug shows the session layer's log lines in failing tests
        let _ = env_logger::builder().is_test(true).try_init();

        let store = Arc::new(CredentialStore::in_memory());
        let navigator = Arc::new(HistoryNavigator::starting_at(route));
        let transport = Arc::new(ScriptedTransport::new());
        let context = PortalContext::with_parts(
            PortalConfig::default(),
            store.clone(),
            navigator.clone(),
            transport.clone(),
        );
        Self {
            context,
            store,
            navigator,
            transport,
        }
    }

    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// Store a session directly, bypassing the login call
    pub fn sign_in(&self, role: Role, token: &str, user: Value) {
        self.store
            .save(role, token, &UserRecord::new(user))
            .expect("save should succeed");
    }

    pub fn is_signed_in(&self, role: Role) -> bool {
        self.store.load(role).is_some()
    }
}
