//! Top-level shell state: account, loading flag, tabs and chat toggle.

use tracing::instrument;

use crate::ledger::IdentityLedger;
use crate::wallet::{connect_account, WalletProvider};

/// Panel selected in the tab switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Create,
    View,
}

/// Result of shell start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account: String,
    pub has_identity: bool,
}

/// State owned by the root component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub account: String,
    pub loading: bool,
    pub active_tab: Tab,
    pub has_identity: bool,
    pub chat_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            account: String::new(),
            loading: true,
            active_tab: Tab::Create,
            has_identity: false,
            chat_open: false,
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the loading screen with the resolved session.
    pub fn connected(&mut self, session: Session) {
        tracing::debug!(account = %session.account, has_identity = session.has_identity, "Shell connected");
        self.account = session.account;
        self.has_identity = session.has_identity;
        if session.has_identity {
            self.active_tab = Tab::View;
        }
        self.loading = false;
    }

    /// Whether the view tab can be selected.
    pub fn can_view(&self) -> bool {
        self.has_identity
    }

    /// Switch tabs. The view tab stays disabled until an identity exists.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == Tab::View && !self.can_view() {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Called once identity creation is confirmed.
    pub fn identity_created(&mut self) {
        self.has_identity = true;
        self.active_tab = Tab::View;
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }
}

/// Resolve the account and ask the ledger whether it owns an identity.
///
/// Neither step can fail the start-up: wallet problems fall back to
/// `placeholder`, ledger problems are logged and read as "no identity".
#[instrument(skip_all)]
pub async fn start_session(
    wallet: Option<&dyn WalletProvider>,
    ledger: &dyn IdentityLedger,
    placeholder: &str,
) -> Session {
    let account = connect_account(wallet, placeholder).await;
    let has_identity = match ledger.has_identity(&account).await {
        Ok(has) => has,
        Err(e) => {
            tracing::error!("Error checking identity: {}", e);
            false
        }
    };
    Session {
        account,
        has_identity,
    }
}
