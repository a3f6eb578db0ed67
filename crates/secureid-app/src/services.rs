//! Capability wiring shared with every component via Dioxus context.

use std::sync::{Arc, OnceLock};

use secureid_core::{
    AppConfig, IdentityLedger, MockLedger, Scheduler, StaticWallet, TokioScheduler,
    WalletProvider,
};
use tracing::Span;

struct Launch {
    config: AppConfig,
    session: Span,
}

/// Config and session span handed from `main` to the root component.
static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Record what the root component should start with. First call wins.
pub fn set_launch(config: AppConfig, session: Span) {
    if LAUNCH.set(Launch { config, session }).is_err() {
        tracing::warn!("Launch config already set; ignoring");
    }
}

/// Services built from [`set_launch`], or from defaults when nothing was set.
pub fn launch_services() -> Services {
    match LAUNCH.get() {
        Some(launch) => {
            Services::from_config(launch.config.clone()).with_session(launch.session.clone())
        }
        None => Services::from_config(AppConfig::default()),
    }
}

/// Ledger, wallet and scheduler used by the panels
#[derive(Clone)]
pub struct Services {
    pub ledger: Arc<dyn IdentityLedger>,
    pub wallet: Option<Arc<dyn WalletProvider>>,
    pub scheduler: Arc<dyn Scheduler>,
    pub config: Arc<AppConfig>,
    /// Parent span for every task the components spawn
    pub session: Span,
}

impl Services {
    /// Mock ledger, tokio timers, and a static wallet when accounts are configured.
    pub fn from_config(config: AppConfig) -> Self {
        let wallet: Option<Arc<dyn WalletProvider>> = if config.wallet_accounts.is_empty() {
            None
        } else {
            Some(Arc::new(StaticWallet::new(config.wallet_accounts.clone())))
        };
        Self {
            ledger: Arc::new(MockLedger::new()),
            wallet,
            scheduler: Arc::new(TokioScheduler),
            config: Arc::new(config),
            session: Span::none(),
        }
    }

    pub fn with_session(mut self, session: Span) -> Self {
        self.session = session;
        self
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("has_wallet", &self.wallet.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ledger, &other.ledger)
            && Arc::ptr_eq(&self.scheduler, &other.scheduler)
            && Arc::ptr_eq(&self.config, &other.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secureid_core::{connect_account, PLACEHOLDER_ACCOUNT};

    #[test]
    fn test_defaults_without_launch() {
        let services = launch_services();
        assert!(services.session.is_none());
        assert_eq!(*services.config, AppConfig::default());
    }

    #[test]
    fn test_no_accounts_means_no_wallet() {
        let services = Services::from_config(AppConfig::default());
        assert!(services.wallet.is_none());
    }

    #[test]
    fn test_clones_compare_equal() {
        let services = Services::from_config(AppConfig::default());
        assert_eq!(services.clone(), services);
        assert_ne!(Services::from_config(AppConfig::default()), services);
    }

    #[tokio::test]
    async fn test_configured_wallet_account_is_used() {
        let config = AppConfig {
            wallet_accounts: vec!["0xcafe".to_string()],
            ..Default::default()
        };
        let services = Services::from_config(config);
        let account = connect_account(services.wallet.as_deref(), PLACEHOLDER_ACCOUNT).await;
        assert_eq!(account, "0xcafe");
    }
}
