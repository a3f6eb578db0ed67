//! Wallet-like account providers
//!
//! The shell asks a provider for its account list and takes the first
//! entry. Any failure falls back to a placeholder address.

use async_trait::async_trait;

use crate::error::WalletError;

/// Account used when no wallet answers.
pub const PLACEHOLDER_ACCOUNT: &str = "0x123456789abcdef0123456789abcdef012345678";

/// Something that can hand out account addresses
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request the provider's accounts, primary first.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;
}

/// Provider with a fixed account list
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    accounts: Vec<String>,
}

impl StaticWallet {
    pub fn new(accounts: Vec<String>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl WalletProvider for StaticWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        if self.accounts.is_empty() {
            return Err(WalletError::NoAccounts);
        }
        Ok(self.accounts.clone())
    }
}

/// Resolve the connected account, substituting `fallback` on any failure.
///
/// A blank primary account counts as no account.
pub async fn connect_account(provider: Option<&dyn WalletProvider>, fallback: &str) -> String {
    let accounts = match provider {
        Some(provider) => provider.request_accounts().await,
        None => Err(WalletError::NotAvailable),
    };

    match accounts.and_then(primary_account) {
        Ok(account) => account,
        Err(WalletError::NotAvailable) => {
            tracing::debug!("No wallet provider; using placeholder account");
            fallback.to_string()
        }
        Err(e) => {
            tracing::warn!("Error connecting to wallet: {}", e);
            fallback.to_string()
        }
    }
}

fn primary_account(accounts: Vec<String>) -> Result<String, WalletError> {
    accounts
        .into_iter()
        .next()
        .map(|account| account.trim().to_string())
        .filter(|account| !account.is_empty())
        .ok_or(WalletError::NoAccounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenWallet;

    #[async_trait]
    impl WalletProvider for BrokenWallet {
        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            Err(WalletError::RequestFailed("user rejected".to_string()))
        }
    }

    struct EmptyWallet;

    #[async_trait]
    impl WalletProvider for EmptyWallet {
        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_first_account_wins() {
        let wallet = StaticWallet::new(vec!["0xaaa".to_string(), "0xbbb".to_string()]);
        assert_eq!(connect_account(Some(&wallet), PLACEHOLDER_ACCOUNT).await, "0xaaa");
    }

    #[tokio::test]
    async fn test_fallbacks() {
        assert_eq!(connect_account(None, PLACEHOLDER_ACCOUNT).await, PLACEHOLDER_ACCOUNT);
        assert_eq!(
            connect_account(Some(&BrokenWallet), PLACEHOLDER_ACCOUNT).await,
            PLACEHOLDER_ACCOUNT
        );
        assert_eq!(
            connect_account(Some(&EmptyWallet), PLACEHOLDER_ACCOUNT).await,
            PLACEHOLDER_ACCOUNT
        );
        let unconfigured = StaticWallet::default();
        assert_eq!(connect_account(Some(&unconfigured), "0xfallback").await, "0xfallback");
    }

    #[tokio::test]
    async fn test_blank_primary_account_uses_placeholder() {
        for blank in ["", "   "] {
            let wallet = StaticWallet::new(vec![blank.to_string(), "0xbbb".to_string()]);
            assert_eq!(
                connect_account(Some(&wallet), PLACEHOLDER_ACCOUNT).await,
                PLACEHOLDER_ACCOUNT
            );
        }
    }

    #[test]
    fn test_primary_account_errors() {
        assert_eq!(primary_account(Vec::new()), Err(WalletError::NoAccounts));
        assert_eq!(primary_account(vec![" ".to_string()]), Err(WalletError::NoAccounts));
        assert_eq!(primary_account(vec![" 0xaaa ".to_string()]), Ok("0xaaa".to_string()));
    }
}
