use std::{fmt, str::FromStr};

use thiserror::Error;

pub const INTERSTITIAL_PREFIX: &str = "https://dial.to/?action=";
pub const ACTION_SCHEME: &str = "solana-action:";
pub const REFERRER: &str = "https://dial.to";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown wallet: {0}")]
pub struct UnknownWallet(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalletTarget {
    Phantom,
    Solflare,
}

impl WalletTarget {
    pub const ALL: [WalletTarget; 2] = [WalletTarget::Phantom, WalletTarget::Solflare];

    pub fn domain(self) -> &'static str {
        match self {
            WalletTarget::Phantom => "phantom.app",
            WalletTarget::Solflare => "solflare.com",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WalletTarget::Phantom => "Phantom",
            WalletTarget::Solflare => "Solflare",
        }
    }

    pub fn logo_url(self) -> &'static str {
        match self {
            WalletTarget::Phantom => {
                "https://cdn.brandfetch.io/id_HKIytUb/theme/light/symbol.svg?c=1dxbfHSJFAPEGdCLU4o5B"
            }
            WalletTarget::Solflare => {
                "https://cdn.brandfetch.io/idtkbbbh-o/theme/dark/logo.svg?c=1dxbfHSJFAPEGdCLU4o5B"
            }
        }
    }
}

impl fmt::Display for WalletTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WalletTarget::Phantom => "phantom",
            WalletTarget::Solflare => "solflare",
        })
    }
}

impl FromStr for WalletTarget {
    type Err = UnknownWallet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phantom" => Ok(WalletTarget::Phantom),
            "solflare" => Ok(WalletTarget::Solflare),
            _ => Err(UnknownWallet(s.to_string())),
        }
    }
}

/// `https://dial.to/?action=<target>`. The target is used as given.
pub fn interstitial(target: &str) -> String {
    format!("{INTERSTITIAL_PREFIX}{target}")
}

/// Universal link that opens the interstitial inside the wallet's browser.
///
/// The whole `https://dial.to/?action=solana-action:<target>` URL is encoded
/// exactly once and becomes a single path segment of the wallet link.
pub fn wallet_deep_link(wallet: WalletTarget, target: &str) -> String {
    let embedded = format!("{INTERSTITIAL_PREFIX}{ACTION_SCHEME}{target}");
    format!(
        "https://{}/ul/browse/{}?ref={}",
        wallet.domain(),
        urlencoding::encode(&embedded),
        urlencoding::encode(REFERRER),
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletLink {
    pub wallet: WalletTarget,
    pub url: String,
}

/// Deep links for every supported wallet, in [`WalletTarget::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletLinks(pub Vec<WalletLink>);

impl WalletLinks {
    pub fn for_target(target: &str) -> Self {
        Self(
            WalletTarget::ALL
                .iter()
                .map(|&wallet| WalletLink {
                    wallet,
                    url: wallet_deep_link(wallet, target),
                })
                .collect(),
        )
    }

    pub fn get(&self, wallet: WalletTarget) -> Option<&str> {
        self.0
            .iter()
            .find(|l| l.wallet == wallet)
            .map(|l| l.url.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &WalletLink> {
        self.0.iter()
    }
}
