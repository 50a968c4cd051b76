//! Page-load state machine
//!
//! `Init -> Classifying -> { DesktopRedirecting | MobileRendering }`, where
//! `MobileRendering` waits on one metadata fetch and ends up `MetadataReady`
//! or `MetadataUnavailable`. Classification and planning are synchronous;
//! the fetch is the caller's job, its outcome is fed back through
//! [`RenderPlan::resolve`].

use serde_json::Value as JsonValue;

use crate::{extract_target, interstitial, strip_sentinel, ActionMetadata, DeviceClass, WalletLinks};

pub const MISSING_INPUT_MESSAGE: &str =
    "No URL parameter provided. Add ?url=yourEncodedUrl to the address.";

/// Outcome of classifying a page load, before any network traffic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Empty `url` (or just the sentinel). Terminal at any device class.
    MissingInput,
    /// Desktop: navigate to the interstitial. Terminal.
    Redirect { location: String },
    /// Mobile: render the wallet picker once metadata is settled.
    Render(RenderPlan),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    /// `url` parameter without the sentinel; deep links are built from it.
    pub clean_url: String,
    /// Endpoint serving the action JSON; the metadata fetch goes here.
    pub target_url: String,
}

impl Plan {
    pub fn new(raw_url: &str, device: DeviceClass) -> Self {
        let clean = strip_sentinel(raw_url);
        if clean.is_empty() {
            return Plan::MissingInput;
        }

        match device {
            DeviceClass::Desktop => Plan::Redirect {
                location: interstitial(clean),
            },
            DeviceClass::Mobile => Plan::Render(RenderPlan {
                clean_url: clean.to_string(),
                target_url: extract_target(clean),
            }),
        }
    }
}

impl RenderPlan {
    /// Settle the picker with the fetch outcome. Any failure only drops the
    /// metadata header; the picker itself is always produced.
    pub fn resolve<E>(self, fetched: Result<JsonValue, E>) -> LandingState {
        let metadata = match fetched {
            Ok(payload) => MetadataState::Ready(ActionMetadata::extract(&payload)),
            Err(_) => MetadataState::Unavailable,
        };

        LandingState::WalletPicker {
            links: WalletLinks::for_target(&self.clean_url),
            clean_url: self.clean_url,
            target_url: self.target_url,
            metadata,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataState {
    Ready(ActionMetadata),
    Unavailable,
}

/// Terminal state of a page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandingState {
    MissingInput,
    Redirecting {
        location: String,
    },
    WalletPicker {
        clean_url: String,
        target_url: String,
        links: WalletLinks,
        metadata: MetadataState,
    },
}

impl LandingState {
    /// Metadata for the document head; defaults unless the fetch succeeded.
    pub fn head_metadata(&self) -> ActionMetadata {
        match self {
            LandingState::WalletPicker {
                metadata: MetadataState::Ready(meta),
                ..
            } => meta.clone(),
            _ => ActionMetadata::default(),
        }
    }
}
