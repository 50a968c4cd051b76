use blink::{
    extract_target, interstitial, normalize, strip_sentinel, ActionMetadata, DeviceClass,
    LandingState, MetadataState, Plan, WalletTarget,
};
use serde_json::json;

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const WINDOWS_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

#[test]
fn test_desktop_load_redirects_only() {
    let device = DeviceClass::classify(Some(WINDOWS_UA));
    let plan = Plan::new("Asolana-action:https://example.com/action", device);

    assert_eq!(
        plan,
        Plan::Redirect {
            location: "https://dial.to/?action=solana-action:https://example.com/action".into()
        }
    );
}

#[test]
fn test_mobile_load_with_failed_fetch_shows_both_wallets() {
    let device = DeviceClass::classify(Some(IPHONE_UA));
    let Plan::Render(plan) = Plan::new("Asolana-action:https://example.com/action", device) else {
        panic!("mobile load must render");
    };

    let state = plan.resolve(Err("connection refused"));
    let LandingState::WalletPicker { links, metadata, .. } = state else {
        panic!("expected wallet picker");
    };

    assert_eq!(metadata, MetadataState::Unavailable);
    assert!(links
        .get(WalletTarget::Phantom)
        .unwrap()
        .starts_with("https://phantom.app/ul/browse/"));
    assert!(links
        .get(WalletTarget::Solflare)
        .unwrap()
        .starts_with("https://solflare.com/ul/browse/"));
}

#[test]
fn test_mobile_load_with_wrapped_api_url() {
    let api = "https://api.example.com/donate?to=abc";
    let raw = format!("Ahttps://dial.to/?apiUrl={}", urlencoding::encode(api));
    let Plan::Render(plan) = Plan::new(&raw, DeviceClass::Mobile) else {
        panic!("mobile load must render");
    };
    assert_eq!(plan.target_url, api);

    let state = plan.resolve::<()>(Ok(json!({
        "icon": "https://api.example.com/icon.png",
        "title": "Donate",
        "description": "Send a tip",
        "label": "Tip"
    })));

    assert_eq!(
        state.head_metadata(),
        ActionMetadata {
            title: "Donate".into(),
            description: "Send a tip".into(),
            image: "https://api.example.com/icon.png".into(),
            site_name: "Dial.to".into(),
        }
    );
}

#[test]
fn test_missing_input_never_plans_work() {
    for ua in [Some(IPHONE_UA), Some(WINDOWS_UA), None] {
        assert_eq!(Plan::new("", DeviceClass::classify(ua)), Plan::MissingInput);
    }
}

#[test]
fn test_unwrapper_properties() {
    for s in ["abc", "https://x.test", "", "solana-action:https://a.test"] {
        assert_eq!(strip_sentinel(s), s);
    }

    let wrapped = format!(
        "https://x.test/?apiUrl={}",
        urlencoding::encode("https://y.test/a")
    );
    assert_eq!(extract_target(&wrapped), "https://y.test/a");
    assert_eq!(extract_target("https://x.test/plain"), "https://x.test/plain");
}

#[test]
fn test_normalize_feeds_interstitial() {
    let encoded = normalize("solana-action:https://example.com/action");
    assert_eq!(normalize(&encoded), encoded);
    assert_eq!(
        interstitial(&encoded),
        "https://dial.to/?action=solana-action%3Ahttps%3A%2F%2Fexample.com%2Faction"
    );
}
