/// User-agent tokens that mark a mobile browser, matched case-insensitively.
const MOBILE_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify a page load by its user-agent.
    ///
    /// No user-agent means Desktop: a desktop load is redirected to the
    /// interstitial instead of being shown wallet deep links.
    pub fn classify(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return DeviceClass::Desktop;
        };

        let ua = ua.to_ascii_lowercase();
        if MOBILE_TOKENS.iter().any(|t| ua.contains(t)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}
