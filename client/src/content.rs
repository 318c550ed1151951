//! Static brand copy rendered by the site chrome.

pub const BRAND_NAME: &str = "NovoVentureCap";
pub const BRAND_DOMAIN: &str = "novovcap.com";

pub const FOOTER_BLURB: &str = "Professional investment management delivering consistent alpha through disciplined strategies \
and cutting-edge portfolio optimization. Trusted by institutions and high-net-worth individuals worldwide.";

pub const CONTACT_HEADQUARTERS: &str = "Global Headquarters";
pub const CONTACT_LOCATION: &str = "Financial District, NYC";
pub const CONTACT_PHONE: &str = "+1 (212) 555-0150";
pub const CONTACT_EMAIL: &str = "invest@novovcap.com";

pub const COPYRIGHT: &str = "\u{a9} 2024 NovoVentureCap. All rights reserved.";

pub const DISCLOSURES: [&str; 3] = [
    "SEC Registered Investment Adviser",
    "FINRA Member",
    "SIPC Protected",
];

pub const INVESTOR_LOGIN_LABEL: &str = "Investor Login";
