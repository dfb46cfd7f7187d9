//! The fixed, process-wide catalog of categories and search shortcuts.

use crate::models::CategoryDescriptor;

pub const CATEGORIES: [CategoryDescriptor; 10] = [
    CategoryDescriptor {
        id: "ai",
        name: "Generative AI",
        description: "The Hype Cycle: Excessive burn rates and lack of moats.",
        focus: "Unit Economics & Hype",
    },
    CategoryDescriptor {
        id: "fintech",
        name: "FinTech",
        description: "When the cost of compliance outpaced the speed of innovation.",
        focus: "Regulation & Capital",
    },
    CategoryDescriptor {
        id: "climate",
        name: "Climate Tech",
        description: "Green Premiums and the difficulty of scaling hardware.",
        focus: "Capital Intensity & Physics",
    },
    CategoryDescriptor {
        id: "saas",
        name: "SaaS",
        description: "The silent killers: Churn, CAC, and market saturation.",
        focus: "Churn & Saturation",
    },
    CategoryDescriptor {
        id: "hardware",
        name: "Hardware",
        description: "Hardware is hard. Supply chains break and margins vanish.",
        focus: "Unit Economics",
    },
    CategoryDescriptor {
        id: "metaverse",
        name: "Metaverse & VR",
        description: "Virtual ghost towns and timing the market too early.",
        focus: "Adoption & Utility",
    },
    CategoryDescriptor {
        id: "social",
        name: "Social Media",
        description: "The fight for attention spans in a crowded dopamine market.",
        focus: "Retention & Monetization",
    },
    CategoryDescriptor {
        id: "edtech",
        name: "EdTech",
        description: "Scaling quality education against long sales cycles.",
        focus: "Sales Cycles & LTV",
    },
    CategoryDescriptor {
        id: "biotech",
        name: "BioTech",
        description: "High risk, high reward, and the \"Valley of Death\".",
        focus: "Clinical Trials & Funding",
    },
    CategoryDescriptor {
        id: "crypto",
        name: "Crypto & Web3",
        description: "Volatility, governance failures, and security breaches.",
        focus: "Trust & Security",
    },
];

/// One-press searches offered under the landing search input
pub const QUICK_TAGS: [&str; 4] = ["AI Wearables", "Vertical Farming", "Neobanks", "Micro-mobility"];

/// Suggestions listed in the search palette
pub const TRENDING_SECTORS: [&str; 5] = [
    "BNPL (Buy Now Pay Later)",
    "Cloud Kitchens",
    "NFT Marketplaces",
    "Autonomous Trucking",
    "15-minute Delivery",
];

/// Look up a category by id, ignoring ASCII case
pub fn find_category(id: &str) -> Option<&'static CategoryDescriptor> {
    let id = id.trim();
    CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}
