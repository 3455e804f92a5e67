//! Static page catalog: the display data every content route hands to its
//! template. Plain data, no behavior beyond the blog lookup.

pub struct FeaturedService {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const FEATURED_SERVICES: &[FeaturedService] = &[
    FeaturedService {
        name: "Mobile Applications",
        icon: "mobile-alt",
        url: "/mobile-app-development",
        description: "Native iOS & Android apps",
    },
    FeaturedService {
        name: "Web Applications",
        icon: "globe",
        url: "/web-application-development",
        description: "Modern scalable platforms",
    },
    FeaturedService {
        name: "Graphic Design",
        icon: "paint-brush",
        url: "/graphic-design",
        description: "UI/UX & Branding",
    },
    FeaturedService {
        name: "Import/Export",
        icon: "ship",
        url: "/import-export",
        description: "Global trade logistics",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub detail: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2021",
        title: "Foundation",
        desc: "Established in India and Zambia, focusing on Enterprise Software and IT Infrastructure.",
        detail: "IT Division Launched",
    },
    Milestone {
        year: "2021",
        title: "Expansion",
        desc: "Opened our Lusaka, Zambia HQ to facilitate Import/Export corridors and local tech support.",
        detail: "Trade Division Launched",
    },
    Milestone {
        year: "2024",
        title: "Present",
        desc: "Growing as a 360\u{b0} partner for businesses looking to scale through AI and Global Trade.",
        detail: "Global Scale Achieved",
    },
];

pub struct Office {
    pub region: &'static str,
    pub city: &'static str,
    pub full_address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub division: &'static str,
    pub tags: &'static [&'static str],
}

pub const OFFICES: &[Office] = &[
    Office {
        region: "India",
        city: "Noida",
        full_address: "Sector 63, Noida, Uttar Pradesh 201301",
        phone: "+91 9027125341",
        email: "india@globaltechtrade.com",
        division: "IT Innovation Hub",
        tags: &["Mobile Apps", "Web Apps", "AI/ML"],
    },
    Office {
        region: "Zambia",
        city: "Lusaka",
        full_address: "Plot #10424/4, Cassanova Court, Chainama, Lusaka",
        phone: "+260 97 7588581",
        email: "africa@globaltechtrade.com",
        division: "Trade & Logistics Hub",
        tags: &["Customs", "Freight", "Logistics"],
    },
];

pub struct ItService {
    pub title: &'static str,
    pub desc: &'static str,
    pub link: &'static str,
    pub features: &'static [&'static str],
}

pub const IT_SERVICES: &[ItService] = &[
    ItService {
        title: "Mobile Applications",
        desc: "Native iOS & Android apps with exceptional user experiences and cutting-edge features.",
        link: "/mobile-app-development",
        features: &["iOS (Swift) & Android (Kotlin)", "Cross-platform (React Native)"],
    },
    ItService {
        title: "Web Applications",
        desc: "Scalable web solutions built with modern frameworks and cloud architecture.",
        link: "/web-application-development",
        features: &["React, Next.js, Vue.js", "Node.js, Python, PHP"],
    },
    ItService {
        title: "Graphic Design",
        desc: "Creative design solutions that make your brand stand out from the competition.",
        link: "/graphic-design",
        features: &["UI/UX Design", "Brand Identity"],
    },
];

pub const MOBILE_FEATURES: &[&str] = &[
    "Native iOS Development (Swift)",
    "Native Android Development (Kotlin)",
    "Cross-platform Solutions (React Native, Flutter)",
    "App Store & Google Play Deployment",
    "UI/UX Design for Mobile",
    "Push Notifications",
    "Offline Capability",
];

pub const WEB_FEATURES: &[&str] = &[
    "Modern Frontend Frameworks (React, Vue)",
    "Scalable Backend Architecture (Node, Python)",
    "Cloud Deployment (AWS, Azure)",
    "API Development & Integration",
    "Progressive Web Apps (PWA)",
    "Real-time Data Sync",
];

pub const DESIGN_SERVICES: &[&str] = &[
    "Logo & Brand Identity Design",
    "UI/UX Interface Design",
    "Marketing Materials & Brochures",
    "Social Media Graphics",
    "Packaging Design",
    "Corporate Presentation Design",
];

pub struct TradeRoute {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub transit_time: &'static str,
    pub efficiency: u8,
}

pub const TRADE_ROUTES: &[TradeRoute] = &[
    TradeRoute {
        id: "ROUTE_01",
        title: "India \u{2192} Africa Corridor",
        desc: "Primary flow for Pharmaceuticals, Industrial Machinery, Textiles, and Agri-tech.",
        transit_time: "18-22 Days",
        efficiency: 96,
    },
    TradeRoute {
        id: "ROUTE_02",
        title: "Africa \u{2192} India Corridor",
        desc: "Strategic export of raw minerals, precious metals, agricultural products, and gemstones.",
        transit_time: "20-24 Days",
        efficiency: 94,
    },
];

pub struct LogisticsService {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

pub const LOGISTICS_SERVICES: &[LogisticsService] = &[
    LogisticsService {
        title: "Customs Engineering",
        desc: "HS Code classification, duty optimization, and automated customs documentation.",
        tags: &["AI-Powered", "Real-time"],
    },
    LogisticsService {
        title: "Direct Sourcing",
        desc: "Connect directly with verified Tier-1 manufacturers in India for bulk procurement.",
        tags: &["Verified Partners", "Bulk Pricing"],
    },
    LogisticsService {
        title: "Multimodal Freight",
        desc: "Integrated Sea, Air, and Road transport with real-time GPS tracking.",
        tags: &["GPS Tracking", "Temperature Control"],
    },
    LogisticsService {
        title: "Smart Warehousing",
        desc: "Bonded warehousing in strategic transit hubs with digital inventory management.",
        tags: &["Bonded", "24/7 Security"],
    },
];

pub struct ServiceCategory {
    pub title: &'static str,
    pub desc: &'static str,
    pub url: &'static str,
    pub items: &'static [&'static str],
}

pub const SERVICE_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        title: "IT Solutions",
        desc: "Web, Mobile, and Cloud infrastructure for modern businesses.",
        url: "/it-solutions",
        items: &["Mobile Apps", "Web Apps", "Graphic Design"],
    },
    ServiceCategory {
        title: "Import/Export",
        desc: "Technology-powered global trade solutions connecting Africa and Asia.",
        url: "/import-export",
        items: &["Customs", "Freight", "Sourcing"],
    },
    ServiceCategory {
        title: "Company Management",
        desc: "Business registration, compliance, and operational support.",
        url: "/company-management",
        items: &["Registration", "Tax", "Payroll"],
    },
    ServiceCategory {
        title: "General Services",
        desc: "Procurement, logistics, and supply chain solutions.",
        url: "/general-services",
        items: &["Procurement", "Logistics", "Supply Chain"],
    },
];

pub const COMPANY_MANAGEMENT_SERVICES: &[&str] = &[
    "Business Registration & Incorporation",
    "Tax Registration & Compliance",
    "Work Permits & Visas",
    "Company Secretarial Services",
    "Accounting & Bookkeeping",
    "Payroll Management",
    "Regulatory Compliance",
];

pub struct GeneralServiceGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const GENERAL_SERVICE_GROUPS: &[GeneralServiceGroup] = &[
    GeneralServiceGroup {
        category: "Procurement",
        items: &["Industrial Equipment", "Office Supplies", "Raw Materials"],
    },
    GeneralServiceGroup {
        category: "Logistics",
        items: &["Transportation", "Warehousing", "Distribution"],
    },
    GeneralServiceGroup {
        category: "Supply Chain",
        items: &["Supplier Sourcing", "Quality Control", "Order Processing"],
    },
];

/// Options for the contact-form service dropdown.
pub const SERVICES_DROPDOWN: &[&str] = &[
    "IT Infrastructure & AI",
    "Import / Export Logistics",
    "Customs & Compliance",
    "Mobile Application Development",
    "Web Application Development",
    "Graphic Design Services",
    "Company Management",
    "General Services & Supply",
    "General Partnership",
];

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub published: &'static str,
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "india-africa-trade-corridor",
        title: "Inside the India-Africa Trade Corridor",
        published: "2024-11-18",
        excerpt: "Why the Noida-Lusaka axis has become one of the most efficient routes for pharmaceuticals and industrial machinery.",
        body: &[
            "The India-Africa corridor moves pharmaceuticals, industrial machinery, textiles and agri-tech on an 18 to 22 day cycle, and the margin between a profitable shipment and a write-off is almost always decided at customs.",
            "Our customs engineering practice classifies HS codes before cargo leaves the factory, which is the single biggest lever for duty optimization on this route.",
            "In the other direction, raw minerals and agricultural products flow from Lusaka to Indian processors, with bonded warehousing smoothing out seasonal spikes.",
        ],
    },
    BlogPost {
        slug: "choosing-native-vs-cross-platform",
        title: "Native or Cross-Platform? Choosing a Mobile Stack in 2024",
        published: "2024-09-02",
        excerpt: "Swift and Kotlin still win on polish, but React Native closes the gap for most business applications.",
        body: &[
            "For consumer products where animation fidelity and platform integration sell the app, we still recommend native Swift and Kotlin builds.",
            "For internal tools and most B2B products, a single React Native codebase ships in roughly half the calendar time and keeps two platforms in lockstep.",
            "The decision is rarely technical alone: it is about the team that will maintain the app after launch.",
        ],
    },
    BlogPost {
        slug: "bonded-warehousing-explained",
        title: "Bonded Warehousing, Explained for Importers",
        published: "2024-06-14",
        excerpt: "Deferring duty until goods leave the warehouse changes the cash-flow equation for mid-size importers.",
        body: &[
            "A bonded warehouse lets an importer store goods under customs control without paying duty until the goods are released into the local market.",
            "For mid-size importers on the Africa-India routes this converts a large upfront duty payment into a pay-as-you-sell schedule.",
            "Combined with digital inventory management, bonded storage also gives trading partners a live view of stock positions across hubs.",
        ],
    },
];

pub fn blog_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

/// Content routes enumerated in the sitemap, in display order.
pub const SITE_ROUTES: &[&str] = &[
    "/",
    "/about",
    "/services",
    "/it-solutions",
    "/mobile-app-development",
    "/web-application-development",
    "/graphic-design",
    "/import-export",
    "/company-management",
    "/general-services",
    "/blog",
    "/contact",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_lookup_finds_known_slugs() {
        for post in BLOG_POSTS {
            assert_eq!(blog_post(post.slug).unwrap().slug, post.slug);
        }
    }

    #[test]
    fn blog_lookup_misses_unknown_slugs() {
        assert!(blog_post("not-a-post").is_none());
    }

    #[test]
    fn every_sitemap_route_is_absolute() {
        for route in SITE_ROUTES {
            assert!(route.starts_with('/'));
        }
    }
}
