//! Static page copy outside the project catalog: navigation sections,
//! headline stats, skill levels, expertise domains, and contact channels.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A page section reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections in document order.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "expertise", label: "Expertise" },
    Section { id: "projects", label: "Projects" },
    Section { id: "skills", label: "Skills" },
    Section { id: "contact", label: "Contact" },
];

/// Headline number animated by the counter revealer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 12, suffix: "+", label: "Years Experience" },
    Stat { target: 85, suffix: "+", label: "Projects Delivered" },
    Stat { target: 14, suffix: "", label: "Salesforce Certifications" },
    Stat { target: 98, suffix: "%", label: "Client Satisfaction" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Fill percentage written to `data-skill`.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Platform",
        skills: &[
            Skill { name: "Sales Cloud", level: 95 },
            Skill { name: "Service Cloud", level: 90 },
            Skill { name: "Commerce Cloud", level: 85 },
            Skill { name: "Community Cloud", level: 88 },
        ],
    },
    SkillCategory {
        title: "Development",
        skills: &[
            Skill { name: "APEX", level: 92 },
            Skill { name: "Lightning Web Components", level: 90 },
            Skill { name: "REST & Platform Events", level: 87 },
            Skill { name: "Microservices", level: 80 },
        ],
    },
    SkillCategory {
        title: "Architecture",
        skills: &[
            Skill { name: "Solution Design", level: 94 },
            Skill { name: "Integration Patterns", level: 91 },
            Skill { name: "Security & LWS", level: 86 },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const DOMAINS: &[Domain] = &[
    Domain {
        icon: "\u{2601}\u{fe0f}",
        title: "Multi-Cloud Architecture",
        summary: "Sales, Service, and Commerce clouds designed as one customer platform.",
    },
    Domain {
        icon: "\u{1f517}",
        title: "Enterprise Integration",
        summary: "Event-driven and API-led integration with external systems of record.",
    },
    Domain {
        icon: "\u{1f6e1}\u{fe0f}",
        title: "Security & Governance",
        summary: "Lightning Web Security, SSO, and role-based access at portal scale.",
    },
    Domain {
        icon: "\u{2699}\u{fe0f}",
        title: "Automation",
        summary: "Flow and APEX automation that removes manual sales operations work.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "\u{2709}\u{fe0f}",
        label: "Email",
        value: "architect@example.com",
        href: "mailto:architect@example.com",
    },
    ContactChannel {
        icon: "\u{1f4bc}",
        label: "LinkedIn",
        value: "linkedin.com/in/sf-architect",
        href: "https://www.linkedin.com/in/sf-architect",
    },
    ContactChannel {
        icon: "\u{1f4cd}",
        label: "Location",
        value: "Remote, worldwide",
        href: "#contact",
    },
];
