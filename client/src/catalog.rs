//! Fixed project catalog shown in the projects grid and the details overlay.
//!
//! Records are addressed by position. The number of "View Details" buttons is
//! derived from this list, so an out-of-range index is a programming error and
//! panics instead of substituting data.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

/// One entry in the project catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub details: &'static str,
}

const PROJECTS: [ProjectRecord; 4] = [
    ProjectRecord {
        title: "Enterprise Sales Cloud Implementation",
        description: "Led complete Sales Cloud transformation for Fortune 500 company with advanced automation and microservices integration",
        duration: "8 months",
        technologies: &["Sales Cloud", "APEX", "LWC", "Microservices", "REST APIs"],
        achievements: &[
            "40% increase in sales productivity",
            "Automated 80% of manual processes",
            "Implemented scalable microservices architecture",
            "Enhanced data accuracy by 95%",
        ],
        details: "This comprehensive project involved redesigning the entire sales process for a Fortune 500 company. We implemented advanced lead scoring algorithms, automated opportunity management workflows, and integrated with multiple external systems through custom REST APIs. The microservices architecture ensures scalability and maintainability.",
    },
    ProjectRecord {
        title: "Multi-Cloud Integration Platform",
        description: "Designed and implemented seamless integration between Sales, Service, and Commerce clouds with custom Lightning components",
        duration: "6 months",
        technologies: &["Multi-Cloud", "LWC", "Platform Events", "APIs", "Integration"],
        achievements: &[
            "Unified customer experience across clouds",
            "Real-time data synchronization",
            "50% reduction in system maintenance",
            "Enhanced security with Lightning Web Security",
        ],
        details: "Built a comprehensive integration platform connecting Sales Cloud, Service Cloud, and Commerce Cloud. Utilized Platform Events for real-time communication and custom Lightning Web Components for unified user interfaces. Implemented robust error handling and monitoring systems.",
    },
    ProjectRecord {
        title: "Community Cloud Portal with Advanced Security",
        description: "Built secure, scalable customer portal with advanced authentication and role-based access control",
        duration: "4 months",
        technologies: &["Community Cloud", "LWS", "Single Sign-On", "APEX", "Security"],
        achievements: &[
            "10,000+ active users",
            "99.9% uptime achievement",
            "Advanced security implementation",
            "Mobile-responsive design",
        ],
        details: "Developed a customer self-service portal with advanced security features including multi-factor authentication, role-based permissions, and Lightning Web Security. The portal handles over 10,000 concurrent users with high performance and reliability.",
    },
    ProjectRecord {
        title: "eCommerce Platform with Microservices",
        description: "Developed complete B2B eCommerce solution with microservices architecture for scalability and performance",
        duration: "10 months",
        technologies: &["Commerce Cloud", "Microservices", "Payment APIs", "Inventory Management"],
        achievements: &[
            "300% increase in order processing speed",
            "Scalable architecture supporting 100k+ products",
            "Seamless payment gateway integration",
            "Real-time inventory management",
        ],
        details: "Created a comprehensive B2B eCommerce platform with microservices architecture. Integrated multiple payment gateways, implemented real-time inventory management, and built custom pricing engines. The platform handles complex B2B scenarios including contract pricing and bulk orders.",
    },
];

/// Number of records in the catalog.
#[must_use]
pub const fn len() -> usize {
    PROJECTS.len()
}

/// All records in catalog order.
#[must_use]
pub fn all() -> &'static [ProjectRecord] {
    &PROJECTS
}

/// Record at `index`.
///
/// # Panics
///
/// Panics when `index >= len()`.
#[must_use]
pub fn get(index: usize) -> &'static ProjectRecord {
    assert!(index < len(), "project index {index} out of range (catalog has {} records)", len());
    &PROJECTS[index]
}
