use crate::icons::IconId;
use crate::Route;

pub const COMPANY_NAME: &str = "Subtropic Technologies";
pub const TAGLINE: &str = "Delivered. Operational. Scalable.";
pub const PITCH: &str = "Transforming ideas into robust, scalable solutions through expert consulting, seamless development, and reliable infrastructure management.";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/hughesjesse";
pub const GITHUB_URL: &str = "https://github.com/Jesse-Lee-Hughes";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Services,
    About,
    CaseStudies,
}

impl SectionKey {
    pub const ALL: [SectionKey; 3] = [SectionKey::Services, SectionKey::About, SectionKey::CaseStudies];

    pub fn slug(self) -> &'static str {
        match self {
            SectionKey::Services => "services",
            SectionKey::About => "about",
            SectionKey::CaseStudies => "case-studies",
        }
    }

    pub fn route(self) -> Route {
        match self {
            SectionKey::Services => Route::Services,
            SectionKey::About => Route::About,
            SectionKey::CaseStudies => Route::CaseStudies,
        }
    }

    /// Browser tab title for the view.
    pub fn page_title(self) -> &'static str {
        match self {
            SectionKey::Services => "Services | Subtropic Technologies",
            SectionKey::About => "About Subtropic Technologies",
            SectionKey::CaseStudies => "Case Studies | Subtropic Technologies",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ContentItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
    pub details: &'static [&'static str],
}

impl ContentItem {
    /// Long detail lists are laid out in two columns.
    pub fn wide_details(&self) -> bool {
        self.details.len() > 4
    }
}

#[derive(Debug, PartialEq)]
pub struct ContentSection {
    pub key: SectionKey,
    pub label: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub items: &'static [ContentItem],
}

impl ContentSection {
    pub fn item(&self, id: &str) -> Option<&'static ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Grid order: the expanded tile first, everything else as authored.
    pub fn ordered_items(&self, expanded: Option<&str>) -> Vec<&'static ContentItem> {
        let items = self.items;
        match expanded.and_then(|id| self.item(id)) {
            Some(first) => std::iter::once(first)
                .chain(items.iter().filter(|item| item.id != first.id))
                .collect(),
            None => items.iter().collect(),
        }
    }
}

pub fn section(key: SectionKey) -> &'static ContentSection {
    CONTENT_SECTIONS
        .iter()
        .find(|section| section.key == key)
        .unwrap_or(&CONTENT_SECTIONS[0])
}

pub static CONTENT_SECTIONS: [ContentSection; 3] = [
    ContentSection {
        key: SectionKey::Services,
        label: "Services",
        heading: "Our Services",
        subheading: "Tailored solutions, expertly delivered.",
        items: &[
            ContentItem {
                id: "services-consulting",
                title: "Consulting",
                description: "Expert guidance on technology strategy, architecture, and implementation.",
                icon: IconId::Sparkle,
                details: &[
                    "Technology strategy development",
                    "Architecture design and review",
                    "Technical due diligence",
                    "Process optimization",
                    "Team structure and scaling advice",
                    "Product development",
                ],
            },
            ContentItem {
                id: "services-ai-integrations",
                title: "AI System Integrations",
                description: "Integrate AI systems into your existing applications and infrastructure.",
                icon: IconId::BrainCircuit,
                details: &[
                    "Agentic AI development",
                    "LLM integration and fine-tuning",
                    "AI model deployment and scaling",
                    "Custom AI solution development",
                    "Existing system enhancement with AI",
                    "AI infrastructure optimization",
                ],
            },
            ContentItem {
                id: "services-website-development",
                title: "Website Development",
                description: "Modern, responsive, and performant web applications built with cutting-edge technologies.",
                icon: IconId::LayoutTemplate,
                details: &[
                    "Full-stack web application development",
                    "Progressive Web Apps (PWA)",
                    "E-commerce solutions",
                    "API development and integration",
                    "Performance optimization",
                    "Chatbot integration",
                    "SASS product integration (Shopify, Calendly, etc.)",
                ],
            },
            ContentItem {
                id: "services-infrastructure-management",
                title: "Infrastructure Management",
                description: "Robust cloud infrastructure setup and management for optimal performance.",
                icon: IconId::HardDrive,
                details: &[
                    "Cloud architecture design",
                    "Infrastructure as Code (IaC)",
                    "DevOps implementation",
                    "Monitoring and alerting setup",
                    "Cost optimization",
                ],
            },
            ContentItem {
                id: "services-security-assessments",
                title: "Security Assessments",
                description: "Comprehensive security reviews and vulnerability assessments.",
                icon: IconId::EarthLock,
                details: &[
                    "Security architecture review",
                    "Vulnerability assessment",
                    "Penetration testing",
                    "Security compliance review",
                    "Security best practices implementation",
                ],
            },
            ContentItem {
                id: "services-application-enhancement",
                title: "Application Enhancement",
                description: "Improve and optimize your existing applications for better performance and user experience.",
                icon: IconId::Construction,
                details: &[
                    "Performance optimization",
                    "Code refactoring",
                    "Technical debt reduction",
                    "Feature enhancement",
                    "Legacy system modernization",
                ],
            },
        ],
    },
    ContentSection {
        key: SectionKey::About,
        label: "About Us",
        heading: "About Subtropic",
        subheading: "Accelerating teams with practical engineering leadership.",
        items: &[
            ContentItem {
                id: "about-story",
                title: "Our Story",
                description: "A team of builders focused on helping companies deliver faster with fewer surprises.",
                icon: IconId::Users,
                details: &[
                    "15+ years of shipping production software",
                    "Experience from seed startups to the enterprise",
                    "Embedded partnership mindset",
                    "Remote-first with global reach",
                ],
            },
            ContentItem {
                id: "about-approach",
                title: "How We Work",
                description: "Outcome-oriented engagements that balance velocity with maintainability.",
                icon: IconId::Sparkle,
                details: &[
                    "Discovery to align strategy and execution",
                    "Transparent project health reporting",
                    "Hands-on collaboration with your team",
                    "Seasoned practitioners, not consultants",
                ],
            },
            ContentItem {
                id: "about-expertise",
                title: "Core Expertise",
                description: "Battle-tested in modern web, cloud, and AI-enabled systems.",
                icon: IconId::BrainCircuit,
                details: &[
                    "Full-stack TypeScript product teams",
                    "Edge and serverless architectures",
                    "LLM and agentic workflows",
                    "Cloud cost optimization playbooks",
                ],
            },
        ],
    },
    ContentSection {
        key: SectionKey::CaseStudies,
        label: "Case Studies",
        heading: "Case Studies",
        subheading: "Real-world outcomes from recent partnerships.",
        items: &[
            ContentItem {
                id: "case-ops-automation",
                title: "Operations Automation",
                description: "Scaled a logistics platform by automating dispatch and compliance workflows.",
                icon: IconId::Building,
                details: &[
                    "90% reduction in manual dispatcher interventions",
                    "Near real-time fleet visibility dashboards",
                    "Stable integrations with incumbent ERP systems",
                    "Rollout completed without service disruption",
                ],
            },
            ContentItem {
                id: "case-ai-support",
                title: "AI Support Agents",
                description: "Embedded LLM-powered copilots into customer support queues.",
                icon: IconId::Sparkle,
                details: &[
                    "Deflected 40% of inbound requests",
                    "Improved CSAT scores within one quarter",
                    "Reduced handle time by 30%",
                    "Established continuous evaluation loops",
                ],
            },
            ContentItem {
                id: "case-commerce-rebuild",
                title: "Commerce Rebuild",
                description: "Replatformed a legacy storefront for a scaling D2C brand.",
                icon: IconId::LayoutTemplate,
                details: &[
                    "Headless commerce architecture on modern stack",
                    "Core web vitals improved across the board",
                    "Integrated subscription and loyalty programs",
                    "Delivered in time for launch with 0 downtime",
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_key_has_its_own_section() {
        for key in SectionKey::ALL {
            assert_eq!(section(key).key, key);
        }
    }

    #[test]
    fn item_ids_are_unique_across_sections() {
        let mut seen = HashSet::new();
        for item in CONTENT_SECTIONS.iter().flat_map(|s| s.items.iter()) {
            assert!(seen.insert(item.id), "duplicate item id {}", item.id);
        }
    }

    #[test]
    fn expanded_item_moves_to_front() {
        let services = section(SectionKey::Services);
        let ordered = services.ordered_items(Some("services-security-assessments"));

        assert_eq!(ordered.len(), services.items.len());
        assert_eq!(ordered[0].id, "services-security-assessments");
        let rest: Vec<_> = ordered[1..].iter().map(|item| item.id).collect();
        assert_eq!(
            rest,
            vec![
                "services-consulting",
                "services-ai-integrations",
                "services-website-development",
                "services-infrastructure-management",
                "services-application-enhancement",
            ]
        );
    }

    #[test]
    fn unknown_or_missing_expansion_keeps_authored_order() {
        let about = section(SectionKey::About);
        let authored: Vec<_> = about.items.iter().map(|item| item.id).collect();

        let none: Vec<_> = about.ordered_items(None).iter().map(|item| item.id).collect();
        let foreign: Vec<_> = about
            .ordered_items(Some("services-consulting"))
            .iter()
            .map(|item| item.id)
            .collect();

        assert_eq!(none, authored);
        assert_eq!(foreign, authored);
    }

    #[test]
    fn wide_details_only_past_four_entries() {
        let services = section(SectionKey::Services);
        assert!(services.item("services-consulting").unwrap().wide_details());
        let about = section(SectionKey::About);
        assert!(!about.item("about-story").unwrap().wide_details());
    }

    #[test]
    fn routes_round_trip_through_slugs() {
        for key in SectionKey::ALL {
            assert_eq!(key.route().section(), key);
            assert!(key.page_title().contains("Subtropic"));
        }
        assert_eq!(SectionKey::CaseStudies.slug(), "case-studies");
    }
}
