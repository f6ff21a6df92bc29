//! Built-in seed content written on first run and returned on fallback.

use crate::models::{Project, ProjectCategory, Service};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn seed_project(
    id: i64,
    title: &str,
    category: ProjectCategory,
    image: &str,
    description: &str,
    tech_stack: &[&str],
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        category,
        tech_stack: strings(tech_stack),
        live_url: Some("#".to_string()),
        repo_url: Some("#".to_string()),
    }
}

fn seed_service(
    id: i64,
    title: &str,
    icon: &str,
    description: &str,
    features: &[&str],
    price: &str,
) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        price: price.to_string(),
        features: strings(features),
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        seed_project(
            1,
            "E-Commerce Platform",
            ProjectCategory::WebDevelopment,
            "https://images.unsplash.com/photo-1661956602116-aa6865609028?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "A full-featured online store with secure payments, user dashboard, and admin panel.",
            &["React", "Node.js", "MongoDB", "Stripe"],
        ),
        seed_project(
            2,
            "Cyber Threat Monitor",
            ProjectCategory::Cybersecurity,
            "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Real-time network traffic analysis tool for detecting potential security threats.",
            &["Python", "Wireshark", "React", "D3.js"],
        ),
        seed_project(
            3,
            "Task Automation Bot",
            ProjectCategory::SystemAutomation,
            "https://images.unsplash.com/photo-1518770660439-4636190af475?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Automated workflow system for processing invoices and updating database records.",
            &["Python", "Selenium", "Docker", "AWS"],
        ),
        seed_project(
            4,
            "Health Tracking App",
            ProjectCategory::MobileApp,
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Cross-platform mobile application for tracking daily fitness activities and diet.",
            &["React Native", "Firebase", "Redux"],
        ),
    ]
}

pub fn default_services() -> Vec<Service> {
    vec![
        seed_service(
            1,
            "Full-Stack Web Development",
            "web",
            "Custom, responsive, and high-performance websites built with modern technologies like React, Next.js, and Node.js.",
            &["Responsive Design", "SEO Optimization", "Fast Loading", "Secure Backend"],
            "Start from $500",
        ),
        seed_service(
            2,
            "Cybersecurity Solutions",
            "security",
            "Comprehensive security audits, vulnerability assessments, and secure system architecture design.",
            &["Penetration Testing", "Security Audits", "Compliance", "Secure Coding"],
            "Start from $800",
        ),
        seed_service(
            3,
            "Mobile App Development",
            "mobile",
            "Native and cross-platform mobile applications for iOS and Android using React Native.",
            &["iOS & Android", "Smooth UI/UX", "Cloud Sync", "Push Notifications"],
            "Start from $1000",
        ),
        seed_service(
            4,
            "System Automation",
            "automation",
            "Automating repetitive tasks and workflows to increase business efficiency and reduce errors.",
            &["Workflow Automation", "Data Scraping", "Bot Development", "API Integration"],
            "Start from $300",
        ),
        seed_service(
            5,
            "Custom Software Solutions",
            "software",
            "Tailor-made software applications to solve specific business problems and improve productivity.",
            &["Desktop Apps", "Enterprise Systems", "Database Design", "Maintenance"],
            "Start from $1500",
        ),
        seed_service(
            6,
            "IT Consulting",
            "consulting",
            "Professional advice on technology strategy, infrastructure, and digital transformation.",
            &["Tech Strategy", "Infrastructure", "Cloud Migration", "Training"],
            "Hourly Rates",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceIcon;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let project_ids: HashSet<_> = default_projects().iter().map(|p| p.id).collect();
        assert_eq!(project_ids.len(), 4);

        let service_ids: HashSet<_> = default_services().iter().map(|s| s.id).collect();
        assert_eq!(service_ids.len(), 6);
    }

    #[test]
    fn test_seed_services_cover_every_icon() {
        let icons: HashSet<_> = default_services()
            .iter()
            .filter_map(|s| ServiceIcon::from_key(&s.icon))
            .collect();
        assert_eq!(icons.len(), ServiceIcon::ALL.len());
    }
}
