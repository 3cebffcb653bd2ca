//! The portfolio's hardcoded content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub description: String,
    pub subjects: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percent, 0..=100.
    pub proficiency: u8,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub color: String,
    pub position: [f64; 3],
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub year: String,
    pub status: String,
    pub color: String,
    pub position: [f64; 3],
    pub features: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub kind: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub skills: Vec<String>,
    pub position: [f64; 3],
    pub color: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    pub availability: String,
    pub resume_path: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, proficiency: u8, experience: &str) -> Skill {
    Skill {
        name: name.into(),
        proficiency,
        experience: experience.into(),
    }
}

pub(crate) fn education() -> Vec<Education> {
    vec![
        Education {
            id: "muscat".into(),
            institution: "Indian School Muscat".into(),
            location: "Muscat, Oman".into(),
            degree: "Higher Secondary Education".into(),
            period: "2018-2019".into(),
            grade: Some("79.4%".into()),
            status: None,
            description: "Higher secondary education in Oman with an international cohort.".into(),
            subjects: strings(&["Mathematics", "Physics", "Chemistry", "Computer Science"]),
            achievements: strings(&["Academic Excellence", "Cultural Exchange Program"]),
        },
        Education {
            id: "canacona".into(),
            institution: "Government Higher Secondary School".into(),
            location: "Canacona, Goa, India".into(),
            degree: "Pre-University Course".into(),
            period: "2020-2021".into(),
            grade: Some("69%".into()),
            status: None,
            description: "Pre-university education in Goa, preparing for engineering entrance examinations.".into(),
            subjects: strings(&["Physics", "Chemistry", "Mathematics", "Biology", "Computer Science"]),
            achievements: strings(&["Engineering Entrance Preparation", "State Board Curriculum"]),
        },
        Education {
            id: "gce".into(),
            institution: "Goa College of Engineering".into(),
            location: "Farmagudi, Ponda, Goa, India".into(),
            degree: "Bachelor of Engineering in Computer Engineering".into(),
            period: "2021-2025".into(),
            grade: None,
            status: Some("Final Year Student".into()),
            description: "Computer Engineering with a focus on database systems, web development and UI/UX design.".into(),
            subjects: strings(&[
                "Database Management Systems",
                "Web Technologies",
                "Software Engineering",
                "Human-Computer Interaction",
                "Network Security",
            ]),
            achievements: strings(&["Academic Project Leadership", "Industry Exposure"]),
        },
    ]
}

pub(crate) fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: "webProgramming".into(),
            title: "Web & Programming".into(),
            color: "#3b82f6".into(),
            position: [-4.0, 2.0, 0.0],
            skills: vec![
                skill("HTML", 90, "3+ years"),
                skill("CSS", 85, "3+ years"),
                skill("JavaScript", 80, "2+ years"),
                skill("PHP", 85, "2+ years"),
                skill("SQL", 80, "2+ years"),
                skill("jQuery", 75, "1+ years"),
            ],
        },
        SkillCategory {
            id: "backendApis".into(),
            title: "Backend & APIs".into(),
            color: "#10b981".into(),
            position: [4.0, 2.0, 0.0],
            skills: vec![
                skill("MySQL", 85, "2+ years"),
                skill("CRUD Operations", 90, "2+ years"),
                skill("RESTful APIs", 75, "1+ years"),
                skill("AJAX", 70, "1+ years"),
            ],
        },
        SkillCategory {
            id: "toolsPlatforms".into(),
            title: "Tools & Platforms".into(),
            color: "#f59e0b".into(),
            position: [-4.0, -2.0, 0.0],
            skills: vec![
                skill("Git", 80, "2+ years"),
                skill("GitHub", 85, "2+ years"),
                skill("VS Code", 90, "3+ years"),
                skill("Linux", 70, "1+ years"),
            ],
        },
        SkillCategory {
            id: "designDevelopment".into(),
            title: "Design & Development".into(),
            color: "#8b5cf6".into(),
            position: [4.0, -2.0, 0.0],
            skills: vec![
                skill("UI/UX Design", 85, "2+ years"),
                skill("Figma", 90, "2+ years"),
                skill("Responsive Design", 85, "2+ years"),
                skill("Bootstrap", 80, "2+ years"),
                skill("Wireframing", 85, "2+ years"),
                skill("Prototyping", 85, "2+ years"),
            ],
        },
    ]
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "dams".into(),
            title: "DAMS - Departmental Asset Management System".into(),
            description: "Digitized procurement, inventory, maintenance and disposal across a college department, with OTP login, role-based dashboards and multi-level approvals.".into(),
            technologies: strings(&["PHP", "MySQL", "HTML/CSS", "JavaScript", "Bootstrap", "AJAX"]),
            category: "Web Application".into(),
            year: "2024".into(),
            status: "Completed".into(),
            color: "#3b82f6".into(),
            position: [-4.0, 0.0, 0.0],
            features: strings(&[
                "OTP-Secured Authentication System",
                "Role-Based Dashboard Management",
                "Multi-Level Approval Workflows",
                "PDF Report Generation",
                "Comprehensive Audit Trail Logging",
            ]),
            images: strings(&[
                "/images/projects/dams/dashboard.jpg",
                "/images/projects/dams/inventory.jpg",
                "/images/projects/dams/procurement.jpg",
                "/images/projects/dams/approval.jpg",
                "/images/projects/dams/reports.jpg",
            ]),
        },
        Project {
            id: "puregleam".into(),
            title: "PureGleam - Dental Clinic Management".into(),
            description: "Responsive web application for dental clinics with service listings, patient reviews, appointment booking and email notifications.".into(),
            technologies: strings(&["PHP", "MySQL", "HTML/CSS", "Bootstrap", "JavaScript", "Email APIs"]),
            category: "Healthcare Web App".into(),
            year: "2023".into(),
            status: "Completed".into(),
            color: "#10b981".into(),
            position: [0.0, 0.0, 0.0],
            features: strings(&[
                "Online Appointment Booking",
                "Patient Review System",
                "Automated Email Notifications",
                "Treatment History Tracking",
            ]),
            images: strings(&[
                "/images/projects/puregleam/homepage.jpg",
                "/images/projects/puregleam/services.jpg",
                "/images/projects/puregleam/booking.jpg",
                "/images/projects/puregleam/reviews.jpg",
                "/images/projects/puregleam/dashboard.jpg",
            ]),
        },
        Project {
            id: "cricket-gear".into(),
            title: "Cricket Gear Hub - E-commerce App Design".into(),
            description: "Complete e-commerce mobile app UI/UX with 200+ wireframes and interactive Figma prototypes.".into(),
            technologies: strings(&["Figma", "UI/UX Design", "Wireframing", "Prototyping", "User Research"]),
            category: "Mobile App Design".into(),
            year: "2024".into(),
            status: "Design Completed".into(),
            color: "#f59e0b".into(),
            position: [4.0, 0.0, 0.0],
            features: strings(&[
                "User Research across 3 User Types",
                "200+ Detailed Wireframes",
                "Complete Component Library",
                "Mobile-First Design Approach",
            ]),
            images: strings(&[
                "/images/projects/cricket_gear/wireframes.jpg",
                "/images/projects/cricket_gear/homepage.jpg",
                "/images/projects/cricket_gear/product.jpg",
                "/images/projects/cricket_gear/cart.jpg",
                "/images/projects/cricket_gear/components.jpg",
            ]),
        },
    ]
}

pub(crate) fn internship() -> Internship {
    Internship {
        company: "Fluxatic Global".into(),
        role: "UI/UX Designer".into(),
        duration: "June 2024 - August 2024".into(),
        location: "Remote".into(),
        kind: "Summer Internship".into(),
        description: "Designed the CricketGear Hub e-commerce app: user research, 200+ wireframes, Figma prototypes and a component library.".into(),
        responsibilities: strings(&[
            "Conducted user research for customers, sellers and admins",
            "Created 200+ wireframes covering all user journeys",
            "Built interactive Figma prototypes",
            "Built a reusable component library and brand identity system",
            "Ran usability testing sessions and iterated on feedback",
        ]),
        achievements: strings(&[
            "Delivered all wireframes on schedule",
            "Design system adopted by the development team",
            "Reduced design handoff time by 40%",
        ]),
    }
}

fn certificate(
    id: &str,
    title: &str,
    description: &str,
    skills: &[&str],
    position: [f64; 3],
    color: &str,
    image: &str,
) -> Certificate {
    Certificate {
        id: id.into(),
        title: title.into(),
        issuer: "NPTEL".into(),
        date: "2024".into(),
        description: description.into(),
        skills: strings(skills),
        position,
        color: color.into(),
        image: image.into(),
        credential_url: None,
    }
}

pub(crate) fn certificates() -> Vec<Certificate> {
    vec![
        certificate(
            "hci",
            "Human-Computer Interaction",
            "User interface design principles, usability evaluation and human factors in computing.",
            &["UI/UX Design", "Usability Testing", "User Research", "Interface Design"],
            [-3.0, 1.5, 0.0],
            "#3b82f6",
            "/images/certificates/hci_nptel.jpg",
        ),
        certificate(
            "social_network",
            "Social Network Analysis",
            "Analysis of social networks, graph theory applications and network visualization.",
            &["Network Analysis", "Graph Theory", "Data Visualization", "Algorithm Design"],
            [3.0, 1.5, 0.0],
            "#10b981",
            "/images/certificates/social_network_nptel.jpg",
        ),
        certificate(
            "leadership",
            "Leadership and Team Effectiveness",
            "Leadership skills, team dynamics and communication in professional environments.",
            &["Leadership", "Team Management", "Communication", "Project Coordination"],
            [-3.0, -1.5, 0.0],
            "#f59e0b",
            "/images/certificates/leadership_nptel.jpg",
        ),
        certificate(
            "privacy_security",
            "Privacy and Security in Online Social Media",
            "Privacy concerns, security measures and ethics on social media platforms.",
            &["Cybersecurity", "Privacy Protection", "Social Media Ethics", "Data Security"],
            [3.0, -1.5, 0.0],
            "#8b5cf6",
            "/images/certificates/privacy_security_nptel.jpg",
        ),
    ]
}

pub(crate) fn contact() -> ContactInfo {
    ContactInfo {
        name: "Shreyash Desai".into(),
        role: "Computer Engineering Student".into(),
        phone: "+91 7666987026".into(),
        email: "shreyashdesai60@gmail.com".into(),
        location: "Shantinagar, Ponda, Goa, India".into(),
        github: "https://github.com/shreyashdesai".into(),
        linkedin: None,
        availability: "Available for internships and project collaborations".into(),
        resume_path: "/resume/Shreyash_Desai_Resume.pdf".into(),
    }
}
