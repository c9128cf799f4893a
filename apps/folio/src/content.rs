//! The resume content record: a static, read-only structure loaded once at
//! startup. It backs the templated terminal commands and is serialized
//! verbatim into every outbound `ask` prompt.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub about: About,
    pub profile: Profile,
    pub experience: Experience,
    pub skills: Skills,
    pub languages: Languages,
    pub education: Education,
    pub contact: Contact,
    pub personal: Personal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub title: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Languages {
    pub title: String,
    pub items: Vec<LanguageItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageItem {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub title: String,
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
}

impl Content {
    /// The built-in resume record. Field-for-field the site content.
    pub fn builtin() -> Self {
        Content {
            about: About {
                title: "About Me".to_string(),
                paragraphs: vec![
                    "I am a passionate Engineering Group Manager with over a decade of \
                     experience in cloud infrastructure, cybersecurity, and backend product \
                     development. My journey in technology has been driven by a deep interest \
                     in building secure, scalable systems and leading high-performing \
                     engineering teams."
                        .to_string(),
                    "Throughout my career, I've focused on delivering innovative solutions \
                     that combine technical excellence with business value. I specialize in \
                     cloud security, distributed systems, and leading cross-functional teams \
                     to build products that make a real impact."
                        .to_string(),
                ],
            },
            profile: Profile {
                title: "Profile".to_string(),
                content: "Engineering Group Manager with 10+ years of experience in cloud \
                          infrastructure, cybersecurity, and backend product development. \
                          Proven success in leading cross-functional teams to build scalable, \
                          secure, and high-performing systems across multi-cloud environments \
                          (GCP, AWS, Azure). Passionate about learning, translating complex \
                          technical goals into tangible outcomes, mentoring leaders, and \
                          driving product strategy."
                    .to_string(),
            },
            experience: Experience {
                title: "Work Experience".to_string(),
                items: vec![
                    ExperienceItem {
                        title: "Group Manager – Quantum Spark".to_string(),
                        company: "Check Point Software Technologies".to_string(),
                        date: "Jul 2022 - Present".to_string(),
                        achievements: Some(vec![
                            "Led an engineering organization of 30 (across four teams) \
                             delivering cloud security with network security appliance, \
                             driving product line annual revenue growth from $60M to $100M \
                             within 2 years."
                                .to_string(),
                            "Spearheaded a backend redesign to a Go-based microservices \
                             architecture on Kubernetes, achieving substantial improvements \
                             in scalability and reliability to support millions of \
                             concurrent user sessions."
                                .to_string(),
                            "Delivered FIPS-compliant, secure VPN features across the cloud \
                             product suite, resulting in a 30% month-over-month increase in \
                             platform usage by enterprise customers."
                                .to_string(),
                            "Championed collaboration with IoT and SD-WAN teams to integrate \
                             network security capabilities into new offerings, expanding the \
                             platform's market reach and customer value."
                                .to_string(),
                            "Steered product roadmap planning and represented Engineering in \
                             executive forums, aligning technical initiatives with \
                             overarching business goals."
                                .to_string(),
                        ]),
                    },
                    ExperienceItem {
                        title: "Engineering Manager – Cloud Security".to_string(),
                        company: "Check Point Software Technologies".to_string(),
                        date: "Jan 2020 – Jul 2022".to_string(),
                        achievements: Some(vec![
                            "Managed 2 teams and their respective team leads (total 15 \
                             engineers) to deliver scalable and secure cloud-native services."
                                .to_string(),
                            "Led development of high-scale backend microservices in Go and \
                             C#, deployed across AWS, Azure, and GCP."
                                .to_string(),
                            "Drove architectural efforts focused on high availability using \
                             AWS Fargate, Lambda functions, and Linux-based auto-scaling \
                             containers."
                                .to_string(),
                            "Built and maintained resilient distributed systems to support \
                             mission-critical cloud workloads."
                                .to_string(),
                            "Designed and optimized data pipelines and observability tools \
                             using BigQuery and Elasticsearch."
                                .to_string(),
                        ]),
                    },
                    ExperienceItem {
                        title: "Senior Team Leader".to_string(),
                        company: "Safe-T Data".to_string(),
                        date: "Feb 2018 - Jan 2020".to_string(),
                        achievements: None,
                    },
                    ExperienceItem {
                        title: "Team Leader and Developer".to_string(),
                        company: "CyKick Labs".to_string(),
                        date: "Jun 2016 – Feb 2018".to_string(),
                        achievements: None,
                    },
                ],
            },
            skills: Skills {
                title: "Skills".to_string(),
                categories: vec![
                    SkillCategory {
                        title: "Languages".to_string(),
                        items: str_vec(&["Go", "C#", "C++", "Lua", "Python", "Bash"]),
                    },
                    SkillCategory {
                        title: "Cloud & Infrastructure".to_string(),
                        items: str_vec(&[
                            "GCP",
                            "AWS",
                            "Azure",
                            "Kubernetes",
                            "Docker",
                            "Serverless",
                        ]),
                    },
                    SkillCategory {
                        title: "Architecture".to_string(),
                        items: str_vec(&[
                            "Microservices",
                            "Distributed Systems",
                            "High-Scale Backend APIs",
                        ]),
                    },
                    SkillCategory {
                        title: "Security".to_string(),
                        items: str_vec(&[
                            "Cloud Security",
                            "OS Hardening",
                            "Reverse Proxy",
                            "FIPS",
                            "VPN",
                        ]),
                    },
                    SkillCategory {
                        title: "Data & Observability".to_string(),
                        items: str_vec(&[
                            "BigQuery",
                            "Elasticsearch",
                            "Redis",
                            "MongoDB",
                            "Postgres",
                        ]),
                    },
                    SkillCategory {
                        title: "Leadership".to_string(),
                        items: str_vec(&[
                            "Agile",
                            "Roadmap Ownership",
                            "Team Building",
                            "Strategic Planning",
                        ]),
                    },
                ],
            },
            languages: Languages {
                title: "Languages".to_string(),
                items: vec![
                    LanguageItem {
                        name: "English".to_string(),
                        level: "Fluent".to_string(),
                    },
                    LanguageItem {
                        name: "Hebrew".to_string(),
                        level: "Fluent".to_string(),
                    },
                ],
            },
            education: Education {
                title: "Education".to_string(),
                items: vec![
                    EducationItem {
                        degree: "Executive Master of Business Administration".to_string(),
                        institution: "Business Administration | Bar-Ilan University".to_string(),
                        date: "2024-2025".to_string(),
                    },
                    EducationItem {
                        degree: "B.Sc. Computer Software Engineering".to_string(),
                        institution: "College of Engineering | Afeka College".to_string(),
                        date: "2012-2016".to_string(),
                    },
                ],
            },
            contact: Contact {
                email: "gomri12@gmail.com".to_string(),
                phone: "050-3323352".to_string(),
                location: "Tel Aviv, Israel".to_string(),
                linkedin: "linkedin.com/in/omri-glam".to_string(),
            },
            personal: Personal {
                name: "Omri Glam".to_string(),
                title: "Engineering Group Manager".to_string(),
            },
        }
    }
}

fn str_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_sections() {
        let c = Content::builtin();
        assert_eq!(c.about.paragraphs.len(), 2);
        assert_eq!(c.experience.items.len(), 4);
        assert_eq!(c.skills.categories.len(), 6);
        assert_eq!(c.languages.items.len(), 2);
        assert_eq!(c.education.items.len(), 2);
        assert_eq!(c.personal.name, "Omri Glam");
    }

    #[test]
    fn test_serializes_with_expected_keys() {
        let json = serde_json::to_value(Content::builtin()).unwrap();
        for key in [
            "about",
            "profile",
            "experience",
            "skills",
            "languages",
            "education",
            "contact",
            "personal",
        ] {
            assert!(json.get(key).is_some(), "missing top-level key {key}");
        }
    }

    #[test]
    fn test_entries_without_achievements_omit_the_field() {
        let json = serde_json::to_value(Content::builtin()).unwrap();
        let items = json["experience"]["items"].as_array().unwrap();
        assert!(items[0].get("achievements").is_some());
        assert!(items[2].get("achievements").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let c = Content::builtin();
        let json = serde_json::to_string(&c).unwrap();
        let back: Content = serde_json::from_str(&json).unwrap();
        assert_eq!(back.contact.email, c.contact.email);
        assert_eq!(back.experience.items.len(), c.experience.items.len());
    }
}
