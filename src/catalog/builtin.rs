//! Built-in portfolio content.

use std::collections::BTreeMap;

use super::{
    ContactInfo, ContentCatalog, Profile, Project, ProjectDetails, Section, SkillCategory,
    TimelineEvent,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn levels(items: &[(&str, u8)]) -> BTreeMap<String, u8> {
    items.iter().map(|(name, level)| (name.to_string(), *level)).collect()
}

pub(super) fn catalog() -> ContentCatalog {
    ContentCatalog {
        profile: Profile {
            name: "Dommalapati Seenaiah".into(),
            headline: "AI/ML Engineer & Developer".into(),
            roles: strings(&["AI/ML Engineer", "Full-Stack Developer"]),
            bio: strings(&[
                "Passionate AI/ML Engineer and Full-Stack Developer skilled in building \
                 intelligent, data-driven applications. Experienced in Python, Generative AI, \
                 and LLMs.",
                "I am adept at transforming data insights into scalable systems. My expertise \
                 spans Generative AI, Large Language Models (LLMs), and modern web frameworks.",
                "Currently pursuing my B.Tech in Computer Science & Engineering at Kalasalingam \
                 Academy of Research and Education, with hands-on experience building AI-driven \
                 automation systems and predictive analytics modules.",
            ]),
            resume: Some("assets/SEENAIAH-Developer.pdf".into()),
        },
        sections: vec![
            Section::new("home", "Home"),
            Section::new("about", "About"),
            Section::new("skills", "Skills"),
            Section::new("projects", "Projects"),
            Section::new("contact", "Contact"),
        ],
        projects: vec![
            Project {
                id: 1,
                title: "LLM-Based Admission Assistant".into(),
                description: "An intelligent admission support system using lightweight LLMs \
                    to handle student queries in real-time. Features a dual-intelligence \
                    architecture combining TinyLlama 1.1B for complex reasoning and a fast \
                    rule-based engine for instant FAQs."
                    .into(),
                tags: strings(&["GenAI", "Python", "FastAPI", "TinyLlama"]),
                image: "assets/project-llm.png".into(),
                source_url: "https://github.com/DSEENAIAH/admissions-LLM-chatbot".into(),
                demo_url: None,
                details: Some(ProjectDetails {
                    features: strings(&[
                        "Dual Intelligence Architecture (TinyLlama + Rule-based)",
                        "Multi-Modal Support (Text, Voice, Documents)",
                        "Real-time Analytics & Performance Monitoring",
                        "Enterprise-grade Security & Scalability",
                    ]),
                    tech_stack: strings(&[
                        "Python",
                        "FastAPI",
                        "TinyLlama 1.1B",
                        "PyTorch",
                        "React",
                        "Docker",
                    ]),
                    architecture: None,
                }),
            },
            Project {
                id: 2,
                title: "Placement Prep Platform".into(),
                description: "A full-stack web application for online exams and analytics. \
                    Provides real-time dashboards for students and administrators, enabling \
                    data-driven insights into placement readiness across multiple colleges."
                    .into(),
                tags: strings(&["React", "AWS", "Node.js", "Analytics"]),
                image: "assets/project-placement.png".into(),
                source_url: "https://github.com/DSEENAIAH/campus-preparation".into(),
                demo_url: None,
                details: Some(ProjectDetails {
                    features: strings(&[
                        "Real-time Exam Analytics & Dashboards",
                        "Multi-College Support & Role-based Access",
                        "Automated Reporting & Performance Tracking",
                        "Scalable Cloud Infrastructure on AWS",
                    ]),
                    tech_stack: strings(&[
                        "React",
                        "Vite",
                        "AWS Amplify",
                        "DynamoDB",
                        "Node.js",
                        "Tailwind CSS",
                    ]),
                    architecture: None,
                }),
            },
            Project {
                id: 3,
                title: "Sentiment & Profanity Detection".into(),
                description: "A robust NLP classifier achieving high accuracy in detecting \
                    sentiment and profanity. Deployed as a real-time moderation system for \
                    social media content to ensure safe online environments."
                    .into(),
                tags: strings(&["NLP", "Python", "NLTK", "ML"]),
                image: "assets/image.png".into(),
                source_url: "https://github.com/DSEENAIAH".into(),
                demo_url: None,
                details: Some(ProjectDetails {
                    features: strings(&[
                        "Real-time Sentiment Analysis (Positive/Negative/Neutral)",
                        "Advanced Profanity Filtering & Classification",
                        "High Accuracy Model using NLTK & Scikit-learn",
                        "REST API for Easy Integration",
                    ]),
                    tech_stack: strings(&["Python", "NLTK", "Scikit-learn", "Flask", "Pandas"]),
                    architecture: None,
                }),
            },
        ],
        skills: vec![
            SkillCategory {
                title: "Generative AI & LLMs".into(),
                skills: strings(&[
                    "Large Language Models",
                    "LangChain",
                    "Hugging Face",
                    "Prompt Engineering",
                    "RAG Pipelines",
                ]),
                levels: BTreeMap::new(),
            },
            SkillCategory {
                title: "Data Science & ML".into(),
                skills: strings(&[
                    "Python",
                    "TensorFlow",
                    "Scikit-learn",
                    "Pandas",
                    "NumPy",
                    "Matplotlib",
                    "Computer Vision",
                    "NLP",
                ]),
                levels: levels(&[
                    ("Python", 95),
                    ("TensorFlow", 85),
                    ("Scikit-learn", 90),
                    ("Computer Vision", 82),
                    ("NLP", 88),
                ]),
            },
            SkillCategory {
                title: "Web Development".into(),
                skills: strings(&[
                    "React",
                    "JavaScript",
                    "HTML5",
                    "CSS3",
                    "Flask",
                    "REST APIs",
                    "Responsive Design",
                ]),
                levels: levels(&[
                    ("JavaScript", 88),
                    ("HTML5", 92),
                    ("CSS3", 92),
                    ("Flask", 88),
                    ("REST APIs", 90),
                ]),
            },
            SkillCategory {
                title: "Tools & Platforms".into(),
                skills: strings(&[
                    "Git & GitHub",
                    "Jupyter Notebook",
                    "Google Colab",
                    "SQL",
                    "VS Code",
                ]),
                levels: BTreeMap::new(),
            },
        ],
        timeline: vec![
            TimelineEvent {
                period: "07/2025 - 09/2025".into(),
                title: "Developer Intern".into(),
                organization: "Awarcrown Corporation".into(),
                description: "Contributed to AI tool behavior analysis and LLM architecture \
                    development. Assisted in building AI-driven automation systems."
                    .into(),
            },
            TimelineEvent {
                period: "01/2025 - 06/2025".into(),
                title: "Developer Intern".into(),
                organization: "Codenvia Solutions".into(),
                description: "Worked on integrating web and AI-based features for scalable \
                    applications. Developed API endpoints and ML modules for predictive \
                    analytics."
                    .into(),
            },
            TimelineEvent {
                period: "2022 - 2026".into(),
                title: "B.Tech - CSE".into(),
                organization: "Kalasalingam Academy of Research and Education".into(),
                description: "CGPA: 7.5/10.0. Focusing on AI/ML and Data Science.".into(),
            },
            TimelineEvent {
                period: "2020 - 2022".into(),
                title: "Intermediate".into(),
                organization: "Krishna Chaitanya Junior College".into(),
                description: "Score: 86.3%".into(),
            },
        ],
        achievements: strings(&[
            "2nd Prize - Euphoria Hackathon",
            "5th Place - Generative AI Mastermind",
            "Speaker & Organizer - Int. Conf. on Agri Innovation",
        ]),
        contact: ContactInfo {
            email: "seenaiahdommalapati@gmail.com".into(),
            linkedin: Some("https://www.linkedin.com/in/seenaiahdommalapati/".into()),
            github: Some("https://github.com/DSEENAIAH".into()),
        },
    }
}
