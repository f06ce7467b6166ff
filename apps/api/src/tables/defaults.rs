//! Built-in vocabularies. Order matters: the gazetteer order is the order skills
//! are reported in, and the field order breaks recommendation ties.

pub const SKILLS: &[&str] = &[
    "Python",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Cloud Computing",
    "SQL",
    "Java",
    "C++",
    "AWS",
    "TensorFlow",
    "Keras",
    "Docker",
    "HTML",
    "CSS",
    "JavaScript",
    "Django",
    "MySQL",
    "Kali Linux",
    "Metasploit",
    "SEO",
    "pandas",
    "scikit-learn",
    "Gensim",
    "NLTK",
    "BeautifulSoup",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "Git",
    "GitHub",
    "Agile",
    "Scrum",
    "DevOps",
    "CI/CD",
    "REST API",
    "GraphQL",
    "MongoDB",
    "PostgreSQL",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Kubernetes",
    "Linux",
    "Windows",
    "MacOS",
    "Android",
    "iOS",
    "Swift",
    "Kotlin",
    "R",
    "Tableau",
    "Power BI",
    "Excel",
    "Word",
    "PowerPoint",
];

/// Degree keywords. Matched as whole words, so short forms like "ms" stay safe.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "baccalaureate",
    "undergraduate",
    "master",
    "doctorate",
    "doctoral",
    "phd",
    "b.tech",
    "m.tech",
    "b.e",
    "m.e",
    "bsc",
    "msc",
    "mba",
    "ba",
    "bs",
    "ma",
    "ms",
];

pub const EXPERIENCE_TRIGGERS: &[&str] = &[
    "experience",
    "work",
    "job",
    "position",
    "role",
    "employment",
];

pub const PROJECT_TRIGGERS: &[&str] = &["project", "developed", "created", "built", "implemented"];

pub const INSTITUTION_KEYWORDS: &[&str] =
    &["university", "college", "institute", "school", "academy"];

/// Universe the skill-gap sampler draws from.
pub const KNOWN_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "HTML",
    "CSS",
    "SQL",
    "Machine Learning",
    "Data Analysis",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Git",
    "Agile",
    "TensorFlow",
    "PyTorch",
    "NLP",
    "Computer Vision",
    "Data Visualization",
    "Flask",
    "Django",
    "RESTful API",
    "GraphQL",
    "MongoDB",
    "PostgreSQL",
];

pub const DEFAULT_FIELD: &str = "General Software Development";
pub const DEFAULT_COURSE_FIELD: &str = "Data Science";

/// (field, representative skills, courses)
pub const FIELDS: &[(&str, &[&str], &[&str])] = &[
    (
        "Data Science",
        &[
            "Python",
            "Machine Learning",
            "Data Analysis",
            "SQL",
            "Statistics",
            "TensorFlow",
            "PyTorch",
        ],
        &[
            "Data Science Specialization - Coursera",
            "Applied Data Science with Python - Coursera",
            "Machine Learning - Stanford Online",
            "Data Science: R Basics - Harvard",
            "Python for Data Science and Machine Learning Bootcamp - Udemy",
            "Deep Learning Specialization - Coursera",
            "Statistics with R - Duke University",
            "Data Science MicroMasters - edX",
            "IBM Data Science Professional Certificate - Coursera",
        ],
    ),
    (
        "Web Development",
        &[
            "JavaScript",
            "HTML",
            "CSS",
            "React",
            "Node.js",
            "Angular",
            "Vue.js",
        ],
        &[
            "The Complete Web Developer in 2023 - Udemy",
            "Full Stack Web Development - Coursera",
            "JavaScript: Understanding the Weird Parts - Udemy",
            "React - The Complete Guide - Udemy",
            "The Web Developer Bootcamp - Udemy",
            "Modern JavaScript From The Beginning - Udemy",
            "CSS - The Complete Guide - Udemy",
            "Node.js, Express & MongoDB - Udemy",
            "Advanced CSS and Sass - Udemy",
        ],
    ),
    (
        "Android Development",
        &["Java", "Kotlin", "Android SDK", "Mobile Development"],
        &[
            "Android App Development Specialization - Coursera",
            "The Complete Android Developer Course - Udemy",
            "Android Java Masterclass - Udemy",
            "Kotlin for Android: Beginner to Advanced - Udemy",
            "Android Architecture Masterclass - Udemy",
            "Flutter & Dart - The Complete Guide - Udemy",
            "Modern Android App Development - edX",
            "Android App Development with Kotlin - Pluralsight",
            "Firebase in a Weekend: Android - Udacity",
        ],
    ),
    (
        "iOS Development",
        &["Swift", "Objective-C", "iOS SDK", "Mobile Development"],
        &[
            "iOS App Development with Swift Specialization - Coursera",
            "iOS & Swift - The Complete iOS App Development Bootcamp - Udemy",
            "SwiftUI Masterclass - Udemy",
            "iOS 13 & Swift 5 - The Complete iOS App Development Bootcamp - Udemy",
            "iOS Development with Swift - edX",
            "Swift 5 Programming - LinkedIn Learning",
            "Objective-C for Swift Developers - Udemy",
            "Core Data for iOS Developers - Pluralsight",
            "ARKit for iOS Developers - Udemy",
        ],
    ),
    (
        "UI/UX Design",
        &["Figma", "Adobe XD", "Sketch", "User Research", "Wireframing"],
        &[
            "UI / UX Design Specialization - Coursera",
            "User Experience Research and Design - Coursera",
            "The Complete App Design Course - Udemy",
            "UI Design - Udemy",
            "UX & Web Design Master Course - Udemy",
            "Adobe XD - UI/UX Design - Udemy",
            "Figma - UI/UX Design Essential Training - LinkedIn Learning",
            "Design Thinking - edX",
            "Human-Computer Interaction - Coursera",
        ],
    ),
    (
        "DevOps",
        &[
            "Docker",
            "Kubernetes",
            "AWS",
            "Azure",
            "CI/CD",
            "Jenkins",
            "Git",
        ],
        &[
            "Docker and Kubernetes: The Complete Guide - Udemy",
            "AWS Certified DevOps Engineer - A Cloud Guru",
            "DevOps with GitHub - LinkedIn Learning",
            "CI/CD with Jenkins - Pluralsight",
            "Terraform for AWS - Udemy",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "Network Security",
            "Penetration Testing",
            "Kali Linux",
            "Cryptography",
        ],
        &[
            "Ethical Hacking - Udemy",
            "CompTIA Security+ Certification - Coursera",
            "Cybersecurity Specialization - Coursera",
            "Web Security - Stanford Online",
            "Network Security - edX",
        ],
    ),
];
