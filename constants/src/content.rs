//! Page copy. Every string rendered by the site modules is defined here.

pub const NAME_FIRST: &str = "Mohammed";
pub const NAME_LAST: &str = "Anvar PP";

pub const HERO_SUBTITLE: &str = "Front-End Developer crafting exceptional digital experiences \
     through innovative web technologies and cutting-edge design";

pub const SCROLL_HINT: &str = "Scroll to explore";

pub const CONTACT_TITLE: &str = "Let's Connect";
pub const CONTACT_COPY: &str = "Ready to bring your digital vision to life? Let's discuss how \
     we can create something extraordinary together.";

pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink { label: "Email", value: "mohammedanvarpp1@gmail.com" },
    ContactLink { label: "Phone", value: "+91 8301998293" },
    ContactLink { label: "GitHub", value: "github.com" },
    ContactLink { label: "LinkedIn", value: "linkedin.com" },
];

pub const ABOUT_TITLE: &str = "About";

pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_CARDS: [AboutCard; 3] = [
    AboutCard {
        title: "Expertise",
        body: "3 years of experience building modern web applications with React.js, \
               Next.js and TypeScript, from eCommerce platforms to enterprise ERPs.",
    },
    AboutCard {
        title: "Technical Focus",
        body: "Specialised in enterprise applications, eCommerce storefronts and \
               management systems with an emphasis on clean, maintainable interfaces.",
    },
    AboutCard {
        title: "Continuous Learning",
        body: "Committed to staying at the forefront of web development, exploring \
               new tooling and patterns as the ecosystem evolves.",
    },
];

/// Short study summary shown beside the about cards. The full history gets
/// its own section further down the page.
pub struct StudySummary {
    pub degree: &'static str,
    pub school: &'static str,
    pub note: &'static str,
}

pub const ABOUT_STUDIES: [StudySummary; 3] = [
    StudySummary {
        degree: "Bachelor of Computer Applications",
        school: "Rabindranath Tagore University",
        note: "Completed while pursuing a full-time engineering career.",
    },
    StudySummary {
        degree: "Diploma in Computer Engineering",
        school: "AKNM Government Polytechnic College",
        note: "Focus on software development and system design.",
    },
    StudySummary {
        degree: "Computer Science",
        school: "PPMHSS Kottukara",
        note: "Foundation in computer science principles.",
    },
];

pub const EXPERIENCE_TITLE: &str = "Experience";

pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE_ENTRIES: [ExperienceEntry; 4] = [
    ExperienceEntry {
        role: "Front-End Developer",
        company: "Polosys Technologies",
        period: "Jul 2024 - Present",
        highlights: &[
            "Building eCommerce platforms with React.js and modern front-end tooling.",
            "Developed a support ticketing system in Next.js for customer workflows.",
            "Integrated REST APIs with a focus on responsive UI and UX detail.",
            "Leading front-end work on Polosys Books, an accounting suite inspired by Zoho Books.",
        ],
    },
    ExperienceEntry {
        role: "Front-End Developer",
        company: "Popular Group (Popit Solutions)",
        period: "Nov 2023 - Jun 2024",
        highlights: &[
            "Maintained MIS software built on HTML, CSS and JavaScript.",
            "Built PopBites, an eCommerce application, with React.js.",
            "Developed Poptalk messaging features using React.js and Redux.",
        ],
    },
    ExperienceEntry {
        role: "Front-End Developer",
        company: "Datastone Solutions",
        period: "Sep 2022 - Oct 2023",
        highlights: &[
            "Core contributor to SCHOLA, a school management ERP.",
            "Shipped the SCHOLA PARENT progressive web app with Next.js.",
            "Deepened expertise across React, Next.js and TypeScript.",
        ],
    },
    ExperienceEntry {
        role: "Front-End Developer",
        company: "Freelancing",
        period: "Feb 2022 - Sep 2022",
        highlights: &[
            "Delivered responsive marketing sites for small businesses.",
            "Converted design handoffs into accessible, pixel-faithful pages.",
        ],
    },
];

pub const EDUCATION_TITLE: &str = "Education";

pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION_ENTRIES: [EducationEntry; 3] = [
    EducationEntry {
        degree: "BCA (Distance Education)",
        school: "Rabindranath Tagore University",
        detail: "Bachelor of Computer Applications completed alongside full-time \
                 development work, covering programming, databases and software \
                 engineering fundamentals.",
    },
    EducationEntry {
        degree: "Diploma in Computer Engineering",
        school: "AKNM GPTC, Kerala (Kerala Technical University)",
        detail: "Three-year technical diploma with coursework in data structures, \
                 operating systems, networking and application development.",
    },
    EducationEntry {
        degree: "Computer Science (Higher Secondary)",
        school: "PPMHSS Kottukara",
        detail: "Higher secondary specialisation in computer science, building the \
                 foundation in mathematics and programming.",
    },
];

pub const SKILLS_TITLE: &str = "Technical Skills";

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        name: "Frontend Technologies",
        skills: &[
            "ReactJS",
            "NextJS",
            "TypeScript",
            "JavaScript",
            "HTML",
            "CSS",
            "SCSS",
            "Tailwind CSS",
        ],
    },
    SkillCategory {
        name: "Backend & Tools",
        skills: &[
            "NodeJS",
            "ExpressJS",
            "Redux Toolkit",
            "React Query",
            "Hook Form",
            "Jest",
            "Vitest",
            "Git",
        ],
    },
    SkillCategory {
        name: "Development Tools",
        skills: &[
            "Webpack",
            "Babel",
            "NPM",
            "AWS",
            "Postman",
            "Bootstrap",
        ],
    },
];

pub const PROJECTS_TITLE: &str = "Featured Projects";

pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECT_ENTRIES: [ProjectEntry; 5] = [
    ProjectEntry {
        title: "Polosys Books - Accounting & Inventory Management System",
        category: "Enterprise Application",
        year: "2024",
        description: "A Zoho Books alternative covering billing, invoicing, GST \
                      filing and inventory for small businesses.",
        stack: &["React.js", "Next.js", "TypeScript", "Tailwind CSS"],
        link: None,
    },
    ProjectEntry {
        title: "Ticketing App - Customer Support Management System",
        category: "Customer Management",
        year: "2024",
        description: "Support desk for raising, routing and resolving customer \
                      tickets with live status tracking.",
        stack: &["Next.js", "React.js", "TypeScript", "Redux"],
        link: None,
    },
    ProjectEntry {
        title: "Schola Parent App",
        category: "Progressive Web App",
        year: "2023",
        description: "Installable companion app giving parents attendance, fees \
                      and progress reports at a glance.",
        stack: &["Next.js", "PWA", "React.js", "TypeScript"],
        link: None,
    },
    ProjectEntry {
        title: "Schola - School Management ERP",
        category: "Educational Platform",
        year: "2023",
        description: "End-to-end school ERP spanning admissions, timetables, \
                      examinations and staff administration.",
        stack: &["React.js", "Next.js", "TypeScript", "Redux"],
        link: None,
    },
    ProjectEntry {
        title: "RT ARCADES",
        category: "Responsive Web Application",
        year: "2022",
        description: "Marketing site for a gaming arcade with responsive layout \
                      and hand-built animations.",
        stack: &["HTML", "CSS", "JavaScript", "Bootstrap"],
        link: Some("https://rtarcades.netlify.app/"),
    },
];
