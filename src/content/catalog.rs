use super::{
    Academic, ChatCopy, Contact, Highlight, Position, Presentation, Profile, Project, Service,
    Skill, SkillCategory, Standing,
};

pub static PROFILE: Profile = Profile {
    name: "Rahul Shyam",
    short_name: "Rahul S.",
    headline: "a Web Developer, CTO of EcoBrick (a Green Tech startup), and an Engineer",
    footer_role: "CTO & Full Stack Engineer",
    tagline: "I don’t just build websites — I engineer solutions.",
    location: "Chennai, India",
    bio: "I’m Rahul S, a web developer and engineering-focused builder who designs and develops \
          intelligent, real-world web experiences. I combine clean UI, logical system thinking, and \
          modern technology to create products that solve real problems.",
    headshot: "https://i.ibb.co/Jwf3JRgV/Headshot-rahul.png",
    resume_url: "https://drive.google.com/file/d/11BXxzDZneovwL4tFqS0xxujDtX87W1JI/view",
    contact: Contact {
        primary_email: "rahulshyam2006@outlook.com",
        secondary_email: "rahulcvfiitjee@gmail.com",
        linkedin: "https://www.linkedin.com/in/rahulshyamcivil/",
        instagram: "@rahulcvjps",
        whatsapp: "+917305169964",
        github: "https://github.com/rahulcvwebsitehosting",
    },
    academics: &[Academic {
        degree: "Bachelor of Engineering – Civil Engineering",
        institution: "Erode Sengunthar Engineering College (ESEC)",
        period: "2023 – 2027 (Second Year)",
        note: "Applying civil engineering principles to interactive educational platforms and 3D \
               visualization tools while building products alongside academics.",
    }],
    standing: Standing {
        metric: "CGPA",
        score: "8.6",
        title: "Academic Excellence",
        detail: "Maintaining a strong academic record while actively scaling real-world \
                 engineering projects and startups.",
    },
    positions: &[
        Position {
            title: "Chief Technology Officer",
            organization: "Green-Tech Infrastructure Startup",
            period: "2025 – Present",
            summary: Some(
                "Leading technical development for a government-funded climate-tech venture \
                 converting waste into construction bricks.",
            ),
        },
        Position {
            title: "Web Developer & Builder",
            organization: "Freelance",
            period: "2024 – Present",
            summary: None,
        },
    ],
    philosophy: "True learning happens when theory meets application. I learn best by building \
                 tools that visualize the abstract.",
    principles: &[
        Highlight { title: "Concept-First", detail: "Deeply understanding first principles." },
        Highlight { title: "Logical Flow", detail: "Mapping data paths visually." },
        Highlight { title: "Application", detail: "Turning math into usable code." },
    ],
    presentations: &[
        Presentation { institution: "PSG College of Technology", role: "Paper Presentation & Workshop" },
        Presentation { institution: "Kongu Engineering College", role: "Technical Paper Presentation" },
        Presentation { institution: "KPR Institute of Engineering & Tech", role: "Workshop & Symposium" },
        Presentation { institution: "Sasurie College of Engineering", role: "Technical Paper Presentation" },
        Presentation { institution: "SRM Institute of Science & Tech", role: "Paper Presentation (Chennai)" },
        Presentation {
            institution: "Erode Sengunthar Engineering College",
            role: "National Conference & Presentations",
        },
    ],
    hackathons: &[
        Highlight {
            title: "Competitive Edge",
            detail: "Active participant in state-level inter-college technical hackathons and ideations.",
        },
        Highlight {
            title: "Technical Leadership",
            detail: "Frequently lead technical squads to build functional prototypes under strict \
                     24/48-hour sprints.",
        },
    ],
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Hostel Planner",
        problem: "Manual room allocation and layout planning is slow and prone to errors.",
        impact: "AI-powered interactive room designer for optimized layouts and furniture placement.",
        tech: &["Next.js", "Canvas API", "OpenAI"],
        image: "https://picsum.photos/seed/hostel/800/600",
        link: Some("https://hostel-planner.vercel.app/"),
    },
    Project {
        id: "2",
        title: "Surya Clothing",
        problem: "A local women’s wear business needed a clean, mobile-first online presence.",
        impact: "Developed a product showcase focused on branding and high-speed responsiveness.",
        tech: &["React", "Tailwind CSS", "Vite"],
        image: "https://picsum.photos/seed/surya/800/600",
        link: Some("https://surya-clothing.vercel.app/"),
    },
    Project {
        id: "3",
        title: "TypeArena",
        problem: "Lack of competitive, real-time typing environments to improve speed.",
        impact: "A multiplayer typing game with real-time socket communication for skill improvement.",
        tech: &["Node.js", "Socket.io", "React"],
        image: "https://picsum.photos/seed/typing/800/600",
        link: Some("https://typearenacv.vercel.app/"),
    },
    Project {
        id: "4",
        title: "Mohan Hot’n Chat",
        problem: "Viral local restaurant needed branding and a menu showcase to match its popularity.",
        impact: "Fast, responsive menu and branding platform for a famous West Mambalam spot.",
        tech: &["React", "Framer Motion", "Tailwind"],
        image: "https://picsum.photos/seed/mohan/800/600",
        link: Some("https://mohan-hotn-chat.vercel.app/"),
    },
    Project {
        id: "5",
        title: "OSB Chats",
        problem: "Busy local restaurant required a lightweight, quick-loading mobile site.",
        impact: "Modern, high-performance web presence with a focus on usability.",
        tech: &["HTML5", "CSS3", "JavaScript"],
        image: "https://picsum.photos/seed/osb/800/600",
        link: Some("https://osb-eta.vercel.app/"),
    },
    Project {
        id: "6",
        title: "TunnelViz",
        problem: "Civil engineering students struggle to visualize underground fluid dynamics.",
        impact: "An interactive learning platform that simplifies complex tunnel design concepts.",
        tech: &["Three.js", "React", "D3.js"],
        image: "https://picsum.photos/seed/tunnel/800/600",
        link: Some("https://tunnel-viz.vercel.app/"),
    },
    Project {
        id: "7",
        title: "EcoBrick (Startup)",
        problem: "Managing plastic waste while creating sustainable construction materials.",
        impact: "Government-funded climate-tech platform converting waste into high-performance bricks.",
        tech: &["Next.js", "3D Viz", "System Design"],
        image: "https://picsum.photos/seed/ecobrick/800/600",
        link: None,
    },
    Project {
        id: "8",
        title: "Prototype Machine",
        problem: "Visualizing industrial manufacturing processes for complex machinery.",
        impact: "3D engineering visualization of a dual-chamber twin-screw extrusion system.",
        tech: &["Three.js", "Web Engineering"],
        image: "https://picsum.photos/seed/machine/800/600",
        link: None,
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React / Next.js",
        category: SkillCategory::Frontend,
        description: Some("Component-driven interfaces and server-rendered apps."),
    },
    Skill {
        name: "TypeScript",
        category: SkillCategory::Frontend,
        description: Some("Typed front-end code that scales past the prototype."),
    },
    Skill {
        name: "Tailwind CSS",
        category: SkillCategory::Design,
        description: Some("Fast, consistent styling straight from design tokens."),
    },
    Skill {
        name: "Node.js",
        category: SkillCategory::Backend,
        description: Some("APIs and real-time socket servers."),
    },
    Skill {
        name: "PostgreSQL",
        category: SkillCategory::Backend,
        description: Some("Relational data modelling for production apps."),
    },
    Skill {
        name: "Three.js / Canvas",
        category: SkillCategory::Frontend,
        description: Some("3D scenes and engineering visualizations in the browser."),
    },
    Skill {
        name: "UI/UX Design",
        category: SkillCategory::Design,
        description: Some("Layouts that make complex ideas readable."),
    },
    Skill {
        name: "Framer Motion",
        category: SkillCategory::Design,
        description: None,
    },
    Skill {
        name: "AI Engineering",
        category: SkillCategory::Other,
        description: Some("LLM integrations that automate real workflows."),
    },
    Skill {
        name: "System Design",
        category: SkillCategory::Other,
        description: Some("Mapping data paths before writing code."),
    },
];

pub static SERVICES: &[Service] = &[
    Service {
        id: "web",
        title: "Custom Website Development",
        tagline: "Fast, responsive websites built to look professional and work flawlessly.",
        best_for: "Businesses, startups, personal brands",
        description: "I design and build modern websites tailored to your business. From landing \
                      pages to full applications, I focus on performance and usability.",
    },
    Service {
        id: "engineering",
        title: "Engineering & Educational Platforms",
        tagline: "Interactive platforms that turn complex engineering ideas into clear experiences.",
        best_for: "EdTech, technical founders, students",
        description: "I build interactive platforms for learning and visualization, turning complex \
                      technical concepts into simple web-based experiences.",
    },
    Service {
        id: "ai",
        title: "AI-Powered Web Applications",
        tagline: "Smart web apps that use AI to solve real problems automatically.",
        best_for: "Productivity apps, smart tools, innovative startups",
        description: "I develop applications that use AI to automate tasks, assist users \
                      intelligently, and solve business problems through automation.",
    },
];

pub static CHAT_COPY: ChatCopy = ChatCopy {
    title: "Rahul.AI",
    greeting: "Hi. I am Rahul's AI agent. Ask me about his projects or contact info.",
    placeholder: "Ask Rahul's AI...",
    empty_reply: "Contact Rahul at {email} or {secondary_email}",
    offline: "You appear to be offline. Reconnect and try again, or email Rahul at {email}.",
    unreachable: "I can't reach the AI service right now. Email Rahul at {email}.",
    rate_limited: "Too many questions right now. Try again later, or email Rahul at {email}.",
    filtered: "That query was filtered. Try rephrasing it, or email Rahul at {email}.",
    access_error: "The AI agent hit an access error. Reach Rahul at {email}.",
    unavailable: "The AI is currently offline. Reach Rahul at {email}.",
};
