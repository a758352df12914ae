//! Static page content.
//!
//! Everything here is a compile-time table; render order is declaration
//! order. The only mutable value on the whole site lives in the header
//! component, not here.

/// The six navigable page sections.
///
/// Nav items and the section components both go through this enum, so a nav
/// anchor can never point at a section id that is not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Education,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The `id` attribute the section element renders.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// The in-page href nav links use to reach this section.
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Education => "#education",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }
}

/// Glyph tags, resolved to icon-font CSS classes by [`Icon::class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Monitor,
    Terminal,
    Code,
    FolderGit,
    Mail,
    Menu,
    Close,
    ArrowUp,
    LinkedIn,
    GitHub,
}

impl Icon {
    pub const fn class(self) -> &'static str {
        match self {
            Icon::Monitor => "extra-monitor",
            Icon::Terminal => "extra-terminal",
            Icon::Code => "extra-code",
            Icon::FolderGit => "extra-folder-git",
            Icon::Mail => "extra-email",
            Icon::Menu => "extra-menu",
            Icon::Close => "extra-close",
            Icon::ArrowUp => "extra-arrow-up",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::GitHub => "devicon-github-plain",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub section: Section,
    pub icon: Icon,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Home",
        section: Section::Home,
        icon: Icon::Monitor,
    },
    NavItem {
        label: "About",
        section: Section::About,
        icon: Icon::Terminal,
    },
    NavItem {
        label: "Education",
        section: Section::Education,
        icon: Icon::Code,
    },
    NavItem {
        label: "Skills",
        section: Section::Skills,
        icon: Icon::Code,
    },
    NavItem {
        label: "Project",
        section: Section::Projects,
        icon: Icon::FolderGit,
    },
    NavItem {
        label: "Contact",
        section: Section::Contact,
        icon: Icon::Mail,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: Icon,
    pub url: &'static str,
    /// Tailwind hover class for the badge accent color.
    pub hover_accent: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::LinkedIn,
        url: "https://www.linkedin.com/in/loshavii-arulramesh",
        hover_accent: "hover:text-blue-500",
    },
    SocialLink {
        icon: Icon::GitHub,
        url: "https://github.com/Loshavii",
        hover_accent: "hover:text-purple-500",
    },
    SocialLink {
        icon: Icon::Mail,
        url: "mailto:larulramesh@gmail.com",
        hover_accent: "hover:text-red-500",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    /// The first CTA is a filled button, the second outlined.
    pub filled: bool,
}

pub const CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction {
        label: "Hire Me",
        href: "mailto:larulramesh@gmail.com",
        filled: true,
    },
    CallToAction {
        label: "Let's Talk",
        href: Section::Contact.anchor(),
        filled: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 2] = [
    SkillGroup {
        name: "Technical Skills",
        skills: &[
            "Microsoft Office",
            "Visual Basic",
            "Adobe Photoshop",
            "HTML",
            "CSS",
            "MERN Stack",
            "Figma",
        ],
    },
    SkillGroup {
        name: "Interpersonal Skills",
        skills: &["Creativity", "Communication", "Team Work", "Leadership"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub primary: Link,
    pub secondary: Option<Link>,
}

pub const PROJECTS: [Project; 7] = [
    Project {
        title: "Fitness Website",
        description: "Fitzhore is a dynamic platform connecting fitness enthusiasts with certified coaches. Users can set goals, explore coaches, book sessions, and track progress, while coaches manage profiles, packages, and payments. Admins oversee registrations, disputes, and platform reports. Built with React.js, Node.js, Express.js, MongoDB, and JWT authentication, Fitzhore ensures a secure, seamless, and professional fitness experience.",
        thumbnail: "/img/fitzhore.png",
        primary: Link {
            label: "Live Demo",
            url: "https://fitzhore.example.com",
        },
        secondary: Some(Link {
            label: "GitHub",
            url: "https://github.com/Loshavii/fitzhore",
        }),
    },
    Project {
        title: "Personal Portfolio",
        description: "A modern portfolio showcasing skills, projects, and experience. The site features responsive design, smooth animations, project highlights, a professional timeline, and contact integration with GitHub and LinkedIn, demonstrating expertise in web development and design.",
        thumbnail: "/img/portfolio.png",
        primary: Link {
            label: "Live Demo",
            url: "https://loshavii.example.com",
        },
        secondary: Some(Link {
            label: "GitHub",
            url: "https://github.com/Loshavii/portfolio",
        }),
    },
    Project {
        title: "LiveStream Hub",
        description: "An interactive live streaming app connecting creators and audiences in real-time. Built with React.js, Node.js, and WebRTC, it features live chat, user authentication, session scheduling, and high-quality, low-latency streaming for a seamless experience.",
        thumbnail: "/img/livestream.png",
        primary: Link {
            label: "Live Demo",
            url: "https://livestream-hub.example.com",
        },
        secondary: Some(Link {
            label: "GitHub",
            url: "https://github.com/Loshavii/livestream-hub",
        }),
    },
    Project {
        title: "Chat App",
        description: "A real-time individual chat app built with React.js and Vite. It features seamless messaging, user authentication, and instant notifications, providing a fast and responsive communication experience.",
        thumbnail: "/img/chatapp.png",
        primary: Link {
            label: "Live Demo",
            url: "https://chat.example.com",
        },
        secondary: Some(Link {
            label: "GitHub",
            url: "https://github.com/Loshavii/chat-app",
        }),
    },
    Project {
        title: "QuizMaster",
        description: "A quiz app built with React.js and Vite, offering an interactive and engaging way to test knowledge. Users can answer multiple-choice questions, track scores, and view results instantly. The app features a smooth, fast experience with Vite's optimized build system, ensuring quick load times and a responsive design.",
        thumbnail: "/img/quizmaster.png",
        primary: Link {
            label: "Live Demo",
            url: "https://quizmaster.example.com",
        },
        secondary: Some(Link {
            label: "GitHub",
            url: "https://github.com/Loshavii/quizmaster",
        }),
    },
    Project {
        title: "Figma Project 1",
        description: "Explore my collection of UI/UX designs crafted with Figma, showcasing a diverse range of projects, from web applications to mobile interfaces. Each design emphasizes user-centric experiences, intuitive navigation, and modern aesthetics.",
        thumbnail: "/img/uiux-1.jpeg",
        primary: Link {
            label: "View Projects",
            url: "https://www.figma.com/team_invite/redeem/zFPdf8Btnuemb9jamSTpE3",
        },
        secondary: None,
    },
    Project {
        title: "Figma Project 2",
        description: "Explore my collection of UI/UX designs crafted with Figma, showcasing a diverse range of projects, from web applications to mobile interfaces. These projects reflect my passion for creativity, attention to detail, and commitment to delivering exceptional user experiences.",
        thumbnail: "/img/uiux-2.jpeg",
        primary: Link {
            label: "View Projects",
            url: "https://www.figma.com/team_invite/redeem/MD6WvmXuG0WyYpgIpBKBcS",
        },
        secondary: None,
    },
];

/// Link behind the "View All Projects" button under the project grid.
pub const ALL_PROJECTS_URL: &str = "https://github.com/Loshavii";

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub heading: &'static str,
    pub period: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineColumn {
    pub title: &'static str,
    pub entries: &'static [TimelineEntry],
}

pub const TIMELINE_COLUMNS: [TimelineColumn; 2] = [
    TimelineColumn {
        title: "Education",
        entries: &[
            TimelineEntry {
                heading: "Uki Coding School",
                period: "2024",
                body: "Currently enrolled at Uki Coding School, focusing on Full Stack Web development. The curriculum covers HTML, CSS, JavaScript, Java, React, and Node.js.",
            },
            TimelineEntry {
                heading: "Technical College",
                period: "2023",
                body: "Pursued NVQ-4 Certification in ICT Technician at Technical College of Jaffna. Gained proficiency in programming languages and Microsoft Office management.",
            },
            TimelineEntry {
                heading: "High School",
                period: "2021",
                body: "Attended J/Uduvil Girls' College, excelled in mathematics, art, and computer science. Participated in various extracurricular activities.",
            },
        ],
    },
    TimelineColumn {
        title: "Professional Experience",
        entries: &[TimelineEntry {
            heading: "IT Support Technician",
            period: "2023",
            body: "Completed an internship as a computer technician, gaining valuable hands-on experience in diagnosing and resolving Microsoft Office issues. Worked with a team on public communications with letters and database access.",
        }],
    },
];

pub const NAME: &str = "Loshavii";
pub const SURNAME: &str = "Arulramesh";
pub const TAGLINE: &str = "Student Developer";
pub const CONTACT_EMAIL: &str = "larulramesh@gmail.com";
pub const PROFILE_IMG: &str = "/img/loshavii.png";

pub const HERO_COPY: &str = "Hi! I'm Loshavii, a creative and hardworking web developer with a passion for designing and building user-centric websites. My work focuses on creating intuitive and dynamic user experiences.";

pub const ABOUT_COPY: &str = "I am a student developer with a solid foundation in computer science, proficient in Python, HTML, and CSS, with a strong interest in web development and UI/UX design. I enjoy building web applications using frameworks and am passionate about Figma, constantly exploring innovative ways to enhance user experiences. My career goals include becoming a Full Stack Web Developer, leading tech teams, or starting my own tech company.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_match_section_ids() {
        for item in NAV_ITEMS {
            assert_eq!(
                item.section.anchor().strip_prefix('#'),
                Some(item.section.id()),
                "anchor and id diverge for {:?}",
                item.section
            );
        }
    }

    #[test]
    fn nav_covers_every_section_exactly_once() {
        assert_eq!(NAV_ITEMS.len(), Section::ALL.len());
        for section in Section::ALL {
            let count = NAV_ITEMS
                .iter()
                .filter(|item| item.section == section)
                .count();
            assert_eq!(count, 1, "{:?} should appear once in the nav", section);
        }
    }

    #[test]
    fn nav_renders_in_declared_order() {
        let labels = NAV_ITEMS.map(|item| item.label);
        assert_eq!(
            labels,
            ["Home", "About", "Education", "Skills", "Project", "Contact"]
        );
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn three_social_links_ending_in_mailto() {
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert!(SOCIAL_LINKS[2].url.starts_with("mailto:"));
        assert_eq!(SOCIAL_LINKS[0].icon, Icon::LinkedIn);
        assert_eq!(SOCIAL_LINKS[1].icon, Icon::GitHub);
    }

    #[test]
    fn cta_pair_differs_only_in_href_and_styling() {
        assert_eq!(CALLS_TO_ACTION.len(), 2);
        assert!(CALLS_TO_ACTION[0].filled);
        assert!(CALLS_TO_ACTION[0].href.starts_with("mailto:"));
        assert!(!CALLS_TO_ACTION[1].filled);
        assert_eq!(CALLS_TO_ACTION[1].href, Section::Contact.anchor());
    }

    #[test]
    fn skill_groups_hold_declared_counts() {
        assert_eq!(SKILL_GROUPS[0].name, "Technical Skills");
        assert_eq!(SKILL_GROUPS[0].skills.len(), 7);
        assert_eq!(SKILL_GROUPS[1].name, "Interpersonal Skills");
        assert_eq!(SKILL_GROUPS[1].skills.len(), 4);
    }

    #[test]
    fn seven_projects_with_correct_link_labels() {
        assert_eq!(PROJECTS.len(), 7);
        for project in &PROJECTS {
            match project.secondary {
                Some(repo) => {
                    assert_eq!(project.primary.label, "Live Demo");
                    assert_eq!(repo.label, "GitHub");
                }
                // Design-only entries link out once
                None => assert_eq!(project.primary.label, "View Projects"),
            }
        }
        let design_only = PROJECTS.iter().filter(|p| p.secondary.is_none()).count();
        assert_eq!(design_only, 2);
    }

    #[test]
    fn every_project_has_a_thumbnail_asset() {
        for project in &PROJECTS {
            assert!(project.thumbnail.starts_with("/img/"), "{}", project.title);
        }
    }
}
