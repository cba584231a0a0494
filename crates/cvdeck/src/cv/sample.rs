//! The built-in sample CV, used when no file is given on the command line
//! and printed by `cvdeck sample` as a starting template.

use super::{
    Cv, Education, OrganizationalExperience, PersonalInfo, Project, ProjectLinks, SkillCategory,
    WorkExperience,
};

pub fn cv() -> Cv {
    Cv {
        personal_info: PersonalInfo {
            name: "Alex Tanaka".into(),
            title: "Frontend Engineer \u{2022} Mobile & Web Developer".into(),
            phone: Some("+62 812 5550 173".into()),
            email: "alex@tanaka.dev".into(),
            website: "tanaka.dev".into(),
            linkedin: "linkedin.com/in/alextanaka".into(),
            github: "github.com/atanaka".into(),
            summary: "Frontend engineer with six years of experience shipping web and \
                      mobile products. Passionate about creating exceptional user \
                      experiences with modern technologies, with a focus on React, \
                      React Native, and performance-minded interface work."
                .into(),
            location: "Jakarta, Indonesia".into(),
        },
        education: Education {
            institution: "Bandung Institute of Technology".into(),
            degree: "Bachelor of Science".into(),
            field: "Computer Science".into(),
            duration: "2015 - 2019".into(),
            achievements: vec![
                "GPA 3.7/4.0, graduated with honors".into(),
                "Teaching assistant for the human-computer interaction course".into(),
                "Finalist, national collegiate programming contest 2018".into(),
            ],
        },
        work_experience: work_experience(),
        projects: projects(),
        skills: skills(),
        organizational: organizational(),
    }
}

fn work_experience() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            title: "Senior Frontend Engineer".into(),
            position: "Senior Frontend Engineer".into(),
            company: "Lumina Health".into(),
            location: "Jakarta, Indonesia".into(),
            website: Some("https://luminahealth.example.com".into()),
            period: "Jan 2023 - Present".into(),
            duration: "Jan 2023 - Present".into(),
            description: "Leading frontend development for a telemedicine platform \
                          serving 400k monthly patients across web and mobile."
                .into(),
            technologies: tags(&[
                "TypeScript",
                "React",
                "Next.js",
                "React Native",
                "GraphQL",
            ]),
            tech_stack: tags(&[
                "TypeScript",
                "React",
                "Next.js",
                "React Native",
                "GraphQL",
            ]),
            achievements: vec![
                "Cut first-contentful-paint from 3.1s to 1.2s on the booking flow".into(),
                "Introduced a shared design-system package used by four product teams".into(),
                "Mentored three junior engineers through their first production launches".into(),
            ],
        },
        WorkExperience {
            title: "Frontend Engineer".into(),
            position: "Frontend Engineer".into(),
            company: "Kanal Studio".into(),
            location: "Jakarta, Indonesia".into(),
            website: Some("https://kanal.example.io".into()),
            period: "Mar 2021 - Dec 2022".into(),
            duration: "Mar 2021 - Dec 2022".into(),
            description: "Built the player and discovery surfaces of a video streaming \
                          service across web, mobile, and living-room devices."
                .into(),
            technologies: tags(&["React", "React Native", "Redux", "BrightScript", "Jest"]),
            tech_stack: tags(&["React", "React Native", "Redux", "BrightScript", "Jest"]),
            achievements: vec![
                "Shipped the Roku app from prototype to store certification in one quarter"
                    .into(),
                "Raised playback-start success rate to 99.3% with a resilient retry layer".into(),
                "Drove adoption of visual regression testing across the frontend guild".into(),
            ],
        },
        WorkExperience {
            title: "Mobile Engineer".into(),
            position: "Mobile Engineer".into(),
            company: "Arus Logistics".into(),
            location: "Bandung, Indonesia".into(),
            website: None,
            period: "Jun 2020 - Feb 2021".into(),
            duration: "Jun 2020 - Feb 2021".into(),
            description: "Owned the driver-facing mobile app used by 2,000 couriers for \
                          route assignment, proof of delivery, and earnings tracking."
                .into(),
            technologies: tags(&["React Native", "TypeScript", "Firebase", "Detox"]),
            tech_stack: tags(&["React Native", "TypeScript", "Firebase", "Detox"]),
            achievements: vec![
                "Reduced cold-start time by 40% by deferring non-critical native modules".into(),
                "Built offline-first delivery confirmation with background sync".into(),
            ],
        },
        WorkExperience {
            title: "Frontend Developer".into(),
            position: "Frontend Developer".into(),
            company: "Pixel Forge Agency".into(),
            location: "Bandung, Indonesia".into(),
            website: Some("#".into()),
            period: "Jul 2019 - May 2020".into(),
            duration: "Jul 2019 - May 2020".into(),
            description: "Delivered marketing sites and e-commerce storefronts for a \
                          dozen clients on tight timelines."
                .into(),
            technologies: tags(&["JavaScript", "Vue.js", "Nuxt", "Sass", "Shopify"]),
            tech_stack: tags(&["JavaScript", "Vue.js", "Nuxt", "Sass", "Shopify"]),
            achievements: vec![
                "Standardized a starter template that cut project setup from days to hours"
                    .into(),
                "Hit 95+ Lighthouse scores on every launched storefront".into(),
            ],
        },
        WorkExperience {
            title: "Software Engineering Intern".into(),
            position: "Software Engineering Intern".into(),
            company: "Nusantara Bank".into(),
            location: "Jakarta, Indonesia".into(),
            website: None,
            period: "Jun 2018 - Sep 2018".into(),
            duration: "Jun 2018 - Sep 2018".into(),
            description: "Internal tooling for the digital banking division.".into(),
            technologies: tags(&["JavaScript", "React", "Node.js"]),
            tech_stack: tags(&["JavaScript", "React", "Node.js"]),
            achievements: vec![
                "Built a dashboard that replaced a weekly manual reporting process".into(),
            ],
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            name: "Kanal Player".into(),
            description: "Cross-platform streaming apps for a regional video service, \
                          spanning phones, the web, and Roku set-top boxes."
                .into(),
            technologies: tags(&["React Native", "React", "BrightScript", "HLS"]),
            tech_stack: tags(&["React Native", "React", "BrightScript", "HLS"]),
            duration: "2021 - 2022".into(),
            links: ProjectLinks {
                website: Some("https://watch.kanal.example.io".into()),
                android: Some("https://play.google.com/store/apps/details?id=io.kanal".into()),
                // still in App Store review
                ios: Some("#".into()),
                roku: Some("https://channelstore.roku.com/details/kanal".into()),
                ..Default::default()
            },
            highlights: vec![
                "Single design language across four platforms".into(),
                "Adaptive bitrate playback tuned for low-bandwidth regions".into(),
                "Store-certified on Google Play and the Roku channel store".into(),
            ],
        },
        Project {
            name: "Tandur".into(),
            description: "A garden-planning app that schedules planting and watering \
                          reminders from local climate data."
                .into(),
            technologies: tags(&["React Native", "TypeScript", "SQLite"]),
            tech_stack: tags(&["React Native", "TypeScript", "SQLite"]),
            duration: "2022".into(),
            links: ProjectLinks {
                git: Some("https://github.com/atanaka/tandur".into()),
                android: Some("https://play.google.com/store/apps/details?id=dev.tanaka.tandur".into()),
                ios: Some("https://apps.apple.com/app/tandur/id1590016713".into()),
                ..Default::default()
            },
            highlights: vec![
                "Fully offline; climate tables bundled at build time".into(),
                "4.7-star average across 1,200 store reviews".into(),
            ],
        },
        Project {
            name: "Warung POS".into(),
            description: "Point-of-sale web app for small food stalls with receipt \
                          printing and daily cash reconciliation."
                .into(),
            technologies: tags(&["Next.js", "tRPC", "PostgreSQL", "Tailwind CSS"]),
            tech_stack: tags(&["Next.js", "tRPC", "PostgreSQL", "Tailwind CSS"]),
            duration: "2023".into(),
            links: ProjectLinks {
                git: Some("https://github.com/atanaka/warung-pos".into()),
                demo: Some("https://pos-demo.tanaka.dev".into()),
                ..Default::default()
            },
            highlights: vec![
                "Runs on a $60 Android tablet with a bluetooth receipt printer".into(),
                "Used daily by eleven stalls in two markets".into(),
            ],
        },
        Project {
            name: "cv-deck".into(),
            description: "This presentation: a slide deck and portfolio page rendered \
                          from a single CV data file."
                .into(),
            technologies: tags(&["Rust", "egui"]),
            tech_stack: tags(&["Rust", "egui"]),
            duration: "2024".into(),
            links: ProjectLinks {
                git: Some("https://github.com/atanaka/cvdeck".into()),
                ..Default::default()
            },
            highlights: vec![
                "Keyboard-driven slide navigation with auto-play".into(),
                "Same data renders as a deck or a scrolling portfolio".into(),
            ],
        },
        Project {
            name: "lint-stage-live".into(),
            description: "Editor extension that runs staged-file linters on save and \
                          shows results inline."
                .into(),
            technologies: tags(&["TypeScript", "VS Code API"]),
            tech_stack: tags(&["TypeScript", "VS Code API"]),
            duration: "2020".into(),
            links: ProjectLinks {
                git: Some("https://github.com/atanaka/lint-stage-live".into()),
                website: Some("#".into()),
                ..Default::default()
            },
            highlights: vec!["9k installs on the extension marketplace".into()],
        },
    ]
}

fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            category: "Programming Languages".into(),
            items: tags(&["TypeScript", "JavaScript", "Rust", "Kotlin", "SQL"]),
        },
        SkillCategory {
            category: "Frameworks & Libraries".into(),
            items: tags(&[
                "React",
                "React Native",
                "Next.js",
                "Vue.js",
                "Redux",
                "GraphQL",
            ]),
        },
        SkillCategory {
            category: "Tools & Databases".into(),
            items: tags(&[
                "Git",
                "Docker",
                "PostgreSQL",
                "Firebase",
                "Figma",
                "GitHub Actions",
            ]),
        },
        SkillCategory {
            category: "Languages".into(),
            items: tags(&["Indonesian (native)", "English (fluent)", "Japanese (basic)"]),
        },
        SkillCategory {
            category: "Coursework & Concepts".into(),
            items: tags(&[
                "Clean architecture",
                "Accessibility",
                "Performance profiling",
                "Offline-first design",
                "CI/CD",
            ]),
        },
    ]
}

fn organizational() -> Vec<OrganizationalExperience> {
    vec![
        OrganizationalExperience {
            title: "Co-organizer".into(),
            organization: "JakartaJS Meetup".into(),
            period: "2021 - Present".into(),
            achievements: vec![
                "Programs six meetups a year for a 3,000-member community".into(),
                "Started a first-time-speaker track with rehearsal mentoring".into(),
            ],
        },
        OrganizationalExperience {
            title: "Head of Media Division".into(),
            organization: "ITB Computer Science Student Association".into(),
            period: "2017 - 2018".into(),
            achievements: vec![
                "Led a nine-person team covering department events".into(),
                "Rebuilt the association website visited by 10k students a year".into(),
            ],
        },
    ]
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
