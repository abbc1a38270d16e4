//! Site content: skills, projects, experience records, figures, contact
//! details.
//!
//! Everything the page shows that is data rather than behavior lives here,
//! so the section components stay markup plus wiring. Experience records
//! feed the tabbed browser and its modal; the rest renders in place.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use viewstate::experience::{Experience, ExperienceTab};

// --- Hero ---

/// Portrait shown beside the hero copy.
pub const SELF_IMAGE: &str = "/self-image.png";

/// The downloadable CV linked from the navigation menu.
pub const CV_HREF: &str = "/cv.pdf";

/// One animated figure under the hero copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    /// Value the count-up animation lands on.
    pub target: f64,
    /// Fraction digits to render (GPA wants two, counts want none).
    pub decimals: u32,
    pub label: &'static str,
}

/// The hero figures. Record counts derive from the lists they describe so
/// the numbers cannot drift from the data.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn counters() -> [Counter; 4] {
    [
        Counter { target: 3.88, decimals: 2, label: "GPA" },
        Counter { target: PROJECTS.len() as f64, decimals: 0, label: "Work Project" },
        Counter {
            target: organization_experiences().len() as f64,
            decimals: 0,
            label: "Organization Experience",
        },
        Counter {
            target: professional_experiences().len() as f64,
            decimals: 0,
            label: "Professional Experience",
        },
    ]
}

// --- Skills ---

/// One entry in the technology grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub image: &'static str,
    pub title: &'static str,
}

pub const SKILLS: [Skill; 23] = [
    Skill { image: "/html.png", title: "html" },
    Skill { image: "/css.png", title: "css" },
    Skill { image: "/javascript.png", title: "javascript" },
    Skill { image: "/tailwind.png", title: "tailwind css" },
    Skill { image: "/react.png", title: "react js" },
    Skill { image: "/php.png", title: "php" },
    Skill { image: "/laravel.png", title: "laravel" },
    Skill { image: "/python.png", title: "python" },
    Skill { image: "/sqllite.png", title: "sqlite" },
    Skill { image: "/mysql.png", title: "mysql" },
    Skill { image: "/mongodb.png", title: "mongo db" },
    Skill { image: "/express.svg", title: "express js" },
    Skill { image: "/java.png", title: "java" },
    Skill { image: "/linux.png", title: "linux" },
    Skill { image: "/burpsuite.png", title: "burpsuite" },
    Skill { image: "/wireshark.png", title: "wireshark" },
    Skill { image: "/autopsy.png", title: "autopsy" },
    Skill { image: "/docker.png", title: "docker" },
    Skill { image: "/git.png", title: "git" },
    Skill { image: "/gdocs.png", title: "gdocs" },
    Skill { image: "/spreadsheet.png", title: "spreadsheet" },
    Skill { image: "/canva.png", title: "canva" },
    Skill { image: "/figma.png", title: "figma" },
];

pub const SOFT_SKILLS: [&str; 7] = [
    "#Teamwork",
    "#TimeManagement",
    "#Leadership",
    "#ProblemSolving",
    "#AnalyticalThinking",
    "#Adaptability",
    "#EmotionalIntelligence",
];

// --- Projects ---

/// One project showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    /// One-line teaser shown before hover.
    pub brief: &'static str,
    /// Full description revealed on hover.
    pub description: &'static str,
    /// Repository link.
    pub link: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        image: "/bunbelievable.png",
        title: "Bunbelievable",
        brief: "A bakery shop web application",
        description: "built with HTML, CSS, and JavaScript, I developed the category and product \
                      description pages. I focused on creating a responsive and user-friendly \
                      interface that allows users to easily explore different types of bread and \
                      view detailed product information, including images, prices, and ingredients.",
        link: "https://github.com/cicuut/Bunbeliveable",
    },
    Project {
        image: "/lunar.jpg",
        title: "LUNAR AI",
        brief: "A chatbot mobile application",
        description: "integrates the OpenAI API to create a chatbot with multiple sensors, offering \
                      real-time, personalized interactions. I contributed by designing the UI/UX \
                      layouts and implementing the SQLite database for efficient data management, \
                      ensuring a seamless user experience.",
        link: "https://github.com/cicuut/Lunar-AI",
    },
    Project {
        image: "/ticketopia.png",
        title: "Ticketopia",
        brief: "A ticketing web application",
        description: "I built a ticketing website using PHP and MySQL, where I developed the home \
                      page and event detail pages. The site dynamically displays events from the \
                      database, with each event page showing key info like date, location, and \
                      ticket details. This project strengthened my skills in backend development \
                      and database integration.",
        link: "https://github.com/cicuut/Ticketopia",
    },
    Project {
        image: "/stepcure101.png",
        title: "Stepcure 101",
        brief: "A risk assessment web application",
        description: "designed for assessing risks and managing threat intelligence. I contributed \
                      to both the frontend and backend development, ensuring a seamless user \
                      experience and efficient data processing. The application utilizes MongoDB \
                      for data storage and integrates with the MISP API to provide real-time \
                      threat intelligence.",
        link: "https://github.com/cicuut/Stepcure101",
    },
    Project {
        image: "/moodly.jpg",
        title: "Moodly",
        brief: "A to-do-list mobile application",
        description: "helps users manage tasks based on their mood. I was responsible for creating \
                      all the UI/UX layouts and implementing key functionalities, including \
                      login/logout, adding tasks, updating task status, and handling user mood \
                      input to tailor task suggestions accordingly.",
        link: "https://github.com/cicuut/Moodly",
    },
    Project {
        image: "/portofolio.png",
        title: "Personal Portofolio",
        brief: "A personal portofolio web application",
        description: "Developed my personal portfolio as a responsive single-page application using \
                      React.js and Tailwind CSS. To create a dynamic and engaging user experience, \
                      I implemented various interactive UI animations (such as those found on \
                      ReactBits) to build a polished, modern interface.",
        link: "https://github.com/cicuut/cica-porto",
    },
];

// --- Experiences ---

fn exp(
    id: u32,
    position: &str,
    organization: &str,
    year: &str,
    description: &str,
    images: &[&str],
) -> Experience {
    Experience {
        id,
        position: position.to_owned(),
        organization: organization.to_owned(),
        year: year.to_owned(),
        description: description.to_owned(),
        images: images.iter().map(|image| (*image).to_owned()).collect(),
    }
}

/// The records behind the given tab, in display order.
#[must_use]
pub fn experiences_for(tab: ExperienceTab) -> Vec<Experience> {
    match tab {
        ExperienceTab::Organization => organization_experiences(),
        ExperienceTab::Professional => professional_experiences(),
    }
}

/// Volunteer and committee roles, newest last.
#[must_use]
pub fn organization_experiences() -> Vec<Experience> {
    vec![
        exp(
            1,
            "Guard Staff",
            "Cultural Festival, PUSB",
            "2023",
            "I ensured the safety and smooth flow of activities by managing crowd control, \
             monitoring access, and responding to emergencies. This role strengthened my \
             communication, problem-solving, and situational awareness skills while ensuring a \
             safe and enjoyable experience for all participants.",
            &[
                "/guard-culfest-1.jpg",
                "/guard-culfest-2.jpg",
                "/guard-culfest-3.jpg",
                "/guard-culfest-4.jpg",
                "/guard-culfest-5.jpg",
            ],
        ),
        exp(
            2,
            "Vice Project Manager",
            "Comparative Study, PUMA IT",
            "2023-2024",
            "I helped lead the planning and execution of a program that promoted knowledge \
             exchange and cross-cultural understanding. I collaborated on strategic planning, \
             coordinated a diverse team, managed event logistics, engaged with institutional \
             partners, and supported budget oversight.",
            &[
                "/comstud-2023-1.jpg",
                "/comstud-2023-2.jpg",
                "/comstud-2023-3.jpg",
                "/comstud-2023-4.jpg",
                "/comstud-2023-5.jpg",
            ],
        ),
        exp(
            3,
            "Liaison Officer Staff",
            "Company Visit, PUMA IT",
            "2023-2024",
            "I facilitated communication and coordination between our team and partner \
             organizations. My role involved reaching out to prospective companies, building \
             professional relationships, and aligning company expertise with event goals.",
            &[
                "/comvis-2024-1.jpg",
                "/comvis-2024-2.jpg",
                "/comvis-2024-3.jpg",
                "/comvis-2024-4.jpg",
            ],
        ),
        exp(
            4,
            "Member of Brand & Communication",
            "Impact Circle 8.0, AIESEC in PU",
            "2023-2024",
            "Focused on crafting impactful strategies and visuals that connect with diverse \
             audiences. My role includes developing brand campaigns, designing engaging content, \
             managing digital platforms, and leveraging analytics for data-driven insights.",
            &["/ic-1.jpg", "/ic-2.jpg", "/ic-3.jpg", "/ic-4.jpg"],
        ),
        exp(
            5,
            "Guard Staff",
            "CSGO, PUFA Computing",
            "2024",
            "I ensured the safety and smooth flow of activities by managing crowd control, \
             monitoring access, and responding to emergencies. I provided assistance to \
             attendees, maintained surveillance for security threats, and supported event setup \
             and teardown.",
            &["/csgo-1.jpg", "/csgo-2.jpg", "/csgo-3.jpg", "/csgo-4.jpg"],
        ),
        exp(
            6,
            "Event Organizer Staff",
            "Cultural Festival, PUSB",
            "2024-2025",
            "I helped plan and execute a vibrant celebration that promoted cultural awareness. I \
             led a team of international volunteers, coordinated performers, and ensured smooth \
             on-site operations. This role strengthened my skills in event planning, team \
             coordination, and problem-solving.",
            &[
                "/culfest2025-1.jpg",
                "/culfest2025-2.jpg",
                "/culfest2025-3.jpg",
                "/culfest2025-4.jpg",
                "/culfest2025-5.jpg",
            ],
        ),
        exp(
            7,
            "Crowd Control Staff",
            "Student and Work Abord Festival, Schoters by Ruang Guru",
            "2024",
            "I ensure safe, organized, and enjoyable event environments. Managing large crowds, \
             guiding attendee movement, enforcing safety protocols, and responding swiftly to \
             potential risks or emergencies.",
            &["/swaf-1.png", "/swaf-2.jpg", "/swaf-3.jpg"],
        ),
        exp(
            8,
            "PIC of Liaison Officer",
            "Temu Alumni, PUMA IT",
            "2024",
            "I led a team in managing alumni outreach, ensuring clear communication and strong \
             participation. I was responsible for coordinating with alumni, maintaining positive \
             relationships, and aligning their involvement with the event\u{2019}s objectives.",
            &["/temualumni-1.jpg", "/temualumni-2.jpg", "/temualumni-3.jpg"],
        ),
        exp(
            9,
            "Sponsorship Staff",
            "Technology Exploration, PUMA IT",
            "2024",
            "I was responsible for securing and managing partnerships to support our events. I \
             conducted outreach to potential sponsors, created tailored proposals, and negotiated \
             mutually beneficial agreements. I also ensured sponsor visibility through branding \
             integration and maintained strong, ongoing relationships.",
            &["/techx-1.jpg", "/techx-2.jpg", "/techx-3.jpg", "/techx-4.jpg"],
        ),
        exp(
            10,
            "Delegates Service Staff",
            "LOVE YOUth, AIESEC in PU",
            "2024-2025",
            "I conducted interviews and maintained effective communication via WhatsApp to ensure \
             a smooth onboarding process. I built strong relationships by understanding \
             participants\u{2019} needs, offering personalized support, and adapting to different \
             personalities.",
            &["/loveyouth-1.jpg", "/loveyouth-2.jpg"],
        ),
        exp(
            11,
            "Supervisor",
            "Guest Lecture, PUMA IT",
            "2024",
            "I directed the committee in bringing industry professionals to campus for a seminar. \
             I mentored the Project Manager and Vice PM, providing strategic guidance and \
             problem-solving support to ensure a successful event.",
            &[
                "/guest-lecture-1.jpg",
                "/guest-lecture-2.jpg",
                "/guest-lecture-3.jpg",
                "/guest-lecture-4.jpg",
            ],
        ),
        exp(
            12,
            "Supervisor",
            "Informatics Connect, PUMA IT",
            "2025",
            "I directed committees in executing a program with a partner university. I mentored \
             the PM and Vice PM, providing strategic guidance and helping resolve issues while \
             overseeing all logistics. My role concluded with analyzing our findings to present a \
             final report with actionable recommendations to our leadership.",
            &["/icon-1.jpg", "/icon-2.jpg", "/icon-3.jpg", "/icon-4.jpg"],
        ),
        exp(
            13,
            "Liaison Officer Staff",
            "Company Visit, PUMA IT",
            "2025",
            "I facilitated communication and coordination between our team and partner \
             organizations. My role involved reaching out to prospective companies, building \
             professional relationships, and aligning company expertise with event goals.",
            &[
                "/comvis-2025-1.jpg",
                "/comvis-2025-2.jpg",
                "/comvis-2025-3.jpg",
                "/comvis-2025-4.jpg",
                "/comvis-2025-5.jpg",
            ],
        ),
    ]
}

/// Paid and titled roles, newest last.
#[must_use]
pub fn professional_experiences() -> Vec<Experience> {
    vec![
        exp(
            14,
            "Vice of External Relation",
            "PUMA IT",
            "2023-2024",
            "I\u{2019}ve played a key role in organizing major events and fostering strong \
             collaborations with external partners. My responsibilities include coordinating \
             event logistics, maintaining stakeholder engagement, leading internal coordination, \
             and managing public relations.",
            &["/vod-1.jpg", "/vod-2.jpg", "/vod-3.jpg", "/vod-4.jpg", "/vod-5.jpg"],
        ),
        exp(
            15,
            "CX&IR Staff",
            "AFL, AIESEC in PU",
            "2024-2025",
            "Successfully increased participant satisfaction to 93% and exceeded the target by \
             1.44% through excellent service, clear communication via WhatsApp, and engaging \
             handbook design. I built strong relationships by understanding \
             participants\u{2019} needs and adapting to different personalities.",
            &["/afl-1.jpg", "/afl-2.jpg", "/afl-3.jpg", "/afl-4.jpg"],
        ),
        exp(
            16,
            "Head of External Relation",
            "PUMA IT",
            "2024-2025",
            "I led partnership strategies, managed stakeholder communications, and oversaw events \
             with external parties. I also guided a team to ensure smooth execution and alignment \
             with organizational goals.",
            &["/hod-1.jpg", "/hod-2.jpg", "/hod-3.jpg", "/hod-4.jpg"],
        ),
        exp(
            17,
            "Web Developer Intern",
            "PT. Kurnia Ciptamoda Gemilang",
            "2025 - Present",
            "I was responsible for managing weekly content refreshes for the Charles & Keith and \
             Pedro e-commerce platforms, ensuring all product and promotional information was \
             accurate and current. I was also responsible for revising and optimizing a library \
             of 10+ web articles, aligning them with new product launches and current marketing \
             campaigns.",
            &["/kcg-1.jpg", "/kcg-2.jpg", "/kcg-3.jpg", "/kcg-4.jpg"],
        ),
    ]
}

// --- Contact ---

pub const PHONE: &str = "087805801599";
pub const EMAIL: &str = "005cica@gmail.com";
pub const LOCATION: &str = "Bekasi, Indonesia";

/// One social profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: [Social; 3] = [
    Social {
        label: "Instagram",
        href: "https://www.instagram.com/isyaaamghfra?igsh=a3Jnd292ejlzeWdt",
    },
    Social { label: "GitHub", href: "https://github.com/cicuut" },
    Social {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/isya-maghfira-zalfa-8b707828b/",
    },
];
