use std::collections::HashSet;

use thiserror::Error;

use crate::nav::header::NavEntry;

/// Ids of the page sections.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const EXPERIENCE: &str = "experience";
    pub const WHO_I_HELP: &str = "who-i-help";
    pub const APPROACH: &str = "approach";
    pub const STORY: &str = "story";
    pub const PROCESS: &str = "process";
    pub const SERVICES: &str = "services";
    pub const BOOK: &str = "book";
    pub const TESTIMONIALS: &str = "testimonials";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Credibility,
    WhoIHelp,
    Approach,
    Story,
    Process,
    Services,
    Booking,
    Testimonials,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Hero,
        SectionKind::Credibility,
        SectionKind::WhoIHelp,
        SectionKind::Approach,
        SectionKind::Story,
        SectionKind::Process,
        SectionKind::Services,
        SectionKind::Booking,
        SectionKind::Testimonials,
    ];
}

/// One block of the page. The page renders `SECTIONS` in order and gives each block its `id`,
/// so these ids are exactly the scroll destinations that exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub id: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { kind: SectionKind::Hero, id: anchors::HOME },
    Section { kind: SectionKind::Credibility, id: anchors::EXPERIENCE },
    Section { kind: SectionKind::WhoIHelp, id: anchors::WHO_I_HELP },
    Section { kind: SectionKind::Approach, id: anchors::APPROACH },
    Section { kind: SectionKind::Story, id: anchors::STORY },
    Section { kind: SectionKind::Process, id: anchors::PROCESS },
    Section { kind: SectionKind::Services, id: anchors::SERVICES },
    Section { kind: SectionKind::Booking, id: anchors::BOOK },
    Section { kind: SectionKind::Testimonials, id: anchors::TESTIMONIALS },
];

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::new("About", anchors::STORY),
    NavEntry::new("Approach", anchors::APPROACH),
    NavEntry::new("Services", anchors::SERVICES),
    NavEntry::new("Testimonials", anchors::TESTIMONIALS),
];

pub const BOOK_CTA: NavEntry = NavEntry::new("Book Alignment Call", anchors::BOOK);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("navigation entry \"{label}\" points at #{target}, which no section provides")]
    UnknownAnchor {
        label: &'static str,
        target: &'static str,
    },
    #[error("navigation target #{0} is listed more than once")]
    DuplicateTarget(&'static str),
}

pub fn validate_nav(entries: &[NavEntry], sections: &[Section]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !sections.iter().any(|section| section.id == entry.target) {
            return Err(ContentError::UnknownAnchor {
                label: entry.label,
                target: entry.target,
            });
        }
        if !seen.insert(entry.target) {
            return Err(ContentError::DuplicateTarget(entry.target));
        }
    }
    Ok(())
}

/// Checks every link the page renders against the sections it renders.
pub fn validate_site() -> Result<(), ContentError> {
    validate_nav(NAV_ENTRIES, SECTIONS)?;
    validate_nav(&[BOOK_CTA], SECTIONS)
}

pub struct Hero {
    pub title_lead: &'static str,
    pub title_highlight: &'static str,
    pub intro: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub photo: &'static str,
    pub photo_alt: &'static str,
}

pub const HERO: Hero = Hero {
    title_lead: "Coaching for Professionals Ready to ",
    title_highlight: "Move Forward",
    intro: "I'm Robert Marshall, a former VP who spent three decades helping teams grow, navigate change, and find clarity. Now I help individuals do the same.",
    primary_cta: "Book Your Free Alignment Call",
    secondary_cta: "Contact via Email",
    photo: "/assets/robert.jpg",
    photo_alt: "Robert Marshall",
};

pub const CREDIBILITY_HEADING: &str = "Experience leading teams at";

pub const COMPANIES: &[&str] = &["AKQA", "Razorfish", "R/GA", "Fox", "The New York Times"];

pub struct Profile {
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHO_I_HELP_INTRO: &str =
    "My coaching is designed for people who are ready to do the work but need a partner to help them see the way.";

pub const PROFILES: &[Profile] = &[
    Profile {
        title: "Mid-to-Late Career Professionals",
        description: "If you feel stuck, plateaued, or unsure how to reach the next level, we create a path forward.",
    },
    Profile {
        title: "High-Functioning ADHD Adults",
        description: "For those navigating overwhelm, procrastination, or the basics no one teaches, we build systems that work for your brain.",
    },
    Profile {
        title: "Career Transitioners",
        description: "Whether voluntary or involuntary, I help you regain momentum, structure your search, and stay grounded.",
    },
];

pub const APPROACH_INTRO: &str =
    "High-level leadership experience meets human-centered coaching designed to get you unstuck.";

pub const DIFFERENTIATORS: &[&str] = &[
    "A people-first leadership style developed over 30 years across three countries.",
    "VP-level experience managing teams of 40–60 at Fox and The New York Times.",
    "Deep listening that picks up what you say, what you mean, and what you’ve stopped asking yourself.",
    "Clear, actionable goal-setting so you always know your next step.",
    "ADHD-informed coaching based on lived experience.",
    "Warm, direct, judgment-free support.",
];

pub const PHILOSOPHY_QUOTE: &str =
    "I've always been an 80% people, 20% business leader in roles that demanded the opposite.";

pub const STORY: &[&str] = &[
    "I spent three decades building a career in project management and delivery leadership, working at top agencies and later becoming a VP at Fox and The New York Times.",
    "At the height of my career, I realized something important: the parts of my work that energized me most weren’t the business, they were the people. I’ve always been an 80% people, 20% business leader in roles that demanded the opposite.",
    "At the same time, I was diagnosed with ADHD at 48. It explained so much, and showed me that the systems I’d built to thrive could help others too.",
    "I transitioned into coaching at my peak, trained through the Jay Shetty Certification School, and now dedicate my work to helping people grow, get unstuck, and move toward what they truly want next.",
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_INTRO: &str = "A simple, structured process to move you from stuck to action.";

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Alignment Call",
        description: "We explore your goals, your challenges, and whether we’re the right fit. (Free, 30–45 min)",
    },
    Step {
        number: "02",
        title: "Set Clear Goals",
        description: "Together we create a structured, measurable plan tailored to your needs.",
    },
    Step {
        number: "03",
        title: "Bi-Weekly Coaching",
        description: "Every two weeks, we track progress, uncover new insights, and adjust as needed.",
    },
];

pub struct Service {
    pub name: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub featured: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "Six-Session Package",
        badge: "Best Value",
        description: "Pay for five, get six. Ideal for job seekers or anyone navigating major change. Use within three months.",
        cta: "Get Started",
        featured: true,
    },
    Service {
        name: "Individual Sessions",
        badge: "Flexible",
        description: "Flexible, ongoing support for clarity, leadership development, or personal growth.",
        cta: "Book a Session",
        featured: false,
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Robert asked the questions I hadn’t asked myself in years.",
        author: "Senior Manager",
    },
    Testimonial {
        quote: "I left every session with clarity and an actionable next step.",
        author: "Product Lead",
    },
    Testimonial {
        quote: "I landed a new role in eight weeks after struggling for over a year.",
        author: "Client in Transition",
    },
];

pub const FOOTER_HEADING: &str = "Ready to move forward?";
pub const FOOTER_BODY: &str =
    "Whether you’re stuck, overwhelmed, or simply ready for something new, the next step is a conversation.";
pub const CERTIFICATION: &str = "Certified Coach, Jay Shetty Certification School";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shipped_navigation_is_valid() {
        assert_eq!(validate_site(), Ok(()));
    }

    #[test]
    fn navigation_order_is_display_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, vec!["About", "Approach", "Services", "Testimonials"]);
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        let entries = [NavEntry::new("Blog", "blog")];
        assert_eq!(
            validate_nav(&entries, SECTIONS),
            Err(ContentError::UnknownAnchor {
                label: "Blog",
                target: "blog",
            })
        );
    }

    #[test]
    fn duplicate_target_is_rejected() {
        let entries = [
            NavEntry::new("About", anchors::STORY),
            NavEntry::new("My Story", anchors::STORY),
        ];
        assert_eq!(
            validate_nav(&entries, SECTIONS),
            Err(ContentError::DuplicateTarget("story"))
        );
    }

    #[test]
    fn error_message_names_the_link() {
        let err = ContentError::UnknownAnchor {
            label: "Blog",
            target: "blog",
        };
        assert_eq!(
            err.to_string(),
            "navigation entry \"Blog\" points at #blog, which no section provides"
        );
    }

    #[test]
    fn section_ids_are_unique() {
        let unique: HashSet<_> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(unique.len(), SECTIONS.len());
    }

    #[test]
    fn every_section_kind_is_on_the_page_once() {
        for kind in SectionKind::ALL {
            let count = SECTIONS.iter().filter(|section| section.kind == kind).count();
            assert_eq!(count, 1, "{:?}", kind);
        }
    }

    #[test]
    fn dropping_a_section_invalidates_its_links() {
        let without_approach: Vec<Section> = SECTIONS
            .iter()
            .copied()
            .filter(|section| section.kind != SectionKind::Approach)
            .collect();
        assert_eq!(
            validate_nav(NAV_ENTRIES, &without_approach),
            Err(ContentError::UnknownAnchor {
                label: "Approach",
                target: "approach",
            })
        );
    }

    #[test]
    fn booking_cta_needs_the_booking_section() {
        let without_booking: Vec<Section> = SECTIONS
            .iter()
            .copied()
            .filter(|section| section.kind != SectionKind::Booking)
            .collect();
        assert!(validate_nav(NAV_ENTRIES, &without_booking).is_ok());
        assert_eq!(
            validate_nav(&[BOOK_CTA], &without_booking),
            Err(ContentError::UnknownAnchor {
                label: "Book Alignment Call",
                target: "book",
            })
        );
    }
}
