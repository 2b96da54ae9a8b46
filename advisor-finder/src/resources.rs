//! Advisor-search guide
//!
//! Static advice on cold emailing, coffee chats, questions to ask, the
//! application timeline and red flags.

#[derive(Debug, Clone, Copy)]
pub enum Block {
    Text {
        heading: &'static str,
        body: &'static str,
    },
    List {
        heading: &'static str,
        items: &'static [&'static str],
    },
    /// Label/description pairs
    Pairs {
        heading: &'static str,
        items: &'static [(&'static str, &'static str)],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub title: &'static str,
    pub url: &'static str,
}

pub const GUIDE_TITLE: &str = "How to Find Your Perfect Research Advisor";
pub const GUIDE_SUBTITLE: &str = "A comprehensive guide to cold emailing professors, conducting coffee chats, and evaluating potential PhD advisors.";

pub const COLD_EMAIL_TEMPLATE: &str = "\
Dear Professor [Last Name],

My name is [Your Name], and I am a [Your Position] in [Field] from [University].
I am writing to inquire about joining your research group as a PhD student for [Term/Year].

I have been following your lab's work on [Research Area], particularly your recent paper,
\"[Paper Title],\" published in [Venue]. I found your approach to [Specific Detail] innovative.
[One thoughtful question about their methodology].

My background includes [2 relevant experiences]. I have attached my CV for reference.
Would you be available for a brief 20-minute call to discuss potential research directions?

Thank you for your time and consideration.
Best regards,
[Your Name]";

pub const SECTIONS: &[Section] = &[
    Section {
        id: "cold-email",
        title: "Cold Emailing Professors",
        intro: "Your first impression matters. Here's how to craft an email that gets responses.",
        blocks: &[
            Block::Pairs {
                heading: "Email Structure (3-4 Short Paragraphs Max)",
                items: &[
                    ("Introduction", "Your name, current position, and how you found them."),
                    (
                        "Specific interest",
                        "Reference a specific paper they authored. Ask a thoughtful question about their methodology.",
                    ),
                    (
                        "Your background",
                        "Briefly mention 1-2 relevant experiences that connect to their work.",
                    ),
                    ("The ask", "Request a brief 15-20 minute call to discuss their research."),
                ],
            },
            Block::Text {
                heading: "Email Template",
                body: COLD_EMAIL_TEMPLATE,
            },
            Block::List {
                heading: "Do",
                items: &[
                    "Reference a specific recent paper",
                    "Ask a thoughtful question about their work",
                    "Keep it under 200 words",
                    "Send during business hours (Tue-Thu optimal)",
                    "Proofread for typos and correct title",
                ],
            },
            Block::List {
                heading: "Don't",
                items: &[
                    "Use generic templates with no personalization",
                    "Write more than 4 paragraphs",
                    "Get their name or title wrong",
                    "Send the same email to multiple professors (they talk)",
                    "Include excessive flattery without substance",
                ],
            },
            Block::Pairs {
                heading: "Follow-Up Timing",
                items: &[
                    ("First Follow-Up", "7-14 days"),
                    ("Weekend Emails", "Wait until Tuesday"),
                    ("Max Follow-Ups", "1 (then move on)"),
                ],
            },
        ],
    },
    Section {
        id: "coffee-chat",
        title: "Coffee Chats",
        intro: "How to make the most of your 20-30 minutes with a potential advisor.",
        blocks: &[
            Block::Pairs {
                heading: "Format",
                items: &[
                    ("Duration", "15-30 minutes"),
                    ("Structure", "20 min questions, 10 min you"),
                    ("Format", "Video call preferred"),
                ],
            },
            Block::List {
                heading: "Preparation Checklist",
                items: &[
                    "Research their recent publications (last 2-3 years)",
                    "Prepare 5-7 questions (see next section)",
                    "Review current lab members' profiles",
                    "Prepare 2-minute summary of your background",
                    "Have 1-2 intelligent questions about their recent work",
                    "Test your video/audio setup beforehand",
                ],
            },
            Block::List {
                heading: "Etiquette",
                items: &[
                    "If you requested 30 minutes, wrap up at 30 minutes. Give them an out: \"I know we only have a few more minutes...\"",
                    "Send a thank-you email within 24 hours referencing something specific from your conversation.",
                    "Get their phone number as backup for technical issues. Video is preferred over audio-only.",
                ],
            },
        ],
    },
    Section {
        id: "questions",
        title: "Questions to Ask",
        intro: "These questions will help you evaluate fit and avoid problematic advisors.",
        blocks: &[
            Block::List {
                heading: "Mentorship Style",
                items: &[
                    "Do you consider yourself more of a hands-on or hands-off advisor?",
                    "How frequently do you meet with students one-on-one?",
                    "How do you give feedback on papers and research?",
                    "What support do you provide when students struggle?",
                ],
            },
            Block::List {
                heading: "Lab Culture",
                items: &[
                    "What is the lab structure? How collaborative are projects?",
                    "Are there regular lab meetings? What do they look like?",
                    "Do students work in a shared physical space?",
                    "How would you describe the lab culture?",
                ],
            },
            Block::List {
                heading: "Funding & Support",
                items: &[
                    "Are you accepting students this year, and is the position funded?",
                    "Will funding remain stable throughout my PhD?",
                    "What happens if primary funding ends?",
                    "How do you view students applying for external fellowships?",
                ],
            },
            Block::List {
                heading: "Student Outcomes",
                items: &[
                    "What is the average time to graduation for your students?",
                    "What have previous students done after graduating?",
                    "How often do you send students to conferences?",
                    "What's your approach to summer internships?",
                ],
            },
            Block::List {
                heading: "Must Ask Current Students (Privately)",
                items: &[
                    "How does the advisor handle conflicts or disagreements?",
                    "Has anyone left the lab? Why?",
                    "What's the advisor's actual availability vs. stated availability?",
                    "Do they support career goals even if different from theirs?",
                ],
            },
        ],
    },
    Section {
        id: "timeline",
        title: "PhD Application Timeline",
        intro: "Month-by-month guide for US PhD programs (Fall admission).",
        blocks: &[
            Block::Pairs {
                heading: "Timeline",
                items: &[
                    (
                        "June - July",
                        "Research programs and fields. Review NSF GRFP requirements if eligible.",
                    ),
                    (
                        "August - September",
                        "Check GRE requirements. Contact letter writers. Draft statements. BEGIN contacting professors.",
                    ),
                    (
                        "October",
                        "PRIME TIME for cold emails. Take/retake GRE. Submit NSF GRFP if applicable.",
                    ),
                    (
                        "November - December",
                        "Finalize statements. Remind letter writers. Submit applications (most deadlines early Dec).",
                    ),
                    (
                        "January",
                        "Receive interview invitations. Focus on current commitments.",
                    ),
                    (
                        "February - March",
                        "Attend interviews (virtual or in-person). Receive decisions.",
                    ),
                    (
                        "April",
                        "Receive fellowship results. COMMIT to program (April 15 deadline).",
                    ),
                ],
            },
            Block::Text {
                heading: "Key Insight",
                body: "Contact professors 6+ months before deadlines (August-October for December deadlines). Early contact matters because not all faculty accept students each year, and professors are overwhelmed with requests close to deadlines.",
            },
        ],
    },
    Section {
        id: "red-flags",
        title: "Red Flags",
        intro: "Warning signs to watch for when evaluating potential advisors.",
        blocks: &[
            Block::Pairs {
                heading: "Critical Warning Signs",
                items: &[
                    (
                        "Poor Communication",
                        "Emails unanswered for days, mysteriously absent, seeming disinterested",
                    ),
                    (
                        "Lack of Mentorship",
                        "New students receive inadequate training, expecting independence without foundation",
                    ),
                    (
                        "Publication Issues",
                        "Current senior students have no publications, poor publication record",
                    ),
                    (
                        "Isolation Tactics",
                        "Discouraging interaction with other scholars, preventing collaboration",
                    ),
                    (
                        "Exploitation",
                        "Asking to run personal errands, ghostwrite reviews, or unpaid work",
                    ),
                    (
                        "Funding Evasiveness",
                        "Avoiding discussion about funding, unable to guarantee support",
                    ),
                ],
            },
            Block::List {
                heading: "How to Vet an Advisor",
                items: &[
                    "Talk to current students privately (without advisor present)",
                    "Contact former students who left the lab (find on LinkedIn)",
                    "Check publication records on Google Scholar (Are students first authors?)",
                    "Ask department for average time-to-degree by advisor",
                    "Attend a lab meeting before committing if possible",
                    "Ask about former students who left. How did the advisor respond?",
                ],
            },
            Block::List {
                heading: "Already in a Bad Situation?",
                items: &[
                    "The best advice: leave as soon as possible. If you can't leave immediately:",
                    "Establish other mentors who can write letters of support",
                    "Start publishing with other collaborators",
                    "Document problematic interactions",
                    "Consult department ombudsperson or graduate advocate",
                ],
            },
        ],
    },
];

pub const FURTHER_READING: &[Link] = &[
    Link {
        title: "Questions to Ask a Prospective Ph.D. Advisor on Visit Day (CMU ML Blog)",
        url: "https://blog.ml.cmu.edu/2020/03/02/questions-to-ask-a-prospective-ph-d-advisor-on-visit-day-with-thorough-and-forthright-explanations/",
    },
    Link {
        title: "The Art of the Coffee Chat (Johns Hopkins Imagine)",
        url: "https://imagine.jhu.edu/blog/2024/09/27/the-art-of-the-coffee-chat-how-to-approach-best-practices-and-navigating-virtual-vs-in-person-interactions/",
    },
];

pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

fn render_block(block: &Block, out: &mut Vec<String>) {
    match block {
        Block::Text { heading, body } => {
            out.push(format!("  {}", heading));
            out.extend(body.lines().map(|l| format!("    {}", l)));
        }
        Block::List { heading, items } => {
            out.push(format!("  {}", heading));
            out.extend(items.iter().map(|i| format!("    • {}", i)));
        }
        Block::Pairs { heading, items } => {
            out.push(format!("  {}", heading));
            out.extend(items.iter().map(|(k, v)| format!("    {}: {}", k, v)));
        }
    }
}

/// The whole guide as terminal text
pub fn render_text() -> String {
    let mut out = vec![GUIDE_TITLE.to_string(), GUIDE_SUBTITLE.to_string()];

    for (i, section) in SECTIONS.iter().enumerate() {
        out.push(String::new());
        out.push(format!("{}. {}", i + 1, section.title));
        out.push(format!("  {}", section.intro));
        for block in section.blocks {
            out.push(String::new());
            render_block(block, &mut out);
        }
    }

    out.push(String::new());
    out.push("Further reading".to_string());
    out.extend(
        FURTHER_READING
            .iter()
            .map(|l| format!("  {}\n    {}", l.title, l.url)),
    );
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["cold-email", "coffee-chat", "questions", "timeline", "red-flags"]
        );
    }

    #[test]
    fn test_cold_email_has_template_and_do_dont() {
        let cold = section("cold-email").unwrap();
        let headings: Vec<&str> = cold
            .blocks
            .iter()
            .map(|b| match b {
                Block::Text { heading, .. }
                | Block::List { heading, .. }
                | Block::Pairs { heading, .. } => *heading,
            })
            .collect();
        assert!(headings.contains(&"Email Template"));
        assert!(headings.contains(&"Do"));
        assert!(headings.contains(&"Don't"));
    }

    #[test]
    fn test_render_includes_links() {
        let text = render_text();
        assert!(text.starts_with(GUIDE_TITLE));
        assert!(text.contains("Dear Professor [Last Name],"));
        for link in FURTHER_READING {
            assert!(text.contains(link.url));
        }
        assert!(section("nope").is_none());
    }
}
