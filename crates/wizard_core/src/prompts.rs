//! Copy shown by front-ends: the intro screen and the six reflective prompts.

use shared::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub field: FieldName,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const FORM_TITLE: &str = "Reflective Prompts";
pub const FORM_SUBTITLE: &str = "Share your thoughts on your teaching and learning context";
pub const SUBMIT_LABEL: &str = "Generate My SoTL Summary";
pub const REQUIRED_NOTE: &str = "All fields marked as required must be completed";
pub const CUSTOM_PLACEHOLDER: &str = "Please specify...";

pub static PROMPTS: [Prompt; 6] = [
    Prompt {
        field: FieldName::Problem,
        title: "What's a problem you care about in teaching or learning?",
        description: "Think about challenges you've noticed in your teaching practice or student learning experiences.",
        placeholder: "e.g. Students disengage in large lectures",
        required: true,
    },
    Prompt {
        field: FieldName::Collaborator,
        title: "Who might you collaborate with on this?",
        description: "SoTL is often most effective as a collaborative endeavor.",
        placeholder: "Select a potential collaborator",
        required: true,
    },
    Prompt {
        field: FieldName::DataSources,
        title: "What existing data source might you draw on?",
        description: "Select all that apply. These could provide evidence for your inquiry.",
        placeholder: "",
        required: true,
    },
    Prompt {
        field: FieldName::FeltenPrinciples,
        title: "Which of Felten's five principles do you already see in play?",
        description: "Select any that resonate with your current thinking. Optional, but helpful for reflection.",
        placeholder: "",
        required: false,
    },
    Prompt {
        field: FieldName::NextStep,
        title: "What's your next small step?",
        description: "Think of one concrete action you could take to move forward.",
        placeholder: "e.g. Set up a meeting with an educational designer",
        required: false,
    },
    Prompt {
        field: FieldName::Timeline,
        title: "When do you hope to take this step?",
        description: "Setting a timeline can help with accountability.",
        placeholder: "Pick a date",
        required: false,
    },
];

pub struct IntroFeature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const INTRO_TITLE: &str = "Start Your SoTL Journey";
pub const INTRO_LEAD: &str = "Reflect on your teaching and learning context. This tool will guide you through a short activity to help you identify a possible SoTL project idea.";
pub const INTRO_NOTE: &str = "Your answers will generate a personalised summary to download or share.";
pub const INTRO_CTA: &str = "Begin Your Reflection";
pub const INTRO_DURATION: &str = "Takes approximately 5-10 minutes to complete";

pub const INTRO_FEATURES: [IntroFeature; 3] = [
    IntroFeature {
        title: "🎯 Inquiry Focused",
        description: "Define teaching and learning problems that matter to you and your students",
    },
    IntroFeature {
        title: "🤝 Collaborative",
        description: "Identify potential partners and build meaningful connections for your research",
    },
    IntroFeature {
        title: "📣 Shareable",
        description: "Create actionable next steps and connect with UNSW SoTL resources",
    },
];

pub fn prompt_for(field: FieldName) -> Option<&'static Prompt> {
    PROMPTS.iter().find(|prompt| prompt.field == field)
}
