//! Narrative copy for compatibility results
//!
//! Curated bundles exist for a subset of pairs. Lookup tries the ordered
//! (child, parent) key first, then the reversed key, and only then falls
//! back to the per-grade template. Curated copy is written so that it reads
//! correctly in either direction.

use crate::domain::entities::{Narrative, NarrativeSource};
use crate::domain::value_objects::{Grade, ZodiacAnimal};

/// A curated narrative bundle for one pair of signs
#[derive(Debug)]
pub struct AuthoredNarrative {
    pub first: ZodiacAnimal,
    pub second: ZodiacAnimal,
    pub summary: &'static str,
    pub description: &'static str,
    pub positive_aspects: [&'static str; 3],
    pub challenges: [&'static str; 3],
    pub advice: [&'static str; 3],
}

impl AuthoredNarrative {
    fn to_narrative(&self) -> Narrative {
        Narrative {
            summary: self.summary.to_string(),
            description: self.description.to_string(),
            positive_aspects: to_owned(&self.positive_aspects),
            challenges: to_owned(&self.challenges),
            advice: to_owned(&self.advice),
        }
    }
}

/// How a narrative was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeLookup {
    /// Curated entry keyed by (child, parent)
    Exact(&'static AuthoredNarrative),
    /// Curated entry keyed by (parent, child)
    Reversed(&'static AuthoredNarrative),
    /// No curated entry; the grade template applies
    Missing,
}

impl PartialEq for AuthoredNarrative {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl Eq for AuthoredNarrative {}

use ZodiacAnimal::*;

pub const AUTHORED_NARRATIVES: &[AuthoredNarrative] = &[
    AuthoredNarrative {
        first: Rat,
        second: Ox,
        summary: "The Rat and the Ox form one of the six harmonies: quick ideas meet steady hands.",
        description: "The Rat's curiosity finds a safe harbour in the Ox's patience. One brings energy and new plans, the other brings follow-through, and each quietly admires what the other does best.",
        positive_aspects: [
            "Plans actually get finished",
            "Calm, predictable routines at home",
            "Deep mutual trust built over time",
        ],
        challenges: [
            "The Rat may find the Ox slow to change",
            "The Ox may see the Rat as scattered",
            "Feelings are shown through deeds rather than words",
        ],
        advice: [
            "Say appreciation out loud, not only through actions",
            "Agree on a few shared rituals and keep them",
            "Leave room for spontaneous plans alongside the routine",
        ],
    },
    AuthoredNarrative {
        first: Rat,
        second: Dragon,
        summary: "The Rat and the Dragon share a trine: ambition and cleverness pulling in the same direction.",
        description: "The Dragon's big vision gives the Rat a stage, and the Rat's sharp eye helps the Dragon land its plans. Encouragement flows easily both ways.",
        positive_aspects: [
            "Strong encouragement of each other's goals",
            "Lively, optimistic home atmosphere",
            "Problems are solved quickly and creatively",
        ],
        challenges: [
            "Both can overcommit to new projects",
            "Pride can get in the way of apologising",
            "Rest is easily neglected",
        ],
        advice: [
            "Celebrate small wins together",
            "Schedule quiet time as seriously as busy time",
            "Take turns leading family decisions",
        ],
    },
    AuthoredNarrative {
        first: Tiger,
        second: Pig,
        summary: "The Tiger and the Pig form a six harmony: courage softened by warmth.",
        description: "The Pig's easygoing generosity calms the Tiger's restless drive, while the Tiger gives the Pig confidence to try new things. The bond feels safe and adventurous at once.",
        positive_aspects: [
            "Generous, forgiving relationship",
            "Adventures feel safe to attempt",
            "Conflicts cool down quickly",
        ],
        challenges: [
            "The Tiger may push too hard",
            "The Pig may avoid necessary confrontation",
            "Spending and indulgence need limits",
        ],
        advice: [
            "Let the quieter one set the pace sometimes",
            "Name problems early instead of smoothing them over",
            "Share one active hobby and one restful one",
        ],
    },
    AuthoredNarrative {
        first: Rabbit,
        second: Dog,
        summary: "The Rabbit and the Dog form a six harmony: gentleness guarded by loyalty.",
        description: "The Dog's protective sincerity gives the sensitive Rabbit a secure base, and the Rabbit's tact eases the Dog's worries. Trust comes naturally.",
        positive_aspects: [
            "Reliable emotional safety",
            "Honest, kind conversations",
            "Shared sense of fairness",
        ],
        challenges: [
            "Both can worry too much",
            "Avoidance of conflict may let issues linger",
            "Change can feel threatening to both",
        ],
        advice: [
            "Reassure each other before big transitions",
            "Keep a regular, low-pressure time to talk",
            "Try new experiences in small steps",
        ],
    },
    AuthoredNarrative {
        first: Dragon,
        second: Rooster,
        summary: "The Dragon and the Rooster form a six harmony: vision paired with precision.",
        description: "The Dragon dreams big and the Rooster makes sure the details are right. Each respects the other's competence, and together they achieve a great deal.",
        positive_aspects: [
            "High standards met together",
            "Clear roles and responsibilities",
            "Pride in each other's achievements",
        ],
        challenges: [
            "Criticism can sting the proud Dragon",
            "The Rooster may feel overshadowed",
            "Both like to be right",
        ],
        advice: [
            "Give praise before feedback",
            "Share credit for joint successes",
            "Pick battles; not every detail matters",
        ],
    },
    AuthoredNarrative {
        first: Snake,
        second: Monkey,
        summary: "The Snake and the Monkey form a six harmony: calm insight meets playful invention.",
        description: "The Monkey keeps life light and inventive, while the Snake adds depth and perspective. They intrigue each other and rarely grow bored.",
        positive_aspects: [
            "Stimulating conversations",
            "Complementary problem-solving styles",
            "Humour defuses tension",
        ],
        challenges: [
            "The Snake may find the Monkey unserious",
            "The Monkey may find the Snake secretive",
            "Trust needs to be stated, not assumed",
        ],
        advice: [
            "Share feelings openly, even small ones",
            "Turn learning into a shared game",
            "Respect each other's need for solitude",
        ],
    },
    AuthoredNarrative {
        first: Horse,
        second: Goat,
        summary: "The Horse and the Goat form a six harmony: freedom balanced by tenderness.",
        description: "The Goat's warmth gives the free-spirited Horse a home to return to, and the Horse's cheer lifts the Goat's moods. Affection is easy and visible.",
        positive_aspects: [
            "Open affection",
            "Creative, cheerful home life",
            "Each forgives quickly",
        ],
        challenges: [
            "The Horse may feel tied down",
            "The Goat may feel left behind",
            "Decisions can drift without a plan",
        ],
        advice: [
            "Balance outings with quiet time together",
            "Make decisions explicitly and write them down",
            "Check in when one of you is away a lot",
        ],
    },
    AuthoredNarrative {
        first: Tiger,
        second: Rabbit,
        summary: "The Tiger and the Rabbit share the spring season: bold and gentle sides of the same energy.",
        description: "Both belong to wood, so they understand each other's pace. The Tiger charges ahead while the Rabbit smooths the path behind, and the bond is warm and steady.",
        positive_aspects: [
            "Natural understanding of each other's moods",
            "Encouragement without rivalry",
            "Growth-minded home",
        ],
        challenges: [
            "The Tiger's bluntness can hurt the Rabbit",
            "The Rabbit may hide disagreement",
            "Energy levels differ",
        ],
        advice: [
            "Soften the delivery of hard truths",
            "Ask directly for opinions",
            "Plan rest after busy stretches",
        ],
    },
    AuthoredNarrative {
        first: Tiger,
        second: Tiger,
        summary: "Two Tigers: shared courage and a shared need to lead.",
        description: "Same-sign pairs understand each other instinctively. Two Tigers feed each other's confidence, though both want to be the one in charge.",
        positive_aspects: [
            "Instant understanding",
            "Fearless support of each other",
            "Lots of shared energy",
        ],
        challenges: [
            "Power struggles",
            "Impulsive decisions doubled",
            "Neither backs down easily",
        ],
        advice: [
            "Divide areas where each one leads",
            "Cool off before resolving arguments",
            "Compete on the sports field, not at home",
        ],
    },
    AuthoredNarrative {
        first: Dragon,
        second: Dragon,
        summary: "Two Dragons: grand plans and a crowded spotlight.",
        description: "The Dragon branch punishes itself, so two Dragons amplify both their brilliance and their pride. The bond is ordinary rather than easy and rewards effort.",
        positive_aspects: [
            "Shared ambition",
            "Generous with each other",
            "Inspiring to be around",
        ],
        challenges: [
            "Competing for attention",
            "Stubbornness on both sides",
            "Overcommitment",
        ],
        advice: [
            "Take turns in the spotlight",
            "Admit mistakes first as a habit",
            "Limit how many big projects run at once",
        ],
    },
    AuthoredNarrative {
        first: Ox,
        second: Horse,
        summary: "The Ox and the Horse form a harm pair: steady routine against restless freedom.",
        description: "The Ox values predictability while the Horse needs motion and variety. Without care, one feels rushed and the other feels fenced in.",
        positive_aspects: [
            "The Ox offers stability",
            "The Horse offers fresh energy",
            "Both are hard-working",
        ],
        challenges: [
            "Different tempos cause friction",
            "Rules versus freedom arguments",
            "Hurt feelings go unspoken",
        ],
        advice: [
            "Agree on which rules are fixed and which are flexible",
            "Give the restless one regular outlets",
            "Talk about frustrations while they are small",
        ],
    },
    AuthoredNarrative {
        first: Rat,
        second: Rabbit,
        summary: "The Rat and the Rabbit form a punishment pair: sharp wits against a sensitive heart.",
        description: "The Rat's quick remarks can wound the Rabbit, and the Rabbit's withdrawal can puzzle the Rat. Kindness and patience make the difference here.",
        positive_aspects: [
            "Both are perceptive",
            "Both value a comfortable home",
            "Shared love of learning",
        ],
        challenges: [
            "Teasing lands harder than intended",
            "Silence instead of discussion",
            "Misread intentions",
        ],
        advice: [
            "Choose gentle words in tense moments",
            "Ask before assuming what the other meant",
            "Build trust with small, kept promises",
        ],
    },
    AuthoredNarrative {
        first: Rat,
        second: Horse,
        summary: "The Rat and the Horse stand in direct clash: opposite ends of the cycle.",
        description: "Water and fire oppose each other. The Rat calculates and the Horse acts on impulse, so everyday decisions can turn into tugs of war.",
        positive_aspects: [
            "Each shows the other a different way to live",
            "Lively, never dull",
            "Growth through challenge",
        ],
        challenges: [
            "Frequent disagreements over small things",
            "Opposite rhythms of rest and activity",
            "Tempers flare quickly",
        ],
        advice: [
            "Set clear, shared house rules",
            "Use a cooling-off period before settling arguments",
            "Find one activity both genuinely enjoy",
        ],
    },
    AuthoredNarrative {
        first: Ox,
        second: Goat,
        summary: "The Ox and the Goat stand in direct clash: duty against feeling.",
        description: "The Ox expects responsibility and results; the Goat needs gentleness and room to feel. Both mean well but speak different emotional languages.",
        positive_aspects: [
            "Shared devotion to family",
            "The Ox provides structure",
            "The Goat provides warmth",
        ],
        challenges: [
            "Criticism feels harsh to the Goat",
            "Moods feel unreliable to the Ox",
            "Stubbornness on both sides",
        ],
        advice: [
            "Acknowledge feelings before discussing solutions",
            "Explain the reasons behind rules",
            "Spend unstructured time together",
        ],
    },
    AuthoredNarrative {
        first: Tiger,
        second: Monkey,
        summary: "The Tiger and the Monkey stand in direct clash: force against cunning.",
        description: "The Tiger wants to win head-on while the Monkey prefers clever detours. Rivalry comes easily and trust takes deliberate work.",
        positive_aspects: [
            "Both are energetic and bold",
            "Quick to laugh once calm",
            "Push each other to improve",
        ],
        challenges: [
            "Competition turns into conflict",
            "Pranks and pride do not mix",
            "Power struggles over decisions",
        ],
        advice: [
            "Cooperate on shared goals instead of competing",
            "Keep humour kind",
            "Agree in advance who decides what",
        ],
    },
];

/// Find curated copy for a pair: exact key first, then reversed
pub fn lookup(child: ZodiacAnimal, parent: ZodiacAnimal) -> NarrativeLookup {
    if let Some(entry) = AUTHORED_NARRATIVES
        .iter()
        .find(|n| n.first == child && n.second == parent)
    {
        return NarrativeLookup::Exact(entry);
    }

    if let Some(entry) = AUTHORED_NARRATIVES
        .iter()
        .find(|n| n.first == parent && n.second == child)
    {
        return NarrativeLookup::Reversed(entry);
    }

    NarrativeLookup::Missing
}

/// Resolve the narrative for a pair, synthesizing one when none is curated
pub fn resolve(
    child: ZodiacAnimal,
    parent: ZodiacAnimal,
    grade: Grade,
) -> (Narrative, NarrativeSource) {
    match lookup(child, parent) {
        NarrativeLookup::Exact(entry) => (entry.to_narrative(), NarrativeSource::Authored),
        NarrativeLookup::Reversed(entry) => {
            tracing::trace!(%child, %parent, "using reversed narrative key");
            (entry.to_narrative(), NarrativeSource::Authored)
        }
        NarrativeLookup::Missing => {
            tracing::trace!(%child, %parent, %grade, "synthesizing narrative from grade");
            (synthesize(child, parent, grade), NarrativeSource::Synthesized)
        }
    }
}

/// Generic copy for a grade, naming both signs
pub fn synthesize(child: ZodiacAnimal, parent: ZodiacAnimal, grade: Grade) -> Narrative {
    let template = template(grade);
    let child = child.name_en();
    let parent = parent.name_en();

    Narrative {
        summary: template
            .summary
            .replace("{child}", child)
            .replace("{parent}", parent),
        description: template
            .description
            .replace("{child}", child)
            .replace("{parent}", parent),
        positive_aspects: to_owned(&template.positive_aspects),
        challenges: to_owned(&template.challenges),
        advice: to_owned(&template.advice),
    }
}

struct GradeTemplate {
    summary: &'static str,
    description: &'static str,
    positive_aspects: [&'static str; 3],
    challenges: [&'static str; 3],
    advice: [&'static str; 3],
}

fn template(grade: Grade) -> &'static GradeTemplate {
    match grade {
        Grade::Best => &BEST,
        Grade::Good => &GOOD,
        Grade::Average => &AVERAGE,
        Grade::Caution => &CAUTION,
        Grade::Discord => &DISCORD,
    }
}

const BEST: GradeTemplate = GradeTemplate {
    summary: "A {child} child and a {parent} parent are a natural match.",
    description: "The {child} and the {parent} support each other's strengths. Understanding comes easily and the relationship tends to feel effortless.",
    positive_aspects: [
        "Easy mutual understanding",
        "Strengths that complement each other",
        "A warm, encouraging atmosphere",
    ],
    challenges: [
        "Taking the harmony for granted",
        "Overlooking small issues",
        "Little practice at resolving conflict",
    ],
    advice: [
        "Keep expressing appreciation",
        "Talk through small issues before they grow",
        "Make time for shared activities",
    ],
};

const GOOD: GradeTemplate = GradeTemplate {
    summary: "A {child} child and a {parent} parent share a warm, steady bond.",
    description: "The {child} and the {parent} have plenty of common ground. Differences exist but rarely get in the way of affection.",
    positive_aspects: [
        "Plenty of common ground",
        "Stable, trusting relationship",
        "Differences that add variety",
    ],
    challenges: [
        "Occasional differences in pace",
        "Assumptions about what the other wants",
        "Routine can become stale",
    ],
    advice: [
        "Ask rather than assume",
        "Try something new together now and then",
        "Respect each other's personal space",
    ],
};

const AVERAGE: GradeTemplate = GradeTemplate {
    summary: "A {child} child and a {parent} parent have an ordinary pairing that grows with effort.",
    description: "The {child} and the {parent} are neither drawn together nor pushed apart by their signs. The relationship becomes what both of them make of it.",
    positive_aspects: [
        "Room to build the relationship deliberately",
        "Few built-in conflicts",
        "Chances to learn from differences",
    ],
    challenges: [
        "Misunderstandings when communication lapses",
        "Different priorities",
        "Drifting apart when busy",
    ],
    advice: [
        "Set aside regular one-on-one time",
        "Share interests and listen actively",
        "Acknowledge each other's efforts",
    ],
};

const CAUTION: GradeTemplate = GradeTemplate {
    summary: "A {child} child and a {parent} parent need patience with each other.",
    description: "The {child} and the {parent} are prone to friction. Clear words and patience turn the differences into lessons instead of quarrels.",
    positive_aspects: [
        "Opportunities for personal growth",
        "Honest feedback",
        "Resilience built through working things out",
    ],
    challenges: [
        "Frequent small frictions",
        "Hurt feelings from blunt words",
        "Different expectations",
    ],
    advice: [
        "Pause before reacting",
        "Explain the reasons behind requests",
        "Focus on shared goals",
    ],
};

const DISCORD: GradeTemplate = GradeTemplate {
    summary: "A {child} child and a {parent} parent have opposing temperaments.",
    description: "The {child} and the {parent} sit on opposite sides of the cycle. The bond needs deliberate care, but understanding across differences can make it strong.",
    positive_aspects: [
        "Exposure to very different perspectives",
        "Growth through challenge",
        "Lessons in tolerance",
    ],
    challenges: [
        "Clashing temperaments",
        "Frequent disagreements",
        "Difficulty seeing the other's view",
    ],
    advice: [
        "Agree on clear, shared rules",
        "Take cooling-off breaks during conflict",
        "Find at least one activity you both enjoy",
    ],
};

fn to_owned(items: &[&'static str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
