// static support content for the resources and help tabs

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Helpline {
    pub name: &'static str,
    pub contact: &'static str,
    pub hours: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "Box breathing",
        description: "Breathe in for 4, hold for 4, out for 4, hold for 4. Repeat a few times.",
    },
    Resource {
        title: "5-4-3-2-1 grounding",
        description: "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell and 1 you taste.",
    },
    Resource {
        title: "Write it down",
        description: "Journaling for a few minutes can make big feelings easier to sort through.",
    },
    Resource {
        title: "Move a little",
        description: "A short walk or stretch can shift your mood more than you'd expect.",
    },
    Resource {
        title: "Talk to someone you trust",
        description: "A friend, family member, teacher or school counselor can help carry the load.",
    },
];

pub const HELPLINES: &[Helpline] = &[
    Helpline {
        name: "988 Suicide & Crisis Lifeline (US)",
        contact: "Call or text 988",
        hours: "24/7",
    },
    Helpline {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        hours: "24/7",
    },
    Helpline {
        name: "The Trevor Project (LGBTQ+ youth)",
        contact: "Call 1-866-488-7386 or text START to 678-678",
        hours: "24/7",
    },
    Helpline {
        name: "Emergency services",
        contact: "Call 911 or your local emergency number",
        hours: "24/7",
    },
];

pub const CRISIS_MESSAGE: &str = "It sounds like you're going through something really painful. \
You don't have to face this alone. Please reach out to one of the people below right now.";
