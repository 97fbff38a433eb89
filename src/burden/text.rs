//! Narrative templates of the burden profile.
//!
//! All tables are indexed by [`Element::index`] or by score band.

use crate::ganzhi::Element;

/// Paragraph describing an element that dominates the chart.
const STRONG: [&str; 5] = [
    "Wood leads your chart. You grow toward what you believe in and push \
     through obstacles, but the same drive can turn into stubbornness and \
     restless over-commitment to others' causes.",
    "Fire leads your chart. Warmth, visibility and enthusiasm come easily to \
     you; the lesson is to keep that flame steady instead of burning through \
     your reserves for approval.",
    "Earth leads your chart. You are the one others lean on, reliable and \
     protective, and you tend to carry family weight long after it stopped \
     being yours to carry.",
    "Metal leads your chart. You hold strong principles and clear boundaries; \
     the work is letting go of old grievances and the need for everything to \
     be exactly right.",
    "Water leads your chart. Deep intuition and adaptability are your gifts, \
     while worry and the habit of absorbing other people's moods are the load \
     you bring into this life.",
];

/// Paragraph describing an element the chart lacks.
const WEAK: [&str; 5] = [
    "Wood is faint. Growth and new beginnings may feel blocked until you give \
     yourself permission to start before you feel ready.",
    "Fire is faint. Joy and self-expression are easily postponed; small daily \
     warmth toward yourself rebalances this quickly.",
    "Earth is faint. Stability and rest are undervalued in your life, and \
     grounding routines repay you more than extra effort.",
    "Metal is faint. Saying no, finishing what you start and protecting your \
     resources are the muscles this life asks you to build.",
    "Water is faint. Stillness and reflection are scarce; without them, \
     decisions are made in a hurry and regretted at leisure.",
];

/// Closing paragraph per score band; bands `1..=3`, `4..=5`, `6..=7`, `8..=9`.
const CLOSING: [&str; 4] = [
    "Overall the load is light. Consistent small kindnesses are enough to \
     keep the ledger clear.",
    "Overall your lessons are mixed but manageable. Steady practice turns \
     each of them into quiet strength.",
    "Overall you carry deep ancestral homework. Patience with yourself and \
     deliberate merit-making ease it year by year.",
    "Overall this is an intense soul contract. The weight is real, and so is \
     the speed at which your wisdom grows once you work with it.",
];

/// Suggested actions per element; the dominant element contributes the
/// first two, the weak element the first one.
const ACTIONS: [[&str; 3]; 5] = [
    [
        "Finish one long-postponed project before starting another",
        "Spend unhurried time among trees or plants each week",
        "Support someone younger in their growth without taking over",
    ],
    [
        "Keep one evening a week free of obligations",
        "Practise calm breathing before difficult conversations",
        "Light a candle for your ancestors on the new and full moon",
    ],
    [
        "Hand one family responsibility back to its owner",
        "Keep a regular time to eat and sleep",
        "Offer food to those in need",
    ],
    [
        "Write down and release one old grievance each month",
        "Declutter a room and donate what you no longer use",
        "Set one clear financial boundary and keep it",
    ],
    [
        "Sit in silence for ten minutes each morning",
        "Release fish or other living beings back to nature",
        "Limit time spent absorbing other people's troubles",
    ],
];

pub const INSUFFICIENT: &str = "Not enough information could be read from the chart to describe \
     your burden. Please check the date and time of birth.";

pub fn strong(element: Element) -> &'static str {
    STRONG[element.index()]
}

pub fn weak(element: Element) -> &'static str {
    WEAK[element.index()]
}

/// Closing paragraph for a score band `1..=9`.
pub fn closing(band: u32) -> &'static str {
    match band {
        0..=3 => CLOSING[0],
        4..=5 => CLOSING[1],
        6..=7 => CLOSING[2],
        _ => CLOSING[3],
    }
}

/// Label for a score band `1..=9`.
pub fn label(band: u32) -> &'static str {
    match band {
        0..=3 => "Light karmic breeze",
        4..=5 => "Mixed lessons, steady growth",
        6..=7 => "Deep ancestral homework",
        _ => "Intense soul contract this life",
    }
}

/// Up to three suggested actions: two for the dominant element, one for the
/// weak element, or three distinct ones when both are the same element.
pub fn actions(dominant: Element, weak: Element) -> Vec<&'static str> {
    let strong = &ACTIONS[dominant.index()];
    let mut actions = vec![strong[0], strong[1]];
    if dominant == weak {
        actions.push(strong[2]);
    } else {
        actions.push(ACTIONS[weak.index()][0]);
    }
    actions
}
