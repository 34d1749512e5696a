//! Static reference data: the Eight Stars pairing table and the nine
//! number-person archetypes.
//!
//! Both tables are fixed at compile time and never mutated. The pairing
//! table holds 8 named groups of 8 two-digit combinations each (32 total,
//! globally unique), split evenly between auspicious and inauspicious.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Auspicious,
    Inauspicious,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Auspicious => "Auspicious",
            Category::Inauspicious => "Inauspicious",
        }
    }
}

/// One named group of the Eight Stars, with its 8 two-digit combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberCombination {
    pub name: &'static str,
    pub attribute: &'static str,
    pub meaning: &'static str,
    pub combinations: [&'static str; 8],
    pub category: Category,
}

pub const REFERENCE_TABLE: [NumberCombination; 8] = [
    NumberCombination {
        name: "生氣 (Sheng Qi)",
        attribute: "貴人 (Nobleman/Mentors)",
        meaning: "The star of mentors and helpful people. Represents high success, fame, and vitality. It brings smooth progress and support from influential figures.",
        combinations: ["14", "67", "93", "82", "41", "76", "39", "28"],
        category: Category::Auspicious,
    },
    NumberCombination {
        name: "天醫 (Tian Yi)",
        attribute: "財富 (Wealth)",
        meaning: "The star of wealth and health. Represents wisdom, intelligence, and major financial returns. It suggests money comes naturally or through high-level skill.",
        combinations: ["13", "68", "49", "72", "31", "86", "94", "27"],
        category: Category::Auspicious,
    },
    NumberCombination {
        name: "延年 (Yan Nian)",
        attribute: "責任 (Responsibility)",
        meaning: "The star of longevity and leadership. Represents career stability, authority, and strong professional competence. Indicates taking on heavy responsibilities and holding positions of power.",
        combinations: ["19", "87", "34", "26", "91", "78", "43", "62"],
        category: Category::Auspicious,
    },
    NumberCombination {
        name: "伏位 (Fu Wei)",
        attribute: "固執 (Perseverance/Stability)",
        meaning: "The star of waiting and persistence. Represents stability, caution, and endurance. It suggests a patient approach but can also imply missed opportunities due to over-caution.",
        combinations: ["11", "88", "77", "33", "22", "99", "66", "44"],
        category: Category::Auspicious,
    },
    NumberCombination {
        name: "絕命 (Jue Ming)",
        attribute: "波動 (Fluctuation/Risk)",
        meaning: "High-risk and impulsive energy. Represents sudden financial gains or losses, extreme emotions, and risk-taking behavior. Suggests a straightforward but harsh personality.",
        combinations: ["12", "69", "84", "37", "21", "96", "48", "73"],
        category: Category::Inauspicious,
    },
    NumberCombination {
        name: "五鬼 (Wu Gui)",
        attribute: "詭異 (Bizarre/Unpredictable)",
        meaning: "Brilliant but restless mind. Represents unconventional ideas, sudden changes, and suspicion. Suggests a non-traditional career path or specialized technical skill.",
        combinations: ["18", "79", "42", "36", "81", "97", "24", "63"],
        category: Category::Inauspicious,
    },
    NumberCombination {
        name: "六煞 (Liu Sha)",
        attribute: "矛盾 (Conflict/Relationship)",
        meaning: "Energy of relationships and aesthetics. Represents emotional fluctuations, hidden secrets, and interpersonal conflicts. Suggests attractiveness but also complications in love or family.",
        combinations: ["16", "47", "38", "92", "61", "74", "83", "29"],
        category: Category::Inauspicious,
    },
    NumberCombination {
        name: "禍害 (Huo Hai)",
        attribute: "衝擊 (Impact/Mishap)",
        meaning: "Energy of speech and minor accidents. Represents eloquence and persuasiveness but also disputes and verbal conflicts. Suggests a \"harsh tongue\" that can hurt others.",
        combinations: ["17", "89", "46", "23", "71", "98", "64", "32"],
        category: Category::Inauspicious,
    },
];

/// Personality text bound to one of the nine reduced digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub digit: u8,
    pub name: &'static str,
    pub archetype: &'static str,
    pub traits: &'static str,
    pub desires: &'static str,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
}

pub const ARCHETYPES: [ArchetypeProfile; 9] = [
    ArchetypeProfile {
        digit: 1,
        name: "Founding Number (Leader)",
        archetype: "The Visionary Pioneer",
        traits: "Independent, creative, and pioneering. You are a natural-born leader who prefers to forge your own path rather than following the crowd. Your energy is assertive and focused.",
        desires: "To achieve unique success and be recognized as a pioneer in your field.",
        strengths: "Unyielding willpower, strong initiative, self-confidence, and originality.",
        weaknesses: "Stubbornness, impatience, may appear self-centered or overly aggressive.",
    },
    ArchetypeProfile {
        digit: 2,
        name: "Balance Number (Partner)",
        archetype: "The Diplomatic Peacemaker",
        traits: "Cooperative, diplomatic, and highly intuitive. You value harmony and excel at building bridges between people. You see multiple sides of every situation.",
        desires: "Deep emotional connection and a peaceful, harmonious environment.",
        strengths: "Empathy, patience, detail-oriented, and excellent mediation skills.",
        weaknesses: "Indecisiveness, over-sensitivity, and a tendency to avoid conflict at any cost.",
    },
    ArchetypeProfile {
        digit: 3,
        name: "Expressive Number (Creative)",
        archetype: "The Communicator",
        traits: "Communicative, optimistic, and highly artistic. You possess a quick mind and a vibrant personality that naturally inspires and draws people toward you.",
        desires: "To express your unique inner world through art, speech, or performance and to be heard and seen.",
        strengths: "Imagination, high verbal expression, infectious enthusiasm, and social charm.",
        weaknesses: "Scattering energy on too many projects, superficiality, and mood swings.",
    },
    ArchetypeProfile {
        digit: 4,
        name: "Stable Number (Builder)",
        archetype: "The Practical Organizer",
        traits: "Methodical, practical, and incredibly reliable. You are the \"anchor\" of any system, value order, and believe in the power of hard work and structure.",
        desires: "Total security, stability, and a sense of belonging within a clear framework.",
        strengths: "Exceptional discipline, organizational skills, persistence, and logic.",
        weaknesses: "Rigidity, resistance to change, and may appear overly cautious or dull to others.",
    },
    ArchetypeProfile {
        digit: 5,
        name: "Freedom Number (Explorer)",
        archetype: "The Versatile Adventurer",
        traits: "Versatile, adventurous, and progressive. You thrive on variety and freedom, always seeking new experiences and pushing the boundaries of the status quo.",
        desires: "The freedom to explore life without restrictions and to experience variety.",
        strengths: "Adaptability, courage, strong curiosity, and magnetic charisma.",
        weaknesses: "Impulsiveness, restlessness, and a struggle with long-term commitments.",
    },
    ArchetypeProfile {
        digit: 6,
        name: "Nurturing Number (Caretaker)",
        archetype: "The Compassionate Guardian",
        traits: "Responsible, compassionate, and deeply protective. You have a natural urge to serve others and provide comfort, often putting family and community needs first.",
        desires: "To create a warm, loving atmosphere and to be needed by those around you.",
        strengths: "Loyalty, kindness, unconditional love, and a strong sense of duty.",
        weaknesses: "Intrusiveness, sacrificial complex, and tendency to worry excessively.",
    },
    ArchetypeProfile {
        digit: 7,
        name: "Introspective Number (Thinker)",
        archetype: "The Spiritual Analyst",
        traits: "Analytical, spiritual, and often reclusive. You seek ultimate truth and understanding, preferring deep internal exploration over superficial social interactions.",
        desires: "Inner peace through knowledge and uncovering the hidden mysteries of life.",
        strengths: "Profound intellect, sharp intuition, technical expertise, and quiet dignity.",
        weaknesses: "Skepticism, emotional detachment, and potential for social isolation.",
    },
    ArchetypeProfile {
        digit: 8,
        name: "Success Number (Executive)",
        archetype: "The Material Master",
        traits: "Ambitious, powerful, and highly practical. You are geared toward material success, authority, and efficient management of resources and people.",
        desires: "Status, control, and the ability to manifest abundance in the physical world.",
        strengths: "Executive leadership, efficiency, sound judgment, and manifestation power.",
        weaknesses: "Workaholism, over-controlling nature, and measuring worth by material results.",
    },
    ArchetypeProfile {
        digit: 9,
        name: "Universal Number (Humanitarian)",
        archetype: "The Compassionate Visionary",
        traits: "Compassionate, idealistic, and creative. You have a global perspective and a deep desire to help humanity, often seeing the world through a spiritual lens.",
        desires: "To leave a legacy of kindness and to help elevate human consciousness.",
        strengths: "Universal tolerance, selfless service, wisdom, and creative breadth.",
        weaknesses: "Emotional exhaustion, impracticality, and disconnectedness from reality.",
    },
];

/// Exact, order-sensitive lookup of a two-digit pair across all 8 groups.
pub fn lookup_pair(pair: &str) -> Option<&'static NumberCombination> {
    REFERENCE_TABLE
        .iter()
        .find(|group| group.combinations.contains(&pair))
}

/// Archetype for a reduced digit, `None` outside 1..=9.
pub fn archetype_for(digit: u32) -> Option<&'static ArchetypeProfile> {
    if (1..=9).contains(&digit) {
        Some(&ARCHETYPES[digit as usize - 1])
    } else {
        None
    }
}
