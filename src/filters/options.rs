//! Static catalog enumerations driving the search filters. Reference data,
//! not user state.

use super::date_range::DateRange;
use super::range::Range;
use super::sections::FilterNode;

pub const FRAME_TYPE_OPTIONS: &[&str] = &[
    "Normal", "Effect", "Ritual", "Fusion", "Synchro", "XYZ", "Link", "Pendulum", "Spell", "Trap",
    "Token", "Skill",
];

pub const ATTRIBUTE_OPTIONS: &[&str] = &[
    "DARK", "DIVINE", "EARTH", "FIRE", "LIGHT", "METAL", "WATER", "WIND",
];

pub const BANLIST_OPTIONS: &[&str] = &["Forbidden", "Limited", "Allowed"];

pub const FORMAT_OPTIONS: &[&str] = &[
    "Duel Links",
    "Common Charity",
    "Edison",
    "TCG",
    "OCG",
    "Master Duel",
    "GOAT",
    "OCG GOAT",
    "Speed Duel",
    "No Format",
];

pub const NORMAL_TYPES: &[&str] = &["Normal Monster", "Normal Tuner Monster"];

pub const EFFECT_TYPES: &[&str] = &[
    "Effect Monster",
    "Flip Effect Monster",
    "Flip Tuner Effect Monster",
    "Gemini Monster",
    "Union Effect Monster",
    "Spirit Monster",
    "Toon Monster",
];

pub const RITUAL_TYPES: &[&str] = &["Ritual Monster", "Ritual Effect Monster"];

pub const TUNER_TYPES: &[&str] = &["Tuner Monster", "Normal Tuner Monster"];

pub const FUSION_TYPES: &[&str] = &["Fusion Monster", "Pendulum Effect Fusion Monster"];

pub const SYNCHRO_TYPES: &[&str] = &[
    "Synchro Monster",
    "Synchro Pendulum Effect Monster",
    "Synchro Tuner Monster",
];

pub const XYZ_TYPES: &[&str] = &["XYZ Monster", "XYZ Pendulum Effect Monster"];

pub const LINK_TYPES: &[&str] = &["Link Monster"];

pub const PENDULUM_TYPES: &[&str] = &[
    "Pendulum Effect Monster",
    "Pendulum Effect Fusion Monster",
    "Synchro Pendulum Effect Monster",
    "Pendulum Effect Ritual Monster",
    "Pendulum Flip Effect Monster",
    "Pendulum Normal Monster",
    "Pendulum Tuner Effect Monster",
];

pub const EXTRA_TUNER_TYPES: &[&str] = &["Pendulum Tuner Effect Monster", "Synchro Tuner Monster"];

pub const MONSTER_RACES: &[&str] = &[
    "Aqua",
    "Beast",
    "Beast-Warrior",
    "Creator-God",
    "Cyberse",
    "Dinosaur",
    "Divine-Beast",
    "Dragon",
    "Fairy",
    "Fiend",
    "Fish",
    "Illusion",
    "Insect",
    "Machine",
    "Plant",
    "Psychic",
    "Pyro",
    "Reptile",
    "Rock",
    "Sea Serpent",
    "Spellcaster",
    "Thunder",
    "Warrior",
    "Winged Beast",
    "Wyrm",
    "Zombie",
    "Other",
];

pub const SPELL_RACES: &[&str] = &["Normal", "Field", "Equip", "Quick-Play", "Ritual", "Continuous"];

pub const TRAP_RACES: &[&str] = &["Normal", "Counter", "Continuous"];

pub const DEFAULT_LEVEL_RANGE: Range = Range::new(0, 13);
pub const DEFAULT_ATK_RANGE: Range = Range::new(0, 5000);
pub const DEFAULT_DEF_RANGE: Range = Range::new(0, 5000);

/// Release-date filters default to open bounds on both ends.
pub const DEFAULT_RELEASE_DATE_RANGE: DateRange = DateRange {
    min: None,
    max: None,
};

fn leaves(values: &[&str]) -> Vec<FilterNode> {
    values.iter().map(|v| FilterNode::leaf(*v)).collect()
}

/// The card-type tree shown in the deck-builder sidebar.
pub fn card_type_sections() -> Vec<FilterNode> {
    vec![
        FilterNode::section(
            "Main Deck",
            vec![
                FilterNode::section("Normal Monsters", leaves(NORMAL_TYPES)),
                FilterNode::section("Effect Monsters", leaves(EFFECT_TYPES)),
                FilterNode::section("Ritual Monsters", leaves(RITUAL_TYPES)),
                FilterNode::section("Tuner Monsters", leaves(TUNER_TYPES)),
                FilterNode::leaf("Spell Card"),
                FilterNode::leaf("Trap Card"),
            ],
        ),
        FilterNode::section(
            "Extra Deck",
            vec![
                FilterNode::section("Fusion Monsters", leaves(FUSION_TYPES)),
                FilterNode::section("Synchro Monsters", leaves(SYNCHRO_TYPES)),
                FilterNode::section("XYZ Monsters", leaves(XYZ_TYPES)),
                FilterNode::section("Link Monsters", leaves(LINK_TYPES)),
                FilterNode::section("Pendulum Monsters", leaves(PENDULUM_TYPES)),
                FilterNode::section("Extra Tuner Monsters", leaves(EXTRA_TUNER_TYPES)),
            ],
        ),
        FilterNode::section(
            "Other",
            vec![FilterNode::leaf("Token"), FilterNode::leaf("Skill Card")],
        ),
    ]
}

/// Race tree, split by card kind.
pub fn race_sections() -> Vec<FilterNode> {
    vec![
        FilterNode::section("Monster Cards", leaves(MONSTER_RACES)),
        FilterNode::section("Spell Cards", leaves(SPELL_RACES)),
        FilterNode::section("Trap Cards", leaves(TRAP_RACES)),
    ]
}
