//! Built-in demonstration content.
//!
//! Two rows of ten rooms. The top row is open country running east to west,
//! the bottom row lies underground. A trapdoor in the storeroom drops the
//! player somewhere along the first five rooms of the top row.

use waymark_foundation::{Direction, ItemId, RoomId};
use waymark_storage::{ContentPack, ItemSpec, RoomSpec, SpecialExit, Trapdoor};

const VERBS: &[&str] = &[
    "n", "s", "e", "w", "go", "take", "drop", "give", "load", "save", "quit", "restart", "examine", "open",
];

const PREPOSITIONS: &[&str] = &["in", "on", "at", "by"];

const ROOMS: &[(&str, &str)] = &[
    ("3the crossroads0110", "outdoors"),
    ("2a dusty track0011", "outdoors"),
    ("1a quiet orchard0111", "outdoors"),
    ("4the mill pond0011", "water"),
    ("1the old mill0111", "indoors"),
    ("2a hill path0011", "outdoors"),
    ("2a windy ridge0011", "outdoors"),
    ("1a ruined chapel0111", "indoors"),
    ("4a bramble thicket0011", "outdoors"),
    ("1a shepherd's hut0101", "indoors"),
    ("1a cellar1010", "indoors"),
    ("1a damp tunnel0011", "indoors"),
    ("1a vaulted crypt1011", "indoors"),
    ("1the storeroom0011", "indoors"),
    ("4the mill race1011", "water"),
    ("2a stone quay0011", "water"),
    ("2a river bank0011", "water"),
    ("1a boathouse1011", "indoors"),
    ("4the weir0011", "water"),
    ("1a sheepfold1001", "outdoors"),
];

/// Noun, display name, starting room (0 for nowhere), flag.
const ITEMS: &[(&str, &str, u32, i32)] = &[
    ("lamp", "a brass lamp", 5, 0),
    ("key", "an iron key", 8, 0),
    ("rope", "a coil of rope", 16, 0),
    ("coin", "a silver coin", 19, 0),
    ("trapdoor", "a trapdoor", 0, 0),
];

const TRAPDOOR_ITEM: u32 = 5;
const STOREROOM: u32 = 14;
const THICKET: u32 = 9;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// The demonstration content pack.
#[must_use]
pub fn demo_pack() -> ContentPack {
    ContentPack {
        verbs: words(VERBS),
        prepositions: words(PREPOSITIONS),
        rooms: ROOMS
            .iter()
            .map(|(encoded, image)| RoomSpec::new(*encoded, *image))
            .collect(),
        items: ITEMS
            .iter()
            .map(|(noun, name, location, flag)| ItemSpec::new(*noun, *name, *location, *flag))
            .collect(),
        special_exits: vec![
            (
                RoomId::new(THICKET),
                SpecialExit {
                    hidden: Some(Direction::East),
                    description: "Brambles choke the path to the east".to_string(),
                },
            ),
            (
                RoomId::new(STOREROOM),
                SpecialExit {
                    hidden: None,
                    description: "A trapdoor lies open in the floor".to_string(),
                },
            ),
        ],
        special_items: vec![(RoomId::new(1), "a weathered signpost".to_string())],
        trapdoor: Some(Trapdoor {
            room: RoomId::new(STOREROOM),
            direction: Direction::Down,
            item: ItemId::new(TRAPDOOR_ITEM),
            destinations: (1..=5).map(RoomId::new).collect(),
        }),
        start_room: RoomId::new(1),
    }
}
