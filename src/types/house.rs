use serde::Serialize;

use super::bounds::BoundingBox;

/// Semantic room category decoded from a region's single-character label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Bathroom,
    Bedroom,
    Closet,
    DiningRoom,
    Entryway,
    FamilyRoom,
    Garage,
    Hallway,
    Library,
    LaundryRoom,
    Kitchen,
    LivingRoom,
    MeetingRoom,
    Lounge,
    Office,
    Porch,
    Recreation,
    Stairs,
    Toilet,
    UtilityRoom,
    TvRoom,
    Workout,
    Outdoor,
    Balcony,
    Other,
    Bar,
    Classroom,
    DiningBooth,
    Spa,
    Junk,
    Unlabeled,
}

impl RoomCategory {
    /// Decode a region label. Unknown codes fall back to `Other`, an empty
    /// label to `Unlabeled`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "" | "-" => RoomCategory::Unlabeled,
            "a" => RoomCategory::Bathroom,
            "b" => RoomCategory::Bedroom,
            "c" => RoomCategory::Closet,
            "d" => RoomCategory::DiningRoom,
            "e" => RoomCategory::Entryway,
            "f" => RoomCategory::FamilyRoom,
            "g" => RoomCategory::Garage,
            "h" => RoomCategory::Hallway,
            "i" => RoomCategory::Library,
            "j" => RoomCategory::LaundryRoom,
            "k" => RoomCategory::Kitchen,
            "l" => RoomCategory::LivingRoom,
            "m" => RoomCategory::MeetingRoom,
            "n" => RoomCategory::Lounge,
            "o" => RoomCategory::Office,
            "p" => RoomCategory::Porch,
            "r" => RoomCategory::Recreation,
            "s" => RoomCategory::Stairs,
            "t" => RoomCategory::Toilet,
            "u" => RoomCategory::UtilityRoom,
            "v" => RoomCategory::TvRoom,
            "w" => RoomCategory::Workout,
            "x" => RoomCategory::Outdoor,
            "y" => RoomCategory::Balcony,
            "B" => RoomCategory::Bar,
            "C" => RoomCategory::Classroom,
            "D" => RoomCategory::DiningBooth,
            "S" => RoomCategory::Spa,
            "Z" => RoomCategory::Junk,
            _ => RoomCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Bathroom => "bathroom",
            RoomCategory::Bedroom => "bedroom",
            RoomCategory::Closet => "closet",
            RoomCategory::DiningRoom => "dining_room",
            RoomCategory::Entryway => "entryway",
            RoomCategory::FamilyRoom => "family_room",
            RoomCategory::Garage => "garage",
            RoomCategory::Hallway => "hallway",
            RoomCategory::Library => "library",
            RoomCategory::LaundryRoom => "laundry_room",
            RoomCategory::Kitchen => "kitchen",
            RoomCategory::LivingRoom => "living_room",
            RoomCategory::MeetingRoom => "meeting_room",
            RoomCategory::Lounge => "lounge",
            RoomCategory::Office => "office",
            RoomCategory::Porch => "porch",
            RoomCategory::Recreation => "recreation",
            RoomCategory::Stairs => "stairs",
            RoomCategory::Toilet => "toilet",
            RoomCategory::UtilityRoom => "utility_room",
            RoomCategory::TvRoom => "tv_room",
            RoomCategory::Workout => "workout",
            RoomCategory::Outdoor => "outdoor",
            RoomCategory::Balcony => "balcony",
            RoomCategory::Other => "other",
            RoomCategory::Bar => "bar",
            RoomCategory::Classroom => "classroom",
            RoomCategory::DiningBooth => "dining_booth",
            RoomCategory::Spa => "spa",
            RoomCategory::Junk => "junk",
            RoomCategory::Unlabeled => "unlabeled",
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One semantically labelled region of a house, in annotation space.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Region index from the annotation file, unique within a house.
    pub id: u32,
    /// Level (floor) the region belongs to.
    pub level: u32,
    /// Raw label token; may be empty or `-` for unlabelled regions.
    pub label: String,
    pub bounds: BoundingBox,
}

impl Room {
    pub fn category(&self) -> RoomCategory {
        RoomCategory::from_label(&self.label)
    }
}

/// A floor of the house, from an `L` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub index: u32,
    /// Raw label token; `-` when the level is unnamed.
    pub label: String,
}

/// Parse result for one annotation file.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub name: String,
    /// House-level extent from the summary record.
    pub bounds: BoundingBox,
    /// Regions in file order.
    pub rooms: Vec<Room>,
    /// Levels in file order; may be empty.
    pub levels: Vec<Level>,
}

impl House {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Display name of a level: its label, or `Level_<index>` when the level
    /// is missing or unlabelled.
    pub fn level_name(&self, index: u32) -> String {
        self.levels
            .iter()
            .find(|l| l.index == index)
            .map(|l| l.label.as_str())
            .filter(|label| !label.is_empty() && *label != "-")
            .map_or_else(|| format!("Level_{index}"), str::to_string)
    }
}
