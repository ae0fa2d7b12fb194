//! Compiled-in family members and memory albums.
//!
//! This is the static side of every merged view: entries here have no id,
//! are immutable at runtime, and can only be reshaped through the override
//! tables (hidden set, caption map, cover overrides).

use serde::Serialize;

/// A bundled media item belonging to a member or memory. Distinguished from
/// uploaded media by the absence of an id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaticMediaEntry {
    pub url: &'static str,
    pub caption: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// Optional one-shot sound effect played when the item is opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Member {
    pub id: u32,
    pub name: &'static str,
    pub relation: &'static str,
    pub bio: &'static str,
    /// Default profile image, used when no cover override is set.
    pub photo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_audio: Option<&'static str>,
    pub audio_volume: f32,
    pub photos: &'static [StaticMediaEntry],
    pub videos: &'static [StaticMediaEntry],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Memory {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Default album cover, used when no cover override is set.
    pub cover: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_audio: Option<&'static str>,
    pub audio_volume: f32,
    pub photos: &'static [StaticMediaEntry],
    pub videos: &'static [StaticMediaEntry],
}

/// Anchor applied to a member profile image with no override and no declared
/// position.
pub const MEMBER_IMAGE_FALLBACK_POSITION: &str = "50% 20%";

/// Anchor applied to a memory cover with no override and no declared position.
pub const MEMORY_COVER_FALLBACK_POSITION: &str = "center";

const fn entry(url: &'static str, caption: &'static str) -> StaticMediaEntry {
    StaticMediaEntry {
        url,
        caption,
        position: None,
        scale: None,
        audio: None,
    }
}

static MEMBERS: &[Member] = &[
    Member {
        id: 1,
        name: "Lalitha Sundaram",
        relation: "Amma",
        bio: "The heart of the house. Every festival, every meal, every song in \
              these halls began with her.",
        photo: "/assets/members/lalitha-portrait.jpg",
        image_position: Some("50% 15%"),
        entry_audio: Some("/assets/audio/veena-theme.mp3"),
        audio_volume: 0.5,
        photos: &[
            StaticMediaEntry {
                url: "/assets/members/lalitha-kitchen.jpg",
                caption: "Sunday morning, dosa on the stone",
                position: Some("center"),
                scale: None,
                audio: Some("/assets/audio/kitchen-bells.mp3"),
            },
            entry("/assets/members/lalitha-garden.jpg", "Among her jasmine"),
            entry("/assets/members/lalitha-wedding.jpg", "Wedding day, 1974"),
        ],
        videos: &[entry(
            "/assets/members/lalitha-singing.mp4",
            "Evening bhajan",
        )],
    },
    Member {
        id: 2,
        name: "Raman Sundaram",
        relation: "Appa",
        bio: "Quiet, exact, endlessly patient. Kept every train ticket from \
              every journey the family ever took.",
        photo: "/assets/members/raman-portrait.jpg",
        image_position: None,
        entry_audio: Some("/assets/audio/tanpura-drone.mp3"),
        audio_volume: 0.4,
        photos: &[
            entry("/assets/members/raman-office.jpg", "Last day at the press"),
            StaticMediaEntry {
                url: "/assets/members/raman-scooter.jpg",
                caption: "The green Bajaj",
                position: Some("50% 40%"),
                scale: Some(1.1),
                audio: None,
            },
        ],
        videos: &[],
    },
    Member {
        id: 3,
        name: "Meenakshi Raman",
        relation: "Daughter",
        bio: "First in the family to cross an ocean. Sends photographs home \
              every week without fail.",
        photo: "/assets/members/meenakshi-portrait.jpg",
        image_position: Some("50% 25%"),
        entry_audio: None,
        audio_volume: 0.5,
        photos: &[
            entry("/assets/members/meenakshi-graduation.jpg", "Convocation day"),
            entry("/assets/members/meenakshi-beach.jpg", "Marina beach, age 9"),
        ],
        videos: &[entry(
            "/assets/members/meenakshi-dance.mp4",
            "Arangetram, 2001",
        )],
    },
    Member {
        id: 4,
        name: "Arjun Raman",
        relation: "Son",
        bio: "Keeper of this archive. Scanned every negative in the almirah so \
              none of this would be lost.",
        photo: "/assets/members/arjun-portrait.jpg",
        image_position: None,
        entry_audio: None,
        audio_volume: 0.5,
        photos: &[entry(
            "/assets/members/arjun-cricket.jpg",
            "Colony cricket, 1998",
        )],
        videos: &[],
    },
];

static MEMORIES: &[Memory] = &[
    Memory {
        id: 1,
        title: "Pongal at the Old House",
        description: "Three generations around one pot of sweet pongal, the \
                      kolam still wet on the threshold.",
        cover: "/assets/memories/pongal-cover.jpg",
        cover_position: Some("50% 60%"),
        entry_audio: Some("/assets/audio/nadaswaram.mp3"),
        audio_volume: 0.45,
        photos: &[
            entry("/assets/memories/pongal-kolam.jpg", "Morning kolam"),
            entry("/assets/memories/pongal-pot.jpg", "The pot boiling over"),
            entry("/assets/memories/pongal-family.jpg", "Everyone, squinting"),
        ],
        videos: &[],
    },
    Memory {
        id: 2,
        title: "The Ooty Trip",
        description: "One ambassador car, seven people, and a week in the \
                      blue mountains.",
        cover: "/assets/memories/ooty-cover.jpg",
        cover_position: None,
        entry_audio: None,
        audio_volume: 0.5,
        photos: &[
            entry("/assets/memories/ooty-lake.jpg", "Boat house"),
            entry("/assets/memories/ooty-tea.jpg", "Tea gardens in the mist"),
        ],
        videos: &[entry("/assets/memories/ooty-ride.mp4", "The toy train")],
    },
    Memory {
        id: 3,
        title: "Golden Anniversary",
        description: "Fifty years, one garland exchange, and every relative \
                      we could find.",
        cover: "/assets/memories/anniversary-cover.jpg",
        cover_position: Some("center"),
        entry_audio: Some("/assets/audio/veena-theme.mp3"),
        audio_volume: 0.5,
        photos: &[entry(
            "/assets/memories/anniversary-garlands.jpg",
            "The garland exchange",
        )],
        videos: &[entry(
            "/assets/memories/anniversary-speech.mp4",
            "Appa's speech",
        )],
    },
];

/// All family members, in declared (display) order.
pub fn members() -> &'static [Member] {
    MEMBERS
}

/// Look up a member by route id. None is the handled not-found state.
pub fn member(id: u32) -> Option<&'static Member> {
    MEMBERS.iter().find(|m| m.id == id)
}

/// All memory albums, in declared (display) order.
pub fn memories() -> &'static [Memory] {
    MEMORIES
}

/// Look up a memory by route id. None is the handled not-found state.
pub fn memory(id: u32) -> Option<&'static Memory> {
    MEMORIES.iter().find(|m| m.id == id)
}
