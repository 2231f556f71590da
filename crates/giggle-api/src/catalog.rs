use giggle_types::models::Challenge;

/// Every challenge the service knows about, in display order.
pub const CHALLENGES: [Challenge; 5] = [
    Challenge {
        id: "challenge-1",
        title: "Dance Challenge",
        video_url: "https://example.com/dance-challenge.mp4",
        stickers: &["dance", "music", "fun", "trending"],
    },
    Challenge {
        id: "challenge-2",
        title: "Cooking Challenge",
        video_url: "https://example.com/cooking-challenge.mp4",
        stickers: &["cooking", "food", "recipe", "chef"],
    },
    Challenge {
        id: "challenge-3",
        title: "Fitness Challenge",
        video_url: "https://example.com/fitness-challenge.mp4",
        stickers: &["fitness", "workout", "health", "strong"],
    },
    Challenge {
        id: "challenge-4",
        title: "Art Challenge",
        video_url: "https://example.com/art-challenge.mp4",
        stickers: &["art", "creative", "drawing", "artist"],
    },
    Challenge {
        id: "challenge-5",
        title: "Pet Challenge",
        video_url: "https://example.com/pet-challenge.mp4",
        stickers: &["pets", "cute", "animals", "funny"],
    },
];

pub fn list_challenges() -> &'static [Challenge] {
    &CHALLENGES
}

pub fn is_known_challenge(id: &str) -> bool {
    CHALLENGES.iter().any(|c| c.id == id)
}
