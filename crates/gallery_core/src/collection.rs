use rand::seq::SliceRandom;
use rand::Rng;

/// A gallery slot for which at least one extension probe succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// Original 1-based slot index in the probed folder.
    pub index: u32,
    pub url: String,
}

/// One clickable grid entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Display id, assigned sequentially from 1 in discovery order.
    /// This is the renumbered position, not the probed slot index.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

pub const GRID_CATEGORY: &str = "nail-art";
pub const GRID_DESCRIPTION: &str = "Hand-painted nail art from our studio";

/// Wraps resolved images into display-ready grid items.
///
/// Entries are ordered by ascending slot index and renumbered from 1;
/// the renumbered id drives the generated title.
pub fn build_grid_items(resolved: &[ResolvedImage]) -> Vec<GalleryItem> {
    let mut ordered: Vec<&ResolvedImage> = resolved.iter().collect();
    ordered.sort_by_key(|image| image.index);

    ordered
        .into_iter()
        .enumerate()
        .map(|(position, image)| {
            let id = position as u32 + 1;
            GalleryItem {
                id,
                title: format!("Nail Art {id}"),
                description: GRID_DESCRIPTION.to_string(),
                image_url: image.url.clone(),
                category: GRID_CATEGORY.to_string(),
            }
        })
        .collect()
}

/// The fixed two-entry collection shown when discovery resolves nothing.
pub fn fallback_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: 1,
            title: "Gel Nail Art".to_string(),
            description: "Beautiful pink gel nails with floral design".to_string(),
            image_url: "assets/sample nail.jpg".to_string(),
            category: "gel".to_string(),
        },
        GalleryItem {
            id: 2,
            title: "Acrylic Extensions".to_string(),
            description: "Long acrylic nails with ombre effect".to_string(),
            image_url: "assets/sample nail 2.jpg".to_string(),
            category: "acrylic".to_string(),
        },
    ]
}

/// Image URLs of the fallback collection, for surfaces that only need paths.
pub fn fallback_urls() -> Vec<String> {
    fallback_items()
        .into_iter()
        .map(|item| item.image_url)
        .collect()
}

/// Builds the looping ribbon sequence: `repetitions` independent
/// permutations of `urls`, concatenated.
///
/// Each permutation is a uniform Fisher-Yates shuffle. When `urls` holds at
/// least two distinct entries, no entry equals its predecessor across a
/// repetition boundary; inside a repetition every entry appears once, so
/// adjacent duplicates cannot occur there. Output length is always
/// `repetitions * urls.len()`.
pub fn build_ribbon<R: Rng>(urls: &[String], repetitions: usize, rng: &mut R) -> Vec<String> {
    if urls.is_empty() {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(repetitions * urls.len());
    for _ in 0..repetitions {
        let mut segment: Vec<String> = urls.to_vec();
        segment.shuffle(rng);

        if segment.len() >= 2 {
            if let Some(previous) = sequence.last() {
                // Entries within a segment are distinct, so swapping the
                // first two restores the boundary constraint.
                if segment[0] == *previous {
                    segment.swap(0, 1);
                }
            }
        }

        sequence.extend(segment);
    }
    sequence
}
