//! Deck building.
//!
//! Given the pairs available in a collection and a requested pair count,
//! produce the shuffled tile list for one session:
//!
//! 1. Shuffle the available pairs and take the first `min(requested, available)`.
//! 2. Expand each selected pair into two tiles sharing its key.
//! 3. Shuffle the tile list, so the two halves of a pair are not adjacent.
//!
//! Requested counts are clamped, never rejected; the only failure is a
//! collection with fewer than two pairs.

use log::debug;

use crate::content::{CardPair, TextRenderer};
use crate::core::{EngineError, GameRng, TileId};

use super::tile::Tile;

/// Minimum pairs a collection must hold to be playable.
pub const MIN_PAIRS: usize = 2;

/// Build the tile list for one session.
///
/// Returns exactly `2 * min(requested, pairs.len())` hidden tiles with
/// sequential IDs, or `EngineError::InsufficientContent` when fewer than
/// [`MIN_PAIRS`] pairs are available.
pub fn build_deck(
    pairs: &[CardPair],
    requested: usize,
    rng: &mut GameRng,
    renderer: &TextRenderer,
) -> Result<Vec<Tile>, EngineError> {
    if pairs.len() < MIN_PAIRS {
        return Err(EngineError::InsufficientContent {
            available: pairs.len(),
        });
    }

    let selected = requested.clamp(MIN_PAIRS, pairs.len());
    if selected != requested {
        debug!("clamped requested pair count {requested} to {selected}");
    }

    let mut order: Vec<usize> = (0..pairs.len()).collect();
    rng.shuffle(&mut order);

    let mut tiles = Vec::with_capacity(selected * 2);
    for &pair_index in order.iter().take(selected) {
        let pair = &pairs[pair_index];
        for face in &pair.faces {
            let id = TileId::new(tiles.len() as u32);
            let rendered = renderer.render(face);
            tiles.push(Tile::new(id, pair.key.clone(), face.clone(), rendered));
        }
    }

    rng.shuffle(&mut tiles);

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CardPayload, PairKey};
    use crate::deck::TileState;
    use std::collections::HashMap;

    fn image_pairs(n: usize) -> Vec<CardPair> {
        (0..n)
            .map(|i| CardPair::from_image(format!("img-{i}.png"), format!("/img/{i}.png")))
            .collect()
    }

    fn key_counts(tiles: &[Tile]) -> HashMap<PairKey, usize> {
        let mut counts = HashMap::new();
        for tile in tiles {
            *counts.entry(tile.pair_key.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_deck_size_and_key_multiset() {
        let pairs = image_pairs(5);
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let tiles = build_deck(&pairs, 3, &mut rng, &renderer).unwrap();
        assert_eq!(tiles.len(), 6);

        let counts = key_counts(&tiles);
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_request_above_available_is_clamped() {
        let pairs = image_pairs(4);
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let tiles = build_deck(&pairs, 100, &mut rng, &renderer).unwrap();
        assert_eq!(tiles.len(), 8);
    }

    #[test]
    fn test_request_below_minimum_is_clamped() {
        let pairs = image_pairs(4);
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let tiles = build_deck(&pairs, 0, &mut rng, &renderer).unwrap();
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_too_few_pairs_is_an_error() {
        let pairs = image_pairs(1);
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let err = build_deck(&pairs, 2, &mut rng, &renderer).unwrap_err();
        match err {
            EngineError::InsufficientContent { available } => assert_eq!(available, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tile_ids_are_unique_and_sequential() {
        let pairs = image_pairs(6);
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let tiles = build_deck(&pairs, 6, &mut rng, &renderer).unwrap();
        let mut ids: Vec<u32> = tiles.iter().map(|t| t.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_tiles_start_hidden() {
        let pairs = image_pairs(3);
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let tiles = build_deck(&pairs, 3, &mut rng, &renderer).unwrap();
        assert!(tiles.iter().all(|t| t.state == TileState::Hidden));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let pairs = image_pairs(8);
        let renderer = TextRenderer::new();

        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);
        let deck1 = build_deck(&pairs, 5, &mut rng1, &renderer).unwrap();
        let deck2 = build_deck(&pairs, 5, &mut rng2, &renderer).unwrap();

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_text_faces_render_per_tile() {
        let pairs = vec![
            CardPair::new(
                "q-1",
                CardPayload::text("**front**"),
                CardPayload::text("back"),
            ),
            CardPair::from_image("a.png", "/a.png"),
        ];
        let mut rng = GameRng::new(42);
        let renderer = TextRenderer::new();

        let tiles = build_deck(&pairs, 2, &mut rng, &renderer).unwrap();
        let bold_face = tiles
            .iter()
            .find(|t| t.payload == CardPayload::text("**front**"))
            .unwrap();
        assert_eq!(
            bold_face.rendered,
            crate::content::RenderedCard::Html {
                html: "<strong>front</strong>".into()
            }
        );
    }
}
