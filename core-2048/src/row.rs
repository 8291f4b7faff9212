use crate::Tile;

/// Outcome of sliding one or more rows towards index 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    /// Whether any tile moved or merged.
    pub changed: bool,
    /// Sum of the values produced by merges.
    pub score: u64,
    /// Largest value produced by a merge, or 0 if nothing merged.
    pub max_merged: u32,
}

impl Slide {
    pub fn combine(self, other: Self) -> Self {
        Self {
            changed: self.changed || other.changed,
            score: self.score + other.score,
            max_merged: self.max_merged.max(other.max_merged),
        }
    }
}

/// Shifts every non-empty tile towards index 0, keeping their order. Returns whether anything
/// moved.
pub fn compress(row: &mut [Tile]) -> bool {
    let mut moved = false;
    let mut free_slot = None;

    for i in 0..row.len() {
        match (row[i].is_empty(), free_slot) {
            (true, None) => free_slot = Some(i),
            (false, Some(slot)) => {
                row[slot] = row[i];
                row[i] = Tile::EMPTY;
                free_slot = Some(slot + 1);
                moved = true;
            }
            _ => {}
        }
    }

    moved
}

/// Combines equal neighbours left to right, then closes the gaps the merges left behind.
///
/// The right half of a merged pair is emptied before the scan reaches it, so a freshly merged tile
/// is never merged again in the same pass: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.
pub fn merge(row: &mut [Tile]) -> Slide {
    let mut slide = Slide::default();

    for i in 0..row.len().saturating_sub(1) {
        if !row[i].merges_with(row[i + 1]) {
            continue;
        }

        let merged = row[i].doubled();
        row[i] = merged;
        row[i + 1] = Tile::EMPTY;

        slide.changed = true;
        slide.score += u64::from(merged.value());
        slide.max_merged = slide.max_merged.max(merged.value());
    }

    if slide.changed {
        compress(row);
    }

    slide
}

/// A full leftward move of one row: compress, then merge.
pub fn slide(row: &mut [Tile]) -> Slide {
    let moved = compress(row);
    let merged = merge(row);

    Slide {
        changed: moved || merged.changed,
        ..merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [u32; 4]) -> [Tile; 4] {
        values.map(|value| Tile::new(value).unwrap())
    }

    fn values(row: [Tile; 4]) -> [u32; 4] {
        row.map(Tile::value)
    }

    #[test]
    fn compress_closes_gaps_in_order() {
        let mut tiles = row([0, 2, 0, 4]);
        assert!(compress(&mut tiles));
        assert_eq!(values(tiles), [2, 4, 0, 0]);

        assert!(!compress(&mut tiles));
        assert_eq!(values(tiles), [2, 4, 0, 0]);
    }

    #[test]
    fn compress_empty_row_is_unchanged() {
        let mut tiles = row([0; 4]);
        assert!(!compress(&mut tiles));
    }

    #[test]
    fn no_cascade_on_four_equal() {
        let mut tiles = row([2, 2, 2, 2]);
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [4, 4, 0, 0]);
        assert_eq!(outcome.score, 8);
        assert_eq!(outcome.max_merged, 4);
        assert!(outcome.changed);
    }

    #[test]
    fn two_pairs() {
        let mut tiles = row([2, 2, 4, 4]);
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [4, 8, 0, 0]);
        assert_eq!(outcome.score, 12);
        assert_eq!(outcome.max_merged, 8);
    }

    #[test]
    fn merged_tile_does_not_merge_with_new_neighbour() {
        let mut tiles = row([4, 4, 8, 0]);
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [8, 8, 0, 0]);
        assert_eq!(outcome.score, 8);
    }

    #[test]
    fn compress_then_merge() {
        let mut tiles = row([2, 0, 2, 4]);
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [4, 4, 0, 0]);
        assert_eq!(outcome.score, 4);
    }

    #[test]
    fn blocked_row_is_untouched() {
        let mut tiles = row([2, 4, 8, 16]);
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [2, 4, 8, 16]);
        assert_eq!(outcome, Slide::default());
    }

    #[test]
    fn pure_slide_reports_change_without_score() {
        let mut tiles = row([0, 0, 0, 8]);
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [8, 0, 0, 0]);
        assert!(outcome.changed);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn largest_tiles_stay_apart() {
        let mut tiles = [Tile::new(Tile::MAX_VALUE).unwrap(); 4];
        let outcome = slide(&mut tiles);

        assert_eq!(values(tiles), [Tile::MAX_VALUE; 4]);
        assert_eq!(outcome, Slide::default());
    }

    #[test]
    fn combine_accumulates() {
        let a = Slide { changed: false, score: 4, max_merged: 4 };
        let b = Slide { changed: true, score: 16, max_merged: 16 };

        assert_eq!(a.combine(b), Slide { changed: true, score: 20, max_merged: 16 });
    }
}
