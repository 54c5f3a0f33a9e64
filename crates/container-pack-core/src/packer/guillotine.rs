//! 2D guillotine rectangle packer over the container floor (§4.2). Used
//! directly by the pallet floor optimizer (`packer::pallets`).

/// A free axis-aligned rectangle on the floor, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub length: f64,
}

/// Where a rectangle of size `(w, length)` was found to fit.
#[derive(Debug, Clone, Copy)]
pub struct Fit {
    pub x: f64,
    pub y: f64,
    pub index: usize,
}

/// Maintains an ordered list of free rectangles covering disjoint parts of
/// the floor, starting as a single rectangle equal to the floor. No merging
/// is performed after a split.
pub struct FreeRectList {
    free: Vec<FreeRect>,
}

impl FreeRectList {
    pub fn new(floor_w: f64, floor_length: f64) -> Self {
        Self {
            free: vec![FreeRect {
                x: 0.0,
                y: 0.0,
                w: floor_w,
                length: floor_length,
            }],
        }
    }

    pub fn free_rects(&self) -> &[FreeRect] {
        &self.free
    }

    /// Scans all free rectangles that can hold `(w, length)` and picks the
    /// one minimizing leftover area (`rect.w * rect.length - w * length`).
    /// Ties go to the first rectangle encountered.
    pub fn find_position(&self, w: f64, length: f64) -> Option<Fit> {
        let mut best: Option<(usize, f64)> = None;
        for (i, r) in self.free.iter().enumerate() {
            if w <= r.w && length <= r.length {
                let leftover = r.w * r.length - w * length;
                if best.map(|(_, b)| leftover < b).unwrap_or(true) {
                    best = Some((i, leftover));
                }
            }
        }
        best.map(|(index, _)| {
            let r = self.free[index];
            Fit {
                x: r.x,
                y: r.y,
                index,
            }
        })
    }

    /// Removes the rectangle at `index` and splits it into a "right" child
    /// `{x+used_w, y, w-used_w, used_length}` and a "top" child
    /// `{x, y+used_length, w, length-used_length}`, dropping any child with
    /// a zero extent on either axis.
    pub fn split(&mut self, index: usize, used_w: f64, used_length: f64) {
        let r = self.free.swap_remove(index);

        let right = FreeRect {
            x: r.x + used_w,
            y: r.y,
            w: r.w - used_w,
            length: used_length,
        };
        let top = FreeRect {
            x: r.x,
            y: r.y + used_length,
            w: r.w,
            length: r.length - used_length,
        };

        if right.w > 0.0 && right.length > 0.0 {
            self.free.push(right);
        }
        if top.w > 0.0 && top.length > 0.0 {
            self.free.push(top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_position_in_single_free_rect() {
        let list = FreeRectList::new(100.0, 100.0);
        let fit = list.find_position(40.0, 30.0).expect("should fit");
        assert_eq!((fit.x, fit.y), (0.0, 0.0));
    }

    #[test]
    fn best_area_fit_prefers_tightest_rect() {
        let mut list = FreeRectList {
            free: vec![
                FreeRect {
                    x: 0.0,
                    y: 0.0,
                    w: 100.0,
                    length: 100.0,
                },
                FreeRect {
                    x: 200.0,
                    y: 0.0,
                    w: 50.0,
                    length: 50.0,
                },
            ],
        };
        let fit = list.find_position(40.0, 40.0).expect("should fit");
        // The 50x50 rect leaves less leftover area than the 100x100 one.
        assert_eq!(fit.index, 1);
        list.split(fit.index, 40.0, 40.0);
    }

    #[test]
    fn split_drops_zero_extent_children() {
        let mut list = FreeRectList::new(50.0, 50.0);
        let fit = list.find_position(50.0, 50.0).unwrap();
        list.split(fit.index, 50.0, 50.0);
        assert!(list.free_rects().is_empty());
    }

    #[test]
    fn split_produces_right_and_top_children() {
        let mut list = FreeRectList::new(100.0, 80.0);
        let fit = list.find_position(30.0, 20.0).unwrap();
        list.split(fit.index, 30.0, 20.0);
        let rects = list.free_rects();
        assert_eq!(rects.len(), 2);
        assert!(rects
            .iter()
            .any(|r| r.x == 30.0 && r.y == 0.0 && r.w == 70.0 && r.length == 20.0));
        assert!(rects
            .iter()
            .any(|r| r.x == 0.0 && r.y == 20.0 && r.w == 100.0 && r.length == 60.0));
    }

    #[test]
    fn no_position_when_nothing_fits() {
        let list = FreeRectList::new(10.0, 10.0);
        assert!(list.find_position(20.0, 5.0).is_none());
    }
}
