//! Placement resolution
//!
//! Directions are tried in fallback order. A direction is skipped when the
//! popper would leave the container along its primary axis; otherwise its
//! alignments are tried in fallback order against the cross axis. The first
//! direction/alignment pair passing both checks wins. When a direction fits
//! but none of its alignments do, the search moves on to the next direction.

use tracing::{debug, trace};

use crate::geometry::{Axis, Rect};

use super::config::PlacementConfig;
use super::types::{Alignment, Direction, Offset, Placement, Position};

/// Candidate coordinates for one resolution call
struct Candidates {
    /// Primary-axis coordinate per direction
    primary: [f64; 4],
    /// Cross-axis coordinate per alignment, for vertical then horizontal axes
    vertical: [f64; 3],
    horizontal: [f64; 3],
}

impl Candidates {
    fn compute(reference: &Rect, popper: &Rect, margin: f64) -> Self {
        let mut primary = [0.0; 4];
        primary[Direction::Top.index()] = reference.top - popper.height() - margin;
        primary[Direction::Bottom.index()] = reference.bottom + margin;
        primary[Direction::Left.index()] = reference.left - popper.width() - margin;
        primary[Direction::Right.index()] = reference.right + margin;

        Self {
            primary,
            vertical: cross_candidates(Axis::Vertical, reference, popper),
            horizontal: cross_candidates(Axis::Horizontal, reference, popper),
        }
    }

    fn primary(&self, direction: Direction) -> f64 {
        self.primary[direction.index()]
    }

    fn secondary(&self, axis: Axis, alignment: Alignment) -> f64 {
        match axis {
            Axis::Vertical => self.vertical[alignment.index()],
            Axis::Horizontal => self.horizontal[alignment.index()],
        }
    }
}

/// Start, middle and end cross coordinates when the popper sits on `axis`
fn cross_candidates(axis: Axis, reference: &Rect, popper: &Rect) -> [f64; 3] {
    let lead = axis.secondary_min(reference);
    let trail = axis.secondary_max(reference);
    let ref_size = axis.secondary_size(reference);
    let pop_size = axis.secondary_size(popper);

    let mut out = [0.0; 3];
    out[Alignment::Start.index()] = lead;
    out[Alignment::Middle.index()] = lead + ref_size / 2.0 - pop_size / 2.0;
    out[Alignment::End.index()] = trail - pop_size;
    out
}

/// Whether `[value, value + size + padding]` stays within `[min, max]`
fn fits(value: f64, size: f64, padding: f64, min: f64, max: f64) -> bool {
    value >= min && value + size + padding <= max
}

/// Arrow offsets relative to the popper box
fn arrow_offset(position: Position, reference: &Rect, popper: &Rect) -> Offset {
    let axis = position.direction.axis();
    let cross_size = axis.secondary_size(popper);
    let ref_half = axis.secondary_size(reference) / 2.0;
    let pop_half = cross_size / 2.0;
    let reference_bigger = ref_half > pop_half;

    let cross = match position.alignment {
        Alignment::Start => ref_half.min(pop_half),
        Alignment::Middle => pop_half,
        Alignment::End if reference_bigger => pop_half,
        Alignment::End => cross_size - ref_half,
    };
    let primary = if position.direction.is_before() {
        axis.primary_size(popper)
    } else {
        0.0
    };

    let (top, left) = axis.to_top_left(primary, cross);
    Offset::new(top, left)
}

/// Choose a placement for `popper` next to `reference` inside `container`
///
/// `popper` must be measured with its style offsets at zero; the returned
/// offsets are relative to that origin. Returns `None` when no
/// direction/alignment pair fits.
pub fn resolve(
    reference: &Rect,
    popper: &Rect,
    container: &Rect,
    config: &PlacementConfig,
) -> Option<Placement> {
    let candidates = Candidates::compute(reference, popper, config.margin);
    let directions = config.position_flip_order.order(config.position.direction);
    let alignments = config.variant_flip_order.order(config.position.alignment);
    let padding = config.padding;

    for &direction in directions {
        let axis = direction.axis();
        let primary = candidates.primary(direction);
        if !fits(
            primary,
            axis.primary_size(popper),
            padding,
            axis.primary_min(container),
            axis.primary_max(container),
        ) {
            trace!(%direction, primary, "direction leaves container");
            continue;
        }

        for &alignment in alignments {
            let secondary = candidates.secondary(axis, alignment);
            if !fits(
                secondary,
                axis.secondary_size(popper),
                padding,
                axis.secondary_min(container),
                axis.secondary_max(container),
            ) {
                trace!(%direction, %alignment, secondary, "alignment leaves container");
                continue;
            }

            let position = Position::new(direction, alignment);
            let (top, left) = axis.to_top_left(primary, secondary);
            let placement = Placement {
                position,
                popper: Offset::new(top - popper.top, left - popper.left),
                arrow: arrow_offset(position, reference, popper),
            };
            debug!(code = %position.code(), top, left, "placement resolved");
            return Some(placement);
        }
    }

    debug!(preferred = %config.position, "no placement fits container");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{AlignmentFlipOrder, DirectionFlipOrder};
    use pretty_assertions::assert_eq;

    fn config(position: &str, margin: f64) -> PlacementConfig {
        PlacementConfig::new()
            .with_position(position.parse().unwrap())
            .with_margin(margin)
            .unwrap()
    }

    fn reference() -> Rect {
        Rect::from_edges(100.0, 100.0, 150.0, 130.0)
    }

    fn container() -> Rect {
        Rect::from_edges(0.0, 0.0, 500.0, 500.0)
    }

    #[test]
    fn test_bottom_start_scenario() {
        let placement = resolve(
            &reference(),
            &Rect::sized(80.0, 20.0),
            &container(),
            &config("bottom-start", 8.0),
        )
        .unwrap();

        assert_eq!(placement.code(), "bs");
        assert_eq!(placement.popper, Offset::new(138.0, 100.0));
    }

    #[test]
    fn test_offsets_relative_to_popper_origin() {
        let popper = Rect::new(30.0, 40.0, 80.0, 20.0);
        let placement = resolve(&reference(), &popper, &container(), &config("bs", 8.0)).unwrap();
        assert_eq!(placement.popper, Offset::new(138.0 - 40.0, 100.0 - 30.0));
    }

    #[test]
    fn test_candidates() {
        let c = Candidates::compute(&reference(), &Rect::sized(80.0, 20.0), 8.0);
        assert_eq!(c.primary(Direction::Top), 100.0 - 20.0 - 8.0);
        assert_eq!(c.primary(Direction::Bottom), 138.0);
        assert_eq!(c.primary(Direction::Left), 100.0 - 80.0 - 8.0);
        assert_eq!(c.primary(Direction::Right), 158.0);
        assert_eq!(c.secondary(Axis::Vertical, Alignment::Start), 100.0);
        assert_eq!(c.secondary(Axis::Vertical, Alignment::Middle), 85.0);
        assert_eq!(c.secondary(Axis::Vertical, Alignment::End), 70.0);
        assert_eq!(c.secondary(Axis::Horizontal, Alignment::Start), 100.0);
        assert_eq!(c.secondary(Axis::Horizontal, Alignment::Middle), 105.0);
        assert_eq!(c.secondary(Axis::Horizontal, Alignment::End), 110.0);
    }

    #[test]
    fn test_padding_applies_to_far_edge() {
        // Popper ends exactly at the container's bottom edge.
        let reference = Rect::from_edges(100.0, 100.0, 150.0, 130.0);
        let popper = Rect::sized(40.0, 20.0);
        let container = Rect::from_edges(0.0, 0.0, 500.0, 158.0);
        let cfg = config("bottom-start", 8.0);
        assert_eq!(resolve(&reference, &popper, &container, &cfg).unwrap().code(), "bs");

        let padded = cfg.with_padding(1.0).unwrap();
        let placement = resolve(&reference, &popper, &container, &padded).unwrap();
        assert_eq!(placement.code(), "ts");
    }

    #[test]
    fn test_falls_through_to_next_direction_when_no_alignment_fits() {
        // Reference scrolled partly past the left edge: bottom fits
        // vertically, but every vertical alignment starts left of the
        // container. The right side still has room.
        let reference = Rect::from_edges(10.0, -20.0, 30.0, 200.0);
        let popper = Rect::sized(60.0, 40.0);
        let container = Rect::from_edges(0.0, 0.0, 100.0, 400.0);
        let mut cfg = config("bottom-start", 0.0);
        cfg.position_flip_order = DirectionFlipOrder::default()
            .with_order(Direction::Bottom, "brtl")
            .unwrap();

        let placement = resolve(&reference, &popper, &container, &cfg).unwrap();
        assert_eq!(placement.code(), "rs");
        assert_eq!(placement.popper, Offset::new(10.0, 30.0));
    }

    #[test]
    fn test_alignment_order_respected() {
        // `end` would start left of the container, so the order decides
        // which alignment comes next.
        let popper = Rect::sized(80.0, 20.0);
        let container = Rect::from_edges(0.0, 80.0, 500.0, 500.0);
        let mut cfg = config("bottom-end", 8.0);

        let placement = resolve(&reference(), &popper, &container, &cfg).unwrap();
        assert_eq!(placement.code(), "bm");

        cfg.variant_flip_order = AlignmentFlipOrder::default()
            .with_order(Alignment::End, "esm")
            .unwrap();
        let placement = resolve(&reference(), &popper, &container, &cfg).unwrap();
        assert_eq!(placement.code(), "bs");
        assert_eq!(placement.popper.left, 100.0);
    }

    #[test]
    fn test_arrow_small_reference() {
        // Reference half-width 25, popper half-width 40.
        let popper = Rect::sized(80.0, 20.0);
        let reference = reference();
        let at = |pos: &str| arrow_offset(pos.parse().unwrap(), &reference, &popper);

        assert_eq!(at("bs"), Offset::new(0.0, 25.0));
        assert_eq!(at("bm"), Offset::new(0.0, 40.0));
        assert_eq!(at("be"), Offset::new(0.0, 55.0));
        assert_eq!(at("ts"), Offset::new(20.0, 25.0));
    }

    #[test]
    fn test_arrow_large_reference() {
        // Reference half-height 50, popper half-height 10.
        let popper = Rect::sized(80.0, 20.0);
        let reference = Rect::from_edges(100.0, 100.0, 150.0, 200.0);
        let at = |pos: &str| arrow_offset(pos.parse().unwrap(), &reference, &popper);

        assert_eq!(at("rs"), Offset::new(10.0, 0.0));
        assert_eq!(at("re"), Offset::new(10.0, 0.0));
        assert_eq!(at("lm"), Offset::new(10.0, 80.0));
    }

    #[test]
    fn test_no_fit_returns_none() {
        let popper = Rect::sized(600.0, 600.0);
        assert_eq!(
            resolve(&reference(), &popper, &container(), &config("top", 8.0)),
            None
        );
    }
}
