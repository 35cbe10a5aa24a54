//! Applying placements to elements
//!
//! The resolver only deals in rectangles. This module brackets it with the
//! side effects a rendering surface needs: popper offsets are zeroed before
//! measuring so a previous placement does not leak into the new one, and
//! restored when nothing fits.

use tracing::debug;

use crate::error::PlaceError;
use crate::geometry::Rect;
use crate::placement::{resolve, ConfigOverrides, Offset, Placement, PlacementConfig};

/// Something with a measurable bounding box
pub trait Measure {
    fn bounding_rect(&self) -> Rect;
}

/// A bare rectangle acts as a virtual reference
impl Measure for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// Readable and writable style offsets (`top`, `left`) on an element
pub trait PositionSink {
    fn offset(&self) -> Offset;
    fn set_offset(&mut self, offset: Offset);
}

/// In-memory element: a layout box plus the style offset applied to it
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingElement {
    layout: Rect,
    offset: Offset,
}

impl FloatingElement {
    /// Create an element whose box sits at `layout` when its offset is zero
    pub fn new(layout: Rect) -> Self {
        Self {
            layout,
            offset: Offset::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// The box at zero offset
    pub fn layout(&self) -> Rect {
        self.layout
    }
}

impl Measure for FloatingElement {
    fn bounding_rect(&self) -> Rect {
        self.layout.translate(self.offset.left, self.offset.top)
    }
}

impl PositionSink for FloatingElement {
    fn offset(&self) -> Offset {
        self.offset
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }
}

/// Measure, resolve and apply a placement in one step
///
/// The container is `config.container`, or `viewport` when unset. On
/// failure the popper keeps the offset it had before the call and the arrow
/// is left untouched.
pub fn reposition<R, P>(
    reference: &R,
    popper: &mut P,
    arrow: Option<&mut dyn PositionSink>,
    config: &PlacementConfig,
    viewport: Rect,
) -> Option<Placement>
where
    R: Measure + ?Sized,
    P: Measure + PositionSink + ?Sized,
{
    let saved = popper.offset();
    popper.set_offset(Offset::ZERO);

    let reference_box = reference.bounding_rect();
    let popper_box = popper.bounding_rect();
    let container = config.container.unwrap_or(viewport);

    match resolve(&reference_box, &popper_box, &container, config) {
        Some(placement) => {
            popper.set_offset(placement.popper);
            if let Some(arrow) = arrow {
                arrow.set_offset(placement.arrow);
            }
            Some(placement)
        }
        None => {
            debug!(top = saved.top, left = saved.left, "restoring popper offset");
            popper.set_offset(saved);
            None
        }
    }
}

/// Keeps elements and a configuration together across repeated updates
///
/// Options passed to [`Positioner::update`] are merged into the stored
/// configuration and become the defaults for later calls.
pub struct Positioner<R, P> {
    reference: Option<R>,
    popper: Option<P>,
    arrow: Option<Box<dyn PositionSink>>,
    viewport: Rect,
    config: PlacementConfig,
}

impl<R, P> Positioner<R, P>
where
    R: Measure,
    P: Measure + PositionSink,
{
    pub fn new(viewport: Rect, config: PlacementConfig) -> Self {
        Self {
            reference: None,
            popper: None,
            arrow: None,
            viewport,
            config,
        }
    }

    pub fn with_reference(mut self, reference: R) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_popper(mut self, popper: P) -> Self {
        self.popper = Some(popper);
        self
    }

    pub fn with_arrow(mut self, arrow: impl PositionSink + 'static) -> Self {
        self.arrow = Some(Box::new(arrow));
        self
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn reference(&self) -> Option<&R> {
        self.reference.as_ref()
    }

    pub fn popper(&self) -> Option<&P> {
        self.popper.as_ref()
    }

    pub fn arrow(&self) -> Option<&dyn PositionSink> {
        self.arrow.as_ref().map(|a| -> &dyn PositionSink { a.as_ref() })
    }

    /// Merge `overrides` into the stored configuration and reposition
    ///
    /// Fails before touching anything when the reference or popper is
    /// missing, or when the overrides are invalid.
    pub fn update(&mut self, overrides: ConfigOverrides) -> Result<Option<Placement>, PlaceError> {
        let reference = self
            .reference
            .as_ref()
            .ok_or(PlaceError::MissingElement("reference"))?;
        let popper = self
            .popper
            .as_mut()
            .ok_or(PlaceError::MissingElement("popper"))?;

        self.config = self.config.clone().merge(overrides)?;

        let arrow = self
            .arrow
            .as_mut()
            .map(|a| -> &mut dyn PositionSink { a.as_mut() });
        Ok(reposition(reference, popper, arrow, &self.config, self.viewport))
    }
}
