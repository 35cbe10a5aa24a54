//! popper-place - choose where a floating element sits next to its anchor
//!
//! Given the box of a reference element, the box of a popper, and a bounding
//! container, this library picks the first direction/alignment pair from
//! configurable fallback orders that keeps the popper inside the container.
//!
//! # Example
//!
//! ```rust
//! use popper_place::{place, PlacementConfig, Rect};
//!
//! let reference = Rect::from_edges(100.0, 100.0, 150.0, 130.0);
//! let popper = Rect::sized(80.0, 20.0);
//! let container = Rect::sized(500.0, 500.0);
//!
//! let placement = place(&reference, &popper, &container, &PlacementConfig::default()).unwrap();
//! assert_eq!(placement.code(), "bs");
//! assert_eq!(placement.popper.top, 138.0);
//! ```

pub mod error;
pub mod geometry;
pub mod placement;
pub mod scene;
pub mod surface;

pub use error::{ConfigError, PlaceError};
pub use geometry::{Axis, Rect};
pub use placement::{
    resolve, Alignment, AlignmentFlipOrder, ConfigOverrides, Direction, DirectionFlipOrder,
    Offset, Placement, PlacementConfig, Position,
};
pub use scene::{Scene, SceneResult};
pub use surface::{reposition, FloatingElement, Measure, PositionSink, Positioner};

/// Resolve a placement with the given configuration
///
/// Same as [`resolve`]; `popper` is the popper's box with its offsets at zero.
///
/// # Example
///
/// ```rust
/// use popper_place::{place, PlacementConfig, Position, Rect};
///
/// // Not enough room above, so `top` falls back to `bottom`.
/// let reference = Rect::from_edges(10.0, 100.0, 150.0, 40.0);
/// let config = PlacementConfig::new()
///     .with_position("top".parse::<Position>().unwrap());
///
/// let placement = place(
///     &reference,
///     &Rect::sized(80.0, 20.0),
///     &Rect::sized(500.0, 500.0),
///     &config,
/// )
/// .unwrap();
/// assert_eq!(placement.code(), "bm");
/// ```
pub fn place(
    reference: &Rect,
    popper: &Rect,
    container: &Rect,
    config: &PlacementConfig,
) -> Option<Placement> {
    resolve(reference, popper, container, config)
}

/// Load a scene from TOML source and place it
///
/// # Example
///
/// ```rust
/// use popper_place::place_toml;
///
/// let result = place_toml(r#"
///     [container]
///     right = 500
///     bottom = 500
///
///     [reference]
///     left = 100
///     top = 100
///     width = 50
///     height = 30
///
///     [popper]
///     width = 80
///     height = 20
/// "#).unwrap();
///
/// assert_eq!(result.placement.unwrap().code(), "bs");
/// ```
pub fn place_toml(source: &str) -> Result<SceneResult, ConfigError> {
    Ok(Scene::from_toml(source)?.place())
}
