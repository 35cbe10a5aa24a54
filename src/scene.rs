//! TOML loading for placement configurations and scenes
//!
//! A configuration document looks like:
//!
//! ```toml
//! position = "bottom-start"
//! margin = 8
//! padding = 4
//!
//! [container]
//! right = 500
//! bottom = 500
//!
//! [position_flip_order]
//! top = "tbrl"
//!
//! [variant_flip_order]
//! start = "sme"
//! ```
//!
//! A scene adds the measured boxes (`[reference]`, `[popper]`), an optional
//! `[viewport]` used when no container is set, and `arrow = true` to
//! position an arrow alongside the popper.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::placement::config::check_length;
use crate::placement::{
    Alignment, AlignmentFlipOrder, Direction, DirectionFlipOrder, Offset, Placement,
    PlacementConfig, Position,
};
use crate::surface::{reposition, FloatingElement, Measure, PositionSink};

/// Box table: `top`/`left` default to zero, the far edges come from
/// `right`/`bottom` or `width`/`height`
#[derive(Deserialize)]
struct TomlRect {
    top: Option<f64>,
    left: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Deserialize)]
struct TomlPlacement {
    position: Option<Spanned<String>>,
    margin: Option<Spanned<f64>>,
    padding: Option<Spanned<f64>>,
    container: Option<Spanned<TomlRect>>,
    #[serde(default)]
    position_flip_order: BTreeMap<String, Spanned<String>>,
    #[serde(default)]
    variant_flip_order: BTreeMap<String, Spanned<String>>,
}

#[derive(Deserialize)]
struct TomlScene {
    reference: Spanned<TomlRect>,
    popper: Spanned<TomlRect>,
    viewport: Option<Spanned<TomlRect>>,
    #[serde(default)]
    arrow: bool,
}

impl PlacementConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string; unset keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlPlacement = toml::from_str(content)?;
        parsed.into_config()
    }
}

impl TomlPlacement {
    fn into_config(self) -> Result<PlacementConfig, ConfigError> {
        let mut config = PlacementConfig::default();

        if let Some(position) = self.position {
            config.position = position
                .get_ref()
                .parse::<Position>()
                .map_err(|e| e.with_span(position.span()))?;
        }
        if let Some(margin) = self.margin {
            config.margin =
                check_length("margin", *margin.get_ref()).map_err(|e| e.with_span(margin.span()))?;
        }
        if let Some(padding) = self.padding {
            config.padding = check_length("padding", *padding.get_ref())
                .map_err(|e| e.with_span(padding.span()))?;
        }
        if let Some(container) = self.container {
            config.container = Some(spanned_rect("container", container)?);
        }

        for (key, order) in self.position_flip_order {
            let direction = key.parse::<Direction>().map_err(|_| {
                ConfigError::invalid_flip_order("direction", key.as_str(), "key is not a direction")
                    .with_span(order.span())
            })?;
            config.position_flip_order = config
                .position_flip_order
                .with_order(direction, order.get_ref())
                .map_err(|e| e.with_span(order.span()))?;
        }
        for (key, order) in self.variant_flip_order {
            let alignment = key.parse::<Alignment>().map_err(|_| {
                ConfigError::invalid_flip_order("alignment", key.as_str(), "key is not an alignment")
                    .with_span(order.span())
            })?;
            config.variant_flip_order = config
                .variant_flip_order
                .with_order(alignment, order.get_ref())
                .map_err(|e| e.with_span(order.span()))?;
        }

        Ok(config)
    }
}

fn spanned_rect(name: &str, rect: Spanned<TomlRect>) -> Result<Rect, ConfigError> {
    let span = rect.span();
    rect.into_inner()
        .into_rect(name)
        .map_err(|e| e.with_span(span))
}

impl TomlRect {
    fn into_rect(self, name: &str) -> Result<Rect, ConfigError> {
        let top = self.top.unwrap_or(0.0);
        let left = self.left.unwrap_or(0.0);
        let right = far_edge(name, "right", "width", left, self.right, self.width)?;
        let bottom = far_edge(name, "bottom", "height", top, self.bottom, self.height)?;

        for value in [top, left, right, bottom] {
            if !value.is_finite() {
                return Err(ConfigError::invalid_rect(name, "edges must be finite"));
            }
        }
        if right < left {
            return Err(ConfigError::invalid_rect(name, "right edge is left of left edge"));
        }
        if bottom < top {
            return Err(ConfigError::invalid_rect(name, "bottom edge is above top edge"));
        }

        Ok(Rect::from_edges(top, left, right, bottom))
    }
}

fn far_edge(
    name: &str,
    edge: &str,
    extent: &str,
    origin: f64,
    edge_value: Option<f64>,
    extent_value: Option<f64>,
) -> Result<f64, ConfigError> {
    match (edge_value, extent_value) {
        (Some(edge_value), None) => Ok(edge_value),
        (None, Some(extent_value)) => Ok(origin + extent_value),
        (Some(edge_value), Some(extent_value)) if edge_value == origin + extent_value => {
            Ok(edge_value)
        }
        (Some(_), Some(_)) => Err(ConfigError::invalid_rect(
            name,
            format!("{} and {} disagree", edge, extent),
        )),
        (None, None) => Err(ConfigError::invalid_rect(
            name,
            format!("needs either {} or {}", edge, extent),
        )),
    }
}

/// Measured boxes plus the configuration to place them with
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub reference: Rect,
    pub popper: Rect,
    /// Fallback container when the configuration sets none
    pub viewport: Rect,
    /// Whether an arrow is positioned with the popper
    pub arrow: bool,
    pub config: PlacementConfig,
}

/// Outcome of placing a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneResult {
    pub placement: Option<Placement>,
    /// Popper box after the placement was applied
    pub popper: Rect,
    /// Arrow offsets, when the scene has an arrow and a placement was found
    pub arrow: Option<Offset>,
}

/// One line per placed element, or `no placement`
impl fmt::Display for SceneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(placement) = &self.placement else {
            return f.write_str("no placement");
        };
        write!(
            f,
            "{} top={} left={}",
            placement.code(),
            placement.popper.top,
            placement.popper.left
        )?;
        if let Some(arrow) = &self.arrow {
            write!(f, "\narrow top={} left={}", arrow.top, arrow.left)?;
        }
        Ok(())
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = PlacementConfig::from_toml(content)?;
        let scene: TomlScene = toml::from_str(content)?;

        let viewport = match scene.viewport {
            Some(viewport) => spanned_rect("viewport", viewport)?,
            None => config.container.ok_or_else(|| {
                ConfigError::invalid_rect("container", "scene needs a [container] or [viewport] table")
            })?,
        };

        Ok(Scene {
            reference: spanned_rect("reference", scene.reference)?,
            popper: spanned_rect("popper", scene.popper)?,
            viewport,
            arrow: scene.arrow,
            config,
        })
    }

    /// The rectangle placements must stay inside
    pub fn container(&self) -> Rect {
        self.config.container.unwrap_or(self.viewport)
    }

    /// Place the popper (and arrow) against the reference
    pub fn place(&self) -> SceneResult {
        let mut popper = FloatingElement::new(self.popper);
        let mut arrow = FloatingElement::new(Rect::sized(0.0, 0.0));
        let arrow_sink: Option<&mut dyn PositionSink> = if self.arrow {
            Some(&mut arrow)
        } else {
            None
        };

        let placement = reposition(
            &self.reference,
            &mut popper,
            arrow_sink,
            &self.config,
            self.viewport,
        );

        SceneResult {
            placement,
            popper: popper.bounding_rect(),
            arrow: placement.filter(|_| self.arrow).map(|_| arrow.offset()),
        }
    }
}
