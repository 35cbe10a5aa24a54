//! Configuration for placement resolution

use crate::error::ConfigError;
use crate::geometry::Rect;

use super::flip::{AlignmentFlipOrder, DirectionFlipOrder};
use super::types::Position;

/// Configuration options for placement resolution
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Bounding box every placement must stay inside
    ///
    /// When unset, the surface adapter uses its viewport.
    pub container: Option<Rect>,

    /// Preferred direction and alignment
    pub position: Position,

    /// Gap between popper and reference along the primary axis
    pub margin: f64,

    /// Minimum clearance from the container's far edges
    pub padding: f64,

    /// Direction fallbacks, keyed by the preferred direction
    pub position_flip_order: DirectionFlipOrder,

    /// Alignment fallbacks, keyed by the preferred alignment
    pub variant_flip_order: AlignmentFlipOrder,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            container: None,
            position: Position::default(),
            margin: 8.0,
            padding: 0.0,
            position_flip_order: DirectionFlipOrder::default(),
            variant_flip_order: AlignmentFlipOrder::default(),
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounding container
    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = Some(container);
        self
    }

    /// Set the preferred position
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the margin, rejecting negative or non-finite values
    pub fn with_margin(mut self, margin: f64) -> Result<Self, ConfigError> {
        self.margin = check_length("margin", margin)?;
        Ok(self)
    }

    /// Set the padding, rejecting negative or non-finite values
    pub fn with_padding(mut self, padding: f64) -> Result<Self, ConfigError> {
        self.padding = check_length("padding", padding)?;
        Ok(self)
    }

    pub fn with_position_flip_order(mut self, order: DirectionFlipOrder) -> Self {
        self.position_flip_order = order;
        self
    }

    pub fn with_variant_flip_order(mut self, order: AlignmentFlipOrder) -> Self {
        self.variant_flip_order = order;
        self
    }

    /// Merge partial options over this configuration
    pub fn merge(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(container) = overrides.container {
            self.container = Some(container);
        }
        if let Some(position) = overrides.position {
            self.position = position;
        }
        if let Some(margin) = overrides.margin {
            self = self.with_margin(margin)?;
        }
        if let Some(padding) = overrides.padding {
            self = self.with_padding(padding)?;
        }
        if let Some(order) = overrides.position_flip_order {
            self.position_flip_order = order;
        }
        if let Some(order) = overrides.variant_flip_order {
            self.variant_flip_order = order;
        }
        Ok(self)
    }
}

/// Partial options applied on top of an existing configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub container: Option<Rect>,
    pub position: Option<Position>,
    pub margin: Option<f64>,
    pub padding: Option<f64>,
    pub position_flip_order: Option<DirectionFlipOrder>,
    pub variant_flip_order: Option<AlignmentFlipOrder>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn container(mut self, container: Rect) -> Self {
        self.container = Some(container);
        self
    }
}

pub(crate) fn check_length(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::invalid_length(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{Alignment, Direction};

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.container, None);
        assert_eq!(config.position.to_string(), "bottom-start");
        assert_eq!(config.margin, 8.0);
        assert_eq!(config.padding, 0.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_container(Rect::sized(500.0, 500.0))
            .with_position(Position::new(Direction::Left, Alignment::End))
            .with_margin(4.0)
            .unwrap()
            .with_padding(2.0)
            .unwrap();

        assert_eq!(config.container, Some(Rect::sized(500.0, 500.0)));
        assert_eq!(config.position.code(), "le");
        assert_eq!(config.margin, 4.0);
        assert_eq!(config.padding, 2.0);
    }

    #[test]
    fn test_rejects_negative_lengths() {
        assert!(PlacementConfig::new().with_margin(-1.0).is_err());
        assert!(PlacementConfig::new().with_padding(f64::NAN).is_err());
        assert!(PlacementConfig::new().with_padding(f64::INFINITY).is_err());
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = PlacementConfig::new().with_margin(12.0).unwrap();
        let merged = base
            .clone()
            .merge(ConfigOverrides::new().position(Position::new(Direction::Top, Alignment::Middle)))
            .unwrap();

        assert_eq!(merged.margin, 12.0);
        assert_eq!(merged.position.code(), "tm");
        assert_eq!(merged.position_flip_order, base.position_flip_order);
    }

    #[test]
    fn test_merge_validates_lengths() {
        let result = PlacementConfig::new().merge(ConfigOverrides::new().padding(-3.0));
        assert!(result.is_err());
    }
}
