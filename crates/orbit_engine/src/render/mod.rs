//! Rendering abstraction
//!
//! The engine never talks to a graphics API directly; hosts hand [`draw`] a
//! [`RenderSink`] and receive the scene as primitive fill commands. Each body
//! is drawn base-first: the shared circle, then its kind-specific overlays.

use crate::body::BodyKind;
use crate::foundation::math::{from_angle_and_scale, Vec2};
use crate::universe::Universe;

/// Background fill every circle gradient fades into
pub const GRADIENT_EDGE: &str = "#000";
/// Fill colour of the player's jump gauge
pub const GAUGE_COLOR: &str = "#0f0";
/// Gauge pixels per point of jump charge
const GAUGE_SCALE: f64 = 0.4;
/// Gauge thickness in pixels
const GAUGE_THICKNESS: f64 = 3.0;
/// Accent disc radius as a fraction of the goal planet's radius
const ACCENT_RADIUS_FACTOR: f64 = 0.5;

/// Receiver for primitive fill commands
pub trait RenderSink {
    /// Fill a circle with a radial gradient from `color_from` at the centre
    /// to `color_to` at the rim, rotated by `orientation`
    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f64,
        orientation: f64,
        color_from: &str,
        color_to: &str,
    );

    /// Fill an axis-aligned rectangle rotated by `angle` about its centre
    fn fill_rotated_rect(&mut self, center: Vec2, size: Vec2, angle: f64, color: &str);

    /// Draw a run of text centred on `position`
    fn fill_text(&mut self, position: Vec2, text: &str, font_size: f64);
}

/// Emit the whole universe into a sink
pub fn draw(universe: &Universe, sink: &mut dyn RenderSink) {
    for (_, body) in universe.iter() {
        if let Some(circle) = &body.circle {
            sink.fill_circle(
                body.position,
                circle.radius,
                circle.orientation,
                &circle.texture,
                GRADIENT_EDGE,
            );
        }

        match &body.kind {
            BodyKind::Player(state) => {
                if state.jump_charge > 0.0 {
                    let orientation = body
                        .circle
                        .as_ref()
                        .map_or(0.0, |circle| circle.orientation);
                    let length = state.jump_charge * GAUGE_SCALE;
                    let center = body.position + from_angle_and_scale(orientation, length / 2.0);
                    sink.fill_rotated_rect(
                        center,
                        crate::foundation::math::vec(length, GAUGE_THICKNESS),
                        orientation,
                        GAUGE_COLOR,
                    );
                }
            }
            BodyKind::GoalPlanet { accent } => {
                if let Some(circle) = &body.circle {
                    sink.fill_circle(
                        body.position,
                        circle.radius * ACCENT_RADIUS_FACTOR,
                        circle.orientation,
                        accent,
                        GRADIENT_EDGE,
                    );
                }
            }
            BodyKind::Text(block) => {
                sink.fill_text(body.position, &block.text, block.font_size);
            }
            _ => {}
        }
    }
}

/// One captured fill command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A circle fill
    Circle {
        /// Centre of the circle
        center: Vec2,
        /// Radius in pixels
        radius: f64,
        /// Rotation in radians
        orientation: f64,
        /// Gradient start colour
        color_from: String,
        /// Gradient end colour
        color_to: String,
    },
    /// A rotated rectangle fill
    Rect {
        /// Centre of the rectangle
        center: Vec2,
        /// Width and height in pixels
        size: Vec2,
        /// Rotation in radians
        angle: f64,
        /// Fill colour
        color: String,
    },
    /// A run of text
    Text {
        /// Centre of the text run
        position: Vec2,
        /// The text drawn
        text: String,
        /// Font size in pixels
        font_size: f64,
    },
}

/// Sink that records every command, for tests and headless hosts
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Commands in emission order
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the circle commands recorded
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f64,
        orientation: f64,
        color_from: &str,
        color_to: &str,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            orientation,
            color_from: color_from.to_owned(),
            color_to: color_to.to_owned(),
        });
    }

    fn fill_rotated_rect(&mut self, center: Vec2, size: Vec2, angle: f64, color: &str) {
        self.commands.push(DrawCommand::Rect {
            center,
            size,
            angle,
            color: color.to_owned(),
        });
    }

    fn fill_text(&mut self, position: Vec2, text: &str, font_size: f64) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            font_size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, SpawnerState};
    use crate::foundation::math::vec;

    #[test]
    fn spawners_and_text_bodies_draw_no_circles() {
        let mut universe = Universe::new();
        universe.insert(Body::spawner(vec(0.0, 0.0), SpawnerState::new(1.0, 0.0)));
        universe.insert(Body::text(vec(100.0, 50.0), "paused", 24.0));

        let mut sink = RecordingSink::new();
        draw(&universe, &mut sink);

        assert_eq!(sink.circle_count(), 0);
        assert!(sink
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "paused")));
    }

    #[test]
    fn goal_planet_layers_an_accent_disc_over_its_base() {
        let mut universe = Universe::new();
        universe.insert(Body::goal_planet(vec(200.0, 200.0), "#00f", "#ff0"));

        let mut sink = RecordingSink::new();
        draw(&universe, &mut sink);

        assert_eq!(sink.circle_count(), 2);
        let radii: Vec<f64> = sink
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert!(radii[1] < radii[0]);
    }

    #[test]
    fn jump_gauge_appears_only_while_charging() {
        let mut universe = Universe::new();
        universe.insert(Body::player(vec(50.0, 50.0), 0.0));

        let mut sink = RecordingSink::new();
        draw(&universe, &mut sink);
        assert!(!sink
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Rect { .. })));

        let player = universe.player().unwrap();
        universe
            .get_mut(player)
            .unwrap()
            .player_state_mut()
            .unwrap()
            .jump_charge = 60.0;

        let mut sink = RecordingSink::new();
        draw(&universe, &mut sink);
        assert!(sink
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Rect { .. })));
    }
}
