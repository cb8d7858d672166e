//! Shapes demo: circles and polygons bouncing in a box, with
//! minimum-translation-vector separation applied on every contact.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use canvas::{Canvas, RecordingCanvas};
use collider::{CircleCollider, Collider, PolygonCollider};
use engine::{Engine, EngineConfig, Entity};
use glam::Vec2;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Demo configuration, loaded from `shapes.toml` when present.
#[derive(Debug, Clone, Deserialize)]
struct DemoConfig {
    #[serde(default = "default_ticks")]
    ticks: u32,
    #[serde(default = "default_circles")]
    circles: usize,
    #[serde(default = "default_polygons")]
    polygons: usize,
    #[serde(default = "default_world_size")]
    world_size: f32,
    #[serde(default = "default_tick_rate")]
    tick_rate: f32,
}

impl DemoConfig {
    fn load() -> Result<Self> {
        let path = Path::new("shapes.toml");
        if path.exists() {
            Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
        } else {
            Ok(toml::from_str("")?)
        }
    }
}

fn default_ticks() -> u32 {
    600
}
fn default_circles() -> usize {
    12
}
fn default_polygons() -> usize {
    8
}
fn default_world_size() -> f32 {
    400.0
}
fn default_tick_rate() -> f32 {
    60.0
}

/// One moving shape.
struct Body {
    collider: Collider,
    velocity: Vec2,
    spin: f32,
}

impl Body {
    fn position(&self) -> Vec2 {
        match &self.collider {
            Collider::Circle(c) => c.position(),
            Collider::Polygon(p) => p.position(),
            _ => Vec2::ZERO,
        }
    }
}

/// Entity owning the whole swarm, so shape pairs can be resolved against
/// each other inside one `update`.
struct Swarm {
    bodies: Vec<Body>,
    extent: f32,
    contacts: Rc<Cell<u64>>,
}

impl Entity for Swarm {
    fn update(&mut self, dt: f32) {
        // integrate and bounce off the world border
        for body in &mut self.bodies {
            body.collider.translate(body.velocity * dt);
            if body.spin != 0.0 {
                // only polygons carry spin, so the rotation can't fail
                let _ = body.collider.rotate_by(body.spin * dt);
            }

            let pos = body.position();
            if (pos.x < 0.0 && body.velocity.x < 0.0)
                || (pos.x > self.extent && body.velocity.x > 0.0)
            {
                body.velocity.x = -body.velocity.x;
            }
            if (pos.y < 0.0 && body.velocity.y < 0.0)
                || (pos.y > self.extent && body.velocity.y > 0.0)
            {
                body.velocity.y = -body.velocity.y;
            }
        }

        // resolve every colliding pair, splitting the push between them
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                let Some(contact) = a.collider.check(&b.collider) else {
                    continue;
                };
                if let Some(mtv) = contact.mtv {
                    a.collider.translate(mtv * 0.5);
                    b.collider.translate(-mtv * 0.5);
                    self.contacts.set(self.contacts.get() + 1);
                    debug!(i, j, ?mtv, "separated contact");
                }
            }
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for body in &self.bodies {
            body.collider.render(canvas);
        }
    }

    fn tags(&self) -> &[&str] {
        &["swarm"]
    }
}

/// A regular polygon collider centered on its position.
fn regular_polygon(sides: usize, radius: f32, position: Vec2) -> PolygonCollider {
    let vertices: Vec<Vec2> = (0..sides)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / sides as f32;
            Vec2::from_angle(theta) * radius
        })
        .collect();
    PolygonCollider::new(&vertices, position).expect("a regular polygon has at least 3 vertices")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DemoConfig::load()?;
    info!(?config, "starting shapes demo");

    let mut rng = rand::rng();
    let mut bodies = Vec::new();
    for _ in 0..config.circles {
        bodies.push(Body {
            collider: CircleCollider::new(
                Vec2::new(
                    rng.random_range(0.0..config.world_size),
                    rng.random_range(0.0..config.world_size),
                ),
                rng.random_range(5.0..15.0),
            )
            .into(),
            velocity: Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0)),
            spin: 0.0,
        });
    }
    for _ in 0..config.polygons {
        bodies.push(Body {
            collider: regular_polygon(
                rng.random_range(3..=6),
                rng.random_range(8.0..18.0),
                Vec2::new(
                    rng.random_range(0.0..config.world_size),
                    rng.random_range(0.0..config.world_size),
                ),
            )
            .into(),
            velocity: Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0)),
            spin: rng.random_range(-2.0..2.0),
        });
    }

    let contacts = Rc::new(Cell::new(0));
    let mut engine = Engine::new(EngineConfig {
        tick_rate: config.tick_rate,
        screen_width: config.world_size,
        screen_height: config.world_size,
        ..EngineConfig::default()
    })?;
    engine.add_entity(Box::new(Swarm {
        bodies,
        extent: config.world_size,
        contacts: Rc::clone(&contacts),
    }));

    let mut canvas = RecordingCanvas::new(config.world_size, config.world_size);
    let frame_dt = 1.0 / config.tick_rate;
    for tick in 0..config.ticks {
        engine.update(frame_dt);
        if tick % 60 == 0 {
            canvas.clear();
            engine.render(&mut canvas);
            info!(
                tick,
                contacts = contacts.get(),
                draw_ops = canvas.ops().len(),
                "simulation progress"
            );
        }
    }

    info!(
        ticks = config.ticks,
        contacts = contacts.get(),
        "shapes demo finished"
    );
    Ok(())
}
