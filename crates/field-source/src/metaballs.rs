//! Bouncing metaballs.
//!
//! Each ball contributes `radius² / (distance² + ε)` to every sample, with
//! distance measured in grid units. Balls move in grid units per second and
//! bounce off the walls `radius` cells in from each edge.

use isoline_common::{IsolineError, IsolineResult, ScalarGrid};
use rand::Rng;
use tracing::debug;

/// Keeps the falloff finite when a sample sits exactly on a ball centre.
pub const FIELD_EPSILON: f32 = 1e-4;

/// Spawn parameters. Radii and speeds are whole numbers of grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaballConfig {
    pub count: usize,
    pub min_radius: u32,
    pub max_radius: u32,
    /// Largest speed per axis, in cells per second.
    pub max_speed: i32,
}

impl Default for MetaballConfig {
    fn default() -> Self {
        Self {
            count: 5,
            min_radius: 3,
            max_radius: 15,
            max_speed: 5,
        }
    }
}

impl MetaballConfig {
    pub fn validate(&self) -> IsolineResult<()> {
        if self.min_radius == 0 {
            return Err(IsolineError::invalid_config("metaball radius must be at least 1"));
        }
        if self.min_radius > self.max_radius {
            return Err(IsolineError::invalid_config(format!(
                "min radius {} exceeds max radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if self.max_speed < 0 {
            return Err(IsolineError::invalid_config(format!(
                "max speed must not be negative, got {}",
                self.max_speed
            )));
        }
        Ok(())
    }
}

/// A single ball, in grid coordinates (x = column, y = row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metaball {
    pub x: f32,
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub radius: f32,
}

impl Metaball {
    /// Contribution of this ball to sample (row, col).
    #[inline]
    pub fn falloff(&self, row: f32, col: f32) -> f32 {
        let dy = row - self.y;
        let dx = col - self.x;
        self.radius * self.radius / (dy * dy + dx * dx + FIELD_EPSILON)
    }

    /// Reverse a velocity component when the ball is at or past a wall and
    /// still heading into it, then advance by `dt` seconds.
    fn step(&mut self, dt: f32, width: f32, height: f32) {
        if heading_into_wall(self.x, self.vel_x, self.radius, width) {
            self.vel_x = -self.vel_x;
        }
        if heading_into_wall(self.y, self.vel_y, self.radius, height) {
            self.vel_y = -self.vel_y;
        }

        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
    }
}

fn heading_into_wall(pos: f32, vel: f32, radius: f32, extent: f32) -> bool {
    (pos <= radius && vel < 0.0) || (pos >= extent - radius && vel > 0.0)
}

/// A set of balls moving inside a `rows` x `cols` grid.
#[derive(Debug, Clone)]
pub struct Metaballs {
    balls: Vec<Metaball>,
    rows: usize,
    cols: usize,
    config: MetaballConfig,
}

impl Metaballs {
    /// Spawn `config.count` balls with random radius, position and velocity.
    ///
    /// Positions keep the whole ball inside the grid where the grid is large
    /// enough; otherwise the ball starts `radius` cells in from the top-left.
    pub fn spawn<R: Rng + ?Sized>(
        config: MetaballConfig,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> IsolineResult<Self> {
        config.validate()?;
        if rows < 2 || cols < 2 {
            return Err(IsolineError::InvalidDimensions { rows, cols });
        }

        let mut metaballs = Self {
            balls: Vec::with_capacity(config.count),
            rows,
            cols,
            config,
        };
        metaballs.respawn(rng);
        Ok(metaballs)
    }

    /// Build from explicit balls.
    pub fn from_balls(balls: Vec<Metaball>, rows: usize, cols: usize) -> Self {
        Self {
            config: MetaballConfig {
                count: balls.len(),
                ..MetaballConfig::default()
            },
            balls,
            rows,
            cols,
        }
    }

    /// Replace every ball with a freshly randomised one.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let config = self.config;
        let (rows, cols) = (self.rows as i64, self.cols as i64);

        self.balls.clear();
        for _ in 0..config.count {
            let radius = rng.gen_range(config.min_radius..=config.max_radius) as i64;
            let x = rng.gen_range(radius..=(cols - radius).max(radius));
            let y = rng.gen_range(radius..=(rows - radius).max(radius));
            let vel_x = rng.gen_range(-config.max_speed..=config.max_speed);
            let vel_y = rng.gen_range(-config.max_speed..=config.max_speed);

            self.balls.push(Metaball {
                x: x as f32,
                y: y as f32,
                vel_x: vel_x as f32,
                vel_y: vel_y as f32,
                radius: radius as f32,
            });
        }

        debug!(balls = self.balls.len(), rows = self.rows, cols = self.cols, "spawned metaballs");
    }

    /// Move every ball forward by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let (width, height) = (self.cols as f32, self.rows as f32);
        for ball in &mut self.balls {
            ball.step(dt, width, height);
        }
    }

    /// Summed falloff of all balls at sample (row, col).
    pub fn value_at(&self, row: usize, col: usize) -> f32 {
        let (row, col) = (row as f32, col as f32);
        self.balls.iter().map(|ball| ball.falloff(row, col)).sum()
    }

    /// Overwrite the grid's field with the summed falloff.
    pub fn write_field(&self, grid: &mut ScalarGrid) {
        grid.fill_with(|row, col| self.value_at(row, col));
    }

    pub fn balls(&self) -> &[Metaball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ball(x: f32, y: f32, vel_x: f32, vel_y: f32, radius: f32) -> Metaball {
        Metaball {
            x,
            y,
            vel_x,
            vel_y,
            radius,
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let metaballs = Metaballs::spawn(MetaballConfig::default(), 100, 133, &mut rng).unwrap();
        assert_eq!(metaballs.len(), 5);

        for b in metaballs.balls() {
            assert!((3.0..=15.0).contains(&b.radius));
            assert_eq!(b.radius.fract(), 0.0);
            assert!(b.x >= b.radius && b.x <= 133.0 - b.radius);
            assert!(b.y >= b.radius && b.y <= 100.0 - b.radius);
            assert!((-5.0..=5.0).contains(&b.vel_x));
            assert!((-5.0..=5.0).contains(&b.vel_y));
            assert_eq!(b.vel_x.fract(), 0.0);
        }
    }

    #[test]
    fn test_spawn_is_seeded() {
        let a = Metaballs::spawn(MetaballConfig::default(), 50, 60, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Metaballs::spawn(MetaballConfig::default(), 50, 60, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.balls(), b.balls());
    }

    #[test]
    fn test_spawn_on_tiny_grid() {
        let config = MetaballConfig {
            count: 3,
            ..MetaballConfig::default()
        };
        let metaballs = Metaballs::spawn(config, 4, 4, &mut StdRng::seed_from_u64(1)).unwrap();
        for b in metaballs.balls() {
            assert_eq!((b.x, b.y), (b.radius, b.radius));
        }
    }

    #[test]
    fn test_invalid_config() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = MetaballConfig {
            min_radius: 10,
            max_radius: 3,
            ..MetaballConfig::default()
        };
        assert!(Metaballs::spawn(config, 50, 50, &mut rng).is_err());
        assert!(Metaballs::spawn(MetaballConfig::default(), 1, 50, &mut rng).is_err());
    }

    #[test]
    fn test_step_moves_by_velocity() {
        let mut metaballs = Metaballs::from_balls(vec![ball(50.0, 40.0, 5.0, -2.0, 5.0)], 100, 100);
        metaballs.step(0.5);
        assert_eq!(metaballs.balls()[0], ball(52.5, 39.0, 5.0, -2.0, 5.0));
    }

    #[test]
    fn test_step_bounces_off_walls() {
        let mut metaballs = Metaballs::from_balls(
            vec![
                ball(5.0, 50.0, -3.0, 0.0, 5.0), // left wall
                ball(96.0, 50.0, 3.0, 0.0, 4.0), // right wall
                ball(50.0, 97.0, 0.0, 4.0, 3.0), // bottom wall
                ball(50.0, 1.0, 0.0, -1.0, 3.0), // past the top wall
            ],
            100,
            100,
        );
        metaballs.step(1.0);

        let balls = metaballs.balls();
        assert_eq!((balls[0].x, balls[0].vel_x), (8.0, 3.0));
        assert_eq!((balls[1].x, balls[1].vel_x), (93.0, -3.0));
        assert_eq!((balls[2].y, balls[2].vel_y), (93.0, -4.0));
        assert_eq!((balls[3].y, balls[3].vel_y), (2.0, 1.0));
    }

    #[test]
    fn test_step_leaves_wall_without_jitter() {
        // At the wall but already heading away: no reversal
        let mut metaballs = Metaballs::from_balls(vec![ball(3.0, 50.0, 2.0, 0.0, 3.0)], 100, 100);
        metaballs.step(0.1);
        metaballs.step(0.1);
        let b = metaballs.balls()[0];
        assert_eq!(b.vel_x, 2.0);
        assert!(b.x > 3.0);
    }

    #[test]
    fn test_falloff() {
        let b = ball(10.0, 10.0, 0.0, 0.0, 4.0);
        // 16 / (9 + 16 + 1e-4)
        assert!((b.falloff(13.0, 14.0) - 16.0 / 25.0001).abs() < 1e-6);
        // centre is large but finite
        assert!((b.falloff(10.0, 10.0) - 16.0 / FIELD_EPSILON).abs() < 1.0);
    }

    #[test]
    fn test_write_field_sums_balls() {
        let metaballs = Metaballs::from_balls(
            vec![ball(2.0, 2.0, 0.0, 0.0, 2.0), ball(7.0, 5.0, 0.0, 0.0, 3.0)],
            8,
            10,
        );
        let mut grid = ScalarGrid::new(8, 10, 16.0).unwrap();
        grid.classify();
        metaballs.write_field(&mut grid);

        assert!(!grid.is_classified());
        let expected = 4.0 / (1.0 + 9.0 + FIELD_EPSILON) + 9.0 / (4.0 + 4.0 + FIELD_EPSILON);
        assert!((grid.value(3, 5) - expected).abs() < 1e-5);
        assert_eq!(grid.value(3, 5), metaballs.value_at(3, 5));
    }
}
