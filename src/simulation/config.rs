use serde::{Deserialize, Serialize};

/// Simulation constants, loadable as a JSON bundle.
///
/// Validation is fail-fast: a bad value is an error at construction or
/// load time, never silently clamped.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Body diameter in pixels, > 0.
    pub ball_diameter: f32,
    /// Speed fraction lost on each wall contact, within [0, 1].
    pub collision_energy_loss: f32,
    /// Downward acceleration in px/s^2 (positive = down).
    pub gravitational_acceleration: f32,
    /// Broad-phase cell size in pixels, > 0. Cells smaller than the body
    /// diameter make the broad phase miss more pairs.
    pub grid_cell_size: f32,
    /// Spawn colors (0xRRGGBB), cycled per spawn command.
    pub palette: Vec<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_diameter: 4.0,
            collision_energy_loss: 0.15,
            gravitational_acceleration: 900.81,
            grid_cell_size: 100.0,
            palette: vec![0x4f372d, 0x00a0b0, 0xd35d3a, 0xcc2a36],
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON bundle. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.ball_diameter.is_finite() || self.ball_diameter <= 0.0 {
            return Err(format!("ball_diameter must be > 0, got {}", self.ball_diameter));
        }
        if !self.grid_cell_size.is_finite() || self.grid_cell_size <= 0.0 {
            return Err(format!("grid_cell_size must be > 0, got {}", self.grid_cell_size));
        }
        if !self.collision_energy_loss.is_finite()
            || !(0.0..=1.0).contains(&self.collision_energy_loss)
        {
            return Err(format!(
                "collision_energy_loss must be within [0, 1], got {}",
                self.collision_energy_loss
            ));
        }
        if !self.gravitational_acceleration.is_finite() {
            return Err("gravitational_acceleration must be finite".to_string());
        }
        if self.palette.is_empty() {
            return Err("palette must not be empty".to_string());
        }
        Ok(())
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }
}
