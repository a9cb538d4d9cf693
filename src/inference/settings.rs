// src/inference/settings.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const TOKEN_STEP: u32 = 10;
pub const PENALTY_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_new_tokens: u32,
    pub repetition_penalty: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_new_tokens: 512,
            repetition_penalty: 1.2,
        }
    }
}

impl GenerationSettings {
    pub fn more_tokens(&mut self) {
        self.max_new_tokens = self.max_new_tokens.saturating_add(TOKEN_STEP);
    }

    pub fn fewer_tokens(&mut self) {
        self.max_new_tokens = self.max_new_tokens.saturating_sub(TOKEN_STEP);
    }

    pub fn more_penalty(&mut self) {
        self.repetition_penalty = round_penalty(self.repetition_penalty + PENALTY_STEP);
    }

    pub fn less_penalty(&mut self) {
        self.repetition_penalty = round_penalty(self.repetition_penalty - PENALTY_STEP);
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_new_tokens == 0 {
            anyhow::bail!("max_new_tokens must be greater than zero");
        }
        if !self.repetition_penalty.is_finite() || self.repetition_penalty <= 0.0 {
            anyhow::bail!(
                "repetition_penalty must be a positive number, got {}",
                self.repetition_penalty
            );
        }
        Ok(())
    }
}

// keeps repeated 0.1 steps from drifting to 1.2000001
fn round_penalty(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
