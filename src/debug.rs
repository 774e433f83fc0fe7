/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics and
 * simulation counters to be displayed in the UI.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub collisions: usize,
    pub selected_boid: Option<usize>,
}
