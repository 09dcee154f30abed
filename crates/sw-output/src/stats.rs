use sw_sim::Frame;

/// Distance summary of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub agents:           usize,
    /// Agents strictly inside `threshold` of their target.
    pub converged_agents: usize,
    pub mean_distance:    f64,
    pub max_distance:     f64,
}

impl FrameStats {
    pub fn from_frame(frame: &Frame<'_>, threshold: f64) -> Self {
        let mut converged_agents = 0;
        let mut sum = 0.0;
        let mut max_distance: f64 = 0.0;

        for (p, t) in frame.positions.iter().zip(frame.targets) {
            let d = p.distance(*t);
            if d < threshold {
                converged_agents += 1;
            }
            sum += d;
            max_distance = max_distance.max(d);
        }

        let agents = frame.len();
        Self {
            agents,
            converged_agents,
            mean_distance: if agents == 0 { 0.0 } else { sum / agents as f64 },
            max_distance,
        }
    }
}
