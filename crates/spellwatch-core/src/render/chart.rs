use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Most recent samples kept by [`RollingChart`].
pub const MAX_CHART_POINTS: usize = 10;

/// One labeled chart sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSample {
    pub label: String,
    pub latency_ms: f64,
    pub events_per_second: f64,
}

/// The chart instance the render layer draws into.
pub trait ChartHandle: Send {
    fn append(&mut self, sample: ChartSample);
    fn reset(&mut self);
    /// Samples in arrival order.
    fn samples(&self) -> Vec<ChartSample>;
}

/// Chart series bounded to [`MAX_CHART_POINTS`], oldest evicted first.
#[derive(Debug, Clone)]
pub struct RollingChart {
    capacity: usize,
    samples: VecDeque<ChartSample>,
}

impl Default for RollingChart {
    fn default() -> Self {
        Self::with_capacity(MAX_CHART_POINTS)
    }
}

impl RollingChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&ChartSample> {
        self.samples.back()
    }
}

impl ChartHandle for RollingChart {
    fn append(&mut self, sample: ChartSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    fn reset(&mut self) {
        self.samples.clear();
    }

    fn samples(&self) -> Vec<ChartSample> {
        self.samples.iter().cloned().collect()
    }
}
