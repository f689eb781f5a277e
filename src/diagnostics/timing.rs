use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall time spent in one analysis stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Per-stage timings of one analysis run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Run `f`, record its duration under `label`, and pass its value through.
    pub fn measure<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.push(label, start.elapsed().as_secs_f64() * 1000.0);
        value
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_records_stage_and_returns_value() {
        let mut t = TimingBreakdown::default();
        let v = t.measure("difference", || 41 + 1);
        assert_eq!(v, 42);
        assert_eq!(t.stages.len(), 1);
        assert!(t.stage_ms("difference").is_some_and(|ms| ms >= 0.0));
        assert!(t.stage_ms("edges").is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let mut t = TimingBreakdown {
            total_ms: 1.5,
            ..Default::default()
        };
        t.push("contours", 0.25);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"totalMs\":1.5"), "{json}");
        assert!(json.contains("\"elapsedMs\":0.25"), "{json}");
    }
}
