use crate::quiz::{Axis, AxisScores};

/// Nominal radial axis range of the radar chart. Values are not clamped to it.
pub const RADIAL_RANGE: (f64, f64) = (0.0, 10.0);

const MIDPOINT: f64 = 5.0;
const STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Radar chart trace: one point per axis, with the first point repeated
/// at the end so the polygon closes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_scores(scores: &AxisScores) -> Self {
        let mut points: Vec<ChartPoint> = Axis::ALL
            .iter()
            .map(|axis| ChartPoint {
                label: axis.chart_label(),
                value: MIDPOINT + STEP * scores.get(*axis) as f64,
            })
            .collect();
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        Self { points }
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Points without the closing duplicate.
    pub fn axes(&self) -> &[ChartPoint] {
        match self.points.len() {
            0 => &self.points,
            n => &self.points[..n - 1],
        }
    }
}
