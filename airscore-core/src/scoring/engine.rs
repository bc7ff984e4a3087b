//! Snapshot scoring

use crate::{
    constants::thresholds::{EMPTY_SNAPSHOT_SCORE, MAX_FINAL_SCORE, MIN_FINAL_SCORE},
    errors::{ScoreError, ScoreResult},
    readings::{Gas, Snapshot, TRACKED_GASES},
};

use super::{threshold::ThresholdTable, AggregationMode};

/// Converts snapshots into air-quality scores
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreEngine {
    thresholds: ThresholdTable,
}

impl ScoreEngine {
    /// Engine with the compiled-in thresholds
    pub const DEFAULT: Self = Self { thresholds: ThresholdTable::DEFAULT };

    /// Engine with a custom threshold table
    pub fn new(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }

    /// Threshold table in use
    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Severity of one gas concentration, in [0, 100]
    pub fn score_gas(&self, gas: Gas, value: f32) -> f32 {
        self.thresholds.get(gas).score(value)
    }

    /// [`ScoreEngine::score_gas`] keyed by wire name
    pub fn score_gas_named(&self, name: &str, value: f32) -> ScoreResult<f32> {
        let gas = Gas::from_name(name).ok_or_else(|| ScoreError::UnknownGas { name: name.into() })?;
        Ok(self.score_gas(gas, value))
    }

    /// Per-gas scores for every tracked gas present in the snapshot
    pub fn gas_scores<'a>(
        &'a self,
        snapshot: &'a Snapshot,
    ) -> impl Iterator<Item = (Gas, f32)> + 'a {
        TRACKED_GASES.into_iter().filter_map(move |gas| {
            snapshot
                .concentration(gas)
                .map(|(_, value)| (gas, self.score_gas(gas, value)))
        })
    }

    /// Aggregate score in [1, 100]
    ///
    /// A snapshot without any tracked gas scores 100. `Worst` takes the
    /// minimum of the per-gas scores.
    pub fn air_quality_score(&self, snapshot: &Snapshot, mode: AggregationMode) -> u8 {
        let mut count = 0usize;
        let mut sum = 0.0f32;
        let mut min = f32::INFINITY;

        for (_, score) in self.gas_scores(snapshot) {
            count += 1;
            sum += score;
            min = min.min(score);
        }

        if count == 0 {
            log_debug!("No tracked gas in snapshot, scoring as {}", EMPTY_SNAPSHOT_SCORE);
            return EMPTY_SNAPSHOT_SCORE;
        }

        let combined = match mode {
            AggregationMode::Average => sum / count as f32,
            AggregationMode::Worst => min,
        };

        let clamped = combined
            .max(MIN_FINAL_SCORE as f32)
            .min(MAX_FINAL_SCORE as f32);

        libm::roundf(clamped) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::{ClimateReading, GasReading};

    fn snapshot(a: &[(&str, f32)], b: &[(&str, f32)]) -> Snapshot {
        Snapshot::new(
            a.iter().map(|(n, v)| (*n, *v)).collect::<GasReading>(),
            b.iter().map(|(n, v)| (*n, *v)).collect::<GasReading>(),
            ClimateReading { temperature: 21.0, humidity: 40.0 },
        )
    }

    #[test]
    fn empty_snapshot_is_clean() {
        let engine = ScoreEngine::default();
        let empty = Snapshot::default();

        assert_eq!(engine.air_quality_score(&empty, AggregationMode::Average), 100);
        assert_eq!(engine.air_quality_score(&empty, AggregationMode::Worst), 100);
    }

    #[test]
    fn untracked_gases_are_ignored() {
        let engine = ScoreEngine::default();
        let only_untracked = snapshot(&[("CO", 900.0), ("NH4", 12.0)], &[("LPG", 3000.0)]);

        assert_eq!(engine.air_quality_score(&only_untracked, AggregationMode::Average), 100);
    }

    #[test]
    fn single_gas_scores() {
        let engine = ScoreEngine::default();

        let average = AggregationMode::Average;
        assert_eq!(engine.air_quality_score(&snapshot(&[("CO2", 50.0)], &[]), average), 15);
        assert_eq!(engine.air_quality_score(&snapshot(&[("CO2", 150.0)], &[]), average), 45);
    }

    #[test]
    fn average_and_worst_modes() {
        let engine = ScoreEngine::default();
        // CO2 → 45, Aceton → 80, Alcohol (from MQ-2) → 30
        let s = snapshot(&[("CO2", 150.0), ("Aceton", 750.0)], &[("Alcohol", 100.0)]);

        let scores: Vec<_> = engine.gas_scores(&s).collect();
        assert_eq!(scores, vec![(Gas::Co2, 45.0), (Gas::Aceton, 80.0), (Gas::Alcohol, 30.0)]);

        // (45 + 80 + 30) / 3 = 51.67
        assert_eq!(engine.air_quality_score(&s, AggregationMode::Average), 52);
        // Minimum, not maximum
        assert_eq!(engine.air_quality_score(&s, AggregationMode::Worst), 30);
    }

    #[test]
    fn floor_is_one() {
        let engine = ScoreEngine::default();
        let clean = snapshot(&[("CO2", 0.0), ("Alcohol", 0.0)], &[]);

        assert_eq!(engine.air_quality_score(&clean, AggregationMode::Average), 1);
        assert_eq!(engine.air_quality_score(&clean, AggregationMode::Worst), 1);
    }

    #[test]
    fn ceiling_is_hundred() {
        let engine = ScoreEngine::default();
        let filthy = snapshot(&[("CO2", 10_000.0), ("Aceton", 5000.0)], &[("Alcohol", 5000.0)]);

        assert_eq!(engine.air_quality_score(&filthy, AggregationMode::Average), 100);
    }

    #[test]
    fn named_lookup() {
        let engine = ScoreEngine::default();

        assert_eq!(engine.score_gas_named("CO2", 200.0), Ok(60.0));
        assert_eq!(
            engine.score_gas_named("Butane", 1.0),
            Err(ScoreError::UnknownGas { name: "Butane".into() })
        );
    }

    #[test]
    fn custom_thresholds() {
        use crate::scoring::Threshold;

        let strict = ThresholdTable::default()
            .with_threshold(Gas::Co2, Threshold::new(10.0, 20.0, 50.0).unwrap());
        let engine = ScoreEngine::new(strict);

        assert_eq!(engine.score_gas(Gas::Co2, 100.0), 100.0);
        assert_eq!(ScoreEngine::DEFAULT.score_gas(Gas::Co2, 100.0), 30.0);
    }
}
