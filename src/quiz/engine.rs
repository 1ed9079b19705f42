use log::debug;

use crate::quiz::catalog::{TypeCode, TypeRecord, TypeTable, DEFAULT_TYPE_CODE};
use crate::quiz::chart::ChartSeries;
use crate::quiz::questions::QuestionBank;
use crate::quiz::{AnswerSet, Axis, AxisScores, Choice, QuizError};

/// Everything the result screen shows for one answer set.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub scores: AxisScores,
    pub code: TypeCode,
    pub record: TypeRecord,
    pub chart: ChartSeries,
}

/// Scores answers and resolves them to a type record. Read-only once built,
/// so one engine is shared by every session.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: QuestionBank,
    types: TypeTable,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank, types: TypeTable) -> Result<Self, QuizError> {
        if !types.contains(DEFAULT_TYPE_CODE) {
            return Err(QuizError::UnknownType(DEFAULT_TYPE_CODE.to_string()));
        }
        Ok(Self { bank, types })
    }

    pub fn standard() -> Result<Self, QuizError> {
        Self::new(QuestionBank::standard()?, TypeTable::standard())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    pub fn record_answer(
        &self,
        answers: &mut AnswerSet,
        question_id: u32,
        choice: Choice,
    ) -> Result<(), QuizError> {
        if self.bank.find(question_id).is_none() {
            return Err(QuizError::InvalidInput(format!(
                "unknown question id {}",
                question_id
            )));
        }
        answers.set(question_id, choice);
        Ok(())
    }

    pub fn compute_axis_scores(&self, answers: &AnswerSet) -> AxisScores {
        let mut scores = AxisScores::new();
        for (question_id, choice) in answers.iter() {
            if let Some(question) = self.bank.find(question_id) {
                scores.add(question.axis, choice.delta());
            }
        }
        scores
    }

    /// Builds the code in `(I, II, III, IV)` order, then retries in
    /// `(I, III, II, IV)` order, then falls back to [`DEFAULT_TYPE_CODE`].
    ///
    /// The table keys do not follow a single ordering, so both attempts are
    /// kept; collapsing them would classify some answer sets differently.
    pub fn resolve_type(&self, scores: &AxisScores) -> TypeCode {
        let letter = |axis: Axis| axis.letter(scores.get(axis));
        let (i, ii, iii, iv) = (
            letter(Axis::I),
            letter(Axis::II),
            letter(Axis::III),
            letter(Axis::IV),
        );

        let primary = TypeCode::from_letters([i, ii, iii, iv]);
        if self.types.contains(primary.as_str()) {
            return primary;
        }

        let alternate = TypeCode::from_letters([i, iii, ii, iv]);
        if self.types.contains(alternate.as_str()) {
            debug!("{} not in table, using {}", primary, alternate);
            return alternate;
        }

        debug!(
            "neither {} nor {} in table, using {}",
            primary, alternate, DEFAULT_TYPE_CODE
        );
        TypeCode::fallback()
    }

    pub fn lookup_type(&self, code: &TypeCode) -> Result<&TypeRecord, QuizError> {
        self.types
            .get(code.as_str())
            .ok_or_else(|| QuizError::UnknownType(code.to_string()))
    }

    pub fn derive_chart_series(&self, scores: &AxisScores) -> ChartSeries {
        ChartSeries::from_scores(scores)
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Result<Diagnosis, QuizError> {
        let scores = self.compute_axis_scores(answers);
        let code = self.resolve_type(&scores);
        let record = *self.lookup_type(&code)?;
        Ok(Diagnosis {
            scores,
            chart: self.derive_chart_series(&scores),
            code,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::TYPES;
    use proptest::prelude::*;

    fn engine() -> QuizEngine {
        QuizEngine::standard().unwrap()
    }

    fn answer_all(engine: &QuizEngine, choice: Choice) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for question in engine.bank().iter() {
            engine
                .record_answer(&mut answers, question.id, choice)
                .unwrap();
        }
        answers
    }

    #[test]
    fn all_a_answers_give_the_empty_showroom() {
        let engine = engine();
        let diagnosis = engine.evaluate(&answer_all(&engine, Choice::A)).unwrap();

        assert_eq!(diagnosis.scores, AxisScores::from([9, 9, 9, 8]));
        assert_eq!(diagnosis.code.as_str(), "MFSP");
        assert_eq!(diagnosis.record.title, "空白のショールーム");
        assert!(diagnosis.chart.points.iter().all(|p| p.value >= 5.0));
    }

    #[test]
    fn all_b_answers_fall_back_to_default() {
        let engine = engine();
        let answers = answer_all(&engine, Choice::B);
        let scores = engine.compute_axis_scores(&answers);

        assert_eq!(scores, AxisScores::from([-9, -9, -9, -8]));
        // CEWL and CWEL are both missing from the table.
        assert_eq!(engine.resolve_type(&scores).as_str(), DEFAULT_TYPE_CODE);
    }

    #[test]
    fn no_answers_resolve_ties_to_first_letters() {
        let engine = engine();
        let diagnosis = engine.evaluate(&AnswerSet::new()).unwrap();

        assert_eq!(diagnosis.scores, AxisScores::new());
        assert_eq!(diagnosis.code.as_str(), "MFSP");
        assert!(diagnosis.chart.points.iter().all(|p| p.value == 5.0));
    }

    #[test]
    fn primary_ordering_wins_when_present() {
        let engine = engine();
        // I-, II-, III+, IV+ => CESP, present in the table.
        let code = engine.resolve_type(&AxisScores::from([-1, -1, 1, 1]));
        assert_eq!(code.as_str(), "CESP");
    }

    #[test]
    fn alternate_ordering_used_when_primary_missing() {
        let engine = engine();
        // I+, II+, III-, IV+ => MFWP missing, MWFP present.
        let code = engine.resolve_type(&AxisScores::from([2, 1, -3, 0]));
        assert_eq!(code.as_str(), "MWFP");
        // I-, II+, III-, IV- => CFWL missing, CWFL present.
        let code = engine.resolve_type(&AxisScores::from([-2, 3, -1, -4]));
        assert_eq!(code.as_str(), "CWFL");
    }

    #[test]
    fn record_answer_rejects_unknown_question() {
        let engine = engine();
        let mut answers = AnswerSet::new();
        let result = engine.record_answer(&mut answers, 99, Choice::A);
        assert!(matches!(result, Err(QuizError::InvalidInput(_))));
        assert!(answers.is_empty());
    }

    #[test]
    fn record_answer_overwrites() {
        let engine = engine();
        let mut answers = AnswerSet::new();
        engine.record_answer(&mut answers, 1, Choice::A).unwrap();
        engine.record_answer(&mut answers, 1, Choice::B).unwrap();
        assert_eq!(engine.compute_axis_scores(&answers).get(Axis::I), -1);
    }

    #[test]
    fn engine_requires_default_type() {
        let types = TypeTable::new(TYPES.iter().filter(|r| r.code != "MFSP").copied().collect());
        let result = QuizEngine::new(QuestionBank::standard().unwrap(), types);
        assert_eq!(
            result.err(),
            Some(QuizError::UnknownType(DEFAULT_TYPE_CODE.to_string()))
        );
    }

    #[test]
    fn lookup_of_missing_code_fails() {
        let engine = engine();
        let code: TypeCode = "CEWL".parse().unwrap();
        assert!(matches!(
            engine.lookup_type(&code),
            Err(QuizError::UnknownType(_))
        ));
    }

    fn answers_strategy() -> impl Strategy<Value = Vec<(u32, bool)>> {
        proptest::collection::vec((1u32..=35, any::<bool>()), 0..60)
    }

    fn to_choice(a: bool) -> Choice {
        if a {
            Choice::A
        } else {
            Choice::B
        }
    }

    proptest! {
        #[test]
        fn scores_stay_within_axis_bounds(raw in answers_strategy()) {
            let engine = engine();
            let mut answers = AnswerSet::new();
            for (id, a) in &raw {
                engine.record_answer(&mut answers, *id, to_choice(*a)).unwrap();
            }
            let scores = engine.compute_axis_scores(&answers);
            for axis in Axis::ALL {
                let bound = engine.bank().count_on(axis) as i32;
                prop_assert!(scores.get(axis).abs() <= bound);
            }
            let code = engine.resolve_type(&scores);
            prop_assert!(engine.types().contains(code.as_str()));
            prop_assert_eq!(engine.resolve_type(&scores), code);
        }

        #[test]
        fn order_of_answers_does_not_matter(raw in answers_strategy()) {
            let engine = engine();
            // Keep the final choice per question so both orders describe the same set.
            let mut last = std::collections::BTreeMap::new();
            for (id, a) in &raw {
                last.insert(*id, *a);
            }

            let mut forward = AnswerSet::new();
            for (id, a) in last.iter() {
                engine.record_answer(&mut forward, *id, to_choice(*a)).unwrap();
            }
            let mut backward = AnswerSet::new();
            for (id, a) in last.iter().rev() {
                engine.record_answer(&mut backward, *id, to_choice(*a)).unwrap();
            }

            let scores = engine.compute_axis_scores(&forward);
            prop_assert_eq!(scores, engine.compute_axis_scores(&backward));
            prop_assert_eq!(
                engine.resolve_type(&scores),
                engine.resolve_type(&engine.compute_axis_scores(&backward))
            );
        }

        #[test]
        fn chart_tracks_tallies(tallies in proptest::array::uniform4(-9i32..=9)) {
            let engine = engine();
            let scores = AxisScores::from(tallies);
            let series = engine.derive_chart_series(&scores);
            prop_assert_eq!(series.points.len(), 5);
            prop_assert!(series.is_closed());
            for (point, tally) in series.axes().iter().zip(tallies.iter()) {
                prop_assert_eq!(point.value, 5.0 + 0.5 * *tally as f64);
            }
        }
    }
}
