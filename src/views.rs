//! Telegram renderings of the read-only quiz views. Messages are sent with
//! HTML parse mode, so every piece of content goes through `escape`.

use teloxide::utils::html::escape;

use crate::quiz::chart::{ChartSeries, RADIAL_RANGE};
use crate::quiz::engine::Diagnosis;
use crate::quiz::session::{HistoryEntry, QuestionView};

pub const HOME_TEXT: &str = "<b>あなたの「居場所」の正体、暴きます。</b>\n\n\
部屋は心を映す鏡です。\n\
たった3分の質問に答えるだけで、あなたの隠された<b>「部屋の種族」</b>を判定します。\n\n\
⏱ 所要時間は3分\n\
🧠 4つの軸から、あなたの生活スタイルを解析\n\
🏠 全16タイプ、ミニマリストからコレクターまで\n\n\
✨ 登録不要 / 無料で診断できます";

pub const ANALYZING_TEXT: &str = "分析中...";
pub const EMPTY_HISTORY_TEXT: &str = "まだ履歴がありません";

const PROGRESS_CELLS: usize = 10;
const BAR_CELLS: usize = 10;

fn progress_bar(progress: f64) -> String {
    let filled = ((progress * PROGRESS_CELLS as f64).round() as usize).min(PROGRESS_CELLS);
    format!("{}{}", "▰".repeat(filled), "▱".repeat(PROGRESS_CELLS - filled))
}

pub fn question_text(view: &QuestionView) -> String {
    format!(
        "<b>QUESTION {} / {}</b>\n{}\n\n{}",
        view.number,
        view.total,
        progress_bar(view.progress),
        escape(view.question.text)
    )
}

pub fn result_text(diagnosis: &Diagnosis) -> String {
    let record = &diagnosis.record;
    let mut text = format!(
        "DIAGNOSIS RESULT\n<b>{}：{}</b>\n\n<i>{}</i>\n\n{}",
        escape(diagnosis.code.as_str()),
        escape(record.title),
        escape(record.tagline),
        escape(record.description.overview)
    );
    for (heading, body) in record.description.sections() {
        text.push_str(&format!("\n\n<b>{}</b>\n{}", escape(heading), escape(body)));
    }
    text
}

pub fn result_caption(diagnosis: &Diagnosis) -> String {
    format!(
        "<b>{}：{}</b>",
        escape(diagnosis.code.as_str()),
        escape(diagnosis.record.title)
    )
}

/// Text stand-in for the radar chart. Bars are cut at the radial range;
/// the printed value is the real one.
pub fn chart_text(series: &ChartSeries) -> String {
    let (min, max) = RADIAL_RANGE;
    let mut text = String::from("<b>📊 部屋の成分表</b>");
    for point in series.axes() {
        let share = ((point.value - min) / (max - min)).clamp(0.0, 1.0);
        let filled = (share * BAR_CELLS as f64).round() as usize;
        text.push_str(&format!(
            "\n{} {}{} {:.1}",
            escape(point.label),
            "█".repeat(filled),
            "░".repeat(BAR_CELLS - filled),
            point.value
        ));
    }
    text
}

pub fn history_text(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return format!("<b>HISTORY</b>\n\n{}", EMPTY_HISTORY_TEXT);
    }
    let entries = history
        .iter()
        .map(|entry| {
            format!(
                "<i>{}</i>\n<b>{}</b> #{}",
                entry.display_time(),
                escape(&entry.title),
                escape(entry.code.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("<b>HISTORY</b>\n\n{}", entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::TypeCode;
    use crate::quiz::engine::QuizEngine;
    use crate::quiz::session::Session;
    use crate::quiz::{AnswerSet, AxisScores, Choice};
    use chrono::{Local, TimeZone};

    #[test]
    fn question_shows_position_and_text() {
        let engine = QuizEngine::standard().unwrap();
        let mut session = Session::default();
        session.start().unwrap();

        let view = session.question_view(engine.bank()).unwrap();
        let text = question_text(&view);
        assert!(text.starts_with("<b>QUESTION 1 / 35</b>"));
        assert!(text.contains(view.question.text));

        for _ in 0..34 {
            session.record(&engine, Choice::A).unwrap();
        }
        let view = session.question_view(engine.bank()).unwrap();
        let text = question_text(&view);
        assert!(text.starts_with("<b>QUESTION 35 / 35</b>"));
        assert!(text.contains("▰▰▰▰▰▰▰▰▰▰"));
    }

    #[test]
    fn label_and_bar_come_from_the_same_view() {
        let engine = QuizEngine::standard().unwrap();
        let view = QuestionView {
            question: engine.bank().get(0).unwrap(),
            number: 5,
            total: 10,
            progress: 0.5,
        };
        let text = question_text(&view);
        assert!(text.starts_with("<b>QUESTION 5 / 10</b>\n▰▰▰▰▰▱▱▱▱▱\n"));
    }

    #[test]
    fn result_lists_every_section() {
        let engine = QuizEngine::standard().unwrap();
        let diagnosis = engine.evaluate(&AnswerSet::new()).unwrap();
        let text = result_text(&diagnosis);
        assert!(text.contains("MFSP：空白のショールーム"));
        for (heading, _) in diagnosis.record.description.sections() {
            assert!(text.contains(heading));
        }
    }

    #[test]
    fn chart_has_a_line_per_axis() {
        let series = ChartSeries::from_scores(&AxisScores::from([9, -9, 0, 12]));
        let text = chart_text(&series);
        let lines: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("██████████ 9.5"));
        assert!(lines[1].ends_with("█░░░░░░░░░ 0.5"));
        assert!(lines[3].ends_with("██████████ 11.0"));
    }

    #[test]
    fn history_lists_entries_in_order() {
        assert!(history_text(&[]).contains(EMPTY_HISTORY_TEXT));

        let at = |minute| Local.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap();
        let history = vec![
            HistoryEntry {
                run: 2,
                timestamp: at(30),
                code: "CESL".parse::<TypeCode>().unwrap(),
                title: "ネオン・ドンキホーテ".to_string(),
            },
            HistoryEntry {
                run: 1,
                timestamp: at(5),
                code: TypeCode::fallback(),
                title: "空白のショールーム".to_string(),
            },
        ];
        let text = history_text(&history);
        let newest = text.find("2024/05/01 12:30").unwrap();
        let oldest = text.find("2024/05/01 12:05").unwrap();
        assert!(newest < oldest);
        assert!(text.contains("#CESL"));
    }
}
