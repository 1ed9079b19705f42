use crate::quiz::{Axis, Options, Question, QuizError};

/// The 35 questions in presentation order.
pub const QUESTIONS: [Question; 35] = [
    Question {
        id: 1,
        text: "新しいものを買うときの基準は？",
        axis: Axis::I,
        options: Options {
            a: "何かを捨てないと買わない",
            b: "気に入ったら即買い",
        },
    },
    Question {
        id: 2,
        text: "旅先でのお土産は？",
        axis: Axis::I,
        options: Options {
            a: "消えもの（お菓子など）のみ",
            b: "記念になる雑貨・置物を買う",
        },
    },
    Question {
        id: 3,
        text: "理想の棚の状態は？",
        axis: Axis::I,
        options: Options {
            a: "7割は空いている「余白」",
            b: "好きな物で「ぎっしり」",
        },
    },
    Question {
        id: 4,
        text: "「初回限定版」などの言葉に...",
        axis: Axis::I,
        options: Options {
            a: "興味がない",
            b: "弱い・つい買ってしまう",
        },
    },
    Question {
        id: 5,
        text: "1年以上使っていないモノは？",
        axis: Axis::I,
        options: Options {
            a: "迷わず捨てる",
            b: "いつか使うかもと取っておく",
        },
    },
    Question {
        id: 6,
        text: "日用品のストックは？",
        axis: Axis::I,
        options: Options {
            a: "無くなりそうになったら買う",
            b: "安売りで大量に買い込む",
        },
    },
    Question {
        id: 7,
        text: "壁の装飾（ポスター等）は？",
        axis: Axis::I,
        options: Options {
            a: "あまり掛けない・シンプルに",
            b: "好きなもので埋め尽くしたい",
        },
    },
    Question {
        id: 8,
        text: "収納家具についてどう思う？",
        axis: Axis::I,
        options: Options {
            a: "収納家具自体を減らしたい",
            b: "収納を増やして整理したい",
        },
    },
    Question {
        id: 9,
        text: "作業後の机の上は？",
        axis: Axis::I,
        options: Options {
            a: "何もない状態にする",
            b: "お気に入りの小物は残す",
        },
    },
    Question {
        id: 10,
        text: "椅子の選び方は？",
        axis: Axis::II,
        options: Options {
            a: "長時間座れる機能性重視",
            b: "部屋に合うデザイン重視",
        },
    },
    Question {
        id: 11,
        text: "部屋の照明の好みは？",
        axis: Axis::II,
        options: Options {
            a: "全体が見える明るい白",
            b: "影を楽しむ薄暗い暖色",
        },
    },
    Question {
        id: 12,
        text: "家電を選ぶ基準は？",
        axis: Axis::II,
        options: Options {
            a: "最新スペック・効率",
            b: "見た目の可愛さ・愛着",
        },
    },
    Question {
        id: 13,
        text: "用途のわからない置物は？",
        axis: Axis::II,
        options: Options {
            a: "掃除の邪魔だから不要",
            b: "見て幸せなら必要不可欠",
        },
    },
    Question {
        id: 14,
        text: "部屋の香りについて",
        axis: Axis::II,
        options: Options {
            a: "無臭・消臭を徹底",
            b: "お香やアロマを楽しみたい",
        },
    },
    Question {
        id: 15,
        text: "家具の配置で優先するのは？",
        axis: Axis::II,
        options: Options {
            a: "動線の良さ・効率",
            b: "部屋に入った時の見栄え",
        },
    },
    Question {
        id: 16,
        text: "ゴミ箱はどこに置く？",
        axis: Axis::II,
        options: Options {
            a: "手が届く便利な場所",
            b: "見えないように隠す",
        },
    },
    Question {
        id: 17,
        text: "時計を置くなら？",
        axis: Axis::II,
        options: Options {
            a: "正確なデジタル時計",
            b: "雰囲気のあるアナログ時計",
        },
    },
    Question {
        id: 18,
        text: "配線コードの扱いは？",
        axis: Axis::II,
        options: Options {
            a: "使いやすければ見えててOK",
            b: "徹底的に隠したい",
        },
    },
    Question {
        id: 19,
        text: "惹かれる素材感は？",
        axis: Axis::III,
        options: Options {
            a: "ガラス・金属・モノトーン",
            b: "木材・布・アースカラー",
        },
    },
    Question {
        id: 20,
        text: "落ち着くカフェは？",
        axis: Axis::III,
        options: Options {
            a: "無機質なコーヒースタンド",
            b: "木の温もりのある古民家風",
        },
    },
    Question {
        id: 21,
        text: "好きな色のトーンは？",
        axis: Axis::III,
        options: Options {
            a: "白・黒・グレー・寒色",
            b: "ベージュ・茶・緑・暖色",
        },
    },
    Question {
        id: 22,
        text: "植物(グリーン)について",
        axis: Axis::III,
        options: Options {
            a: "虫が嫌なので置かない",
            b: "ジャングルのようにしたい",
        },
    },
    Question {
        id: 23,
        text: "カーテンの好みは？",
        axis: Axis::III,
        options: Options {
            a: "ブラインドで直線的に",
            b: "布のドレープで柔らかく",
        },
    },
    Question {
        id: 24,
        text: "好きな柄は？",
        axis: Axis::III,
        options: Options {
            a: "無地・ストライプ・幾何学",
            b: "花柄・チェック・手書き風",
        },
    },
    Question {
        id: 25,
        text: "PC周辺機器のデザインは？",
        axis: Axis::III,
        options: Options {
            a: "メカメカしいのが好き",
            b: "機械っぽさを隠したい",
        },
    },
    Question {
        id: 26,
        text: "ラグ・カーペットは？",
        axis: Axis::III,
        options: Options {
            a: "敷かない・毛足が短い",
            b: "ふわふわの手触りがいい",
        },
    },
    Question {
        id: 27,
        text: "理想の休日の過ごし方は？",
        axis: Axis::III,
        options: Options {
            a: "都心のホテルラウンジ",
            b: "森の中のコテージ・キャンプ",
        },
    },
    Question {
        id: 28,
        text: "帰宅後のカバンや上着は？",
        axis: Axis::IV,
        options: Options {
            a: "必ず定位置に戻す",
            b: "ソファや床に置きがち",
        },
    },
    Question {
        id: 29,
        text: "リモコンの場所は？",
        axis: Axis::IV,
        options: Options {
            a: "位置がミリ単位で決まってる",
            b: "「あれ？」と探すことがある",
        },
    },
    Question {
        id: 30,
        text: "来客時の対応は？",
        axis: Axis::IV,
        options: Options {
            a: "常に綺麗だから掃除不要",
            b: "直前に慌てて片付ける",
        },
    },
    Question {
        id: 31,
        text: "本や雑誌の並べ方は？",
        axis: Axis::IV,
        options: Options {
            a: "高さやサイズ順に揃える",
            b: "積み上がっていても平気",
        },
    },
    Question {
        id: 32,
        text: "引き出しの中身は？",
        axis: Axis::IV,
        options: Options {
            a: "仕切りを使って完璧に",
            b: "とりあえず入ればOK",
        },
    },
    Question {
        id: 33,
        text: "掃除の頻度は？",
        axis: Axis::IV,
        options: Options {
            a: "毎日少しずつ/ロボット掃除機",
            b: "休日にまとめてやる",
        },
    },
    Question {
        id: 34,
        text: "朝起きたらベッドは？",
        axis: Axis::IV,
        options: Options {
            a: "必ず綺麗に整える",
            b: "夜寝るからそのままでいい",
        },
    },
    Question {
        id: 35,
        text: "床に髪の毛が落ちていたら？",
        axis: Axis::IV,
        options: Options {
            a: "すぐ拾わないと気が済まない",
            b: "あまり気にならない",
        },
    },
];

/// Ordered, validated question bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The built-in bank, checked the same way as any other.
    pub fn standard() -> Result<Self, QuizError> {
        Self::new(QUESTIONS.to_vec())
    }

    /// Builds a bank, rejecting duplicate ids, an empty bank and axes without questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidInput("question bank is empty".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(QuizError::InvalidInput(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
        }

        for axis in Axis::ALL {
            if !questions.iter().any(|q| q.axis == axis) {
                return Err(QuizError::InvalidInput(format!(
                    "axis {} has no questions",
                    axis
                )));
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    /// Question at a presentation position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[cfg(test)]
    pub fn count_on(&self, axis: Axis) -> usize {
        self.questions.iter().filter(|q| q.axis == axis).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, axis: Axis) -> Question {
        Question {
            id,
            text: "?",
            axis,
            options: Options { a: "a", b: "b" },
        }
    }

    #[test]
    fn standard_bank_passes_validation() {
        let bank = QuestionBank::standard().unwrap();
        assert_eq!(bank.len(), 35);
        assert_eq!(bank.count_on(Axis::I), 9);
        assert_eq!(bank.count_on(Axis::II), 9);
        assert_eq!(bank.count_on(Axis::III), 9);
        assert_eq!(bank.count_on(Axis::IV), 8);
    }

    #[test]
    fn ids_follow_presentation_order() {
        let bank = QuestionBank::standard().unwrap();
        for (index, q) in bank.iter().enumerate() {
            assert_eq!(q.id as usize, index + 1);
        }
        assert_eq!(bank.find(19).map(|q| q.axis), Some(Axis::III));
        assert!(bank.find(36).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let questions = vec![
            question(1, Axis::I),
            question(2, Axis::II),
            question(2, Axis::III),
            question(4, Axis::IV),
        ];
        assert!(matches!(
            QuestionBank::new(questions),
            Err(QuizError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_axis_without_questions() {
        let questions = vec![
            question(1, Axis::I),
            question(2, Axis::II),
            question(3, Axis::III),
        ];
        assert!(QuestionBank::new(questions).is_err());
        assert!(QuestionBank::new(Vec::new()).is_err());
    }
}
