use std::fmt;
use std::str::FromStr;

use crate::quiz::QuizError;

/// Returned when neither key ordering matches a record.
pub const DEFAULT_TYPE_CODE: &str = "MFSP";

/// Section headings of a long description, in display order.
pub const SECTION_HEADINGS: [&str; 4] = ["深層心理と性格", "人間関係と恋愛", "才能と仕事", "アドバイス"];

/// A four letter key into the type table, e.g. `MFSP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TypeCode(String);

impl TypeCode {
    pub fn from_letters(letters: [char; 4]) -> Self {
        Self(letters.iter().collect())
    }

    pub fn fallback() -> Self {
        Self(DEFAULT_TYPE_CODE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeCode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 4 || !s.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(QuizError::InvalidInput(format!(
                "type code must be four uppercase letters, got '{}'",
                s
            )));
        }
        Ok(Self(s.to_string()))
    }
}

/// `#rrggbb` accent color of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor(&'static str);

impl AccentColor {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// Hex digits without the leading `#`.
    pub fn digits(&self) -> &'static str {
        self.0.trim_start_matches('#')
    }

    #[cfg(test)]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.digits();
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description {
    pub overview: &'static str,
    pub personality: &'static str,
    pub relationships: &'static str,
    pub career: &'static str,
    pub advice: &'static str,
}

impl Description {
    /// Headed sections in display order, overview excluded.
    pub fn sections(&self) -> [(&'static str, &'static str); 4] {
        [
            (SECTION_HEADINGS[0], self.personality),
            (SECTION_HEADINGS[1], self.relationships),
            (SECTION_HEADINGS[2], self.career),
            (SECTION_HEADINGS[3], self.advice),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRecord {
    pub code: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: Description,
    pub accent: AccentColor,
}

pub const TYPES: [TypeRecord; 16] = [
    TypeRecord {
        code: "MFSP",
        title: "空白のショールーム",
        tagline: "埃ひとつ、アイコンひとつ許さない",
        description: Description {
            overview: "生活感という「ノイズ」を極限まで排除した空間です。机の上にはMacBookだけ、配線は壁の裏へ隠し、床には塵一つ落ちていない。あなたの部屋は、居住空間というより「思考の要塞」であり、Apple Storeのような洗練された静寂が支配しています。",
            personality: "あなたは自他ともに厳しい完璧主義者です。頭の中は常にクリアで論理的。「コントロールできないもの」を嫌うため、予測不可能な感情論や、非効率な会議には強烈なストレスを感じます。常に最適解を探し続けるストイックな求道者でもあります。",
            relationships: "「一人の時間」が何よりのエネルギー源。パートナーにも自立を求め、ベタベタした依存関係は苦手です。しかし、一度心を許した相手には、不器用ながらも深い信頼を寄せます。言葉よりも行動で愛情を示すタイプです。",
            career: "プログラマー、建築家、外科医など、緻密さと論理性が求められる分野で天才的な能力を発揮します。",
            advice: "他人にも自分と同じ「完璧」を求めがちで、周囲を息苦しくさせてしまうことがあります。「散らかっていても死なない」と自分に言い聞かせ、時にはあえてカオスを受け入れる「遊び」を持つことで、あなたの人生はより彩り豊かになります。",
        },
        accent: AccentColor::new("#2c3e50"),
    },
    TypeRecord {
        code: "MFSL",
        title: "合理的なノマド",
        tagline: "生活に必要なのは、スマホとベッドだけ",
        description: Description {
            overview: "所有することへの執着がゼロ。引っ越したてのような殺風景な部屋ですが、それは「いつでも身軽に動ける」という自由の証です。家具を買う手間すら惜しむ究極の合理主義空間で、寝袋や段ボールテーブルでも平気で暮らせる適応力があります。",
            personality: "過去や場所に縛られない自由人。物理的なモノよりも、知識や経験にお金を使います。人間関係もサッパリしており、来るもの拒まず去るもの追わず。情熱がないわけではなく、「本当に大切な1%」のために、他の99%を容赦なく切り捨てられる決断力の人です。",
            relationships: "束縛を何よりも嫌います。恋愛でも「お互いの自由」を尊重できる相手でないと長続きしません。記念日などの形式的なイベントには興味がないため、ロマンチックな演出を求められると困惑します。",
            career: "コンサルタント、フリーランス、起業家など、場所を選ばずに結果を出せる仕事が天職です。",
            advice: "「効率」を優先しすぎて、情緒や風情を無視しがち。殺風景すぎる部屋は、時にあなたの心を乾かせます。一輪の花を飾るような「無駄」を楽しむ余裕を持つと、人間的な魅力に深みが出るでしょう。",
        },
        accent: AccentColor::new("#7f8c8d"),
    },
    TypeRecord {
        code: "MESP",
        title: "孤高の美術館",
        tagline: "余白を愛するアーティスト",
        description: Description {
            overview: "ただ物が少ないのではなく、選び抜かれた「美しいもの」だけが置かれた空間です。座り心地の悪いデザイナーズチェアも、あなたにとってはアートであり、我慢してでも置く価値があります。生活の利便性よりも、美意識が最優先される聖域です。",
            personality: "高い美意識と鋭い感受性の持ち主。周囲からは「センスが良いけど少し近寄りがたい」と思われているかもしれません。妥協してレベルの低いものと付き合うくらいなら、高尚な孤独を選びます。自己表現への欲求が強く、自分自身の生き方そのものを作品だと捉えています。",
            relationships: "理想が高く、相手の見た目やセンスにもこだわりがあります。心を開くまでに時間はかかりますが、感性が共鳴する相手とは言葉を交わさずとも深く通じ合えます。",
            career: "デザイナー、アーティスト、編集者など、美意識を形にする仕事で成功します。",
            advice: "理想が高すぎて、現実とのギャップに苦しみやすい傾向があります。「完璧な美」だけでなく、「不完全な美（わびさび）」や、人間の泥臭さを愛せるようになると、精神的に楽になれるはずです。",
        },
        accent: AccentColor::new("#34495e"),
    },
    TypeRecord {
        code: "MESL",
        title: "未完のアトリエ",
        tagline: "美意識はあるが、布団からは出られない",
        description: Description {
            overview: "コンクリート打ちっ放しや無機質な空間に憧れていますが、服や雑誌が散乱しがち。しかし、その散らかり方すら計算された「ラフさ」に見えるのが不思議な才能です。オシャレなカフェのバックヤードのような、制作途中の芸術作品のような空間です。",
            personality: "理想は高いのに行動が追いつかない、愛すべき夢想家。クリエイティブな才能がありますが、締め切り直前まで動かないズボラな一面も。ルールに縛られるのを嫌い、直感で動く右脳型人間です。「ま、いっか」で許される愛嬌を持っています。",
            relationships: "感受性が豊かで惚れっぽいタイプ。ドラマチックな展開を好みますが、飽きっぽい一面も。あなたの世話を焼いてくれるしっかり者のパートナーとうまくいきます。",
            career: "企画職、ライター、ファッション関係など、自由な発想が許される環境で輝きます。",
            advice: "「やる気が出たらやる」と言って、永遠にやらないタイプ。大きな目標よりも、まずは「靴下をカゴに入れる」といった小さな習慣から始めましょう。あなたの感性は素晴らしいので、環境さえ整えば大化けします。",
        },
        accent: AccentColor::new("#95a5a6"),
    },
    TypeRecord {
        code: "MWSP",
        title: "現代の茶室",
        tagline: "整えられた呼吸、整えられた空間",
        description: Description {
            overview: "禅（Zen）の精神を体現したような部屋。物は少ないですが、冷たさはなく、木の温もりや畳の香りが漂います。毎朝の掃除や換気がルーティン化されており、空間が常に呼吸しています。静寂と清潔を愛する、精神の修行場のような場所です。",
            personality: "精神的に成熟しており、感情の起伏が穏やか。周囲からは「一緒にいると落ち着く」と言われ、相談役にされやすいタイプです。しかし、内面には確固たる芯があり、自分の聖域（時間や空間）を土足で踏み荒らされると静かに激怒します。",
            relationships: "穏やかで誠実な関係を望みます。派手なデートよりも、家で静かにお茶を飲むような時間を大切にします。嘘や裏切りを最も嫌います。",
            career: "カウンセラー、教師、職人など、人と向き合ったり一つの道を極める仕事に向いています。",
            advice: "「正しさ」や「丁寧さ」に囚われすぎて、自分を律しすぎてしまうことがあります。たまにはカップ麺を食べたり、掃除をサボったりする「ダラけ」の日を作って、心のガス抜きをしてください。",
        },
        accent: AccentColor::new("#d35400"),
    },
    TypeRecord {
        code: "MWSL",
        title: "陽だまりのナマケモノ",
        tagline: "床でゴロゴロするのが最高",
        description: Description {
            overview: "背の高い家具を置かず、視線を低くしたロースタイル。Yogiboやラグマットの上で、一日中動かずに過ごせます。散らかっているわけではないけれど、どこか「隙」のある、世界で一番居心地の良い空間です。窓からの光を何よりも大切にします。",
            personality: "「なんとかなるさ」が口癖の平和主義者。野心はあまりなく、日々の小さな幸せ（美味しいコーヒーや昼寝）を何よりも大切にする、幸福度の高い人です。競争社会には向いていませんが、癒やしの才能はずば抜けています。",
            relationships: "癒やし系でモテますが、自分からガツガツ行くことはありません。パートナーには、一緒にダラダラできる「居心地の良さ」を最優先で求めます。",
            career: "福祉関係、セラピスト、あるいはのんびりとしたカフェの店員など、競争のない環境で輝きます。",
            advice: "現状維持バイアスが強く、新しい挑戦を避ける傾向があります。居心地の良い部屋に引きこもりすぎず、たまには外の世界の刺激を取り入れることで、あなたの感性はさらに磨かれます。",
        },
        accent: AccentColor::new("#f39c12"),
    },
    TypeRecord {
        code: "MWFP",
        title: "無印良品のカタログ",
        tagline: "収納ケースのサイズが揃わないと発狂する",
        description: Description {
            overview: "ラベリング魔。すべての物に「住所」が決まっていないと気が済みません。機能美とナチュラルさが融合しており、Instagramにそのまま投稿できるレベルで整っています。「整っていること」が精神安定剤になっているタイプです。",
            personality: "真面目で責任感が強い優等生タイプ（ISTJに近い）。旅行の計画などは分単位で立てるのが得意で、組織の管理者に向いています。混沌を嫌い、ルールやマニュアルを作ることで安心感を得ます。",
            relationships: "約束や時間は絶対に守る誠実な人。パートナーにも同じ誠実さを求めますが、ルーズな相手を放っておけずに世話を焼いてしまう一面も。",
            career: "事務、経理、公務員、プロジェクトマネージャーなど、管理能力が活きる仕事が天職です。",
            advice: "予定外のトラブルに弱く、想定外のことが起きるとパニックになりがち。人生は整理整頓できないことだらけです。「まあいいか」という魔法の言葉を覚え、曖昧さを許容する訓練をしましょう。",
        },
        accent: AccentColor::new("#e67e22"),
    },
    TypeRecord {
        code: "MWFL",
        title: "サステナブルな実家感",
        tagline: "古き良き温もりと、少しの生活感",
        description: Description {
            overview: "流行りの家具よりも、長く使っている愛用品を大切にする部屋。少し散らかっていても、それが生活の「味」になっています。友人が遊びに来た時、「なんか落ち着くわ〜」と言って一番長居してしまうのは、間違いなくこのタイプの部屋です。",
            personality: "情に厚く、人との縁を大切にします。過去の思い出や人間関係をなかなか捨てられないウェットな性格。新しいものに飛びつくよりも、馴染みの店や古い友人を大切にする、義理人情の人です。",
            relationships: "一途で家庭的なタイプ。付き合いが長く、結婚向きです。相手のダメなところも含めて受け入れる包容力があります。",
            career: "教育、保育、人事、接客業など、人と深く関わりサポートする仕事に向いています。",
            advice: "過去への執着が強く、部屋が思い出の品で溢れかえり、「捨てられない屋敷」になる予備軍です。思い出は心の中にあります。過去の遺産ではなく、未来の自分のためのスペースを空ける勇気を持って。",
        },
        accent: AccentColor::new("#d35400"),
    },
    TypeRecord {
        code: "CFSP",
        title: "司令官のコックピット",
        tagline: "全ての操作を、椅子から動かずに",
        description: Description {
            overview: "マルチモニター、エルゴノミクスチェア、そしてLEDテープライト。デスク周りの構築美に命をかけています。一歩も動かずに全ての作業が完結する、効率とロマンの結晶のようなサイバー空間です。配線の美しさは芸術の域です。",
            personality: "論理的思考が得意な理系脳。ガジェットのスペック比較や、作業の自動化が大好き。感情論よりもデータや事実を重視するため、少し冷たいと思われがちですが、内には少年のように熱い探究心を秘めています。",
            relationships: "ベタベタした関係よりも、お互いにリスペクトし合える対等な関係を望みます。趣味やゲームを一緒に楽しめる相手なら最高です。",
            career: "エンジニア、データサイエンティスト、金融トレーダーなど、分析力が活きる仕事で活躍します。",
            advice: "機能性を追い求めるあまり、部屋から「情緒」や「季節感」が失われがち。たまにはデジタルデバイスをすべて切り、アナログな自然に触れる時間を作らないと、脳がショートしてしまうかもしれません。",
        },
        accent: AccentColor::new("#2980b9"),
    },
    TypeRecord {
        code: "CFSL",
        title: "マッドサイエンティストのラボ",
        tagline: "配線の森に迷い込む",
        description: Description {
            overview: "機能重視で機材を増やし続けた結果、カオスと化した部屋。足の踏み場はありませんが、本人は「どこに何があるか」を全て把握している「秩序ある混沌」です。未開封の段ボールと絡まったケーブルの山は、進化の過程にすぎません。",
            personality: "一点集中の天才肌。興味があることには寝食を忘れて没頭しますが、興味がないこと（片付け、手続き、社交）は徹底的に後回しにする極端な性格です。常識に囚われないイノベーターの資質があります。",
            relationships: "自分の世界を理解してくれる相手でないと続きません。「変人」と言われることを褒め言葉だと思っています。知的な会話ができる相手を求めます。",
            career: "研究職、発明家、プログラマーなど、専門性を極める仕事が向いています。",
            advice: "生活環境の悪化が健康に直結するタイプです。換気不足やホコリに注意。「ルンバが走れる床面積」だけは確保するように心がけると、運気が好転するでしょう。",
        },
        accent: AccentColor::new("#3498db"),
    },
    TypeRecord {
        code: "CESP",
        title: "ストリート・セレクトショップ",
        tagline: "スニーカーは履くものではなく飾るもの",
        description: Description {
            overview: "収集癖がありますが、ただ集めるのではなく「見せる（Display）」ことに命をかけています。スニーカー、フィギュア、レコードなどが、ショップのように美しく陳列された原宿スタイルの部屋。ガラスケースはあなたの聖櫃です。",
            personality: "自己プロデュース能力が高い自信家。トレンドに敏感で、人からどう見られるかを常に意識しています。SNSのフォロワー数や「いいね」の数がモチベーションになりやすいタイプ。承認欲求を健全なエネルギーに変えられる人です。",
            relationships: "華やかで社交的。美男美女カップルに憧れる傾向があります。お互いのファッションや趣味を高め合える、刺激的な関係を望みます。",
            career: "ファッション業界、広報、インフルエンサー、営業職など、人を惹きつける仕事で成功します。",
            advice: "「見栄」のために散財しがち。本当に自分が好きなものよりも、「自慢できるもの」を買っていませんか？ 他人の評価軸ではなく、自分の魂が震えるものだけを選ぶようになると、本物のカリスマになれます。",
        },
        accent: AccentColor::new("#8e44ad"),
    },
    TypeRecord {
        code: "CESL",
        title: "ネオン・ドンキホーテ",
        tagline: "カワイイとカオスは紙一重",
        description: Description {
            overview: "推しグッズ、ぬいぐるみ、極彩色のポスター。色彩の暴力のような空間ですが、そこにはあなたの「好き」が120%詰まっています。天井から何かがぶら下がっている、ヴィレッジヴァンガード的空間。ここはあなたのエネルギーチャージ基地です。",
            personality: "エネルギーに溢れた行動派。好奇心旺盛で、欲しいものは我慢できません（ドーパミン中毒気味）。金遣いは荒いですが、人生を全力で楽しんでいるため、不思議と憎めない愛されキャラです。退屈が一番の敵。",
            relationships: "情熱的で押しが強いタイプ。好きになったら一直線です。一緒にライブに行ったりイベントを楽しめる、ノリの良いパートナーとうまくいきます。",
            career: "イベント企画、エンタメ業界、販売員など、変化と刺激のある仕事が向いています。",
            advice: "刺激がないと死んでしまうマグロのような人。部屋の情報量が多すぎて、脳が休まっていない可能性があります。寝室だけは物を減らして真っ暗にするなど、オンオフの切り替えを作ることが長く走り続ける鍵です。",
        },
        accent: AccentColor::new("#9b59b6"),
    },
    TypeRecord {
        code: "CWSP",
        title: "英国紳士の書斎",
        tagline: "知と歴史を整然と並べる",
        description: Description {
            overview: "壁一面の本棚、アンティークの照明、革張りのソファ。重厚感のある空間です。物は多いですが、すべてが知的探究心に基づいて分類・整理されており、図書館のような静けさと知性が漂います。歴史あるものへの敬意に満ちた部屋です。",
            personality: "博識で落ち着いたインテリタイプ。流行には流されず、自分の価値観をしっかり持っています。やや頑固で、自分のルールを曲げることを嫌う保守的な一面も。一人の時間を愛し、内省することで成長します。",
            relationships: "知的で落ち着いた会話を好みます。チャラチャラした関係は苦手。尊敬できる相手と、時間をかけて信頼関係を築いていく大人の恋愛をします。",
            career: "研究者、大学教授、作家、弁護士など、知識と論理を武器にする仕事が適任です。",
            advice: "知識や理屈が先行して、頭でっかちになりがち。時には本を閉じて、街に出て、理屈では説明できない「生身の体験」を味わってください。知識が経験に変わった時、あなたの深みは増します。",
        },
        accent: AccentColor::new("#5d4037"),
    },
    TypeRecord {
        code: "CWSL",
        title: "ジブリの魔女の隠れ家",
        tagline: "植物と古道具に埋もれて暮らす",
        description: Description {
            overview: "吊るされたドライフラワー、拾ってきた流木、用途不明の瓶。雑然としていますが、物語の中に迷い込んだような魔法の空間です。プラスチック製品を嫌い、経年変化した「味のあるもの」に囲まれています。植物と会話ができるタイプです。",
            personality: "直感やインスピレーションを大切にする感覚派（INFPに近い）。スピリチュアルなことや、目に見えない世界を大切にします。社会のルールや効率性よりも、自分の内なる声や心地よさを優先して生きる自由人です。",
            relationships: "ロマンチストで、運命的な出会いを信じています。相手の条件よりも「波長が合うか」が全て。傷つきやすい繊細な心を持っています。",
            career: "クリエイター、占い師、花屋、カウンセラーなど、感性を活かして人を癒やす仕事に向いています。",
            advice: "現実逃避しやすく、社会生活に疲れを感じやすいかも。この部屋はあなたのシェルターですが、引きこもりすぎると社会との接点を失います。あなたの優しい世界観を、創作活動などで外に発信してみましょう。",
        },
        accent: AccentColor::new("#4e342e"),
    },
    TypeRecord {
        code: "CWFP",
        title: "プロの厨房",
        tagline: "道具への愛が、料理の味を変える",
        description: Description {
            overview: "リビングよりもキッチンやダイニングが主役。スパイスの瓶が整列し、こだわりの調理器具が美しく吊るされています。「生活＝作ること」である、料理研究家のようなスタジオ空間です。道具への投資は惜しみません。",
            personality: "人に何かをしてあげるのが好きなギバー（与える人）。完璧主義でこだわりが強く、道具や手順にはうるさい職人気質ですが、最終的には自分が作ったもので周りの人が笑顔になることに、無上の喜びを感じます。",
            relationships: "世話好きで、パートナーの胃袋を掴むのが得意。しかし、自分のこだわりを相手にも押し付けてしまうと喧嘩の原因に。感謝の言葉を求めすぎる傾向があります。",
            career: "飲食関係、シェフ、パティシエ、あるいはチームを育成するマネージャー職に向いています。",
            advice: "「尽くしすぎ」に注意。他人の世話を焼くことに夢中で、自分のケアがおろそかになっていませんか？ 最高のパフォーマンスを発揮するためには、まずシェフ（あなた自身）が満たされている必要があります。",
        },
        accent: AccentColor::new("#6d4c41"),
    },
    TypeRecord {
        code: "CWFL",
        title: "昭和レトロな下宿",
        tagline: "コタツの上には常にミカン",
        description: Description {
            overview: "捨てられない性格。「いつか使うかも」で溢れていますが、それが強烈な安心感を生んでいます。冬はコタツから出られない、実家のような強力な引力を持った部屋です。色も柄もバラバラなのに、なぜか落ち着く不思議な空間。",
            personality: "変化を嫌い、安定を好む保守的なタイプ。過去の思い出を大切にしすぎて、新しい一歩を踏み出すのが苦手かも。でも、あなたがそこにいるだけで周りはホッとする、天然のヒーラー（癒やし手）です。",
            relationships: "駆け引きは苦手で、安心感を求めます。ドキドキするような恋よりも、一緒にテレビを見て笑い合えるような、家族のような関係を築きます。",
            career: "地方公務員、総務、介護職、農業など、地域や組織に根ざしてコツコツ働く仕事が向いています。",
            advice: "変化を恐れすぎて、チャンスを逃している可能性があります。部屋の空気が淀まないように、毎日窓を開けて風を通すように、人生にも「新しい風（新しい趣味や出会い）」を意識的に取り入れてみてください。",
        },
        accent: AccentColor::new("#795548"),
    },
];

#[derive(Debug, Clone)]
pub struct TypeTable {
    records: Vec<TypeRecord>,
}

impl TypeTable {
    pub fn standard() -> Self {
        Self::new(TYPES.to_vec())
    }

    pub fn new(records: Vec<TypeRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, code: &str) -> Option<&TypeRecord> {
        self.records.iter().find(|r| r.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_sixteen_unique_codes() {
        let table = TypeTable::standard();
        assert_eq!(table.len(), 16);
        let mut codes: Vec<_> = TYPES.iter().map(|r| r.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 16);
        assert!(table.contains(DEFAULT_TYPE_CODE));
    }

    #[test]
    fn every_record_is_well_formed() {
        for record in TYPES.iter() {
            assert!(record.code.parse::<TypeCode>().is_ok(), "{}", record.code);
            assert!(record.accent.rgb().is_some(), "{}", record.code);
            assert!(!record.title.is_empty());
            assert!(!record.description.advice.is_empty());
            assert!(!record.description.overview.contains('<'), "{}", record.code);
            for (_, body) in record.description.sections() {
                assert!(!body.contains('<'), "{}", record.code);
            }
        }
    }

    #[test]
    fn accent_color_parses_channels() {
        let color = AccentColor::new("#2c3e50");
        assert_eq!(color.digits(), "2c3e50");
        assert_eq!(color.rgb(), Some((44, 62, 80)));
        assert_eq!(AccentColor::new("#abc").rgb(), None);
    }

    #[test]
    fn sections_follow_heading_order() {
        let record = TypeTable::standard().get("MFSP").copied().unwrap();
        let headings: Vec<_> = record.description.sections().iter().map(|(h, _)| *h).collect();
        assert_eq!(headings, SECTION_HEADINGS.to_vec());
        assert_eq!(record.description.sections()[3].1, record.description.advice);
    }

    #[test]
    fn type_code_parsing() {
        let code: TypeCode = "CWFL".parse().unwrap();
        assert_eq!(code.as_str(), "CWFL");
        assert_eq!(TypeCode::from_letters(['C', 'W', 'F', 'L']), code);
        assert!("cwfl".parse::<TypeCode>().is_err());
        assert!("CWF".parse::<TypeCode>().is_err());
    }
}
