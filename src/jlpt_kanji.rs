use std::collections::HashSet;

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::utility::str::is_kanji;

// JLPT の級ごとに学習済みとみなす漢字
// 公式の配当漢字表は公開されていないため，一般に流通している目安の表に従う
const N5_KANJI: &str = "人一日大年出本中子見国上分生行二間時気十女三前入小後長下学月何来話山高今書五名金男外四先川東聞語九食八水天木六万白七円電父北車母半百土西読千校右南左友火毎雨休午";
const N4_KANJI: &str = "言手自者事思会家的方地目場代私立物田体動社知理同心発作新世度明力意用主通文屋業持道身不口多野考開教近以問正真味界無少海切重集員公画死安親強使朝題仕京足品着別音元特風夜空有起運料楽色帰歩悪広店町住売待古医去台合回図堂声夏夕太好妹姉始字室寒工市建引弟弱急所旅族早映春昼暑暗曜服村林森歌止民池注洋洗漢牛犬産病県短研秋究答紙終習肉英茶菜薬計試説貸質赤走転軽送進遠都院買可黒花青館験写飲銀兄週鳥魚借飯駅冬勉";
const N3_KANJI: &str = "政議連対部内相定選米実関決全表戦経最現調化当約首法性要制治務成期取和機平加受続記初指権支点報済活原共得解交資予向際勝面告反判認参利組信在件側任求次昨論官増係感情投示変打直両式確果容必演歳争談能位置流格疑過局放常状球職与供役構割費付由難優夫収断石違消神番規術備宅害配警育席訪乗残想念助労例然限追商葉伝働形景落退頭負渡失差末守若種美命福蔵量望雑押客橋曲苦具君血険呼互御幸港罪皿札殺散算師歯耳倒到怒悲喜笑泣怖忘覚替戻返折寝疲痛眠遊泳遅速晩越逃迷寄階段窓壁庭戸門袋箱枚冊杯結婚恋愛束刻宿絡慣閉完功敗非願頼島岸波湖谷坂岩星雪光熱温冷捨拾届招込申払比似存深厚薄細狭丸欠低易簡単危静忙暇途隣横裏央妻彼祖様士値給歴史将未昔久犯察降登絶毛汚吹鳴吸酒絵泊倍億皆船路角達便号緑咲晴曇馬虫油辞候腹背荷";
const N2_KANJI: &str = "党協総区領設保改第派府査委軍団革勢減再税営防補境導副輸述線農州武象域額欧担準賞造被技復移個課脳極含織閣省庁署貿株価販企雇析較基標致統維態況環染災震救療看護承否批評賛鋭濃浅鈍硬柔軟厳激詳幅恐驚換鉄綿布板泥灰煙炭塩糖粉砂胸骨肩腰靴僕息娘孫毒郵封筒旧翌更郊街丁層宮寺仏城塔築壊破修整掃除磨焼煮超抜刺触振伸縮延締就応援陸湾泉枝幹根雷湿凍氷羊猫囲張努圧均率兆永乾涼暖純複紀兵髪踊滞昇辺燃祈祝録賃貯預床柱庫依丈偉机棚瓶缶皮絹針糸編管処訓練奏拍悩恥憎贈梅桜松竹豆麦畑卵乳罰律憲則捕拝宗博銅宝貴印刷版詩劇双枯濯湯涙汗";

// 上位の級の集合は下位の級の漢字を含む（N4 の集合は N5 の漢字を含む，など）
static N5_SET: Lazy<HashSet<char>> = Lazy::new(|| N5_KANJI.chars().collect());
static N4_SET: Lazy<HashSet<char>> =
    Lazy::new(|| N4_KANJI.chars().chain(N5_SET.iter().copied()).collect());
static N3_SET: Lazy<HashSet<char>> =
    Lazy::new(|| N3_KANJI.chars().chain(N4_SET.iter().copied()).collect());
static N2_SET: Lazy<HashSet<char>> =
    Lazy::new(|| N2_KANJI.chars().chain(N3_SET.iter().copied()).collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KanjiLevel {
    N5,
    N4,
    N3,
    N2,
    N1, // 全ての漢字を学習済みとみなす
}

impl KanjiLevel {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "N5" => Ok(Self::N5),
            "N4" => Ok(Self::N4),
            "N3" => Ok(Self::N3),
            "N2" => Ok(Self::N2),
            "N1" => Ok(Self::N1),
            name => bail!("Unknown kanji level: {}", name),
        }
    }

    // N1 は表を持たない（全ての漢字を学習済みとして扱う）
    fn known_kanji(&self) -> Option<&'static HashSet<char>> {
        match self {
            Self::N5 => Some(&N5_SET),
            Self::N4 => Some(&N4_SET),
            Self::N3 => Some(&N3_SET),
            Self::N2 => Some(&N2_SET),
            Self::N1 => None,
        }
    }
}

// 語に含まれる漢字が全て学習済みかどうか
// 級の指定がなければ常に false（どの漢字も学習済みとしない）
// 漢字以外の文字は判定に関与しない（漢字を含まない語は真）
pub fn is_all_known_kanji(word: &str, level: Option<KanjiLevel>) -> bool {
    let level = match level {
        Some(level) => level,
        None => return false,
    };

    match level.known_kanji() {
        Some(known) => word
            .chars()
            .filter(|c| is_kanji(*c))
            .all(|c| known.contains(&c)),
        None => true,
    }
}
