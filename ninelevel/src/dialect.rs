//! 九階教材支持的方言及其在接口中的编号
//!
//! 编号由 klokah 决定，不连续，也不是 1~44 中的每个值都存在。

use crate::Error;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialectEntry {
    pub name: &'static str,
    pub id: u8,
}

const fn entry(name: &'static str, id: u8) -> DialectEntry {
    DialectEntry { name, id }
}

static DIALECTS: [DialectEntry; 42] = [
    entry("卡那卡那富語", 33),
    entry("撒奇萊雅語", 38),
    entry("雅美語", 29),
    entry("南王卑南語", 3),
    entry("知本卑南語", 2),
    entry("西群卑南語", 1),
    entry("建和卑南語", 4),
    entry("鄒語", 32),
    entry("噶瑪蘭語", 31),
    entry("太魯閣語", 44),
    entry("東魯凱語", 15),
    entry("霧台魯凱語", 14),
    entry("大武魯凱語", 41),
    entry("多納魯凱語", 35),
    entry("茂林魯凱語", 37),
    entry("萬山魯凱語", 36),
    entry("東排灣語", 11),
    entry("北排灣語", 12),
    entry("中排灣語", 13),
    entry("南排灣語", 10),
    entry("卓群布農語", 6),
    entry("卡群布農語", 7),
    entry("丹群布農語", 8),
    entry("巒群布農語", 9),
    entry("郡群布農語", 5),
    entry("都達語", 22),
    entry("德固達雅語", 20),
    entry("德路固語", 21),
    entry("邵語", 30),
    entry("賽考利克泰雅語", 16),
    entry("澤敖利泰雅語", 17),
    entry("汶水泰雅語", 18),
    entry("萬大泰雅語", 19),
    entry("宜蘭澤敖利泰雅語", 42),
    entry("四季泰雅語", 43),
    entry("秀姑巒阿美語", 23),
    entry("南勢阿美語", 24),
    entry("海岸阿美語", 25),
    entry("馬蘭阿美語", 26),
    entry("恆春阿美語", 27),
    entry("賽夏語", 28),
    entry("拉阿魯哇語", 34),
];

static BY_NAME: LazyLock<HashMap<&'static str, u8>> =
    LazyLock::new(|| DIALECTS.iter().map(|d| (d.name, d.id)).collect());

/// 按表中的顺序返回所有方言
pub fn entries() -> &'static [DialectEntry] {
    &DIALECTS
}

pub fn lookup(name: &str) -> Result<u8, Error> {
    BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownDialect(name.to_owned()))
}

pub fn list_names() -> BTreeSet<&'static str> {
    DIALECTS.iter().map(|d| d.name).collect()
}
