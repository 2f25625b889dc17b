use std::collections::HashMap;

use crate::term::Term;

/// Marker substring; a definition containing it already carries a
/// clarification, so repeated builds never double-append.
pub const CLARIFY_MARKER: &str = "通俗解释";

/// Plain-language clarifications for well-known abbreviations and jargon
pub struct Clarifications {
    notes: HashMap<String, String>,
}

impl Clarifications {
    /// Create empty clarification table
    pub fn new() -> Self {
        Self {
            notes: HashMap::new(),
        }
    }

    /// Create with the embedded clarification notes
    pub fn with_defaults() -> Self {
        let mut notes = HashMap::new();

        let entries = [
            ("GG", "对局结束时打出的认可用语，来自 Good Game 的缩写"),
            ("GLHF", "开局互相致意的祝福语，来自 Good Luck Have Fun 的缩写"),
            ("AFK", "人暂时不在电脑前，来自 Away From Keyboard 的缩写"),
            ("OP", "强得超出平衡的意思，来自 OverPowered 的缩写"),
            ("MVP", "全场表现最好的玩家，来自 Most Valuable Player 的缩写"),
            ("ADC", "远程物理输出位，来自 Attack Damage Carry 的缩写"),
            ("C位", "队伍的核心输出位置，胜负往往压在这个人身上"),
            ("坦克", "顶在队伍最前面、替队友吸收伤害的角色"),
            ("打野", "不走固定分路、在野区刷资源并支援各路的位置"),
            ("补刀", "卡住时机对小兵做最后一击来拿金币"),
            ("走A", "在移动间隙穿插普通攻击，边走边打"),
            ("风筝", "利用射程和走位让对手追不上也打不到"),
            ("集火", "全队同时攻击同一个目标"),
            ("翻盘", "局势落后的一方反过来赢下比赛"),
            ("滚雪球", "优势像雪球一样越滚越大，领先方越来越强"),
            ("偷塔", "避开正面交战，偷偷拆掉对方防御塔"),
            ("萌新", "刚接触游戏的新手玩家"),
            ("大佬", "水平很高的玩家，常带着新人玩"),
            ("白给", "没有产生任何价值就送了人头"),
            ("上分", "打排位赛提高自己的段位分数"),
            ("氪金", "在游戏里花真钱买道具或抽卡"),
            ("肝", "靠大量时间反复刷取资源或进度"),
        ];

        for (id, note) in entries {
            notes.insert(id.to_string(), note.to_string());
        }

        Self { notes }
    }

    /// Clarification note for an id, if one exists
    pub fn get(&self, id: &str) -> Option<&str> {
        self.notes.get(id).map(String::as_str)
    }

    /// Append the clarification for this term unless the definition already
    /// carries the marker.
    pub fn apply(&self, term: &mut Term) {
        if let Some(note) = self.notes.get(&term.id) {
            if !term.definition.contains(CLARIFY_MARKER) {
                if !term.definition.is_empty() {
                    term.definition.push_str("。");
                }
                term.definition.push_str(CLARIFY_MARKER);
                term.definition.push_str("：");
                term.definition.push_str(note);
            }
        }
    }
}
