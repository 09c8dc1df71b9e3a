//! Recipe reference data and the home-board suggestion rules.
//!
//! Suggestions are keyed off what is stocked: two fixed pairings, one
//! single-ingredient rule, then a dynamic pointer at the soonest-expiring
//! item, then a generic card. First match wins.

use freshcheck_core::FridgeInventory;

/// A fixed reference recipe: shopping list plus ordered steps.
#[derive(Debug, Clone, Copy)]
pub struct RecipeDetail {
    pub title: &'static str,
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
}

static RECIPE_DETAILS: &[RecipeDetail] = &[
    RecipeDetail {
        title: "经典西红柿炒蛋",
        ingredients: &["西红柿 2个", "鸡蛋 3个", "小葱 1根", "白糖 5g"],
        steps: &[
            "西红柿洗净切块，鸡蛋打散备用",
            "热锅下油，倒入蛋液快速划散成块盛出",
            "留底油炒香葱段，下西红柿炒至出汁",
            "回锅鸡蛋，加入糖、盐翻炒均匀即可",
        ],
    },
    RecipeDetail {
        title: "青椒肉丝",
        ingredients: &["猪里脊 200g", "青椒 2个", "姜丝 适量", "生抽 1勺"],
        steps: &[
            "肉丝加淀粉腌制",
            "青椒切丝，姜切丝",
            "大火滑散肉丝至变色盛出",
            "炒青椒至断生，回锅肉丝加盐调味即可",
        ],
    },
    RecipeDetail {
        title: "酸辣土豆丝",
        ingredients: &["土豆 1个", "干辣椒 2个", "香醋 1勺", "蒜末 适量"],
        steps: &[
            "土豆切丝反复冲洗去淀粉",
            "热锅凉油下花椒炸香，捞出花椒",
            "下蒜末、干辣椒爆香，倒入土豆丝大火快炒",
            "加醋、盐，断生即出锅",
        ],
    },
    RecipeDetail {
        title: "蛋炒饭",
        ingredients: &["隔夜饭 1碗", "鸡蛋 2个", "葱花 适量"],
        steps: &[
            "鸡蛋打散划熟盛出",
            "热油倒入米饭翻炒均匀",
            "加入鸡蛋碎、盐、生抽继续翻炒",
            "撒入葱花出锅",
        ],
    },
    RecipeDetail {
        title: "番茄鸡蛋面",
        ingredients: &["面条 1把", "西红柿 1个", "鸡蛋 1个"],
        steps: &[
            "炒香西红柿至出汁，加水烧开",
            "水开下入面条",
            "打入鸡蛋液，放入青菜",
            "加盐调味即可",
        ],
    },
    RecipeDetail {
        title: "蚝油生菜",
        ingredients: &["生菜 1颗", "蚝油 2勺", "蒜末 3瓣"],
        steps: &[
            "生菜烫熟铺在盘底",
            "炒香蒜末，加蚝油、生抽、水淀粉勾薄芡",
            "将芡汁淋在生菜上",
        ],
    },
    RecipeDetail {
        title: "土豆焖饭",
        ingredients: &["大米 1杯", "土豆 1个", "腊肠 1根"],
        steps: &[
            "土豆、腊肠切小丁",
            "热油炒一下土豆和腊肠",
            "将炒好的料倒入洗净的大米中，加水",
            "开启煮饭模式",
        ],
    },
];

/// Detail lookup by exact title. Dynamic suggestion titles have no detail.
pub fn recipe_detail(title: &str) -> Option<&'static RecipeDetail> {
    RECIPE_DETAILS.iter().find(|recipe| recipe.title == title)
}

/// What the home board proposes cooking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSuggestion {
    pub title: String,
    pub description: String,
}

/// Picks a suggestion for the current stock, or `None` for an empty fridge.
pub fn suggest(fridge: &FridgeInventory, now_ms: i64) -> Option<RecipeSuggestion> {
    if fridge.is_empty() {
        return None;
    }
    let has = |name: &str| fridge.items().iter().any(|item| item.name == name);

    if has("西红柿") && has("鸡蛋") {
        return Some(RecipeSuggestion {
            title: "经典西红柿炒蛋".to_string(),
            description: "根据库存食材，可浏览相关参考方案。".to_string(),
        });
    }
    if has("猪肉") && has("青椒") {
        return Some(RecipeSuggestion {
            title: "青椒肉丝".to_string(),
            description: "食材匹配度较高，可供参考。".to_string(),
        });
    }
    if has("土豆") {
        return Some(RecipeSuggestion {
            title: "酸辣土豆丝".to_string(),
            description: "基于单一食材的常见处理参考。".to_string(),
        });
    }

    if let Some(expiring) = fridge.near_expiry(now_ms).first() {
        return Some(RecipeSuggestion {
            title: format!("关于{}的常见做法", expiring.name),
            description: format!("检测到“{}”已进入保鲜临界期。", expiring.name),
        });
    }

    Some(RecipeSuggestion {
        title: "食材处理方案".to_string(),
        description: "根据当前库存，为您整理了以下参考。".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcheck_core::{FridgeItem, StorageZone, DAY_MS};

    fn stocked(names_days: &[(&str, i64)], added: i64) -> FridgeInventory {
        let mut fridge = FridgeInventory::new();
        for (name, days) in names_days {
            fridge.add(FridgeItem::manual(
                *name,
                "瓜果类蔬菜",
                "🥬",
                StorageZone::Fridge,
                1,
                "份",
                *days,
                added,
            ));
        }
        fridge
    }

    #[test]
    fn empty_fridge_suggests_nothing() {
        assert_eq!(suggest(&FridgeInventory::new(), 0), None);
    }

    #[test]
    fn pairing_rules_win_over_everything_else() {
        let fridge = stocked(&[("西红柿", 1), ("鸡蛋", 1), ("土豆", 30)], 0);
        let suggestion = suggest(&fridge, 0).unwrap();
        assert_eq!(suggestion.title, "经典西红柿炒蛋");
        assert!(recipe_detail(&suggestion.title).is_some());
    }

    #[test]
    fn potato_rule_applies_without_the_pairings() {
        let fridge = stocked(&[("土豆", 30), ("青椒", 7)], 0);
        assert_eq!(suggest(&fridge, 0).unwrap().title, "酸辣土豆丝");
    }

    #[test]
    fn near_expiry_item_gets_a_dynamic_card() {
        let fridge = stocked(&[("丝瓜", 2), ("南瓜", 60)], 0);
        let suggestion = suggest(&fridge, DAY_MS / 2).unwrap();
        assert_eq!(suggestion.title, "关于丝瓜的常见做法");
        // Dynamic titles are not in the fixed detail table.
        assert!(recipe_detail(&suggestion.title).is_none());
    }

    #[test]
    fn stocked_but_uneventful_fridge_gets_the_generic_card() {
        let fridge = stocked(&[("南瓜", 60)], 0);
        assert_eq!(suggest(&fridge, 0).unwrap().title, "食材处理方案");
    }

    #[test]
    fn detail_lookup_misses_unknown_titles() {
        assert!(recipe_detail("经典西红柿炒蛋").is_some());
        assert!(recipe_detail("关于丝瓜的常见做法").is_none());
    }
}
