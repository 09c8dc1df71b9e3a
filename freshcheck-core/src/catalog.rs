//! 食材图鉴 — the static ingredient reference catalog.
//!
//! Pure data: identity, selection and spoilage cues, storage advice, and a
//! 3-tier visual/tactile diagnostic chosen per category and name. Nothing here
//! mutates or persists; the fridge copies what it needs at add time.

use std::str::FromStr;

use crate::error::CoreError;

/// The eight catalog categories. Labels are the Chinese strings the vision
/// service and the persisted records use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientCategory {
    Leafy,
    Root,
    Melon,
    Fungus,
    Fruit,
    Meat,
    Seafood,
    EggDairy,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 8] = [
        IngredientCategory::Leafy,
        IngredientCategory::Root,
        IngredientCategory::Melon,
        IngredientCategory::Fungus,
        IngredientCategory::Fruit,
        IngredientCategory::Meat,
        IngredientCategory::Seafood,
        IngredientCategory::EggDairy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Leafy => "叶菜类",
            IngredientCategory::Root => "根茎类",
            IngredientCategory::Melon => "瓜果类蔬菜",
            IngredientCategory::Fungus => "菌菇类",
            IngredientCategory::Fruit => "水果",
            IngredientCategory::Meat => "肉类",
            IngredientCategory::Seafood => "水产",
            IngredientCategory::EggDairy => "蛋奶类",
        }
    }

    pub fn parse_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl FromStr for IngredientCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Tier of a catalog diagnostic. Same labels as the inventory's derived
/// status, but describes what to look for rather than a computed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticTier {
    VeryFresh,
    Average,
    Spoiled,
}

impl DiagnosticTier {
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticTier::VeryFresh => "非常新鲜",
            DiagnosticTier::Average => "一般",
            DiagnosticTier::Spoiled => "已变质",
        }
    }
}

/// One tier of an entry's diagnostic: what it looks like and what it feels
/// like at that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessDiagnostic {
    pub tier: DiagnosticTier,
    pub visual: &'static str,
    pub feel: &'static str,
}

const fn diag(
    tier: DiagnosticTier,
    visual: &'static str,
    feel: &'static str,
) -> FreshnessDiagnostic {
    FreshnessDiagnostic { tier, visual, feel }
}

/// Which descriptive template an entry's diagnostics come from. Selection
/// happens once per entry: name-specific rules first (berries, climacteric
/// fruits, bean pods, butter and cheese), then the category's template, then
/// the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiagnosticTemplate {
    Berry,
    Climacteric,
    BeanPod,
    Meat,
    ButterCheese,
    Leafy,
    Root,
    Melon,
    Fungus,
    Seafood,
    Generic,
}

impl DiagnosticTemplate {
    fn select(name: &str, category: IngredientCategory) -> Self {
        if category == IngredientCategory::Fruit {
            if ["草莓", "蓝莓", "葡萄", "樱桃"].contains(&name) {
                return Self::Berry;
            }
            if ["香蕉", "芒果", "牛油果"].contains(&name) {
                return Self::Climacteric;
            }
        }
        // Bean pods sit in the melon-vegetable category but read differently.
        if ["豆角", "四季豆", "豇豆", "荷兰豆", "豌豆"].contains(&name) {
            return Self::BeanPod;
        }
        if category == IngredientCategory::Meat {
            return Self::Meat;
        }
        if name == "黄油" || name == "奶酪" {
            return Self::ButterCheese;
        }
        match category {
            IngredientCategory::Leafy => Self::Leafy,
            IngredientCategory::Root => Self::Root,
            IngredientCategory::Melon => Self::Melon,
            IngredientCategory::Fungus => Self::Fungus,
            IngredientCategory::Seafood => Self::Seafood,
            IngredientCategory::Fruit
            | IngredientCategory::Meat
            | IngredientCategory::EggDairy => Self::Generic,
        }
    }

    fn diagnostics(self) -> [FreshnessDiagnostic; 3] {
        use DiagnosticTier::{Average, Spoiled, VeryFresh};
        match self {
            Self::Berry => [
                diag(VeryFresh, "果实饱满，果柄鲜绿，表面覆盖一层均匀的天然白霜。", "质地紧实，捏起来有明显的阻力，果皮不松弛。"),
                diag(Average, "白霜变薄，果实表面失去光泽，出现轻微压痕。", "弹性下降，手感开始变软，果实不再挺实。"),
                diag(Spoiled, "出现灰白色霉点，果肉渗水，果柄变黑脱落。", "手感极其软烂，指尖触碰即破，有酒味或霉味。"),
            ],
            Self::Climacteric => [
                diag(VeryFresh, "果皮色泽自然，无黑斑（香蕉微量黑点除外），果柄处紧密。", "手感坚实。香蕉微有弹性，牛油果如按压额头感。"),
                diag(Average, "颜色加深，黑斑增多。", "果肉明显变软，按压后凹陷恢复缓慢。"),
                diag(Spoiled, "果皮发黑，切开后果肉黑腐，甚至流出粘稠汁液。", "手感稀烂，完全失去结构支撑，伴有发酵异味。"),
            ],
            Self::BeanPod => [
                diag(VeryFresh, "豆荚色泽鲜绿，表面无锈斑，豆粒不明显突出。", "手感清脆，对折时会有清脆的响声和断裂感。"),
                diag(Average, "豆荚颜色转黄，表面出现褐色斑点，筋络变硬。", "质地变软，韧性增强，折断时需要用力且无脆声。"),
                diag(Spoiled, "豆荚发黑、霉变，表面出现水渍状斑块。", "手感发粘，豆荚内部软化，散发酸臭味。"),
            ],
            Self::Meat => [
                diag(VeryFresh, "肉质呈淡粉或鲜红色，脂肪洁白，血水极少且清澈。", "表面微干，按压后肉基质立即回弹，不粘手。"),
                diag(Average, "颜色转暗，脂肪微黄，盘底血水增多。", "弹性降低，指压后凹陷消失较慢，表面有轻微滑腻感。"),
                diag(Spoiled, "肉色发灰发绿，脂肪污暗。", "表面粘液浓稠拉丝，肉质极松软，有强烈氨味或酸臭。"),
            ],
            Self::ButterCheese => [
                diag(VeryFresh, "色泽均匀，切面平滑，无渗水，无异味。", "硬度均匀，黄油在低温下坚硬，奶酪具韧性。"),
                diag(Average, "边缘颜色稍深（油脂氧化），表面略显油亮。", "表面开始变得粘腻，结构略微松散。"),
                diag(Spoiled, "出现可见霉斑，颜色发黑或发红。", "手感极其粘稠，油脂析出严重，伴有浓烈酸腐味。"),
            ],
            Self::Leafy => [
                diag(VeryFresh, "叶片色泽鲜绿，挺拔无枯萎，根部切口洁白。", "叶片清脆，手感挺拔，轻轻一折即断。"),
                diag(Average, "叶尖微黄，外层叶片失去水分开始卷曲发蔫。", "整体变软，失去支撑力，手感略有韧性。"),
                diag(Spoiled, "大面积黑腐、发黄，叶片粘连并渗出液体。", "手感湿粘、化泥，散发腐败臭味。"),
            ],
            Self::Root => [
                diag(VeryFresh, "外皮完整、干燥且紧实，无芽点，无黑斑。", "质地极硬，无法按压，手感沉重。"),
                diag(Average, "表皮起皱缩水，光泽度下降。", "硬度下降，稍用力按压有回弹感。"),
                diag(Spoiled, "出现黑心、霉点或长出明显的绿芽。", "手感发软，局部渗水或有中空感。"),
            ],
            Self::Melon => [
                diag(VeryFresh, "皮色鲜艳光亮，果蒂绿意盎然，表面无伤。", "手感沉实，皮层紧绷，回弹迅速。"),
                diag(Average, "颜色转暗，果蒂干枯脱落，表皮微皱。", "弹性变差，按压时感觉皮肉开始分离。"),
                diag(Spoiled, "出现软腐斑、霉点，果体流水。", "手感软烂，一捏即破，散发发酵味。"),
            ],
            Self::Fungus => [
                diag(VeryFresh, "菌盖完整未开伞，颜色自然，菌褶清晰。", "干爽不粘手，质地清脆，容易掰断。"),
                diag(Average, "边缘发暗，表面出现褐色斑块或轻微皱缩。", "开始变软，有潮湿感，不再干爽。"),
                diag(Spoiled, "菌盖发黑腐烂，渗出黑水。", "表面极其粘手，呈糊状，有酸臭味。"),
            ],
            Self::Seafood => [
                diag(VeryFresh, "鱼眼凸起清澈，鱼鳃鲜红，鳞片紧贴。", "肉质坚实，指压后痕迹瞬间消失。"),
                diag(Average, "鱼眼微凹浑浊，鱼鳃淡红，表面粘液多。", "弹性减弱，恢复缓慢，腥味加重。"),
                diag(Spoiled, "鱼眼塌陷变红，鱼鳃灰暗，腹部鼓胀。", "肉质散烂，骨肉分离，氨臭味剧烈。"),
            ],
            Self::Generic => [
                diag(VeryFresh, "色泽自然，状态良好。", "质地紧实。"),
                diag(Average, "色泽转暗，出现疲态。", "硬度下降。"),
                diag(Spoiled, "变色、异味、腐坏。", "软烂、发粘。"),
            ],
        }
    }
}

/// One catalog entry. `storage_life` is free text in days ("3-5", "180");
/// [`crate::shelf_life::parse_shelf_life_days`] turns it into arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct IngredientEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: IngredientCategory,
    pub icon: &'static str,
    pub selection_tips: &'static [&'static str],
    pub spoilage_signs: &'static [&'static str],
    pub storage_advice: &'static str,
    pub storage_life: &'static str,
}

impl IngredientEntry {
    /// The entry's 3-tier diagnostic, fresh-to-spoiled.
    pub fn diagnostics(&self) -> [FreshnessDiagnostic; 3] {
        DiagnosticTemplate::select(self.name, self.category).diagnostics()
    }
}

/// All catalog entries in display order.
pub fn entries() -> &'static [IngredientEntry] {
    ENTRIES
}

/// Looks an entry up by its stable id.
pub fn get(id: &str) -> Option<&'static IngredientEntry> {
    ENTRIES.iter().find(|entry| entry.id == id)
}

/// Case-sensitive substring search over name and category label, intersected
/// with an optional category filter. No ranking; results keep catalog order.
/// An empty query matches everything.
pub fn lookup(query: &str, category: Option<IngredientCategory>) -> Vec<&'static IngredientEntry> {
    ENTRIES
        .iter()
        .filter(|entry| entry.name.contains(query) || entry.category.label().contains(query))
        .filter(|entry| category.map_or(true, |wanted| entry.category == wanted))
        .collect()
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    id: &'static str,
    name: &'static str,
    category: IngredientCategory,
    icon: &'static str,
    selection_tips: &'static [&'static str],
    spoilage_signs: &'static [&'static str],
    storage_advice: &'static str,
    storage_life: &'static str,
) -> IngredientEntry {
    IngredientEntry {
        id,
        name,
        category,
        icon,
        selection_tips,
        spoilage_signs,
        storage_advice,
        storage_life,
    }
}

use IngredientCategory::{EggDairy, Fruit, Fungus, Leafy, Meat, Melon, Root, Seafood};

static ENTRIES: &[IngredientEntry] = &[
    // 叶菜类
    entry("bocai", "菠菜", Leafy, "🥬", &["根部红亮", "叶片深绿"], &["发黄", "化水"], "纸巾包裹冷藏", "3-5"),
    entry("shengcai", "生菜", Leafy, "🥗", &["叶挺拔", "心紧凑"], &["红边"], "冷藏", "5-7"),
    entry("youmaicai", "油麦菜", Leafy, "🥬", &["色翠绿", "无折痕"], &["叶尖烂"], "冷藏", "3-4"),
    entry("xiaobaicai", "小白菜", Leafy, "🥬", &["叶嫩", "杆白"], &["黄化"], "冷藏", "2-3"),
    entry("shanghaiqing", "上海青", Leafy, "🥬", &["株型矮壮"], &["叶柄烂"], "冷藏", "3-5"),
    entry("kongxincai", "空心菜", Leafy, "🌿", &["杆嫩易断"], &["发黑"], "冷藏", "2-3"),
    entry("qinai", "芹菜", Leafy, "🌿", &["梗实心"], &["空心"], "冷藏", "7-10"),
    entry("xiangcai", "香菜", Leafy, "🌿", &["根部不烂"], &["发蔫"], "根部插水", "5"),
    entry("jiucai", "韭菜", Leafy, "🌱", &["切口平齐"], &["烂叶"], "冷藏", "2-3"),
    entry("tonghao", "茼蒿", Leafy, "🌿", &["叶片小且嫩"], &["变黑"], "冷藏", "2-3"),
    entry("wawacai", "娃娃菜", Leafy, "🥬", &["手感沉实"], &["黑斑"], "冷藏", "10-15"),
    entry("juanxincai", "卷心菜", Leafy, "🥦", &["包球紧密"], &["爆裂"], "冷藏", "15-20"),
    entry("zigailan", "紫甘蓝", Leafy, "🟣", &["颜色深紫"], &["枯萎"], "冷藏", "20-30"),
    entry("xiancai", "苋菜", Leafy, "🌿", &["叶片厚实"], &["烂根"], "冷藏", "2"),
    entry("xiyangcai", "西洋菜", Leafy, "🌿", &["梗嫩"], &["发黄"], "冷藏", "2"),
    // 根茎类
    entry("tudou", "土豆", Root, "🥔", &["表皮光滑"], &["发芽"], "避光常温", "30-60"),
    entry("hongshu", "红薯", Root, "🍠", &["纺锤形"], &["黑斑"], "常温", "30-45"),
    entry("zishu", "紫薯", Root, "🍠", &["皮深紫"], &["干瘪"], "常温", "30-45"),
    entry("huluobo", "胡萝卜", Root, "🥕", &["橘红色"], &["软化"], "冷藏", "14-21"),
    entry("bailuobo", "白萝卜", Root, "🎍", &["皮亮不裂"], &["空心"], "冷藏", "10-14"),
    entry("shanyao", "山药", Root, "🥖", &["毛须多"], &["变色"], "常温", "15-20"),
    entry("yutou", "芋头", Root, "🥔", &["分量重"], &["霉变"], "常温", "10-15"),
    entry("lianou", "莲藕", Root, "🥯", &["孔大肉厚"], &["异味"], "泡水冷藏", "5-7"),
    entry("yangcong", "洋葱", Root, "🧅", &["皮干"], &["发芽"], "悬挂常温", "30-60"),
    entry("dashuan", "大蒜", Root, "🧄", &["瓣饱满"], &["干瘪"], "常温", "90"),
    entry("shengjiang", "生姜", Root, "🥔", &["皮紧实"], &["霉斑"], "沙埋或常温", "60"),
    entry("tiancaigen", "甜菜根", Root, "🥔", &["颜色深"], &["发软"], "冷藏", "14"),
    // 瓜果类蔬菜
    entry("xihongshi", "西红柿", Melon, "🍅", &["底部凹陷"], &["出水"], "常温", "7-10"),
    entry("huanggua", "黄瓜", Melon, "🥒", &["刺细密"], &["发粘"], "冷藏", "5-7"),
    entry("qiezi", "茄子", Melon, "🍆", &["皮发亮"], &["黑斑"], "冷藏", "5"),
    entry("qingjiao", "青椒", Melon, "🫑", &["果柄鲜"], &["腐烂"], "冷藏", "7-10"),
    entry("hongjiao", "红椒", Melon, "🌶️", &["颜色艳"], &["发软"], "冷藏", "7-10"),
    entry("caijiao", "彩椒", Melon, "🫑", &["肉厚"], &["褶皱"], "冷藏", "7-10"),
    entry("xihulu", "西葫芦", Melon, "🥒", &["体型匀称"], &["霉点"], "冷藏", "5-7"),
    entry("nangua", "南瓜", Melon, "🎃", &["老瓜香"], &["渗水"], "常温", "60"),
    entry("donggua", "冬瓜", Melon, "🍈", &["白霜厚"], &["酸味"], "常温", "30"),
    entry("kugua", "苦瓜", Melon, "🥒", &["纹路宽"], &["变黄"], "冷藏", "3-5"),
    entry("sigua", "丝瓜", Melon, "🥒", &["重手"], &["发软"], "冷藏", "3-5"),
    entry("foshougua", "佛手瓜", Melon, "🍈", &["皮嫩"], &["枯萎"], "冷藏", "10-14"),
    entry("doujiao", "豆角", Melon, "🌿", &["无锈斑"], &["粘手"], "冷藏", "3-5"),
    entry("sijidou", "四季豆", Melon, "🌿", &["清脆"], &["豆荚老"], "冷藏", "3-5"),
    entry("jiangdou", "豇豆", Melon, "🌿", &["细嫩"], &["腐败"], "冷藏", "2-3"),
    entry("heliandou", "荷兰豆", Melon, "🌿", &["薄翠"], &["变黄"], "冷藏", "3-5"),
    entry("wandou", "豌豆", Melon, "🌿", &["颗粒满"], &["发霉"], "冷藏", "3-5"),
    entry("yumi", "玉米", Melon, "🌽", &["须色鲜"], &["干瘪"], "冷冻/冷藏", "3-5"),
    entry("qiukui", "秋葵", Melon, "🌿", &["个头小嫩"], &["黑变"], "冷藏", "2-3"),
    // 菌菇类
    entry("xianggu", "香菇", Fungus, "🍄", &["菌褶白"], &["发黑"], "纸袋冷藏", "5-7"),
    entry("pinggu", "平菇", Fungus, "🍄", &["边缘紧"], &["粘腻"], "冷藏", "3-5"),
    entry("jinzhengu", "金针菇", Fungus, "🍄", &["色纯白"], &["粘稠"], "冷藏", "5-7"),
    entry("xingbaogu", "杏鲍菇", Fungus, "🍄", &["柱体壮"], &["发软"], "冷藏", "7-10"),
    entry("baiyugu", "白玉菇", Fungus, "🍄", &["通体白"], &["出水"], "冷藏", "5-7"),
    entry("xieweigu", "蟹味菇", Fungus, "🍄", &["圆润"], &["发酸"], "冷藏", "5-7"),
    entry("koumo", "口蘑", Fungus, "🍄", &["未开伞"], &["褐变"], "冷藏", "3-5"),
    entry("chashugu", "茶树菇", Fungus, "🍄", &["干爽"], &["霉点"], "冷藏", "3-5"),
    entry("muer", "木耳", Fungus, "🍄", &["无异味"], &["发粘"], "干燥常温", "365"),
    entry("yiner", "银耳", Fungus, "🍄", &["色微黄"], &["发红"], "干燥", "365"),
    // 水果
    entry("pingguo", "苹果", Fruit, "🍎", &["底部深"], &["褐腐"], "冷藏", "30"),
    entry("xiangjiao", "香蕉", Fruit, "🍌", &["柄绿"], &["化浆"], "常温", "3-5"),
    entry("chengzi", "橙子", Fruit, "🍊", &["皮薄"], &["青霉"], "冷藏", "14-21"),
    entry("ningmeng", "柠檬", Fruit, "🍋", &["分量重"], &["霉变"], "冷藏", "30"),
    entry("li", "梨", Fruit, "🍐", &["肉细"], &["黑心"], "冷藏", "15-20"),
    entry("putao", "葡萄", Fruit, "🍇", &["白霜厚"], &["掉粒"], "冷藏", "5-7"),
    entry("caomei", "草莓", Fruit, "🍓", &["籽均匀"], &["渗水"], "冷藏", "1-2"),
    entry("lanmei", "蓝莓", Fruit, "🫐", &["白粉"], &["长霉"], "冷藏", "7-10"),
    entry("mangguo", "芒果", Fruit, "🥭", &["香味浓"], &["黑腐"], "常温", "3-5"),
    entry("boluo", "菠萝", Fruit, "🍍", &["色橙黄"], &["流汁"], "常温", "2-3"),
    entry("xigua", "西瓜", Fruit, "🍉", &["声脆"], &["酸败"], "常温", "7-10"),
    entry("hamigua", "哈密瓜", Fruit, "🍈", &["网纹密"], &["软烂"], "常温", "7-10"),
    entry("mihoutao", "猕猴桃", Fruit, "🥝", &["绒毛整齐"], &["酒味"], "催熟冷藏", "10-15"),
    entry("taozi", "桃子", Fruit, "🍑", &["果尖粉"], &["变黑"], "冷藏", "3-5"),
    entry("lizi", "李子", Fruit, "🫐", &["硬度中等"], &["裂口"], "冷藏", "5-7"),
    entry("yingtao", "樱桃", Fruit, "🍒", &["梗青"], &["发褐"], "冷藏", "3-5"),
    entry("huolongguo", "火龙果", Fruit, "🌵", &["鳞片绿"], &["萎缩"], "冷藏", "7-10"),
    entry("shiliu", "石榴", Fruit, "🍎", &["棱角分明"], &["皮黑"], "冷藏", "30"),
    entry("liulian", "榴莲", Fruit, "🍈", &["刺软"], &["过熟酸味"], "冷冻/冷藏", "3-5"),
    entry("niuyouguo", "牛油果", Fruit, "🥑", &["蒂头绿"], &["全黑软"], "常温/冷藏", "3-5"),
    // 肉类
    entry("zhurou", "猪肉", Meat, "🥓", &["鲜红"], &["异味"], "冷冻", "180"),
    entry("niurou", "牛肉", Meat, "🥩", &["暗红"], &["粘手"], "冷冻", "180"),
    entry("yangrou", "羊肉", Meat, "🥩", &["肉质细"], &["膻臭"], "冷冻", "180"),
    entry("jirou", "鸡肉", Meat, "🍗", &["皮黄白"], &["发粘"], "冷冻", "180"),
    entry("yarou", "鸭肉", Meat, "🍗", &["肉紧实"], &["变色"], "冷冻", "180"),
    entry("erou", "鹅肉", Meat, "🍗", &["色泽红润"], &["异味"], "冷冻", "180"),
    entry("paigu", "排骨", Meat, "🥩", &["骨色白"], &["血水黑"], "冷冻", "180"),
    entry("wuhuarou", "五花肉", Meat, "🥓", &["分层清晰"], &["油脂黄"], "冷冻", "180"),
    entry("niupai", "牛排", Meat, "🥩", &["大理石纹"], &["发灰"], "冷冻", "180"),
    entry("jixiongrou", "鸡胸肉", Meat, "🍗", &["无淤血"], &["粘滑"], "冷冻", "180"),
    entry("jitui", "鸡腿", Meat, "🍗", &["肉饱满"], &["变暗"], "冷冻", "180"),
    // 水产
    entry("yu", "鱼", Seafood, "🐟", &["眼亮鳃红"], &["肉散"], "冷冻", "60"),
    entry("sanwenyu", "三文鱼", Seafood, "🍣", &["纹路清晰"], &["变色"], "冷冻", "60"),
    entry("xueyu", "鳕鱼", Seafood, "🐟", &["色洁白"], &["流水"], "冷冻", "60"),
    entry("daiyu", "带鱼", Seafood, "🐟", &["银粉不脱"], &["腥臭"], "冷冻", "60"),
    entry("luyu", "鲈鱼", Seafood, "🐟", &["身匀称"], &["眼暗"], "冷冻", "60"),
    entry("xia", "虾", Seafood, "🦐", &["壳硬头紧"], &["黑头"], "冷冻", "60"),
    entry("pangxie", "螃蟹", Seafood, "🦀", &["眼灵敏"], &["空壳"], "冷藏", "3"),
    entry("shanbei", "扇贝", Seafood, "🐚", &["闭合力"], &["开口"], "冷冻", "30"),
    entry("gali", "蛤蜊", Seafood, "🐚", &["吐沙清"], &["闭合不回"], "冷藏", "2"),
    entry("youyu", "鱿鱼", Seafood, "🦑", &["皮完整"], &["发红"], "冷冻", "60"),
    entry("zhangyu", "章鱼", Seafood, "🐙", &["吸盘力"], &["粘液"], "冷冻", "60"),
    // 蛋奶类
    entry("jidan", "鸡蛋", EggDairy, "🥚", &["壳粗糙"], &["摇晃声"], "冷藏", "30"),
    entry("yadan", "鸭蛋", EggDairy, "🥚", &["青色亮"], &["散黄"], "冷藏", "30"),
    entry("anchundan", "鹌鹑蛋", EggDairy, "🥚", &["花纹清"], &["浮水"], "冷藏", "15"),
    entry("niunai", "牛奶", EggDairy, "🥛", &["挂壁均"], &["沉淀"], "冷藏", "7"),
    entry("suannai", "酸奶", EggDairy, "🥤", &["质地稠"], &["发红"], "冷藏", "21"),
    entry("naizao", "奶酪", EggDairy, "🧀", &["色泽正"], &["霉点"], "冷藏", "30"),
    entry("huangyou", "黄油", EggDairy, "🧈", &["淡黄色"], &["哈喇味"], "冷冻/冷藏", "180"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_id() {
        let potato = get("tudou").unwrap();
        assert_eq!(potato.name, "土豆");
        assert_eq!(potato.category, IngredientCategory::Root);
        assert!(get("nonexistent").is_none());
    }

    #[test]
    fn lookup_matches_name_substring_in_catalog_order() {
        let hits = lookup("菠", None);
        let names: Vec<_> = hits.iter().map(|e| e.name).collect();
        // 菠菜 is listed before 菠萝.
        assert_eq!(names, vec!["菠菜", "菠萝"]);
    }

    #[test]
    fn lookup_matches_category_label_too() {
        let hits = lookup("肉", None);
        assert!(hits.iter().all(|e| e.category == IngredientCategory::Meat));
        assert_eq!(hits.len(), 11);
    }

    #[test]
    fn lookup_intersects_with_category_filter() {
        assert!(lookup("菠", Some(IngredientCategory::Seafood)).is_empty());
        let leafy_hit = lookup("菠", Some(IngredientCategory::Leafy));
        assert_eq!(leafy_hit.len(), 1);
        assert_eq!(leafy_hit[0].name, "菠菜");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(lookup("", None).len(), entries().len());
        assert_eq!(lookup("", Some(IngredientCategory::Fungus)).len(), 10);
    }

    #[test]
    fn lookup_is_case_sensitive_and_unranked() {
        // No normalization: a query that matches nothing exactly returns
        // nothing, even if a case-folded form would match.
        assert!(lookup("菠菜x", None).is_empty());
    }

    #[test]
    fn diagnostics_follow_name_rules_before_category_rules() {
        let strawberry = get("caomei").unwrap().diagnostics();
        assert!(strawberry[0].visual.starts_with("果实饱满"));

        let mango = get("mangguo").unwrap().diagnostics();
        assert!(mango[0].visual.starts_with("果皮色泽自然"));

        // A fruit outside the berry/climacteric lists gets the generic text.
        let apple = get("pingguo").unwrap().diagnostics();
        assert_eq!(apple[0].visual, "色泽自然，状态良好。");

        // Bean pods override their melon-vegetable category.
        let green_bean = get("doujiao").unwrap().diagnostics();
        assert!(green_bean[0].visual.starts_with("豆荚色泽鲜绿"));

        // Butter overrides its egg-dairy category; eggs stay generic.
        let butter = get("huangyou").unwrap().diagnostics();
        assert!(butter[0].visual.starts_with("色泽均匀"));
        let egg = get("jidan").unwrap().diagnostics();
        assert_eq!(egg[0].visual, "色泽自然，状态良好。");
    }

    #[test]
    fn diagnostics_are_ordered_fresh_to_spoiled() {
        for entry in entries() {
            let tiers: Vec<_> = entry.diagnostics().iter().map(|d| d.tier).collect();
            assert_eq!(
                tiers,
                vec![
                    DiagnosticTier::VeryFresh,
                    DiagnosticTier::Average,
                    DiagnosticTier::Spoiled
                ]
            );
        }
    }

    #[test]
    fn category_labels_round_trip() {
        for category in IngredientCategory::ALL {
            assert_eq!(IngredientCategory::parse_label(category.label()), Some(category));
        }
        assert!("其他".parse::<IngredientCategory>().is_err());
    }
}
