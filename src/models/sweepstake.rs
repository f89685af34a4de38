use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrganizerResponse;

/// 奖品类别（固定枚举）
///
/// 声明顺序即对外的规范顺序，`ALL` 与 `getAllCategories` 均按此顺序返回。
/// 对外有两种字符串形式:
/// - 规范标记: 大写下划线 (CASH, GIFT_CARD, ...)，serde 序列化使用
/// - URL slug: 小写连字符 (cash, gift-cards, ...)，两者一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrizeType {
    Cash,
    Travel,
    Electronics,
    Vehicle,
    Home,
    GiftCard,
    Other,
}

impl PrizeType {
    /// 全部类别，规范声明顺序
    pub const ALL: [PrizeType; 7] = [
        PrizeType::Cash,
        PrizeType::Travel,
        PrizeType::Electronics,
        PrizeType::Vehicle,
        PrizeType::Home,
        PrizeType::GiftCard,
        PrizeType::Other,
    ];

    /// URL 中使用的 slug
    pub fn slug(&self) -> &'static str {
        match self {
            PrizeType::Cash => "cash",
            PrizeType::Travel => "travel",
            PrizeType::Electronics => "electronics",
            PrizeType::Vehicle => "vehicles",
            PrizeType::Home => "home",
            PrizeType::GiftCard => "gift-cards",
            PrizeType::Other => "other",
        }
    }

    /// 由 slug 解析类别，未知 slug 返回 None
    pub fn from_slug(slug: &str) -> Option<PrizeType> {
        PrizeType::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// 页面展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            PrizeType::Cash => "Cash",
            PrizeType::Travel => "Travel",
            PrizeType::Electronics => "Electronics",
            PrizeType::Vehicle => "Vehicles",
            PrizeType::Home => "Home",
            PrizeType::GiftCard => "Gift Cards",
            PrizeType::Other => "Other",
        }
    }
}

impl std::fmt::Display for PrizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrizeType::Cash => write!(f, "CASH"),
            PrizeType::Travel => write!(f, "TRAVEL"),
            PrizeType::Electronics => write!(f, "ELECTRONICS"),
            PrizeType::Vehicle => write!(f, "VEHICLE"),
            PrizeType::Home => write!(f, "HOME"),
            PrizeType::GiftCard => write!(f, "GIFT_CARD"),
            PrizeType::Other => write!(f, "OTHER"),
        }
    }
}

/// 抽奖活动记录
///
/// id 创建后不变；organizer_id 只保存组织方 id，查询时按需解析。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sweepstake {
    pub id: String,
    pub title: String,
    pub description: String,
    pub prize_type: PrizeType,
    /// 奖品价值(美元)，非负
    pub prize_value: i64,
    /// 截止时间，之后不再视为进行中
    pub end_date: DateTime<Utc>,
    /// 外部报名链接
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub featured: bool,
    pub organizer_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SweepstakeResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub prize_type: PrizeType,
    pub prize_value: i64,
    pub end_date: DateTime<Utc>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub featured: bool,
    pub organizer_id: String,
}

impl From<Sweepstake> for SweepstakeResponse {
    fn from(s: Sweepstake) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            prize_type: s.prize_type,
            prize_value: s.prize_value,
            end_date: s.end_date,
            url: s.url,
            created_at: s.created_at,
            featured: s.featured,
            organizer_id: s.organizer_id,
        }
    }
}

/// 活动详情（详情页一次取齐：组织方、倒计时、同类推荐）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SweepstakeDetailResponse {
    pub sweepstake: SweepstakeResponse,
    /// 组织方；引用无法解析时为 null，前端按未知组织方展示
    pub organizer: Option<OrganizerResponse>,
    pub is_expired: bool,
    /// 倒计时文本，已结束为 "Time's up!"
    pub time_left: String,
    /// 截止日期展示文本
    pub end_date_display: String,
    /// 同类别进行中的推荐活动
    pub similar: Vec<SweepstakeResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSweepstakeRequest {
    pub title: String,
    pub description: String,
    pub prize_type: PrizeType,
    pub prize_value: i64,
    pub end_date: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SweepstakeListQuery {
    /// latest / ending-soon
    pub sort: Option<String>,
    /// 类别 slug
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SiteStatisticsResponse {
    pub active_sweepstakes_count: u64,
    pub total_prizes_count: u64,
    pub total_prize_value: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryInfo {
    pub prize_type: PrizeType,
    pub name: String,
    pub slug: String,
}

impl From<PrizeType> for CategoryInfo {
    fn from(prize_type: PrizeType) -> Self {
        Self {
            name: prize_type.display_name().to_string(),
            slug: prize_type.slug().to_string(),
            prize_type,
        }
    }
}

/// 类别页数据：进行中与已结束分开展示
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageResponse {
    pub category: CategoryInfo,
    pub active: Vec<SweepstakeResponse>,
    pub expired: Vec<SweepstakeResponse>,
}
