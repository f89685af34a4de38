use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::SweepstakeResponse;

/// 活动组织方，种子数据固定六家，启动后不再变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Organizer {
    pub id: String,
    pub name: String,
    /// logo 图片引用
    pub logo: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizerResponse {
    pub id: String,
    pub name: String,
    pub logo: String,
}

impl From<Organizer> for OrganizerResponse {
    fn from(o: Organizer) -> Self {
        Self {
            id: o.id,
            name: o.name,
            logo: o.logo,
        }
    }
}

/// 组织方维度统计，每个活动计一个奖品
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizerStatistics {
    pub total_sweepstakes: u64,
    pub total_prizes: u64,
    pub total_prize_value: i64,
}

/// 组织方主页数据：进行中与往期活动分开展示
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizerProfileResponse {
    pub organizer: OrganizerResponse,
    pub active: Vec<SweepstakeResponse>,
    pub past: Vec<SweepstakeResponse>,
    pub statistics: OrganizerStatistics,
}
