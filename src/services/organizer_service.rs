use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{OrganizerProfileResponse, OrganizerResponse, OrganizerStatistics};
use crate::store::SweepstakeStore;

/// 首页组织方榜单默认条数
const DEFAULT_TOP_LIMIT: usize = 6;

#[derive(Clone)]
pub struct OrganizerService {
    store: SweepstakeStore,
}

impl OrganizerService {
    pub fn new(store: SweepstakeStore) -> Self {
        Self { store }
    }

    /// 按名下活动数排名的组织方榜单
    pub fn top(&self, limit: Option<usize>) -> Vec<OrganizerResponse> {
        self.store
            .top_organizers(limit.unwrap_or(DEFAULT_TOP_LIMIT))
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// 组织方主页：进行中/往期活动与累计统计
    pub fn profile(&self, id: &str) -> AppResult<OrganizerProfileResponse> {
        let organizer = self
            .store
            .organizer_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Organizer {id} not found")))?;

        let now = Utc::now();
        let listings = self.store.by_organizer(id);
        let total_sweepstakes = listings.len() as u64;
        let total_prize_value: i64 = listings.iter().map(|s| s.prize_value).sum();

        let (mut active, mut past): (Vec<_>, Vec<_>) =
            listings.into_iter().partition(|s| s.end_date > now);
        // 进行中的按截止时间从近到远，往期的按结束时间从新到旧
        active.sort_by(|a, b| a.end_date.cmp(&b.end_date));
        past.sort_by(|a, b| b.end_date.cmp(&a.end_date));

        Ok(OrganizerProfileResponse {
            organizer: organizer.into(),
            active: active.into_iter().map(Into::into).collect(),
            past: past.into_iter().map(Into::into).collect(),
            statistics: OrganizerStatistics {
                total_sweepstakes,
                total_prizes: total_sweepstakes,
                total_prize_value,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;

    fn service() -> OrganizerService {
        let config = SeedConfig {
            synthetic_count: 20,
            rng_seed: Some(42),
        };
        OrganizerService::new(SweepstakeStore::new(&config))
    }

    #[test]
    fn test_top_defaults_to_six() {
        let service = service();
        assert_eq!(service.top(None).len(), 6);
        assert_eq!(service.top(Some(2)).len(), 2);
    }

    #[test]
    fn test_profile_not_found() {
        let service = service();
        assert!(matches!(
            service.profile("99"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_profile_totals_and_split() {
        let service = service();
        let profile = service.profile("2").unwrap();
        assert_eq!(profile.organizer.name, "TravelDreams");
        assert_eq!(
            profile.statistics.total_sweepstakes,
            (profile.active.len() + profile.past.len()) as u64
        );
        assert_eq!(
            profile.statistics.total_prizes,
            profile.statistics.total_sweepstakes
        );
        let expected_value: i64 = profile
            .active
            .iter()
            .chain(profile.past.iter())
            .map(|s| s.prize_value)
            .sum();
        assert_eq!(profile.statistics.total_prize_value, expected_value);
        // 所有活动都属于该组织方
        assert!(
            profile
                .active
                .iter()
                .chain(profile.past.iter())
                .all(|s| s.organizer_id == "2")
        );
    }
}
