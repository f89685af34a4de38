use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{
    CategoryInfo, CategoryPageResponse, CreateSweepstakeRequest, PrizeType,
    SiteStatisticsResponse, SweepstakeDetailResponse, SweepstakeListQuery, SweepstakeResponse,
};
use crate::store::{NewSweepstake, SweepstakeStore};
use crate::utils::{format_countdown, format_end_date};

/// 首页各区块默认条数，与页面展示一致
const DEFAULT_FEATURED_LIMIT: usize = 3;
const DEFAULT_LATEST_LIMIT: usize = 10;
const DEFAULT_ENDING_SOON_LIMIT: usize = 10;
/// 详情页同类推荐条数
const SIMILAR_LIMIT: usize = 3;

#[derive(Clone)]
pub struct SweepstakeService {
    store: SweepstakeStore,
}

impl SweepstakeService {
    pub fn new(store: SweepstakeStore) -> Self {
        Self { store }
    }

    /// 活动列表，可选排序 (latest / ending-soon) 与类别 slug 过滤
    pub fn list(&self, query: &SweepstakeListQuery) -> AppResult<Vec<SweepstakeResponse>> {
        let category = match query.category.as_deref() {
            Some(slug) => Some(PrizeType::from_slug(slug).ok_or_else(|| {
                AppError::ValidationError(format!("Unknown category: {slug}"))
            })?),
            None => None,
        };

        let mut list = match query.sort.as_deref() {
            None => self.store.all(),
            Some("latest") => self.store.latest(usize::MAX),
            Some("ending-soon") => self.store.ending_soon(usize::MAX, Utc::now()),
            Some(other) => {
                return Err(AppError::ValidationError(format!("Unknown sort: {other}")));
            }
        };

        if let Some(category) = category {
            list.retain(|s| s.prize_type == category);
        }
        if let Some(limit) = query.limit {
            list.truncate(limit);
        }

        Ok(list.into_iter().map(Into::into).collect())
    }

    pub fn featured(&self, limit: Option<usize>) -> Vec<SweepstakeResponse> {
        self.store
            .featured(limit.unwrap_or(DEFAULT_FEATURED_LIMIT))
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub fn latest(&self, limit: Option<usize>) -> Vec<SweepstakeResponse> {
        self.store
            .latest(limit.unwrap_or(DEFAULT_LATEST_LIMIT))
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub fn ending_soon(&self, limit: Option<usize>) -> Vec<SweepstakeResponse> {
        self.store
            .ending_soon(limit.unwrap_or(DEFAULT_ENDING_SOON_LIMIT), Utc::now())
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// 活动详情：解析组织方、计算倒计时、取同类进行中的推荐
    pub fn detail(&self, id: &str) -> AppResult<SweepstakeDetailResponse> {
        let sweepstake = self
            .store
            .by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Sweepstake {id} not found")))?;
        let now = Utc::now();

        let organizer = self.store.organizer_by_id(&sweepstake.organizer_id);
        if organizer.is_none() {
            // 数据问题不应让详情页失败，返回 null 由前端按未知组织方展示
            log::warn!(
                "Sweepstake {} references unknown organizer {}",
                sweepstake.id,
                sweepstake.organizer_id
            );
        }

        let similar: Vec<SweepstakeResponse> = self
            .store
            .by_category(sweepstake.prize_type, None)
            .into_iter()
            .filter(|s| s.id != sweepstake.id && s.end_date > now)
            .take(SIMILAR_LIMIT)
            .map(Into::into)
            .collect();

        Ok(SweepstakeDetailResponse {
            organizer: organizer.map(Into::into),
            is_expired: sweepstake.end_date <= now,
            time_left: format_countdown(sweepstake.end_date, now),
            end_date_display: format_end_date(sweepstake.end_date),
            similar,
            sweepstake: sweepstake.into(),
        })
    }

    /// 提交新活动；id、创建时间、featured、组织方由仓库补齐
    pub fn create(&self, request: CreateSweepstakeRequest) -> AppResult<SweepstakeResponse> {
        if request.title.trim().is_empty() {
            return Err(AppError::ValidationError("Title must not be empty".into()));
        }
        if request.description.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Description must not be empty".into(),
            ));
        }
        if request.url.trim().is_empty() {
            return Err(AppError::ValidationError("URL must not be empty".into()));
        }
        if request.prize_value < 0 {
            return Err(AppError::ValidationError(
                "Prize value must be non-negative".into(),
            ));
        }

        let created = self
            .store
            .add(NewSweepstake {
                title: request.title,
                description: request.description,
                prize_type: request.prize_type,
                prize_value: request.prize_value,
                end_date: request.end_date,
                url: request.url,
            })
            .ok_or_else(|| AppError::InternalError("No organizers seeded".into()))?;

        Ok(created.into())
    }

    pub fn categories(&self) -> Vec<CategoryInfo> {
        self.store
            .categories()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// 类别页数据：按 slug 解析类别，进行中与已结束分开
    pub fn category_page(&self, slug: &str) -> AppResult<CategoryPageResponse> {
        let category = PrizeType::from_slug(slug)
            .ok_or_else(|| AppError::NotFound(format!("Unknown category: {slug}")))?;
        let now = Utc::now();
        let (active, expired): (Vec<_>, Vec<_>) = self
            .store
            .by_category(category, None)
            .into_iter()
            .partition(|s| s.end_date > now);

        Ok(CategoryPageResponse {
            category: category.into(),
            active: active.into_iter().map(Into::into).collect(),
            expired: expired.into_iter().map(Into::into).collect(),
        })
    }

    pub fn statistics(&self) -> SiteStatisticsResponse {
        let stats = self.store.statistics(Utc::now());
        SiteStatisticsResponse {
            active_sweepstakes_count: stats.active_count,
            total_prizes_count: stats.prize_count,
            total_prize_value: stats.total_value,
        }
    }
}
