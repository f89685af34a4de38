mod seed;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SeedConfig;
use crate::models::{Organizer, PrizeType, Sweepstake};

/// 站点统计，只统计截止时间严格晚于参考时间的活动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteStatistics {
    pub active_count: u64,
    /// 每个活动计一个奖品，等于 active_count
    pub prize_count: u64,
    pub total_value: i64,
}

/// 新增活动时调用方提供的字段；id、创建时间、featured、组织方由仓库补齐
#[derive(Debug, Clone)]
pub struct NewSweepstake {
    pub title: String,
    pub description: String,
    pub prize_type: PrizeType,
    pub prize_value: i64,
    pub end_date: DateTime<Utc>,
    pub url: String,
}

struct StoreInner {
    sweepstakes: Vec<Sweepstake>,
    organizers: Vec<Organizer>,
    rng: StdRng,
}

/// 内存样本数据仓库
///
/// 构造时一次性写入种子数据并生成合成数据，之后进程生命周期内常驻。
/// 查询全部走读锁并发执行；唯一的写操作 `add` 持写锁追加，
/// 不存在更新与删除。排序查询均为稳定排序，键相同保持插入顺序，
/// 固定随机种子时结果可完全复现。
#[derive(Clone)]
pub struct SweepstakeStore {
    inner: Arc<RwLock<StoreInner>>,
}

/// 由仓库自身的随机源生成 UUID，固定种子时 id 可复现
fn generate_id(rng: &mut StdRng) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

impl SweepstakeStore {
    pub fn new(config: &SeedConfig) -> Self {
        Self::seeded_at(Utc::now(), config)
    }

    /// 以指定参考时间构造；测试用固定时间+固定种子获得可复现内容
    pub fn seeded_at(now: DateTime<Utc>, config: &SeedConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let organizers = seed::seed_organizers();
        let mut sweepstakes = seed::seed_sweepstakes(now, &mut rng);
        sweepstakes.extend(seed::synthetic_sweepstakes(
            now,
            config.synthetic_count,
            &organizers,
            &mut rng,
        ));

        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                sweepstakes,
                organizers,
                rng,
            })),
        }
    }

    /// 全部活动，插入顺序
    pub fn all(&self) -> Vec<Sweepstake> {
        self.inner.read().sweepstakes.clone()
    }

    /// featured 活动，保持插入顺序，最多 limit 条
    pub fn featured(&self, limit: usize) -> Vec<Sweepstake> {
        self.inner
            .read()
            .sweepstakes
            .iter()
            .filter(|s| s.featured)
            .take(limit)
            .cloned()
            .collect()
    }

    /// 最新活动，按创建时间倒序，最多 limit 条
    pub fn latest(&self, limit: usize) -> Vec<Sweepstake> {
        let mut list = self.inner.read().sweepstakes.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list.truncate(limit);
        list
    }

    /// 即将截止的活动：只含截止时间严格晚于 now 的，按截止时间升序
    pub fn ending_soon(&self, limit: usize, now: DateTime<Utc>) -> Vec<Sweepstake> {
        let mut list: Vec<Sweepstake> = self
            .inner
            .read()
            .sweepstakes
            .iter()
            .filter(|s| s.end_date > now)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.end_date.cmp(&b.end_date));
        list.truncate(limit);
        list
    }

    pub fn by_id(&self, id: &str) -> Option<Sweepstake> {
        self.inner
            .read()
            .sweepstakes
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// 按类别过滤，保持插入顺序
    pub fn by_category(&self, category: PrizeType, limit: Option<usize>) -> Vec<Sweepstake> {
        let inner = self.inner.read();
        let iter = inner
            .sweepstakes
            .iter()
            .filter(|s| s.prize_type == category)
            .cloned();
        match limit {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        }
    }

    /// 某组织方名下全部活动，插入顺序
    pub fn by_organizer(&self, organizer_id: &str) -> Vec<Sweepstake> {
        self.inner
            .read()
            .sweepstakes
            .iter()
            .filter(|s| s.organizer_id == organizer_id)
            .cloned()
            .collect()
    }

    /// 固定类别枚举，与数据无关
    pub fn categories(&self) -> [PrizeType; 7] {
        PrizeType::ALL
    }

    pub fn statistics(&self, now: DateTime<Utc>) -> SiteStatistics {
        let inner = self.inner.read();
        let mut active_count = 0u64;
        let mut total_value = 0i64;
        for s in inner.sweepstakes.iter().filter(|s| s.end_date > now) {
            active_count += 1;
            total_value += s.prize_value;
        }
        SiteStatistics {
            active_count,
            prize_count: active_count,
            total_value,
        }
    }

    /// 按名下活动数倒序返回组织方；次数相同保持种子顺序，无活动的排最后
    pub fn top_organizers(&self, limit: usize) -> Vec<Organizer> {
        let inner = self.inner.read();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for s in &inner.sweepstakes {
            *counts.entry(s.organizer_id.as_str()).or_insert(0) += 1;
        }
        let mut organizers = inner.organizers.clone();
        organizers
            .sort_by_key(|o| std::cmp::Reverse(counts.get(o.id.as_str()).copied().unwrap_or(0)));
        organizers.truncate(limit);
        organizers
    }

    pub fn organizer_by_id(&self, id: &str) -> Option<Organizer> {
        self.inner
            .read()
            .organizers
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// 追加一条活动；组织方从种子集合均匀随机选取。
    /// 组织方集合为空时返回 None（正常构造下不会发生）。
    pub fn add(&self, new: NewSweepstake) -> Option<Sweepstake> {
        let mut inner = self.inner.write();
        if inner.organizers.is_empty() {
            return None;
        }
        let organizer_idx = {
            let len = inner.organizers.len();
            inner.rng.gen_range(0..len)
        };
        let organizer_id = inner.organizers[organizer_idx].id.clone();
        let sweepstake = Sweepstake {
            id: generate_id(&mut inner.rng),
            title: new.title,
            description: new.description,
            prize_type: new.prize_type,
            prize_value: new.prize_value,
            end_date: new.end_date,
            url: new.url,
            created_at: Utc::now(),
            featured: false,
            organizer_id,
        };
        inner.sweepstakes.push(sweepstake.clone());
        Some(sweepstake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn seeded_store(synthetic_count: usize) -> (SweepstakeStore, DateTime<Utc>) {
        let now = fixed_now();
        let config = SeedConfig {
            synthetic_count,
            rng_seed: Some(42),
        };
        (SweepstakeStore::seeded_at(now, &config), now)
    }

    fn new_request(end_date: DateTime<Utc>) -> NewSweepstake {
        NewSweepstake {
            title: "PS5 Bundle Giveaway".to_string(),
            description: "Win a PS5 with two controllers and five games!".to_string(),
            prize_type: PrizeType::Electronics,
            prize_value: 800,
            end_date,
            url: "https://example.com/ps5-bundle".to_string(),
        }
    }

    #[test]
    fn test_seed_counts() {
        let (store, _) = seeded_store(20);
        assert_eq!(store.all().len(), 25);
        assert_eq!(store.top_organizers(100).len(), 6);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let (store, _) = seeded_store(20);
        let ids: HashSet<String> = store.all().into_iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_featured_reference_scenario() {
        // 五条种子数据中恰好前三条是 featured，顺序与相对位置保持不变
        let (store, _) = seeded_store(0);
        let featured = store.featured(3);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].title, "Win a Trip to Hawaii");
        assert_eq!(featured[0].prize_type, PrizeType::Travel);
        assert_eq!(featured[0].prize_value, 5000);
        assert_eq!(featured[1].title, "$10,000 Cash Giveaway");
        assert_eq!(featured[1].prize_value, 10000);
        assert_eq!(featured[2].title, "New Car Sweepstakes");
        assert_eq!(featured[2].prize_value, 45000);
        assert!(featured.iter().all(|s| s.featured));
    }

    #[test]
    fn test_limit_truncation() {
        let (store, now) = seeded_store(20);
        let featured_total = store.all().iter().filter(|s| s.featured).count();
        let active_total = store.all().iter().filter(|s| s.end_date > now).count();
        for limit in [0usize, 1, 3, 10, 100] {
            assert_eq!(store.featured(limit).len(), limit.min(featured_total));
            assert_eq!(store.latest(limit).len(), limit.min(25));
            assert_eq!(store.ending_soon(limit, now).len(), limit.min(active_total));
        }
    }

    #[test]
    fn test_latest_sorted_descending_and_stable() {
        let (store, _) = seeded_store(20);
        let all = store.all();
        let position: HashMap<&str, usize> = all
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.as_str(), i))
            .collect();

        let latest = store.latest(25);
        assert_eq!(latest.len(), 25);
        for pair in latest.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
            if pair[0].created_at == pair[1].created_at {
                // 创建时间相同则保持插入顺序
                assert!(position[pair[0].id.as_str()] < position[pair[1].id.as_str()]);
            }
        }
    }

    #[test]
    fn test_ending_soon_strictly_future_and_sorted() {
        let (store, now) = seeded_store(20);
        let soon = store.ending_soon(100, now);
        assert!(soon.iter().all(|s| s.end_date > now));
        for pair in soon.windows(2) {
            assert!(pair[0].end_date <= pair[1].end_date);
        }
        // 参考时间晚于一切截止时间时结果为空
        assert!(store.ending_soon(100, now + Duration::days(365)).is_empty());
    }

    #[test]
    fn test_ending_soon_excludes_boundary() {
        let (store, now) = seeded_store(0);
        // 恰好等于截止时间的活动不算进行中
        let hawaii_end = now + Duration::days(30);
        let soon = store.ending_soon(100, hawaii_end);
        assert!(soon.iter().all(|s| s.title != "Win a Trip to Hawaii"));
    }

    #[test]
    fn test_statistics_matches_active_subset() {
        let (store, now) = seeded_store(20);
        let all = store.all();
        let expected_count = all.iter().filter(|s| s.end_date > now).count() as u64;
        let expected_value: i64 = all
            .iter()
            .filter(|s| s.end_date > now)
            .map(|s| s.prize_value)
            .sum();

        let stats = store.statistics(now);
        assert_eq!(stats.active_count, expected_count);
        assert_eq!(stats.prize_count, expected_count);
        assert_eq!(stats.total_value, expected_value);
    }

    #[test]
    fn test_statistics_with_everything_expired() {
        let (store, now) = seeded_store(20);
        let stats = store.statistics(now + Duration::days(365));
        assert_eq!(stats.active_count, 0);
        assert_eq!(stats.prize_count, 0);
        assert_eq!(stats.total_value, 0);
    }

    #[test]
    fn test_add_appends_one_record() {
        let (store, now) = seeded_store(20);
        let existing: HashSet<String> = store.all().into_iter().map(|s| s.id).collect();

        let before = Utc::now();
        let created = store.add(new_request(now + Duration::days(14))).unwrap();
        let after = Utc::now();

        assert_eq!(store.all().len(), existing.len() + 1);
        assert!(!existing.contains(&created.id));
        assert!(!created.featured);
        assert!(created.created_at >= before && created.created_at <= after);
        // 组织方一定取自种子集合
        assert!(store.organizer_by_id(&created.organizer_id).is_some());
        // 追加后可按 id 查回
        assert_eq!(store.by_id(&created.id), Some(created));
    }

    #[test]
    fn test_category_partition() {
        let (store, _) = seeded_store(20);
        let mut total = 0;
        for category in PrizeType::ALL {
            let list = store.by_category(category, None);
            assert!(list.iter().all(|s| s.prize_type == category));
            total += list.len();
        }
        // 七个类别的并集恰好是全部活动
        assert_eq!(total, store.all().len());
    }

    #[test]
    fn test_by_category_limit() {
        let (store, _) = seeded_store(20);
        let cash_total = store.by_category(PrizeType::Cash, None).len();
        assert_eq!(
            store.by_category(PrizeType::Cash, Some(1)).len(),
            cash_total.min(1)
        );
        assert!(store.by_category(PrizeType::Cash, Some(0)).is_empty());
    }

    #[test]
    fn test_categories_fixed_order() {
        let (store, _) = seeded_store(0);
        assert_eq!(store.categories(), PrizeType::ALL);
        let (store, _) = seeded_store(20);
        assert_eq!(
            store.categories(),
            [
                PrizeType::Cash,
                PrizeType::Travel,
                PrizeType::Electronics,
                PrizeType::Vehicle,
                PrizeType::Home,
                PrizeType::GiftCard,
                PrizeType::Other,
            ]
        );
    }

    #[test]
    fn test_top_organizers_stable_on_seed_data() {
        // 纯种子数据下前五家各一条活动，第六家没有：
        // 次数相同保持种子顺序，零活动的排最后
        let (store, _) = seeded_store(0);
        let ids: Vec<String> = store
            .top_organizers(6)
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        let top3: Vec<String> = store
            .top_organizers(3)
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(top3, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_top_organizers_ranked_by_count() {
        let (store, _) = seeded_store(20);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for s in store.all() {
            *counts.entry(s.organizer_id).or_insert(0) += 1;
        }
        let top = store.top_organizers(6);
        for pair in top.windows(2) {
            let a = counts.get(&pair[0].id).copied().unwrap_or(0);
            let b = counts.get(&pair[1].id).copied().unwrap_or(0);
            assert!(a >= b);
        }
    }

    #[test]
    fn test_lookups_not_found() {
        let (store, _) = seeded_store(0);
        assert!(store.by_id("no-such-id").is_none());
        assert!(store.organizer_by_id("99").is_none());
        assert!(store.organizer_by_id("3").is_some());
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let now = fixed_now();
        let config = SeedConfig {
            synthetic_count: 20,
            rng_seed: Some(7),
        };
        let a = SweepstakeStore::seeded_at(now, &config);
        let b = SweepstakeStore::seeded_at(now, &config);
        assert_eq!(a.all(), b.all());
        assert_eq!(a.top_organizers(6), b.top_organizers(6));
    }

    #[test]
    fn test_synthetic_values_within_documented_ranges() {
        let (store, now) = seeded_store(50);
        for s in store.all().into_iter().skip(5) {
            assert!((1000..=10999).contains(&s.prize_value));
            assert!(s.end_date > now && s.end_date <= now + Duration::days(90));
            assert!(s.created_at < now && s.created_at >= now - Duration::days(30));
            assert!(!s.featured);
            assert!(store.organizer_by_id(&s.organizer_id).is_some());
        }
    }
}
