use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::rngs::StdRng;

use crate::models::{Organizer, PrizeType, Sweepstake};

use super::generate_id;

/// 种子组织方，六家，id 稳定不变
pub(crate) fn seed_organizers() -> Vec<Organizer> {
    vec![
        Organizer {
            id: "1".to_string(),
            name: "TechGiant".to_string(),
            logo: "/logos/techgiant.png".to_string(),
        },
        Organizer {
            id: "2".to_string(),
            name: "TravelDreams".to_string(),
            logo: "/logos/traveldreams.png".to_string(),
        },
        Organizer {
            id: "3".to_string(),
            name: "LuxuryLifestyle".to_string(),
            logo: "/logos/luxurylifestyle.png".to_string(),
        },
        Organizer {
            id: "4".to_string(),
            name: "GreenEnergy".to_string(),
            logo: "/logos/greenenergy.png".to_string(),
        },
        Organizer {
            id: "5".to_string(),
            name: "FashionForward".to_string(),
            logo: "/logos/fashionforward.png".to_string(),
        },
        Organizer {
            id: "6".to_string(),
            name: "FoodieParadise".to_string(),
            logo: "/logos/foodieparadise.png".to_string(),
        },
    ]
}

/// 种子活动，五条，截止/创建时间相对参考时间计算
pub(crate) fn seed_sweepstakes(now: DateTime<Utc>, rng: &mut StdRng) -> Vec<Sweepstake> {
    vec![
        Sweepstake {
            id: generate_id(rng),
            title: "Win a Trip to Hawaii".to_string(),
            description: "Enter for a chance to win a luxurious vacation in Hawaii!".to_string(),
            prize_type: PrizeType::Travel,
            prize_value: 5000,
            end_date: now + Duration::days(30),
            url: "https://example.com/hawaii-sweepstakes".to_string(),
            created_at: now - Duration::days(5),
            featured: true,
            organizer_id: "2".to_string(),
        },
        Sweepstake {
            id: generate_id(rng),
            title: "$10,000 Cash Giveaway".to_string(),
            description: "You could be the lucky winner of $10,000 in cash!".to_string(),
            prize_type: PrizeType::Cash,
            prize_value: 10000,
            end_date: now + Duration::days(15),
            url: "https://example.com/cash-giveaway".to_string(),
            created_at: now - Duration::days(2),
            featured: true,
            organizer_id: "1".to_string(),
        },
        Sweepstake {
            id: generate_id(rng),
            title: "New Car Sweepstakes".to_string(),
            description: "Win a brand new electric car and drive in style!".to_string(),
            prize_type: PrizeType::Vehicle,
            prize_value: 45000,
            end_date: now + Duration::days(60),
            url: "https://example.com/car-sweepstakes".to_string(),
            created_at: now - Duration::days(1),
            featured: true,
            organizer_id: "4".to_string(),
        },
        Sweepstake {
            id: generate_id(rng),
            title: "Luxury Watch Giveaway".to_string(),
            description: "Enter to win a premium luxury watch worth $5,000!".to_string(),
            prize_type: PrizeType::Other,
            prize_value: 5000,
            end_date: now + Duration::days(10),
            url: "https://example.com/watch-giveaway".to_string(),
            created_at: now - Duration::days(3),
            featured: false,
            organizer_id: "3".to_string(),
        },
        Sweepstake {
            id: generate_id(rng),
            title: "Home Makeover Contest".to_string(),
            description: "Win a complete home makeover worth $50,000!".to_string(),
            prize_type: PrizeType::Home,
            prize_value: 50000,
            end_date: now + Duration::days(45),
            url: "https://example.com/home-makeover".to_string(),
            created_at: now - Duration::days(7),
            featured: false,
            organizer_id: "5".to_string(),
        },
    ]
}

/// 合成填充活动
///
/// 取值范围: 价值 1000..=10999 美元，截止 now + 1..=90 天，
/// 创建 now - 1..=30 天；类别与组织方均匀随机。
pub(crate) fn synthetic_sweepstakes(
    now: DateTime<Utc>,
    count: usize,
    organizers: &[Organizer],
    rng: &mut StdRng,
) -> Vec<Sweepstake> {
    (0..count)
        .map(|i| {
            let n = i + 1;
            Sweepstake {
                id: generate_id(rng),
                title: format!("Sweepstake #{n}"),
                description: format!(
                    "This is a description for Sweepstake #{n}. Enter now for a chance to win!"
                ),
                prize_type: PrizeType::ALL[rng.gen_range(0..PrizeType::ALL.len())],
                prize_value: rng.gen_range(1000..=10999),
                end_date: now + Duration::days(rng.gen_range(1..=90)),
                url: format!("https://example.com/sweepstake-{n}"),
                created_at: now - Duration::days(rng.gen_range(1..=30)),
                featured: false,
                organizer_id: organizers[rng.gen_range(0..organizers.len())].id.clone(),
            }
        })
        .collect()
}
