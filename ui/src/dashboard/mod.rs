// Dashboard stat cards

#[derive(Clone, PartialEq, Debug)]
pub struct StatItem {
    pub name: &'static str,
    pub percentage: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct StatCardData {
    pub title: &'static str,
    pub count: Option<u64>,
    /// Growth in percent
    pub growth: Option<u32>,
    pub items: Vec<StatItem>,
}

impl StatCardData {
    fn counter(title: &'static str, count: u64, growth: u32) -> Self {
        Self {
            title,
            count: Some(count),
            growth: Some(growth),
            items: Vec::new(),
        }
    }

    fn breakdown(title: &'static str, items: &[(&'static str, u32)]) -> Self {
        Self {
            title,
            count: None,
            growth: None,
            items: items
                .iter()
                .map(|(name, percentage)| StatItem {
                    name,
                    percentage: *percentage,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UserTotals {
    pub registered: u64,
    pub verified: u64,
}

pub const USER_TOTALS: UserTotals = UserTotals {
    registered: 2_534_754,
    verified: 1_938_242,
};

pub fn default_stats() -> Vec<StatCardData> {
    vec![
        StatCardData::counter("Users Registered in the Last Week", 228_643, 128),
        StatCardData::counter("New Found Tribes in the Past Week", 15, 10),
        StatCardData::breakdown(
            "Main Resources Received by Ajal Tribe This Week",
            &[("Rice", 30), ("Beans", 20), ("Water", 50)],
        ),
        StatCardData::counter("Posts Created in the Last Week", 843, 16),
        StatCardData::counter("New Donations This Week", 237, 40),
        StatCardData::counter("Volunteers Joined This Month", 76, 25),
        StatCardData::breakdown(
            "Resources Distributed to Jivara Tribe This Week",
            &[("Maize", 40), ("Fishing Nets", 30), ("Tents", 30)],
        ),
    ]
}

/// Group digits in threes with a space: `2534754` -> `"2 534 754"`
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(2_534_754), "2 534 754");
        assert_eq!(format_grouped(1_938_242), "1 938 242");
        assert_eq!(format_grouped(100_000), "100 000");
        assert_eq!(format_grouped(843), "843");
        assert_eq!(format_grouped(1000), "1 000");
        assert_eq!(format_grouped(0), "0");
    }

    #[test]
    fn test_default_stats() {
        let stats = default_stats();
        assert_eq!(stats.len(), 7);
        assert_eq!(stats[0].count, Some(228_643));
        for card in stats.iter().filter(|c| !c.items.is_empty()) {
            assert_eq!(card.count, None);
            let total: u32 = card.items.iter().map(|i| i.percentage).sum();
            assert_eq!(total, 100);
        }
    }
}
