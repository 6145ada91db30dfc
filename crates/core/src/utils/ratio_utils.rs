use std::collections::BTreeMap;

/// Amounts keyed by portfolio name.
///
/// A `BTreeMap` keeps iteration order stable, so printed and serialized
/// allocations are reproducible between runs.
pub type PortfolioAmounts = BTreeMap<String, f64>;

/// Sums every amount in the map.
pub fn sum_amounts(amounts: &PortfolioAmounts) -> f64 {
    amounts.values().sum()
}

/// Returns each portfolio's share of the map total.
///
/// When the total is zero every portfolio gets a ratio of 0.0 instead of
/// dividing by zero. Keys are always preserved.
pub fn allocation_ratios(amounts: &PortfolioAmounts) -> PortfolioAmounts {
    let total = sum_amounts(amounts);
    if total == 0.0 {
        return amounts.keys().map(|name| (name.clone(), 0.0)).collect();
    }

    amounts
        .iter()
        .map(|(name, amount)| (name.clone(), amount / total))
        .collect()
}

/// Adds every amount in `source` onto `target`, inserting missing portfolios.
pub fn merge_amounts(target: &mut PortfolioAmounts, source: &PortfolioAmounts) {
    for (name, amount) in source {
        *target.entry(name.clone()).or_insert(0.0) += amount;
    }
}

/// Adds `ratio * amount` onto `target` for every portfolio in `ratios`.
pub fn distribute_by_ratio(target: &mut PortfolioAmounts, ratios: &PortfolioAmounts, amount: f64) {
    for (name, ratio) in ratios {
        *target.entry(name.clone()).or_insert(0.0) += ratio * amount;
    }
}
