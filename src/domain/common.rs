//! Shared traits for recycling entities.

/// Supplies a common contract for retrieving recycled weight in kilograms.
pub trait Weighed {
    fn weight_kg(&self) -> f64;
}

/// Supplies a common contract for retrieving earned eco-points.
pub trait Scored {
    fn eco_points(&self) -> u64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Sums the weight of every item, returning `0.0` for an empty iterator.
pub fn sum_weight<'a, T, I>(items: I) -> f64
where
    T: Weighed + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Weighed::weight_kg).sum()
}

/// Sums the points of every item, saturating instead of overflowing.
pub fn sum_points<'a, T, I>(items: I) -> u64
where
    T: Scored + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(0u64, |total, item| total.saturating_add(item.eco_points()))
}
