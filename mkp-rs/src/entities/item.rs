use anyhow::{Result, ensure};

/// Item which can be placed in at most one [`Knapsack`](crate::entities::Knapsack).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    /// Unique identifier, equal to the position of the item in the [`MKInstance`](crate::entities::MKInstance)
    pub id: usize,
    /// Value gained by placing the item
    pub value: f64,
    /// Capacity the item consumes in the knapsack it is placed in
    pub weight: f64,
    /// Value per unit of weight
    pub density: f64,
}

impl Item {
    /// Creates a new item. Both `value` and `weight` have to be strictly positive and finite.
    pub fn new(id: usize, value: f64, weight: f64) -> Result<Item> {
        ensure!(
            value.is_finite() && value > 0.0,
            "item {id} has an invalid value: {value}, should be strictly positive"
        );
        ensure!(
            weight.is_finite() && weight > 0.0,
            "item {id} has an invalid weight: {weight}, should be strictly positive"
        );
        Ok(Item {
            id,
            value,
            weight,
            density: value / weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn density_is_derived() {
        let item = Item::new(1, 50.0, 12.0).unwrap();
        assert_eq!(item.density, 50.0 / 12.0);
    }

    #[test_case(0.0, 1.0; "zero value")]
    #[test_case(-3.0, 1.0; "negative value")]
    #[test_case(1.0, 0.0; "zero weight")]
    #[test_case(1.0, -2.0; "negative weight")]
    #[test_case(f64::NAN, 1.0; "nan value")]
    #[test_case(1.0, f64::INFINITY; "infinite weight")]
    fn invalid_items_are_rejected(value: f64, weight: f64) {
        assert!(Item::new(0, value, weight).is_err());
    }
}
