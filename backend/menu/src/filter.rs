use crate::{catalog::Catalog, items::MenuItem};

/// Optional constraints parsed from one request. `None` leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub availability: Option<bool>,
    pub min_servings: Option<i64>,
    pub max_servings: Option<i64>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Filtered<'a> {
    pub items: Vec<&'a MenuItem>,
    pub count: usize,
}

enum Predicate {
    NameContains(String),
    CategoryIs(String),
    CuisineIs(String),
    PriceAtLeast(i64),
    PriceAtMost(i64),
    Availability(bool),
    ServingsAtLeast(i64),
    ServingsAtMost(i64),
}

impl Predicate {
    fn test(&self, item: &MenuItem) -> bool {
        match self {
            Predicate::NameContains(needle) => item.name.to_lowercase().contains(needle),
            Predicate::CategoryIs(category) => item.category.to_lowercase() == *category,
            Predicate::CuisineIs(cuisine) => item.cuisine.to_lowercase() == *cuisine,
            Predicate::PriceAtLeast(min) => i64::from(item.price) >= *min,
            Predicate::PriceAtMost(max) => i64::from(item.price) <= *max,
            Predicate::Availability(available) => item.availability == *available,
            Predicate::ServingsAtLeast(min) => i64::from(item.servings) >= *min,
            Predicate::ServingsAtMost(max) => i64::from(item.servings) <= *max,
        }
    }
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True iff `item` passes every present constraint.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.predicates().iter().all(|predicate| predicate.test(item))
    }

    // Text constraints are lowercased once here, items per test.
    fn predicates(&self) -> Vec<Predicate> {
        let lower = |value: &Option<String>| value.as_deref().map(str::to_lowercase);

        [
            lower(&self.name).map(Predicate::NameContains),
            lower(&self.category).map(Predicate::CategoryIs),
            lower(&self.cuisine).map(Predicate::CuisineIs),
            self.min_price.map(Predicate::PriceAtLeast),
            self.max_price.map(Predicate::PriceAtMost),
            self.availability.map(Predicate::Availability),
            self.min_servings.map(Predicate::ServingsAtLeast),
            self.max_servings.map(Predicate::ServingsAtMost),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Items of `catalog` satisfying all of `constraints`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, constraints: &Constraints) -> Filtered<'a> {
    let predicates = constraints.predicates();

    let items: Vec<&MenuItem> = catalog
        .items()
        .iter()
        .filter(|item| predicates.iter().all(|predicate| predicate.test(item)))
        .collect();

    Filtered {
        count: items.len(),
        items,
    }
}
