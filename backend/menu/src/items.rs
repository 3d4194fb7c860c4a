use serde::{Deserialize, Serialize};

/// One dish on the menu. Field order is the order of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: u32,
    pub cuisine: String,
    pub availability: bool,
    pub servings: u32,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: &str,
        category: &str,
        price: u32,
        cuisine: &str,
        availability: bool,
        servings: u32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            cuisine: cuisine.to_string(),
            availability,
            servings,
        }
    }
}

pub fn sample_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Chicken Biryani", "Main Course", 25, "Indian", true, 4),
        MenuItem::new(2, "Pasta Alfredo", "Main Course", 18, "Italian", true, 2),
        MenuItem::new(3, "Caesar Salad", "Appetizer", 12, "Continental", false, 2),
        MenuItem::new(4, "Chocolate Cake", "Dessert", 15, "Continental", true, 6),
        MenuItem::new(5, "Samosa Platter", "Appetizer", 8, "Indian", true, 4),
        MenuItem::new(6, "Grilled Salmon", "Main Course", 32, "Continental", true, 1),
        MenuItem::new(7, "Mango Kulfi", "Dessert", 6, "Indian", true, 2),
        MenuItem::new(8, "Pizza Margherita", "Main Course", 22, "Italian", true, 3),
        MenuItem::new(9, "Tiramisu", "Dessert", 10, "Italian", false, 4),
        MenuItem::new(10, "Garlic Bread", "Appetizer", 5, "Italian", true, 4),
        MenuItem::new(11, "Butter Chicken", "Main Course", 28, "Indian", true, 3),
        MenuItem::new(12, "Spring Rolls", "Appetizer", 9, "Chinese", true, 6),
        MenuItem::new(13, "Fried Rice", "Main Course", 16, "Chinese", true, 2),
        MenuItem::new(14, "Ice Cream Sundae", "Dessert", 8, "Continental", true, 1),
        MenuItem::new(15, "Tandoori Chicken", "Main Course", 30, "Indian", false, 2),
    ]
}
