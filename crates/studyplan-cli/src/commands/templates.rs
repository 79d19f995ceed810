//! Template listing command for CLI.

use studyplan_core::{templates_for, Category};

pub fn run(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let categories: Vec<Category> = match category {
        Some(name) => vec![Category::from_name(name)],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        println!("{category}:");
        for (i, t) in templates_for(category).iter().enumerate() {
            println!(
                "  {}. {:<20} {}h  {}",
                i + 1,
                t.title,
                t.duration_hours,
                t.priority
            );
        }
    }
    Ok(())
}
