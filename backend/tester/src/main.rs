use chrono::{Duration, Utc};
use listings::{BANK_FILE, Listing, ListingKind, ListingStatus, write_listings};

fn sale(
    id: &str,
    category: &str,
    breed: &str,
    gender: &str,
    age: &str,
    quality: &str,
    location: &str,
    price: u64,
    status: ListingStatus,
    days_ago: i64,
) -> Listing {
    Listing {
        id: id.to_string(),
        kind: ListingKind::Sale,
        category: category.to_string(),
        breed: breed.to_string(),
        gender: gender.to_string(),
        age: age.to_string(),
        quality: quality.to_string(),
        location: location.to_string(),
        price: Some(price),
        breeder: None,
        status,
        photos: vec![format!("https://img.pawmart.dev/{id}/1.jpg")],
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

fn mating(id: &str, breed: &str, gender: &str, breeder: &str, days_ago: i64) -> Listing {
    Listing {
        id: id.to_string(),
        kind: ListingKind::Mating,
        category: "Dog".to_string(),
        breed: breed.to_string(),
        gender: gender.to_string(),
        age: "3 years".to_string(),
        quality: "Show".to_string(),
        location: "Boston".to_string(),
        price: None,
        breeder: Some(breeder.to_string()),
        status: ListingStatus::Available,
        photos: vec![format!("https://img.pawmart.dev/{id}/1.jpg")],
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

fn main() {
    let listings = vec![
        sale(
            "lab-1",
            "Dog",
            "Labrador",
            "Male",
            "2 years",
            "Pet",
            "Austin",
            20000,
            ListingStatus::Available,
            3,
        ),
        sale(
            "pug-1",
            "Dog",
            "Pug",
            "Female",
            "1 years",
            "Pet",
            "Austin",
            15000,
            ListingStatus::Available,
            1,
        ),
        sale(
            "husky-1",
            "Dog",
            "Husky",
            "Male",
            "unknown",
            "Show",
            "Denver",
            30000,
            ListingStatus::Sold,
            20,
        ),
        sale(
            "siamese-1",
            "Cat",
            "Siamese",
            "Female",
            "6 months",
            "Pet",
            "Boston",
            9000,
            ListingStatus::Available,
            7,
        ),
        sale(
            "macaw-1",
            "Bird",
            "Macaw",
            "Male",
            "5 years",
            "",
            "Miami",
            45000,
            ListingStatus::Pending,
            12,
        ),
        mating("dam-1", "Labrador", "Female", "Hillside Kennels", 2),
        mating("stud-1", "Beagle", "Male", "Riverbend Kennels", 9),
    ];

    println!("Seed listings: {}", listings.len());

    write_listings(format!("../{BANK_FILE}"), &listings).unwrap();

    println!("Wrote ../{BANK_FILE}");
}
