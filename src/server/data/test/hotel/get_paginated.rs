use super::*;

/// Tests the default listing is ordered by name with correct totals.
///
/// Expected: Ok((hotels, 3)) in name order
#[tokio::test]
async fn orders_by_name_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    for name in ["Cedar Lodge", "Alpine Inn", "Bay Hotel"] {
        HotelFactory::new(db, country.id).name(name).build().await?;
    }

    let repo = HotelRepository::new(db);
    let (hotels, total) = repo
        .get_paginated(&HotelFilter::default(), PageRequest::default())
        .await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Alpine Inn", "Bay Hotel", "Cedar Lodge"]);

    Ok(())
}

/// Tests rating, price, country and search filters.
///
/// Expected: only hotels matching every filter
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let other_country = factory::create_country(db).await?;

    HotelFactory::new(db, country.id)
        .name("Seaside Resort")
        .address("Beach Road 1")
        .rating(4.8)
        .per_night_rate(25_000)
        .build()
        .await?;
    HotelFactory::new(db, country.id)
        .name("City Hostel")
        .address("Main Street 5")
        .rating(2.5)
        .per_night_rate(3_000)
        .build()
        .await?;
    HotelFactory::new(db, other_country.id)
        .name("Seaside Motel")
        .address("Beach Road 9")
        .rating(4.1)
        .per_night_rate(9_000)
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    let filter = HotelFilter {
        minimum_rating: Some(4.0),
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(&filter, PageRequest::default()).await?;
    assert_eq!(total, 2);

    let filter = HotelFilter {
        country_id: Some(country.id),
        search: Some("seaside".to_string()),
        ..Default::default()
    };
    let (hotels, total) = repo.get_paginated(&filter, PageRequest::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(hotels[0].name, "Seaside Resort");

    let filter = HotelFilter {
        location: Some("Beach".to_string()),
        max_price: Some(10_000),
        ..Default::default()
    };
    let (hotels, total) = repo.get_paginated(&filter, PageRequest::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(hotels[0].name, "Seaside Motel");

    Ok(())
}

/// Tests a country's hotels are searched by name and sorted by rating.
///
/// Expected: only the country's matching hotels, highest rating first
#[tokio::test]
async fn pages_hotels_of_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let other_country = factory::create_country(db).await?;

    HotelFactory::new(db, country.id)
        .name("Park Hotel")
        .rating(3.0)
        .build()
        .await?;
    HotelFactory::new(db, country.id)
        .name("Park Suites")
        .rating(4.5)
        .build()
        .await?;
    HotelFactory::new(db, country.id)
        .name("River Inn")
        .rating(5.0)
        .build()
        .await?;
    HotelFactory::new(db, other_country.id)
        .name("Park Plaza")
        .build()
        .await?;

    let filter = CountryHotelsFilter {
        search: Some("Park".to_string()),
        sort: Some((HotelSortField::Rating, true)),
    };

    let repo = HotelRepository::new(db);
    let (hotels, total) = repo
        .get_paginated_by_country(country.id, &filter, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(hotels[0].name, "Park Suites");
    assert_eq!(hotels[1].name, "Park Hotel");

    Ok(())
}
