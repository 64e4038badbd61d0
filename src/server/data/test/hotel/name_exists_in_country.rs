use super::*;

/// Tests duplicate names are matched ignoring case and surrounding whitespace.
///
/// Expected: Ok(true) within the country, Ok(false) in another country
#[tokio::test]
async fn matches_case_insensitively_within_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let other_country = factory::create_country(db).await?;
    HotelFactory::new(db, country.id)
        .name("Grand Hotel")
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    assert!(
        repo.name_exists_in_country("  grand HOTEL ", country.id, None)
            .await?
    );
    assert!(
        !repo
            .name_exists_in_country("Grand Hotel", other_country.id, None)
            .await?
    );

    Ok(())
}

/// Tests the hotel being renamed does not conflict with itself.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let hotel = HotelFactory::new(db, country.id)
        .name("Grand Hotel")
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let exists = repo
        .name_exists_in_country("Grand Hotel", country.id, Some(hotel.id))
        .await?;

    assert!(!exists);

    Ok(())
}
