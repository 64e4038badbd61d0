use super::*;

fn update_params(id: i32, country_id: i32, name: &str) -> UpdateHotelParams {
    UpdateHotelParams {
        id,
        name: name.to_string(),
        address: "2 Hill Street".to_string(),
        rating: 3.0,
        per_night_rate: Decimal::new(8_000, 2),
        country_id,
    }
}

/// Tests every field of a hotel is replaced, including its country.
///
/// Expected: Ok(Hotel) with the new values
#[tokio::test]
async fn replaces_hotel_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    let new_country = factory::create_country(db).await?;

    let updated = HotelService::new(db)
        .update(hotel.id, update_params(hotel.id, new_country.id, "Renamed"))
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address, "2 Hill Street");
    assert_eq!(updated.rating, 3.0);
    assert_eq!(updated.per_night_rate, Decimal::new(8_000, 2));
    assert_eq!(updated.country_id, new_country.id);

    Ok(())
}

/// Tests the route ID must match the body ID.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_id_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;

    let result = HotelService::new(db)
        .update(hotel.id + 1, update_params(hotel.id, country.id, "Renamed"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests updating a missing hotel.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;

    let result = HotelService::new(db)
        .update(999, update_params(999, country.id, "Ghost"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a hotel keeping its own name is not a duplicate, but taking another's is.
///
/// Expected: Ok for the unchanged name, Err(AppError::Conflict) for the sibling's name
#[tokio::test]
async fn checks_name_against_other_hotels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let hotel = HotelFactory::new(db, country.id).name("First").build().await?;
    HotelFactory::new(db, country.id).name("Second").build().await?;

    let service = HotelService::new(db);

    let same = service
        .update(hotel.id, update_params(hotel.id, country.id, "First"))
        .await;
    assert!(same.is_ok());

    let taken = service
        .update(hotel.id, update_params(hotel.id, country.id, "Second"))
        .await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    Ok(())
}
