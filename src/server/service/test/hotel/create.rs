use super::*;

/// Tests a hotel is created and listed with its country.
///
/// Expected: Ok(Hotel) with the country name and rate, visible in the listing
#[tokio::test]
async fn creates_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;

    let service = HotelService::new(db);
    let hotel = service.create(create_params(country.id, "Seaside")).await?;

    assert_eq!(hotel.name, "Seaside");
    assert_eq!(hotel.country_name, country.name);
    assert_eq!(hotel.per_night_rate, Decimal::new(12_550, 2));

    let page = service
        .get_paginated(HotelFilter::default(), PageRequest::default())
        .await?;
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, hotel.id);

    Ok(())
}

/// Tests invalid hotel fields.
///
/// Expected: Err(AppError::Validation) for blank name, rating above 5 and negative rate
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let service = HotelService::new(db);

    let blank = service.create(create_params(country.id, "")).await;
    assert!(matches!(blank, Err(AppError::Validation(_))));

    let rating = service
        .create(CreateHotelParams {
            rating: 5.5,
            ..create_params(country.id, "Too Good")
        })
        .await;
    assert!(matches!(rating, Err(AppError::Validation(_))));

    let rate = service
        .create(CreateHotelParams {
            per_night_rate: Decimal::new(-1, 0),
            ..create_params(country.id, "Paid To Stay")
        })
        .await;
    assert!(matches!(rate, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests creating a hotel in a missing country.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_country() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelService::new(db)
        .create(create_params(999, "Nowhere Inn"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests hotel names are unique within a country only.
///
/// Expected: Err(AppError::Conflict) in the same country, Ok in another
#[tokio::test]
async fn rejects_duplicate_name_in_country() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let other_country = factory::create_country(db).await?;
    HotelFactory::new(db, country.id)
        .name("Grand")
        .build()
        .await?;

    let service = HotelService::new(db);

    let duplicate = service.create(create_params(country.id, "grand")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let elsewhere = service
        .create(create_params(other_country.id, "Grand"))
        .await;
    assert!(elsewhere.is_ok());

    Ok(())
}
