use super::*;

/// Tests creating a hotel stores the rate in minor units and loads the country name.
///
/// Expected: Ok(Hotel) with country name and decimal rate
#[tokio::test]
async fn creates_hotel_with_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;

    let repo = HotelRepository::new(db);
    let hotel = repo
        .create(
            CreateHotelParams {
                name: "Harbour View".to_string(),
                address: "1 Quay Street".to_string(),
                rating: 4.5,
                per_night_rate: Decimal::new(12_550, 2),
                country_id: country.id,
            },
            12_550,
        )
        .await?;

    assert_eq!(hotel.name, "Harbour View");
    assert_eq!(hotel.country_id, country.id);
    assert_eq!(hotel.country_name, country.name);
    assert_eq!(hotel.per_night_rate, Decimal::new(12_550, 2));

    let stored = repo.get_by_id(hotel.id).await?;
    assert_eq!(stored, Some(hotel));

    Ok(())
}

/// Tests replacing a hotel's fields, including moving it to another country.
///
/// Expected: Ok(Hotel) with new values
#[tokio::test]
async fn updates_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    let other_country = factory::create_country(db).await?;

    let repo = HotelRepository::new(db);
    let updated = repo
        .update(
            UpdateHotelParams {
                id: hotel.id,
                name: "Renamed".to_string(),
                address: "2 New Road".to_string(),
                rating: 3.0,
                per_night_rate: Decimal::new(8_000, 2),
                country_id: other_country.id,
            },
            8_000,
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.country_name, other_country.name);
    assert_eq!(updated.rating, 3.0);
    assert_eq!(updated.per_night_rate, Decimal::new(8_000, 2));

    Ok(())
}
