use super::*;

/// Tests deleting a hotel reports whether a row was removed.
///
/// Expected: Ok(true) first, Ok(false) afterwards
#[tokio::test]
async fn deletes_hotel_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;

    let repo = HotelRepository::new(db);

    assert!(repo.delete(hotel.id).await?);
    assert!(!repo.delete(hotel.id).await?);
    assert!(!repo.exists(hotel.id).await?);

    Ok(())
}
