use super::*;

/// Tests deleting a hotel removes it and reports missing hotels afterwards.
///
/// Expected: Ok(()), then Err(AppError::NotFound) for lookup and repeat delete
#[tokio::test]
async fn deletes_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, hotel, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = HotelService::new(db);
    service.delete(hotel.id).await?;

    assert!(matches!(
        service.get_by_id(hotel.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(hotel.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
