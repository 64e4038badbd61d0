use super::*;

/// Tests admins are listed with their emails in email order.
///
/// Expected: both assigned admins, alphabetically
#[tokio::test]
async fn lists_admins_with_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    let zed = UserFactory::new(db).email("zed@example.com").build().await?;
    let amy = UserFactory::new(db).email("amy@example.com").build().await?;

    let repo = HotelAdminRepository::new(db);
    repo.create(hotel.id, &zed.id).await?;
    repo.create(hotel.id, &amy.id).await?;

    let admins = repo.get_by_hotel(hotel.id).await?;

    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].email, "amy@example.com");
    assert_eq!(admins[0].user_id, amy.id);
    assert_eq!(admins[1].email, "zed@example.com");

    Ok(())
}
