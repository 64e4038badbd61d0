use super::*;

/// Tests a partial update only touches the supplied column.
///
/// Expected: name changed, short name kept
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = CountryFactory::new(db)
        .name("Sweden")
        .short_name("SE")
        .build()
        .await?;

    let repo = CountryRepository::new(db);
    let updated = repo
        .update(country.id, Some("Kingdom of Sweden".to_string()), None)
        .await?;

    assert_eq!(updated.name, "Kingdom of Sweden");
    assert_eq!(updated.short_name, "SE");

    Ok(())
}
