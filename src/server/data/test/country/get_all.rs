use super::*;

/// Tests countries are listed by name and searched over name and short name.
///
/// Expected: all three ordered by name; search matches one each way
#[tokio::test]
async fn lists_and_searches_countries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CountryFactory::new(db).name("Germany").short_name("DE").build().await?;
    CountryFactory::new(db).name("Austria").short_name("AT").build().await?;
    CountryFactory::new(db).name("Denmark").short_name("DK").build().await?;

    let repo = CountryRepository::new(db);

    let all = repo.get_all(None).await?;
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Austria", "Denmark", "Germany"]);

    let by_name = repo.get_all(Some("germ")).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].short_name, "DE");

    let by_short_name = repo.get_all(Some("AT")).await?;
    assert_eq!(by_short_name.len(), 1);
    assert_eq!(by_short_name[0].name, "Austria");

    Ok(())
}
