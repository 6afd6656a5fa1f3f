//! Integration tests for the school repository against a real database.

use serde_json::json;
use sqlx::PgPool;
use unipath_db::models::school::SeedSchool;
use unipath_db::repositories::{SchoolFilter, SchoolRepo};

fn school(id: &str, name: &str, school_type: &str, city: &str) -> SeedSchool {
    serde_json::from_value(json!({
        "school_id": id,
        "school_name": name,
        "school_type": school_type,
        "school_url": "https://example.edu.tw",
        "school_images": [],
        "campuses": [{
            "campus_id": format!("{id}-main"),
            "campus_name": "校本部",
            "is_main": true,
            "location": { "city": city, "district": "某區", "address": "某路1號" },
        }],
        "departments": [{
            "department_id": format!("{id}012"),
            "department_name": "資訊工程學系",
            "college": "電機資訊學院",
            "academic_group": "資訊學群",
            "campus_ids": [format!("{id}-main")],
            "admission_data": {},
        }],
    }))
    .expect("valid seed document")
}

#[sqlx::test]
async fn replace_all_inserts_documents(pool: PgPool) {
    let schools = vec![
        school("001", "國立臺灣大學", "公立", "臺北市"),
        school("002", "國立清華大學", "公立", "新竹市"),
    ];
    let count = SchoolRepo::replace_all(&pool, &schools).await.unwrap();
    assert_eq!(count, 2);

    let total = SchoolRepo::count(&pool, &SchoolFilter::default())
        .await
        .unwrap();
    assert_eq!(total, 2);

    let rows = SchoolRepo::list_filtered(&pool, &SchoolFilter::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].school_id, "001");
    assert_eq!(rows[0].campuses.0[0].location.city, "臺北市");
    assert_eq!(rows[0].departments.0[0].academic_group, "資訊學群");
}

#[sqlx::test]
async fn replace_all_is_a_full_replacement(pool: PgPool) {
    let first = vec![school("001", "國立臺灣大學", "公立", "臺北市")];
    SchoolRepo::replace_all(&pool, &first).await.unwrap();

    // Reseeding with an empty list leaves the collection empty.
    let count = SchoolRepo::replace_all(&pool, &[]).await.unwrap();
    assert_eq!(count, 0);
    let total = SchoolRepo::count(&pool, &SchoolFilter::default())
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[sqlx::test]
async fn region_filter_expands_to_main_campus_cities(pool: PgPool) {
    let schools = vec![
        school("001", "國立臺灣大學", "公立", "臺北市"),
        school("002", "國立成功大學", "公立", "臺南市"),
        school("003", "私立逢甲大學", "私立", "臺中市"),
    ];
    SchoolRepo::replace_all(&pool, &schools).await.unwrap();

    // 北北基 covers 臺北市 only among the seeded cities.
    let filter = SchoolFilter {
        region: Some("北北基".to_string()),
        ..SchoolFilter::default()
    };
    let rows = SchoolRepo::list_filtered(&pool, &filter).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].school_id, "001");

    // An unknown region value is treated as a literal city name.
    let filter = SchoolFilter {
        region: Some("臺南市".to_string()),
        ..SchoolFilter::default()
    };
    let rows = SchoolRepo::list_filtered(&pool, &filter).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].school_id, "002");
}

#[sqlx::test]
async fn type_and_id_filters(pool: PgPool) {
    let schools = vec![
        school("001", "國立臺灣大學", "公立", "臺北市"),
        school("003", "私立逢甲大學", "私立", "臺中市"),
    ];
    SchoolRepo::replace_all(&pool, &schools).await.unwrap();

    let filter = SchoolFilter {
        school_type: Some("私立".to_string()),
        ..SchoolFilter::default()
    };
    assert_eq!(SchoolRepo::count(&pool, &filter).await.unwrap(), 1);

    let filter = SchoolFilter {
        school_id: Some("001".to_string()),
        ..SchoolFilter::default()
    };
    let rows = SchoolRepo::list_filtered(&pool, &filter).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].school_name, "國立臺灣大學");
}

#[sqlx::test]
async fn list_page_orders_and_paginates(pool: PgPool) {
    let schools: Vec<_> = (1..=5)
        .map(|idx| {
            school(
                &format!("{idx:03}"),
                &format!("大學{idx}"),
                "公立",
                "臺北市",
            )
        })
        .collect();
    SchoolRepo::replace_all(&pool, &schools).await.unwrap();

    let page = SchoolRepo::list_page(&pool, &SchoolFilter::default(), 2, 2)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].school_id, "003");
    assert_eq!(page[1].school_id, "004");
}

#[sqlx::test]
async fn distinct_metadata_queries(pool: PgPool) {
    let mut second = school("002", "國立成功大學", "公立", "臺南市");
    second.departments[0].college = "規劃與設計學院".to_string();
    second.departments[0].academic_group = "建築與設計學群".to_string();

    let schools = vec![school("001", "國立臺灣大學", "公立", "臺北市"), second];
    SchoolRepo::replace_all(&pool, &schools).await.unwrap();

    let groups = SchoolRepo::distinct_academic_groups(&pool).await.unwrap();
    assert_eq!(groups.len(), 2);
    assert!(groups.contains(&"資訊學群".to_string()));
    assert!(groups.contains(&"建築與設計學群".to_string()));

    let colleges = SchoolRepo::distinct_colleges(&pool).await.unwrap();
    assert_eq!(colleges.len(), 2);

    let cities = SchoolRepo::distinct_cities(&pool).await.unwrap();
    assert_eq!(cities.len(), 2);
    assert!(cities.contains(&"臺北市".to_string()));
    assert!(cities.contains(&"臺南市".to_string()));
}
