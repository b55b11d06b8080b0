use crate::common;
use crate::setup_test_db_or_skip;
use classdesk::domain::courses::{CourseRepository, NewCourse, UpdateCourse};
use classdesk::infrastructure::repositories::courses::PostgresCourseRepository;
use serial_test::serial;
use uuid::Uuid;

fn new_course(name: &str, stream: &str) -> NewCourse {
    NewCourse {
        name: name.to_string(),
        stream: stream.to_string(),
        course_type: "Degree".to_string(),
        description: "Full programme".to_string(),
        duration: "4 Years".to_string(),
        features: vec!["Mock tests".to_string()],
    }
}

#[tokio::test]
#[serial]
async fn test_find_all_keeps_catalog_order_and_filters() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let repo = PostgresCourseRepository::new(pool.clone());

    repo.create(new_course("Civil", "Civil")).await.unwrap();
    repo.create(new_course("Mechanical", "Mechanical")).await.unwrap();
    repo.create(new_course("Surveying", "Civil")).await.unwrap();

    let all = repo.find_all(None).await.unwrap();
    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Civil", "Mechanical", "Surveying"]);

    let civil = repo.find_all(Some("Civil")).await.unwrap();
    assert_eq!(civil.len(), 2);
    assert!(civil.iter().all(|c| c.stream == "Civil"));

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_partial_update() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let repo = PostgresCourseRepository::new(pool.clone());

    let created = repo.create(new_course("Civil", "Civil")).await.unwrap();
    let updated = repo
        .update(
            created.id,
            UpdateCourse {
                duration: Some("3 Years".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.duration, "3 Years");
    assert_eq!(updated.name, "Civil");
    assert_eq!(updated.features, vec!["Mock tests".to_string()]);

    assert!(
        repo.update(Uuid::new_v4(), UpdateCourse::default())
            .await
            .unwrap()
            .is_none()
    );

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_delete_twice() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let repo = PostgresCourseRepository::new(pool.clone());

    let created = repo.create(new_course("Civil", "Civil")).await.unwrap();
    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    common::cleanup_test_db(&pool).await;
}
