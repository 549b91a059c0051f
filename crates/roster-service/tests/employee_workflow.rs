//! End-to-end employee workflows: service over a real SQLite database and
//! over the in-memory store.

use roster_core::Employee;
use roster_db::{
    Database, DbConfig, EmployeeRepository, InMemoryEmployeeRepository, NameQuery,
    SqliteEmployeeRepository,
};
use roster_service::{EmployeeService, ServiceError};

async fn sqlite_service() -> EmployeeService<SqliteEmployeeRepository> {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");
    EmployeeService::new(db.employees())
}

fn bruno() -> Employee {
    Employee::new("Bruno", "Oliveira", "bruno@bruno")
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_and_store_size_stays_one() {
    let service = sqlite_service().await;

    let saved = service.save_employee(bruno()).await.unwrap();
    assert!(saved.id.unwrap() > 0);

    let err = service
        .save_employee(Employee::new("Bruno", "Martins", "bruno@bruno"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::ResourceConflict { .. }));
    assert_eq!(service.repository().count().await.unwrap(), 1);
}

#[tokio::test]
async fn padded_email_still_conflicts_with_stored_one() {
    let service = sqlite_service().await;
    service.save_employee(bruno()).await.unwrap();

    for padded in ["bruno@bruno ", " bruno@bruno", "\tbruno@bruno\n"] {
        let err = service
            .save_employee(Employee::new("Bruno", "Martins", padded))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "{:?} was accepted", padded);
    }

    assert_eq!(service.repository().count().await.unwrap(), 1);
}

#[tokio::test]
async fn padded_names_are_stored_trimmed_and_found_by_name() {
    let service = sqlite_service().await;

    let saved = service
        .save_employee(Employee::new("Lucas ", " Oliveira", "lucas@lucas"))
        .await
        .unwrap();

    let stored = service
        .get_employee_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.first_name, "Lucas");
    assert_eq!(stored.last_name, "Oliveira");

    let found = service
        .repository()
        .find_by_name("Lucas", "Oliveira")
        .await
        .unwrap();
    assert_eq!(found, Some(stored));
}

#[tokio::test]
async fn padded_email_on_update_is_stored_trimmed() {
    let service = sqlite_service().await;
    let mut saved = service.save_employee(bruno()).await.unwrap();

    saved.email = " martins@martins.com ".to_string();
    let updated = service.update_employee(saved).await.unwrap();

    assert_eq!(updated.email, "martins@martins.com");
    assert!(service
        .repository()
        .find_by_email("martins@martins.com")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn saved_employee_round_trips_through_find_by_id() {
    let service = sqlite_service().await;
    let candidates = [
        Employee::new("Bruno", "Oliveira", "bruno@bruno"),
        Employee::new("Lucas", "Oliveira", "lucas@lucas"),
        Employee::new("Ana", "de Souza", "ana.souza@example.com"),
    ];

    let mut seen_ids = Vec::new();
    for candidate in candidates {
        let saved = service.save_employee(candidate.clone()).await.unwrap();
        let id = saved.id.unwrap();
        assert!(!seen_ids.contains(&id));
        seen_ids.push(id);

        let loaded = service.get_employee_by_id(id).await.unwrap().unwrap();
        assert_eq!(loaded, candidate.with_id(id));
    }
}

#[tokio::test]
async fn load_modify_save_updates_in_place() {
    let service = sqlite_service().await;
    let saved = service.save_employee(bruno()).await.unwrap();

    let mut loaded = service
        .get_employee_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    loaded.email = "martins@martins.com".to_string();
    let updated = service.update_employee(loaded).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.email, "martins@martins.com");
    assert_eq!(service.get_all_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_onto_taken_email_is_refused_by_the_store() {
    let service = sqlite_service().await;
    service.save_employee(bruno()).await.unwrap();
    let mut lucas = service
        .save_employee(Employee::new("Lucas", "Oliveira", "lucas@lucas"))
        .await
        .unwrap();

    lucas.email = "bruno@bruno".to_string();
    let err = service.update_employee(lucas).await.unwrap_err();

    assert!(err.is_conflict());
    let stored = service.repository().find_by_email("lucas@lucas").await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn find_all_counts_saves_minus_deletes() {
    let service = sqlite_service().await;
    let mut ids = Vec::new();
    for n in 0..5 {
        let saved = service
            .save_employee(Employee::new("Worker", format!("No{}", n), format!("w{}@roster", n)))
            .await
            .unwrap();
        ids.push(saved.id.unwrap());
    }

    service.delete_employee(ids[1]).await.unwrap();
    service.delete_employee(ids[3]).await.unwrap();
    // Already gone: no-op
    service.delete_employee(ids[3]).await.unwrap();

    assert_eq!(service.get_all_employees().await.unwrap().len(), 3);
    assert!(service.get_employee_by_id(ids[1]).await.unwrap().is_none());
}

#[tokio::test]
async fn every_name_query_style_returns_the_same_employee() {
    let service = sqlite_service().await;
    service.save_employee(bruno()).await.unwrap();
    service
        .save_employee(Employee::new("Lucas", "Oliveira", "lucas@lucas"))
        .await
        .unwrap();

    let repo = service.repository();
    let expected = repo.find_by_name("Lucas", "Oliveira").await.unwrap();
    assert_eq!(expected.as_ref().map(|e| e.email.as_str()), Some("lucas@lucas"));

    for style in NameQuery::ALL {
        let found = repo.find_by_name_using("Lucas", "Oliveira", style).await.unwrap();
        assert_eq!(found, expected, "{:?}", style);
    }
}

#[tokio::test]
async fn in_memory_store_behaves_like_sqlite() {
    let sqlite = sqlite_service().await;
    let memory = EmployeeService::new(InMemoryEmployeeRepository::new());

    for service_result in [
        sqlite.save_employee(bruno()).await,
        memory.save_employee(bruno()).await,
    ] {
        assert_eq!(service_result.unwrap().id, Some(1));
    }

    assert!(sqlite.save_employee(bruno()).await.unwrap_err().is_conflict());
    assert!(memory.save_employee(bruno()).await.unwrap_err().is_conflict());

    assert_eq!(
        sqlite.get_all_employees().await.unwrap(),
        memory.get_all_employees().await.unwrap()
    );
    assert_eq!(
        sqlite.repository().find_by_name("Bruno", "Oliveira").await.unwrap(),
        memory.repository().find_by_name("Bruno", "Oliveira").await.unwrap()
    );
}
