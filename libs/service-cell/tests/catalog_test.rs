// libs/service-cell/tests/catalog_test.rs

use chrono::Utc;
use uuid::Uuid;

use service_cell::models::{CreateServiceRequest, UpdateServiceRequest};
use service_cell::services::catalog::CatalogService;
use shared_models::{AppError, Professional, ProfessionalServiceLink};
use shared_store::{Dataset, Store};

fn company_id() -> Uuid {
    Uuid::from_u128(0xa0)
}

fn create_request(duration_minutes: i32) -> CreateServiceRequest {
    CreateServiceRequest {
        name: "General consultation".to_string(),
        description: None,
        duration_minutes,
        price: Some(150.0),
    }
}

#[tokio::test]
async fn service_crud_roundtrip() {
    let service = CatalogService::new(Store::new());

    let created = service
        .create_service(company_id(), create_request(30))
        .await
        .unwrap();
    assert_eq!(created.duration_minutes, 30);

    let updated = service
        .update_service(
            company_id(),
            created.id,
            UpdateServiceRequest {
                name: None,
                description: Some("Routine check-up".to_string()),
                duration_minutes: Some(45),
                price: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.duration_minutes, 45);
    assert_eq!(updated.description.as_deref(), Some("Routine check-up"));

    service
        .delete_service(company_id(), created.id)
        .await
        .unwrap();
    assert!(matches!(
        service.get_service(company_id(), created.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn non_positive_durations_are_rejected() {
    let service = CatalogService::new(Store::new());

    assert!(matches!(
        service.create_service(company_id(), create_request(0)).await,
        Err(AppError::ValidationError(_))
    ));
    assert!(matches!(
        service
            .create_service(company_id(), create_request(-15))
            .await,
        Err(AppError::ValidationError(_))
    ));

    let created = service
        .create_service(company_id(), create_request(30))
        .await
        .unwrap();
    let shrunk = service
        .update_service(
            company_id(),
            created.id,
            UpdateServiceRequest {
                name: None,
                description: None,
                duration_minutes: Some(0),
                price: None,
            },
        )
        .await;
    assert!(matches!(shrunk, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn lists_professionals_offering_a_service() {
    let now = Utc::now();
    let professional_id = Uuid::from_u128(0xb0);
    let service_id = Uuid::from_u128(0xc0);

    let store = Store::new();
    store
        .load(Dataset {
            professionals: vec![Professional {
                id: professional_id,
                company_id: company_id(),
                display_name: "Marina Duarte".to_string(),
                email: "marina@example.com".to_string(),
                bio: None,
                specialties: vec![],
                created_at: now,
                updated_at: now,
            }],
            services: vec![shared_models::Service {
                id: service_id,
                company_id: company_id(),
                name: "General consultation".to_string(),
                description: None,
                duration_minutes: 30,
                price: None,
                created_at: now,
                updated_at: now,
            }],
            professional_services: vec![ProfessionalServiceLink {
                professional_id,
                service_id,
            }],
            ..Dataset::default()
        })
        .await;

    let catalog = CatalogService::new(store);
    let professionals = catalog
        .professionals_for_service(company_id(), service_id)
        .await
        .unwrap();
    assert_eq!(professionals.len(), 1);
    assert_eq!(professionals[0].display_name, "Marina Duarte");

    // Unknown service reads as 404, not an empty list.
    assert!(matches!(
        catalog
            .professionals_for_service(company_id(), Uuid::new_v4())
            .await,
        Err(AppError::NotFound(_))
    ));
}
