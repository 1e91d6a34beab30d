use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use shared_models::{
    Appointment, AppointmentStatus, AvailabilityWindow, Client, Company, Professional,
    ProfessionalServiceLink, Service,
};

use crate::memory::Dataset;

// Deterministic ids so demo requests are reproducible across restarts.
const COMPANY_WELLNESS: u128 = 0x0a01;
const COMPANY_GROOMING: u128 = 0x0a02;

const PRO_MARINA: u128 = 0x0b01;
const PRO_FELIPE: u128 = 0x0b02;
const PRO_SOFIA: u128 = 0x0b03;

const SVC_CONSULTATION: u128 = 0x0c01;
const SVC_DERMATOLOGY: u128 = 0x0c02;
const SVC_GROOMING: u128 = 0x0c03;
const SVC_NAIL_TRIM: u128 = 0x0c04;

const CLIENT_ROBERT: u128 = 0x0d01;
const CLIENT_ALICE: u128 = 0x0d02;
const CLIENT_PETER: u128 = 0x0d03;

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn seeded_at() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now)
}

fn wall_clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now)
}

fn window(
    n: u128,
    professional: u128,
    day_of_week: i32,
    start: NaiveTime,
    end: NaiveTime,
) -> AvailabilityWindow {
    AvailabilityWindow {
        id: id(n),
        professional_id: id(professional),
        day_of_week,
        start_time: start,
        end_time: end,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}

/// Demo dataset loaded at startup when `SEED_DEMO_DATA` is enabled.
///
/// Two tenants with disjoint records; Marina carries a split schedule
/// (morning and afternoon windows on the same weekdays) so the union
/// behavior of the slot computation is visible out of the box.
pub fn demo_dataset() -> Dataset {
    let companies = vec![
        Company {
            id: id(COMPANY_WELLNESS),
            name: "Harbor Wellness Studio".to_string(),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Company {
            id: id(COMPANY_GROOMING),
            name: "Paws & Claws Grooming".to_string(),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
    ];

    let professionals = vec![
        Professional {
            id: id(PRO_MARINA),
            company_id: id(COMPANY_WELLNESS),
            display_name: "Marina Duarte".to_string(),
            email: "marina@harborwellness.example".to_string(),
            bio: Some("General practitioner with ten years of experience.".to_string()),
            specialties: vec!["General practice".to_string(), "Cardiology".to_string()],
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Professional {
            id: id(PRO_FELIPE),
            company_id: id(COMPANY_WELLNESS),
            display_name: "Felipe Ramos".to_string(),
            email: "felipe@harborwellness.example".to_string(),
            bio: Some("Dermatologist focused on clinical treatments.".to_string()),
            specialties: vec!["Dermatology".to_string()],
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Professional {
            id: id(PRO_SOFIA),
            company_id: id(COMPANY_GROOMING),
            display_name: "Sofia Lindqvist".to_string(),
            email: "sofia@pawsandclaws.example".to_string(),
            bio: Some("Groomer specialised in small breeds.".to_string()),
            specialties: vec!["Dogs".to_string(), "Cats".to_string()],
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
    ];

    let services = vec![
        Service {
            id: id(SVC_CONSULTATION),
            company_id: id(COMPANY_WELLNESS),
            name: "General consultation".to_string(),
            description: Some("Routine check-up".to_string()),
            duration_minutes: 30,
            price: Some(150.0),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Service {
            id: id(SVC_DERMATOLOGY),
            company_id: id(COMPANY_WELLNESS),
            name: "Dermatology session".to_string(),
            description: Some("Skin assessment and treatment".to_string()),
            duration_minutes: 45,
            price: Some(220.0),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Service {
            id: id(SVC_GROOMING),
            company_id: id(COMPANY_GROOMING),
            name: "Full grooming".to_string(),
            description: Some("Bath, cut and brush".to_string()),
            duration_minutes: 60,
            price: Some(90.0),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Service {
            id: id(SVC_NAIL_TRIM),
            company_id: id(COMPANY_GROOMING),
            name: "Nail trim".to_string(),
            description: None,
            duration_minutes: 15,
            price: Some(25.0),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
    ];

    let professional_services = vec![
        ProfessionalServiceLink {
            professional_id: id(PRO_MARINA),
            service_id: id(SVC_CONSULTATION),
        },
        ProfessionalServiceLink {
            professional_id: id(PRO_FELIPE),
            service_id: id(SVC_CONSULTATION),
        },
        ProfessionalServiceLink {
            professional_id: id(PRO_FELIPE),
            service_id: id(SVC_DERMATOLOGY),
        },
        ProfessionalServiceLink {
            professional_id: id(PRO_SOFIA),
            service_id: id(SVC_GROOMING),
        },
        ProfessionalServiceLink {
            professional_id: id(PRO_SOFIA),
            service_id: id(SVC_NAIL_TRIM),
        },
    ];

    let clients = vec![
        Client {
            id: id(CLIENT_ROBERT),
            company_id: id(COMPANY_WELLNESS),
            name: "Robert Hayes".to_string(),
            email: Some("robert.hayes@example.com".to_string()),
            phone: Some("+1 555 0101".to_string()),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Client {
            id: id(CLIENT_ALICE),
            company_id: id(COMPANY_WELLNESS),
            name: "Alice Nguyen".to_string(),
            email: Some("alice.nguyen@example.com".to_string()),
            phone: None,
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Client {
            id: id(CLIENT_PETER),
            company_id: id(COMPANY_GROOMING),
            name: "Peter Stone".to_string(),
            email: None,
            phone: Some("+1 555 0202".to_string()),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
    ];

    // Marina: split weekday schedule, Monday through Friday.
    let mut availability_windows = Vec::new();
    for day in 1..=5 {
        availability_windows.push(window(
            0x0e00 + (day as u128) * 2,
            PRO_MARINA,
            day,
            wall_clock(8, 0),
            wall_clock(12, 0),
        ));
        availability_windows.push(window(
            0x0e00 + (day as u128) * 2 + 1,
            PRO_MARINA,
            day,
            wall_clock(13, 0),
            wall_clock(17, 0),
        ));
    }
    // Felipe: Tuesday and Thursday, single long window.
    availability_windows.push(window(0x0e20, PRO_FELIPE, 2, wall_clock(9, 0), wall_clock(18, 0)));
    availability_windows.push(window(0x0e21, PRO_FELIPE, 4, wall_clock(9, 0), wall_clock(18, 0)));
    // Sofia: Monday, Wednesday, Friday.
    availability_windows.push(window(0x0e30, PRO_SOFIA, 1, wall_clock(8, 0), wall_clock(16, 0)));
    availability_windows.push(window(0x0e31, PRO_SOFIA, 3, wall_clock(8, 0), wall_clock(16, 0)));
    availability_windows.push(window(0x0e32, PRO_SOFIA, 5, wall_clock(8, 0), wall_clock(16, 0)));

    let appointments = vec![
        Appointment {
            id: id(0x0f01),
            company_id: id(COMPANY_WELLNESS),
            client_id: id(CLIENT_ROBERT),
            professional_id: id(PRO_MARINA),
            service_id: id(SVC_CONSULTATION),
            start_time: instant(2026, 8, 10, 9, 0),
            end_time: instant(2026, 8, 10, 9, 30),
            status: AppointmentStatus::Confirmed,
            notes: Some("Annual check-up".to_string()),
            cancellation_reason: None,
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Appointment {
            id: id(0x0f02),
            company_id: id(COMPANY_WELLNESS),
            client_id: id(CLIENT_ALICE),
            professional_id: id(PRO_MARINA),
            service_id: id(SVC_CONSULTATION),
            start_time: instant(2026, 8, 10, 10, 0),
            end_time: instant(2026, 8, 10, 10, 30),
            status: AppointmentStatus::Pending,
            notes: None,
            cancellation_reason: None,
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        // Cancelled bookings keep their record but free the slot.
        Appointment {
            id: id(0x0f03),
            company_id: id(COMPANY_WELLNESS),
            client_id: id(CLIENT_ALICE),
            professional_id: id(PRO_MARINA),
            service_id: id(SVC_CONSULTATION),
            start_time: instant(2026, 8, 10, 11, 0),
            end_time: instant(2026, 8, 10, 11, 30),
            status: AppointmentStatus::Cancelled,
            notes: None,
            cancellation_reason: Some("Client asked to rebook".to_string()),
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
        Appointment {
            id: id(0x0f04),
            company_id: id(COMPANY_GROOMING),
            client_id: id(CLIENT_PETER),
            professional_id: id(PRO_SOFIA),
            service_id: id(SVC_GROOMING),
            start_time: instant(2026, 8, 10, 8, 0),
            end_time: instant(2026, 8, 10, 9, 0),
            status: AppointmentStatus::Confirmed,
            notes: None,
            cancellation_reason: None,
            created_at: seeded_at(),
            updated_at: seeded_at(),
        },
    ];

    Dataset {
        companies,
        clients,
        professionals,
        services,
        professional_services,
        availability_windows,
        appointments,
    }
}
