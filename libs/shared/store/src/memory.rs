use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::{
    Appointment, AvailabilityWindow, Client, Company, Professional, ProfessionalServiceLink,
    Service,
};

/// Everything the store holds, across all tenants.
#[derive(Debug, Default)]
struct Collections {
    companies: Vec<Company>,
    clients: Vec<Client>,
    professionals: Vec<Professional>,
    services: Vec<Service>,
    professional_services: Vec<ProfessionalServiceLink>,
    availability_windows: Vec<AvailabilityWindow>,
    appointments: Vec<Appointment>,
}

/// A full replacement dataset, used by seeding and tests.
#[derive(Debug, Default)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub clients: Vec<Client>,
    pub professionals: Vec<Professional>,
    pub services: Vec<Service>,
    pub professional_services: Vec<ProfessionalServiceLink>,
    pub availability_windows: Vec<AvailabilityWindow>,
    pub appointments: Vec<Appointment>,
}

/// Consistent read snapshot for one slot computation.
///
/// Taken under a single read lock so no partial mutation is visible
/// mid-computation. All collections are already scoped: windows and
/// appointments to the professional, services to the tenant.
#[derive(Debug, Clone)]
pub struct SchedulingSnapshot {
    pub windows: Vec<AvailabilityWindow>,
    pub appointments: Vec<Appointment>,
    pub services: Vec<Service>,
}

/// In-memory, tenant-partitioned store.
///
/// Read methods take a company id and hand back cloned, already-scoped
/// snapshots; callers never see another tenant's records and never hold the
/// lock while computing.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all collections with the given dataset.
    pub async fn load(&self, dataset: Dataset) {
        let mut inner = self.inner.write().await;
        debug!(
            "Loading dataset: {} companies, {} professionals, {} services, {} appointments",
            dataset.companies.len(),
            dataset.professionals.len(),
            dataset.services.len(),
            dataset.appointments.len()
        );
        inner.companies = dataset.companies;
        inner.clients = dataset.clients;
        inner.professionals = dataset.professionals;
        inner.services = dataset.services;
        inner.professional_services = dataset.professional_services;
        inner.availability_windows = dataset.availability_windows;
        inner.appointments = dataset.appointments;
    }

    // ==========================================================================
    // COMPANIES
    // ==========================================================================

    pub async fn get_company(&self, company_id: Uuid) -> Option<Company> {
        let inner = self.inner.read().await;
        inner.companies.iter().find(|c| c.id == company_id).cloned()
    }

    // ==========================================================================
    // CLIENTS
    // ==========================================================================

    pub async fn list_clients(&self, company_id: Uuid) -> Vec<Client> {
        let inner = self.inner.read().await;
        inner
            .clients
            .iter()
            .filter(|c| c.company_id == company_id)
            .cloned()
            .collect()
    }

    pub async fn get_client(&self, company_id: Uuid, client_id: Uuid) -> Option<Client> {
        let inner = self.inner.read().await;
        inner
            .clients
            .iter()
            .find(|c| c.company_id == company_id && c.id == client_id)
            .cloned()
    }

    pub async fn insert_client(&self, client: Client) {
        let mut inner = self.inner.write().await;
        inner.clients.push(client);
    }

    pub async fn replace_client(&self, client: Client) -> bool {
        let mut inner = self.inner.write().await;
        match inner
            .clients
            .iter_mut()
            .find(|c| c.company_id == client.company_id && c.id == client.id)
        {
            Some(existing) => {
                *existing = client;
                true
            }
            None => false,
        }
    }

    pub async fn remove_client(&self, company_id: Uuid, client_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.clients.len();
        inner
            .clients
            .retain(|c| !(c.company_id == company_id && c.id == client_id));
        inner.clients.len() != before
    }

    // ==========================================================================
    // PROFESSIONALS
    // ==========================================================================

    pub async fn list_professionals(&self, company_id: Uuid) -> Vec<Professional> {
        let inner = self.inner.read().await;
        inner
            .professionals
            .iter()
            .filter(|p| p.company_id == company_id)
            .cloned()
            .collect()
    }

    pub async fn get_professional(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
    ) -> Option<Professional> {
        let inner = self.inner.read().await;
        inner
            .professionals
            .iter()
            .find(|p| p.company_id == company_id && p.id == professional_id)
            .cloned()
    }

    pub async fn insert_professional(&self, professional: Professional) {
        let mut inner = self.inner.write().await;
        inner.professionals.push(professional);
    }

    pub async fn replace_professional(&self, professional: Professional) -> bool {
        let mut inner = self.inner.write().await;
        match inner
            .professionals
            .iter_mut()
            .find(|p| p.company_id == professional.company_id && p.id == professional.id)
        {
            Some(existing) => {
                *existing = professional;
                true
            }
            None => false,
        }
    }

    /// Remove a professional along with their windows and service links.
    pub async fn remove_professional(&self, company_id: Uuid, professional_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.professionals.len();
        inner
            .professionals
            .retain(|p| !(p.company_id == company_id && p.id == professional_id));
        if inner.professionals.len() == before {
            return false;
        }
        inner
            .availability_windows
            .retain(|w| w.professional_id != professional_id);
        inner
            .professional_services
            .retain(|l| l.professional_id != professional_id);
        true
    }

    // ==========================================================================
    // SERVICES
    // ==========================================================================

    pub async fn list_services(&self, company_id: Uuid) -> Vec<Service> {
        let inner = self.inner.read().await;
        inner
            .services
            .iter()
            .filter(|s| s.company_id == company_id)
            .cloned()
            .collect()
    }

    pub async fn get_service(&self, company_id: Uuid, service_id: Uuid) -> Option<Service> {
        let inner = self.inner.read().await;
        inner
            .services
            .iter()
            .find(|s| s.company_id == company_id && s.id == service_id)
            .cloned()
    }

    pub async fn insert_service(&self, service: Service) {
        let mut inner = self.inner.write().await;
        inner.services.push(service);
    }

    pub async fn replace_service(&self, service: Service) -> bool {
        let mut inner = self.inner.write().await;
        match inner
            .services
            .iter_mut()
            .find(|s| s.company_id == service.company_id && s.id == service.id)
        {
            Some(existing) => {
                *existing = service;
                true
            }
            None => false,
        }
    }

    pub async fn remove_service(&self, company_id: Uuid, service_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.services.len();
        inner
            .services
            .retain(|s| !(s.company_id == company_id && s.id == service_id));
        if inner.services.len() == before {
            return false;
        }
        inner
            .professional_services
            .retain(|l| l.service_id != service_id);
        true
    }

    // ==========================================================================
    // PROFESSIONAL <-> SERVICE LINKS
    // ==========================================================================

    pub async fn set_professional_services(&self, professional_id: Uuid, service_ids: Vec<Uuid>) {
        let mut inner = self.inner.write().await;
        inner
            .professional_services
            .retain(|l| l.professional_id != professional_id);
        for service_id in service_ids {
            inner.professional_services.push(ProfessionalServiceLink {
                professional_id,
                service_id,
            });
        }
    }

    pub async fn service_ids_for_professional(&self, professional_id: Uuid) -> Vec<Uuid> {
        let inner = self.inner.read().await;
        inner
            .professional_services
            .iter()
            .filter(|l| l.professional_id == professional_id)
            .map(|l| l.service_id)
            .collect()
    }

    pub async fn professional_ids_for_service(&self, service_id: Uuid) -> Vec<Uuid> {
        let inner = self.inner.read().await;
        inner
            .professional_services
            .iter()
            .filter(|l| l.service_id == service_id)
            .map(|l| l.professional_id)
            .collect()
    }

    // ==========================================================================
    // AVAILABILITY WINDOWS
    // ==========================================================================

    pub async fn list_windows(&self, professional_id: Uuid) -> Vec<AvailabilityWindow> {
        let inner = self.inner.read().await;
        inner
            .availability_windows
            .iter()
            .filter(|w| w.professional_id == professional_id)
            .cloned()
            .collect()
    }

    pub async fn get_window(
        &self,
        professional_id: Uuid,
        window_id: Uuid,
    ) -> Option<AvailabilityWindow> {
        let inner = self.inner.read().await;
        inner
            .availability_windows
            .iter()
            .find(|w| w.professional_id == professional_id && w.id == window_id)
            .cloned()
    }

    pub async fn insert_window(&self, window: AvailabilityWindow) {
        let mut inner = self.inner.write().await;
        inner.availability_windows.push(window);
    }

    pub async fn replace_window(&self, window: AvailabilityWindow) -> bool {
        let mut inner = self.inner.write().await;
        match inner
            .availability_windows
            .iter_mut()
            .find(|w| w.professional_id == window.professional_id && w.id == window.id)
        {
            Some(existing) => {
                *existing = window;
                true
            }
            None => false,
        }
    }

    pub async fn remove_window(&self, professional_id: Uuid, window_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.availability_windows.len();
        inner
            .availability_windows
            .retain(|w| !(w.professional_id == professional_id && w.id == window_id));
        inner.availability_windows.len() != before
    }

    // ==========================================================================
    // APPOINTMENTS
    // ==========================================================================

    pub async fn list_appointments(&self, company_id: Uuid) -> Vec<Appointment> {
        let inner = self.inner.read().await;
        inner
            .appointments
            .iter()
            .filter(|a| a.company_id == company_id)
            .cloned()
            .collect()
    }

    pub async fn get_appointment(
        &self,
        company_id: Uuid,
        appointment_id: Uuid,
    ) -> Option<Appointment> {
        let inner = self.inner.read().await;
        inner
            .appointments
            .iter()
            .find(|a| a.company_id == company_id && a.id == appointment_id)
            .cloned()
    }

    pub async fn insert_appointment(&self, appointment: Appointment) {
        let mut inner = self.inner.write().await;
        inner.appointments.push(appointment);
    }

    pub async fn replace_appointment(&self, appointment: Appointment) -> bool {
        let mut inner = self.inner.write().await;
        match inner
            .appointments
            .iter_mut()
            .find(|a| a.company_id == appointment.company_id && a.id == appointment.id)
        {
            Some(existing) => {
                *existing = appointment;
                true
            }
            None => false,
        }
    }

    pub async fn remove_appointment(&self, company_id: Uuid, appointment_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.appointments.len();
        inner
            .appointments
            .retain(|a| !(a.company_id == company_id && a.id == appointment_id));
        inner.appointments.len() != before
    }

    // ==========================================================================
    // SCHEDULING SNAPSHOT
    // ==========================================================================

    /// All inputs one slot computation needs, read under a single lock.
    pub async fn scheduling_snapshot(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
    ) -> SchedulingSnapshot {
        let inner = self.inner.read().await;
        SchedulingSnapshot {
            windows: inner
                .availability_windows
                .iter()
                .filter(|w| w.professional_id == professional_id)
                .cloned()
                .collect(),
            appointments: inner
                .appointments
                .iter()
                .filter(|a| a.company_id == company_id && a.professional_id == professional_id)
                .cloned()
                .collect(),
            services: inner
                .services
                .iter()
                .filter(|s| s.company_id == company_id)
                .cloned()
                .collect(),
        }
    }
}
