#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ronex_client::{ApiKey, ClientError, DeleteAck, ProjectApi, Session};
use ronex_core::{Category, Project, ProjectDraft, Status};

/// In-memory backend that counts list fetches and can be made to fail.
#[derive(Default)]
pub struct FakeApi {
    pub projects: Mutex<Vec<Project>>,
    pub fail: AtomicBool,
    pub list_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> ClientError {
        ClientError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        }
    }
}

impl ProjectApi for FakeApi {
    async fn get_all(&self, _session: &Session) -> Result<Vec<Project>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get_by_id(&self, _session: &Session, id: &str) -> Result<Project, ClientError> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ClientError::Api {
                status: 404,
                message: "Project not found".into(),
            })
    }

    async fn create(&self, _session: &Session, _draft: &ProjectDraft) -> Result<Project, ClientError> {
        Err(Self::unavailable())
    }

    async fn update(
        &self,
        _session: &Session,
        _id: &str,
        _draft: &ProjectDraft,
    ) -> Result<Project, ClientError> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _session: &Session, _id: &str) -> Result<DeleteAck, ClientError> {
        Err(Self::unavailable())
    }

    async fn validate_credential(&self, _key: &ApiKey) -> Result<(), ClientError> {
        Err(Self::unavailable())
    }
}

pub fn project(id: usize, category: Category, status: Status) -> Project {
    Project {
        id: format!("p{id}"),
        title: format!("Project {id}"),
        title_localized: format!("Proyek {id}"),
        description: "Renovation".into(),
        description_localized: "Renovasi".into(),
        category,
        location: format!("City {}", id % 3),
        duration: format!("{id} months"),
        image: String::new(),
        status,
    }
}

/// 4 residential, 3 business, 3 infrastructure, interleaved.
pub fn ten_projects() -> Vec<Project> {
    let categories = [
        Category::Residential,
        Category::Business,
        Category::Infrastructure,
        Category::Residential,
        Category::Business,
        Category::Infrastructure,
        Category::Residential,
        Category::Business,
        Category::Infrastructure,
        Category::Residential,
    ];
    categories
        .into_iter()
        .enumerate()
        .map(|(i, category)| project(i + 1, category, Status::Completed))
        .collect()
}
