use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;
use staff_service::domain::auth::service::AuthService;
use staff_service::domain::notification::errors::NotificationError;
use staff_service::domain::notification::messages::MailMessage;
use staff_service::domain::notification::ports::NotificationGateway;
use staff_service::domain::staff::errors::StaffError;
use staff_service::domain::staff::models::EmailAddress;
use staff_service::domain::staff::models::Role;
use staff_service::domain::staff::models::StaffAccount;
use staff_service::domain::staff::models::StaffId;
use staff_service::domain::staff::ports::StaffRepository;
use staff_service::domain::staff::service::StaffService;
use staff_service::domain::vacation::errors::VacationError;
use staff_service::domain::vacation::models::Vacation;
use staff_service::domain::vacation::models::VacationId;
use staff_service::domain::vacation::ports::VacationRepository;
use staff_service::domain::vacation::service::VacationService;
use staff_service::inbound::http::router::create_router;
use staff_service::inbound::http::router::AppState;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration_test_signing_secret_long_enough_for_hs512!";

/// In-memory stand-in for one role directory, so the suite runs without
/// Postgres.
#[derive(Default)]
pub struct InMemoryStaffRepository {
    accounts: RwLock<HashMap<Uuid, StaffAccount>>,
}

#[async_trait]
impl StaffRepository for InMemoryStaffRepository {
    async fn create(&self, account: StaffAccount) -> Result<StaffAccount, StaffError> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &StaffId) -> Result<Option<StaffAccount>, StaffError> {
        Ok(self.accounts.read().await.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StaffAccount>, StaffError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<StaffAccount>, StaffError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }

    async fn update(&self, account: StaffAccount) -> Result<StaffAccount, StaffError> {
        let mut accounts = self.accounts.write().await;
        if !accounts.contains_key(&account.id.0) {
            return Err(StaffError::NotFound(account.id.to_string()));
        }
        accounts.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: &StaffId) -> Result<(), StaffError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(&id.0)
            .map(|_| ())
            .ok_or(StaffError::NotFound(id.to_string()))
    }
}

/// In-memory stand-in for the vacation store.
#[derive(Default)]
pub struct InMemoryVacationRepository {
    vacations: RwLock<HashMap<Uuid, Vacation>>,
}

#[async_trait]
impl VacationRepository for InMemoryVacationRepository {
    async fn insert(&self, vacation: Vacation) -> Result<Vacation, VacationError> {
        let mut vacations = self.vacations.write().await;
        vacations.insert(vacation.id.0, vacation.clone());
        Ok(vacation)
    }

    async fn find_by_id(&self, id: &VacationId) -> Result<Option<Vacation>, VacationError> {
        Ok(self.vacations.read().await.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Vacation>, VacationError> {
        Ok(self.vacations.read().await.values().cloned().collect())
    }

    async fn update(&self, vacation: Vacation) -> Result<Vacation, VacationError> {
        let mut vacations = self.vacations.write().await;
        if !vacations.contains_key(&vacation.id.0) {
            return Err(VacationError::NotFound(vacation.id.to_string()));
        }
        vacations.insert(vacation.id.0, vacation.clone());
        Ok(vacation)
    }
}

/// Records everything the workflows try to send instead of talking SMTP.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: RwLock<Vec<MailMessage>>,
}

impl RecordingNotifier {
    pub async fn sent(&self) -> Vec<MailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl NotificationGateway for RecordingNotifier {
    async fn send(&self, message: MailMessage) -> Result<(), NotificationError> {
        self.sent.write().await.push(message);
        Ok(())
    }
}

/// Credentials of an account seeded at startup.
pub struct SeededAccount {
    pub id: StaffId,
    pub email: String,
    pub password: String,
}

/// Test application running the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub mailer: Arc<RecordingNotifier>,
    pub seeded: HashMap<Role, SeededAccount>,
}

impl TestApp {
    /// Spawn the application with in-memory adapters and one seeded
    /// account per role family.
    pub async fn spawn() -> Self {
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, 5));
        let mailer = Arc::new(RecordingNotifier::default());

        let repos: HashMap<Role, Arc<InMemoryStaffRepository>> = Role::ALL
            .iter()
            .map(|role| (*role, Arc::new(InMemoryStaffRepository::default())))
            .collect();

        let mut seeded = HashMap::new();
        for role in Role::ALL {
            let email = format!("{}@example.com", role.as_str().to_lowercase());
            let password = format!("{}_password!", role.as_str().to_lowercase());
            let account = StaffAccount {
                id: StaffId::new(),
                first_name: role.as_str().to_string(),
                last_name: "Seeded".to_string(),
                email: EmailAddress::new(email.clone()).unwrap(),
                password_hash: authenticator.hash_password(&password).unwrap(),
                role,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            let id = account.id;
            repos[&role].create(account).await.unwrap();
            seeded.insert(
                role,
                SeededAccount {
                    id,
                    email,
                    password,
                },
            );
        }

        let directories: HashMap<Role, Arc<InMemoryStaffRepository>> = repos
            .iter()
            .map(|(role, repo)| (*role, Arc::clone(repo)))
            .collect();
        let auth_service = Arc::new(AuthService::new(directories, Arc::clone(&authenticator)));

        let vacations_repo = Arc::new(InMemoryVacationRepository::default());

        let state = AppState {
            auth_service,
            admins: Arc::new(StaffService::new(
                Role::Admin,
                Arc::clone(&repos[&Role::Admin]),
                Arc::clone(&mailer),
            )),
            directors: Arc::new(StaffService::new(
                Role::Director,
                Arc::clone(&repos[&Role::Director]),
                Arc::clone(&mailer),
            )),
            kadrs: Arc::new(StaffService::new(
                Role::Kadr,
                Arc::clone(&repos[&Role::Kadr]),
                Arc::clone(&mailer),
            )),
            users: Arc::new(StaffService::new(
                Role::User,
                Arc::clone(&repos[&Role::User]),
                Arc::clone(&mailer),
            )),
            vacations: Arc::new(VacationService::new(
                vacations_repo,
                Arc::clone(&repos[&Role::User]),
                Arc::clone(&mailer),
            )),
            authenticator: Arc::clone(&authenticator),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(state);
        tokio::spawn(async move { axum::serve(listener, router).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            mailer,
            seeded,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Log in with the seeded credentials of one role and return the token.
    pub async fn token_for(&self, role: Role) -> String {
        let account = &self.seeded[&role];
        let response = self
            .post(&format!(
                "/api/auth/{}/login",
                role.as_str().to_lowercase()
            ))
            .json(&serde_json::json!({
                "email": account.email,
                "password": account.password,
            }))
            .send()
            .await
            .expect("Failed to execute login request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["data"]["token"]
            .as_str()
            .expect("Login response carried no token")
            .to_string()
    }
}
