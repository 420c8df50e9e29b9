//! Test helpers for inbound HTTP components.
//!
//! Provides deterministic in-memory implementations of the repository
//! ports plus an app builder wiring every route behind a test session
//! middleware, so handler tests drive full request/cookie flows without a
//! database.

use std::sync::{Arc, Mutex};

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::web;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::auth::hash_password;
use crate::domain::ports::{
    ContactRepository, ContactStoreError, EarthquakeRepository, EarthquakeStoreError,
    UserRepository, UserStoreError,
};
use crate::domain::{
    Contact, ContactId, DisasterId, Earthquake, EmailAddress, NewContact, NewUser, Phone,
    StoredCredentials, User, UserId, UserProfile,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{contacts, earthquakes, home, settings, users};

/// Build a session middleware configured for tests.
///
/// Generates a fresh signing/encryption key per invocation and disables
/// the `Secure` flag for plain-HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

struct StoredUser {
    user: User,
    password_hash: String,
}

/// In-memory `UserRepository` with serial ids starting at 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserRepository {
    /// Insert a user with a fixed profile and the given password, hashed.
    pub async fn seed_user(&self, email: &str, password: &str) -> UserId {
        let profile = UserProfile {
            email: EmailAddress::new(email).expect("valid seed email"),
            name: "Seeded User".into(),
            age: 30,
            phone: "555-0000".into(),
            residency_address: "1 Seed St".into(),
            zipcode: "00000".into(),
            medications: String::new(),
            allergies: String::new(),
        };
        let password_hash = hash_password(password).expect("hashing succeeds");
        let user = self
            .create(NewUser {
                profile,
                password_hash,
            })
            .await
            .expect("seed user stored");
        user.id
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut state = self.state.lock().expect("state lock");
        if state
            .iter()
            .any(|stored| stored.user.profile.email == new_user.profile.email)
        {
            return Err(UserStoreError::DuplicateEmail);
        }
        let id = UserId::new(i32::try_from(state.len()).expect("small test set") + 1);
        let user = User::new(id, new_user.profile);
        state.push(StoredUser {
            user: user.clone(),
            password_hash: new_user.password_hash,
        });
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .iter()
            .find(|stored| stored.user.id == id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserStoreError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .iter()
            .find(|stored| stored.user.profile.email == *email)
            .map(|stored| stored.user.clone()))
    }

    async fn credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, UserStoreError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .iter()
            .find(|stored| stored.user.profile.email == *email)
            .map(|stored| StoredCredentials {
                user_id: stored.user.id,
                password_hash: stored.password_hash.clone(),
            }))
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.iter().map(|stored| stored.user.clone()).collect())
    }

    async fn update_profile(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserStoreError> {
        let mut state = self.state.lock().expect("state lock");
        if state
            .iter()
            .any(|stored| stored.user.id != id && stored.user.profile.email == profile.email)
        {
            return Err(UserStoreError::DuplicateEmail);
        }
        let Some(stored) = state.iter_mut().find(|stored| stored.user.id == id) else {
            return Ok(None);
        };
        stored.user.profile = profile.clone();
        Ok(Some(stored.user.clone()))
    }
}

#[derive(Default)]
struct ContactStoreState {
    contacts: Vec<Contact>,
    next_phone_id: i32,
}

/// In-memory `ContactRepository` with serial ids starting at 1.
#[derive(Default)]
pub struct InMemoryContactRepository {
    state: Mutex<ContactStoreState>,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, ContactStoreError> {
        let mut state = self.state.lock().expect("state lock");
        let id = ContactId::new(i32::try_from(state.contacts.len()).expect("small test set") + 1);
        state.next_phone_id += 1;
        let contact = Contact {
            id,
            user_id: new_contact.user_id,
            name: new_contact.name,
            kind: new_contact.kind,
            phones: vec![Phone {
                id: state.next_phone_id,
                number: new_contact.phone_number,
                kind: new_contact.phone_kind,
            }],
        };
        state.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactStoreError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .contacts
            .iter()
            .find(|contact| contact.id == id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Contact>, ContactStoreError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .contacts
            .iter()
            .filter(|contact| contact.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// In-memory `EarthquakeRepository` seeded with two historical quakes.
pub struct InMemoryEarthquakeRepository {
    quakes: Vec<Earthquake>,
}

impl Default for InMemoryEarthquakeRepository {
    fn default() -> Self {
        Self {
            quakes: vec![
                Earthquake {
                    nat_id: DisasterId::new(1),
                    location: "Loma Prieta, CA".into(),
                    occurred_at: Utc.with_ymd_and_hms(1989, 10, 17, 0, 4, 15).unwrap(),
                    magnitude: 6.9,
                    depth_km: 19.0,
                },
                Earthquake {
                    nat_id: DisasterId::new(2),
                    location: "Northridge, CA".into(),
                    occurred_at: Utc.with_ymd_and_hms(1994, 1, 17, 12, 30, 55).unwrap(),
                    magnitude: 6.7,
                    depth_km: 18.2,
                },
            ],
        }
    }
}

#[async_trait]
impl EarthquakeRepository for InMemoryEarthquakeRepository {
    async fn list(&self) -> Result<Vec<Earthquake>, EarthquakeStoreError> {
        let mut quakes = self.quakes.clone();
        quakes.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(quakes)
    }

    async fn find_by_id(
        &self,
        id: DisasterId,
    ) -> Result<Option<Earthquake>, EarthquakeStoreError> {
        Ok(self.quakes.iter().find(|quake| quake.nat_id == id).cloned())
    }
}

/// Bundle of in-memory repositories kept accessible for assertions.
pub struct TestFixtures {
    pub users: Arc<InMemoryUserRepository>,
    pub contacts: Arc<InMemoryContactRepository>,
    pub earthquakes: Arc<InMemoryEarthquakeRepository>,
}

impl TestFixtures {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::default()),
            contacts: Arc::new(InMemoryContactRepository::default()),
            earthquakes: Arc::new(InMemoryEarthquakeRepository::default()),
        }
    }

    /// Build handler state backed by these fixtures.
    pub fn state(&self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            self.users.clone(),
            self.contacts.clone(),
            self.earthquakes.clone(),
        ))
    }
}

/// Build an app with every route registered behind a test session.
pub fn test_app(
    state: web::Data<HttpState>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(state)
        .wrap(test_session_middleware())
        .service(home::index)
        .service(users::signup)
        .service(users::login)
        .service(users::logout)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(contacts::list_contacts)
        .service(contacts::create_contact)
        .service(contacts::get_contact)
        .service(earthquakes::list_earthquakes)
        .service(earthquakes::get_earthquake)
        .service(settings::update_setting)
}
