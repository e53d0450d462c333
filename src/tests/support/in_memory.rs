//! In-memory stand-ins for the outgoing ports, shared by service and handler
//! tests. Every store is a cheap `Clone` over the same shared state so a test
//! can hand one copy to the code under test and inspect the other.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId, UserRole};
use crate::auth::application::ports::outgoing::user_repository::{CreateUserData, UpdateUserData};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::message::application::domain::{Conversation, ConversationStatus, Message};
use crate::modules::message::application::ports::outgoing::{
    CreateMessageData, MessageRepository, MessageRepositoryError,
};
use crate::modules::settings::application::domain::EmailSettings;
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};
use crate::modules::ticket::application::domain::{Ticket, TicketId, TicketPriority, TicketStatus};
use crate::modules::ticket::application::ports::outgoing::{
    CreateTicketData, TicketFilter, TicketRepository, TicketRepositoryError, UpdateTicketData,
};

// ============================================================================
// Password hashing
// ============================================================================

const PLAIN_PREFIX: &str = "plain$";

/// Stores passwords as `plain$<password>`. Keeps tests fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("{}{}", PLAIN_PREFIX, password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        hash.strip_prefix(PLAIN_PREFIX)
            .map(|stored| stored == password)
            .ok_or(HashError::UnsupportedHash)
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn insert(&self, email: &str, password: &str, role: UserRole) -> User {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: format!("{}{}", PLAIN_PREFIX, password),
            name: email.split('@').next().unwrap_or(email).to_string(),
            role,
            is_suspended: false,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn suspend(&self, user_id: UserId) {
        if let Some(user) = self
            .users
            .lock()
            .unwrap()
            .iter_mut()
            .find(|u| u.id == user_id)
        {
            user.is_suspended = true;
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn modify<F>(&self, user_id: UserId, change: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        change(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: data.email,
            password_hash: data.password_hash,
            name: data.name,
            role: data.role,
            is_suspended: false,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        self.modify(user_id, |user| {
            if let Some(name) = data.name {
                user.name = name;
            }
            if let Some(role) = data.role {
                user.role = role;
            }
        })
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |user| user.password_hash = new_password_hash)
            .map(|_| ())
    }

    async fn set_suspended(
        &self,
        user_id: UserId,
        suspended: bool,
    ) -> Result<User, UserRepositoryError> {
        self.modify(user_id, |user| user.is_suspended = suspended)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Tickets
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryTicketRepository {
    tickets: Arc<Mutex<Vec<Ticket>>>,
}

impl InMemoryTicketRepository {
    /// Stores an open, medium-priority, unassigned ticket.
    pub fn seed(&self, title: &str, created_by: UserId) -> Ticket {
        let now = Utc::now();
        let ticket = Ticket {
            id: TicketId::new(),
            title: title.to_string(),
            description: String::new(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            created_by,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        };
        self.tickets.lock().unwrap().push(ticket.clone());
        ticket
    }

    pub fn len(&self) -> usize {
        self.tickets.lock().unwrap().len()
    }

    fn modify<F>(&self, ticket_id: TicketId, change: F) -> Result<Ticket, TicketRepositoryError>
    where
        F: FnOnce(&mut Ticket),
    {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or(TicketRepositoryError::NotFound)?;
        change(ticket);
        ticket.updated_at = Utc::now();
        Ok(ticket.clone())
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn create_ticket(&self, data: CreateTicketData) -> Result<Ticket, TicketRepositoryError> {
        let now = Utc::now();
        let ticket = Ticket {
            id: TicketId::new(),
            title: data.title,
            description: data.description,
            status: TicketStatus::Open,
            priority: data.priority,
            created_by: data.created_by,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        };
        self.tickets.lock().unwrap().push(ticket.clone());
        Ok(ticket)
    }

    async fn find_by_id(&self, ticket_id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == ticket_id)
            .cloned())
    }

    // Insertion order stands in for creation time.
    async fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, TicketRepositoryError> {
        Ok(self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .filter(|t| filter.priority.map_or(true, |p| t.priority == p))
            .filter(|t| filter.assigned_to.map_or(true, |a| t.assigned_to == Some(a)))
            .cloned()
            .collect())
    }

    async fn update_ticket(
        &self,
        ticket_id: TicketId,
        data: UpdateTicketData,
    ) -> Result<Ticket, TicketRepositoryError> {
        self.modify(ticket_id, |ticket| {
            if let Some(title) = data.title {
                ticket.title = title;
            }
            if let Some(description) = data.description {
                ticket.description = description;
            }
            if let Some(status) = data.status {
                ticket.status = status;
            }
            if let Some(priority) = data.priority {
                ticket.priority = priority;
            }
        })
    }

    async fn assign_ticket(
        &self,
        ticket_id: TicketId,
        assignee: UserId,
    ) -> Result<Ticket, TicketRepositoryError> {
        self.modify(ticket_id, |ticket| ticket.assigned_to = Some(assignee))
    }

    async fn delete_ticket(&self, ticket_id: TicketId) -> Result<(), TicketRepositoryError> {
        let mut tickets = self.tickets.lock().unwrap();
        let before = tickets.len();
        tickets.retain(|t| t.id != ticket_id);
        if tickets.len() == before {
            return Err(TicketRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Messages and conversations
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
    conversations: Arc<Mutex<Vec<Conversation>>>,
}

impl InMemoryMessageRepository {
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create_message(&self, data: CreateMessageData) -> Result<Message, MessageRepositoryError> {
        let message = Message {
            id: Uuid::new_v4(),
            ticket_id: data.ticket_id,
            author_id: data.author_id,
            conversation_id: data.conversation_id,
            content: data.content,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, ticket_id: TicketId) -> Result<Vec<Message>, MessageRepositoryError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.ticket_id == ticket_id)
            .cloned()
            .collect())
    }

    async fn create_conversation(
        &self,
        ticket_id: TicketId,
        opened_by: UserId,
    ) -> Result<Conversation, MessageRepositoryError> {
        let now = Utc::now();
        let conversation = Conversation {
            id: Uuid::new_v4(),
            ticket_id,
            opened_by,
            status: ConversationStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.conversations.lock().unwrap().push(conversation.clone());
        Ok(conversation)
    }

    async fn find_conversation(
        &self,
        conversation_id: Uuid,
    ) -> Result<Option<Conversation>, MessageRepositoryError> {
        Ok(self
            .conversations
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == conversation_id)
            .cloned())
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemorySettingsRepository {
    row: Arc<Mutex<Option<EmailSettings>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemorySettingsRepository {
    pub fn with(settings: EmailSettings) -> Self {
        let repo = Self::default();
        *repo.row.lock().unwrap() = Some(settings);
        repo
    }

    pub fn stored(&self) -> Option<EmailSettings> {
        self.row.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find_email_settings(&self) -> Result<Option<EmailSettings>, SettingsRepositoryError> {
        Ok(self.stored())
    }

    async fn save_email_settings(
        &self,
        settings: EmailSettings,
    ) -> Result<EmailSettings, SettingsRepositoryError> {
        *self.row.lock().unwrap() = Some(settings.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(settings)
    }
}
