//! Authorization decisions. Every check fails closed: anything not
//! explicitly allowed returns a [`PolicyViolation`].

use super::entities::{Caller, UserId, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("Administrator role required")]
    AdminRequired,

    #[error("Only admins and agents can assign tickets")]
    StaffRequired,

    #[error("Only the ticket creator, its assignee or an admin can do this")]
    NotTicketParticipant,

    #[error("Only the ticket creator or an admin can delete this ticket")]
    NotTicketOwner,
}

impl PolicyViolation {
    pub fn code(&self) -> &'static str {
        match self {
            PolicyViolation::AdminRequired => "ADMIN_REQUIRED",
            PolicyViolation::StaffRequired
            | PolicyViolation::NotTicketParticipant
            | PolicyViolation::NotTicketOwner => "FORBIDDEN",
        }
    }
}

/// Who owns a ticket, as far as access decisions are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketOwnership {
    pub created_by: UserId,
    pub assigned_to: Option<UserId>,
}

impl TicketOwnership {
    fn is_creator(&self, caller: &Caller) -> bool {
        self.created_by == caller.id
    }

    fn is_assignee(&self, caller: &Caller) -> bool {
        self.assigned_to == Some(caller.id)
    }
}

pub fn require_admin(caller: &Caller) -> Result<(), PolicyViolation> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(PolicyViolation::AdminRequired)
    }
}

pub fn can_update_ticket(
    caller: &Caller,
    ticket: &TicketOwnership,
) -> Result<(), PolicyViolation> {
    if caller.is_admin() || ticket.is_creator(caller) || ticket.is_assignee(caller) {
        Ok(())
    } else {
        Err(PolicyViolation::NotTicketParticipant)
    }
}

// Assignees can work a ticket but not remove it.
pub fn can_delete_ticket(
    caller: &Caller,
    ticket: &TicketOwnership,
) -> Result<(), PolicyViolation> {
    if caller.is_admin() || ticket.is_creator(caller) {
        Ok(())
    } else {
        Err(PolicyViolation::NotTicketOwner)
    }
}

pub fn can_assign_tickets(caller: &Caller) -> Result<(), PolicyViolation> {
    match caller.role {
        UserRole::Admin | UserRole::Agent => Ok(()),
        UserRole::Customer => Err(PolicyViolation::StaffRequired),
    }
}

pub fn can_post_to_ticket(
    caller: &Caller,
    ticket: &TicketOwnership,
) -> Result<(), PolicyViolation> {
    can_update_ticket(caller, ticket)
}

/// Only agents take ticket assignments.
pub fn is_eligible_assignee(role: UserRole) -> bool {
    role == UserRole::Agent
}
