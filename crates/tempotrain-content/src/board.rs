//! The personal ticket board.
//!
//! A small kanban held entirely in memory: every run starts from the seeded
//! board, and changes live only for the duration of the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kanban column, displayed with its French label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Todo,
    InProgress,
    Done,
}

impl TicketStatus {
    /// Columns in board order.
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Todo,
        TicketStatus::InProgress,
        TicketStatus::Done,
    ];
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Todo => write!(f, "À faire"),
            TicketStatus::InProgress => write!(f, "En cours"),
            TicketStatus::Done => write!(f, "Terminé"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" | "a-faire" | "à faire" => Ok(TicketStatus::Todo),
            "in-progress" | "en-cours" | "en cours" => Ok(TicketStatus::InProgress),
            "done" | "termine" | "terminé" => Ok(TicketStatus::Done),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// One ticket on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub title: String,
    pub priority: Priority,
    pub theme: String,
    pub status: TicketStatus,
    /// Free-form time estimate ("1h30", "45min", ...).
    pub estimate: String,
}

/// Board counters shown above the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Errors from board mutations.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("ticket title must not be empty")]
    EmptyTitle,

    #[error("no ticket with id {0}")]
    UnknownTicket(u32),
}

/// Ticket themes offered when creating a ticket.
pub const TICKET_THEMES: [&str; 9] = [
    "Congés Payés",
    "RTT",
    "TransGP",
    "Astreintes",
    "Paramétrage GTA",
    "Création de rapports",
    "Support client GTA",
    "Intégration paie",
    "Heures supplémentaires",
];

/// The kanban board.
#[derive(Debug, Clone)]
pub struct TicketBoard {
    tickets: Vec<Ticket>,
    next_id: u32,
}

impl Default for TicketBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: 1,
        }
    }

    /// The board every run starts from.
    pub fn seeded() -> Self {
        let seed = [
            ("Anomalie compteur CP salarié #4521", Priority::High, "Congés Payés", TicketStatus::InProgress, "1h30"),
            ("Paramétrage RTT nouveau client", Priority::Medium, "RTT", TicketStatus::Todo, "2h"),
            ("Transfert GTA entité Lyon", Priority::High, "TransGP", TicketStatus::InProgress, "3h"),
            ("Correction rapport heures sup", Priority::Low, "Création de rapports", TicketStatus::Done, "45min"),
            ("Mise à jour règles astreinte", Priority::Medium, "Astreintes", TicketStatus::Todo, "1h"),
            ("Vérification intégration paie mars", Priority::Medium, "Intégration paie", TicketStatus::Todo, "2h"),
            ("Réponse client anomalie pointage", Priority::High, "Support client GTA", TicketStatus::Done, "30min"),
        ];

        let tickets: Vec<Ticket> = seed
            .into_iter()
            .enumerate()
            .map(|(i, (title, priority, theme, status, estimate))| Ticket {
                id: i as u32 + 1,
                title: title.into(),
                priority,
                theme: theme.into(),
                status,
                estimate: estimate.into(),
            })
            .collect();

        let next_id = tickets.len() as u32 + 1;
        Self { tickets, next_id }
    }

    /// Add a ticket to the "À faire" column. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] for a blank title.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        priority: Priority,
        theme: impl Into<String>,
        estimate: impl Into<String>,
    ) -> Result<u32, BoardError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tickets.push(Ticket {
            id,
            title,
            priority,
            theme: theme.into(),
            status: TicketStatus::Todo,
            estimate: estimate.into(),
        });
        Ok(id)
    }

    /// Move a ticket to another column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTicket`] if no ticket has this id.
    pub fn move_ticket(&mut self, id: u32, status: TicketStatus) -> Result<(), BoardError> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::UnknownTicket(id))?;
        ticket.status = status;
        Ok(())
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Tickets in one column, in insertion order.
    pub fn column(&self, status: TicketStatus) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.status == status).collect()
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total: self.tickets.len(),
            in_progress: self.column(TicketStatus::InProgress).len(),
            done: self.column(TicketStatus::Done).len(),
        }
    }
}
